//! Translation of documentables into pages and their content.

mod clash;
mod creator;
mod scope;
mod sections;
mod tags;

pub use clash::{clashed_name, expect_single_dri, group_by_dri, merge_clashing, name_after_clash, rename_clashing};
pub use creator::{PageCreator, ROOT_PAGE_NAME};
pub use scope::{collect_inheritors, split_inherited};
pub use tags::{GroupedTags, PerSourceSet, resolve_with_fallback};

/// Heading level of documentation tag sections ("Parameters", "Since", ...).
pub const TAG_HEADER_LEVEL: u8 = 4;
