//! Renderer-independent content tree and the builder DSL that produces it.

mod blocks;
mod builder;
mod node;
mod style;

pub use blocks::{BlockOptions, compare_names, group_by_name, sort_groups};
pub use builder::{Attrs, DivergentBuilder, DivergentInstanceBuilder, DocumentableContentBuilder, PageContentBuilder, TableBuilder};
pub use node::{ContentBody, ContentExtra, ContentKind, ContentNode, Dci, SymbolAnchor};
pub use style::Style;
