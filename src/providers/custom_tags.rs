use crate::content::{Attrs, DocumentableContentBuilder, Style};
use crate::model::{SourceSet, TagKind, TagWrapper};

/// Renders custom documentation tags, e.g. `@apiNote`.
///
/// Providers are consulted for every custom tag; the description hook renders the full tag on
/// member pages, the brief hook contributes to summary rows.
pub trait CustomTagContentProvider {
	/// Whether the provider handles this tag.
	fn is_applicable(&self, tag: &TagWrapper) -> bool;

	/// Content shown on the tag owner's own page.
	fn content_for_description(&self, _builder: &mut DocumentableContentBuilder<'_>, _source_set: &SourceSet, _tag: &TagWrapper) {}

	/// Content shown in summary rows listing the tag owner.
	fn content_for_brief(&self, _builder: &mut DocumentableContentBuilder<'_>, _source_set: &SourceSet, _tag: &TagWrapper) {}
}

/// Renders one custom tag under a fixed header.
#[derive(Debug, Clone)]
pub struct HeaderedTagProvider {
	tag_name: String,
	header: String,
	show_in_brief: bool,
}

impl HeaderedTagProvider {
	/// Provider for `@tag_name`, shown under `header`.
	pub fn new(tag_name: impl Into<String>, header: impl Into<String>) -> Self {
		Self {
			tag_name: tag_name.into(),
			header: header.into(),
			show_in_brief: false,
		}
	}

	/// Also show the first paragraph of the tag in summary rows.
	pub fn with_brief(mut self, show_in_brief: bool) -> Self {
		self.show_in_brief = show_in_brief;
		self
	}
}

impl CustomTagContentProvider for HeaderedTagProvider {
	fn is_applicable(&self, tag: &TagWrapper) -> bool {
		tag.kind() == TagKind::Custom && tag.name() == Some(self.tag_name.as_str())
	}

	fn content_for_description(&self, builder: &mut DocumentableContentBuilder<'_>, source_set: &SourceSet, tag: &TagWrapper) {
		builder.header(
			crate::translate::TAG_HEADER_LEVEL,
			&self.header,
			Attrs::new().source_set(source_set).style(Style::empty()),
			|_| {},
		);
		builder.comment(tag.root(), Attrs::new().source_set(source_set));
	}

	fn content_for_brief(&self, builder: &mut DocumentableContentBuilder<'_>, source_set: &SourceSet, tag: &TagWrapper) {
		if self.show_in_brief {
			builder.first_paragraph_comment(tag.root(), Attrs::new().source_set(source_set));
		}
	}
}
