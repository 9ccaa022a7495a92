use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
	/// Presentation hints a renderer may honour.
	#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
	pub struct Style: u32 {
		/// First cell of a table row.
		const ROW_TITLE = 1 << 0;
		/// Children are shown as tabs.
		const TABBED_CONTENT = 1 << 1;
		/// Group carries attributes such as a section header.
		const WITH_EXTRA_ATTRIBUTES = 1 << 2;
		/// Sample that may be executed in place.
		const RUNNABLE_SAMPLE = 1 << 3;
		/// Section rendered from a documentation tag.
		const KDOC_TAG = 1 << 4;
		/// Block-level element.
		const BLOCK = 1 << 5;
		/// Paragraph.
		const PARAGRAPH = 1 << 6;
		/// Fixed-width font.
		const MONOSPACE = 1 << 7;
		/// Page title.
		const COVER = 1 << 8;
		/// Text directly under the page title.
		const UNDER_COVER_TEXT = 1 << 9;
		/// Underlined text.
		const UNDERLINED = 1 << 10;
		/// Bold text.
		const BOLD = 1 << 11;
		/// Italic text.
		const ITALIC = 1 << 12;
	}
}
