use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Switches that change how the page tree is shaped.
///
/// Deserializes from the camelCase JSON a plugin configuration block would carry; missing
/// keys fall back to their defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageCreatorConfig {
	/// Collapse platform variants sharing a DRI into one page instead of renaming them.
	pub merge_implicit_expect_actual_declarations: bool,
	/// List inherited functions and properties in their own blocks.
	pub separate_inherited_members: bool,
}

impl PageCreatorConfig {
	/// Parse a configuration from JSON.
	pub fn from_json(json: &str) -> Result<Self> {
		Ok(serde_json::from_str(json)?)
	}

	/// Set whether clashing declarations are merged.
	pub fn with_merge_implicit_expect_actual_declarations(mut self, merge: bool) -> Self {
		self.merge_implicit_expect_actual_declarations = merge;
		self
	}

	/// Set whether inherited members get separate blocks.
	pub fn with_separate_inherited_members(mut self, separate: bool) -> Self {
		self.separate_inherited_members = separate;
		self
	}
}
