use std::fmt;

use serde::{Deserialize, Serialize};

use super::dri::Dri;

/// Comment body tree produced by the upstream comment parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DocTag {
	/// Top-level container of a tag body.
	Root {
		/// Body nodes.
		children: Vec<DocTag>,
	},
	/// Paragraph of inline content.
	Paragraph {
		/// Inline nodes.
		children: Vec<DocTag>,
	},
	/// Plain text run.
	Text {
		/// The text itself.
		body: String,
	},
	/// Strong emphasis.
	Bold {
		/// Emphasised nodes.
		children: Vec<DocTag>,
	},
	/// Emphasis.
	Italic {
		/// Emphasised nodes.
		children: Vec<DocTag>,
	},
	/// Inline code span.
	CodeInline {
		/// Code nodes.
		children: Vec<DocTag>,
	},
	/// Fenced code block.
	CodeBlock {
		/// Language of the block, when annotated.
		#[serde(default, skip_serializing_if = "Option::is_none")]
		language: Option<String>,
		/// Code nodes.
		children: Vec<DocTag>,
	},
	/// Resolved link to another symbol.
	Link {
		/// Target symbol.
		address: Dri,
		/// Link label nodes.
		children: Vec<DocTag>,
	},
	/// Hard line break.
	Break,
}

impl DocTag {
	/// A root holding one paragraph with the given text.
	pub fn plain(text: impl Into<String>) -> Self {
		Self::Root {
			children: vec![Self::Paragraph {
				children: vec![Self::Text { body: text.into() }],
			}],
		}
	}

	/// Child nodes; empty for leaves.
	pub fn children(&self) -> &[DocTag] {
		match self {
			Self::Root { children }
			| Self::Paragraph { children }
			| Self::Bold { children }
			| Self::Italic { children }
			| Self::CodeInline { children }
			| Self::CodeBlock { children, .. }
			| Self::Link { children, .. } => children,
			Self::Text { .. } | Self::Break => &[],
		}
	}

	/// Whether the node carries no content at all.
	pub fn is_empty(&self) -> bool {
		match self {
			Self::Text { body } => body.is_empty(),
			Self::Break => false,
			_ => self.children().is_empty(),
		}
	}

	/// Concatenated text of the subtree.
	pub fn plain_text(&self) -> String {
		let mut out = String::new();
		self.collect_text(&mut out);
		out
	}

	fn collect_text(&self, out: &mut String) {
		match self {
			Self::Text { body } => out.push_str(body),
			Self::Break => out.push('\n'),
			_ => self.children().iter().for_each(|child| child.collect_text(out)),
		}
	}

	/// First paragraph of the body, or the node itself when it holds no paragraph.
	pub fn first_paragraph(&self) -> &DocTag {
		self.find_paragraph().unwrap_or(self)
	}

	fn find_paragraph(&self) -> Option<&DocTag> {
		if matches!(self, Self::Paragraph { .. }) {
			return Some(self);
		}
		self.children().iter().find_map(Self::find_paragraph)
	}
}

/// Discriminant of a [`TagWrapper`], used to group tags across source sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TagKind {
	/// Main description.
	Description,
	/// `@constructor`
	Constructor,
	/// `@property`
	Property,
	/// `@param`
	Param,
	/// `@see`
	See,
	/// `@throws` / `@exception`
	Throws,
	/// `@sample`
	Sample,
	/// Any tag the parser does not know.
	Custom,
	/// `@author`
	Author,
	/// `@version`
	Version,
	/// `@since`
	Since,
	/// `@return`
	Return,
	/// `@receiver`
	Receiver,
}

impl TagKind {
	/// Header text for sections built from this kind.
	pub fn label(self) -> &'static str {
		match self {
			Self::Description => "Description",
			Self::Constructor => "Constructor",
			Self::Property => "Property",
			Self::Param => "Param",
			Self::See => "See",
			Self::Throws => "Throws",
			Self::Sample => "Sample",
			Self::Custom => "Custom",
			Self::Author => "Author",
			Self::Version => "Version",
			Self::Since => "Since",
			Self::Return => "Return",
			Self::Receiver => "Receiver",
		}
	}

	/// Whether tags of this kind carry a subject name.
	pub fn is_named(self) -> bool {
		matches!(
			self,
			Self::Property | Self::Param | Self::See | Self::Throws | Self::Sample | Self::Custom
		)
	}

	/// Kinds rendered by dedicated sections rather than the generic unnamed-tag section.
	pub fn is_special(self) -> bool {
		matches!(
			self,
			Self::Property | Self::Description | Self::Constructor | Self::Param | Self::See
		)
	}
}

impl fmt::Display for TagKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

/// One documentation tag of a comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tag", rename_all = "snake_case")]
pub enum TagWrapper {
	/// Tag without a subject.
	Unnamed {
		/// Which unnamed tag this is.
		kind: TagKind,
		/// Tag body.
		root: DocTag,
	},
	/// Tag naming a parameter, property, sample or custom tag.
	Named {
		/// Which named tag this is.
		kind: TagKind,
		/// Subject of the tag.
		name: String,
		/// Tag body.
		root: DocTag,
	},
	/// `@see` reference.
	See {
		/// Referenced name as written.
		name: String,
		/// Resolved target, when resolution succeeded.
		#[serde(default, skip_serializing_if = "Option::is_none")]
		address: Option<Dri>,
		/// Tag body.
		root: DocTag,
	},
	/// `@throws` clause.
	Throws {
		/// Exception name as written.
		name: String,
		/// Resolved exception class, when resolution succeeded.
		#[serde(default, skip_serializing_if = "Option::is_none")]
		exception_address: Option<Dri>,
		/// Tag body.
		root: DocTag,
	},
}

impl TagWrapper {
	/// Main description tag.
	pub fn description(root: DocTag) -> Self {
		Self::Unnamed {
			kind: TagKind::Description,
			root,
		}
	}

	/// Unnamed supplementary tag such as `@since`.
	pub fn unnamed(kind: TagKind, root: DocTag) -> Self {
		Self::Unnamed { kind, root }
	}

	/// Named tag such as `@param name`.
	///
	/// `See` and `Throws` kinds become unresolved [`TagWrapper::See`] and
	/// [`TagWrapper::Throws`] tags.
	pub fn named(kind: TagKind, name: impl Into<String>, root: DocTag) -> Self {
		match kind {
			TagKind::See => Self::see(name, None, root),
			TagKind::Throws => Self::throws(name, None, root),
			kind => Self::Named {
				kind,
				name: name.into(),
				root,
			},
		}
	}

	/// `@see` tag.
	pub fn see(name: impl Into<String>, address: Option<Dri>, root: DocTag) -> Self {
		Self::See {
			name: name.into(),
			address,
			root,
		}
	}

	/// `@throws` tag.
	pub fn throws(name: impl Into<String>, exception_address: Option<Dri>, root: DocTag) -> Self {
		Self::Throws {
			name: name.into(),
			exception_address,
			root,
		}
	}

	/// Grouping discriminant.
	pub fn kind(&self) -> TagKind {
		match self {
			Self::Unnamed { kind, .. } | Self::Named { kind, .. } => *kind,
			Self::See { .. } => TagKind::See,
			Self::Throws { .. } => TagKind::Throws,
		}
	}

	/// Subject name of named tags.
	pub fn name(&self) -> Option<&str> {
		match self {
			Self::Unnamed { .. } => None,
			Self::Named { name, .. } | Self::See { name, .. } | Self::Throws { name, .. } => Some(name),
		}
	}

	/// Resolved target of a `@see` or `@throws` tag.
	pub fn address(&self) -> Option<&Dri> {
		match self {
			Self::See { address, .. } => address.as_ref(),
			Self::Throws { exception_address, .. } => exception_address.as_ref(),
			Self::Unnamed { .. } | Self::Named { .. } => None,
		}
	}

	/// Tag body.
	pub fn root(&self) -> &DocTag {
		match self {
			Self::Unnamed { root, .. } | Self::Named { root, .. } | Self::See { root, .. } | Self::Throws { root, .. } => root,
		}
	}

	/// Whether the body has no children.
	pub fn is_empty(&self) -> bool {
		self.root().children().is_empty()
	}
}

/// Parsed comment of one declaration on one source set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentationNode {
	/// Tags in source order.
	pub children: Vec<TagWrapper>,
}

impl DocumentationNode {
	/// Wrap a list of tags.
	pub fn new(children: Vec<TagWrapper>) -> Self {
		Self { children }
	}

	/// First tag of the given kind.
	pub fn first_of(&self, kind: TagKind) -> Option<&TagWrapper> {
		self.children.iter().find(|tag| tag.kind() == kind)
	}
}

impl FromIterator<TagWrapper> for DocumentationNode {
	fn from_iter<I: IntoIterator<Item = TagWrapper>>(iter: I) -> Self {
		Self::new(iter.into_iter().collect())
	}
}
