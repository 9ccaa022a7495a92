use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::style::Style;
use crate::model::{Dri, SourceSets};

/// Semantic role of a content node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ContentKind {
	/// Function listings.
	Functions,
	/// Property listings.
	Properties,
	/// Parameter tables.
	Parameters,
	/// Type listings.
	Classlikes,
	/// Constructor listings.
	Constructors,
	/// Extension listings.
	Extensions,
	/// Inheritor tables.
	Inheritors,
	/// Package listings.
	Packages,
	/// Page title area.
	Cover,
	/// Rendered documentation.
	Comment,
	/// One-paragraph summary of documentation.
	BriefComment,
	/// Code samples.
	Sample,
	/// Anything else.
	#[default]
	Main,
	/// Declaration signatures.
	Symbol,
	/// Content that differs per source set.
	SourceSetDependentHint,
	/// Placeholder without content.
	Empty,
}

/// DRIs and kind a node was derived from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dci {
	/// Symbols the node describes.
	pub dri: BTreeSet<Dri>,
	/// Semantic role.
	pub kind: ContentKind,
}

impl Dci {
	/// Build a DCI from its parts.
	pub fn new(dri: BTreeSet<Dri>, kind: ContentKind) -> Self {
		Self { dri, kind }
	}
}

/// Anchor a renderer can link to inside a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolAnchor {
	/// Anchor name.
	pub name: String,
	/// Kind of the block the anchor lives in.
	pub kind: ContentKind,
}

/// Extra attributes of a content node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentExtra {
	/// Section header the node belongs to.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub header: Option<String>,
	/// Anchor for the node.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub anchor: Option<SymbolAnchor>,
}

impl ContentExtra {
	/// Extra with just a section header.
	pub fn header(header: impl Into<String>) -> Self {
		Self::default().with_header(header)
	}

	/// Set the section header.
	pub fn with_header(mut self, header: impl Into<String>) -> Self {
		self.header = Some(header.into());
		self
	}

	/// Set the anchor.
	pub fn with_anchor(mut self, name: impl Into<String>, kind: ContentKind) -> Self {
		self.anchor = Some(SymbolAnchor { name: name.into(), kind });
		self
	}
}

/// Payload of a content node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBody {
	/// Plain container.
	Group {
		/// Child nodes.
		children: Vec<ContentNode>,
	},
	/// Section header.
	Header {
		/// Heading level, 1 being the page title.
		level: u8,
		/// Header content.
		children: Vec<ContentNode>,
	},
	/// Text run.
	Text {
		/// The text.
		text: String,
	},
	/// Link to a symbol.
	Link {
		/// Target symbol.
		address: Dri,
		/// Link label.
		children: Vec<ContentNode>,
	},
	/// Table with optional header cells.
	Table {
		/// Header cells.
		header: Vec<ContentNode>,
		/// Rows, each a group of cells.
		rows: Vec<ContentNode>,
	},
	/// Content that differs between platform variants of the same symbol.
	DivergentGroup {
		/// Identifier of the group, e.g. `member` or a block name.
		group_id: String,
		/// One instance per variant.
		instances: Vec<ContentNode>,
		/// Whether the renderer may derive platform hints from the instances.
		implicitly_source_set_hinted: bool,
	},
	/// One variant of a divergent group.
	DivergentInstance {
		/// Content shown before the divergent part.
		#[serde(default, skip_serializing_if = "Option::is_none")]
		before: Option<Box<ContentNode>>,
		/// The part that differs between variants.
		divergent: Box<ContentNode>,
		/// Content shown after the divergent part.
		#[serde(default, skip_serializing_if = "Option::is_none")]
		after: Option<Box<ContentNode>>,
	},
	/// Content annotated with the platforms it applies to.
	PlatformHinted {
		/// Hinted content.
		inner: Box<ContentNode>,
	},
	/// Code block.
	CodeBlock {
		/// Language, when known.
		#[serde(default, skip_serializing_if = "Option::is_none")]
		language: Option<String>,
		/// Code content.
		children: Vec<ContentNode>,
	},
	/// Inline code.
	CodeInline {
		/// Code content.
		children: Vec<ContentNode>,
	},
	/// Line break.
	Break,
}

/// Node of the renderer-independent content tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentNode {
	/// Origin and role.
	pub dci: Dci,
	/// Source sets the node applies to.
	pub source_sets: SourceSets,
	/// Presentation hints.
	#[serde(default)]
	pub style: Style,
	/// Extra attributes.
	#[serde(default)]
	pub extra: ContentExtra,
	/// Payload.
	#[serde(flatten)]
	pub body: ContentBody,
}

impl ContentNode {
	/// Assemble a node from its parts.
	pub fn new(dci: Dci, source_sets: SourceSets, style: Style, extra: ContentExtra, body: ContentBody) -> Self {
		Self {
			dci,
			source_sets,
			style,
			extra,
			body,
		}
	}

	/// Container node.
	pub fn group(children: Vec<ContentNode>, dci: Dci, source_sets: SourceSets, style: Style, extra: ContentExtra) -> Self {
		Self::new(dci, source_sets, style, extra, ContentBody::Group { children })
	}

	/// Text run.
	pub fn text(text: impl Into<String>, dci: Dci, source_sets: SourceSets, style: Style) -> Self {
		Self::new(dci, source_sets, style, ContentExtra::default(), ContentBody::Text { text: text.into() })
	}

	/// Direct children in render order.
	pub fn children(&self) -> Vec<&ContentNode> {
		match &self.body {
			ContentBody::Group { children }
			| ContentBody::Header { children, .. }
			| ContentBody::Link { children, .. }
			| ContentBody::CodeBlock { children, .. }
			| ContentBody::CodeInline { children } => children.iter().collect(),
			ContentBody::Table { header, rows } => header.iter().chain(rows).collect(),
			ContentBody::DivergentGroup { instances, .. } => instances.iter().collect(),
			ContentBody::DivergentInstance { before, divergent, after } => before
				.as_deref()
				.into_iter()
				.chain(std::iter::once(divergent.as_ref()))
				.chain(after.as_deref())
				.collect(),
			ContentBody::PlatformHinted { inner } => vec![inner.as_ref()],
			ContentBody::Text { .. } | ContentBody::Break => Vec::new(),
		}
	}

	/// Consume the node, returning the children of a group body; other bodies yield nothing.
	pub fn into_children(self) -> Vec<ContentNode> {
		match self.body {
			ContentBody::Group { children } => children,
			_ => Vec::new(),
		}
	}

	/// Visit the node and every descendant in pre-order.
	pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a ContentNode)) {
		visit(self);
		for child in self.children() {
			child.walk(visit);
		}
	}

	/// Descendants (including the node itself) matching a predicate, in pre-order.
	pub fn find_all(&self, predicate: impl Fn(&ContentNode) -> bool) -> Vec<&ContentNode> {
		let mut found = Vec::new();
		self.walk(&mut |node| {
			if predicate(node) {
				found.push(node);
			}
		});
		found
	}

	/// Every text run of the subtree, in pre-order.
	pub fn texts(&self) -> Vec<&str> {
		let mut texts = Vec::new();
		self.walk(&mut |node| {
			if let ContentBody::Text { text } = &node.body {
				texts.push(text.as_str());
			}
		});
		texts
	}

	/// Concatenated text of the subtree.
	pub fn plain_text(&self) -> String {
		self.texts().concat()
	}

	/// Tables whose section header attribute equals `header`.
	pub fn tables_with_header(&self, header: &str) -> Vec<&ContentNode> {
		self.find_all(|node| matches!(node.body, ContentBody::Table { .. }) && node.extra.header.as_deref() == Some(header))
	}

	/// Header nodes, as `(level, text)` pairs.
	pub fn headers(&self) -> Vec<(u8, String)> {
		let mut headers = Vec::new();
		self.walk(&mut |node| {
			if let ContentBody::Header { level, .. } = &node.body {
				headers.push((*level, node.plain_text()));
			}
		});
		headers
	}

	/// Rows of a table body; empty for other bodies.
	pub fn rows(&self) -> &[ContentNode] {
		match &self.body {
			ContentBody::Table { rows, .. } => rows,
			_ => &[],
		}
	}
}
