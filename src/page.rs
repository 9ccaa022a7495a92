//! Page tree produced by translation.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::content::ContentNode;
use crate::model::{Documentable, Documented, Dri, SourceSets};

/// What a page documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
	/// A module.
	Module,
	/// A package.
	Package,
	/// A classlike or an enum entry.
	Classlike,
	/// A function or a property.
	Member,
}

/// One page of the documentation tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
	/// What the page documents.
	pub kind: PageKind,
	/// Display name, clash-aware for renamed variants.
	pub name: String,
	/// Content tree.
	pub content: ContentNode,
	/// Symbols the page documents; a singleton unless variants were merged with differing DRIs.
	pub dri: BTreeSet<Dri>,
	/// Documentables shown on the page, one per platform variant.
	pub documentables: Vec<Documentable>,
	/// Child pages.
	#[serde(default)]
	pub children: Vec<Page>,
}

impl Page {
	/// Page without children.
	pub fn new(kind: PageKind, name: impl Into<String>, content: ContentNode, dri: BTreeSet<Dri>, documentables: Vec<Documentable>) -> Self {
		Self {
			kind,
			name: name.into(),
			content,
			dri,
			documentables,
			children: Vec::new(),
		}
	}

	/// Replace the children.
	pub fn with_children(mut self, children: Vec<Page>) -> Self {
		self.children = children;
		self
	}

	/// First DRI of the page.
	pub fn primary_dri(&self) -> Option<&Dri> {
		self.dri.iter().next()
	}

	/// Union of the source sets of the page's documentables.
	pub fn source_sets(&self) -> SourceSets {
		self.documentables
			.iter()
			.flat_map(|documentable| documentable.source_sets().iter().cloned())
			.collect()
	}

	/// Visit the page and its descendants in pre-order.
	pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Page)) {
		visit(self);
		for child in &self.children {
			child.walk(visit);
		}
	}

	/// Direct child with the given name.
	pub fn child_named(&self, name: &str) -> Option<&Page> {
		self.children.iter().find(|child| child.name == name)
	}
}
