//! Closure-driven builder for content trees.
//!
//! Every builder carries "main" defaults (DRIs, source sets, style, extra) inherited from the
//! enclosing node; [`Attrs`] overrides them per call.

use std::collections::BTreeSet;

use super::node::{ContentBody, ContentExtra, ContentKind, ContentNode, Dci};
use super::style::Style;
use crate::model::{DocTag, DocumentableRef, Documented, Dri, SourceSet, SourceSets};
use crate::providers::{CommentsToContentConverter, DefaultSignatureProvider, DocTagConverter, SignatureProvider};

/// Per-call overrides of a builder's main defaults.
#[derive(Debug, Clone, Default)]
pub struct Attrs {
	dri: Option<BTreeSet<Dri>>,
	source_sets: Option<SourceSets>,
	kind: Option<ContentKind>,
	style: Option<Style>,
	extra: Option<ContentExtra>,
}

impl Attrs {
	/// No overrides.
	pub fn new() -> Self {
		Self::default()
	}

	/// Override the DRIs.
	pub fn dri(mut self, dri: BTreeSet<Dri>) -> Self {
		self.dri = Some(dri);
		self
	}

	/// Override the DRIs with a single one.
	pub fn single_dri(self, dri: &Dri) -> Self {
		self.dri(BTreeSet::from([dri.clone()]))
	}

	/// Override the source sets.
	pub fn source_sets(mut self, source_sets: SourceSets) -> Self {
		self.source_sets = Some(source_sets);
		self
	}

	/// Restrict to one source set.
	pub fn source_set(self, source_set: &SourceSet) -> Self {
		self.source_sets(SourceSets::from([source_set.clone()]))
	}

	/// Override the kind.
	pub fn kind(mut self, kind: ContentKind) -> Self {
		self.kind = Some(kind);
		self
	}

	/// Override the style.
	pub fn style(mut self, style: Style) -> Self {
		self.style = Some(style);
		self
	}

	/// Override the extra attributes.
	pub fn extra(mut self, extra: ContentExtra) -> Self {
		self.extra = Some(extra);
		self
	}
}

/// Fully resolved attributes of one node.
struct Resolved {
	dri: BTreeSet<Dri>,
	source_sets: SourceSets,
	kind: ContentKind,
	style: Style,
	extra: ContentExtra,
}

impl Resolved {
	fn dci(&self) -> Dci {
		Dci::new(self.dri.clone(), self.kind)
	}
}

/// Main defaults shared by the builders of one subtree.
#[derive(Clone)]
struct Main {
	dri: BTreeSet<Dri>,
	source_sets: SourceSets,
	style: Style,
	extra: ContentExtra,
}

impl Main {
	fn resolve(&self, attrs: Attrs, kind: ContentKind) -> Resolved {
		Resolved {
			dri: attrs.dri.unwrap_or_else(|| self.dri.clone()),
			source_sets: attrs.source_sets.unwrap_or_else(|| self.source_sets.clone()),
			kind: attrs.kind.unwrap_or(kind),
			style: attrs.style.unwrap_or(self.style),
			extra: attrs.extra.unwrap_or_else(|| self.extra.clone()),
		}
	}
}

/// Entry point of the content DSL, holding the collaborators used while building.
pub struct PageContentBuilder {
	converter: Box<dyn CommentsToContentConverter>,
	signatures: Box<dyn SignatureProvider>,
}

impl Default for PageContentBuilder {
	fn default() -> Self {
		Self::new(Box::new(DocTagConverter), Box::new(DefaultSignatureProvider))
	}
}

impl PageContentBuilder {
	/// Create a builder from its collaborators.
	pub fn new(converter: Box<dyn CommentsToContentConverter>, signatures: Box<dyn SignatureProvider>) -> Self {
		Self { converter, signatures }
	}

	/// Replace the comment converter.
	pub fn with_converter(mut self, converter: Box<dyn CommentsToContentConverter>) -> Self {
		self.converter = converter;
		self
	}

	/// Replace the signature provider.
	pub fn with_signature_provider(mut self, signatures: Box<dyn SignatureProvider>) -> Self {
		self.signatures = signatures;
		self
	}

	/// Build a root group for `dri` on `source_sets`, populated by `build`.
	///
	/// `attrs` may override kind, style and extra; its DRI and source set overrides are ignored.
	pub fn content_for<'a>(
		&'a self,
		dri: BTreeSet<Dri>,
		source_sets: SourceSets,
		attrs: Attrs,
		build: impl FnOnce(&mut DocumentableContentBuilder<'a>),
	) -> ContentNode {
		let main = Main {
			dri,
			source_sets,
			style: attrs.style.unwrap_or_default(),
			extra: attrs.extra.clone().unwrap_or_default(),
		};
		let kind = attrs.kind.unwrap_or(ContentKind::Main);
		let mut builder = DocumentableContentBuilder::new(self, main);
		build(&mut builder);
		builder.build(kind)
	}

	/// [`content_for`](Self::content_for) keyed by one documentable; `attrs` may narrow its source sets.
	pub fn content_for_documentable<'a>(
		&'a self,
		documentable: &dyn Documented,
		attrs: Attrs,
		build: impl FnOnce(&mut DocumentableContentBuilder<'a>),
	) -> ContentNode {
		let source_sets = attrs
			.source_sets
			.clone()
			.unwrap_or_else(|| documentable.source_sets().clone());
		self.content_for(BTreeSet::from([documentable.dri().clone()]), source_sets, attrs, build)
	}
}

/// Accumulates the children of one content group.
pub struct DocumentableContentBuilder<'a> {
	ctx: &'a PageContentBuilder,
	main: Main,
	contents: Vec<ContentNode>,
}

impl<'a> DocumentableContentBuilder<'a> {
	fn new(ctx: &'a PageContentBuilder, main: Main) -> Self {
		Self {
			ctx,
			main,
			contents: Vec::new(),
		}
	}

	fn child(&self, resolved: &Resolved) -> Self {
		Self::new(
			self.ctx,
			Main {
				dri: resolved.dri.clone(),
				source_sets: resolved.source_sets.clone(),
				style: resolved.style,
				extra: resolved.extra.clone(),
			},
		)
	}

	fn build(self, kind: ContentKind) -> ContentNode {
		ContentNode::group(
			self.contents,
			Dci::new(self.main.dri, kind),
			self.main.source_sets,
			self.main.style,
			self.main.extra,
		)
	}

	/// DRIs of the enclosing node.
	pub fn main_dri(&self) -> &BTreeSet<Dri> {
		&self.main.dri
	}

	/// Style of the enclosing node.
	pub fn main_style(&self) -> Style {
		self.main.style
	}

	/// Extra attributes of the enclosing node.
	pub fn main_extra(&self) -> &ContentExtra {
		&self.main.extra
	}

	/// Append a prebuilt node.
	pub fn push(&mut self, node: ContentNode) {
		self.contents.push(node);
	}

	/// Append prebuilt nodes.
	pub fn extend(&mut self, nodes: impl IntoIterator<Item = ContentNode>) {
		self.contents.extend(nodes);
	}

	/// Header of the given level labelled `text`; `build` may add more header content.
	pub fn header(&mut self, level: u8, text: &str, attrs: Attrs, build: impl FnOnce(&mut Self)) {
		let attrs = match attrs.extra {
			Some(_) => attrs,
			None => {
				let extra = self.main.extra.clone().with_header(text);
				attrs.extra(extra)
			}
		};
		let resolved = self.main.resolve(attrs, ContentKind::Main);
		let mut inner = self.child(&resolved);
		inner.text(text, Attrs::new().kind(resolved.kind));
		build(&mut inner);
		let label = inner.build(resolved.kind);
		self.contents.push(ContentNode::new(
			resolved.dci(),
			resolved.source_sets,
			resolved.style,
			resolved.extra,
			ContentBody::Header {
				level,
				children: vec![label],
			},
		));
	}

	/// Page title.
	pub fn cover(&mut self, text: &str, attrs: Attrs) {
		let attrs = match attrs.style {
			Some(_) => attrs,
			None => {
				let style = self.main.style | Style::COVER;
				attrs.style(style)
			}
		};
		self.header(1, text, attrs, |_| {});
	}

	/// Text run.
	pub fn text(&mut self, text: &str, attrs: Attrs) {
		let resolved = self.main.resolve(attrs, ContentKind::Main);
		self.contents.push(ContentNode::new(
			resolved.dci(),
			resolved.source_sets,
			resolved.style,
			resolved.extra,
			ContentBody::Text { text: text.to_string() },
		));
	}

	/// Link labelled `text` pointing at `address`.
	pub fn link(&mut self, text: &str, address: &Dri, attrs: Attrs) {
		let attrs = match attrs.dri {
			Some(_) => attrs,
			None => attrs.single_dri(address),
		};
		let resolved = self.main.resolve(attrs, ContentKind::Main);
		let mut label = self.child(&resolved);
		label.text(text, Attrs::new().kind(resolved.kind));
		self.contents.push(ContentNode::new(
			resolved.dci(),
			resolved.source_sets,
			resolved.style,
			resolved.extra,
			ContentBody::Link {
				address: address.clone(),
				children: label.contents,
			},
		));
	}

	/// Build a group without appending it.
	pub fn build_group(&self, attrs: Attrs, build: impl FnOnce(&mut Self)) -> ContentNode {
		let resolved = self.main.resolve(attrs, ContentKind::Main);
		let mut inner = self.child(&resolved);
		build(&mut inner);
		inner.build(resolved.kind)
	}

	/// Append a group populated by `build`.
	pub fn group(&mut self, attrs: Attrs, build: impl FnOnce(&mut Self)) {
		let node = self.build_group(attrs, build);
		self.contents.push(node);
	}

	/// Append a table populated through a [`TableBuilder`].
	pub fn table(&mut self, attrs: Attrs, build: impl FnOnce(&mut TableBuilder<'a>)) {
		let resolved = self.main.resolve(attrs, ContentKind::Main);
		let mut table = TableBuilder {
			ctx: self.ctx,
			main: Main {
				dri: resolved.dri.clone(),
				source_sets: resolved.source_sets.clone(),
				style: resolved.style,
				extra: resolved.extra.clone(),
			},
			kind: resolved.kind,
			header: Vec::new(),
			rows: Vec::new(),
		};
		build(&mut table);
		self.contents.push(table.build());
	}

	/// Append a divergent group identified by `group_id`.
	pub fn divergent_group(&mut self, group_id: &str, attrs: Attrs, build: impl FnOnce(&mut DivergentBuilder<'a>)) {
		let resolved = self.main.resolve(attrs, ContentKind::Main);
		let mut divergent = DivergentBuilder {
			ctx: self.ctx,
			main: Main {
				dri: resolved.dri.clone(),
				source_sets: resolved.source_sets.clone(),
				style: resolved.style,
				extra: resolved.extra.clone(),
			},
			instances: Vec::new(),
		};
		build(&mut divergent);
		let source_sets: SourceSets = divergent
			.instances
			.iter()
			.flat_map(|instance| instance.source_sets.iter().cloned())
			.collect();
		self.contents.push(ContentNode::new(
			resolved.dci(),
			source_sets,
			resolved.style,
			resolved.extra,
			ContentBody::DivergentGroup {
				group_id: group_id.to_string(),
				instances: divergent.instances,
				implicitly_source_set_hinted: true,
			},
		));
	}

	/// Append content tagged with the platforms it applies to.
	///
	/// Unlike other nodes the hint does not inherit the main style.
	pub fn source_set_dependent_hint(&mut self, attrs: Attrs, build: impl FnOnce(&mut Self)) {
		let attrs = match attrs.style {
			Some(_) => attrs,
			None => attrs.style(Style::empty()),
		};
		let resolved = self.main.resolve(attrs, ContentKind::Main);
		let mut inner = self.child(&resolved);
		build(&mut inner);
		let source_sets = resolved.source_sets.clone();
		let dci = resolved.dci();
		let inner = inner.build(resolved.kind);
		self.contents.push(ContentNode::new(
			dci,
			source_sets,
			Style::empty(),
			ContentExtra::default(),
			ContentBody::PlatformHinted { inner: Box::new(inner) },
		));
	}

	/// Append a documentation comment rendered through the comment converter.
	pub fn comment(&mut self, root: &DocTag, attrs: Attrs) {
		let resolved = self.main.resolve(attrs, ContentKind::Comment);
		let dci = resolved.dci();
		let children = self
			.ctx
			.converter
			.build_content(root, &dci, &resolved.source_sets, resolved.style, &resolved.extra);
		self.contents.push(ContentNode::group(
			children,
			dci,
			resolved.source_sets,
			resolved.style,
			resolved.extra,
		));
	}

	/// Append only the first paragraph of a documentation comment.
	pub fn first_paragraph_comment(&mut self, root: &DocTag, attrs: Attrs) {
		self.comment(root.first_paragraph(), attrs);
	}

	/// Signature nodes of a documentable, without appending them.
	pub fn build_signature(&self, documentable: DocumentableRef<'_>) -> Vec<ContentNode> {
		self.ctx.signatures.signature(documentable)
	}

	/// Append the signature of a documentable.
	pub fn signature(&mut self, documentable: DocumentableRef<'_>) {
		let nodes = self.build_signature(documentable);
		self.contents.extend(nodes);
	}
}

/// Builds one table.
pub struct TableBuilder<'a> {
	ctx: &'a PageContentBuilder,
	main: Main,
	kind: ContentKind,
	header: Vec<ContentNode>,
	rows: Vec<ContentNode>,
}

impl<'a> TableBuilder<'a> {
	/// Add a header cell group populated by `build`.
	pub fn header(&mut self, build: impl FnOnce(&mut DocumentableContentBuilder<'a>)) {
		let mut inner = DocumentableContentBuilder::new(self.ctx, self.main.clone());
		build(&mut inner);
		self.header.push(inner.build(self.kind));
	}

	/// Add a header holding one group per column label.
	pub fn header_columns(&mut self, labels: &[&str]) {
		self.header(|header| {
			for label in labels {
				header.group(Attrs::new(), |cell| cell.text(label, Attrs::new()));
			}
		});
	}

	/// Add a row populated by `build`.
	pub fn row(&mut self, attrs: Attrs, build: impl FnOnce(&mut DocumentableContentBuilder<'a>)) {
		let resolved = self.main.resolve(attrs, self.kind);
		let mut inner = DocumentableContentBuilder::new(
			self.ctx,
			Main {
				dri: resolved.dri,
				source_sets: resolved.source_sets,
				style: resolved.style,
				extra: resolved.extra,
			},
		);
		build(&mut inner);
		self.rows.push(inner.build(resolved.kind));
	}

	fn build(self) -> ContentNode {
		ContentNode::new(
			Dci::new(self.main.dri, self.kind),
			self.main.source_sets,
			self.main.style,
			self.main.extra,
			ContentBody::Table {
				header: self.header,
				rows: self.rows,
			},
		)
	}
}

/// Builds the instances of a divergent group.
pub struct DivergentBuilder<'a> {
	ctx: &'a PageContentBuilder,
	main: Main,
	instances: Vec<ContentNode>,
}

impl<'a> DivergentBuilder<'a> {
	/// Add one instance for `dri` on `source_sets`.
	pub fn instance(
		&mut self,
		dri: BTreeSet<Dri>,
		source_sets: SourceSets,
		attrs: Attrs,
		build: impl FnOnce(&mut DivergentInstanceBuilder<'a>),
	) {
		let resolved = self.main.resolve(attrs.dri(dri).source_sets(source_sets), ContentKind::Main);
		let mut instance = DivergentInstanceBuilder {
			ctx: self.ctx,
			main: Main {
				dri: resolved.dri.clone(),
				source_sets: resolved.source_sets.clone(),
				style: resolved.style,
				extra: resolved.extra.clone(),
			},
			before: None,
			divergent: None,
			after: None,
		};
		build(&mut instance);

		let divergent = instance.divergent.unwrap_or_else(|| {
			tracing::warn!(
				target: "docpage",
				dri = ?resolved.dri,
				"divergent instance has no divergent part, using an empty group"
			);
			ContentNode::group(
				Vec::new(),
				Dci::new(resolved.dri.clone(), ContentKind::Empty),
				resolved.source_sets.clone(),
				Style::empty(),
				ContentExtra::default(),
			)
		});

		self.instances.push(ContentNode::new(
			resolved.dci(),
			resolved.source_sets,
			resolved.style,
			resolved.extra,
			ContentBody::DivergentInstance {
				before: instance.before.map(Box::new),
				divergent: Box::new(divergent),
				after: instance.after.map(Box::new),
			},
		));
	}
}

/// Builds the parts of one divergent instance.
pub struct DivergentInstanceBuilder<'a> {
	ctx: &'a PageContentBuilder,
	main: Main,
	before: Option<ContentNode>,
	divergent: Option<ContentNode>,
	after: Option<ContentNode>,
}

impl<'a> DivergentInstanceBuilder<'a> {
	fn part(&self, attrs: Attrs, build: impl FnOnce(&mut DocumentableContentBuilder<'a>)) -> ContentNode {
		let resolved = self.main.resolve(attrs, ContentKind::Main);
		let mut inner = DocumentableContentBuilder::new(
			self.ctx,
			Main {
				dri: resolved.dri,
				source_sets: resolved.source_sets,
				style: resolved.style,
				extra: resolved.extra,
			},
		);
		build(&mut inner);
		inner.build(resolved.kind)
	}

	/// Content shown before the divergent part.
	pub fn before(&mut self, attrs: Attrs, build: impl FnOnce(&mut DocumentableContentBuilder<'a>)) {
		self.before = Some(self.part(attrs, build));
	}

	/// The platform-specific part.
	pub fn divergent(&mut self, attrs: Attrs, build: impl FnOnce(&mut DocumentableContentBuilder<'a>)) {
		self.divergent = Some(self.part(attrs, build));
	}

	/// Content shown after the divergent part.
	pub fn after(&mut self, attrs: Attrs, build: impl FnOnce(&mut DocumentableContentBuilder<'a>)) {
		self.after = Some(self.part(attrs, build));
	}
}
