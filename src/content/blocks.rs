use std::cmp::Ordering;

use indexmap::IndexMap;

use super::builder::{Attrs, DocumentableContentBuilder};
use super::node::{ContentBody, ContentExtra, ContentKind, ContentNode, Dci};
use super::style::Style;
use crate::model::{Documented, SourceSets, dri_set, union_source_sets};

/// Knobs of [`DocumentableContentBuilder::multi_block`] and [`DocumentableContentBuilder::block`].
#[derive(Debug, Clone)]
pub struct BlockOptions {
	/// Sort rows by name.
	pub needs_sorting: bool,
	/// Attach a symbol anchor to every row.
	pub needs_anchors: bool,
	/// Prebuilt table header nodes.
	pub headers: Vec<ContentNode>,
	/// Extra attributes of the table and its rows; defaults to the builder's.
	pub extra: Option<ContentExtra>,
	/// Style of the table and its rows; defaults to the builder's.
	pub style: Option<Style>,
}

impl Default for BlockOptions {
	fn default() -> Self {
		Self {
			needs_sorting: true,
			needs_anchors: false,
			headers: Vec::new(),
			extra: None,
			style: None,
		}
	}
}

/// Case-insensitive name order with anonymous entries last; exact comparison breaks ties.
pub fn compare_names(a: Option<&str>, b: Option<&str>) -> Ordering {
	match (a, b) {
		(Some(a), Some(b)) => a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b)),
		(Some(_), None) => Ordering::Less,
		(None, Some(_)) => Ordering::Greater,
		(None, None) => Ordering::Equal,
	}
}

/// Group items by name, keeping first-seen order.
pub fn group_by_name<'t, T>(items: impl IntoIterator<Item = &'t T>) -> Vec<(Option<String>, Vec<&'t T>)>
where
	T: Documented + ?Sized + 't,
{
	let mut groups: IndexMap<Option<String>, Vec<&'t T>> = IndexMap::new();
	for item in items {
		groups.entry(item.name().map(str::to_string)).or_default().push(item);
	}
	groups.into_iter().collect()
}

/// Sort name groups with [`compare_names`]; the sort is stable.
pub fn sort_groups<T>(groups: &mut [(Option<String>, T)]) {
	groups.sort_by(|(a, _), (b, _)| compare_names(a.as_deref(), b.as_deref()));
}

impl<'a> DocumentableContentBuilder<'a> {
	/// Header plus a table with one row per name group.
	///
	/// Rows carry the DRIs and the source set union of their group; `row` fills each row.
	pub fn multi_block<'t, T>(
		&mut self,
		name: &str,
		level: u8,
		kind: ContentKind,
		mut groups: Vec<(Option<String>, Vec<&'t T>)>,
		source_sets: SourceSets,
		options: BlockOptions,
		mut row: impl FnMut(&mut DocumentableContentBuilder<'a>, Option<&str>, &[&'t T]),
	) where
		T: Documented + ?Sized + 't,
	{
		if groups.is_empty() {
			return;
		}
		self.header(level, name, Attrs::new().kind(kind), |_| {});

		if options.needs_sorting {
			sort_groups(&mut groups);
		}
		let style = options.style.unwrap_or(self.main_style());
		let extra = options.extra.clone().unwrap_or_else(|| self.main_extra().clone());

		let rows: Vec<ContentNode> = groups
			.iter()
			.map(|(key, items)| {
				let row_extra = match key {
					Some(key) if options.needs_anchors => extra.clone().with_anchor(key.as_str(), kind),
					_ => extra.clone(),
				};
				let attrs = Attrs::new()
					.dri(dri_set(items.iter().copied()))
					.source_sets(union_source_sets(items.iter().copied()))
					.kind(kind)
					.style(style)
					.extra(row_extra);
				self.build_group(attrs, |b| row(b, key.as_deref(), items))
			})
			.collect();

		self.push_table(kind, source_sets, style, extra, options.headers, rows);
	}

	/// Header plus a table with one row per element.
	pub fn block<'t, T>(
		&mut self,
		name: &str,
		level: u8,
		kind: ContentKind,
		elements: &'t [T],
		source_sets: SourceSets,
		options: BlockOptions,
		mut row: impl FnMut(&mut DocumentableContentBuilder<'a>, &'t T),
	) where
		T: Documented,
	{
		if elements.is_empty() {
			return;
		}
		self.header(level, name, Attrs::new().kind(kind), |_| {});

		let mut ordered: Vec<&T> = elements.iter().collect();
		if options.needs_sorting {
			ordered.sort_by(|a, b| compare_names(a.name(), b.name()));
		}
		let style = options.style.unwrap_or(self.main_style());
		let extra = options.extra.clone().unwrap_or_else(|| self.main_extra().clone());

		let rows: Vec<ContentNode> = ordered
			.into_iter()
			.map(|element| {
				let row_extra = match element.name() {
					Some(name) if options.needs_anchors => extra.clone().with_anchor(name, kind),
					_ => extra.clone(),
				};
				let attrs = Attrs::new()
					.single_dri(element.dri())
					.source_sets(element.source_sets().clone())
					.kind(kind)
					.style(style)
					.extra(row_extra);
				self.build_group(attrs, |b| row(b, element))
			})
			.collect();

		self.push_table(kind, source_sets, style, extra, options.headers, rows);
	}

	fn push_table(
		&mut self,
		kind: ContentKind,
		source_sets: SourceSets,
		style: Style,
		extra: ContentExtra,
		header: Vec<ContentNode>,
		rows: Vec<ContentNode>,
	) {
		let dci = Dci::new(self.main_dri().clone(), kind);
		self.push(ContentNode::new(dci, source_sets, style, extra, ContentBody::Table { header, rows }));
	}

	/// Header cells: one group holding one text per label.
	pub fn table_header(&self, labels: &[&str]) -> ContentNode {
		self.build_group(Attrs::new(), |b| {
			for label in labels {
				b.text(label, Attrs::new());
			}
		})
	}
}
