//! Member listings of packages, classlikes and enum entries.

use std::collections::BTreeSet;

use indexmap::IndexMap;

use super::TAG_HEADER_LEVEL;
use super::creator::PageCreator;
use crate::content::{Attrs, BlockOptions, ContentExtra, ContentKind, DocumentableContentBuilder, Style, group_by_name, sort_groups};
use crate::model::{DocumentableRef, Documented, Dri, Extras, Function, Property, Scope, SourceSetDependent, SourceSets, dri_set, union_source_sets};

/// Split members into `(inherited, declared)`, keeping their order.
pub fn split_inherited<'t, T>(items: impl IntoIterator<Item = &'t T>) -> (Vec<&'t T>, Vec<&'t T>)
where
	T: Documented + 't,
{
	items.into_iter().partition(|item| item.is_inherited())
}

/// Inheritor lists of several owners, concatenated per source set; empty lists are dropped.
pub fn collect_inheritors<'t>(extras: impl IntoIterator<Item = &'t Extras>) -> SourceSetDependent<Vec<Dri>> {
	let mut inheritors: SourceSetDependent<Vec<Dri>> = SourceSetDependent::new();
	for extra in extras {
		for (source_set, dris) in extra.non_empty_inheritors() {
			inheritors.entry(source_set.clone()).or_default().extend(dris.iter().cloned());
		}
	}
	inheritors
}

/// "Inheritors" header and table, one row per inheritor carrying the platforms it inherits on.
///
/// Inheritors recorded on source sets outside `source_sets` are ignored.
pub(super) fn inheritors_section(
	b: &mut DocumentableContentBuilder<'_>,
	dri: &BTreeSet<Dri>,
	source_sets: &SourceSets,
	inheritors: &SourceSetDependent<Vec<Dri>>,
) {
	let mut rows: IndexMap<&Dri, SourceSets> = IndexMap::new();
	for source_set in source_sets {
		for inheritor in inheritors.get(&source_set.id).into_iter().flatten() {
			rows.entry(inheritor).or_default().insert(source_set.clone());
		}
	}
	if rows.is_empty() {
		return;
	}
	let platforms: SourceSets = rows.values().flatten().cloned().collect();

	let section = b.build_group(
		Attrs::new()
			.dri(dri.clone())
			.source_sets(source_sets.clone())
			.style(Style::empty())
			.extra(ContentExtra::default()),
		|section| {
			section.header(TAG_HEADER_LEVEL, "Inheritors", Attrs::new().source_sets(platforms), |_| {});
			let main_extra = section.main_extra().clone();
			section.table(
				Attrs::new()
					.kind(ContentKind::Inheritors)
					.style(Style::empty())
					.extra(main_extra.clone().with_header("Inheritors")),
				|table| {
					table.header(|header| header.text("Name", Attrs::new()));
					for (inheritor, platforms) in rows {
						let label = match inheritor.simple_class_name() {
							Some(name) => name.to_string(),
							None => {
								tracing::warn!(target: "docpage", dri = %inheritor, "no class name found for inheritor");
								inheritor.to_string()
							}
						};
						table.row(
							Attrs::new()
								.single_dri(inheritor)
								.source_sets(platforms)
								.kind(ContentKind::Inheritors)
								.extra(main_extra.clone().with_anchor(label.as_str(), ContentKind::Inheritors)),
							|row| row.link(&label, inheritor, Attrs::new()),
						);
					}
				},
			);
		},
	);
	b.extend(section.into_children());
}

impl PageCreator {
	/// Types, functions and properties of one or more scopes sharing a page.
	pub(super) fn content_for_scopes(&self, b: &mut DocumentableContentBuilder<'_>, scopes: &[Scope<'_>], source_sets: &SourceSets) {
		let dri: BTreeSet<Dri> = scopes.iter().map(|scope| scope.dri.clone()).collect();
		let types: Vec<DocumentableRef<'_>> = scopes
			.iter()
			.flat_map(|scope| scope.classlikes.iter().map(Documented::view))
			.chain(scopes.iter().flat_map(|scope| scope.typealiases.iter().map(Documented::view)))
			.collect();
		let functions: Vec<&Function> = scopes.iter().flat_map(|scope| scope.functions).collect();
		let properties: Vec<&Property> = scopes.iter().flat_map(|scope| scope.properties).collect();

		b.group(
			Attrs::new()
				.dri(dri)
				.source_sets(source_sets.clone())
				.style(Style::empty())
				.extra(ContentExtra::default()),
			|scope| {
				let types_extra = scope.main_extra().clone().with_header("Types");
				self.divergent_block(scope, "Types", &types, ContentKind::Classlikes, types_extra);

				if self.config.separate_inherited_members {
					let (inherited_functions, declared_functions) = split_inherited(functions);
					let (inherited_properties, declared_properties) = split_inherited(properties);
					self.properties_block(scope, "Properties", declared_properties, source_sets);
					self.properties_block(scope, "Inherited properties", inherited_properties, source_sets);
					self.functions_block(scope, "Functions", declared_functions);
					self.functions_block(scope, "Inherited functions", inherited_functions);
				} else {
					self.functions_block(scope, "Functions", functions);
					self.properties_block(scope, "Properties", properties, source_sets);
				}
			},
		);
	}

	fn functions_block(&self, b: &mut DocumentableContentBuilder<'_>, name: &str, mut functions: Vec<&Function>) {
		functions.sort_by_cached_key(|function| (function.name.clone(), function.parameters.len(), function.dri.to_string()));
		let items: Vec<DocumentableRef<'_>> = functions.into_iter().map(Documented::view).collect();
		let extra = b.main_extra().clone().with_header(name);
		self.divergent_block(b, name, &items, ContentKind::Functions, extra);
	}

	fn properties_block(&self, b: &mut DocumentableContentBuilder<'_>, name: &str, properties: Vec<&Property>, source_sets: &SourceSets) {
		let options = BlockOptions {
			needs_anchors: true,
			extra: Some(b.main_extra().clone().with_header(name)),
			headers: vec![b.table_header(&["Name", "Summary"])],
			..BlockOptions::default()
		};
		b.multi_block(
			name,
			2,
			ContentKind::Properties,
			group_by_name(properties),
			source_sets.clone(),
			options,
			|row, key, properties| {
				let Some(first) = properties.first() else {
					return;
				};
				row.link(key.unwrap_or_default(), &first.dri, Attrs::new().style(Style::ROW_TITLE));
				row.source_set_dependent_hint(
					Attrs::new()
						.dri(dri_set(properties.iter().copied()))
						.source_sets(union_source_sets(properties.iter().copied()))
						.kind(ContentKind::SourceSetDependentHint),
					|hint| {
						for property in properties {
							hint.signature(property.view());
							hint.content_for_brief(property.view());
						}
					},
				);
			},
		);
	}

	/// Header plus a "Name"/"Summary" table with one row per name, each row holding a divergent
	/// group of every platform variant with that name.
	///
	/// A name shared by a classlike and type aliases lists only the classlike.
	pub(super) fn divergent_block(
		&self,
		b: &mut DocumentableContentBuilder<'_>,
		name: &str,
		items: &[DocumentableRef<'_>],
		kind: ContentKind,
		extra: ContentExtra,
	) {
		if items.is_empty() {
			return;
		}

		let mut by_name: IndexMap<Option<String>, Vec<DocumentableRef<'_>>> = IndexMap::new();
		for item in items {
			by_name
				.entry(item.documented().name().map(str::to_string))
				.or_default()
				.push(*item);
		}
		let mut groups: Vec<(Option<String>, Vec<DocumentableRef<'_>>)> = by_name
			.into_iter()
			.map(|(key, elements)| {
				if elements.iter().any(|element| element.as_classlike().is_some()) {
					let classlikes = elements.into_iter().filter(|element| !matches!(element, DocumentableRef::TypeAlias(_)));
					(key, classlikes.collect())
				} else {
					(key, elements)
				}
			})
			.collect();
		sort_groups(&mut groups);

		b.header(2, name, Attrs::new().kind(kind), |_| {});
		b.table(Attrs::new().kind(kind).extra(extra.clone()).style(Style::empty()), |table| {
			table.header_columns(&["Name", "Summary"]);
			for (element_name, elements) in &groups {
				let Some(first) = elements.first() else {
					continue;
				};
				let dris: BTreeSet<Dri> = elements.iter().map(|element| element.documented().dri().clone()).collect();
				let source_sets: SourceSets = elements
					.iter()
					.flat_map(|element| element.documented().source_sets().iter().cloned())
					.collect();
				let row_extra = match element_name {
					Some(element_name) => extra.clone().with_anchor(element_name.as_str(), kind),
					None => extra.clone(),
				};

				table.row(
					Attrs::new()
						.dri(dris.clone())
						.source_sets(source_sets.clone())
						.kind(kind)
						.style(Style::empty())
						.extra(row_extra),
					|row| {
						row.link(
							element_name.as_deref().unwrap_or_default(),
							first.documented().dri(),
							Attrs::new()
								.kind(kind)
								.style(Style::ROW_TITLE)
								.source_sets(source_sets)
								.extra(extra.clone()),
						);
						row.divergent_group(name, Attrs::new().dri(dris).kind(kind).extra(extra.clone()), |group| {
							for element in elements {
								let documented = element.documented();
								let anchor = ContentExtra::default().with_anchor(documented.name().unwrap_or_default(), kind);
								group.instance(
									BTreeSet::from([documented.dri().clone()]),
									documented.source_sets().clone(),
									Attrs::new().extra(anchor),
									|instance| {
										instance.divergent(Attrs::new().extra(ContentExtra::default()), |divergent| {
											divergent.group(Attrs::new(), |signature| signature.signature(*element));
										});
										instance.after(Attrs::new().extra(ContentExtra::default()), |after| {
											after.content_for_brief(*element);
											after.content_for_custom_tags_brief(*element, &self.custom_tag_providers);
										});
									},
								);
							}
						});
					},
				);
			}
		});
	}
}
