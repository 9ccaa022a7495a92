//! Page tree construction.

use std::collections::BTreeSet;

use super::GroupedTags;
use super::clash::{expect_single_dri, merge_clashing, name_after_clash, rename_clashing};
use super::scope::{collect_inheritors, inheritors_section};
use crate::config::PageCreatorConfig;
use crate::content::{Attrs, BlockOptions, ContentExtra, ContentKind, ContentNode, PageContentBuilder, Style, group_by_name};
use crate::error::Result;
use crate::model::{
	Classlike, Documentable, DocumentableRef, Documented, Dri, EnumEntry, Function, Module, Package, Property, Scope, SourceSetGraph, SourceSets,
	TagWrapper, dri_set, union_source_sets,
};
use crate::page::{Page, PageKind};
use crate::providers::{CommentsToContentConverter, CustomTagContentProvider, SignatureProvider};

/// Name of the module page when the module itself is unnamed.
pub const ROOT_PAGE_NAME: &str = "<root>";

/// Builds the page tree of a module.
///
/// # Examples
///
/// ```
/// use docpage::{Module, Package, PageCreator};
///
/// let module = Module::new("app").with_package(Package::new("app.core"));
/// let page = PageCreator::default().translate(&module).unwrap();
/// assert_eq!(page.name, "app");
/// assert_eq!(page.children[0].name, "app.core");
/// ```
pub struct PageCreator {
	pub(super) config: PageCreatorConfig,
	pub(super) content: PageContentBuilder,
	pub(super) custom_tag_providers: Vec<Box<dyn CustomTagContentProvider>>,
}

impl Default for PageCreator {
	fn default() -> Self {
		Self::new(PageCreatorConfig::default())
	}
}

impl PageCreator {
	/// Page creator with the default collaborators.
	pub fn new(config: PageCreatorConfig) -> Self {
		Self {
			config,
			content: PageContentBuilder::default(),
			custom_tag_providers: Vec::new(),
		}
	}

	/// Replace the configuration.
	pub fn with_config(mut self, config: PageCreatorConfig) -> Self {
		self.config = config;
		self
	}

	/// Replace the signature provider.
	pub fn with_signature_provider(self, signatures: Box<dyn SignatureProvider>) -> Self {
		Self {
			content: self.content.with_signature_provider(signatures),
			..self
		}
	}

	/// Replace the comment converter.
	pub fn with_comments_converter(self, converter: Box<dyn CommentsToContentConverter>) -> Self {
		Self {
			content: self.content.with_converter(converter),
			..self
		}
	}

	/// Register a custom tag provider; providers run in registration order.
	pub fn with_custom_tag_provider(mut self, provider: Box<dyn CustomTagContentProvider>) -> Self {
		self.custom_tag_providers.push(provider);
		self
	}

	/// Active configuration.
	pub fn config(&self) -> &PageCreatorConfig {
		&self.config
	}

	/// Validate the module's source sets, then build its page tree.
	pub fn translate(&self, module: &Module) -> Result<Page> {
		let graph = SourceSetGraph::from_module(module)?;
		tracing::debug!(target: "docpage", module = %module.name, source_sets = graph.len(), "translating module");
		Ok(self.page_for_module(module))
	}

	/// Module page with one child per package.
	pub fn page_for_module(&self, module: &Module) -> Page {
		let name = if module.name.is_empty() {
			ROOT_PAGE_NAME.to_string()
		} else {
			module.name.clone()
		};
		let children = module.packages.iter().map(|package| self.page_for_package(package)).collect();
		Page::new(
			PageKind::Module,
			name,
			self.content_for_module(module),
			BTreeSet::from([module.dri.clone()]),
			vec![module.to_documentable()],
		)
		.with_children(children)
	}

	/// Package page; type aliases are listed but get no page of their own.
	pub fn page_for_package(&self, package: &Package) -> Page {
		let classlikes: Vec<&Classlike> = package.classlikes.iter().collect();
		let functions: Vec<&Function> = package.functions.iter().collect();
		let properties: Vec<&Property> = package.properties.iter().collect();
		let children = self.child_pages(&classlikes, &functions, &properties, &[]);
		Page::new(
			PageKind::Package,
			package.name.clone(),
			self.content_for_package(package),
			BTreeSet::from([package.dri.clone()]),
			vec![package.to_documentable()],
		)
		.with_children(children)
	}

	/// Page of a single classlike.
	pub fn page_for_classlike(&self, classlike: &Classlike) -> Page {
		self.page_for_classlikes(&[classlike])
	}

	/// Page shared by the platform variants of one classlike.
	///
	/// Constructors come first, each on its own member page, and are left out entirely for
	/// annotation classes. Inherited functions and properties are listed but get no page here.
	pub fn page_for_classlikes(&self, classlikes: &[&Classlike]) -> Page {
		let dri = dri_set(classlikes.iter().copied());
		expect_single_dri(&dri, "classlike");

		let constructors: Vec<&Function> = if renders_constructors(classlikes) {
			classlikes.iter().flat_map(|&classlike| classlike.constructors()).collect()
		} else {
			Vec::new()
		};
		let nested: Vec<&Classlike> = classlikes.iter().flat_map(|&classlike| &classlike.classlikes).collect();
		let functions = declared(classlikes.iter().flat_map(|&classlike| &classlike.functions));
		let properties = declared(classlikes.iter().flat_map(|&classlike| &classlike.properties));
		let entries: Vec<&EnumEntry> = classlikes.iter().flat_map(|&classlike| classlike.entries()).collect();

		let mut children: Vec<Page> = constructors.into_iter().map(|constructor| self.page_for_function(constructor)).collect();
		children.extend(self.child_pages(&nested, &functions, &properties, &entries));

		let views: Vec<DocumentableRef<'_>> = classlikes.iter().map(|&classlike| classlike.view()).collect();
		Page::new(
			PageKind::Classlike,
			first_name_after_clash(classlikes),
			self.content_for_classlikes_and_entries(&views),
			dri,
			classlikes.iter().map(|&classlike| classlike.to_documentable()).collect(),
		)
		.with_children(children)
	}

	/// Page of a single enum entry.
	pub fn page_for_enum_entry(&self, entry: &EnumEntry) -> Page {
		self.page_for_enum_entries(&[entry])
	}

	/// Classlike-shaped page shared by the platform variants of one enum entry.
	pub fn page_for_enum_entries(&self, entries: &[&EnumEntry]) -> Page {
		let dri = dri_set(entries.iter().copied());
		expect_single_dri(&dri, "enum entry");

		let nested: Vec<&Classlike> = entries.iter().flat_map(|&entry| &entry.classlikes).collect();
		let functions = declared(entries.iter().flat_map(|&entry| &entry.functions));
		let properties = declared(entries.iter().flat_map(|&entry| &entry.properties));
		let children = self.child_pages(&nested, &functions, &properties, &[]);

		let views: Vec<DocumentableRef<'_>> = entries.iter().map(|&entry| entry.view()).collect();
		Page::new(
			PageKind::Classlike,
			first_name_after_clash(entries),
			self.content_for_classlikes_and_entries(&views),
			dri,
			entries.iter().map(|&entry| entry.to_documentable()).collect(),
		)
		.with_children(children)
	}

	/// Page of a single function.
	pub fn page_for_function(&self, function: &Function) -> Page {
		self.page_for_functions(&[function])
	}

	/// Member page shared by the platform variants of one function.
	pub fn page_for_functions(&self, functions: &[&Function]) -> Page {
		self.member_page(functions, "function")
	}

	/// Page of a single property.
	pub fn page_for_property(&self, property: &Property) -> Page {
		self.page_for_properties(&[property])
	}

	/// Member page shared by the platform variants of one property.
	pub fn page_for_properties(&self, properties: &[&Property]) -> Page {
		self.member_page(properties, "property")
	}

	fn member_page<T: Documented>(&self, members: &[&T], what: &str) -> Page {
		let dri = dri_set(members.iter().copied());
		expect_single_dri(&dri, what);
		let views: Vec<DocumentableRef<'_>> = members.iter().map(|&member| member.view()).collect();
		Page::new(
			PageKind::Member,
			first_name_after_clash(members),
			self.content_for_members(&views),
			dri,
			members.iter().map(|&member| member.to_documentable()).collect(),
		)
	}

	/// Child pages of nested declarations, merged per DRI or renamed depending on the configuration.
	fn child_pages(&self, classlikes: &[&Classlike], functions: &[&Function], properties: &[&Property], entries: &[&EnumEntry]) -> Vec<Page> {
		let mut pages = Vec::new();
		if self.config.merge_implicit_expect_actual_declarations {
			pages.extend(merge_clashing(classlikes.iter().copied()).iter().map(|group| self.page_for_classlikes(group)));
			pages.extend(merge_clashing(functions.iter().copied()).iter().map(|group| self.page_for_functions(group)));
			pages.extend(merge_clashing(properties.iter().copied()).iter().map(|group| self.page_for_properties(group)));
			pages.extend(merge_clashing(entries.iter().copied()).iter().map(|group| self.page_for_enum_entries(group)));
		} else {
			pages.extend(rename_clashing(classlikes.iter().copied()).iter().map(|classlike| self.page_for_classlike(classlike)));
			pages.extend(rename_clashing(functions.iter().copied()).iter().map(|function| self.page_for_function(function)));
			pages.extend(rename_clashing(properties.iter().copied()).iter().map(|property| self.page_for_property(property)));
			pages.extend(rename_clashing(entries.iter().copied()).iter().map(|entry| self.page_for_enum_entry(entry)));
		}
		pages
	}

	/// Cover with the module description, then the "Packages" table.
	pub fn content_for_module(&self, module: &Module) -> ContentNode {
		self.content.content_for_documentable(module, Attrs::new(), |b| {
			b.group(Attrs::new().kind(ContentKind::Cover), |cover| {
				cover.cover(&module.name, Attrs::new());
				let description = self.content_for_description(module.view());
				if !description.is_empty() {
					cover.source_set_dependent_hint(
						Attrs::new()
							.single_dri(&module.dri)
							.source_sets(module.source_sets.clone())
							.kind(ContentKind::SourceSetDependentHint)
							.style(Style::UNDER_COVER_TEXT),
						|hint| hint.extend(description),
					);
				}
			});

			let options = BlockOptions {
				needs_anchors: true,
				headers: vec![b.table_header(&["Name"])],
				..BlockOptions::default()
			};
			b.block(
				"Packages",
				2,
				ContentKind::Packages,
				&module.packages,
				module.source_sets.clone(),
				options,
				|row, package| {
					row.link(&package.name, &package.dri, Attrs::new());
					if let Some(description) = shared_description(package) {
						row.first_paragraph_comment(description.root(), Attrs::new().kind(ContentKind::Comment));
					}
				},
			);
		})
	}

	/// "Package-level declarations" cover, then the package members in tabbed content.
	pub fn content_for_package(&self, package: &Package) -> ContentNode {
		self.content.content_for_documentable(package, Attrs::new(), |b| {
			b.group(Attrs::new().kind(ContentKind::Cover), |cover| {
				cover.cover("Package-level declarations", Attrs::new());
				let description = self.content_for_description(package.view());
				if !description.is_empty() {
					cover.source_set_dependent_hint(
						Attrs::new()
							.single_dri(&package.dri)
							.source_sets(package.source_sets.clone())
							.kind(ContentKind::SourceSetDependentHint)
							.style(Style::UNDER_COVER_TEXT),
						|hint| {
							hint.extend(description);
							inheritors_section(
								hint,
								&BTreeSet::from([package.dri.clone()]),
								&package.source_sets,
								&collect_inheritors([&package.extra]),
							);
						},
					);
				}
			});
			b.group(Attrs::new().style(Style::TABBED_CONTENT), |tabbed| {
				self.content_for_scopes(tabbed, &[package.scope()], &package.source_sets);
			});
		})
	}

	/// Content of a classlike or enum entry page built from all of its platform variants.
	///
	/// Extensions may live on source sets the declaration itself does not, so they widen the
	/// source sets of the cover and the tabbed members.
	pub fn content_for_classlikes_and_entries(&self, documentables: &[DocumentableRef<'_>]) -> ContentNode {
		let dri: BTreeSet<Dri> = documentables.iter().map(|documentable| documentable.documented().dri().clone()).collect();
		let source_sets: SourceSets = documentables
			.iter()
			.flat_map(|documentable| documentable.documented().source_sets().iter().cloned())
			.collect();
		let classlikes: Vec<&Classlike> = documentables.iter().filter_map(|documentable| documentable.as_classlike()).collect();
		let extensions: Vec<&Documentable> = classlikes.iter().flat_map(|&classlike| &classlike.extra.extensions).collect();
		let mut widened = source_sets.clone();
		widened.extend(union_source_sets(extensions.iter().copied()));
		let scopes: Vec<Scope<'_>> = documentables.iter().filter_map(|documentable| documentable.as_scope()).collect();
		let title = documentables
			.first()
			.and_then(|documentable| documentable.documented().name())
			.unwrap_or_default();

		self.content.content_for(dri.clone(), source_sets.clone(), Attrs::new(), |b| {
			b.group(Attrs::new().kind(ContentKind::Cover).source_sets(widened.clone()), |cover| {
				cover.cover(title, Attrs::new());
				cover.source_set_dependent_hint(Attrs::new().dri(dri.clone()).source_sets(source_sets.clone()), |hint| {
					for documentable in documentables {
						hint.signature(*documentable);
						hint.extend(self.content_for_description(*documentable));
					}
					let inheritors = collect_inheritors(scopes.iter().map(|scope| scope.extra));
					inheritors_section(hint, &dri, &source_sets, &inheritors);
				});
			});

			b.group(Attrs::new().style(Style::TABBED_CONTENT).source_sets(widened), |tabbed| {
				let with_constructors: Vec<&Classlike> = classlikes.iter().copied().filter(|classlike| classlike.has_constructors()).collect();
				if !with_constructors.is_empty() && renders_constructors(&classlikes) {
					let constructors: Vec<&Function> = with_constructors.iter().flat_map(|&classlike| classlike.constructors()).collect();
					let options = BlockOptions {
						needs_anchors: true,
						extra: Some(ContentExtra::header("Constructors")),
						..BlockOptions::default()
					};
					tabbed.multi_block(
						"Constructors",
						2,
						ContentKind::Constructors,
						group_by_name(constructors),
						union_source_sets(with_constructors.iter().copied()),
						options,
						|row, key, constructors| {
							let Some(first) = constructors.first() else {
								return;
							};
							row.link(key.unwrap_or_default(), &first.dri, Attrs::new().style(Style::ROW_TITLE));
							row.source_set_dependent_hint(
								Attrs::new()
									.dri(dri_set(constructors.iter().copied()))
									.source_sets(union_source_sets(constructors.iter().copied()))
									.kind(ContentKind::SourceSetDependentHint)
									.extra(ContentExtra::default()),
								|hint| {
									for constructor in constructors {
										hint.signature(constructor.view());
										hint.content_for_brief(constructor.view());
									}
								},
							);
						},
					);
				}

				let enums: Vec<&Classlike> = classlikes.iter().copied().filter(|classlike| classlike.is_enum()).collect();
				if !enums.is_empty() {
					let options = BlockOptions {
						needs_sorting: false,
						needs_anchors: true,
						extra: Some(tabbed.main_extra().clone().with_header("Entries")),
						style: Some(Style::empty()),
						..BlockOptions::default()
					};
					tabbed.multi_block(
						"Entries",
						2,
						ContentKind::Classlikes,
						group_by_name(enums.iter().flat_map(|&classlike| classlike.entries())),
						union_source_sets(enums.iter().copied()),
						options,
						|row, key, entries| {
							let Some(first) = entries.first() else {
								return;
							};
							row.link(key.unwrap_or_default(), &first.dri, Attrs::new());
							row.source_set_dependent_hint(
								Attrs::new()
									.dri(dri_set(entries.iter().copied()))
									.source_sets(union_source_sets(entries.iter().copied()))
									.kind(ContentKind::SourceSetDependentHint)
									.extra(ContentExtra::default()),
								|hint| {
									for entry in entries {
										hint.signature(entry.view());
										hint.content_for_brief(entry.view());
									}
								},
							);
						},
					);
				}

				self.content_for_scopes(tabbed, &scopes, &source_sets);

				let extension_views: Vec<DocumentableRef<'_>> = extensions.iter().map(|&extension| extension.view()).collect();
				let extra = tabbed.main_extra().clone().with_header("Extensions");
				self.divergent_block(tabbed, "Extensions", &extension_views, ContentKind::Extensions, extra);
			});
		})
	}

	/// Cover plus a "member" divergent group: signature per variant, full description after it.
	pub fn content_for_members(&self, documentables: &[DocumentableRef<'_>]) -> ContentNode {
		let dri: BTreeSet<Dri> = documentables.iter().map(|documentable| documentable.documented().dri().clone()).collect();
		let source_sets: SourceSets = documentables
			.iter()
			.flat_map(|documentable| documentable.documented().source_sets().iter().cloned())
			.collect();
		let title = documentables
			.first()
			.and_then(|documentable| documentable.documented().name())
			.unwrap_or_default();

		self.content.content_for(dri, source_sets, Attrs::new(), |b| {
			b.group(Attrs::new().kind(ContentKind::Cover), |cover| cover.cover(title, Attrs::new()));
			b.divergent_group("member", Attrs::new(), |group| {
				for documentable in documentables {
					let documented = documentable.documented();
					group.instance(
						BTreeSet::from([documented.dri().clone()]),
						documented.source_sets().clone(),
						Attrs::new(),
						|instance| {
							instance.divergent(Attrs::new(), |divergent| divergent.signature(*documentable));
							instance.after(Attrs::new(), |after| after.extend(self.content_for_description(*documentable)));
						},
					);
				}
			});
		})
	}

	/// Description, custom tag and unnamed tag sections followed by the parameter, see-also,
	/// throws and sample tables.
	pub fn content_for_description(&self, documentable: DocumentableRef<'_>) -> Vec<ContentNode> {
		let documented = documentable.documented();
		let platforms = documented.source_sets();

		let mut nodes = self
			.content
			.content_for_documentable(documented, Attrs::new().style(Style::BLOCK), |b| {
				b.description_section_content(documented, platforms);
				b.custom_tag_section_content(documented, platforms, &self.custom_tag_providers);
				b.unnamed_tag_section_content(documented, platforms);
			})
			.into_children();

		let tags = GroupedTags::of(documented);
		nodes.extend(
			self.content
				.content_for_documentable(documented, Attrs::new(), |b| b.comment_sections(platforms, &tags))
				.into_children(),
		);
		nodes
	}
}

// Annotation constructors exist for the compiler, not for documentation readers.
fn renders_constructors(classlikes: &[&Classlike]) -> bool {
	!classlikes.iter().any(|classlike| classlike.is_annotation())
}

fn declared<'t, T: Documented + 't>(members: impl IntoIterator<Item = &'t T>) -> Vec<&'t T> {
	members.into_iter().filter(|member| !member.is_inherited()).collect()
}

fn first_name_after_clash<T: Documented>(items: &[&T]) -> String {
	items.first().map(|&item| name_after_clash(item)).unwrap_or_default()
}

/// Package description shown in the module listing: the only one, or one identical on every
/// source set.
fn shared_description(package: &Package) -> Option<&TagWrapper> {
	let descriptions = GroupedTags::of(package).descriptions();
	let documentations: Vec<Option<&TagWrapper>> = package
		.source_sets
		.iter()
		.map(|source_set| descriptions.get(source_set).copied())
		.collect();
	let first = documentations.first().copied().flatten()?;
	let identical = documentations
		.iter()
		.all(|documentation| documentation.is_some_and(|documentation| documentation.root() == first.root()));
	(package.source_sets.len() == 1 || identical).then_some(first)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::content::ContentBody;
	use crate::model::{ClasslikeKind, DocTag, DocumentationNode, Platform, SourceSet};

	fn jvm() -> SourceSet {
		SourceSet::new("jvm", Platform::Jvm)
	}

	#[test]
	fn unnamed_module_gets_root_page_name() {
		let page = PageCreator::default().page_for_module(&Module::new(""));
		assert_eq!(page.name, ROOT_PAGE_NAME);
		assert_eq!(page.kind, PageKind::Module);
	}

	#[test]
	fn annotation_constructors_get_no_pages() {
		let dri = Dri::class("p", "Marker");
		let annotation = Classlike::new("Marker", dri.clone(), ClasslikeKind::annotation())
			.on(&jvm())
			.with_constructor(Function::new("Marker", dri.clone()).on(&jvm()));
		let page = PageCreator::default().page_for_classlike(&annotation);
		assert!(page.children.is_empty());
		assert!(page.content.tables_with_header("Constructors").is_empty());
	}

	#[test]
	fn constructors_come_first() {
		let dri = Dri::class("p", "A");
		let class = Classlike::new("A", dri.clone(), ClasslikeKind::class())
			.on(&jvm())
			.with_function(Function::new("run", dri.clone()).on(&jvm()))
			.with_constructor(Function::new("A", dri.clone()).on(&jvm()));
		let page = PageCreator::default().page_for_classlike(&class);
		let names: Vec<&str> = page.children.iter().map(|child| child.name.as_str()).collect();
		assert_eq!(names, vec!["A", "run"]);
	}

	#[test]
	fn member_page_puts_description_after_signature() {
		let function = Function::new("run", Dri::class("p", "A"))
			.on(&jvm())
			.with_doc(&jvm(), DocumentationNode::new(vec![TagWrapper::description(DocTag::plain("Runs it."))]));
		let page = PageCreator::default().page_for_function(&function);
		let groups = page
			.content
			.find_all(|node| matches!(&node.body, ContentBody::DivergentGroup { group_id, .. } if group_id == "member"));
		assert_eq!(groups.len(), 1);
		assert!(groups[0].plain_text().contains("Runs it."));
	}

	#[test]
	fn shared_description_requires_identical_docs() {
		let common = SourceSet::new("common", Platform::Common);
		let doc = |text: &str| DocumentationNode::new(vec![TagWrapper::description(DocTag::plain(text))]);
		let same = Package::new("p")
			.on(&common)
			.on(&jvm())
			.with_doc(&common, doc("Shared."))
			.with_doc(&jvm(), doc("Shared."));
		assert!(shared_description(&same).is_some());

		let different = same.clone().with_doc(&jvm(), doc("Other."));
		assert!(shared_description(&different).is_none());
	}
}
