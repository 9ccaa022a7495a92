//! Page tree shape: merging, renaming, inherited members and documentation fallback.
mod utils;

use docpage::model::{DocTag, Extras, InheritedMember, SourceSetDependent, SourceSets, TagWrapper, TypeAlias};
use docpage::{
	Classlike, ClasslikeKind, ContentBody, ContentKind, DocError, Documented, Dri, EnumEntry, Function, Module, Package, PageCreator,
	PageCreatorConfig, PageKind, Platform, SourceSet, Style,
};
use pretty_assertions::assert_eq;
use utils::*;

fn merging() -> PageCreator {
	PageCreator::new(PageCreatorConfig::default().with_merge_implicit_expect_actual_declarations(true))
}

fn expect_actual_package() -> Package {
	let dri = Dri::class("p", "X");
	Package::new("p")
		.on(&jvm())
		.on(&js())
		.with_classlike(Classlike::new("X", dri.clone(), ClasslikeKind::class()).on(&jvm()))
		.with_classlike(Classlike::new("X", dri, ClasslikeKind::class()).on(&js()))
}

#[test]
fn merged_variants_share_one_page() {
	let page = merging().page_for_package(&expect_actual_package());

	assert_eq!(page.children.len(), 1);
	let class_page = &page.children[0];
	assert_eq!(class_page.kind, PageKind::Classlike);
	assert_eq!(class_page.name, "X");
	assert_eq!(class_page.dri.len(), 1);
	let ids: Vec<String> = class_page.source_sets().iter().map(|source_set| source_set.id.to_string()).collect();
	assert_eq!(ids, vec!["js", "jvm"]);
	assert!(class_page.documentables.iter().all(|documentable| documentable.extra().clash_aware_name.is_none()));
}

#[test]
fn renamed_variants_get_a_page_each() {
	let page = PageCreator::default().page_for_package(&expect_actual_package());

	let names: Vec<&str> = page.children.iter().map(|child| child.name.as_str()).collect();
	assert_eq!(names, vec!["[jvm]X", "[js]X"]);
	for child in &page.children {
		assert_eq!(child.source_sets().len(), 1);
	}
}

#[test]
fn inherited_members_are_listed_separately() {
	let mut inherited = InheritedMember::default();
	inherited.inherited_from.insert(jvm().id, Some(Dri::class("p", "A")));
	let class_b = Classlike::new("B", Dri::class("p", "B"), ClasslikeKind::class())
		.on(&jvm())
		.with_function(Function::new("a", Dri::class("p", "B")).on(&jvm()).with_extras(Extras {
			inherited_member: Some(inherited),
			..Extras::default()
		}));

	let creator = PageCreator::new(PageCreatorConfig::default().with_separate_inherited_members(true));
	let page = creator.page_for_classlike(&class_b);

	assert!(page.children.is_empty());
	assert!(page.content.tables_with_header("Functions").is_empty());
	let inherited = page.content.tables_with_header("Inherited functions");
	assert_eq!(inherited.len(), 1);
	assert_eq!(row_titles(inherited[0]), vec!["a"]);
}

#[test]
fn inherited_members_share_one_block_by_default() {
	let mut inherited = InheritedMember::default();
	inherited.inherited_from.insert(jvm().id, Some(Dri::class("p", "A")));
	let class_b = Classlike::new("B", Dri::class("p", "B"), ClasslikeKind::class())
		.on(&jvm())
		.with_function(Function::new("own", Dri::class("p", "B")).on(&jvm()))
		.with_function(Function::new("a", Dri::class("p", "B")).on(&jvm()).with_extras(Extras {
			inherited_member: Some(inherited),
			..Extras::default()
		}));

	let page = PageCreator::default().page_for_classlike(&class_b);

	let functions = page.content.tables_with_header("Functions");
	assert_eq!(functions.len(), 1);
	assert_eq!(row_titles(functions[0]), vec!["a", "own"]);
	assert!(page.content.tables_with_header("Inherited functions").is_empty());
	let children: Vec<&str> = page.children.iter().map(|child| child.name.as_str()).collect();
	assert_eq!(children, vec!["own"]);
}

#[test]
fn shared_documentation_reaches_dependent_platforms() {
	let common = common();
	let jvm = SourceSet::new("jvm", docpage::Platform::Jvm).depends_on("common");
	let function = Function::new("f", Dri::package("p"))
		.on(&common)
		.on(&jvm)
		.with_doc(&common, described("Shared docs."));

	let page = PageCreator::default().page_for_function(&function);

	let jvm_comments = page
		.content
		.find_all(|node| node.dci.kind == ContentKind::Comment && source_set_ids(node) == ["jvm"]);
	assert!(jvm_comments.iter().any(|node| node.plain_text().contains("Shared docs.")));
}

#[test]
fn independent_platforms_do_not_share_documentation() {
	let common = common();
	let function = Function::new("f", Dri::package("p"))
		.on(&common)
		.on(&jvm())
		.with_doc(&common, described("Shared docs."));

	let page = PageCreator::default().page_for_function(&function);

	let jvm_comments = page
		.content
		.find_all(|node| node.dci.kind == ContentKind::Comment && source_set_ids(node) == ["jvm"]);
	assert!(jvm_comments.is_empty());
}

#[test]
fn module_lists_packages_with_descriptions() {
	let module = Module::new("app")
		.on(&jvm())
		.with_package(Package::new("app.core").on(&jvm()).with_doc(&jvm(), described("Core types.")))
		.with_package(Package::new("app.util").on(&jvm()));

	let page = PageCreator::default().translate(&module).unwrap();

	assert_eq!(page.kind, PageKind::Module);
	let packages = tables_of_kind(&page.content, ContentKind::Packages);
	assert_eq!(packages.len(), 1);
	assert_eq!(row_titles(packages[0]), vec!["app.core", "app.util"]);
	assert!(packages[0].rows()[0].plain_text().contains("Core types."));
	assert_eq!(packages[0].rows()[0].extra.anchor.as_ref().map(|anchor| anchor.name.as_str()), Some("app.core"));
}

#[test]
fn cyclic_source_sets_are_rejected() {
	let a = SourceSet::new("a", docpage::Platform::Jvm).depends_on("b");
	let b = SourceSet::new("b", docpage::Platform::Js).depends_on("a");
	let module = Module::new("m").on(&a).on(&b);

	let error = PageCreator::default().translate(&module).unwrap_err();
	assert!(matches!(error, DocError::CyclicSourceSets { .. }));
}

#[test]
fn type_aliases_are_listed_without_pages() {
	let package = Package::new("p")
		.on(&jvm())
		.with_typealias(TypeAlias::new("Alias", Dri::class("p", "Alias"), "String").on(&jvm()));

	let page = PageCreator::default().page_for_package(&package);

	assert!(page.children.is_empty());
	let types = page.content.tables_with_header("Types");
	assert_eq!(types.len(), 1);
	assert_eq!(row_titles(types[0]), vec!["Alias"]);
}

#[test]
fn classlike_hides_same_named_type_alias() {
	let package = Package::new("p")
		.on(&jvm())
		.with_classlike(Classlike::new("Shape", Dri::class("p", "Shape"), ClasslikeKind::Interface).on(&jvm()))
		.with_typealias(TypeAlias::new("Shape", Dri::class("p", "ShapeAlias"), "Any").on(&jvm()));

	let page = PageCreator::default().page_for_package(&package);

	let types = page.content.tables_with_header("Types");
	assert_eq!(types[0].rows().len(), 1);
	let instances = types[0].find_all(|node| matches!(node.body, ContentBody::DivergentInstance { .. }));
	assert_eq!(instances.len(), 1);
	assert!(instances[0].plain_text().contains("interface Shape"));
}

#[test]
fn enum_entries_keep_declaration_order() {
	let color = Dri::class("p", "Color");
	let enumeration = Classlike::new("Color", color.clone(), ClasslikeKind::enumeration())
		.on(&jvm())
		.with_entry(EnumEntry::new("RED", color.clone().with_extra("RED")).on(&jvm()))
		.with_entry(EnumEntry::new("GREEN", color.clone().with_extra("GREEN")).on(&jvm()));

	let page = PageCreator::default().page_for_classlike(&enumeration);

	let entries = page.content.tables_with_header("Entries");
	assert_eq!(entries.len(), 1);
	assert_eq!(row_titles(entries[0]), vec!["RED", "GREEN"]);
	let children: Vec<&str> = page.children.iter().map(|child| child.name.as_str()).collect();
	assert_eq!(children, vec!["RED", "GREEN"]);
}

#[test]
fn extensions_widen_classlike_source_sets() {
	let extension = Function::new("shout", Dri::package("p.ext")).on(&jvm());
	let interface = Classlike::new("Speaker", Dri::class("p", "Speaker"), ClasslikeKind::Interface)
		.on(&common())
		.with_extras(Extras {
			extensions: vec![extension.into()],
			..Extras::default()
		});

	let page = PageCreator::default().page_for_classlike(&interface);

	let tabbed = page.content.find_all(|node| node.style.contains(Style::TABBED_CONTENT));
	assert_eq!(source_set_ids(tabbed[0]), vec!["common", "jvm"]);
	assert_eq!(source_set_ids(&page.content), vec!["common"]);
	let extensions = page.content.tables_with_header("Extensions");
	assert_eq!(row_titles(extensions[0]), vec!["shout"]);
}

#[test]
fn inheritors_are_listed_once_per_classlike_page() {
	let mut inheritors = SourceSetDependent::new();
	inheritors.insert(jvm().id, vec![Dri::class("p", "Circle"), Dri::class("p", "Square")]);
	let shape = Classlike::new("Shape", Dri::class("p", "Shape"), ClasslikeKind::Interface)
		.on(&jvm())
		.with_extras(Extras {
			inheritors: Some(inheritors),
			..Extras::default()
		});

	let page = PageCreator::default().page_for_classlike(&shape);

	let tables = page.content.tables_with_header("Inheritors");
	assert_eq!(tables.len(), 1);
	assert_eq!(row_titles(tables[0]), vec!["Circle", "Square"]);
	assert!(page.content.headers().contains(&(4, "Inheritors".to_string())));
}

#[test]
fn constructor_pages_precede_members() {
	let dri = Dri::class("p", "Point");
	let point = Classlike::new("Point", dri.clone(), ClasslikeKind::class())
		.on(&jvm())
		.with_function(Function::new("distance", dri.clone()).on(&jvm()))
		.with_constructor(Function::new("Point", dri.clone()).on(&jvm()));

	let page = PageCreator::default().page_for_classlike(&point);

	let constructors = page.content.tables_with_header("Constructors");
	assert_eq!(constructors.len(), 1);
	assert_eq!(row_titles(constructors[0]), vec!["Point"]);
	assert_eq!(page.children[0].kind, PageKind::Member);
	assert_eq!(page.children[0].name, "Point");
}

#[test]
fn page_tree_can_be_walked() {
	let module = Module::new("").with_package(expect_actual_package());
	let page = merging().translate(&module).unwrap();

	let mut names = Vec::new();
	page.walk(&mut |page| names.push(page.name.clone()));
	assert_eq!(names, vec!["<root>", "p", "X"]);
	assert!(page.child_named("p").is_some());
	assert_eq!(page.child_named("p").and_then(|package| package.primary_dri()), Some(&Dri::package("p")));
}

#[test]
fn unnamed_tags_get_their_own_section() {
	let function = Function::new("f", Dri::package("p")).on(&jvm()).with_doc(
		&jvm(),
		docpage::model::DocumentationNode::new(vec![
			TagWrapper::description(DocTag::plain("Does things.")),
			TagWrapper::unnamed(docpage::model::TagKind::Since, DocTag::plain("1.2")),
		]),
	);

	let page = PageCreator::default().page_for_function(&function);

	assert!(page.content.headers().contains(&(4, "Since".to_string())));
	assert!(page.content.plain_text().contains("1.2"));
}

#[test]
fn content_never_claims_foreign_source_sets() {
	let common = common();
	let jvm = SourceSet::new("jvm", Platform::Jvm).depends_on("common");
	let native = SourceSet::new("native", Platform::Native);
	let dri = Dri::class("p", "X");
	let mut inheritors = SourceSetDependent::new();
	inheritors.insert(jvm.id.clone(), vec![Dri::class("p", "Y")]);
	let shared = Classlike::new("X", dri.clone(), ClasslikeKind::class())
		.on(&common)
		.on(&jvm)
		.with_doc(
			&common,
			docpage::model::DocumentationNode::new(vec![
				TagWrapper::description(DocTag::plain("Shared.")),
				TagWrapper::named(docpage::model::TagKind::Param, "x", DocTag::plain("Input.")),
			]),
		)
		.with_function(Function::new("run", dri.clone()).on(&jvm).with_doc(&jvm, described("Runs.")))
		.with_extras(Extras {
			inheritors: Some(inheritors),
			extensions: vec![Function::new("shout", Dri::package("p.ext")).on(&native).into()],
			..Extras::default()
		});
	let js_variant = Classlike::new("X", dri, ClasslikeKind::class())
		.on(&js())
		.with_doc(&js(), described("Browser."));
	let package = Package::new("p").on(&common).on(&jvm).on(&js()).with_classlike(shared).with_classlike(js_variant);

	let page = merging().page_for_package(&package);

	let mut checked = 0;
	page.walk(&mut |page| {
		let mut allowed: SourceSets = page.source_sets();
		for documentable in &page.documentables {
			for extension in &documentable.extra().extensions {
				allowed.extend(extension.source_sets().iter().cloned());
			}
		}
		for node in page.content.find_all(|_| true) {
			assert!(
				node.source_sets.is_subset(&allowed),
				"{} claims {:?} outside {:?}",
				page.name,
				source_set_ids(node),
				allowed.iter().map(|source_set| source_set.id.as_str()).collect::<Vec<_>>()
			);
		}
		checked += 1;
	});
	assert!(checked >= 3);
}
