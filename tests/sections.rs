//! Documentation sections, listing order and summary rows.
mod utils;

use docpage::model::{DocTag, DocumentationNode, Extras, SourceSetDependent, TagKind, TagWrapper};
use docpage::providers::HeaderedTagProvider;
use docpage::{Classlike, ClasslikeKind, Documented, Dri, Function, Package, PageCreator, PageCreatorConfig, Platform, SourceSet};
use pretty_assertions::assert_eq;
use utils::*;

fn documented_function(tags: Vec<TagWrapper>) -> Function {
	Function::new("f", Dri::package("p")).on(&jvm()).with_doc(&jvm(), DocumentationNode::new(tags))
}

#[test]
fn types_are_sorted_case_insensitively_with_anonymous_last() {
	let mut anonymous = Classlike::new("", Dri::class("p", "$1"), ClasslikeKind::class()).on(&jvm());
	anonymous.name = None;
	let package = Package::new("p")
		.on(&jvm())
		.with_classlike(Classlike::new("b", Dri::class("p", "b"), ClasslikeKind::class()).on(&jvm()))
		.with_classlike(anonymous)
		.with_classlike(Classlike::new("A", Dri::class("p", "A"), ClasslikeKind::class()).on(&jvm()));

	let page = PageCreator::default().page_for_package(&package);

	let types = page.content.tables_with_header("Types");
	assert_eq!(types.len(), 1);
	assert_eq!(row_titles(types[0]), vec!["A", "b", ""]);
}

#[test]
fn parameters_are_listed_in_documentation_order() {
	let function = documented_function(vec![
		TagWrapper::description(DocTag::plain("Adds.")),
		TagWrapper::named(TagKind::Param, "y", DocTag::plain("Second operand.")),
		TagWrapper::named(TagKind::Param, "x", DocTag::plain("First operand.")),
	]);

	let page = PageCreator::default().page_for_function(&function);

	let parameters = page.content.tables_with_header("Parameters");
	assert_eq!(parameters.len(), 1);
	assert_eq!(row_titles(parameters[0]), vec!["y", "x"]);
	assert!(parameters[0].plain_text().contains("First operand."));
	assert!(page.content.headers().contains(&(4, "Parameters".to_string())));
}

#[test]
fn parameters_fall_back_to_shared_documentation() {
	let common = common();
	let jvm = SourceSet::new("jvm", Platform::Jvm).depends_on("common");
	let function = Function::new("f", Dri::package("p")).on(&common).on(&jvm).with_doc(
		&common,
		DocumentationNode::new(vec![TagWrapper::named(TagKind::Param, "x", DocTag::plain("Shared."))]),
	);

	let page = PageCreator::default().page_for_function(&function);

	let parameters = page.content.tables_with_header("Parameters");
	assert_eq!(parameters.len(), 1);
	let row_platforms: Vec<Vec<&str>> = parameters[0].rows().iter().map(source_set_ids).collect();
	assert_eq!(row_platforms, vec![vec!["common"], vec!["jvm"]]);
}

#[test]
fn see_also_strips_the_package_prefix() {
	let function = documented_function(vec![TagWrapper::see(
		"p.Other",
		Some(Dri::class("p", "Other")),
		DocTag::plain("Related."),
	)]);

	let page = PageCreator::default().page_for_function(&function);

	let see_also = page.content.tables_with_header("See also");
	assert_eq!(see_also.len(), 1);
	assert_eq!(row_titles(see_also[0]), vec!["Other"]);
	assert!(see_also[0].plain_text().contains("Related."));
}

#[test]
fn unresolved_see_also_keeps_the_written_name() {
	let function = documented_function(vec![TagWrapper::see("q.Missing", None, DocTag::Root { children: Vec::new() })]);

	let page = PageCreator::default().page_for_function(&function);

	let see_also = page.content.tables_with_header("See also");
	assert_eq!(row_titles(see_also[0]), vec!["q.Missing"]);
}

#[test]
fn throws_are_labelled_by_exception_class() {
	let function = documented_function(vec![TagWrapper::throws(
		"kotlin.IllegalStateException",
		Some(Dri::class("kotlin", "IllegalStateException")),
		DocTag::plain("When closed."),
	)]);

	let page = PageCreator::default().page_for_function(&function);

	let throws = page.content.tables_with_header("Throws");
	assert_eq!(throws.len(), 1);
	assert_eq!(row_titles(throws[0]), vec!["IllegalStateException"]);
	assert!(page.content.headers().contains(&(4, "Throws".to_string())));
}

#[test]
fn samples_list_their_names() {
	let function = documented_function(vec![TagWrapper::named(
		TagKind::Sample,
		"samples.usage",
		DocTag::plain("samples.usage"),
	)]);

	let page = PageCreator::default().page_for_function(&function);

	assert!(page.content.headers().contains(&(4, "Samples".to_string())));
	assert!(page.content.plain_text().contains("samples.usage"));
}

#[test]
fn custom_tags_are_rendered_by_their_provider() {
	let function = documented_function(vec![
		TagWrapper::description(DocTag::plain("Loads.")),
		TagWrapper::named(TagKind::Custom, "apiNote", DocTag::plain("Prefer the batch variant.")),
	]);
	let package = Package::new("p").on(&jvm()).with_function(function.clone());
	let creator = PageCreator::default()
		.with_custom_tag_provider(Box::new(HeaderedTagProvider::new("apiNote", "API Note").with_brief(true)));

	let page = creator.page_for_function(&function);
	assert!(page.content.headers().contains(&(4, "API Note".to_string())));
	assert!(page.content.plain_text().contains("Prefer the batch variant."));

	let listing = creator.page_for_package(&package);
	let functions = listing.content.tables_with_header("Functions");
	assert!(functions[0].plain_text().contains("Prefer the batch variant."));
}

#[test]
fn unhandled_custom_tags_are_skipped() {
	let function = documented_function(vec![TagWrapper::named(TagKind::Custom, "internal", DocTag::plain("Hidden."))]);

	let page = PageCreator::default().page_for_function(&function);

	assert!(!page.content.plain_text().contains("Hidden."));
}

#[test]
fn brief_shows_only_the_first_paragraph() {
	let function = Function::new("f", Dri::package("p")).on(&jvm()).with_doc(
		&jvm(),
		DocumentationNode::new(vec![TagWrapper::description(paragraphs(&["First.", "Second."]))]),
	);
	let package = Package::new("p").on(&jvm()).with_function(function);

	let page = PageCreator::default().page_for_package(&package);

	let functions = page.content.tables_with_header("Functions");
	assert_eq!(functions.len(), 1);
	let summary = functions[0].plain_text();
	assert!(summary.contains("First."), "{summary}");
	assert!(!summary.contains("Second."), "{summary}");
	assert!(page.children[0].content.plain_text().contains("Second."));
}

#[test]
fn inheritor_without_class_name_is_reported() {
	let mut inheritors = SourceSetDependent::new();
	inheritors.insert(jvm().id, vec![Dri::package("p.impl")]);
	let shape = Classlike::new("Shape", Dri::class("p", "Shape"), ClasslikeKind::Interface)
		.on(&jvm())
		.with_extras(Extras {
			inheritors: Some(inheritors),
			..Extras::default()
		});

	let (page, log) = capture_warnings(|| PageCreator::default().page_for_classlike(&shape));

	assert!(log.contains("no class name found for inheritor"), "{log}");
	let tables = page.content.tables_with_header("Inheritors");
	assert_eq!(row_titles(tables[0]), vec![Dri::package("p.impl").to_string()]);
}

#[test]
fn configuration_from_json_switches_to_merging() {
	let config = PageCreatorConfig::from_json(r#"{"mergeImplicitExpectActualDeclarations": true}"#).unwrap();
	let dri = Dri::class("p", "X");
	let package = Package::new("p")
		.with_classlike(Classlike::new("X", dri.clone(), ClasslikeKind::class()).on(&jvm()))
		.with_classlike(Classlike::new("X", dri, ClasslikeKind::class()).on(&js()));

	let page = PageCreator::new(config).page_for_package(&package);

	assert_eq!(page.children.len(), 1);
	assert_eq!(page.children[0].name, "X");
}

#[test]
fn throws_written_as_named_tags_keep_their_body() {
	let function = documented_function(vec![TagWrapper::named(TagKind::Throws, "E", DocTag::plain("boom"))]);

	let page = PageCreator::default().page_for_function(&function);

	let throws = page.content.tables_with_header("Throws");
	assert_eq!(throws.len(), 1);
	assert_eq!(row_titles(throws[0]), vec!["E"]);
	assert!(throws[0].plain_text().contains("boom"));
}

#[test]
fn generic_named_see_tags_are_listed_unresolved() {
	let function = documented_function(vec![TagWrapper::Named {
		kind: TagKind::See,
		name: "q.Elsewhere".to_string(),
		root: DocTag::plain("Compare with it."),
	}]);

	let page = PageCreator::default().page_for_function(&function);

	let see_also = page.content.tables_with_header("See also");
	assert_eq!(see_also.len(), 1);
	assert_eq!(row_titles(see_also[0]), vec!["q.Elsewhere"]);
	assert!(see_also[0].plain_text().contains("Compare with it."));
}

#[test]
fn parameter_without_a_name_is_reported() {
	let function = documented_function(vec![TagWrapper::unnamed(TagKind::Param, DocTag::plain("Orphan."))]);

	let (page, log) = capture_warnings(|| PageCreator::default().page_for_function(&function));

	assert!(page.content.tables_with_header("Parameters").is_empty());
	assert!(log.contains("has no subject name"), "{log}");
}

#[test]
fn empty_platform_description_falls_back_to_shared_one() {
	let common = common();
	let jvm = SourceSet::new("jvm", Platform::Jvm).depends_on("common");
	let function = Function::new("f", Dri::package("p"))
		.on(&common)
		.on(&jvm)
		.with_doc(&common, described("Shared docs."))
		.with_doc(
			&jvm,
			DocumentationNode::new(vec![TagWrapper::description(DocTag::Root { children: Vec::new() })]),
		);

	let page = PageCreator::default().page_for_function(&function);

	let jvm_descriptions = page
		.content
		.find_all(|node| source_set_ids(node) == vec!["jvm"] && node.plain_text().contains("Shared docs."));
	assert!(!jvm_descriptions.is_empty());
}
