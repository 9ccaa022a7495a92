use std::collections::BTreeSet;

use crate::content::{ContentBody, ContentExtra, ContentKind, ContentNode, Dci, Style};
use crate::model::{DocumentableRef, Documented, Dri, Function, Parameter, SourceSet, SourceSets};

/// Renders declaration signatures.
pub trait SignatureProvider {
	/// Signature nodes for a documentable; one node per source set is typical.
	fn signature(&self, documentable: DocumentableRef<'_>) -> Vec<ContentNode>;
}

/// Kotlin-flavoured one-line declarations with the declared name linked to the symbol.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSignatureProvider;

/// Segments of one rendered declaration line.
enum Segment {
	Text(String),
	Name(String),
}

impl DefaultSignatureProvider {
	fn segments(documentable: DocumentableRef<'_>) -> Vec<Segment> {
		let name = documentable.documented().name().unwrap_or_default().to_string();
		match documentable {
			DocumentableRef::Module(_) => vec![Segment::Text("module ".into()), Segment::Name(name)],
			DocumentableRef::Package(_) => vec![Segment::Text("package ".into()), Segment::Name(name)],
			DocumentableRef::Classlike(classlike) => {
				let mut segments = vec![Segment::Text(format!("{} ", classlike.kind.keyword())), Segment::Name(name)];
				let constructor = classlike.constructors().first();
				if let Some(primary) = constructor
					&& !primary.parameters.is_empty()
				{
					segments.push(Segment::Text(format!("({})", render_parameters(&primary.parameters))));
				}
				segments
			}
			DocumentableRef::EnumEntry(_) => vec![Segment::Name(name)],
			DocumentableRef::Function(function) => Self::function_segments(function, name),
			DocumentableRef::Property(property) => {
				let keyword = if property.is_mutable { "var " } else { "val " };
				let mut segments = vec![Segment::Text(keyword.into()), Segment::Name(name)];
				if let Some(type_name) = &property.type_name {
					segments.push(Segment::Text(format!(": {type_name}")));
				}
				segments
			}
			DocumentableRef::Parameter(parameter) => vec![Segment::Text(render_parameter(parameter))],
			DocumentableRef::TypeAlias(alias) => vec![
				Segment::Text("typealias ".into()),
				Segment::Name(name),
				Segment::Text(format!(" = {}", alias.underlying)),
			],
		}
	}

	fn function_segments(function: &Function, name: String) -> Vec<Segment> {
		let parameters = format!("({})", render_parameters(&function.parameters));
		if function.is_constructor {
			return vec![Segment::Name("constructor".into()), Segment::Text(parameters)];
		}

		let mut segments = vec![Segment::Text("fun ".into())];
		if let Some(receiver) = &function.receiver {
			segments.push(Segment::Text(format!("{}.", receiver.type_name)));
		}
		segments.push(Segment::Name(name));
		segments.push(Segment::Text(parameters));
		if let Some(return_type) = &function.return_type {
			segments.push(Segment::Text(format!(": {return_type}")));
		}
		segments
	}
}

fn render_parameter(parameter: &Parameter) -> String {
	match &parameter.name {
		Some(name) => format!("{name}: {}", parameter.type_name),
		None => parameter.type_name.clone(),
	}
}

fn render_parameters(parameters: &[Parameter]) -> String {
	parameters.iter().map(render_parameter).collect::<Vec<_>>().join(", ")
}

fn render_line(segments: &[Segment], dri: &Dri, source_set: &SourceSet) -> ContentNode {
	let dris = BTreeSet::from([dri.clone()]);
	let source_sets = SourceSets::from([source_set.clone()]);
	let children = segments
		.iter()
		.map(|segment| match segment {
			Segment::Text(text) => ContentNode::text(
				text.as_str(),
				Dci::new(dris.clone(), ContentKind::Symbol),
				source_sets.clone(),
				Style::empty(),
			),
			Segment::Name(name) => ContentNode::new(
				Dci::new(dris.clone(), ContentKind::Symbol),
				source_sets.clone(),
				Style::empty(),
				ContentExtra::default(),
				ContentBody::Link {
					address: dri.clone(),
					children: vec![ContentNode::text(
						name.as_str(),
						Dci::new(dris.clone(), ContentKind::Symbol),
						source_sets.clone(),
						Style::empty(),
					)],
				},
			),
		})
		.collect();

	ContentNode::group(
		children,
		Dci::new(dris, ContentKind::Symbol),
		source_sets,
		Style::MONOSPACE | Style::BLOCK,
		ContentExtra::default(),
	)
}

impl SignatureProvider for DefaultSignatureProvider {
	fn signature(&self, documentable: DocumentableRef<'_>) -> Vec<ContentNode> {
		let segments = Self::segments(documentable);
		let documented = documentable.documented();
		documented
			.source_sets()
			.iter()
			.map(|source_set| render_line(&segments, documented.dri(), source_set))
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::{Callable, Platform};

	#[test]
	fn function_signature_lists_receiver_parameters_and_return_type() {
		let jvm = SourceSet::new("jvm", Platform::Jvm);
		let dri = Dri::package("p").with_callable(Callable::new("greet", ["kotlin.String"]));
		let function = Function::new("greet", dri.clone())
			.with_receiver(Parameter::receiver("Person", dri.clone()))
			.with_parameter(Parameter::new("name", "String", dri.clone()))
			.returning("Unit")
			.on(&jvm);

		let nodes = DefaultSignatureProvider.signature(DocumentableRef::from(&function));
		assert_eq!(nodes.len(), 1);
		assert_eq!(nodes[0].plain_text(), "fun Person.greet(name: String): Unit");
		assert_eq!(nodes[0].dci.kind, ContentKind::Symbol);
	}

	#[test]
	fn one_signature_per_source_set() {
		let jvm = SourceSet::new("jvm", Platform::Jvm);
		let js = SourceSet::new("js", Platform::Js);
		let property = crate::model::Property::new("size", Dri::class("p", "A"))
			.typed("Int")
			.mutable()
			.on(&jvm)
			.on(&js);
		let nodes = DefaultSignatureProvider.signature(property.view());
		assert_eq!(nodes.len(), 2);
		assert!(nodes.iter().all(|node| node.plain_text() == "var size: Int"));
	}
}
