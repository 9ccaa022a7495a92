use crate::content::{ContentBody, ContentExtra, ContentNode, Dci, Style};
use crate::model::{DocTag, SourceSets};

/// Turns documentation comment trees into content nodes.
pub trait CommentsToContentConverter {
	/// Convert `doc` into content nodes carrying the given origin, source sets, style and extra.
	fn build_content(
		&self,
		doc: &DocTag,
		dci: &Dci,
		source_sets: &SourceSets,
		style: Style,
		extra: &ContentExtra,
	) -> Vec<ContentNode>;
}

/// Structural converter: every comment node maps onto the matching content node.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocTagConverter;

impl DocTagConverter {
	fn convert(&self, doc: &DocTag, dci: &Dci, source_sets: &SourceSets, style: Style, extra: &ContentExtra) -> Vec<ContentNode> {
		let node = |style: Style, body: ContentBody| ContentNode::new(dci.clone(), source_sets.clone(), style, extra.clone(), body);
		let children = |style: Style| {
			doc.children()
				.iter()
				.flat_map(|child| self.convert(child, dci, source_sets, style, extra))
				.collect::<Vec<_>>()
		};

		match doc {
			DocTag::Root { .. } => children(style),
			DocTag::Paragraph { .. } => vec![node(
				style | Style::PARAGRAPH,
				ContentBody::Group {
					children: children(style),
				},
			)],
			DocTag::Text { body } => vec![node(style, ContentBody::Text { text: body.clone() })],
			DocTag::Bold { .. } => children(style | Style::BOLD),
			DocTag::Italic { .. } => children(style | Style::ITALIC),
			DocTag::CodeInline { .. } => vec![node(
				style,
				ContentBody::CodeInline {
					children: children(style),
				},
			)],
			DocTag::CodeBlock { language, .. } => vec![node(
				style,
				ContentBody::CodeBlock {
					language: language.clone(),
					children: children(style),
				},
			)],
			DocTag::Link { address, .. } => vec![node(
				style,
				ContentBody::Link {
					address: address.clone(),
					children: children(style),
				},
			)],
			DocTag::Break => vec![node(style, ContentBody::Break)],
		}
	}
}

impl CommentsToContentConverter for DocTagConverter {
	fn build_content(
		&self,
		doc: &DocTag,
		dci: &Dci,
		source_sets: &SourceSets,
		style: Style,
		extra: &ContentExtra,
	) -> Vec<ContentNode> {
		self.convert(doc, dci, source_sets, style, extra)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::content::ContentKind;

	#[test]
	fn emphasis_becomes_text_style() {
		let doc = DocTag::Root {
			children: vec![DocTag::Paragraph {
				children: vec![
					DocTag::Text { body: "plain ".into() },
					DocTag::Bold {
						children: vec![DocTag::Text { body: "loud".into() }],
					},
				],
			}],
		};
		let nodes = DocTagConverter.build_content(
			&doc,
			&Dci::default(),
			&SourceSets::new(),
			Style::empty(),
			&ContentExtra::default(),
		);
		assert_eq!(nodes.len(), 1);
		assert!(nodes[0].style.contains(Style::PARAGRAPH));
		let children = nodes[0].children();
		assert_eq!(children[1].plain_text(), "loud");
		assert!(children[1].style.contains(Style::BOLD));
		assert_eq!(nodes[0].dci.kind, ContentKind::Main);
	}
}
