//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};

use docpage::model::{DocTag, DocumentationNode, TagWrapper};
use docpage::{ContentBody, ContentKind, ContentNode, Platform, SourceSet};

/// The `common` source set.
pub fn common() -> SourceSet {
	SourceSet::new("common", Platform::Common)
}

/// A JVM source set without dependencies.
pub fn jvm() -> SourceSet {
	SourceSet::new("jvm", Platform::Jvm)
}

/// A JS source set without dependencies.
pub fn js() -> SourceSet {
	SourceSet::new("js", Platform::Js)
}

/// A comment holding a single description paragraph.
pub fn described(text: &str) -> DocumentationNode {
	DocumentationNode::new(vec![TagWrapper::description(DocTag::plain(text))])
}

/// A description with one paragraph per entry of `paragraphs`.
pub fn paragraphs(paragraphs: &[&str]) -> DocTag {
	DocTag::Root {
		children: paragraphs
			.iter()
			.map(|text| DocTag::Paragraph {
				children: vec![DocTag::Text { body: text.to_string() }],
			})
			.collect(),
	}
}

/// Identifiers of a node's source sets.
pub fn source_set_ids(node: &ContentNode) -> Vec<&str> {
	node.source_sets.iter().map(|source_set| source_set.id.as_str()).collect()
}

/// Tables of a given kind anywhere below `node`.
pub fn tables_of_kind(node: &ContentNode, kind: ContentKind) -> Vec<&ContentNode> {
	node.find_all(|candidate| matches!(candidate.body, ContentBody::Table { .. }) && candidate.dci.kind == kind)
}

/// Text of the first cell of every row of a table.
pub fn row_titles(table: &ContentNode) -> Vec<String> {
	table
		.rows()
		.iter()
		.map(|row| row.children().first().map(|cell| cell.plain_text()).unwrap_or_default())
		.collect()
}

#[derive(Clone)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl io::Write for Capture {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		self.0
			.lock()
			.map_err(|_| io::Error::other("capture buffer poisoned"))?
			.extend_from_slice(buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

/// Run `f` with a subscriber recording warnings, returning its result and the formatted log.
pub fn capture_warnings<R>(f: impl FnOnce() -> R) -> (R, String) {
	let buffer = Arc::new(Mutex::new(Vec::new()));
	let writer = Capture(buffer.clone());
	let subscriber = tracing_subscriber::fmt()
		.with_writer(move || writer.clone())
		.with_max_level(tracing::Level::WARN)
		.without_time()
		.finish();
	let result = tracing::subscriber::with_default(subscriber, f);
	let log = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
	(result, log)
}
