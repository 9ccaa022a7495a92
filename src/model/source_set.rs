use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::fmt;

use serde::{Deserialize, Serialize};

use super::documentable::{Documented, Module};
use crate::error::{DocError, Result};

/// Stable identifier of a source set, e.g. `jvmMain`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceSetId(String);

impl SourceSetId {
	/// Wrap a raw source set identifier.
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	/// Borrow the identifier as a string slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for SourceSetId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for SourceSetId {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}

impl From<&SourceSet> for SourceSetId {
	fn from(value: &SourceSet) -> Self {
		value.id.clone()
	}
}

/// Analysis platform a source set is compiled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
	/// Shared code compiled for every target.
	Common,
	/// JVM bytecode.
	Jvm,
	/// JavaScript.
	Js,
	/// WebAssembly.
	Wasm,
	/// Native binaries.
	Native,
}

/// One compilation target of a multiplatform project.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SourceSet {
	/// Unique identifier.
	pub id: SourceSetId,
	/// Name shown to readers, e.g. in clash disambiguation labels.
	pub display_name: String,
	/// Platform the source set is analysed for.
	pub analysis_platform: Platform,
	/// Source sets this one depends on and falls back to for missing documentation.
	#[serde(default)]
	pub dependent_source_sets: BTreeSet<SourceSetId>,
}

/// Ordered set of source sets; ordering follows the identifier.
pub type SourceSets = BTreeSet<SourceSet>;

/// A value that varies per source set. A missing key means "not defined there", which is
/// distinct from an explicitly empty value.
pub type SourceSetDependent<T> = BTreeMap<SourceSetId, T>;

impl SourceSet {
	/// Create a source set whose display name equals its identifier.
	pub fn new(id: impl Into<String>, analysis_platform: Platform) -> Self {
		let id = id.into();
		Self {
			display_name: id.clone(),
			id: SourceSetId(id),
			analysis_platform,
			dependent_source_sets: BTreeSet::new(),
		}
	}

	/// Override the display name.
	pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
		self.display_name = display_name.into();
		self
	}

	/// Declare a dependency on another source set.
	pub fn depends_on(mut self, id: impl Into<String>) -> Self {
		self.dependent_source_sets.insert(SourceSetId::new(id));
		self
	}

	/// Source sets among `candidates` this one can fall back to, nearest first.
	///
	/// Walks `dependent_source_sets` breadth-first: direct dependencies come before their own
	/// dependencies. Each source set is visited once, and only dependencies present in
	/// `candidates` are returned or walked further.
	pub fn fallback_chain<'a>(&self, candidates: &'a SourceSets) -> Vec<&'a SourceSet> {
		let mut chain = Vec::new();
		let mut seen: BTreeSet<&SourceSetId> = BTreeSet::from([&self.id]);
		let mut queue: VecDeque<&SourceSetId> = self.dependent_source_sets.iter().collect();

		while let Some(id) = queue.pop_front() {
			if !seen.insert(id) {
				continue;
			}
			let Some(source_set) = candidates.iter().find(|candidate| &candidate.id == id) else {
				continue;
			};
			chain.push(source_set);
			queue.extend(source_set.dependent_source_sets.iter());
		}

		chain
	}
}

/// Validated dependency graph over every source set of a documentation run.
#[derive(Debug, Clone, Default)]
pub struct SourceSetGraph {
	source_sets: BTreeMap<SourceSetId, SourceSet>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
	Visiting,
	Done,
}

impl SourceSetGraph {
	/// Build the graph, rejecting conflicting definitions and dependency cycles.
	///
	/// Dependencies on identifiers that are not part of the graph are allowed; they simply
	/// terminate the fallback chain.
	pub fn new(source_sets: impl IntoIterator<Item = SourceSet>) -> Result<Self> {
		let mut map: BTreeMap<SourceSetId, SourceSet> = BTreeMap::new();
		for source_set in source_sets {
			match map.get(&source_set.id) {
				Some(existing) if existing != &source_set => {
					return Err(DocError::ConflictingSourceSet { id: source_set.id });
				}
				Some(_) => {}
				None => {
					map.insert(source_set.id.clone(), source_set);
				}
			}
		}

		let graph = Self { source_sets: map };
		graph.check_acyclic()?;
		Ok(graph)
	}

	/// Collect and validate every source set referenced anywhere in a module tree.
	pub fn from_module(module: &Module) -> Result<Self> {
		let mut collected = Vec::new();
		collect_source_sets(module, &mut collected);
		Self::new(collected)
	}

	/// Look up a source set by identifier.
	pub fn get(&self, id: &SourceSetId) -> Option<&SourceSet> {
		self.source_sets.get(id)
	}

	/// Number of distinct source sets.
	pub fn len(&self) -> usize {
		self.source_sets.len()
	}

	/// Whether the graph holds no source sets.
	pub fn is_empty(&self) -> bool {
		self.source_sets.is_empty()
	}

	/// Iterate source sets in identifier order.
	pub fn iter(&self) -> impl Iterator<Item = &SourceSet> {
		self.source_sets.values()
	}

	fn check_acyclic(&self) -> Result<()> {
		let mut marks: BTreeMap<&SourceSetId, Mark> = BTreeMap::new();
		let mut stack: Vec<&SourceSetId> = Vec::new();
		for id in self.source_sets.keys() {
			self.visit(id, &mut marks, &mut stack)?;
		}
		Ok(())
	}

	fn visit<'a>(
		&'a self,
		id: &'a SourceSetId,
		marks: &mut BTreeMap<&'a SourceSetId, Mark>,
		stack: &mut Vec<&'a SourceSetId>,
	) -> Result<()> {
		match marks.get(id) {
			Some(Mark::Done) => return Ok(()),
			Some(Mark::Visiting) => {
				let start = stack.iter().position(|entry| *entry == id).unwrap_or(0);
				let mut cycle: Vec<SourceSetId> = stack[start..].iter().map(|entry| (*entry).clone()).collect();
				cycle.push(id.clone());
				return Err(DocError::CyclicSourceSets { cycle });
			}
			None => {}
		}

		let Some(source_set) = self.source_sets.get(id) else {
			return Ok(());
		};

		marks.insert(id, Mark::Visiting);
		stack.push(id);
		for dependency in &source_set.dependent_source_sets {
			self.visit(dependency, marks, stack)?;
		}
		stack.pop();
		marks.insert(id, Mark::Done);
		Ok(())
	}
}

fn collect_source_sets(documentable: &dyn Documented, out: &mut Vec<SourceSet>) {
	out.extend(documentable.source_sets().iter().cloned());
	if let Some(clashing) = &documentable.extra().clashing_dri_identifier {
		out.extend(clashing.iter().cloned());
	}
	for extension in &documentable.extra().extensions {
		collect_source_sets(extension, out);
	}
	for child in documentable.children() {
		collect_source_sets(child, out);
	}
}
