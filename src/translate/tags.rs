use std::collections::BTreeMap;

use indexmap::IndexMap;

use crate::model::{Documented, SourceSet, SourceSets, TagKind, TagWrapper};

/// Values keyed by the source set they were found on.
pub type PerSourceSet<'a, T> = BTreeMap<&'a SourceSet, T>;

/// Documentation tags of one or more documentables, indexed by [`TagKind`].
///
/// Only tags attached to a source set the documentable exists in are indexed.
#[derive(Debug, Clone, Default)]
pub struct GroupedTags<'a> {
	by_kind: IndexMap<TagKind, Vec<(&'a SourceSet, &'a TagWrapper)>>,
}

impl<'a> GroupedTags<'a> {
	/// Tags of one documentable.
	pub fn of<T: Documented + ?Sized>(documentable: &'a T) -> Self {
		let mut by_kind: IndexMap<TagKind, Vec<(&'a SourceSet, &'a TagWrapper)>> = IndexMap::new();
		let documentation = documentable.documentation();
		for source_set in documentable.source_sets() {
			let Some(node) = documentation.get(&source_set.id) else {
				continue;
			};
			for tag in &node.children {
				by_kind.entry(tag.kind()).or_default().push((source_set, tag));
			}
		}
		Self { by_kind }
	}

	/// Whether no tag was found at all.
	pub fn is_empty(&self) -> bool {
		self.by_kind.is_empty()
	}

	/// Whether at least one tag of `kind` exists.
	pub fn is_not_empty_for(&self, kind: TagKind) -> bool {
		self.by_kind.get(&kind).is_some_and(|tags| !tags.is_empty())
	}

	/// Tags of `kind` per source set; a later tag on the same source set replaces an earlier one.
	pub fn unnamed(&self, kind: TagKind) -> PerSourceSet<'a, &'a TagWrapper> {
		self.by_kind
			.get(&kind)
			.into_iter()
			.flatten()
			.map(|(source_set, tag)| (*source_set, *tag))
			.collect()
	}

	/// Tags of `kind` grouped by subject name in first-seen order, then per source set.
	///
	/// Tags without a subject name cannot be listed and are reported instead.
	pub fn named(&self, kind: TagKind) -> IndexMap<&'a str, PerSourceSet<'a, &'a TagWrapper>> {
		let mut named: IndexMap<&'a str, PerSourceSet<'a, &'a TagWrapper>> = IndexMap::new();
		for (source_set, tag) in self.by_kind.get(&kind).into_iter().flatten() {
			let Some(name) = tag.name() else {
				tracing::warn!(target: "docpage", %kind, source_set = %source_set.id, "{kind} tag has no subject name, skipping it");
				continue;
			};
			named.entry(name).or_default().insert(*source_set, *tag);
		}
		named
	}

	/// Main descriptions per source set.
	pub fn descriptions(&self) -> PerSourceSet<'a, &'a TagWrapper> {
		self.unnamed(TagKind::Description)
	}

	/// Custom tags by name, then per source set.
	pub fn custom(&self) -> IndexMap<&'a str, PerSourceSet<'a, &'a TagWrapper>> {
		self.named(TagKind::Custom)
	}

	/// Unnamed tags without a dedicated section (author, since, return, ...), per source set and
	/// grouped by kind in first-seen order.
	pub fn supplementary(&self) -> PerSourceSet<'a, IndexMap<TagKind, Vec<&'a TagWrapper>>> {
		let mut grouped: PerSourceSet<'a, IndexMap<TagKind, Vec<&'a TagWrapper>>> = BTreeMap::new();
		for (kind, tags) in &self.by_kind {
			if kind.is_named() || kind.is_special() {
				continue;
			}
			for (source_set, tag) in tags {
				grouped
					.entry(*source_set)
					.or_default()
					.entry(*kind)
					.or_default()
					.push(*tag);
			}
		}
		grouped
	}
}

/// Value for `platform`, falling back along its dependency chain within `candidates`.
pub fn resolve_with_fallback<'a, T: Copy>(
	values: &PerSourceSet<'a, T>,
	platform: &SourceSet,
	candidates: &SourceSets,
) -> Option<T> {
	values.get(platform).copied().or_else(|| {
		platform
			.fallback_chain(candidates)
			.into_iter()
			.find_map(|fallback| values.get(fallback).copied())
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::{DocTag, DocumentationNode, Dri, Function, Platform};

	#[test]
	fn tags_on_foreign_source_sets_are_ignored() {
		let jvm = SourceSet::new("jvm", Platform::Jvm);
		let function = Function::new("f", Dri::package("p"))
			.on(&jvm)
			.with_doc("js", DocumentationNode::new(vec![TagWrapper::description(DocTag::plain("js only"))]));
		assert!(GroupedTags::of(&function).is_empty());
	}

	#[test]
	fn named_tags_keep_first_seen_order() {
		let jvm = SourceSet::new("jvm", Platform::Jvm);
		let function = Function::new("f", Dri::package("p")).on(&jvm).with_doc(
			&jvm,
			DocumentationNode::new(vec![
				TagWrapper::named(TagKind::Param, "b", DocTag::plain("second")),
				TagWrapper::named(TagKind::Param, "a", DocTag::plain("first")),
				TagWrapper::unnamed(TagKind::Since, DocTag::plain("1.0")),
			]),
		);
		let tags = GroupedTags::of(&function);
		let names: Vec<&str> = tags.named(TagKind::Param).keys().copied().collect();
		assert_eq!(names, vec!["b", "a"]);
		let supplementary = tags.supplementary();
		assert_eq!(supplementary[&jvm].keys().copied().collect::<Vec<_>>(), vec![TagKind::Since]);
	}

	#[test]
	fn fallback_is_used_only_when_direct_value_is_missing() {
		let common = SourceSet::new("common", Platform::Common);
		let jvm = SourceSet::new("jvm", Platform::Jvm).depends_on("common");
		let candidates: SourceSets = [common.clone(), jvm.clone()].into();

		let mut values: PerSourceSet<'_, &str> = BTreeMap::new();
		values.insert(&common, "shared");
		assert_eq!(resolve_with_fallback(&values, &jvm, &candidates), Some("shared"));

		values.insert(&jvm, "specific");
		assert_eq!(resolve_with_fallback(&values, &jvm, &candidates), Some("specific"));
	}
}
