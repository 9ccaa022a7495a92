//! Detection and resolution of platform variants that share a DRI.
//!
//! In merge mode every DRI group becomes one page. Otherwise each member of a multi-variant
//! group gets a clash-aware name prefixed with the platforms it belongs to.

use std::borrow::Cow;
use std::collections::BTreeSet;

use indexmap::IndexMap;

use crate::model::{Documented, Dri};

/// Group items by DRI, keeping first-seen order of both groups and members.
pub fn group_by_dri<'t, T>(items: impl IntoIterator<Item = &'t T>) -> IndexMap<&'t Dri, Vec<&'t T>>
where
	T: Documented + ?Sized + 't,
{
	let mut groups: IndexMap<&'t Dri, Vec<&'t T>> = IndexMap::new();
	for item in items {
		groups.entry(item.dri()).or_default().push(item);
	}
	groups
}

/// One group per DRI.
pub fn merge_clashing<'t, T>(items: impl IntoIterator<Item = &'t T>) -> Vec<Vec<&'t T>>
where
	T: Documented + ?Sized + 't,
{
	group_by_dri(items).into_values().collect()
}

/// Items in DRI-group order, with clash-aware names attached to members of multi-variant groups.
///
/// Singletons are passed through untouched. Renamed members are copies; the input is never
/// modified.
pub fn rename_clashing<'t, T>(items: impl IntoIterator<Item = &'t T>) -> Vec<Cow<'t, T>>
where
	T: Documented + Clone + 't,
{
	group_by_dri(items)
		.into_values()
		.flat_map(|group| {
			let clashing = group.len() > 1;
			group.into_iter().map(move |item| {
				if clashing {
					rename(item)
				} else {
					Cow::Borrowed(item)
				}
			})
		})
		.collect()
}

fn rename<T: Documented + Clone>(item: &T) -> Cow<'_, T> {
	if !item.accepts_clash_name() {
		tracing::warn!(
			target: "docpage",
			dri = %item.dri(),
			"clashing declaration cannot carry a clash-aware name, keeping it unchanged"
		);
		return Cow::Borrowed(item);
	}
	let mut renamed = item.clone();
	renamed.extra_mut().clash_aware_name = Some(clashed_name(item));
	Cow::Owned(renamed)
}

/// `[platform, ...]name`, labelled with the recorded clashing source sets or the item's own.
///
/// Always derived from the declared name, so resolving twice yields the same result.
pub fn clashed_name(item: &(impl Documented + ?Sized)) -> String {
	let source_sets = item
		.extra()
		.clashing_dri_identifier
		.as_ref()
		.unwrap_or_else(|| item.source_sets());
	let labels: Vec<&str> = source_sets
		.iter()
		.map(|source_set| source_set.display_name.as_str())
		.collect();
	format!("[{}]{}", labels.join(", "), item.name().unwrap_or_default())
}

/// Clash-aware name when present, else the declared name, else empty.
pub fn name_after_clash(item: &(impl Documented + ?Sized)) -> String {
	item.extra()
		.clash_aware_name
		.clone()
		.or_else(|| item.name().map(str::to_string))
		.unwrap_or_default()
}

/// First DRI of a set that should hold exactly one; other cardinalities are reported, not fatal.
pub fn expect_single_dri<'d>(dris: &'d BTreeSet<Dri>, what: &str) -> Option<&'d Dri> {
	let first = dris.iter().next();
	if dris.len() != 1 {
		tracing::warn!(
			target: "docpage",
			count = dris.len(),
			dris = ?dris.iter().map(ToString::to_string).collect::<Vec<_>>(),
			"{what} DRIs should be identical within one page"
		);
	}
	first
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::{Classlike, ClasslikeKind, Extras, Platform, SourceSet, SourceSets};

	fn variant(source_set: &SourceSet) -> Classlike {
		Classlike::new("X", Dri::class("p", "X"), ClasslikeKind::class()).on(source_set)
	}

	#[test]
	fn singletons_are_borrowed() {
		let jvm = SourceSet::new("jvm", Platform::Jvm);
		let only = variant(&jvm);
		let renamed = rename_clashing([&only]);
		assert!(matches!(renamed[0], Cow::Borrowed(_)));
		assert_eq!(name_after_clash(renamed[0].as_ref()), "X");
	}

	#[test]
	fn clashing_variants_get_platform_prefixes() {
		let jvm = SourceSet::new("jvm", Platform::Jvm);
		let js = SourceSet::new("js", Platform::Js);
		let variants = [variant(&jvm), variant(&js)];
		let names: Vec<String> = rename_clashing(&variants)
			.iter()
			.map(|item| name_after_clash(item.as_ref()))
			.collect();
		assert_eq!(names, vec!["[jvm]X", "[js]X"]);
	}

	#[test]
	fn recorded_clash_identifier_wins_over_own_source_sets() {
		let jvm = SourceSet::new("jvm", Platform::Jvm).with_display_name("JVM");
		let js = SourceSet::new("js", Platform::Js).with_display_name("JS");
		let identifier: SourceSets = [jvm.clone(), js.clone()].into();
		let item = variant(&jvm).with_extras(Extras {
			clashing_dri_identifier: Some(identifier),
			..Extras::default()
		});
		assert_eq!(clashed_name(&item), "[JS, JVM]X");
	}

	#[test]
	fn merge_keeps_first_seen_group_order() {
		let jvm = SourceSet::new("jvm", Platform::Jvm);
		let a = Classlike::new("A", Dri::class("p", "A"), ClasslikeKind::class()).on(&jvm);
		let b = Classlike::new("B", Dri::class("p", "B"), ClasslikeKind::class()).on(&jvm);
		let items = [b.clone(), a, b];
		let groups = merge_clashing(&items);
		assert_eq!(groups.len(), 2);
		assert_eq!(groups[0].len(), 2);
		assert_eq!(groups[0][0].name.as_deref(), Some("B"));
	}
}
