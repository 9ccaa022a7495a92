//! Documentation sections: description, tag sections and brief summaries.

use super::TAG_HEADER_LEVEL;
use super::tags::{GroupedTags, PerSourceSet, resolve_with_fallback};
use crate::content::{Attrs, ContentKind, DocumentableContentBuilder, Style};
use crate::model::{DocumentableRef, Documented, SourceSet, SourceSets, TagKind, TagWrapper};
use crate::providers::CustomTagContentProvider;

/// Per requested platform, the values found directly or along its fallback chain.
fn resolve_rows<'a>(
	values: &[PerSourceSet<'a, &'a TagWrapper>],
	platforms: &'a SourceSets,
) -> Vec<(&'a SourceSet, Vec<&'a TagWrapper>)> {
	platforms
		.iter()
		.filter_map(|platform| {
			let tags: Vec<&TagWrapper> = values
				.iter()
				.filter_map(|per_source_set| resolve_with_fallback(per_source_set, platform, platforms))
				.collect();
			(!tags.is_empty()).then_some((platform, tags))
		})
		.collect()
}

fn platforms_of(rows: &[(&SourceSet, Vec<&TagWrapper>)]) -> SourceSets {
	rows.iter().map(|(platform, _)| (*platform).clone()).collect()
}

impl DocumentableContentBuilder<'_> {
	/// Main description, one group per platform that has (or inherits) a non-empty one.
	pub fn description_section_content(&mut self, documentable: &dyn Documented, platforms: &SourceSets) {
		let tags = GroupedTags::of(documentable);
		let mut descriptions = tags.descriptions();
		// An empty description on a platform still inherits the shared one.
		descriptions.retain(|_, description| !description.is_empty());
		if descriptions.is_empty() {
			return;
		}

		for platform in platforms {
			if let Some(description) = resolve_with_fallback(&descriptions, platform, platforms) {
				self.group(Attrs::new().source_set(platform).style(Style::empty()), |group| {
					group.comment(description.root(), Attrs::new());
				});
			}
		}
	}

	/// Custom tags rendered by every applicable provider; unhandled tags are skipped.
	pub fn custom_tag_section_content(
		&mut self,
		documentable: &dyn Documented,
		platforms: &SourceSets,
		providers: &[Box<dyn CustomTagContentProvider>],
	) {
		let tags = GroupedTags::of(documentable);
		let custom = tags.custom();
		if custom.is_empty() {
			return;
		}

		for platform in platforms {
			for per_source_set in custom.values() {
				let Some(tag) = per_source_set.get(platform) else {
					continue;
				};
				for provider in providers.iter().filter(|provider| provider.is_applicable(tag)) {
					self.group(Attrs::new().source_set(platform).style(Style::KDOC_TAG), |group| {
						provider.content_for_description(group, platform, tag);
					});
				}
			}
		}
	}

	/// Author, version, since, return and receiver tags under a header named after their kind.
	pub fn unnamed_tag_section_content(&mut self, documentable: &dyn Documented, platforms: &SourceSets) {
		let tags = GroupedTags::of(documentable);
		let supplementary = tags.supplementary();

		for platform in platforms {
			let Some(by_kind) = supplementary.get(platform) else {
				continue;
			};
			for (kind, same_kind) in by_kind {
				self.group(Attrs::new().source_set(platform).style(Style::KDOC_TAG), |group| {
					group.header(TAG_HEADER_LEVEL, kind.label(), Attrs::new().style(Style::empty()), |_| {});
					for tag in same_kind {
						group.comment(tag.root(), Attrs::new().style(Style::empty()));
					}
				});
			}
		}
	}

	/// "Parameters" table with one row per parameter and platform.
	pub fn content_for_params(&mut self, source_sets: &SourceSets, tags: &GroupedTags<'_>) {
		if !tags.is_not_empty_for(TagKind::Param) {
			return;
		}
		let params: Vec<_> = tags.named(TagKind::Param).into_values().collect();
		let rows = resolve_rows(&params, source_sets);
		if rows.is_empty() {
			return;
		}
		let available = platforms_of(&rows);

		self.header(
			TAG_HEADER_LEVEL,
			"Parameters",
			Attrs::new().kind(ContentKind::Parameters).source_sets(available.clone()),
			|_| {},
		);
		let extra = self.main_extra().clone().with_header("Parameters");
		self.group(
			Attrs::new()
				.extra(extra)
				.style(Style::WITH_EXTRA_ATTRIBUTES)
				.source_sets(available.clone()),
			|group| {
				let main_style = group.main_style();
				group.table(
					Attrs::new().kind(ContentKind::Parameters).source_sets(available),
					|table| {
						for (platform, params) in &rows {
							for param in params {
								table.row(Attrs::new().source_set(platform).kind(ContentKind::Parameters), |row| {
									row.text(
										param.name().unwrap_or_default(),
										Attrs::new()
											.kind(ContentKind::Parameters)
											.style(main_style | Style::ROW_TITLE | Style::UNDERLINED),
									);
									if !param.is_empty() {
										row.comment(param.root(), Attrs::new());
									}
								});
							}
						}
					},
				);
			},
		);
	}

	/// "See also" table; resolved references link to their target.
	pub fn content_for_see_also(&mut self, source_sets: &SourceSets, tags: &GroupedTags<'_>) {
		if !tags.is_not_empty_for(TagKind::See) {
			return;
		}
		let see_also: Vec<_> = tags.named(TagKind::See).into_values().collect();
		let rows = resolve_rows(&see_also, source_sets);
		if rows.is_empty() {
			return;
		}
		let available = platforms_of(&rows);

		self.header(
			TAG_HEADER_LEVEL,
			"See also",
			Attrs::new().kind(ContentKind::Comment).source_sets(available.clone()),
			|_| {},
		);
		let extra = self.main_extra().clone().with_header("See also");
		self.group(
			Attrs::new()
				.extra(extra)
				.style(Style::WITH_EXTRA_ATTRIBUTES)
				.source_sets(available),
			|group| {
				let main_style = group.main_style();
				group.table(Attrs::new().kind(ContentKind::Comment), |table| {
					for (platform, tags) in &rows {
						for tag in tags {
							let (name, root) = (tag.name().unwrap_or_default(), tag.root());
							table.row(
								Attrs::new().source_set(platform).kind(ContentKind::Comment).style(main_style),
								|row| {
									let title = Attrs::new()
										.kind(ContentKind::Comment)
										.style(main_style | Style::ROW_TITLE);
									match tag.address() {
										Some(dri) => {
											let label = dri
												.package_name
												.as_deref()
												.and_then(|package| name.strip_prefix(package))
												.and_then(|rest| rest.strip_prefix('.'))
												.unwrap_or(name);
											row.link(label, dri, title);
										}
										None => row.text(name, title),
									}
									if !root.children().is_empty() {
										row.comment(root, Attrs::new());
									}
								},
							);
						}
					}
				});
			},
		);
	}

	/// "Throws" tables, one per platform; resolved exceptions link to their class.
	pub fn content_for_throws(&mut self, source_sets: &SourceSets, tags: &GroupedTags<'_>) {
		let throws: Vec<_> = tags.named(TagKind::Throws).into_values().collect();
		let rows = resolve_rows(&throws, source_sets);
		if rows.is_empty() {
			return;
		}
		let available = platforms_of(&rows);

		self.header(TAG_HEADER_LEVEL, "Throws", Attrs::new().source_sets(available), |_| {});
		let main_style = self.main_style();
		for (platform, tags) in &rows {
			let extra = self.main_extra().clone().with_header("Throws");
			self.table(
				Attrs::new().kind(ContentKind::Main).source_set(platform).extra(extra),
				|table| {
					for tag in tags {
						let (name, root) = (tag.name().unwrap_or_default(), tag.root());
						table.row(Attrs::new().source_set(platform), |row| {
							row.group(Attrs::new().style(main_style | Style::ROW_TITLE), |title| match tag.address() {
								Some(dri) => {
									let label = dri.class_names.as_deref().unwrap_or(name);
									title.link(label, dri, Attrs::new());
								}
								None => title.text(name, Attrs::new()),
							});
							if !root.children().is_empty() {
								row.comment(root, Attrs::new());
							}
						});
					}
				},
			);
		}
	}

	/// "Samples" listing the sample names available on each platform.
	pub fn content_for_samples(&mut self, source_sets: &SourceSets, tags: &GroupedTags<'_>) {
		let samples: Vec<_> = tags.named(TagKind::Sample).into_values().collect();
		let rows = resolve_rows(&samples, source_sets);
		if rows.is_empty() {
			return;
		}
		let available = platforms_of(&rows);

		self.header(
			TAG_HEADER_LEVEL,
			"Samples",
			Attrs::new().kind(ContentKind::Sample).source_sets(available),
			|_| {},
		);
		for (platform, samples) in &rows {
			self.group(
				Attrs::new()
					.source_set(platform)
					.kind(ContentKind::Sample)
					.style(Style::MONOSPACE | Style::RUNNABLE_SAMPLE),
				|group| {
					for sample in samples {
						group.text(sample.name().unwrap_or_default(), Attrs::new());
					}
				},
			);
		}
	}

	/// Parameter, see-also, throws and sample sections for already grouped tags.
	pub fn comment_sections(&mut self, source_sets: &SourceSets, tags: &GroupedTags<'_>) {
		if tags.is_empty() {
			return;
		}
		self.content_for_params(source_sets, tags);
		self.content_for_see_also(source_sets, tags);
		self.content_for_throws(source_sets, tags);
		self.content_for_samples(source_sets, tags);
	}

	/// One-paragraph summary per source set, used in listing rows.
	///
	/// Properties documented only through a `@property` tag use that tag instead of a description.
	/// Type aliases have no page of their own, so their whole comment is shown.
	pub fn content_for_brief(&mut self, documentable: DocumentableRef<'_>) {
		let documented = documentable.documented();
		for source_set in documented.source_sets() {
			let Some(documentation) = documented.documentation().get(&source_set.id) else {
				continue;
			};
			let tag = documentation.first_of(TagKind::Description).or_else(|| {
				documentable
					.is_property()
					.then(|| documentation.first_of(TagKind::Property))
					.flatten()
			});
			let Some(tag) = tag else {
				continue;
			};
			self.group(
				Attrs::new().source_set(source_set).kind(ContentKind::BriefComment),
				|group| {
					if documentable.has_separate_page() {
						group.first_paragraph_comment(tag.root(), Attrs::new());
					} else {
						group.comment(tag.root(), Attrs::new());
					}
				},
			);
		}
	}

	/// Brief contributions of custom tag providers.
	pub fn content_for_custom_tags_brief(
		&mut self,
		documentable: DocumentableRef<'_>,
		providers: &[Box<dyn CustomTagContentProvider>],
	) {
		let documented = documentable.documented();
		let tags = GroupedTags::of(documented);
		let custom = tags.custom();
		if custom.is_empty() {
			return;
		}

		for source_set in documented.source_sets() {
			for per_source_set in custom.values() {
				let Some(tag) = per_source_set.get(source_set) else {
					continue;
				};
				for provider in providers.iter().filter(|provider| provider.is_applicable(tag)) {
					provider.content_for_brief(self, source_set, tag);
				}
			}
		}
	}
}
