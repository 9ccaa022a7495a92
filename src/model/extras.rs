use serde::{Deserialize, Serialize};

use super::documentable::Documentable;
use super::dri::Dri;
use super::source_set::{SourceSetDependent, SourceSetId, SourceSets};

/// Records, per source set, where a member was inherited from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InheritedMember {
	/// `Some(dri)` of the declaring supertype when inherited on that source set, `None` when declared.
	pub inherited_from: SourceSetDependent<Option<Dri>>,
}

impl InheritedMember {
	/// Whether the member is inherited on the given source set.
	pub fn is_inherited(&self, source_set: &SourceSetId) -> bool {
		matches!(self.inherited_from.get(source_set), Some(Some(_)))
	}
}

/// Optional facets attached to a documentable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Extras {
	/// Disambiguated display name injected when platform variants clash.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub clash_aware_name: Option<String>,
	/// Source sets whose declarations share this DRI, recorded upstream.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub clashing_dri_identifier: Option<SourceSets>,
	/// Inheritance information for members.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub inherited_member: Option<InheritedMember>,
	/// Subtypes of a classlike, per source set.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub inheritors: Option<SourceSetDependent<Vec<Dri>>>,
	/// Extension callables declared elsewhere for this classlike.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub extensions: Vec<Documentable>,
}

impl Extras {
	/// Inheritor lists that are not empty.
	pub fn non_empty_inheritors(&self) -> impl Iterator<Item = (&SourceSetId, &Vec<Dri>)> {
		self.inheritors
			.iter()
			.flatten()
			.filter(|(_, dris)| !dris.is_empty())
	}
}
