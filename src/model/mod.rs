//! Input model: the multi-platform documentable graph produced by analysis.

mod doc;
mod documentable;
mod dri;
mod extras;
mod source_set;

pub use doc::{DocTag, DocumentationNode, TagKind, TagWrapper};
pub use documentable::{
	Classlike, ClasslikeKind, Documentable, DocumentableRef, Documented, EnumEntry, Function, Module, Package, Parameter, Property, Scope, TypeAlias,
	dri_set, union_source_sets,
};
pub use dri::{Callable, Dri};
pub use extras::{Extras, InheritedMember};
pub use source_set::{Platform, SourceSet, SourceSetDependent, SourceSetGraph, SourceSetId, SourceSets};
