use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::doc::DocumentationNode;
use super::dri::Dri;
use super::extras::Extras;
use super::source_set::{SourceSet, SourceSetDependent, SourceSetId, SourceSets};

/// Accessors shared by every node of the documentable graph.
pub trait Documented {
	/// Declared name; `None` for anonymous declarations.
	fn name(&self) -> Option<&str>;

	/// Structural identifier.
	fn dri(&self) -> &Dri;

	/// Parsed comments per source set.
	fn documentation(&self) -> &SourceSetDependent<DocumentationNode>;

	/// Mutable access to the comments.
	fn documentation_mut(&mut self) -> &mut SourceSetDependent<DocumentationNode>;

	/// Source sets the declaration exists in.
	fn source_sets(&self) -> &SourceSets;

	/// Mutable access to the source sets.
	fn source_sets_mut(&mut self) -> &mut SourceSets;

	/// Optional facets.
	fn extra(&self) -> &Extras;

	/// Mutable access to the facets.
	fn extra_mut(&mut self) -> &mut Extras;

	/// Wrap a copy of the node in the closed [`Documentable`] sum.
	fn to_documentable(&self) -> Documentable;

	/// Borrow the node as a [`DocumentableRef`].
	fn view(&self) -> DocumentableRef<'_>;

	/// Direct children in declaration order.
	fn children(&self) -> Vec<&dyn Documented> {
		Vec::new()
	}

	/// Whether the node can be given a clash-aware name.
	fn accepts_clash_name(&self) -> bool {
		true
	}

	/// Inherited on every source set it exists in.
	///
	/// A node without source sets is never considered inherited.
	fn is_inherited(&self) -> bool {
		let Some(inherited) = &self.extra().inherited_member else {
			return false;
		};
		let source_sets = self.source_sets();
		!source_sets.is_empty() && source_sets.iter().all(|source_set| inherited.is_inherited(&source_set.id))
	}

	/// Add the node to a source set.
	fn on(mut self, source_set: &SourceSet) -> Self
	where
		Self: Sized,
	{
		self.source_sets_mut().insert(source_set.clone());
		self
	}

	/// Attach the comment for one source set.
	fn with_doc(mut self, source_set: impl Into<SourceSetId>, documentation: DocumentationNode) -> Self
	where
		Self: Sized,
	{
		self.documentation_mut().insert(source_set.into(), documentation);
		self
	}

	/// Replace the facets.
	fn with_extras(mut self, extra: Extras) -> Self
	where
		Self: Sized,
	{
		*self.extra_mut() = extra;
		self
	}
}

macro_rules! documented_common {
	() => {
		fn dri(&self) -> &Dri {
			&self.dri
		}

		fn documentation(&self) -> &SourceSetDependent<DocumentationNode> {
			&self.documentation
		}

		fn documentation_mut(&mut self) -> &mut SourceSetDependent<DocumentationNode> {
			&mut self.documentation
		}

		fn source_sets(&self) -> &SourceSets {
			&self.source_sets
		}

		fn source_sets_mut(&mut self) -> &mut SourceSets {
			&mut self.source_sets
		}

		fn extra(&self) -> &Extras {
			&self.extra
		}

		fn extra_mut(&mut self) -> &mut Extras {
			&mut self.extra
		}

		fn to_documentable(&self) -> Documentable {
			Documentable::from(self.clone())
		}

		fn view(&self) -> DocumentableRef<'_> {
			DocumentableRef::from(self)
		}
	};
}

fn as_dyn<T: Documented>(items: &[T]) -> impl Iterator<Item = &dyn Documented> {
	items.iter().map(|item| item as &dyn Documented)
}

/// Root of the graph: one documented module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
	/// Module name; may be empty.
	pub name: String,
	/// Identifier.
	#[serde(default)]
	pub dri: Dri,
	/// Module-level documentation.
	#[serde(default)]
	pub documentation: SourceSetDependent<DocumentationNode>,
	/// Source sets.
	#[serde(default)]
	pub source_sets: SourceSets,
	/// Packages in declaration order.
	#[serde(default)]
	pub packages: Vec<Package>,
	/// Facets.
	#[serde(default)]
	pub extra: Extras,
}

impl Module {
	/// Empty module.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			..Self::default()
		}
	}

	/// Append a package.
	pub fn with_package(mut self, package: Package) -> Self {
		self.packages.push(package);
		self
	}
}

impl Documented for Module {
	documented_common!();

	fn name(&self) -> Option<&str> {
		Some(&self.name)
	}

	fn children(&self) -> Vec<&dyn Documented> {
		as_dyn(&self.packages).collect()
	}

	fn accepts_clash_name(&self) -> bool {
		false
	}
}

/// Package of a module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
	/// Dotted package name.
	pub name: String,
	/// Identifier.
	#[serde(default)]
	pub dri: Dri,
	/// Package documentation.
	#[serde(default)]
	pub documentation: SourceSetDependent<DocumentationNode>,
	/// Source sets.
	#[serde(default)]
	pub source_sets: SourceSets,
	/// Top-level classlikes.
	#[serde(default)]
	pub classlikes: Vec<Classlike>,
	/// Top-level functions.
	#[serde(default)]
	pub functions: Vec<Function>,
	/// Top-level properties.
	#[serde(default)]
	pub properties: Vec<Property>,
	/// Type aliases.
	#[serde(default)]
	pub typealiases: Vec<TypeAlias>,
	/// Facets.
	#[serde(default)]
	pub extra: Extras,
}

impl Package {
	/// Empty package whose DRI is derived from its name.
	pub fn new(name: impl Into<String>) -> Self {
		let name = name.into();
		Self {
			dri: Dri::package(name.clone()),
			name,
			..Self::default()
		}
	}

	/// Append a classlike.
	pub fn with_classlike(mut self, classlike: Classlike) -> Self {
		self.classlikes.push(classlike);
		self
	}

	/// Append a function.
	pub fn with_function(mut self, function: Function) -> Self {
		self.functions.push(function);
		self
	}

	/// Append a property.
	pub fn with_property(mut self, property: Property) -> Self {
		self.properties.push(property);
		self
	}

	/// Append a type alias.
	pub fn with_typealias(mut self, typealias: TypeAlias) -> Self {
		self.typealiases.push(typealias);
		self
	}

	/// Member view of the package.
	pub fn scope(&self) -> Scope<'_> {
		Scope {
			dri: &self.dri,
			classlikes: &self.classlikes,
			functions: &self.functions,
			properties: &self.properties,
			typealiases: &self.typealiases,
			extra: &self.extra,
		}
	}
}

impl Documented for Package {
	documented_common!();

	fn name(&self) -> Option<&str> {
		Some(&self.name)
	}

	fn children(&self) -> Vec<&dyn Documented> {
		as_dyn(&self.classlikes)
			.chain(as_dyn(&self.functions))
			.chain(as_dyn(&self.properties))
			.chain(as_dyn(&self.typealiases))
			.collect()
	}

	fn accepts_clash_name(&self) -> bool {
		false
	}
}

/// Flavour of a classlike together with its kind-specific members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClasslikeKind {
	/// `class`
	Class {
		/// Constructors.
		#[serde(default)]
		constructors: Vec<Function>,
	},
	/// `interface`
	Interface,
	/// `object`
	Object,
	/// `enum class`
	Enum {
		/// Constructors.
		#[serde(default)]
		constructors: Vec<Function>,
		/// Entries in declaration order.
		#[serde(default)]
		entries: Vec<EnumEntry>,
	},
	/// `annotation class`
	Annotation {
		/// Constructors.
		#[serde(default)]
		constructors: Vec<Function>,
	},
}

impl ClasslikeKind {
	/// A class without constructors.
	pub fn class() -> Self {
		Self::Class { constructors: Vec::new() }
	}

	/// An enum without entries.
	pub fn enumeration() -> Self {
		Self::Enum {
			constructors: Vec::new(),
			entries: Vec::new(),
		}
	}

	/// An annotation without constructors.
	pub fn annotation() -> Self {
		Self::Annotation { constructors: Vec::new() }
	}

	/// Declaration keyword.
	pub fn keyword(&self) -> &'static str {
		match self {
			Self::Class { .. } => "class",
			Self::Interface => "interface",
			Self::Object => "object",
			Self::Enum { .. } => "enum class",
			Self::Annotation { .. } => "annotation class",
		}
	}
}

/// Class, interface, object, enum or annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classlike {
	/// Simple name; `None` for anonymous objects.
	pub name: Option<String>,
	/// Identifier.
	pub dri: Dri,
	/// Comments.
	#[serde(default)]
	pub documentation: SourceSetDependent<DocumentationNode>,
	/// Source sets.
	#[serde(default)]
	pub source_sets: SourceSets,
	/// Flavour and kind-specific members.
	#[serde(flatten)]
	pub kind: ClasslikeKind,
	/// Nested classlikes.
	#[serde(default)]
	pub classlikes: Vec<Classlike>,
	/// Member functions, declared and inherited.
	#[serde(default)]
	pub functions: Vec<Function>,
	/// Member properties, declared and inherited.
	#[serde(default)]
	pub properties: Vec<Property>,
	/// Facets.
	#[serde(default)]
	pub extra: Extras,
}

impl Classlike {
	/// Empty classlike of the given flavour.
	pub fn new(name: impl Into<String>, dri: Dri, kind: ClasslikeKind) -> Self {
		Self {
			name: Some(name.into()),
			dri,
			documentation: SourceSetDependent::new(),
			source_sets: SourceSets::new(),
			kind,
			classlikes: Vec::new(),
			functions: Vec::new(),
			properties: Vec::new(),
			extra: Extras::default(),
		}
	}

	/// Constructors of classes, enums and annotations.
	pub fn constructors(&self) -> &[Function] {
		match &self.kind {
			ClasslikeKind::Class { constructors }
			| ClasslikeKind::Enum { constructors, .. }
			| ClasslikeKind::Annotation { constructors } => constructors,
			ClasslikeKind::Interface | ClasslikeKind::Object => &[],
		}
	}

	/// Entries of an enum.
	pub fn entries(&self) -> &[EnumEntry] {
		match &self.kind {
			ClasslikeKind::Enum { entries, .. } => entries,
			_ => &[],
		}
	}

	/// Whether this is an annotation class.
	pub fn is_annotation(&self) -> bool {
		matches!(self.kind, ClasslikeKind::Annotation { .. })
	}

	/// Whether this is an enum.
	pub fn is_enum(&self) -> bool {
		matches!(self.kind, ClasslikeKind::Enum { .. })
	}

	/// Whether the flavour can declare constructors.
	pub fn has_constructors(&self) -> bool {
		!matches!(self.kind, ClasslikeKind::Interface | ClasslikeKind::Object)
	}

	/// Add a constructor; ignored for flavours without constructors.
	pub fn with_constructor(mut self, constructor: Function) -> Self {
		match &mut self.kind {
			ClasslikeKind::Class { constructors }
			| ClasslikeKind::Enum { constructors, .. }
			| ClasslikeKind::Annotation { constructors } => constructors.push(constructor.constructor()),
			ClasslikeKind::Interface | ClasslikeKind::Object => {}
		}
		self
	}

	/// Add an entry; ignored unless this is an enum.
	pub fn with_entry(mut self, entry: EnumEntry) -> Self {
		if let ClasslikeKind::Enum { entries, .. } = &mut self.kind {
			entries.push(entry);
		}
		self
	}

	/// Append a nested classlike.
	pub fn with_classlike(mut self, classlike: Classlike) -> Self {
		self.classlikes.push(classlike);
		self
	}

	/// Append a member function.
	pub fn with_function(mut self, function: Function) -> Self {
		self.functions.push(function);
		self
	}

	/// Append a member property.
	pub fn with_property(mut self, property: Property) -> Self {
		self.properties.push(property);
		self
	}

	/// Member view of the classlike.
	pub fn scope(&self) -> Scope<'_> {
		Scope {
			dri: &self.dri,
			classlikes: &self.classlikes,
			functions: &self.functions,
			properties: &self.properties,
			typealiases: &[],
			extra: &self.extra,
		}
	}
}

impl Documented for Classlike {
	documented_common!();

	fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	fn children(&self) -> Vec<&dyn Documented> {
		as_dyn(self.constructors())
			.chain(as_dyn(self.entries()))
			.chain(as_dyn(&self.classlikes))
			.chain(as_dyn(&self.functions))
			.chain(as_dyn(&self.properties))
			.collect()
	}
}

/// One entry of an enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumEntry {
	/// Entry name.
	pub name: Option<String>,
	/// Identifier.
	pub dri: Dri,
	/// Comments.
	#[serde(default)]
	pub documentation: SourceSetDependent<DocumentationNode>,
	/// Source sets.
	#[serde(default)]
	pub source_sets: SourceSets,
	/// Classlikes declared in the entry body.
	#[serde(default)]
	pub classlikes: Vec<Classlike>,
	/// Functions of the entry body.
	#[serde(default)]
	pub functions: Vec<Function>,
	/// Properties of the entry body.
	#[serde(default)]
	pub properties: Vec<Property>,
	/// Facets.
	#[serde(default)]
	pub extra: Extras,
}

impl EnumEntry {
	/// Empty entry.
	pub fn new(name: impl Into<String>, dri: Dri) -> Self {
		Self {
			name: Some(name.into()),
			dri,
			documentation: SourceSetDependent::new(),
			source_sets: SourceSets::new(),
			classlikes: Vec::new(),
			functions: Vec::new(),
			properties: Vec::new(),
			extra: Extras::default(),
		}
	}

	/// Append a function to the entry body.
	pub fn with_function(mut self, function: Function) -> Self {
		self.functions.push(function);
		self
	}

	/// Append a property to the entry body.
	pub fn with_property(mut self, property: Property) -> Self {
		self.properties.push(property);
		self
	}

	/// Append a classlike to the entry body.
	pub fn with_classlike(mut self, classlike: Classlike) -> Self {
		self.classlikes.push(classlike);
		self
	}

	/// Member view of the entry body.
	pub fn scope(&self) -> Scope<'_> {
		Scope {
			dri: &self.dri,
			classlikes: &self.classlikes,
			functions: &self.functions,
			properties: &self.properties,
			typealiases: &[],
			extra: &self.extra,
		}
	}
}

impl Documented for EnumEntry {
	documented_common!();

	fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	fn children(&self) -> Vec<&dyn Documented> {
		as_dyn(&self.classlikes)
			.chain(as_dyn(&self.functions))
			.chain(as_dyn(&self.properties))
			.collect()
	}
}

/// Function, method or constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
	/// Function name.
	pub name: Option<String>,
	/// Identifier.
	pub dri: Dri,
	/// Comments.
	#[serde(default)]
	pub documentation: SourceSetDependent<DocumentationNode>,
	/// Source sets.
	#[serde(default)]
	pub source_sets: SourceSets,
	/// Value parameters.
	#[serde(default)]
	pub parameters: Vec<Parameter>,
	/// Extension receiver.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub receiver: Option<Parameter>,
	/// Rendered return type.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub return_type: Option<String>,
	/// Whether this is a constructor.
	#[serde(default)]
	pub is_constructor: bool,
	/// Facets.
	#[serde(default)]
	pub extra: Extras,
}

impl Function {
	/// Function without parameters.
	pub fn new(name: impl Into<String>, dri: Dri) -> Self {
		Self {
			name: Some(name.into()),
			dri,
			documentation: SourceSetDependent::new(),
			source_sets: SourceSets::new(),
			parameters: Vec::new(),
			receiver: None,
			return_type: None,
			is_constructor: false,
			extra: Extras::default(),
		}
	}

	/// Append a value parameter.
	pub fn with_parameter(mut self, parameter: Parameter) -> Self {
		self.parameters.push(parameter);
		self
	}

	/// Make the function an extension on `receiver`.
	pub fn with_receiver(mut self, receiver: Parameter) -> Self {
		self.receiver = Some(receiver);
		self
	}

	/// Set the rendered return type.
	pub fn returning(mut self, return_type: impl Into<String>) -> Self {
		self.return_type = Some(return_type.into());
		self
	}

	/// Mark the function as a constructor.
	pub fn constructor(mut self) -> Self {
		self.is_constructor = true;
		self
	}
}

impl Documented for Function {
	documented_common!();

	fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	fn children(&self) -> Vec<&dyn Documented> {
		self.receiver
			.iter()
			.map(|receiver| receiver as &dyn Documented)
			.chain(as_dyn(&self.parameters))
			.collect()
	}
}

/// Property or field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
	/// Property name.
	pub name: Option<String>,
	/// Identifier.
	pub dri: Dri,
	/// Comments.
	#[serde(default)]
	pub documentation: SourceSetDependent<DocumentationNode>,
	/// Source sets.
	#[serde(default)]
	pub source_sets: SourceSets,
	/// Rendered type.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub type_name: Option<String>,
	/// `var` rather than `val`.
	#[serde(default)]
	pub is_mutable: bool,
	/// Facets.
	#[serde(default)]
	pub extra: Extras,
}

impl Property {
	/// Read-only property without a type.
	pub fn new(name: impl Into<String>, dri: Dri) -> Self {
		Self {
			name: Some(name.into()),
			dri,
			documentation: SourceSetDependent::new(),
			source_sets: SourceSets::new(),
			type_name: None,
			is_mutable: false,
			extra: Extras::default(),
		}
	}

	/// Set the rendered type.
	pub fn typed(mut self, type_name: impl Into<String>) -> Self {
		self.type_name = Some(type_name.into());
		self
	}

	/// Mark the property as mutable.
	pub fn mutable(mut self) -> Self {
		self.is_mutable = true;
		self
	}
}

impl Documented for Property {
	documented_common!();

	fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}
}

/// Value parameter or receiver of a function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
	/// Parameter name; receivers are unnamed.
	pub name: Option<String>,
	/// Identifier.
	pub dri: Dri,
	/// Comments.
	#[serde(default)]
	pub documentation: SourceSetDependent<DocumentationNode>,
	/// Source sets.
	#[serde(default)]
	pub source_sets: SourceSets,
	/// Rendered type.
	pub type_name: String,
	/// Facets.
	#[serde(default)]
	pub extra: Extras,
}

impl Parameter {
	/// Named parameter.
	pub fn new(name: impl Into<String>, type_name: impl Into<String>, dri: Dri) -> Self {
		Self {
			name: Some(name.into()),
			dri,
			documentation: SourceSetDependent::new(),
			source_sets: SourceSets::new(),
			type_name: type_name.into(),
			extra: Extras::default(),
		}
	}

	/// Unnamed receiver parameter.
	pub fn receiver(type_name: impl Into<String>, dri: Dri) -> Self {
		Self {
			name: None,
			..Self::new("", type_name, dri)
		}
	}
}

impl Documented for Parameter {
	documented_common!();

	fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	fn accepts_clash_name(&self) -> bool {
		false
	}
}

/// `typealias` declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeAlias {
	/// Alias name.
	pub name: Option<String>,
	/// Identifier.
	pub dri: Dri,
	/// Comments.
	#[serde(default)]
	pub documentation: SourceSetDependent<DocumentationNode>,
	/// Source sets.
	#[serde(default)]
	pub source_sets: SourceSets,
	/// Rendered aliased type.
	pub underlying: String,
	/// Facets.
	#[serde(default)]
	pub extra: Extras,
}

impl TypeAlias {
	/// Alias for `underlying`.
	pub fn new(name: impl Into<String>, dri: Dri, underlying: impl Into<String>) -> Self {
		Self {
			name: Some(name.into()),
			dri,
			documentation: SourceSetDependent::new(),
			source_sets: SourceSets::new(),
			underlying: underlying.into(),
			extra: Extras::default(),
		}
	}
}

impl Documented for TypeAlias {
	documented_common!();

	fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}
}

/// Any node of the documentable graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "documentable", rename_all = "snake_case")]
pub enum Documentable {
	/// Module.
	Module(Module),
	/// Package.
	Package(Package),
	/// Classlike.
	Classlike(Classlike),
	/// Enum entry.
	EnumEntry(EnumEntry),
	/// Function.
	Function(Function),
	/// Property.
	Property(Property),
	/// Parameter.
	Parameter(Parameter),
	/// Type alias.
	TypeAlias(TypeAlias),
}

macro_rules! each_variant {
	($value:expr, $inner:ident => $body:expr) => {
		match $value {
			Documentable::Module($inner) => $body,
			Documentable::Package($inner) => $body,
			Documentable::Classlike($inner) => $body,
			Documentable::EnumEntry($inner) => $body,
			Documentable::Function($inner) => $body,
			Documentable::Property($inner) => $body,
			Documentable::Parameter($inner) => $body,
			Documentable::TypeAlias($inner) => $body,
		}
	};
}

macro_rules! documentable_from {
	($($variant:ident),* $(,)?) => {
		$(
			impl From<$variant> for Documentable {
				fn from(value: $variant) -> Self {
					Self::$variant(value)
				}
			}

			impl<'a> From<&'a $variant> for DocumentableRef<'a> {
				fn from(value: &'a $variant) -> Self {
					Self::$variant(value)
				}
			}
		)*
	};
}

documentable_from!(Module, Package, Classlike, EnumEntry, Function, Property, Parameter, TypeAlias);

impl Documented for Documentable {
	fn name(&self) -> Option<&str> {
		each_variant!(self, inner => inner.name())
	}

	fn dri(&self) -> &Dri {
		each_variant!(self, inner => inner.dri())
	}

	fn documentation(&self) -> &SourceSetDependent<DocumentationNode> {
		each_variant!(self, inner => inner.documentation())
	}

	fn documentation_mut(&mut self) -> &mut SourceSetDependent<DocumentationNode> {
		each_variant!(self, inner => inner.documentation_mut())
	}

	fn source_sets(&self) -> &SourceSets {
		each_variant!(self, inner => inner.source_sets())
	}

	fn source_sets_mut(&mut self) -> &mut SourceSets {
		each_variant!(self, inner => inner.source_sets_mut())
	}

	fn extra(&self) -> &Extras {
		each_variant!(self, inner => inner.extra())
	}

	fn extra_mut(&mut self) -> &mut Extras {
		each_variant!(self, inner => inner.extra_mut())
	}

	fn to_documentable(&self) -> Documentable {
		self.clone()
	}

	fn view(&self) -> DocumentableRef<'_> {
		each_variant!(self, inner => inner.view())
	}

	fn children(&self) -> Vec<&dyn Documented> {
		each_variant!(self, inner => inner.children())
	}

	fn accepts_clash_name(&self) -> bool {
		each_variant!(self, inner => inner.accepts_clash_name())
	}
}

/// Borrowed view of any node of the documentable graph.
#[derive(Debug, Clone, Copy)]
pub enum DocumentableRef<'a> {
	/// Module.
	Module(&'a Module),
	/// Package.
	Package(&'a Package),
	/// Classlike.
	Classlike(&'a Classlike),
	/// Enum entry.
	EnumEntry(&'a EnumEntry),
	/// Function.
	Function(&'a Function),
	/// Property.
	Property(&'a Property),
	/// Parameter.
	Parameter(&'a Parameter),
	/// Type alias.
	TypeAlias(&'a TypeAlias),
}

impl<'a> DocumentableRef<'a> {
	/// Common accessors of the node.
	pub fn documented(self) -> &'a dyn Documented {
		match self {
			Self::Module(inner) => inner,
			Self::Package(inner) => inner,
			Self::Classlike(inner) => inner,
			Self::EnumEntry(inner) => inner,
			Self::Function(inner) => inner,
			Self::Property(inner) => inner,
			Self::Parameter(inner) => inner,
			Self::TypeAlias(inner) => inner,
		}
	}

	/// Whether the node is rendered on a page of its own.
	pub fn has_separate_page(self) -> bool {
		!matches!(self, Self::TypeAlias(_))
	}

	/// Whether the node is a property.
	pub fn is_property(self) -> bool {
		matches!(self, Self::Property(_))
	}

	/// The classlike inside, if any.
	pub fn as_classlike(self) -> Option<&'a Classlike> {
		match self {
			Self::Classlike(classlike) => Some(classlike),
			_ => None,
		}
	}

	/// Member view for packages, classlikes and enum entries.
	pub fn as_scope(self) -> Option<Scope<'a>> {
		match self {
			Self::Package(package) => Some(package.scope()),
			Self::Classlike(classlike) => Some(classlike.scope()),
			Self::EnumEntry(entry) => Some(entry.scope()),
			_ => None,
		}
	}
}

/// Borrowed member lists of a package, classlike or enum entry.
#[derive(Debug, Clone, Copy)]
pub struct Scope<'a> {
	/// Identifier of the owner.
	pub dri: &'a Dri,
	/// Nested classlikes.
	pub classlikes: &'a [Classlike],
	/// Functions.
	pub functions: &'a [Function],
	/// Properties.
	pub properties: &'a [Property],
	/// Type aliases; only packages declare them.
	pub typealiases: &'a [TypeAlias],
	/// Facets of the owner.
	pub extra: &'a Extras,
}

/// Distinct DRIs of a list of nodes.
pub fn dri_set<'a, T>(items: impl IntoIterator<Item = &'a T>) -> BTreeSet<Dri>
where
	T: Documented + ?Sized + 'a,
{
	items.into_iter().map(|item| item.dri().clone()).collect()
}

/// Union of the source sets of a list of nodes.
pub fn union_source_sets<'a, T>(items: impl IntoIterator<Item = &'a T>) -> SourceSets
where
	T: Documented + ?Sized + 'a,
{
	items
		.into_iter()
		.flat_map(|item| item.source_sets().iter().cloned())
		.collect()
}
