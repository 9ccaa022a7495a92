use std::fmt;

use serde::{Deserialize, Serialize};

/// Callable part of a [`Dri`]: the callable's name plus its receiver and parameter types.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Callable {
	/// Name of the function or property.
	pub name: String,
	/// Rendered receiver type for extension callables.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub receiver: Option<String>,
	/// Rendered parameter types, in declaration order.
	#[serde(default)]
	pub params: Vec<String>,
}

impl Callable {
	/// Create a callable signature with the given parameter types.
	pub fn new<I, S>(name: impl Into<String>, params: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			name: name.into(),
			receiver: None,
			params: params.into_iter().map(Into::into).collect(),
		}
	}

	/// Attach a receiver type, turning the callable into an extension.
	pub fn with_receiver(mut self, receiver: impl Into<String>) -> Self {
		self.receiver = Some(receiver.into());
		self
	}
}

impl fmt::Display for Callable {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if let Some(receiver) = &self.receiver {
			write!(f, "{receiver}.")?;
		}
		write!(f, "{}({})", self.name, self.params.join(","))
	}
}

/// Structural identifier addressing one symbol.
///
/// A DRI is unique within one platform variant but shared by all platform variants of the
/// same declaration, which is what makes expect/actual clashes detectable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Dri {
	/// Dotted package path, `None` for the module root.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub package_name: Option<String>,
	/// Dotted chain of enclosing class names.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub class_names: Option<String>,
	/// Callable signature for functions and properties.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub callable: Option<Callable>,
	/// Free-form discriminator used for synthetic symbols such as enum entries.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub extra: Option<String>,
}

impl Dri {
	/// DRI of a package.
	pub fn package(package_name: impl Into<String>) -> Self {
		Self {
			package_name: Some(package_name.into()),
			..Self::default()
		}
	}

	/// DRI of a classlike inside a package.
	pub fn class(package_name: impl Into<String>, class_names: impl Into<String>) -> Self {
		Self {
			package_name: Some(package_name.into()),
			class_names: Some(class_names.into()),
			..Self::default()
		}
	}

	/// Extend the DRI with a callable signature.
	pub fn with_callable(mut self, callable: Callable) -> Self {
		self.callable = Some(callable);
		self
	}

	/// Extend the DRI with a nested class name.
	pub fn nested(mut self, class_name: &str) -> Self {
		self.class_names = Some(match self.class_names.take() {
			Some(outer) => format!("{outer}.{class_name}"),
			None => class_name.to_string(),
		});
		self
	}

	/// Attach a free-form discriminator.
	pub fn with_extra(mut self, extra: impl Into<String>) -> Self {
		self.extra = Some(extra.into());
		self
	}

	/// Innermost class name, used as a display label when the symbol has no page of its own.
	pub fn simple_class_name(&self) -> Option<&str> {
		self.class_names
			.as_deref()
			.and_then(|names| names.rsplit('.').next())
			.filter(|name| !name.is_empty())
	}
}

impl fmt::Display for Dri {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{}/{}/{}/{}",
			self.package_name.as_deref().unwrap_or_default(),
			self.class_names.as_deref().unwrap_or_default(),
			self.callable
				.as_ref()
				.map(ToString::to_string)
				.unwrap_or_default(),
			self.extra.as_deref().unwrap_or_default()
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display_includes_every_segment() {
		let dri = Dri::class("sample", "Outer.Inner")
			.with_callable(Callable::new("run", ["kotlin.Int"]).with_receiver("kotlin.String"));
		assert_eq!(
			dri.to_string(),
			"sample/Outer.Inner/kotlin.String.run(kotlin.Int)/"
		);
	}

	#[test]
	fn simple_class_name_takes_innermost_segment() {
		assert_eq!(
			Dri::class("sample", "Outer.Inner").simple_class_name(),
			Some("Inner")
		);
		assert_eq!(Dri::package("sample").simple_class_name(), None);
	}

	#[test]
	fn nested_appends_class_segment() {
		let dri = Dri::package("sample").nested("A").nested("B");
		assert_eq!(dri.class_names.as_deref(), Some("A.B"));
	}
}
