//! Page creation for multi-platform API documentation.
//!
//! Takes the documentable graph of one module, where every declaration may exist on several
//! source sets (platforms), and builds a tree of pages whose renderer-independent content
//! groups platform variants, falls back to shared documentation and lists members.
//!
//! The entry point is [`PageCreator::translate`].

/// Configuration of the page creator.
pub mod config;

/// Renderer-independent content tree and its builder.
pub mod content;

/// Error type and result alias.
pub mod error;

/// Input documentable graph.
pub mod model;

/// Page tree.
pub mod page;

/// Pluggable signature, comment and custom tag rendering.
pub mod providers;

/// Documentable to page translation.
pub mod translate;

pub use crate::config::PageCreatorConfig;
pub use crate::content::{ContentBody, ContentKind, ContentNode, Style};
pub use crate::error::{DocError, Result};
pub use crate::model::{
	Classlike, ClasslikeKind, Documentable, Documented, Dri, EnumEntry, Function, Module, Package, Parameter, Platform, Property, SourceSet, TypeAlias,
};
pub use crate::page::{Page, PageKind};
pub use crate::translate::PageCreator;
