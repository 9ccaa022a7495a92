//! Collaborators plugged into page translation, with default implementations.

mod comments;
mod custom_tags;
mod signature;

pub use comments::{CommentsToContentConverter, DocTagConverter};
pub use custom_tags::{CustomTagContentProvider, HeaderedTagProvider};
pub use signature::{DefaultSignatureProvider, SignatureProvider};
