use thiserror::Error;

use crate::model::SourceSetId;

/// Errors surfaced at the edges of page translation.
///
/// Translation itself never fails: recoverable inconsistencies in the documentable graph are
/// reported through `tracing` and worked around. Only invalid inputs end up here.
#[derive(Debug, Error)]
pub enum DocError {
	/// Source sets depend on each other in a loop, so fallback resolution would not terminate.
	#[error("source set dependency cycle: {}", format_cycle(.cycle))]
	CyclicSourceSets {
		/// Identifiers along the cycle; the first one is repeated at the end.
		cycle: Vec<SourceSetId>,
	},
	/// Two different source sets were declared with the same identifier.
	#[error("source set `{id}` is defined more than once with different attributes")]
	ConflictingSourceSet {
		/// The duplicated identifier.
		id: SourceSetId,
	},
	/// Failed to decode a configuration blob.
	#[error("invalid page creator configuration: {0}")]
	Config(#[from] serde_json::Error),
}

fn format_cycle(cycle: &[SourceSetId]) -> String {
	cycle.iter().map(SourceSetId::as_str).collect::<Vec<_>>().join(" -> ")
}

/// Result type returned by the docpage library.
pub type Result<T> = std::result::Result<T, DocError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn cycle_message_lists_the_path() {
		let err = DocError::CyclicSourceSets {
			cycle: vec!["a".into(), "b".into(), "a".into()],
		};
		assert_eq!(err.to_string(), "source set dependency cycle: a -> b -> a");
	}
}
