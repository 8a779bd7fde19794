//! Error types for building and loading break lists.

use thiserror::Error;

/// Errors that can occur when building or loading a break list
#[derive(Debug, Error)]
pub enum BreakListError {
	/// No sentinel found within the scan bound
	#[error("Missing sentinel: scanned {scanned} entries without finding a terminating break")]
	MissingSentinel {
		/// Number of entries scanned
		scanned: usize,
	},

	/// A sentinel appeared inside a length-terminated list
	#[error("Unexpected sentinel at entry {index}")]
	UnexpectedSentinel {
		/// Position of the offending entry
		index: usize,
	},

	/// List longer than the configured bound
	#[error("Break list too long: {len} entries, limit is {limit}")]
	TooLong {
		/// Number of entries in the list
		len: usize,
		/// Configured limit
		limit: usize,
	},

	/// JSON error
	#[error(transparent)]
	Json(#[from] serde_json::Error),

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}
