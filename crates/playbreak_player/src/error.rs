//! Error types for series playback.

use thiserror::Error;

/// Failures reported by a host collaborator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
	/// Asset does not exist
	#[error("Asset not found: {0}")]
	NotFound(String),

	/// Any other host-side failure
	#[error("Host failure: {0}")]
	Failed(String),
}

/// Errors that can occur when driving break-list playbacks
#[derive(Debug, Error)]
pub enum PlayerError {
	/// Every series player slot is busy
	#[error("No free series player: all {capacity} slots are in use")]
	ResourceExhausted {
		/// Pool capacity
		capacity: usize,
	},

	/// Slot index outside the pool
	#[error("Invalid series player slot {slot} (pool holds {capacity})")]
	InvalidSlot {
		/// Requested slot
		slot: usize,
		/// Pool capacity
		capacity: usize,
	},

	/// Slot exists but has no playback
	#[error("Series player slot {0} is not running")]
	SlotNotRunning(usize),

	/// A sprite series could not be loaded
	#[error("Failed to load series '{name}': {source}")]
	SeriesLoad {
		/// Series name
		name: String,
		/// Host failure
		#[source]
		source: HostError,
	},

	/// Configuration error
	#[error(transparent)]
	Config(#[from] config::ConfigError),
}
