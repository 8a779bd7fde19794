//! Validation limits for break lists.
//!
//! Sentinel-terminated tables are scanned for their terminator; the scan is
//! bounded so a table that lost its sentinel is rejected instead of read past
//! its end.

use serde::{Deserialize, Serialize};

/// Configuration for validating break lists.
///
/// # Presets
///
/// - `default()`: 256 entries
/// - `lenient()`: 4096 entries, for generated or very long cutscenes
/// - `strict()`: 64 entries, enough for any hand-written room table
///
/// # Examples
///
/// ```
/// use playbreak_types::breaks::ListConfig;
///
/// let config = ListConfig::default();
/// assert_eq!(config.max_entries, 256);
///
/// let config = ListConfig::new(32);
/// assert_eq!(config.max_entries, 32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
	/// Maximum number of entries scanned for the sentinel, the sentinel included
	pub max_entries: usize,
}

impl Default for ListConfig {
	fn default() -> Self {
		Self {
			max_entries: 256,
		}
	}
}

impl ListConfig {
	/// Create a configuration with a custom scan bound.
	pub fn new(max_entries: usize) -> Self {
		Self {
			max_entries,
		}
	}

	/// Create a lenient configuration (4096 entries).
	pub fn lenient() -> Self {
		Self {
			max_entries: 4096,
		}
	}

	/// Create a strict configuration (64 entries).
	pub fn strict() -> Self {
		Self {
			max_entries: 64,
		}
	}
}
