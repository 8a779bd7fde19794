//! This module is separated into its own crate so the root `playbreak-rs` crate stays a thin facade, and should not be used directly.

/// `use playbreak_rs::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export the member crates for convenience
pub use playbreak_player;
pub use playbreak_types;

// Re-export commonly used types at crate root
pub use playbreak_player::{
	Advance, PlayRequest, PlayerConfig, PlayerError, SeriesPlayers, SlotHandle, host, preload,
	recording,
};
pub use playbreak_types::{BreakListError, breaks, flags, vars};
