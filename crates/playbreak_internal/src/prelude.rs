//! Prelude module for `playbreak_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```rust
//! use playbreak_internal::prelude::*;
//!
//! let list = BreakList::from_entries(vec![Break::new(0, 4).with_sound("hello.raw")]).unwrap();
//! let mut host = RecordingHost::new();
//! let mut players = SeriesPlayers::new();
//!
//! let slot = players.start(&mut host, PlayRequest::new(list, "greeter")).unwrap();
//! assert!(players.is_running(slot));
//! ```

// Re-export everything from the player prelude, which includes the types prelude
#[doc(inline)]
pub use playbreak_player::prelude::*;

// Re-export the member crates for advanced usage
#[doc(inline)]
pub use playbreak_player;
#[doc(inline)]
pub use playbreak_types;
