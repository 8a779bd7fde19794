//! Break-list series playback.
//!
//! A break list describes a cutscene as a sequence of frame ranges of one
//! sprite series, each optionally starting a sound and gated by a game
//! variable. This crate walks such lists against a host engine:
//!
//! - [`SeriesPlayers`]: fixed pool of concurrent playbacks, advanced by triggers
//! - [`preload`]: bulk loading and unloading of a list's sounds
//! - [`host`]: the sprite, sound and trigger interfaces the engine provides
//! - [`recording`]: a host double that records calls and simulates completions
//!
//! # Examples
//!
//! ```
//! use playbreak_player::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let list = BreakList::from_terminated(vec![
//!     Break::new(0, 12).with_sound("407r01").while_sound(),
//!     Break::new(12, 0).with_trigger(3),
//!     Break::sentinel(),
//! ])?;
//!
//! let mut host = RecordingHost::new();
//! let mut players = SeriesPlayers::new();
//! players.start(&mut host, PlayRequest::new(list, "rp01").with_trigger(99))?;
//!
//! let scene_triggers = host.run_until_idle(&mut players, 32)?;
//! assert_eq!(scene_triggers, vec![TriggerId(3), TriggerId(99)]);
//! assert_eq!(players.active_count(), 0);
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod player;
mod pool;

pub mod host;
pub mod preload;
pub mod recording;

/// `use playbreak_player::prelude::*;` to import commonly used items.
pub mod prelude;

pub use self::config::{PLAY_BREAK_TRIGGER_BASE, PlayerConfig};
pub use self::error::{HostError, PlayerError};
pub use self::player::{Advance, AwaitKind, PlayRequest, SlotHandle, SlotStatus};
pub use self::pool::SeriesPlayers;

// Re-export the data model
pub use playbreak_types;
