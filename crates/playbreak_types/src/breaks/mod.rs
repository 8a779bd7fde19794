//! Break lists: the tables that drive a series playback.
//!
//! A break list is an ordered table of frame ranges ("breaks") of one sprite
//! series. A player walks the table front to back, skipping entries whose
//! guard fails, starting each eligible entry's sound and animation, and
//! finishing when it runs into the terminating sentinel.
//!
//! # Entry Layout
//!
//! ```text
//! Field         Description
//! ------------  ------------------------------------------------------------
//! first_frame   First frame of the range, negative marks the sentinel
//! last_frame    Last frame (inclusive), -1 plays to the end of the series
//! sound         Optional sound started with the range
//! channel       Digi channel of the sound
//! volume        Sound volume
//! trigger       Optional user trigger
//! series_flags  Extra sprite flags (BACKWARD is added for reversed ranges)
//! digi_flags    LOOP / STOP
//! loop_count    Animation loops, -1 loops while the sound plays
//! when          Optional guard: var == value
//! ```
//!
//! # Usage Examples
//!
//! ```
//! use playbreak_types::breaks::{Break, BreakList};
//! use playbreak_types::flags::DigiFlags;
//! use playbreak_types::vars::{GameVars, VarRef};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let list = BreakList::from_terminated(vec![
//!     Break::new(0, 4).with_sound("a.raw").when(VarRef(0), 1),
//!     Break::new(0, 4).with_sound("b.raw").when(VarRef(0), 2),
//!     Break::new(10, 5).with_digi_flags(DigiFlags::STOP),
//!     Break::sentinel(),
//! ])?;
//!
//! let mut vars = GameVars::with_len(1);
//! vars.set(VarRef(0), 2);
//!
//! let eligible: Vec<_> = list.iter().filter(|entry| entry.is_eligible(&vars)).collect();
//! assert_eq!(eligible.len(), 2);
//! # Ok(())
//! # }
//! ```

pub mod constants;
pub mod entry;
pub mod list;
pub mod list_config;

pub use self::entry::Break;
pub use self::list::BreakList;
pub use self::list_config::ListConfig;
