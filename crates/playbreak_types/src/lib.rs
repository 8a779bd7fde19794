//! This crate provides the data model for break-list series playback.
//!
//! # Contents
//!
//! - **Breaks**: frame ranges of a sprite series with an optional sound, trigger and guard
//! - **Break lists**: validated, sentinel-checked tables of breaks, loadable from JSON
//! - **Flags**: series, digi and playback flag sets
//! - **Variables**: guard conditions and the game-variable store they read
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```
//! use playbreak_types::prelude::*;
//!
//! let list = BreakList::from_terminated(vec![
//!     Break::new(0, 7).with_sound("203_s01"),
//!     Break::sentinel(),
//! ])?;
//! assert_eq!(list.len(), 1);
//! # Ok::<(), BreakListError>(())
//! ```
//!
//! Or use explicit paths:
//!
//! ```
//! use playbreak_types::breaks::{Break, BreakList};
//!
//! let list = BreakList::from_entries(vec![Break::new(7, 0)]);
//! assert!(list.is_ok());
//! ```

mod error;

pub mod breaks;
pub mod flags;
pub mod vars;

/// `use playbreak_types::prelude::*;` to import commonly used items.
pub mod prelude;

pub use error::BreakListError;
