//! Prelude module for `playbreak_types`.
//!
//! This module provides a convenient way to import commonly used types and constants.
//!
//! # Examples
//!
//! ```
//! use playbreak_types::prelude::*;
//!
//! let entry = Break::new(0, 3).with_digi_flags(DigiFlags::STOP);
//! let mut vars = GameVars::new();
//! vars.set(VarRef(1), 1);
//! assert!(entry.is_eligible(&vars));
//! ```

#[doc(inline)]
pub use crate::breaks::{
	Break, BreakList, ListConfig,
	constants::{LAST_FRAME_OF_SERIES, LOOP_WHILE_SOUND, MAX_SERIES_PLAYERS, SENTINEL_FRAME},
};

#[doc(inline)]
pub use crate::flags::{DigiFlags, PlayFlags, SeriesFlags};

#[doc(inline)]
pub use crate::vars::{Condition, GameVars, VarRef, VariableSource};

#[doc(inline)]
pub use crate::BreakListError;
