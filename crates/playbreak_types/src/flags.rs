//! Flag sets carried by breaks and by whole playbacks.
//!
//! Three independent bitmasks are used:
//! - [`SeriesFlags`]: how the sprite player runs a frame range (direction, looping, etc.)
//! - [`DigiFlags`]: how a break treats its sound channel
//! - [`PlayFlags`]: options fixed for the whole life of one playback
//!
//! Bit values match the engine's historical constants so tables ported from it
//! keep their meaning.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
	/// Sprite series playback flags
	///
	/// `FORWARD` is the empty set.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
	pub struct SeriesFlags: u32 {
		/// Play forward then backward
		const PINGPONG = 0x0001;
		/// Play the frame range in reverse
		const BACKWARD = 0x0002;
		/// Pick frames at random inside the range
		const RANDOM = 0x0004;
		/// Keep the series loaded when the machine ends
		const NO_TOSS = 0x0008;
		/// Leave the last frame on screen when done
		const STICK = 0x0010;
		/// Fire the machine trigger on every loop instead of only at the end
		const LOOP_TRIGGER = 0x0020;
		/// Load the series palette when starting
		const LOAD_PALETTE = 0x0040;
		/// Mirror horizontally
		const HORZ_FLIP = 0x0080;
	}
}

impl SeriesFlags {
	/// Plain forward playback
	pub const FORWARD: Self = Self::empty();
}

bitflags! {
	/// Sound handling flags of a single break
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
	pub struct DigiFlags: u32 {
		/// Loop the break's sound until it is explicitly stopped
		const LOOP = 0x0400;
		/// Stop whatever plays on the break's channel before anything else
		const STOP = 0x0800;
	}
}

bitflags! {
	/// Options for a whole break-list playback
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
	pub struct PlayFlags: u32 {
		/// Also play the `<name>s` shadow series one depth behind
		const WITH_SHADOW = 0x0001;
		/// Preload every eligible sound at start and unload them at the end
		const PRELOAD_SOUNDS = 0x0002;
	}
}

impl Default for SeriesFlags {
	fn default() -> Self {
		Self::FORWARD
	}
}

impl Default for DigiFlags {
	fn default() -> Self {
		Self::empty()
	}
}

impl Default for PlayFlags {
	fn default() -> Self {
		Self::empty()
	}
}
