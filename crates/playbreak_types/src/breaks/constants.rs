//! Break-list constants.
//!
//! Sentinel values and engine defaults shared by break tables and the players
//! that walk them.

/// Frame value marking the terminating sentinel break
pub const SENTINEL_FRAME: i32 = -1;

/// `last_frame` value meaning "play through to the final frame of the series"
pub const LAST_FRAME_OF_SERIES: i32 = -1;

/// Loop count meaning "keep looping the animation while the break's sound plays"
pub const LOOP_WHILE_SOUND: i32 = -1;

/// Number of concurrent break sequences the engine historically supports
pub const MAX_SERIES_PLAYERS: usize = 3;

/// Default digi channel used when a break does not name one
pub const DEFAULT_CHANNEL: u8 = 1;

/// Full volume
pub const MAX_VOLUME: u8 = 255;

/// Default playback framerate (frames per second) for a series
pub const DEFAULT_FRAMERATE: i32 = 6;

/// Default render scale (percent)
pub const DEFAULT_SCALE: i32 = 100;

/// Suffix appended to a series name to name its shadow series
pub const SHADOW_SUFFIX: &str = "s";
