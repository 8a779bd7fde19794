//! Collaborator interfaces the host engine provides.
//!
//! The player never touches sprites, sound or the trigger kernel directly. It
//! talks to them through the traits below; [`Host`] is implemented for any
//! type providing all of them.
//!
//! Everything runs on the game-loop thread. A host must not call back into the
//! player from inside these methods: [`TriggerKernel::dispatch_trigger`]
//! queues the trigger, and the game loop later hands it to
//! [`SeriesPlayers::handle_trigger`](crate::SeriesPlayers::handle_trigger).

use playbreak_types::{flags::SeriesFlags, vars::VariableSource};
use serde::Serialize;

use crate::error::HostError;

/// Handle of a loaded sprite series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SeriesHandle(pub u32);

/// Handle of a running sprite machine (one playing frame range)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MachineHandle(pub u32);

/// Kernel trigger, as returned by [`TriggerKernel::create_trigger`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TriggerId(pub i32);

impl std::fmt::Display for TriggerId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "trigger#{}", self.0)
	}
}

/// Parameters for starting a sprite machine over a frame range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesRequest<'a> {
	/// Loaded series to play
	pub series: SeriesHandle,
	/// Series name, for diagnostics
	pub name: &'a str,
	/// Render depth
	pub depth: i32,
	/// Playback flags
	pub flags: SeriesFlags,
	/// Trigger raised when the machine ends, `None` for no trigger
	pub trigger: Option<TriggerId>,
	/// Frames per second
	pub framerate: i32,
	/// Loop count, -1 loops until terminated
	pub loop_count: i32,
	/// Render scale (percent)
	pub scale: i32,
	/// Screen x
	pub x: i32,
	/// Screen y
	pub y: i32,
	/// First frame (always `<= last_frame` unless `last_frame` is -1)
	pub first_frame: i32,
	/// Last frame, -1 for the end of the series
	pub last_frame: i32,
}

/// Parameters for starting a sound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoundRequest<'a> {
	/// Sound asset name
	pub name: &'a str,
	/// Digi channel
	pub channel: u8,
	/// Volume
	pub volume: u8,
	/// Trigger raised when the sound ends, `None` for no trigger
	pub trigger: Option<TriggerId>,
	/// Loop until stopped
	pub looping: bool,
}

/// Sprite series loading and playback
pub trait SpriteEngine {
	/// Loads the named series.
	///
	/// # Errors
	///
	/// Returns an error if the series does not exist or cannot be loaded.
	fn load_series(&mut self, name: &str) -> Result<SeriesHandle, HostError>;

	/// Releases a series loaded with [`load_series`](Self::load_series).
	fn unload_series(&mut self, series: SeriesHandle);

	/// Starts a machine playing a frame range.
	fn play_series(&mut self, request: &SeriesRequest<'_>) -> MachineHandle;

	/// Stops a machine. Must tolerate machines that already ended.
	fn terminate_machine(&mut self, machine: MachineHandle);
}

/// Digitized sound playback
pub trait SoundEngine {
	/// Starts a sound on a channel, replacing whatever plays there.
	fn play_sound(&mut self, request: &SoundRequest<'_>);

	/// Stops the sound playing on `channel`, if any.
	fn stop_sound(&mut self, channel: u8);

	/// Loads a sound ahead of playback.
	///
	/// # Errors
	///
	/// Returns an error if the asset cannot be loaded.
	fn preload_sound(&mut self, name: &str) -> Result<(), HostError>;

	/// Releases a preloaded sound. Must tolerate repeated calls for one name.
	fn unload_sound(&mut self, name: &str);
}

/// Trigger kernel
pub trait TriggerKernel {
	/// Turns a user trigger number into a kernel trigger bound to the current scene.
	fn create_trigger(&mut self, trigger: i32) -> TriggerId;

	/// Queues a trigger for dispatch.
	fn dispatch_trigger(&mut self, trigger: TriggerId);
}

/// Everything a series player needs from the engine.
pub trait Host: SpriteEngine + SoundEngine + TriggerKernel + VariableSource {}

impl<T> Host for T where T: SpriteEngine + SoundEngine + TriggerKernel + VariableSource + ?Sized {}
