//! Prelude module for `playbreak_player`.
//!
//! Brings the pool, the host traits and the whole `playbreak_types` prelude
//! into scope.

#[doc(inline)]
pub use playbreak_types::prelude::*;

#[doc(inline)]
pub use crate::{
	Advance, AwaitKind, HostError, PLAY_BREAK_TRIGGER_BASE, PlayRequest, PlayerConfig, PlayerError,
	SeriesPlayers, SlotHandle, SlotStatus,
	host::{
		Host, MachineHandle, SeriesHandle, SeriesRequest, SoundEngine, SoundRequest, SpriteEngine,
		TriggerId, TriggerKernel,
	},
	preload::{PreloadReport, preload_break_sounds, unload_break_sounds, unload_break_sounds_once},
	recording::{HostEvent, RecordingHost},
};
