//! Per-slot playback state.
//!
//! A [`SeriesPlayer`] is one running break-list playback. It owns the loaded
//! series, the machines started for the current break, and the cursor into
//! its list. The pool in [`crate::pool`] decides when it advances.

use std::sync::Arc;

use log::debug;
use playbreak_types::{
	breaks::{Break, BreakList, constants},
	flags::{DigiFlags, PlayFlags, SeriesFlags},
};
use serde::Serialize;

use crate::{
	host::{Host, MachineHandle, SeriesHandle, SeriesRequest, SoundRequest, TriggerId},
	preload::{unload_break_sounds, unload_break_sounds_once},
};

/// Identifies a slot of a [`SeriesPlayers`](crate::SeriesPlayers) pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SlotHandle(pub usize);

impl SlotHandle {
	/// Returns the slot index
	pub fn index(self) -> usize {
		self.0
	}
}

impl std::fmt::Display for SlotHandle {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "slot {}", self.0)
	}
}

/// What the current break is waiting for before the playback advances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AwaitKind {
	/// The animation ends by itself and raises the slot trigger
	Animation {
		/// Machine playing the break
		machine: MachineHandle,
		/// Shadow machine, if any
		shadow: Option<MachineHandle>,
	},
	/// The sound raises the slot trigger; the animation loops until then
	Sound {
		/// Channel the sound plays on
		channel: u8,
		/// Looping machine playing the break
		machine: MachineHandle,
		/// Shadow machine, if any
		shadow: Option<MachineHandle>,
	},
}

impl AwaitKind {
	/// Machines started for the break, shadow last
	pub fn machines(&self) -> impl Iterator<Item = MachineHandle> {
		let (machine, shadow) = match *self {
			Self::Animation {
				machine,
				shadow,
			}
			| Self::Sound {
				machine,
				shadow,
				..
			} => (machine, shadow),
		};
		std::iter::once(machine).chain(shadow)
	}
}

/// Result of one advance step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Advance {
	/// A break was started
	Playing {
		/// Slot that advanced
		slot: SlotHandle,
		/// Index of the break now playing
		index: usize,
	},
	/// The list ran out; the slot is free again
	Finished {
		/// Slot that finished
		slot: SlotHandle,
	},
}

/// Parameters of a new playback.
///
/// Defaults follow the engine: framerate 6, scale 100, origin (0, 0), depth 0.
///
/// # Examples
///
/// ```
/// use playbreak_player::PlayRequest;
/// use playbreak_types::prelude::*;
///
/// let list = BreakList::from_entries(vec![Break::new(0, 4)])?;
/// let request = PlayRequest::new(list, "204ru01")
///     .with_depth(0x200)
///     .with_trigger(12)
///     .with_flags(PlayFlags::WITH_SHADOW)
///     .at(320, 240);
/// assert_eq!(request.framerate, 6);
/// # Ok::<(), BreakListError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PlayRequest {
	/// Break list to walk
	pub breaks: Arc<BreakList>,
	/// Sprite series name
	pub name: String,
	/// Render depth
	pub depth: i32,
	/// User trigger raised once the list completes
	pub trigger: Option<i32>,
	/// Playback options
	pub flags: PlayFlags,
	/// Sprite flags applied to every break
	pub series_flags: SeriesFlags,
	/// Frames per second
	pub framerate: i32,
	/// Render scale (percent)
	pub scale: i32,
	/// Screen x
	pub x: i32,
	/// Screen y
	pub y: i32,
}

impl PlayRequest {
	/// Creates a request with engine defaults.
	pub fn new(breaks: impl Into<Arc<BreakList>>, name: impl Into<String>) -> Self {
		Self {
			breaks: breaks.into(),
			name: name.into(),
			depth: 0,
			trigger: None,
			flags: PlayFlags::empty(),
			series_flags: SeriesFlags::FORWARD,
			framerate: constants::DEFAULT_FRAMERATE,
			scale: constants::DEFAULT_SCALE,
			x: 0,
			y: 0,
		}
	}

	/// Sets the render depth.
	pub fn with_depth(mut self, depth: i32) -> Self {
		self.depth = depth;
		self
	}

	/// Sets the completion trigger.
	pub fn with_trigger(mut self, trigger: i32) -> Self {
		self.trigger = Some(trigger);
		self
	}

	/// Adds playback options.
	pub fn with_flags(mut self, flags: PlayFlags) -> Self {
		self.flags |= flags;
		self
	}

	/// Adds sprite flags applied to every break.
	pub fn with_series_flags(mut self, flags: SeriesFlags) -> Self {
		self.series_flags |= flags;
		self
	}

	/// Sets the framerate.
	pub fn with_framerate(mut self, framerate: i32) -> Self {
		self.framerate = framerate;
		self
	}

	/// Sets the render scale.
	pub fn with_scale(mut self, scale: i32) -> Self {
		self.scale = scale;
		self
	}

	/// Sets the screen position.
	pub fn at(mut self, x: i32, y: i32) -> Self {
		self.x = x;
		self.y = y;
		self
	}
}

/// Read-only view of a running slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotStatus {
	/// Slot
	pub slot: SlotHandle,
	/// Series name
	pub name: String,
	/// Cursor: index of the next break to consider
	pub index: usize,
	/// Break currently playing (normalized)
	pub current: Option<Break>,
	/// What the current break waits for
	pub awaiting: Option<AwaitKind>,
}

#[derive(Debug)]
pub(crate) struct Shadow {
	name: String,
	series: SeriesHandle,
}

/// One running playback
#[derive(Debug)]
pub(crate) struct SeriesPlayer {
	pub(crate) breaks: Arc<BreakList>,
	pub(crate) index: usize,
	pub(crate) current: Option<Break>,
	pub(crate) awaiting: Option<AwaitKind>,
	pub(crate) play_break_trigger: TriggerId,
	pub(crate) completion: Option<TriggerId>,
	name: String,
	series: SeriesHandle,
	shadow: Option<Shadow>,
	depth: i32,
	series_flags: SeriesFlags,
	framerate: i32,
	scale: i32,
	x: i32,
	y: i32,
	preload_sounds: bool,
}

impl SeriesPlayer {
	pub(crate) fn new(
		request: PlayRequest,
		series: SeriesHandle,
		shadow: Option<(String, SeriesHandle)>,
		play_break_trigger: TriggerId,
		completion: Option<TriggerId>,
	) -> Self {
		Self {
			preload_sounds: request.flags.contains(PlayFlags::PRELOAD_SOUNDS),
			breaks: request.breaks,
			index: 0,
			current: None,
			awaiting: None,
			play_break_trigger,
			completion,
			name: request.name,
			series,
			shadow: shadow.map(|(name, series)| Shadow {
				name,
				series,
			}),
			depth: request.depth,
			series_flags: request.series_flags,
			framerate: request.framerate,
			scale: request.scale,
			x: request.x,
			y: request.y,
		}
	}

	/// Starts sound and animation for an eligible, normalized break.
	pub(crate) fn play_break<H: Host + ?Sized>(&mut self, host: &mut H, current: Break) {
		if current.digi_flags.contains(DigiFlags::STOP) {
			host.stop_sound(current.channel);
		}

		let mut wait_on_sound = false;
		match current.sound.as_deref() {
			None => {
				if let Some(trigger) = current.trigger {
					let trigger = host.create_trigger(trigger);
					host.dispatch_trigger(trigger);
				}
			}
			Some(name) if current.digi_flags.contains(DigiFlags::LOOP) => {
				host.play_sound(&SoundRequest {
					name,
					channel: current.channel,
					volume: current.volume,
					trigger: None,
					looping: true,
				});
			}
			Some(name) if current.loops_while_sound() => {
				wait_on_sound = true;
				host.play_sound(&SoundRequest {
					name,
					channel: current.channel,
					volume: current.volume,
					trigger: Some(self.play_break_trigger),
					looping: false,
				});
			}
			Some(name) => {
				let trigger = current.trigger.map(|trigger| host.create_trigger(trigger));
				host.play_sound(&SoundRequest {
					name,
					channel: current.channel,
					volume: current.volume,
					trigger,
					looping: false,
				});
			}
		}

		let mut request = SeriesRequest {
			series: self.series,
			name: &self.name,
			depth: self.depth,
			flags: self.series_flags | current.series_flags,
			trigger: if wait_on_sound {
				None
			} else {
				Some(self.play_break_trigger)
			},
			framerate: self.framerate,
			loop_count: current.loop_count,
			scale: self.scale,
			x: self.x,
			y: self.y,
			first_frame: current.first_frame,
			last_frame: current.last_frame,
		};
		let machine = host.play_series(&request);

		let shadow = self.shadow.as_ref().map(|shadow| {
			request.series = shadow.series;
			request.name = &shadow.name;
			request.depth = self.depth.saturating_add(1);
			request.trigger = None;
			host.play_series(&request)
		});

		debug!(
			"series '{}': playing {} (waiting on {})",
			self.name,
			current,
			if wait_on_sound {
				"sound"
			} else {
				"animation"
			}
		);

		self.awaiting = Some(if wait_on_sound {
			AwaitKind::Sound {
				channel: current.channel,
				machine,
				shadow,
			}
		} else {
			AwaitKind::Animation {
				machine,
				shadow,
			}
		});
		self.current = Some(current);
	}

	/// Releases the series and, for preloading playbacks, the sounds.
	pub(crate) fn release<H: Host + ?Sized>(&self, host: &mut H, dedupe_unloads: bool) {
		host.unload_series(self.series);
		if let Some(shadow) = &self.shadow {
			host.unload_series(shadow.series);
		}
		if self.preload_sounds {
			if dedupe_unloads {
				unload_break_sounds_once(host, &self.breaks);
			} else {
				unload_break_sounds(host, &self.breaks);
			}
		}
	}

	pub(crate) fn name(&self) -> &str {
		&self.name
	}

	pub(crate) fn status(&self, slot: SlotHandle) -> SlotStatus {
		SlotStatus {
			slot,
			name: self.name.clone(),
			index: self.index,
			current: self.current.clone(),
			awaiting: self.awaiting,
		}
	}
}
