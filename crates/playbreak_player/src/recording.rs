//! An in-memory host that records every call.
//!
//! [`RecordingHost`] implements all collaborator traits without touching any
//! real sprite or sound backend. It keeps track of live machines and sounds so
//! their completion can be simulated with [`RecordingHost::settle`], which
//! makes it suitable for tests, dry runs and tooling that inspects what a
//! break list would do.

use std::collections::{BTreeMap, HashSet, VecDeque};

use playbreak_types::{
	breaks::constants,
	flags::SeriesFlags,
	vars::{GameVars, VarRef, VariableSource},
};
use serde::Serialize;

use crate::{
	error::{HostError, PlayerError},
	host::{
		MachineHandle, SeriesHandle, SeriesRequest, SoundEngine, SoundRequest, SpriteEngine,
		TriggerId, TriggerKernel,
	},
	pool::SeriesPlayers,
};

/// One recorded host call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HostEvent {
	/// A series was loaded
	LoadSeries {
		/// Asset name
		name: String,
		/// Series handle
		series: SeriesHandle,
	},
	/// A series was released
	UnloadSeries {
		/// Series handle
		series: SeriesHandle,
	},
	/// A machine was started
	PlaySeries {
		/// Machine handle
		machine: MachineHandle,
		/// Asset name
		name: String,
		/// Render depth
		depth: i32,
		/// Sprite flags
		flags: SeriesFlags,
		/// Completion trigger
		trigger: Option<TriggerId>,
		/// Frames per second
		framerate: i32,
		/// Loop count
		loop_count: i32,
		/// Render scale
		scale: i32,
		/// Screen x
		x: i32,
		/// Screen y
		y: i32,
		/// First frame
		first_frame: i32,
		/// Last frame
		last_frame: i32,
	},
	/// A machine was terminated
	TerminateMachine {
		/// Machine handle
		machine: MachineHandle,
	},
	/// A sound was started
	PlaySound {
		/// Asset name
		name: String,
		/// Digi channel
		channel: u8,
		/// Volume
		volume: u8,
		/// Completion trigger
		trigger: Option<TriggerId>,
		/// Loops until stopped
		looping: bool,
	},
	/// A channel was stopped
	StopSound {
		/// Digi channel
		channel: u8,
	},
	/// A sound preload was requested
	PreloadSound {
		/// Asset name
		name: String,
		/// Whether the preload succeeded
		ok: bool,
	},
	/// A sound was unloaded
	UnloadSound {
		/// Asset name
		name: String,
	},
	/// A trigger was dispatched
	DispatchTrigger {
		/// Dispatched trigger
		trigger: TriggerId,
	},
}

#[derive(Debug, Clone, Copy)]
struct LiveMachine {
	trigger: Option<TriggerId>,
	endless: bool,
}

#[derive(Debug, Clone, Copy)]
struct LiveSound {
	trigger: Option<TriggerId>,
	looping: bool,
}

/// Host double that records calls and simulates completions.
#[derive(Debug, Default)]
pub struct RecordingHost {
	/// Game variables read by break guards
	pub vars: GameVars,
	events: Vec<HostEvent>,
	dispatched: VecDeque<TriggerId>,
	machines: BTreeMap<MachineHandle, LiveMachine>,
	sounds: BTreeMap<u8, LiveSound>,
	missing_series: HashSet<String>,
	missing_sounds: HashSet<String>,
	next_series: u32,
	next_machine: u32,
}

impl RecordingHost {
	/// Creates an empty host
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a host reading guards from `vars`
	pub fn with_vars(vars: GameVars) -> Self {
		Self {
			vars,
			..Self::default()
		}
	}

	/// Makes [`SpriteEngine::load_series`] fail for `name`
	pub fn fail_series(&mut self, name: impl Into<String>) {
		self.missing_series.insert(name.into());
	}

	/// Makes [`SoundEngine::preload_sound`] fail for `name`
	pub fn fail_sound(&mut self, name: impl Into<String>) {
		self.missing_sounds.insert(name.into());
	}

	/// Every call recorded so far
	pub fn events(&self) -> &[HostEvent] {
		&self.events
	}

	/// Forgets recorded calls
	pub fn clear_events(&mut self) {
		self.events.clear();
	}

	/// Number of recorded calls matching `pred`
	pub fn count(&self, pred: impl Fn(&HostEvent) -> bool) -> usize {
		self.events.iter().filter(|event| pred(event)).count()
	}

	/// Drains the dispatched-trigger queue
	pub fn take_dispatched(&mut self) -> Vec<TriggerId> {
		self.dispatched.drain(..).collect()
	}

	/// Machines still running
	pub fn live_machines(&self) -> Vec<MachineHandle> {
		self.machines.keys().copied().collect()
	}

	/// Channels with a sound still playing
	pub fn playing_channels(&self) -> Vec<u8> {
		self.sounds.keys().copied().collect()
	}

	/// Ends `machine` as if its last frame played. Returns false if it was not running.
	pub fn complete_machine(&mut self, machine: MachineHandle) -> bool {
		let Some(live) = self.machines.remove(&machine) else {
			return false;
		};
		if let Some(trigger) = live.trigger {
			self.dispatch_trigger(trigger);
		}
		true
	}

	/// Ends the sound on `channel`. Returns false if nothing played there.
	pub fn complete_sound(&mut self, channel: u8) -> bool {
		let Some(live) = self.sounds.remove(&channel) else {
			return false;
		};
		if let Some(trigger) = live.trigger {
			self.dispatch_trigger(trigger);
		}
		true
	}

	/// Ends every machine and sound that would end by itself.
	///
	/// Endless machines and looping sounds keep running. Machines complete
	/// before sounds, each in handle order. Returns how many ended.
	pub fn settle(&mut self) -> usize {
		let machines: Vec<_> = self
			.machines
			.iter()
			.filter(|(_, live)| !live.endless)
			.map(|(machine, _)| *machine)
			.collect();
		let channels: Vec<_> = self
			.sounds
			.iter()
			.filter(|(_, live)| !live.looping)
			.map(|(channel, _)| *channel)
			.collect();

		for machine in &machines {
			self.complete_machine(*machine);
		}
		for channel in &channels {
			self.complete_sound(*channel);
		}
		machines.len() + channels.len()
	}

	/// Feeds dispatched triggers to `players` and settles until nothing moves.
	///
	/// Returns the triggers no slot claimed (break triggers and completion
	/// triggers) in dispatch order. Stops after `max_rounds` rounds, or
	/// earlier when the remaining playbacks can only be ended by a cancel.
	///
	/// # Errors
	///
	/// Propagates any error from [`SeriesPlayers::handle_trigger`].
	pub fn run_until_idle(
		&mut self,
		players: &mut SeriesPlayers,
		max_rounds: usize,
	) -> Result<Vec<TriggerId>, PlayerError> {
		let mut unclaimed = Vec::new();

		for _ in 0..max_rounds {
			let triggers = self.take_dispatched();
			let progressed = !triggers.is_empty();
			for trigger in triggers {
				match players.handle_trigger(self, trigger) {
					Some(result) => {
						result?;
					}
					None => unclaimed.push(trigger),
				}
			}

			if players.active_count() == 0 && self.dispatched.is_empty() {
				break;
			}
			if !progressed && self.settle() == 0 {
				break;
			}
		}

		Ok(unclaimed)
	}
}

impl VariableSource for RecordingHost {
	fn read_var(&self, var: VarRef) -> Option<i32> {
		self.vars.read_var(var)
	}
}

impl SpriteEngine for RecordingHost {
	fn load_series(&mut self, name: &str) -> Result<SeriesHandle, HostError> {
		if self.missing_series.contains(name) {
			return Err(HostError::NotFound(name.to_string()));
		}
		let series = SeriesHandle(self.next_series);
		self.next_series += 1;
		self.events.push(HostEvent::LoadSeries {
			name: name.to_string(),
			series,
		});
		Ok(series)
	}

	fn unload_series(&mut self, series: SeriesHandle) {
		self.events.push(HostEvent::UnloadSeries {
			series,
		});
	}

	fn play_series(&mut self, request: &SeriesRequest<'_>) -> MachineHandle {
		let machine = MachineHandle(self.next_machine);
		self.next_machine += 1;
		self.machines.insert(
			machine,
			LiveMachine {
				trigger: request.trigger,
				endless: request.loop_count == constants::LOOP_WHILE_SOUND,
			},
		);
		self.events.push(HostEvent::PlaySeries {
			machine,
			name: request.name.to_string(),
			depth: request.depth,
			flags: request.flags,
			trigger: request.trigger,
			framerate: request.framerate,
			loop_count: request.loop_count,
			scale: request.scale,
			x: request.x,
			y: request.y,
			first_frame: request.first_frame,
			last_frame: request.last_frame,
		});
		machine
	}

	fn terminate_machine(&mut self, machine: MachineHandle) {
		self.machines.remove(&machine);
		self.events.push(HostEvent::TerminateMachine {
			machine,
		});
	}
}

impl SoundEngine for RecordingHost {
	fn play_sound(&mut self, request: &SoundRequest<'_>) {
		self.sounds.insert(
			request.channel,
			LiveSound {
				trigger: request.trigger,
				looping: request.looping,
			},
		);
		self.events.push(HostEvent::PlaySound {
			name: request.name.to_string(),
			channel: request.channel,
			volume: request.volume,
			trigger: request.trigger,
			looping: request.looping,
		});
	}

	fn stop_sound(&mut self, channel: u8) {
		self.sounds.remove(&channel);
		self.events.push(HostEvent::StopSound {
			channel,
		});
	}

	fn preload_sound(&mut self, name: &str) -> Result<(), HostError> {
		let ok = !self.missing_sounds.contains(name);
		self.events.push(HostEvent::PreloadSound {
			name: name.to_string(),
			ok,
		});
		if ok {
			Ok(())
		} else {
			Err(HostError::NotFound(name.to_string()))
		}
	}

	fn unload_sound(&mut self, name: &str) {
		self.events.push(HostEvent::UnloadSound {
			name: name.to_string(),
		});
	}
}

impl TriggerKernel for RecordingHost {
	fn create_trigger(&mut self, trigger: i32) -> TriggerId {
		TriggerId(trigger)
	}

	fn dispatch_trigger(&mut self, trigger: TriggerId) {
		self.dispatched.push_back(trigger);
		self.events.push(HostEvent::DispatchTrigger {
			trigger,
		});
	}
}
