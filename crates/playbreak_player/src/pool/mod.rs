//! The series player pool.
//!
//! [`SeriesPlayers`] owns a fixed number of slots. Each slot runs one break
//! list at a time and moves forward one break per completion signal:
//!
//! ```text
//!   start ──► advance ──► [break playing] ──trigger──► on_completion ──► advance ─┐
//!                 │                                                              │
//!                 └──────────── list exhausted: release + completion trigger ◄───┘
//! ```
//!
//! A slot is `FREE` or `RUNNING`. While running, the current break waits
//! either on its animation or on its sound ([`AwaitKind`]). Nothing blocks:
//! every step returns to the caller, and the game loop feeds dispatched
//! triggers back through [`SeriesPlayers::handle_trigger`].

use std::sync::Arc;

use log::{debug, info, trace, warn};
use playbreak_types::flags::PlayFlags;

use crate::{
	config::PlayerConfig,
	error::PlayerError,
	host::{Host, TriggerId},
	player::{Advance, AwaitKind, PlayRequest, SeriesPlayer, SlotHandle, SlotStatus},
	preload::preload_break_sounds,
};

/// Fixed-size pool of break-list playbacks.
///
/// # Examples
///
/// ```
/// use playbreak_player::{PlayRequest, SeriesPlayers, recording::RecordingHost};
/// use playbreak_types::prelude::*;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let list = BreakList::from_terminated(vec![
///     Break::new(0, 4).with_sound("a.raw").when(VarRef(0), 1),
///     Break::new(0, 4).with_sound("b.raw").when(VarRef(0), 2),
///     Break::sentinel(),
/// ])?;
///
/// let mut host = RecordingHost::new();
/// host.vars.set(VarRef(0), 2);
///
/// let mut players = SeriesPlayers::new();
/// let slot = players.start(&mut host, PlayRequest::new(list, "dancer").with_trigger(7))?;
/// assert!(players.is_running(slot));
///
/// // The animation ends; the engine dispatches the slot trigger back to us.
/// host.settle();
/// for trigger in host.take_dispatched() {
///     players.handle_trigger(&mut host, trigger);
/// }
/// assert!(!players.is_running(slot));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SeriesPlayers {
	config: PlayerConfig,
	slots: Vec<Option<SeriesPlayer>>,
}

impl Default for SeriesPlayers {
	fn default() -> Self {
		Self::new()
	}
}

impl SeriesPlayers {
	/// Creates a pool with the default configuration.
	pub fn new() -> Self {
		Self::with_config(PlayerConfig::default())
	}

	/// Creates a pool with a custom configuration.
	pub fn with_config(config: PlayerConfig) -> Self {
		let slots = std::iter::repeat_with(|| None).take(config.max_players).collect();
		Self {
			config,
			slots,
		}
	}

	/// Returns the pool configuration.
	pub fn config(&self) -> &PlayerConfig {
		&self.config
	}

	/// Number of slots in the pool
	pub fn capacity(&self) -> usize {
		self.slots.len()
	}

	/// Number of running playbacks
	pub fn active_count(&self) -> usize {
		self.slots.iter().filter(|slot| slot.is_some()).count()
	}

	/// Returns true if a new playback can start
	pub fn has_free_slot(&self) -> bool {
		self.slots.iter().any(Option::is_none)
	}

	/// Returns true if `slot` holds a running playback
	pub fn is_running(&self, slot: SlotHandle) -> bool {
		self.slots.get(slot.index()).is_some_and(Option::is_some)
	}

	/// Snapshot of every running slot
	pub fn status(&self) -> Vec<SlotStatus> {
		self.slots
			.iter()
			.enumerate()
			.filter_map(|(index, player)| {
				player.as_ref().map(|player| player.status(SlotHandle(index)))
			})
			.collect()
	}

	/// Starts playing a break list.
	///
	/// Claims a free slot, loads the series (and the shadow series when
	/// [`PlayFlags::WITH_SHADOW`] is set), preloads eligible sounds when
	/// asked to, then plays the first eligible break before returning. A list with no eligible break
	/// completes immediately: the returned slot is already free again.
	///
	/// # Errors
	///
	/// Returns [`PlayerError::ResourceExhausted`] if every slot is busy, or
	/// [`PlayerError::SeriesLoad`] if a series cannot be loaded. Nothing is
	/// left allocated on error.
	pub fn start<H: Host + ?Sized>(
		&mut self,
		host: &mut H,
		request: PlayRequest,
	) -> Result<SlotHandle, PlayerError> {
		let Some(index) = self.slots.iter().position(Option::is_none) else {
			warn!(
				"series '{}': no free series player ({} in use)",
				request.name,
				self.capacity()
			);
			return Err(PlayerError::ResourceExhausted {
				capacity: self.capacity(),
			});
		};
		let slot = SlotHandle(index);

		let series = host.load_series(&request.name).map_err(|source| PlayerError::SeriesLoad {
			name: request.name.clone(),
			source,
		})?;

		let shadow = if request.flags.contains(PlayFlags::WITH_SHADOW) {
			let shadow_name = format!("{}{}", request.name, self.config.shadow_suffix);
			match host.load_series(&shadow_name) {
				Ok(handle) => Some((shadow_name, handle)),
				Err(source) => {
					host.unload_series(series);
					return Err(PlayerError::SeriesLoad {
						name: shadow_name,
						source,
					});
				}
			}
		} else {
			None
		};

		if request.flags.contains(PlayFlags::PRELOAD_SOUNDS) {
			preload_break_sounds(host, &request.breaks, false);
		}

		let play_break_trigger = host.create_trigger(self.play_break_trigger_number(slot));
		let completion = request.trigger.map(|trigger| host.create_trigger(trigger));

		info!(
			"series '{}': starting {} on {} (depth {})",
			request.name, request.breaks, slot, request.depth
		);
		self.slots[index] =
			Some(SeriesPlayer::new(request, series, shadow, play_break_trigger, completion));

		self.advance(host, slot)?;
		Ok(slot)
	}

	/// Handles the end of whatever the slot's current break waited on.
	///
	/// When the break waited on its sound, its looping animation (and shadow)
	/// is terminated first. The slot then advances to the next eligible break
	/// or finishes.
	///
	/// # Errors
	///
	/// Returns [`PlayerError::InvalidSlot`] or [`PlayerError::SlotNotRunning`]
	/// without side effects when the slot has no playback.
	pub fn on_completion<H: Host + ?Sized>(
		&mut self,
		host: &mut H,
		slot: SlotHandle,
	) -> Result<Advance, PlayerError> {
		let player = self.running_mut(slot)?;
		if let Some(
			awaiting @ AwaitKind::Sound {
				..
			},
		) = player.awaiting.take()
		{
			for machine in awaiting.machines() {
				host.terminate_machine(machine);
			}
		}
		self.advance(host, slot)
	}

	/// Routes a dispatched kernel trigger to the slot waiting on it.
	///
	/// Returns `None` if no running slot owns `trigger`; the caller should
	/// then handle it as an ordinary scene trigger.
	pub fn handle_trigger<H: Host + ?Sized>(
		&mut self,
		host: &mut H,
		trigger: TriggerId,
	) -> Option<Result<Advance, PlayerError>> {
		let index = self.slots.iter().position(|player| {
			player.as_ref().is_some_and(|player| player.play_break_trigger == trigger)
		})?;
		Some(self.on_completion(host, SlotHandle(index)))
	}

	/// Stops a playback wherever it is.
	///
	/// Terminates the current machines, stops the awaited sound when the
	/// break waits on one, and releases the slot exactly as a natural finish
	/// would. The completion trigger is not dispatched.
	///
	/// # Errors
	///
	/// Returns [`PlayerError::InvalidSlot`] or [`PlayerError::SlotNotRunning`]
	/// when the slot has no playback.
	pub fn cancel<H: Host + ?Sized>(
		&mut self,
		host: &mut H,
		slot: SlotHandle,
	) -> Result<(), PlayerError> {
		self.running_mut(slot)?;
		let Some(player) = self.slots[slot.index()].take() else {
			return Err(PlayerError::SlotNotRunning(slot.index()));
		};

		if let Some(awaiting) = player.awaiting {
			for machine in awaiting.machines() {
				host.terminate_machine(machine);
			}
			if let AwaitKind::Sound {
				channel,
				..
			} = awaiting
			{
				host.stop_sound(channel);
			}
		}
		player.release(host, self.config.dedupe_unloads);

		info!("series '{}': cancelled on {} at break {}", player.name(), slot, player.index);
		Ok(())
	}

	/// Cancels every running playback.
	pub fn cancel_all<H: Host + ?Sized>(&mut self, host: &mut H) {
		for index in 0..self.slots.len() {
			if self.slots[index].is_some() {
				let _ = self.cancel(host, SlotHandle(index));
			}
		}
	}

	/// Moves the slot to its next eligible break, or finishes it.
	fn advance<H: Host + ?Sized>(
		&mut self,
		host: &mut H,
		slot: SlotHandle,
	) -> Result<Advance, PlayerError> {
		let player = self.running_mut(slot)?;
		let breaks = Arc::clone(&player.breaks);

		while let Some(entry) = breaks.get(player.index) {
			if !entry.is_eligible(&*host) {
				trace!("series '{}': skipping break {} ({})", player.name(), player.index, entry);
				player.index += 1;
				continue;
			}

			let index = player.index;
			player.index += 1;
			player.play_break(host, entry.normalized());
			return Ok(Advance::Playing {
				slot,
				index,
			});
		}

		let Some(player) = self.slots[slot.index()].take() else {
			return Err(PlayerError::SlotNotRunning(slot.index()));
		};
		player.release(host, self.config.dedupe_unloads);
		if let Some(trigger) = player.completion {
			host.dispatch_trigger(trigger);
		}

		info!("series '{}': finished on {}", player.name(), slot);
		debug!("series '{}': completion trigger {:?}", player.name(), player.completion);
		Ok(Advance::Finished {
			slot,
		})
	}

	fn running_mut(&mut self, slot: SlotHandle) -> Result<&mut SeriesPlayer, PlayerError> {
		let capacity = self.slots.len();
		self.slots
			.get_mut(slot.index())
			.ok_or(PlayerError::InvalidSlot {
				slot: slot.index(),
				capacity,
			})?
			.as_mut()
			.ok_or(PlayerError::SlotNotRunning(slot.index()))
	}

	fn play_break_trigger_number(&self, slot: SlotHandle) -> i32 {
		self.config.play_break_trigger_base.saturating_add(slot.index() as i32)
	}
}
