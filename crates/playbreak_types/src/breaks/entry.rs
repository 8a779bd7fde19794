//! Single break entries.
//!
//! A [`Break`] names an inclusive frame range of a sprite series, an optional
//! sound to start with it, the trigger to raise, and an optional guard that
//! decides whether the entry is played at all.

use serde::{Deserialize, Serialize};

use crate::{
	flags::{DigiFlags, SeriesFlags},
	vars::{Condition, VarRef, VariableSource},
};

use super::constants;

/// One entry of a break list.
///
/// # Frame Ranges
///
/// `first_frame..=last_frame` is played. When `first_frame > last_frame` the
/// range is played backward; [`Break::normalized`] turns such an entry into an
/// ascending range with [`SeriesFlags::BACKWARD`] set. A `last_frame` of
/// [`constants::LAST_FRAME_OF_SERIES`] plays to the end of the series.
///
/// Any negative `first_frame` marks the sentinel that ends a list.
///
/// # Examples
///
/// ```
/// use playbreak_types::breaks::Break;
/// use playbreak_types::vars::VarRef;
///
/// let entry = Break::new(0, 4)
///     .with_sound("204r01")
///     .with_channel(2)
///     .with_trigger(10)
///     .when(VarRef(1), 3);
///
/// assert_eq!(entry.sound.as_deref(), Some("204r01"));
/// assert!(!entry.is_sentinel());
/// assert!(Break::sentinel().is_sentinel());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Break {
	/// First frame of the range
	pub first_frame: i32,
	/// Last frame of the range (inclusive)
	pub last_frame: i32,
	/// Sound to start when the break activates
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub sound: Option<String>,
	/// Digi channel the sound plays on
	#[serde(default = "default_channel")]
	pub channel: u8,
	/// Sound volume
	#[serde(default = "default_volume")]
	pub volume: u8,
	/// User trigger raised by this break (`None` is "no trigger")
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub trigger: Option<i32>,
	/// Extra sprite flags for this break's frame range
	#[serde(default)]
	pub series_flags: SeriesFlags,
	/// Sound handling flags
	#[serde(default)]
	pub digi_flags: DigiFlags,
	/// Animation loop count, or [`constants::LOOP_WHILE_SOUND`]
	#[serde(default)]
	pub loop_count: i32,
	/// Guard deciding whether the break is eligible
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub when: Option<Condition>,
}

fn default_channel() -> u8 {
	constants::DEFAULT_CHANNEL
}

fn default_volume() -> u8 {
	constants::MAX_VOLUME
}

impl Break {
	/// Creates a silent, unconditional break playing `first_frame..=last_frame` once.
	pub fn new(first_frame: i32, last_frame: i32) -> Self {
		Self {
			first_frame,
			last_frame,
			sound: None,
			channel: constants::DEFAULT_CHANNEL,
			volume: constants::MAX_VOLUME,
			trigger: None,
			series_flags: SeriesFlags::FORWARD,
			digi_flags: DigiFlags::empty(),
			loop_count: 0,
			when: None,
		}
	}

	/// Creates the sentinel that terminates a list.
	pub fn sentinel() -> Self {
		Self::new(constants::SENTINEL_FRAME, constants::SENTINEL_FRAME)
	}

	/// Sets the sound started with this break.
	pub fn with_sound(mut self, sound: impl Into<String>) -> Self {
		self.sound = Some(sound.into());
		self
	}

	/// Sets the digi channel.
	pub fn with_channel(mut self, channel: u8) -> Self {
		self.channel = channel;
		self
	}

	/// Sets the sound volume.
	pub fn with_volume(mut self, volume: u8) -> Self {
		self.volume = volume;
		self
	}

	/// Sets the user trigger.
	pub fn with_trigger(mut self, trigger: i32) -> Self {
		self.trigger = Some(trigger);
		self
	}

	/// Adds sprite flags.
	pub fn with_series_flags(mut self, flags: SeriesFlags) -> Self {
		self.series_flags |= flags;
		self
	}

	/// Adds digi flags.
	pub fn with_digi_flags(mut self, flags: DigiFlags) -> Self {
		self.digi_flags |= flags;
		self
	}

	/// Sets the animation loop count.
	pub fn with_loop_count(mut self, loop_count: i32) -> Self {
		self.loop_count = loop_count;
		self
	}

	/// Loops the animation for as long as the break's sound plays.
	pub fn while_sound(self) -> Self {
		self.with_loop_count(constants::LOOP_WHILE_SOUND)
	}

	/// Guards the break on `var == value`.
	pub fn when(mut self, var: VarRef, value: i32) -> Self {
		self.when = Some(Condition::new(var, value));
		self
	}

	/// Returns `true` if this entry terminates a list.
	pub fn is_sentinel(&self) -> bool {
		self.first_frame < 0
	}

	/// Returns `true` if the guard passes (or there is none).
	pub fn is_eligible<V: VariableSource + ?Sized>(&self, vars: &V) -> bool {
		self.when.as_ref().is_none_or(|cond| cond.holds(vars))
	}

	/// Returns `true` if the range is written back to front.
	pub fn is_reversed(&self) -> bool {
		self.last_frame != constants::LAST_FRAME_OF_SERIES && self.first_frame > self.last_frame
	}

	/// Returns `true` if the animation is meant to loop until the sound ends.
	pub fn loops_while_sound(&self) -> bool {
		self.loop_count == constants::LOOP_WHILE_SOUND
	}

	/// Returns a copy with an ascending frame range.
	///
	/// Reversed ranges are swapped and get [`SeriesFlags::BACKWARD`]; every
	/// other field is left untouched.
	pub fn normalized(&self) -> Self {
		let mut entry = self.clone();
		if entry.is_reversed() {
			std::mem::swap(&mut entry.first_frame, &mut entry.last_frame);
			entry.series_flags |= SeriesFlags::BACKWARD;
		}
		entry
	}
}

impl std::fmt::Display for Break {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		if self.is_sentinel() {
			return write!(f, "Sentinel");
		}
		write!(f, "Break({}..={}", self.first_frame, self.last_frame)?;
		if let Some(sound) = &self.sound {
			write!(f, ", sound={}@{}", sound, self.channel)?;
		}
		if let Some(trigger) = self.trigger {
			write!(f, ", trigger={}", trigger)?;
		}
		if let Some(cond) = &self.when {
			write!(f, ", when {}=={}", cond.var, cond.value)?;
		}
		write!(f, ")")
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::vars::GameVars;

	#[test]
	fn test_normalize_reversed_range() {
		let entry = Break::new(9, 2).with_series_flags(SeriesFlags::STICK);
		let norm = entry.normalized();

		assert_eq!((norm.first_frame, norm.last_frame), (2, 9));
		assert!(norm.series_flags.contains(SeriesFlags::BACKWARD | SeriesFlags::STICK));
		assert_eq!(norm.loop_count, entry.loop_count);
	}

	#[test]
	fn test_normalize_keeps_play_to_end() {
		let entry = Break::new(5, constants::LAST_FRAME_OF_SERIES);
		let norm = entry.normalized();

		assert_eq!(norm, entry);
		assert!(!norm.series_flags.contains(SeriesFlags::BACKWARD));
	}

	#[test]
	fn test_normalize_forward_untouched() {
		let entry = Break::new(0, 0);
		assert_eq!(entry.normalized(), entry);
	}

	#[test]
	fn test_eligibility() {
		let mut vars = GameVars::with_len(2);
		let open = Break::new(0, 1);
		let gated = Break::new(0, 1).when(VarRef(1), 4);

		assert!(open.is_eligible(&vars));
		assert!(!gated.is_eligible(&vars));

		vars.set(VarRef(1), 4);
		assert!(gated.is_eligible(&vars));
	}

	#[test]
	fn test_json_defaults() {
		let entry: Break = serde_json::from_str(r#"{"first_frame": 3, "last_frame": 7}"#).unwrap();
		assert_eq!(entry, Break::new(3, 7));
	}

	#[test]
	fn test_display() {
		let entry = Break::new(0, 4).with_sound("a").with_trigger(2);
		assert_eq!(entry.to_string(), "Break(0..=4, sound=a@1, trigger=2)");
		assert_eq!(Break::sentinel().to_string(), "Sentinel");
	}
}
