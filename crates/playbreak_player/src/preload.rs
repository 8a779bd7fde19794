//! Sound preloading for break lists.
//!
//! These helpers load or release the sounds a break list refers to, ahead of
//! or after playback. They are used by playbacks started with
//! [`PlayFlags::PRELOAD_SOUNDS`](playbreak_types::flags::PlayFlags::PRELOAD_SOUNDS)
//! and can be called directly by scene code that manages its own sounds.

use std::collections::HashSet;

use log::{debug, warn};
use playbreak_types::{breaks::BreakList, vars::VariableSource};

use crate::host::SoundEngine;

/// Outcome of [`preload_break_sounds`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreloadReport {
	/// Number of preload requests issued
	pub requested: usize,
	/// Names that failed to load
	pub failed: Vec<String>,
}

impl PreloadReport {
	/// Returns true if every requested sound loaded
	pub fn is_complete(&self) -> bool {
		self.failed.is_empty()
	}
}

/// Preloads the sounds of `breaks`.
///
/// Only breaks whose guard currently passes are considered unless `load_all`
/// is set. Each qualifying break issues one request, so a name used by
/// several breaks is requested several times. A failed load is logged and
/// skipped; the break will later play without sound.
pub fn preload_break_sounds<H>(host: &mut H, breaks: &BreakList, load_all: bool) -> PreloadReport
where
	H: SoundEngine + VariableSource + ?Sized,
{
	let mut report = PreloadReport::default();

	for entry in breaks {
		let Some(sound) = entry.sound.as_deref() else {
			continue;
		};
		if !load_all && !entry.is_eligible(&*host) {
			continue;
		}

		report.requested += 1;
		if let Err(err) = host.preload_sound(sound) {
			warn!("preload_break_sounds: failed to preload '{}': {}", sound, err);
			report.failed.push(sound.to_string());
		}
	}

	debug!(
		"preload_break_sounds: {} requested, {} failed (load_all={})",
		report.requested,
		report.failed.len(),
		load_all
	);
	report
}

/// Unloads every sound referenced by `breaks`, once per occurrence.
///
/// Guards are ignored. Returns the number of unload requests issued.
pub fn unload_break_sounds<H>(host: &mut H, breaks: &BreakList) -> usize
where
	H: SoundEngine + ?Sized,
{
	let mut count = 0;
	for sound in breaks.sounds() {
		host.unload_sound(sound);
		count += 1;
	}
	count
}

/// Unloads every distinct sound referenced by `breaks` exactly once.
///
/// Returns the number of unload requests issued.
pub fn unload_break_sounds_once<H>(host: &mut H, breaks: &BreakList) -> usize
where
	H: SoundEngine + ?Sized,
{
	let mut seen = HashSet::new();
	for sound in breaks.sounds() {
		if seen.insert(sound) {
			host.unload_sound(sound);
		}
	}
	seen.len()
}
