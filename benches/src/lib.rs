//! Benchmark helper utilities for playbreak-rs
//!
//! This module generates synthetic break lists that mix guarded, reversed,
//! silent and sound-waiting entries in fixed proportions, so playback and
//! parsing benchmarks exercise every branch of the player.

use playbreak_types::{
	BreakListError,
	breaks::{Break, BreakList, ListConfig},
	vars::VarRef,
};

/// Number of game variables the synthetic guards read
pub const GUARD_VARS: u32 = 4;

/// Generates a list of `len` breaks.
///
/// Every third entry is guarded on `var[i % GUARD_VARS] == 0`, every fourth
/// plays backward, and every fifth waits on its sound. Lists longer than the
/// lenient limit are rejected.
pub fn generate_break_list(len: usize) -> Result<BreakList, BreakListError> {
	let entries = (0..len)
		.map(|i| {
			let first = (i * 4) as i32;
			let mut entry = if i % 4 == 3 {
				Break::new(first + 3, first)
			} else {
				Break::new(first, first + 3)
			};
			if i % 3 == 0 {
				entry = entry.when(VarRef(i as u32 % GUARD_VARS), 0);
			}
			if i % 5 == 0 {
				entry = entry.with_sound(format!("snd{i:03}")).while_sound();
			} else if i % 7 == 0 {
				entry = entry.with_trigger(i as i32);
			}
			entry
		})
		.collect();

	BreakList::from_entries_with_config(entries, &ListConfig::lenient())
}

/// Common benchmark sizes for synthetic lists
pub mod sizes {
	/// A short reaction: 8 breaks
	pub const SHORT: usize = 8;
	/// A typical cutscene: 64 breaks
	pub const TYPICAL: usize = 64;
	/// A long scripted sequence: 1024 breaks
	pub const LONG: usize = 1024;
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_generate_break_list() {
		let list = generate_break_list(20).unwrap();
		assert_eq!(list.len(), 20);
		assert!(list.get(3).unwrap().is_reversed());
		assert!(list.get(5).unwrap().loops_while_sound());
		assert!(list.get(0).unwrap().when.is_some());
	}

	#[test]
	fn test_sizes_fit_lenient_limit() {
		assert_eq!(generate_break_list(sizes::LONG).unwrap().len(), sizes::LONG);
		assert!(generate_break_list(5000).is_err());
	}
}
