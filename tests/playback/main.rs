//! Playback tests for `playbreak-rs`

use std::path::PathBuf;

mod concurrency;
mod config;
mod scripts;

/// Path of a break list shipped under `demos/scripts`
fn script(name: &str) -> PathBuf {
	PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos").join("scripts").join(name)
}
