//! Player configuration.
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! `PLAYBREAK_*` environment variables (`__` separates nested keys, e.g.
//! `PLAYBREAK_LIST__MAX_ENTRIES=512`).

use std::path::Path;

use config::{
	Config, Environment, File, FileFormat,
	builder::{ConfigBuilder, DefaultState},
};
use playbreak_types::breaks::{ListConfig, constants};
use serde::{Deserialize, Serialize};

use crate::error::PlayerError;

/// Default user trigger number of slot 0's play-break trigger
pub const PLAY_BREAK_TRIGGER_BASE: i32 = 32_000;

/// Configuration of a [`SeriesPlayers`](crate::SeriesPlayers) pool.
///
/// # Examples
///
/// ```
/// use playbreak_player::PlayerConfig;
///
/// let config = PlayerConfig::from_toml("max_players = 5\ndedupe_unloads = true")?;
/// assert_eq!(config.max_players, 5);
/// assert!(config.dedupe_unloads);
/// assert_eq!(config.shadow_suffix, "s");
/// # Ok::<(), playbreak_player::PlayerError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
	/// Number of concurrent playbacks
	pub max_players: usize,
	/// User trigger number reserved for slot 0; slot `n` uses `base + n`
	pub play_break_trigger_base: i32,
	/// Suffix naming the shadow series
	pub shadow_suffix: String,
	/// Unload each distinct preloaded sound once instead of once per break
	pub dedupe_unloads: bool,
	/// Break list validation limits
	pub list: ListConfig,
}

impl Default for PlayerConfig {
	fn default() -> Self {
		Self {
			max_players: constants::MAX_SERIES_PLAYERS,
			play_break_trigger_base: PLAY_BREAK_TRIGGER_BASE,
			shadow_suffix: constants::SHADOW_SUFFIX.to_string(),
			dedupe_unloads: false,
			list: ListConfig::default(),
		}
	}
}

impl PlayerConfig {
	/// Loads the configuration from defaults, an optional file and the environment.
	///
	/// The file format follows the extension (`.toml`, `.json`, ...).
	///
	/// # Errors
	///
	/// Returns an error if the file cannot be read or holds invalid values.
	pub fn load(path: Option<&Path>) -> Result<Self, PlayerError> {
		let mut builder = Self::defaults()?;
		if let Some(path) = path {
			builder = builder.add_source(File::from(path));
		}
		Self::finish(builder)
	}

	/// Loads the configuration from defaults, a TOML string and the environment.
	///
	/// # Errors
	///
	/// Returns an error if the TOML is malformed or holds invalid values.
	pub fn from_toml(toml: &str) -> Result<Self, PlayerError> {
		let builder = Self::defaults()?.add_source(File::from_str(toml, FileFormat::Toml));
		Self::finish(builder)
	}

	fn defaults() -> Result<ConfigBuilder<DefaultState>, PlayerError> {
		Ok(Config::builder().add_source(Config::try_from(&Self::default())?))
	}

	fn environment() -> Environment {
		Environment::with_prefix("PLAYBREAK")
			.prefix_separator("_")
			.separator("__")
			.try_parsing(true)
	}

	fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, PlayerError> {
		Self::finish_with(builder, Self::environment())
	}

	fn finish_with(
		builder: ConfigBuilder<DefaultState>,
		environment: Environment,
	) -> Result<Self, PlayerError> {
		let config = builder.add_source(environment).build()?;
		Ok(config.try_deserialize()?)
	}
}
