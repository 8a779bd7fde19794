//! Break list runner.
//!
//! Provides two subcommands:
//! - `run`: play a JSON break list against the recording host, feeding every
//!   completion back into the player, and print the host calls as JSON.
//! - `validate`: parse a JSON break list and summarize what it contains.

use std::{
	collections::BTreeSet,
	path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use log::{info, warn};
use playbreak_rs::prelude::*;

fn main() -> Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	match cli.command {
		Command::Run(opts) => run_list(opts),
		Command::Validate(opts) => run_validate(opts),
	}
}

#[derive(Parser)]
#[command(name = "break_runner")]
#[command(version)]
#[command(about = "Run and validate break lists", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Play a break list against a recording host
	Run(RunArgs),
	/// Check a break list and print a summary
	Validate(ValidateArgs),
}

#[derive(Args)]
struct RunArgs {
	/// JSON break list
	#[arg(value_name = "FILE")]
	list: PathBuf,

	/// Game variable assignment, e.g. `--set 0=2`
	#[arg(long = "set", value_name = "VAR=VALUE", value_parser = parse_assignment)]
	vars: Vec<(u32, i32)>,

	/// Series name (defaults to the file stem)
	#[arg(short, long)]
	series: Option<String>,

	/// Also play the shadow series
	#[arg(long, default_value_t = false)]
	shadow: bool,

	/// Preload the list's sounds before playing
	#[arg(long, default_value_t = false)]
	preload: bool,

	/// Completion trigger raised when the list finishes
	#[arg(short, long, default_value_t = 1)]
	trigger: i32,

	/// Player configuration file
	#[arg(short, long, value_name = "FILE", env = "PLAYBREAK_CONFIG")]
	config: Option<PathBuf>,

	/// Maximum number of simulation rounds
	#[arg(long, value_name = "COUNT", default_value_t = 1024)]
	max_rounds: usize,
}

#[derive(Args)]
struct ValidateArgs {
	/// JSON break list
	#[arg(value_name = "FILE")]
	list: PathBuf,

	/// Use the lenient list limits
	#[arg(long, default_value_t = false)]
	lenient: bool,
}

fn parse_assignment(arg: &str) -> Result<(u32, i32), String> {
	let (var, value) = arg.split_once('=').ok_or_else(|| format!("expected VAR=VALUE, got '{arg}'"))?;
	let var = var.trim().parse().map_err(|err| format!("bad variable '{var}': {err}"))?;
	let value = value.trim().parse().map_err(|err| format!("bad value '{value}': {err}"))?;
	Ok((var, value))
}

fn series_name(path: &Path) -> Result<String> {
	let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
		bail!("cannot derive a series name from {}", path.display());
	};
	Ok(stem.to_string())
}

fn run_list(args: RunArgs) -> Result<()> {
	let config = PlayerConfig::load(args.config.as_deref()).context("Failed to load player configuration")?;
	let breaks = BreakList::open_with_config(&args.list, &config.list)
		.with_context(|| format!("Failed to load {}", args.list.display()))?;
	let name = match args.series {
		Some(name) => name,
		None => series_name(&args.list)?,
	};

	let mut host = RecordingHost::new();
	for (var, value) in &args.vars {
		host.vars.set(VarRef(*var), *value);
	}

	let mut flags = PlayFlags::empty();
	if args.shadow {
		flags |= PlayFlags::WITH_SHADOW;
	}
	if args.preload {
		flags |= PlayFlags::PRELOAD_SOUNDS;
	}

	let mut players = SeriesPlayers::with_config(config);
	let request = PlayRequest::new(breaks, name).with_trigger(args.trigger).with_flags(flags);
	let slot = players.start(&mut host, request)?;
	let scene_triggers = host.run_until_idle(&mut players, args.max_rounds)?;

	if players.is_running(slot) {
		warn!("{} still running after {} rounds, cancelling", slot, args.max_rounds);
		players.cancel(&mut host, slot)?;
	}

	println!("{}", serde_json::to_string_pretty(host.events())?);
	info!(
		"{} host calls, scene triggers: {}",
		host.events().len(),
		scene_triggers.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
	);
	Ok(())
}

fn run_validate(args: ValidateArgs) -> Result<()> {
	let config = if args.lenient {
		ListConfig::lenient()
	} else {
		ListConfig::default()
	};
	let breaks = BreakList::open_with_config(&args.list, &config)
		.with_context(|| format!("{} is not a valid break list", args.list.display()))?;

	let sounds: BTreeSet<&str> = breaks.sounds().collect();
	let vars: BTreeSet<VarRef> = breaks.iter().filter_map(|entry| entry.when.map(|when| when.var)).collect();
	let reversed = breaks.iter().filter(|entry| entry.is_reversed()).count();
	let waiting = breaks.iter().filter(|entry| entry.loops_while_sound()).count();

	println!("{}: {}", args.list.display(), breaks);
	println!("  sounds:          {}", sounds.into_iter().collect::<Vec<_>>().join(", "));
	println!("  guard variables: {}", vars.iter().map(ToString::to_string).collect::<Vec<_>>().join(", "));
	println!("  reversed ranges: {reversed}");
	println!("  wait on sound:   {waiting}");
	for (index, entry) in breaks.iter().enumerate() {
		println!("  [{index:3}] {entry}");
	}
	Ok(())
}
