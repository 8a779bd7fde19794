//! Player configuration files

use std::io::Write;

use playbreak_rs::prelude::*;

#[test]
fn test_config_file_drives_pool() {
	let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
	writeln!(file, "max_players = 1\nplay_break_trigger_base = 500\nshadow_suffix = \"_sh\"").unwrap();

	let config = PlayerConfig::load(Some(file.path())).unwrap();
	let mut players = SeriesPlayers::with_config(config);
	assert_eq!(players.capacity(), 1);

	let mut host = RecordingHost::new();
	let breaks = BreakList::from_entries(vec![Break::new(0, 2)]).unwrap();
	let request = PlayRequest::new(breaks, "door").with_flags(PlayFlags::WITH_SHADOW);
	players.start(&mut host, request).unwrap();

	assert!(host.events().iter().any(|event| matches!(event, HostEvent::LoadSeries { name, .. } if name == "door_sh")));
	assert!(host.events().iter().any(|event| matches!(
		event,
		HostEvent::PlaySeries {
			trigger: Some(TriggerId(500)),
			..
		}
	)));
}

#[test]
fn test_missing_config_file() {
	let dir = tempfile::tempdir().unwrap();
	let err = PlayerConfig::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
	assert!(matches!(err, PlayerError::Config(_)));
}

#[test]
fn test_list_limits_from_config() {
	let config = PlayerConfig::from_toml("[list]\nmax_entries = 2").unwrap();
	let entries = vec![Break::new(0, 1), Break::new(2, 3), Break::new(4, 5)];
	assert!(matches!(
		BreakList::from_entries_with_config(entries, &config.list),
		Err(BreakListError::TooLong { .. })
	));
}
