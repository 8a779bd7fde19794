//! Runs the demo break lists end to end

use playbreak_rs::prelude::*;

use super::script;

fn sounds_started(host: &RecordingHost) -> Vec<&str> {
	host.events()
		.iter()
		.filter_map(|event| match event {
			HostEvent::PlaySound {
				name,
				..
			} => Some(name.as_str()),
			_ => None,
		})
		.collect()
}

fn run(file: &str, vars: &[(u32, i32)]) -> (RecordingHost, Vec<TriggerId>) {
	let breaks = BreakList::open(script(file)).unwrap();
	let mut host = RecordingHost::new();
	for (var, value) in vars {
		host.vars.set(VarRef(*var), *value);
	}

	let mut players = SeriesPlayers::new();
	players.start(&mut host, PlayRequest::new(breaks, "scene").with_trigger(1)).unwrap();
	let triggers = host.run_until_idle(&mut players, 64).unwrap();
	assert_eq!(players.active_count(), 0);
	(host, triggers)
}

#[test_log::test]
fn test_dancer_picks_guarded_sound() {
	let (host, triggers) = run("dancer.json", &[(0, 2)]);
	assert_eq!(sounds_started(&host), vec!["b.raw"]);
	assert_eq!(triggers, vec![TriggerId(3), TriggerId(1)]);

	let (host, _) = run("dancer.json", &[(0, 1)]);
	assert_eq!(sounds_started(&host), vec!["a.raw"]);
}

#[test_log::test]
fn test_dancer_unknown_variable_skips_guarded_breaks() {
	let (host, triggers) = run("dancer.json", &[]);
	assert!(sounds_started(&host).is_empty());
	assert_eq!(triggers, vec![TriggerId(3), TriggerId(1)]);
}

#[test_log::test]
fn test_ripley_conversation() {
	let (host, triggers) = run("ripley_talks.json", &[]);
	assert_eq!(triggers, vec![TriggerId(10), TriggerId(1)]);
	assert_eq!(sounds_started(&host), vec!["407r01", "407r02", "407_hum"]);

	// Both sound-driven breaks had their looping animation cut short
	assert_eq!(host.count(|event| matches!(event, HostEvent::TerminateMachine { .. })), 2);

	let events = host.events();
	let stop = events.iter().position(|event| *event == HostEvent::StopSound { channel: 2 }).unwrap();
	let second_line = events
		.iter()
		.position(|event| matches!(event, HostEvent::PlaySound { name, .. } if name == "407r02"))
		.unwrap();
	assert!(stop < second_line);

	assert!(events.iter().any(|event| matches!(
		event,
		HostEvent::PlaySeries {
			first_frame: 7,
			last_frame: 12,
			flags,
			..
		} if flags.contains(SeriesFlags::BACKWARD)
	)));
	assert!(events.iter().any(|event| matches!(
		event,
		HostEvent::PlaySeries {
			first_frame: 13,
			last_frame: -1,
			flags,
			..
		} if *flags == SeriesFlags::HORZ_FLIP
	)));

	// The ambient loop keeps playing after the list is done
	assert_eq!(host.playing_channels(), vec![3]);
}

#[test]
fn test_event_log_serializes() {
	let (host, _) = run("dancer.json", &[(0, 2)]);
	let json = serde_json::to_value(host.events()).unwrap();
	assert_eq!(json[0]["kind"], "load_series");
	assert_eq!(json[0]["name"], "scene");
	assert!(json.as_array().unwrap().iter().any(|event| event["kind"] == "dispatch_trigger"));
}
