//! Several playbacks sharing one pool

use std::sync::Arc;

use playbreak_rs::prelude::*;

fn walk(len: i32) -> Arc<BreakList> {
	Arc::new(BreakList::from_entries((0..len).map(|i| Break::new(i * 2, i * 2 + 1)).collect()).unwrap())
}

#[test_log::test]
fn test_three_playbacks_progress_independently() {
	let mut host = RecordingHost::new();
	let mut players = SeriesPlayers::new();

	let short = players.start(&mut host, PlayRequest::new(walk(1), "short").with_trigger(101)).unwrap();
	let medium = players.start(&mut host, PlayRequest::new(walk(3), "medium").with_trigger(102)).unwrap();
	let long = players.start(&mut host, PlayRequest::new(walk(6), "long").with_trigger(103)).unwrap();
	assert!(matches!(
		players.start(&mut host, PlayRequest::new(walk(1), "extra")),
		Err(PlayerError::ResourceExhausted { .. })
	));

	let triggers = host.run_until_idle(&mut players, 64).unwrap();
	assert_eq!(triggers, vec![TriggerId(101), TriggerId(102), TriggerId(103)]);
	for slot in [short, medium, long] {
		assert!(!players.is_running(slot));
	}

	let plays = host.count(|event| matches!(event, HostEvent::PlaySeries { .. }));
	assert_eq!(plays, 1 + 3 + 6);
	assert_eq!(host.count(|event| matches!(event, HostEvent::UnloadSeries { .. })), 3);
}

#[test_log::test]
fn test_freed_slot_is_reused() {
	let mut host = RecordingHost::new();
	let mut players = SeriesPlayers::new();

	for name in ["a", "b", "c"] {
		players.start(&mut host, PlayRequest::new(walk(2), name)).unwrap();
	}
	let first = SlotHandle(0);
	players.on_completion(&mut host, first).unwrap();
	players.on_completion(&mut host, first).unwrap();
	assert!(!players.is_running(first));

	let again = players.start(&mut host, PlayRequest::new(walk(2), "d")).unwrap();
	assert_eq!(again, first);
	assert_eq!(players.status()[0].name, "d");
}

#[test_log::test]
fn test_cancel_mid_run() {
	let mut host = RecordingHost::new();
	let mut players = SeriesPlayers::new();

	let breaks = BreakList::from_entries(vec![
		Break::new(0, 3),
		Break::new(4, 9).with_sound("speech").with_channel(2).while_sound(),
		Break::new(10, 12),
	])
	.unwrap();
	let slot = players.start(&mut host, PlayRequest::new(breaks, "talker").with_trigger(50)).unwrap();

	// Finish the first break only
	host.settle();
	for trigger in host.take_dispatched() {
		players.handle_trigger(&mut host, trigger).unwrap().unwrap();
	}
	assert_eq!(players.status()[0].index, 2);

	players.cancel(&mut host, slot).unwrap();
	assert!(host.live_machines().is_empty());
	assert!(host.playing_channels().is_empty());
	assert_eq!(host.run_until_idle(&mut players, 8).unwrap(), Vec::new());
	assert_eq!(host.count(|event| *event == HostEvent::DispatchTrigger { trigger: TriggerId(50) }), 0);
}

/// A host that only counts calls, to exercise the trait seams directly
#[derive(Default)]
struct CountingHost {
	loads: usize,
	unloads: usize,
	machines: u32,
	sounds: usize,
	dispatched: Vec<TriggerId>,
}

impl VariableSource for CountingHost {
	fn read_var(&self, var: VarRef) -> Option<i32> {
		(var == VarRef(0)).then_some(1)
	}
}

impl SpriteEngine for CountingHost {
	fn load_series(&mut self, _name: &str) -> Result<SeriesHandle, HostError> {
		self.loads += 1;
		Ok(SeriesHandle(self.loads as u32))
	}

	fn unload_series(&mut self, _series: SeriesHandle) {
		self.unloads += 1;
	}

	fn play_series(&mut self, _request: &SeriesRequest<'_>) -> MachineHandle {
		self.machines += 1;
		MachineHandle(self.machines)
	}

	fn terminate_machine(&mut self, _machine: MachineHandle) {}
}

impl SoundEngine for CountingHost {
	fn play_sound(&mut self, _request: &SoundRequest<'_>) {
		self.sounds += 1;
	}

	fn stop_sound(&mut self, _channel: u8) {}

	fn preload_sound(&mut self, _name: &str) -> Result<(), HostError> {
		Ok(())
	}

	fn unload_sound(&mut self, _name: &str) {}
}

impl TriggerKernel for CountingHost {
	fn create_trigger(&mut self, trigger: i32) -> TriggerId {
		TriggerId(trigger + 1_000)
	}

	fn dispatch_trigger(&mut self, trigger: TriggerId) {
		self.dispatched.push(trigger);
	}
}

#[test]
fn test_custom_host() {
	let mut host = CountingHost::default();
	let mut players = SeriesPlayers::new();

	let breaks = BreakList::from_entries(vec![
		Break::new(0, 1).with_sound("yes").when(VarRef(0), 1),
		Break::new(0, 1).with_sound("no").when(VarRef(1), 1),
	])
	.unwrap();
	let slot = players.start(&mut host, PlayRequest::new(breaks, "custom").with_trigger(7)).unwrap();

	// The slot trigger goes through the kernel's numbering
	let step = players.handle_trigger(&mut host, TriggerId(PLAY_BREAK_TRIGGER_BASE + 1_000)).unwrap().unwrap();
	assert_eq!(step, Advance::Finished { slot });
	assert_eq!((host.loads, host.unloads, host.machines, host.sounds), (1, 1, 1, 1));
	assert_eq!(host.dispatched, vec![TriggerId(1_007)]);
}
