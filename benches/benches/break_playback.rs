//! Benchmark suite for break-list playback
//!
//! Measures a full walk of synthetic lists through the recording host and the
//! JSON round trip of list files.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use playbreak_benches::{generate_break_list, sizes};
use playbreak_player::{PlayRequest, SeriesPlayers, recording::RecordingHost};
use playbreak_types::breaks::{BreakList, ListConfig};
use std::{hint::black_box, sync::Arc};

/// Plays a list from start to finish, completing every awaited signal
fn bench_full_playback(c: &mut Criterion) {
	let mut group = c.benchmark_group("playback");

	for len in [sizes::SHORT, sizes::TYPICAL, sizes::LONG] {
		let list = Arc::new(generate_break_list(len).unwrap());
		group.throughput(Throughput::Elements(len as u64));
		group.bench_with_input(BenchmarkId::new("run_until_idle", len), &list, |b, list| {
			b.iter(|| {
				let mut host = RecordingHost::new();
				let mut players = SeriesPlayers::new();
				let request = PlayRequest::new(Arc::clone(list), "bench").with_trigger(1);
				players.start(&mut host, request).unwrap();
				let triggers = host.run_until_idle(&mut players, len * 4 + 8).unwrap();
				black_box(triggers)
			});
		});
	}

	group.finish();
}

/// Benchmark JSON parsing separately
fn bench_json_parsing(c: &mut Criterion) {
	let mut group = c.benchmark_group("json");

	for len in [sizes::TYPICAL, sizes::LONG] {
		let json = generate_break_list(len).unwrap().to_json().unwrap();
		group.throughput(Throughput::Bytes(json.len() as u64));
		group.bench_with_input(BenchmarkId::new("from_json", len), &json, |b, json| {
			b.iter(|| {
				let result = BreakList::from_json_with_config(black_box(json), &ListConfig::lenient());
				black_box(result)
			});
		});
	}

	group.finish();
}

criterion_group!(benches, bench_full_playback, bench_json_parsing);
criterion_main!(benches);
