//! Benchmarks for mixing held chords into one tick.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use tonebox::synth::{EffectMode, NotePrecomputeTable, NoteTable, VoiceMixer, VoiceSet};
use tonebox::SynthConfig;

fn chord(keys: &[char]) -> VoiceSet {
    let mut voices = VoiceSet::new();
    for &key in keys {
        voices.key_down(key);
    }
    voices
}

pub fn bench_mix(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/mix");

    let notes = NoteTable::default();
    let config = SynthConfig::default();

    let chords: &[(&str, &[char])] = &[
        ("1_voice", &['a']),
        ("triad", &['a', 'd', 'g']),
        ("all_keys", &['a', 's', 'd', 'f', 'g', 'h', 'j', 'k']),
    ];

    // Plain is one second per tick, echo stretches the tick to three.
    for mode in [EffectMode::Plain, EffectMode::Echo] {
        let Ok(table) = NotePrecomputeTable::build(mode, &notes, &config) else {
            continue;
        };
        let mixer = VoiceMixer::new(table);

        for (name, keys) in chords {
            let voices = chord(keys);
            group.bench_with_input(
                BenchmarkId::new(format!("{mode}"), *name),
                &voices,
                |b, voices| b.iter(|| mixer.mix(black_box(voices))),
            );
        }
    }

    group.finish();
}
