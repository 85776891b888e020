//! # Enigma-Trace Benchmarks
//!
//! The engine promises short, bounded, O(1) encipherments: every call is a
//! handful of table lookups plus one stepping decision. These benchmarks
//! keep that promise honest.
//!
//! | Operation | Target |
//! |-----------|--------|
//! | encipher_one | < 1us |
//! | engine construction | < 100us |

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use enigma_core::{CipherApi, CipherEngine, MachineConfig, MachineConfigBuilder};

fn bench_encipher_one(c: &mut Criterion) {
    let mut group = c.benchmark_group("enigma-core");

    let mut engine = CipherEngine::new(&MachineConfig::default()).unwrap();
    group.bench_function("encipher_one", |b| {
        b.iter(|| black_box(engine.encipher_one('A').unwrap().output))
    });

    let config = MachineConfigBuilder::new()
        .plug('C', 'Q')
        .plug('A', 'Z')
        .plug('M', 'N')
        .build()
        .unwrap();
    let mut plugged = CipherEngine::new(&config).unwrap();
    group.bench_function("encipher_one_with_plugboard", |b| {
        b.iter(|| black_box(plugged.encipher_one('A').unwrap().output))
    });

    group.finish();
}

fn bench_message_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("enigma-core-messages");
    let message: Vec<char> = "ENIGMAREVEALED".chars().cycle().take(1_000).collect();

    group.throughput(Throughput::Elements(message.len() as u64));
    group.bench_function("encipher_1k_symbols", |b| {
        b.iter(|| {
            let mut engine = CipherEngine::new(&MachineConfig::default()).unwrap();
            let mut checksum = 0usize;
            for &symbol in &message {
                checksum += engine.encipher_one(symbol).unwrap().output as usize;
            }
            black_box(checksum)
        })
    });

    group.finish();
}

fn bench_engine_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("enigma-core-construction");

    let config = MachineConfig::default();
    group.bench_function("engine_new", |b| {
        b.iter(|| black_box(CipherEngine::new(&config).unwrap().offsets()))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_encipher_one,
    bench_message_throughput,
    bench_engine_construction
);
criterion_main!(benches);
