use colcrack::cipher::{decode, encode, Key};
use colcrack::config::SearchParams;
use colcrack::optimizer::{AttackMode, Attacker};
use colcrack::scorer::Scorer;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::sync::Arc;

const PLAINTEXT: &str = "ITWASTHEBESTOFTIMESITWASTHEWORSTOFTIMESITWASTHEAGEOFWISDOM\
ITWASTHEAGEOFFOOLISHNESSITWASTHEEPOCHOFBELIEFITWASTHEEPOCHOFINCREDULITY";

fn bench_fitness(c: &mut Criterion) {
    let scorer = Scorer::default();
    let key: Key = "352164".parse().unwrap();
    let ct = encode(PLAINTEXT, &key, false);

    c.bench_function("fitness_english", |b| {
        b.iter(|| scorer.fitness(black_box(PLAINTEXT)))
    });
    c.bench_function("decode_and_fitness", |b| {
        b.iter(|| scorer.fitness(&decode(black_box(&ct), black_box(&key))))
    });
}

fn bench_exhaustive(c: &mut Criterion) {
    let attacker = Attacker::new(Arc::new(Scorer::default()), SearchParams::default());
    let ct = encode(PLAINTEXT, &"352164".parse().unwrap(), false);

    let mut group = c.benchmark_group("exhaustive");
    group.sample_size(10);
    group.bench_function("len6", |b| {
        b.iter(|| attacker.attack(black_box(&ct), AttackMode::Exhaustive, 6))
    });
    group.finish();
}

criterion_group!(benches, bench_fitness, bench_exhaustive);
criterion_main!(benches);
