use std::num::NonZeroU64;

use criterion::{BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, SeedableRng};
use siphash_collider::{
    digest::siphash::SipHasher,
    generator::{ByteGenerator, PairGenerator, PhraseGenerator, WordCorpus},
    worker::check_pair,
};

use crate::Lfsr;

const N_WORDS: usize = 10_000;

pub(super) fn bench_generate(c: &mut Criterion) {
    let mut g = c.benchmark_group("generate");
    g.throughput(Throughput::Elements(1));

    g.bench_function("bytes_os_rng", |b| {
        let mut generator = ByteGenerator::new();
        b.iter(|| generator.pair());
    });

    g.bench_function("bytes_std_rng", |b| {
        let mut generator = ByteGenerator::with_rng(StdRng::seed_from_u64(42));
        b.iter(|| generator.pair());
    });

    // A corpus of short pseudo-random words.
    let mut rand = Lfsr::default();
    let words = (0..N_WORDS)
        .map(|_| format!("{:x}", rand.next()))
        .collect::<Vec<_>>();
    let corpus = WordCorpus::new(words).expect("non-empty corpus");

    for max_words in [1, 4, 16] {
        g.bench_with_input(
            BenchmarkId::new("phrases", max_words),
            &max_words,
            |b, &max_words| {
                let mut generator = PhraseGenerator::with_rng(
                    corpus.clone(),
                    NonZeroU64::new(max_words).expect("non-zero"),
                    StdRng::seed_from_u64(42),
                );
                b.iter(|| generator.pair());
            },
        );
    }

    // A full generate, hash & compare cycle, as performed per iteration of a
    // run (excluding queueing).
    g.bench_function("bytes_check_pair", |b| {
        let hasher = SipHasher::default();
        let mut generator = ByteGenerator::with_rng(StdRng::seed_from_u64(42));
        b.iter(|| check_pair(&hasher, generator.pair()));
    });
}
