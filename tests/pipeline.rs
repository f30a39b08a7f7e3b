use std::{io::Write, num::NonZeroU64, sync::Arc};

use siphash_collider::{
    digest::{siphash::SipHasher, Digest, Hasher, Key},
    generator::{ByteGenerator, PhraseGenerator, WordCorpus, SEPARATORS},
    report::RecordingReporter,
    Builder, RunSummary,
};

/// A SipHash-2-4 [`Hasher`] retaining only the low `bits` of each digest,
/// making genuine collisions between random inputs likely.
#[derive(Debug, Clone, Copy)]
struct TruncatedHasher {
    inner: SipHasher,
    bits: u32,
}

impl TruncatedHasher {
    fn new(bits: u32) -> Self {
        Self {
            inner: SipHasher::new(Key::FIXED),
            bits,
        }
    }
}

impl Hasher for TruncatedHasher {
    fn hash(&self, input: &[u8]) -> Digest {
        Digest::new(self.inner.hash(input).as_u64() & ((1 << self.bits) - 1))
    }
}

/// Every reported collision must be a pair of distinct inputs with equal
/// (truncated) digests.
#[test]
fn test_truncated_collisions_are_genuine() {
    let hasher = TruncatedHasher::new(6);
    let reporter = Arc::new(RecordingReporter::default());

    let summary = Builder::default()
        .with_hasher(hasher)
        .with_reporter(Arc::clone(&reporter))
        .with_iterations(5_000)
        .with_progress_interval(1_000)
        .build()
        .run()
        .expect("run must complete");

    assert_eq!(summary.iterations, 5_000);
    assert_eq!(summary.pairs_checked, 5_000);

    let collisions = reporter.collisions();
    assert_eq!(collisions.len() as u64, summary.collisions);

    // With 64 possible digests, ~1/64 random pairs collide; the chance of
    // seeing none in 5,000 pairs is negligible.
    assert!(!collisions.is_empty());

    for c in &collisions {
        assert_ne!(c.a(), c.b());
        assert_eq!(hasher.hash(c.a()), hasher.hash(c.b()));
        assert_eq!(hasher.hash(c.a()), c.digest());
    }

    assert_eq!(reporter.progress_events(), [0, 1_000, 2_000, 3_000, 4_000]);
    assert_eq!(reporter.finished_at(), Some(5_000));
}

/// A single word corpus with phrases of exactly one word only ever produces
/// identical pairs, which must never be reported even under a degenerate hash.
#[test]
fn test_identical_phrases_never_reported() {
    let corpus = WordCorpus::new(vec!["platypus".to_string()]).unwrap();
    let reporter = Arc::new(RecordingReporter::default());

    let summary = Builder::default()
        .with_generator(PhraseGenerator::new(corpus, NonZeroU64::new(1).unwrap()))
        .with_hasher(TruncatedHasher::new(0))
        .with_reporter(Arc::clone(&reporter))
        .with_iterations(2_000)
        .build()
        .run()
        .unwrap();

    assert_eq!(
        summary,
        RunSummary {
            iterations: 2_000,
            pairs_checked: 2_000,
            collisions: 0,
        }
    );
    assert!(reporter.collisions().is_empty());
}

/// Phrases built from a corpus file only contain corpus words and separators.
#[test]
fn test_phrase_collisions_from_corpus_file() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    f.write_all(br#"["bananas", "platypus", "wombat"]"#)
        .unwrap();

    let corpus = WordCorpus::load(f.path()).unwrap();
    let words = corpus.iter().map(str::to_owned).collect::<Vec<_>>();

    let reporter = Arc::new(RecordingReporter::default());
    Builder::default()
        .with_generator(PhraseGenerator::new(corpus, NonZeroU64::new(3).unwrap()))
        .with_hasher(TruncatedHasher::new(0))
        .with_reporter(Arc::clone(&reporter))
        .with_iterations(500)
        .build()
        .run()
        .unwrap();

    let collisions = reporter.collisions();
    assert!(!collisions.is_empty());

    for c in collisions {
        for input in [c.a(), c.b()] {
            for w in input.split(|v| SEPARATORS.contains(v)) {
                assert!(
                    words.iter().any(|v| v.as_bytes() == w),
                    "unexpected word {w:?}"
                );
            }
        }
    }
}

/// The full SipHash-2-4 digest does not collide over a short random run.
#[test]
fn test_full_digest_run() {
    let reporter = Arc::new(RecordingReporter::default());

    let summary = Builder::default()
        .with_generator(ByteGenerator::new())
        .with_reporter(Arc::clone(&reporter))
        .with_workers(8)
        .with_iterations(20_000)
        .build()
        .run()
        .unwrap();

    assert_eq!(summary.pairs_checked, 20_000);
    assert_eq!(summary.collisions, 0);
}
