use std::hash::Hasher as _;

use criterion::{BenchmarkId, Criterion, Throughput};
use siphash_collider::digest::{siphash, Key};

use crate::{Lfsr, INPUT_LENGTHS};

pub(super) fn bench_hash(c: &mut Criterion) {
    let mut g = c.benchmark_group("hash");

    // Generate benchmark data using a pseudo random sequence with the same seed
    // for reproducible runs.
    let mut rand = Lfsr::default();
    let key = Key::FIXED;

    for &len in INPUT_LENGTHS {
        let input = rand.bytes(len);

        g.throughput(Throughput::Bytes(len as _));
        g.bench_with_input(BenchmarkId::new("siphash_2_4", len), &input, |b, input| {
            b.iter(|| siphash::hash(key.k0(), key.k1(), input));
        });

        // The siphasher crate, as a point of reference.
        g.bench_with_input(BenchmarkId::new("siphasher", len), &input, |b, input| {
            b.iter(|| {
                let mut h = siphasher::sip::SipHasher24::new_with_keys(key.k0(), key.k1());
                h.write(input);
                h.finish()
            });
        });
    }
}
