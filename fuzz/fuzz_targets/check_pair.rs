#![no_main]

use libfuzzer_sys::fuzz_target;
use siphash_collider::{
    digest::{siphash::SipHasher, Hasher},
    generator::InputPair,
    worker::check_pair,
};

fuzz_target!(|data: (Vec<u8>, Vec<u8>)| {
    let (a, b) = data;
    let hasher = SipHasher::default();

    let identical = a == b;
    let equal_digest = hasher.hash(&a) == hasher.hash(&b);

    match check_pair(&hasher, InputPair::new(a, b)) {
        // Invariant: a reported collision is always two distinct inputs with
        // equal digests.
        Some(c) => {
            assert_ne!(c.a(), c.b());
            assert_eq!(hasher.hash(c.a()), hasher.hash(c.b()));
        }
        // Invariant: identical inputs are never reported.
        None => assert!(identical || !equal_digest),
    }
});
