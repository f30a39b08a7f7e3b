#![no_main]

use std::hash::Hasher as _;

use libfuzzer_sys::fuzz_target;
use siphash_collider::digest::siphash::hash;

fuzz_target!(|data: (u64, u64, Vec<u8>)| {
    let (k0, k1, input) = data;

    // Invariant: the digest matches the siphasher implementation for all keys
    // and inputs.
    let mut control = siphasher::sip::SipHasher24::new_with_keys(k0, k1);
    control.write(&input);
    assert_eq!(hash(k0, k1, &input), control.finish());

    // Invariant: hashing is deterministic.
    assert_eq!(hash(k0, k1, &input), hash(k0, k1, &input));
});
