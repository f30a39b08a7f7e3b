/// A 128-bit SipHash key, split into two 64-bit halves.
///
/// The key is immutable for the lifetime of a collision search run, and is
/// freely copied into each worker.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Key {
    k0: u64,
    k1: u64,
}

impl Key {
    /// The fixed key used by the collision search harness.
    ///
    /// This is a test constant, not a secret - it is baked into every build
    /// so that reported collisions can be reproduced.
    pub const FIXED: Self = Self::new(0xdda7806a4847ec61, 0xb5940c2623a5aabd);

    /// Construct a [`Key`] from the two 64-bit halves `k0` and `k1`.
    pub const fn new(k0: u64, k1: u64) -> Self {
        Self { k0, k1 }
    }

    /// Construct a [`Key`] from 16 raw bytes, reading `k0` from the first 8
    /// bytes and `k1` from the last 8, both little-endian.
    pub const fn from_bytes(key: &[u8; 16]) -> Self {
        let mut k0 = 0;
        let mut k1 = 0;
        let mut i = 0;
        while i < 8 {
            k0 |= (key[i] as u64) << (8 * i);
            k1 |= (key[i + 8] as u64) << (8 * i);
            i += 1;
        }
        Self { k0, k1 }
    }

    /// The first (low) key half.
    pub const fn k0(&self) -> u64 {
        self.k0
    }

    /// The second (high) key half.
    pub const fn k1(&self) -> u64 {
        self.k1
    }
}

impl Default for Key {
    fn default() -> Self {
        Self::FIXED
    }
}
