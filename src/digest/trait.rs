/// A keyed hash function outputting 64-bit [`Digest`] values.
///
/// Implementations MUST be pure with respect to `input` - hashing the same
/// bytes twice always yields the same [`Digest`], and no shared state is
/// mutated. A single instance is shared by every collision worker, hence the
/// `Send + Sync` bound.
///
/// # Default Implementation
///
/// The default [`Hasher`] implementation ([`SipHasher`]) computes SipHash-2-4
/// keyed with [`Key::FIXED`], a test constant that provides no secrecy.
///
/// [`SipHasher`]: super::siphash::SipHasher
/// [`Key::FIXED`]: super::Key::FIXED
pub trait Hasher: Send + Sync {
    /// Hash `input`, producing a deterministic 64-bit digest.
    fn hash(&self, input: &[u8]) -> Digest;
}

impl<T> Hasher for &T
where
    T: Hasher + ?Sized,
{
    fn hash(&self, input: &[u8]) -> Digest {
        (**self).hash(input)
    }
}

impl<T> Hasher for std::sync::Arc<T>
where
    T: Hasher + ?Sized,
{
    fn hash(&self, input: &[u8]) -> Digest {
        (**self).hash(input)
    }
}

/// A 64-bit digest, output from a [`Hasher`] implementation.
///
/// The digest has no internal structure - two digests are either equal, or
/// they are not.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct Digest(u64);

impl Digest {
    /// Wrap an opaque 64-bit value in a [`Digest`] for type safety.
    pub const fn new(digest: u64) -> Self {
        Self(digest)
    }

    /// Return the raw 64-bit digest value.
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for Digest {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

impl std::fmt::Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}
