use std::fmt::Display;

/// Two candidate inputs to be hashed and compared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPair {
    a: Vec<u8>,
    b: Vec<u8>,
}

impl InputPair {
    /// Construct a new [`InputPair`].
    pub fn new(a: Vec<u8>, b: Vec<u8>) -> Self {
        Self { a, b }
    }

    /// The first input.
    pub fn a(&self) -> &[u8] {
        &self.a
    }

    /// The second input.
    pub fn b(&self) -> &[u8] {
        &self.b
    }

    /// Returns true if both inputs are byte-for-byte identical.
    ///
    /// Identical inputs trivially hash to the same digest, and are never a
    /// collision.
    pub fn is_identical(&self) -> bool {
        self.a == self.b
    }

    /// Consume this pair, returning the two inputs.
    pub fn into_inner(self) -> (Vec<u8>, Vec<u8>) {
        (self.a, self.b)
    }
}

impl Display for InputPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}",
            String::from_utf8_lossy(&self.a),
            String::from_utf8_lossy(&self.b)
        )
    }
}
