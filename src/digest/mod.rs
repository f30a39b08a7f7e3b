//! Hash function abstraction, key & digest types.

mod key;
pub mod siphash;
mod r#trait;

pub use key::*;
pub use r#trait::*;

#[cfg(test)]
pub(crate) mod mock;
