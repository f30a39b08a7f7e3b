//! Trait & implementations for observing collision search output.

mod nop;
mod record;
mod stdout;
mod r#trait;

pub use nop::*;
pub use r#trait::*;
pub use record::*;
pub use stdout::*;
