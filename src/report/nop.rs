use crate::worker::Collision;

use super::Reporter;

/// A no-op [`Reporter`] implementation - it does nothing!
#[derive(Debug, Default, Clone, Copy)]
pub struct NopReporter;

impl Reporter for NopReporter {
    fn collision(&self, _collision: &Collision) {}
}
