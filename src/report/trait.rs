use std::sync::Arc;

use crate::{generator::InputPair, worker::Collision};

/// An observer of the events emitted during a collision search.
///
/// A single [`Reporter`] is shared by the producer and every worker thread,
/// and may be called concurrently.
pub trait Reporter: Send + Sync {
    /// Called for each genuine [`Collision`] - two distinct inputs with equal
    /// digests.
    fn collision(&self, collision: &Collision);

    /// Called by a worker for every pair it receives when verbose reporting is
    /// enabled.
    ///
    /// By default this is a no-op unless implemented.
    fn candidate(&self, pair: &InputPair) {
        let _ = pair;
    }

    /// Called periodically by the producer with the number of pairs generated
    /// so far.
    ///
    /// By default this is a no-op unless implemented.
    fn progress(&self, iterations: u64) {
        let _ = iterations;
    }

    /// Called once after all workers have drained the queue, with the total
    /// number of pairs generated.
    ///
    /// By default this is a no-op unless implemented.
    fn finished(&self, iterations: u64) {
        let _ = iterations;
    }
}

impl<T> Reporter for Arc<T>
where
    T: Reporter + ?Sized,
{
    fn collision(&self, collision: &Collision) {
        (**self).collision(collision)
    }

    fn candidate(&self, pair: &InputPair) {
        (**self).candidate(pair)
    }

    fn progress(&self, iterations: u64) {
        (**self).progress(iterations)
    }

    fn finished(&self, iterations: u64) {
        (**self).finished(iterations)
    }
}
