use std::sync::{
    atomic::{AtomicU64, Ordering},
    Mutex, PoisonError,
};

use crate::{generator::InputPair, worker::Collision};

use super::Reporter;

/// A [`Reporter`] retaining every event it observes, for later inspection.
///
/// Memory usage grows with each reported collision and progress event -
/// verbose candidates are counted, not retained.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    collisions: Mutex<Vec<Collision>>,
    progress: Mutex<Vec<u64>>,
    candidates: AtomicU64,
    finished: Mutex<Option<u64>>,
}

impl RecordingReporter {
    /// Return a copy of all collisions reported so far, in report order.
    pub fn collisions(&self) -> Vec<Collision> {
        self.collisions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Return all progress counters reported so far.
    pub fn progress_events(&self) -> Vec<u64> {
        self.progress
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The number of verbose candidate pairs observed.
    pub fn candidates(&self) -> u64 {
        self.candidates.load(Ordering::Relaxed)
    }

    /// The iteration count passed to [`Reporter::finished()`], if called.
    pub fn finished_at(&self) -> Option<u64> {
        *self.finished.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Reporter for RecordingReporter {
    fn collision(&self, collision: &Collision) {
        self.collisions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(collision.clone());
    }

    fn candidate(&self, _pair: &InputPair) {
        self.candidates.fetch_add(1, Ordering::Relaxed);
    }

    fn progress(&self, iterations: u64) {
        self.progress
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(iterations);
    }

    fn finished(&self, iterations: u64) {
        *self.finished.lock().unwrap_or_else(PoisonError::into_inner) = Some(iterations);
    }
}
