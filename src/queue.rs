//! A bounded, blocking queue of [`InputPair`] between the producer and the
//! collision workers.

use crossbeam_channel::{bounded, Receiver, Sender};

use crate::generator::InputPair;

/// The default maximum number of in-flight pairs.
pub const DEFAULT_QUEUE_CAPACITY: usize = 100;

/// Construct a bounded queue holding at most `capacity` pairs, returning the
/// producer and consumer halves.
///
/// A `capacity` of 0 is raised to 1 - a rendezvous queue would never hold a
/// pending pair.
pub fn pair_queue(capacity: usize) -> (PairSender, PairReceiver) {
    let (tx, rx) = bounded(capacity.max(1));
    (PairSender(tx), PairReceiver(rx))
}

/// The producer half of a [`pair_queue()`].
///
/// The queue is closed once all [`PairSender`] handles are dropped.
#[derive(Debug, Clone)]
pub struct PairSender(Sender<InputPair>);

impl PairSender {
    /// Enqueue `pair`, blocking while the queue is full.
    ///
    /// # Errors
    ///
    /// Returns `pair` if every [`PairReceiver`] has been dropped, and the pair
    /// can never be consumed.
    pub fn push(&self, pair: InputPair) -> Result<(), InputPair> {
        self.0.send(pair).map_err(|e| e.into_inner())
    }

    /// Enqueue `pair` only if there is capacity to do so without blocking.
    ///
    /// # Errors
    ///
    /// Returns `pair` unmodified if the queue is full, or has no receivers.
    pub fn try_push(&self, pair: InputPair) -> Result<(), InputPair> {
        self.0.try_send(pair).map_err(|e| e.into_inner())
    }

    /// The number of pairs waiting to be consumed.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no pairs are waiting to be consumed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if the queue holds `capacity` pairs.
    pub fn is_full(&self) -> bool {
        self.0.is_full()
    }
}

/// The consumer half of a [`pair_queue()`], cloned once per worker.
#[derive(Debug, Clone)]
pub struct PairReceiver(Receiver<InputPair>);

impl PairReceiver {
    /// Dequeue the next pair, blocking while the queue is empty.
    ///
    /// Returns [`None`] once the queue is closed and fully drained.
    pub fn pop(&self) -> Option<InputPair> {
        self.0.recv().ok()
    }

    /// Return a blocking iterator yielding pairs until the queue is closed and
    /// drained.
    pub fn iter(&self) -> impl Iterator<Item = InputPair> + '_ {
        self.0.iter()
    }
}
