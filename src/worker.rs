//! A fixed-size pool of threads hashing and comparing [`InputPair`] instances.

use std::{
    fmt::Display,
    iter::Sum,
    ops::Add,
    sync::Arc,
    thread::{self, JoinHandle},
};

use crate::{
    digest::{Digest, Hasher},
    generator::InputPair,
    queue::PairReceiver,
    report::Reporter,
};

/// The default number of collision workers.
pub const DEFAULT_WORKERS: usize = 4;

/// Two distinct inputs that hash to the same [`Digest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    a: Vec<u8>,
    b: Vec<u8>,
    digest: Digest,
}

impl Collision {
    /// Construct a new [`Collision`] of `a` and `b`, which both hash to
    /// `digest`.
    pub fn new(a: Vec<u8>, b: Vec<u8>, digest: Digest) -> Self {
        Self { a, b, digest }
    }

    /// The first colliding input.
    pub fn a(&self) -> &[u8] {
        &self.a
    }

    /// The second colliding input.
    pub fn b(&self) -> &[u8] {
        &self.b
    }

    /// The digest shared by both inputs.
    pub fn digest(&self) -> Digest {
        self.digest
    }
}

impl Display for Collision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Equal hash: {:?} == {:?}",
            String::from_utf8_lossy(&self.a),
            String::from_utf8_lossy(&self.b)
        )
    }
}

/// Hash both sides of `pair`, returning a [`Collision`] if the digests match
/// and the inputs differ.
///
/// Identical inputs always produce equal digests, and are never reported.
pub fn check_pair<H>(hasher: &H, pair: InputPair) -> Option<Collision>
where
    H: Hasher + ?Sized,
{
    let digest = hasher.hash(pair.a());
    if digest != hasher.hash(pair.b()) {
        return None;
    }

    if pair.is_identical() {
        trace!(%digest, "ignoring identical inputs");
        return None;
    }

    let (a, b) = pair.into_inner();
    Some(Collision::new(a, b, digest))
}

/// Counters describing the work performed by one or more workers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WorkerStats {
    /// The number of pairs hashed & compared.
    pub pairs: u64,
    /// The number of collisions reported.
    pub collisions: u64,
}

impl Add for WorkerStats {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            pairs: self.pairs + rhs.pairs,
            collisions: self.collisions + rhs.collisions,
        }
    }
}

impl Sum for WorkerStats {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// A fixed set of worker threads draining a [`PairReceiver`].
///
/// Each worker consumes pairs in the order it receives them, but no ordering
/// exists across workers - collisions may be reported out of enqueue order.
///
/// Workers run until the queue is closed (all senders dropped) and drained.
#[derive(Debug)]
pub struct WorkerPool {
    handles: Vec<JoinHandle<WorkerStats>>,
}

impl WorkerPool {
    /// Spawn `n` workers (at least 1) consuming from `queue`.
    ///
    /// Each worker holds a copy of `hasher`, and reports collisions to the
    /// shared `reporter`. If `verbose` is true, every received pair is passed
    /// to [`Reporter::candidate()`] before hashing - this slows the search
    /// considerably, and is intended for debugging only.
    ///
    /// # Errors
    ///
    /// Returns an error if the OS fails to spawn a thread. Any workers already
    /// started exit once `queue` is closed.
    pub fn spawn<H, R>(
        n: usize,
        queue: PairReceiver,
        hasher: H,
        reporter: Arc<R>,
        verbose: bool,
    ) -> std::io::Result<Self>
    where
        H: Hasher + Clone + 'static,
        R: Reporter + ?Sized + 'static,
    {
        let handles = (0..n.max(1))
            .map(|id| {
                let queue = queue.clone();
                let hasher = hasher.clone();
                let reporter = Arc::clone(&reporter);

                thread::Builder::new()
                    .name(format!("collide-worker-{id}"))
                    .spawn(move || run(id, &queue, &hasher, &*reporter, verbose))
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            n_workers = handles.len(),
            verbose,
            "started collision workers"
        );

        Ok(Self { handles })
    }

    /// The number of workers in this pool.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Always false - a pool has at least one worker.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Wait for all workers to exit, returning their combined [`WorkerStats`].
    ///
    /// Workers exit only once the queue is closed and drained.
    ///
    /// # Panics
    ///
    /// Resumes the panic of any worker that panicked.
    pub fn join(self) -> WorkerStats {
        self.handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
            .sum()
    }
}

#[cfg_attr(not(any(test, feature = "tracing")), allow(unused_variables))]
fn run<H, R>(
    id: usize,
    queue: &PairReceiver,
    hasher: &H,
    reporter: &R,
    verbose: bool,
) -> WorkerStats
where
    H: Hasher,
    R: Reporter + ?Sized,
{
    let mut stats = WorkerStats::default();

    for pair in queue.iter() {
        if verbose {
            reporter.candidate(&pair);
        }

        stats.pairs += 1;

        if let Some(collision) = check_pair(hasher, pair) {
            stats.collisions += 1;
            debug!(worker = id, digest = %collision.digest(), "found collision");
            reporter.collision(&collision);
        }
    }

    debug!(
        worker = id,
        pairs = stats.pairs,
        collisions = stats.collisions,
        "worker stopped"
    );

    stats
}
