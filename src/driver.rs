//! The collision search producer loop.

use std::sync::Arc;

use crate::{
    builder::Builder,
    digest::Hasher,
    error::{Error, Result},
    generator::PairGenerator,
    queue::pair_queue,
    report::Reporter,
    worker::WorkerPool,
};

/// The default number of pairs generated by a run (`2^32 + 1`).
pub const DEFAULT_ITERATIONS: u64 = (1 << 32) + 1;

/// The default number of pairs between progress reports.
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 10_000_000;

/// The outcome of a completed [`Driver::run()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// The number of pairs generated and enqueued.
    pub iterations: u64,
    /// The number of pairs hashed & compared by the workers.
    pub pairs_checked: u64,
    /// The number of collisions reported.
    pub collisions: u64,
}

/// Owns the bounded pair queue and the worker pool, and runs the generator
/// until the configured number of iterations is reached.
///
/// There is no way to stop a run early - the run ends only once the iteration
/// bound is reached (or the process is terminated).
///
/// Construct a [`Driver`] with a [`Builder`]:
///
/// ```no_run
/// use siphash_collider::builder::Builder;
///
/// let summary = Builder::default()
///     .with_iterations(1_000_000)
///     .build()
///     .run()
///     .expect("failed to start workers");
///
/// println!("found {} collisions", summary.collisions);
/// ```
#[derive(Debug)]
pub struct Driver<G, H, R> {
    config: Builder<G, H, R>,
}

impl<G, H, R> Builder<G, H, R>
where
    G: PairGenerator,
    H: Hasher + Clone + 'static,
    R: Reporter + 'static,
{
    /// Construct a [`Driver`] using the configuration of this [`Builder`].
    pub fn build(self) -> Driver<G, H, R> {
        Driver { config: self }
    }
}

impl<G, H, R> Driver<G, H, R>
where
    G: PairGenerator,
    H: Hasher + Clone + 'static,
    R: Reporter + 'static,
{
    /// Run the collision search to completion.
    ///
    /// Progress is reported before generating each pair whose index is a
    /// multiple of the progress interval (including the first). Enqueueing
    /// blocks while the queue is full. Once the iteration bound is reached the
    /// queue is closed, the workers drain any in-flight pairs, and
    /// [`Reporter::finished()`] is called.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Spawn`] if a worker thread cannot be started.
    pub fn run(self) -> Result<RunSummary> {
        let Builder {
            mut generator,
            hasher,
            reporter,
            workers,
            queue_capacity,
            iterations,
            progress_interval,
            verbose,
        } = self.config;

        let reporter = Arc::new(reporter);
        let (tx, rx) = pair_queue(queue_capacity);
        let pool = WorkerPool::spawn(workers, rx, hasher, Arc::clone(&reporter), verbose)
            .map_err(Error::Spawn)?;

        info!(
            iterations,
            workers = pool.len(),
            queue_capacity,
            "starting collision search"
        );

        let mut n = 0;
        while n < iterations {
            if n % progress_interval == 0 {
                debug!(iterations = n, "progress");
                reporter.progress(n);
            }

            // Pushing only fails if every worker has exited, which happens
            // only if they panicked - joining the pool below resumes the
            // panic.
            if tx.push(generator.pair()).is_err() {
                break;
            }
            n += 1;
        }

        // Close the queue, and wait for the workers to drain it.
        drop(tx);
        let stats = pool.join();

        info!(
            iterations = n,
            pairs_checked = stats.pairs,
            collisions = stats.collisions,
            "collision search complete"
        );
        reporter.finished(n);

        Ok(RunSummary {
            iterations: n,
            pairs_checked: stats.pairs,
            collisions: stats.collisions,
        })
    }
}
