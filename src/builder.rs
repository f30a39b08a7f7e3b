//! A configurable [`Driver`] constructor.
//!
//! [`Driver`]: crate::driver::Driver

use crate::{
    digest::siphash::SipHasher,
    driver::{DEFAULT_ITERATIONS, DEFAULT_PROGRESS_INTERVAL},
    generator::ByteGenerator,
    queue::DEFAULT_QUEUE_CAPACITY,
    report::StdoutReporter,
    worker::DEFAULT_WORKERS,
};

/// A [`Driver`] builder to initialise collision search runs with custom
/// parameters.
///
/// The default configuration generates random printable strings, hashes them
/// with SipHash-2-4 under [`Key::FIXED`], and writes output to stdout using 4
/// workers and a queue of 100 pairs for `2^32 + 1` iterations.
///
/// [`Driver`]: crate::driver::Driver
/// [`Key::FIXED`]: crate::digest::Key::FIXED
#[derive(Debug, Clone)]
pub struct Builder<G, H, R> {
    pub(crate) generator: G,
    pub(crate) hasher: H,
    pub(crate) reporter: R,

    pub(crate) workers: usize,
    pub(crate) queue_capacity: usize,
    pub(crate) iterations: u64,
    pub(crate) progress_interval: u64,
    pub(crate) verbose: bool,
}

impl Default for Builder<ByteGenerator, SipHasher, StdoutReporter> {
    fn default() -> Self {
        Self {
            generator: Default::default(),
            hasher: Default::default(),
            reporter: StdoutReporter::new(),
            workers: DEFAULT_WORKERS,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            iterations: DEFAULT_ITERATIONS,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            verbose: false,
        }
    }
}

impl<G, H, R> Builder<G, H, R> {
    /// Use the provided [`PairGenerator`] to produce candidate inputs.
    ///
    /// [`PairGenerator`]: crate::generator::PairGenerator
    pub fn with_generator<T>(self, generator: T) -> Builder<T, H, R> {
        Builder {
            generator,
            hasher: self.hasher,
            reporter: self.reporter,
            workers: self.workers,
            queue_capacity: self.queue_capacity,
            iterations: self.iterations,
            progress_interval: self.progress_interval,
            verbose: self.verbose,
        }
    }

    /// Use the provided [`Hasher`] to compute input digests.
    ///
    /// [`Hasher`]: crate::digest::Hasher
    pub fn with_hasher<T>(self, hasher: T) -> Builder<G, T, R> {
        Builder {
            generator: self.generator,
            hasher,
            reporter: self.reporter,
            workers: self.workers,
            queue_capacity: self.queue_capacity,
            iterations: self.iterations,
            progress_interval: self.progress_interval,
            verbose: self.verbose,
        }
    }

    /// Send run events to the provided [`Reporter`].
    ///
    /// [`Reporter`]: crate::report::Reporter
    pub fn with_reporter<T>(self, reporter: T) -> Builder<G, H, T> {
        Builder {
            generator: self.generator,
            hasher: self.hasher,
            reporter,
            workers: self.workers,
            queue_capacity: self.queue_capacity,
            iterations: self.iterations,
            progress_interval: self.progress_interval,
            verbose: self.verbose,
        }
    }

    /// Set the number of collision worker threads (minimum 1).
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Set the maximum number of pairs queued for the workers (minimum 1).
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity.max(1);
        self
    }

    /// Set the number of pairs to generate before the run completes.
    pub fn with_iterations(mut self, iterations: u64) -> Self {
        self.iterations = iterations;
        self
    }

    /// Report progress every `interval` pairs (minimum 1).
    pub fn with_progress_interval(mut self, interval: u64) -> Self {
        self.progress_interval = interval.max(1);
        self
    }

    /// Report every generated pair, at a considerable throughput cost.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

// build() is in driver.rs
