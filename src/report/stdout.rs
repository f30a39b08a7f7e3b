use std::{
    io::{Stdout, Write},
    sync::{
        atomic::{AtomicBool, Ordering},
        Mutex, PoisonError,
    },
};

use crate::{generator::InputPair, worker::Collision};

use super::Reporter;

/// A [`Reporter`] writing human-readable lines to stdout (or any other
/// [`Write`] implementation).
///
/// Collisions are written as:
///
/// ```text
/// Equal hash: "<input A>" == "<input B>"
/// ```
///
/// Each event is written as a single line while holding the writer lock, so
/// lines from concurrent workers never interleave. Write errors (such as a
/// closed pipe) do not stop the run; the first failure is logged at debug
/// level and later failures are dropped silently.
#[derive(Debug)]
pub struct StdoutReporter<W = Stdout> {
    out: Mutex<W>,
    write_failed: AtomicBool,
}

impl StdoutReporter {
    /// Construct a [`StdoutReporter`] writing to the process stdout.
    pub fn new() -> Self {
        Self::with_writer(std::io::stdout())
    }
}

impl Default for StdoutReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> StdoutReporter<W>
where
    W: Write,
{
    /// Construct a [`StdoutReporter`] writing lines to `out`.
    pub fn with_writer(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            write_failed: AtomicBool::new(false),
        }
    }

    /// Consume this reporter, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }

    #[cfg_attr(not(any(test, feature = "tracing")), allow(unused_variables))]
    fn line(&self, args: std::fmt::Arguments<'_>) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = writeln!(out, "{args}") {
            if !self.write_failed.swap(true, Ordering::Relaxed) {
                debug!(error = %e, "failed to write report output");
            }
        }
    }
}

impl<W> Reporter for StdoutReporter<W>
where
    W: Write + Send,
{
    fn collision(&self, collision: &Collision) {
        self.line(format_args!("{collision}"));
    }

    fn candidate(&self, pair: &InputPair) {
        self.line(format_args!("{pair}"));
    }

    fn progress(&self, iterations: u64) {
        self.line(format_args!("{iterations}"));
    }

    fn finished(&self, _iterations: u64) {
        self.line(format_args!("Done!"));
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use crate::digest::Digest;

    use super::*;

    /// A writer that fails every write, counting the attempts.
    #[derive(Debug, Default)]
    struct BrokenPipe {
        attempts: usize,
    }

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            self.attempts += 1;
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_output_lines() {
        let r = StdoutReporter::with_writer(Vec::new());

        r.progress(0);
        r.candidate(&InputPair::new(b"bananas".to_vec(), b"platanos".to_vec()));
        r.collision(&Collision::new(b"bananas".to_vec(), b"a\tb".to_vec(), Digest::new(42)));
        r.progress(10_000_000);
        r.finished(10_000_001);

        let got = String::from_utf8(r.into_inner()).unwrap();
        insta::assert_snapshot!(got, @r#"
        0
        bananas platanos
        Equal hash: "bananas" == "a\tb"
        10000000
        Done!
        "#);
    }

    #[test]
    fn test_write_failure_does_not_panic() {
        enable_logging!();

        let r = StdoutReporter::with_writer(BrokenPipe::default());

        r.progress(0);
        assert!(r.write_failed.load(Ordering::Relaxed));

        r.finished(1);
        assert!(r.write_failed.load(Ordering::Relaxed));

        // Every event is still attempted.
        assert_eq!(r.into_inner().attempts, 2);
    }

    #[test]
    fn test_default_is_stdout() {
        let r: StdoutReporter = StdoutReporter::default();
        assert!(!r.write_failed.load(Ordering::Relaxed));
    }
}
