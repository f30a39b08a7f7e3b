use std::process::ExitCode;

use clap::Parser;
use siphash_collider::{
    cli::Args,
    digest::{siphash::SipHasher, Key},
    generator::{AnyGenerator, Mode},
    report::StdoutReporter,
    Builder, Result,
};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let mode = args.mode()?;

    match &mode {
        Mode::RandomBytes => tracing::info!("generating random printable strings"),
        Mode::Phrases { corpus, max_words } => tracing::info!(
            n_words = corpus.len(),
            max_words = max_words.get(),
            "generating random phrases"
        ),
    }

    let summary = Builder::default()
        .with_generator(AnyGenerator::from(mode))
        .with_hasher(SipHasher::new(Key::FIXED))
        .with_reporter(StdoutReporter::new())
        .with_verbose(args.log_pairs)
        .build()
        .run()?;

    tracing::info!(collisions = summary.collisions, "done");

    Ok(())
}
