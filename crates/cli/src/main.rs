use anyhow::Context;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use weaver::{pipeline, Profile, Verdict};

/// Exit status telling the harness to leave the file as-is.
const EXIT_SKIP: i32 = 2;
/// Exit status for a compiler-failure test discovered mid-file.
const EXIT_FAIL_REF: i32 = 3;

#[derive(Parser)]
#[command(name = "fiberize")]
#[command(about = "Rewrites a Java test's main to run on a virtual thread", long_about = None)]
struct Cli {
    /// Java source file to transform. The rewritten text goes to stdout;
    /// a non-zero exit status means stdout must be discarded.
    file: PathBuf,

    /// Rewrite files containing `@compile/fail/ref=` instead of refusing them.
    #[arg(long)]
    keep_fail_ref: bool,

    /// Log skip reasons and rewrite details to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr only; stdout is reserved for the rewrite.
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let profile = Profile::new(!cli.keep_fail_ref)?;

    match pipeline::run(&cli.file, &profile) {
        Ok(Verdict::Rewritten(text)) => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            out.write_all(text.as_bytes())?;
            out.flush()?;
            Ok(())
        }
        Ok(Verdict::Skipped(reason)) => {
            tracing::info!(file = %cli.file.display(), ?reason, "skipped");
            std::process::exit(EXIT_SKIP);
        }
        Ok(Verdict::FailMarker) => {
            tracing::info!(file = %cli.file.display(), "compiler-failure test, not rewritten");
            std::process::exit(EXIT_FAIL_REF);
        }
        Err(e) => Err(e).with_context(|| format!("failed to process {}", cli.file.display())),
    }
}
