//! Lossless container remuxer.
//!
//! Copies the audio, video and subtitle streams of one container file into
//! another container format without re-encoding, rescaling per-stream
//! timestamps on the way. All container parsing, muxing and rescaling
//! arithmetic is delegated to FFmpeg via `ffmpeg-next`.

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use remux::cli::Opts;
use remux::{RemuxOptions, RemuxReport, Remuxer, Result};

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
const APP_NAME: &str = "remux";

fn main() -> ExitCode {
    init_logging();

    // Missing required arguments print usage and exit nonzero here.
    let opts = Opts::parse();

    match run(&opts) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(opts: &Opts) -> Result<RemuxReport> {
    remux::init()?;
    remux::install_log_filter();
    tracing::debug!(
        "{} v{}, FFmpeg {}",
        APP_NAME,
        VERSION,
        remux::ffmpeg_version_info()
    );

    let remuxer = Remuxer::open(
        &opts.input,
        &opts.output,
        RemuxOptions {
            fragmented: opts.fragmented(),
        },
    )?;
    remuxer.run()
}

/// All diagnostics go to stderr; the output file is the only thing the tool
/// writes anywhere else.
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "remux=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
