//! Command-line options.

use clap::Parser;
use std::path::PathBuf;

/// Remux a media file into another container format without re-encoding.
///
/// Audio, video and subtitle streams are copied verbatim with their
/// timestamps rescaled into the output container's time bases; every other
/// stream kind is dropped.
#[derive(Debug, Parser)]
#[command(name = "remux", version, about)]
pub struct Opts {
    /// Input media file
    pub input: PathBuf,

    /// Output media file; the container format is inferred from its name
    pub output: PathBuf,

    /// Any value here enables fragmented output (legacy positional spelling)
    #[arg(value_name = "FRAGMENT")]
    pub fragment: Option<String>,

    /// Write fragmented output: key-frame-aligned fragments, empty initial
    /// moov box, per-fragment base offsets. Ignored by formats that do not
    /// support fragmentation.
    #[arg(long)]
    pub fragmented: bool,
}

impl Opts {
    /// Fragmented-output mode, from either the flag or the third positional.
    pub fn fragmented(&self) -> bool {
        self.fragmented || self.fragment.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_two_arguments() {
        assert!(Opts::try_parse_from(["remux"]).is_err());
        assert!(Opts::try_parse_from(["remux", "in.mp4"]).is_err());
    }

    #[test]
    fn test_plain_remux() {
        let opts = Opts::try_parse_from(["remux", "in.mp4", "out.flv"]).unwrap();
        assert_eq!(opts.input, PathBuf::from("in.mp4"));
        assert_eq!(opts.output, PathBuf::from("out.flv"));
        assert!(!opts.fragmented());
    }

    #[test]
    fn test_third_positional_toggles_fragmentation() {
        let opts = Opts::try_parse_from(["remux", "in.mp4", "out.mp4", "1"]).unwrap();
        assert!(opts.fragmented());

        // Presence alone matters, not the value.
        let opts = Opts::try_parse_from(["remux", "in.mp4", "out.mp4", "whatever"]).unwrap();
        assert!(opts.fragmented());
    }

    #[test]
    fn test_fragmented_flag() {
        let opts = Opts::try_parse_from(["remux", "in.mp4", "out.mp4", "--fragmented"]).unwrap();
        assert!(opts.fragmented());
    }
}
