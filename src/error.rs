use thiserror::Error;

/// Main error type for the remuxer.
///
/// Every variant is terminal for the run: the tool favors fail-fast over
/// partial-output recovery.
#[derive(Error, Debug)]
pub enum RemuxError {
    /// Failure during global FFmpeg initialization
    #[error("FFmpeg initialization failed: {0}")]
    InitFailed(String),

    /// Failure opening or parsing the input container
    #[error("Failed to open input file: {0}")]
    OpenInput(String),

    /// Stream parameters could not be determined from the input
    #[error("Failed to find stream info: {0}")]
    Probe(String),

    /// No muxer matches the output file name
    #[error("Could not infer output format from file name: {0}")]
    OutputFormatInference(String),

    /// Failure creating the output context or opening its file sink
    #[error("Failed to open output file: {0}")]
    OutputOpen(String),

    /// Failure configuring an output stream or copying codec parameters
    #[error("Stream configuration failed: {0}")]
    StreamConfig(String),

    /// Failure writing the container header
    #[error("Failed to write header: {0}")]
    WriteHeader(String),

    /// Failure reading a packet from the input (end-of-input is not an error)
    #[error("Failed to read frame: {0}")]
    ReadFrame(String),

    /// Failure writing a media packet to the output container
    #[error("Failed to write packet: {0}")]
    WritePacket(String),

    /// Failure writing the container trailer
    #[error("Failed to write trailer: {0}")]
    WriteTrailer(String),

    /// A standard I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, RemuxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RemuxError::OpenInput("no such file".to_string());
        assert_eq!(err.to_string(), "Failed to open input file: no such file");

        let err = RemuxError::OutputFormatInference("out.bogus".to_string());
        assert_eq!(
            err.to_string(),
            "Could not infer output format from file name: out.bogus"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: RemuxError = io.into();
        assert!(matches!(err, RemuxError::Io(_)));
    }
}
