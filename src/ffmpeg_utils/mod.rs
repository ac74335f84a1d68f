//! FFmpeg module - provides wrappers and utilities for FFmpeg library access
//!
//! This module handles:
//! - FFmpeg initialization
//! - Native log level configuration
//! - Safe accessors for FFI-only fields

pub mod helpers;
pub mod utils;

pub use ffmpeg_next as ffmpeg;
#[allow(unused_imports)]
pub use utils::*;

/// Initialize the FFmpeg library.
///
/// Must be called exactly once at startup before any other FFmpeg-related
/// function. Returns an error if the underlying C library fails to
/// initialize its context structures.
pub fn init() -> Result<(), crate::error::RemuxError> {
    ffmpeg::init().map_err(|e| {
        crate::error::RemuxError::InitFailed(format!("ffmpeg::init() failed: {}", e))
    })?;

    tracing::debug!("FFmpeg initialized");

    Ok(())
}

/// Cap FFmpeg's native log output at warning level.
///
/// The demuxers and muxers are chatty at info level (chapter listings,
/// stream dispositions) and that output goes straight to stderr, bypassing
/// `tracing`. The stream summary we do want on stderr is emitted explicitly
/// via `av_dump_format`.
///
/// **Safety & Ordering:** must be called after `init()` and before any
/// packet processing begins, because altering the global log level is not
/// thread-safe.
pub fn install_log_filter() {
    // SAFETY: modifies global FFmpeg state; called exactly once at startup
    // after `ffmpeg::init()`, before any demuxing starts.
    unsafe {
        ffmpeg::ffi::av_log_set_level(ffmpeg::ffi::AV_LOG_WARNING as i32);
    }
}

/// Version string of the linked FFmpeg libraries.
/// Useful for debugging and reporting environment consistency.
pub fn version_info() -> String {
    helpers::ffmpeg_version_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_info_nonempty() {
        ffmpeg::init().unwrap();
        assert!(!version_info().is_empty());
    }
}
