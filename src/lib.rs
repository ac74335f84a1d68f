pub mod cli;
pub mod error;
pub mod ffmpeg_utils;
pub mod remux;
pub mod stream_map;

pub use error::{RemuxError, Result};
pub use ffmpeg_utils::version_info as ffmpeg_version_info;
pub use ffmpeg_utils::{init, install_log_filter};
pub use remux::{RemuxOptions, RemuxReport, Remuxer};
pub use stream_map::StreamMap;
