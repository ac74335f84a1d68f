//! Safe wrappers around FFmpeg FFI calls.
//!
//! Every function in this module is `pub` and **safe** to call. All `unsafe`
//! blocks are contained here with explicit safety arguments. Callers outside
//! this module should never need to write `unsafe` for routine FFmpeg access.

use ffmpeg_next as ffmpeg;
use std::ffi::{CStr, CString};
use std::path::Path;

/// Zero out `codec_tag` on the `AVCodecParameters` attached to an output
/// stream, so the muxer picks the correct tag for the target container.
///
/// Copying parameters verbatim carries the source container's tag along,
/// which some muxers reject (e.g. MP4 tags inside Matroska).
///
/// Must be called after `out_stream.set_parameters(...)` and before
/// `write_header`.
pub fn stream_reset_codec_tag(out_stream: &mut ffmpeg::format::stream::StreamMut) {
    // SAFETY: `out_stream.as_mut_ptr()` is valid for the lifetime of the
    // stream. `codecpar` is set by `set_parameters` and is non-null.
    // Writing 0 to `codec_tag` is always safe - it is a plain u32 field.
    unsafe {
        (*(*out_stream.as_mut_ptr()).codecpar).codec_tag = 0;
    }
}

/// Name of the muxer FFmpeg would pick for this output file name, or `None`
/// when no registered muxer matches.
///
/// `ffmpeg-next`'s `format::output` performs the same guess internally but
/// folds "no format matches" and "could not open the sink" into one error;
/// probing first lets the caller tell the two apart.
pub fn guess_output_format(path: &Path) -> Option<String> {
    let filename = CString::new(path.to_string_lossy().as_bytes()).ok()?;

    // SAFETY: `av_guess_format` only reads its arguments; passing null for
    // short_name and mime_type is the documented way to match by file name.
    // The returned pointer refers to a static muxer registry entry and is
    // valid for the process lifetime.
    unsafe {
        let fmt = ffmpeg::ffi::av_guess_format(
            std::ptr::null(),
            filename.as_ptr(),
            std::ptr::null(),
        );
        if fmt.is_null() {
            return None;
        }
        let name = (*fmt).name;
        if name.is_null() {
            return None;
        }
        Some(CStr::from_ptr(name).to_string_lossy().into_owned())
    }
}

/// Version string reported by the linked libavutil.
pub fn ffmpeg_version_string() -> String {
    // SAFETY: `av_version_info` returns a pointer to a static string,
    // valid for the process lifetime and never null.
    unsafe {
        CStr::from_ptr(ffmpeg::ffi::av_version_info())
            .to_string_lossy()
            .into_owned()
    }
}
