//! FFmpeg utility functions

use ffmpeg_next as ffmpeg;

/// Get the codec name for a codec ID
pub fn codec_name(codec_id: ffmpeg::codec::Id) -> &'static str {
    codec_id.name()
}

/// Get the media type name
pub fn media_type_name(media_type: ffmpeg::media::Type) -> &'static str {
    match media_type {
        ffmpeg::media::Type::Video => "video",
        ffmpeg::media::Type::Audio => "audio",
        ffmpeg::media::Type::Subtitle => "subtitle",
        ffmpeg::media::Type::Data => "data",
        ffmpeg::media::Type::Attachment => "attachment",
        _ => "unknown",
    }
}

/// Extract language from stream metadata
pub fn get_stream_language(stream: &ffmpeg::Stream) -> Option<String> {
    stream.metadata().get("language").map(|s| s.to_string())
}

/// Log one line of per-stream information
pub fn log_stream_info(stream: &ffmpeg::Stream, index: usize) {
    let codec_id = stream.parameters().id();
    let media_type = stream.parameters().medium();

    match get_stream_language(stream) {
        Some(lang) => tracing::info!(
            "Stream {}: type={}, codec={}, language={}",
            index,
            media_type_name(media_type),
            codec_name(codec_id),
            lang
        ),
        None => tracing::info!(
            "Stream {}: type={}, codec={}",
            index,
            media_type_name(media_type),
            codec_name(codec_id)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type_name() {
        assert_eq!(media_type_name(ffmpeg::media::Type::Video), "video");
        assert_eq!(media_type_name(ffmpeg::media::Type::Audio), "audio");
        assert_eq!(media_type_name(ffmpeg::media::Type::Subtitle), "subtitle");
        assert_eq!(media_type_name(ffmpeg::media::Type::Data), "data");
        assert_eq!(media_type_name(ffmpeg::media::Type::Unknown), "unknown");
    }

    #[test]
    fn test_codec_name() {
        assert_eq!(codec_name(ffmpeg::codec::Id::H264), "h264");
        assert_eq!(codec_name(ffmpeg::codec::Id::AAC), "aac");
    }
}
