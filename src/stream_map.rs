//! Input-to-output stream index mapping.

use ffmpeg_next as ffmpeg;

/// Ordered mapping from input stream index to output stream index.
///
/// Audio, video and subtitle streams are retained and assigned sequential
/// output indices in input order; every other media kind (data, attachment,
/// unknown) is excluded. Built once after both contexts are open and
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamMap {
    mapping: Vec<Option<usize>>,
    retained: usize,
}

impl StreamMap {
    /// Build the map from the media kinds of the input streams, in index order.
    pub fn from_media_kinds<I>(kinds: I) -> Self
    where
        I: IntoIterator<Item = ffmpeg::media::Type>,
    {
        let mut retained = 0;
        let mapping = kinds
            .into_iter()
            .map(|kind| {
                if Self::is_copied_kind(kind) {
                    let out = retained;
                    retained += 1;
                    Some(out)
                } else {
                    None
                }
            })
            .collect();

        Self { mapping, retained }
    }

    /// Whether packets of this media kind are forwarded to the output.
    pub fn is_copied_kind(kind: ffmpeg::media::Type) -> bool {
        matches!(
            kind,
            ffmpeg::media::Type::Audio
                | ffmpeg::media::Type::Video
                | ffmpeg::media::Type::Subtitle
        )
    }

    /// Output stream index for an input stream index.
    ///
    /// `None` when the stream is excluded or the index is out of range
    /// (a demuxer may in principle report packets for streams it never
    /// described during probing).
    pub fn output_index(&self, input_index: usize) -> Option<usize> {
        self.mapping.get(input_index).copied().flatten()
    }

    /// Number of input streams the map was built from.
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    /// Number of streams that made it into the output.
    pub fn retained(&self) -> usize {
        self.retained
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ffmpeg::media::Type;

    #[test]
    fn test_all_streams_retained() {
        let map = StreamMap::from_media_kinds([Type::Video, Type::Audio, Type::Subtitle]);
        assert_eq!(map.len(), 3);
        assert_eq!(map.retained(), 3);
        assert_eq!(map.output_index(0), Some(0));
        assert_eq!(map.output_index(1), Some(1));
        assert_eq!(map.output_index(2), Some(2));
    }

    #[test]
    fn test_data_streams_excluded() {
        let map = StreamMap::from_media_kinds([
            Type::Video,
            Type::Data,
            Type::Audio,
            Type::Attachment,
            Type::Subtitle,
        ]);
        assert_eq!(map.len(), 5);
        assert_eq!(map.retained(), 3);
        assert_eq!(map.output_index(0), Some(0));
        assert_eq!(map.output_index(1), None);
        // Relative order of retained streams is preserved.
        assert_eq!(map.output_index(2), Some(1));
        assert_eq!(map.output_index(3), None);
        assert_eq!(map.output_index(4), Some(2));
    }

    #[test]
    fn test_out_of_range_index() {
        let map = StreamMap::from_media_kinds([Type::Video]);
        assert_eq!(map.output_index(7), None);
    }

    #[test]
    fn test_empty_input() {
        let map = StreamMap::from_media_kinds([]);
        assert!(map.is_empty());
        assert_eq!(map.retained(), 0);
        assert_eq!(map.output_index(0), None);
    }

    #[test]
    fn test_unknown_kind_excluded() {
        let map = StreamMap::from_media_kinds([Type::Unknown, Type::Audio]);
        assert_eq!(map.retained(), 1);
        assert_eq!(map.output_index(0), None);
        assert_eq!(map.output_index(1), Some(0));
    }
}
