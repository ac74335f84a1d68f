//! The remux driver: a single pass copying packets between two containers.

use crate::error::{RemuxError, Result};
use crate::ffmpeg_utils::{helpers, utils};
use crate::stream_map::StreamMap;
use ffmpeg_next as ffmpeg;
use std::path::{Path, PathBuf};

/// Options controlling the output container layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct RemuxOptions {
    /// Write key-frame-aligned fragments with an empty initial moov box and
    /// per-fragment base offsets. Advisory: only fragment-capable muxers
    /// (the mp4/mov family) honor the flags, others ignore them.
    pub fragmented: bool,
}

/// Counters from one completed copy loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemuxReport {
    /// Packets rescaled and forwarded to the output
    pub packets_written: u64,
    /// Packets belonging to excluded streams
    pub packets_dropped: u64,
}

/// Single-pass remuxer.
///
/// Exclusively owns both format contexts for its entire lifetime. Dropping
/// the value closes the input, flushes and closes the output file sink, and
/// frees both contexts in reverse acquisition order, on every exit path.
pub struct Remuxer {
    input: ffmpeg::format::context::Input,
    output: ffmpeg::format::context::Output,
    map: StreamMap,
    options: RemuxOptions,
    output_path: PathBuf,
}

impl Remuxer {
    /// Open both containers and copy the retained stream definitions.
    ///
    /// The output context is only created once the input has opened
    /// successfully, so a bad input path never produces an output file.
    pub fn open(input_path: &Path, output_path: &Path, options: RemuxOptions) -> Result<Self> {
        let input = ffmpeg::format::input(&input_path)
            .map_err(|e| RemuxError::OpenInput(format!("{}: {}", input_path.display(), e)))?;

        if input.streams().count() == 0 {
            return Err(RemuxError::Probe(format!(
                "{}: no streams found",
                input_path.display()
            )));
        }

        // Classify "no muxer matches this name" before creating the output
        // context, which would fold it into the same error as a failed open.
        let format_name = helpers::guess_output_format(output_path).ok_or_else(|| {
            RemuxError::OutputFormatInference(output_path.display().to_string())
        })?;
        tracing::debug!("Inferred output format: {}", format_name);

        let mut output = ffmpeg::format::output(&output_path)
            .map_err(|e| RemuxError::OutputOpen(format!("{}: {}", output_path.display(), e)))?;

        let map = StreamMap::from_media_kinds(input.streams().map(|s| s.parameters().medium()));

        for stream in input.streams() {
            if map.output_index(stream.index()).is_none() {
                tracing::debug!(
                    "Stream {}: excluded ({})",
                    stream.index(),
                    utils::media_type_name(stream.parameters().medium())
                );
                continue;
            }

            let mut out_stream = output
                .add_stream(ffmpeg::encoder::find(ffmpeg::codec::Id::None))
                .map_err(|e| {
                    RemuxError::StreamConfig(format!("failed to add output stream: {}", e))
                })?;
            out_stream.set_parameters(stream.parameters());
            // Reset codec_tag so the target muxer picks its own tag.
            helpers::stream_reset_codec_tag(&mut out_stream);
        }

        for stream in input.streams() {
            utils::log_stream_info(&stream, stream.index());
        }
        let url = output_path.to_string_lossy();
        ffmpeg::format::context::output::dump(&output, 0, Some(&url));

        Ok(Self {
            input,
            output,
            map,
            options,
            output_path: output_path.to_path_buf(),
        })
    }

    /// The stream index map built during [`open`](Self::open).
    pub fn stream_map(&self) -> &StreamMap {
        &self.map
    }

    /// Write header, copy all packets, write trailer.
    ///
    /// The trailer is attempted even when the copy loop fails, finalizing
    /// whatever was written so far; the loop's error still wins.
    pub fn run(mut self) -> Result<RemuxReport> {
        self.write_header()?;

        let copied = self.copy_packets();
        let trailer = self.output.write_trailer();

        match copied {
            Ok(report) => {
                trailer.map_err(|e| RemuxError::WriteTrailer(e.to_string()))?;
                tracing::info!(
                    "Remux complete: {} packet(s) written to {}, {} dropped",
                    report.packets_written,
                    self.output_path.display(),
                    report.packets_dropped
                );
                Ok(report)
            }
            Err(e) => {
                if let Err(te) = trailer {
                    tracing::debug!("write_trailer after failed copy (non-fatal): {}", te);
                }
                Err(e)
            }
        }
    }

    fn write_header(&mut self) -> Result<()> {
        let result = if self.options.fragmented {
            let mut opts = ffmpeg::Dictionary::new();
            opts.set("movflags", "frag_keyframe+empty_moov+default_base_moof");
            self.output.write_header_with(opts).map(|_| ())
        } else {
            self.output.write_header()
        };

        result.map_err(|e| RemuxError::WriteHeader(e.to_string()))
    }

    fn copy_packets(&mut self) -> Result<RemuxReport> {
        let mut report = RemuxReport::default();
        let mut packet = ffmpeg::Packet::empty();

        loop {
            match packet.read(&mut self.input) {
                Ok(()) => {}
                // End of input is not an error.
                Err(ffmpeg::Error::Eof) => break,
                Err(e) => return Err(RemuxError::ReadFrame(e.to_string())),
            }

            let in_index = packet.stream();
            let out_index = match self.map.output_index(in_index) {
                Some(index) => index,
                None => {
                    report.packets_dropped += 1;
                    continue;
                }
            };

            let in_time_base = self
                .input
                .stream(in_index)
                .map(|s| s.time_base())
                .ok_or_else(|| {
                    RemuxError::ReadFrame(format!("packet for unknown stream {}", in_index))
                })?;
            let out_time_base = self
                .output
                .stream(out_index)
                .map(|s| s.time_base())
                .ok_or_else(|| {
                    RemuxError::WritePacket(format!("no output stream {}", out_index))
                })?;

            packet.set_stream(out_index);
            // av_packet_rescale_ts: pts/dts round to nearest with min/max
            // clamping, duration with plain av_rescale_q.
            packet.rescale_ts(in_time_base, out_time_base);
            // The byte offset from the source container is meaningless in
            // the new one.
            packet.set_position(-1);

            packet
                .write_interleaved(&mut self.output)
                .map_err(|e| RemuxError::WritePacket(e.to_string()))?;
            report.packets_written += 1;
        }

        Ok(report)
    }
}
