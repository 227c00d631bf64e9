use std::time::Duration;

use log::{debug, trace};

use crate::bit_reader::BitReader;
use crate::constants::*;
use crate::error::*;

/// A decoded and validated frame header.
///
/// Only values returned by `parse_frame_header` are guaranteed consistent; `duration` returns
/// zero for a hand-built header with a zero sample rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameHeader {
    pub version: Version,
    pub layer: Layer,
    pub channel_mode: ChannelMode,
    /// Bits per second.
    pub bitrate: u32,
    /// Samples per second.
    pub sample_rate: u32,
    /// Total frame length in bytes, header included.
    pub frame_size: usize,
    /// Samples per channel carried by the frame.
    pub sample_count: u32,
    pub channel_layout: ChannelLayout,
    /// Raw protection bit: `true` means no CRC follows the header.
    pub is_protected: bool,
    pub has_padding: bool,
    pub is_private: bool,
    /// Mode extension, copyright, original and emphasis bits, unvalidated.
    pub other_flags: u8,
}

impl FrameHeader {
    pub fn bytes_consumed(&self) -> usize {
        HEADER_SIZE
    }

    pub fn channel_count(&self) -> u32 {
        match self.channel_layout {
            ChannelLayout::Mono => 1,
            ChannelLayout::Stereo => 2,
        }
    }

    /// Playback time covered by the frame.
    pub fn duration(&self) -> Duration {
        let nanos = (self.sample_count as u64 * 1_000_000_000).checked_div(self.sample_rate as u64);
        Duration::from_nanos(nanos.unwrap_or(0))
    }
}

struct Fields {
    sync: u32,
    version: u32,
    layer: u32,
    is_protected: u32,
    bitrate_index: u32,
    sample_rate_index: u32,
    has_padding: u32,
    is_private: u32,
    channel_mode: u32,
    other_flags: u32,
}

impl Fields {
    fn read(reader: &mut BitReader) -> Result<Fields, MP3HeaderError> {
        Ok(Fields {
            sync: reader.read_bits(11)?,
            version: reader.read_bits(2)?,
            layer: reader.read_bits(2)?,
            is_protected: reader.read_bits(1)?,
            bitrate_index: reader.read_bits(4)?,
            sample_rate_index: reader.read_bits(2)?,
            has_padding: reader.read_bits(1)?,
            is_private: reader.read_bits(1)?,
            channel_mode: reader.read_bits(2)?,
            other_flags: reader.read_bits(6)?,
        })
    }

    // Fields that are reserved or unsupported regardless of the other fields.
    fn check_reserved(&self) -> Result<(Version, Layer), ErrorKind> {
        if self.sync != SYNC_WORD {
            return Err(ErrorKind::InvalidSync { sync: self.sync });
        }
        let version = Version::from_bits(self.version).ok_or(ErrorKind::ReservedVersion {
            version: self.version,
        })?;
        let layer = Layer::from_bits(self.layer).ok_or(ErrorKind::ReservedLayer {
            layer: self.layer,
        })?;
        if self.bitrate_index == BITRATE_FREE {
            return Err(ErrorKind::FreeBitrate {
                bitrate_index: self.bitrate_index,
            });
        }
        if self.bitrate_index == BITRATE_BAD {
            return Err(ErrorKind::BadBitrate {
                bitrate_index: self.bitrate_index,
            });
        }
        if self.sample_rate_index == SAMPLE_RATE_RESERVED {
            return Err(ErrorKind::ReservedSampleRate {
                sample_rate_index: self.sample_rate_index,
            });
        }
        Ok((version, layer))
    }
}

fn reject(reader: &BitReader, kind: ErrorKind) -> MP3HeaderError {
    let error = reader.error(kind);
    debug!("mp3: {}", error);
    error
}

fn get_samples_per_frame(version: Version, layer: Layer) -> u32 {
    match (layer, version) {
        (Layer::Layer1, _) => 384,
        (Layer::Layer2, _) => 1152,
        (Layer::Layer3, Version::Mpeg1) => 1152,
        (Layer::Layer3, _) => 576,
    }
}

/// Frame length in bytes. Layer I counts 4-byte slots, layers II and III single bytes.
fn get_frame_size(
    layer: Layer,
    bitrate: u32,
    sample_rate: u32,
    samples: u32,
    padding: bool,
) -> usize {
    let (size, slot) = match layer {
        Layer::Layer1 => (4 * (12 * bitrate / sample_rate), 4),
        _ => ((samples / 8) * bitrate / sample_rate, 1),
    };
    let padding = if padding { slot } else { 0 };
    (size + padding) as usize
}

pub fn parse(data: &[u8]) -> Result<Option<FrameHeader>, MP3HeaderError> {
    if data.len() < HEADER_SIZE {
        return Ok(None);
    }

    let mut reader = BitReader::new(data);
    let fields = Fields::read(&mut reader)?;

    trace!(
        "mp3: header data: sync 0x{:x} version 0x{:x} layer 0x{:x} bitrate_index 0x{:x} sample_rate_index 0x{:x} channel_mode 0x{:x}",
        fields.sync,
        fields.version,
        fields.layer,
        fields.bitrate_index,
        fields.sample_rate_index,
        fields.channel_mode
    );

    let (version, layer) = fields
        .check_reserved()
        .map_err(|kind| reject(&reader, kind))?;

    let bitrate_index = fields.bitrate_index as usize;
    let channel_mode = fields.channel_mode as usize;
    if layer == Layer::Layer2 && IS_ALLOWED[bitrate_index][channel_mode] {
        return Err(reject(
            &reader,
            ErrorKind::ForbiddenLayer2Combination {
                bitrate_index: fields.bitrate_index,
                channel_mode: fields.channel_mode,
            },
        ));
    }

    let column = VERSION_LAYER_COLUMNS[fields.version as usize][fields.layer as usize];
    debug_assert_ne!(column, RESERVED_COLUMN, "reserved version or layer reached bitrate lookup");
    let bitrate = BIT_RATES[bitrate_index][column];
    if bitrate == 0 {
        return Err(reject(
            &reader,
            ErrorKind::InvalidBitrate {
                version: fields.version,
                layer: fields.layer,
                bitrate_index: fields.bitrate_index,
            },
        ));
    }
    let bitrate = bitrate * 1000;

    let sample_rate = SAMPLING_RATES[fields.sample_rate_index as usize][fields.version as usize];
    if sample_rate == 0 {
        return Err(reject(
            &reader,
            ErrorKind::InvalidSampleRate {
                version: fields.version,
                sample_rate_index: fields.sample_rate_index,
            },
        ));
    }

    let sample_count = get_samples_per_frame(version, layer);
    let has_padding = fields.has_padding != 0;
    let frame_size = get_frame_size(layer, bitrate, sample_rate, sample_count, has_padding);
    let channel_mode = ChannelMode::from_bits(fields.channel_mode);

    trace!(
        "mp3: bitrate {} sample_rate {} frame_size {}",
        bitrate,
        sample_rate,
        frame_size
    );

    Ok(Some(FrameHeader {
        version,
        layer,
        channel_mode,
        bitrate,
        sample_rate,
        frame_size,
        sample_count,
        channel_layout: channel_mode.layout(),
        is_protected: fields.is_protected != 0,
        has_padding,
        is_private: fields.is_private != 0,
        other_flags: fields.other_flags as u8,
    }))
}
