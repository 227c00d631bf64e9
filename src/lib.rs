extern crate failure;
extern crate log;

mod bit_reader;
mod constants;
mod error;
mod header;

pub use crate::bit_reader::BitReader;
pub use crate::constants::{ChannelLayout, ChannelMode, Layer, Version, HEADER_SIZE};
pub use crate::error::{ErrorKind, MP3HeaderError};
pub use crate::header::FrameHeader;

/// Decodes the MPEG audio frame header at the start of `data`.
///
/// Returns `Ok(None)` when fewer than `HEADER_SIZE` bytes are available: nothing is consumed and
/// the call should be retried at the same offset once more data has arrived. Returns an error
/// when the bytes do not form a valid header, in which case the scan should resume one byte
/// further.
///
/// # Examples
///
/// ```
/// use mp3_header::{parse_frame_header, ChannelLayout};
///
/// // MPEG-1 Layer III, 128 kbps, 44.1 kHz, stereo.
/// let header = parse_frame_header(&[0xFF, 0xFB, 0x90, 0x00]).unwrap().unwrap();
/// assert_eq!(header.bytes_consumed(), 4);
/// assert_eq!(header.frame_size, 417);
/// assert_eq!(header.sample_rate, 44100);
/// assert_eq!(header.channel_layout, ChannelLayout::Stereo);
/// assert_eq!(header.sample_count, 1152);
///
/// assert!(parse_frame_header(&[0xFF, 0xFB]).unwrap().is_none());
/// assert!(parse_frame_header(&[0x00, 0x00, 0x00, 0x00]).is_err());
/// ```
pub fn parse_frame_header(data: &[u8]) -> Result<Option<FrameHeader>, MP3HeaderError> {
    header::parse(data)
}
