use core::fmt;
use failure::Fail;

#[derive(Debug, PartialEq, Eq)]
pub struct MP3HeaderError {
	pub kind: ErrorKind,
	pub header: u32,
}

impl MP3HeaderError {
	/// A rejected header never consumes input; the caller resumes one byte further.
	pub fn bytes_consumed(&self) -> usize {
		0
	}
}

impl fmt::Display for MP3HeaderError {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{} in header 0x{:08X}", self.kind, self.header)
	}
}

impl Fail for MP3HeaderError {
	// Delegate `cause` to ErrorKind
	fn cause(&self) -> Option<&dyn Fail> {
		self.kind.cause()
	}
}

#[derive(Debug, Fail, PartialEq, Eq)]
pub enum ErrorKind {
	#[fail(display = "Header ended after {} of {} bits", bits_read, bits_wanted)]
	UnexpectedEndOfHeader { bits_read: usize, bits_wanted: usize },
	#[fail(display = "Invalid sync: 0x{:X}", sync)]
	InvalidSync { sync: u32 },
	#[fail(display = "Reserved version: 0x{:X}", version)]
	ReservedVersion { version: u32 },
	#[fail(display = "Reserved layer: 0x{:X}", layer)]
	ReservedLayer { layer: u32 },
	#[fail(display = "Free bitrate is not supported: bitrate_index 0x{:X}", bitrate_index)]
	FreeBitrate { bitrate_index: u32 },
	#[fail(display = "Bad bitrate: bitrate_index 0x{:X}", bitrate_index)]
	BadBitrate { bitrate_index: u32 },
	#[fail(display = "Reserved sample rate: sample_rate_index 0x{:X}", sample_rate_index)]
	ReservedSampleRate { sample_rate_index: u32 },
	#[fail(
		display = "Invalid (bitrate_index, channel_mode) combination: bitrate_index 0x{:X} channel_mode 0x{:X}",
		bitrate_index, channel_mode
	)]
	ForbiddenLayer2Combination { bitrate_index: u32, channel_mode: u32 },
	#[fail(
		display = "Invalid bitrate: version 0x{:X} layer 0x{:X} bitrate_index 0x{:X}",
		version, layer, bitrate_index
	)]
	InvalidBitrate { version: u32, layer: u32, bitrate_index: u32 },
	#[fail(
		display = "Invalid sample rate: version 0x{:X} sample_rate_index 0x{:X}",
		version, sample_rate_index
	)]
	InvalidSampleRate { version: u32, sample_rate_index: u32 },
}
