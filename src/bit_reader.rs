use crate::error::*;

/// Reads fixed-width fields from a byte buffer, most significant bit first.
pub struct BitReader<'b> {
	buffer: &'b [u8],
	bits_read: usize,
	value: u32,
}

impl<'b> BitReader<'b> {
	pub fn new(buffer: &'b [u8]) -> Self {
		BitReader {
			buffer: buffer,
			bits_read: 0,
			value: 0,
		}
	}

	/// Reads `num_bits` (1 to 32) and advances the cursor. Fails without moving the cursor if the
	/// buffer holds fewer than `num_bits` remaining bits.
	pub fn read_bits(&mut self, num_bits: usize) -> Result<u32, MP3HeaderError> {
		debug_assert!(num_bits >= 1 && num_bits <= 32);
		if num_bits > self.bits_left() {
			return Err(self.error(ErrorKind::UnexpectedEndOfHeader {
				bits_read: self.bits_read,
				bits_wanted: self.bits_read + num_bits,
			}));
		}

		let mut result: u64 = 0;
		for _ in 0..num_bits {
			let byte = self.buffer[self.bits_read / 8];
			let bit = (byte >> (7 - self.bits_read % 8)) & 1;
			result = (result << 1) | bit as u64;
			self.bits_read += 1;
		}

		let result = result as u32;
		self.value = if num_bits == 32 { result } else { (self.value << num_bits) | result };
		Ok(result)
	}

	pub fn bits_read(&self) -> usize {
		self.bits_read
	}

	pub fn bits_left(&self) -> usize {
		self.buffer.len() * 8 - self.bits_read
	}

	/// Every bit read so far, packed into the low end of a word.
	pub fn value(&self) -> u32 {
		self.value
	}

	pub fn error(&self, e: ErrorKind) -> MP3HeaderError {
		MP3HeaderError {
			kind: e,
			header: self.value,
		}
	}
}
