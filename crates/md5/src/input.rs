// Copyright 2025 Digestkit Developers

//! Message input accepted by the digest contexts.

use digestkit_utils::bail;

use crate::error::{Error, Result};

const SCRATCH_LEN: usize = 256;

/// A chunk of message data.
///
/// Text is hashed as its UTF-8 encoding. `Utf16` carries raw UTF-16 code units, which are
/// encoded with [`utf16_to_utf8`] before hashing. `Integers` is a sequence of byte values held
/// in a wider integer type; every element must lie in `0..=255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input<'a> {
	Text(&'a str),
	Utf16(&'a [u16]),
	Bytes(&'a [u8]),
	Integers(&'a [i64]),
}

impl<'a> Input<'a> {
	/// Checks that the input can be hashed without absorbing any of it.
	pub fn validate(&self) -> Result<()> {
		if let Input::Integers(values) = self {
			if let Some((index, &value)) = values
				.iter()
				.enumerate()
				.find(|(_, value)| !(0..=255).contains(*value))
			{
				bail!(Error::InvalidInput { index, value });
			}
		}
		Ok(())
	}

	/// Feeds the message bytes to `sink` in order. The input must have been validated.
	pub(crate) fn for_each_chunk(&self, mut sink: impl FnMut(&[u8])) {
		match *self {
			Input::Text(text) => sink(text.as_bytes()),
			Input::Bytes(bytes) => sink(bytes),
			Input::Utf16(units) => {
				let mut scratch = [0u8; SCRATCH_LEN];
				let mut len = 0;
				for code_point in CodePoints::new(units) {
					if len + 4 > SCRATCH_LEN {
						sink(&scratch[..len]);
						len = 0;
					}
					len += encode_code_point(code_point, &mut scratch[len..]);
				}
				sink(&scratch[..len]);
			}
			Input::Integers(values) => {
				let mut scratch = [0u8; SCRATCH_LEN];
				for chunk in values.chunks(SCRATCH_LEN) {
					for (byte, &value) in scratch.iter_mut().zip(chunk) {
						*byte = value as u8;
					}
					sink(&scratch[..chunk.len()]);
				}
			}
		}
	}
}

impl<'a> From<&'a str> for Input<'a> {
	fn from(text: &'a str) -> Self {
		Input::Text(text)
	}
}

impl<'a> From<&'a String> for Input<'a> {
	fn from(text: &'a String) -> Self {
		Input::Text(text)
	}
}

impl<'a> From<&'a [u8]> for Input<'a> {
	fn from(bytes: &'a [u8]) -> Self {
		Input::Bytes(bytes)
	}
}

impl<'a, const N: usize> From<&'a [u8; N]> for Input<'a> {
	fn from(bytes: &'a [u8; N]) -> Self {
		Input::Bytes(bytes)
	}
}

impl<'a> From<&'a Vec<u8>> for Input<'a> {
	fn from(bytes: &'a Vec<u8>) -> Self {
		Input::Bytes(bytes)
	}
}

impl<'a> From<&'a [u16]> for Input<'a> {
	fn from(units: &'a [u16]) -> Self {
		Input::Utf16(units)
	}
}

impl<'a> From<&'a [i64]> for Input<'a> {
	fn from(values: &'a [i64]) -> Self {
		Input::Integers(values)
	}
}

impl<'a> From<&'a Vec<i64>> for Input<'a> {
	fn from(values: &'a Vec<i64>) -> Self {
		Input::Integers(values)
	}
}

/// Iterator over the code points of a UTF-16 sequence.
///
/// Any surrogate, high or low, starts a pair and consumes the following unit. A surrogate in the
/// last position is paired with a zero unit.
#[derive(Debug, Clone)]
pub struct CodePoints<'a> {
	units: &'a [u16],
	pos: usize,
}

impl<'a> CodePoints<'a> {
	pub fn new(units: &'a [u16]) -> Self {
		Self { units, pos: 0 }
	}
}

impl Iterator for CodePoints<'_> {
	type Item = u32;

	fn next(&mut self) -> Option<u32> {
		let unit = *self.units.get(self.pos)? as u32;
		self.pos += 1;
		if !(0xd800..0xe000).contains(&unit) {
			return Some(unit);
		}
		let low = self.units.get(self.pos).map_or(0, |&unit| unit as u32);
		self.pos += 1;
		Some(0x10000 + (((unit & 0x3ff) << 10) | (low & 0x3ff)))
	}
}

/// Writes the UTF-8 encoding of `code_point` to the front of `out`, returning the byte count.
///
/// `out` must hold at least four bytes.
pub fn encode_code_point(code_point: u32, out: &mut [u8]) -> usize {
	if code_point < 0x80 {
		out[0] = code_point as u8;
		1
	} else if code_point < 0x800 {
		out[0] = 0xc0 | (code_point >> 6) as u8;
		out[1] = 0x80 | (code_point & 0x3f) as u8;
		2
	} else if code_point < 0x10000 {
		out[0] = 0xe0 | (code_point >> 12) as u8;
		out[1] = 0x80 | ((code_point >> 6) & 0x3f) as u8;
		out[2] = 0x80 | (code_point & 0x3f) as u8;
		3
	} else {
		out[0] = 0xf0 | (code_point >> 18) as u8;
		out[1] = 0x80 | ((code_point >> 12) & 0x3f) as u8;
		out[2] = 0x80 | ((code_point >> 6) & 0x3f) as u8;
		out[3] = 0x80 | (code_point & 0x3f) as u8;
		4
	}
}

/// Encodes UTF-16 code units as UTF-8.
pub fn utf16_to_utf8(units: &[u16]) -> Vec<u8> {
	let mut out = Vec::with_capacity(units.len() * 3);
	let mut buf = [0u8; 4];
	for code_point in CodePoints::new(units) {
		let len = encode_code_point(code_point, &mut buf);
		out.extend_from_slice(&buf[..len]);
	}
	out
}
