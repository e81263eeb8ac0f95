// Copyright 2025 Digestkit Developers

use std::{
	fmt,
	hash::{Hash, Hasher},
	ops::Deref,
	str::FromStr,
};

use base64ct::{Base64, Encoding};
use subtle::ConstantTimeEq;

use crate::{
	consts::OUTPUT_LEN,
	error::{Error, Result},
};

/// A 128-bit MD5 digest.
///
/// Equality is evaluated in constant time.
#[derive(Clone, Copy, PartialOrd, Ord)]
pub struct Md5Output([u8; OUTPUT_LEN]);

impl Md5Output {
	pub const LEN: usize = OUTPUT_LEN;
	pub const HEX_LEN: usize = 2 * OUTPUT_LEN;

	pub const fn new(bytes: [u8; OUTPUT_LEN]) -> Self {
		Self(bytes)
	}

	/// Serializes the chaining words `a, b, c, d` in little-endian order.
	pub fn from_words(words: [u32; 4]) -> Self {
		let mut bytes = [0u8; OUTPUT_LEN];
		for (chunk, word) in bytes.chunks_exact_mut(4).zip(words) {
			chunk.copy_from_slice(&word.to_le_bytes());
		}
		Self(bytes)
	}

	/// The four little-endian state words.
	pub fn words(&self) -> [u32; 4] {
		std::array::from_fn(|i| {
			u32::from_le_bytes([self.0[4 * i], self.0[4 * i + 1], self.0[4 * i + 2], self.0[4 * i + 3]])
		})
	}

	pub const fn as_bytes(&self) -> &[u8; OUTPUT_LEN] {
		&self.0
	}

	pub const fn into_bytes(self) -> [u8; OUTPUT_LEN] {
		self.0
	}

	pub fn to_hex(&self) -> String {
		hex::encode(self.0)
	}

	pub fn to_hex_upper(&self) -> String {
		hex::encode_upper(self.0)
	}

	pub fn to_base64(&self) -> String {
		Base64::encode_string(&self.0)
	}
}

impl PartialEq for Md5Output {
	fn eq(&self, other: &Self) -> bool {
		self.0[..].ct_eq(&other.0[..]).into()
	}
}

impl Eq for Md5Output {}

impl PartialEq<[u8; OUTPUT_LEN]> for Md5Output {
	fn eq(&self, other: &[u8; OUTPUT_LEN]) -> bool {
		self.0[..].ct_eq(&other[..]).into()
	}
}

impl Hash for Md5Output {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.0.hash(state);
	}
}

impl From<[u8; OUTPUT_LEN]> for Md5Output {
	fn from(bytes: [u8; OUTPUT_LEN]) -> Self {
		Self(bytes)
	}
}

impl From<Md5Output> for [u8; OUTPUT_LEN] {
	fn from(output: Md5Output) -> Self {
		output.0
	}
}

impl TryFrom<&[u8]> for Md5Output {
	type Error = Error;

	fn try_from(bytes: &[u8]) -> Result<Self> {
		let bytes = bytes
			.try_into()
			.map_err(|_| Error::InvalidDigestLength {
				expected: OUTPUT_LEN,
				actual: bytes.len(),
			})?;
		Ok(Self(bytes))
	}
}

impl AsRef<[u8]> for Md5Output {
	fn as_ref(&self) -> &[u8] {
		&self.0
	}
}

impl Deref for Md5Output {
	type Target = [u8; OUTPUT_LEN];

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl fmt::LowerHex for Md5Output {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.0.iter().try_for_each(|byte| write!(f, "{byte:02x}"))
	}
}

impl fmt::UpperHex for Md5Output {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.0.iter().try_for_each(|byte| write!(f, "{byte:02X}"))
	}
}

impl fmt::Display for Md5Output {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::LowerHex::fmt(self, f)
	}
}

impl fmt::Debug for Md5Output {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Md5Output({self})")
	}
}

impl FromStr for Md5Output {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		let mut bytes = [0u8; OUTPUT_LEN];
		hex::decode_to_slice(s, &mut bytes)?;
		Ok(Self(bytes))
	}
}
