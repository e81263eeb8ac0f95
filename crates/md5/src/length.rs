// Copyright 2025 Digestkit Developers

/// Running count of absorbed message bytes.
///
/// The count is kept as two 32-bit halves so the carry out of the low word is explicit. The
/// length suffix written during padding is the bit length modulo 2^64, which covers every byte
/// count below 2^61.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MessageLength {
	lo: u32,
	hi: u32,
}

impl MessageLength {
	pub const fn new() -> Self {
		Self { lo: 0, hi: 0 }
	}

	/// Adds `n` bytes to the count, carrying into the high word.
	pub fn add(&mut self, n: usize) {
		let n = n as u64;
		let (lo, carry) = self.lo.overflowing_add(n as u32);
		self.lo = lo;
		self.hi = self
			.hi
			.wrapping_add((n >> 32) as u32)
			.wrapping_add(carry as u32);
	}

	/// Total number of bytes counted so far.
	pub const fn bytes(&self) -> u64 {
		((self.hi as u64) << 32) | self.lo as u64
	}

	/// The bit length split into its low and high 32-bit words.
	pub const fn bit_length_words(&self) -> [u32; 2] {
		[self.lo << 3, (self.hi << 3) | (self.lo >> 29)]
	}

	/// The 8-byte little-endian length suffix appended by the padding.
	pub fn bit_length_le(&self) -> [u8; 8] {
		let [lo, hi] = self.bit_length_words();
		let mut out = [0u8; 8];
		out[..4].copy_from_slice(&lo.to_le_bytes());
		out[4..].copy_from_slice(&hi.to_le_bytes());
		out
	}
}
