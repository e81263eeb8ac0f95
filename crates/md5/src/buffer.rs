// Copyright 2025 Digestkit Developers

use std::cmp::min;

use crate::consts::{BLOCK_LEN, LENGTH_OFFSET};

/// Fixed 64-byte staging area for a block being assembled.
///
/// The same storage is reused for every block; nothing is allocated after construction.
#[derive(Clone)]
pub struct BlockBuffer {
	block: [u8; BLOCK_LEN],
	/// Invariant: `pos` is always strictly less than `BLOCK_LEN` between calls.
	pos: usize,
}

impl BlockBuffer {
	pub const fn new() -> Self {
		Self {
			block: [0; BLOCK_LEN],
			pos: 0,
		}
	}

	/// Number of bytes of the current block that are filled.
	pub const fn position(&self) -> usize {
		self.pos
	}

	/// Appends `data`, calling `compress` for every block that fills up. Returns the number of
	/// completed blocks.
	pub fn absorb(&mut self, mut data: &[u8], mut compress: impl FnMut(&[u8; BLOCK_LEN])) -> u64 {
		let mut blocks = 0;
		while !data.is_empty() {
			let to_copy = min(BLOCK_LEN - self.pos, data.len());
			self.block[self.pos..self.pos + to_copy].copy_from_slice(&data[..to_copy]);
			self.pos += to_copy;

			if self.pos == BLOCK_LEN {
				compress(&self.block);
				self.pos = 0;
				blocks += 1;
			}

			data = &data[to_copy..];
		}
		blocks
	}

	/// Applies the MD5 padding with the given 8-byte length suffix and compresses the final one
	/// or two blocks. Returns the number of blocks compressed.
	pub fn pad(&mut self, length_suffix: [u8; 8], mut compress: impl FnMut(&[u8; BLOCK_LEN])) -> u64 {
		let mut blocks = 1;
		self.block[self.pos] = 0x80;
		self.pos += 1;

		// no room left for the suffix
		if self.pos > LENGTH_OFFSET {
			self.block[self.pos..].fill(0);
			compress(&self.block);
			self.pos = 0;
			blocks += 1;
		}

		self.block[self.pos..LENGTH_OFFSET].fill(0);
		self.block[LENGTH_OFFSET..].copy_from_slice(&length_suffix);
		compress(&self.block);
		self.pos = 0;
		blocks
	}

	pub fn reset(&mut self) {
		self.block = [0; BLOCK_LEN];
		self.pos = 0;
	}
}

impl Default for BlockBuffer {
	fn default() -> Self {
		Self::new()
	}
}
