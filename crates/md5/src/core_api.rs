// Copyright 2025 Digestkit Developers

//! Adapter exposing the MD5 compression function through the RustCrypto `digest` core API, so
//! that [`Md5Digest`] can be used wherever a [`digest::Digest`] is expected.

use core::fmt;

pub use digest;
use digest::{
	block_buffer::Eager,
	core_api::{
		AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper, FixedOutputCore,
		OutputSizeUser, UpdateCore,
	},
	typenum::{U16, U64},
	HashMarker, Output, Reset,
};

use crate::{
	compress::compress,
	consts::{BLOCK_LEN, IV},
};

/// Lowest-level core hasher state of MD5.
#[derive(Clone)]
pub struct Md5Core {
	state: [u32; 4],
	blocks_len: u64,
}

/// MD5 hasher state implementing [`digest::Digest`].
pub type Md5Digest = CoreWrapper<Md5Core>;

impl HashMarker for Md5Core {}

impl BlockSizeUser for Md5Core {
	type BlockSize = U64;
}

impl BufferKindUser for Md5Core {
	type BufferKind = Eager;
}

impl OutputSizeUser for Md5Core {
	type OutputSize = U16;
}

impl UpdateCore for Md5Core {
	#[inline]
	fn update_blocks(&mut self, blocks: &[Block<Self>]) {
		self.blocks_len = self.blocks_len.wrapping_add(blocks.len() as u64);
		for block in blocks {
			compress(&mut self.state, block.as_slice());
		}
	}
}

impl FixedOutputCore for Md5Core {
	#[inline]
	fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
		let bit_len = self
			.blocks_len
			.wrapping_mul(BLOCK_LEN as u64)
			.wrapping_add(buffer.get_pos() as u64)
			.wrapping_mul(8);
		let mut state = self.state;
		buffer.len64_padding_le(bit_len, |block| compress(&mut state, block.as_slice()));
		for (chunk, word) in out.chunks_exact_mut(4).zip(state) {
			chunk.copy_from_slice(&word.to_le_bytes());
		}
	}
}

impl Default for Md5Core {
	#[inline]
	fn default() -> Self {
		Self {
			state: IV,
			blocks_len: 0,
		}
	}
}

impl Reset for Md5Core {
	#[inline]
	fn reset(&mut self) {
		*self = Self::default();
	}
}

impl AlgorithmName for Md5Core {
	#[inline]
	fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Md5")
	}
}

impl fmt::Debug for Md5Core {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Md5Core { ... }")
	}
}
