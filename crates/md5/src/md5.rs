// Copyright 2025 Digestkit Developers

use std::{fmt, io};

use digestkit_utils::ensure;
use tracing::{instrument, trace};

use crate::{
	buffer::BlockBuffer,
	compress::compress,
	consts::IV,
	error::{Error, Result},
	hasher::Hasher,
	input::Input,
	length::MessageLength,
	output::Md5Output,
};

/// An incremental MD5 digest context.
///
/// A context starts empty, absorbs any number of [`update`](Self::update) calls and is sealed by
/// [`finalize`](Self::finalize). Finalizing again returns the same digest; updating a finalized
/// context fails with [`Error::AlreadyFinalized`] until it is [`reset`](Self::reset).
#[derive(Clone)]
pub struct Md5 {
	state: [u32; 4],
	buffer: BlockBuffer,
	length: MessageLength,
	blocks: u64,
	finalized: bool,
}

impl Md5 {
	pub const fn new() -> Self {
		Self {
			state: IV,
			buffer: BlockBuffer::new(),
			length: MessageLength::new(),
			blocks: 0,
			finalized: false,
		}
	}

	/// Absorbs `data` into the running digest.
	///
	/// The input is validated before anything is absorbed, so a rejected call leaves the
	/// context unchanged.
	pub fn update<'a>(&mut self, data: impl Into<Input<'a>>) -> Result<&mut Self> {
		ensure!(!self.finalized, Error::AlreadyFinalized);
		let data = data.into();
		data.validate()?;
		data.for_each_chunk(|chunk| self.absorb(chunk));
		Ok(self)
	}

	/// Process input data in a chained manner.
	pub fn chain_update<'a>(mut self, data: impl Into<Input<'a>>) -> Result<Self> {
		self.update(data)?;
		Ok(self)
	}

	/// Applies the padding and returns the digest.
	///
	/// Only the first call pads; later calls return the stored digest unchanged.
	pub fn finalize(&mut self) -> Md5Output {
		if !self.finalized {
			let Self {
				state,
				buffer,
				length,
				blocks,
				..
			} = self;
			*blocks += buffer.pad(length.bit_length_le(), |block| compress(state, block));
			self.finalized = true;
			trace!(bytes = self.length.bytes(), blocks = self.blocks, "md5 context finalized");
		}
		Md5Output::from_words(self.state)
	}

	/// Returns the digest and puts the context back into its initial state.
	pub fn finalize_reset(&mut self) -> Md5Output {
		let output = self.finalize();
		self.reset();
		output
	}

	pub fn reset(&mut self) {
		self.state = IV;
		self.buffer.reset();
		self.length = MessageLength::new();
		self.blocks = 0;
		self.finalized = false;
	}

	pub const fn is_finalized(&self) -> bool {
		self.finalized
	}

	/// Number of message bytes absorbed so far.
	pub const fn len(&self) -> u64 {
		self.length.bytes()
	}

	pub const fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Number of blocks run through the compression function so far.
	pub const fn compressed_blocks(&self) -> u64 {
		self.blocks
	}

	pub(crate) fn absorb(&mut self, bytes: &[u8]) {
		debug_assert!(!self.finalized);
		let Self {
			state,
			buffer,
			length,
			blocks,
			..
		} = self;
		length.add(bytes.len());
		*blocks += buffer.absorb(bytes, |block| compress(state, block));
	}
}

impl Default for Md5 {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for Md5 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Md5")
			.field("len", &self.len())
			.field("finalized", &self.finalized)
			.finish_non_exhaustive()
	}
}

impl Hasher for Md5 {
	type Digest = Md5Output;

	fn update<'a>(&mut self, data: impl Into<Input<'a>>) -> Result<()> {
		Md5::update(self, data).map(|_| ())
	}

	fn finalize(&mut self) -> Md5Output {
		Md5::finalize(self)
	}

	fn reset(&mut self) {
		Md5::reset(self)
	}
}

impl io::Write for Md5 {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		if self.finalized {
			return Err(io::Error::other(Error::AlreadyFinalized));
		}
		self.absorb(buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

/// Computes the digest of `data` in one shot.
#[instrument(skip_all, level = "trace")]
pub fn digest<'a>(data: impl Into<Input<'a>>) -> Result<Md5Output> {
	Ok(Md5::new().chain_update(data)?.finalize())
}

/// Computes the digest of a byte slice. Byte input cannot be rejected, so this never fails.
#[instrument(skip_all, level = "trace", fields(len = data.len()))]
pub fn digest_bytes(data: &[u8]) -> Md5Output {
	let mut hasher = Md5::new();
	hasher.absorb(data);
	hasher.finalize()
}

/// Computes the digest of `data` as a lowercase hex string.
#[instrument(skip_all, level = "trace")]
pub fn digest_hex<'a>(data: impl Into<Input<'a>>) -> Result<String> {
	digest(data).map(|output| output.to_hex())
}
