// Copyright 2025 Digestkit Developers

//! HMAC-MD5 keyed message authentication (RFC 2104).

use std::fmt;

use crate::{
	consts::BLOCK_LEN,
	error::Result,
	hasher::Hasher,
	input::Input,
	md5::{digest_bytes, Md5},
	output::Md5Output,
};

const INNER_PAD: u8 = 0x36;
const OUTER_PAD: u8 = 0x5c;

/// An incremental HMAC-MD5 context.
#[derive(Clone)]
pub struct HmacMd5 {
	inner: Md5,
	inner_key: [u8; BLOCK_LEN],
	outer_key: [u8; BLOCK_LEN],
}

impl HmacMd5 {
	/// Creates a context keyed with `key`. Keys longer than one block are replaced by their
	/// digest.
	pub fn new<'a>(key: impl Into<Input<'a>>) -> Result<Self> {
		let key = key.into();
		key.validate()?;

		let mut key_bytes = Vec::new();
		key.for_each_chunk(|chunk| key_bytes.extend_from_slice(chunk));

		let mut block_key = [0u8; BLOCK_LEN];
		if key_bytes.len() > BLOCK_LEN {
			let hashed = digest_bytes(&key_bytes);
			block_key[..Md5Output::LEN].copy_from_slice(hashed.as_bytes());
		} else {
			block_key[..key_bytes.len()].copy_from_slice(&key_bytes);
		}

		let inner_key = block_key.map(|byte| byte ^ INNER_PAD);
		let outer_key = block_key.map(|byte| byte ^ OUTER_PAD);
		let mut inner = Md5::new();
		inner.absorb(&inner_key);

		Ok(Self {
			inner,
			inner_key,
			outer_key,
		})
	}

	pub fn update<'a>(&mut self, data: impl Into<Input<'a>>) -> Result<&mut Self> {
		self.inner.update(data)?;
		Ok(self)
	}

	pub fn chain_update<'a>(mut self, data: impl Into<Input<'a>>) -> Result<Self> {
		self.update(data)?;
		Ok(self)
	}

	/// Returns the authentication tag. Repeated calls return the same tag.
	pub fn finalize(&mut self) -> Md5Output {
		let inner = self.inner.finalize();
		let mut outer = Md5::new();
		outer.absorb(&self.outer_key);
		outer.absorb(inner.as_bytes());
		outer.finalize()
	}

	/// Checks the tag against `expected` in constant time.
	pub fn verify(&mut self, expected: &Md5Output) -> bool {
		self.finalize() == *expected
	}

	pub fn reset(&mut self) {
		self.inner.reset();
		self.inner.absorb(&self.inner_key);
	}
}

impl fmt::Debug for HmacMd5 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("HmacMd5 { ... }")
	}
}

impl Hasher for HmacMd5 {
	type Digest = Md5Output;

	fn update<'a>(&mut self, data: impl Into<Input<'a>>) -> Result<()> {
		HmacMd5::update(self, data).map(|_| ())
	}

	fn finalize(&mut self) -> Md5Output {
		HmacMd5::finalize(self)
	}

	fn reset(&mut self) {
		HmacMd5::reset(self)
	}
}

/// Computes the HMAC-MD5 tag of `message` under `key` in one shot.
pub fn hmac<'a, 'b>(key: impl Into<Input<'a>>, message: impl Into<Input<'b>>) -> Result<Md5Output> {
	Ok(HmacMd5::new(key)?.chain_update(message)?.finalize())
}
