// Copyright 2025 Digestkit Developers

use crate::{error::Result, input::Input};

/// Common interface of the incremental digest contexts in this crate.
///
/// This interface is largely based on the [`digest::Digest`] trait, except that updates accept
/// any [`Input`] and may fail, and finalization borrows the context so that a finalized context
/// can report misuse instead of being statically consumed.
pub trait Hasher: Sized {
	/// The hash function output type.
	type Digest;

	fn update<'a>(&mut self, data: impl Into<Input<'a>>) -> Result<()>;

	fn chain_update<'a>(mut self, data: impl Into<Input<'a>>) -> Result<Self> {
		self.update(data)?;
		Ok(self)
	}

	fn finalize(&mut self) -> Self::Digest;

	fn finalize_reset(&mut self) -> Self::Digest {
		let out = self.finalize();
		self.reset();
		out
	}

	fn reset(&mut self);
}

pub fn hash<'a, H: Hasher + Default>(data: impl Into<Input<'a>>) -> Result<H::Digest> {
	Ok(H::default().chain_update(data)?.finalize())
}
