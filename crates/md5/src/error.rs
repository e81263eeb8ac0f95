// Copyright 2025 Digestkit Developers

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("input element {value} at index {index} is not a byte (expected 0..=255)")]
	InvalidInput { index: usize, value: i64 },
	#[error("the digest context was already finalized; create or reset a context to hash again")]
	AlreadyFinalized,
	#[error("digest must be {expected} bytes, got {actual}")]
	InvalidDigestLength { expected: usize, actual: usize },
	#[error("malformed hex digest: {0}")]
	ParseDigest(#[from] hex::FromHexError),
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
