// Copyright 2025 Digestkit Developers

use std::io::{self, ErrorKind, Read};

use tracing::instrument;

use crate::{error::Result, md5::Md5, output::Md5Output};

/// Default chunk size used when hashing a reader.
pub const DEFAULT_BUFFER_LEN: usize = 8192;

/// A [`Read`] adapter that hashes every byte passing through it.
#[derive(Debug)]
pub struct HashingReader<R> {
	reader: R,
	hasher: Md5,
	nread: u64,
}

impl<R: Read> HashingReader<R> {
	pub fn new(reader: R) -> Self {
		Self {
			reader,
			hasher: Md5::new(),
			nread: 0,
		}
	}

	/// Reads the rest of the underlying reader, `buffer_len` bytes at a time.
	pub fn consume(&mut self, buffer_len: usize) -> io::Result<()> {
		let mut buf = vec![0u8; buffer_len.max(1)];
		loop {
			match self.read(&mut buf) {
				Ok(0) => return Ok(()),
				Ok(_) => {}
				Err(e) if e.kind() == ErrorKind::Interrupted => {}
				Err(e) => return Err(e),
			}
		}
	}

	/// Digest of everything read so far together with the byte count.
	pub fn digest(mut self) -> (Md5Output, u64) {
		(self.hasher.finalize(), self.nread)
	}

	pub fn into_inner(self) -> R {
		self.reader
	}
}

impl<R: Read> Read for HashingReader<R> {
	fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
		let n = self.reader.read(buf)?;
		self.hasher.absorb(&buf[..n]);
		self.nread += n as u64;
		Ok(n)
	}
}

/// Hashes `reader` to the end, returning the digest and the number of bytes read.
#[instrument(skip_all, level = "trace", fields(buffer_len = buffer_len))]
pub fn digest_reader<R: Read>(reader: R, buffer_len: usize) -> Result<(Md5Output, u64)> {
	let mut reader = HashingReader::new(reader);
	reader.consume(buffer_len)?;
	Ok(reader.digest())
}

#[cfg(test)]
mod tests {
	use std::io::Cursor;

	use hex_literal::hex;
	use rand::{thread_rng, RngCore};

	use super::*;
	use crate::md5::digest_bytes;

	#[test]
	fn test_digest_reader_matches_one_shot() {
		let mut data = vec![0u8; 3 * DEFAULT_BUFFER_LEN + 17];
		thread_rng().fill_bytes(&mut data);
		for buffer_len in [0, 1, 63, 64, 65, DEFAULT_BUFFER_LEN] {
			let (digest, n) = digest_reader(Cursor::new(&data), buffer_len).unwrap();
			assert_eq!(n, data.len() as u64);
			assert_eq!(digest, digest_bytes(&data));
		}
	}

	#[test]
	fn test_reader_passes_data_through() {
		let mut reader = HashingReader::new(&b"message digest"[..]);
		let mut out = String::new();
		reader.read_to_string(&mut out).unwrap();
		assert_eq!(out, "message digest");
		let (digest, n) = reader.digest();
		assert_eq!(n, 14);
		assert_eq!(digest, hex!("f96b697d7cb7938d525a2f31aaf161d0"));
	}

	#[test]
	fn test_error_is_propagated() {
		struct Failing;
		impl Read for Failing {
			fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
				Err(io::Error::new(ErrorKind::BrokenPipe, "boom"))
			}
		}
		assert!(matches!(
			digest_reader(Failing, 16),
			Err(crate::Error::Io(e)) if e.kind() == ErrorKind::BrokenPipe
		));
	}
}
