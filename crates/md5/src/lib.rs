// Copyright 2025 Digestkit Developers

//! Incremental MD5 message digest (RFC 1321).
//!
//! MD5 is broken as a collision-resistant hash. It is provided for compatibility with systems
//! that still exchange MD5 digests and must not be relied on for security.

mod buffer;
pub mod compress;
pub mod consts;
pub mod core_api;
pub mod error;
pub mod hasher;
pub mod hmac;
pub mod input;
pub mod length;
mod md5;
pub mod output;
pub mod reader;

pub use core_api::{Md5Core, Md5Digest};
pub use error::{Error, Result};
pub use hasher::*;
pub use hmac::{hmac, HmacMd5};
pub use input::{utf16_to_utf8, Input};
pub use length::MessageLength;
pub use md5::{digest, digest_bytes, digest_hex, Md5};
pub use output::Md5Output;
pub use reader::{digest_reader, HashingReader, DEFAULT_BUFFER_LEN};
