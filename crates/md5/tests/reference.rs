// Copyright 2025 Digestkit Developers

use digestkit_md5::{digest_bytes, hmac, Md5, Md5Digest};
use md5_reference::Digest;
use proptest::prelude::*;

proptest! {
	#[test]
	fn test_md5_vs_reference(
		input in prop::collection::vec(any::<u8>(), 0..=2048),
	) {
		let expected = md5_reference::Md5::digest(&input);
		prop_assert_eq!(&digest_bytes(&input)[..], &expected[..]);
		prop_assert_eq!(&Md5Digest::digest(&input)[..], &expected[..]);
	}

	#[test]
	fn test_chunking_does_not_change_digest(
		input in prop::collection::vec(any::<u8>(), 0..=1024),
		splits in prop::collection::vec(any::<prop::sample::Index>(), 0..8),
	) {
		let mut points = splits.iter().map(|index| index.index(input.len() + 1)).collect::<Vec<_>>();
		points.sort_unstable();

		let mut hasher = Md5::new();
		let mut start = 0;
		for point in points.into_iter().chain([input.len()]) {
			hasher.update(&input[start..point]).unwrap();
			start = point;
		}
		prop_assert_eq!(hasher.finalize(), digest_bytes(&input));
	}

	#[test]
	fn test_text_vs_reference(text in "\\PC{0,200}") {
		let units = text.encode_utf16().collect::<Vec<_>>();
		let expected = md5_reference::Md5::digest(text.as_bytes());
		let mut hasher = Md5::new();
		hasher.update(&units[..]).unwrap();
		prop_assert_eq!(&hasher.finalize()[..], &expected[..]);
	}

	#[test]
	fn test_hmac_keys_of_any_length(
		key in prop::collection::vec(any::<u8>(), 0..=200),
		message in prop::collection::vec(any::<u8>(), 0..=300),
	) {
		let tag = hmac(&key, &message).unwrap();
		let mut inner = md5_reference::Md5::new();
		let mut outer = md5_reference::Md5::new();
		let mut block_key = [0u8; 64];
		if key.len() > 64 {
			block_key[..16].copy_from_slice(&md5_reference::Md5::digest(&key));
		} else {
			block_key[..key.len()].copy_from_slice(&key);
		}
		inner.update(block_key.map(|b| b ^ 0x36));
		inner.update(&message);
		outer.update(block_key.map(|b| b ^ 0x5c));
		outer.update(inner.finalize());
		prop_assert_eq!(&tag[..], &outer.finalize()[..]);
	}
}
