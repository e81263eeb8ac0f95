// Copyright 2025 Digestkit Developers

use assert_matches::assert_matches;
use digestkit_md5::{digest, digest_bytes, hmac, Error, Md5, Md5Output};
use hex_literal::hex;

#[test]
fn test_rfc1321_suite() {
	let cases: [(&str, [u8; 16]); 7] = [
		("", hex!("d41d8cd98f00b204e9800998ecf8427e")),
		("a", hex!("0cc175b9c0f1b6a831c399e269772661")),
		("abc", hex!("900150983cd24fb0d6963f7d28e17f72")),
		("message digest", hex!("f96b697d7cb7938d525a2f31aaf161d0")),
		("abcdefghijklmnopqrstuvwxyz", hex!("c3fcd3d76192e4007dfb496cca67e13b")),
		(
			"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
			hex!("d174ab98d277d9f5a5611c2c9f419d9f"),
		),
		(
			"12345678901234567890123456789012345678901234567890123456789012345678901234567890",
			hex!("57edf4a22be3c955ac49da2e2107b67a"),
		),
	];
	for (input, expected) in cases {
		let out = digest(input).unwrap();
		assert_eq!(out, expected, "input {input:?}");
		assert_eq!(out.len(), 16);
	}
}

#[test]
fn test_padding_boundaries() {
	// Lengths around 56 mod 64, where the length suffix stops fitting in the last block.
	let cases: [(usize, [u8; 16]); 7] = [
		(55, hex!("ef1772b6dff9a122358552954ad0df65")),
		(56, hex!("3b0c8ac703f828b04c6c197006d17218")),
		(57, hex!("652b906d60af96844ebd21b674f35e93")),
		(63, hex!("b06521f39153d618550606be297466d5")),
		(64, hex!("014842d480b571495a4a0363793f7367")),
		(65, hex!("c743a45e0d2e6a95cb859adae0248435")),
		(128, hex!("e510683b3f5ffe4093d021808bc6ff70")),
	];
	for (len, expected) in cases {
		let message = vec![b'a'; len];
		assert_eq!(digest_bytes(&message), expected, "len {len}");

		// Same message delivered one byte at a time.
		let mut hasher = Md5::new();
		for byte in message.chunks(1) {
			hasher.update(byte).unwrap();
		}
		assert_eq!(hasher.finalize(), expected, "len {len}, bytewise");
	}
}

#[test]
fn test_one_million_a() {
	let chunk = [b'a'; 1000];
	let mut hasher = Md5::new();
	for _ in 0..1000 {
		hasher.update(&chunk).unwrap();
	}
	assert_eq!(hasher.len(), 1_000_000);
	assert_eq!(hasher.finalize(), hex!("7707d6ae4e027c70eea2a935c2296f21"));
}

#[test]
fn test_all_byte_values() {
	let message = (0..=255u8).collect::<Vec<_>>();
	let integers = (0..=255i64).collect::<Vec<_>>();
	let expected = hex!("e2c865db4162bed963bfaa9ef6ac18f0");
	assert_eq!(digest(&message).unwrap(), expected);
	assert_eq!(digest(&integers).unwrap(), expected);
}

#[test]
fn test_every_split_point() {
	let message = "The quick brown fox jumps over the lazy dog, twice: the quick brown fox jumps over \
	               the lazy dog"
		.as_bytes();
	let expected = digest_bytes(message);
	for k in 0..=message.len() {
		let out = Md5::new()
			.chain_update(&message[..k])
			.unwrap()
			.chain_update(&message[k..])
			.unwrap()
			.finalize();
		assert_eq!(out, expected, "split at {k}");
	}
}

#[test]
fn test_text_outside_bmp() {
	let text = "héllo 😀 wörld";
	let units = text.encode_utf16().collect::<Vec<_>>();
	let expected = hex!("4a4d148a788e62bfb7f2a217d17dbf2e");
	assert_eq!(digest(text).unwrap(), expected);
	assert_eq!(digest(&units[..]).unwrap(), expected);
	assert_eq!(digest(text.as_bytes()).unwrap(), expected);
	assert_eq!(digest(&[0xd83du16, 0xde00][..]).unwrap(), hex!("2a02eac39d716a70ecf37579185927b6"));
}

#[test]
fn test_unpaired_trailing_surrogate() {
	// A trailing surrogate combines with an implicit zero unit, giving U+10000.
	assert_eq!(digest(&[0x41u16, 0xd800][..]).unwrap(), hex!("070521a39bc767f6099a2f4b9bbcbef3"));
}

#[test]
fn test_single_byte_change_changes_digest() {
	let mut message = b"The quick brown fox jumps over the lazy dog".to_vec();
	let original = digest_bytes(&message);
	for i in 0..message.len() {
		message[i] ^= 1;
		assert_ne!(digest_bytes(&message), original, "flipped byte {i}");
		message[i] ^= 1;
	}
	assert_eq!(digest(b"abd").unwrap(), hex!("4911e516e5aa21d327512e0c8b197616"));
}

#[test]
fn test_determinism() {
	assert_eq!(digest("abc").unwrap(), digest("abc").unwrap());
}

#[test]
fn test_misuse_after_finalize() {
	let mut hasher = Md5::new();
	hasher.update("abc").unwrap();
	let out = hasher.finalize();
	assert_matches!(hasher.update("d"), Err(Error::AlreadyFinalized));
	assert_eq!(hasher.finalize(), out);
}

#[test]
fn test_hex_round_trip_through_display() {
	let out = digest("abc").unwrap();
	let parsed: Md5Output = out.to_string().parse().unwrap();
	assert_eq!(parsed, out);
}

#[test]
fn test_rfc2202_hmac_vectors() {
	let cases: [(Vec<u8>, Vec<u8>, [u8; 16]); 7] = [
		(vec![0x0b; 16], b"Hi There".to_vec(), hex!("9294727a3638bb1c13f48ef8158bfc9d")),
		(
			b"Jefe".to_vec(),
			b"what do ya want for nothing?".to_vec(),
			hex!("750c783e6ab0b503eaa86e310a5db738"),
		),
		(vec![0xaa; 16], vec![0xdd; 50], hex!("56be34521d144c88dbb8c733f0e8b3f6")),
		((1..=25).collect(), vec![0xcd; 50], hex!("697eaf0aca3a3aea3a75164746ffaa79")),
		(vec![0x0c; 16], b"Test With Truncation".to_vec(), hex!("56461ef2342edc00f9bab995690efd4c")),
		(
			vec![0xaa; 80],
			b"Test Using Larger Than Block-Size Key - Hash Key First".to_vec(),
			hex!("6b1ab7fe4bd7bf8f0b62e6ce61b9d0cd"),
		),
		(
			vec![0xaa; 80],
			b"Test Using Larger Than Block-Size Key and Larger Than One Block-Size Data".to_vec(),
			hex!("6f630fad67cda0ee1fb1f562db3aa53e"),
		),
	];
	for (key, message, expected) in cases {
		assert_eq!(hmac(&key, &message).unwrap(), expected, "key {key:02x?}");
	}
}

#[test]
#[ignore = "hashes more than 4 GiB"]
fn test_aggregate_length_beyond_u32() {
	use md5_reference::Digest;

	let chunk = vec![0x5au8; 1 << 24];
	let mut hasher = Md5::new();
	let mut reference = md5_reference::Md5::new();
	for _ in 0..257 {
		hasher.update(&chunk).unwrap();
		reference.update(&chunk);
	}
	assert_eq!(hasher.len(), 257 << 24);
	assert_eq!(hasher.finalize().as_bytes()[..], reference.finalize()[..]);
}
