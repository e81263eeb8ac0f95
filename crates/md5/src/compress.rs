// Copyright 2025 Digestkit Developers

//! The MD5 block compression function (RFC 1321, section 3.4).

use std::array;

use crate::consts::{BLOCK_LEN, K, SHIFTS};

#[inline(always)]
fn f(x: u32, y: u32, z: u32) -> u32 {
	(x & y) | (!x & z)
}

#[inline(always)]
fn g(x: u32, y: u32, z: u32) -> u32 {
	(x & z) | (y & !z)
}

#[inline(always)]
fn h(x: u32, y: u32, z: u32) -> u32 {
	x ^ y ^ z
}

#[inline(always)]
fn i(x: u32, y: u32, z: u32) -> u32 {
	y ^ (x | !z)
}

/// Index of the message word consumed at `step`.
#[inline(always)]
const fn message_index(step: usize) -> usize {
	match step / 16 {
		0 => step,
		1 => (5 * step + 1) % 16,
		2 => (3 * step + 5) % 16,
		_ => (7 * step) % 16,
	}
}

/// Decodes a block into sixteen little-endian words.
///
/// `block` must be exactly `BLOCK_LEN` bytes long.
#[inline]
pub fn block_words(block: &[u8]) -> [u32; 16] {
	debug_assert_eq!(block.len(), BLOCK_LEN);
	array::from_fn(|j| {
		u32::from_le_bytes([block[4 * j], block[4 * j + 1], block[4 * j + 2], block[4 * j + 3]])
	})
}

/// Absorbs one 64-byte block into `state`.
///
/// All additions are modulo 2^32.
pub fn compress(state: &mut [u32; 4], block: &[u8]) {
	let m = block_words(block);
	let [mut a, mut b, mut c, mut d] = *state;

	for step in 0..64 {
		let round = step / 16;
		let mixed = match round {
			0 => f(b, c, d),
			1 => g(b, c, d),
			2 => h(b, c, d),
			_ => i(b, c, d),
		};
		let rotated = a
			.wrapping_add(mixed)
			.wrapping_add(K[step])
			.wrapping_add(m[message_index(step)])
			.rotate_left(SHIFTS[round][step % 4]);

		a = d;
		d = c;
		c = b;
		b = b.wrapping_add(rotated);
	}

	state[0] = state[0].wrapping_add(a);
	state[1] = state[1].wrapping_add(b);
	state[2] = state[2].wrapping_add(c);
	state[3] = state[3].wrapping_add(d);
}
