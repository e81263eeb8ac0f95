// Copyright 2024 Irreducible Inc.
// Copyright 2025 Digestkit Developers

pub mod env;
pub mod error_utils;
pub mod tracing;

#[doc(hidden)]
pub mod __private {
	pub use ::tracing;
}
