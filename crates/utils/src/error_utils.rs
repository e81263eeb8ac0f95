// Copyright 2024-2025 Irreducible Inc.
// Copyright 2025 Digestkit Developers

//! Early-return helpers for precondition checks.
//!
//! With the `bail_panic` feature a failed check panics at the failure site instead of returning,
//! which gives a backtrace when tracking down contract violations.

#[cfg(feature = "bail_panic")]
#[macro_export]
macro_rules! bail {
	($err:expr) => {
		panic!("{}", $err);
	};
}

#[cfg(not(feature = "bail_panic"))]
#[macro_export]
macro_rules! bail {
	($err:expr) => {{
		let err = $err;
		$crate::__private::tracing::debug!(error = %err, "check failed");
		return Err(err.into());
	}};
}

/// Returns `$err` from the enclosing function unless `$cond` holds. `$err` must implement
/// `Display`.
#[macro_export]
macro_rules! ensure {
	($cond:expr, $err:expr) => {
		if !$cond {
			$crate::bail!($err);
		}
	};
}
