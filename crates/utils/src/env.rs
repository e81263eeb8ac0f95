// Copyright 2024 Irreducible Inc.
// Copyright 2025 Digestkit Developers

use std::{env, str::FromStr};

#[derive(Debug, thiserror::Error)]
pub enum EnvError {
	#[error("environment variable {name} has invalid value {value:?}")]
	InvalidValue { name: String, value: String },
	#[error("environment variable {name} is not valid unicode")]
	NotUnicode { name: String },
}

/// Read boolean flag from the environment variable.
pub fn boolean_env_flag_set(flag: &str) -> bool {
	match env::var(flag) {
		Ok(val) => ["1", "on", "ON", "true", "TRUE", "yes", "YES"].contains(&val.as_str()),
		Err(_) => false,
	}
}

/// Parses the environment variable `name`, returning `None` when it is unset.
pub fn parse_env<T: FromStr>(name: &str) -> Result<Option<T>, EnvError> {
	match env::var(name) {
		Ok(value) => value
			.trim()
			.parse()
			.map(Some)
			.map_err(|_| EnvError::InvalidValue {
				name: name.to_owned(),
				value,
			}),
		Err(env::VarError::NotPresent) => Ok(None),
		Err(env::VarError::NotUnicode(_)) => Err(EnvError::NotUnicode {
			name: name.to_owned(),
		}),
	}
}

/// Read buffer size for streaming input, from `DIGESTKIT_READ_BUFFER`.
pub fn get_read_buffer_len() -> Result<Option<usize>, EnvError> {
	parse_env::<usize>("DIGESTKIT_READ_BUFFER")
}
