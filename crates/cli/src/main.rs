// Copyright 2025 Digestkit Developers

use std::{
	fs::File,
	io::{self, BufRead, BufReader},
	path::PathBuf,
	process::ExitCode,
};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use digestkit_md5::{digest_reader, HmacMd5, Md5Output, DEFAULT_BUFFER_LEN};
use digestkit_utils::{
	env::{boolean_env_flag_set, get_read_buffer_len},
	tracing::init_tracing,
};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
	Hex,
	Base64,
}

/// Print or check MD5 (128-bit) digests.
#[derive(Debug, Parser)]
#[command(name = "md5sum", version)]
struct Args {
	/// Files to hash. `-` or no files reads standard input.
	files: Vec<PathBuf>,
	/// Hash this string instead of reading files.
	#[arg(short, long, conflicts_with = "files")]
	string: Option<String>,
	/// Output encoding of the digest.
	#[arg(short, long, value_enum, default_value_t = Format::Hex)]
	format: Format,
	/// Compute an HMAC-MD5 tag with this key instead of a plain digest.
	#[arg(long)]
	hmac_key: Option<String>,
	/// Expected hex digest; exit with failure status if any input does not match.
	#[arg(short, long)]
	check: Option<Md5Output>,
	/// Read buffer size in bytes. Overrides `DIGESTKIT_READ_BUFFER`.
	#[arg(long)]
	buffer_len: Option<usize>,
}

fn encode(output: &Md5Output, format: Format, uppercase: bool) -> String {
	match format {
		Format::Hex if uppercase => output.to_hex_upper(),
		Format::Hex => output.to_hex(),
		Format::Base64 => output.to_base64(),
	}
}

fn hash_stream(reader: impl io::Read, hmac_key: Option<&str>, buffer_len: usize) -> Result<Md5Output> {
	match hmac_key {
		Some(key) => {
			let mut mac = HmacMd5::new(key)?;
			let mut reader = BufReader::with_capacity(buffer_len.max(1), reader);
			loop {
				let chunk = reader.fill_buf()?;
				if chunk.is_empty() {
					break;
				}
				let n = chunk.len();
				mac.update(chunk)?;
				reader.consume(n);
			}
			Ok(mac.finalize())
		}
		None => {
			let (output, n) = digest_reader(reader, buffer_len)?;
			debug!(bytes = n, "hashed stream");
			Ok(output)
		}
	}
}

fn run(args: Args) -> Result<bool> {
	let buffer_len = match args.buffer_len {
		Some(len) => len,
		None => get_read_buffer_len()?.unwrap_or(DEFAULT_BUFFER_LEN),
	};
	if buffer_len == 0 {
		bail!("read buffer size must be positive");
	}
	let uppercase = boolean_env_flag_set("DIGESTKIT_UPPERCASE");
	let hmac_key = args.hmac_key.as_deref();

	let mut results = Vec::new();
	if let Some(text) = &args.string {
		let output = match hmac_key {
			Some(key) => digestkit_md5::hmac(key, text.as_str())?,
			None => digestkit_md5::digest(text.as_str())?,
		};
		results.push((format!("{text:?}"), output));
	} else if args.files.is_empty() {
		results.push(("-".to_owned(), hash_stream(io::stdin().lock(), hmac_key, buffer_len)?));
	} else {
		for path in &args.files {
			let output = if path.as_os_str() == "-" {
				hash_stream(io::stdin().lock(), hmac_key, buffer_len)?
			} else {
				let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
				hash_stream(file, hmac_key, buffer_len)
					.with_context(|| format!("failed to hash {}", path.display()))?
			};
			results.push((path.display().to_string(), output));
		}
	}

	let mut all_match = true;
	for (name, output) in &results {
		println!("{}  {}", encode(output, args.format, uppercase), name);
		if let Some(expected) = &args.check {
			if output != expected {
				warn!(%name, %expected, actual = %output, "digest mismatch");
				all_match = false;
			}
		}
	}
	Ok(all_match)
}

fn main() -> ExitCode {
	init_tracing();

	let args = Args::parse();
	match run(args) {
		Ok(true) => ExitCode::SUCCESS,
		Ok(false) => ExitCode::FAILURE,
		Err(err) => {
			eprintln!("md5sum: {err:#}");
			ExitCode::from(2)
		}
	}
}
