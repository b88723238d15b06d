// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! File I/O boundary: read the template and the existing target, back the
//! target up, write the new one.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use crate::codec::encode_entry;

/// What currently sits at the target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
	Missing,
	File,
	Directory,
}

/// Storage used by the workflow. [`FsPersistence`] is the real one; tests
/// substitute failing implementations.
pub trait Persistence {
	/// Read a whole text file. Invalid UTF-8 is replaced, not rejected.
	fn read(&self, path: &Path) -> io::Result<String>;

	/// Inspect the target before a backup.
	fn inspect(&self, path: &Path) -> io::Result<TargetKind>;

	/// Byte-for-byte copy of `source` to `backup`, flushed to disk.
	fn backup(&self, source: &Path, backup: &Path) -> io::Result<()>;

	/// Truncate-and-create `path` with one encoded line per entry.
	fn write(&self, path: &Path, entries: &[(&str, &str)]) -> io::Result<()>;
}

/// Local filesystem storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsPersistence;

impl Persistence for FsPersistence {
	fn read(&self, path: &Path) -> io::Result<String> {
		let bytes = fs::read(path)?;
		Ok(String::from_utf8_lossy(&bytes).into_owned())
	}

	fn inspect(&self, path: &Path) -> io::Result<TargetKind> {
		match fs::metadata(path) {
			Ok(meta) if meta.is_dir() => Ok(TargetKind::Directory),
			Ok(_) => Ok(TargetKind::File),
			Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(TargetKind::Missing),
			Err(e) => Err(e),
		}
	}

	fn backup(&self, source: &Path, backup: &Path) -> io::Result<()> {
		let mut reader = File::open(source)?;
		let mut writer = File::create(backup)?;
		let copied = io::copy(&mut reader, &mut writer)?;
		writer.sync_all()?;

		tracing::debug!(
				source = %source.display(),
				backup = %backup.display(),
				bytes = copied,
				"backed up target file"
		);
		Ok(())
	}

	fn write(&self, path: &Path, entries: &[(&str, &str)]) -> io::Result<()> {
		// Render everything first so the file sees a single write.
		let contents: String = entries
			.iter()
			.map(|(key, value)| encode_entry(key, value))
			.collect();

		let mut file = File::create(path)?;
		file.write_all(contents.as_bytes())?;
		file.sync_all()?;

		tracing::debug!(path = %path.display(), entries = entries.len(), "wrote target file");
		Ok(())
	}
}
