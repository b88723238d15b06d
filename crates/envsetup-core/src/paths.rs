// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Resolution of the template, target and backup file locations.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::PathError;

/// Default template file name.
pub const DEFAULT_TEMPLATE: &str = ".env.example";

/// Default target file name.
pub const DEFAULT_TARGET: &str = ".env";

/// Suffix appended to the target file name to form the backup path.
pub const BACKUP_SUFFIX: &str = ".old";

/// The three files the workflow touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
	/// Template declaring the expected keys: `.env.example`
	pub template: PathBuf,
	/// File being created or updated: `.env`
	pub target: PathBuf,
	/// Sidecar copy of the previous target: `.env.old`
	pub backup: PathBuf,
}

impl ConfigPaths {
	/// Build paths for an explicit template and target. The backup sits next
	/// to the target.
	pub fn new(template: impl Into<PathBuf>, target: impl Into<PathBuf>) -> Result<Self, PathError> {
		let target = target.into();
		let backup = backup_path_for(&target)?;
		Ok(Self {
			template: template.into(),
			target,
			backup,
		})
	}

	/// Default file names inside `dir`.
	pub fn in_dir(dir: &Path) -> Result<Self, PathError> {
		Self::new(dir.join(DEFAULT_TEMPLATE), dir.join(DEFAULT_TARGET))
	}

	/// Resolve possibly-relative template and target paths against `dir`.
	pub fn resolve(dir: &Path, template: &Path, target: &Path) -> Result<Self, PathError> {
		let paths = Self::new(dir.join(template), dir.join(target))?;

		tracing::debug!(
			template = %paths.template.display(),
			env_file = %paths.target.display(),
			backup = %paths.backup.display(),
			"resolved config paths"
		);

		Ok(paths)
	}

	/// Resolve against the current working directory.
	pub fn resolve_in_current_dir(template: &Path, target: &Path) -> Result<Self, PathError> {
		let cwd = std::env::current_dir().map_err(PathError::CurrentDir)?;
		Self::resolve(&cwd, template, target)
	}

	/// File name of the target for messages, e.g. `.env`.
	pub fn target_name(&self) -> String {
		self
			.target
			.file_name()
			.map(|n| n.to_string_lossy().into_owned())
			.unwrap_or_else(|| self.target.display().to_string())
	}
}

/// Sidecar backup path: `<dir>/<file name>.old`.
pub fn backup_path_for(target: &Path) -> Result<PathBuf, PathError> {
	let name = target
		.file_name()
		.ok_or_else(|| PathError::NoFileName(target.to_path_buf()))?;
	let mut backup_name = OsString::from(name);
	backup_name.push(BACKUP_SUFFIX);
	Ok(target.with_file_name(backup_name))
}
