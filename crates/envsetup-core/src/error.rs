// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error and warning types for the setup workflow.

use std::path::{Path, PathBuf};

/// Fatal conditions that end the workflow in `Failed`.
///
/// Messages are kept as strings so the failure can live inside
/// [`WorkflowState`](crate::WorkflowState) and be compared in tests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Failure {
	/// Template file could not be read
	#[error("Error reading {}: {message}. Please create one to use as a template.", .path.display())]
	TemplateNotFound { path: PathBuf, message: String },

	/// Template parsed to zero fields
	#[error("No configuration keys found in {}.", .path.display())]
	TemplateEmpty { path: PathBuf },

	/// Target file could not be written
	#[error("Error writing {}: {message}", .path.display())]
	WriteError { path: PathBuf, message: String },
}

impl Failure {
	pub fn template_not_found(path: &Path, err: &std::io::Error) -> Self {
		Self::TemplateNotFound {
			path: path.to_path_buf(),
			message: err.to_string(),
		}
	}

	pub fn template_empty(path: &Path) -> Self {
		Self::TemplateEmpty {
			path: path.to_path_buf(),
		}
	}

	pub fn write_error(path: &Path, err: &std::io::Error) -> Self {
		Self::WriteError {
			path: path.to_path_buf(),
			message: err.to_string(),
		}
	}

	/// Whether this failure happened while loading the template.
	pub fn is_template_failure(&self) -> bool {
		matches!(
			self,
			Self::TemplateNotFound { .. } | Self::TemplateEmpty { .. }
		)
	}
}

/// Recoverable conditions. They are logged when they happen and kept on the
/// workflow so they can be reported once the terminal is restored.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Warning {
	#[error("could not read existing {} to prefill: {message}", .path.display())]
	ExistingConfigRead { path: PathBuf, message: String },

	#[error("failed to back up {}: {message}", .path.display())]
	Backup { path: PathBuf, message: String },

	#[error("{} exists but is a directory, skipping backup", .path.display())]
	TargetIsDirectory { path: PathBuf },
}

/// Errors raised by a prompt collaborator.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
	#[error("terminal error: {0}")]
	Terminal(#[from] std::io::Error),
}

/// Failure to work out where the configuration files live.
#[derive(Debug, thiserror::Error)]
pub enum PathError {
	#[error("could not determine current directory: {0}")]
	CurrentDir(#[source] std::io::Error),

	#[error("target path has no file name: {}", .0.display())]
	NoFileName(PathBuf),
}
