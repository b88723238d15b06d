// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::path::PathBuf;

use clap::Parser;
use envsetup_core::paths::{DEFAULT_TARGET, DEFAULT_TEMPLATE};
use envsetup_core::{ConfigPaths, PathError};

/// Fill in a .env file from the keys declared in .env.example
#[derive(Parser, Debug)]
#[command(name = "envsetup", version)]
pub struct Args {
	/// Directory that relative template and target paths are resolved against
	#[arg(long, env = "ENVSETUP_DIR")]
	pub dir: Option<PathBuf>,

	/// Template declaring the expected keys
	#[arg(long, env = "ENVSETUP_TEMPLATE", default_value = DEFAULT_TEMPLATE)]
	pub template: PathBuf,

	/// File to create or update
	#[arg(long, env = "ENVSETUP_TARGET", default_value = DEFAULT_TARGET)]
	pub target: PathBuf,

	/// Log filter, e.g. `debug` or `envsetup_core=trace`
	#[arg(long, env = "ENVSETUP_LOG", default_value = "warn")]
	pub log_level: String,
}

impl Args {
	pub fn paths(&self) -> Result<ConfigPaths, PathError> {
		match &self.dir {
			Some(dir) => ConfigPaths::resolve(dir, &self.template, &self.target),
			None => ConfigPaths::resolve_in_current_dir(&self.template, &self.target),
		}
	}
}
