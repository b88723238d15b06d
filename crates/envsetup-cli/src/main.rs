// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

mod args;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use envsetup_core::{run, FsPersistence, Workflow};
use envsetup_tui::TuiPrompter;
use tracing_subscriber::EnvFilter;

use args::Args;

fn main() -> Result<()> {
	let args = Args::parse();

	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_new(&args.log_level).unwrap_or_else(|_| EnvFilter::new("warn")),
		)
		.with_writer(std::io::stderr)
		.init();

	let paths = args.paths().context("failed to resolve config paths")?;
	let mut prompter = TuiPrompter::new(paths.target_name());
	let mut workflow = Workflow::load(FsPersistence, paths);

	let state = run(&mut workflow, &mut prompter);
	tracing::info!(state = ?state, "workflow finished");

	let report = report::build(&workflow);
	report.print();

	if report.exit_code != 0 {
		std::process::exit(report.exit_code);
	}
	Ok(())
}
