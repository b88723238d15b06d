// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Turns a finished workflow into the lines shown once the terminal is back
//! to normal, plus the process exit status.

use envsetup_core::{AbortCause, BackupOutcome, Persistence, Workflow, WorkflowState};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Report {
	pub stdout: Vec<String>,
	pub stderr: Vec<String>,
	pub exit_code: i32,
}

impl Report {
	pub fn print(&self) {
		for line in &self.stderr {
			eprintln!("{line}");
		}
		for line in &self.stdout {
			println!("{line}");
		}
	}
}

pub fn build<P: Persistence>(workflow: &Workflow<P>) -> Report {
	let mut report = Report::default();
	let target = workflow.paths().target_name();

	for warning in workflow.warnings() {
		report.stderr.push(format!("Warning: {warning}"));
	}

	match workflow.state() {
		WorkflowState::Done if workflow.changes().is_empty() => {
			report
				.stdout
				.push(format!("No changes to apply to {target} file."));
		}
		WorkflowState::Done => {
			if let Some(BackupOutcome::Created(backup)) = workflow.backup_outcome() {
				report.stdout.push(format!(
					"Backed up existing {target} to {}.",
					backup.display()
				));
			}
			report
				.stdout
				.push(format!("Successfully updated the {target} file!"));
		}
		WorkflowState::Aborted => {
			let line = match workflow.abort_cause() {
				Some(AbortCause::ReviewDeclined) => "Changes discarded by user.",
				Some(AbortCause::ReviewCancelled) => "Save operation cancelled by user.",
				Some(AbortCause::CollectionCancelled) | None => "Operation cancelled by user.",
			};
			report.stdout.push(line.to_string());
		}
		WorkflowState::Failed(failure) => {
			report.stderr.push(failure.to_string());
			if failure.is_template_failure() {
				report.exit_code = 1;
			}
		}
		WorkflowState::Collecting | WorkflowState::Reviewing | WorkflowState::Committing => {
			tracing::debug!(state = ?workflow.state(), "workflow left unfinished");
			report.stdout.push("Operation cancelled by user.".to_string());
		}
	}

	report
}
