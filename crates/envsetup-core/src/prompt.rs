// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Contract for the interactive collaborator and the driver that feeds its
//! answers into a [`Workflow`].

use crate::diff::ChangeRecord;
use crate::field::{ConfigMap, InputField};
use crate::persistence::Persistence;
use crate::workflow::{Confirmation, Workflow, WorkflowState};
use crate::PromptError;

/// Result of the input form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
	Completed(ConfigMap),
	Aborted,
}

/// Something that can ask the user for values and for confirmation.
pub trait Prompter {
	/// Show the prefilled fields and wait until the user finishes or aborts.
	fn collect(&mut self, fields: &[InputField]) -> Result<FormOutcome, PromptError>;

	/// Show the pending changes and ask whether to save them.
	fn confirm(&mut self, changes: &[ChangeRecord]) -> Result<Confirmation, PromptError>;
}

/// Drive `workflow` to a terminal state. A prompt error counts as a cancel
/// at the point where it happened.
pub fn run<P, R>(workflow: &mut Workflow<P>, prompter: &mut R) -> WorkflowState
where
	P: Persistence,
	R: Prompter + ?Sized,
{
	if *workflow.state() == WorkflowState::Collecting {
		match prompter.collect(&workflow.input_fields()) {
			Ok(FormOutcome::Completed(values)) => {
				workflow.complete_form(values);
			}
			Ok(FormOutcome::Aborted) => {
				workflow.cancel();
			}
			Err(e) => {
				tracing::error!(error = %e, "input prompt failed");
				workflow.cancel();
			}
		}
	}

	if *workflow.state() == WorkflowState::Reviewing {
		let answer = match prompter.confirm(workflow.changes()) {
			Ok(answer) => answer,
			Err(e) => {
				tracing::error!(error = %e, "confirmation prompt failed");
				Confirmation::Aborted
			}
		};
		workflow.review(answer);
	}

	workflow.state().clone()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::persistence::FsPersistence;
	use crate::ConfigPaths;
	use tempfile::TempDir;

	struct Scripted {
		form: Option<FormOutcome>,
		confirmation: Option<Confirmation>,
		seen_changes: Vec<ChangeRecord>,
	}

	impl Prompter for Scripted {
		fn collect(&mut self, _fields: &[InputField]) -> Result<FormOutcome, PromptError> {
			self
				.form
				.take()
				.ok_or_else(|| scripted_error("form asked twice"))
		}

		fn confirm(&mut self, changes: &[ChangeRecord]) -> Result<Confirmation, PromptError> {
			self.seen_changes = changes.to_vec();
			self
				.confirmation
				.take()
				.ok_or_else(|| scripted_error("no confirmation scripted"))
		}
	}

	fn scripted_error(message: &str) -> PromptError {
		std::io::Error::new(std::io::ErrorKind::Other, message.to_string()).into()
	}

	fn workflow(dir: &TempDir, template: &str) -> Workflow<FsPersistence> {
		let paths = ConfigPaths::in_dir(dir.path()).unwrap();
		std::fs::write(&paths.template, template).unwrap();
		Workflow::load(FsPersistence, paths)
	}

	#[test]
	fn test_prompt_error_during_collection_aborts() {
		let dir = TempDir::new().unwrap();
		let mut wf = workflow(&dir, "A=1");
		let mut prompter = Scripted {
			form: None,
			confirmation: None,
			seen_changes: Vec::new(),
		};
		assert_eq!(run(&mut wf, &mut prompter), WorkflowState::Aborted);
		assert!(!dir.path().join(".env").exists());
	}

	#[test]
	fn test_prompt_error_during_review_aborts() {
		let dir = TempDir::new().unwrap();
		let mut wf = workflow(&dir, "A=1");
		let mut prompter = Scripted {
			form: Some(FormOutcome::Completed(
				[("A".to_string(), "1".to_string())].into_iter().collect(),
			)),
			confirmation: None,
			seen_changes: Vec::new(),
		};
		assert_eq!(run(&mut wf, &mut prompter), WorkflowState::Aborted);
		assert_eq!(prompter.seen_changes.len(), 1);
		assert!(!dir.path().join(".env").exists());
	}

	#[test]
	fn test_failed_load_never_prompts() {
		let dir = TempDir::new().unwrap();
		let paths = ConfigPaths::in_dir(dir.path()).unwrap();
		let mut wf = Workflow::load(FsPersistence, paths);
		let mut prompter = Scripted {
			form: None,
			confirmation: None,
			seen_changes: Vec::new(),
		};
		assert!(matches!(
			run(&mut wf, &mut prompter),
			WorkflowState::Failed(_)
		));
	}
}
