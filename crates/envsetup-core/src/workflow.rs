// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Collect, review and commit state machine.
//!
//! ```text
//! Collecting --complete_form--> Reviewing --review(Confirmed)--> Committing --> Done
//!     |   \--(no changes)--> Done     |                              \--> Failed(WriteError)
//!     \--cancel--> Aborted            \--review(Declined | Aborted)--> Aborted
//! ```
//!
//! Loading can end in `Failed(TemplateNotFound | TemplateEmpty)` straight
//! away. All file mutation happens in `Committing`, so leaving through
//! `Aborted` never touches the disk.

use std::io;
use std::path::PathBuf;

use crate::codec::{decode_config, decode_template};
use crate::diff::{compute_changes, summarize, ChangeRecord};
use crate::field::{ConfigMap, FieldSpec, InputField};
use crate::persistence::{Persistence, TargetKind};
use crate::{ConfigPaths, Failure, Warning};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowState {
	Collecting,
	Reviewing,
	Committing,
	Done,
	Aborted,
	Failed(Failure),
}

impl WorkflowState {
	pub fn is_terminal(&self) -> bool {
		matches!(
			self,
			WorkflowState::Done | WorkflowState::Aborted | WorkflowState::Failed(_)
		)
	}
}

/// Answer from the confirmation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
	Confirmed,
	Declined,
	Aborted,
}

/// Why a workflow ended in `Aborted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortCause {
	CollectionCancelled,
	ReviewDeclined,
	ReviewCancelled,
}

/// What happened to the previous target during commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackupOutcome {
	/// No target existed.
	NotNeeded,
	Created(PathBuf),
	SkippedDirectory,
	Failed(String),
}

pub struct Workflow<P> {
	persistence: P,
	paths: ConfigPaths,
	fields: Vec<FieldSpec>,
	existing: ConfigMap,
	collected: ConfigMap,
	changes: Vec<ChangeRecord>,
	warnings: Vec<Warning>,
	backup: Option<BackupOutcome>,
	abort_cause: Option<AbortCause>,
	state: WorkflowState,
}

impl<P: Persistence> Workflow<P> {
	/// Read the template and any existing target. The result is in
	/// `Collecting`, or `Failed` when the template is unusable.
	pub fn load(persistence: P, paths: ConfigPaths) -> Self {
		let mut workflow = Self {
			persistence,
			paths,
			fields: Vec::new(),
			existing: ConfigMap::new(),
			collected: ConfigMap::new(),
			changes: Vec::new(),
			warnings: Vec::new(),
			backup: None,
			abort_cause: None,
			state: WorkflowState::Collecting,
		};

		let template = match workflow.persistence.read(&workflow.paths.template) {
			Ok(text) => text,
			Err(e) => {
				let failure = Failure::template_not_found(&workflow.paths.template, &e);
				return workflow.fail(failure);
			}
		};

		workflow.fields = dedup_keys(decode_template(&template));
		if workflow.fields.is_empty() {
			let failure = Failure::template_empty(&workflow.paths.template);
			return workflow.fail(failure);
		}

		workflow.existing = workflow.read_existing();

		tracing::info!(
				template = %workflow.paths.template.display(),
				fields = workflow.fields.len(),
				existing = workflow.existing.len(),
				"loaded template"
		);

		workflow
	}

	pub fn state(&self) -> &WorkflowState {
		&self.state
	}

	pub fn paths(&self) -> &ConfigPaths {
		&self.paths
	}

	pub fn fields(&self) -> &[FieldSpec] {
		&self.fields
	}

	/// Previously persisted values, empty when there was no target.
	pub fn existing(&self) -> &ConfigMap {
		&self.existing
	}

	pub fn changes(&self) -> &[ChangeRecord] {
		&self.changes
	}

	pub fn warnings(&self) -> &[Warning] {
		&self.warnings
	}

	pub fn backup_outcome(&self) -> Option<&BackupOutcome> {
		self.backup.as_ref()
	}

	pub fn abort_cause(&self) -> Option<AbortCause> {
		self.abort_cause
	}

	/// Prefilled inputs in template order.
	pub fn input_fields(&self) -> Vec<InputField> {
		self
			.fields
			.iter()
			.map(|spec| InputField::from_spec(spec, &self.existing))
			.collect()
	}

	/// The input collaborator finished. Moves to `Reviewing`, or to `Done`
	/// when nothing changed.
	pub fn complete_form(&mut self, values: ConfigMap) -> &WorkflowState {
		if self.state != WorkflowState::Collecting {
			tracing::debug!(state = ?self.state, "ignoring form completion");
			return &self.state;
		}

		self.collected = self
			.fields
			.iter()
			.map(|spec| {
				let value = values.get(&spec.key).cloned().unwrap_or_default();
				(spec.key.clone(), value)
			})
			.collect();
		self.changes = compute_changes(&self.existing, &self.collected, self.key_order());

		if self.changes.is_empty() {
			tracing::info!("no changes to apply");
			self.state = WorkflowState::Done;
		} else {
			tracing::info!(changes = self.changes.len(), "awaiting confirmation");
			tracing::debug!("proposed changes:\n{}", summarize(&self.changes));
			self.state = WorkflowState::Reviewing;
		}
		&self.state
	}

	/// External cancel signal. Only honoured while collecting.
	pub fn cancel(&mut self) -> &WorkflowState {
		if self.state == WorkflowState::Collecting {
			tracing::info!("collection cancelled");
			self.abort(AbortCause::CollectionCancelled);
		} else {
			tracing::debug!(state = ?self.state, "ignoring cancel");
		}
		&self.state
	}

	/// The confirmation collaborator answered. A confirmation commits
	/// straight away.
	pub fn review(&mut self, answer: Confirmation) -> &WorkflowState {
		if self.state != WorkflowState::Reviewing {
			tracing::debug!(state = ?self.state, ?answer, "ignoring review answer");
			return &self.state;
		}

		match answer {
			Confirmation::Confirmed => {
				self.state = WorkflowState::Committing;
				self.commit();
			}
			Confirmation::Declined => {
				tracing::info!("changes discarded");
				self.abort(AbortCause::ReviewDeclined);
			}
			Confirmation::Aborted => {
				tracing::info!("save cancelled");
				self.abort(AbortCause::ReviewCancelled);
			}
		}
		&self.state
	}

	fn commit(&mut self) {
		self.backup = Some(self.backup_target());

		let entries: Vec<(&str, &str)> = self
			.key_order()
			.filter_map(|key| self.collected.get_key_value(key))
			.map(|(k, v)| (k.as_str(), v.as_str()))
			.collect();

		match self.persistence.write(&self.paths.target, &entries) {
			Ok(()) => {
				tracing::info!(
						path = %self.paths.target.display(),
						entries = entries.len(),
						"updated target file"
				);
				self.state = WorkflowState::Done;
			}
			Err(e) => {
				let failure = Failure::write_error(&self.paths.target, &e);
				self.state = WorkflowState::Failed(failure);
				tracing::error!(path = %self.paths.target.display(), error = %e, "write failed");
			}
		}
	}

	fn backup_target(&mut self) -> BackupOutcome {
		let target = self.paths.target.clone();
		match self.persistence.inspect(&target) {
			Ok(TargetKind::Missing) => BackupOutcome::NotNeeded,
			Ok(TargetKind::Directory) => {
				self.warn(Warning::TargetIsDirectory { path: target });
				BackupOutcome::SkippedDirectory
			}
			Ok(TargetKind::File) => match self.persistence.backup(&target, &self.paths.backup) {
				Ok(()) => {
					tracing::info!(
							path = %target.display(),
							backup = %self.paths.backup.display(),
							"backed up existing target"
					);
					BackupOutcome::Created(self.paths.backup.clone())
				}
				Err(e) => self.backup_failed(e),
			},
			Err(e) => self.backup_failed(e),
		}
	}

	fn backup_failed(&mut self, err: io::Error) -> BackupOutcome {
		let message = err.to_string();
		self.warn(Warning::Backup {
			path: self.paths.target.clone(),
			message: message.clone(),
		});
		BackupOutcome::Failed(message)
	}

	fn read_existing(&mut self) -> ConfigMap {
		match self.persistence.read(&self.paths.target) {
			Ok(text) => decode_config(&text),
			Err(e) if e.kind() == io::ErrorKind::NotFound => ConfigMap::new(),
			Err(e) => {
				self.warn(Warning::ExistingConfigRead {
					path: self.paths.target.clone(),
					message: e.to_string(),
				});
				ConfigMap::new()
			}
		}
	}

	fn key_order(&self) -> impl Iterator<Item = &str> {
		self.fields.iter().map(|f| f.key.as_str())
	}

	fn warn(&mut self, warning: Warning) {
		tracing::warn!("{warning}");
		self.warnings.push(warning);
	}

	fn abort(&mut self, cause: AbortCause) {
		self.abort_cause = Some(cause);
		self.state = WorkflowState::Aborted;
	}

	fn fail(mut self, failure: Failure) -> Self {
		tracing::error!("{failure}");
		self.state = WorkflowState::Failed(failure);
		self
	}
}

/// Keep the first declaration of each key.
fn dedup_keys(fields: Vec<FieldSpec>) -> Vec<FieldSpec> {
	let mut seen = std::collections::HashSet::new();
	fields
		.into_iter()
		.filter(|f| {
			let first = seen.insert(f.key.clone());
			if !first {
				tracing::warn!(key = %f.key, "duplicate template key ignored");
			}
			first
		})
		.collect()
}
