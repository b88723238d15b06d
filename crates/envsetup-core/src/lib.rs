// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core of envsetup, the interactive `.env` assistant.
//!
//! This crate provides:
//! - A line codec for template (`.env.example`) and target (`.env`) files
//! - A diff engine reporting added, changed and cleared keys
//! - The collect/review/commit workflow with backup-before-overwrite
//! - A [`Prompter`] seam so the interactive layer can be swapped out

pub mod codec;
pub mod diff;
pub mod error;
pub mod field;
pub mod paths;
pub mod persistence;
pub mod prompt;
pub mod workflow;

pub use codec::{decode_config_line, decode_template_line, encode_entry};
pub use diff::{compute_changes, summarize, ChangeRecord};
pub use error::{Failure, PathError, PromptError, Warning};
pub use field::{collect_values, ConfigMap, FieldSpec, InputField, TextInput};
pub use paths::ConfigPaths;
pub use persistence::{FsPersistence, Persistence, TargetKind};
pub use prompt::{run, FormOutcome, Prompter};
pub use workflow::{AbortCause, BackupOutcome, Confirmation, Workflow, WorkflowState};
