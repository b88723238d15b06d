// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Terminal prompts for envsetup: the value form and the save confirmation.

pub mod confirm;
pub mod editor;
pub mod form;
pub mod terminal;
pub mod theme;

pub use confirm::ConfirmState;
pub use form::{FormState, FormStatus};
pub use terminal::{run_screen, Screen, TerminalGuard};
pub use theme::Theme;

use envsetup_core::{ChangeRecord, Confirmation, FormOutcome, InputField, PromptError, Prompter};

/// [`Prompter`] backed by full-screen ratatui views.
pub struct TuiPrompter {
	target_name: String,
}

impl TuiPrompter {
	pub fn new(target_name: impl Into<String>) -> Self {
		Self {
			target_name: target_name.into(),
		}
	}
}

impl Prompter for TuiPrompter {
	fn collect(&mut self, fields: &[InputField]) -> Result<FormOutcome, PromptError> {
		let mut form = FormState::new(fields.to_vec(), &self.target_name);
		run_screen(&mut form)?;
		Ok(form.into_outcome())
	}

	fn confirm(&mut self, changes: &[ChangeRecord]) -> Result<Confirmation, PromptError> {
		let mut review = ConfirmState::new(changes.to_vec(), &self.target_name);
		run_screen(&mut review)?;
		Ok(review.answer().unwrap_or(Confirmation::Aborted))
	}
}
