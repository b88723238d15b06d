// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use envsetup_core::{ChangeRecord, Confirmation};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::terminal::Screen;
use crate::theme::Theme;

const QUESTION: &str = "Save these changes?";
const DISCARD_LABEL: &str = "Discard changes";
const HELP: &str = "←/→ select · y save · n discard · enter submit · esc quit";

/// Yes/no review of the pending changes. Saving is preselected.
pub struct ConfirmState {
	changes: Vec<ChangeRecord>,
	save_label: String,
	save_selected: bool,
	answer: Option<Confirmation>,
	theme: Theme,
}

impl ConfirmState {
	pub fn new(changes: Vec<ChangeRecord>, target_name: &str) -> Self {
		Self {
			changes,
			save_label: format!("Save to {target_name}"),
			save_selected: true,
			answer: None,
			theme: Theme::default(),
		}
	}

	pub fn save_selected(&self) -> bool {
		self.save_selected
	}

	pub fn answer(&self) -> Option<Confirmation> {
		self.answer
	}

	pub fn handle_key(&mut self, key: KeyEvent) {
		if self.answer.is_some() {
			return;
		}

		if key.modifiers.contains(KeyModifiers::CONTROL) {
			if key.code == KeyCode::Char('c') {
				self.answer = Some(Confirmation::Aborted);
			}
			return;
		}

		match key.code {
			KeyCode::Esc => self.answer = Some(Confirmation::Aborted),
			KeyCode::Left
			| KeyCode::Right
			| KeyCode::Tab
			| KeyCode::BackTab
			| KeyCode::Char('h')
			| KeyCode::Char('l') => self.save_selected = !self.save_selected,
			KeyCode::Char('y') | KeyCode::Char('Y') => self.answer = Some(Confirmation::Confirmed),
			KeyCode::Char('n') | KeyCode::Char('N') => self.answer = Some(Confirmation::Declined),
			KeyCode::Enter => {
				self.answer = Some(if self.save_selected {
					Confirmation::Confirmed
				} else {
					Confirmation::Declined
				});
			}
			_ => {}
		}
	}

	fn change_style(&self, change: &ChangeRecord) -> Style {
		match change {
			ChangeRecord::Added { .. } => self.theme.added,
			ChangeRecord::Changed { .. } => self.theme.changed,
			ChangeRecord::Cleared { .. } => self.theme.cleared,
		}
	}

	fn button<'a>(&self, label: &'a str, selected: bool) -> Span<'a> {
		let style = if selected {
			self.theme.button_selected
		} else {
			self.theme.button
		};
		Span::styled(format!(" {label} "), style)
	}

	fn render_review(&self, frame: &mut Frame, area: Rect) {
		let block = Block::default()
			.borders(Borders::ALL)
			.border_style(self.theme.border)
			.title(Span::styled(" Review ", self.theme.title));
		let inner = block.inner(area);
		frame.render_widget(block, area);

		let chunks = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Min(1),
				Constraint::Length(3),
				Constraint::Length(1),
			])
			.split(inner);

		let mut lines = vec![Line::from(Span::styled("Proposed changes:", self.theme.label))];
		lines.extend(
			self
				.changes
				.iter()
				.map(|c| Line::from(Span::styled(c.to_string(), self.change_style(c)))),
		);
		frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), chunks[0]);

		let prompt = vec![
			Line::from(Span::styled(QUESTION, self.theme.label_focused)),
			Line::default(),
			Line::from(vec![
				self.button(&self.save_label, self.save_selected),
				Span::raw("  "),
				self.button(DISCARD_LABEL, !self.save_selected),
			]),
		];
		frame.render_widget(Paragraph::new(prompt), chunks[1]);

		frame.render_widget(
			Paragraph::new(Line::from(Span::styled(HELP, self.theme.help))),
			chunks[2],
		);
	}
}

impl Screen for ConfirmState {
	fn render(&self, frame: &mut Frame) {
		let area = frame.area();
		self.render_review(frame, area);
	}

	fn on_key(&mut self, key: KeyEvent) {
		self.handle_key(key);
	}

	fn is_finished(&self) -> bool {
		self.answer.is_some()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	fn confirm() -> ConfirmState {
		ConfirmState::new(
			vec![ChangeRecord::Added {
				key: "A".into(),
				new_value: "1".into(),
			}],
			".env",
		)
	}

	#[test]
	fn test_enter_defaults_to_save() {
		let mut state = confirm();
		assert!(state.save_selected());
		state.handle_key(key(KeyCode::Enter));
		assert_eq!(state.answer(), Some(Confirmation::Confirmed));
	}

	#[test]
	fn test_toggle_then_enter_declines() {
		let mut state = confirm();
		state.handle_key(key(KeyCode::Right));
		assert!(!state.save_selected());
		state.handle_key(key(KeyCode::Enter));
		assert_eq!(state.answer(), Some(Confirmation::Declined));
	}

	#[test]
	fn test_double_toggle_returns_to_save() {
		let mut state = confirm();
		state.handle_key(key(KeyCode::Char('l')));
		state.handle_key(key(KeyCode::Char('h')));
		assert!(state.save_selected());
	}

	#[test]
	fn test_shortcuts() {
		let mut yes = confirm();
		yes.handle_key(key(KeyCode::Char('y')));
		assert_eq!(yes.answer(), Some(Confirmation::Confirmed));

		let mut no = confirm();
		no.handle_key(key(KeyCode::Char('n')));
		assert_eq!(no.answer(), Some(Confirmation::Declined));
	}

	#[test]
	fn test_escape_and_ctrl_c_abort() {
		let mut esc = confirm();
		esc.handle_key(key(KeyCode::Esc));
		assert_eq!(esc.answer(), Some(Confirmation::Aborted));

		let mut ctrl_c = confirm();
		ctrl_c.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
		assert_eq!(ctrl_c.answer(), Some(Confirmation::Aborted));
	}

	#[test]
	fn test_first_answer_sticks() {
		let mut state = confirm();
		state.handle_key(key(KeyCode::Char('n')));
		state.handle_key(key(KeyCode::Char('y')));
		assert_eq!(state.answer(), Some(Confirmation::Declined));
		assert!(state.is_finished());
	}
}
