// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The input form: one text input per template key, prefilled.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use envsetup_core::{collect_values, FormOutcome, InputField};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::editor::LineCursor;
use crate::terminal::Screen;
use crate::theme::Theme;

const VALUE_PREFIX: &str = "  > ";
const HELP: &str = "enter/tab next · shift+tab prev · ctrl+u clear · esc quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
	Editing,
	Completed,
	Aborted,
}

pub struct FormState {
	title: String,
	fields: Vec<InputField>,
	cursors: Vec<LineCursor>,
	focused: usize,
	status: FormStatus,
	theme: Theme,
}

impl FormState {
	pub fn new(fields: Vec<InputField>, target_name: &str) -> Self {
		let cursors = fields
			.iter()
			.map(|f| LineCursor::at_end(f.current_value()))
			.collect();
		Self {
			title: format!("Setup your {target_name} values"),
			fields,
			cursors,
			focused: 0,
			status: FormStatus::Editing,
			theme: Theme::default(),
		}
	}

	pub fn status(&self) -> FormStatus {
		self.status
	}

	pub fn focused(&self) -> usize {
		self.focused
	}

	pub fn fields(&self) -> &[InputField] {
		&self.fields
	}

	pub fn into_outcome(self) -> FormOutcome {
		match self.status {
			FormStatus::Completed => FormOutcome::Completed(collect_values(&self.fields)),
			FormStatus::Editing | FormStatus::Aborted => FormOutcome::Aborted,
		}
	}

	pub fn handle_key(&mut self, key: KeyEvent) {
		if self.status != FormStatus::Editing {
			return;
		}

		if key.modifiers.contains(KeyModifiers::CONTROL) {
			match key.code {
				KeyCode::Char('c') => self.status = FormStatus::Aborted,
				KeyCode::Char('u') => self.edit(|cursor, value| cursor.clear(value)),
				_ => {}
			}
			return;
		}

		match key.code {
			KeyCode::Esc => self.status = FormStatus::Aborted,
			KeyCode::Enter | KeyCode::Tab | KeyCode::Down => self.next(),
			KeyCode::BackTab | KeyCode::Up => self.prev(),
			KeyCode::Backspace => self.edit(|cursor, value| cursor.backspace(value)),
			KeyCode::Delete => self.edit(|cursor, value| cursor.delete(value)),
			KeyCode::Left => self.edit(|cursor, _| cursor.left()),
			KeyCode::Right => self.edit(|cursor, value| cursor.right(value)),
			KeyCode::Home => self.edit(|cursor, _| cursor.home()),
			KeyCode::End => self.edit(|cursor, value| cursor.end(value)),
			KeyCode::Char(ch) => self.edit(|cursor, value| cursor.insert(value, ch)),
			_ => {}
		}
	}

	fn next(&mut self) {
		if self.focused + 1 >= self.fields.len() {
			tracing::debug!(fields = self.fields.len(), "form completed");
			self.status = FormStatus::Completed;
		} else {
			self.focused += 1;
		}
	}

	fn prev(&mut self) {
		self.focused = self.focused.saturating_sub(1);
	}

	fn edit(&mut self, op: impl FnOnce(&mut LineCursor, &mut String)) {
		if let (Some(field), Some(cursor)) = (
			self.fields.get_mut(self.focused),
			self.cursors.get_mut(self.focused),
		) {
			op(cursor, field.value_mut());
		}
	}

	fn render_form(&self, frame: &mut Frame, area: Rect) {
		let block = Block::default()
			.borders(Borders::ALL)
			.border_style(self.theme.border)
			.title(Span::styled(format!(" {} ", self.title), self.theme.title));
		let inner = block.inner(area);
		frame.render_widget(block, area);

		let chunks = Layout::default()
			.direction(Direction::Vertical)
			.constraints([Constraint::Min(1), Constraint::Length(1)])
			.split(inner);
		let body = chunks[0];

		let mut lines = Vec::new();
		let mut focused_value_line = 0;
		for (i, field) in self.fields.iter().enumerate() {
			let focused = i == self.focused;
			let label_style = if focused {
				self.theme.label_focused
			} else {
				self.theme.label
			};
			lines.push(Line::from(Span::styled(field.key().to_string(), label_style)));
			if let Some(description) = field.description() {
				lines.push(Line::from(Span::styled(
					format!("  {description}"),
					self.theme.description,
				)));
			}
			if focused {
				focused_value_line = lines.len();
			}
			lines.push(Line::from(vec![
				Span::styled(VALUE_PREFIX, label_style),
				Span::styled(field.current_value().to_string(), self.theme.value),
			]));
			lines.push(Line::default());
		}

		let height = usize::from(body.height);
		let offset = (focused_value_line + 1).saturating_sub(height);
		let scroll = u16::try_from(offset).unwrap_or(u16::MAX);
		frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), body);

		if let (Some(field), Some(cursor)) = (
			self.fields.get(self.focused),
			self.cursors.get(self.focused),
		) {
			let column = VALUE_PREFIX.width() + cursor.column(field.current_value());
			let max_x = body.width.saturating_sub(1);
			let x = body.x + u16::try_from(column).unwrap_or(max_x).min(max_x);
			let y = body.y + u16::try_from(focused_value_line.saturating_sub(offset)).unwrap_or(0);
			frame.set_cursor_position((x, y));
		}

		frame.render_widget(
			Paragraph::new(Line::from(Span::styled(HELP, self.theme.help))),
			chunks[1],
		);
	}
}

impl Screen for FormState {
	fn render(&self, frame: &mut Frame) {
		let area = frame.area();
		self.render_form(frame, area);
	}

	fn on_key(&mut self, key: KeyEvent) {
		self.handle_key(key);
	}

	fn is_finished(&self) -> bool {
		self.status != FormStatus::Editing
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use envsetup_core::TextInput;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	fn ctrl(ch: char) -> KeyEvent {
		KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
	}

	fn form() -> FormState {
		FormState::new(
			vec![
				InputField::Text(TextInput::new("HOST", "localhost")),
				InputField::Text(
					TextInput::new("PORT", "8080").with_description(Some("listen port".into())),
				),
			],
			".env",
		)
	}

	fn type_str(form: &mut FormState, text: &str) {
		for ch in text.chars() {
			form.handle_key(key(KeyCode::Char(ch)));
		}
	}

	#[test]
	fn test_enter_on_last_field_completes() {
		let mut form = form();
		form.handle_key(key(KeyCode::Enter));
		assert_eq!(form.focused(), 1);
		assert_eq!(form.status(), FormStatus::Editing);
		form.handle_key(key(KeyCode::Enter));
		assert_eq!(form.status(), FormStatus::Completed);

		match form.into_outcome() {
			FormOutcome::Completed(values) => {
				assert_eq!(values["HOST"], "localhost");
				assert_eq!(values["PORT"], "8080");
			}
			FormOutcome::Aborted => panic!("expected completed form"),
		}
	}

	#[test]
	fn test_escape_aborts() {
		let mut form = form();
		type_str(&mut form, "xyz");
		form.handle_key(key(KeyCode::Esc));
		assert_eq!(form.status(), FormStatus::Aborted);
		assert_eq!(form.into_outcome(), FormOutcome::Aborted);
	}

	#[test]
	fn test_ctrl_c_aborts() {
		let mut form = form();
		form.handle_key(ctrl('c'));
		assert!(form.is_finished());
		assert_eq!(form.into_outcome(), FormOutcome::Aborted);
	}

	#[test]
	fn test_typing_edits_focused_field() {
		let mut form = form();
		form.handle_key(key(KeyCode::Tab));
		form.handle_key(key(KeyCode::Backspace));
		form.handle_key(key(KeyCode::Backspace));
		type_str(&mut form, "443");
		assert_eq!(form.fields()[1].current_value(), "80443");
		assert_eq!(form.fields()[0].current_value(), "localhost");
	}

	#[test]
	fn test_ctrl_u_clears_value() {
		let mut form = form();
		form.handle_key(ctrl('u'));
		assert_eq!(form.fields()[0].current_value(), "");
		type_str(&mut form, "db");
		assert_eq!(form.fields()[0].current_value(), "db");
	}

	#[test]
	fn test_home_then_insert() {
		let mut form = form();
		form.handle_key(key(KeyCode::Home));
		type_str(&mut form, "my");
		form.handle_key(key(KeyCode::End));
		type_str(&mut form, "!");
		assert_eq!(form.fields()[0].current_value(), "mylocalhost!");
	}

	#[test]
	fn test_back_navigation_stops_at_first() {
		let mut form = form();
		form.handle_key(key(KeyCode::Down));
		form.handle_key(key(KeyCode::BackTab));
		form.handle_key(key(KeyCode::Up));
		assert_eq!(form.focused(), 0);
		assert_eq!(form.status(), FormStatus::Editing);
	}

	#[test]
	fn test_keys_ignored_after_finish() {
		let mut form = form();
		form.handle_key(key(KeyCode::Esc));
		type_str(&mut form, "zz");
		assert_eq!(form.fields()[0].current_value(), "localhost");
		assert_eq!(form.status(), FormStatus::Aborted);
	}

	#[test]
	fn test_empty_form_completes_on_enter() {
		let mut form = FormState::new(Vec::new(), ".env");
		form.handle_key(key(KeyCode::Enter));
		assert_eq!(form.into_outcome(), FormOutcome::Completed(Default::default()));
	}
}
