// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct Theme {
	pub title: Style,
	pub border: Style,
	pub label: Style,
	pub label_focused: Style,
	pub description: Style,
	pub value: Style,
	pub added: Style,
	pub changed: Style,
	pub cleared: Style,
	pub button: Style,
	pub button_selected: Style,
	pub help: Style,
}

impl Theme {
	pub fn dark() -> Self {
		Self {
			title: Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
			border: Style::default().fg(Color::DarkGray),
			label: Style::default().fg(Color::White),
			label_focused: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
			description: Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
			value: Style::default().fg(Color::White),
			added: Style::default().fg(Color::Green),
			changed: Style::default().fg(Color::Yellow),
			cleared: Style::default().fg(Color::Red),
			button: Style::default().fg(Color::Gray),
			button_selected: Style::default()
				.fg(Color::Black)
				.bg(Color::Cyan)
				.add_modifier(Modifier::BOLD),
			help: Style::default().fg(Color::DarkGray),
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::dark()
	}
}
