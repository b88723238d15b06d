// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Single-line editing on a `String` with a char-indexed cursor.

use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineCursor {
	pos: usize,
}

impl LineCursor {
	/// Cursor placed after the last character of `text`.
	pub fn at_end(text: &str) -> Self {
		Self {
			pos: text.chars().count(),
		}
	}

	pub fn position(&self) -> usize {
		self.pos
	}

	pub fn insert(&mut self, text: &mut String, ch: char) {
		let idx = byte_index(text, self.pos);
		text.insert(idx, ch);
		self.pos += 1;
	}

	pub fn backspace(&mut self, text: &mut String) {
		if self.pos == 0 {
			return;
		}
		self.pos -= 1;
		let idx = byte_index(text, self.pos);
		text.remove(idx);
	}

	pub fn delete(&mut self, text: &mut String) {
		if self.pos < text.chars().count() {
			let idx = byte_index(text, self.pos);
			text.remove(idx);
		}
	}

	pub fn left(&mut self) {
		self.pos = self.pos.saturating_sub(1);
	}

	pub fn right(&mut self, text: &str) {
		self.pos = (self.pos + 1).min(text.chars().count());
	}

	pub fn home(&mut self) {
		self.pos = 0;
	}

	pub fn end(&mut self, text: &str) {
		self.pos = text.chars().count();
	}

	pub fn clear(&mut self, text: &mut String) {
		text.clear();
		self.pos = 0;
	}

	/// Display columns between the start of `text` and the cursor.
	pub fn column(&self, text: &str) -> usize {
		UnicodeWidthStr::width(&text[..byte_index(text, self.pos)])
	}
}

fn byte_index(text: &str, char_pos: usize) -> usize {
	text
		.char_indices()
		.nth(char_pos)
		.map(|(i, _)| i)
		.unwrap_or(text.len())
}
