// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::io;
use std::time::Duration;

use crossterm::cursor::Show;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
	disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::{Frame, Terminal};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// A single interactive screen driven by [`run_screen`].
pub trait Screen {
	fn render(&self, frame: &mut Frame);
	fn on_key(&mut self, key: KeyEvent);
	fn is_finished(&self) -> bool;
}

/// Raw mode plus alternate screen for the lifetime of the guard. Dropping it
/// restores the terminal even when the screen loop bails out early.
pub struct TerminalGuard;

impl TerminalGuard {
	pub fn enter() -> io::Result<Self> {
		enable_raw_mode()?;
		if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
			let _ = disable_raw_mode();
			return Err(e);
		}
		Ok(Self)
	}
}

impl Drop for TerminalGuard {
	fn drop(&mut self) {
		let _ = disable_raw_mode();
		let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
	}
}

/// Draw `screen` and feed it key presses until it reports completion.
pub fn run_screen<S: Screen>(screen: &mut S) -> io::Result<()> {
	let _guard = TerminalGuard::enter()?;
	let backend = CrosstermBackend::new(io::stdout());
	let mut terminal = Terminal::new(backend)?;
	terminal.clear()?;

	loop {
		terminal.draw(|frame| screen.render(frame))?;

		if screen.is_finished() {
			break;
		}

		if event::poll(POLL_INTERVAL)? {
			if let Event::Key(key) = event::read()? {
				if key.kind == KeyEventKind::Press {
					screen.on_key(key);
				}
			}
		}
	}

	tracing::debug!("screen finished, restoring terminal");
	Ok(())
}
