// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Line codec for template and configuration files.
//!
//! Template grammar: `KEY[=[VALUE]][ #DESCRIPTION]`. Configuration grammar:
//! `KEY=VALUE`. In both, blank lines and lines starting with `#` are ignored
//! and `VALUE` may be bare or double-quoted with `\\` and `\"` escapes.
//!
//! Decoding un-escapes `\\` before `\"`, so in hand-written input an escaped
//! backslash followed by a bare quote (`"\\""`) reads back as a lone quote and
//! re-encodes differently. `\n` and `\r` written by [`encode_entry`] are not
//! un-escaped either. Both are kept as-is until the intended semantics are
//! settled.

use crate::field::{ConfigMap, FieldSpec};

/// Characters that force a value to be written quoted.
const QUOTE_TRIGGERS: &[char] = &[' ', '#', '=', '"', '$', '\\', '`', '\n', '\r'];

/// Parse one template line. Returns `None` for blank, comment and malformed
/// (empty key) lines.
pub fn decode_template_line(line: &str) -> Option<FieldSpec> {
	let line = line.trim();
	if is_skipped(line) {
		return None;
	}

	let (assignment, description) = match line.split_once('#') {
		Some((assignment, description)) => (assignment.trim(), Some(description.trim())),
		None => (line, None),
	};

	let (key, value) = match assignment.split_once('=') {
		Some((key, value)) => (key.trim(), Some(value.trim())),
		None => (assignment.trim(), None),
	};
	if key.is_empty() {
		return None;
	}

	// A bare empty value means "no default"; a quoted empty value is an
	// explicit empty default.
	let default_value = value.and_then(|value| {
		if is_quoted(value) {
			Some(unquote(value))
		} else if !value.is_empty() {
			Some(value.to_string())
		} else {
			None
		}
	});

	let mut spec = FieldSpec::new(key);
	if let Some(description) = description.filter(|d| !d.is_empty()) {
		spec = spec.description(description);
	}
	if let Some(value) = default_value {
		spec = spec.default_value(value);
	}
	Some(spec)
}

/// Parse one configuration line into `(key, value)`. Lines without `=` or
/// with an empty key are skipped.
pub fn decode_config_line(line: &str) -> Option<(String, String)> {
	let line = line.trim();
	if is_skipped(line) {
		return None;
	}

	let (key, value) = line.split_once('=')?;
	let key = key.trim();
	if key.is_empty() {
		return None;
	}

	let value = if is_quoted(value) {
		unquote(value)
	} else {
		value.to_string()
	};

	Some((key.to_string(), value))
}

/// Render `key=value` with a trailing newline, quoting when required.
pub fn encode_entry(key: &str, value: &str) -> String {
	if needs_quoting(value) {
		format!("{key}=\"{}\"\n", escape(value))
	} else {
		format!("{key}={value}\n")
	}
}

/// Whether [`encode_entry`] would quote `value`.
pub fn needs_quoting(value: &str) -> bool {
	value.is_empty() || value.contains(QUOTE_TRIGGERS)
}

/// Parse a whole template, keeping declaration order.
pub fn decode_template(text: &str) -> Vec<FieldSpec> {
	text.lines().filter_map(decode_template_line).collect()
}

/// Parse a whole configuration file. Later duplicates win.
pub fn decode_config(text: &str) -> ConfigMap {
	text.lines().filter_map(decode_config_line).collect()
}

fn is_skipped(trimmed: &str) -> bool {
	trimmed.is_empty() || trimmed.starts_with('#')
}

fn is_quoted(value: &str) -> bool {
	value.len() >= 2 && value.starts_with('"') && value.ends_with('"')
}

fn unquote(value: &str) -> String {
	value[1..value.len() - 1]
		.replace("\\\\", "\\")
		.replace("\\\"", "\"")
}

fn escape(value: &str) -> String {
	value
		.replace('\\', "\\\\")
		.replace('"', "\\\"")
		.replace('\n', "\\n")
		.replace('\r', "\\r")
}
