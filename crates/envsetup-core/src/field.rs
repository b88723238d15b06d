// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Template fields and the editable inputs built from them.

use std::collections::HashMap;

/// Key to value mapping for either the persisted or the newly collected
/// configuration.
pub type ConfigMap = HashMap<String, String>;

/// One key declared by the template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
	pub key: String,
	pub description: Option<String>,
	/// `None` when the template leaves the value out or bare-empty.
	pub default_value: Option<String>,
}

impl FieldSpec {
	pub fn new(key: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			description: None,
			default_value: None,
		}
	}

	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	pub fn default_value(mut self, value: impl Into<String>) -> Self {
		self.default_value = Some(value.into());
		self
	}

	/// Value shown to the user first: a non-empty persisted value, then the
	/// template default, then the empty string.
	pub fn initial_value(&self, existing: &ConfigMap) -> String {
		match existing.get(&self.key) {
			Some(value) if !value.is_empty() => value.clone(),
			_ => self.default_value.clone().unwrap_or_default(),
		}
	}
}

/// A single-line text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInput {
	key: String,
	description: Option<String>,
	value: String,
}

impl TextInput {
	pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			description: None,
			value: value.into(),
		}
	}

	pub fn with_description(mut self, description: Option<String>) -> Self {
		self.description = description;
		self
	}
}

/// An input shown to the user. Text is the only kind the workflow uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputField {
	Text(TextInput),
}

impl InputField {
	/// Prefilled text input for `spec`.
	pub fn from_spec(spec: &FieldSpec, existing: &ConfigMap) -> Self {
		InputField::Text(
			TextInput::new(spec.key.clone(), spec.initial_value(existing))
				.with_description(spec.description.clone()),
		)
	}

	pub fn key(&self) -> &str {
		match self {
			InputField::Text(input) => &input.key,
		}
	}

	pub fn description(&self) -> Option<&str> {
		match self {
			InputField::Text(input) => input.description.as_deref(),
		}
	}

	pub fn current_value(&self) -> &str {
		match self {
			InputField::Text(input) => &input.value,
		}
	}

	pub fn value_mut(&mut self) -> &mut String {
		match self {
			InputField::Text(input) => &mut input.value,
		}
	}

	pub fn set_value(&mut self, value: impl Into<String>) {
		*self.value_mut() = value.into();
	}
}

/// Read the current value of every field into a map.
pub fn collect_values(fields: &[InputField]) -> ConfigMap {
	fields
		.iter()
		.map(|f| (f.key().to_string(), f.current_value().to_string()))
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn existing(pairs: &[(&str, &str)]) -> ConfigMap {
		pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect()
	}

	#[test]
	fn test_initial_value_prefers_existing() {
		let spec = FieldSpec::new("A").default_value("1");
		assert_eq!(spec.initial_value(&existing(&[("A", "old")])), "old");
	}

	#[test]
	fn test_initial_value_skips_empty_existing() {
		let spec = FieldSpec::new("A").default_value("1");
		assert_eq!(spec.initial_value(&existing(&[("A", "")])), "1");
	}

	#[test]
	fn test_initial_value_falls_back_to_empty() {
		let spec = FieldSpec::new("A");
		assert_eq!(spec.initial_value(&existing(&[("A", "")])), "");
		assert_eq!(spec.initial_value(&ConfigMap::new()), "");
	}

	#[test]
	fn test_input_field_carries_description() {
		let spec = FieldSpec::new("PORT").description("listen port").default_value("8080");
		let field = InputField::from_spec(&spec, &ConfigMap::new());
		assert_eq!(field.key(), "PORT");
		assert_eq!(field.description(), Some("listen port"));
		assert_eq!(field.current_value(), "8080");
	}

	#[test]
	fn test_collect_values_reads_edits() {
		let mut fields = vec![
			InputField::Text(TextInput::new("A", "1")),
			InputField::Text(TextInput::new("B", "2")),
		];
		fields[1].set_value("two");
		fields[0].value_mut().push('0');

		let values = collect_values(&fields);
		assert_eq!(values.get("A").map(String::as_str), Some("10"));
		assert_eq!(values.get("B").map(String::as_str), Some("two"));
	}
}
