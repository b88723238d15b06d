// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Semantic difference between the persisted and the collected configuration.

use std::fmt;

use crate::field::ConfigMap;

/// One entry in the diff, produced in template key order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeRecord {
	Added { key: String, new_value: String },
	Changed { key: String, old_value: String, new_value: String },
	Cleared { key: String, old_value: String },
}

impl ChangeRecord {
	pub fn key(&self) -> &str {
		match self {
			ChangeRecord::Added { key, .. }
			| ChangeRecord::Changed { key, .. }
			| ChangeRecord::Cleared { key, .. } => key,
		}
	}
}

impl fmt::Display for ChangeRecord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ChangeRecord::Added { key, new_value } => write!(f, "+ Added: {key}=\"{new_value}\""),
			ChangeRecord::Changed {
				key,
				old_value,
				new_value,
			} => write!(f, "~ Changed: {key}: \"{old_value}\" -> \"{new_value}\""),
			ChangeRecord::Cleared { key, old_value } => {
				write!(f, "~ Cleared: {key} (was \"{old_value}\")")
			}
		}
	}
}

/// Compare `old` and `new` for every key in `key_order`.
///
/// A key missing from `new` counts as the empty string. Keys absent from
/// `old` are always reported as added, even when the new value is empty.
pub fn compute_changes<'a, I>(old: &ConfigMap, new: &ConfigMap, key_order: I) -> Vec<ChangeRecord>
where
	I: IntoIterator<Item = &'a str>,
{
	key_order
		.into_iter()
		.filter_map(|key| {
			let new_value = new.get(key).map(String::as_str).unwrap_or_default();
			match old.get(key) {
				None => Some(ChangeRecord::Added {
					key: key.to_string(),
					new_value: new_value.to_string(),
				}),
				Some(old_value) if old_value == new_value => None,
				Some(old_value) if new_value.is_empty() => Some(ChangeRecord::Cleared {
					key: key.to_string(),
					old_value: old_value.clone(),
				}),
				Some(old_value) => Some(ChangeRecord::Changed {
					key: key.to_string(),
					old_value: old_value.clone(),
					new_value: new_value.to_string(),
				}),
			}
		})
		.collect()
}

/// One line per change, as shown before confirmation.
pub fn summarize(changes: &[ChangeRecord]) -> String {
	changes
		.iter()
		.map(ToString::to_string)
		.collect::<Vec<_>>()
		.join("\n")
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn map(pairs: &[(&str, &str)]) -> ConfigMap {
		pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect()
	}

	#[test]
	fn test_added_keys() {
		let changes = compute_changes(&map(&[]), &map(&[("A", "1"), ("B", "")]), ["A", "B"]);
		assert_eq!(
			changes,
			vec![
				ChangeRecord::Added {
					key: "A".into(),
					new_value: "1".into()
				},
				ChangeRecord::Added {
					key: "B".into(),
					new_value: "".into()
				},
			]
		);
	}

	#[test]
	fn test_changed_and_cleared() {
		let old = map(&[("A", "old"), ("B", "present"), ("C", "same")]);
		let new = map(&[("A", "new value"), ("B", ""), ("C", "same")]);
		let changes = compute_changes(&old, &new, ["A", "B", "C"]);
		assert_eq!(
			changes,
			vec![
				ChangeRecord::Changed {
					key: "A".into(),
					old_value: "old".into(),
					new_value: "new value".into()
				},
				ChangeRecord::Cleared {
					key: "B".into(),
					old_value: "present".into()
				},
			]
		);
	}

	#[test]
	fn test_empty_old_value_left_empty_is_unchanged() {
		let changes = compute_changes(&map(&[("A", "")]), &map(&[("A", "")]), ["A"]);
		assert!(changes.is_empty());
	}

	#[test]
	fn test_order_follows_key_order() {
		let new = map(&[("Z", "1"), ("A", "2"), ("M", "3")]);
		let keys: Vec<_> = compute_changes(&map(&[]), &new, ["M", "Z", "A"])
			.iter()
			.map(|c| c.key().to_string())
			.collect();
		assert_eq!(keys, vec!["M", "Z", "A"]);
	}

	#[test]
	fn test_keys_outside_order_are_ignored() {
		let old = map(&[("EXTRA", "x")]);
		let new = map(&[("A", "1"), ("EXTRA", "y")]);
		let changes = compute_changes(&old, &new, ["A"]);
		assert_eq!(changes.len(), 1);
		assert_eq!(changes[0].key(), "A");
	}

	#[test]
	fn test_display() {
		let summary = summarize(&[
			ChangeRecord::Added {
				key: "A".into(),
				new_value: "1".into(),
			},
			ChangeRecord::Changed {
				key: "B".into(),
				old_value: "x".into(),
				new_value: "y".into(),
			},
			ChangeRecord::Cleared {
				key: "C".into(),
				old_value: "z".into(),
			},
		]);
		assert_eq!(
			summary,
			"+ Added: A=\"1\"\n~ Changed: B: \"x\" -> \"y\"\n~ Cleared: C (was \"z\")"
		);
	}

	fn config_strategy() -> impl Strategy<Value = ConfigMap> {
		prop::collection::hash_map("[A-E]", "[a-c]{0,2}", 0..5)
	}

	proptest! {
		/// Comparing a configuration with itself yields nothing.
		#[test]
		fn identical_maps_have_no_changes(old in config_strategy()) {
			let order: Vec<String> = old.keys().cloned().collect();
			let changes = compute_changes(&old, &old, order.iter().map(String::as_str));
			prop_assert!(changes.is_empty());
		}

		/// The same inputs always give the same sequence.
		#[test]
		fn output_is_deterministic(old in config_strategy(), new in config_strategy()) {
			let order = ["A", "B", "C", "D", "E"];
			prop_assert_eq!(
				compute_changes(&old, &new, order),
				compute_changes(&old, &new, order)
			);
		}
	}
}
