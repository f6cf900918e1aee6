// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Report output configuration section.

use serde::{Deserialize, Serialize};

/// How simulator results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
	#[default]
	Table,
	Json,
}

impl OutputFormat {
	pub fn parse(value: &str) -> Option<Self> {
		match value.to_lowercase().as_str() {
			"table" => Some(OutputFormat::Table),
			"json" => Some(OutputFormat::Json),
			_ => None,
		}
	}
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OutputConfigLayer {
	pub format: Option<OutputFormat>,
	pub fail_on_mismatch: Option<bool>,
}

impl OutputConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.format.is_some() {
			self.format = other.format;
		}
		if other.fail_on_mismatch.is_some() {
			self.fail_on_mismatch = other.fail_on_mismatch;
		}
	}

	pub fn finalize(self) -> OutputConfig {
		OutputConfig {
			format: self.format.unwrap_or_default(),
			fail_on_mismatch: self.fail_on_mismatch.unwrap_or(true),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
	pub format: OutputFormat,
	/// Exit non-zero when a suite case disagrees with its expectation.
	pub fail_on_mismatch: bool,
}

impl Default for OutputConfig {
	fn default() -> Self {
		OutputConfigLayer::default().finalize()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults_fail_on_mismatch() {
		let config = OutputConfig::default();
		assert_eq!(config.format, OutputFormat::Table);
		assert!(config.fail_on_mismatch);
	}

	#[test]
	fn test_merge_keeps_unset_fields() {
		let mut base = OutputConfigLayer {
			format: Some(OutputFormat::Json),
			fail_on_mismatch: None,
		};
		base.merge(OutputConfigLayer {
			format: None,
			fail_on_mismatch: Some(false),
		});
		let config = base.finalize();
		assert_eq!(config.format, OutputFormat::Json);
		assert!(!config.fail_on_mismatch);
	}

	#[test]
	fn test_deserialize_rejects_unknown_format() {
		assert!(toml::from_str::<OutputConfigLayer>(r#"format = "yaml""#).is_err());
	}
}
