// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Logging configuration section.

use serde::{Deserialize, Serialize};

/// Minimum severity of emitted log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
	Error,
	Warn,
	#[default]
	Info,
	Debug,
	Trace,
}

impl LogLevel {
	pub fn parse(value: &str) -> Option<Self> {
		match value.to_lowercase().as_str() {
			"error" => Some(LogLevel::Error),
			"warn" => Some(LogLevel::Warn),
			"info" => Some(LogLevel::Info),
			"debug" => Some(LogLevel::Debug),
			"trace" => Some(LogLevel::Trace),
			_ => None,
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			LogLevel::Error => "error",
			LogLevel::Warn => "warn",
			LogLevel::Info => "info",
			LogLevel::Debug => "debug",
			LogLevel::Trace => "trace",
		}
	}
}

/// How log lines are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
	#[default]
	Text,
	Json,
}

impl LogFormat {
	pub fn parse(value: &str) -> Option<Self> {
		match value.to_lowercase().as_str() {
			"text" => Some(LogFormat::Text),
			"json" => Some(LogFormat::Json),
			_ => None,
		}
	}
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfigLayer {
	pub level: Option<LogLevel>,
	pub format: Option<LogFormat>,
}

impl LoggingConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.level.is_some() {
			self.level = other.level;
		}
		if other.format.is_some() {
			self.format = other.format;
		}
	}

	pub fn finalize(self) -> LoggingConfig {
		LoggingConfig {
			level: self.level.unwrap_or_default(),
			format: self.format.unwrap_or_default(),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
	pub level: LogLevel,
	pub format: LogFormat,
}

impl Default for LoggingConfig {
	fn default() -> Self {
		Self {
			level: LogLevel::default(),
			format: LogFormat::default(),
		}
	}
}
