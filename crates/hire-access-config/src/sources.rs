// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: built-in defaults, TOML files and environment variables.

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::SimulatorConfigLayer;
use crate::sections::{LogFormat, LogLevel, LoggingConfigLayer, OutputConfigLayer, OutputFormat};

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<SimulatorConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<SimulatorConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(SimulatorConfigLayer::default())
	}
}

/// TOML file configuration source.
pub struct TomlSource {
	path: PathBuf,
	required: bool,
}

impl TomlSource {
	/// A config file that is skipped when absent.
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			required: false,
		}
	}

	/// A config file the user asked for explicitly; absence is an error.
	pub fn required(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			required: true,
		}
	}

	/// `$XDG_CONFIG_HOME/hire-access/simulator.toml`, if a config dir exists.
	pub fn user() -> Option<Self> {
		dirs::config_dir().map(|dir| Self::new(dir.join("hire-access").join("simulator.toml")))
	}

	pub fn path(&self) -> &Path {
		&self.path
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<SimulatorConfigLayer, ConfigError> {
		if !self.required && !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(SimulatorConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: SimulatorConfigLayer =
			toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
				path: self.path.clone(),
				source: e,
			})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Convention: HIRE_ACCESS_<SECTION>_<FIELD>
pub struct EnvSource;

impl EnvSource {
	/// Builds a layer from an arbitrary variable lookup.
	pub fn load_from<F>(lookup: F) -> Result<SimulatorConfigLayer, ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let var = |name: &str| lookup(name).filter(|s| !s.is_empty());

		let log_level = var("HIRE_ACCESS_LOG_LEVEL")
			.map(|v| {
				LogLevel::parse(&v).ok_or_else(|| {
					ConfigError::invalid_value("HIRE_ACCESS_LOG_LEVEL", format!("unknown level '{v}'"))
				})
			})
			.transpose()?;

		let log_format = var("HIRE_ACCESS_LOG_FORMAT")
			.map(|v| {
				LogFormat::parse(&v).ok_or_else(|| {
					ConfigError::invalid_value("HIRE_ACCESS_LOG_FORMAT", format!("unknown format '{v}'"))
				})
			})
			.transpose()?;

		let output_format = var("HIRE_ACCESS_OUTPUT_FORMAT")
			.map(|v| {
				OutputFormat::parse(&v).ok_or_else(|| {
					ConfigError::invalid_value(
						"HIRE_ACCESS_OUTPUT_FORMAT",
						format!("unknown format '{v}'"),
					)
				})
			})
			.transpose()?;

		let fail_on_mismatch = var("HIRE_ACCESS_FAIL_ON_MISMATCH")
			.map(|v| parse_bool("HIRE_ACCESS_FAIL_ON_MISMATCH", &v))
			.transpose()?;

		Ok(SimulatorConfigLayer {
			logging: Some(LoggingConfigLayer {
				level: log_level,
				format: log_format,
			}),
			output: Some(OutputConfigLayer {
				format: output_format,
				fail_on_mismatch,
			}),
		})
	}
}

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<SimulatorConfigLayer, ConfigError> {
		debug!("loading environment variables");
		Self::load_from(|name| std::env::var(name).ok())
	}
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
	match value.to_lowercase().as_str() {
		"1" | "true" | "yes" => Ok(true),
		"0" | "false" | "no" => Ok(false),
		_ => Err(ConfigError::invalid_value(
			key,
			format!("invalid boolean value '{value}'"),
		)),
	}
}
