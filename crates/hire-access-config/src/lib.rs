// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration management for the access policy simulator.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, TOML file, environment)
//! - Type-safe configuration sections
//! - Consistent environment variable naming (`HIRE_ACCESS_*`)
//!
//! # Usage
//!
//! ```ignore
//! use hire_access_config::load_config;
//!
//! let config = load_config(None)?;
//! println!("log level {}", config.logging.level.as_str());
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::SimulatorConfigLayer;
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use std::path::PathBuf;

use tracing::debug;

/// Fully resolved simulator configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulatorConfig {
	pub logging: LoggingConfig,
	pub output: OutputConfig,
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`HIRE_ACCESS_*`)
/// 2. Config file (`config_path` if given, else `~/.config/hire-access/simulator.toml`)
/// 3. Built-in defaults
///
/// An explicit `config_path` must exist; the default path is optional.
pub fn load_config(config_path: Option<PathBuf>) -> Result<SimulatorConfig, ConfigError> {
	let mut sources: Vec<Box<dyn ConfigSource>> = vec![Box::new(DefaultsSource), Box::new(EnvSource)];

	match config_path {
		Some(path) => sources.push(Box::new(TomlSource::required(path))),
		None => {
			if let Some(user) = TomlSource::user() {
				sources.push(Box::new(user));
			}
		}
	}

	load_from_sources(sources)
}

/// Merge the given sources in precedence order and finalize.
pub fn load_from_sources(
	mut sources: Vec<Box<dyn ConfigSource>>,
) -> Result<SimulatorConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = SimulatorConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	Ok(finalize(merged))
}

/// Finalize configuration layer into resolved config.
fn finalize(layer: SimulatorConfigLayer) -> SimulatorConfig {
	SimulatorConfig {
		logging: layer.logging.unwrap_or_default().finalize(),
		output: layer.output.unwrap_or_default().finalize(),
	}
}
