// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use hire_access_config::{load_config, LogFormat, LogLevel, LoggingConfig, OutputFormat};
use hire_access_sim::{commands, Cli, Command};
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn log_level_to_tracing(level: LogLevel) -> tracing::Level {
	match level {
		LogLevel::Trace => tracing::Level::TRACE,
		LogLevel::Debug => tracing::Level::DEBUG,
		LogLevel::Info => tracing::Level::INFO,
		LogLevel::Warn => tracing::Level::WARN,
		LogLevel::Error => tracing::Level::ERROR,
	}
}

fn default_directive(level: LogLevel) -> String {
	format!("hire_access={}", log_level_to_tracing(level))
}

fn init_tracing(logging: &LoggingConfig) {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(default_directive(logging.level)));

	match logging.format {
		LogFormat::Json => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().json().with_writer(std::io::stderr))
				.init();
		}
		LogFormat::Text => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().compact().with_writer(std::io::stderr))
				.init();
		}
	}
}

fn main() -> Result<ExitCode> {
	let cli = Cli::parse();

	let mut config = load_config(cli.config.clone()).context("failed to load configuration")?;
	if cli.json {
		config.output.format = OutputFormat::Json;
	}

	init_tracing(&config.logging);
	debug!(?config, "configuration loaded");

	let stdout = std::io::stdout();
	let mut out = stdout.lock();

	let ok = match &cli.command {
		Command::Check(args) => commands::check(args, config.output.format, &mut out)?,
		Command::Run { file } => commands::run(file, &config.output, &mut out)?,
		Command::Matrix => commands::matrix(config.output.format, &mut out)?,
	};

	Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
