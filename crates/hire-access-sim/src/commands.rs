// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Subcommand handlers.
//!
//! Handlers write to the given writer and return whether the invocation
//! succeeded. Only a suite with mismatched expectations fails.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use hire_access_config::{OutputConfig, OutputFormat};
use hire_access_core::DecisionRecord;
use tracing::{info, instrument, warn};

use crate::cli::CheckArgs;
use crate::matrix;
use crate::report;
use crate::suite::Suite;

pub fn check(args: &CheckArgs, format: OutputFormat, out: &mut dyn Write) -> Result<bool> {
	let scenario = args.scenario().context("invalid scenario")?;
	let record = DecisionRecord::evaluate(&scenario);
	info!(allowed = record.allowed, reason = %record.reason, "decision");
	report::write_decision(out, &record, format)?;
	Ok(true)
}

#[instrument(level = "debug", skip_all, fields(file = %file.display()))]
pub fn run(file: &Path, output: &OutputConfig, out: &mut dyn Write) -> Result<bool> {
	let suite = Suite::load(file)?;
	let report = suite.run();
	report::write_suite(out, &report, output.format)?;

	if report.has_mismatches() {
		for result in report.mismatches() {
			warn!(case = result.name(), "expectation not met");
		}
		return Ok(!output.fail_on_mismatch);
	}
	Ok(true)
}

pub fn matrix(format: OutputFormat, out: &mut dyn Write) -> Result<bool> {
	report::write_matrix(out, &matrix::build(), format)?;
	Ok(true)
}
