// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Table and JSON rendering for simulator output.

use std::io::{self, Write};

use hire_access_config::OutputFormat;
use hire_access_core::{ActionType, DecisionRecord};
use serde::Serialize;

use crate::matrix::MatrixRow;
use crate::suite::{CaseResult, SuiteReport};

fn write_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> io::Result<()> {
	serde_json::to_writer_pretty(&mut *out, value)?;
	writeln!(out)
}

fn outcome(allowed: bool) -> &'static str {
	if allowed {
		"allow"
	} else {
		"deny"
	}
}

/// Writes a single decision. JSON output is a one-element list.
pub fn write_decision(
	out: &mut dyn Write,
	record: &DecisionRecord,
	format: OutputFormat,
) -> io::Result<()> {
	match format {
		OutputFormat::Json => write_json(out, std::slice::from_ref(record)),
		OutputFormat::Table => writeln!(
			out,
			"{} {} {} owned by {}: {} ({})",
			record.actor_id,
			record.action,
			record.resource_type,
			record.owner_id,
			outcome(record.allowed),
			record.reason
		),
	}
}

pub fn write_suite(out: &mut dyn Write, report: &SuiteReport, format: OutputFormat) -> io::Result<()> {
	if format == OutputFormat::Json {
		return write_json(out, report);
	}

	if let Some(name) = &report.suite {
		writeln!(out, "suite: {name}")?;
	}
	for result in &report.results {
		let status = match result.matches() {
			Some(true) => "ok",
			Some(false) => "FAIL",
			None => "-",
		};
		let detail = match result {
			CaseResult::Resource { record, .. } => {
				format!("{} ({})", outcome(record.allowed), record.reason)
			}
			CaseResult::UserDeletion { record, .. } => outcome(record.allowed).to_string(),
		};
		writeln!(out, "{status:<5}{:<60}{detail}", result.name())?;

		if result.matches() == Some(false) {
			let expected = match result {
				CaseResult::Resource {
					expected: Some(v), ..
				} => format!("{} ({})", outcome(v.allowed), v.reason),
				CaseResult::UserDeletion {
					expected: Some(v), ..
				} => outcome(*v).to_string(),
				_ => String::new(),
			};
			writeln!(out, "     expected {expected}")?;
		}
	}
	writeln!(
		out,
		"{} passed, {} failed, {} unchecked",
		report.passed(),
		report.failed(),
		report.unchecked()
	)
}

pub fn write_matrix(out: &mut dyn Write, rows: &[MatrixRow], format: OutputFormat) -> io::Result<()> {
	if format == OutputFormat::Json {
		return write_json(out, rows);
	}

	write!(out, "{:<28}{:<28}", "profile", "resource")?;
	for action in ActionType::all() {
		write!(out, "{:<10}", action.as_str())?;
	}
	writeln!(out)?;

	for row in rows {
		write!(out, "{:<28}{:<28}", row.profile, row.situation)?;
		for cell in &row.cells {
			write!(out, "{:<10}", outcome(cell.allowed))?;
		}
		writeln!(out)?;
	}
	Ok(())
}
