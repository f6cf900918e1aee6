// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Policy simulator for the recruiting access-control engine.
//!
//! Drives [`hire_access_core`] from the command line: single checks, TOML
//! scenario suites with expected verdicts, and a permission matrix over
//! representative roles.

pub mod cli;
pub mod commands;
pub mod matrix;
pub mod report;
pub mod suite;

pub use cli::{CheckArgs, Cli, Command};
pub use matrix::{MatrixCell, MatrixRow};
pub use suite::{CaseResult, Suite, SuiteError, SuiteReport};
