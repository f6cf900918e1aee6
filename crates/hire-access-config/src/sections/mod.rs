// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections.

mod logging;
mod output;

pub use logging::{LogFormat, LogLevel, LoggingConfig, LoggingConfigLayer};
pub use output::{OutputConfig, OutputConfigLayer, OutputFormat};
