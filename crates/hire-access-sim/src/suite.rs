// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Scenario suites.
//!
//! A suite is a TOML file of named cases. Resource cases are `[[case]]` tables
//! and user-deletion cases are `[[user_deletion]]` tables:
//!
//! ```toml
//! name = "baseline"
//!
//! [[case]]
//! name = "member cannot view a colleague's contact"
//! action = "view"
//! actor = { id = 1, org_role = "member", department_id = 5 }
//! resource = { owner_id = 2, department_id = 5 }
//! expect = { allowed = false, reason = "NOT_OWNED_NOT_SHARED_NOT_DEPARTMENT" }
//!
//! [[user_deletion]]
//! name = "owner removes a lead"
//! actor = { id = 1, org_role = "owner" }
//! target = { id = 2, role = "lead", department_id = 5 }
//! expect = true
//! ```
//!
//! Cases without `expect` are evaluated and reported but never counted as
//! mismatches.

use std::path::{Path, PathBuf};

use hire_access_core::{
	can_delete_user, ActionType, ActorContext, DecisionRecord, ResourceContext, Scenario, TargetUser,
	UserDeletionRecord, Verdict,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, instrument};

#[derive(Debug, Error)]
pub enum SuiteError {
	#[error("failed to read suite {path}: {source}")]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to parse suite {path}: {source}")]
	Parse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},
}

/// A parsed scenario suite.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Suite {
	#[serde(default)]
	pub name: Option<String>,
	#[serde(default, rename = "case")]
	pub cases: Vec<ResourceCase>,
	#[serde(default, rename = "user_deletion")]
	pub user_deletions: Vec<UserDeletionCase>,
}

/// A resource action to evaluate, with an optional expected verdict.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceCase {
	pub name: String,
	pub actor: ActorContext,
	pub action: ActionType,
	pub resource: ResourceContext,
	#[serde(default)]
	pub target: Option<TargetUser>,
	#[serde(default)]
	pub expect: Option<Verdict>,
}

impl ResourceCase {
	pub fn scenario(&self) -> Scenario {
		Scenario {
			actor: self.actor,
			action: self.action,
			resource: self.resource,
			target: self.target,
		}
	}
}

/// A user-deletion check with an optional expected answer.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserDeletionCase {
	pub name: String,
	pub actor: ActorContext,
	pub target: TargetUser,
	#[serde(default)]
	pub expect: Option<bool>,
}

impl Suite {
	/// Parses a suite from TOML text.
	pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
		toml::from_str(content)
	}

	/// Reads and parses a suite file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self, SuiteError> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|source| SuiteError::Read {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_toml(&content).map_err(|source| SuiteError::Parse {
			path: path.to_path_buf(),
			source,
		})
	}

	pub fn len(&self) -> usize {
		self.cases.len() + self.user_deletions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Evaluates every case in file order, resource cases first.
	#[instrument(level = "debug", skip_all, fields(suite = self.name.as_deref(), cases = self.len()))]
	pub fn run(&self) -> SuiteReport {
		let mut results = Vec::with_capacity(self.len());

		for case in &self.cases {
			let record = DecisionRecord::evaluate(&case.scenario());
			debug!(case = %case.name, allowed = record.allowed, reason = %record.reason, "case evaluated");
			results.push(CaseResult::Resource {
				name: case.name.clone(),
				record,
				expected: case.expect,
			});
		}

		for case in &self.user_deletions {
			let allowed = can_delete_user(&case.actor, &case.target);
			debug!(case = %case.name, allowed, "case evaluated");
			results.push(CaseResult::UserDeletion {
				name: case.name.clone(),
				record: UserDeletionRecord::new(case.actor.id(), case.target.id, case.target.role, allowed),
				expected: case.expect,
			});
		}

		let report = SuiteReport {
			suite: self.name.clone(),
			results,
		};
		info!(
			passed = report.passed(),
			failed = report.failed(),
			unchecked = report.unchecked(),
			"suite finished"
		);
		report
	}
}

/// Outcome of one suite case.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CaseResult {
	Resource {
		name: String,
		record: DecisionRecord,
		#[serde(skip_serializing_if = "Option::is_none")]
		expected: Option<Verdict>,
	},
	UserDeletion {
		name: String,
		record: UserDeletionRecord,
		#[serde(skip_serializing_if = "Option::is_none")]
		expected: Option<bool>,
	},
}

impl CaseResult {
	pub fn name(&self) -> &str {
		match self {
			CaseResult::Resource { name, .. } | CaseResult::UserDeletion { name, .. } => name,
		}
	}

	pub fn allowed(&self) -> bool {
		match self {
			CaseResult::Resource { record, .. } => record.allowed,
			CaseResult::UserDeletion { record, .. } => record.allowed,
		}
	}

	/// `None` when the case carries no expectation.
	pub fn matches(&self) -> Option<bool> {
		match self {
			CaseResult::Resource {
				record, expected, ..
			} => expected.map(|e| e == record.verdict()),
			CaseResult::UserDeletion {
				record, expected, ..
			} => expected.map(|e| e == record.allowed),
		}
	}
}

/// Results of running a suite.
#[derive(Debug, Clone, Serialize)]
pub struct SuiteReport {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub suite: Option<String>,
	pub results: Vec<CaseResult>,
}

impl SuiteReport {
	pub fn passed(&self) -> usize {
		self.count(Some(true))
	}

	pub fn failed(&self) -> usize {
		self.count(Some(false))
	}

	pub fn unchecked(&self) -> usize {
		self.count(None)
	}

	pub fn has_mismatches(&self) -> bool {
		self.failed() > 0
	}

	pub fn mismatches(&self) -> impl Iterator<Item = &CaseResult> {
		self.results.iter().filter(|r| r.matches() == Some(false))
	}

	fn count(&self, outcome: Option<bool>) -> usize {
		self.results.iter().filter(|r| r.matches() == outcome).count()
	}
}
