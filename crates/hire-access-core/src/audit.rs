// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Audit records for access decisions.
//!
//! Records are plain serializable values. Where they are written is the
//! caller's concern.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::reason::{ReasonCode, Verdict};
use crate::role::{DepartmentRole, OrgRole, TargetRole};
use crate::scenario::Scenario;
use crate::types::{ActionType, DepartmentId, ResourceType, UserId};

/// One evaluated resource decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionRecord {
	/// Unique identifier for this record.
	pub id: Uuid,
	/// When the decision was made.
	pub timestamp: DateTime<Utc>,
	pub actor_id: UserId,
	pub org_role: OrgRole,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub department_role: Option<DepartmentRole>,
	pub action: ActionType,
	pub resource_type: ResourceType,
	pub owner_id: UserId,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub department_id: Option<DepartmentId>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub target_id: Option<UserId>,
	pub allowed: bool,
	pub reason: ReasonCode,
}

impl DecisionRecord {
	/// Records the verdict reached for `scenario`.
	pub fn new(scenario: &Scenario, verdict: Verdict) -> Self {
		Self {
			id: Uuid::new_v4(),
			timestamp: Utc::now(),
			actor_id: scenario.actor.id(),
			org_role: scenario.actor.org_role(),
			department_role: scenario.actor.department_role(),
			action: scenario.action,
			resource_type: scenario.resource.resource_type(),
			owner_id: scenario.resource.owner_id(),
			department_id: scenario.resource.department_id(),
			target_id: scenario.target.map(|t| t.id),
			allowed: verdict.allowed,
			reason: verdict.reason,
		}
	}

	/// Evaluates `scenario` and records the result.
	pub fn evaluate(scenario: &Scenario) -> Self {
		Self::new(scenario, scenario.evaluate())
	}

	pub fn verdict(&self) -> Verdict {
		Verdict {
			allowed: self.allowed,
			reason: self.reason,
		}
	}
}

/// One evaluated user-deletion check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDeletionRecord {
	pub id: Uuid,
	pub timestamp: DateTime<Utc>,
	pub actor_id: UserId,
	pub target_id: UserId,
	pub target_role: TargetRole,
	pub allowed: bool,
}

impl UserDeletionRecord {
	pub fn new(actor_id: UserId, target_id: UserId, target_role: TargetRole, allowed: bool) -> Self {
		Self {
			id: Uuid::new_v4(),
			timestamp: Utc::now(),
			actor_id,
			target_id,
			target_role,
			allowed,
		}
	}
}
