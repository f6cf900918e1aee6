// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Decision outcomes and the closed reason-code vocabulary.
//!
//! Reason codes are stable identifiers suitable for audit logs. Their wire form
//! is SCREAMING_SNAKE_CASE and never changes once published.

use serde::{Deserialize, Serialize};

use crate::error::AccessError;
use crate::types::impl_str_enum;

/// Why a decision came out the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReasonCode {
	GlobalAccess,
	OrgAccess,
	Ownership,
	DepartmentAdmin,
	SharedView,
	SharedEdit,
	SharedEditInsufficient,
	SharedShare,
	SharedShareInsufficient,
	SharingExcludesDelete,
	SharingExcludesTransfer,
	NotOwnedNotSharedNotDepartment,
	ShareTargetDenied,
	SelfTargetDenied,
}

impl ReasonCode {
	/// Returns every reason code.
	pub fn all() -> &'static [ReasonCode] {
		&[
			ReasonCode::GlobalAccess,
			ReasonCode::OrgAccess,
			ReasonCode::Ownership,
			ReasonCode::DepartmentAdmin,
			ReasonCode::SharedView,
			ReasonCode::SharedEdit,
			ReasonCode::SharedEditInsufficient,
			ReasonCode::SharedShare,
			ReasonCode::SharedShareInsufficient,
			ReasonCode::SharingExcludesDelete,
			ReasonCode::SharingExcludesTransfer,
			ReasonCode::NotOwnedNotSharedNotDepartment,
			ReasonCode::ShareTargetDenied,
			ReasonCode::SelfTargetDenied,
		]
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			ReasonCode::GlobalAccess => "GLOBAL_ACCESS",
			ReasonCode::OrgAccess => "ORG_ACCESS",
			ReasonCode::Ownership => "OWNERSHIP",
			ReasonCode::DepartmentAdmin => "DEPARTMENT_ADMIN",
			ReasonCode::SharedView => "SHARED_VIEW",
			ReasonCode::SharedEdit => "SHARED_EDIT",
			ReasonCode::SharedEditInsufficient => "SHARED_EDIT_INSUFFICIENT",
			ReasonCode::SharedShare => "SHARED_SHARE",
			ReasonCode::SharedShareInsufficient => "SHARED_SHARE_INSUFFICIENT",
			ReasonCode::SharingExcludesDelete => "SHARING_EXCLUDES_DELETE",
			ReasonCode::SharingExcludesTransfer => "SHARING_EXCLUDES_TRANSFER",
			ReasonCode::NotOwnedNotSharedNotDepartment => "NOT_OWNED_NOT_SHARED_NOT_DEPARTMENT",
			ReasonCode::ShareTargetDenied => "SHARE_TARGET_DENIED",
			ReasonCode::SelfTargetDenied => "SELF_TARGET_DENIED",
		}
	}
}

impl_str_enum!(ReasonCode, AccessError::UnknownReasonCode);

/// Outcome of a single rule evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
	Allowed(ReasonCode),
	Denied(ReasonCode),
}

impl Decision {
	pub fn is_allowed(&self) -> bool {
		matches!(self, Decision::Allowed(_))
	}

	pub fn reason(&self) -> ReasonCode {
		match self {
			Decision::Allowed(reason) | Decision::Denied(reason) => *reason,
		}
	}
}

/// Auditable `{allowed, reason}` pair produced by the scenario evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Verdict {
	pub allowed: bool,
	pub reason: ReasonCode,
}

impl Verdict {
	pub fn allowed(reason: ReasonCode) -> Self {
		Self {
			allowed: true,
			reason,
		}
	}

	pub fn denied(reason: ReasonCode) -> Self {
		Self {
			allowed: false,
			reason,
		}
	}
}

impl From<Decision> for Verdict {
	fn from(decision: Decision) -> Self {
		Self {
			allowed: decision.is_allowed(),
			reason: decision.reason(),
		}
	}
}
