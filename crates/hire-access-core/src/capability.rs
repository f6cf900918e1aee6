// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Resolved capability tiers.
//!
//! Each actor is resolved once into a [`Capability`] and every rule matches on
//! it exhaustively. Adding a role means adding or extending a variant here, and
//! the compiler then points at every rule that has to decide what it means.

use serde::{Deserialize, Serialize};

use crate::abac::ActorContext;
use crate::role::{is_department_admin_role, is_global_role, DepartmentRole, OrgRole, TargetRole};
use crate::types::DepartmentId;

/// Rank of a department administrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminRank {
	Lead,
	SubAdmin,
}

/// The privilege tier an actor holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Capability {
	/// Every resource in every organization.
	GlobalAccess,
	/// Every resource in the organization.
	OrgAccess,
	/// Every resource owned within one department, plus own and shared resources.
	DepartmentAccess {
		department_id: DepartmentId,
		rank: AdminRank,
	},
	/// Own and shared resources only.
	OwnResourcesOnly { department_id: Option<DepartmentId> },
}

impl Capability {
	/// Resolves an actor into its capability tier.
	///
	/// Organization-level `admin` and `sub_admin` carry no rights of their own;
	/// such an actor resolves by department role like any other member.
	pub fn resolve(actor: &ActorContext) -> Self {
		let org_role = actor.org_role();
		if is_global_role(org_role) {
			return match org_role {
				OrgRole::Superadmin => Capability::GlobalAccess,
				_ => Capability::OrgAccess,
			};
		}

		let admin_role = actor
			.department_role()
			.filter(|role| is_department_admin_role(*role));

		match (admin_role, actor.department_id()) {
			(Some(role), Some(department_id)) => Capability::DepartmentAccess {
				department_id,
				rank: if role == DepartmentRole::Lead {
					AdminRank::Lead
				} else {
					AdminRank::SubAdmin
				},
			},
			// ActorContext rules out a role without a department.
			(_, department_id) => Capability::OwnResourcesOnly { department_id },
		}
	}

	/// Returns the role this capability presents when targeted by someone else.
	pub fn target_role(&self) -> TargetRole {
		match self {
			Capability::GlobalAccess => TargetRole::Superadmin,
			Capability::OrgAccess => TargetRole::Owner,
			Capability::DepartmentAccess {
				rank: AdminRank::Lead,
				..
			} => TargetRole::Lead,
			Capability::DepartmentAccess {
				rank: AdminRank::SubAdmin,
				..
			} => TargetRole::SubAdmin,
			Capability::OwnResourcesOnly { .. } => TargetRole::Member,
		}
	}

	/// Returns the department the actor belongs to, if any.
	pub fn department_id(&self) -> Option<DepartmentId> {
		match self {
			Capability::GlobalAccess | Capability::OrgAccess => None,
			Capability::DepartmentAccess { department_id, .. } => Some(*department_id),
			Capability::OwnResourcesOnly { department_id } => *department_id,
		}
	}
}
