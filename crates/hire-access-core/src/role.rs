// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Role vocabulary and role predicates.
//!
//! Roles come in two scopes:
//!
//! - [`OrgRole`]: organization-wide privilege tier
//! - [`DepartmentRole`]: refines privilege within a single department
//!
//! [`TargetRole`] is the effective role of a user on the receiving end of a
//! share or a user deletion. Rule code never compares raw roles directly; it
//! resolves an actor into a [`Capability`](crate::Capability) and matches on
//! that.

use serde::{Deserialize, Serialize};

use crate::error::AccessError;
use crate::types::impl_str_enum;

// =============================================================================
// Organization Roles
// =============================================================================

/// Organization-wide privilege tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrgRole {
	/// Platform operator with access to every organization.
	Superadmin,
	/// Owns the organization; access to every resource in it.
	Owner,
	/// Organization administrator.
	Admin,
	/// Organization-level deputy administrator.
	SubAdmin,
	/// Standard member.
	Member,
}

impl OrgRole {
	/// Returns all organization roles, most privileged first.
	pub fn all() -> &'static [OrgRole] {
		&[
			OrgRole::Superadmin,
			OrgRole::Owner,
			OrgRole::Admin,
			OrgRole::SubAdmin,
			OrgRole::Member,
		]
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			OrgRole::Superadmin => "superadmin",
			OrgRole::Owner => "owner",
			OrgRole::Admin => "admin",
			OrgRole::SubAdmin => "sub_admin",
			OrgRole::Member => "member",
		}
	}
}

impl_str_enum!(OrgRole, AccessError::UnknownOrgRole);

// =============================================================================
// Department Roles
// =============================================================================

/// Privilege within one department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepartmentRole {
	/// Heads the department.
	Lead,
	/// Deputy administrator of the department.
	SubAdmin,
	/// Standard department member.
	Member,
}

impl DepartmentRole {
	/// Returns all department roles, most privileged first.
	pub fn all() -> &'static [DepartmentRole] {
		&[
			DepartmentRole::Lead,
			DepartmentRole::SubAdmin,
			DepartmentRole::Member,
		]
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			DepartmentRole::Lead => "lead",
			DepartmentRole::SubAdmin => "sub_admin",
			DepartmentRole::Member => "member",
		}
	}
}

impl_str_enum!(DepartmentRole, AccessError::UnknownDepartmentRole);

// =============================================================================
// Target Roles
// =============================================================================

/// Effective role of the user a share or user deletion is directed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetRole {
	Superadmin,
	Owner,
	Lead,
	SubAdmin,
	Member,
}

impl TargetRole {
	/// Returns all target roles, most privileged first.
	pub fn all() -> &'static [TargetRole] {
		&[
			TargetRole::Superadmin,
			TargetRole::Owner,
			TargetRole::Lead,
			TargetRole::SubAdmin,
			TargetRole::Member,
		]
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			TargetRole::Superadmin => "superadmin",
			TargetRole::Owner => "owner",
			TargetRole::Lead => "lead",
			TargetRole::SubAdmin => "sub_admin",
			TargetRole::Member => "member",
		}
	}

	/// Returns true for the org-wide roles that bypass department scoping.
	pub fn is_global(&self) -> bool {
		matches!(self, TargetRole::Superadmin | TargetRole::Owner)
	}

	/// Returns true for the department-administrative roles.
	pub fn is_department_admin(&self) -> bool {
		matches!(self, TargetRole::Lead | TargetRole::SubAdmin)
	}
}

impl_str_enum!(TargetRole, AccessError::UnknownTargetRole);

// =============================================================================
// Predicates
// =============================================================================

/// Returns true if the organization role bypasses every other rule.
pub fn is_global_role(role: OrgRole) -> bool {
	matches!(role, OrgRole::Superadmin | OrgRole::Owner)
}

/// Returns true if the department role administers its whole department.
pub fn is_department_admin_role(role: DepartmentRole) -> bool {
	matches!(role, DepartmentRole::Lead | DepartmentRole::SubAdmin)
}
