// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! User management policies.
//!
//! Removing a user from the organization is identity management and is
//! separate from deleting a resource.

use tracing::instrument;

use crate::abac::{ActorContext, TargetUser};
use crate::capability::{AdminRank, Capability};
use crate::role::TargetRole;

/// Returns true if `actor` may delete the user described by `target`.
///
/// Nobody may delete themselves, and nobody may delete a user of equal or
/// higher rank. Department sub-admins and members may delete nobody.
#[instrument(
    level = "debug",
    skip_all,
    fields(
        actor_id = %actor.id(),
        target_id = %target.id,
        target_role = %target.role,
    )
)]
pub fn can_delete_user(actor: &ActorContext, target: &TargetUser) -> bool {
	if target.id == actor.id() {
		return false;
	}

	match Capability::resolve(actor) {
		Capability::GlobalAccess => target.role != TargetRole::Superadmin,
		Capability::OrgAccess => !target.role.is_global(),
		Capability::DepartmentAccess {
			rank: AdminRank::Lead,
			..
		} => matches!(target.role, TargetRole::SubAdmin | TargetRole::Member),
		Capability::DepartmentAccess {
			rank: AdminRank::SubAdmin,
			..
		}
		| Capability::OwnResourcesOnly { .. } => false,
	}
}
