// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Sharing policies.
//!
//! Covers both what a share grants to its recipient ([`evaluate_shared`]) and to
//! whom an actor may re-share ([`can_share_to`]). Sharing never grants delete or
//! transfer, at any access level.

use tracing::instrument;

use crate::abac::{ActorContext, TargetUser};
use crate::capability::Capability;
use crate::reason::{Decision, ReasonCode};
use crate::types::{AccessLevel, ActionType, DepartmentId};

/// Evaluates an action on a resource shared with the actor at `level`.
pub fn evaluate_shared(action: ActionType, level: AccessLevel) -> Decision {
	match action {
		ActionType::View => Decision::Allowed(ReasonCode::SharedView),
		ActionType::Edit if level.includes(AccessLevel::Edit) => {
			Decision::Allowed(ReasonCode::SharedEdit)
		}
		ActionType::Edit => Decision::Denied(ReasonCode::SharedEditInsufficient),
		ActionType::Share if level.includes(AccessLevel::Full) => {
			Decision::Allowed(ReasonCode::SharedShare)
		}
		ActionType::Share => Decision::Denied(ReasonCode::SharedShareInsufficient),
		ActionType::Delete => Decision::Denied(ReasonCode::SharingExcludesDelete),
		ActionType::Transfer => Decision::Denied(ReasonCode::SharingExcludesTransfer),
	}
}

/// Returns true if `actor` may share a resource with `target`.
///
/// This only answers the question of eligible recipients. Whether the actor may
/// share a particular resource at all is decided by
/// [`decide`](crate::decide) with [`ActionType::Share`].
#[instrument(
    level = "debug",
    skip_all,
    fields(
        actor_id = %actor.id(),
        target_id = %target.id,
        target_role = %target.role,
    )
)]
pub fn can_share_to(actor: &ActorContext, target: &TargetUser) -> bool {
	if target.id == actor.id() {
		return false;
	}

	match Capability::resolve(actor) {
		Capability::GlobalAccess | Capability::OrgAccess => true,
		Capability::DepartmentAccess { department_id, .. } => {
			target.role.is_global()
				// Peer administrators are eligible regardless of department.
				|| target.role.is_department_admin()
				|| same_department(Some(department_id), target.department_id)
		}
		Capability::OwnResourcesOnly { department_id } => {
			same_department(department_id, target.department_id)
		}
	}
}

/// Two users share a department only if both have one and it is the same.
fn same_department(a: Option<DepartmentId>, b: Option<DepartmentId>) -> bool {
	matches!((a, b), (Some(a), Some(b)) if a == b)
}
