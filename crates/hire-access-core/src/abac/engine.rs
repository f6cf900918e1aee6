// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Resource access decision engine.
//!
//! This module contains [`decide`], the single implementation of the resource
//! rule table. Rules are evaluated in order and the first match wins:
//!
//! 1. **Global access**: superadmin, then organization owner
//! 2. **Ownership**: the actor owns the resource
//! 3. **Department administration**: lead or sub_admin of the resource's department
//! 4. **Sharing**: bounded by the share's access level, never delete or transfer
//! 5. **Default deny**
//!
//! All decisions are pure functions of their inputs. A denial is a normal
//! outcome and is traced at debug level only.

use super::policies::sharing;
use super::types::{ActorContext, ResourceContext};
use crate::capability::Capability;
use crate::reason::{Decision, ReasonCode};
use crate::types::ActionType;
use tracing::{debug, instrument};

/// Decides whether `actor` may perform `action` on `resource`.
///
/// # Tracing
///
/// Instrumented at debug level with the actor, action and resource attributes;
/// the outcome and reason code are emitted as a debug event.
#[instrument(
    level = "debug",
    skip_all,
    fields(
        actor_id = %actor.id(),
        action = %action,
        resource_type = %resource.resource_type(),
        owner_id = %resource.owner_id(),
    )
)]
pub fn decide(actor: &ActorContext, action: ActionType, resource: &ResourceContext) -> Decision {
	let decision = evaluate(actor, action, resource);
	debug!(
		allowed = decision.is_allowed(),
		reason = %decision.reason(),
		"access decision"
	);
	decision
}

fn evaluate(actor: &ActorContext, action: ActionType, resource: &ResourceContext) -> Decision {
	let owns = resource.owner_id() == actor.id();

	match Capability::resolve(actor) {
		Capability::GlobalAccess => Decision::Allowed(ReasonCode::GlobalAccess),
		Capability::OrgAccess => Decision::Allowed(ReasonCode::OrgAccess),
		Capability::DepartmentAccess { department_id, .. } => {
			if owns {
				Decision::Allowed(ReasonCode::Ownership)
			} else if resource.department_id() == Some(department_id) {
				Decision::Allowed(ReasonCode::DepartmentAdmin)
			} else {
				evaluate_unowned(action, resource)
			}
		}
		Capability::OwnResourcesOnly { .. } => {
			if owns {
				Decision::Allowed(ReasonCode::Ownership)
			} else {
				evaluate_unowned(action, resource)
			}
		}
	}
}

/// Evaluates a resource the actor neither owns nor administers.
fn evaluate_unowned(action: ActionType, resource: &ResourceContext) -> Decision {
	match resource.shared_access_level() {
		Some(level) => sharing::evaluate_shared(action, level),
		None => Decision::Denied(ReasonCode::NotOwnedNotSharedNotDepartment),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::role::{DepartmentRole, OrgRole};
	use crate::types::{AccessLevel, DepartmentId, ResourceType, UserId};

	const ACTOR: UserId = UserId::new(1);
	const OTHER: UserId = UserId::new(2);
	const DEPT_5: DepartmentId = DepartmentId::new(5);
	const DEPT_9: DepartmentId = DepartmentId::new(9);

	fn member_in(department_id: DepartmentId) -> ActorContext {
		ActorContext::new(ACTOR, OrgRole::Member).in_department(department_id)
	}

	fn admin_in(department_id: DepartmentId, role: DepartmentRole) -> ActorContext {
		ActorContext::new(ACTOR, OrgRole::Member).with_department_role(department_id, role)
	}

	fn allowed_actions(actor: &ActorContext, resource: &ResourceContext) -> Vec<ActionType> {
		ActionType::all()
			.iter()
			.copied()
			.filter(|action| decide(actor, *action, resource).is_allowed())
			.collect()
	}

	mod global_roles {
		use super::*;

		#[test]
		fn superadmin_has_global_access() {
			let actor = ActorContext::new(ACTOR, OrgRole::Superadmin);
			let resource = ResourceContext::chat(OTHER).with_department(DEPT_9);

			for action in ActionType::all() {
				assert_eq!(
					decide(&actor, *action, &resource),
					Decision::Allowed(ReasonCode::GlobalAccess)
				);
			}
		}

		#[test]
		fn owner_has_org_access() {
			let actor = ActorContext::new(ACTOR, OrgRole::Owner);
			let resource = ResourceContext::call(OTHER).shared(AccessLevel::View);

			for action in ActionType::all() {
				assert_eq!(
					decide(&actor, *action, &resource),
					Decision::Allowed(ReasonCode::OrgAccess)
				);
			}
		}

		#[test]
		fn global_access_precedes_ownership() {
			let actor = ActorContext::new(ACTOR, OrgRole::Superadmin);
			let resource = ResourceContext::entity(ACTOR);

			assert_eq!(
				decide(&actor, ActionType::Delete, &resource),
				Decision::Allowed(ReasonCode::GlobalAccess)
			);
		}

		#[test]
		fn org_admin_has_no_bypass() {
			let actor = ActorContext::new(ACTOR, OrgRole::Admin);
			let resource = ResourceContext::entity(OTHER).with_department(DEPT_5);

			assert_eq!(
				decide(&actor, ActionType::View, &resource),
				Decision::Denied(ReasonCode::NotOwnedNotSharedNotDepartment)
			);
		}
	}

	mod ownership {
		use super::*;

		#[test]
		fn owner_of_resource_can_do_everything() {
			let actor = member_in(DEPT_5);
			let resource = ResourceContext::entity(ACTOR).with_department(DEPT_9);

			for action in ActionType::all() {
				assert_eq!(
					decide(&actor, *action, &resource),
					Decision::Allowed(ReasonCode::Ownership)
				);
			}
		}

		#[test]
		fn ownership_precedes_department_admin() {
			let actor = admin_in(DEPT_5, DepartmentRole::Lead);
			let resource = ResourceContext::entity(ACTOR).with_department(DEPT_5);

			assert_eq!(
				decide(&actor, ActionType::Transfer, &resource),
				Decision::Allowed(ReasonCode::Ownership)
			);
		}
	}

	mod department_admin {
		use super::*;

		#[test]
		fn lead_can_delete_department_resource() {
			let actor = admin_in(DEPT_5, DepartmentRole::Lead);
			let resource = ResourceContext::entity(OTHER).with_department(DEPT_5);

			assert_eq!(
				decide(&actor, ActionType::Delete, &resource),
				Decision::Allowed(ReasonCode::DepartmentAdmin)
			);
		}

		#[test]
		fn lead_and_sub_admin_are_symmetric_within_department() {
			let resource = ResourceContext::call(OTHER).with_department(DEPT_5);
			let lead = admin_in(DEPT_5, DepartmentRole::Lead);
			let sub_admin = admin_in(DEPT_5, DepartmentRole::SubAdmin);

			for action in ActionType::all() {
				assert_eq!(
					decide(&lead, *action, &resource),
					Decision::Allowed(ReasonCode::DepartmentAdmin)
				);
				assert_eq!(
					decide(&lead, *action, &resource),
					decide(&sub_admin, *action, &resource)
				);
			}
		}

		#[test]
		fn department_admin_rights_precede_sharing() {
			let actor = admin_in(DEPT_5, DepartmentRole::SubAdmin);
			let resource = ResourceContext::chat(OTHER)
				.with_department(DEPT_5)
				.shared(AccessLevel::View);

			assert_eq!(
				decide(&actor, ActionType::Delete, &resource),
				Decision::Allowed(ReasonCode::DepartmentAdmin)
			);
		}

		#[test]
		fn other_department_is_out_of_scope() {
			let actor = admin_in(DEPT_5, DepartmentRole::Lead);
			let resource = ResourceContext::entity(OTHER).with_department(DEPT_9);

			assert!(allowed_actions(&actor, &resource).is_empty());
		}

		#[test]
		fn resource_without_department_is_out_of_scope() {
			let actor = admin_in(DEPT_5, DepartmentRole::Lead);
			let resource = ResourceContext::entity(OTHER);

			assert_eq!(
				decide(&actor, ActionType::View, &resource),
				Decision::Denied(ReasonCode::NotOwnedNotSharedNotDepartment)
			);
		}

		#[test]
		fn admin_falls_back_to_sharing_outside_department() {
			let actor = admin_in(DEPT_5, DepartmentRole::Lead);
			let resource = ResourceContext::entity(OTHER)
				.with_department(DEPT_9)
				.shared(AccessLevel::Edit);

			assert_eq!(
				allowed_actions(&actor, &resource),
				vec![ActionType::View, ActionType::Edit]
			);
		}

		#[test]
		fn plain_member_has_no_department_rights() {
			let actor = member_in(DEPT_5);
			let resource = ResourceContext::entity(OTHER).with_department(DEPT_5);

			assert_eq!(
				decide(&actor, ActionType::View, &resource),
				Decision::Denied(ReasonCode::NotOwnedNotSharedNotDepartment)
			);
		}

		#[test]
		fn department_member_role_has_no_department_rights() {
			let actor = admin_in(DEPT_5, DepartmentRole::Member);
			let resource = ResourceContext::entity(OTHER).with_department(DEPT_5);

			assert!(allowed_actions(&actor, &resource).is_empty());
		}
	}

	mod sharing_levels {
		use super::*;

		fn shared(level: AccessLevel) -> ResourceContext {
			ResourceContext::entity(OTHER)
				.with_department(DEPT_5)
				.shared(level)
		}

		#[test]
		fn view_share_allows_only_view() {
			let actor = member_in(DEPT_5);
			assert_eq!(
				allowed_actions(&actor, &shared(AccessLevel::View)),
				vec![ActionType::View]
			);
		}

		#[test]
		fn edit_share_allows_view_and_edit() {
			let actor = member_in(DEPT_5);
			assert_eq!(
				allowed_actions(&actor, &shared(AccessLevel::Edit)),
				vec![ActionType::View, ActionType::Edit]
			);
		}

		#[test]
		fn full_share_allows_view_edit_share() {
			let actor = member_in(DEPT_5);
			assert_eq!(
				allowed_actions(&actor, &shared(AccessLevel::Full)),
				vec![ActionType::View, ActionType::Edit, ActionType::Share]
			);
		}

		#[test]
		fn full_share_never_grants_delete() {
			let actor = member_in(DEPT_5);
			assert_eq!(
				decide(&actor, ActionType::Delete, &shared(AccessLevel::Full)),
				Decision::Denied(ReasonCode::SharingExcludesDelete)
			);
			assert_eq!(
				decide(&actor, ActionType::Transfer, &shared(AccessLevel::Full)),
				Decision::Denied(ReasonCode::SharingExcludesTransfer)
			);
		}

		#[test]
		fn insufficient_levels_have_distinct_reasons() {
			let actor = member_in(DEPT_5);
			assert_eq!(
				decide(&actor, ActionType::Edit, &shared(AccessLevel::View)),
				Decision::Denied(ReasonCode::SharedEditInsufficient)
			);
			assert_eq!(
				decide(&actor, ActionType::Share, &shared(AccessLevel::Edit)),
				Decision::Denied(ReasonCode::SharedShareInsufficient)
			);
		}

		#[test]
		fn shared_without_level_is_view_only() {
			let actor = member_in(DEPT_5);
			let resource =
				ResourceContext::try_new(ResourceType::Chat, OTHER, Some(DEPT_5), true, None).unwrap();
			assert_eq!(allowed_actions(&actor, &resource), vec![ActionType::View]);
		}
	}

	mod property_tests {
		use super::*;
		use proptest::prelude::*;

		fn arb_action() -> impl Strategy<Value = ActionType> {
			prop::sample::select(ActionType::all().to_vec())
		}

		fn arb_access_level() -> impl Strategy<Value = AccessLevel> {
			prop::sample::select(AccessLevel::all().to_vec())
		}

		fn arb_resource_type() -> impl Strategy<Value = ResourceType> {
			prop::sample::select(ResourceType::all().to_vec())
		}

		fn arb_resource() -> impl Strategy<Value = ResourceContext> {
			(
				arb_resource_type(),
				any::<i64>(),
				proptest::option::of(any::<i64>()),
				proptest::option::of(arb_access_level()),
			)
				.prop_map(|(resource_type, owner, department, level)| {
					let mut resource = ResourceContext::new(resource_type, UserId::new(owner));
					if let Some(department) = department {
						resource = resource.with_department(DepartmentId::new(department));
					}
					if let Some(level) = level {
						resource = resource.shared(level);
					}
					resource
				})
		}

		fn arb_department_role() -> impl Strategy<Value = DepartmentRole> {
			prop::sample::select(DepartmentRole::all().to_vec())
		}

		proptest! {
			#[test]
			fn global_roles_are_always_allowed(
				actor_id in any::<i64>(),
				resource in arb_resource(),
				action in arb_action(),
			) {
				for role in [OrgRole::Superadmin, OrgRole::Owner] {
					let actor = ActorContext::new(UserId::new(actor_id), role);
					prop_assert!(decide(&actor, action, &resource).is_allowed());
				}
			}

			#[test]
			fn unrelated_resources_are_always_denied(
				actor_id in any::<i64>(),
				owner_id in any::<i64>(),
				actor_dept in any::<i64>(),
				resource_dept in any::<i64>(),
				department_role in arb_department_role(),
				action in arb_action(),
			) {
				prop_assume!(actor_id != owner_id);
				prop_assume!(actor_dept != resource_dept);

				let actor = ActorContext::new(UserId::new(actor_id), OrgRole::Member)
					.with_department_role(DepartmentId::new(actor_dept), department_role);
				let resource = ResourceContext::entity(UserId::new(owner_id))
					.with_department(DepartmentId::new(resource_dept));

				prop_assert_eq!(
					decide(&actor, action, &resource),
					Decision::Denied(ReasonCode::NotOwnedNotSharedNotDepartment)
				);
			}

			#[test]
			fn sharing_never_grants_delete_or_transfer(
				actor_id in any::<i64>(),
				owner_id in any::<i64>(),
				level in arb_access_level(),
			) {
				prop_assume!(actor_id != owner_id);

				let actor = ActorContext::new(UserId::new(actor_id), OrgRole::Member);
				let resource = ResourceContext::chat(UserId::new(owner_id)).shared(level);

				prop_assert!(!decide(&actor, ActionType::Delete, &resource).is_allowed());
				prop_assert!(!decide(&actor, ActionType::Transfer, &resource).is_allowed());
			}

			#[test]
			fn shared_capability_is_monotonic(
				actor_id in any::<i64>(),
				owner_id in any::<i64>(),
				action in arb_action(),
				lower in arb_access_level(),
				higher in arb_access_level(),
			) {
				prop_assume!(actor_id != owner_id);
				prop_assume!(higher.includes(lower));

				let actor = ActorContext::new(UserId::new(actor_id), OrgRole::Member);
				let owner = UserId::new(owner_id);
				let low = decide(&actor, action, &ResourceContext::entity(owner).shared(lower));
				let high = decide(&actor, action, &ResourceContext::entity(owner).shared(higher));

				prop_assert!(!low.is_allowed() || high.is_allowed());
			}

			#[test]
			fn owners_always_have_full_access(
				actor_id in any::<i64>(),
				department in proptest::option::of(any::<i64>()),
				action in arb_action(),
			) {
				let mut actor = ActorContext::new(UserId::new(actor_id), OrgRole::Member);
				if let Some(department) = department {
					actor = actor.in_department(DepartmentId::new(department));
				}
				let resource = ResourceContext::call(UserId::new(actor_id));

				prop_assert_eq!(
					decide(&actor, action, &resource),
					Decision::Allowed(ReasonCode::Ownership)
				);
			}
		}
	}
}
