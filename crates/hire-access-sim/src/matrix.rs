// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Permission matrix over representative actors and resources.

use hire_access_core::{
	evaluate, AccessLevel, ActionType, ActorContext, DepartmentId, DepartmentRole, OrgRole,
	ReasonCode, ResourceContext, UserId,
};
use serde::Serialize;

const ACTOR: UserId = UserId::new(1);
const COLLEAGUE: UserId = UserId::new(2);
const HOME: DepartmentId = DepartmentId::new(5);
const ELSEWHERE: DepartmentId = DepartmentId::new(9);

/// One actor profile evaluated against one resource situation.
#[derive(Debug, Clone, Serialize)]
pub struct MatrixRow {
	pub profile: &'static str,
	pub situation: &'static str,
	pub cells: Vec<MatrixCell>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatrixCell {
	pub action: ActionType,
	pub allowed: bool,
	pub reason: ReasonCode,
}

fn profiles() -> [(&'static str, ActorContext); 6] {
	let member = ActorContext::new(ACTOR, OrgRole::Member);
	[
		("superadmin", ActorContext::new(ACTOR, OrgRole::Superadmin)),
		("owner", ActorContext::new(ACTOR, OrgRole::Owner)),
		("lead", member.with_department_role(HOME, DepartmentRole::Lead)),
		("sub_admin", member.with_department_role(HOME, DepartmentRole::SubAdmin)),
		("member", member.with_department_role(HOME, DepartmentRole::Member)),
		("member (other department)", member.in_department(ELSEWHERE)),
	]
}

fn situations() -> [(&'static str, ResourceContext); 5] {
	let colleagues = ResourceContext::entity(COLLEAGUE).with_department(HOME);
	[
		("own", ResourceContext::entity(ACTOR).with_department(HOME)),
		("colleague's, unshared", colleagues),
		("colleague's, shared view", colleagues.shared(AccessLevel::View)),
		("colleague's, shared edit", colleagues.shared(AccessLevel::Edit)),
		("colleague's, shared full", colleagues.shared(AccessLevel::Full)),
	]
}

/// Evaluates every action for every profile and situation.
pub fn build() -> Vec<MatrixRow> {
	let situations = situations();
	profiles()
		.into_iter()
		.flat_map(|(profile, actor)| {
			situations.iter().map(move |(situation, resource)| MatrixRow {
				profile,
				situation: *situation,
				cells: ActionType::all()
					.iter()
					.map(|action| {
						let verdict = evaluate(&actor, *action, resource, None);
						MatrixCell {
							action: *action,
							allowed: verdict.allowed,
							reason: verdict.reason,
						}
					})
					.collect(),
			})
		})
		.collect()
}
