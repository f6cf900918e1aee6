// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Scenario evaluation.
//!
//! Composes engine calls into an auditable [`Verdict`]. The same functions gate
//! UI affordances and drive the policy simulator, so they are safe to call
//! speculatively: every call is a single stateless evaluation.
//!
//! Sharing with a specific user is two-phase. The actor must first be allowed to
//! share the resource at all, then the recipient must be eligible. Each phase
//! fails with its own reason code.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::abac::{can_share_to, decide, ActorContext, ResourceContext, TargetUser};
use crate::reason::{ReasonCode, Verdict};
use crate::types::ActionType;

/// Evaluates an action, and for `share` the recipient, into a verdict.
///
/// `target` is only consulted for [`ActionType::Share`].
#[instrument(
    level = "debug",
    skip_all,
    fields(
        actor_id = %actor.id(),
        action = %action,
        target_id = target.map(|t| t.id.get()),
    )
)]
pub fn evaluate(
	actor: &ActorContext,
	action: ActionType,
	resource: &ResourceContext,
	target: Option<&TargetUser>,
) -> Verdict {
	let decision = decide(actor, action, resource);
	if action != ActionType::Share || !decision.is_allowed() {
		return decision.into();
	}

	let Some(target) = target else {
		return decision.into();
	};

	if target.id == actor.id() {
		debug!(reason = %ReasonCode::SelfTargetDenied, "share target rejected");
		return Verdict::denied(ReasonCode::SelfTargetDenied);
	}

	if !can_share_to(actor, target) {
		debug!(reason = %ReasonCode::ShareTargetDenied, "share target rejected");
		return Verdict::denied(ReasonCode::ShareTargetDenied);
	}

	decision.into()
}

/// Evaluates an owned [`Scenario`].
pub fn evaluate_scenario(scenario: &Scenario) -> Verdict {
	evaluate(
		&scenario.actor,
		scenario.action,
		&scenario.resource,
		scenario.target.as_ref(),
	)
}

/// A single owned evaluation request, as loaded from a scenario suite.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scenario {
	pub actor: ActorContext,
	pub action: ActionType,
	pub resource: ResourceContext,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub target: Option<TargetUser>,
}

impl Scenario {
	pub fn new(actor: ActorContext, action: ActionType, resource: ResourceContext) -> Self {
		Self {
			actor,
			action,
			resource,
			target: None,
		}
	}

	/// Builder: set the recipient of a share.
	pub fn with_target(mut self, target: TargetUser) -> Self {
		self.target = Some(target);
		self
	}

	pub fn evaluate(&self) -> Verdict {
		evaluate_scenario(self)
	}
}

/// Which actions to offer an actor for one resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Affordances {
	pub view: bool,
	pub edit: bool,
	pub delete: bool,
	pub share: bool,
	pub transfer: bool,
}

impl Affordances {
	/// Returns true if `action` should be offered.
	pub fn allows(&self, action: ActionType) -> bool {
		match action {
			ActionType::View => self.view,
			ActionType::Edit => self.edit,
			ActionType::Delete => self.delete,
			ActionType::Share => self.share,
			ActionType::Transfer => self.transfer,
		}
	}
}

/// Evaluates every action once for rendering.
///
/// The share affordance reflects only whether the actor may share this resource;
/// recipients are checked when one is chosen.
pub fn affordances(actor: &ActorContext, resource: &ResourceContext) -> Affordances {
	let allowed = |action| evaluate(actor, action, resource, None).allowed;
	Affordances {
		view: allowed(ActionType::View),
		edit: allowed(ActionType::Edit),
		delete: allowed(ActionType::Delete),
		share: allowed(ActionType::Share),
		transfer: allowed(ActionType::Transfer),
	}
}
