// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Context types for access evaluation.
//!
//! - [`ActorContext`]: Describes the identity attempting an action
//! - [`ResourceContext`]: Describes the contact, chat or call being acted on
//! - [`TargetUser`]: Describes the identity a share or user deletion is aimed at
//!
//! Contexts are built per request by the caller from its identity and resource
//! stores. They are immutable values; the engine never fetches or mutates them.
//! Construction enforces the invariants the rules rely on, so a context that
//! exists is well-formed. Deserialization goes through the same checks.

use serde::{Deserialize, Serialize};

use crate::error::{AccessError, Result};
use crate::role::{DepartmentRole, OrgRole, TargetRole};
use crate::types::{AccessLevel, DepartmentId, ResourceType, UserId};
use crate::Capability;

// =============================================================================
// Actor
// =============================================================================

/// Attributes of the identity attempting an action.
///
/// Invariant: a department role is only present together with a department id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ActorContextRepr")]
pub struct ActorContext {
	id: UserId,
	org_role: OrgRole,
	#[serde(skip_serializing_if = "Option::is_none")]
	department_id: Option<DepartmentId>,
	#[serde(skip_serializing_if = "Option::is_none")]
	department_role: Option<DepartmentRole>,
}

#[derive(Deserialize)]
struct ActorContextRepr {
	id: UserId,
	org_role: OrgRole,
	#[serde(default)]
	department_id: Option<DepartmentId>,
	#[serde(default)]
	department_role: Option<DepartmentRole>,
}

impl TryFrom<ActorContextRepr> for ActorContext {
	type Error = AccessError;

	fn try_from(repr: ActorContextRepr) -> Result<Self> {
		Self::try_new(
			repr.id,
			repr.org_role,
			repr.department_id,
			repr.department_role,
		)
	}
}

impl ActorContext {
	/// Creates an actor with no department.
	pub fn new(id: UserId, org_role: OrgRole) -> Self {
		Self {
			id,
			org_role,
			department_id: None,
			department_role: None,
		}
	}

	/// Creates an actor from the raw fields of an identity record.
	pub fn try_new(
		id: UserId,
		org_role: OrgRole,
		department_id: Option<DepartmentId>,
		department_role: Option<DepartmentRole>,
	) -> Result<Self> {
		if department_role.is_some() && department_id.is_none() {
			return Err(AccessError::invalid_actor(format!(
				"actor {id} has a department role but no department"
			)));
		}
		Ok(Self {
			id,
			org_role,
			department_id,
			department_role,
		})
	}

	/// Builder: place the actor in a department without a department role.
	pub fn in_department(mut self, department_id: DepartmentId) -> Self {
		self.department_id = Some(department_id);
		self
	}

	/// Builder: place the actor in a department with the given role.
	pub fn with_department_role(mut self, department_id: DepartmentId, role: DepartmentRole) -> Self {
		self.department_id = Some(department_id);
		self.department_role = Some(role);
		self
	}

	pub fn id(&self) -> UserId {
		self.id
	}

	pub fn org_role(&self) -> OrgRole {
		self.org_role
	}

	pub fn department_id(&self) -> Option<DepartmentId> {
		self.department_id
	}

	pub fn department_role(&self) -> Option<DepartmentRole> {
		self.department_role
	}

	/// Resolves the actor into its capability tier.
	pub fn capability(&self) -> Capability {
		Capability::resolve(self)
	}

	/// Describes this actor as the target of another actor's share or deletion.
	pub fn as_target(&self) -> TargetUser {
		TargetUser {
			id: self.id,
			role: self.capability().target_role(),
			department_id: self.department_id,
		}
	}
}

// =============================================================================
// Resource
// =============================================================================

/// Attributes of the resource being acted on.
///
/// Invariant: an access level is only present on a shared resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ResourceContextRepr")]
pub struct ResourceContext {
	resource_type: ResourceType,
	owner_id: UserId,
	#[serde(skip_serializing_if = "Option::is_none")]
	department_id: Option<DepartmentId>,
	is_shared: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	access_level: Option<AccessLevel>,
}

#[derive(Deserialize)]
struct ResourceContextRepr {
	#[serde(default = "default_resource_type")]
	resource_type: ResourceType,
	owner_id: UserId,
	#[serde(default)]
	department_id: Option<DepartmentId>,
	#[serde(default)]
	is_shared: bool,
	#[serde(default)]
	access_level: Option<AccessLevel>,
}

fn default_resource_type() -> ResourceType {
	ResourceType::Entity
}

impl TryFrom<ResourceContextRepr> for ResourceContext {
	type Error = AccessError;

	fn try_from(repr: ResourceContextRepr) -> Result<Self> {
		Self::try_new(
			repr.resource_type,
			repr.owner_id,
			repr.department_id,
			repr.is_shared,
			repr.access_level,
		)
	}
}

impl ResourceContext {
	/// Creates an unshared resource with no department.
	pub fn new(resource_type: ResourceType, owner_id: UserId) -> Self {
		Self {
			resource_type,
			owner_id,
			department_id: None,
			is_shared: false,
			access_level: None,
		}
	}

	/// Creates a resource from the raw fields of a metadata record.
	pub fn try_new(
		resource_type: ResourceType,
		owner_id: UserId,
		department_id: Option<DepartmentId>,
		is_shared: bool,
		access_level: Option<AccessLevel>,
	) -> Result<Self> {
		if !is_shared && access_level.is_some() {
			return Err(AccessError::invalid_resource(format!(
				"{resource_type} owned by {owner_id} has an access level but is not shared"
			)));
		}
		Ok(Self {
			resource_type,
			owner_id,
			department_id,
			is_shared,
			access_level,
		})
	}

	/// Creates resource context for a contact.
	pub fn entity(owner_id: UserId) -> Self {
		Self::new(ResourceType::Entity, owner_id)
	}

	/// Creates resource context for a chat.
	pub fn chat(owner_id: UserId) -> Self {
		Self::new(ResourceType::Chat, owner_id)
	}

	/// Creates resource context for a call.
	pub fn call(owner_id: UserId) -> Self {
		Self::new(ResourceType::Call, owner_id)
	}

	/// Builder: set the owning department.
	pub fn with_department(mut self, department_id: DepartmentId) -> Self {
		self.department_id = Some(department_id);
		self
	}

	/// Builder: mark the resource as shared with the acting user at `level`.
	pub fn shared(mut self, level: AccessLevel) -> Self {
		self.is_shared = true;
		self.access_level = Some(level);
		self
	}

	pub fn resource_type(&self) -> ResourceType {
		self.resource_type
	}

	pub fn owner_id(&self) -> UserId {
		self.owner_id
	}

	pub fn department_id(&self) -> Option<DepartmentId> {
		self.department_id
	}

	pub fn is_shared(&self) -> bool {
		self.is_shared
	}

	pub fn access_level(&self) -> Option<AccessLevel> {
		self.access_level
	}

	/// Returns the level a share grants, or `None` if the resource is not shared.
	///
	/// A shared resource without a recorded level grants the lowest level.
	pub fn shared_access_level(&self) -> Option<AccessLevel> {
		self
			.is_shared
			.then(|| self.access_level.unwrap_or(AccessLevel::View))
	}
}

// =============================================================================
// Target
// =============================================================================

/// Attributes of the user a share or a user deletion is directed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetUser {
	pub id: UserId,
	pub role: TargetRole,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub department_id: Option<DepartmentId>,
}

impl TargetUser {
	/// Creates a target with no department.
	pub fn new(id: UserId, role: TargetRole) -> Self {
		Self {
			id,
			role,
			department_id: None,
		}
	}

	/// Builder: set the target's department.
	pub fn in_department(mut self, department_id: DepartmentId) -> Self {
		self.department_id = Some(department_id);
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	mod actor {
		use super::*;

		#[test]
		fn new_has_no_department() {
			let actor = ActorContext::new(UserId::new(1), OrgRole::Member);
			assert_eq!(actor.department_id(), None);
			assert_eq!(actor.department_role(), None);
		}

		#[test]
		fn department_role_builder_sets_both_fields() {
			let actor = ActorContext::new(UserId::new(1), OrgRole::Member)
				.with_department_role(DepartmentId::new(5), DepartmentRole::Lead);
			assert_eq!(actor.department_id(), Some(DepartmentId::new(5)));
			assert_eq!(actor.department_role(), Some(DepartmentRole::Lead));
		}

		#[test]
		fn department_role_without_department_is_malformed() {
			let result = ActorContext::try_new(
				UserId::new(1),
				OrgRole::Member,
				None,
				Some(DepartmentRole::SubAdmin),
			);
			assert!(matches!(result, Err(AccessError::InvalidActor(_))));
		}

		#[test]
		fn deserialize_validates() {
			let err = serde_json::from_str::<ActorContext>(
				r#"{"id": 1, "org_role": "member", "department_role": "lead"}"#,
			)
			.unwrap_err();
			assert!(err.to_string().contains("no department"));
		}

		#[test]
		fn deserialize_rejects_unknown_role() {
			let result =
				serde_json::from_str::<ActorContext>(r#"{"id": 1, "org_role": "boss"}"#);
			assert!(result.is_err());
		}

		#[test]
		fn deserialize_accepts_department_member() {
			let actor: ActorContext =
				serde_json::from_str(r#"{"id": 3, "org_role": "member", "department_id": 5}"#)
					.unwrap();
			assert_eq!(
				actor,
				ActorContext::new(UserId::new(3), OrgRole::Member).in_department(DepartmentId::new(5))
			);
		}

		#[test]
		fn as_target_uses_effective_role() {
			let lead = ActorContext::new(UserId::new(2), OrgRole::Admin)
				.with_department_role(DepartmentId::new(5), DepartmentRole::Lead);
			let target = lead.as_target();
			assert_eq!(target.id, UserId::new(2));
			assert_eq!(target.role, TargetRole::Lead);
			assert_eq!(target.department_id, Some(DepartmentId::new(5)));

			let owner = ActorContext::new(UserId::new(3), OrgRole::Owner);
			assert_eq!(owner.as_target().role, TargetRole::Owner);
		}
	}

	mod resource {
		use super::*;

		#[test]
		fn constructors_set_type() {
			assert_eq!(
				ResourceContext::entity(UserId::new(1)).resource_type(),
				ResourceType::Entity
			);
			assert_eq!(
				ResourceContext::chat(UserId::new(1)).resource_type(),
				ResourceType::Chat
			);
			assert_eq!(
				ResourceContext::call(UserId::new(1)).resource_type(),
				ResourceType::Call
			);
		}

		#[test]
		fn shared_builder_sets_level() {
			let resource = ResourceContext::call(UserId::new(1))
				.with_department(DepartmentId::new(5))
				.shared(AccessLevel::Edit);
			assert!(resource.is_shared());
			assert_eq!(resource.access_level(), Some(AccessLevel::Edit));
			assert_eq!(resource.department_id(), Some(DepartmentId::new(5)));
		}

		#[test]
		fn access_level_on_unshared_resource_is_malformed() {
			let result = ResourceContext::try_new(
				ResourceType::Chat,
				UserId::new(1),
				None,
				false,
				Some(AccessLevel::Full),
			);
			assert!(matches!(result, Err(AccessError::InvalidResource(_))));
		}

		#[test]
		fn shared_without_level_grants_view() {
			let resource =
				ResourceContext::try_new(ResourceType::Chat, UserId::new(1), None, true, None).unwrap();
			assert_eq!(resource.shared_access_level(), Some(AccessLevel::View));
		}

		#[test]
		fn unshared_resource_grants_no_level() {
			let resource = ResourceContext::chat(UserId::new(1));
			assert_eq!(resource.shared_access_level(), None);
		}

		#[test]
		fn deserialize_defaults_and_validates() {
			let resource: ResourceContext =
				serde_json::from_str(r#"{"owner_id": 9, "department_id": 5}"#).unwrap();
			assert_eq!(resource.resource_type(), ResourceType::Entity);
			assert!(!resource.is_shared());

			let err = serde_json::from_str::<ResourceContext>(
				r#"{"owner_id": 9, "access_level": "edit"}"#,
			)
			.unwrap_err();
			assert!(err.to_string().contains("not shared"));
		}

		#[test]
		fn serialize_skips_absent_fields() {
			let json = serde_json::to_value(ResourceContext::entity(UserId::new(4))).unwrap();
			assert_eq!(
				json,
				serde_json::json!({"resource_type": "entity", "owner_id": 4, "is_shared": false})
			);
		}
	}
}
