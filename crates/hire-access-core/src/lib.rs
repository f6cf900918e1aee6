// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Access control for recruiting contacts, chats and calls.
//!
//! This crate is the single implementation of the rules that decide, for any
//! organizational role, whether an actor may view, edit, delete, share or
//! transfer a resource, to whom a resource may be re-shared, and who may remove
//! whom from the organization.
//!
//! # Layers
//!
//! | Module | Provides |
//! |--------|----------|
//! | [`role`] | Role vocabulary and predicates |
//! | [`capability`] | [`Capability`], the resolved privilege tier of an actor |
//! | [`abac`] | Context types and the decision functions |
//! | [`scenario`] | `{allowed, reason}` verdicts and UI affordances |
//! | [`audit`] | Serializable records of evaluated decisions |
//!
//! # Example
//!
//! ```
//! use hire_access_core::{
//! 	decide, ActionType, ActorContext, DepartmentId, DepartmentRole, OrgRole, ReasonCode,
//! 	ResourceContext, UserId,
//! };
//!
//! let lead = ActorContext::new(UserId::new(1), OrgRole::Member)
//! 	.with_department_role(DepartmentId::new(5), DepartmentRole::Lead);
//! let contact = ResourceContext::entity(UserId::new(2)).with_department(DepartmentId::new(5));
//!
//! let decision = decide(&lead, ActionType::Delete, &contact);
//! assert!(decision.is_allowed());
//! assert_eq!(decision.reason(), ReasonCode::DepartmentAdmin);
//! ```
//!
//! The engine is synchronous and holds no state. Every function takes its
//! inputs by reference and returns a value, so it can be called from any number
//! of threads without coordination.

pub mod abac;
pub mod audit;
pub mod capability;
pub mod error;
pub mod reason;
pub mod role;
pub mod scenario;
pub mod types;

pub use abac::{can_delete_user, can_share_to, decide, ActorContext, ResourceContext, TargetUser};
pub use audit::{DecisionRecord, UserDeletionRecord};
pub use capability::{AdminRank, Capability};
pub use error::{AccessError, Result};
pub use reason::{Decision, ReasonCode, Verdict};
pub use role::{is_department_admin_role, is_global_role, DepartmentRole, OrgRole, TargetRole};
pub use scenario::{affordances, evaluate, evaluate_scenario, Affordances, Scenario};
pub use types::{AccessLevel, ActionType, DepartmentId, ResourceType, UserId};
