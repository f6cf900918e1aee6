// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for malformed access-control input.
//!
//! A denial is never an error. These variants describe inputs that fall
//! outside the closed role, action and access-level vocabularies, or context
//! values that violate their construction invariants.

use thiserror::Error;

/// Result type for access-control operations.
pub type Result<T> = std::result::Result<T, AccessError>;

/// Errors raised for malformed access-control input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
	#[error("unknown organization role: {0}")]
	UnknownOrgRole(String),

	#[error("unknown department role: {0}")]
	UnknownDepartmentRole(String),

	#[error("unknown target role: {0}")]
	UnknownTargetRole(String),

	#[error("unknown resource type: {0}")]
	UnknownResourceType(String),

	#[error("unknown action: {0}")]
	UnknownAction(String),

	#[error("unknown access level: {0}")]
	UnknownAccessLevel(String),

	#[error("unknown reason code: {0}")]
	UnknownReasonCode(String),

	#[error("invalid id: {0}")]
	InvalidId(String),

	#[error("invalid actor context: {0}")]
	InvalidActor(String),

	#[error("invalid resource context: {0}")]
	InvalidResource(String),
}

impl AccessError {
	pub fn invalid_actor(msg: impl Into<String>) -> Self {
		Self::InvalidActor(msg.into())
	}

	pub fn invalid_resource(msg: impl Into<String>) -> Self {
		Self::InvalidResource(msg.into())
	}
}
