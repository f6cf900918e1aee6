// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core type definitions for access decisions.
//!
//! This module defines the value vocabulary shared by the engine:
//!
//! - **ID newtypes**: Type-safe wrappers around the integer keys of the identity
//!   store ([`UserId`], [`DepartmentId`]) preventing accidental mixing
//! - **Resource types**: What kind of record is being acted on ([`ResourceType`])
//! - **Actions**: The operation being attempted ([`ActionType`])
//! - **Access levels**: The bound on a shared grant ([`AccessLevel`])
//!
//! Every enum has a stable snake_case string form. Parsing a string outside the
//! vocabulary fails with a typed [`AccessError`] rather than falling back to a
//! default.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AccessError;

/// Implements `Display` and `FromStr` for a closed enum with `as_str` and `all`.
macro_rules! impl_str_enum {
	($ty:ty, $err:path) => {
		impl ::std::fmt::Display for $ty {
			fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
				f.write_str(self.as_str())
			}
		}

		impl ::std::str::FromStr for $ty {
			type Err = $crate::error::AccessError;

			fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
				Self::all()
					.iter()
					.copied()
					.find(|v| v.as_str() == s)
					.ok_or_else(|| $err(s.to_string()))
			}
		}
	};
}

pub(crate) use impl_str_enum;

// =============================================================================
// ID Newtypes
// =============================================================================

macro_rules! define_id_type {
	($name:ident, $doc:expr) => {
		#[doc = $doc]
		#[derive(
			Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
		)]
		#[serde(transparent)]
		pub struct $name(i64);

		impl $name {
			/// Create a new ID from its integer key.
			pub const fn new(id: i64) -> Self {
				Self(id)
			}

			/// Get the inner integer key.
			pub const fn get(self) -> i64 {
				self.0
			}
		}

		impl fmt::Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				write!(f, "{}", self.0)
			}
		}

		impl From<i64> for $name {
			fn from(id: i64) -> Self {
				Self(id)
			}
		}

		impl From<$name> for i64 {
			fn from(id: $name) -> Self {
				id.0
			}
		}

		impl FromStr for $name {
			type Err = AccessError;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				s.trim()
					.parse::<i64>()
					.map(Self)
					.map_err(|_| AccessError::InvalidId(s.to_string()))
			}
		}
	};
}

define_id_type!(UserId, "Unique identifier for a user.");
define_id_type!(DepartmentId, "Unique identifier for a department.");

// =============================================================================
// Resource Types
// =============================================================================

/// Kinds of records protected by the engine.
///
/// No rule varies by resource type; it is carried so decisions can be audited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
	/// A recruiting contact.
	Entity,
	/// A chat thread attached to a contact.
	Chat,
	/// A recorded call.
	Call,
}

impl ResourceType {
	/// Returns all resource types.
	pub fn all() -> &'static [ResourceType] {
		&[ResourceType::Entity, ResourceType::Chat, ResourceType::Call]
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			ResourceType::Entity => "entity",
			ResourceType::Chat => "chat",
			ResourceType::Call => "call",
		}
	}
}

impl_str_enum!(ResourceType, AccessError::UnknownResourceType);

// =============================================================================
// Actions
// =============================================================================

/// Operations an actor may attempt on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
	View,
	Edit,
	Delete,
	Share,
	Transfer,
}

impl ActionType {
	/// Returns all actions, in the order affordances are presented.
	pub fn all() -> &'static [ActionType] {
		&[
			ActionType::View,
			ActionType::Edit,
			ActionType::Delete,
			ActionType::Share,
			ActionType::Transfer,
		]
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			ActionType::View => "view",
			ActionType::Edit => "edit",
			ActionType::Delete => "delete",
			ActionType::Share => "share",
			ActionType::Transfer => "transfer",
		}
	}
}

impl_str_enum!(ActionType, AccessError::UnknownAction);

// =============================================================================
// Access Levels
// =============================================================================

/// The bound on a grant made by sharing a resource with a non-owner.
///
/// Levels are ordered: `Full` includes everything `Edit` does, which includes
/// everything `View` does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
	View,
	Edit,
	Full,
}

impl AccessLevel {
	/// Returns all access levels, lowest first.
	pub fn all() -> &'static [AccessLevel] {
		&[AccessLevel::View, AccessLevel::Edit, AccessLevel::Full]
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			AccessLevel::View => "view",
			AccessLevel::Edit => "edit",
			AccessLevel::Full => "full",
		}
	}

	/// Returns true if this level includes at least the capability of `other`.
	pub fn includes(&self, other: AccessLevel) -> bool {
		*self >= other
	}
}

impl_str_enum!(AccessLevel, AccessError::UnknownAccessLevel);
