// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Attribute-based access decisions for contacts, chats and calls.
//!
//! - [`decide`]: may an actor perform an action on a resource
//! - [`can_share_to`]: may an actor share with a given user
//! - [`can_delete_user`]: may an actor remove a given user
//!
//! Every enforcement point and every simulation surface calls these functions;
//! none re-derives the rule table.

pub mod engine;
pub mod policies;
pub mod types;

pub use engine::decide;
pub use policies::sharing::can_share_to;
pub use policies::user::can_delete_user;
pub use types::{ActorContext, ResourceContext, TargetUser};
