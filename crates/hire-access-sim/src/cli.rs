// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use hire_access_core::{
	AccessLevel, ActionType, ActorContext, DepartmentId, DepartmentRole, OrgRole, ResourceContext,
	ResourceType, Scenario, TargetRole, TargetUser, UserId,
};

#[derive(Parser, Debug)]
#[command(
	name = "hire-access-sim",
	version,
	about = "Evaluate recruiting access-control decisions",
	long_about = None
)]
pub struct Cli {
	/// Config file (default: ~/.config/hire-access/simulator.toml)
	#[arg(long, global = true, env = "HIRE_ACCESS_CONFIG")]
	pub config: Option<PathBuf>,

	/// Emit JSON regardless of the configured output format
	#[arg(long, global = true)]
	pub json: bool,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Evaluate a single action
	Check(CheckArgs),

	/// Run a TOML scenario suite and compare against expectations
	Run {
		/// Suite file
		file: PathBuf,
	},

	/// Print the permission matrix for representative roles
	Matrix,
}

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
	#[arg(long)]
	pub actor_id: UserId,

	#[arg(long, default_value = "member")]
	pub org_role: OrgRole,

	/// Actor's department
	#[arg(long)]
	pub department: Option<DepartmentId>,

	#[arg(long, requires = "department")]
	pub department_role: Option<DepartmentRole>,

	#[arg(long)]
	pub action: ActionType,

	#[arg(long, default_value = "entity")]
	pub resource_type: ResourceType,

	/// Resource owner
	#[arg(long)]
	pub owner: UserId,

	#[arg(long)]
	pub resource_department: Option<DepartmentId>,

	#[arg(long)]
	pub shared: bool,

	/// Access level of the share; defaults to view
	#[arg(long, requires = "shared")]
	pub access_level: Option<AccessLevel>,

	/// Share recipient
	#[arg(long, requires = "target_role")]
	pub target_id: Option<UserId>,

	#[arg(long, requires = "target_id")]
	pub target_role: Option<TargetRole>,

	#[arg(long, requires = "target_id")]
	pub target_department: Option<DepartmentId>,
}

impl CheckArgs {
	pub fn scenario(&self) -> hire_access_core::Result<Scenario> {
		let actor = ActorContext::try_new(
			self.actor_id,
			self.org_role,
			self.department,
			self.department_role,
		)?;
		let resource = ResourceContext::try_new(
			self.resource_type,
			self.owner,
			self.resource_department,
			self.shared,
			self.access_level,
		)?;
		let target = match (self.target_id, self.target_role) {
			(Some(id), Some(role)) => Some(TargetUser {
				id,
				role,
				department_id: self.target_department,
			}),
			_ => None,
		};

		Ok(Scenario {
			actor,
			action: self.action,
			resource,
			target,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use clap::CommandFactory;

	fn check(args: &[&str]) -> Result<CheckArgs, clap::Error> {
		let mut argv = vec!["hire-access-sim", "check"];
		argv.extend_from_slice(args);
		match Cli::try_parse_from(argv)?.command {
			Command::Check(args) => Ok(args),
			other => panic!("unexpected command {other:?}"),
		}
	}

	#[test]
	fn cli_definition_is_valid() {
		Cli::command().debug_assert();
	}

	#[test]
	fn parses_typed_values() {
		let args = check(&[
			"--actor-id",
			"1",
			"--department",
			"5",
			"--department-role",
			"lead",
			"--action",
			"delete",
			"--owner",
			"2",
			"--resource-department",
			"5",
		])
		.unwrap();

		assert_eq!(args.org_role, OrgRole::Member);
		assert_eq!(args.resource_type, ResourceType::Entity);
		assert_eq!(args.department_role, Some(DepartmentRole::Lead));

		let scenario = args.scenario().unwrap();
		assert_eq!(scenario.actor.department_id(), Some(DepartmentId::new(5)));
		assert!(scenario.evaluate().allowed);
	}

	#[test]
	fn rejects_unknown_vocabulary() {
		let result = check(&["--actor-id", "1", "--action", "archive", "--owner", "2"]);
		assert!(result.is_err());
	}

	#[test]
	fn department_role_requires_department() {
		let result = check(&[
			"--actor-id",
			"1",
			"--department-role",
			"lead",
			"--action",
			"view",
			"--owner",
			"2",
		]);
		assert!(result.is_err());
	}

	#[test]
	fn target_is_built_from_parts() {
		let args = check(&[
			"--actor-id",
			"1",
			"--action",
			"share",
			"--owner",
			"1",
			"--target-id",
			"3",
			"--target-role",
			"member",
			"--target-department",
			"9",
		])
		.unwrap();

		let target = args.scenario().unwrap().target.unwrap();
		assert_eq!(target.id, UserId::new(3));
		assert_eq!(target.department_id, Some(DepartmentId::new(9)));
	}

	#[test]
	fn global_flags_follow_subcommand() {
		let cli = Cli::try_parse_from(["hire-access-sim", "matrix", "--json"]).unwrap();
		assert!(cli.json);
		assert!(matches!(cli.command, Command::Matrix));
	}
}
