use super::arguments::ArgumentTable;
use super::dispatcher::CommandInfo;
use super::CommandSender;
use crate::commands::error::{CommandResult, RuntimeError};
use crate::env::{Environment, IdentityResolver, Team, TeamLookup};
use crate::player::PlayerId;
use indexmap::IndexSet;
use tracing::debug;

/// What is known about the sender of one invocation.
///
/// Built fresh for every invocation and completion request, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerContext {
    interactive: bool,
    player: Option<PlayerId>,
    team: Option<Team>,
}

impl CallerContext {
    pub fn resolve<E>(env: &E, sender: &CommandSender) -> Self
    where
        E: IdentityResolver + TeamLookup + ?Sized,
    {
        let identity = env.identify(sender);
        let player = if identity.interactive {
            identity.id
        } else {
            None
        };
        let team = player.and_then(|id| env.team(id));

        match &team {
            Some(team) => debug!(
                "caller {:?} is in team led by {} with {} members",
                player,
                team.leader,
                team.members.len()
            ),
            None => debug!(
                "caller {:?} (interactive: {}) is not in a team",
                player, identity.interactive
            ),
        }

        Self {
            interactive: identity.interactive,
            player,
            team,
        }
    }

    pub fn console() -> Self {
        Self {
            interactive: false,
            player: None,
            team: None,
        }
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    pub fn player_id(&self) -> Option<PlayerId> {
        self.player
    }

    pub fn is_in_team(&self) -> bool {
        self.team.is_some()
    }

    pub fn team_leader(&self) -> Option<PlayerId> {
        self.team.as_ref().map(|team| team.leader)
    }

    pub fn team_members(&self) -> IndexSet<PlayerId> {
        self.team
            .as_ref()
            .map(|team| team.members.clone())
            .unwrap_or_default()
    }

    pub fn team(&self) -> Option<&Team> {
        self.team.as_ref()
    }
}

/// Everything a handler sees while it runs.
pub struct ExecutionContext<'a> {
    env: &'a dyn Environment,
    sender: &'a CommandSender,
    caller: CallerContext,
    command: &'a CommandInfo,
    arguments: &'a ArgumentTable,
}

impl<'a> ExecutionContext<'a> {
    pub(super) fn new(
        env: &'a dyn Environment,
        sender: &'a CommandSender,
        command: &'a CommandInfo,
        arguments: &'a ArgumentTable,
    ) -> Self {
        Self {
            env,
            sender,
            caller: CallerContext::resolve(env, sender),
            command,
            arguments,
        }
    }

    pub fn sender(&self) -> &CommandSender {
        self.sender
    }

    pub fn caller(&self) -> &CallerContext {
        &self.caller
    }

    pub fn command(&self) -> &'a CommandInfo {
        self.command
    }

    pub fn arguments(&self) -> &'a ArgumentTable {
        self.arguments
    }

    pub fn env(&self) -> &'a dyn Environment {
        self.env
    }

    pub fn reply(&self, message: &str) {
        self.env.send(self.sender, message);
    }

    pub fn error(&self, message: &str) {
        self.env.send(self.sender, &format!("Error: {}", message));
    }

    /// Looks up `key` in the sender's locale.
    pub fn translate(&self, key: &str) -> String {
        self.env.translate(self.sender, key)
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.env.has_permission(self.sender, permission)
    }

    pub fn player_id(&self) -> CommandResult<PlayerId> {
        self.caller
            .player_id()
            .ok_or_else(|| RuntimeError::PlayerOnly.into())
    }

    pub fn require_team(&self) -> CommandResult<&Team> {
        self.caller
            .team()
            .ok_or_else(|| RuntimeError::NotInTeam.into())
    }
}
