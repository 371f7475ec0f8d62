use crate::commands::{
    authorization::Authorization,
    context::ExecutionContext,
    dispatcher::{Command, CommandDispatcher},
    error::{CommandError, CommandResult},
    handler::{ArgumentHandler, Usage},
};
use crate::player::PlayerId;
use tracing::{info, warn};

/// `/skyblockadmin`, for operators and the console.
pub struct AdminCommand;

impl AdminCommand {
    const PERMISSION: &'static str = "skyblock.admin";
}

impl Command for AdminCommand {
    fn setup(&self, dispatcher: &CommandDispatcher) {
        let results = [
            dispatcher.register(&["version", "v"], Version),
            dispatcher.register(&["team"], TeamInfo),
        ];
        for result in results {
            if let Err(err) = result {
                warn!("Could not register /{} argument: {}", dispatcher.label(), err);
            }
        }
    }

    fn can_use(&self, ctx: &ExecutionContext<'_>) -> Authorization {
        if ctx.has_permission(Self::PERMISSION) {
            Authorization::allow()
        } else {
            Authorization::deny(ctx.translate("general.errors.no-permission"))
        }
    }

    fn execute(&self, ctx: &mut ExecutionContext<'_>, args: &[String]) -> CommandResult<()> {
        if let Some(unknown) = args.first() {
            return Err(CommandError::runtime(
                ctx.translate("general.errors.unknown-argument")
                    .replace("[argument]", unknown),
            ));
        }
        ctx.reply(&format!("skyblock {}", env!("CARGO_PKG_VERSION")));
        Ok(())
    }
}

struct Version;

impl ArgumentHandler for Version {
    fn can_use(&self, _ctx: &ExecutionContext<'_>) -> Authorization {
        Authorization::allow()
    }

    fn execute(&self, ctx: &mut ExecutionContext<'_>, _args: &[String]) -> CommandResult<()> {
        ctx.reply(&format!("skyblock {}", env!("CARGO_PKG_VERSION")));
        Ok(())
    }

    fn usage(&self, ctx: &ExecutionContext<'_>) -> Usage {
        Usage::new("", ctx.translate("admin.help.version"))
    }
}

/// Shows the team of any player, given their uuid.
struct TeamInfo;

impl ArgumentHandler for TeamInfo {
    fn can_use(&self, _ctx: &ExecutionContext<'_>) -> Authorization {
        Authorization::allow()
    }

    fn execute(&self, ctx: &mut ExecutionContext<'_>, args: &[String]) -> CommandResult<()> {
        let [player] = args else {
            return Err(CommandError::runtime(
                ctx.translate("admin.team.usage"),
            ));
        };
        let player: PlayerId = player.parse().map_err(|_| {
            CommandError::runtime(
                ctx.translate("general.errors.unknown-player")
                    .replace("[player]", player),
            )
        })?;

        info!("Team lookup for {} requested", player);
        match ctx.env().team(player) {
            Some(team) => {
                ctx.reply(
                    &ctx.translate("island.team.leader")
                        .replace("[leader]", &team.leader.to_string()),
                );
                ctx.reply(
                    &ctx.translate("island.info.team-size")
                        .replace("[size]", &team.members.len().to_string()),
                );
            }
            None => ctx.reply(&ctx.env().translate_for(player, "general.errors.no-team")),
        }
        Ok(())
    }

    fn usage(&self, ctx: &ExecutionContext<'_>) -> Usage {
        Usage::new("<uuid>", ctx.translate("admin.help.team"))
    }
}
