use crate::commands::{
    authorization::Authorization,
    context::ExecutionContext,
    dispatcher::{Command, CommandDispatcher},
    error::CommandResult,
    handler::{ArgumentHandler, Usage},
};
use indexmap::IndexSet;
use tracing::warn;

/// `/island`, the player facing command.
pub struct IslandCommand;

impl Command for IslandCommand {
    fn setup(&self, dispatcher: &CommandDispatcher) {
        let results = [
            dispatcher.register(&["go", "home", "h"], Go),
            dispatcher.register(&["info"], Info),
            dispatcher.register(&["sethome", "sh"], SetHome),
            dispatcher.register(&["team"], Team),
        ];
        for result in results {
            if let Err(err) = result {
                warn!("Could not register /{} argument: {}", dispatcher.label(), err);
            }
        }
    }

    fn can_use(&self, ctx: &ExecutionContext<'_>) -> Authorization {
        if ctx.caller().is_interactive() {
            Authorization::allow()
        } else {
            Authorization::deny(ctx.translate("general.errors.use-in-game"))
        }
    }

    fn execute(&self, ctx: &mut ExecutionContext<'_>, _args: &[String]) -> CommandResult<()> {
        ctx.reply(&ctx.translate("island.go.teleport"));
        Ok(())
    }
}

struct Go;

impl ArgumentHandler for Go {
    fn can_use(&self, _ctx: &ExecutionContext<'_>) -> Authorization {
        Authorization::allow()
    }

    fn execute(&self, ctx: &mut ExecutionContext<'_>, _args: &[String]) -> CommandResult<()> {
        ctx.reply(&ctx.translate("island.go.teleport"));
        Ok(())
    }

    fn usage(&self, ctx: &ExecutionContext<'_>) -> Usage {
        Usage::new("", ctx.translate("island.help.go"))
    }
}

struct Info;

impl ArgumentHandler for Info {
    fn can_use(&self, _ctx: &ExecutionContext<'_>) -> Authorization {
        Authorization::allow()
    }

    fn execute(&self, ctx: &mut ExecutionContext<'_>, _args: &[String]) -> CommandResult<()> {
        let player = ctx.player_id()?;
        let owner = ctx.caller().team_leader().unwrap_or(player);
        ctx.reply(
            &ctx.translate("island.info.owner")
                .replace("[owner]", &owner.to_string()),
        );
        if ctx.caller().is_in_team() {
            ctx.reply(
                &ctx.translate("island.info.team-size")
                    .replace("[size]", &ctx.caller().team_members().len().to_string()),
            );
        }
        Ok(())
    }

    fn usage(&self, ctx: &ExecutionContext<'_>) -> Usage {
        Usage::new("", ctx.translate("island.help.info"))
    }
}

struct SetHome;

impl SetHome {
    const PERMISSION: &'static str = "skyblock.island.sethome";
}

impl ArgumentHandler for SetHome {
    fn can_use(&self, ctx: &ExecutionContext<'_>) -> Authorization {
        ctx.has_permission(Self::PERMISSION).into()
    }

    fn execute(&self, ctx: &mut ExecutionContext<'_>, _args: &[String]) -> CommandResult<()> {
        ctx.reply(&ctx.translate("island.sethome.home-set"));
        Ok(())
    }

    fn usage(&self, ctx: &ExecutionContext<'_>) -> Usage {
        Usage::new("", ctx.translate("island.help.sethome"))
    }
}

struct Team;

impl ArgumentHandler for Team {
    fn can_use(&self, ctx: &ExecutionContext<'_>) -> Authorization {
        if ctx.caller().is_in_team() {
            Authorization::allow()
        } else {
            Authorization::deny(ctx.translate("general.errors.no-team"))
        }
    }

    fn execute(&self, ctx: &mut ExecutionContext<'_>, _args: &[String]) -> CommandResult<()> {
        let team = ctx.require_team()?;
        ctx.reply(
            &ctx.translate("island.team.leader")
                .replace("[leader]", &team.leader.to_string()),
        );
        for member in team.members.iter().filter(|&&member| member != team.leader) {
            ctx.reply(
                &ctx.translate("island.team.member")
                    .replace("[member]", &member.to_string()),
            );
        }
        Ok(())
    }

    fn completion_options(
        &self,
        _ctx: &ExecutionContext<'_>,
        args: &[String],
    ) -> Option<IndexSet<String>> {
        (args.len() <= 1).then(|| IndexSet::from(["members".to_string()]))
    }

    fn usage(&self, ctx: &ExecutionContext<'_>) -> Usage {
        Usage::new("[members]", ctx.translate("island.help.team"))
    }
}
