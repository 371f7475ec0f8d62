mod admin;
mod island;

pub use admin::AdminCommand;
pub use island::IslandCommand;

use crate::commands::{
    authorization::Authorization,
    context::ExecutionContext,
    dispatcher::CommandInfo,
    error::CommandResult,
    handler::ArgumentHandler,
    registry::CommandRegistry,
};
use crate::config::ServerConfig;
use itertools::Itertools;
use tracing::warn;

pub fn register_commands(registry: &mut CommandRegistry, config: &ServerConfig) {
    let info = |info: CommandInfo| {
        if config.help_enabled {
            info
        } else {
            info.without_help()
        }
    };

    let commands = [
        registry.register(info(CommandInfo::new("island").alias("is")), IslandCommand),
        registry.register(
            info(CommandInfo::new("skyblockadmin").alias("bsbadmin")),
            AdminCommand,
        ),
    ];
    for result in commands {
        if let Err(err) = result {
            warn!("Could not register command: {}", err);
        }
    }

    for (path, aliases) in &config.argument_aliases {
        let Some((label, argument)) = path.split_once('.') else {
            warn!("Argument alias key '{}' should look like 'command.argument'", path);
            continue;
        };
        let Some(dispatcher) = registry.get(label) else {
            warn!("Argument alias key '{}' names an unknown command", path);
            continue;
        };
        let aliases = aliases.iter().map(String::as_str).collect_vec();
        if let Err(err) = dispatcher.add_aliases(argument, &aliases) {
            warn!("Could not add aliases for '{}': {}", path, err);
        }
    }

    for (alias, replacement) in &config.command_aliases {
        registry.add_custom_alias(alias.trim(), replacement.trim());
    }
}

/// The `help` argument every command gets unless it opts out.
pub struct HelpHandler;

impl HelpHandler {
    pub const NAME: &'static str = "help";
    pub const ALIAS: &'static str = "?";
}

impl ArgumentHandler for HelpHandler {
    fn can_use(&self, _ctx: &ExecutionContext<'_>) -> Authorization {
        Authorization::allow()
    }

    fn execute(&self, ctx: &mut ExecutionContext<'_>, args: &[String]) -> CommandResult<()> {
        let arguments = ctx.arguments();

        if let Some(topic) = args.first() {
            let canonical = arguments.resolve(topic);
            if let Some(handler) = arguments.get(canonical) {
                if handler.can_use(ctx).is_allowed() {
                    ctx.reply(&short_description(ctx, canonical, handler.as_ref()));
                    return Ok(());
                }
            }
        }

        ctx.reply(&ctx.translate("help.header"));
        for (name, handler) in arguments.iter() {
            if handler.can_use(ctx).is_allowed() {
                ctx.reply(&short_description(ctx, name, handler.as_ref()));
            }
        }
        ctx.reply(&ctx.translate("help.end"));
        Ok(())
    }
}

/// One help line for an argument, built from the `help.syntax` template.
pub fn short_description(
    ctx: &ExecutionContext<'_>,
    canonical: &str,
    handler: &dyn ArgumentHandler,
) -> String {
    let separator = ctx.translate("help.syntax-alias-separator");
    let command = std::iter::once(canonical)
        .chain(ctx.arguments().aliases_of(canonical))
        .join(&separator);
    let usage = handler.usage(ctx);

    ctx.translate("help.syntax")
        .replace("[label]", ctx.command().display_name())
        .replace("[command]", &command)
        .replace("[args]", usage.args.as_deref().unwrap_or(""))
        .replace("[info]", usage.info.as_deref().unwrap_or(""))
}
