use super::arguments::ArgumentTable;
use super::builtin::HelpHandler;
use super::context::ExecutionContext;
use super::dispatcher::{clean, CommandDispatcher};
use super::error::{CommandError, CommandResult, InternalError};
use super::CommandSender;
use tracing::debug;

impl CommandDispatcher {
    /// Runs the command with the given arguments on behalf of `sender`.
    ///
    /// Denials and unknown arguments are normal outcomes. Only bugs in a
    /// command or its host are returned as errors.
    pub fn on_invoke(&self, sender: &CommandSender, args: &[String]) -> Result<(), InternalError> {
        let arguments = self.snapshot();
        let mut ctx = ExecutionContext::new(&*self.env, sender, &self.info, &arguments);

        match self.invoke_impl(&mut ctx, &arguments, args) {
            Ok(()) => Ok(()),
            Err(CommandError::Runtime(err)) => {
                ctx.error(&err.to_string());
                Ok(())
            }
            Err(CommandError::Internal(err)) => Err(err),
        }
    }

    fn invoke_impl(
        &self,
        ctx: &mut ExecutionContext<'_>,
        arguments: &ArgumentTable,
        args: &[String],
    ) -> CommandResult<()> {
        let authorization = self.command.can_use(ctx);
        if !authorization.is_allowed() {
            debug!("{:?} may not use /{}", sender_name(ctx), self.label());
            if let Some(message) = authorization.denial_message() {
                ctx.reply(message);
            }
            return Ok(());
        }

        let Some((first, rest)) = args.split_first() else {
            return self.command.execute(ctx, &[]);
        };
        let remaining = clean(rest);

        if let Some(handler) = arguments.get(first) {
            let authorization = handler.can_use(ctx);
            if authorization.is_allowed() {
                return handler.execute(ctx, &remaining);
            }
            if let Some(message) = authorization.denial_message() {
                ctx.reply(message);
                return Ok(());
            }
        }

        if self.info.help_enabled() {
            let help = arguments
                .get(HelpHandler::NAME)
                .ok_or_else(|| InternalError::MissingHandler {
                    name: HelpHandler::NAME.to_string(),
                })?;
            return help.execute(ctx, &remaining);
        }

        self.command.execute(ctx, args)
    }
}

fn sender_name(ctx: &ExecutionContext<'_>) -> String {
    match ctx.caller().player_id() {
        Some(id) => id.to_string(),
        None => "console".to_string(),
    }
}
