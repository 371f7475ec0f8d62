use super::context::ExecutionContext;
use super::dispatcher::{clean, CommandDispatcher};
use super::CommandSender;

impl CommandDispatcher {
    /// Suggestions for the last token of `args`.
    ///
    /// Follows the same authorization rules as [`CommandDispatcher::on_invoke`],
    /// so nothing a sender can't run is ever suggested to them.
    pub fn on_complete_request(&self, sender: &CommandSender, args: &[String]) -> Vec<String> {
        let last = args.last().map(String::as_str).unwrap_or("");
        let arguments = self.snapshot();
        let ctx = ExecutionContext::new(&*self.env, sender, &self.info, &arguments);

        if !self.command.can_use(&ctx).is_allowed() {
            return Vec::new();
        }

        let options: Vec<String> = match args {
            [] | [_] => arguments
                .iter()
                .filter(|(_, handler)| handler.can_use(&ctx).is_allowed())
                .map(|(name, _)| name.to_string())
                .collect(),
            [first, rest @ ..] => match arguments.get(first) {
                Some(handler) if handler.can_use(&ctx).is_allowed() => handler
                    .completion_options(&ctx, &clean(rest))
                    .map(|options| options.into_iter().collect())
                    .unwrap_or_default(),
                _ => Vec::new(),
            },
        };

        self.env.narrow(options, last)
    }
}
