use super::authorization::Authorization;
use super::context::ExecutionContext;
use super::error::CommandResult;
use indexmap::IndexSet;

/// Hints shown for an argument in help listings.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Usage {
    pub args: Option<String>,
    pub info: Option<String>,
}

impl Usage {
    pub fn new(args: impl Into<String>, info: impl Into<String>) -> Self {
        Self {
            args: Some(args.into()),
            info: Some(info.into()),
        }
    }
}

/// The behavior bound to one argument of a command, e.g. the `sethome` in
/// `/island sethome`.
pub trait ArgumentHandler: Send + Sync {
    fn can_use(&self, ctx: &ExecutionContext<'_>) -> Authorization;

    /// Runs the argument. `args` holds the tokens after the argument name,
    /// with empty tokens removed.
    fn execute(&self, ctx: &mut ExecutionContext<'_>, args: &[String]) -> CommandResult<()>;

    /// `None` means there is nothing to suggest.
    fn completion_options(
        &self,
        _ctx: &ExecutionContext<'_>,
        _args: &[String],
    ) -> Option<IndexSet<String>> {
        None
    }

    fn usage(&self, _ctx: &ExecutionContext<'_>) -> Usage {
        Usage::default()
    }
}
