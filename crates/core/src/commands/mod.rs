mod alias;
mod arguments;
mod authorization;
mod autocomplete;
pub mod builtin;
mod context;
mod dispatcher;
mod error;
mod executor;
mod handler;
mod registry;

pub use alias::AliasTable;
pub use arguments::ArgumentTable;
pub use authorization::Authorization;
pub use context::{CallerContext, ExecutionContext};
pub use dispatcher::{Command, CommandDispatcher, CommandInfo};
pub use error::{CommandError, CommandResult, InternalError, RegistrationError, RuntimeError};
pub use handler::{ArgumentHandler, Usage};
pub use registry::CommandRegistry;

/// Whoever issued a command. Players are referred to by their session
/// index, which the host resolves to an identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandSender {
    Player(usize),
    Console,
}
