use super::arguments::ArgumentTable;
use super::authorization::Authorization;
use super::builtin::HelpHandler;
use super::context::ExecutionContext;
use super::error::{CommandResult, RegistrationError};
use super::handler::ArgumentHandler;
use crate::env::Environment;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::error;

/// Name and presentation details of a command.
#[derive(Debug, Clone)]
pub struct CommandInfo {
    label: String,
    aliases: Vec<String>,
    help: bool,
}

impl CommandInfo {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            aliases: Vec::new(),
            help: true,
        }
    }

    /// Adds a display alias for the command itself, e.g. `is` for `island`.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Leaves out the built-in `help` argument.
    pub fn without_help(mut self) -> Self {
        self.help = false;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn help_enabled(&self) -> bool {
        self.help
    }

    /// The name used when showing the command to players: the first alias
    /// if there is one, otherwise the label.
    pub fn display_name(&self) -> &str {
        self.aliases.first().unwrap_or(&self.label)
    }
}

/// The behavior of a concrete command. Arguments are registered in
/// [`Command::setup`].
pub trait Command: Send + Sync {
    /// Called once while the dispatcher is built, after the help argument
    /// has been registered.
    fn setup(&self, dispatcher: &CommandDispatcher);

    fn can_use(&self, ctx: &ExecutionContext<'_>) -> Authorization;

    /// Runs when no arguments are given, and as the fallback when the first
    /// argument isn't recognised and help is disabled.
    fn execute(&self, ctx: &mut ExecutionContext<'_>, args: &[String]) -> CommandResult<()>;
}

pub struct CommandDispatcher {
    pub(super) info: CommandInfo,
    pub(super) command: Box<dyn Command>,
    arguments: RwLock<Arc<ArgumentTable>>,
    pub(super) env: Arc<dyn Environment>,
}

impl CommandDispatcher {
    pub fn new(info: CommandInfo, command: impl Command + 'static, env: Arc<dyn Environment>) -> Self {
        let mut arguments = ArgumentTable::new();
        if info.help_enabled() {
            let help = [HelpHandler::NAME, HelpHandler::ALIAS];
            if let Err(err) = arguments.register(&help, Arc::new(HelpHandler)) {
                error!("Could not register help for /{}: {}", info.label(), err);
            }
        }
        let dispatcher = Self {
            info,
            command: Box::new(command),
            arguments: RwLock::new(Arc::new(arguments)),
            env,
        };
        dispatcher.command.setup(&dispatcher);
        dispatcher
    }

    /// The current argument table. Invocations work on this snapshot, so
    /// handlers may register arguments or re-enter the dispatcher while
    /// they run.
    pub(super) fn snapshot(&self) -> Arc<ArgumentTable> {
        Arc::clone(&*self.arguments.read())
    }

    fn update<T>(&self, edit: impl FnOnce(&mut ArgumentTable) -> T) -> T {
        let mut arguments = self.arguments.write();
        edit(Arc::make_mut(&mut arguments))
    }

    pub fn info(&self) -> &CommandInfo {
        &self.info
    }

    pub fn label(&self) -> &str {
        self.info.label()
    }

    pub fn register(
        &self,
        names: &[&str],
        handler: impl ArgumentHandler + 'static,
    ) -> Result<(), RegistrationError> {
        self.update(|arguments| arguments.register(names, Arc::new(handler)))
    }

    pub fn replace_handler(
        &self,
        canonical: &str,
        handler: impl ArgumentHandler + 'static,
    ) -> Result<(), RegistrationError> {
        self.update(|arguments| arguments.replace(canonical, Arc::new(handler)))
    }

    pub fn add_alias(&self, canonical: &str, alias: &str) -> Result<(), RegistrationError> {
        self.update(|arguments| arguments.add_alias(canonical, alias))
    }

    pub fn add_aliases(&self, canonical: &str, aliases: &[&str]) -> Result<usize, RegistrationError> {
        self.update(|arguments| arguments.add_aliases(canonical, aliases))
    }

    pub fn remove_aliases(&self, aliases: &[&str]) -> usize {
        self.update(|arguments| arguments.remove_aliases(aliases))
    }

    pub fn resolve_canonical(&self, token: &str) -> String {
        self.arguments.read().resolve(token).to_string()
    }

    pub fn is_alias(&self, token: &str) -> bool {
        self.arguments.read().is_alias(token)
    }

    pub fn get_handler(&self, token: &str) -> Option<Arc<dyn ArgumentHandler>> {
        self.arguments.read().get(token).cloned()
    }

    pub fn aliases_of(&self, canonical: &str) -> Vec<String> {
        self.arguments
            .read()
            .aliases_of(canonical)
            .map(str::to_string)
            .collect()
    }

    /// Canonical argument names in registration order.
    pub fn argument_names(&self) -> Vec<String> {
        self.arguments.read().names().map(str::to_string).collect()
    }
}

/// Removes empty tokens, which show up when the sender types more than one
/// space between arguments.
pub(super) fn clean(args: &[String]) -> Vec<String> {
    args.iter().filter(|arg| !arg.is_empty()).cloned().collect()
}
