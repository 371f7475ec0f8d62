use super::dispatcher::{Command, CommandDispatcher, CommandInfo};
use super::error::{InternalError, RegistrationError};
use super::CommandSender;
use crate::env::Environment;
use rustc_hash::FxHashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Every command the host knows about, reachable by label or alias.
pub struct CommandRegistry {
    env: Arc<dyn Environment>,
    commands: Vec<CommandDispatcher>,
    labels: FxHashMap<String, usize>,
    custom_aliases: Vec<(String, String)>,
}

impl CommandRegistry {
    pub fn new(env: Arc<dyn Environment>) -> Self {
        Self {
            env,
            commands: Vec::new(),
            labels: FxHashMap::default(),
            custom_aliases: Vec::new(),
        }
    }

    /// Builds a dispatcher for `command` and makes it reachable by its label
    /// and aliases. Aliases already claimed by another command are skipped.
    pub fn register(
        &mut self,
        info: CommandInfo,
        command: impl Command + 'static,
    ) -> Result<(), RegistrationError> {
        if self.labels.contains_key(info.label()) {
            return Err(RegistrationError::AlreadyRegistered {
                name: info.label().to_string(),
            });
        }

        let index = self.commands.len();
        self.labels.insert(info.label().to_string(), index);
        for alias in info.aliases() {
            if self.labels.contains_key(alias) {
                warn!("/{} alias '{}' is already taken", info.label(), alias);
                continue;
            }
            self.labels.insert(alias.clone(), index);
        }

        debug!("Registering /{}", info.label());
        let dispatcher = CommandDispatcher::new(info, command, Arc::clone(&self.env));
        self.commands.push(dispatcher);
        Ok(())
    }

    pub fn get(&self, label: &str) -> Option<&CommandDispatcher> {
        self.labels.get(label).map(|&index| &self.commands[index])
    }

    pub fn commands(&self) -> &[CommandDispatcher] {
        &self.commands
    }

    pub fn add_custom_alias(&mut self, prefix: impl Into<String>, replacement: impl Into<String>) {
        self.custom_aliases
            .push((prefix.into(), replacement.into()));
    }

    pub fn get_custom_aliases(&self) -> &[(String, String)] {
        &self.custom_aliases
    }

    /// Runs a full command line such as `/island sethome`.
    pub fn execute(&self, sender: &CommandSender, command_line: &str) -> Result<(), InternalError> {
        let command_line = command_line.trim();
        let command_line = command_line.strip_prefix('/').unwrap_or(command_line);
        if command_line.is_empty() {
            return Ok(());
        }

        let command_line = self.expand_custom_aliases(command_line);
        let (label, args) = split(&command_line);
        match self.get(label) {
            Some(dispatcher) => dispatcher.on_invoke(sender, &args),
            None => {
                let message = self
                    .env
                    .translate(sender, "general.errors.unknown-command")
                    .replace("[label]", label);
                self.env.send(sender, &message);
                Ok(())
            }
        }
    }

    /// Completion suggestions for a partially typed command line. A trailing
    /// space starts a new, empty token.
    pub fn complete(&self, sender: &CommandSender, command_line: &str) -> Vec<String> {
        let command_line = command_line.trim_start();
        let command_line = command_line.strip_prefix('/').unwrap_or(command_line);
        let command_line = self.expand_custom_aliases(command_line);

        let (label, args) = split(&command_line);
        if !command_line.contains(' ') {
            let labels = self
                .commands
                .iter()
                .map(|dispatcher| dispatcher.label().to_string())
                .collect();
            return self.env.narrow(labels, label);
        }

        match self.get(label) {
            Some(dispatcher) => dispatcher.on_complete_request(sender, &args),
            None => Vec::new(),
        }
    }

    fn expand_custom_aliases(&self, command_line: &str) -> String {
        for (alias, expansion) in self.get_custom_aliases() {
            let Some(rest) = command_line.strip_prefix(alias.as_str()) else {
                continue;
            };
            if !rest.is_empty() && !rest.starts_with(' ') {
                continue;
            }
            if expansion.contains("{}") {
                return expansion.replace("{}", rest.trim_start());
            } else {
                return format!("{}{}", expansion, rest);
            }
        }

        command_line.to_string()
    }
}

/// Splits off the label, then splits the rest on single spaces. Spaces
/// between the label and the first argument are skipped, later doubled
/// spaces leave empty tokens behind the way chat input arrives.
fn split(command_line: &str) -> (&str, Vec<String>) {
    match command_line.split_once(' ') {
        Some((label, rest)) => (
            label,
            rest.trim_start_matches(' ')
                .split(' ')
                .map(str::to_string)
                .collect(),
        ),
        None => (command_line, Vec::new()),
    }
}
