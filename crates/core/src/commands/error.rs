use thiserror::Error;

/// Errors shown to the sender of a command.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("This command can only be executed by players")]
    PlayerOnly,
    #[error("You are not in a team")]
    NotInTeam,
    #[error("{0}")]
    Message(String),
}

/// Errors that indicate a bug in a command or its host.
#[derive(Debug, Error)]
pub enum InternalError {
    #[error("Internal error: no handler registered for '{name}' (command registration bug)")]
    MissingHandler { name: String },
    #[error("Internal error (bug): {message}")]
    Message { message: String },
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    #[error(transparent)]
    Internal(#[from] InternalError),
}

impl CommandError {
    pub fn runtime(message: impl Into<String>) -> Self {
        CommandError::Runtime(RuntimeError::Message(message.into()))
    }

    pub fn internal(message: impl Into<String>) -> Self {
        CommandError::Internal(InternalError::Message {
            message: message.into(),
        })
    }
}

pub type CommandResult<T> = Result<T, CommandError>;

/// Rejected registrations. The argument tables are left untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("An argument needs at least one name")]
    EmptyNames,
    #[error("Argument '{name}' is already registered")]
    AlreadyRegistered { name: String },
    #[error("'{name}' is already used as an alias")]
    NameTaken { name: String },
    #[error("No argument named '{name}' is registered")]
    UnknownArgument { name: String },
    #[error("Alias '{alias}' collides with an existing argument or alias")]
    AliasTaken { alias: String },
}
