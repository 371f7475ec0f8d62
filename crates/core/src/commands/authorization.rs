/// Whether a sender may use a command or one of its arguments.
///
/// A denial without a message is silent: the sender is told nothing, which
/// keeps hidden arguments invisible to those who can't use them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Authorization {
    Allowed,
    Denied { message: Option<String> },
}

impl Authorization {
    pub fn allow() -> Self {
        Authorization::Allowed
    }

    pub fn deny_silently() -> Self {
        Authorization::Denied { message: None }
    }

    /// Denies with a message shown to the sender. An empty message is
    /// treated as a silent denial.
    pub fn deny(message: impl Into<String>) -> Self {
        let message = message.into();
        Authorization::Denied {
            message: (!message.is_empty()).then_some(message),
        }
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, Authorization::Allowed)
    }

    pub fn denial_message(&self) -> Option<&str> {
        match self {
            Authorization::Allowed => None,
            Authorization::Denied { message } => message.as_deref(),
        }
    }
}

impl From<bool> for Authorization {
    fn from(allowed: bool) -> Self {
        if allowed {
            Authorization::Allowed
        } else {
            Authorization::deny_silently()
        }
    }
}
