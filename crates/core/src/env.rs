//! Capabilities a dispatcher borrows from whatever hosts it.
//!
//! Dispatchers never reach for global state. They are handed an
//! [`Environment`] which delivers messages, identifies senders, looks up
//! teams, translates message keys and answers permission checks.

use crate::commands::CommandSender;
use crate::player::PlayerId;
use indexmap::IndexSet;

/// Who a sender is, as far as the host can tell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub interactive: bool,
    pub id: Option<PlayerId>,
}

impl Identity {
    pub fn console() -> Self {
        Self {
            interactive: false,
            id: None,
        }
    }

    pub fn player(id: PlayerId) -> Self {
        Self {
            interactive: true,
            id: Some(id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub leader: PlayerId,
    pub members: IndexSet<PlayerId>,
}

pub trait MessageSink {
    fn send(&self, sender: &CommandSender, message: &str);
}

pub trait IdentityResolver {
    fn identify(&self, sender: &CommandSender) -> Identity;
}

pub trait TeamLookup {
    /// Returns the team `player` belongs to, if any.
    fn team(&self, player: PlayerId) -> Option<Team>;
}

pub trait Locale {
    fn translate(&self, sender: &CommandSender, key: &str) -> String;
    fn translate_for(&self, player: PlayerId, key: &str) -> String;
}

pub trait PermissionCheck {
    fn has_permission(&self, sender: &CommandSender, permission: &str) -> bool;
}

pub trait CompletionFilter {
    /// Narrows `options` down to what should be offered for the partial
    /// token `last`.
    fn narrow(&self, options: Vec<String>, last: &str) -> Vec<String> {
        tab_limit(options, last)
    }
}

pub trait Environment:
    MessageSink + IdentityResolver + TeamLookup + Locale + PermissionCheck + CompletionFilter + Send + Sync
{
}

impl<T> Environment for T where
    T: MessageSink
        + IdentityResolver
        + TeamLookup
        + Locale
        + PermissionCheck
        + CompletionFilter
        + Send
        + Sync
{
}

/// Keeps the options starting with `last`, ignoring case. Order is kept and
/// duplicates are dropped.
pub fn tab_limit(options: Vec<String>, last: &str) -> Vec<String> {
    let last = last.to_lowercase();
    options
        .into_iter()
        .filter(|option| option.to_lowercase().starts_with(&last))
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect()
}
