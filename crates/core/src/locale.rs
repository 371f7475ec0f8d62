use crate::commands::CommandSender;
use crate::env::Locale;
use crate::player::PlayerId;
use indexmap::IndexMap;
use once_cell::sync::Lazy;

static DEFAULT_MESSAGES: Lazy<IndexMap<String, String>> = Lazy::new(|| {
    [
        ("help.header", "===== Help ====="),
        ("help.end", "================"),
        ("help.syntax", "/[label] [command] [args]: [info]"),
        ("help.syntax-alias-separator", ", "),
        ("general.errors.use-in-game", "This command is only available in game."),
        ("general.errors.no-permission", "You don't have permission to do that."),
        ("general.errors.no-team", "You do not have a team!"),
        ("general.errors.unknown-command", "Unknown command: /[label]"),
        ("general.errors.unknown-argument", "Unknown argument: [argument]"),
        ("general.errors.unknown-player", "Unknown player: [player]"),
        ("island.help.go", "teleport you to your island"),
        ("island.help.info", "display info about your island"),
        ("island.help.sethome", "set your home teleport point"),
        ("island.help.team", "manage your team"),
        ("island.go.teleport", "Teleporting you to your island."),
        ("island.info.owner", "Island owner: [owner]"),
        ("island.info.team-size", "Team size: [size]"),
        ("island.sethome.home-set", "Your home has been set to your current location."),
        ("island.team.leader", "Team leader: [leader]"),
        ("island.team.member", " - [member]"),
        ("admin.help.version", "display the plugin version"),
        ("admin.help.team", "show the team of a player"),
        ("admin.team.usage", "Usage: team <uuid>"),
    ]
    .into_iter()
    .map(|(key, message)| (key.to_string(), message.to_string()))
    .collect()
});

pub fn default_messages() -> IndexMap<String, String> {
    DEFAULT_MESSAGES.clone()
}

/// A single locale backed by the `messages` table of the config.
#[derive(Debug, Clone)]
pub struct ConfigLocale {
    messages: IndexMap<String, String>,
}

impl ConfigLocale {
    pub fn new(messages: IndexMap<String, String>) -> Self {
        Self { messages }
    }

    /// Unknown keys come back as the key itself, which makes missing
    /// translations easy to spot.
    pub fn get(&self, key: &str) -> String {
        self.messages
            .get(key)
            .or_else(|| DEFAULT_MESSAGES.get(key))
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

impl Default for ConfigLocale {
    fn default() -> Self {
        Self::new(default_messages())
    }
}

impl Locale for ConfigLocale {
    fn translate(&self, _sender: &CommandSender, key: &str) -> String {
        self.get(key)
    }

    fn translate_for(&self, _player: PlayerId, key: &str) -> String {
        self.get(key)
    }
}
