//! A stdin front-end which runs commands as the console or as one of the
//! players listed in the config.

use crate::commands::{builtin, CommandRegistry, CommandSender};
use crate::config::{PlayerConfig, ServerConfig};
use crate::env::{
    CompletionFilter, Identity, IdentityResolver, Locale, MessageSink, PermissionCheck, Team,
    TeamLookup,
};
use crate::locale::ConfigLocale;
use crate::permissions::PlayerPermissionsCache;
use crate::player::PlayerId;
use anyhow::{anyhow, Result};
use indexmap::IndexSet;
use rustc_hash::FxHashMap;
use std::io::{self, BufRead};
use std::sync::Arc;
use tracing::{debug, error, info};

pub struct ConsoleEnvironment {
    players: Vec<PlayerConfig>,
    permissions: Vec<PlayerPermissionsCache>,
    teams: FxHashMap<PlayerId, Team>,
    locale: ConfigLocale,
}

impl ConsoleEnvironment {
    pub fn from_config(config: &ServerConfig) -> Self {
        let permissions = config
            .players
            .iter()
            .map(|player| PlayerPermissionsCache::new(player.permissions.iter().map(String::as_str)))
            .collect();

        let mut teams = FxHashMap::default();
        for team in &config.teams {
            let members: IndexSet<PlayerId> = std::iter::once(team.leader)
                .chain(team.members.iter().copied())
                .collect();
            let team = Team {
                leader: team.leader,
                members,
            };
            for member in &team.members {
                teams.insert(*member, team.clone());
            }
        }

        Self {
            players: config.players.clone(),
            permissions,
            teams,
            locale: ConfigLocale::new(config.messages.clone()),
        }
    }

    /// Finds a player's session index by name or uuid.
    pub fn player_index(&self, name_or_uuid: &str) -> Option<usize> {
        let uuid = name_or_uuid.parse::<PlayerId>().ok();
        self.players.iter().position(|player| {
            player.name.eq_ignore_ascii_case(name_or_uuid) || Some(player.uuid) == uuid
        })
    }
}

impl MessageSink for ConsoleEnvironment {
    fn send(&self, sender: &CommandSender, message: &str) {
        match sender {
            CommandSender::Player(index) => {
                let name = self
                    .players
                    .get(*index)
                    .map(|player| player.name.as_str())
                    .unwrap_or("?");
                println!("[{}] {}", name, message);
            }
            CommandSender::Console => println!("{}", message),
        }
    }
}

impl IdentityResolver for ConsoleEnvironment {
    fn identify(&self, sender: &CommandSender) -> Identity {
        match sender {
            CommandSender::Player(index) => Identity {
                interactive: true,
                id: self.players.get(*index).map(|player| player.uuid),
            },
            CommandSender::Console => Identity::console(),
        }
    }
}

impl TeamLookup for ConsoleEnvironment {
    fn team(&self, player: PlayerId) -> Option<Team> {
        self.teams.get(&player).cloned()
    }
}

impl Locale for ConsoleEnvironment {
    fn translate(&self, sender: &CommandSender, key: &str) -> String {
        self.locale.translate(sender, key)
    }

    fn translate_for(&self, player: PlayerId, key: &str) -> String {
        self.locale.translate_for(player, key)
    }
}

impl PermissionCheck for ConsoleEnvironment {
    fn has_permission(&self, sender: &CommandSender, permission: &str) -> bool {
        match sender {
            CommandSender::Player(index) => self
                .permissions
                .get(*index)
                .is_some_and(|cache| cache.has(permission)),
            CommandSender::Console => true,
        }
    }
}

impl CompletionFilter for ConsoleEnvironment {}

/// Reads command lines from stdin until it closes or `stop` is entered.
/// Lines starting with `complete ` print suggestions instead of running.
pub fn run(config: ServerConfig, player: Option<&str>) -> Result<()> {
    let env = Arc::new(ConsoleEnvironment::from_config(&config));
    let sender = match player {
        Some(name) => {
            let index = env
                .player_index(name)
                .ok_or_else(|| anyhow!("No player named '{}' in the config", name))?;
            CommandSender::Player(index)
        }
        None => CommandSender::Console,
    };

    let mut registry = CommandRegistry::new(env);
    builtin::register_commands(&mut registry, &config);
    info!(
        "Registered {} commands, running as {:?}",
        registry.commands().len(),
        sender
    );

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim() == "stop" {
            break;
        }
        if let Some(partial) = line.strip_prefix("complete ") {
            let suggestions = registry.complete(&sender, partial);
            debug!("{} suggestions for '{}'", suggestions.len(), partial);
            println!("{}", suggestions.join(" "));
            continue;
        }
        if let Err(err) = registry.execute(&sender, &line) {
            error!("{}", err);
        }
    }

    info!("Console closed");
    Ok(())
}
