#![allow(dead_code)]

use parking_lot::Mutex;
use skyblock_core::commands::{
    ArgumentHandler, Authorization, Command, CommandDispatcher, CommandInfo, CommandResult,
    CommandSender, ExecutionContext, Usage,
};
use skyblock_core::env::{
    CompletionFilter, Environment, Identity, IdentityResolver, Locale, MessageSink, PermissionCheck, Team,
    TeamLookup,
};
use skyblock_core::locale::ConfigLocale;
use skyblock_core::player::PlayerId;
use std::sync::Arc;

pub const ALICE: PlayerId = PlayerId(0xa11ce);
pub const BOB: PlayerId = PlayerId(0xb0b);
pub const CAROL: PlayerId = PlayerId(0xca201);

/// Player session indices used with [`CommandSender::Player`].
pub const ALICE_SESSION: usize = 0;
pub const BOB_SESSION: usize = 1;
pub const CAROL_SESSION: usize = 2;

/// An environment which records every message it is asked to deliver.
pub struct TestEnv {
    pub sent: Mutex<Vec<(CommandSender, String)>>,
    players: Vec<PlayerId>,
    teams: Vec<Team>,
    permissions: Mutex<Vec<(usize, String)>>,
    locale: ConfigLocale,
}

impl TestEnv {
    /// Alice leads a team with Bob; Carol plays alone.
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            players: vec![ALICE, BOB, CAROL],
            teams: vec![Team {
                leader: ALICE,
                members: [ALICE, BOB].into_iter().collect(),
            }],
            permissions: Mutex::new(Vec::new()),
            locale: ConfigLocale::default(),
        }
    }

    pub fn grant(&self, session: usize, permission: &str) {
        self.permissions
            .lock()
            .push((session, permission.to_string()));
    }

    pub fn revoke(&self, session: usize, permission: &str) {
        self.permissions
            .lock()
            .retain(|(s, p)| !(*s == session && p == permission));
    }

    pub fn messages(&self) -> Vec<String> {
        self.sent
            .lock()
            .iter()
            .map(|(_, message)| message.clone())
            .collect()
    }

    pub fn clear(&self) {
        self.sent.lock().clear();
    }
}

impl MessageSink for TestEnv {
    fn send(&self, sender: &CommandSender, message: &str) {
        self.sent.lock().push((*sender, message.to_string()));
    }
}

impl IdentityResolver for TestEnv {
    fn identify(&self, sender: &CommandSender) -> Identity {
        match sender {
            CommandSender::Player(index) => Identity {
                interactive: true,
                id: self.players.get(*index).copied(),
            },
            CommandSender::Console => Identity::console(),
        }
    }
}

impl TeamLookup for TestEnv {
    fn team(&self, player: PlayerId) -> Option<Team> {
        self.teams
            .iter()
            .find(|team| team.members.contains(&player))
            .cloned()
    }
}

impl Locale for TestEnv {
    fn translate(&self, sender: &CommandSender, key: &str) -> String {
        self.locale.translate(sender, key)
    }

    fn translate_for(&self, player: PlayerId, key: &str) -> String {
        self.locale.translate_for(player, key)
    }
}

impl PermissionCheck for TestEnv {
    fn has_permission(&self, sender: &CommandSender, permission: &str) -> bool {
        match sender {
            CommandSender::Player(index) => self
                .permissions
                .lock()
                .iter()
                .any(|(session, p)| session == index && p == permission),
            CommandSender::Console => true,
        }
    }
}

impl CompletionFilter for TestEnv {}

pub type Log = Arc<Mutex<Vec<String>>>;

/// Records each execution as `name [args]`.
pub struct Recorder {
    pub name: &'static str,
    pub auth: Authorization,
    pub log: Log,
    pub completions: Option<Vec<&'static str>>,
    pub usage: Usage,
}

impl Recorder {
    pub fn new(name: &'static str, log: &Log) -> Self {
        Self {
            name,
            auth: Authorization::allow(),
            log: Arc::clone(log),
            completions: None,
            usage: Usage::default(),
        }
    }

    pub fn auth(mut self, auth: Authorization) -> Self {
        self.auth = auth;
        self
    }

    pub fn completions(mut self, completions: &[&'static str]) -> Self {
        self.completions = Some(completions.to_vec());
        self
    }

    pub fn usage(mut self, usage: Usage) -> Self {
        self.usage = usage;
        self
    }
}

impl ArgumentHandler for Recorder {
    fn can_use(&self, _ctx: &ExecutionContext<'_>) -> Authorization {
        self.auth.clone()
    }

    fn execute(&self, _ctx: &mut ExecutionContext<'_>, args: &[String]) -> CommandResult<()> {
        self.log.lock().push(format!("{} {:?}", self.name, args));
        Ok(())
    }

    fn completion_options(
        &self,
        _ctx: &ExecutionContext<'_>,
        _args: &[String],
    ) -> Option<indexmap::IndexSet<String>> {
        self.completions
            .as_ref()
            .map(|options| options.iter().map(|option| option.to_string()).collect())
    }

    fn usage(&self, _ctx: &ExecutionContext<'_>) -> Usage {
        self.usage.clone()
    }
}

/// A command whose arguments are recorders handed in by the test.
pub struct TestCommand {
    pub auth: Authorization,
    pub log: Log,
    pub recorders: Mutex<Vec<(Vec<&'static str>, Recorder)>>,
}

impl TestCommand {
    pub fn new(log: &Log) -> Self {
        Self {
            auth: Authorization::allow(),
            log: Arc::clone(log),
            recorders: Mutex::new(Vec::new()),
        }
    }

    pub fn auth(mut self, auth: Authorization) -> Self {
        self.auth = auth;
        self
    }

    pub fn argument(self, names: &[&'static str], recorder: Recorder) -> Self {
        self.recorders.lock().push((names.to_vec(), recorder));
        self
    }
}

impl Command for TestCommand {
    fn setup(&self, dispatcher: &CommandDispatcher) {
        for (names, recorder) in self.recorders.lock().drain(..) {
            dispatcher.register(&names, recorder).unwrap();
        }
    }

    fn can_use(&self, _ctx: &ExecutionContext<'_>) -> Authorization {
        self.auth.clone()
    }

    fn execute(&self, _ctx: &mut ExecutionContext<'_>, args: &[String]) -> CommandResult<()> {
        self.log.lock().push(format!("self {:?}", args));
        Ok(())
    }
}

pub fn new_log() -> Log {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn build(env: &Arc<TestEnv>, info: CommandInfo, command: TestCommand) -> CommandDispatcher {
    let env: Arc<dyn Environment> = env.clone();
    CommandDispatcher::new(info, command, env)
}

pub fn args(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|token| token.to_string()).collect()
}
