mod common;

use common::*;
use skyblock_core::commands::{
    ArgumentHandler, Authorization, CommandDispatcher, CommandInfo, CommandResult, CommandSender,
    ExecutionContext,
};
use std::sync::Arc;

const ALICE_SENDER: CommandSender = CommandSender::Player(ALICE_SESSION);

fn dispatcher(env: &Arc<TestEnv>, auth: Authorization) -> CommandDispatcher {
    let log = new_log();
    let command = TestCommand::new(&log)
        .auth(auth)
        .argument(&["go", "home"], Recorder::new("go", &log))
        .argument(
            &["sethome", "sh"],
            Recorder::new("sethome", &log).auth(Authorization::deny("No permission")),
        )
        .argument(
            &["team"],
            Recorder::new("team", &log).completions(&["members", "Leave", "invite"]),
        )
        .argument(&["Settings"], Recorder::new("settings", &log));
    build(env, CommandInfo::new("island"), command)
}

#[test]
fn first_token_lists_usable_arguments_in_order() {
    let env = Arc::new(TestEnv::new());
    let dispatcher = dispatcher(&env, Authorization::allow());

    assert_eq!(
        dispatcher.on_complete_request(&ALICE_SENDER, &[]),
        ["help", "go", "team", "Settings"]
    );
    assert_eq!(
        dispatcher.on_complete_request(&ALICE_SENDER, &args(&[""])),
        ["help", "go", "team", "Settings"]
    );
}

#[test]
fn first_token_is_prefix_filtered_ignoring_case() {
    let env = Arc::new(TestEnv::new());
    let dispatcher = dispatcher(&env, Authorization::allow());

    assert_eq!(
        dispatcher.on_complete_request(&ALICE_SENDER, &args(&["se"])),
        ["Settings"]
    );
    assert_eq!(
        dispatcher.on_complete_request(&ALICE_SENDER, &args(&["T"])),
        ["team"]
    );
    // aliases are resolved for dispatch but never offered
    assert!(dispatcher
        .on_complete_request(&ALICE_SENDER, &args(&["hom"]))
        .is_empty());
}

#[test]
fn later_tokens_come_from_the_handler() {
    let env = Arc::new(TestEnv::new());
    let dispatcher = dispatcher(&env, Authorization::allow());

    assert_eq!(
        dispatcher.on_complete_request(&ALICE_SENDER, &args(&["team", ""])),
        ["members", "Leave", "invite"]
    );
    assert_eq!(
        dispatcher.on_complete_request(&ALICE_SENDER, &args(&["team", "", "l"])),
        ["Leave"]
    );
    assert!(dispatcher
        .on_complete_request(&ALICE_SENDER, &args(&["go", ""]))
        .is_empty());
}

#[test]
fn denied_or_unknown_arguments_suggest_nothing() {
    let env = Arc::new(TestEnv::new());
    let dispatcher = dispatcher(&env, Authorization::allow());

    assert!(dispatcher
        .on_complete_request(&ALICE_SENDER, &args(&["sh", ""]))
        .is_empty());
    assert!(dispatcher
        .on_complete_request(&ALICE_SENDER, &args(&["warp", ""]))
        .is_empty());
    // completion never sends messages, not even denial messages
    assert!(env.messages().is_empty());
}

#[test]
fn denied_command_suggests_nothing() {
    let env = Arc::new(TestEnv::new());
    let dispatcher = dispatcher(&env, Authorization::deny("Use this in game"));

    let cases: [&[&str]; 4] = [&[], &["t"], &["team", ""], &["team", "m"]];
    for tokens in cases {
        assert!(dispatcher
            .on_complete_request(&CommandSender::Console, &args(tokens))
            .is_empty());
    }
    assert!(env.messages().is_empty());
}

#[test]
fn completion_reflects_current_permissions() {
    let env = Arc::new(TestEnv::new());
    let log = new_log();
    let command = TestCommand::new(&log);
    let dispatcher = build(&env, CommandInfo::new("island").without_help(), command);
    dispatcher
        .register(&["sethome"], GatedArgument("skyblock.island.sethome"))
        .unwrap();

    assert!(dispatcher.on_complete_request(&ALICE_SENDER, &[]).is_empty());

    env.grant(ALICE_SESSION, "skyblock.island.sethome");
    assert_eq!(dispatcher.on_complete_request(&ALICE_SENDER, &[]), ["sethome"]);

    env.revoke(ALICE_SESSION, "skyblock.island.sethome");
    assert!(dispatcher.on_complete_request(&ALICE_SENDER, &[]).is_empty());
}

struct GatedArgument(&'static str);

impl ArgumentHandler for GatedArgument {
    fn can_use(&self, ctx: &ExecutionContext<'_>) -> Authorization {
        ctx.has_permission(self.0).into()
    }

    fn execute(&self, _ctx: &mut ExecutionContext<'_>, _args: &[String]) -> CommandResult<()> {
        Ok(())
    }
}
