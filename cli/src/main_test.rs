use std::net::TcpListener;

use clap::CommandFactory;

use super::*;

fn rule_args(kind: RuleKindArg) -> RuleArgs {
    RuleArgs { kind, ..RuleArgs::default() }
}

#[test]
fn command_tree_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn parses_nested_subcommands() {
    let cli = Cli::try_parse_from([
        "spewpay",
        "--api-url",
        "http://localhost:3000/api/v1",
        "allocation",
        "fund",
        "o-1",
        "a-1",
        "--amount",
        "2,500",
        "--from-parent",
    ])
    .unwrap();

    assert_eq!(cli.api_url.as_deref(), Some("http://localhost:3000/api/v1"));
    match cli.command {
        Command::Allocation(AllocationCommand {
            command: AllocationSubcommand::Fund { org_id, allocation_id, amount, from_parent, .. },
        }) => {
            assert_eq!(org_id, "o-1");
            assert_eq!(allocation_id, "a-1");
            assert_eq!(amount, "2,500");
            assert!(from_parent);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn owner_is_not_an_assignable_role() {
    let parsed = Cli::try_parse_from(["spewpay", "org", "set-role", "o-1", "m-1", "--role", "owner"]);
    assert!(parsed.is_err());
}

#[test]
fn insights_period_defaults_to_month() {
    let cli = Cli::try_parse_from(["spewpay", "insights"]).unwrap();
    assert!(matches!(cli.command, Command::Insights { period: PeriodArg::Month }));
}

#[test]
fn limit_rule_converts_naira_text() {
    let args = RuleArgs { max_amount: Some("1,500.50".into()), ..rule_args(RuleKindArg::DailyLimit) };
    assert_eq!(args.build().unwrap(), RuleConfig::DailyLimit { max_amount: 1500.5 });
}

#[test]
fn time_lock_requires_both_bounds() {
    let args = RuleArgs { start: Some("08:00".into()), days: vec![1, 2], ..rule_args(RuleKindArg::TimeLock) };
    let err = args.build().unwrap_err();
    assert!(err.to_string().contains("--end"));

    let args = RuleArgs { end: Some("18:00".into()), ..args };
    assert_eq!(
        args.build().unwrap(),
        RuleConfig::TimeLock { start_time: "08:00".into(), end_time: "18:00".into(), days_of_week: vec![1, 2] }
    );
}

#[test]
fn approval_rule_rejects_bad_amount() {
    let args = RuleArgs { threshold: Some("ten".into()), ..rule_args(RuleKindArg::RequiresApproval) };
    assert!(matches!(args.build(), Err(CliError::Client(ClientError::Validation(_)))));
}

#[test]
fn whitelist_collects_repeated_recipients() {
    let cli = Cli::try_parse_from([
        "spewpay", "rule", "create", "a-1", "--type", "whitelist", "--recipient", "u-2", "--recipient", "u-3",
    ])
    .unwrap();
    let Command::Rule(RuleCommand { command: RuleSubcommand::Create { rule, .. } }) = cli.command else {
        panic!("expected rule create");
    };
    assert_eq!(
        rule.build().unwrap(),
        RuleConfig::WhitelistRecipients { recipient_ids: vec!["u-2".into(), "u-3".into()] }
    );
}

#[test]
fn amounts_parse_to_kobo() {
    assert_eq!(parse_amount("1,000").unwrap(), 100_000);
    assert!(parse_amount("-5").is_err());
}

/// Runs `args` against a local listener and reports whether anything connected.
async fn run_against_listener(args: &[&str]) -> (Result<(), CliError>, bool) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.set_nonblocking(true).unwrap();
    let api_url = format!("http://{}/api/v1", listener.local_addr().unwrap());
    let dir = tempfile::tempdir().unwrap();
    let session = dir.path().join("session.json");

    let mut argv = vec!["spewpay", "--api-url", api_url.as_str(), "--session-file", session.to_str().unwrap()];
    argv.extend_from_slice(args);
    let result = run(Cli::try_parse_from(argv).unwrap()).await;
    (result, listener.accept().is_ok())
}

#[tokio::test]
async fn withdrawal_below_minimum_fails_before_account_lookup() {
    let (result, connected) = run_against_listener(&[
        "transfer",
        "withdraw",
        "--amount",
        "50",
        "--bank-code",
        "058",
        "--account-number",
        "0123456789",
    ])
    .await;

    match result {
        Err(CliError::Client(ClientError::Validation(msg))) => assert!(msg.contains("Minimum")),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(!connected);
}

#[tokio::test]
async fn deposit_below_minimum_fails_offline() {
    let (result, connected) = run_against_listener(&["deposit", "init", "--amount", "99.99"]).await;

    assert!(matches!(result, Err(CliError::Client(ClientError::Validation(_)))));
    assert!(!connected);
}
