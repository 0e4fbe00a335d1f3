//! CLI argument parsing tests.

use chrono::NaiveDate;
use clap::{CommandFactory, Parser};
use zanoxapi::cli::{Cli, Command, Entity};
use zanoxapi::Resource;

#[test]
fn test_cli_parses_fetch_subcommand() {
    let cli = Cli::parse_from(["zanoxapi", "fetch", "adspaces"]);

    assert!(!cli.json);
    match cli.command {
        Command::Fetch {
            resource,
            date,
            params,
        } => {
            assert_eq!(resource, Entity::Adspaces);
            assert!(date.is_none());
            assert!(params.is_empty());
        }
        _ => panic!("Expected Fetch command"),
    }
}

#[test]
fn test_cli_parses_fetch_with_params() {
    let cli = Cli::parse_from([
        "zanoxapi",
        "fetch",
        "products",
        "-p",
        "q=running shoes",
        "--param",
        "region=DE",
    ]);

    match cli.command {
        Command::Fetch { params, .. } => {
            assert_eq!(
                params,
                vec![
                    ("q".to_string(), "running shoes".to_string()),
                    ("region".to_string(), "DE".to_string()),
                ]
            );
        }
        _ => panic!("Expected Fetch command"),
    }
}

#[test]
fn test_cli_parses_report_date() {
    let cli = Cli::parse_from(["zanoxapi", "fetch", "sales", "--date", "2024-01-15"]);

    match cli.command {
        Command::Fetch { resource, date, .. } => {
            assert_eq!(Resource::from(resource), Resource::Sales);
            assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 15));
        }
        _ => panic!("Expected Fetch command"),
    }
}

#[test]
fn test_cli_rejects_malformed_date() {
    let result = Cli::try_parse_from(["zanoxapi", "fetch", "leads", "--date", "15/01/2024"]);
    assert!(result.is_err());
}

#[test]
fn test_cli_rejects_param_without_equals() {
    let result = Cli::try_parse_from(["zanoxapi", "fetch", "programs", "-p", "region"]);
    assert!(result.is_err());
}

#[test]
fn test_global_json_flag() {
    // --json before subcommand
    let cli = Cli::parse_from(["zanoxapi", "--json", "resources"]);
    assert!(cli.json);

    // --json after subcommand (global flag)
    let cli = Cli::parse_from(["zanoxapi", "resources", "--json"]);
    assert!(cli.json);
}

#[test]
fn test_global_api_url_and_timeout() {
    let cli = Cli::parse_from([
        "zanoxapi",
        "fetch",
        "profiles",
        "--api-url",
        "http://localhost:8080",
        "--timeout",
        "5",
    ]);
    assert_eq!(cli.api_url.as_deref(), Some("http://localhost:8080"));
    assert_eq!(cli.timeout, Some(5));
}

#[test]
fn test_sign_subcommand() {
    let cli = Cli::parse_from(["zanoxapi", "sign", "/adspaces"]);
    match cli.command {
        Command::Sign { uri, url } => {
            assert_eq!(uri, "/adspaces");
            assert!(url.is_none());
        }
        _ => panic!("Expected Sign command"),
    }
}

#[test]
fn test_entity_variants() {
    let cli = Cli::parse_from(["zanoxapi", "fetch", "profile"]);
    assert!(matches!(cli.command, Command::Fetch { resource: Entity::Profiles, .. }));

    let cli = Cli::parse_from(["zanoxapi", "fetch", "program-applications"]);
    assert!(matches!(cli.command, Command::Fetch { resource: Entity::ProgramApplications, .. }));

    let cli = Cli::parse_from(["zanoxapi", "fetch", "reportbasic"]);
    assert!(matches!(cli.command, Command::Fetch { resource: Entity::ReportBasic, .. }));

    let cli = Cli::parse_from(["zanoxapi", "fetch", "accountbalances"]);
    assert!(matches!(cli.command, Command::Fetch { resource: Entity::Balances, .. }));

    let cli = Cli::parse_from(["zanoxapi", "mcp"]);
    assert!(matches!(cli.command, Command::Mcp));
}

#[test]
fn test_json_flag_help_notes_fetch_output() {
    let command = Cli::command();
    let json = command
        .get_arguments()
        .find(|arg| arg.get_id() == "json")
        .unwrap();
    let help = json.get_help().unwrap().to_string();
    assert!(help.contains("`fetch` always prints JSON"));
}
