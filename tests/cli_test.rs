use clap::{CommandFactory, Parser};
use macroquery::cli::Cli;

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn defaults() {
    let cli = Cli::parse_from(["macroquery", "atm"]);
    assert_eq!(cli.comp_name, "atm");
    assert_eq!(cli.case.to_str(), Some("."));
    assert!(cli.var.is_empty());
    assert!(!cli.json);
    assert!(!cli.quiet);
    assert_eq!(cli.verbose, 0);
}

#[test]
fn extras_accumulate_in_order() {
    let cli = Cli::parse_from(["macroquery", "ocn", "--var", "FOO", "--var", "BAR"]);
    assert_eq!(cli.var, ["FOO", "BAR"]);
}

#[test]
fn case_dir_and_json() {
    let cli = Cli::parse_from(["macroquery", "--case", "/tmp/case01", "--json", "atm"]);
    assert_eq!(cli.case.to_str(), Some("/tmp/case01"));
    assert!(cli.json);
}

#[test]
fn quiet_conflicts_with_verbose() {
    assert!(Cli::try_parse_from(["macroquery", "-q", "-v", "atm"]).is_err());
}
