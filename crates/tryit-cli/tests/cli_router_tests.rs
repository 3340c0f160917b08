/// End-to-end command dispatch through the router
use std::fs;

use clap::Parser;
use tempfile::tempdir;
use tryit_cli::{Cli, CliError, CommandRouter};

#[test]
fn test_validate_with_nesting_config() {
    let dir = tempdir().unwrap();
    let page = dir.path().join("page.html");
    let config = dir.path().join("tryit.yaml");
    fs::write(
        &page,
        "<!DOCTYPE html><html><body><a><b></a></b></body></html>",
    )
    .unwrap();
    fs::write(&config, "preview:\n  balance_check: nesting\n").unwrap();

    let relaxed = Cli::try_parse_from(["tryit", "validate", page.to_str().unwrap()]).unwrap();
    assert!(CommandRouter::execute(&relaxed).is_ok());

    let strict = Cli::try_parse_from([
        "tryit",
        "--config",
        config.to_str().unwrap(),
        "validate",
        page.to_str().unwrap(),
    ])
    .unwrap();
    assert!(matches!(
        CommandRouter::execute(&strict),
        Err(CliError::ValidationFailed(1))
    ));
}

#[test]
fn test_bad_config_is_reported_before_dispatch() {
    let dir = tempdir().unwrap();
    let page = dir.path().join("page.html");
    let config = dir.path().join("tryit.json");
    fs::write(&page, "<html><body></body></html>").unwrap();
    fs::write(&config, r#"{"preview": {"debounce_ms": 999999}}"#).unwrap();

    let cli = Cli::try_parse_from([
        "tryit",
        "validate",
        page.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
    ])
    .unwrap();
    assert!(matches!(
        CommandRouter::execute(&cli),
        Err(CliError::Config(_))
    ));
}

#[test]
fn test_assemble_to_file() {
    let dir = tempdir().unwrap();
    let markup = dir.path().join("index.html");
    let style = dir.path().join("site.css");
    let output = dir.path().join("preview.html");
    fs::write(&markup, "<html><body><p>x</p></body></html>").unwrap();
    fs::write(&style, "p { color: teal; }").unwrap();

    let cli = Cli::try_parse_from([
        "tryit",
        "assemble",
        markup.to_str().unwrap(),
        style.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
    ])
    .unwrap();
    CommandRouter::execute(&cli).unwrap();

    let document = fs::read_to_string(output).unwrap();
    assert!(document.starts_with("<html><style>\np { color: teal; }\n</style>\n<body>"));
}

#[test]
fn test_complete_json_output_succeeds() {
    let dir = tempdir().unwrap();
    let page = dir.path().join("index.html");
    fs::write(&page, "<ul><li").unwrap();

    let cli = Cli::try_parse_from([
        "tryit",
        "complete",
        page.to_str().unwrap(),
        "--offset",
        "7",
        "--json",
    ])
    .unwrap();
    assert!(CommandRouter::execute(&cli).is_ok());
}

#[test]
fn test_complete_rejects_offset_past_end() {
    let dir = tempdir().unwrap();
    let page = dir.path().join("index.html");
    fs::write(&page, "<p").unwrap();

    let cli = Cli::try_parse_from([
        "tryit",
        "complete",
        page.to_str().unwrap(),
        "--offset",
        "40",
    ])
    .unwrap();
    assert!(matches!(
        CommandRouter::execute(&cli),
        Err(CliError::InvalidArgument { .. })
    ));
}
