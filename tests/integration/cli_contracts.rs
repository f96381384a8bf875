use std::fs;

use clap::{CommandFactory, Parser};
use filestitch::config::StitchConfig;
use filestitch::tooling::cli::{Cli, CliContext, Commands, InputArgs};
use tempfile::TempDir;

use crate::integration::support::zip_bytes;

fn context(temp: &TempDir) -> CliContext {
    CliContext::with_config(temp.path().to_path_buf(), StitchConfig::default())
}

fn input(paths: &[&str]) -> InputArgs {
    InputArgs {
        paths: paths.iter().map(Into::into).collect(),
        ..InputArgs::default()
    }
}

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["filestitch", "merge", "a.txt"],
        vec!["filestitch", "merge", "a.txt", "b.zip", "--download", "out"],
        vec!["filestitch", "merge", "--paste", "--template", "== {name} =="],
        vec!["filestitch", "tree", "src"],
        vec!["filestitch", "list", "src", "--format", "json", "--tree"],
        vec!["filestitch", "list", "a", "b", "--reorder", "1:0", "--remove", "0"],
        vec!["filestitch", "--log-level", "debug", "init", "--force"],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn parse_rejects_malformed_reorder() {
    assert!(Cli::try_parse_from(["filestitch", "merge", "--reorder", "1-0"]).is_err());
    assert!(Cli::try_parse_from(["filestitch", "merge", "--remove", "x"]).is_err());
}

#[test]
fn top_level_help_lists_commands() {
    let mut command = Cli::command();
    let mut output = Vec::new();
    command.write_long_help(&mut output).unwrap();
    let output = String::from_utf8(output).unwrap();
    for token in ["merge", "tree", "list", "init", "--workspace", "--log-level"] {
        assert!(output.contains(token), "help should mention {token}");
    }
}

#[tokio::test]
async fn list_json_contract_has_required_fields() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("pkg.zip"),
        zip_bytes(&[("pkg/a.rs", b"a"), ("pkg/b.rs", b"bb")]),
    )
    .unwrap();

    let output = context(&temp)
        .execute(&Commands::List {
            input: input(&["pkg.zip"]),
            format: "json".to_string(),
            tree: false,
        })
        .await
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    let rows = parsed.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    for row in rows {
        assert!(row.get("index").and_then(|v| v.as_u64()).is_some());
        assert!(row.get("name").and_then(|v| v.as_str()).is_some());
        assert!(row.get("chars").and_then(|v| v.as_u64()).is_some());
    }
    assert_eq!(rows[1]["name"], "pkg/b.rs");
}

#[tokio::test]
async fn tree_json_contract_lists_expanded_rows() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("src/bin")).unwrap();
    fs::write(temp.path().join("src/lib.rs"), "").unwrap();
    fs::write(temp.path().join("src/bin/cli.rs"), "").unwrap();

    let output = context(&temp)
        .execute(&Commands::List {
            input: input(&["src"]),
            format: "json".to_string(),
            tree: true,
        })
        .await
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    let paths: Vec<&str> = parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["path"].as_str().unwrap())
        .collect();
    assert_eq!(paths, vec!["src", "src/bin", "src/bin/cli.rs", "src/lib.rs"]);
    assert_eq!(parsed[2]["depth"], 2);
    assert_eq!(parsed[0]["is_folder"], true);
}

#[tokio::test]
async fn merge_reports_missing_input() {
    let temp = TempDir::new().unwrap();
    let result = context(&temp)
        .execute(&Commands::Merge {
            input: input(&["missing.txt"]),
            template: None,
            download: None,
        })
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn empty_collection_outputs() {
    let temp = TempDir::new().unwrap();
    let ctx = context(&temp);
    let merged = ctx
        .execute(&Commands::Merge {
            input: InputArgs::default(),
            template: None,
            download: None,
        })
        .await
        .unwrap();
    assert_eq!(merged, "");

    let listed = ctx
        .execute(&Commands::List {
            input: InputArgs::default(),
            format: "text".to_string(),
            tree: false,
        })
        .await
        .unwrap();
    assert_eq!(listed, "No files.");
}
