//! The command layer driven through its library interface.

use std::path::PathBuf;

use clap::Parser;
use gramdex::cli::{Cli, report, run};

fn fixture(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
        .display()
        .to_string()
}

fn execute(args: &[&str]) -> Result<String, String> {
    let cli = Cli::try_parse_from(std::iter::once("gramdex").chain(args.iter().copied()))
        .map_err(|e| e.to_string())?;
    let mut out = Vec::new();
    run(&cli, &mut out).map_err(|e| report(&e))?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn names_hide_alias() {
    let calc = fixture("calc.grammar");
    let out = execute(&["names", &calc, "--hide-alias"]).unwrap();
    assert_eq!(out, "comparison\nstatement\nassignment\n");
}

#[test]
fn names_show_inner_and_conditional() {
    let calc = fixture("calc.grammar");
    let out = execute(&["names", &calc, "--show-inner", "--show-conditional", "--hide-alias"]).unwrap();
    assert_eq!(
        out,
        "start\nsum\nproduct\natom\ncomparison\ncomp_op\nstatement\nassignment\n"
    );
}

#[test]
fn names_hide_pinned() {
    let calc = fixture("calc.grammar");
    let out = execute(&["names", &calc, "--hide-pinned", "--hide-alias"]).unwrap();
    assert_eq!(out, "statement\nassignment\n");
}

#[test]
fn names_markers_json() {
    let calc = fixture("calc.grammar");
    let out = execute(&["names", &calc, "--all", "--markers", "--format", "json"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    let first = &value[0];
    assert_eq!(first["name"], "start");
    assert_eq!(first["spelling"], "?start");
    assert_eq!(first["conditional"], true);
}

#[test]
fn start_symbols_json() {
    let calc = fixture("calc.grammar");
    let out = execute(&["start-symbols", &calc, "--hide-alias", "--extra", "start", "--format", "json"])
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(
        value,
        serde_json::json!(["assignment", "comparison", "start", "statement"])
    );
}

#[test]
fn tree_command() {
    let calc = fixture("calc.grammar");
    let out = execute(&["tree", &calc, "--indent", "1"]).unwrap();
    assert!(out.starts_with("start\n rule\n  ?start\n"));
}

#[test]
fn missing_file_is_reported() {
    let err = execute(&["names", "/nonexistent/gramdex.grammar"]).unwrap_err();
    assert!(err.starts_with("error: cannot read /nonexistent/gramdex.grammar"));
}
