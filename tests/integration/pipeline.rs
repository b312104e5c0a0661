//! Grammar file to start symbols, through every layer.

use std::path::PathBuf;

use gramdex::inventory::{FilterPolicy, assemble, collect, rule_names, start_symbols};
use gramdex::syntax::parse;

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(path).unwrap()
}

#[test]
fn calculator_default_names() {
    let names = rule_names(&fixture("calc.grammar"), &FilterPolicy::default()).unwrap();
    assert_eq!(
        names,
        [
            "comparison",
            "statement",
            "assignment",
            "assign_var",
            "add",
            "sub",
            "mul",
            "div",
            "number",
            "neg",
            "var",
        ]
    );
}

#[test]
fn calculator_everything() {
    let names = rule_names(&fixture("calc.grammar"), &FilterPolicy::everything()).unwrap();
    assert_eq!(&names[..6], ["start", "sum", "product", "atom", "comparison", "comp_op"]);
    // `assign_var` is declared twice but listed once.
    assert_eq!(names.iter().filter(|n| *n == "assign_var").count(), 1);
}

#[test]
fn calculator_start_symbols() {
    let source = fixture("calc.grammar");
    let names = rule_names(&source, &FilterPolicy::default().with_alias(false)).unwrap();
    let symbols = start_symbols(names, ["start", "comparison"]);
    assert_eq!(symbols, ["assignment", "comparison", "start", "statement"]);
}

#[test]
fn repeated_runs_are_identical() {
    let source = fixture("calc.grammar");
    let tree = parse(&source).unwrap();
    let policy = FilterPolicy::default().with_inner(true);
    let first = assemble(&collect(&tree), &policy);
    for _ in 0..10 {
        assert_eq!(assemble(&collect(&tree), &policy), first);
    }
}

#[test]
fn parse_errors_surface_as_errors() {
    let err = rule_names("start: (a", &FilterPolicy::default()).unwrap_err();
    assert!(err.is_parse_error());
}

#[test]
fn deeply_nested_groups_are_rejected() {
    let source = format!("start: {}a{}", "[".repeat(2_000), "]".repeat(2_000));
    let err = rule_names(&source, &FilterPolicy::default()).unwrap_err();
    assert!(err.is_parse_error());
}

#[test]
fn independent_calls_do_not_interfere() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let source = format!("r{i}: a -> alias_{i}\n_hidden_{i}: b");
                rule_names(&source, &FilterPolicy::default()).unwrap()
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), [format!("r{i}"), format!("alias_{i}")]);
    }
}
