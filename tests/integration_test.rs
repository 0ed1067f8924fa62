use std::process::Command;

use minirt::{run, Config, IntWidth, RuntimeError};

fn run_file(filename: &str, width: IntWidth) -> (String, Result<(), RuntimeError>) {
    let mut out = Vec::new();
    let result = run(filename, width, &mut out);
    (String::from_utf8(out).unwrap(), result)
}

#[test]
fn test_basic() {
    let (out, result) = run_file("tests/scripts/basic.calls", IntWidth::W64);
    assert!(result.is_ok());
    assert_eq!(out, "1 2 3 \n42 \n-5 7 \n");
}

#[test]
fn test_empty_calls() {
    let (out, result) = run_file("tests/scripts/empty.calls", IntWidth::W64);
    assert!(result.is_ok());
    assert_eq!(out, "\n");
}

#[test]
fn test_count_mismatch_stops_replay() {
    let (out, result) = run_file("tests/scripts/short.calls", IntWidth::W64);
    match result {
        Err(RuntimeError::CountMismatch { line, count, found }) => assert_eq!((line, count, found), (2, 3, 2)),
        other => panic!("unexpected {:?}", other),
    }
    assert_eq!(out, "10 \n");
}

#[test]
fn test_width() {
    let (out, result) = run_file("tests/scripts/wide.calls", IntWidth::W64);
    assert!(result.is_ok());
    assert_eq!(out, "-9223372036854775808 9223372036854775807 \n");

    let (out, result) = run_file("tests/scripts/wide.calls", IntWidth::W32);
    assert!(matches!(result, Err(RuntimeError::Overflow { line: Some(1), .. })));
    assert!(out.is_empty());
}

#[test]
fn test_missing_file() {
    let (_, result) = run_file("tests/scripts/missing.calls", IntWidth::W64);
    assert!(matches!(result, Err(RuntimeError::Io(_))));
}

#[test]
fn test_print_values_range() {
    let config = Config { width: IntWidth::W32, noeol: true };
    match minirt::print_values(&[1 << 40], config) {
        Err(e @ RuntimeError::Overflow { line: None, .. }) =>
            assert_eq!(e.to_string(), "1099511627776 does not fit in a 32-bit word"),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_print_to_buffer() {
    let mut out = Vec::new();
    minirt::print(&mut out, false, &[7u8, 8, 9]).unwrap();
    assert_eq!(out, b"7 8 9 \n");
}

fn minirt(args: &[&str]) -> (bool, Vec<u8>) {
    let output = Command::new(env!("CARGO_BIN_EXE_minirt")).args(args).output().unwrap();
    (output.status.success(), output.stdout)
}

#[test]
fn test_cli_print() {
    assert_eq!(minirt(&["print", "1", "2", "3"]), (true, b"1 2 3 \n".to_vec()));
    assert_eq!(minirt(&["print", "-n", "-5", "7"]), (true, b"-5 7 ".to_vec()));
    assert_eq!(minirt(&["print"]), (true, b"\n".to_vec()));
    assert_eq!(minirt(&["print", "-n"]), (true, Vec::new()));
}

#[test]
fn test_cli_print_narrow() {
    assert_eq!(minirt(&["print", "--width", "32", "-2147483648", "2147483647"]),
               (true, b"-2147483648 2147483647 \n".to_vec()));
    let (ok, out) = minirt(&["print", "--width", "32", "2147483648"]);
    assert!(!ok);
    assert!(out.is_empty());
}

#[test]
fn test_cli_run() {
    assert_eq!(minirt(&["run", "tests/scripts/basic.calls"]), (true, b"1 2 3 \n42 \n-5 7 \n".to_vec()));
    let (ok, out) = minirt(&["run", "tests/scripts/short.calls"]);
    assert!(!ok);
    assert_eq!(out, b"10 \n");
}
