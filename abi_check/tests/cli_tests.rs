//! Integration tests for the abi_check commands

use abi_check::{parse_args, run, CliError, EXIT_FINDINGS, EXIT_OK};
use std::fs;
use tempfile::TempDir;

const HEADER: &str = include_str!("../../abi_contract/testdata/definitions.h");

const BROKEN: &str = "extern zx_status_t zx_handle_close(
    ZX_SYSCALL_PARAM_ATTR(handle_release_always) zx_handle_t handle) __LEAF_FN;
";

fn invoke(list: &[&str]) -> (Result<i32, CliError>, String) {
    let args: Vec<String> = std::iter::once("abi_check")
        .chain(list.iter().copied())
        .map(String::from)
        .collect();
    let options = parse_args(&args).unwrap();
    let mut out = Vec::new();
    let result = run(&options, &mut out);
    (result, String::from_utf8(out).unwrap())
}

fn write(dir: &TempDir, name: &str, contents: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_check_clean_header() {
    let dir = TempDir::new().unwrap();
    let header = write(&dir, "definitions.h", HEADER);

    let (result, out) = invoke(&["check", &header]);
    assert_eq!(result.unwrap(), EXIT_OK);
    assert_eq!(out.trim_end(), "334 declarations checked: 0 errors, 0 warnings");
}

#[test]
fn test_check_broken_header() {
    let dir = TempDir::new().unwrap();
    let header = write(&dir, "broken.h", BROKEN);

    let (result, out) = invoke(&["check", &header]);
    assert_eq!(result.unwrap(), EXIT_FINDINGS);
    assert!(out.contains(
        "error: line 1: zx_handle_close: no raw `_zx_handle_close` [missing_raw]"
    ));
}

#[test]
fn test_check_json_output() {
    let dir = TempDir::new().unwrap();
    let header = write(&dir, "broken.h", BROKEN);

    let (result, out) = invoke(&["check", &header, "--json"]);
    assert_eq!(result.unwrap(), EXIT_FINDINGS);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["checked"], 1);
    assert_eq!(json["findings"][0]["rule"], "missing_raw");
    assert_eq!(json["findings"][0]["severity"], "error");
    assert_eq!(json["findings"][0]["line"], 1);
}

#[test]
fn test_config_can_relax_rules() {
    let dir = TempDir::new().unwrap();
    let header = write(&dir, "broken.h", BROKEN);
    let config = write(&dir, "abi.json", r#"{"require_pairs": false}"#);

    let (result, _) = invoke(&["check", &header, "--config", &config]);
    assert_eq!(result.unwrap(), EXIT_OK);
}

#[test]
fn test_bad_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    let header = write(&dir, "definitions.h", HEADER);
    let config = write(&dir, "abi.json", r#"{"version": 7}"#);

    let (result, _) = invoke(&["check", &header, "--config", &config]);
    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "unsupported config version: 7");
}

#[test]
fn test_diff_against_catalog() {
    let dir = TempDir::new().unwrap();
    let header = write(&dir, "definitions.h", HEADER);
    let (result, _) = invoke(&["diff", &header]);
    assert_eq!(result.unwrap(), EXIT_OK);

    let partial = write(&dir, "broken.h", BROKEN);
    let (result, out) = invoke(&["diff", &partial]);
    assert_eq!(result.unwrap(), EXIT_FINDINGS);
    assert!(out.contains("[missing_from_header]"));
    assert!(!out.contains("[extra_in_header]"));
    assert!(!out.contains("[catalog_mismatch]"));
}

#[test]
fn test_dump_matches_header() {
    let (result, out) = invoke(&["dump"]);
    assert_eq!(result.unwrap(), EXIT_OK);
    assert!(HEADER.trim_end().ends_with(out.trim_end()));
}

#[test]
fn test_dump_json() {
    let (result, out) = invoke(&["dump", "--json"]);
    assert_eq!(result.unwrap(), EXIT_OK);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 334);
    assert_eq!(entries[0]["name"], "zx_clock_get");
    assert_eq!(entries[1]["name"], "_zx_clock_get");
}

#[test]
fn test_fingerprint_of_header_equals_catalog() {
    let dir = TempDir::new().unwrap();
    let header = write(&dir, "definitions.h", HEADER);

    let (_, from_catalog) = invoke(&["fingerprint"]);
    let (_, from_header) = invoke(&["fingerprint", &header]);
    assert_eq!(from_catalog.trim_end().len(), 64);
    assert_eq!(from_catalog, from_header);

    let (_, json) = invoke(&["fingerprint", "--json"]);
    let json: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(json["fingerprint"], from_catalog.trim_end());
}

#[test]
fn test_missing_header_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.h").to_string_lossy().into_owned();

    let (result, out) = invoke(&["check", &missing]);
    assert!(out.is_empty());
    let message = result.unwrap_err().to_string();
    assert!(message.starts_with("failed to read"));
    assert!(message.contains("absent.h"));
}

#[test]
fn test_unparsable_header() {
    let dir = TempDir::new().unwrap();
    let header = write(&dir, "bad.h", "extern void zx_f(\n    void) __BOGUS;\n");

    let (result, _) = invoke(&["fingerprint", &header]);
    let message = result.unwrap_err().to_string();
    assert!(message.contains("line 2: unknown function attribute `__BOGUS`"));
}
