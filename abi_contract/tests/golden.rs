//! Checks against the vendored Zircon syscall header

use abi_contract::{
    catalog, check, diff, fingerprint, parse_header, render_header, CheckConfig, Declaration,
    Rule, Signature,
};

const HEADER: &str = include_str!("../testdata/definitions.h");

fn header() -> Vec<Declaration> {
    parse_header(HEADER).expect("vendored header parses")
}

fn signatures(decls: &[Declaration]) -> Vec<Signature> {
    decls.iter().map(|decl| decl.signature.clone()).collect()
}

/// The header with its leading comment block removed
fn header_body() -> &'static str {
    HEADER
        .split_once("\n\n")
        .map(|(_, body)| body)
        .unwrap_or(HEADER)
}

#[test]
fn test_header_parses_into_all_pairs() {
    let decls = header();
    assert_eq!(decls.len(), 334);
    assert_eq!(decls[0].name(), "zx_clock_get");
    assert_eq!(decls[0].line, 5);
    assert_eq!(decls[1].name(), "_zx_clock_get");
}

#[test]
fn test_header_checks_clean() {
    let report = check(&header(), &CheckConfig::default());
    assert!(report.is_clean(), "{}", report);
    assert_eq!(report.checked, 334);
}

#[test]
fn test_header_matches_catalog() {
    let report = diff(&header(), &catalog::signatures(), &CheckConfig::default());
    assert!(report.is_clean(), "{}", report);
}

#[test]
fn test_catalog_renders_to_header() {
    let rendered = render_header(&catalog::signatures());
    assert_eq!(rendered.trim_end(), header_body().trim_end());
}

#[test]
fn test_header_round_trips_through_renderer() {
    let decls = header();
    let rendered = render_header(&signatures(&decls));
    assert_eq!(rendered.trim_end(), header_body().trim_end());
}

#[test]
fn test_fingerprints_agree() {
    let from_header = fingerprint(&signatures(&header()));
    let from_catalog = fingerprint(&catalog::signatures());
    assert_eq!(from_header, from_catalog);
}

#[test]
fn test_every_public_symbol_has_identical_raw_twin() {
    let decls = header();
    for pair in decls.chunks(2) {
        let (public, raw) = (&pair[0].signature, &pair[1].signature);
        assert_eq!(raw.name, format!("_{}", public.name));
        assert_eq!(public.renamed(raw.name.clone()), *raw);
    }
}

// ===== Broken variants of the header =====

fn check_source(source: &str) -> Vec<Rule> {
    let decls = parse_header(source).unwrap();
    check(&decls, &CheckConfig::default())
        .findings
        .iter()
        .map(|finding| finding.rule)
        .collect()
}

#[test]
fn test_dropped_raw_twin() {
    let source = HEADER.replace(
        "extern zx_status_t _zx_nanosleep(\n    zx_time_t deadline) __LEAF_FN;\n",
        "",
    );
    assert_eq!(check_source(&source), vec![Rule::MissingRaw]);
}

#[test]
fn test_dropped_public_symbol() {
    let source = HEADER.replace(
        "extern zx_status_t zx_nanosleep(\n    zx_time_t deadline) __LEAF_FN;\n",
        "",
    );
    assert_eq!(check_source(&source), vec![Rule::OrphanRaw]);
}

#[test]
fn test_raw_twin_with_other_nonnull_set() {
    let source = HEADER.replacen(
        "    zx_time_t* out) __NONNULL((2)) __LEAF_FN;",
        "    zx_time_t* out) __LEAF_FN;",
        2,
    );
    // Both symbols lose the attribute: still symmetric
    assert!(check_source(&source).is_empty());

    let raw_decl = "extern zx_status_t _zx_clock_get_new(\n    zx_clock_t clock_id,\n";
    let source = HEADER.replace(
        &format!("{}    zx_time_t* out) __NONNULL((2)) __LEAF_FN;", raw_decl),
        &format!("{}    zx_time_t* out) __LEAF_FN;", raw_decl),
    );
    assert_eq!(check_source(&source), vec![Rule::NonNullMismatch]);
}

#[test]
fn test_raw_twin_with_other_return_type() {
    let source = HEADER.replace(
        "extern zx_time_t _zx_clock_get(\n",
        "extern zx_ticks_t _zx_clock_get(\n",
    );
    assert_eq!(check_source(&source), vec![Rule::PairMismatch]);
}

#[test]
fn test_header_diff_reports_catalog_drift() {
    let source = HEADER.replace(
        "extern zx_time_t _zx_clock_get(\n",
        "extern zx_ticks_t _zx_clock_get(\n",
    );
    let decls = parse_header(&source).unwrap();
    let report = diff(&decls, &catalog::signatures(), &CheckConfig::default());
    let rules: Vec<_> = report.findings.iter().map(|finding| finding.rule).collect();
    assert_eq!(rules, vec![Rule::CatalogMismatch]);
    assert_eq!(report.findings[0].symbol, "_zx_clock_get");
}
