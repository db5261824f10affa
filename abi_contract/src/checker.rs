//! Conformance checks
//!
//! [`check`] polices one declaration list on its own: every public symbol
//! has a raw twin of identical shape, non-null positions are sane, handle
//! disciplines sit on handles and `__NO_RETURN` functions return `void`.
//! [`diff`] compares a declaration list against a reference set, normally
//! the `zx_sys` catalog.

use crate::config::CheckConfig;
use crate::model::{Declaration, Difference, FnAttribute, Signature};
use crate::report::{Finding, Report, Rule};
use std::collections::HashMap;
use zx_sys::HandleDiscipline;

fn finding(
    config: &CheckConfig,
    rule: Rule,
    symbol: &str,
    line: Option<usize>,
    message: String,
) -> Finding {
    Finding {
        rule,
        severity: config.severity_for(rule),
        symbol: symbol.to_string(),
        line,
        message,
    }
}

/// First declaration of each symbol, reporting the rest as duplicates
fn index<'a>(
    declarations: &'a [Declaration],
    config: &CheckConfig,
    report: &mut Report,
) -> (Vec<&'a Declaration>, HashMap<&'a str, &'a Declaration>) {
    let mut order = Vec::new();
    let mut by_name: HashMap<&str, &Declaration> = HashMap::new();

    for decl in declarations {
        if config.is_ignored(decl.name()) {
            continue;
        }
        match by_name.get(decl.name()) {
            Some(first) => report.push(finding(
                config,
                Rule::Duplicate,
                decl.name(),
                Some(decl.line),
                format!("already declared on line {}", first.line),
            )),
            None => {
                by_name.insert(decl.name(), decl);
                order.push(decl);
            }
        }
    }

    (order, by_name)
}

// ===== Per-declaration rules =====

fn check_nonnull(decl: &Declaration, config: &CheckConfig, report: &mut Report) {
    let signature = &decl.signature;
    for position in signature.nonnull_set() {
        let param = position
            .checked_sub(1)
            .and_then(|index| signature.params.get(index));
        match param {
            None => report.push(finding(
                config,
                Rule::NonNullOutOfRange,
                decl.name(),
                Some(decl.line),
                format!(
                    "non-null position {} but {} parameters",
                    position,
                    signature.params.len()
                ),
            )),
            Some(param) if !param.ty.is_pointer() => report.push(finding(
                config,
                Rule::NonNullNotPointer,
                decl.name(),
                Some(decl.line),
                format!(
                    "non-null position {} names `{} {}`, not a pointer",
                    position, param.ty, param.name
                ),
            )),
            Some(_) => {}
        }
    }
}

fn check_handle_tags(decl: &Declaration, config: &CheckConfig, report: &mut Report) {
    for param in &decl.signature.params {
        for tag in &param.tags {
            let Some(discipline) = tag.discipline() else {
                continue;
            };
            let well_placed = param.ty.is_handle()
                && match discipline {
                    HandleDiscipline::Acquire => {
                        param.ty.pointer_depth == 1 && param.ty.is_mut_pointer()
                    }
                    _ => param.ty.pointer_depth == 0,
                };
            if !well_placed {
                let expected = match discipline {
                    HandleDiscipline::Acquire => "a mutable `zx_handle_t*`",
                    _ => "a `zx_handle_t` passed by value",
                };
                report.push(finding(
                    config,
                    Rule::HandleTagMisplaced,
                    decl.name(),
                    Some(decl.line),
                    format!(
                        "`{}` on `{} {}` needs {}",
                        tag, param.ty, param.name, expected
                    ),
                ));
            }
        }
    }
}

fn check_noreturn(decl: &Declaration, config: &CheckConfig, report: &mut Report) {
    let signature = &decl.signature;
    if signature.has_attr(FnAttribute::NoReturn) && !signature.ret.is_void() {
        report.push(finding(
            config,
            Rule::NoReturnNotVoid,
            decl.name(),
            Some(decl.line),
            format!("`__NO_RETURN` with return type `{}`", signature.ret),
        ));
    }
}

// ===== Pair rules =====

fn check_pair(public: &Declaration, raw: &Declaration, config: &CheckConfig, report: &mut Report) {
    for difference in public.signature.differences(&raw.signature) {
        let rule = match difference {
            Difference::NonNull { .. } => Rule::NonNullMismatch,
            _ => Rule::PairMismatch,
        };
        report.push(finding(
            config,
            rule,
            raw.name(),
            Some(raw.line),
            format!("differs from `{}`: {}", public.name(), difference),
        ));
    }
}

/// Checks a declaration list for internal consistency
pub fn check(declarations: &[Declaration], config: &CheckConfig) -> Report {
    let mut report = Report::new(declarations.len());
    let (order, by_name) = index(declarations, config, &mut report);

    for decl in order {
        check_nonnull(decl, config, &mut report);
        check_handle_tags(decl, config, &mut report);
        check_noreturn(decl, config, &mut report);

        let name = decl.name();
        if let Some(public) = config.public_name(name) {
            if !by_name.contains_key(public) && !config.allow_orphan_raw {
                report.push(finding(
                    config,
                    Rule::OrphanRaw,
                    name,
                    Some(decl.line),
                    format!("no public `{}`", public),
                ));
            }
        } else if config.is_public(name) {
            let raw_name = config.raw_name(name);
            match by_name.get(raw_name.as_str()) {
                Some(raw) => check_pair(decl, raw, config, &mut report),
                None if config.require_pairs => report.push(finding(
                    config,
                    Rule::MissingRaw,
                    name,
                    Some(decl.line),
                    format!("no raw `{}`", raw_name),
                )),
                None => {}
            }
        } else {
            report.push(finding(
                config,
                Rule::UnknownPrefix,
                name,
                Some(decl.line),
                format!(
                    "neither `{}` nor `{}{}` prefixed",
                    config.public_prefix, config.private_prefix, config.public_prefix
                ),
            ));
        }
    }

    report.sort();
    log::info!(
        "checked {} declarations: {} errors, {} warnings",
        report.checked,
        report.errors(),
        report.warnings()
    );
    report
}

/// Compares a declaration list against a reference set of signatures
pub fn diff(declarations: &[Declaration], reference: &[Signature], config: &CheckConfig) -> Report {
    let mut report = Report::new(declarations.len());
    let (order, by_name) = index(declarations, config, &mut report);

    let mut known: HashMap<&str, &Signature> = HashMap::new();
    for signature in reference {
        if config.is_ignored(&signature.name) {
            continue;
        }
        known.entry(signature.name.as_str()).or_insert(signature);

        match by_name.get(signature.name.as_str()) {
            None => report.push(finding(
                config,
                Rule::MissingFromHeader,
                &signature.name,
                None,
                "declared in the catalog but not in the header".to_string(),
            )),
            Some(decl) => {
                for difference in signature.differences(&decl.signature) {
                    report.push(finding(
                        config,
                        Rule::CatalogMismatch,
                        decl.name(),
                        Some(decl.line),
                        format!("catalog vs header: {}", difference),
                    ));
                }
            }
        }
    }

    for decl in order {
        if !known.contains_key(decl.name()) {
            report.push(finding(
                config,
                Rule::ExtraInHeader,
                decl.name(),
                Some(decl.line),
                "declared in the header but not in the catalog".to_string(),
            ));
        }
    }

    report.sort();
    log::info!(
        "diffed {} declarations against {} signatures: {} errors",
        report.checked,
        reference.len(),
        report.errors()
    );
    report
}
