//! Findings and their severities

use serde::{Deserialize, Serialize};
use std::fmt;

/// A conformance rule the checker enforces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// A public symbol has no raw twin
    MissingRaw,
    /// A raw symbol has no public partner
    OrphanRaw,
    /// The two symbols of a pair differ in shape
    PairMismatch,
    /// The two symbols of a pair list different non-null positions
    NonNullMismatch,
    /// A non-null position names no parameter
    NonNullOutOfRange,
    /// A non-null position names a parameter that is not a pointer
    NonNullNotPointer,
    /// A handle discipline sits on the wrong kind of parameter
    HandleTagMisplaced,
    /// `__NO_RETURN` on a function that returns a value
    NoReturnNotVoid,
    /// A symbol declared more than once
    Duplicate,
    /// A symbol with neither the public nor the raw prefix
    UnknownPrefix,
    /// A catalog symbol the header lacks
    MissingFromHeader,
    /// A header symbol the catalog lacks
    ExtraInHeader,
    /// Header and catalog disagree on a symbol's shape
    CatalogMismatch,
}

impl Rule {
    pub const ALL: [Rule; 13] = [
        Rule::MissingRaw,
        Rule::OrphanRaw,
        Rule::PairMismatch,
        Rule::NonNullMismatch,
        Rule::NonNullOutOfRange,
        Rule::NonNullNotPointer,
        Rule::HandleTagMisplaced,
        Rule::NoReturnNotVoid,
        Rule::Duplicate,
        Rule::UnknownPrefix,
        Rule::MissingFromHeader,
        Rule::ExtraInHeader,
        Rule::CatalogMismatch,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Rule::MissingRaw => "missing_raw",
            Rule::OrphanRaw => "orphan_raw",
            Rule::PairMismatch => "pair_mismatch",
            Rule::NonNullMismatch => "non_null_mismatch",
            Rule::NonNullOutOfRange => "non_null_out_of_range",
            Rule::NonNullNotPointer => "non_null_not_pointer",
            Rule::HandleTagMisplaced => "handle_tag_misplaced",
            Rule::NoReturnNotVoid => "no_return_not_void",
            Rule::Duplicate => "duplicate",
            Rule::UnknownPrefix => "unknown_prefix",
            Rule::MissingFromHeader => "missing_from_header",
            Rule::ExtraInHeader => "extra_in_header",
            Rule::CatalogMismatch => "catalog_mismatch",
        }
    }

    pub fn default_severity(&self) -> Severity {
        match self {
            Rule::NonNullNotPointer | Rule::UnknownPrefix => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// One conformance violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub rule: Rule,
    pub severity: Severity,
    pub symbol: String,
    /// 1-based source line, absent for catalog-only symbols
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    pub message: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(
                f,
                "{}: line {}: {}: {} [{}]",
                self.severity, line, self.symbol, self.message, self.rule
            ),
            None => write!(
                f,
                "{}: {}: {} [{}]",
                self.severity, self.symbol, self.message, self.rule
            ),
        }
    }
}

/// Result of a check or diff run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Number of declarations examined
    pub checked: usize,
    pub findings: Vec<Finding>,
}

impl Report {
    pub fn new(checked: usize) -> Self {
        Self {
            checked,
            findings: Vec::new(),
        }
    }

    pub fn push(&mut self, finding: Finding) {
        log::warn!("{}", finding);
        self.findings.push(finding);
    }

    pub fn errors(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warnings(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.findings
            .iter()
            .filter(|finding| finding.severity == severity)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.errors() > 0
    }

    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// Findings raised under one rule
    pub fn by_rule(&self, rule: Rule) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(move |finding| finding.rule == rule)
    }

    /// Orders findings by line, then symbol, with catalog-only symbols last
    pub fn sort(&mut self) {
        self.findings.sort_by(|a, b| {
            (a.line.is_none(), a.line, &a.symbol, a.rule).cmp(&(
                b.line.is_none(),
                b.line,
                &b.symbol,
                b.rule,
            ))
        });
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for finding in &self.findings {
            writeln!(f, "{}", finding)?;
        }
        write!(
            f,
            "{} declarations checked: {} errors, {} warnings",
            self.checked,
            self.errors(),
            self.warnings()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(rule: Rule, line: Option<usize>) -> Finding {
        Finding {
            rule,
            severity: rule.default_severity(),
            symbol: "zx_handle_close".to_string(),
            line,
            message: "test".to_string(),
        }
    }

    #[test]
    fn test_rule_names_match_serde() {
        for rule in Rule::ALL {
            let json = serde_json::to_value(rule).unwrap();
            assert_eq!(json, rule.name());
        }
    }

    #[test]
    fn test_counts() {
        let mut report = Report::new(2);
        assert!(report.is_clean());
        report.push(finding(Rule::MissingRaw, Some(4)));
        report.push(finding(Rule::UnknownPrefix, Some(1)));
        assert_eq!(report.errors(), 1);
        assert_eq!(report.warnings(), 1);
        assert!(report.has_errors());
        assert_eq!(report.by_rule(Rule::MissingRaw).count(), 1);
    }

    #[test]
    fn test_warnings_alone_are_not_errors() {
        let mut report = Report::new(1);
        report.push(finding(Rule::NonNullNotPointer, Some(3)));
        assert!(!report.has_errors());
        assert!(!report.is_clean());
    }

    #[test]
    fn test_sort_puts_catalog_findings_last() {
        let mut report = Report::new(3);
        report.push(finding(Rule::MissingFromHeader, None));
        report.push(finding(Rule::Duplicate, Some(9)));
        report.push(finding(Rule::MissingRaw, Some(2)));
        report.sort();
        let lines: Vec<_> = report.findings.iter().map(|finding| finding.line).collect();
        assert_eq!(lines, vec![Some(2), Some(9), None]);
    }

    #[test]
    fn test_display() {
        let mut report = Report::new(2);
        report.push(finding(Rule::MissingRaw, Some(4)));
        report.push(finding(Rule::MissingFromHeader, None));
        assert_eq!(
            report.to_string(),
            "error: line 4: zx_handle_close: test [missing_raw]\n\
             error: zx_handle_close: test [missing_from_header]\n\
             2 declarations checked: 2 errors, 0 warnings"
        );
    }
}
