//! # ABI Check
//!
//! Command-line front end over `abi_contract`.
//!
//! ## Commands
//!
//! - `check <header>`: parse a header and run the conformance rules
//! - `diff <header>`: compare a header against the built-in catalog
//! - `dump`: print the built-in catalog as C declarations or JSON
//! - `fingerprint [<header>]`: ABI fingerprint of a header or the catalog
//!
//! ## Exit Codes
//!
//! - `0`: no error findings
//! - `1`: at least one error finding
//! - `2`: usage error, unreadable input or unparsable header

use abi_contract::{
    catalog, check, diff, fingerprint, load_header, render_header, CheckConfig, ContractError,
    Report,
};
use std::io::{self, Write};
use std::path::PathBuf;
use thiserror::Error;

pub const EXIT_OK: i32 = 0;
pub const EXIT_FINDINGS: i32 = 1;
pub const EXIT_USAGE: i32 = 2;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Contract(#[from] ContractError),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Check { header: PathBuf },
    Diff { header: PathBuf },
    Dump,
    Fingerprint { header: Option<PathBuf> },
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOptions {
    pub command: Command,
    pub config: Option<PathBuf>,
    pub json: bool,
}

/// Parses `args`, including the program name at index 0
pub fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut config = None;
    let mut json = false;
    let mut positional = Vec::new();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --config".to_string());
                }
                config = Some(PathBuf::from(&args[i]));
            }
            "--json" => {
                json = true;
            }
            "--help" | "-h" => {
                return Ok(CliOptions {
                    command: Command::Help,
                    config,
                    json,
                });
            }
            other if other.starts_with('-') => {
                return Err(format!("Unknown option: {}", other));
            }
            other => positional.push(other.to_string()),
        }
        i += 1;
    }

    let mut positional = positional.into_iter();
    let command = match positional.next().as_deref() {
        Some("check") => Command::Check {
            header: positional
                .next()
                .map(PathBuf::from)
                .ok_or("Missing header for check")?,
        },
        Some("diff") => Command::Diff {
            header: positional
                .next()
                .map(PathBuf::from)
                .ok_or("Missing header for diff")?,
        },
        Some("dump") => Command::Dump,
        Some("fingerprint") => Command::Fingerprint {
            header: positional.next().map(PathBuf::from),
        },
        Some("help") => Command::Help,
        Some(other) => return Err(format!("Unknown command: {}", other)),
        None => return Err("Missing command".to_string()),
    };

    if let Some(extra) = positional.next() {
        return Err(format!("Unexpected argument: {}", extra));
    }

    Ok(CliOptions {
        command,
        config,
        json,
    })
}

pub fn print_usage(out: &mut impl Write, program: &str) -> io::Result<()> {
    writeln!(out, "Usage: {} <COMMAND> [OPTIONS]", program)?;
    writeln!(out)?;
    writeln!(out, "Commands:")?;
    writeln!(out, "  check <HEADER>           Check a header for ABI conformance")?;
    writeln!(out, "  diff <HEADER>            Compare a header against the catalog")?;
    writeln!(out, "  dump                     Print the built-in catalog")?;
    writeln!(out, "  fingerprint [HEADER]     Print the ABI fingerprint")?;
    writeln!(out)?;
    writeln!(out, "Options:")?;
    writeln!(out, "  -c, --config <FILE>      Checker configuration (JSON)")?;
    writeln!(out, "  --json                   Machine-readable output")?;
    writeln!(out, "  -h, --help               Show this help message")?;
    Ok(())
}

fn load_config(options: &CliOptions) -> Result<CheckConfig, ContractError> {
    match &options.config {
        Some(path) => {
            log::info!("using config {}", path.display());
            Ok(CheckConfig::from_path(path)?)
        }
        None => {
            log::debug!("using default config");
            Ok(CheckConfig::default())
        }
    }
}

fn write_report(out: &mut impl Write, report: &Report, json: bool) -> Result<i32, CliError> {
    if json {
        serde_json::to_writer_pretty(&mut *out, report)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", report)?;
    }
    Ok(if report.has_errors() {
        EXIT_FINDINGS
    } else {
        EXIT_OK
    })
}

/// Runs one command, writing its output to `out`; returns the exit code
pub fn run(options: &CliOptions, out: &mut impl Write) -> Result<i32, CliError> {
    log::info!("running {:?}", options.command);
    match &options.command {
        Command::Check { header } => {
            let config = load_config(options)?;
            let decls = load_header(header)?;
            let report = check(&decls, &config);
            write_report(out, &report, options.json)
        }
        Command::Diff { header } => {
            let config = load_config(options)?;
            let decls = load_header(header)?;
            let report = diff(&decls, &catalog::signatures(), &config);
            write_report(out, &report, options.json)
        }
        Command::Dump => {
            let signatures = catalog::signatures();
            if options.json {
                serde_json::to_writer_pretty(&mut *out, &signatures)?;
                writeln!(out)?;
            } else {
                write!(out, "{}", render_header(&signatures))?;
            }
            Ok(EXIT_OK)
        }
        Command::Fingerprint { header } => {
            let signatures: Vec<_> = match header {
                Some(path) => load_header(path)?
                    .into_iter()
                    .map(|decl| decl.signature)
                    .collect(),
                None => catalog::signatures(),
            };
            let digest = fingerprint(&signatures);
            if options.json {
                serde_json::to_writer(&mut *out, &serde_json::json!({ "fingerprint": digest }))?;
                writeln!(out)?;
            } else {
                writeln!(out, "{}", digest)?;
            }
            Ok(EXIT_OK)
        }
        Command::Help => {
            print_usage(out, "abi_check")?;
            Ok(EXIT_OK)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("abi_check")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_check() {
        let options = parse_args(&args(&["check", "defs.h", "--json"])).unwrap();
        assert_eq!(
            options.command,
            Command::Check {
                header: PathBuf::from("defs.h")
            }
        );
        assert!(options.json);
        assert_eq!(options.config, None);
    }

    #[test]
    fn test_parse_config_before_command() {
        let options = parse_args(&args(&["--config", "abi.json", "diff", "defs.h"])).unwrap();
        assert_eq!(options.config, Some(PathBuf::from("abi.json")));
        assert!(matches!(options.command, Command::Diff { .. }));
    }

    #[test]
    fn test_parse_fingerprint_header_is_optional() {
        let options = parse_args(&args(&["fingerprint"])).unwrap();
        assert_eq!(options.command, Command::Fingerprint { header: None });
    }

    #[test]
    fn test_parse_help() {
        assert_eq!(parse_args(&args(&["-h"])).unwrap().command, Command::Help);
        assert_eq!(parse_args(&args(&["help"])).unwrap().command, Command::Help);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_args(&args(&[])).unwrap_err(), "Missing command");
        assert_eq!(
            parse_args(&args(&["check"])).unwrap_err(),
            "Missing header for check"
        );
        assert_eq!(
            parse_args(&args(&["lint", "defs.h"])).unwrap_err(),
            "Unknown command: lint"
        );
        assert_eq!(
            parse_args(&args(&["dump", "--verbose"])).unwrap_err(),
            "Unknown option: --verbose"
        );
        assert_eq!(
            parse_args(&args(&["dump", "extra"])).unwrap_err(),
            "Unexpected argument: extra"
        );
        assert_eq!(
            parse_args(&args(&["dump", "--config"])).unwrap_err(),
            "Missing value for --config"
        );
    }

    #[test]
    fn test_help_output() {
        let options = parse_args(&args(&["--help"])).unwrap();
        let mut out = Vec::new();
        assert_eq!(run(&options, &mut out).unwrap(), EXIT_OK);
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Usage: abi_check <COMMAND>"));
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_usage_write_errors_are_returned() {
        let err = print_usage(&mut ClosedPipe, "abi_check").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);

        let options = parse_args(&args(&["help"])).unwrap();
        let err = run(&options, &mut ClosedPipe).unwrap_err();
        assert!(matches!(err, CliError::Output(_)));
    }
}
