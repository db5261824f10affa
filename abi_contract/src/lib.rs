//! # ABI Contract
//!
//! This crate turns syscall declarations into data and checks that the data
//! obeys the ABI contract.
//!
//! ## Philosophy
//!
//! - **Declarations are the contract**: a syscall table is correct when its
//!   shape is consistent, not when some implementation happens to work.
//! - **Findings, not panics**: a broken header produces a [`Report`], never
//!   an abort.
//! - **Two sources, one model**: C headers (through [`parser`]) and the
//!   `zx_sys` catalog (through [`catalog`]) both become [`Signature`]s.
//!
//! ## Structure
//!
//! - [`model`]: owned signature model shared by every other module
//! - [`parser`]: abigen-style C header parser
//! - [`render`]: canonical C rendering
//! - [`checker`]: pair symmetry, non-null and handle-tag rules, catalog diff
//! - [`fingerprint`]: order-independent SHA-256 of a declaration set
//! - [`config`]: checker configuration
//! - [`report`]: findings and their severities

pub mod catalog;
pub mod checker;
pub mod config;
pub mod error;
pub mod fingerprint;
pub mod model;
pub mod parser;
pub mod render;
pub mod report;

pub use checker::{check, diff};
pub use config::{CheckConfig, ConfigError};
pub use error::{load_header, ContractError};
pub use fingerprint::fingerprint;
pub use model::{CType, Declaration, Difference, FnAttribute, Param, ParamTag, Signature};
pub use parser::{parse_header, ParseError, ParseErrorKind};
pub use render::{render_declaration, render_header};
pub use report::{Finding, Report, Rule, Severity};
