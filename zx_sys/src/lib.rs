//! # Zircon Syscalls
//!
//! This crate declares the Zircon system-call surface for Rust.
//!
//! ## Philosophy
//!
//! Every syscall is declared twice:
//! - `zx_<name>`: the public entry point
//! - `_zx_<name>`: the raw twin with an identical signature
//!
//! A higher layer chooses which of the two it links against. This crate
//! makes no choice and wraps nothing.
//!
//! ## Design Goals
//!
//! 1. **One source of truth**: the extern block and [`catalog::SYSCALLS`]
//!    are expanded from a single declaration list and cannot drift.
//! 2. **Introspectable**: parameter ownership tags and non-null constraints
//!    survive as data, so conformance tooling can check them.
//! 3. **Host friendly**: the `zircon` library is only linked on Fuchsia;
//!    elsewhere the crate builds and the catalog is usable.
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A safe wrapper library (no handle RAII, no `Result` conversions)
//! - A kernel (nothing here implements a syscall)
//! - A code generator (the declaration list is maintained by hand)

#[macro_use]
mod macros;

pub mod catalog;
mod definitions;

pub use catalog::{
    EntryPoint, FnAttr, HandleDiscipline, ParamDecl, ParamMarker, ReturnKind, SyscallDecl,
};
pub use definitions::*;
pub use zx_types;
