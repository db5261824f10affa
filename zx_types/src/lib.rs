//! # Zircon ABI Types
//!
//! This crate defines the scalar typedefs, `repr(C)` structures and status
//! codes that appear in the Zircon system-call signatures.
//!
//! ## Philosophy
//!
//! - **Layout first**: every type here mirrors the C ABI bit for bit.
//! - **No behavior**: these are the values that cross the syscall boundary,
//!   nothing more. Kernel objects stay opaque behind `zx_handle_t`.
//! - **Typed status**: raw `zx_status_t` values can be lifted into
//!   [`Status`] for `?`-style propagation.
//!
//! The lowercase `_t` names are kept on purpose so declarations read the
//! same on both sides of the FFI boundary.

#![allow(non_camel_case_types)]

pub mod status;
pub mod structs;
pub mod types;

pub use status::{ok, Status};
pub use structs::*;
pub use types::*;
