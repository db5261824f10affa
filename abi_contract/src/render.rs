//! Canonical C rendering
//!
//! Output matches what abigen generates: one parameter per line indented by
//! four spaces, `void` for an empty list, `__NONNULL` before the other
//! attributes, and a blank line between declarations.

use crate::model::{Param, Signature};
use std::fmt::Write;

const PARAM_INDENT: &str = "    ";

fn render_param(param: &Param) -> String {
    let mut out = String::new();
    for tag in &param.tags {
        let _ = write!(out, "ZX_SYSCALL_PARAM_ATTR({}) ", tag);
    }
    let _ = write!(out, "{} {}", param.ty, param.name);
    out
}

/// Renders one declaration, terminated by a newline
pub fn render_declaration(signature: &Signature) -> String {
    let mut out = format!("extern {} {}(\n", signature.ret, signature.name);

    if signature.params.is_empty() {
        out.push_str(PARAM_INDENT);
        out.push_str("void");
    } else {
        let params: Vec<String> = signature
            .params
            .iter()
            .map(|param| format!("{}{}", PARAM_INDENT, render_param(param)))
            .collect();
        out.push_str(&params.join(",\n"));
    }
    out.push(')');

    let nonnull = signature.nonnull_set();
    if !nonnull.is_empty() {
        let positions: Vec<String> = nonnull.iter().map(usize::to_string).collect();
        let _ = write!(out, " __NONNULL(({}))", positions.join(", "));
    }
    for attr in signature.sorted_attrs() {
        out.push(' ');
        out.push_str(attr.c_name());
    }

    out.push_str(";\n");
    out
}

/// Renders a declaration list, separating entries with a blank line
pub fn render_header<'a, I>(signatures: I) -> String
where
    I: IntoIterator<Item = &'a Signature>,
{
    signatures
        .into_iter()
        .map(render_declaration)
        .collect::<Vec<_>>()
        .join("\n")
}
