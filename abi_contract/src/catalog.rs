//! Bridge from the `zx_sys` catalog to C signatures
//!
//! The catalog records parameter types the way the extern block spells them
//! (`*mut zx_handle_t`, `usize`). They are translated back to the C names a
//! generated header uses, so the two can be compared and rendered alike.

use crate::model::{CType, FnAttribute, Param, ParamTag, Signature};
use zx_sys::catalog as zx_catalog;
use zx_sys::{EntryPoint, FnAttr, ParamDecl, ParamMarker, ReturnKind, SyscallDecl};

/// C spelling of a non-pointer Rust type
fn c_base(rust: &str) -> &str {
    match rust {
        "u8" => "uint8_t",
        "u16" => "uint16_t",
        "u32" => "uint32_t",
        "u64" => "uint64_t",
        "i32" => "int32_t",
        "i64" => "int64_t",
        "usize" => "size_t",
        "c_int" => "int",
        "c_char" => "char",
        "c_void" | "()" => "void",
        // zx_* aliases, uintptr_t and bool keep their names
        other => other,
    }
}

/// Strips a leading keyword that stands on its own, not as part of a name
fn strip_keyword<'a>(text: &'a str, keyword: &str) -> Option<&'a str> {
    let after = text.strip_prefix(keyword)?;
    match after.chars().next() {
        Some(c) if c.is_whitespace() || c == '*' => Some(after.trim_start()),
        _ => None,
    }
}

/// Translates a Rust type as written in the extern block into its C form
///
/// Spacing around `*` varies in `stringify!` output, so `* const T`,
/// `*const T` and `*const*const T` all read the same.
pub fn c_type(rust: &str) -> CType {
    let mut rest = rust.trim();
    let mut pointer_depth = 0;
    let mut is_const = false;

    while let Some(pointee) = rest.strip_prefix('*') {
        let pointee = pointee.trim_start();
        if let Some(after) = strip_keyword(pointee, "mut") {
            is_const = false;
            rest = after;
        } else if let Some(after) = strip_keyword(pointee, "const") {
            is_const = true;
            rest = after;
        } else {
            rest = pointee;
        }
        pointer_depth += 1;
    }

    // Paths such as `core::ffi::c_int` reduce to their last segment
    let base = rest.rsplit("::").next().unwrap_or(rest).trim();

    CType {
        base: c_base(base).to_string(),
        is_const,
        pointer_depth,
    }
}

fn param(decl: &ParamDecl) -> Param {
    let tags = decl
        .markers
        .iter()
        .filter_map(|marker| match marker {
            ParamMarker::Handle(discipline) => Some(ParamTag::from(*discipline)),
            ParamMarker::Tag(tag) => Some(ParamTag::from_name(tag)),
            ParamMarker::NonNull => None,
        })
        .collect();

    Param {
        name: decl.name().to_string(),
        ty: c_type(decl.rust_type()),
        tags,
    }
}

/// The C signature of one entry point of a catalogued syscall
pub fn signature(decl: &SyscallDecl, entry: EntryPoint) -> Signature {
    let ret = match decl.ret {
        ReturnKind::Value(rust) => c_type(rust),
        ReturnKind::Void | ReturnKind::NoReturn => CType::void(),
    };

    let mut signature = Signature::new(decl.symbol(entry), ret);
    signature.params = decl.params.iter().map(param).collect();
    signature.nonnull = decl.nonnull_positions();

    for attr in decl.attrs {
        signature = signature.with_attr(match attr {
            FnAttr::Leaf => FnAttribute::Leaf,
            FnAttr::Const => FnAttribute::Const,
        });
    }
    if decl.is_noreturn() {
        signature = signature.with_attr(FnAttribute::NoReturn);
    }

    signature
}

/// Both entry points of every catalogued syscall, public symbol first
pub fn signatures() -> Vec<Signature> {
    let signatures: Vec<Signature> = zx_catalog::all()
        .iter()
        .flat_map(|decl| {
            [
                signature(decl, EntryPoint::Public),
                signature(decl, EntryPoint::Raw),
            ]
        })
        .collect();
    log::debug!("catalog yields {} signatures", signatures.len());
    signatures
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_types() {
        assert_eq!(c_type("u32"), CType::value("uint32_t"));
        assert_eq!(c_type("usize"), CType::value("size_t"));
        assert_eq!(c_type("uintptr_t"), CType::value("uintptr_t"));
        assert_eq!(c_type("c_int"), CType::value("int"));
        assert_eq!(c_type("zx_handle_t"), CType::value("zx_handle_t"));
        assert_eq!(c_type("bool"), CType::value("bool"));
    }

    #[test]
    fn test_pointer_types() {
        assert_eq!(c_type("*mut zx_handle_t"), CType::pointer("zx_handle_t"));
        assert_eq!(c_type("*const c_void"), CType::const_pointer("void"));
        assert_eq!(c_type("* const c_char"), CType::const_pointer("char"));
        assert_eq!(c_type("*mut core::ffi::c_char"), CType::pointer("char"));
        assert_eq!(c_type("*mut *mut u8").pointer_depth, 2);
        assert_eq!(
            c_type("*mut  *mut u8"),
            CType {
                base: "uint8_t".to_string(),
                is_const: false,
                pointer_depth: 2,
            }
        );
        assert_eq!(c_type("*const*const u8").pointer_depth, 2);
        assert_eq!(c_type("* mut zx_handle_t"), CType::pointer("zx_handle_t"));
        assert_eq!(c_type("*const constant_t"), CType::const_pointer("constant_t"));
    }

    #[test]
    fn test_every_symbol_is_present() {
        let signatures = signatures();
        assert_eq!(signatures.len(), zx_catalog::all().len() * 2);
        assert_eq!(signatures[0].name, "zx_clock_get");
        assert_eq!(signatures[1].name, "_zx_clock_get");
    }

    #[test]
    fn test_pair_shapes_match() {
        for decl in zx_catalog::all() {
            let public = signature(decl, EntryPoint::Public);
            let raw = signature(decl, EntryPoint::Raw);
            assert!(public.differences(&raw).is_empty(), "{}", decl.name);
        }
    }

    #[test]
    fn test_channel_create_signature() {
        let decl = zx_catalog::find("channel_create").unwrap();
        let signature = signature(decl, EntryPoint::Public);
        assert_eq!(signature.ret, CType::value("zx_status_t"));
        assert_eq!(signature.nonnull, vec![2, 3]);
        assert_eq!(signature.params[1].ty, CType::pointer("zx_handle_t"));
        assert_eq!(signature.params[1].tags, vec![ParamTag::HandleAcquire]);
        assert_eq!(signature.attrs, vec![FnAttribute::Leaf]);
    }

    #[test]
    fn test_noreturn_is_void() {
        let decl = zx_catalog::find("thread_exit").unwrap();
        let signature = signature(decl, EntryPoint::Raw);
        assert_eq!(signature.name, "_zx_thread_exit");
        assert!(signature.ret.is_void());
        assert_eq!(
            signature.sorted_attrs(),
            vec![FnAttribute::Leaf, FnAttribute::NoReturn]
        );
    }

    #[test]
    fn test_raw_identifier_param() {
        let decl = zx_catalog::find("iommu_create").unwrap();
        let signature = signature(decl, EntryPoint::Public);
        assert!(signature.params.iter().any(|param| param.name == "type"));
    }
}
