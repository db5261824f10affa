//! Syscall catalog
//!
//! A static description of every declared syscall: names of both entry
//! points, parameters with their Rust types and markers, return kind and
//! function attributes. The extern block cannot be inspected at run time;
//! this table can.

use core::fmt;

pub use crate::definitions::SYSCALLS;

/// Prefix shared by every public entry point
pub const PUBLIC_PREFIX: &str = "zx_";

/// Prefix that turns a public symbol into its raw twin
pub const RAW_PREFIX: &str = "_";

/// Which of the two symbols of a syscall is meant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryPoint {
    /// `zx_<name>`
    Public,
    /// `_zx_<name>`
    Raw,
}

/// What a call does with a handle argument
///
/// | discipline      | consumed on success | consumed on failure | produced |
/// |-----------------|---------------------|---------------------|----------|
/// | `Use`           | no                  | no                  | no       |
/// | `Release`       | yes                 | no                  | no       |
/// | `ReleaseAlways` | yes                 | yes                 | no       |
/// | `Acquire`       | no                  | no                  | yes      |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleDiscipline {
    /// Borrowed for the duration of the call
    Use,
    /// Closed by the call when it succeeds
    Release,
    /// Closed by the call whatever the outcome
    ReleaseAlways,
    /// Written by the call and owned by the caller afterwards
    Acquire,
}

impl HandleDiscipline {
    pub const ALL: [HandleDiscipline; 4] = [
        HandleDiscipline::Use,
        HandleDiscipline::Release,
        HandleDiscipline::ReleaseAlways,
        HandleDiscipline::Acquire,
    ];

    /// The annotation name used in C headers
    pub fn tag(&self) -> &'static str {
        match self {
            HandleDiscipline::Use => "handle_use",
            HandleDiscipline::Release => "handle_release",
            HandleDiscipline::ReleaseAlways => "handle_release_always",
            HandleDiscipline::Acquire => "handle_acquire",
        }
    }

    pub fn from_tag(tag: &str) -> Option<HandleDiscipline> {
        Self::ALL.into_iter().find(|discipline| discipline.tag() == tag)
    }

    /// The caller no longer owns the handle after a successful call
    pub fn consumed_on_success(&self) -> bool {
        matches!(
            self,
            HandleDiscipline::Release | HandleDiscipline::ReleaseAlways
        )
    }

    /// The caller no longer owns the handle after a failed call
    pub fn consumed_on_failure(&self) -> bool {
        matches!(self, HandleDiscipline::ReleaseAlways)
    }

    /// The call hands a new handle to the caller
    pub fn produced(&self) -> bool {
        matches!(self, HandleDiscipline::Acquire)
    }
}

impl fmt::Display for HandleDiscipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Annotation attached to a single parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamMarker {
    Handle(HandleDiscipline),
    /// Any other ABI tag, e.g. `features` or `pager`
    Tag(&'static str),
    /// Listed in the function's `__NONNULL` set
    NonNull,
}

/// Function-level attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FnAttr {
    /// Does not call back into the caller's code
    Leaf,
    /// Result depends only on the arguments
    Const,
}

impl FnAttr {
    /// The C spelling of the attribute
    pub fn c_name(&self) -> &'static str {
        match self {
            FnAttr::Leaf => "__LEAF_FN",
            FnAttr::Const => "__CONST",
        }
    }
}

/// What a syscall gives back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReturnKind {
    /// A value of the named Rust type
    Value(&'static str),
    /// Nothing
    Void,
    /// The call never returns
    NoReturn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamDecl {
    pub name: &'static str,
    pub ty: &'static str,
    pub markers: &'static [ParamMarker],
}

impl ParamDecl {
    /// Parameter name without a raw-identifier prefix (`r#type` is `type`)
    pub fn name(&self) -> &'static str {
        self.name.strip_prefix("r#").unwrap_or(self.name)
    }

    /// The Rust type as declared
    pub fn rust_type(&self) -> &'static str {
        self.ty
    }

    pub fn is_pointer(&self) -> bool {
        self.ty.trim_start().starts_with('*')
    }

    pub fn is_nonnull(&self) -> bool {
        self.markers.contains(&ParamMarker::NonNull)
    }

    pub fn handle_discipline(&self) -> Option<HandleDiscipline> {
        self.markers.iter().find_map(|marker| match marker {
            ParamMarker::Handle(discipline) => Some(*discipline),
            _ => None,
        })
    }

    /// Tags other than the handle discipline
    pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.markers.iter().filter_map(|marker| match marker {
            ParamMarker::Tag(tag) => Some(*tag),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyscallDecl {
    pub name: &'static str,
    pub raw_name: &'static str,
    pub params: &'static [ParamDecl],
    pub ret: ReturnKind,
    pub attrs: &'static [FnAttr],
}

impl SyscallDecl {
    /// Name without the `zx_` prefix, e.g. `channel_read`
    pub fn short_name(&self) -> &'static str {
        self.name.strip_prefix(PUBLIC_PREFIX).unwrap_or(self.name)
    }

    /// Symbol of the requested entry point
    pub fn symbol(&self, entry: EntryPoint) -> &'static str {
        match entry {
            EntryPoint::Public => self.name,
            EntryPoint::Raw => self.raw_name,
        }
    }

    pub fn has_attr(&self, attr: FnAttr) -> bool {
        self.attrs.contains(&attr)
    }

    pub fn is_noreturn(&self) -> bool {
        self.ret == ReturnKind::NoReturn
    }

    /// 1-based positions of non-null parameters, as `__NONNULL` lists them
    pub fn nonnull_positions(&self) -> Vec<usize> {
        self.params
            .iter()
            .enumerate()
            .filter(|(_, param)| param.is_nonnull())
            .map(|(index, _)| index + 1)
            .collect()
    }

    /// Parameters that carry a handle discipline
    pub fn handle_params(&self) -> impl Iterator<Item = (&'static ParamDecl, HandleDiscipline)> {
        let params: &'static [ParamDecl] = self.params;
        params
            .iter()
            .filter_map(|param| param.handle_discipline().map(|discipline| (param, discipline)))
    }
}

/// Every declared syscall
pub fn all() -> &'static [SyscallDecl] {
    SYSCALLS
}

/// Looks a syscall up by public symbol (`zx_port_wait`) or short name
/// (`port_wait`)
pub fn find(name: &str) -> Option<&'static SyscallDecl> {
    SYSCALLS
        .iter()
        .find(|decl| decl.name == name || decl.short_name() == name)
}

/// Looks a syscall up by either of its symbols
pub fn by_symbol(symbol: &str) -> Option<(&'static SyscallDecl, EntryPoint)> {
    SYSCALLS.iter().find_map(|decl| {
        if decl.name == symbol {
            Some((decl, EntryPoint::Public))
        } else if decl.raw_name == symbol {
            Some((decl, EntryPoint::Raw))
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_size() {
        assert_eq!(all().len(), 167);
    }

    #[test]
    fn test_every_raw_name_is_prefixed_public_name() {
        for decl in all() {
            assert!(decl.name.starts_with(PUBLIC_PREFIX), "{}", decl.name);
            assert_eq!(decl.raw_name, format!("{}{}", RAW_PREFIX, decl.name));
        }
    }

    #[test]
    fn test_names_are_unique() {
        let mut seen = HashSet::new();
        for decl in all() {
            assert!(seen.insert(decl.name), "duplicate {}", decl.name);
            assert!(seen.insert(decl.raw_name), "duplicate {}", decl.raw_name);
        }
    }

    #[test]
    fn test_nonnull_params_are_pointers() {
        for decl in all() {
            for param in decl.params.iter().filter(|param| param.is_nonnull()) {
                assert!(
                    param.is_pointer(),
                    "{}: non-null parameter {} is not a pointer",
                    decl.name,
                    param.name()
                );
            }
        }
    }

    #[test]
    fn test_handle_disciplines_sit_on_handles() {
        for decl in all() {
            for (param, discipline) in decl.handle_params() {
                match discipline {
                    HandleDiscipline::Acquire => {
                        assert_eq!(param.rust_type(), "*mut zx_handle_t", "{}", decl.name)
                    }
                    _ => assert_eq!(param.rust_type(), "zx_handle_t", "{}", decl.name),
                }
            }
        }
    }

    #[test]
    fn test_lookup() {
        let decl = find("channel_create").unwrap();
        assert_eq!(decl.name, "zx_channel_create");
        assert_eq!(find("zx_channel_create"), Some(decl));
        assert!(find("channel_destroy").is_none());

        let (raw, entry) = by_symbol("_zx_channel_create").unwrap();
        assert_eq!(raw, decl);
        assert_eq!(entry, EntryPoint::Raw);
        assert_eq!(decl.symbol(EntryPoint::Raw), "_zx_channel_create");
        assert_eq!(by_symbol("zx_channel_create").unwrap().1, EntryPoint::Public);
    }

    #[test]
    fn test_channel_create_shape() {
        let decl = find("channel_create").unwrap();
        assert_eq!(decl.ret, ReturnKind::Value("zx_status_t"));
        assert_eq!(decl.nonnull_positions(), vec![2, 3]);
        let produced: Vec<_> = decl
            .handle_params()
            .filter(|(_, discipline)| discipline.produced())
            .map(|(param, _)| param.name())
            .collect();
        assert_eq!(produced, vec!["out0", "out1"]);
    }

    #[test]
    fn test_noreturn_calls() {
        let mut names: Vec<_> = all()
            .iter()
            .filter(|decl| decl.is_noreturn())
            .map(|decl| decl.short_name())
            .collect();
        names.sort();
        assert_eq!(
            names,
            vec![
                "futex_wake_handle_close_thread_exit",
                "process_exit",
                "thread_exit"
            ]
        );
    }

    #[test]
    fn test_const_calls() {
        let mut names: Vec<_> = all()
            .iter()
            .filter(|decl| decl.has_attr(FnAttr::Const))
            .map(|decl| decl.short_name())
            .collect();
        names.sort();
        assert_eq!(
            names,
            vec![
                "system_get_dcache_line_size",
                "system_get_num_cpus",
                "ticks_per_second"
            ]
        );
    }

    #[test]
    fn test_raw_identifier_names() {
        let decl = find("iommu_create").unwrap();
        let param = decl.params.iter().find(|param| param.name == "r#type").unwrap();
        assert_eq!(param.name(), "type");
        assert_eq!(param.rust_type(), "u32");
    }

    #[test]
    fn test_handle_discipline_ownership() {
        assert!(!HandleDiscipline::Use.consumed_on_success());
        assert!(HandleDiscipline::Release.consumed_on_success());
        assert!(!HandleDiscipline::Release.consumed_on_failure());
        assert!(HandleDiscipline::ReleaseAlways.consumed_on_failure());
        assert!(HandleDiscipline::Acquire.produced());
        for discipline in HandleDiscipline::ALL {
            assert_eq!(HandleDiscipline::from_tag(discipline.tag()), Some(discipline));
        }
        assert_eq!(HandleDiscipline::from_tag("pager"), None);
    }

    #[test]
    fn test_other_tags() {
        let decl = find("pager_create").unwrap();
        let tags: Vec<_> = decl.params.iter().flat_map(|param| param.tags()).collect();
        assert_eq!(tags, vec!["pager"]);
    }
}

#[cfg(all(test, target_os = "fuchsia"))]
mod link_tests {
    use crate::*;
    use zx_types::*;

    #[test]
    fn test_both_entry_points_resolve() {
        let public: unsafe extern "C" fn(zx_clock_t) -> zx_time_t = zx_clock_get;
        let raw: unsafe extern "C" fn(zx_clock_t) -> zx_time_t = _zx_clock_get;
        let now = unsafe { public(ZX_CLOCK_MONOTONIC) };
        let later = unsafe { raw(ZX_CLOCK_MONOTONIC) };
        assert!(later >= now);
    }
}
