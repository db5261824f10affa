//! Owned signature model
//!
//! A [`Signature`] is the C-level shape of one syscall symbol. Both the
//! header parser and the catalog bridge produce it, so every check is
//! written once.

use serde::{Deserialize, Serialize};
use std::fmt;
use zx_sys::HandleDiscipline;

/// Base type name used for handles
pub const HANDLE_TYPE: &str = "zx_handle_t";

/// A C type as it appears in a declaration
///
/// Only what syscall headers use is modeled: a base name, an optional
/// leading `const` and any number of `*`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CType {
    pub base: String,
    #[serde(default)]
    pub is_const: bool,
    #[serde(default)]
    pub pointer_depth: u8,
}

impl CType {
    pub fn value(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            is_const: false,
            pointer_depth: 0,
        }
    }

    pub fn pointer(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            is_const: false,
            pointer_depth: 1,
        }
    }

    pub fn const_pointer(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            is_const: true,
            pointer_depth: 1,
        }
    }

    pub fn void() -> Self {
        Self::value("void")
    }

    pub fn is_void(&self) -> bool {
        self.base == "void" && self.pointer_depth == 0
    }

    pub fn is_pointer(&self) -> bool {
        self.pointer_depth > 0
    }

    /// A pointer the callee may write through
    pub fn is_mut_pointer(&self) -> bool {
        self.is_pointer() && !self.is_const
    }

    pub fn is_handle(&self) -> bool {
        self.base == HANDLE_TYPE
    }
}

impl fmt::Display for CType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_const {
            f.write_str("const ")?;
        }
        f.write_str(&self.base)?;
        for _ in 0..self.pointer_depth {
            f.write_str("*")?;
        }
        Ok(())
    }
}

/// A `ZX_SYSCALL_PARAM_ATTR(...)` annotation
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ParamTag {
    HandleUse,
    HandleRelease,
    HandleReleaseAlways,
    HandleAcquire,
    /// Tags with no ownership meaning, e.g. `features`
    Other(String),
}

impl ParamTag {
    pub fn from_name(name: &str) -> Self {
        match HandleDiscipline::from_tag(name) {
            Some(discipline) => Self::from(discipline),
            None => ParamTag::Other(name.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ParamTag::HandleUse => HandleDiscipline::Use.tag(),
            ParamTag::HandleRelease => HandleDiscipline::Release.tag(),
            ParamTag::HandleReleaseAlways => HandleDiscipline::ReleaseAlways.tag(),
            ParamTag::HandleAcquire => HandleDiscipline::Acquire.tag(),
            ParamTag::Other(name) => name,
        }
    }

    pub fn discipline(&self) -> Option<HandleDiscipline> {
        match self {
            ParamTag::HandleUse => Some(HandleDiscipline::Use),
            ParamTag::HandleRelease => Some(HandleDiscipline::Release),
            ParamTag::HandleReleaseAlways => Some(HandleDiscipline::ReleaseAlways),
            ParamTag::HandleAcquire => Some(HandleDiscipline::Acquire),
            ParamTag::Other(_) => None,
        }
    }
}

impl From<HandleDiscipline> for ParamTag {
    fn from(discipline: HandleDiscipline) -> Self {
        match discipline {
            HandleDiscipline::Use => ParamTag::HandleUse,
            HandleDiscipline::Release => ParamTag::HandleRelease,
            HandleDiscipline::ReleaseAlways => ParamTag::HandleReleaseAlways,
            HandleDiscipline::Acquire => ParamTag::HandleAcquire,
        }
    }
}

impl From<String> for ParamTag {
    fn from(name: String) -> Self {
        ParamTag::from_name(&name)
    }
}

impl From<ParamTag> for String {
    fn from(tag: ParamTag) -> Self {
        tag.name().to_string()
    }
}

impl fmt::Display for ParamTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    pub ty: CType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<ParamTag>,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: CType) -> Self {
        Self {
            name: name.into(),
            ty,
            tags: Vec::new(),
        }
    }

    pub fn with_tag(mut self, tag: ParamTag) -> Self {
        self.tags.push(tag);
        self
    }

    pub fn discipline(&self) -> Option<HandleDiscipline> {
        self.tags.iter().find_map(ParamTag::discipline)
    }
}

/// Function attributes other than `__NONNULL`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FnAttribute {
    Leaf,
    Const,
    NoReturn,
}

impl FnAttribute {
    /// Canonical rendering order
    pub const ORDER: [FnAttribute; 3] = [
        FnAttribute::Leaf,
        FnAttribute::Const,
        FnAttribute::NoReturn,
    ];

    pub fn c_name(&self) -> &'static str {
        match self {
            FnAttribute::Leaf => "__LEAF_FN",
            FnAttribute::Const => "__CONST",
            FnAttribute::NoReturn => "__NO_RETURN",
        }
    }

    pub fn from_c_name(name: &str) -> Option<Self> {
        Self::ORDER.into_iter().find(|attr| attr.c_name() == name)
    }
}

/// The C shape of one syscall symbol
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    pub name: String,
    pub ret: CType,
    pub params: Vec<Param>,
    #[serde(default)]
    pub attrs: Vec<FnAttribute>,
    /// 1-based parameter positions from `__NONNULL((...))`, in source order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nonnull: Vec<usize>,
}

impl Signature {
    pub fn new(name: impl Into<String>, ret: CType) -> Self {
        Self {
            name: name.into(),
            ret,
            params: Vec::new(),
            attrs: Vec::new(),
            nonnull: Vec::new(),
        }
    }

    pub fn with_param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn with_attr(mut self, attr: FnAttribute) -> Self {
        if !self.attrs.contains(&attr) {
            self.attrs.push(attr);
        }
        self
    }

    pub fn with_nonnull(mut self, position: usize) -> Self {
        self.nonnull.push(position);
        self
    }

    /// The same signature under another symbol
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    pub fn has_attr(&self, attr: FnAttribute) -> bool {
        self.attrs.contains(&attr)
    }

    /// Sorted, deduplicated non-null positions
    pub fn nonnull_set(&self) -> Vec<usize> {
        let mut set = self.nonnull.clone();
        set.sort_unstable();
        set.dedup();
        set
    }

    /// Attributes in canonical order
    pub fn sorted_attrs(&self) -> Vec<FnAttribute> {
        FnAttribute::ORDER
            .into_iter()
            .filter(|attr| self.has_attr(*attr))
            .collect()
    }

    /// Every way `other` differs from `self`, ignoring the symbol name
    pub fn differences(&self, other: &Signature) -> Vec<Difference> {
        let mut differences = Vec::new();

        if self.ret != other.ret {
            differences.push(Difference::ReturnType {
                left: self.ret.to_string(),
                right: other.ret.to_string(),
            });
        }

        if self.params.len() != other.params.len() {
            differences.push(Difference::ParamCount {
                left: self.params.len(),
                right: other.params.len(),
            });
        }

        for (index, (left, right)) in self.params.iter().zip(&other.params).enumerate() {
            let position = index + 1;
            if left.name != right.name {
                differences.push(Difference::ParamName {
                    position,
                    left: left.name.clone(),
                    right: right.name.clone(),
                });
            }
            if left.ty != right.ty {
                differences.push(Difference::ParamType {
                    position,
                    left: left.ty.to_string(),
                    right: right.ty.to_string(),
                });
            }
            if left.tags != right.tags {
                differences.push(Difference::ParamTags {
                    position,
                    left: join_tags(&left.tags),
                    right: join_tags(&right.tags),
                });
            }
        }

        if self.sorted_attrs() != other.sorted_attrs() {
            differences.push(Difference::Attributes {
                left: join_attrs(&self.sorted_attrs()),
                right: join_attrs(&other.sorted_attrs()),
            });
        }

        if self.nonnull_set() != other.nonnull_set() {
            differences.push(Difference::NonNull {
                left: self.nonnull_set(),
                right: other.nonnull_set(),
            });
        }

        differences
    }
}

fn join_tags(tags: &[ParamTag]) -> String {
    tags.iter().map(ParamTag::name).collect::<Vec<_>>().join(" ")
}

fn join_attrs(attrs: &[FnAttribute]) -> String {
    attrs
        .iter()
        .map(FnAttribute::c_name)
        .collect::<Vec<_>>()
        .join(" ")
}

/// One way two signatures disagree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Difference {
    ReturnType { left: String, right: String },
    ParamCount { left: usize, right: usize },
    ParamName { position: usize, left: String, right: String },
    ParamType { position: usize, left: String, right: String },
    ParamTags { position: usize, left: String, right: String },
    Attributes { left: String, right: String },
    NonNull { left: Vec<usize>, right: Vec<usize> },
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difference::ReturnType { left, right } => {
                write!(f, "return type `{}` vs `{}`", left, right)
            }
            Difference::ParamCount { left, right } => {
                write!(f, "{} parameters vs {}", left, right)
            }
            Difference::ParamName {
                position,
                left,
                right,
            } => write!(f, "parameter {} named `{}` vs `{}`", position, left, right),
            Difference::ParamType {
                position,
                left,
                right,
            } => write!(f, "parameter {} typed `{}` vs `{}`", position, left, right),
            Difference::ParamTags {
                position,
                left,
                right,
            } => write!(f, "parameter {} tagged `{}` vs `{}`", position, left, right),
            Difference::Attributes { left, right } => {
                write!(f, "attributes `{}` vs `{}`", left, right)
            }
            Difference::NonNull { left, right } => {
                write!(f, "non-null positions {:?} vs {:?}", left, right)
            }
        }
    }
}

/// A signature located in a source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub signature: Signature,
    /// 1-based line of the `extern` keyword
    pub line: usize,
}

impl Declaration {
    pub fn name(&self) -> &str {
        &self.signature.name
    }
}
