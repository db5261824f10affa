//! Declaration macros
//!
//! `zx_syscalls!` takes the syscall list and expands it twice: once into an
//! `extern "C"` block carrying both entry points of every syscall, once into
//! the static catalog. Parameter and function markers are written as
//! attributes on the list; they only reach the catalog.

macro_rules! zx_param_marker {
    (handle_use) => {
        $crate::catalog::ParamMarker::Handle($crate::catalog::HandleDiscipline::Use)
    };
    (handle_release) => {
        $crate::catalog::ParamMarker::Handle($crate::catalog::HandleDiscipline::Release)
    };
    (handle_release_always) => {
        $crate::catalog::ParamMarker::Handle($crate::catalog::HandleDiscipline::ReleaseAlways)
    };
    (handle_acquire) => {
        $crate::catalog::ParamMarker::Handle($crate::catalog::HandleDiscipline::Acquire)
    };
    (nonnull) => {
        $crate::catalog::ParamMarker::NonNull
    };
    ($tag:ident) => {
        $crate::catalog::ParamMarker::Tag(stringify!($tag))
    };
}

macro_rules! zx_fn_attr {
    (leaf) => {
        $crate::catalog::FnAttr::Leaf
    };
    (const_fn) => {
        $crate::catalog::FnAttr::Const
    };
}

macro_rules! zx_return_kind {
    (!) => {
        $crate::catalog::ReturnKind::NoReturn
    };
    (()) => {
        $crate::catalog::ReturnKind::Void
    };
    ($ty:ty) => {
        $crate::catalog::ReturnKind::Value(stringify!($ty))
    };
}

macro_rules! zx_syscalls {
    ($(
        $(#[$fattr:ident])*
        fn $name:ident / $raw:ident (
            $( $(#[$marker:ident])* $param:ident : $ty:ty ),* $(,)?
        ) -> $ret:tt;
    )*) => {
        #[cfg_attr(target_os = "fuchsia", link(name = "zircon"))]
        extern "C" {
            $(
                pub fn $name( $( $param: $ty ),* ) -> $ret;
                pub fn $raw( $( $param: $ty ),* ) -> $ret;
            )*
        }

        /// Every declared syscall, in declaration order
        pub static SYSCALLS: &[$crate::catalog::SyscallDecl] = &[
            $(
                $crate::catalog::SyscallDecl {
                    name: stringify!($name),
                    raw_name: stringify!($raw),
                    params: &[
                        $(
                            $crate::catalog::ParamDecl {
                                name: stringify!($param),
                                ty: stringify!($ty),
                                markers: &[ $( zx_param_marker!($marker) ),* ],
                            },
                        )*
                    ],
                    ret: zx_return_kind!($ret),
                    attrs: &[ $( zx_fn_attr!($fattr) ),* ],
                },
            )*
        ];
    };
}
