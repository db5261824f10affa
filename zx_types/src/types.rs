//! Scalar typedefs and well-known constants

/// Capability reference to a kernel object
pub type zx_handle_t = u32;

/// Syscall result code; zero is success, negative values are errors
pub type zx_status_t = i32;

/// Absolute time in nanoseconds
pub type zx_time_t = i64;

/// Relative time in nanoseconds
pub type zx_duration_t = i64;

/// Raw platform tick counter
pub type zx_ticks_t = u64;

/// Clock selector passed to the clock syscalls
pub type zx_clock_t = u32;

/// Futex word
pub type zx_futex_t = i32;

/// Kernel object id
pub type zx_koid_t = u64;

/// Handle rights mask
pub type zx_rights_t = u32;

/// Object signal mask
pub type zx_signals_t = u32;

/// User virtual address
pub type zx_vaddr_t = usize;

/// Physical address
pub type zx_paddr_t = usize;

/// VMAR mapping options
pub type zx_vm_option_t = u32;

/// Kernel object type tag
pub type zx_obj_type_t = u32;

/// Pointer-sized integer argument, spelled apart from `usize` sizes
pub type uintptr_t = usize;

pub const ZX_HANDLE_INVALID: zx_handle_t = 0;

pub const ZX_TIME_INFINITE: zx_time_t = i64::MAX;
pub const ZX_TIME_INFINITE_PAST: zx_time_t = i64::MIN;

pub const ZX_CLOCK_MONOTONIC: zx_clock_t = 0;
pub const ZX_CLOCK_UTC: zx_clock_t = 1;
pub const ZX_CLOCK_THREAD: zx_clock_t = 2;

pub const ZX_RIGHT_NONE: zx_rights_t = 0;
pub const ZX_RIGHT_SAME_RIGHTS: zx_rights_t = 1 << 31;

pub const ZX_SIGNAL_NONE: zx_signals_t = 0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_widths() {
        assert_eq!(core::mem::size_of::<zx_handle_t>(), 4);
        assert_eq!(core::mem::size_of::<zx_status_t>(), 4);
        assert_eq!(core::mem::size_of::<zx_time_t>(), 8);
        assert_eq!(core::mem::size_of::<zx_koid_t>(), 8);
        assert_eq!(
            core::mem::size_of::<zx_vaddr_t>(),
            core::mem::size_of::<usize>()
        );
    }

    #[test]
    fn test_infinite_deadlines() {
        assert!(ZX_TIME_INFINITE > 0);
        assert!(ZX_TIME_INFINITE_PAST < 0);
        assert_eq!(ZX_HANDLE_INVALID, 0);
    }
}
