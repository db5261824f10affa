//! `repr(C)` structures passed to syscalls by pointer
//!
//! Field order and widths follow the kernel's public headers. Unions are
//! modeled as Rust `union`s so the overall size and alignment match; the
//! payload variants that user space actually fills in are spelled out.

use crate::types::*;

/// One entry of a `zx_object_wait_many` wait set
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct zx_wait_item_t {
    pub handle: zx_handle_t,
    pub waitfor: zx_signals_t,
    pub pending: zx_signals_t,
}

/// Write/read buffers for a synchronous `zx_channel_call`
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct zx_channel_call_args_t {
    pub wr_bytes: *const u8,
    pub wr_handles: *const zx_handle_t,
    pub rd_bytes: *mut u8,
    pub rd_handles: *mut zx_handle_t,
    pub wr_num_bytes: u32,
    pub wr_num_handles: u32,
    pub rd_num_bytes: u32,
    pub rd_num_handles: u32,
}

/// A handle together with its type and rights, as returned by
/// `zx_channel_read_etc`
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct zx_handle_info_t {
    pub handle: zx_handle_t,
    pub r#type: zx_obj_type_t,
    pub rights: zx_rights_t,
    pub unused: u32,
}

/// Payload of a user packet queued with `zx_port_queue`
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct zx_packet_user_t {
    pub u64: [u64; 4],
}

/// Payload of a signal packet produced by `zx_object_wait_async`
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct zx_packet_signal_t {
    pub trigger: zx_signals_t,
    pub observed: zx_signals_t,
    pub count: u64,
    pub reserved0: u64,
    pub reserved1: u64,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union zx_port_packet_payload_t {
    pub user: zx_packet_user_t,
    pub signal: zx_packet_signal_t,
    pub raw: [u8; 32],
}

/// A packet delivered through a port
#[repr(C)]
#[derive(Clone, Copy)]
pub struct zx_port_packet_t {
    pub key: u64,
    pub r#type: u32,
    pub status: zx_status_t,
    pub payload: zx_port_packet_payload_t,
}

pub const ZX_PKT_TYPE_USER: u32 = 0x00;
pub const ZX_PKT_TYPE_SIGNAL_ONE: u32 = 0x01;
pub const ZX_PKT_TYPE_SIGNAL_REP: u32 = 0x02;

impl zx_port_packet_t {
    /// Builds a user packet ready for `zx_port_queue`
    pub fn user(key: u64, data: [u64; 4]) -> Self {
        Self {
            key,
            r#type: ZX_PKT_TYPE_USER,
            status: 0,
            payload: zx_port_packet_payload_t {
                user: zx_packet_user_t { u64: data },
            },
        }
    }

    /// Returns the user payload when this is a user packet
    pub fn user_payload(&self) -> Option<zx_packet_user_t> {
        if self.r#type == ZX_PKT_TYPE_USER {
            // SAFETY: every payload variant is plain old data of the same size.
            Some(unsafe { self.payload.user })
        } else {
            None
        }
    }

    /// Returns the signal payload when this is a signal packet
    pub fn signal_payload(&self) -> Option<zx_packet_signal_t> {
        match self.r#type {
            // SAFETY: as above.
            ZX_PKT_TYPE_SIGNAL_ONE | ZX_PKT_TYPE_SIGNAL_REP => Some(unsafe { self.payload.signal }),
            _ => None,
        }
    }
}

pub const ZX_PROFILE_INFO_SCHEDULER: u32 = 1;

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct zx_profile_scheduler_t {
    pub priority: i32,
    pub boost: u32,
    pub deboost: u32,
    pub quantum: u32,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union zx_profile_info_payload_t {
    pub scheduler: zx_profile_scheduler_t,
    pub reserved: [u8; 64],
}

/// Argument of `zx_profile_create`
#[repr(C)]
#[derive(Clone, Copy)]
pub struct zx_profile_info_t {
    pub r#type: u32,
    pub payload: zx_profile_info_payload_t,
}

impl zx_profile_info_t {
    /// A scheduler profile with the given priority
    pub fn scheduler(priority: i32) -> Self {
        Self {
            r#type: ZX_PROFILE_INFO_SCHEDULER,
            payload: zx_profile_info_payload_t {
                scheduler: zx_profile_scheduler_t {
                    priority,
                    ..Default::default()
                },
            },
        }
    }
}

/// Secure monitor call arguments
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct zx_smc_parameters_t {
    pub func_id: u32,
    pub arg1: u64,
    pub arg2: u64,
    pub arg3: u64,
    pub arg4: u64,
    pub arg5: u64,
    pub arg6: u64,
    pub client_id: u16,
    pub secure_os_id: u16,
}

/// Secure monitor call results
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct zx_smc_result_t {
    pub arg0: u64,
    pub arg1: u64,
    pub arg2: u64,
    pub arg3: u64,
}

pub const ZX_PCI_BAR_TYPE_UNUSED: u32 = 0;
pub const ZX_PCI_BAR_TYPE_MMIO: u32 = 1;
pub const ZX_PCI_BAR_TYPE_PIO: u32 = 2;

#[repr(C)]
#[derive(Clone, Copy)]
pub union zx_pci_bar_location_t {
    pub addr: usize,
    pub handle: zx_handle_t,
}

/// A PCI base address register as reported by `zx_pci_get_bar`
#[repr(C)]
#[derive(Clone, Copy)]
pub struct zx_pci_bar_t {
    pub id: u32,
    pub r#type: u32,
    pub size: usize,
    pub location: zx_pci_bar_location_t,
}

/// Identity of a PCIe function returned by `zx_pci_get_nth_device`
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct zx_pcie_device_info_t {
    pub vendor_id: u16,
    pub device_id: u16,
    pub base_class: u8,
    pub sub_class: u8,
    pub program_interface: u8,
    pub revision_id: u8,
    pub bus_id: u8,
    pub dev_id: u8,
    pub func_id: u8,
}

pub const ZX_PCI_MAX_BUSSES: usize = 256;
pub const ZX_PCI_MAX_DEVICES_PER_BUS: usize = 32;
pub const ZX_PCI_MAX_FUNCTIONS_PER_DEVICE: usize = 8;
pub const ZX_PCI_MAX_LEGACY_IRQ_PINS: usize = 4;
pub const ZX_PCI_MAX_IRQS: usize = 64;

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct zx_pci_irq_t {
    pub global_irq: u32,
    pub level_triggered: bool,
    pub active_high: bool,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct zx_pci_init_arg_addr_window_t {
    pub base: u64,
    pub size: usize,
    pub bus_start: u8,
    pub bus_end: u8,
    pub cfg_space_type: u8,
    pub has_ecam: bool,
}

/// Root-complex description handed to `zx_pci_init`
///
/// The C struct ends in a flexible array; `addr_windows` marks where the
/// `addr_window_count` windows start in the caller's allocation.
#[repr(C)]
pub struct zx_pci_init_arg_t {
    pub dev_pin_to_global_irq: [[[u32; ZX_PCI_MAX_LEGACY_IRQ_PINS];
        ZX_PCI_MAX_FUNCTIONS_PER_DEVICE]; ZX_PCI_MAX_DEVICES_PER_BUS],
    pub num_irqs: u32,
    pub irqs: [zx_pci_irq_t; ZX_PCI_MAX_IRQS],
    pub addr_window_count: u32,
    pub addr_windows: [zx_pci_init_arg_addr_window_t; 0],
}

impl zx_pci_init_arg_t {
    /// Bytes needed for the header plus `windows` trailing address windows
    pub fn size_with_windows(windows: usize) -> usize {
        core::mem::size_of::<Self>()
            + windows * core::mem::size_of::<zx_pci_init_arg_addr_window_t>()
    }
}

pub const ZX_SYSTEM_POWERCTL_ENABLE_ALL_CPUS: u32 = 1;
pub const ZX_SYSTEM_POWERCTL_DISABLE_ALL_CPUS_BUT_PRIMARY: u32 = 2;
pub const ZX_SYSTEM_POWERCTL_ACPI_TRANSITION_S_STATE: u32 = 3;
pub const ZX_SYSTEM_POWERCTL_X86_SET_PKG_PL1: u32 = 4;
pub const ZX_SYSTEM_POWERCTL_REBOOT: u32 = 5;
pub const ZX_SYSTEM_POWERCTL_REBOOT_BOOTLOADER: u32 = 6;
pub const ZX_SYSTEM_POWERCTL_REBOOT_RECOVERY: u32 = 7;
pub const ZX_SYSTEM_POWERCTL_SHUTDOWN: u32 = 8;

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct zx_acpi_transition_s_state_t {
    pub target_s_state: u8,
    pub sleep_type_a: u8,
    pub sleep_type_b: u8,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct zx_x86_power_limit_t {
    pub power_limit: u32,
    pub time_window: u32,
    pub clamp: u8,
    pub enable: u8,
}

/// Argument of `zx_system_powerctl`; which member is read depends on `cmd`
#[repr(C)]
#[derive(Clone, Copy)]
pub union zx_system_powerctl_arg_t {
    pub acpi_transition_s_state: zx_acpi_transition_s_state_t,
    pub x86_power_limit: zx_x86_power_limit_t,
}
