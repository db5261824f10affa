//! Syscall declarations
//!
//! One entry per syscall: the public symbol, its raw twin, the parameter
//! list and the return type. `#[leaf]` and `#[const_fn]` mirror the C
//! function attributes; parameter markers carry the handle discipline
//! (`handle_use`, `handle_acquire`, `handle_release`,
//! `handle_release_always`), other ABI tags, and `nonnull`.

use core::ffi::{c_char, c_int, c_void};
use zx_types::*;

zx_syscalls! {
    // ===== Time =====

    #[leaf]
    fn zx_clock_get / _zx_clock_get(
        clock_id: zx_clock_t,
    ) -> zx_time_t;

    #[leaf]
    fn zx_clock_get_new / _zx_clock_get_new(
        clock_id: zx_clock_t,
        #[nonnull] out: *mut zx_time_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_clock_get_monotonic / _zx_clock_get_monotonic() -> zx_time_t;

    #[leaf]
    fn zx_nanosleep / _zx_nanosleep(
        deadline: zx_time_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_ticks_get / _zx_ticks_get() -> zx_ticks_t;

    #[leaf] #[const_fn]
    fn zx_ticks_per_second / _zx_ticks_per_second() -> zx_ticks_t;

    #[leaf]
    fn zx_deadline_after / _zx_deadline_after(
        nanoseconds: zx_duration_t,
    ) -> zx_time_t;

    #[leaf]
    fn zx_clock_adjust / _zx_clock_adjust(
        #[handle_use] handle: zx_handle_t,
        clock_id: zx_clock_t,
        offset: i64,
    ) -> zx_status_t;

    // ===== System information =====

    #[leaf] #[const_fn]
    fn zx_system_get_dcache_line_size / _zx_system_get_dcache_line_size() -> u32;

    #[leaf] #[const_fn]
    fn zx_system_get_num_cpus / _zx_system_get_num_cpus() -> u32;

    #[leaf]
    fn zx_system_get_version / _zx_system_get_version(
        version: *mut c_char,
        version_size: usize,
    ) -> zx_status_t;

    #[leaf]
    fn zx_system_get_physmem / _zx_system_get_physmem() -> u64;

    #[leaf]
    fn zx_system_get_features / _zx_system_get_features(
        kind: u32,
        #[features] #[nonnull] features: *mut u32,
    ) -> zx_status_t;

    #[leaf]
    fn zx_cache_flush / _zx_cache_flush(
        addr: *const c_void,
        size: usize,
        options: u32,
    ) -> zx_status_t;

    // ===== Handles and objects =====

    #[leaf]
    fn zx_handle_close / _zx_handle_close(
        #[handle_release_always] handle: zx_handle_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_handle_close_many / _zx_handle_close_many(
        handles: *const zx_handle_t,
        num_handles: usize,
    ) -> zx_status_t;

    #[leaf]
    fn zx_handle_duplicate / _zx_handle_duplicate(
        #[handle_use] handle: zx_handle_t,
        rights: zx_rights_t,
        #[handle_acquire] #[nonnull] out: *mut zx_handle_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_handle_replace / _zx_handle_replace(
        #[handle_release_always] handle: zx_handle_t,
        rights: zx_rights_t,
        #[handle_acquire] #[nonnull] out: *mut zx_handle_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_object_wait_one / _zx_object_wait_one(
        #[handle_use] handle: zx_handle_t,
        signals: zx_signals_t,
        deadline: zx_time_t,
        observed: *mut zx_signals_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_object_wait_many / _zx_object_wait_many(
        items: *mut zx_wait_item_t,
        count: usize,
        deadline: zx_time_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_object_wait_async / _zx_object_wait_async(
        #[handle_use] handle: zx_handle_t,
        #[handle_use] port: zx_handle_t,
        key: u64,
        signals: zx_signals_t,
        options: u32,
    ) -> zx_status_t;

    #[leaf]
    fn zx_object_signal / _zx_object_signal(
        #[handle_use] handle: zx_handle_t,
        clear_mask: u32,
        set_mask: u32,
    ) -> zx_status_t;

    #[leaf]
    fn zx_object_signal_peer / _zx_object_signal_peer(
        #[handle_use] handle: zx_handle_t,
        clear_mask: u32,
        set_mask: u32,
    ) -> zx_status_t;

    #[leaf]
    fn zx_object_get_property / _zx_object_get_property(
        #[handle_use] handle: zx_handle_t,
        property: u32,
        value: *mut c_void,
        value_size: usize,
    ) -> zx_status_t;

    #[leaf]
    fn zx_object_set_property / _zx_object_set_property(
        #[handle_use] handle: zx_handle_t,
        property: u32,
        value: *const c_void,
        value_size: usize,
    ) -> zx_status_t;

    #[leaf]
    fn zx_object_set_cookie / _zx_object_set_cookie(
        #[handle_use] handle: zx_handle_t,
        #[handle_use] scope: zx_handle_t,
        cookie: u64,
    ) -> zx_status_t;

    #[leaf]
    fn zx_object_get_cookie / _zx_object_get_cookie(
        #[handle_use] handle: zx_handle_t,
        #[handle_use] scope: zx_handle_t,
        #[nonnull] cookie: *mut u64,
    ) -> zx_status_t;

    #[leaf]
    fn zx_object_get_info / _zx_object_get_info(
        #[handle_use] handle: zx_handle_t,
        topic: u32,
        buffer: *mut c_void,
        buffer_size: usize,
        actual_count: *mut usize,
        avail_count: *mut usize,
    ) -> zx_status_t;

    #[leaf]
    fn zx_object_get_child / _zx_object_get_child(
        #[handle_use] handle: zx_handle_t,
        koid: u64,
        rights: zx_rights_t,
        #[nonnull] out: *mut zx_handle_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_object_set_profile / _zx_object_set_profile(
        #[handle_use] handle: zx_handle_t,
        #[handle_use] profile: zx_handle_t,
        options: u32,
    ) -> zx_status_t;

    // ===== IPC =====

    #[leaf]
    fn zx_channel_create / _zx_channel_create(
        options: u32,
        #[handle_acquire] #[nonnull] out0: *mut zx_handle_t,
        #[handle_acquire] #[nonnull] out1: *mut zx_handle_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_channel_read / _zx_channel_read(
        #[handle_use] handle: zx_handle_t,
        options: u32,
        bytes: *mut c_void,
        handles: *mut zx_handle_t,
        num_bytes: u32,
        num_handles: u32,
        actual_bytes: *mut u32,
        actual_handles: *mut u32,
    ) -> zx_status_t;

    #[leaf]
    fn zx_channel_read_etc / _zx_channel_read_etc(
        #[handle_use] handle: zx_handle_t,
        options: u32,
        bytes: *mut c_void,
        handles: *mut zx_handle_info_t,
        num_bytes: u32,
        num_handles: u32,
        actual_bytes: *mut u32,
        actual_handles: *mut u32,
    ) -> zx_status_t;

    #[leaf]
    fn zx_channel_write / _zx_channel_write(
        #[handle_use] handle: zx_handle_t,
        options: u32,
        bytes: *const c_void,
        num_bytes: u32,
        handles: *const zx_handle_t,
        num_handles: u32,
    ) -> zx_status_t;

    #[leaf]
    fn zx_channel_call / _zx_channel_call(
        #[handle_use] handle: zx_handle_t,
        options: u32,
        deadline: zx_time_t,
        args: *const zx_channel_call_args_t,
        #[nonnull] actual_bytes: *mut u32,
        #[nonnull] actual_handles: *mut u32,
    ) -> zx_status_t;

    #[leaf]
    fn zx_socket_create / _zx_socket_create(
        options: u32,
        #[handle_acquire] #[nonnull] out0: *mut zx_handle_t,
        #[handle_acquire] #[nonnull] out1: *mut zx_handle_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_socket_write / _zx_socket_write(
        #[handle_use] handle: zx_handle_t,
        options: u32,
        buffer: *const c_void,
        buffer_size: usize,
        actual: *mut usize,
    ) -> zx_status_t;

    #[leaf]
    fn zx_socket_read / _zx_socket_read(
        #[handle_use] handle: zx_handle_t,
        options: u32,
        buffer: *mut c_void,
        buffer_size: usize,
        actual: *mut usize,
    ) -> zx_status_t;

    #[leaf]
    fn zx_socket_share / _zx_socket_share(
        #[handle_use] handle: zx_handle_t,
        #[handle_use] socket_to_share: zx_handle_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_socket_accept / _zx_socket_accept(
        #[handle_use] handle: zx_handle_t,
        #[handle_acquire] #[nonnull] out_socket: *mut zx_handle_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_socket_shutdown / _zx_socket_shutdown(
        #[handle_use] handle: zx_handle_t,
        options: u32,
    ) -> zx_status_t;

    // ===== Tasks =====

    #[leaf]
    fn zx_thread_exit / _zx_thread_exit() -> !;

    #[leaf]
    fn zx_thread_create / _zx_thread_create(
        #[handle_use] process: zx_handle_t,
        name: *const c_char,
        name_size: usize,
        options: u32,
        #[handle_acquire] #[nonnull] out: *mut zx_handle_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_thread_start / _zx_thread_start(
        #[handle_use] handle: zx_handle_t,
        thread_entry: zx_vaddr_t,
        stack: zx_vaddr_t,
        arg1: uintptr_t,
        arg2: uintptr_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_thread_read_state / _zx_thread_read_state(
        #[handle_use] handle: zx_handle_t,
        kind: u32,
        buffer: *mut c_void,
        buffer_size: usize,
    ) -> zx_status_t;

    #[leaf]
    fn zx_thread_write_state / _zx_thread_write_state(
        #[handle_use] handle: zx_handle_t,
        kind: u32,
        buffer: *const c_void,
        buffer_size: usize,
    ) -> zx_status_t;

    #[leaf]
    fn zx_thread_set_priority / _zx_thread_set_priority(
        prio: i32,
    ) -> zx_status_t;

    #[leaf]
    fn zx_process_exit / _zx_process_exit(
        retcode: i64,
    ) -> !;

    #[leaf]
    fn zx_process_create / _zx_process_create(
        #[handle_use] job: zx_handle_t,
        name: *const c_char,
        name_size: usize,
        options: u32,
        #[handle_acquire] #[nonnull] proc_handle: *mut zx_handle_t,
        #[handle_acquire] #[nonnull] vmar_handle: *mut zx_handle_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_process_start / _zx_process_start(
        #[handle_use] handle: zx_handle_t,
        #[handle_use] thread: zx_handle_t,
        entry: zx_vaddr_t,
        stack: zx_vaddr_t,
        #[handle_release_always] arg1: zx_handle_t,
        arg2: uintptr_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_process_read_memory / _zx_process_read_memory(
        #[handle_use] handle: zx_handle_t,
        vaddr: zx_vaddr_t,
        buffer: *mut c_void,
        buffer_size: usize,
        #[nonnull] actual: *mut usize,
    ) -> zx_status_t;

    #[leaf]
    fn zx_process_write_memory / _zx_process_write_memory(
        #[handle_use] handle: zx_handle_t,
        vaddr: zx_vaddr_t,
        buffer: *const c_void,
        buffer_size: usize,
        #[nonnull] actual: *mut usize,
    ) -> zx_status_t;

    #[leaf]
    fn zx_job_create / _zx_job_create(
        #[handle_use] parent_job: zx_handle_t,
        options: u32,
        #[handle_acquire] #[nonnull] out: *mut zx_handle_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_job_set_policy / _zx_job_set_policy(
        #[handle_use] handle: zx_handle_t,
        options: u32,
        topic: u32,
        policy: *const c_void,
        count: u32,
    ) -> zx_status_t;

    #[leaf]
    fn zx_task_bind_exception_port / _zx_task_bind_exception_port(
        #[handle_use] handle: zx_handle_t,
        #[handle_use] port: zx_handle_t,
        key: u64,
        options: u32,
    ) -> zx_status_t;

    #[leaf]
    fn zx_task_suspend / _zx_task_suspend(
        #[handle_use] handle: zx_handle_t,
        #[handle_acquire] #[nonnull] token: *mut zx_handle_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_task_suspend_token / _zx_task_suspend_token(
        #[handle_use] handle: zx_handle_t,
        #[handle_acquire] #[nonnull] token: *mut zx_handle_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_task_resume_from_exception / _zx_task_resume_from_exception(
        #[handle_use] handle: zx_handle_t,
        #[handle_use] port: zx_handle_t,
        options: u32,
    ) -> zx_status_t;

    #[leaf]
    fn zx_task_kill / _zx_task_kill(
        #[handle_use] handle: zx_handle_t,
    ) -> zx_status_t;

    // ===== Synchronization and signaling =====

    #[leaf]
    fn zx_event_create / _zx_event_create(
        options: u32,
        #[handle_acquire] #[nonnull] out: *mut zx_handle_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_eventpair_create / _zx_eventpair_create(
        options: u32,
        #[handle_acquire] #[nonnull] out0: *mut zx_handle_t,
        #[handle_acquire] #[nonnull] out1: *mut zx_handle_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_futex_wait / _zx_futex_wait(
        value_ptr: *const zx_futex_t,
        current_value: zx_futex_t,
        #[handle_use] new_futex_owner: zx_handle_t,
        deadline: zx_time_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_futex_wake / _zx_futex_wake(
        value_ptr: *const zx_futex_t,
        count: u32,
    ) -> zx_status_t;

    #[leaf]
    fn zx_futex_requeue / _zx_futex_requeue(
        wake_ptr: *const zx_futex_t,
        wake_count: u32,
        current_value: zx_futex_t,
        requeue_ptr: *const zx_futex_t,
        requeue_count: u32,
        #[handle_use] new_requeue_owner: zx_handle_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_futex_wake_single_owner / _zx_futex_wake_single_owner(
        value_ptr: *const zx_futex_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_futex_requeue_single_owner / _zx_futex_requeue_single_owner(
        wake_ptr: *const zx_futex_t,
        current_value: zx_futex_t,
        requeue_ptr: *const zx_futex_t,
        requeue_count: u32,
        #[handle_use] new_requeue_owner: zx_handle_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_futex_get_owner / _zx_futex_get_owner(
        value_ptr: *const zx_futex_t,
        koid: *mut zx_koid_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_futex_wait_deprecated / _zx_futex_wait_deprecated(
        value_ptr: *const zx_futex_t,
        current_value: i32,
        deadline: zx_time_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_futex_requeue_deprecated / _zx_futex_requeue_deprecated(
        wake_ptr: *const zx_futex_t,
        wake_count: u32,
        current_value: i32,
        requeue_ptr: *const zx_futex_t,
        requeue_count: u32,
    ) -> zx_status_t;

    #[leaf]
    fn zx_port_create / _zx_port_create(
        options: u32,
        #[handle_acquire] #[nonnull] out: *mut zx_handle_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_port_queue / _zx_port_queue(
        #[handle_use] handle: zx_handle_t,
        packet: *const zx_port_packet_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_port_wait / _zx_port_wait(
        #[handle_use] handle: zx_handle_t,
        deadline: zx_time_t,
        packet: *mut zx_port_packet_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_port_cancel / _zx_port_cancel(
        #[handle_use] handle: zx_handle_t,
        #[handle_use] source: zx_handle_t,
        key: u64,
    ) -> zx_status_t;

    #[leaf]
    fn zx_timer_create / _zx_timer_create(
        options: u32,
        clock_id: zx_clock_t,
        #[handle_acquire] #[nonnull] out: *mut zx_handle_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_timer_set / _zx_timer_set(
        #[handle_use] handle: zx_handle_t,
        deadline: zx_time_t,
        slack: zx_duration_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_timer_cancel / _zx_timer_cancel(
        #[handle_use] handle: zx_handle_t,
    ) -> zx_status_t;

    // ===== Memory =====

    #[leaf]
    fn zx_vmo_create / _zx_vmo_create(
        size: u64,
        options: u32,
        #[handle_acquire] #[nonnull] out: *mut zx_handle_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_vmo_read / _zx_vmo_read(
        #[handle_use] handle: zx_handle_t,
        buffer: *mut c_void,
        offset: u64,
        buffer_size: usize,
    ) -> zx_status_t;

    #[leaf]
    fn zx_vmo_write / _zx_vmo_write(
        #[handle_use] handle: zx_handle_t,
        buffer: *const c_void,
        offset: u64,
        buffer_size: usize,
    ) -> zx_status_t;

    #[leaf]
    fn zx_vmo_get_size / _zx_vmo_get_size(
        #[handle_use] handle: zx_handle_t,
        #[nonnull] size: *mut u64,
    ) -> zx_status_t;

    #[leaf]
    fn zx_vmo_set_size / _zx_vmo_set_size(
        #[handle_use] handle: zx_handle_t,
        size: u64,
    ) -> zx_status_t;

    #[leaf]
    fn zx_vmo_op_range / _zx_vmo_op_range(
        #[handle_use] handle: zx_handle_t,
        op: u32,
        offset: u64,
        size: u64,
        buffer: *mut c_void,
        buffer_size: usize,
    ) -> zx_status_t;

    #[leaf]
    fn zx_vmo_clone / _zx_vmo_clone(
        #[handle_use] handle: zx_handle_t,
        options: u32,
        offset: u64,
        size: u64,
        #[handle_acquire] #[nonnull] out: *mut zx_handle_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_vmo_set_cache_policy / _zx_vmo_set_cache_policy(
        #[handle_use] handle: zx_handle_t,
        cache_policy: u32,
    ) -> zx_status_t;

    #[leaf]
    fn zx_vmo_replace_as_executable / _zx_vmo_replace_as_executable(
        #[handle_release_always] handle: zx_handle_t,
        #[handle_use] vmex: zx_handle_t,
        #[handle_acquire] #[nonnull] out: *mut zx_handle_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_vmar_allocate_old / _zx_vmar_allocate_old(
        #[handle_use] parent_vmar: zx_handle_t,
        offset: u64,
        size: u64,
        map_flags: u32,
        #[handle_acquire] #[nonnull] child_vmar: *mut zx_handle_t,
        #[nonnull] child_addr: *mut zx_vaddr_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_vmar_map_old / _zx_vmar_map_old(
        #[handle_use] handle: zx_handle_t,
        vmar_offset: u64,
        #[handle_use] vmo: zx_handle_t,
        vmo_offset: u64,
        len: u64,
        map_flags: u32,
        #[nonnull] mapped_addr: *mut zx_vaddr_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_vmar_protect_old / _zx_vmar_protect_old(
        #[handle_use] handle: zx_handle_t,
        addr: zx_vaddr_t,
        len: u64,
        prot_flags: u32,
    ) -> zx_status_t;

    #[leaf]
    fn zx_vmar_allocate / _zx_vmar_allocate(
        #[handle_use] parent_vmar: zx_handle_t,
        options: zx_vm_option_t,
        offset: u64,
        size: u64,
        #[handle_acquire] #[nonnull] child_vmar: *mut zx_handle_t,
        #[nonnull] child_addr: *mut zx_vaddr_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_vmar_destroy / _zx_vmar_destroy(
        #[handle_use] handle: zx_handle_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_vmar_map / _zx_vmar_map(
        #[handle_use] handle: zx_handle_t,
        options: zx_vm_option_t,
        vmar_offset: u64,
        #[handle_use] vmo: zx_handle_t,
        vmo_offset: u64,
        len: u64,
        #[nonnull] mapped_addr: *mut zx_vaddr_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_vmar_unmap / _zx_vmar_unmap(
        #[handle_use] handle: zx_handle_t,
        addr: zx_vaddr_t,
        len: u64,
    ) -> zx_status_t;

    #[leaf]
    fn zx_vmar_protect / _zx_vmar_protect(
        #[handle_use] handle: zx_handle_t,
        options: zx_vm_option_t,
        addr: zx_vaddr_t,
        len: u64,
    ) -> zx_status_t;

    // ===== Entropy, FIFOs and profiles =====

    #[leaf]
    fn zx_cprng_draw / _zx_cprng_draw(
        buffer: *mut c_void,
        buffer_size: usize,
    ) -> ();

    #[leaf]
    fn zx_cprng_add_entropy / _zx_cprng_add_entropy(
        buffer: *const c_void,
        buffer_size: usize,
    ) -> zx_status_t;

    #[leaf]
    fn zx_fifo_create / _zx_fifo_create(
        elem_count: usize,
        elem_size: usize,
        options: u32,
        #[handle_acquire] #[nonnull] out0: *mut zx_handle_t,
        #[handle_acquire] #[nonnull] out1: *mut zx_handle_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_fifo_read / _zx_fifo_read(
        #[handle_use] handle: zx_handle_t,
        elem_size: usize,
        data: *mut c_void,
        count: usize,
        actual_count: *mut usize,
    ) -> zx_status_t;

    #[leaf]
    fn zx_fifo_write / _zx_fifo_write(
        #[handle_use] handle: zx_handle_t,
        elem_size: usize,
        data: *const c_void,
        count: usize,
        actual_count: *mut usize,
    ) -> zx_status_t;

    #[leaf]
    fn zx_profile_create / _zx_profile_create(
        #[handle_use] root_job: zx_handle_t,
        profile: *const zx_profile_info_t,
        #[handle_acquire] #[nonnull] out: *mut zx_handle_t,
    ) -> zx_status_t;

    // ===== Thread exit helpers =====

    #[leaf]
    fn zx_vmar_unmap_handle_close_thread_exit / _zx_vmar_unmap_handle_close_thread_exit(
        #[handle_use] vmar_handle: zx_handle_t,
        addr: zx_vaddr_t,
        size: usize,
        #[handle_release] close_handle: zx_handle_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_futex_wake_handle_close_thread_exit / _zx_futex_wake_handle_close_thread_exit(
        value_ptr: *const zx_futex_t,
        count: u32,
        new_value: i32,
        #[handle_release] handle: zx_handle_t,
    ) -> !;

    // ===== Logging and tracing =====

    #[leaf]
    fn zx_log_write / _zx_log_write(
        #[handle_use] handle: zx_handle_t,
        len: u32,
        buffer: *const c_void,
        options: u32,
    ) -> zx_status_t;

    #[leaf]
    fn zx_log_read / _zx_log_read(
        #[handle_use] handle: zx_handle_t,
        len: u32,
        buffer: *mut c_void,
        options: u32,
    ) -> zx_status_t;

    #[leaf]
    fn zx_debuglog_create / _zx_debuglog_create(
        #[handle_use] resource: zx_handle_t,
        options: u32,
        #[handle_acquire] #[nonnull] out: *mut zx_handle_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_debuglog_write / _zx_debuglog_write(
        #[handle_use] handle: zx_handle_t,
        options: u32,
        buffer: *const c_void,
        buffer_size: usize,
    ) -> zx_status_t;

    #[leaf]
    fn zx_debuglog_read / _zx_debuglog_read(
        #[handle_use] handle: zx_handle_t,
        options: u32,
        buffer: *mut c_void,
        buffer_size: usize,
    ) -> zx_status_t;

    #[leaf]
    fn zx_ktrace_read / _zx_ktrace_read(
        #[handle_use] handle: zx_handle_t,
        data: *mut c_void,
        offset: u32,
        data_size: usize,
        #[nonnull] actual: *mut usize,
    ) -> zx_status_t;

    #[leaf]
    fn zx_ktrace_control / _zx_ktrace_control(
        #[handle_use] handle: zx_handle_t,
        action: u32,
        options: u32,
        ptr: *mut c_void,
    ) -> zx_status_t;

    #[leaf]
    fn zx_ktrace_write / _zx_ktrace_write(
        #[handle_use] handle: zx_handle_t,
        id: u32,
        arg0: u32,
        arg1: u32,
    ) -> zx_status_t;

    #[leaf]
    fn zx_mtrace_control / _zx_mtrace_control(
        #[handle_use] handle: zx_handle_t,
        kind: u32,
        action: u32,
        options: u32,
        ptr: *mut c_void,
        ptr_size: usize,
    ) -> zx_status_t;

    #[leaf]
    fn zx_debug_read / _zx_debug_read(
        #[handle_use] handle: zx_handle_t,
        buffer: *mut c_char,
        buffer_size: *mut usize,
    ) -> zx_status_t;

    #[leaf]
    fn zx_debug_write / _zx_debug_write(
        buffer: *const c_char,
        buffer_size: usize,
    ) -> zx_status_t;

    #[leaf]
    fn zx_debug_send_command / _zx_debug_send_command(
        #[handle_use] resource: zx_handle_t,
        buffer: *const c_char,
        buffer_size: usize,
    ) -> zx_status_t;

    // ===== Drivers and hardware =====

    #[leaf]
    fn zx_interrupt_create / _zx_interrupt_create(
        #[handle_use] src_obj: zx_handle_t,
        src_num: u32,
        options: u32,
        #[nonnull] out: *mut zx_handle_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_interrupt_bind / _zx_interrupt_bind(
        #[handle_use] handle: zx_handle_t,
        #[handle_use] port: zx_handle_t,
        key: u64,
        options: u32,
    ) -> zx_status_t;

    #[leaf]
    fn zx_interrupt_wait / _zx_interrupt_wait(
        #[handle_use] handle: zx_handle_t,
        out_timestamp: *mut zx_time_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_interrupt_destroy / _zx_interrupt_destroy(
        #[handle_use] handle: zx_handle_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_interrupt_ack / _zx_interrupt_ack(
        #[handle_use] handle: zx_handle_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_interrupt_trigger / _zx_interrupt_trigger(
        #[handle_use] handle: zx_handle_t,
        options: u32,
        timestamp: zx_time_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_interrupt_bind_vcpu / _zx_interrupt_bind_vcpu(
        #[handle_use] handle: zx_handle_t,
        #[handle_use] vcpu: zx_handle_t,
        options: u32,
    ) -> zx_status_t;

    #[leaf]
    fn zx_ioports_request / _zx_ioports_request(
        #[handle_use] resource: zx_handle_t,
        io_addr: u16,
        len: u32,
    ) -> zx_status_t;

    // ===== Driver-owned memory =====

    #[leaf]
    fn zx_vmo_create_contiguous / _zx_vmo_create_contiguous(
        #[handle_use] bti: zx_handle_t,
        size: usize,
        alignment_log2: u32,
        #[handle_acquire] #[nonnull] out: *mut zx_handle_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_vmo_create_physical / _zx_vmo_create_physical(
        #[handle_use] resource: zx_handle_t,
        paddr: zx_paddr_t,
        size: usize,
        #[handle_acquire] #[nonnull] out: *mut zx_handle_t,
    ) -> zx_status_t;

    // ===== Drivers and hardware =====

    #[leaf]
    fn zx_iommu_create / _zx_iommu_create(
        #[handle_use] resource: zx_handle_t,
        r#type: u32,
        desc: *const c_void,
        desc_size: usize,
        #[handle_acquire] #[nonnull] out: *mut zx_handle_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_bti_create / _zx_bti_create(
        #[handle_use] iommu: zx_handle_t,
        options: u32,
        bti_id: u64,
        #[handle_acquire] #[nonnull] out: *mut zx_handle_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_bti_pin / _zx_bti_pin(
        #[handle_use] handle: zx_handle_t,
        options: u32,
        #[handle_use] vmo: zx_handle_t,
        offset: u64,
        size: u64,
        addrs: *mut zx_paddr_t,
        addrs_count: usize,
        #[handle_acquire] #[nonnull] pmt: *mut zx_handle_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_bti_release_quarantine / _zx_bti_release_quarantine(
        #[handle_use] handle: zx_handle_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_pmt_unpin / _zx_pmt_unpin(
        #[handle_release_always] handle: zx_handle_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_framebuffer_get_info / _zx_framebuffer_get_info(
        #[handle_use] resource: zx_handle_t,
        #[nonnull] format: *mut u32,
        #[nonnull] width: *mut u32,
        #[nonnull] height: *mut u32,
        #[nonnull] stride: *mut u32,
    ) -> zx_status_t;

    #[leaf]
    fn zx_framebuffer_set_range / _zx_framebuffer_set_range(
        #[handle_use] resource: zx_handle_t,
        #[handle_use] vmo: zx_handle_t,
        len: u32,
        format: u32,
        width: u32,
        height: u32,
        stride: u32,
    ) -> zx_status_t;

    #[leaf]
    fn zx_pci_get_nth_device / _zx_pci_get_nth_device(
        #[handle_use] handle: zx_handle_t,
        index: u32,
        #[nonnull] out_info: *mut zx_pcie_device_info_t,
        #[handle_acquire] #[nonnull] out_handle: *mut zx_handle_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_pci_enable_bus_master / _zx_pci_enable_bus_master(
        #[handle_use] handle: zx_handle_t,
        enable: bool,
    ) -> zx_status_t;

    #[leaf]
    fn zx_pci_reset_device / _zx_pci_reset_device(
        #[handle_use] handle: zx_handle_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_pci_config_read / _zx_pci_config_read(
        #[handle_use] handle: zx_handle_t,
        offset: u16,
        width: usize,
        out_val: *mut u32,
    ) -> zx_status_t;

    #[leaf]
    fn zx_pci_config_write / _zx_pci_config_write(
        #[handle_use] handle: zx_handle_t,
        offset: u16,
        width: usize,
        val: u32,
    ) -> zx_status_t;

    #[leaf]
    fn zx_pci_cfg_pio_rw / _zx_pci_cfg_pio_rw(
        #[handle_use] handle: zx_handle_t,
        bus: u8,
        dev: u8,
        func: u8,
        offset: u8,
        val: *mut u32,
        width: usize,
        write: bool,
    ) -> zx_status_t;

    #[leaf]
    fn zx_pci_get_bar / _zx_pci_get_bar(
        #[handle_use] handle: zx_handle_t,
        bar_num: u32,
        out_bar: *mut zx_pci_bar_t,
        #[handle_acquire] #[nonnull] out_handle: *mut zx_handle_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_pci_map_interrupt / _zx_pci_map_interrupt(
        #[handle_use] handle: zx_handle_t,
        which_irq: i32,
        #[handle_acquire] #[nonnull] out_handle: *mut zx_handle_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_pci_query_irq_mode / _zx_pci_query_irq_mode(
        #[handle_use] handle: zx_handle_t,
        mode: u32,
        #[nonnull] out_max_irqs: *mut u32,
    ) -> zx_status_t;

    #[leaf]
    fn zx_pci_set_irq_mode / _zx_pci_set_irq_mode(
        #[handle_use] handle: zx_handle_t,
        mode: u32,
        requested_irq_count: u32,
    ) -> zx_status_t;

    #[leaf]
    fn zx_pci_init / _zx_pci_init(
        #[handle_use] handle: zx_handle_t,
        init_buf: *const zx_pci_init_arg_t,
        len: u32,
    ) -> zx_status_t;

    #[leaf]
    fn zx_pci_add_subtract_io_range / _zx_pci_add_subtract_io_range(
        #[handle_use] handle: zx_handle_t,
        mmio: bool,
        base: u64,
        len: u64,
        add: bool,
    ) -> zx_status_t;

    #[leaf]
    fn zx_pc_firmware_tables / _zx_pc_firmware_tables(
        #[handle_use] handle: zx_handle_t,
        #[nonnull] acpi_rsdp: *mut zx_paddr_t,
        #[nonnull] smbios: *mut zx_paddr_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_smc_call / _zx_smc_call(
        #[handle_use] handle: zx_handle_t,
        parameters: *const zx_smc_parameters_t,
        #[nonnull] out_smc_result: *mut zx_smc_result_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_resource_create / _zx_resource_create(
        #[handle_use] parent_rsrc: zx_handle_t,
        options: u32,
        base: u64,
        size: usize,
        name: *const c_char,
        name_size: usize,
        #[handle_acquire] #[nonnull] resource_out: *mut zx_handle_t,
    ) -> zx_status_t;

    // ===== Hypervisor =====

    #[leaf]
    fn zx_guest_create / _zx_guest_create(
        #[handle_use] resource: zx_handle_t,
        options: u32,
        #[handle_acquire] #[nonnull] guest_handle: *mut zx_handle_t,
        #[handle_acquire] #[nonnull] vmar_handle: *mut zx_handle_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_guest_set_trap / _zx_guest_set_trap(
        #[handle_use] handle: zx_handle_t,
        kind: u32,
        addr: zx_vaddr_t,
        size: usize,
        #[handle_use] port_handle: zx_handle_t,
        key: u64,
    ) -> zx_status_t;

    #[leaf]
    fn zx_vcpu_create / _zx_vcpu_create(
        #[handle_use] guest: zx_handle_t,
        options: u32,
        entry: zx_vaddr_t,
        #[handle_acquire] #[nonnull] out: *mut zx_handle_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_vcpu_resume / _zx_vcpu_resume(
        #[handle_use] handle: zx_handle_t,
        #[nonnull] packet: *mut zx_port_packet_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_vcpu_interrupt / _zx_vcpu_interrupt(
        #[handle_use] handle: zx_handle_t,
        vector: u32,
    ) -> zx_status_t;

    #[leaf]
    fn zx_vcpu_read_state / _zx_vcpu_read_state(
        #[handle_use] handle: zx_handle_t,
        kind: u32,
        buffer: *mut c_void,
        buffer_size: usize,
    ) -> zx_status_t;

    #[leaf]
    fn zx_vcpu_write_state / _zx_vcpu_write_state(
        #[handle_use] handle: zx_handle_t,
        kind: u32,
        buffer: *const c_void,
        buffer_size: usize,
    ) -> zx_status_t;

    // ===== System control =====

    #[leaf]
    fn zx_system_mexec / _zx_system_mexec(
        #[handle_use] resource: zx_handle_t,
        #[handle_use] kernel_vmo: zx_handle_t,
        #[handle_use] bootimage_vmo: zx_handle_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_system_mexec_payload_get / _zx_system_mexec_payload_get(
        #[handle_use] resource: zx_handle_t,
        buffer: *mut c_void,
        buffer_size: usize,
    ) -> zx_status_t;

    #[leaf]
    fn zx_system_powerctl / _zx_system_powerctl(
        #[handle_use] resource: zx_handle_t,
        cmd: u32,
        arg: *const zx_system_powerctl_arg_t,
    ) -> zx_status_t;

    // ===== Paging =====

    #[leaf]
    fn zx_pager_create / _zx_pager_create(
        options: u32,
        #[pager] #[nonnull] out_pager: *mut zx_handle_t,
    ) -> zx_status_t;

    #[leaf]
    fn zx_pager_create_vmo / _zx_pager_create_vmo(
        #[handle_use] pager: zx_handle_t,
        #[handle_use] port: zx_handle_t,
        key: u64,
        size: u64,
        options: u32,
        #[out_pager_vmo] #[nonnull] out_pager_vmo: *mut zx_handle_t,
    ) -> zx_status_t;

    // ===== Syscall testing =====

    #[leaf]
    fn zx_syscall_test_0 / _zx_syscall_test_0() -> zx_status_t;

    #[leaf]
    fn zx_syscall_test_1 / _zx_syscall_test_1(
        a: c_int,
    ) -> zx_status_t;

    #[leaf]
    fn zx_syscall_test_2 / _zx_syscall_test_2(
        a: c_int,
        b: c_int,
    ) -> zx_status_t;

    #[leaf]
    fn zx_syscall_test_3 / _zx_syscall_test_3(
        a: c_int,
        b: c_int,
        c: c_int,
    ) -> zx_status_t;

    #[leaf]
    fn zx_syscall_test_4 / _zx_syscall_test_4(
        a: c_int,
        b: c_int,
        c: c_int,
        d: c_int,
    ) -> zx_status_t;

    #[leaf]
    fn zx_syscall_test_5 / _zx_syscall_test_5(
        a: c_int,
        b: c_int,
        c: c_int,
        d: c_int,
        e: c_int,
    ) -> zx_status_t;

    #[leaf]
    fn zx_syscall_test_6 / _zx_syscall_test_6(
        a: c_int,
        b: c_int,
        c: c_int,
        d: c_int,
        e: c_int,
        f: c_int,
    ) -> zx_status_t;

    #[leaf]
    fn zx_syscall_test_7 / _zx_syscall_test_7(
        a: c_int,
        b: c_int,
        c: c_int,
        d: c_int,
        e: c_int,
        f: c_int,
        g: c_int,
    ) -> zx_status_t;

    #[leaf]
    fn zx_syscall_test_8 / _zx_syscall_test_8(
        a: c_int,
        b: c_int,
        c: c_int,
        d: c_int,
        e: c_int,
        f: c_int,
        g: c_int,
        h: c_int,
    ) -> zx_status_t;

    #[leaf]
    fn zx_syscall_test_wrapper / _zx_syscall_test_wrapper(
        a: c_int,
        b: c_int,
        c: c_int,
    ) -> zx_status_t;
}
