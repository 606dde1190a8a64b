//! Command buffer tracking.
//!
//! Only active for layers overriding a command buffer entry point, every other layer leaves
//! command buffer dispatch to the loader.

use core::slice;

use ash::vk;
use tracing::trace;

use crate::{
    DeviceDispatch,
    overrides::{DeviceOverrides, Layer},
    proc_table,
    registry::{COMMAND_BUFFERS, TableRef},
    trampoline,
};

/// Registry entry of a command buffer.
#[derive(Debug)]
pub struct CommandBufferData {
    /// Dispatch table of the owning device.
    pub device: TableRef<DeviceDispatch>,

    /// Pool the command buffer was allocated from.
    pub pool: vk::CommandPool,
}

/// Command buffer lifecycle trampolines.
pub(crate) fn get_proc_addr<L: Layer>(name: &[u8]) -> vk::PFN_vkVoidFunction {
    unsafe {
        proc_table!(name => {
            b"vkAllocateCommandBuffers" =>
                allocate_command_buffers::<L>: vk::PFN_vkAllocateCommandBuffers,
            b"vkFreeCommandBuffers" => free_command_buffers::<L>: vk::PFN_vkFreeCommandBuffers,
            b"vkDestroyCommandPool" => destroy_command_pool::<L>: vk::PFN_vkDestroyCommandPool,
        });
    }

    None
}

#[tracing::instrument]
unsafe extern "system" fn allocate_command_buffers<L: Layer>(
    device: vk::Device,
    p_allocate_info: *const vk::CommandBufferAllocateInfo,
    p_command_buffers: *mut vk::CommandBuffer,
) -> vk::Result {
    trace!("vkAllocateCommandBuffers called");

    let table_ref = trampoline::device_table(device);
    let table = unsafe { table_ref.get() };
    let res = match <L::Device as DeviceOverrides>::ALLOCATE_COMMAND_BUFFERS {
        Some(hook) => unsafe { hook(table, device, p_allocate_info, p_command_buffers) },
        None => unsafe { table.allocate_command_buffers(device, p_allocate_info, p_command_buffers) },
    };
    if res != vk::Result::SUCCESS {
        return res;
    }

    let Some(info) = (unsafe { p_allocate_info.as_ref() }) else {
        return res;
    };
    if info.command_buffer_count == 0 || p_command_buffers.is_null() {
        return res;
    }

    let command_buffers =
        unsafe { slice::from_raw_parts(p_command_buffers, info.command_buffer_count as usize) };
    for &command_buffer in command_buffers {
        COMMAND_BUFFERS.insert(
            command_buffer,
            CommandBufferData {
                device: table_ref,
                pool: info.command_pool,
            },
        );
    }

    res
}

#[tracing::instrument]
unsafe extern "system" fn free_command_buffers<L: Layer>(
    device: vk::Device,
    command_pool: vk::CommandPool,
    command_buffer_count: u32,
    p_command_buffers: *const vk::CommandBuffer,
) {
    trace!("vkFreeCommandBuffers called");

    let table = unsafe { trampoline::device_dispatch(device) };
    match <L::Device as DeviceOverrides>::FREE_COMMAND_BUFFERS {
        Some(hook) => unsafe {
            hook(table, device, command_pool, command_buffer_count, p_command_buffers)
        },
        None => unsafe {
            table.free_command_buffers(device, command_pool, command_buffer_count, p_command_buffers)
        },
    }

    if command_buffer_count == 0 || p_command_buffers.is_null() {
        return;
    }

    let command_buffers =
        unsafe { slice::from_raw_parts(p_command_buffers, command_buffer_count as usize) };
    for &command_buffer in command_buffers {
        // Freeing null handles is allowed.
        if command_buffer != vk::CommandBuffer::null() {
            COMMAND_BUFFERS.remove(command_buffer);
        }
    }
}

#[tracing::instrument]
unsafe extern "system" fn destroy_command_pool<L: Layer>(
    device: vk::Device,
    command_pool: vk::CommandPool,
    p_allocator: *const vk::AllocationCallbacks,
) {
    trace!("vkDestroyCommandPool called");

    let table_ref = trampoline::device_table(device);
    let table = unsafe { table_ref.get() };
    match <L::Device as DeviceOverrides>::DESTROY_COMMAND_POOL {
        Some(hook) => unsafe { hook(table, device, command_pool, p_allocator) },
        None => unsafe { table.destroy_command_pool(device, command_pool, p_allocator) },
    }

    if command_pool == vk::CommandPool::null() {
        return;
    }
    COMMAND_BUFFERS.retain(|_, data| !(data.device == table_ref && data.pool == command_pool));
}
