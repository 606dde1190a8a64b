//! Generated trampolines of every non lifecycle entry point.
//!
//! A trampoline finds the dispatch table of its first argument, then calls the layer's override
//! when there is one and the next layer otherwise.

use core::{
    ffi::{c_char, c_int, c_void},
    fmt, mem,
};

use ash::vk::{self, Handle};
use tracing::error;

use crate::{
    DeviceDispatch, InstanceDispatch, PhysicalDeviceDispatch,
    entry_points::{entry_name, entry_points},
    overrides::{DeviceOverrides, InstanceOverrides, Layer, PhysicalDeviceOverrides},
    registry::{COMMAND_BUFFERS, DEVICES, INSTANCES, PHYSICAL_DEVICES, QUEUES, TableRef},
};

#[cold]
#[track_caller]
fn unknown_handle<H: Handle + fmt::Debug>(handle: H) -> ! {
    error!("{handle:?} has no dispatch table");
    panic!("{handle:?} has no dispatch table");
}

/// Registry entry of a live physical device.
pub(crate) fn physical_device_table(
    physical_device: vk::PhysicalDevice,
) -> TableRef<PhysicalDeviceDispatch> {
    match PHYSICAL_DEVICES.find(physical_device) {
        Some(table) => table,
        None => unknown_handle(physical_device),
    }
}

/// Registry entry of a live device.
pub(crate) fn device_table(device: vk::Device) -> TableRef<DeviceDispatch> {
    match DEVICES.find(device) {
        Some(table) => table,
        None => unknown_handle(device),
    }
}

/// Dispatch table of a live instance.
pub(crate) unsafe fn instance_dispatch<'a>(instance: vk::Instance) -> &'a InstanceDispatch {
    match INSTANCES.find(instance) {
        Some(table) => unsafe { table.get() },
        None => unknown_handle(instance),
    }
}

/// Dispatch table of a live physical device.
pub(crate) unsafe fn physical_device_dispatch<'a>(
    physical_device: vk::PhysicalDevice,
) -> &'a PhysicalDeviceDispatch {
    match PHYSICAL_DEVICES.find(physical_device) {
        Some(table) => unsafe { table.get() },
        None => unknown_handle(physical_device),
    }
}

/// Dispatch table of a live device.
pub(crate) unsafe fn device_dispatch<'a>(device: vk::Device) -> &'a DeviceDispatch {
    match DEVICES.find(device) {
        Some(table) => unsafe { table.get() },
        None => unknown_handle(device),
    }
}

/// Dispatch table of the device owning a queue.
pub(crate) unsafe fn queue_dispatch<'a>(queue: vk::Queue) -> &'a DeviceDispatch {
    match QUEUES.find(queue) {
        Some(data) => unsafe { data.get().device.get() },
        None => unknown_handle(queue),
    }
}

/// Dispatch table of the device owning a command buffer.
pub(crate) unsafe fn command_buffer_dispatch<'a>(
    command_buffer: vk::CommandBuffer,
) -> &'a DeviceDispatch {
    match COMMAND_BUFFERS.find(command_buffer) {
        Some(data) => unsafe { data.get().device.get() },
        None => unknown_handle(command_buffer),
    }
}

macro_rules! forward {
    (
        $lookup:ident => $scope:ident: $overrides:ident;
        $($name:ident : $snake:ident ($first:ident : $first_ty:ty $(, $arg:ident : $ty:ty)*) $(-> $ret:ty)?;)*
    ) => {
        paste::paste! {
            $(
                #[doc = "Trampoline of `vk" $name "`."]
                pub unsafe extern "system" fn $snake<L: Layer>(
                    $first: $first_ty $(, $arg: $ty)*
                ) $(-> $ret)? {
                    let dispatch = unsafe { $lookup($first) };
                    match <L::$scope as $overrides>::[<$snake:upper>] {
                        Some(hook) => unsafe { hook(dispatch, $first $(, $arg)*) },
                        None => unsafe { dispatch.$snake($first $(, $arg)*) },
                    }
                }
            )*
        }
    };
}

macro_rules! lookup {
    (
        $(#[$meta:meta])*
        $fn_name:ident => $scope:ident: $overrides:ident;
        $($name:ident : $snake:ident ($($arg:ident : $ty:ty),*) $(-> $ret:ty)?;)*
    ) => {
        paste::paste! {
            $(#[$meta])*
            pub(crate) fn $fn_name<L: Layer>(name: &[u8]) -> vk::PFN_vkVoidFunction {
                $(
                    if const { <L::$scope as $overrides>::[<$snake:upper>].is_some() }
                        && name == entry_name!($name).to_bytes()
                    {
                        return Some(unsafe {
                            mem::transmute::<
                                unsafe extern "system" fn($($ty),*) $(-> $ret)?,
                                unsafe extern "system" fn(),
                            >($snake::<L>)
                        });
                    }
                )*

                None
            }
        }
    };
}

macro_rules! trampolines {
    (
        instance { lifecycle { $($instance_lifecycle:tt)* } forward { $($instance:tt)* } }
        physical_device { lifecycle { $($physical_device_lifecycle:tt)* } forward { $($physical_device:tt)* } }
        device { lifecycle { $($device_lifecycle:tt)* } forward { $($device:tt)* } }
        queue { forward { $($queue:tt)* } }
        command_buffer { forward { $($command_buffer:tt)* } }
    ) => {
        forward! { instance_dispatch => Instance: InstanceOverrides; $($instance)* }
        forward! {
            physical_device_dispatch => PhysicalDevice: PhysicalDeviceOverrides;
            $($physical_device)*
        }
        forward! { device_dispatch => Device: DeviceOverrides; $($device)* }
        forward! { queue_dispatch => Device: DeviceOverrides; $($queue)* }
        forward! { command_buffer_dispatch => Device: DeviceOverrides; $($command_buffer)* }

        lookup! {
            /// Trampoline of an overridden instance level entry point.
            instance_override => Instance: InstanceOverrides;
            $($instance)*
        }
        lookup! {
            /// Trampoline of an overridden physical device entry point.
            physical_device_override => PhysicalDevice: PhysicalDeviceOverrides;
            $($physical_device)*
        }
        lookup! {
            /// Trampoline of an overridden device, queue or command buffer entry point.
            device_override => Device: DeviceOverrides;
            $($device)* $($queue)* $($command_buffer)*
        }
    };
}

entry_points!(trampolines);
