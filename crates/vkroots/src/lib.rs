//! Scaffolding for Vulkan layers.
//!
//! A layer describes the entry points it intercepts with a [`Layer`] impl and exports the loader
//! negotiation function with [`declare_layer!`]. The crate keeps a dispatch table for every
//! instance, physical device and device going through the layer, and routes each call either to
//! the layer's override or straight to the next layer.
//!
//! ```ignore
//! use vkroots::{DeviceDispatch, DeviceOverrides, Layer, NoOverrides, ash::vk, pfn};
//!
//! struct QueueLogger;
//!
//! impl DeviceOverrides for QueueLogger {
//!     const QUEUE_SUBMIT: Option<pfn::QueueSubmit> = Some(queue_submit);
//! }
//!
//! impl Layer for QueueLogger {
//!     type Instance = NoOverrides;
//!     type PhysicalDevice = NoOverrides;
//!     type Device = Self;
//! }
//!
//! unsafe fn queue_submit(
//!     dispatch: &DeviceDispatch,
//!     queue: vk::Queue,
//!     submit_count: u32,
//!     p_submits: *const vk::SubmitInfo,
//!     fence: vk::Fence,
//! ) -> vk::Result {
//!     tracing::info!("{submit_count} submits on {queue:?}");
//!     unsafe { dispatch.queue_submit(queue, submit_count, p_submits, fence) }
//! }
//!
//! vkroots::declare_layer!(QueueLogger);
//! ```

pub mod chain;
pub mod device;
mod dispatch;
mod entry_points;
mod error;
pub mod instance;
pub mod overrides;
pub mod registry;
mod trampoline;

use core::ffi::c_void;

use ash::vk::{self, PFN_vkGetDeviceProcAddr, PFN_vkGetInstanceProcAddr};
use tracing::{debug, error, trace};

pub use ash;

pub use crate::{
    chain::PFN_GetPhysicalDeviceProcAddr,
    device::{DeviceDispatch, queue::QueueInfo},
    dispatch::{DeviceFns, InstanceFns, PhysicalDeviceFns},
    error::LayerError,
    instance::{InstanceDispatch, physical_device::PhysicalDeviceDispatch},
    overrides::{
        DeviceOverrides, InstanceOverrides, Layer, NoOverrides, PhysicalDeviceOverrides,
        has_any_overrides, has_command_buffer_overrides, has_device_overrides,
        has_instance_overrides, has_physical_device_overrides, pfn,
    },
    registry::TableRef,
};

/// Loader layer interface version implemented by this crate.
pub const LAYER_INTERFACE_VERSION: u32 = 2;

/// `LAYER_NEGOTIATE_INTERFACE_STRUCT` of `VkNegotiateLayerStructType`.
pub const LAYER_NEGOTIATE_INTERFACE_STRUCT: u32 = 1;

/// `VkNegotiateLayerInterface` exchanged with the loader.
#[repr(C)]
#[derive(Debug)]
pub struct NegotiateLayerInterface {
    pub s_type: u32,
    pub p_next: *mut c_void,
    pub loader_layer_interface_version: u32,
    pub pfn_get_instance_proc_addr: Option<PFN_vkGetInstanceProcAddr>,
    pub pfn_get_device_proc_addr: Option<PFN_vkGetDeviceProcAddr>,
    pub pfn_get_physical_device_proc_addr: Option<PFN_GetPhysicalDeviceProcAddr>,
}

/// Answer the loader's interface negotiation for layer `L`.
///
/// Resolvers are only published for the scopes `L` overrides, the loader skips the layer for
/// everything else.
///
/// # Safety
/// `interface` must be null or point to a writable `VkNegotiateLayerInterface`.
#[tracing::instrument]
pub unsafe fn negotiate<L: Layer>(interface: *mut NegotiateLayerInterface) -> vk::Result {
    trace!("vkNegotiateLoaderLayerInterfaceVersion called");

    let Some(interface) = (unsafe { interface.as_mut() }) else {
        error!("cannot negotiate. err: {}", LayerError::InvalidNegotiateStruct);
        return LayerError::InvalidNegotiateStruct.into();
    };
    if interface.s_type != LAYER_NEGOTIATE_INTERFACE_STRUCT {
        error!("cannot negotiate. err: {}", LayerError::InvalidNegotiateStruct);
        return LayerError::InvalidNegotiateStruct.into();
    }
    if interface.loader_layer_interface_version < LAYER_INTERFACE_VERSION {
        let err = LayerError::UnsupportedInterfaceVersion(interface.loader_layer_interface_version);
        error!("cannot negotiate. err: {err}");
        return err.into();
    }

    debug!("initializing vulkan layer");
    interface.loader_layer_interface_version = LAYER_INTERFACE_VERSION;
    interface.pfn_get_instance_proc_addr = if const { has_any_overrides::<L>() } {
        Some(instance::get_instance_proc_addr::<L>)
    } else {
        None
    };
    interface.pfn_get_physical_device_proc_addr =
        if const { has_physical_device_overrides::<L>() || has_device_overrides::<L>() } {
            Some(instance::physical_device::get_physical_device_proc_addr::<L>)
        } else {
            None
        };
    interface.pfn_get_device_proc_addr = if const { has_device_overrides::<L>() } {
        Some(device::get_device_proc_addr::<L>)
    } else {
        None
    };

    vk::Result::SUCCESS
}

/// Export the loader negotiation function of a layer.
///
/// The symbol is named `vkNegotiateLoaderLayerInterfaceVersion` unless a name is given.
#[macro_export]
macro_rules! declare_layer {
    ($layer:ty) => {
        $crate::declare_layer!($layer, "vkNegotiateLoaderLayerInterfaceVersion");
    };

    ($layer:ty, $name:literal) => {
        /// Loader negotiation entry point.
        ///
        /// # Safety
        /// Called by the Vulkan loader only.
        #[unsafe(export_name = $name)]
        pub unsafe extern "system" fn vk_negotiate_loader_layer_interface_version(
            interface: *mut $crate::NegotiateLayerInterface,
        ) -> $crate::ash::vk::Result {
            unsafe { $crate::negotiate::<$layer>(interface) }
        }
    };
}

macro_rules! proc_table {
    ($name:expr => {
        $($proc:literal => $func:path : $proc_ty:ty),* $(,)?
    }) => {
        match $name {
            $(
                $proc => return ::core::mem::transmute::<
                    $proc_ty,
                    ::ash::vk::PFN_vkVoidFunction
                >($func),
            )*
            _ => {}
        }
    };
}
use proc_table;

macro_rules! resolve_proc {
    ($f:expr => $this:expr, $name:literal : $ty:ty) => {
        ::core::mem::transmute::<::ash::vk::PFN_vkVoidFunction, Option<$ty>>($f(
            $this,
            $name.as_ptr(),
        ))
    };
}
use resolve_proc;
