use core::{
    ffi::{CStr, c_char},
    fmt,
    ops::Deref,
};

use ash::vk;
use tracing::trace;

use crate::{
    InstanceDispatch, PhysicalDeviceFns, chain::PFN_GetPhysicalDeviceProcAddr,
    overrides::Layer, proc_table, registry::{INSTANCES, PHYSICAL_DEVICES, TableRef}, trampoline,
};

/// Physical device dispatch table.
pub struct PhysicalDeviceDispatch {
    /// Vulkan physical device handle.
    pub physical_device: vk::PhysicalDevice,

    /// Instance the physical device was enumerated from.
    instance: TableRef<InstanceDispatch>,

    fns: PhysicalDeviceFns,
}

impl PhysicalDeviceDispatch {
    pub(crate) fn new(
        physical_device: vk::PhysicalDevice,
        instance: TableRef<InstanceDispatch>,
        fns: PhysicalDeviceFns,
    ) -> Self {
        Self {
            physical_device,
            instance,
            fns,
        }
    }

    /// Find the table of a physical device of a live instance.
    ///
    /// # Safety
    /// The owning instance must stay alive for `'a`.
    pub unsafe fn find<'a>(physical_device: vk::PhysicalDevice) -> Option<&'a Self> {
        PHYSICAL_DEVICES
            .find(physical_device)
            .map(|table| unsafe { table.get() })
    }

    /// Dispatch table of the owning instance.
    pub fn instance(&self) -> &InstanceDispatch {
        // Physical device tables are removed before their instance table.
        unsafe { self.instance.get() }
    }
}

impl Deref for PhysicalDeviceDispatch {
    type Target = PhysicalDeviceFns;

    fn deref(&self) -> &Self::Target {
        &self.fns
    }
}

impl fmt::Debug for PhysicalDeviceDispatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhysicalDeviceDispatch")
            .field("physical_device", &self.physical_device)
            .field("instance", &self.instance().instance)
            .finish_non_exhaustive()
    }
}

/// Layer's implementation of `vk_layerGetPhysicalDeviceProcAddr`.
#[tracing::instrument(skip(name))]
pub unsafe extern "system" fn get_physical_device_proc_addr<L: Layer>(
    instance: vk::Instance,
    name: *const c_char,
) -> vk::PFN_vkVoidFunction {
    if name.is_null() {
        return None;
    }
    let name = unsafe { CStr::from_ptr(name) };
    trace!("vk_layerGetPhysicalDeviceProcAddr called name: {:?}", name);

    let bytes = name.to_bytes();
    unsafe {
        proc_table!(bytes => {
            b"vk_layerGetPhysicalDeviceProcAddr" =>
                get_physical_device_proc_addr::<L>: PFN_GetPhysicalDeviceProcAddr,
        });
    }

    let trampoline = trampoline::physical_device_override::<L>(bytes);
    if trampoline.is_some() {
        return trampoline;
    }

    let table = INSTANCES.find(instance)?;
    let next = unsafe { table.get() }.get_physical_device_proc_addr?;
    unsafe { next(instance, name.as_ptr()) }
}
