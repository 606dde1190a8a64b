pub mod physical_device;

use core::{
    ffi::{CStr, c_char, c_void},
    fmt, mem,
    ops::Deref,
};

use ash::vk;
use tracing::{debug, error, trace, warn};

use crate::{
    InstanceFns, PhysicalDeviceFns,
    chain::{self, InstanceLink, PFN_GetPhysicalDeviceProcAddr, PFN_vkSetInstanceLoaderData},
    device::{self, command_buffer},
    error::LayerError,
    instance::physical_device::PhysicalDeviceDispatch,
    overrides::{
        InstanceOverrides, Layer, has_command_buffer_overrides, has_device_overrides,
        has_physical_device_overrides,
    },
    proc_table,
    registry::{INSTANCES, PHYSICAL_DEVICES},
    resolve_proc, trampoline,
};

/// Instance dispatch table.
pub struct InstanceDispatch {
    /// Vulkan instance handle.
    pub instance: vk::Instance,

    /// Function pointer to next `vkGetInstanceProcAddr`.
    pub get_instance_proc_addr: vk::PFN_vkGetInstanceProcAddr,

    /// Function pointer to next `vk_layerGetPhysicalDeviceProcAddr`, if the next layer has one.
    pub get_physical_device_proc_addr: Option<PFN_GetPhysicalDeviceProcAddr>,

    /// Physical devices enumerated when the instance was created.
    pub physical_devices: Vec<vk::PhysicalDevice>,

    /// Loader callback for dispatchable objects the layer creates itself.
    pub set_loader_data: Option<PFN_vkSetInstanceLoaderData>,

    fns: InstanceFns,
}

impl InstanceDispatch {
    /// Create a new [`InstanceDispatch`] and enumerate its physical devices.
    unsafe fn new(
        instance: vk::Instance,
        link: InstanceLink,
        set_loader_data: Option<PFN_vkSetInstanceLoaderData>,
    ) -> Self {
        let get_instance_proc_addr = link.get_instance_proc_addr;
        let fns = unsafe {
            InstanceFns::load(|name| get_instance_proc_addr(instance, name.as_ptr()))
        };

        let mut table = Self {
            instance,
            get_instance_proc_addr,
            get_physical_device_proc_addr: link.get_physical_device_proc_addr,
            physical_devices: vec![],
            set_loader_data,
            fns,
        };

        if table.fns.enumerate_physical_devices.is_some() {
            match unsafe { table.ash_instance().enumerate_physical_devices() } {
                Ok(physical_devices) => table.physical_devices = physical_devices,
                Err(err) => error!("failed to enumerate physical devices. err: {err:?}"),
            }
        } else {
            warn!("next layer does not provide vkEnumeratePhysicalDevices");
        }

        table
    }

    /// Find the table of a live instance.
    ///
    /// # Safety
    /// `instance` must stay alive for `'a`.
    pub unsafe fn find<'a>(instance: vk::Instance) -> Option<&'a Self> {
        INSTANCES.find(instance).map(|table| unsafe { table.get() })
    }

    /// [`ash::Instance`] calling into the next layer.
    pub fn ash_instance(&self) -> ash::Instance {
        let get_instance_proc_addr = self.get_instance_proc_addr;
        let instance = self.instance;
        unsafe {
            ash::Instance::load_with(
                |name| {
                    mem::transmute::<vk::PFN_vkVoidFunction, *const c_void>(get_instance_proc_addr(
                        instance,
                        name.as_ptr(),
                    ))
                },
                instance,
            )
        }
    }

    /// Physical device entry points of the next layer.
    fn load_physical_device_fns(&self) -> PhysicalDeviceFns {
        let get_instance_proc_addr = self.get_instance_proc_addr;
        let instance = self.instance;
        unsafe { PhysicalDeviceFns::load(|name| get_instance_proc_addr(instance, name.as_ptr())) }
    }
}

impl Deref for InstanceDispatch {
    type Target = InstanceFns;

    fn deref(&self) -> &Self::Target {
        &self.fns
    }
}

impl fmt::Debug for InstanceDispatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstanceDispatch")
            .field("instance", &self.instance)
            .field("physical_devices", &self.physical_devices)
            .finish_non_exhaustive()
    }
}

/// Layer's implementation of `vkGetInstanceProcAddr`.
#[tracing::instrument(skip(name))]
pub unsafe extern "system" fn get_instance_proc_addr<L: Layer>(
    instance: vk::Instance,
    name: *const c_char,
) -> vk::PFN_vkVoidFunction {
    if name.is_null() {
        return None;
    }
    let name = unsafe { CStr::from_ptr(name) };
    trace!("vkGetInstanceProcAddr called name: {:?}", name);

    let bytes = name.to_bytes();
    unsafe {
        proc_table!(bytes => {
            b"vkGetInstanceProcAddr" => get_instance_proc_addr::<L>: vk::PFN_vkGetInstanceProcAddr,
            b"vkCreateInstance" => create_instance::<L>: vk::PFN_vkCreateInstance,
            b"vkDestroyInstance" => destroy_instance::<L>: vk::PFN_vkDestroyInstance,
            b"vkCreateDevice" => device::create_device::<L>: vk::PFN_vkCreateDevice,
            b"vkGetDeviceProcAddr" => device::get_device_proc_addr::<L>: vk::PFN_vkGetDeviceProcAddr,
            b"vkDestroyDevice" => device::destroy_device::<L>: vk::PFN_vkDestroyDevice,
        });
    }

    if const { has_physical_device_overrides::<L>() || has_device_overrides::<L>() } {
        unsafe {
            proc_table!(bytes => {
                b"vk_layerGetPhysicalDeviceProcAddr" =>
                    physical_device::get_physical_device_proc_addr::<L>: PFN_GetPhysicalDeviceProcAddr,
            });
        }
    }

    if const { has_command_buffer_overrides::<L>() } {
        if let Some(f) = command_buffer::get_proc_addr::<L>(bytes) {
            return Some(f);
        }
    }

    let trampoline = trampoline::instance_override::<L>(bytes)
        .or_else(|| trampoline::physical_device_override::<L>(bytes))
        .or_else(|| trampoline::device_override::<L>(bytes));
    if trampoline.is_some() {
        return trampoline;
    }

    let table = INSTANCES.find(instance)?;
    unsafe { (table.get().get_instance_proc_addr)(instance, name.as_ptr()) }
}

/// Implementation of layer's `vkCreateInstance`.
#[tracing::instrument]
unsafe extern "system" fn create_instance<L: Layer>(
    p_create_info: *const vk::InstanceCreateInfo,
    p_allocator: *const vk::AllocationCallbacks,
    p_instance: *mut vk::Instance,
) -> vk::Result {
    trace!("vkCreateInstance called");

    let link = match unsafe { chain::take_instance_link(p_create_info) } {
        Ok(link) => link,
        Err(err) => {
            error!("cannot create instance. err: {err}");
            return err.into();
        }
    };

    let Some(next_create_instance) = (unsafe {
        resolve_proc!(link.get_instance_proc_addr =>
            vk::Instance::null(),
            c"vkCreateInstance": vk::PFN_vkCreateInstance
        )
    }) else {
        let err = LayerError::MissingProc(c"vkCreateInstance");
        error!("cannot create instance. err: {err}");
        return err.into();
    };

    let res = match <L::Instance as InstanceOverrides>::CREATE_INSTANCE {
        Some(hook) => unsafe { hook(next_create_instance, p_create_info, p_allocator, p_instance) },
        None => unsafe { next_create_instance(p_create_info, p_allocator, p_instance) },
    };
    if res != vk::Result::SUCCESS {
        return res;
    }

    debug!("initializing instance dispatch table");
    let instance = unsafe { *p_instance };
    let set_loader_data = unsafe { chain::instance_loader_data_callback(p_create_info) };
    let table = unsafe { InstanceDispatch::new(instance, link, set_loader_data) };
    let Some(table_ref) = INSTANCES.insert(instance, table) else {
        return res;
    };

    let table = unsafe { table_ref.get() };
    let fns = table.load_physical_device_fns();
    for &physical_device in &table.physical_devices {
        debug!("found physical device: {:?}", physical_device);
        PHYSICAL_DEVICES.insert(
            physical_device,
            PhysicalDeviceDispatch::new(physical_device, table_ref, fns),
        );
    }

    res
}

/// Implementation of layer's `vkDestroyInstance`.
#[tracing::instrument]
unsafe extern "system" fn destroy_instance<L: Layer>(
    instance: vk::Instance,
    p_allocator: *const vk::AllocationCallbacks,
) {
    trace!("vkDestroyInstance called");
    if instance == vk::Instance::null() {
        return;
    }

    let table = unsafe { trampoline::instance_dispatch(instance) };
    match <L::Instance as InstanceOverrides>::DESTROY_INSTANCE {
        Some(hook) => unsafe { hook(table, instance, p_allocator) },
        None => unsafe { table.destroy_instance(instance, p_allocator) },
    }

    debug!("instance dispatch table cleanup");
    for &physical_device in &table.physical_devices {
        PHYSICAL_DEVICES.remove(physical_device);
    }
    INSTANCES.remove(instance);
}
