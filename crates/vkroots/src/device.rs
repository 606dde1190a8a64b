pub mod command_buffer;
pub mod queue;

use core::{
    ffi::{CStr, c_char, c_void},
    fmt, mem,
    ops::Deref,
};

use ash::vk;
use tracing::{debug, error, trace};

use crate::{
    DeviceFns, InstanceDispatch, PhysicalDeviceDispatch,
    chain::{self, PFN_vkSetDeviceLoaderData},
    device::queue::{QueueData, QueueInfo},
    overrides::{DeviceOverrides, Layer, PhysicalDeviceOverrides, has_command_buffer_overrides},
    proc_table,
    registry::{COMMAND_BUFFERS, DEVICES, QUEUES, TableRef},
    trampoline,
};

/// Device dispatch table.
pub struct DeviceDispatch {
    /// Vulkan device handle.
    pub device: vk::Device,

    /// Function pointer to next `vkGetDeviceProcAddr`.
    pub get_device_proc_addr: vk::PFN_vkGetDeviceProcAddr,

    /// Physical device the device was created from.
    physical_device: TableRef<PhysicalDeviceDispatch>,

    /// Queues requested at creation, used to find them again at teardown.
    pub queue_infos: Vec<QueueInfo>,

    /// Loader callback for dispatchable objects the layer creates itself.
    pub set_loader_data: Option<PFN_vkSetDeviceLoaderData>,

    fns: DeviceFns,
}

impl DeviceDispatch {
    /// Create a new [`DeviceDispatch`].
    unsafe fn new(
        device: vk::Device,
        get_device_proc_addr: vk::PFN_vkGetDeviceProcAddr,
        physical_device: TableRef<PhysicalDeviceDispatch>,
        queue_infos: Vec<QueueInfo>,
        set_loader_data: Option<PFN_vkSetDeviceLoaderData>,
    ) -> Self {
        let fns = unsafe { DeviceFns::load(|name| get_device_proc_addr(device, name.as_ptr())) };

        Self {
            device,
            get_device_proc_addr,
            physical_device,
            queue_infos,
            set_loader_data,
            fns,
        }
    }

    /// Find the table of a live device.
    ///
    /// # Safety
    /// `device` must stay alive for `'a`.
    pub unsafe fn find<'a>(device: vk::Device) -> Option<&'a Self> {
        DEVICES.find(device).map(|table| unsafe { table.get() })
    }

    /// Find the table of the device owning a queue.
    ///
    /// # Safety
    /// The owning device must stay alive for `'a`.
    pub unsafe fn from_queue<'a>(queue: vk::Queue) -> Option<&'a Self> {
        QUEUES
            .find(queue)
            .map(|data| unsafe { data.get().device.get() })
    }

    /// Find the table of the device owning a command buffer.
    ///
    /// Command buffers are only tracked for layers overriding a command buffer entry point.
    ///
    /// # Safety
    /// The owning device must stay alive for `'a`.
    pub unsafe fn from_command_buffer<'a>(command_buffer: vk::CommandBuffer) -> Option<&'a Self> {
        COMMAND_BUFFERS
            .find(command_buffer)
            .map(|data| unsafe { data.get().device.get() })
    }

    /// Dispatch table of the physical device the device was created from.
    pub fn physical_device(&self) -> &PhysicalDeviceDispatch {
        // A device never outlives its instance.
        unsafe { self.physical_device.get() }
    }

    /// Dispatch table of the owning instance.
    pub fn instance(&self) -> &InstanceDispatch {
        self.physical_device().instance()
    }

    /// [`ash::Device`] calling into the next layer.
    pub fn ash_device(&self) -> ash::Device {
        let get_device_proc_addr = self.get_device_proc_addr;
        let device = self.device;
        unsafe {
            ash::Device::load_with(
                |name| {
                    mem::transmute::<vk::PFN_vkVoidFunction, *const c_void>(get_device_proc_addr(
                        device,
                        name.as_ptr(),
                    ))
                },
                device,
            )
        }
    }
}

impl Deref for DeviceDispatch {
    type Target = DeviceFns;

    fn deref(&self) -> &Self::Target {
        &self.fns
    }
}

impl fmt::Debug for DeviceDispatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceDispatch")
            .field("device", &self.device)
            .field("physical_device", &self.physical_device().physical_device)
            .field("queue_infos", &self.queue_infos)
            .finish_non_exhaustive()
    }
}

/// Layer's implementation of `vkGetDeviceProcAddr`.
#[tracing::instrument(skip(name))]
pub unsafe extern "system" fn get_device_proc_addr<L: Layer>(
    device: vk::Device,
    name: *const c_char,
) -> vk::PFN_vkVoidFunction {
    if name.is_null() {
        return None;
    }
    let name = unsafe { CStr::from_ptr(name) };
    trace!("vkGetDeviceProcAddr called name: {:?}", name);

    let bytes = name.to_bytes();
    unsafe {
        proc_table!(bytes => {
            b"vkGetDeviceProcAddr" => get_device_proc_addr::<L>: vk::PFN_vkGetDeviceProcAddr,
            b"vkDestroyDevice" => destroy_device::<L>: vk::PFN_vkDestroyDevice,
        });
    }

    if const { has_command_buffer_overrides::<L>() } {
        if let Some(f) = command_buffer::get_proc_addr::<L>(bytes) {
            return Some(f);
        }
    }

    let trampoline = trampoline::device_override::<L>(bytes);
    if trampoline.is_some() {
        return trampoline;
    }

    let table = DEVICES.find(device)?;
    unsafe { (table.get().get_device_proc_addr)(device, name.as_ptr()) }
}

/// Implementation of layer's `vkCreateDevice`.
#[tracing::instrument]
pub(crate) unsafe extern "system" fn create_device<L: Layer>(
    physical_device: vk::PhysicalDevice,
    p_create_info: *const vk::DeviceCreateInfo,
    p_allocator: *const vk::AllocationCallbacks,
    p_device: *mut vk::Device,
) -> vk::Result {
    trace!("vkCreateDevice called");

    let physical_device_ref = trampoline::physical_device_table(physical_device);
    let physical_device_table = unsafe { physical_device_ref.get() };

    let link = match unsafe { chain::take_device_link(p_create_info) } {
        Ok(link) => link,
        Err(err) => {
            error!("cannot create device. err: {err}");
            return err.into();
        }
    };

    let res = match <L::PhysicalDevice as PhysicalDeviceOverrides>::CREATE_DEVICE {
        Some(hook) => unsafe {
            hook(
                physical_device_table,
                physical_device,
                p_create_info,
                p_allocator,
                p_device,
            )
        },
        None => unsafe {
            physical_device_table.create_device(physical_device, p_create_info, p_allocator, p_device)
        },
    };
    if res != vk::Result::SUCCESS {
        return res;
    }

    debug!("initializing device dispatch table");
    let device = unsafe { *p_device };
    let queue_infos = unsafe { QueueInfo::from_create_info(p_create_info) };
    let set_loader_data = unsafe { chain::device_loader_data_callback(p_create_info) };
    let table = unsafe {
        DeviceDispatch::new(
            device,
            link.get_device_proc_addr,
            physical_device_ref,
            queue_infos,
            set_loader_data,
        )
    };
    let Some(table_ref) = DEVICES.insert(device, table) else {
        return res;
    };

    for queue in unsafe { queue::enumerate(table_ref.get()) } {
        QUEUES.insert(
            queue.queue,
            QueueData {
                device: table_ref,
                family_index: queue.family_index,
                index: queue.index,
            },
        );
    }

    res
}

/// Implementation of layer's `vkDestroyDevice`.
#[tracing::instrument]
pub(crate) unsafe extern "system" fn destroy_device<L: Layer>(
    device: vk::Device,
    p_allocator: *const vk::AllocationCallbacks,
) {
    trace!("vkDestroyDevice called");
    if device == vk::Device::null() {
        return;
    }

    let table_ref = trampoline::device_table(device);
    let table = unsafe { table_ref.get() };
    // Queues cannot be queried once the device is gone.
    let queues = unsafe { queue::enumerate(table) };

    match <L::Device as DeviceOverrides>::DESTROY_DEVICE {
        Some(hook) => unsafe { hook(table, device, p_allocator) },
        None => unsafe { table.destroy_device(device, p_allocator) },
    }

    debug!("device dispatch table cleanup");
    for queue in queues {
        QUEUES.remove(queue.queue);
    }
    if const { has_command_buffer_overrides::<L>() } {
        COMMAND_BUFFERS.retain(|_, data| data.device != table_ref);
    }
    DEVICES.remove(device);
}

