//! In-process mock of the layer below, standing in for the loader terminator and the driver.

#![allow(dead_code)]

use core::{
    ffi::{CStr, c_char, c_int, c_void},
    mem, ptr,
    sync::atomic::{AtomicBool, AtomicU64, Ordering},
};
use std::sync::Once;

use parking_lot::{Mutex, MutexGuard, const_mutex};
use tracing::level_filters::LevelFilter;
use vkroots::{
    Layer, LAYER_NEGOTIATE_INTERFACE_STRUCT, NegotiateLayerInterface, PFN_GetPhysicalDeviceProcAddr,
    ash::vk::{self, Handle},
    chain::{
        LayerDeviceCreateInfo, LayerDeviceCreateInfoUnion, LayerDeviceLink,
        LayerInstanceCreateInfo, LayerInstanceCreateInfoUnion, LayerInstanceLink,
        VK_LAYER_LINK_INFO, VK_LOADER_DATA_CALLBACK,
    },
    registry::{DEVICES, INSTANCES, QUEUES},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    CreateInstance,
    DestroyInstance { instance_registered: bool },
    CreateDevice,
    DestroyDevice { device_registered: bool, queues_registered: usize },
    GetDeviceQueue { family_index: u32, index: u32 },
    GetDeviceQueue2 { family_index: u32, index: u32 },
    GetPhysicalDeviceFeatures,
    CreateImage { device: vk::Device, width: u32, height: u32 },
    AllocateCommandBuffers(u32),
    FreeCommandBuffers(u32),
    DestroyCommandPool(vk::CommandPool),
    QueueSubmit { queue: vk::Queue, submit_count: u32, fence: vk::Fence },
    BeginCommandBuffer(vk::CommandBuffer),
    GetMemoryFd(vk::DeviceMemory),
    Override(&'static str),
}

static SERIAL: Mutex<()> = const_mutex(());
static EVENTS: Mutex<Vec<Event>> = const_mutex(Vec::new());
static HANDED_QUEUES: Mutex<Vec<(vk::Device, vk::Queue)>> = const_mutex(Vec::new());
static NEXT_HANDLE: AtomicU64 = AtomicU64::new(0x100);

pub static FAIL_CREATE_INSTANCE: AtomicBool = AtomicBool::new(false);
pub static FAIL_CREATE_DEVICE: AtomicBool = AtomicBool::new(false);
pub static FAIL_ALLOCATE: AtomicBool = AtomicBool::new(false);
pub static HIDE_GET_DEVICE_QUEUE: AtomicBool = AtomicBool::new(false);

/// Serialize tests sharing the global registries and reset the mock.
pub fn setup() -> MutexGuard<'static, ()> {
    static TRACING: Once = Once::new();
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(LevelFilter::TRACE)
            .try_init();
    });

    let guard = SERIAL.lock();
    EVENTS.lock().clear();
    HANDED_QUEUES.lock().clear();
    FAIL_CREATE_INSTANCE.store(false, Ordering::SeqCst);
    FAIL_CREATE_DEVICE.store(false, Ordering::SeqCst);
    FAIL_ALLOCATE.store(false, Ordering::SeqCst);
    HIDE_GET_DEVICE_QUEUE.store(false, Ordering::SeqCst);
    guard
}

pub fn record(event: Event) {
    EVENTS.lock().push(event);
}

pub fn events() -> Vec<Event> {
    EVENTS.lock().clone()
}

pub fn next_handle() -> u64 {
    NEXT_HANDLE.fetch_add(1, Ordering::SeqCst)
}

pub fn physical_devices(instance: vk::Instance) -> [vk::PhysicalDevice; 2] {
    let base = instance.as_raw() << 4;
    [
        vk::PhysicalDevice::from_raw(base | 1),
        vk::PhysicalDevice::from_raw(base | 2),
    ]
}

pub fn queue_handle(device: vk::Device, family_index: u32, index: u32, flagged: bool) -> vk::Queue {
    vk::Queue::from_raw(
        (device.as_raw() << 12)
            | ((flagged as u64) << 11)
            | ((family_index as u64) << 4)
            | index as u64,
    )
}

/// Cast a resolved entry point to its typed signature.
///
/// # Safety
/// `F` must be the function pointer type of the entry point.
pub unsafe fn cast<F: Copy>(f: vk::PFN_vkVoidFunction) -> F {
    let f = f.expect("entry point is null");
    assert_eq!(mem::size_of::<F>(), mem::size_of::<unsafe extern "system" fn()>());
    unsafe { mem::transmute_copy(&f) }
}

macro_rules! pfn {
    ($f:expr => $ty:ty) => {
        Some(unsafe { mem::transmute::<$ty, unsafe extern "system" fn()>($f) })
    };
}

pub unsafe extern "system" fn get_instance_proc_addr(
    _: vk::Instance,
    name: *const c_char,
) -> vk::PFN_vkVoidFunction {
    match unsafe { CStr::from_ptr(name) }.to_bytes() {
        b"vkGetInstanceProcAddr" => pfn!(get_instance_proc_addr => vk::PFN_vkGetInstanceProcAddr),
        b"vkCreateInstance" => pfn!(mock_create_instance => vk::PFN_vkCreateInstance),
        b"vkDestroyInstance" => pfn!(mock_destroy_instance => vk::PFN_vkDestroyInstance),
        b"vkEnumeratePhysicalDevices" => {
            pfn!(enumerate_physical_devices => vk::PFN_vkEnumeratePhysicalDevices)
        }
        b"vkCreateDevice" => pfn!(mock_create_device => vk::PFN_vkCreateDevice),
        b"vkGetPhysicalDeviceFeatures" => {
            pfn!(get_physical_device_features => vk::PFN_vkGetPhysicalDeviceFeatures)
        }
        _ => device_proc(name),
    }
}

pub unsafe extern "system" fn get_physical_device_proc_addr(
    _: vk::Instance,
    name: *const c_char,
) -> vk::PFN_vkVoidFunction {
    match unsafe { CStr::from_ptr(name) }.to_bytes() {
        b"vkGetPhysicalDeviceFeatures" => {
            pfn!(get_physical_device_features => vk::PFN_vkGetPhysicalDeviceFeatures)
        }
        _ => None,
    }
}

pub unsafe extern "system" fn get_device_proc_addr(
    _: vk::Device,
    name: *const c_char,
) -> vk::PFN_vkVoidFunction {
    device_proc(name)
}

fn device_proc(name: *const c_char) -> vk::PFN_vkVoidFunction {
    match unsafe { CStr::from_ptr(name) }.to_bytes() {
        b"vkGetDeviceProcAddr" => pfn!(get_device_proc_addr => vk::PFN_vkGetDeviceProcAddr),
        b"vkDestroyDevice" => pfn!(mock_destroy_device => vk::PFN_vkDestroyDevice),
        b"vkGetDeviceQueue" if HIDE_GET_DEVICE_QUEUE.load(Ordering::SeqCst) => None,
        b"vkGetDeviceQueue" => pfn!(get_device_queue => vk::PFN_vkGetDeviceQueue),
        b"vkGetDeviceQueue2" => pfn!(get_device_queue2 => vk::PFN_vkGetDeviceQueue2),
        b"vkCreateImage" => pfn!(create_image => vk::PFN_vkCreateImage),
        b"vkAllocateCommandBuffers" => {
            pfn!(allocate_command_buffers => vk::PFN_vkAllocateCommandBuffers)
        }
        b"vkFreeCommandBuffers" => pfn!(free_command_buffers => vk::PFN_vkFreeCommandBuffers),
        b"vkDestroyCommandPool" => pfn!(destroy_command_pool => vk::PFN_vkDestroyCommandPool),
        b"vkQueueSubmit" => pfn!(queue_submit => vk::PFN_vkQueueSubmit),
        b"vkBeginCommandBuffer" => pfn!(begin_command_buffer => vk::PFN_vkBeginCommandBuffer),
        b"vkGetMemoryFdKHR" => pfn!(get_memory_fd => vk::PFN_vkGetMemoryFdKHR),
        _ => None,
    }
}

unsafe extern "system" fn mock_create_instance(
    _: *const vk::InstanceCreateInfo,
    _: *const vk::AllocationCallbacks,
    p_instance: *mut vk::Instance,
) -> vk::Result {
    if FAIL_CREATE_INSTANCE.load(Ordering::SeqCst) {
        return vk::Result::ERROR_INCOMPATIBLE_DRIVER;
    }

    unsafe { *p_instance = vk::Instance::from_raw(next_handle()) };
    record(Event::CreateInstance);
    vk::Result::SUCCESS
}

unsafe extern "system" fn mock_destroy_instance(
    instance: vk::Instance,
    _: *const vk::AllocationCallbacks,
) {
    record(Event::DestroyInstance {
        instance_registered: INSTANCES.contains(instance),
    });
}

unsafe extern "system" fn enumerate_physical_devices(
    instance: vk::Instance,
    p_physical_device_count: *mut u32,
    p_physical_devices: *mut vk::PhysicalDevice,
) -> vk::Result {
    let physical_devices = physical_devices(instance);
    if p_physical_devices.is_null() {
        unsafe { *p_physical_device_count = physical_devices.len() as u32 };
        return vk::Result::SUCCESS;
    }

    let count = unsafe { *p_physical_device_count }.min(physical_devices.len() as u32);
    for (i, &physical_device) in physical_devices.iter().take(count as usize).enumerate() {
        unsafe { *p_physical_devices.add(i) = physical_device };
    }
    unsafe { *p_physical_device_count = count };

    if (count as usize) < physical_devices.len() {
        vk::Result::INCOMPLETE
    } else {
        vk::Result::SUCCESS
    }
}

unsafe extern "system" fn get_physical_device_features(
    _: vk::PhysicalDevice,
    p_features: *mut vk::PhysicalDeviceFeatures,
) {
    unsafe { (*p_features).robust_buffer_access = vk::TRUE };
    record(Event::GetPhysicalDeviceFeatures);
}

unsafe extern "system" fn mock_create_device(
    _: vk::PhysicalDevice,
    _: *const vk::DeviceCreateInfo,
    _: *const vk::AllocationCallbacks,
    p_device: *mut vk::Device,
) -> vk::Result {
    if FAIL_CREATE_DEVICE.load(Ordering::SeqCst) {
        return vk::Result::ERROR_FEATURE_NOT_PRESENT;
    }

    unsafe { *p_device = vk::Device::from_raw(next_handle()) };
    record(Event::CreateDevice);
    vk::Result::SUCCESS
}

unsafe extern "system" fn mock_destroy_device(device: vk::Device, _: *const vk::AllocationCallbacks) {
    let queues_registered = HANDED_QUEUES
        .lock()
        .iter()
        .filter(|&&(owner, queue)| owner == device && QUEUES.contains(queue))
        .count();
    record(Event::DestroyDevice {
        device_registered: DEVICES.contains(device),
        queues_registered,
    });
}

fn hand_out(device: vk::Device, queue: vk::Queue) {
    let mut handed = HANDED_QUEUES.lock();
    if !handed.contains(&(device, queue)) {
        handed.push((device, queue));
    }
}

unsafe extern "system" fn get_device_queue(
    device: vk::Device,
    queue_family_index: u32,
    queue_index: u32,
    p_queue: *mut vk::Queue,
) {
    let queue = queue_handle(device, queue_family_index, queue_index, false);
    hand_out(device, queue);
    unsafe { *p_queue = queue };
    record(Event::GetDeviceQueue {
        family_index: queue_family_index,
        index: queue_index,
    });
}

unsafe extern "system" fn get_device_queue2(
    device: vk::Device,
    p_queue_info: *const vk::DeviceQueueInfo2,
    p_queue: *mut vk::Queue,
) {
    let info = unsafe { &*p_queue_info };
    let queue = queue_handle(device, info.queue_family_index, info.queue_index, true);
    hand_out(device, queue);
    unsafe { *p_queue = queue };
    record(Event::GetDeviceQueue2 {
        family_index: info.queue_family_index,
        index: info.queue_index,
    });
}

unsafe extern "system" fn create_image(
    device: vk::Device,
    p_create_info: *const vk::ImageCreateInfo,
    _: *const vk::AllocationCallbacks,
    p_image: *mut vk::Image,
) -> vk::Result {
    unsafe { *p_image = vk::Image::from_raw(next_handle()) };
    record(Event::CreateImage {
        device,
        width: unsafe { (*p_create_info).extent.width },
        height: unsafe { (*p_create_info).extent.height },
    });
    vk::Result::SUCCESS
}

unsafe extern "system" fn allocate_command_buffers(
    _: vk::Device,
    p_allocate_info: *const vk::CommandBufferAllocateInfo,
    p_command_buffers: *mut vk::CommandBuffer,
) -> vk::Result {
    if FAIL_ALLOCATE.load(Ordering::SeqCst) {
        return vk::Result::ERROR_OUT_OF_DEVICE_MEMORY;
    }

    let count = unsafe { (*p_allocate_info).command_buffer_count };
    for i in 0..count as usize {
        unsafe { *p_command_buffers.add(i) = vk::CommandBuffer::from_raw(next_handle()) };
    }
    record(Event::AllocateCommandBuffers(count));
    vk::Result::SUCCESS
}

unsafe extern "system" fn free_command_buffers(
    _: vk::Device,
    _: vk::CommandPool,
    command_buffer_count: u32,
    _: *const vk::CommandBuffer,
) {
    record(Event::FreeCommandBuffers(command_buffer_count));
}

unsafe extern "system" fn destroy_command_pool(
    _: vk::Device,
    command_pool: vk::CommandPool,
    _: *const vk::AllocationCallbacks,
) {
    record(Event::DestroyCommandPool(command_pool));
}

unsafe extern "system" fn queue_submit(
    queue: vk::Queue,
    submit_count: u32,
    _: *const vk::SubmitInfo,
    fence: vk::Fence,
) -> vk::Result {
    record(Event::QueueSubmit {
        queue,
        submit_count,
        fence,
    });
    vk::Result::SUCCESS
}

unsafe extern "system" fn begin_command_buffer(
    command_buffer: vk::CommandBuffer,
    _: *const vk::CommandBufferBeginInfo,
) -> vk::Result {
    record(Event::BeginCommandBuffer(command_buffer));
    vk::Result::SUCCESS
}

unsafe extern "system" fn get_memory_fd(
    _: vk::Device,
    p_get_fd_info: *const vk::MemoryGetFdInfoKHR,
    p_fd: *mut c_int,
) -> vk::Result {
    let info = unsafe { &*p_get_fd_info };
    unsafe { *p_fd = 7 };
    record(Event::GetMemoryFd(info.memory));
    vk::Result::SUCCESS
}

unsafe extern "system" fn set_device_loader_data(_: vk::Device, _: *mut c_void) -> vk::Result {
    vk::Result::SUCCESS
}

/// Run negotiation for `L` against a fresh version 2 record.
pub fn negotiate<L: Layer>() -> (vk::Result, NegotiateLayerInterface) {
    let mut interface = negotiate_interface(2);
    let res = unsafe { vkroots::negotiate::<L>(&mut interface) };
    (res, interface)
}

pub fn negotiate_interface(version: u32) -> NegotiateLayerInterface {
    NegotiateLayerInterface {
        s_type: LAYER_NEGOTIATE_INTERFACE_STRUCT,
        p_next: ptr::null_mut(),
        loader_layer_interface_version: version,
        pfn_get_instance_proc_addr: None,
        pfn_get_device_proc_addr: None,
        pfn_get_physical_device_proc_addr: None,
    }
}

/// Instance create info carrying `depth` link records, all pointing at the mock.
pub struct InstanceChain {
    links: Vec<*mut LayerInstanceLink>,
    info: *mut LayerInstanceCreateInfo,
    create_info: *mut vk::InstanceCreateInfo<'static>,
}

impl InstanceChain {
    pub fn new(depth: usize) -> Self {
        let mut links: Vec<*mut LayerInstanceLink> = Vec::with_capacity(depth);
        let mut next = ptr::null_mut();
        for _ in 0..depth {
            next = Box::into_raw(Box::new(LayerInstanceLink {
                p_next: next,
                pfn_next_get_instance_proc_addr: Some(get_instance_proc_addr),
                pfn_next_get_physical_device_proc_addr: Some(
                    get_physical_device_proc_addr as PFN_GetPhysicalDeviceProcAddr,
                ),
            }));
            links.insert(0, next);
        }

        let info = Box::into_raw(Box::new(LayerInstanceCreateInfo {
            s_type: vk::StructureType::LOADER_INSTANCE_CREATE_INFO,
            p_next: ptr::null(),
            function: VK_LAYER_LINK_INFO,
            u: LayerInstanceCreateInfoUnion { p_layer_info: next },
        }));

        let mut create_info = vk::InstanceCreateInfo::default();
        create_info.p_next = info.cast_const().cast();

        Self {
            links,
            info,
            create_info: Box::into_raw(Box::new(create_info)),
        }
    }

    pub fn as_ptr(&self) -> *const vk::InstanceCreateInfo<'static> {
        self.create_info
    }

    /// Link record at `depth`, zero being the first one.
    pub fn link(&self, depth: usize) -> *mut LayerInstanceLink {
        self.links[depth]
    }

    /// Link record the next layer would take.
    pub fn current(&self) -> *mut LayerInstanceLink {
        unsafe { (*self.info).u.p_layer_info }
    }
}

impl Drop for InstanceChain {
    fn drop(&mut self) {
        unsafe {
            drop(Box::from_raw(self.create_info));
            drop(Box::from_raw(self.info));
            for &link in &self.links {
                drop(Box::from_raw(link));
            }
        }
    }
}

/// Queue family requested by a device.
#[derive(Clone, Copy)]
pub struct QueueRequest {
    pub family_index: u32,
    pub count: u32,
    pub flags: vk::DeviceQueueCreateFlags,
}

impl QueueRequest {
    pub const fn new(family_index: u32, count: u32) -> Self {
        Self {
            family_index,
            count,
            flags: vk::DeviceQueueCreateFlags::empty(),
        }
    }

    pub const fn protected(family_index: u32, count: u32) -> Self {
        Self {
            family_index,
            count,
            flags: vk::DeviceQueueCreateFlags::PROTECTED,
        }
    }
}

/// Device create info with one link record, a loader data callback and queue requests.
pub struct DeviceChain {
    link: *mut LayerDeviceLink,
    info: *mut LayerDeviceCreateInfo,
    callback: *mut LayerDeviceCreateInfo,
    priorities: Vec<f32>,
    queue_infos: Vec<vk::DeviceQueueCreateInfo<'static>>,
    create_info: *mut vk::DeviceCreateInfo<'static>,
}

impl DeviceChain {
    pub fn new(queues: &[QueueRequest]) -> Self {
        let link = Box::into_raw(Box::new(LayerDeviceLink {
            p_next: ptr::null_mut(),
            pfn_next_get_instance_proc_addr: Some(get_instance_proc_addr),
            pfn_next_get_device_proc_addr: Some(get_device_proc_addr),
        }));

        let callback = Box::into_raw(Box::new(LayerDeviceCreateInfo {
            s_type: vk::StructureType::LOADER_DEVICE_CREATE_INFO,
            p_next: ptr::null(),
            function: VK_LOADER_DATA_CALLBACK,
            u: LayerDeviceCreateInfoUnion {
                pfn_set_device_loader_data: Some(set_device_loader_data),
            },
        }));

        let info = Box::into_raw(Box::new(LayerDeviceCreateInfo {
            s_type: vk::StructureType::LOADER_DEVICE_CREATE_INFO,
            p_next: callback.cast_const().cast(),
            function: VK_LAYER_LINK_INFO,
            u: LayerDeviceCreateInfoUnion { p_layer_info: link },
        }));

        let max_count = queues.iter().map(|queue| queue.count).max().unwrap_or(0);
        let priorities = vec![1.0; max_count as usize];
        let queue_infos: Vec<_> = queues
            .iter()
            .map(|queue| {
                let mut queue_info = vk::DeviceQueueCreateInfo::default();
                queue_info.flags = queue.flags;
                queue_info.queue_family_index = queue.family_index;
                queue_info.queue_count = queue.count;
                queue_info.p_queue_priorities = priorities.as_ptr();
                queue_info
            })
            .collect();

        let mut create_info = vk::DeviceCreateInfo::default();
        create_info.p_next = info.cast_const().cast();
        create_info.queue_create_info_count = queue_infos.len() as u32;
        create_info.p_queue_create_infos = queue_infos.as_ptr();

        Self {
            link,
            info,
            callback,
            priorities,
            queue_infos,
            create_info: Box::into_raw(Box::new(create_info)),
        }
    }

    pub fn as_ptr(&self) -> *const vk::DeviceCreateInfo<'static> {
        self.create_info
    }
}

impl Drop for DeviceChain {
    fn drop(&mut self) {
        unsafe {
            drop(Box::from_raw(self.create_info));
            drop(Box::from_raw(self.info));
            drop(Box::from_raw(self.callback));
            drop(Box::from_raw(self.link));
        }
    }
}

/// Create an instance through a layer's `vkGetInstanceProcAddr`.
pub unsafe fn create_instance(
    get_instance_proc_addr: vk::PFN_vkGetInstanceProcAddr,
    chain: &InstanceChain,
) -> (vk::Result, vk::Instance) {
    let create: vk::PFN_vkCreateInstance = unsafe {
        cast(get_instance_proc_addr(
            vk::Instance::null(),
            c"vkCreateInstance".as_ptr(),
        ))
    };

    let mut instance = vk::Instance::null();
    let res = unsafe { create(chain.as_ptr(), ptr::null(), &mut instance) };
    (res, instance)
}

pub unsafe fn destroy_instance(
    get_instance_proc_addr: vk::PFN_vkGetInstanceProcAddr,
    instance: vk::Instance,
) {
    let destroy: vk::PFN_vkDestroyInstance =
        unsafe { cast(get_instance_proc_addr(instance, c"vkDestroyInstance".as_ptr())) };
    unsafe { destroy(instance, ptr::null()) };
}

/// Create a device through a layer's `vkGetInstanceProcAddr`.
pub unsafe fn create_device(
    get_instance_proc_addr: vk::PFN_vkGetInstanceProcAddr,
    instance: vk::Instance,
    physical_device: vk::PhysicalDevice,
    chain: &DeviceChain,
) -> (vk::Result, vk::Device) {
    let create: vk::PFN_vkCreateDevice =
        unsafe { cast(get_instance_proc_addr(instance, c"vkCreateDevice".as_ptr())) };

    let mut device = vk::Device::null();
    let res = unsafe { create(physical_device, chain.as_ptr(), ptr::null(), &mut device) };
    (res, device)
}

pub unsafe fn destroy_device(
    get_device_proc_addr: vk::PFN_vkGetDeviceProcAddr,
    device: vk::Device,
) {
    let destroy: vk::PFN_vkDestroyDevice =
        unsafe { cast(get_device_proc_addr(device, c"vkDestroyDevice".as_ptr())) };
    unsafe { destroy(device, ptr::null()) };
}

/// Instance and device brought up through layer `L`.
pub struct TestDevice {
    pub get_instance_proc_addr: vk::PFN_vkGetInstanceProcAddr,
    pub get_device_proc_addr: vk::PFN_vkGetDeviceProcAddr,
    pub instance: vk::Instance,
    pub physical_device: vk::PhysicalDevice,
    pub device: vk::Device,
}

impl TestDevice {
    pub unsafe fn new<L: Layer>(queues: &[QueueRequest]) -> Self {
        let get_instance_proc_addr: vk::PFN_vkGetInstanceProcAddr =
            vkroots::instance::get_instance_proc_addr::<L>;
        let get_device_proc_addr: vk::PFN_vkGetDeviceProcAddr =
            vkroots::device::get_device_proc_addr::<L>;

        let (res, instance) =
            unsafe { create_instance(get_instance_proc_addr, &InstanceChain::new(1)) };
        assert_eq!(res, vk::Result::SUCCESS);

        let physical_device = physical_devices(instance)[0];
        let (res, device) = unsafe {
            create_device(
                get_instance_proc_addr,
                instance,
                physical_device,
                &DeviceChain::new(queues),
            )
        };
        assert_eq!(res, vk::Result::SUCCESS);

        Self {
            get_instance_proc_addr,
            get_device_proc_addr,
            instance,
            physical_device,
            device,
        }
    }

    /// Resolve a device level entry point through the layer.
    pub unsafe fn device_proc<F: Copy>(&self, name: &CStr) -> F {
        unsafe { cast((self.get_device_proc_addr)(self.device, name.as_ptr())) }
    }

    pub unsafe fn destroy(self) {
        unsafe {
            destroy_device(self.get_device_proc_addr, self.device);
            destroy_instance(self.get_instance_proc_addr, self.instance);
        }
    }
}
