mod common;

use core::ptr;

use vkroots::{
    InstanceDispatch, InstanceOverrides, Layer, LayerError, NoOverrides, PhysicalDeviceDispatch,
    PhysicalDeviceOverrides,
    ash::vk,
    chain, pfn,
    registry::{INSTANCES, PHYSICAL_DEVICES},
};

use common::{Event, InstanceChain, cast, events, physical_devices, record, setup};

struct Creation;

impl InstanceOverrides for Creation {
    const CREATE_INSTANCE: Option<pfn::CreateInstance> = Some(create_instance);
}

unsafe fn create_instance(
    next: vk::PFN_vkCreateInstance,
    p_create_info: *const vk::InstanceCreateInfo,
    p_allocator: *const vk::AllocationCallbacks,
    p_instance: *mut vk::Instance,
) -> vk::Result {
    record(Event::Override("vkCreateInstance"));
    unsafe { next(p_create_info, p_allocator, p_instance) }
}

struct CreationLayer;

impl Layer for CreationLayer {
    type Instance = Creation;
    type PhysicalDevice = NoOverrides;
    type Device = NoOverrides;
}

struct Features;

impl PhysicalDeviceOverrides for Features {
    const GET_PHYSICAL_DEVICE_FEATURES: Option<pfn::GetPhysicalDeviceFeatures> =
        Some(get_physical_device_features);
}

unsafe fn get_physical_device_features(
    dispatch: &PhysicalDeviceDispatch,
    physical_device: vk::PhysicalDevice,
    p_features: *mut vk::PhysicalDeviceFeatures,
) {
    record(Event::Override("vkGetPhysicalDeviceFeatures"));
    unsafe { dispatch.get_physical_device_features(physical_device, p_features) }
}

struct FeatureLayer;

impl Layer for FeatureLayer {
    type Instance = NoOverrides;
    type PhysicalDevice = Features;
    type Device = NoOverrides;
}

const NULL_GIPA: vk::PFN_vkGetInstanceProcAddr =
    vkroots::instance::get_instance_proc_addr::<NoOverrides>;

fn address(f: vk::PFN_vkVoidFunction) -> Option<usize> {
    f.map(|f| f as usize)
}

#[test]
fn instance_lifecycle_registers_physical_devices() {
    let _guard = setup();
    let chain = InstanceChain::new(1);

    let (res, instance) = unsafe { common::create_instance(NULL_GIPA, &chain) };
    assert_eq!(res, vk::Result::SUCCESS);

    let [first, second] = physical_devices(instance);
    assert!(INSTANCES.contains(instance));
    assert!(PHYSICAL_DEVICES.contains(first));
    assert!(PHYSICAL_DEVICES.contains(second));

    let table = unsafe { InstanceDispatch::find(instance) }.expect("instance is registered");
    assert_eq!(table.instance, instance);
    assert_eq!(table.physical_devices, [first, second]);

    let physical_device_table =
        unsafe { PhysicalDeviceDispatch::find(second) }.expect("physical device is registered");
    assert_eq!(physical_device_table.physical_device, second);
    assert_eq!(physical_device_table.instance().instance, instance);

    unsafe { common::destroy_instance(NULL_GIPA, instance) };
    assert_eq!(
        events(),
        [
            Event::CreateInstance,
            Event::DestroyInstance {
                instance_registered: true
            },
        ]
    );
    assert!(!INSTANCES.contains(instance));
    assert!(!PHYSICAL_DEVICES.contains(first));
    assert!(!PHYSICAL_DEVICES.contains(second));
}

#[test]
fn create_instance_advances_link_chain() {
    let _guard = setup();
    let chain = InstanceChain::new(2);
    assert_eq!(chain.current(), chain.link(0));

    let (res, instance) = unsafe { common::create_instance(NULL_GIPA, &chain) };
    assert_eq!(res, vk::Result::SUCCESS);
    assert_eq!(chain.current(), chain.link(1));

    let link = unsafe { chain::take_instance_link(chain.as_ptr()) }.expect("second link is left");
    assert_eq!(
        link.get_instance_proc_addr as usize,
        common::get_instance_proc_addr as usize
    );
    assert!(chain.current().is_null());
    assert_eq!(
        unsafe { chain::take_instance_link(chain.as_ptr()) }.err(),
        Some(LayerError::LinkChainExhausted)
    );

    unsafe { common::destroy_instance(NULL_GIPA, instance) };
}

#[test]
fn create_instance_override_wraps_next_layer() {
    let _guard = setup();
    let (res, interface) = common::negotiate::<CreationLayer>();
    assert_eq!(res, vk::Result::SUCCESS);
    let get_instance_proc_addr = interface
        .pfn_get_instance_proc_addr
        .expect("instance resolver is published");

    let (res, instance) =
        unsafe { common::create_instance(get_instance_proc_addr, &InstanceChain::new(1)) };
    assert_eq!(res, vk::Result::SUCCESS);
    assert!(INSTANCES.contains(instance));
    assert_eq!(
        events(),
        [Event::Override("vkCreateInstance"), Event::CreateInstance]
    );

    unsafe { common::destroy_instance(get_instance_proc_addr, instance) };
    assert!(!INSTANCES.contains(instance));
}

#[test]
fn failed_create_instance_leaves_registry_untouched() {
    let _guard = setup();
    common::FAIL_CREATE_INSTANCE.store(true, core::sync::atomic::Ordering::SeqCst);
    let instances = INSTANCES.len();
    let physical_devices = PHYSICAL_DEVICES.len();

    let get_instance_proc_addr: vk::PFN_vkGetInstanceProcAddr =
        vkroots::instance::get_instance_proc_addr::<CreationLayer>;
    let (res, instance) =
        unsafe { common::create_instance(get_instance_proc_addr, &InstanceChain::new(1)) };

    assert_eq!(res, vk::Result::ERROR_INCOMPATIBLE_DRIVER);
    assert_eq!(instance, vk::Instance::null());
    assert_eq!(INSTANCES.len(), instances);
    assert_eq!(PHYSICAL_DEVICES.len(), physical_devices);
    assert_eq!(events(), [Event::Override("vkCreateInstance")]);
}

#[test]
fn missing_link_fails_initialization() {
    let _guard = setup();
    let create: vk::PFN_vkCreateInstance =
        unsafe { cast(NULL_GIPA(vk::Instance::null(), c"vkCreateInstance".as_ptr())) };

    let create_info = vk::InstanceCreateInfo::default();
    let mut instance = vk::Instance::null();
    let res = unsafe { create(&create_info, ptr::null(), &mut instance) };

    assert_eq!(res, vk::Result::ERROR_INITIALIZATION_FAILED);
    assert_eq!(instance, vk::Instance::null());
    assert!(events().is_empty());
}

#[test]
fn resolver_falls_back_to_next_layer() {
    let _guard = setup();
    let (res, instance) = unsafe { common::create_instance(NULL_GIPA, &InstanceChain::new(1)) };
    assert_eq!(res, vk::Result::SUCCESS);

    let name = c"vkCreateImage";
    assert_eq!(
        address(unsafe { NULL_GIPA(instance, name.as_ptr()) }),
        address(unsafe { common::get_instance_proc_addr(instance, name.as_ptr()) })
    );
    assert!(unsafe { NULL_GIPA(instance, c"vkGetInstanceProcAddr".as_ptr()) }.is_some());
    assert!(unsafe { NULL_GIPA(instance, c"vkCmdDrawImaginaryEXT".as_ptr()) }.is_none());
    assert!(unsafe { NULL_GIPA(vk::Instance::null(), name.as_ptr()) }.is_none());
    assert!(unsafe { NULL_GIPA(instance, ptr::null()) }.is_none());

    unsafe { common::destroy_instance(NULL_GIPA, instance) };
}

#[test]
fn physical_device_override_is_resolved() {
    let _guard = setup();
    let (res, interface) = common::negotiate::<FeatureLayer>();
    assert_eq!(res, vk::Result::SUCCESS);
    let get_instance_proc_addr = interface
        .pfn_get_instance_proc_addr
        .expect("instance resolver is published");
    let get_physical_device_proc_addr = interface
        .pfn_get_physical_device_proc_addr
        .expect("physical device resolver is published");

    let (res, instance) =
        unsafe { common::create_instance(get_instance_proc_addr, &InstanceChain::new(1)) };
    assert_eq!(res, vk::Result::SUCCESS);

    let name = c"vkGetPhysicalDeviceFeatures";
    let trampoline = unsafe { get_instance_proc_addr(instance, name.as_ptr()) };
    let next = address(unsafe { common::get_instance_proc_addr(instance, name.as_ptr()) });
    assert!(trampoline.is_some());
    assert_ne!(address(trampoline), next);
    let resolved = unsafe { get_physical_device_proc_addr(instance, name.as_ptr()) };
    assert!(resolved.is_some());
    assert_ne!(address(resolved), next);
    assert!(
        unsafe {
            get_physical_device_proc_addr(instance, c"vkGetPhysicalDeviceProperties".as_ptr())
        }
        .is_none()
    );

    let get_features: vk::PFN_vkGetPhysicalDeviceFeatures = unsafe { cast(trampoline) };
    let mut features = vk::PhysicalDeviceFeatures::default();
    unsafe { get_features(physical_devices(instance)[1], &mut features) };

    assert_eq!(features.robust_buffer_access, vk::TRUE);
    assert_eq!(
        events(),
        [
            Event::CreateInstance,
            Event::Override("vkGetPhysicalDeviceFeatures"),
            Event::GetPhysicalDeviceFeatures,
        ]
    );

    unsafe { common::destroy_instance(get_instance_proc_addr, instance) };
}
