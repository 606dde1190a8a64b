mod common;

use core::ptr;

use vkroots::{
    DeviceDispatch, DeviceOverrides, InstanceOverrides, LAYER_NEGOTIATE_INTERFACE_STRUCT, Layer,
    NegotiateLayerInterface, NoOverrides, PhysicalDeviceDispatch, PhysicalDeviceOverrides,
    ash::vk, pfn,
};

use common::negotiate;

struct Images;

impl DeviceOverrides for Images {
    const CREATE_IMAGE: Option<pfn::CreateImage> = Some(create_image);
}

unsafe fn create_image(
    dispatch: &DeviceDispatch,
    device: vk::Device,
    p_create_info: *const vk::ImageCreateInfo,
    p_allocator: *const vk::AllocationCallbacks,
    p_image: *mut vk::Image,
) -> vk::Result {
    unsafe { dispatch.create_image(device, p_create_info, p_allocator, p_image) }
}

struct ImageLayer;

impl Layer for ImageLayer {
    type Instance = NoOverrides;
    type PhysicalDevice = NoOverrides;
    type Device = Images;
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
    unsafe { dispatch.get_physical_device_features(physical_device, p_features) }
}

struct FeatureLayer;

impl Layer for FeatureLayer {
    type Instance = NoOverrides;
    type PhysicalDevice = Features;
    type Device = NoOverrides;
}

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
    unsafe { next(p_create_info, p_allocator, p_instance) }
}

struct CreationLayer;

impl Layer for CreationLayer {
    type Instance = Creation;
    type PhysicalDevice = NoOverrides;
    type Device = NoOverrides;
}

vkroots::declare_layer!(ImageLayer, "vkroots_test_negotiate");

fn published(interface: &NegotiateLayerInterface) -> [bool; 3] {
    [
        interface.pfn_get_instance_proc_addr.is_some(),
        interface.pfn_get_physical_device_proc_addr.is_some(),
        interface.pfn_get_device_proc_addr.is_some(),
    ]
}

#[test]
fn null_layer_publishes_no_resolvers() {
    let (res, interface) = negotiate::<NoOverrides>();

    assert_eq!(res, vk::Result::SUCCESS);
    assert_eq!(interface.loader_layer_interface_version, 2);
    assert_eq!(published(&interface), [false, false, false]);
}

#[test]
fn instance_override_publishes_instance_resolver() {
    let (res, interface) = negotiate::<CreationLayer>();

    assert_eq!(res, vk::Result::SUCCESS);
    assert_eq!(published(&interface), [true, false, false]);
}

#[test]
fn physical_device_override_publishes_physical_device_resolver() {
    let (res, interface) = negotiate::<FeatureLayer>();

    assert_eq!(res, vk::Result::SUCCESS);
    assert_eq!(published(&interface), [true, true, false]);
}

#[test]
fn device_override_publishes_every_resolver() {
    let (res, interface) = negotiate::<ImageLayer>();

    assert_eq!(res, vk::Result::SUCCESS);
    assert_eq!(published(&interface), [true, true, true]);
}

#[test]
fn newer_loader_is_stamped_down() {
    let mut interface = common::negotiate_interface(5);
    let res = unsafe { vkroots::negotiate::<ImageLayer>(&mut interface) };

    assert_eq!(res, vk::Result::SUCCESS);
    assert_eq!(interface.loader_layer_interface_version, 2);
}

#[test]
fn loader_v1_is_rejected() {
    let mut interface = common::negotiate_interface(1);
    interface.pfn_get_instance_proc_addr = Some(common::get_instance_proc_addr);
    let res = unsafe { vkroots::negotiate::<ImageLayer>(&mut interface) };

    assert_eq!(res, vk::Result::ERROR_INITIALIZATION_FAILED);
    assert_eq!(interface.loader_layer_interface_version, 1);
    assert_eq!(
        interface.pfn_get_instance_proc_addr.map(|f| f as usize),
        Some(common::get_instance_proc_addr as usize)
    );
    assert!(interface.pfn_get_physical_device_proc_addr.is_none());
    assert!(interface.pfn_get_device_proc_addr.is_none());
}

#[test]
fn invalid_record_is_rejected() {
    let res = unsafe { vkroots::negotiate::<ImageLayer>(ptr::null_mut()) };
    assert_eq!(res, vk::Result::ERROR_INITIALIZATION_FAILED);

    let mut interface = common::negotiate_interface(2);
    interface.s_type = LAYER_NEGOTIATE_INTERFACE_STRUCT + 1;
    let res = unsafe { vkroots::negotiate::<ImageLayer>(&mut interface) };

    assert_eq!(res, vk::Result::ERROR_INITIALIZATION_FAILED);
    assert_eq!(published(&interface), [false, false, false]);
}

#[test]
fn declared_export_negotiates_layer() {
    let mut interface = common::negotiate_interface(2);
    let res = unsafe { vk_negotiate_loader_layer_interface_version(&mut interface) };

    assert_eq!(res, vk::Result::SUCCESS);
    assert_eq!(published(&interface), [true, true, true]);
}
