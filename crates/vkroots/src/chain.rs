//! Loader link records threaded through `pNext` of instance and device create infos.

use core::{
    ffi::{c_char, c_void},
    ptr::NonNull,
};

use ash::vk;

use crate::error::LayerError;

/// `VkLayerFunction` value of a record carrying the next layer's link.
pub const VK_LAYER_LINK_INFO: i32 = 0;

/// `VkLayerFunction` value of a record carrying the loader data callback.
pub const VK_LOADER_DATA_CALLBACK: i32 = 1;

/// Next layer's `vk_layerGetPhysicalDeviceProcAddr`.
#[allow(non_camel_case_types)]
pub type PFN_GetPhysicalDeviceProcAddr =
    unsafe extern "system" fn(instance: vk::Instance, p_name: *const c_char) -> vk::PFN_vkVoidFunction;

/// Loader callback initializing the dispatch pointer of an instance level object made by a layer.
#[allow(non_camel_case_types)]
pub type PFN_vkSetInstanceLoaderData =
    unsafe extern "system" fn(instance: vk::Instance, object: *mut c_void) -> vk::Result;

/// Loader callback initializing the dispatch pointer of a device level object made by a layer.
#[allow(non_camel_case_types)]
pub type PFN_vkSetDeviceLoaderData =
    unsafe extern "system" fn(device: vk::Device, object: *mut c_void) -> vk::Result;

/// Vulkan structure for layer instance link info.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct LayerInstanceLink {
    /// Link of the layer after the next one.
    pub p_next: *mut LayerInstanceLink,

    /// Function pointer to next layer's `vkGetInstanceProcAddr`.
    pub pfn_next_get_instance_proc_addr: Option<vk::PFN_vkGetInstanceProcAddr>,

    /// Function pointer to next layer's `vk_layerGetPhysicalDeviceProcAddr`.
    pub pfn_next_get_physical_device_proc_addr: Option<PFN_GetPhysicalDeviceProcAddr>,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union LayerInstanceCreateInfoUnion {
    pub p_layer_info: *mut LayerInstanceLink,
    pub pfn_set_instance_loader_data: Option<PFN_vkSetInstanceLoaderData>,
}

/// Vulkan structure for layer instance create info.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct LayerInstanceCreateInfo {
    /// [`vk::StructureType::LOADER_INSTANCE_CREATE_INFO`].
    pub s_type: vk::StructureType,
    pub p_next: *const c_void,
    pub function: i32,
    pub u: LayerInstanceCreateInfoUnion,
}

/// Vulkan structure for layer device link info.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct LayerDeviceLink {
    /// Link of the layer after the next one.
    pub p_next: *mut LayerDeviceLink,

    /// Function pointer to next layer's `vkGetInstanceProcAddr`.
    pub pfn_next_get_instance_proc_addr: Option<vk::PFN_vkGetInstanceProcAddr>,

    /// Function pointer to next layer's `vkGetDeviceProcAddr`.
    pub pfn_next_get_device_proc_addr: Option<vk::PFN_vkGetDeviceProcAddr>,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union LayerDeviceCreateInfoUnion {
    pub p_layer_info: *mut LayerDeviceLink,
    pub pfn_set_device_loader_data: Option<PFN_vkSetDeviceLoaderData>,
}

/// Vulkan structure for layer device create info.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct LayerDeviceCreateInfo {
    /// [`vk::StructureType::LOADER_DEVICE_CREATE_INFO`].
    pub s_type: vk::StructureType,
    pub p_next: *const c_void,
    pub function: i32,
    pub u: LayerDeviceCreateInfoUnion,
}

/// What the next layer handed this one for a new instance.
#[derive(Clone, Copy)]
pub struct InstanceLink {
    pub get_instance_proc_addr: vk::PFN_vkGetInstanceProcAddr,
    pub get_physical_device_proc_addr: Option<PFN_GetPhysicalDeviceProcAddr>,
}

/// What the next layer handed this one for a new device.
#[derive(Clone, Copy)]
pub struct DeviceLink {
    pub get_instance_proc_addr: vk::PFN_vkGetInstanceProcAddr,
    pub get_device_proc_addr: vk::PFN_vkGetDeviceProcAddr,
}

trait LoaderCreateInfo {
    const S_TYPE: vk::StructureType;

    fn function(&self) -> i32;
}

impl LoaderCreateInfo for LayerInstanceCreateInfo {
    const S_TYPE: vk::StructureType = vk::StructureType::LOADER_INSTANCE_CREATE_INFO;

    fn function(&self) -> i32 {
        self.function
    }
}

impl LoaderCreateInfo for LayerDeviceCreateInfo {
    const S_TYPE: vk::StructureType = vk::StructureType::LOADER_DEVICE_CREATE_INFO;

    fn function(&self) -> i32 {
        self.function
    }
}

/// Find the first loader record of kind `T` with the given `function` in a `pNext` chain.
unsafe fn find_loader_info<T: LoaderCreateInfo>(
    mut next: *const c_void,
    function: i32,
) -> Option<NonNull<T>> {
    while let Some(info) = NonNull::new(next.cast::<vk::BaseInStructure>().cast_mut()) {
        let base = unsafe { info.as_ref() };
        if base.s_type == T::S_TYPE {
            let info = info.cast::<T>();
            if unsafe { info.as_ref() }.function() == function {
                return Some(info);
            }
        }

        next = base.p_next.cast();
    }

    None
}

/// Take this layer's link out of an instance create info.
///
/// The record is advanced in place so the next layer finds its own link.
///
/// # Safety
/// `create_info` must be null or point to a valid create info with a valid `pNext` chain.
pub unsafe fn take_instance_link(
    create_info: *const vk::InstanceCreateInfo,
) -> Result<InstanceLink, LayerError> {
    let head = unsafe { create_info.as_ref() }
        .ok_or(LayerError::MissingLinkInfo)?
        .p_next;
    let mut info = unsafe { find_loader_info::<LayerInstanceCreateInfo>(head, VK_LAYER_LINK_INFO) }
        .ok_or(LayerError::MissingLinkInfo)?;
    let info = unsafe { info.as_mut() };

    let link = unsafe { info.u.p_layer_info.as_ref() }.ok_or(LayerError::LinkChainExhausted)?;
    let next = InstanceLink {
        get_instance_proc_addr: link
            .pfn_next_get_instance_proc_addr
            .ok_or(LayerError::MissingProc(c"vkGetInstanceProcAddr"))?,
        get_physical_device_proc_addr: link.pfn_next_get_physical_device_proc_addr,
    };

    // Move chain info for next layer
    info.u.p_layer_info = link.p_next;
    Ok(next)
}

/// Take this layer's link out of a device create info.
///
/// # Safety
/// `create_info` must be null or point to a valid create info with a valid `pNext` chain.
pub unsafe fn take_device_link(
    create_info: *const vk::DeviceCreateInfo,
) -> Result<DeviceLink, LayerError> {
    let head = unsafe { create_info.as_ref() }
        .ok_or(LayerError::MissingLinkInfo)?
        .p_next;
    let mut info = unsafe { find_loader_info::<LayerDeviceCreateInfo>(head, VK_LAYER_LINK_INFO) }
        .ok_or(LayerError::MissingLinkInfo)?;
    let info = unsafe { info.as_mut() };

    let link = unsafe { info.u.p_layer_info.as_ref() }.ok_or(LayerError::LinkChainExhausted)?;
    let next = DeviceLink {
        get_instance_proc_addr: link
            .pfn_next_get_instance_proc_addr
            .ok_or(LayerError::MissingProc(c"vkGetInstanceProcAddr"))?,
        get_device_proc_addr: link
            .pfn_next_get_device_proc_addr
            .ok_or(LayerError::MissingProc(c"vkGetDeviceProcAddr"))?,
    };

    info.u.p_layer_info = link.p_next;
    Ok(next)
}

/// Loader data callback in an instance create info chain, if the loader passed one.
///
/// # Safety
/// Same as [`take_instance_link`].
pub unsafe fn instance_loader_data_callback(
    create_info: *const vk::InstanceCreateInfo,
) -> Option<PFN_vkSetInstanceLoaderData> {
    let head = unsafe { create_info.as_ref() }?.p_next;
    let info =
        unsafe { find_loader_info::<LayerInstanceCreateInfo>(head, VK_LOADER_DATA_CALLBACK) }?;
    unsafe { info.as_ref().u.pfn_set_instance_loader_data }
}

/// Loader data callback in a device create info chain, if the loader passed one.
///
/// # Safety
/// Same as [`take_device_link`].
pub unsafe fn device_loader_data_callback(
    create_info: *const vk::DeviceCreateInfo,
) -> Option<PFN_vkSetDeviceLoaderData> {
    let head = unsafe { create_info.as_ref() }?.p_next;
    let info = unsafe { find_loader_info::<LayerDeviceCreateInfo>(head, VK_LOADER_DATA_CALLBACK) }?;
    unsafe { info.as_ref().u.pfn_set_device_loader_data }
}

#[cfg(test)]
mod tests {
    use core::{
        ffi::{c_char, c_void},
        ptr,
    };

    use ash::vk::{self, Handle};

    use super::*;

    unsafe extern "system" fn first_gipa(_: vk::Instance, _: *const c_char) -> vk::PFN_vkVoidFunction {
        None
    }

    unsafe extern "system" fn second_gipa(_: vk::Instance, _: *const c_char) -> vk::PFN_vkVoidFunction {
        None
    }

    unsafe extern "system" fn gdpa(_: vk::Device, _: *const c_char) -> vk::PFN_vkVoidFunction {
        None
    }

    unsafe extern "system" fn set_device_loader_data(
        device: vk::Device,
        _: *mut c_void,
    ) -> vk::Result {
        if device.as_raw() == 0x77 {
            vk::Result::SUCCESS
        } else {
            vk::Result::ERROR_UNKNOWN
        }
    }

    fn instance_link(
        gipa: vk::PFN_vkGetInstanceProcAddr,
        p_next: *mut LayerInstanceLink,
    ) -> LayerInstanceLink {
        LayerInstanceLink {
            p_next,
            pfn_next_get_instance_proc_addr: Some(gipa),
            pfn_next_get_physical_device_proc_addr: None,
        }
    }

    fn instance_link_info(link: *mut LayerInstanceLink) -> LayerInstanceCreateInfo {
        LayerInstanceCreateInfo {
            s_type: vk::StructureType::LOADER_INSTANCE_CREATE_INFO,
            p_next: ptr::null(),
            function: VK_LAYER_LINK_INFO,
            u: LayerInstanceCreateInfoUnion { p_layer_info: link },
        }
    }

    #[test]
    fn take_instance_link_advances_chain() {
        let mut second = instance_link(second_gipa, ptr::null_mut());
        let mut first = instance_link(first_gipa, &mut second);
        let mut link_info = instance_link_info(&mut first);
        let create_info = vk::InstanceCreateInfo {
            p_next: (&raw mut link_info).cast_const().cast(),
            ..Default::default()
        };

        let link = unsafe { take_instance_link(&create_info) }.unwrap();
        assert_eq!(
            link.get_instance_proc_addr as usize,
            first_gipa as vk::PFN_vkGetInstanceProcAddr as usize
        );
        assert_eq!(unsafe { link_info.u.p_layer_info }, &raw mut second);

        let link = unsafe { take_instance_link(&create_info) }.unwrap();
        assert_eq!(
            link.get_instance_proc_addr as usize,
            second_gipa as vk::PFN_vkGetInstanceProcAddr as usize
        );

        assert_eq!(
            unsafe { take_instance_link(&create_info) }.err(),
            Some(LayerError::LinkChainExhausted)
        );
    }

    #[test]
    fn take_instance_link_skips_unrelated_records() {
        let mut link = instance_link(first_gipa, ptr::null_mut());
        let mut link_info = instance_link_info(&mut link);
        let callback_info = LayerInstanceCreateInfo {
            s_type: vk::StructureType::LOADER_INSTANCE_CREATE_INFO,
            p_next: (&raw mut link_info).cast_const().cast(),
            function: VK_LOADER_DATA_CALLBACK,
            u: LayerInstanceCreateInfoUnion {
                pfn_set_instance_loader_data: None,
            },
        };
        let debug_info = vk::DebugUtilsMessengerCreateInfoEXT {
            p_next: (&raw const callback_info).cast(),
            ..Default::default()
        };
        let create_info = vk::InstanceCreateInfo {
            p_next: (&raw const debug_info).cast(),
            ..Default::default()
        };

        assert!(unsafe { take_instance_link(&create_info) }.is_ok());
        assert!(unsafe { link_info.u.p_layer_info }.is_null());
    }

    #[test]
    fn missing_link_info_fails() {
        let create_info = vk::InstanceCreateInfo::default();
        assert_eq!(
            unsafe { take_instance_link(&create_info) }.err(),
            Some(LayerError::MissingLinkInfo)
        );
        assert_eq!(
            unsafe { take_instance_link(ptr::null()) }.err(),
            Some(LayerError::MissingLinkInfo)
        );
    }

    #[test]
    fn link_without_proc_addr_fails() {
        let mut link = LayerInstanceLink {
            p_next: ptr::null_mut(),
            pfn_next_get_instance_proc_addr: None,
            pfn_next_get_physical_device_proc_addr: None,
        };
        let mut link_info = instance_link_info(&mut link);
        let create_info = vk::InstanceCreateInfo {
            p_next: (&raw mut link_info).cast_const().cast(),
            ..Default::default()
        };

        assert_eq!(
            unsafe { take_instance_link(&create_info) }.err(),
            Some(LayerError::MissingProc(c"vkGetInstanceProcAddr"))
        );
        assert_eq!(unsafe { link_info.u.p_layer_info }, &raw mut link);
    }

    #[test]
    fn device_link_without_proc_addr_is_kept() {
        let mut second = LayerDeviceLink {
            p_next: ptr::null_mut(),
            pfn_next_get_instance_proc_addr: Some(second_gipa),
            pfn_next_get_device_proc_addr: Some(gdpa),
        };
        let mut first = LayerDeviceLink {
            p_next: &mut second,
            pfn_next_get_instance_proc_addr: Some(first_gipa),
            pfn_next_get_device_proc_addr: None,
        };
        let mut link_info = LayerDeviceCreateInfo {
            s_type: vk::StructureType::LOADER_DEVICE_CREATE_INFO,
            p_next: ptr::null(),
            function: VK_LAYER_LINK_INFO,
            u: LayerDeviceCreateInfoUnion {
                p_layer_info: &mut first,
            },
        };
        let create_info = vk::DeviceCreateInfo {
            p_next: (&raw mut link_info).cast_const().cast(),
            ..Default::default()
        };

        assert_eq!(
            unsafe { take_device_link(&create_info) }.err(),
            Some(LayerError::MissingProc(c"vkGetDeviceProcAddr"))
        );
        assert_eq!(unsafe { link_info.u.p_layer_info }, &raw mut first);
    }

    #[test]
    fn take_device_link_and_loader_data_callback() {
        let mut link = LayerDeviceLink {
            p_next: ptr::null_mut(),
            pfn_next_get_instance_proc_addr: Some(first_gipa),
            pfn_next_get_device_proc_addr: Some(gdpa),
        };
        let mut link_info = LayerDeviceCreateInfo {
            s_type: vk::StructureType::LOADER_DEVICE_CREATE_INFO,
            p_next: ptr::null(),
            function: VK_LAYER_LINK_INFO,
            u: LayerDeviceCreateInfoUnion {
                p_layer_info: &mut link,
            },
        };
        let callback_info = LayerDeviceCreateInfo {
            s_type: vk::StructureType::LOADER_DEVICE_CREATE_INFO,
            p_next: (&raw mut link_info).cast_const().cast(),
            function: VK_LOADER_DATA_CALLBACK,
            u: LayerDeviceCreateInfoUnion {
                pfn_set_device_loader_data: Some(set_device_loader_data),
            },
        };
        let create_info = vk::DeviceCreateInfo {
            p_next: (&raw const callback_info).cast(),
            ..Default::default()
        };

        let callback = unsafe { device_loader_data_callback(&create_info) }.unwrap();
        assert_eq!(
            unsafe { callback(vk::Device::from_raw(0x77), ptr::null_mut()) },
            vk::Result::SUCCESS
        );

        let link = unsafe { take_device_link(&create_info) }.unwrap();
        assert_eq!(
            link.get_device_proc_addr as usize,
            gdpa as vk::PFN_vkGetDeviceProcAddr as usize
        );
        assert_eq!(
            unsafe { take_device_link(&create_info) }.err(),
            Some(LayerError::LinkChainExhausted)
        );
        assert!(unsafe { instance_loader_data_callback(ptr::null()) }.is_none());
    }
}
