//! Function pointer blocks resolved from the next layer.

use core::{
    ffi::{CStr, c_char, c_int, c_void},
    mem,
};

use ash::vk;
use tracing::error;

use crate::entry_points::{entry_name, entry_points};

/// Log and abort a call into an entry point the next layer did not provide.
#[cold]
#[track_caller]
pub(crate) fn missing_entry_point(name: &CStr) -> ! {
    error!("next layer does not provide {name:?}");
    panic!("called missing entry point {name:?}");
}

macro_rules! define_fns {
    (
        $(#[$meta:meta])*
        $fns:ident {
            $($name:ident : $snake:ident ($($arg:ident : $ty:ty),*) $(-> $ret:ty)?;)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy)]
        pub struct $fns {
            $(
                #[doc = concat!("Next layer's `vk", stringify!($name), "`, `None` if unavailable.")]
                pub $snake: Option<unsafe extern "system" fn($($ty),*) $(-> $ret)?>,
            )*
        }

        impl $fns {
            /// Resolve every entry point through `load`, which is handed canonical names.
            ///
            /// # Safety
            /// `load` must return pointers whose signatures match the requested name.
            pub unsafe fn load(mut load: impl FnMut(&CStr) -> vk::PFN_vkVoidFunction) -> Self {
                Self {
                    $(
                        $snake: unsafe {
                            mem::transmute::<
                                vk::PFN_vkVoidFunction,
                                Option<unsafe extern "system" fn($($ty),*) $(-> $ret)?>,
                            >(load(entry_name!($name)))
                        },
                    )*
                }
            }

            $(
                #[doc = concat!("Call the next layer's `vk", stringify!($name), "`.")]
                ///
                /// # Safety
                /// Same contract as the Vulkan command. Panics if the entry point is missing.
                #[inline]
                pub unsafe fn $snake(&self, $($arg: $ty),*) $(-> $ret)? {
                    match self.$snake {
                        Some(f) => unsafe { f($($arg),*) },
                        None => missing_entry_point(entry_name!($name)),
                    }
                }
            )*
        }
    };
}

macro_rules! dispatch_fns {
    (
        instance { lifecycle { $($instance_lifecycle:tt)* } forward { $($instance:tt)* } }
        physical_device { lifecycle { $($physical_device_lifecycle:tt)* } forward { $($physical_device:tt)* } }
        device { lifecycle { $($device_lifecycle:tt)* } forward { $($device:tt)* } }
        queue { forward { $($queue:tt)* } }
        command_buffer { forward { $($command_buffer:tt)* } }
    ) => {
        define_fns! {
            /// Instance level entry points of the next layer.
            InstanceFns { $($instance_lifecycle)* $($instance)* }
        }

        define_fns! {
            /// Physical device entry points of the next layer.
            ///
            /// Resolved through the instance, since the loader only exposes them there.
            PhysicalDeviceFns { $($physical_device_lifecycle)* $($physical_device)* }
        }

        define_fns! {
            /// Device, queue and command buffer entry points of the next layer.
            DeviceFns { $($device_lifecycle)* $($device)* $($queue)* $($command_buffer)* }
        }
    };
}

entry_points!(dispatch_fns);

#[cfg(test)]
mod tests {
    use core::{ffi::CStr, mem};

    use ash::vk;

    use super::{DeviceFns, InstanceFns};

    unsafe extern "system" fn device_wait_idle(_: vk::Device) -> vk::Result {
        vk::Result::ERROR_DEVICE_LOST
    }

    #[test]
    fn load_requests_canonical_names() {
        let mut names = Vec::new();
        let fns = unsafe {
            InstanceFns::load(|name| {
                names.push(name.to_owned());
                None
            })
        };

        assert!(names.iter().any(|name| name.as_c_str() == c"vkDestroyInstance"));
        assert!(names.iter().any(|name| name.as_c_str() == c"vkEnumeratePhysicalDevices"));
        assert!(fns.destroy_instance.is_none());
    }

    #[test]
    fn forwarding_method_calls_loaded_pointer() {
        let fns = unsafe {
            DeviceFns::load(|name: &CStr| {
                (name == c"vkDeviceWaitIdle").then(|| {
                    mem::transmute::<
                        unsafe extern "system" fn(vk::Device) -> vk::Result,
                        unsafe extern "system" fn(),
                    >(device_wait_idle)
                })
            })
        };

        assert!(fns.create_image.is_none());
        assert_eq!(
            unsafe { fns.device_wait_idle(vk::Device::null()) },
            vk::Result::ERROR_DEVICE_LOST
        );
    }
}
