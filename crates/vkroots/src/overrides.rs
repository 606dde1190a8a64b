//! Opt-in interception of entry points.
//!
//! A layer picks the entry points it wants by setting the matching associated const of
//! [`InstanceOverrides`], [`PhysicalDeviceOverrides`] or [`DeviceOverrides`] to `Some`. The
//! resolvers only hand out a trampoline for entry points whose const is set, everything else
//! goes straight to the next layer.
//!
//! ```ignore
//! struct Images;
//!
//! impl DeviceOverrides for Images {
//!     const CREATE_IMAGE: Option<pfn::CreateImage> = Some(create_image);
//! }
//!
//! unsafe fn create_image(
//!     dispatch: &DeviceDispatch,
//!     device: vk::Device,
//!     p_create_info: *const vk::ImageCreateInfo,
//!     p_allocator: *const vk::AllocationCallbacks,
//!     p_image: *mut vk::Image,
//! ) -> vk::Result {
//!     unsafe { dispatch.create_image(device, p_create_info, p_allocator, p_image) }
//! }
//! ```

use crate::entry_points::entry_points;

pub mod pfn {
    //! Signatures of override functions.
    //!
    //! Each one is the Vulkan command with the dispatch table of its scope prepended.

    use core::ffi::{c_char, c_int, c_void};

    use ash::vk;

    use crate::{DeviceDispatch, InstanceDispatch, PhysicalDeviceDispatch, entry_points::entry_points};

    /// `vkCreateInstance` has no dispatch table yet, so it gets the next layer's function instead.
    pub type CreateInstance = unsafe fn(
        next: vk::PFN_vkCreateInstance,
        p_create_info: *const vk::InstanceCreateInfo,
        p_allocator: *const vk::AllocationCallbacks,
        p_instance: *mut vk::Instance,
    ) -> vk::Result;

    macro_rules! aliases {
        ($dispatch:ty; $($name:ident : $snake:ident ($($arg:ident : $ty:ty),*) $(-> $ret:ty)?;)*) => {
            $(
                #[doc = concat!("Override of `vk", stringify!($name), "`.")]
                pub type $name = unsafe fn(&$dispatch, $($ty),*) $(-> $ret)?;
            )*
        };
    }

    macro_rules! pfn_aliases {
        (
            instance { lifecycle { $($instance_lifecycle:tt)* } forward { $($instance:tt)* } }
            physical_device { lifecycle { $($physical_device_lifecycle:tt)* } forward { $($physical_device:tt)* } }
            device { lifecycle { $($device_lifecycle:tt)* } forward { $($device:tt)* } }
            queue { forward { $($queue:tt)* } }
            command_buffer { forward { $($command_buffer:tt)* } }
        ) => {
            aliases! { InstanceDispatch; $($instance_lifecycle)* $($instance)* }
            aliases! { PhysicalDeviceDispatch; $($physical_device_lifecycle)* $($physical_device)* }
            aliases! {
                DeviceDispatch;
                $($device_lifecycle)* $($device)* $($queue)* $($command_buffer)*
            }
        };
    }

    entry_points!(pfn_aliases);
}

macro_rules! overrides_trait {
    (
        $(#[$meta:meta])*
        $trait:ident $(: $extra:ident: $extra_ty:ty = $extra_doc:literal)? {
            $($name:ident : $snake:ident ($($arg:ident : $ty:ty),*) $(-> $ret:ty)?;)*
        }
    ) => {
        paste::paste! {
            $(#[$meta])*
            pub trait $trait {
                $(
                    #[doc = $extra_doc]
                    const $extra: Option<$extra_ty> = None;
                )?

                $(
                    #[doc = "Override of `vk" $name "`."]
                    const [<$snake:upper>]: Option<pfn::$name> = None;
                )*
            }
        }
    };
}

macro_rules! predicate {
    (
        $(#[$meta:meta])*
        $vis:vis $fn_name:ident => $scope:ident: $trait:ident $(+ $extra:ident)? {
            $($name:ident : $snake:ident ($($arg:ident : $ty:ty),*) $(-> $ret:ty)?;)*
        }
    ) => {
        paste::paste! {
            $(#[$meta])*
            $vis const fn $fn_name<L: Layer>() -> bool {
                false
                    $(|| <L::$scope as $trait>::$extra.is_some())?
                    $(|| <L::$scope as $trait>::[<$snake:upper>].is_some())*
            }
        }
    };
}

macro_rules! overrides {
    (
        instance { lifecycle { $($instance_lifecycle:tt)* } forward { $($instance:tt)* } }
        physical_device { lifecycle { $($physical_device_lifecycle:tt)* } forward { $($physical_device:tt)* } }
        device { lifecycle { $($device_lifecycle:tt)* } forward { $($device:tt)* } }
        queue { forward { $($queue:tt)* } }
        command_buffer { forward { $($command_buffer:tt)* } }
    ) => {
        overrides_trait! {
            /// Instance level overrides.
            InstanceOverrides: CREATE_INSTANCE: pfn::CreateInstance = "Override of `vkCreateInstance`." {
                $($instance_lifecycle)* $($instance)*
            }
        }

        overrides_trait! {
            /// Physical device overrides, including `vkCreateDevice`.
            PhysicalDeviceOverrides {
                $($physical_device_lifecycle)* $($physical_device)*
            }
        }

        overrides_trait! {
            /// Device, queue and command buffer overrides.
            DeviceOverrides {
                $($device_lifecycle)* $($device)* $($queue)* $($command_buffer)*
            }
        }

        predicate! {
            /// Whether `L` overrides any instance level entry point.
            pub has_instance_overrides => Instance: InstanceOverrides + CREATE_INSTANCE {
                $($instance_lifecycle)* $($instance)*
            }
        }

        predicate! {
            /// Whether `L` overrides any physical device entry point.
            pub has_physical_device_overrides => PhysicalDevice: PhysicalDeviceOverrides {
                $($physical_device_lifecycle)* $($physical_device)*
            }
        }

        predicate! {
            /// Whether `L` overrides any device, queue or command buffer entry point.
            pub has_device_overrides => Device: DeviceOverrides {
                $($device_lifecycle)* $($device)* $($queue)* $($command_buffer)*
            }
        }

        predicate! {
            command_buffer_entry_points => Device: DeviceOverrides {
                $($command_buffer)*
            }
        }
    };
}

entry_points!(overrides);

/// Override packs of a layer, one per dispatch scope.
pub trait Layer: 'static {
    type Instance: InstanceOverrides;
    type PhysicalDevice: PhysicalDeviceOverrides;
    type Device: DeviceOverrides;
}

/// Override pack that intercepts nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOverrides;

impl InstanceOverrides for NoOverrides {}
impl PhysicalDeviceOverrides for NoOverrides {}
impl DeviceOverrides for NoOverrides {}

impl Layer for NoOverrides {
    type Instance = Self;
    type PhysicalDevice = Self;
    type Device = Self;
}

/// Whether `L` needs command buffers tracked, which is the case when it overrides a command
/// buffer entry point or one of the calls creating and freeing them.
pub const fn has_command_buffer_overrides<L: Layer>() -> bool {
    command_buffer_entry_points::<L>()
        || <L::Device as DeviceOverrides>::ALLOCATE_COMMAND_BUFFERS.is_some()
        || <L::Device as DeviceOverrides>::FREE_COMMAND_BUFFERS.is_some()
        || <L::Device as DeviceOverrides>::DESTROY_COMMAND_POOL.is_some()
}

/// Whether `L` overrides anything at all.
pub const fn has_any_overrides<L: Layer>() -> bool {
    has_instance_overrides::<L>() || has_physical_device_overrides::<L>() || has_device_overrides::<L>()
}
