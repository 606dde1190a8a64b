//! Every entry point a layer built on this crate can intercept.
//!
//! Covers core Vulkan up to 1.3 and every extension command of the 1.3.281 registry, matching
//! the `PFN_vk*` signatures of the `ash` release in use. Promoted aliases such as
//! `vkGetPhysicalDeviceFeatures2KHR` are not listed separately.
//!
//! The list is grouped by the dispatchable handle passed as first argument, which decides the
//! registry a trampoline looks its dispatch table up in. Entries under `lifecycle` change the
//! registry and have hand-written trampolines; entries under `forward` get a generated one.
//!
//! Each entry reads `Name: snake_name(args..) -> Ret;` where `vkName` is the canonical Vulkan
//! name. Dispatch tables, override traits, trampolines and resolvers are all generated from it.

/// Invokes `$callback!` with the full entry point list.
macro_rules! entry_points {
    ($callback:ident) => {
        $callback! {
            instance {
                lifecycle {
                    DestroyInstance: destroy_instance(instance: vk::Instance, p_allocator: *const vk::AllocationCallbacks);
                }
                forward {
                    EnumeratePhysicalDevices: enumerate_physical_devices(instance: vk::Instance, p_physical_device_count: *mut u32, p_physical_devices: *mut vk::PhysicalDevice) -> vk::Result;
                    EnumeratePhysicalDeviceGroups: enumerate_physical_device_groups(instance: vk::Instance, p_physical_device_group_count: *mut u32, p_physical_device_group_properties: *mut vk::PhysicalDeviceGroupProperties) -> vk::Result;

                    DestroySurfaceKHR: destroy_surface_khr(instance: vk::Instance, surface: vk::SurfaceKHR, p_allocator: *const vk::AllocationCallbacks);
                    CreateWin32SurfaceKHR: create_win32_surface_khr(instance: vk::Instance, p_create_info: *const vk::Win32SurfaceCreateInfoKHR, p_allocator: *const vk::AllocationCallbacks, p_surface: *mut vk::SurfaceKHR) -> vk::Result;
                    CreateXlibSurfaceKHR: create_xlib_surface_khr(instance: vk::Instance, p_create_info: *const vk::XlibSurfaceCreateInfoKHR, p_allocator: *const vk::AllocationCallbacks, p_surface: *mut vk::SurfaceKHR) -> vk::Result;
                    CreateXcbSurfaceKHR: create_xcb_surface_khr(instance: vk::Instance, p_create_info: *const vk::XcbSurfaceCreateInfoKHR, p_allocator: *const vk::AllocationCallbacks, p_surface: *mut vk::SurfaceKHR) -> vk::Result;
                    CreateWaylandSurfaceKHR: create_wayland_surface_khr(instance: vk::Instance, p_create_info: *const vk::WaylandSurfaceCreateInfoKHR, p_allocator: *const vk::AllocationCallbacks, p_surface: *mut vk::SurfaceKHR) -> vk::Result;

                    CreateDebugUtilsMessengerEXT: create_debug_utils_messenger_ext(instance: vk::Instance, p_create_info: *const vk::DebugUtilsMessengerCreateInfoEXT, p_allocator: *const vk::AllocationCallbacks, p_messenger: *mut vk::DebugUtilsMessengerEXT) -> vk::Result;
                    DestroyDebugUtilsMessengerEXT: destroy_debug_utils_messenger_ext(instance: vk::Instance, messenger: vk::DebugUtilsMessengerEXT, p_allocator: *const vk::AllocationCallbacks);
                    SubmitDebugUtilsMessageEXT: submit_debug_utils_message_ext(instance: vk::Instance, message_severity: vk::DebugUtilsMessageSeverityFlagsEXT, message_types: vk::DebugUtilsMessageTypeFlagsEXT, p_callback_data: *const vk::DebugUtilsMessengerCallbackDataEXT);

                    CreateDisplayPlaneSurfaceKHR: create_display_plane_surface_khr(instance: vk::Instance, p_create_info: *const vk::DisplaySurfaceCreateInfoKHR, p_allocator: *const vk::AllocationCallbacks, p_surface: *mut vk::SurfaceKHR) -> vk::Result;
                    CreateAndroidSurfaceKHR: create_android_surface_khr(instance: vk::Instance, p_create_info: *const vk::AndroidSurfaceCreateInfoKHR, p_allocator: *const vk::AllocationCallbacks, p_surface: *mut vk::SurfaceKHR) -> vk::Result;
                    CreateDebugReportCallbackEXT: create_debug_report_callback_ext(instance: vk::Instance, p_create_info: *const vk::DebugReportCallbackCreateInfoEXT, p_allocator: *const vk::AllocationCallbacks, p_callback: *mut vk::DebugReportCallbackEXT) -> vk::Result;
                    DestroyDebugReportCallbackEXT: destroy_debug_report_callback_ext(instance: vk::Instance, callback: vk::DebugReportCallbackEXT, p_allocator: *const vk::AllocationCallbacks);
                    DebugReportMessageEXT: debug_report_message_ext(instance: vk::Instance, flags: vk::DebugReportFlagsEXT, object_type: vk::DebugReportObjectTypeEXT, object: u64, location: usize, message_code: i32, p_layer_prefix: *const c_char, p_message: *const c_char);
                    CreateStreamDescriptorSurfaceGGP: create_stream_descriptor_surface_ggp(instance: vk::Instance, p_create_info: *const vk::StreamDescriptorSurfaceCreateInfoGGP, p_allocator: *const vk::AllocationCallbacks, p_surface: *mut vk::SurfaceKHR) -> vk::Result;
                    CreateViSurfaceNN: create_vi_surface_nn(instance: vk::Instance, p_create_info: *const vk::ViSurfaceCreateInfoNN, p_allocator: *const vk::AllocationCallbacks, p_surface: *mut vk::SurfaceKHR) -> vk::Result;
                    CreateIOSSurfaceMVK: create_iossurface_mvk(instance: vk::Instance, p_create_info: *const vk::IOSSurfaceCreateInfoMVK, p_allocator: *const vk::AllocationCallbacks, p_surface: *mut vk::SurfaceKHR) -> vk::Result;
                    CreateMacOSSurfaceMVK: create_mac_ossurface_mvk(instance: vk::Instance, p_create_info: *const vk::MacOSSurfaceCreateInfoMVK, p_allocator: *const vk::AllocationCallbacks, p_surface: *mut vk::SurfaceKHR) -> vk::Result;
                    CreateImagePipeSurfaceFUCHSIA: create_image_pipe_surface_fuchsia(instance: vk::Instance, p_create_info: *const vk::ImagePipeSurfaceCreateInfoFUCHSIA, p_allocator: *const vk::AllocationCallbacks, p_surface: *mut vk::SurfaceKHR) -> vk::Result;
                    CreateMetalSurfaceEXT: create_metal_surface_ext(instance: vk::Instance, p_create_info: *const vk::MetalSurfaceCreateInfoEXT, p_allocator: *const vk::AllocationCallbacks, p_surface: *mut vk::SurfaceKHR) -> vk::Result;
                    CreateHeadlessSurfaceEXT: create_headless_surface_ext(instance: vk::Instance, p_create_info: *const vk::HeadlessSurfaceCreateInfoEXT, p_allocator: *const vk::AllocationCallbacks, p_surface: *mut vk::SurfaceKHR) -> vk::Result;
                    CreateDirectFBSurfaceEXT: create_direct_fbsurface_ext(instance: vk::Instance, p_create_info: *const vk::DirectFBSurfaceCreateInfoEXT, p_allocator: *const vk::AllocationCallbacks, p_surface: *mut vk::SurfaceKHR) -> vk::Result;
                    CreateScreenSurfaceQNX: create_screen_surface_qnx(instance: vk::Instance, p_create_info: *const vk::ScreenSurfaceCreateInfoQNX, p_allocator: *const vk::AllocationCallbacks, p_surface: *mut vk::SurfaceKHR) -> vk::Result;
                }
            }

            physical_device {
                lifecycle {
                    CreateDevice: create_device(physical_device: vk::PhysicalDevice, p_create_info: *const vk::DeviceCreateInfo, p_allocator: *const vk::AllocationCallbacks, p_device: *mut vk::Device) -> vk::Result;
                }
                forward {
                    GetPhysicalDeviceFeatures: get_physical_device_features(physical_device: vk::PhysicalDevice, p_features: *mut vk::PhysicalDeviceFeatures);
                    GetPhysicalDeviceFormatProperties: get_physical_device_format_properties(physical_device: vk::PhysicalDevice, format: vk::Format, p_format_properties: *mut vk::FormatProperties);
                    GetPhysicalDeviceImageFormatProperties: get_physical_device_image_format_properties(physical_device: vk::PhysicalDevice, format: vk::Format, ty: vk::ImageType, tiling: vk::ImageTiling, usage: vk::ImageUsageFlags, flags: vk::ImageCreateFlags, p_image_format_properties: *mut vk::ImageFormatProperties) -> vk::Result;
                    GetPhysicalDeviceProperties: get_physical_device_properties(physical_device: vk::PhysicalDevice, p_properties: *mut vk::PhysicalDeviceProperties);
                    GetPhysicalDeviceQueueFamilyProperties: get_physical_device_queue_family_properties(physical_device: vk::PhysicalDevice, p_queue_family_property_count: *mut u32, p_queue_family_properties: *mut vk::QueueFamilyProperties);
                    GetPhysicalDeviceMemoryProperties: get_physical_device_memory_properties(physical_device: vk::PhysicalDevice, p_memory_properties: *mut vk::PhysicalDeviceMemoryProperties);
                    EnumerateDeviceExtensionProperties: enumerate_device_extension_properties(physical_device: vk::PhysicalDevice, p_layer_name: *const c_char, p_property_count: *mut u32, p_properties: *mut vk::ExtensionProperties) -> vk::Result;
                    EnumerateDeviceLayerProperties: enumerate_device_layer_properties(physical_device: vk::PhysicalDevice, p_property_count: *mut u32, p_properties: *mut vk::LayerProperties) -> vk::Result;
                    GetPhysicalDeviceSparseImageFormatProperties: get_physical_device_sparse_image_format_properties(physical_device: vk::PhysicalDevice, format: vk::Format, ty: vk::ImageType, samples: vk::SampleCountFlags, usage: vk::ImageUsageFlags, tiling: vk::ImageTiling, p_property_count: *mut u32, p_properties: *mut vk::SparseImageFormatProperties);

                    GetPhysicalDeviceFeatures2: get_physical_device_features2(physical_device: vk::PhysicalDevice, p_features: *mut vk::PhysicalDeviceFeatures2);
                    GetPhysicalDeviceProperties2: get_physical_device_properties2(physical_device: vk::PhysicalDevice, p_properties: *mut vk::PhysicalDeviceProperties2);
                    GetPhysicalDeviceFormatProperties2: get_physical_device_format_properties2(physical_device: vk::PhysicalDevice, format: vk::Format, p_format_properties: *mut vk::FormatProperties2);
                    GetPhysicalDeviceImageFormatProperties2: get_physical_device_image_format_properties2(physical_device: vk::PhysicalDevice, p_image_format_info: *const vk::PhysicalDeviceImageFormatInfo2, p_image_format_properties: *mut vk::ImageFormatProperties2) -> vk::Result;
                    GetPhysicalDeviceQueueFamilyProperties2: get_physical_device_queue_family_properties2(physical_device: vk::PhysicalDevice, p_queue_family_property_count: *mut u32, p_queue_family_properties: *mut vk::QueueFamilyProperties2);
                    GetPhysicalDeviceMemoryProperties2: get_physical_device_memory_properties2(physical_device: vk::PhysicalDevice, p_memory_properties: *mut vk::PhysicalDeviceMemoryProperties2);
                    GetPhysicalDeviceSparseImageFormatProperties2: get_physical_device_sparse_image_format_properties2(physical_device: vk::PhysicalDevice, p_format_info: *const vk::PhysicalDeviceSparseImageFormatInfo2, p_property_count: *mut u32, p_properties: *mut vk::SparseImageFormatProperties2);
                    GetPhysicalDeviceExternalBufferProperties: get_physical_device_external_buffer_properties(physical_device: vk::PhysicalDevice, p_external_buffer_info: *const vk::PhysicalDeviceExternalBufferInfo, p_external_buffer_properties: *mut vk::ExternalBufferProperties);
                    GetPhysicalDeviceExternalFenceProperties: get_physical_device_external_fence_properties(physical_device: vk::PhysicalDevice, p_external_fence_info: *const vk::PhysicalDeviceExternalFenceInfo, p_external_fence_properties: *mut vk::ExternalFenceProperties);
                    GetPhysicalDeviceExternalSemaphoreProperties: get_physical_device_external_semaphore_properties(physical_device: vk::PhysicalDevice, p_external_semaphore_info: *const vk::PhysicalDeviceExternalSemaphoreInfo, p_external_semaphore_properties: *mut vk::ExternalSemaphoreProperties);
                    GetPhysicalDeviceToolProperties: get_physical_device_tool_properties(physical_device: vk::PhysicalDevice, p_tool_count: *mut u32, p_tool_properties: *mut vk::PhysicalDeviceToolProperties) -> vk::Result;

                    GetPhysicalDeviceSurfaceSupportKHR: get_physical_device_surface_support_khr(physical_device: vk::PhysicalDevice, queue_family_index: u32, surface: vk::SurfaceKHR, p_supported: *mut vk::Bool32) -> vk::Result;
                    GetPhysicalDeviceSurfaceCapabilitiesKHR: get_physical_device_surface_capabilities_khr(physical_device: vk::PhysicalDevice, surface: vk::SurfaceKHR, p_surface_capabilities: *mut vk::SurfaceCapabilitiesKHR) -> vk::Result;
                    GetPhysicalDeviceSurfaceFormatsKHR: get_physical_device_surface_formats_khr(physical_device: vk::PhysicalDevice, surface: vk::SurfaceKHR, p_surface_format_count: *mut u32, p_surface_formats: *mut vk::SurfaceFormatKHR) -> vk::Result;
                    GetPhysicalDeviceSurfacePresentModesKHR: get_physical_device_surface_present_modes_khr(physical_device: vk::PhysicalDevice, surface: vk::SurfaceKHR, p_present_mode_count: *mut u32, p_present_modes: *mut vk::PresentModeKHR) -> vk::Result;
                    GetPhysicalDevicePresentRectanglesKHR: get_physical_device_present_rectangles_khr(physical_device: vk::PhysicalDevice, surface: vk::SurfaceKHR, p_rect_count: *mut u32, p_rects: *mut vk::Rect2D) -> vk::Result;
                    GetPhysicalDeviceSurfaceCapabilities2KHR: get_physical_device_surface_capabilities2_khr(physical_device: vk::PhysicalDevice, p_surface_info: *const vk::PhysicalDeviceSurfaceInfo2KHR, p_surface_capabilities: *mut vk::SurfaceCapabilities2KHR) -> vk::Result;
                    GetPhysicalDeviceSurfaceFormats2KHR: get_physical_device_surface_formats2_khr(physical_device: vk::PhysicalDevice, p_surface_info: *const vk::PhysicalDeviceSurfaceInfo2KHR, p_surface_format_count: *mut u32, p_surface_formats: *mut vk::SurfaceFormat2KHR) -> vk::Result;
                    GetPhysicalDeviceWin32PresentationSupportKHR: get_physical_device_win32_presentation_support_khr(physical_device: vk::PhysicalDevice, queue_family_index: u32) -> vk::Bool32;
                    GetPhysicalDeviceXlibPresentationSupportKHR: get_physical_device_xlib_presentation_support_khr(physical_device: vk::PhysicalDevice, queue_family_index: u32, dpy: *mut vk::Display, visual_id: vk::VisualID) -> vk::Bool32;
                    GetPhysicalDeviceXcbPresentationSupportKHR: get_physical_device_xcb_presentation_support_khr(physical_device: vk::PhysicalDevice, queue_family_index: u32, connection: *mut vk::xcb_connection_t, visual_id: vk::xcb_visualid_t) -> vk::Bool32;
                    GetPhysicalDeviceWaylandPresentationSupportKHR: get_physical_device_wayland_presentation_support_khr(physical_device: vk::PhysicalDevice, queue_family_index: u32, display: *mut vk::wl_display) -> vk::Bool32;

                    GetPhysicalDeviceDisplayPropertiesKHR: get_physical_device_display_properties_khr(physical_device: vk::PhysicalDevice, p_property_count: *mut u32, p_properties: *mut vk::DisplayPropertiesKHR) -> vk::Result;
                    GetPhysicalDeviceDisplayPlanePropertiesKHR: get_physical_device_display_plane_properties_khr(physical_device: vk::PhysicalDevice, p_property_count: *mut u32, p_properties: *mut vk::DisplayPlanePropertiesKHR) -> vk::Result;
                    GetDisplayPlaneSupportedDisplaysKHR: get_display_plane_supported_displays_khr(physical_device: vk::PhysicalDevice, plane_index: u32, p_display_count: *mut u32, p_displays: *mut vk::DisplayKHR) -> vk::Result;
                    GetDisplayModePropertiesKHR: get_display_mode_properties_khr(physical_device: vk::PhysicalDevice, display: vk::DisplayKHR, p_property_count: *mut u32, p_properties: *mut vk::DisplayModePropertiesKHR) -> vk::Result;
                    CreateDisplayModeKHR: create_display_mode_khr(physical_device: vk::PhysicalDevice, display: vk::DisplayKHR, p_create_info: *const vk::DisplayModeCreateInfoKHR, p_allocator: *const vk::AllocationCallbacks, p_mode: *mut vk::DisplayModeKHR) -> vk::Result;
                    GetDisplayPlaneCapabilitiesKHR: get_display_plane_capabilities_khr(physical_device: vk::PhysicalDevice, mode: vk::DisplayModeKHR, plane_index: u32, p_capabilities: *mut vk::DisplayPlaneCapabilitiesKHR) -> vk::Result;
                    GetPhysicalDeviceVideoCapabilitiesKHR: get_physical_device_video_capabilities_khr(physical_device: vk::PhysicalDevice, p_video_profile: *const vk::VideoProfileInfoKHR, p_capabilities: *mut vk::VideoCapabilitiesKHR) -> vk::Result;
                    GetPhysicalDeviceVideoFormatPropertiesKHR: get_physical_device_video_format_properties_khr(physical_device: vk::PhysicalDevice, p_video_format_info: *const vk::PhysicalDeviceVideoFormatInfoKHR, p_video_format_property_count: *mut u32, p_video_format_properties: *mut vk::VideoFormatPropertiesKHR) -> vk::Result;
                    GetPhysicalDeviceExternalImageFormatPropertiesNV: get_physical_device_external_image_format_properties_nv(physical_device: vk::PhysicalDevice, format: vk::Format, ty: vk::ImageType, tiling: vk::ImageTiling, usage: vk::ImageUsageFlags, flags: vk::ImageCreateFlags, external_handle_type: vk::ExternalMemoryHandleTypeFlagsNV, p_external_image_format_properties: *mut vk::ExternalImageFormatPropertiesNV) -> vk::Result;
                    ReleaseDisplayEXT: release_display_ext(physical_device: vk::PhysicalDevice, display: vk::DisplayKHR) -> vk::Result;
                    AcquireXlibDisplayEXT: acquire_xlib_display_ext(physical_device: vk::PhysicalDevice, dpy: *mut vk::Display, display: vk::DisplayKHR) -> vk::Result;
                    GetRandROutputDisplayEXT: get_rand_routput_display_ext(physical_device: vk::PhysicalDevice, dpy: *mut vk::Display, rr_output: vk::RROutput, p_display: *mut vk::DisplayKHR) -> vk::Result;
                    GetPhysicalDeviceSurfaceCapabilities2EXT: get_physical_device_surface_capabilities2_ext(physical_device: vk::PhysicalDevice, surface: vk::SurfaceKHR, p_surface_capabilities: *mut vk::SurfaceCapabilities2EXT) -> vk::Result;
                    EnumeratePhysicalDeviceQueueFamilyPerformanceQueryCountersKHR: enumerate_physical_device_queue_family_performance_query_counters_khr(physical_device: vk::PhysicalDevice, queue_family_index: u32, p_counter_count: *mut u32, p_counters: *mut vk::PerformanceCounterKHR, p_counter_descriptions: *mut vk::PerformanceCounterDescriptionKHR) -> vk::Result;
                    GetPhysicalDeviceQueueFamilyPerformanceQueryPassesKHR: get_physical_device_queue_family_performance_query_passes_khr(physical_device: vk::PhysicalDevice, p_performance_query_create_info: *const vk::QueryPoolPerformanceCreateInfoKHR, p_num_passes: *mut u32);
                    GetPhysicalDeviceDisplayProperties2KHR: get_physical_device_display_properties2_khr(physical_device: vk::PhysicalDevice, p_property_count: *mut u32, p_properties: *mut vk::DisplayProperties2KHR) -> vk::Result;
                    GetPhysicalDeviceDisplayPlaneProperties2KHR: get_physical_device_display_plane_properties2_khr(physical_device: vk::PhysicalDevice, p_property_count: *mut u32, p_properties: *mut vk::DisplayPlaneProperties2KHR) -> vk::Result;
                    GetDisplayModeProperties2KHR: get_display_mode_properties2_khr(physical_device: vk::PhysicalDevice, display: vk::DisplayKHR, p_property_count: *mut u32, p_properties: *mut vk::DisplayModeProperties2KHR) -> vk::Result;
                    GetDisplayPlaneCapabilities2KHR: get_display_plane_capabilities2_khr(physical_device: vk::PhysicalDevice, p_display_plane_info: *const vk::DisplayPlaneInfo2KHR, p_capabilities: *mut vk::DisplayPlaneCapabilities2KHR) -> vk::Result;
                    GetPhysicalDeviceMultisamplePropertiesEXT: get_physical_device_multisample_properties_ext(physical_device: vk::PhysicalDevice, samples: vk::SampleCountFlags, p_multisample_properties: *mut vk::MultisamplePropertiesEXT);
                    GetPhysicalDeviceCalibrateableTimeDomainsKHR: get_physical_device_calibrateable_time_domains_khr(physical_device: vk::PhysicalDevice, p_time_domain_count: *mut u32, p_time_domains: *mut vk::TimeDomainKHR) -> vk::Result;
                    GetPhysicalDeviceFragmentShadingRatesKHR: get_physical_device_fragment_shading_rates_khr(physical_device: vk::PhysicalDevice, p_fragment_shading_rate_count: *mut u32, p_fragment_shading_rates: *mut vk::PhysicalDeviceFragmentShadingRateKHR) -> vk::Result;
                    GetPhysicalDeviceCooperativeMatrixPropertiesNV: get_physical_device_cooperative_matrix_properties_nv(physical_device: vk::PhysicalDevice, p_property_count: *mut u32, p_properties: *mut vk::CooperativeMatrixPropertiesNV) -> vk::Result;
                    GetPhysicalDeviceSupportedFramebufferMixedSamplesCombinationsNV: get_physical_device_supported_framebuffer_mixed_samples_combinations_nv(physical_device: vk::PhysicalDevice, p_combination_count: *mut u32, p_combinations: *mut vk::FramebufferMixedSamplesCombinationNV) -> vk::Result;
                    GetPhysicalDeviceSurfacePresentModes2EXT: get_physical_device_surface_present_modes2_ext(physical_device: vk::PhysicalDevice, p_surface_info: *const vk::PhysicalDeviceSurfaceInfo2KHR, p_present_mode_count: *mut u32, p_present_modes: *mut vk::PresentModeKHR) -> vk::Result;
                    AcquireDrmDisplayEXT: acquire_drm_display_ext(physical_device: vk::PhysicalDevice, drm_fd: i32, display: vk::DisplayKHR) -> vk::Result;
                    GetDrmDisplayEXT: get_drm_display_ext(physical_device: vk::PhysicalDevice, drm_fd: i32, connector_id: u32, display: *mut vk::DisplayKHR) -> vk::Result;
                    GetPhysicalDeviceVideoEncodeQualityLevelPropertiesKHR: get_physical_device_video_encode_quality_level_properties_khr(physical_device: vk::PhysicalDevice, p_quality_level_info: *const vk::PhysicalDeviceVideoEncodeQualityLevelInfoKHR, p_quality_level_properties: *mut vk::VideoEncodeQualityLevelPropertiesKHR) -> vk::Result;
                    AcquireWinrtDisplayNV: acquire_winrt_display_nv(physical_device: vk::PhysicalDevice, display: vk::DisplayKHR) -> vk::Result;
                    GetWinrtDisplayNV: get_winrt_display_nv(physical_device: vk::PhysicalDevice, device_relative_id: u32, p_display: *mut vk::DisplayKHR) -> vk::Result;
                    GetPhysicalDeviceDirectFBPresentationSupportEXT: get_physical_device_direct_fbpresentation_support_ext(physical_device: vk::PhysicalDevice, queue_family_index: u32, dfb: *mut vk::IDirectFB) -> vk::Bool32;
                    GetPhysicalDeviceScreenPresentationSupportQNX: get_physical_device_screen_presentation_support_qnx(physical_device: vk::PhysicalDevice, queue_family_index: u32, window: *mut vk::_screen_window) -> vk::Bool32;
                    GetPhysicalDeviceOpticalFlowImageFormatsNV: get_physical_device_optical_flow_image_formats_nv(physical_device: vk::PhysicalDevice, p_optical_flow_image_format_info: *const vk::OpticalFlowImageFormatInfoNV, p_format_count: *mut u32, p_image_format_properties: *mut vk::OpticalFlowImageFormatPropertiesNV) -> vk::Result;
                    GetPhysicalDeviceCooperativeMatrixPropertiesKHR: get_physical_device_cooperative_matrix_properties_khr(physical_device: vk::PhysicalDevice, p_property_count: *mut u32, p_properties: *mut vk::CooperativeMatrixPropertiesKHR) -> vk::Result;
                }
            }

            device {
                lifecycle {
                    DestroyDevice: destroy_device(device: vk::Device, p_allocator: *const vk::AllocationCallbacks);
                    AllocateCommandBuffers: allocate_command_buffers(device: vk::Device, p_allocate_info: *const vk::CommandBufferAllocateInfo, p_command_buffers: *mut vk::CommandBuffer) -> vk::Result;
                    FreeCommandBuffers: free_command_buffers(device: vk::Device, command_pool: vk::CommandPool, command_buffer_count: u32, p_command_buffers: *const vk::CommandBuffer);
                    DestroyCommandPool: destroy_command_pool(device: vk::Device, command_pool: vk::CommandPool, p_allocator: *const vk::AllocationCallbacks);
                }
                forward {
                    GetDeviceQueue: get_device_queue(device: vk::Device, queue_family_index: u32, queue_index: u32, p_queue: *mut vk::Queue);
                    DeviceWaitIdle: device_wait_idle(device: vk::Device) -> vk::Result;
                    AllocateMemory: allocate_memory(device: vk::Device, p_allocate_info: *const vk::MemoryAllocateInfo, p_allocator: *const vk::AllocationCallbacks, p_memory: *mut vk::DeviceMemory) -> vk::Result;
                    FreeMemory: free_memory(device: vk::Device, memory: vk::DeviceMemory, p_allocator: *const vk::AllocationCallbacks);
                    MapMemory: map_memory(device: vk::Device, memory: vk::DeviceMemory, offset: vk::DeviceSize, size: vk::DeviceSize, flags: vk::MemoryMapFlags, pp_data: *mut *mut c_void) -> vk::Result;
                    UnmapMemory: unmap_memory(device: vk::Device, memory: vk::DeviceMemory);
                    FlushMappedMemoryRanges: flush_mapped_memory_ranges(device: vk::Device, memory_range_count: u32, p_memory_ranges: *const vk::MappedMemoryRange) -> vk::Result;
                    InvalidateMappedMemoryRanges: invalidate_mapped_memory_ranges(device: vk::Device, memory_range_count: u32, p_memory_ranges: *const vk::MappedMemoryRange) -> vk::Result;
                    GetDeviceMemoryCommitment: get_device_memory_commitment(device: vk::Device, memory: vk::DeviceMemory, p_committed_memory_in_bytes: *mut vk::DeviceSize);
                    BindBufferMemory: bind_buffer_memory(device: vk::Device, buffer: vk::Buffer, memory: vk::DeviceMemory, memory_offset: vk::DeviceSize) -> vk::Result;
                    BindImageMemory: bind_image_memory(device: vk::Device, image: vk::Image, memory: vk::DeviceMemory, memory_offset: vk::DeviceSize) -> vk::Result;
                    GetBufferMemoryRequirements: get_buffer_memory_requirements(device: vk::Device, buffer: vk::Buffer, p_memory_requirements: *mut vk::MemoryRequirements);
                    GetImageMemoryRequirements: get_image_memory_requirements(device: vk::Device, image: vk::Image, p_memory_requirements: *mut vk::MemoryRequirements);
                    GetImageSparseMemoryRequirements: get_image_sparse_memory_requirements(device: vk::Device, image: vk::Image, p_sparse_memory_requirement_count: *mut u32, p_sparse_memory_requirements: *mut vk::SparseImageMemoryRequirements);
                    CreateFence: create_fence(device: vk::Device, p_create_info: *const vk::FenceCreateInfo, p_allocator: *const vk::AllocationCallbacks, p_fence: *mut vk::Fence) -> vk::Result;
                    DestroyFence: destroy_fence(device: vk::Device, fence: vk::Fence, p_allocator: *const vk::AllocationCallbacks);
                    ResetFences: reset_fences(device: vk::Device, fence_count: u32, p_fences: *const vk::Fence) -> vk::Result;
                    GetFenceStatus: get_fence_status(device: vk::Device, fence: vk::Fence) -> vk::Result;
                    WaitForFences: wait_for_fences(device: vk::Device, fence_count: u32, p_fences: *const vk::Fence, wait_all: vk::Bool32, timeout: u64) -> vk::Result;
                    CreateSemaphore: create_semaphore(device: vk::Device, p_create_info: *const vk::SemaphoreCreateInfo, p_allocator: *const vk::AllocationCallbacks, p_semaphore: *mut vk::Semaphore) -> vk::Result;
                    DestroySemaphore: destroy_semaphore(device: vk::Device, semaphore: vk::Semaphore, p_allocator: *const vk::AllocationCallbacks);
                    CreateEvent: create_event(device: vk::Device, p_create_info: *const vk::EventCreateInfo, p_allocator: *const vk::AllocationCallbacks, p_event: *mut vk::Event) -> vk::Result;
                    DestroyEvent: destroy_event(device: vk::Device, event: vk::Event, p_allocator: *const vk::AllocationCallbacks);
                    GetEventStatus: get_event_status(device: vk::Device, event: vk::Event) -> vk::Result;
                    SetEvent: set_event(device: vk::Device, event: vk::Event) -> vk::Result;
                    ResetEvent: reset_event(device: vk::Device, event: vk::Event) -> vk::Result;
                    CreateQueryPool: create_query_pool(device: vk::Device, p_create_info: *const vk::QueryPoolCreateInfo, p_allocator: *const vk::AllocationCallbacks, p_query_pool: *mut vk::QueryPool) -> vk::Result;
                    DestroyQueryPool: destroy_query_pool(device: vk::Device, query_pool: vk::QueryPool, p_allocator: *const vk::AllocationCallbacks);
                    GetQueryPoolResults: get_query_pool_results(device: vk::Device, query_pool: vk::QueryPool, first_query: u32, query_count: u32, data_size: usize, p_data: *mut c_void, stride: vk::DeviceSize, flags: vk::QueryResultFlags) -> vk::Result;
                    CreateBuffer: create_buffer(device: vk::Device, p_create_info: *const vk::BufferCreateInfo, p_allocator: *const vk::AllocationCallbacks, p_buffer: *mut vk::Buffer) -> vk::Result;
                    DestroyBuffer: destroy_buffer(device: vk::Device, buffer: vk::Buffer, p_allocator: *const vk::AllocationCallbacks);
                    CreateBufferView: create_buffer_view(device: vk::Device, p_create_info: *const vk::BufferViewCreateInfo, p_allocator: *const vk::AllocationCallbacks, p_view: *mut vk::BufferView) -> vk::Result;
                    DestroyBufferView: destroy_buffer_view(device: vk::Device, buffer_view: vk::BufferView, p_allocator: *const vk::AllocationCallbacks);
                    CreateImage: create_image(device: vk::Device, p_create_info: *const vk::ImageCreateInfo, p_allocator: *const vk::AllocationCallbacks, p_image: *mut vk::Image) -> vk::Result;
                    DestroyImage: destroy_image(device: vk::Device, image: vk::Image, p_allocator: *const vk::AllocationCallbacks);
                    GetImageSubresourceLayout: get_image_subresource_layout(device: vk::Device, image: vk::Image, p_subresource: *const vk::ImageSubresource, p_layout: *mut vk::SubresourceLayout);
                    CreateImageView: create_image_view(device: vk::Device, p_create_info: *const vk::ImageViewCreateInfo, p_allocator: *const vk::AllocationCallbacks, p_view: *mut vk::ImageView) -> vk::Result;
                    DestroyImageView: destroy_image_view(device: vk::Device, image_view: vk::ImageView, p_allocator: *const vk::AllocationCallbacks);
                    CreateShaderModule: create_shader_module(device: vk::Device, p_create_info: *const vk::ShaderModuleCreateInfo, p_allocator: *const vk::AllocationCallbacks, p_shader_module: *mut vk::ShaderModule) -> vk::Result;
                    DestroyShaderModule: destroy_shader_module(device: vk::Device, shader_module: vk::ShaderModule, p_allocator: *const vk::AllocationCallbacks);
                    CreatePipelineCache: create_pipeline_cache(device: vk::Device, p_create_info: *const vk::PipelineCacheCreateInfo, p_allocator: *const vk::AllocationCallbacks, p_pipeline_cache: *mut vk::PipelineCache) -> vk::Result;
                    DestroyPipelineCache: destroy_pipeline_cache(device: vk::Device, pipeline_cache: vk::PipelineCache, p_allocator: *const vk::AllocationCallbacks);
                    GetPipelineCacheData: get_pipeline_cache_data(device: vk::Device, pipeline_cache: vk::PipelineCache, p_data_size: *mut usize, p_data: *mut c_void) -> vk::Result;
                    MergePipelineCaches: merge_pipeline_caches(device: vk::Device, dst_cache: vk::PipelineCache, src_cache_count: u32, p_src_caches: *const vk::PipelineCache) -> vk::Result;
                    CreateGraphicsPipelines: create_graphics_pipelines(device: vk::Device, pipeline_cache: vk::PipelineCache, create_info_count: u32, p_create_infos: *const vk::GraphicsPipelineCreateInfo, p_allocator: *const vk::AllocationCallbacks, p_pipelines: *mut vk::Pipeline) -> vk::Result;
                    CreateComputePipelines: create_compute_pipelines(device: vk::Device, pipeline_cache: vk::PipelineCache, create_info_count: u32, p_create_infos: *const vk::ComputePipelineCreateInfo, p_allocator: *const vk::AllocationCallbacks, p_pipelines: *mut vk::Pipeline) -> vk::Result;
                    DestroyPipeline: destroy_pipeline(device: vk::Device, pipeline: vk::Pipeline, p_allocator: *const vk::AllocationCallbacks);
                    CreatePipelineLayout: create_pipeline_layout(device: vk::Device, p_create_info: *const vk::PipelineLayoutCreateInfo, p_allocator: *const vk::AllocationCallbacks, p_pipeline_layout: *mut vk::PipelineLayout) -> vk::Result;
                    DestroyPipelineLayout: destroy_pipeline_layout(device: vk::Device, pipeline_layout: vk::PipelineLayout, p_allocator: *const vk::AllocationCallbacks);
                    CreateSampler: create_sampler(device: vk::Device, p_create_info: *const vk::SamplerCreateInfo, p_allocator: *const vk::AllocationCallbacks, p_sampler: *mut vk::Sampler) -> vk::Result;
                    DestroySampler: destroy_sampler(device: vk::Device, sampler: vk::Sampler, p_allocator: *const vk::AllocationCallbacks);
                    CreateDescriptorSetLayout: create_descriptor_set_layout(device: vk::Device, p_create_info: *const vk::DescriptorSetLayoutCreateInfo, p_allocator: *const vk::AllocationCallbacks, p_set_layout: *mut vk::DescriptorSetLayout) -> vk::Result;
                    DestroyDescriptorSetLayout: destroy_descriptor_set_layout(device: vk::Device, descriptor_set_layout: vk::DescriptorSetLayout, p_allocator: *const vk::AllocationCallbacks);
                    CreateDescriptorPool: create_descriptor_pool(device: vk::Device, p_create_info: *const vk::DescriptorPoolCreateInfo, p_allocator: *const vk::AllocationCallbacks, p_descriptor_pool: *mut vk::DescriptorPool) -> vk::Result;
                    DestroyDescriptorPool: destroy_descriptor_pool(device: vk::Device, descriptor_pool: vk::DescriptorPool, p_allocator: *const vk::AllocationCallbacks);
                    ResetDescriptorPool: reset_descriptor_pool(device: vk::Device, descriptor_pool: vk::DescriptorPool, flags: vk::DescriptorPoolResetFlags) -> vk::Result;
                    AllocateDescriptorSets: allocate_descriptor_sets(device: vk::Device, p_allocate_info: *const vk::DescriptorSetAllocateInfo, p_descriptor_sets: *mut vk::DescriptorSet) -> vk::Result;
                    FreeDescriptorSets: free_descriptor_sets(device: vk::Device, descriptor_pool: vk::DescriptorPool, descriptor_set_count: u32, p_descriptor_sets: *const vk::DescriptorSet) -> vk::Result;
                    UpdateDescriptorSets: update_descriptor_sets(device: vk::Device, descriptor_write_count: u32, p_descriptor_writes: *const vk::WriteDescriptorSet, descriptor_copy_count: u32, p_descriptor_copies: *const vk::CopyDescriptorSet);
                    CreateFramebuffer: create_framebuffer(device: vk::Device, p_create_info: *const vk::FramebufferCreateInfo, p_allocator: *const vk::AllocationCallbacks, p_framebuffer: *mut vk::Framebuffer) -> vk::Result;
                    DestroyFramebuffer: destroy_framebuffer(device: vk::Device, framebuffer: vk::Framebuffer, p_allocator: *const vk::AllocationCallbacks);
                    CreateRenderPass: create_render_pass(device: vk::Device, p_create_info: *const vk::RenderPassCreateInfo, p_allocator: *const vk::AllocationCallbacks, p_render_pass: *mut vk::RenderPass) -> vk::Result;
                    DestroyRenderPass: destroy_render_pass(device: vk::Device, render_pass: vk::RenderPass, p_allocator: *const vk::AllocationCallbacks);
                    GetRenderAreaGranularity: get_render_area_granularity(device: vk::Device, render_pass: vk::RenderPass, p_granularity: *mut vk::Extent2D);
                    CreateCommandPool: create_command_pool(device: vk::Device, p_create_info: *const vk::CommandPoolCreateInfo, p_allocator: *const vk::AllocationCallbacks, p_command_pool: *mut vk::CommandPool) -> vk::Result;
                    ResetCommandPool: reset_command_pool(device: vk::Device, command_pool: vk::CommandPool, flags: vk::CommandPoolResetFlags) -> vk::Result;

                    BindBufferMemory2: bind_buffer_memory2(device: vk::Device, bind_info_count: u32, p_bind_infos: *const vk::BindBufferMemoryInfo) -> vk::Result;
                    BindImageMemory2: bind_image_memory2(device: vk::Device, bind_info_count: u32, p_bind_infos: *const vk::BindImageMemoryInfo) -> vk::Result;
                    GetDeviceGroupPeerMemoryFeatures: get_device_group_peer_memory_features(device: vk::Device, heap_index: u32, local_device_index: u32, remote_device_index: u32, p_peer_memory_features: *mut vk::PeerMemoryFeatureFlags);
                    GetImageMemoryRequirements2: get_image_memory_requirements2(device: vk::Device, p_info: *const vk::ImageMemoryRequirementsInfo2, p_memory_requirements: *mut vk::MemoryRequirements2);
                    GetBufferMemoryRequirements2: get_buffer_memory_requirements2(device: vk::Device, p_info: *const vk::BufferMemoryRequirementsInfo2, p_memory_requirements: *mut vk::MemoryRequirements2);
                    GetImageSparseMemoryRequirements2: get_image_sparse_memory_requirements2(device: vk::Device, p_info: *const vk::ImageSparseMemoryRequirementsInfo2, p_sparse_memory_requirement_count: *mut u32, p_sparse_memory_requirements: *mut vk::SparseImageMemoryRequirements2);
                    TrimCommandPool: trim_command_pool(device: vk::Device, command_pool: vk::CommandPool, flags: vk::CommandPoolTrimFlags);
                    GetDeviceQueue2: get_device_queue2(device: vk::Device, p_queue_info: *const vk::DeviceQueueInfo2, p_queue: *mut vk::Queue);
                    CreateSamplerYcbcrConversion: create_sampler_ycbcr_conversion(device: vk::Device, p_create_info: *const vk::SamplerYcbcrConversionCreateInfo, p_allocator: *const vk::AllocationCallbacks, p_ycbcr_conversion: *mut vk::SamplerYcbcrConversion) -> vk::Result;
                    DestroySamplerYcbcrConversion: destroy_sampler_ycbcr_conversion(device: vk::Device, ycbcr_conversion: vk::SamplerYcbcrConversion, p_allocator: *const vk::AllocationCallbacks);
                    CreateDescriptorUpdateTemplate: create_descriptor_update_template(device: vk::Device, p_create_info: *const vk::DescriptorUpdateTemplateCreateInfo, p_allocator: *const vk::AllocationCallbacks, p_descriptor_update_template: *mut vk::DescriptorUpdateTemplate) -> vk::Result;
                    DestroyDescriptorUpdateTemplate: destroy_descriptor_update_template(device: vk::Device, descriptor_update_template: vk::DescriptorUpdateTemplate, p_allocator: *const vk::AllocationCallbacks);
                    UpdateDescriptorSetWithTemplate: update_descriptor_set_with_template(device: vk::Device, descriptor_set: vk::DescriptorSet, descriptor_update_template: vk::DescriptorUpdateTemplate, p_data: *const c_void);
                    GetDescriptorSetLayoutSupport: get_descriptor_set_layout_support(device: vk::Device, p_create_info: *const vk::DescriptorSetLayoutCreateInfo, p_support: *mut vk::DescriptorSetLayoutSupport);

                    CreateRenderPass2: create_render_pass2(device: vk::Device, p_create_info: *const vk::RenderPassCreateInfo2, p_allocator: *const vk::AllocationCallbacks, p_render_pass: *mut vk::RenderPass) -> vk::Result;
                    ResetQueryPool: reset_query_pool(device: vk::Device, query_pool: vk::QueryPool, first_query: u32, query_count: u32);
                    GetSemaphoreCounterValue: get_semaphore_counter_value(device: vk::Device, semaphore: vk::Semaphore, p_value: *mut u64) -> vk::Result;
                    WaitSemaphores: wait_semaphores(device: vk::Device, p_wait_info: *const vk::SemaphoreWaitInfo, timeout: u64) -> vk::Result;
                    SignalSemaphore: signal_semaphore(device: vk::Device, p_signal_info: *const vk::SemaphoreSignalInfo) -> vk::Result;
                    GetBufferDeviceAddress: get_buffer_device_address(device: vk::Device, p_info: *const vk::BufferDeviceAddressInfo) -> vk::DeviceAddress;
                    GetBufferOpaqueCaptureAddress: get_buffer_opaque_capture_address(device: vk::Device, p_info: *const vk::BufferDeviceAddressInfo) -> u64;
                    GetDeviceMemoryOpaqueCaptureAddress: get_device_memory_opaque_capture_address(device: vk::Device, p_info: *const vk::DeviceMemoryOpaqueCaptureAddressInfo) -> u64;

                    CreatePrivateDataSlot: create_private_data_slot(device: vk::Device, p_create_info: *const vk::PrivateDataSlotCreateInfo, p_allocator: *const vk::AllocationCallbacks, p_private_data_slot: *mut vk::PrivateDataSlot) -> vk::Result;
                    DestroyPrivateDataSlot: destroy_private_data_slot(device: vk::Device, private_data_slot: vk::PrivateDataSlot, p_allocator: *const vk::AllocationCallbacks);
                    SetPrivateData: set_private_data(device: vk::Device, object_type: vk::ObjectType, object_handle: u64, private_data_slot: vk::PrivateDataSlot, data: u64) -> vk::Result;
                    GetPrivateData: get_private_data(device: vk::Device, object_type: vk::ObjectType, object_handle: u64, private_data_slot: vk::PrivateDataSlot, p_data: *mut u64);
                    GetDeviceBufferMemoryRequirements: get_device_buffer_memory_requirements(device: vk::Device, p_info: *const vk::DeviceBufferMemoryRequirements, p_memory_requirements: *mut vk::MemoryRequirements2);
                    GetDeviceImageMemoryRequirements: get_device_image_memory_requirements(device: vk::Device, p_info: *const vk::DeviceImageMemoryRequirements, p_memory_requirements: *mut vk::MemoryRequirements2);
                    GetDeviceImageSparseMemoryRequirements: get_device_image_sparse_memory_requirements(device: vk::Device, p_info: *const vk::DeviceImageMemoryRequirements, p_sparse_memory_requirement_count: *mut u32, p_sparse_memory_requirements: *mut vk::SparseImageMemoryRequirements2);

                    CreateSwapchainKHR: create_swapchain_khr(device: vk::Device, p_create_info: *const vk::SwapchainCreateInfoKHR, p_allocator: *const vk::AllocationCallbacks, p_swapchain: *mut vk::SwapchainKHR) -> vk::Result;
                    DestroySwapchainKHR: destroy_swapchain_khr(device: vk::Device, swapchain: vk::SwapchainKHR, p_allocator: *const vk::AllocationCallbacks);
                    GetSwapchainImagesKHR: get_swapchain_images_khr(device: vk::Device, swapchain: vk::SwapchainKHR, p_swapchain_image_count: *mut u32, p_swapchain_images: *mut vk::Image) -> vk::Result;
                    AcquireNextImageKHR: acquire_next_image_khr(device: vk::Device, swapchain: vk::SwapchainKHR, timeout: u64, semaphore: vk::Semaphore, fence: vk::Fence, p_image_index: *mut u32) -> vk::Result;
                    GetDeviceGroupPresentCapabilitiesKHR: get_device_group_present_capabilities_khr(device: vk::Device, p_device_group_present_capabilities: *mut vk::DeviceGroupPresentCapabilitiesKHR) -> vk::Result;
                    GetDeviceGroupSurfacePresentModesKHR: get_device_group_surface_present_modes_khr(device: vk::Device, surface: vk::SurfaceKHR, p_modes: *mut vk::DeviceGroupPresentModeFlagsKHR) -> vk::Result;
                    AcquireNextImage2KHR: acquire_next_image2_khr(device: vk::Device, p_acquire_info: *const vk::AcquireNextImageInfoKHR, p_image_index: *mut u32) -> vk::Result;
                    WaitForPresentKHR: wait_for_present_khr(device: vk::Device, swapchain: vk::SwapchainKHR, present_id: u64, timeout: u64) -> vk::Result;

                    SetDebugUtilsObjectNameEXT: set_debug_utils_object_name_ext(device: vk::Device, p_name_info: *const vk::DebugUtilsObjectNameInfoEXT) -> vk::Result;
                    SetDebugUtilsObjectTagEXT: set_debug_utils_object_tag_ext(device: vk::Device, p_tag_info: *const vk::DebugUtilsObjectTagInfoEXT) -> vk::Result;

                    CreateSharedSwapchainsKHR: create_shared_swapchains_khr(device: vk::Device, swapchain_count: u32, p_create_infos: *const vk::SwapchainCreateInfoKHR, p_allocator: *const vk::AllocationCallbacks, p_swapchains: *mut vk::SwapchainKHR) -> vk::Result;
                    GetSwapchainGrallocUsageANDROID: get_swapchain_gralloc_usage_android(device: vk::Device, format: vk::Format, image_usage: vk::ImageUsageFlags, gralloc_usage: *mut c_int) -> vk::Result;
                    AcquireImageANDROID: acquire_image_android(device: vk::Device, image: vk::Image, native_fence_fd: c_int, semaphore: vk::Semaphore, fence: vk::Fence) -> vk::Result;
                    GetSwapchainGrallocUsage2ANDROID: get_swapchain_gralloc_usage2_android(device: vk::Device, format: vk::Format, image_usage: vk::ImageUsageFlags, swapchain_image_usage: vk::SwapchainImageUsageFlagsANDROID, gralloc_consumer_usage: *mut u64, gralloc_producer_usage: *mut u64) -> vk::Result;
                    DebugMarkerSetObjectTagEXT: debug_marker_set_object_tag_ext(device: vk::Device, p_tag_info: *const vk::DebugMarkerObjectTagInfoEXT) -> vk::Result;
                    DebugMarkerSetObjectNameEXT: debug_marker_set_object_name_ext(device: vk::Device, p_name_info: *const vk::DebugMarkerObjectNameInfoEXT) -> vk::Result;
                    CreateVideoSessionKHR: create_video_session_khr(device: vk::Device, p_create_info: *const vk::VideoSessionCreateInfoKHR, p_allocator: *const vk::AllocationCallbacks, p_video_session: *mut vk::VideoSessionKHR) -> vk::Result;
                    DestroyVideoSessionKHR: destroy_video_session_khr(device: vk::Device, video_session: vk::VideoSessionKHR, p_allocator: *const vk::AllocationCallbacks);
                    GetVideoSessionMemoryRequirementsKHR: get_video_session_memory_requirements_khr(device: vk::Device, video_session: vk::VideoSessionKHR, p_memory_requirements_count: *mut u32, p_memory_requirements: *mut vk::VideoSessionMemoryRequirementsKHR) -> vk::Result;
                    BindVideoSessionMemoryKHR: bind_video_session_memory_khr(device: vk::Device, video_session: vk::VideoSessionKHR, bind_session_memory_info_count: u32, p_bind_session_memory_infos: *const vk::BindVideoSessionMemoryInfoKHR) -> vk::Result;
                    CreateVideoSessionParametersKHR: create_video_session_parameters_khr(device: vk::Device, p_create_info: *const vk::VideoSessionParametersCreateInfoKHR, p_allocator: *const vk::AllocationCallbacks, p_video_session_parameters: *mut vk::VideoSessionParametersKHR) -> vk::Result;
                    UpdateVideoSessionParametersKHR: update_video_session_parameters_khr(device: vk::Device, video_session_parameters: vk::VideoSessionParametersKHR, p_update_info: *const vk::VideoSessionParametersUpdateInfoKHR) -> vk::Result;
                    DestroyVideoSessionParametersKHR: destroy_video_session_parameters_khr(device: vk::Device, video_session_parameters: vk::VideoSessionParametersKHR, p_allocator: *const vk::AllocationCallbacks);
                    CreateCuModuleNVX: create_cu_module_nvx(device: vk::Device, p_create_info: *const vk::CuModuleCreateInfoNVX, p_allocator: *const vk::AllocationCallbacks, p_module: *mut vk::CuModuleNVX) -> vk::Result;
                    CreateCuFunctionNVX: create_cu_function_nvx(device: vk::Device, p_create_info: *const vk::CuFunctionCreateInfoNVX, p_allocator: *const vk::AllocationCallbacks, p_function: *mut vk::CuFunctionNVX) -> vk::Result;
                    DestroyCuModuleNVX: destroy_cu_module_nvx(device: vk::Device, module: vk::CuModuleNVX, p_allocator: *const vk::AllocationCallbacks);
                    DestroyCuFunctionNVX: destroy_cu_function_nvx(device: vk::Device, function: vk::CuFunctionNVX, p_allocator: *const vk::AllocationCallbacks);
                    GetImageViewHandleNVX: get_image_view_handle_nvx(device: vk::Device, p_info: *const vk::ImageViewHandleInfoNVX) -> u32;
                    GetImageViewAddressNVX: get_image_view_address_nvx(device: vk::Device, image_view: vk::ImageView, p_properties: *mut vk::ImageViewAddressPropertiesNVX) -> vk::Result;
                    GetShaderInfoAMD: get_shader_info_amd(device: vk::Device, pipeline: vk::Pipeline, shader_stage: vk::ShaderStageFlags, info_type: vk::ShaderInfoTypeAMD, p_info_size: *mut usize, p_info: *mut c_void) -> vk::Result;
                    GetMemoryWin32HandleNV: get_memory_win32_handle_nv(device: vk::Device, memory: vk::DeviceMemory, handle_type: vk::ExternalMemoryHandleTypeFlagsNV, p_handle: *mut vk::HANDLE) -> vk::Result;
                    GetMemoryWin32HandleKHR: get_memory_win32_handle_khr(device: vk::Device, p_get_win32_handle_info: *const vk::MemoryGetWin32HandleInfoKHR, p_handle: *mut vk::HANDLE) -> vk::Result;
                    GetMemoryWin32HandlePropertiesKHR: get_memory_win32_handle_properties_khr(device: vk::Device, handle_type: vk::ExternalMemoryHandleTypeFlags, handle: vk::HANDLE, p_memory_win32_handle_properties: *mut vk::MemoryWin32HandlePropertiesKHR) -> vk::Result;
                    GetMemoryFdKHR: get_memory_fd_khr(device: vk::Device, p_get_fd_info: *const vk::MemoryGetFdInfoKHR, p_fd: *mut c_int) -> vk::Result;
                    GetMemoryFdPropertiesKHR: get_memory_fd_properties_khr(device: vk::Device, handle_type: vk::ExternalMemoryHandleTypeFlags, fd: c_int, p_memory_fd_properties: *mut vk::MemoryFdPropertiesKHR) -> vk::Result;
                    ImportSemaphoreWin32HandleKHR: import_semaphore_win32_handle_khr(device: vk::Device, p_import_semaphore_win32_handle_info: *const vk::ImportSemaphoreWin32HandleInfoKHR) -> vk::Result;
                    GetSemaphoreWin32HandleKHR: get_semaphore_win32_handle_khr(device: vk::Device, p_get_win32_handle_info: *const vk::SemaphoreGetWin32HandleInfoKHR, p_handle: *mut vk::HANDLE) -> vk::Result;
                    ImportSemaphoreFdKHR: import_semaphore_fd_khr(device: vk::Device, p_import_semaphore_fd_info: *const vk::ImportSemaphoreFdInfoKHR) -> vk::Result;
                    GetSemaphoreFdKHR: get_semaphore_fd_khr(device: vk::Device, p_get_fd_info: *const vk::SemaphoreGetFdInfoKHR, p_fd: *mut c_int) -> vk::Result;
                    DisplayPowerControlEXT: display_power_control_ext(device: vk::Device, display: vk::DisplayKHR, p_display_power_info: *const vk::DisplayPowerInfoEXT) -> vk::Result;
                    RegisterDeviceEventEXT: register_device_event_ext(device: vk::Device, p_device_event_info: *const vk::DeviceEventInfoEXT, p_allocator: *const vk::AllocationCallbacks, p_fence: *mut vk::Fence) -> vk::Result;
                    RegisterDisplayEventEXT: register_display_event_ext(device: vk::Device, display: vk::DisplayKHR, p_display_event_info: *const vk::DisplayEventInfoEXT, p_allocator: *const vk::AllocationCallbacks, p_fence: *mut vk::Fence) -> vk::Result;
                    GetSwapchainCounterEXT: get_swapchain_counter_ext(device: vk::Device, swapchain: vk::SwapchainKHR, counter: vk::SurfaceCounterFlagsEXT, p_counter_value: *mut u64) -> vk::Result;
                    GetRefreshCycleDurationGOOGLE: get_refresh_cycle_duration_google(device: vk::Device, swapchain: vk::SwapchainKHR, p_display_timing_properties: *mut vk::RefreshCycleDurationGOOGLE) -> vk::Result;
                    GetPastPresentationTimingGOOGLE: get_past_presentation_timing_google(device: vk::Device, swapchain: vk::SwapchainKHR, p_presentation_timing_count: *mut u32, p_presentation_timings: *mut vk::PastPresentationTimingGOOGLE) -> vk::Result;
                    SetHdrMetadataEXT: set_hdr_metadata_ext(device: vk::Device, swapchain_count: u32, p_swapchains: *const vk::SwapchainKHR, p_metadata: *const vk::HdrMetadataEXT);
                    GetSwapchainStatusKHR: get_swapchain_status_khr(device: vk::Device, swapchain: vk::SwapchainKHR) -> vk::Result;
                    ImportFenceWin32HandleKHR: import_fence_win32_handle_khr(device: vk::Device, p_import_fence_win32_handle_info: *const vk::ImportFenceWin32HandleInfoKHR) -> vk::Result;
                    GetFenceWin32HandleKHR: get_fence_win32_handle_khr(device: vk::Device, p_get_win32_handle_info: *const vk::FenceGetWin32HandleInfoKHR, p_handle: *mut vk::HANDLE) -> vk::Result;
                    ImportFenceFdKHR: import_fence_fd_khr(device: vk::Device, p_import_fence_fd_info: *const vk::ImportFenceFdInfoKHR) -> vk::Result;
                    GetFenceFdKHR: get_fence_fd_khr(device: vk::Device, p_get_fd_info: *const vk::FenceGetFdInfoKHR, p_fd: *mut c_int) -> vk::Result;
                    AcquireProfilingLockKHR: acquire_profiling_lock_khr(device: vk::Device, p_info: *const vk::AcquireProfilingLockInfoKHR) -> vk::Result;
                    ReleaseProfilingLockKHR: release_profiling_lock_khr(device: vk::Device);
                    GetAndroidHardwareBufferPropertiesANDROID: get_android_hardware_buffer_properties_android(device: vk::Device, buffer: *const vk::AHardwareBuffer, p_properties: *mut vk::AndroidHardwareBufferPropertiesANDROID) -> vk::Result;
                    GetMemoryAndroidHardwareBufferANDROID: get_memory_android_hardware_buffer_android(device: vk::Device, p_info: *const vk::MemoryGetAndroidHardwareBufferInfoANDROID, p_buffer: *mut *mut vk::AHardwareBuffer) -> vk::Result;
                    CreateExecutionGraphPipelinesAMDX: create_execution_graph_pipelines_amdx(device: vk::Device, pipeline_cache: vk::PipelineCache, create_info_count: u32, p_create_infos: *const vk::ExecutionGraphPipelineCreateInfoAMDX, p_allocator: *const vk::AllocationCallbacks, p_pipelines: *mut vk::Pipeline) -> vk::Result;
                    GetExecutionGraphPipelineScratchSizeAMDX: get_execution_graph_pipeline_scratch_size_amdx(device: vk::Device, execution_graph: vk::Pipeline, p_size_info: *mut vk::ExecutionGraphPipelineScratchSizeAMDX) -> vk::Result;
                    GetExecutionGraphPipelineNodeIndexAMDX: get_execution_graph_pipeline_node_index_amdx(device: vk::Device, execution_graph: vk::Pipeline, p_node_info: *const vk::PipelineShaderStageNodeCreateInfoAMDX, p_node_index: *mut u32) -> vk::Result;
                    CreateAccelerationStructureKHR: create_acceleration_structure_khr(device: vk::Device, p_create_info: *const vk::AccelerationStructureCreateInfoKHR, p_allocator: *const vk::AllocationCallbacks, p_acceleration_structure: *mut vk::AccelerationStructureKHR) -> vk::Result;
                    DestroyAccelerationStructureKHR: destroy_acceleration_structure_khr(device: vk::Device, acceleration_structure: vk::AccelerationStructureKHR, p_allocator: *const vk::AllocationCallbacks);
                    BuildAccelerationStructuresKHR: build_acceleration_structures_khr(device: vk::Device, deferred_operation: vk::DeferredOperationKHR, info_count: u32, p_infos: *const vk::AccelerationStructureBuildGeometryInfoKHR, pp_build_range_infos: *const *const vk::AccelerationStructureBuildRangeInfoKHR) -> vk::Result;
                    CopyAccelerationStructureKHR: copy_acceleration_structure_khr(device: vk::Device, deferred_operation: vk::DeferredOperationKHR, p_info: *const vk::CopyAccelerationStructureInfoKHR) -> vk::Result;
                    CopyAccelerationStructureToMemoryKHR: copy_acceleration_structure_to_memory_khr(device: vk::Device, deferred_operation: vk::DeferredOperationKHR, p_info: *const vk::CopyAccelerationStructureToMemoryInfoKHR) -> vk::Result;
                    CopyMemoryToAccelerationStructureKHR: copy_memory_to_acceleration_structure_khr(device: vk::Device, deferred_operation: vk::DeferredOperationKHR, p_info: *const vk::CopyMemoryToAccelerationStructureInfoKHR) -> vk::Result;
                    WriteAccelerationStructuresPropertiesKHR: write_acceleration_structures_properties_khr(device: vk::Device, acceleration_structure_count: u32, p_acceleration_structures: *const vk::AccelerationStructureKHR, query_type: vk::QueryType, data_size: usize, p_data: *mut c_void, stride: usize) -> vk::Result;
                    GetAccelerationStructureDeviceAddressKHR: get_acceleration_structure_device_address_khr(device: vk::Device, p_info: *const vk::AccelerationStructureDeviceAddressInfoKHR) -> vk::DeviceAddress;
                    GetDeviceAccelerationStructureCompatibilityKHR: get_device_acceleration_structure_compatibility_khr(device: vk::Device, p_version_info: *const vk::AccelerationStructureVersionInfoKHR, p_compatibility: *mut vk::AccelerationStructureCompatibilityKHR);
                    GetAccelerationStructureBuildSizesKHR: get_acceleration_structure_build_sizes_khr(device: vk::Device, build_type: vk::AccelerationStructureBuildTypeKHR, p_build_info: *const vk::AccelerationStructureBuildGeometryInfoKHR, p_max_primitive_counts: *const u32, p_size_info: *mut vk::AccelerationStructureBuildSizesInfoKHR);
                    CreateRayTracingPipelinesKHR: create_ray_tracing_pipelines_khr(device: vk::Device, deferred_operation: vk::DeferredOperationKHR, pipeline_cache: vk::PipelineCache, create_info_count: u32, p_create_infos: *const vk::RayTracingPipelineCreateInfoKHR, p_allocator: *const vk::AllocationCallbacks, p_pipelines: *mut vk::Pipeline) -> vk::Result;
                    GetRayTracingShaderGroupHandlesKHR: get_ray_tracing_shader_group_handles_khr(device: vk::Device, pipeline: vk::Pipeline, first_group: u32, group_count: u32, data_size: usize, p_data: *mut c_void) -> vk::Result;
                    GetRayTracingCaptureReplayShaderGroupHandlesKHR: get_ray_tracing_capture_replay_shader_group_handles_khr(device: vk::Device, pipeline: vk::Pipeline, first_group: u32, group_count: u32, data_size: usize, p_data: *mut c_void) -> vk::Result;
                    GetRayTracingShaderGroupStackSizeKHR: get_ray_tracing_shader_group_stack_size_khr(device: vk::Device, pipeline: vk::Pipeline, group: u32, group_shader: vk::ShaderGroupShaderKHR) -> vk::DeviceSize;
                    GetImageDrmFormatModifierPropertiesEXT: get_image_drm_format_modifier_properties_ext(device: vk::Device, image: vk::Image, p_properties: *mut vk::ImageDrmFormatModifierPropertiesEXT) -> vk::Result;
                    CreateValidationCacheEXT: create_validation_cache_ext(device: vk::Device, p_create_info: *const vk::ValidationCacheCreateInfoEXT, p_allocator: *const vk::AllocationCallbacks, p_validation_cache: *mut vk::ValidationCacheEXT) -> vk::Result;
                    DestroyValidationCacheEXT: destroy_validation_cache_ext(device: vk::Device, validation_cache: vk::ValidationCacheEXT, p_allocator: *const vk::AllocationCallbacks);
                    MergeValidationCachesEXT: merge_validation_caches_ext(device: vk::Device, dst_cache: vk::ValidationCacheEXT, src_cache_count: u32, p_src_caches: *const vk::ValidationCacheEXT) -> vk::Result;
                    GetValidationCacheDataEXT: get_validation_cache_data_ext(device: vk::Device, validation_cache: vk::ValidationCacheEXT, p_data_size: *mut usize, p_data: *mut c_void) -> vk::Result;
                    CreateAccelerationStructureNV: create_acceleration_structure_nv(device: vk::Device, p_create_info: *const vk::AccelerationStructureCreateInfoNV, p_allocator: *const vk::AllocationCallbacks, p_acceleration_structure: *mut vk::AccelerationStructureNV) -> vk::Result;
                    DestroyAccelerationStructureNV: destroy_acceleration_structure_nv(device: vk::Device, acceleration_structure: vk::AccelerationStructureNV, p_allocator: *const vk::AllocationCallbacks);
                    GetAccelerationStructureMemoryRequirementsNV: get_acceleration_structure_memory_requirements_nv(device: vk::Device, p_info: *const vk::AccelerationStructureMemoryRequirementsInfoNV, p_memory_requirements: *mut vk::MemoryRequirements2KHR);
                    BindAccelerationStructureMemoryNV: bind_acceleration_structure_memory_nv(device: vk::Device, bind_info_count: u32, p_bind_infos: *const vk::BindAccelerationStructureMemoryInfoNV) -> vk::Result;
                    CreateRayTracingPipelinesNV: create_ray_tracing_pipelines_nv(device: vk::Device, pipeline_cache: vk::PipelineCache, create_info_count: u32, p_create_infos: *const vk::RayTracingPipelineCreateInfoNV, p_allocator: *const vk::AllocationCallbacks, p_pipelines: *mut vk::Pipeline) -> vk::Result;
                    GetAccelerationStructureHandleNV: get_acceleration_structure_handle_nv(device: vk::Device, acceleration_structure: vk::AccelerationStructureNV, data_size: usize, p_data: *mut c_void) -> vk::Result;
                    CompileDeferredNV: compile_deferred_nv(device: vk::Device, pipeline: vk::Pipeline, shader: u32) -> vk::Result;
                    GetMemoryHostPointerPropertiesEXT: get_memory_host_pointer_properties_ext(device: vk::Device, handle_type: vk::ExternalMemoryHandleTypeFlags, p_host_pointer: *const c_void, p_memory_host_pointer_properties: *mut vk::MemoryHostPointerPropertiesEXT) -> vk::Result;
                    GetCalibratedTimestampsKHR: get_calibrated_timestamps_khr(device: vk::Device, timestamp_count: u32, p_timestamp_infos: *const vk::CalibratedTimestampInfoKHR, p_timestamps: *mut u64, p_max_deviation: *mut u64) -> vk::Result;
                    InitializePerformanceApiINTEL: initialize_performance_api_intel(device: vk::Device, p_initialize_info: *const vk::InitializePerformanceApiInfoINTEL) -> vk::Result;
                    UninitializePerformanceApiINTEL: uninitialize_performance_api_intel(device: vk::Device);
                    AcquirePerformanceConfigurationINTEL: acquire_performance_configuration_intel(device: vk::Device, p_acquire_info: *const vk::PerformanceConfigurationAcquireInfoINTEL, p_configuration: *mut vk::PerformanceConfigurationINTEL) -> vk::Result;
                    ReleasePerformanceConfigurationINTEL: release_performance_configuration_intel(device: vk::Device, configuration: vk::PerformanceConfigurationINTEL) -> vk::Result;
                    GetPerformanceParameterINTEL: get_performance_parameter_intel(device: vk::Device, parameter: vk::PerformanceParameterTypeINTEL, p_value: *mut vk::PerformanceValueINTEL) -> vk::Result;
                    SetLocalDimmingAMD: set_local_dimming_amd(device: vk::Device, swap_chain: vk::SwapchainKHR, local_dimming_enable: vk::Bool32);
                    AcquireFullScreenExclusiveModeEXT: acquire_full_screen_exclusive_mode_ext(device: vk::Device, swapchain: vk::SwapchainKHR) -> vk::Result;
                    ReleaseFullScreenExclusiveModeEXT: release_full_screen_exclusive_mode_ext(device: vk::Device, swapchain: vk::SwapchainKHR) -> vk::Result;
                    GetDeviceGroupSurfacePresentModes2EXT: get_device_group_surface_present_modes2_ext(device: vk::Device, p_surface_info: *const vk::PhysicalDeviceSurfaceInfo2KHR, p_modes: *mut vk::DeviceGroupPresentModeFlagsKHR) -> vk::Result;
                    CreateDeferredOperationKHR: create_deferred_operation_khr(device: vk::Device, p_allocator: *const vk::AllocationCallbacks, p_deferred_operation: *mut vk::DeferredOperationKHR) -> vk::Result;
                    DestroyDeferredOperationKHR: destroy_deferred_operation_khr(device: vk::Device, operation: vk::DeferredOperationKHR, p_allocator: *const vk::AllocationCallbacks);
                    GetDeferredOperationMaxConcurrencyKHR: get_deferred_operation_max_concurrency_khr(device: vk::Device, operation: vk::DeferredOperationKHR) -> u32;
                    GetDeferredOperationResultKHR: get_deferred_operation_result_khr(device: vk::Device, operation: vk::DeferredOperationKHR) -> vk::Result;
                    DeferredOperationJoinKHR: deferred_operation_join_khr(device: vk::Device, operation: vk::DeferredOperationKHR) -> vk::Result;
                    GetPipelineExecutablePropertiesKHR: get_pipeline_executable_properties_khr(device: vk::Device, p_pipeline_info: *const vk::PipelineInfoKHR, p_executable_count: *mut u32, p_properties: *mut vk::PipelineExecutablePropertiesKHR) -> vk::Result;
                    GetPipelineExecutableStatisticsKHR: get_pipeline_executable_statistics_khr(device: vk::Device, p_executable_info: *const vk::PipelineExecutableInfoKHR, p_statistic_count: *mut u32, p_statistics: *mut vk::PipelineExecutableStatisticKHR) -> vk::Result;
                    GetPipelineExecutableInternalRepresentationsKHR: get_pipeline_executable_internal_representations_khr(device: vk::Device, p_executable_info: *const vk::PipelineExecutableInfoKHR, p_internal_representation_count: *mut u32, p_internal_representations: *mut vk::PipelineExecutableInternalRepresentationKHR) -> vk::Result;
                    CopyMemoryToImageEXT: copy_memory_to_image_ext(device: vk::Device, p_copy_memory_to_image_info: *const vk::CopyMemoryToImageInfoEXT) -> vk::Result;
                    CopyImageToMemoryEXT: copy_image_to_memory_ext(device: vk::Device, p_copy_image_to_memory_info: *const vk::CopyImageToMemoryInfoEXT) -> vk::Result;
                    CopyImageToImageEXT: copy_image_to_image_ext(device: vk::Device, p_copy_image_to_image_info: *const vk::CopyImageToImageInfoEXT) -> vk::Result;
                    TransitionImageLayoutEXT: transition_image_layout_ext(device: vk::Device, transition_count: u32, p_transitions: *const vk::HostImageLayoutTransitionInfoEXT) -> vk::Result;
                    GetImageSubresourceLayout2KHR: get_image_subresource_layout2_khr(device: vk::Device, image: vk::Image, p_subresource: *const vk::ImageSubresource2KHR, p_layout: *mut vk::SubresourceLayout2KHR);
                    MapMemory2KHR: map_memory2_khr(device: vk::Device, p_memory_map_info: *const vk::MemoryMapInfoKHR, pp_data: *mut *mut c_void) -> vk::Result;
                    UnmapMemory2KHR: unmap_memory2_khr(device: vk::Device, p_memory_unmap_info: *const vk::MemoryUnmapInfoKHR) -> vk::Result;
                    ReleaseSwapchainImagesEXT: release_swapchain_images_ext(device: vk::Device, p_release_info: *const vk::ReleaseSwapchainImagesInfoEXT) -> vk::Result;
                    GetGeneratedCommandsMemoryRequirementsNV: get_generated_commands_memory_requirements_nv(device: vk::Device, p_info: *const vk::GeneratedCommandsMemoryRequirementsInfoNV, p_memory_requirements: *mut vk::MemoryRequirements2);
                    CreateIndirectCommandsLayoutNV: create_indirect_commands_layout_nv(device: vk::Device, p_create_info: *const vk::IndirectCommandsLayoutCreateInfoNV, p_allocator: *const vk::AllocationCallbacks, p_indirect_commands_layout: *mut vk::IndirectCommandsLayoutNV) -> vk::Result;
                    DestroyIndirectCommandsLayoutNV: destroy_indirect_commands_layout_nv(device: vk::Device, indirect_commands_layout: vk::IndirectCommandsLayoutNV, p_allocator: *const vk::AllocationCallbacks);
                    GetEncodedVideoSessionParametersKHR: get_encoded_video_session_parameters_khr(device: vk::Device, p_video_session_parameters_info: *const vk::VideoEncodeSessionParametersGetInfoKHR, p_feedback_info: *mut vk::VideoEncodeSessionParametersFeedbackInfoKHR, p_data_size: *mut usize, p_data: *mut c_void) -> vk::Result;
                    CreateCudaModuleNV: create_cuda_module_nv(device: vk::Device, p_create_info: *const vk::CudaModuleCreateInfoNV, p_allocator: *const vk::AllocationCallbacks, p_module: *mut vk::CudaModuleNV) -> vk::Result;
                    GetCudaModuleCacheNV: get_cuda_module_cache_nv(device: vk::Device, module: vk::CudaModuleNV, p_cache_size: *mut usize, p_cache_data: *mut c_void) -> vk::Result;
                    CreateCudaFunctionNV: create_cuda_function_nv(device: vk::Device, p_create_info: *const vk::CudaFunctionCreateInfoNV, p_allocator: *const vk::AllocationCallbacks, p_function: *mut vk::CudaFunctionNV) -> vk::Result;
                    DestroyCudaModuleNV: destroy_cuda_module_nv(device: vk::Device, module: vk::CudaModuleNV, p_allocator: *const vk::AllocationCallbacks);
                    DestroyCudaFunctionNV: destroy_cuda_function_nv(device: vk::Device, function: vk::CudaFunctionNV, p_allocator: *const vk::AllocationCallbacks);
                    ExportMetalObjectsEXT: export_metal_objects_ext(device: vk::Device, p_metal_objects_info: *mut vk::ExportMetalObjectsInfoEXT);
                    GetDescriptorSetLayoutSizeEXT: get_descriptor_set_layout_size_ext(device: vk::Device, layout: vk::DescriptorSetLayout, p_layout_size_in_bytes: *mut vk::DeviceSize);
                    GetDescriptorSetLayoutBindingOffsetEXT: get_descriptor_set_layout_binding_offset_ext(device: vk::Device, layout: vk::DescriptorSetLayout, binding: u32, p_offset: *mut vk::DeviceSize);
                    GetDescriptorEXT: get_descriptor_ext(device: vk::Device, p_descriptor_info: *const vk::DescriptorGetInfoEXT, data_size: usize, p_descriptor: *mut c_void);
                    GetBufferOpaqueCaptureDescriptorDataEXT: get_buffer_opaque_capture_descriptor_data_ext(device: vk::Device, p_info: *const vk::BufferCaptureDescriptorDataInfoEXT, p_data: *mut c_void) -> vk::Result;
                    GetImageOpaqueCaptureDescriptorDataEXT: get_image_opaque_capture_descriptor_data_ext(device: vk::Device, p_info: *const vk::ImageCaptureDescriptorDataInfoEXT, p_data: *mut c_void) -> vk::Result;
                    GetImageViewOpaqueCaptureDescriptorDataEXT: get_image_view_opaque_capture_descriptor_data_ext(device: vk::Device, p_info: *const vk::ImageViewCaptureDescriptorDataInfoEXT, p_data: *mut c_void) -> vk::Result;
                    GetSamplerOpaqueCaptureDescriptorDataEXT: get_sampler_opaque_capture_descriptor_data_ext(device: vk::Device, p_info: *const vk::SamplerCaptureDescriptorDataInfoEXT, p_data: *mut c_void) -> vk::Result;
                    GetAccelerationStructureOpaqueCaptureDescriptorDataEXT: get_acceleration_structure_opaque_capture_descriptor_data_ext(device: vk::Device, p_info: *const vk::AccelerationStructureCaptureDescriptorDataInfoEXT, p_data: *mut c_void) -> vk::Result;
                    GetDeviceFaultInfoEXT: get_device_fault_info_ext(device: vk::Device, p_fault_counts: *mut vk::DeviceFaultCountsEXT, p_fault_info: *mut vk::DeviceFaultInfoEXT) -> vk::Result;
                    GetMemoryZirconHandleFUCHSIA: get_memory_zircon_handle_fuchsia(device: vk::Device, p_get_zircon_handle_info: *const vk::MemoryGetZirconHandleInfoFUCHSIA, p_zircon_handle: *mut vk::zx_handle_t) -> vk::Result;
                    GetMemoryZirconHandlePropertiesFUCHSIA: get_memory_zircon_handle_properties_fuchsia(device: vk::Device, handle_type: vk::ExternalMemoryHandleTypeFlags, zircon_handle: vk::zx_handle_t, p_memory_zircon_handle_properties: *mut vk::MemoryZirconHandlePropertiesFUCHSIA) -> vk::Result;
                    ImportSemaphoreZirconHandleFUCHSIA: import_semaphore_zircon_handle_fuchsia(device: vk::Device, p_import_semaphore_zircon_handle_info: *const vk::ImportSemaphoreZirconHandleInfoFUCHSIA) -> vk::Result;
                    GetSemaphoreZirconHandleFUCHSIA: get_semaphore_zircon_handle_fuchsia(device: vk::Device, p_get_zircon_handle_info: *const vk::SemaphoreGetZirconHandleInfoFUCHSIA, p_zircon_handle: *mut vk::zx_handle_t) -> vk::Result;
                    CreateBufferCollectionFUCHSIA: create_buffer_collection_fuchsia(device: vk::Device, p_create_info: *const vk::BufferCollectionCreateInfoFUCHSIA, p_allocator: *const vk::AllocationCallbacks, p_collection: *mut vk::BufferCollectionFUCHSIA) -> vk::Result;
                    SetBufferCollectionImageConstraintsFUCHSIA: set_buffer_collection_image_constraints_fuchsia(device: vk::Device, collection: vk::BufferCollectionFUCHSIA, p_image_constraints_info: *const vk::ImageConstraintsInfoFUCHSIA) -> vk::Result;
                    SetBufferCollectionBufferConstraintsFUCHSIA: set_buffer_collection_buffer_constraints_fuchsia(device: vk::Device, collection: vk::BufferCollectionFUCHSIA, p_buffer_constraints_info: *const vk::BufferConstraintsInfoFUCHSIA) -> vk::Result;
                    DestroyBufferCollectionFUCHSIA: destroy_buffer_collection_fuchsia(device: vk::Device, collection: vk::BufferCollectionFUCHSIA, p_allocator: *const vk::AllocationCallbacks);
                    GetBufferCollectionPropertiesFUCHSIA: get_buffer_collection_properties_fuchsia(device: vk::Device, collection: vk::BufferCollectionFUCHSIA, p_properties: *mut vk::BufferCollectionPropertiesFUCHSIA) -> vk::Result;
                    GetDeviceSubpassShadingMaxWorkgroupSizeHUAWEI: get_device_subpass_shading_max_workgroup_size_huawei(device: vk::Device, renderpass: vk::RenderPass, p_max_workgroup_size: *mut vk::Extent2D) -> vk::Result;
                    GetMemoryRemoteAddressNV: get_memory_remote_address_nv(device: vk::Device, p_memory_get_remote_address_info: *const vk::MemoryGetRemoteAddressInfoNV, p_address: *mut vk::RemoteAddressNV) -> vk::Result;
                    GetPipelinePropertiesEXT: get_pipeline_properties_ext(device: vk::Device, p_pipeline_info: *const vk::PipelineInfoEXT, p_pipeline_properties: *mut vk::BaseOutStructure) -> vk::Result;
                    CreateMicromapEXT: create_micromap_ext(device: vk::Device, p_create_info: *const vk::MicromapCreateInfoEXT, p_allocator: *const vk::AllocationCallbacks, p_micromap: *mut vk::MicromapEXT) -> vk::Result;
                    DestroyMicromapEXT: destroy_micromap_ext(device: vk::Device, micromap: vk::MicromapEXT, p_allocator: *const vk::AllocationCallbacks);
                    BuildMicromapsEXT: build_micromaps_ext(device: vk::Device, deferred_operation: vk::DeferredOperationKHR, info_count: u32, p_infos: *const vk::MicromapBuildInfoEXT) -> vk::Result;
                    CopyMicromapEXT: copy_micromap_ext(device: vk::Device, deferred_operation: vk::DeferredOperationKHR, p_info: *const vk::CopyMicromapInfoEXT) -> vk::Result;
                    CopyMicromapToMemoryEXT: copy_micromap_to_memory_ext(device: vk::Device, deferred_operation: vk::DeferredOperationKHR, p_info: *const vk::CopyMicromapToMemoryInfoEXT) -> vk::Result;
                    CopyMemoryToMicromapEXT: copy_memory_to_micromap_ext(device: vk::Device, deferred_operation: vk::DeferredOperationKHR, p_info: *const vk::CopyMemoryToMicromapInfoEXT) -> vk::Result;
                    WriteMicromapsPropertiesEXT: write_micromaps_properties_ext(device: vk::Device, micromap_count: u32, p_micromaps: *const vk::MicromapEXT, query_type: vk::QueryType, data_size: usize, p_data: *mut c_void, stride: usize) -> vk::Result;
                    GetDeviceMicromapCompatibilityEXT: get_device_micromap_compatibility_ext(device: vk::Device, p_version_info: *const vk::MicromapVersionInfoEXT, p_compatibility: *mut vk::AccelerationStructureCompatibilityKHR);
                    GetMicromapBuildSizesEXT: get_micromap_build_sizes_ext(device: vk::Device, build_type: vk::AccelerationStructureBuildTypeKHR, p_build_info: *const vk::MicromapBuildInfoEXT, p_size_info: *mut vk::MicromapBuildSizesInfoEXT);
                    SetDeviceMemoryPriorityEXT: set_device_memory_priority_ext(device: vk::Device, memory: vk::DeviceMemory, priority: f32);
                    GetDescriptorSetLayoutHostMappingInfoVALVE: get_descriptor_set_layout_host_mapping_info_valve(device: vk::Device, p_binding_reference: *const vk::DescriptorSetBindingReferenceVALVE, p_host_mapping: *mut vk::DescriptorSetLayoutHostMappingInfoVALVE);
                    GetDescriptorSetHostMappingVALVE: get_descriptor_set_host_mapping_valve(device: vk::Device, descriptor_set: vk::DescriptorSet, pp_data: *mut *mut c_void);
                    GetPipelineIndirectMemoryRequirementsNV: get_pipeline_indirect_memory_requirements_nv(device: vk::Device, p_create_info: *const vk::ComputePipelineCreateInfo, p_memory_requirements: *mut vk::MemoryRequirements2);
                    GetPipelineIndirectDeviceAddressNV: get_pipeline_indirect_device_address_nv(device: vk::Device, p_info: *const vk::PipelineIndirectDeviceAddressInfoNV) -> vk::DeviceAddress;
                    GetShaderModuleIdentifierEXT: get_shader_module_identifier_ext(device: vk::Device, shader_module: vk::ShaderModule, p_identifier: *mut vk::ShaderModuleIdentifierEXT);
                    GetShaderModuleCreateInfoIdentifierEXT: get_shader_module_create_info_identifier_ext(device: vk::Device, p_create_info: *const vk::ShaderModuleCreateInfo, p_identifier: *mut vk::ShaderModuleIdentifierEXT);
                    CreateOpticalFlowSessionNV: create_optical_flow_session_nv(device: vk::Device, p_create_info: *const vk::OpticalFlowSessionCreateInfoNV, p_allocator: *const vk::AllocationCallbacks, p_session: *mut vk::OpticalFlowSessionNV) -> vk::Result;
                    DestroyOpticalFlowSessionNV: destroy_optical_flow_session_nv(device: vk::Device, session: vk::OpticalFlowSessionNV, p_allocator: *const vk::AllocationCallbacks);
                    BindOpticalFlowSessionImageNV: bind_optical_flow_session_image_nv(device: vk::Device, session: vk::OpticalFlowSessionNV, binding_point: vk::OpticalFlowSessionBindingPointNV, view: vk::ImageView, layout: vk::ImageLayout) -> vk::Result;
                    GetRenderingAreaGranularityKHR: get_rendering_area_granularity_khr(device: vk::Device, p_rendering_area_info: *const vk::RenderingAreaInfoKHR, p_granularity: *mut vk::Extent2D);
                    GetDeviceImageSubresourceLayoutKHR: get_device_image_subresource_layout_khr(device: vk::Device, p_info: *const vk::DeviceImageSubresourceInfoKHR, p_layout: *mut vk::SubresourceLayout2KHR);
                    CreateShadersEXT: create_shaders_ext(device: vk::Device, create_info_count: u32, p_create_infos: *const vk::ShaderCreateInfoEXT, p_allocator: *const vk::AllocationCallbacks, p_shaders: *mut vk::ShaderEXT) -> vk::Result;
                    DestroyShaderEXT: destroy_shader_ext(device: vk::Device, shader: vk::ShaderEXT, p_allocator: *const vk::AllocationCallbacks);
                    GetShaderBinaryDataEXT: get_shader_binary_data_ext(device: vk::Device, shader: vk::ShaderEXT, p_data_size: *mut usize, p_data: *mut c_void) -> vk::Result;
                    GetFramebufferTilePropertiesQCOM: get_framebuffer_tile_properties_qcom(device: vk::Device, framebuffer: vk::Framebuffer, p_properties_count: *mut u32, p_properties: *mut vk::TilePropertiesQCOM) -> vk::Result;
                    GetDynamicRenderingTilePropertiesQCOM: get_dynamic_rendering_tile_properties_qcom(device: vk::Device, p_rendering_info: *const vk::RenderingInfo, p_properties: *mut vk::TilePropertiesQCOM) -> vk::Result;
                    SetLatencySleepModeNV: set_latency_sleep_mode_nv(device: vk::Device, swapchain: vk::SwapchainKHR, p_sleep_mode_info: *const vk::LatencySleepModeInfoNV) -> vk::Result;
                    LatencySleepNV: latency_sleep_nv(device: vk::Device, swapchain: vk::SwapchainKHR, p_sleep_info: *const vk::LatencySleepInfoNV) -> vk::Result;
                    SetLatencyMarkerNV: set_latency_marker_nv(device: vk::Device, swapchain: vk::SwapchainKHR, p_latency_marker_info: *const vk::SetLatencyMarkerInfoNV);
                    GetLatencyTimingsNV: get_latency_timings_nv(device: vk::Device, swapchain: vk::SwapchainKHR, p_latency_marker_info: *mut vk::GetLatencyMarkerInfoNV);
                    GetScreenBufferPropertiesQNX: get_screen_buffer_properties_qnx(device: vk::Device, buffer: *const vk::_screen_buffer, p_properties: *mut vk::ScreenBufferPropertiesQNX) -> vk::Result;
                }
            }

            queue {
                forward {
                    QueueSubmit: queue_submit(queue: vk::Queue, submit_count: u32, p_submits: *const vk::SubmitInfo, fence: vk::Fence) -> vk::Result;
                    QueueWaitIdle: queue_wait_idle(queue: vk::Queue) -> vk::Result;
                    QueueBindSparse: queue_bind_sparse(queue: vk::Queue, bind_info_count: u32, p_bind_info: *const vk::BindSparseInfo, fence: vk::Fence) -> vk::Result;
                    QueueSubmit2: queue_submit2(queue: vk::Queue, submit_count: u32, p_submits: *const vk::SubmitInfo2, fence: vk::Fence) -> vk::Result;
                    QueuePresentKHR: queue_present_khr(queue: vk::Queue, p_present_info: *const vk::PresentInfoKHR) -> vk::Result;
                    QueueBeginDebugUtilsLabelEXT: queue_begin_debug_utils_label_ext(queue: vk::Queue, p_label_info: *const vk::DebugUtilsLabelEXT);
                    QueueEndDebugUtilsLabelEXT: queue_end_debug_utils_label_ext(queue: vk::Queue);
                    QueueInsertDebugUtilsLabelEXT: queue_insert_debug_utils_label_ext(queue: vk::Queue, p_label_info: *const vk::DebugUtilsLabelEXT);

                    QueueSignalReleaseImageANDROID: queue_signal_release_image_android(queue: vk::Queue, wait_semaphore_count: u32, p_wait_semaphores: *const vk::Semaphore, image: vk::Image, p_native_fence_fd: *mut c_int) -> vk::Result;
                    GetQueueCheckpointDataNV: get_queue_checkpoint_data_nv(queue: vk::Queue, p_checkpoint_data_count: *mut u32, p_checkpoint_data: *mut vk::CheckpointDataNV);
                    QueueSetPerformanceConfigurationINTEL: queue_set_performance_configuration_intel(queue: vk::Queue, configuration: vk::PerformanceConfigurationINTEL) -> vk::Result;
                    GetQueueCheckpointData2NV: get_queue_checkpoint_data2_nv(queue: vk::Queue, p_checkpoint_data_count: *mut u32, p_checkpoint_data: *mut vk::CheckpointData2NV);
                    QueueNotifyOutOfBandNV: queue_notify_out_of_band_nv(queue: vk::Queue, p_queue_type_info: *const vk::OutOfBandQueueTypeInfoNV);
                }
            }

            command_buffer {
                forward {
                    BeginCommandBuffer: begin_command_buffer(command_buffer: vk::CommandBuffer, p_begin_info: *const vk::CommandBufferBeginInfo) -> vk::Result;
                    EndCommandBuffer: end_command_buffer(command_buffer: vk::CommandBuffer) -> vk::Result;
                    ResetCommandBuffer: reset_command_buffer(command_buffer: vk::CommandBuffer, flags: vk::CommandBufferResetFlags) -> vk::Result;
                    CmdBindPipeline: cmd_bind_pipeline(command_buffer: vk::CommandBuffer, pipeline_bind_point: vk::PipelineBindPoint, pipeline: vk::Pipeline);
                    CmdSetViewport: cmd_set_viewport(command_buffer: vk::CommandBuffer, first_viewport: u32, viewport_count: u32, p_viewports: *const vk::Viewport);
                    CmdSetScissor: cmd_set_scissor(command_buffer: vk::CommandBuffer, first_scissor: u32, scissor_count: u32, p_scissors: *const vk::Rect2D);
                    CmdSetLineWidth: cmd_set_line_width(command_buffer: vk::CommandBuffer, line_width: f32);
                    CmdSetDepthBias: cmd_set_depth_bias(command_buffer: vk::CommandBuffer, depth_bias_constant_factor: f32, depth_bias_clamp: f32, depth_bias_slope_factor: f32);
                    CmdSetBlendConstants: cmd_set_blend_constants(command_buffer: vk::CommandBuffer, blend_constants: *const [f32; 4]);
                    CmdSetDepthBounds: cmd_set_depth_bounds(command_buffer: vk::CommandBuffer, min_depth_bounds: f32, max_depth_bounds: f32);
                    CmdSetStencilCompareMask: cmd_set_stencil_compare_mask(command_buffer: vk::CommandBuffer, face_mask: vk::StencilFaceFlags, compare_mask: u32);
                    CmdSetStencilWriteMask: cmd_set_stencil_write_mask(command_buffer: vk::CommandBuffer, face_mask: vk::StencilFaceFlags, write_mask: u32);
                    CmdSetStencilReference: cmd_set_stencil_reference(command_buffer: vk::CommandBuffer, face_mask: vk::StencilFaceFlags, reference: u32);
                    CmdBindDescriptorSets: cmd_bind_descriptor_sets(command_buffer: vk::CommandBuffer, pipeline_bind_point: vk::PipelineBindPoint, layout: vk::PipelineLayout, first_set: u32, descriptor_set_count: u32, p_descriptor_sets: *const vk::DescriptorSet, dynamic_offset_count: u32, p_dynamic_offsets: *const u32);
                    CmdBindIndexBuffer: cmd_bind_index_buffer(command_buffer: vk::CommandBuffer, buffer: vk::Buffer, offset: vk::DeviceSize, index_type: vk::IndexType);
                    CmdBindVertexBuffers: cmd_bind_vertex_buffers(command_buffer: vk::CommandBuffer, first_binding: u32, binding_count: u32, p_buffers: *const vk::Buffer, p_offsets: *const vk::DeviceSize);
                    CmdDraw: cmd_draw(command_buffer: vk::CommandBuffer, vertex_count: u32, instance_count: u32, first_vertex: u32, first_instance: u32);
                    CmdDrawIndexed: cmd_draw_indexed(command_buffer: vk::CommandBuffer, index_count: u32, instance_count: u32, first_index: u32, vertex_offset: i32, first_instance: u32);
                    CmdDrawIndirect: cmd_draw_indirect(command_buffer: vk::CommandBuffer, buffer: vk::Buffer, offset: vk::DeviceSize, draw_count: u32, stride: u32);
                    CmdDrawIndexedIndirect: cmd_draw_indexed_indirect(command_buffer: vk::CommandBuffer, buffer: vk::Buffer, offset: vk::DeviceSize, draw_count: u32, stride: u32);
                    CmdDispatch: cmd_dispatch(command_buffer: vk::CommandBuffer, group_count_x: u32, group_count_y: u32, group_count_z: u32);
                    CmdDispatchIndirect: cmd_dispatch_indirect(command_buffer: vk::CommandBuffer, buffer: vk::Buffer, offset: vk::DeviceSize);
                    CmdCopyBuffer: cmd_copy_buffer(command_buffer: vk::CommandBuffer, src_buffer: vk::Buffer, dst_buffer: vk::Buffer, region_count: u32, p_regions: *const vk::BufferCopy);
                    CmdCopyImage: cmd_copy_image(command_buffer: vk::CommandBuffer, src_image: vk::Image, src_image_layout: vk::ImageLayout, dst_image: vk::Image, dst_image_layout: vk::ImageLayout, region_count: u32, p_regions: *const vk::ImageCopy);
                    CmdBlitImage: cmd_blit_image(command_buffer: vk::CommandBuffer, src_image: vk::Image, src_image_layout: vk::ImageLayout, dst_image: vk::Image, dst_image_layout: vk::ImageLayout, region_count: u32, p_regions: *const vk::ImageBlit, filter: vk::Filter);
                    CmdCopyBufferToImage: cmd_copy_buffer_to_image(command_buffer: vk::CommandBuffer, src_buffer: vk::Buffer, dst_image: vk::Image, dst_image_layout: vk::ImageLayout, region_count: u32, p_regions: *const vk::BufferImageCopy);
                    CmdCopyImageToBuffer: cmd_copy_image_to_buffer(command_buffer: vk::CommandBuffer, src_image: vk::Image, src_image_layout: vk::ImageLayout, dst_buffer: vk::Buffer, region_count: u32, p_regions: *const vk::BufferImageCopy);
                    CmdUpdateBuffer: cmd_update_buffer(command_buffer: vk::CommandBuffer, dst_buffer: vk::Buffer, dst_offset: vk::DeviceSize, data_size: vk::DeviceSize, p_data: *const c_void);
                    CmdFillBuffer: cmd_fill_buffer(command_buffer: vk::CommandBuffer, dst_buffer: vk::Buffer, dst_offset: vk::DeviceSize, size: vk::DeviceSize, data: u32);
                    CmdClearColorImage: cmd_clear_color_image(command_buffer: vk::CommandBuffer, image: vk::Image, image_layout: vk::ImageLayout, p_color: *const vk::ClearColorValue, range_count: u32, p_ranges: *const vk::ImageSubresourceRange);
                    CmdClearDepthStencilImage: cmd_clear_depth_stencil_image(command_buffer: vk::CommandBuffer, image: vk::Image, image_layout: vk::ImageLayout, p_depth_stencil: *const vk::ClearDepthStencilValue, range_count: u32, p_ranges: *const vk::ImageSubresourceRange);
                    CmdClearAttachments: cmd_clear_attachments(command_buffer: vk::CommandBuffer, attachment_count: u32, p_attachments: *const vk::ClearAttachment, rect_count: u32, p_rects: *const vk::ClearRect);
                    CmdResolveImage: cmd_resolve_image(command_buffer: vk::CommandBuffer, src_image: vk::Image, src_image_layout: vk::ImageLayout, dst_image: vk::Image, dst_image_layout: vk::ImageLayout, region_count: u32, p_regions: *const vk::ImageResolve);
                    CmdSetEvent: cmd_set_event(command_buffer: vk::CommandBuffer, event: vk::Event, stage_mask: vk::PipelineStageFlags);
                    CmdResetEvent: cmd_reset_event(command_buffer: vk::CommandBuffer, event: vk::Event, stage_mask: vk::PipelineStageFlags);
                    CmdWaitEvents: cmd_wait_events(command_buffer: vk::CommandBuffer, event_count: u32, p_events: *const vk::Event, src_stage_mask: vk::PipelineStageFlags, dst_stage_mask: vk::PipelineStageFlags, memory_barrier_count: u32, p_memory_barriers: *const vk::MemoryBarrier, buffer_memory_barrier_count: u32, p_buffer_memory_barriers: *const vk::BufferMemoryBarrier, image_memory_barrier_count: u32, p_image_memory_barriers: *const vk::ImageMemoryBarrier);
                    CmdPipelineBarrier: cmd_pipeline_barrier(command_buffer: vk::CommandBuffer, src_stage_mask: vk::PipelineStageFlags, dst_stage_mask: vk::PipelineStageFlags, dependency_flags: vk::DependencyFlags, memory_barrier_count: u32, p_memory_barriers: *const vk::MemoryBarrier, buffer_memory_barrier_count: u32, p_buffer_memory_barriers: *const vk::BufferMemoryBarrier, image_memory_barrier_count: u32, p_image_memory_barriers: *const vk::ImageMemoryBarrier);
                    CmdBeginQuery: cmd_begin_query(command_buffer: vk::CommandBuffer, query_pool: vk::QueryPool, query: u32, flags: vk::QueryControlFlags);
                    CmdEndQuery: cmd_end_query(command_buffer: vk::CommandBuffer, query_pool: vk::QueryPool, query: u32);
                    CmdResetQueryPool: cmd_reset_query_pool(command_buffer: vk::CommandBuffer, query_pool: vk::QueryPool, first_query: u32, query_count: u32);
                    CmdWriteTimestamp: cmd_write_timestamp(command_buffer: vk::CommandBuffer, pipeline_stage: vk::PipelineStageFlags, query_pool: vk::QueryPool, query: u32);
                    CmdCopyQueryPoolResults: cmd_copy_query_pool_results(command_buffer: vk::CommandBuffer, query_pool: vk::QueryPool, first_query: u32, query_count: u32, dst_buffer: vk::Buffer, dst_offset: vk::DeviceSize, stride: vk::DeviceSize, flags: vk::QueryResultFlags);
                    CmdPushConstants: cmd_push_constants(command_buffer: vk::CommandBuffer, layout: vk::PipelineLayout, stage_flags: vk::ShaderStageFlags, offset: u32, size: u32, p_values: *const c_void);
                    CmdBeginRenderPass: cmd_begin_render_pass(command_buffer: vk::CommandBuffer, p_render_pass_begin: *const vk::RenderPassBeginInfo, contents: vk::SubpassContents);
                    CmdNextSubpass: cmd_next_subpass(command_buffer: vk::CommandBuffer, contents: vk::SubpassContents);
                    CmdEndRenderPass: cmd_end_render_pass(command_buffer: vk::CommandBuffer);
                    CmdExecuteCommands: cmd_execute_commands(command_buffer: vk::CommandBuffer, command_buffer_count: u32, p_command_buffers: *const vk::CommandBuffer);

                    CmdSetDeviceMask: cmd_set_device_mask(command_buffer: vk::CommandBuffer, device_mask: u32);
                    CmdDispatchBase: cmd_dispatch_base(command_buffer: vk::CommandBuffer, base_group_x: u32, base_group_y: u32, base_group_z: u32, group_count_x: u32, group_count_y: u32, group_count_z: u32);

                    CmdDrawIndirectCount: cmd_draw_indirect_count(command_buffer: vk::CommandBuffer, buffer: vk::Buffer, offset: vk::DeviceSize, count_buffer: vk::Buffer, count_buffer_offset: vk::DeviceSize, max_draw_count: u32, stride: u32);
                    CmdDrawIndexedIndirectCount: cmd_draw_indexed_indirect_count(command_buffer: vk::CommandBuffer, buffer: vk::Buffer, offset: vk::DeviceSize, count_buffer: vk::Buffer, count_buffer_offset: vk::DeviceSize, max_draw_count: u32, stride: u32);
                    CmdBeginRenderPass2: cmd_begin_render_pass2(command_buffer: vk::CommandBuffer, p_render_pass_begin: *const vk::RenderPassBeginInfo, p_subpass_begin_info: *const vk::SubpassBeginInfo);
                    CmdNextSubpass2: cmd_next_subpass2(command_buffer: vk::CommandBuffer, p_subpass_begin_info: *const vk::SubpassBeginInfo, p_subpass_end_info: *const vk::SubpassEndInfo);
                    CmdEndRenderPass2: cmd_end_render_pass2(command_buffer: vk::CommandBuffer, p_subpass_end_info: *const vk::SubpassEndInfo);

                    CmdSetEvent2: cmd_set_event2(command_buffer: vk::CommandBuffer, event: vk::Event, p_dependency_info: *const vk::DependencyInfo);
                    CmdResetEvent2: cmd_reset_event2(command_buffer: vk::CommandBuffer, event: vk::Event, stage_mask: vk::PipelineStageFlags2);
                    CmdWaitEvents2: cmd_wait_events2(command_buffer: vk::CommandBuffer, event_count: u32, p_events: *const vk::Event, p_dependency_infos: *const vk::DependencyInfo);
                    CmdPipelineBarrier2: cmd_pipeline_barrier2(command_buffer: vk::CommandBuffer, p_dependency_info: *const vk::DependencyInfo);
                    CmdWriteTimestamp2: cmd_write_timestamp2(command_buffer: vk::CommandBuffer, stage: vk::PipelineStageFlags2, query_pool: vk::QueryPool, query: u32);
                    CmdCopyBuffer2: cmd_copy_buffer2(command_buffer: vk::CommandBuffer, p_copy_buffer_info: *const vk::CopyBufferInfo2);
                    CmdCopyImage2: cmd_copy_image2(command_buffer: vk::CommandBuffer, p_copy_image_info: *const vk::CopyImageInfo2);
                    CmdCopyBufferToImage2: cmd_copy_buffer_to_image2(command_buffer: vk::CommandBuffer, p_copy_buffer_to_image_info: *const vk::CopyBufferToImageInfo2);
                    CmdCopyImageToBuffer2: cmd_copy_image_to_buffer2(command_buffer: vk::CommandBuffer, p_copy_image_to_buffer_info: *const vk::CopyImageToBufferInfo2);
                    CmdBlitImage2: cmd_blit_image2(command_buffer: vk::CommandBuffer, p_blit_image_info: *const vk::BlitImageInfo2);
                    CmdResolveImage2: cmd_resolve_image2(command_buffer: vk::CommandBuffer, p_resolve_image_info: *const vk::ResolveImageInfo2);
                    CmdBeginRendering: cmd_begin_rendering(command_buffer: vk::CommandBuffer, p_rendering_info: *const vk::RenderingInfo);
                    CmdEndRendering: cmd_end_rendering(command_buffer: vk::CommandBuffer);
                    CmdSetCullMode: cmd_set_cull_mode(command_buffer: vk::CommandBuffer, cull_mode: vk::CullModeFlags);
                    CmdSetFrontFace: cmd_set_front_face(command_buffer: vk::CommandBuffer, front_face: vk::FrontFace);
                    CmdSetPrimitiveTopology: cmd_set_primitive_topology(command_buffer: vk::CommandBuffer, primitive_topology: vk::PrimitiveTopology);
                    CmdSetViewportWithCount: cmd_set_viewport_with_count(command_buffer: vk::CommandBuffer, viewport_count: u32, p_viewports: *const vk::Viewport);
                    CmdSetScissorWithCount: cmd_set_scissor_with_count(command_buffer: vk::CommandBuffer, scissor_count: u32, p_scissors: *const vk::Rect2D);
                    CmdBindVertexBuffers2: cmd_bind_vertex_buffers2(command_buffer: vk::CommandBuffer, first_binding: u32, binding_count: u32, p_buffers: *const vk::Buffer, p_offsets: *const vk::DeviceSize, p_sizes: *const vk::DeviceSize, p_strides: *const vk::DeviceSize);
                    CmdSetDepthTestEnable: cmd_set_depth_test_enable(command_buffer: vk::CommandBuffer, depth_test_enable: vk::Bool32);
                    CmdSetDepthWriteEnable: cmd_set_depth_write_enable(command_buffer: vk::CommandBuffer, depth_write_enable: vk::Bool32);
                    CmdSetDepthCompareOp: cmd_set_depth_compare_op(command_buffer: vk::CommandBuffer, depth_compare_op: vk::CompareOp);
                    CmdSetDepthBoundsTestEnable: cmd_set_depth_bounds_test_enable(command_buffer: vk::CommandBuffer, depth_bounds_test_enable: vk::Bool32);
                    CmdSetStencilTestEnable: cmd_set_stencil_test_enable(command_buffer: vk::CommandBuffer, stencil_test_enable: vk::Bool32);
                    CmdSetStencilOp: cmd_set_stencil_op(command_buffer: vk::CommandBuffer, face_mask: vk::StencilFaceFlags, fail_op: vk::StencilOp, pass_op: vk::StencilOp, depth_fail_op: vk::StencilOp, compare_op: vk::CompareOp);
                    CmdSetRasterizerDiscardEnable: cmd_set_rasterizer_discard_enable(command_buffer: vk::CommandBuffer, rasterizer_discard_enable: vk::Bool32);
                    CmdSetDepthBiasEnable: cmd_set_depth_bias_enable(command_buffer: vk::CommandBuffer, depth_bias_enable: vk::Bool32);
                    CmdSetPrimitiveRestartEnable: cmd_set_primitive_restart_enable(command_buffer: vk::CommandBuffer, primitive_restart_enable: vk::Bool32);

                    CmdPushDescriptorSetKHR: cmd_push_descriptor_set_khr(command_buffer: vk::CommandBuffer, pipeline_bind_point: vk::PipelineBindPoint, layout: vk::PipelineLayout, set: u32, descriptor_write_count: u32, p_descriptor_writes: *const vk::WriteDescriptorSet);
                    CmdBeginDebugUtilsLabelEXT: cmd_begin_debug_utils_label_ext(command_buffer: vk::CommandBuffer, p_label_info: *const vk::DebugUtilsLabelEXT);
                    CmdEndDebugUtilsLabelEXT: cmd_end_debug_utils_label_ext(command_buffer: vk::CommandBuffer);
                    CmdInsertDebugUtilsLabelEXT: cmd_insert_debug_utils_label_ext(command_buffer: vk::CommandBuffer, p_label_info: *const vk::DebugUtilsLabelEXT);

                    CmdDebugMarkerBeginEXT: cmd_debug_marker_begin_ext(command_buffer: vk::CommandBuffer, p_marker_info: *const vk::DebugMarkerMarkerInfoEXT);
                    CmdDebugMarkerEndEXT: cmd_debug_marker_end_ext(command_buffer: vk::CommandBuffer);
                    CmdDebugMarkerInsertEXT: cmd_debug_marker_insert_ext(command_buffer: vk::CommandBuffer, p_marker_info: *const vk::DebugMarkerMarkerInfoEXT);
                    CmdBeginVideoCodingKHR: cmd_begin_video_coding_khr(command_buffer: vk::CommandBuffer, p_begin_info: *const vk::VideoBeginCodingInfoKHR);
                    CmdEndVideoCodingKHR: cmd_end_video_coding_khr(command_buffer: vk::CommandBuffer, p_end_coding_info: *const vk::VideoEndCodingInfoKHR);
                    CmdControlVideoCodingKHR: cmd_control_video_coding_khr(command_buffer: vk::CommandBuffer, p_coding_control_info: *const vk::VideoCodingControlInfoKHR);
                    CmdDecodeVideoKHR: cmd_decode_video_khr(command_buffer: vk::CommandBuffer, p_decode_info: *const vk::VideoDecodeInfoKHR);
                    CmdBindTransformFeedbackBuffersEXT: cmd_bind_transform_feedback_buffers_ext(command_buffer: vk::CommandBuffer, first_binding: u32, binding_count: u32, p_buffers: *const vk::Buffer, p_offsets: *const vk::DeviceSize, p_sizes: *const vk::DeviceSize);
                    CmdBeginTransformFeedbackEXT: cmd_begin_transform_feedback_ext(command_buffer: vk::CommandBuffer, first_counter_buffer: u32, counter_buffer_count: u32, p_counter_buffers: *const vk::Buffer, p_counter_buffer_offsets: *const vk::DeviceSize);
                    CmdEndTransformFeedbackEXT: cmd_end_transform_feedback_ext(command_buffer: vk::CommandBuffer, first_counter_buffer: u32, counter_buffer_count: u32, p_counter_buffers: *const vk::Buffer, p_counter_buffer_offsets: *const vk::DeviceSize);
                    CmdBeginQueryIndexedEXT: cmd_begin_query_indexed_ext(command_buffer: vk::CommandBuffer, query_pool: vk::QueryPool, query: u32, flags: vk::QueryControlFlags, index: u32);
                    CmdEndQueryIndexedEXT: cmd_end_query_indexed_ext(command_buffer: vk::CommandBuffer, query_pool: vk::QueryPool, query: u32, index: u32);
                    CmdDrawIndirectByteCountEXT: cmd_draw_indirect_byte_count_ext(command_buffer: vk::CommandBuffer, instance_count: u32, first_instance: u32, counter_buffer: vk::Buffer, counter_buffer_offset: vk::DeviceSize, counter_offset: u32, vertex_stride: u32);
                    CmdCuLaunchKernelNVX: cmd_cu_launch_kernel_nvx(command_buffer: vk::CommandBuffer, p_launch_info: *const vk::CuLaunchInfoNVX);
                    CmdPushDescriptorSetWithTemplateKHR: cmd_push_descriptor_set_with_template_khr(command_buffer: vk::CommandBuffer, descriptor_update_template: vk::DescriptorUpdateTemplate, layout: vk::PipelineLayout, set: u32, p_data: *const c_void);
                    CmdBeginConditionalRenderingEXT: cmd_begin_conditional_rendering_ext(command_buffer: vk::CommandBuffer, p_conditional_rendering_begin: *const vk::ConditionalRenderingBeginInfoEXT);
                    CmdEndConditionalRenderingEXT: cmd_end_conditional_rendering_ext(command_buffer: vk::CommandBuffer);
                    CmdSetViewportWScalingNV: cmd_set_viewport_wscaling_nv(command_buffer: vk::CommandBuffer, first_viewport: u32, viewport_count: u32, p_viewport_w_scalings: *const vk::ViewportWScalingNV);
                    CmdSetDiscardRectangleEXT: cmd_set_discard_rectangle_ext(command_buffer: vk::CommandBuffer, first_discard_rectangle: u32, discard_rectangle_count: u32, p_discard_rectangles: *const vk::Rect2D);
                    CmdSetDiscardRectangleEnableEXT: cmd_set_discard_rectangle_enable_ext(command_buffer: vk::CommandBuffer, discard_rectangle_enable: vk::Bool32);
                    CmdSetDiscardRectangleModeEXT: cmd_set_discard_rectangle_mode_ext(command_buffer: vk::CommandBuffer, discard_rectangle_mode: vk::DiscardRectangleModeEXT);
                    CmdInitializeGraphScratchMemoryAMDX: cmd_initialize_graph_scratch_memory_amdx(command_buffer: vk::CommandBuffer, scratch: vk::DeviceAddress);
                    CmdDispatchGraphAMDX: cmd_dispatch_graph_amdx(command_buffer: vk::CommandBuffer, scratch: vk::DeviceAddress, p_count_info: *const vk::DispatchGraphCountInfoAMDX);
                    CmdDispatchGraphIndirectAMDX: cmd_dispatch_graph_indirect_amdx(command_buffer: vk::CommandBuffer, scratch: vk::DeviceAddress, p_count_info: *const vk::DispatchGraphCountInfoAMDX);
                    CmdDispatchGraphIndirectCountAMDX: cmd_dispatch_graph_indirect_count_amdx(command_buffer: vk::CommandBuffer, scratch: vk::DeviceAddress, count_info: vk::DeviceAddress);
                    CmdSetSampleLocationsEXT: cmd_set_sample_locations_ext(command_buffer: vk::CommandBuffer, p_sample_locations_info: *const vk::SampleLocationsInfoEXT);
                    CmdBuildAccelerationStructuresKHR: cmd_build_acceleration_structures_khr(command_buffer: vk::CommandBuffer, info_count: u32, p_infos: *const vk::AccelerationStructureBuildGeometryInfoKHR, pp_build_range_infos: *const *const vk::AccelerationStructureBuildRangeInfoKHR);
                    CmdBuildAccelerationStructuresIndirectKHR: cmd_build_acceleration_structures_indirect_khr(command_buffer: vk::CommandBuffer, info_count: u32, p_infos: *const vk::AccelerationStructureBuildGeometryInfoKHR, p_indirect_device_addresses: *const vk::DeviceAddress, p_indirect_strides: *const u32, pp_max_primitive_counts: *const *const u32);
                    CmdCopyAccelerationStructureKHR: cmd_copy_acceleration_structure_khr(command_buffer: vk::CommandBuffer, p_info: *const vk::CopyAccelerationStructureInfoKHR);
                    CmdCopyAccelerationStructureToMemoryKHR: cmd_copy_acceleration_structure_to_memory_khr(command_buffer: vk::CommandBuffer, p_info: *const vk::CopyAccelerationStructureToMemoryInfoKHR);
                    CmdCopyMemoryToAccelerationStructureKHR: cmd_copy_memory_to_acceleration_structure_khr(command_buffer: vk::CommandBuffer, p_info: *const vk::CopyMemoryToAccelerationStructureInfoKHR);
                    CmdWriteAccelerationStructuresPropertiesKHR: cmd_write_acceleration_structures_properties_khr(command_buffer: vk::CommandBuffer, acceleration_structure_count: u32, p_acceleration_structures: *const vk::AccelerationStructureKHR, query_type: vk::QueryType, query_pool: vk::QueryPool, first_query: u32);
                    CmdTraceRaysKHR: cmd_trace_rays_khr(command_buffer: vk::CommandBuffer, p_raygen_shader_binding_table: *const vk::StridedDeviceAddressRegionKHR, p_miss_shader_binding_table: *const vk::StridedDeviceAddressRegionKHR, p_hit_shader_binding_table: *const vk::StridedDeviceAddressRegionKHR, p_callable_shader_binding_table: *const vk::StridedDeviceAddressRegionKHR, width: u32, height: u32, depth: u32);
                    CmdTraceRaysIndirectKHR: cmd_trace_rays_indirect_khr(command_buffer: vk::CommandBuffer, p_raygen_shader_binding_table: *const vk::StridedDeviceAddressRegionKHR, p_miss_shader_binding_table: *const vk::StridedDeviceAddressRegionKHR, p_hit_shader_binding_table: *const vk::StridedDeviceAddressRegionKHR, p_callable_shader_binding_table: *const vk::StridedDeviceAddressRegionKHR, indirect_device_address: vk::DeviceAddress);
                    CmdSetRayTracingPipelineStackSizeKHR: cmd_set_ray_tracing_pipeline_stack_size_khr(command_buffer: vk::CommandBuffer, pipeline_stack_size: u32);
                    CmdBindShadingRateImageNV: cmd_bind_shading_rate_image_nv(command_buffer: vk::CommandBuffer, image_view: vk::ImageView, image_layout: vk::ImageLayout);
                    CmdSetViewportShadingRatePaletteNV: cmd_set_viewport_shading_rate_palette_nv(command_buffer: vk::CommandBuffer, first_viewport: u32, viewport_count: u32, p_shading_rate_palettes: *const vk::ShadingRatePaletteNV);
                    CmdSetCoarseSampleOrderNV: cmd_set_coarse_sample_order_nv(command_buffer: vk::CommandBuffer, sample_order_type: vk::CoarseSampleOrderTypeNV, custom_sample_order_count: u32, p_custom_sample_orders: *const vk::CoarseSampleOrderCustomNV);
                    CmdBuildAccelerationStructureNV: cmd_build_acceleration_structure_nv(command_buffer: vk::CommandBuffer, p_info: *const vk::AccelerationStructureInfoNV, instance_data: vk::Buffer, instance_offset: vk::DeviceSize, update: vk::Bool32, dst: vk::AccelerationStructureNV, src: vk::AccelerationStructureNV, scratch: vk::Buffer, scratch_offset: vk::DeviceSize);
                    CmdCopyAccelerationStructureNV: cmd_copy_acceleration_structure_nv(command_buffer: vk::CommandBuffer, dst: vk::AccelerationStructureNV, src: vk::AccelerationStructureNV, mode: vk::CopyAccelerationStructureModeKHR);
                    CmdTraceRaysNV: cmd_trace_rays_nv(command_buffer: vk::CommandBuffer, raygen_shader_binding_table_buffer: vk::Buffer, raygen_shader_binding_offset: vk::DeviceSize, miss_shader_binding_table_buffer: vk::Buffer, miss_shader_binding_offset: vk::DeviceSize, miss_shader_binding_stride: vk::DeviceSize, hit_shader_binding_table_buffer: vk::Buffer, hit_shader_binding_offset: vk::DeviceSize, hit_shader_binding_stride: vk::DeviceSize, callable_shader_binding_table_buffer: vk::Buffer, callable_shader_binding_offset: vk::DeviceSize, callable_shader_binding_stride: vk::DeviceSize, width: u32, height: u32, depth: u32);
                    CmdWriteAccelerationStructuresPropertiesNV: cmd_write_acceleration_structures_properties_nv(command_buffer: vk::CommandBuffer, acceleration_structure_count: u32, p_acceleration_structures: *const vk::AccelerationStructureNV, query_type: vk::QueryType, query_pool: vk::QueryPool, first_query: u32);
                    CmdWriteBufferMarkerAMD: cmd_write_buffer_marker_amd(command_buffer: vk::CommandBuffer, pipeline_stage: vk::PipelineStageFlags, dst_buffer: vk::Buffer, dst_offset: vk::DeviceSize, marker: u32);
                    CmdDrawMeshTasksNV: cmd_draw_mesh_tasks_nv(command_buffer: vk::CommandBuffer, task_count: u32, first_task: u32);
                    CmdDrawMeshTasksIndirectNV: cmd_draw_mesh_tasks_indirect_nv(command_buffer: vk::CommandBuffer, buffer: vk::Buffer, offset: vk::DeviceSize, draw_count: u32, stride: u32);
                    CmdDrawMeshTasksIndirectCountNV: cmd_draw_mesh_tasks_indirect_count_nv(command_buffer: vk::CommandBuffer, buffer: vk::Buffer, offset: vk::DeviceSize, count_buffer: vk::Buffer, count_buffer_offset: vk::DeviceSize, max_draw_count: u32, stride: u32);
                    CmdSetExclusiveScissorEnableNV: cmd_set_exclusive_scissor_enable_nv(command_buffer: vk::CommandBuffer, first_exclusive_scissor: u32, exclusive_scissor_count: u32, p_exclusive_scissor_enables: *const vk::Bool32);
                    CmdSetExclusiveScissorNV: cmd_set_exclusive_scissor_nv(command_buffer: vk::CommandBuffer, first_exclusive_scissor: u32, exclusive_scissor_count: u32, p_exclusive_scissors: *const vk::Rect2D);
                    CmdSetCheckpointNV: cmd_set_checkpoint_nv(command_buffer: vk::CommandBuffer, p_checkpoint_marker: *const c_void);
                    CmdSetPerformanceMarkerINTEL: cmd_set_performance_marker_intel(command_buffer: vk::CommandBuffer, p_marker_info: *const vk::PerformanceMarkerInfoINTEL) -> vk::Result;
                    CmdSetPerformanceStreamMarkerINTEL: cmd_set_performance_stream_marker_intel(command_buffer: vk::CommandBuffer, p_marker_info: *const vk::PerformanceStreamMarkerInfoINTEL) -> vk::Result;
                    CmdSetPerformanceOverrideINTEL: cmd_set_performance_override_intel(command_buffer: vk::CommandBuffer, p_override_info: *const vk::PerformanceOverrideInfoINTEL) -> vk::Result;
                    CmdSetFragmentShadingRateKHR: cmd_set_fragment_shading_rate_khr(command_buffer: vk::CommandBuffer, p_fragment_size: *const vk::Extent2D, combiner_ops: *const [vk::FragmentShadingRateCombinerOpKHR; 2usize]);
                    CmdSetRenderingAttachmentLocationsKHR: cmd_set_rendering_attachment_locations_khr(command_buffer: vk::CommandBuffer, p_location_info: *const vk::RenderingAttachmentLocationInfoKHR);
                    CmdSetRenderingInputAttachmentIndicesKHR: cmd_set_rendering_input_attachment_indices_khr(command_buffer: vk::CommandBuffer, p_location_info: *const vk::RenderingInputAttachmentIndexInfoKHR);
                    CmdSetLineStippleKHR: cmd_set_line_stipple_khr(command_buffer: vk::CommandBuffer, line_stipple_factor: u32, line_stipple_pattern: u16);
                    CmdPreprocessGeneratedCommandsNV: cmd_preprocess_generated_commands_nv(command_buffer: vk::CommandBuffer, p_generated_commands_info: *const vk::GeneratedCommandsInfoNV);
                    CmdExecuteGeneratedCommandsNV: cmd_execute_generated_commands_nv(command_buffer: vk::CommandBuffer, is_preprocessed: vk::Bool32, p_generated_commands_info: *const vk::GeneratedCommandsInfoNV);
                    CmdBindPipelineShaderGroupNV: cmd_bind_pipeline_shader_group_nv(command_buffer: vk::CommandBuffer, pipeline_bind_point: vk::PipelineBindPoint, pipeline: vk::Pipeline, group_index: u32);
                    CmdSetDepthBias2EXT: cmd_set_depth_bias2_ext(command_buffer: vk::CommandBuffer, p_depth_bias_info: *const vk::DepthBiasInfoEXT);
                    CmdEncodeVideoKHR: cmd_encode_video_khr(command_buffer: vk::CommandBuffer, p_encode_info: *const vk::VideoEncodeInfoKHR);
                    CmdCudaLaunchKernelNV: cmd_cuda_launch_kernel_nv(command_buffer: vk::CommandBuffer, p_launch_info: *const vk::CudaLaunchInfoNV);
                    CmdWriteBufferMarker2AMD: cmd_write_buffer_marker2_amd(command_buffer: vk::CommandBuffer, stage: vk::PipelineStageFlags2, dst_buffer: vk::Buffer, dst_offset: vk::DeviceSize, marker: u32);
                    CmdBindDescriptorBuffersEXT: cmd_bind_descriptor_buffers_ext(command_buffer: vk::CommandBuffer, buffer_count: u32, p_binding_infos: *const vk::DescriptorBufferBindingInfoEXT);
                    CmdSetDescriptorBufferOffsetsEXT: cmd_set_descriptor_buffer_offsets_ext(command_buffer: vk::CommandBuffer, pipeline_bind_point: vk::PipelineBindPoint, layout: vk::PipelineLayout, first_set: u32, set_count: u32, p_buffer_indices: *const u32, p_offsets: *const vk::DeviceSize);
                    CmdBindDescriptorBufferEmbeddedSamplersEXT: cmd_bind_descriptor_buffer_embedded_samplers_ext(command_buffer: vk::CommandBuffer, pipeline_bind_point: vk::PipelineBindPoint, layout: vk::PipelineLayout, set: u32);
                    CmdSetFragmentShadingRateEnumNV: cmd_set_fragment_shading_rate_enum_nv(command_buffer: vk::CommandBuffer, shading_rate: vk::FragmentShadingRateNV, combiner_ops: *const [vk::FragmentShadingRateCombinerOpKHR; 2usize]);
                    CmdDrawMeshTasksEXT: cmd_draw_mesh_tasks_ext(command_buffer: vk::CommandBuffer, group_count_x: u32, group_count_y: u32, group_count_z: u32);
                    CmdDrawMeshTasksIndirectEXT: cmd_draw_mesh_tasks_indirect_ext(command_buffer: vk::CommandBuffer, buffer: vk::Buffer, offset: vk::DeviceSize, draw_count: u32, stride: u32);
                    CmdDrawMeshTasksIndirectCountEXT: cmd_draw_mesh_tasks_indirect_count_ext(command_buffer: vk::CommandBuffer, buffer: vk::Buffer, offset: vk::DeviceSize, count_buffer: vk::Buffer, count_buffer_offset: vk::DeviceSize, max_draw_count: u32, stride: u32);
                    CmdSetVertexInputEXT: cmd_set_vertex_input_ext(command_buffer: vk::CommandBuffer, vertex_binding_description_count: u32, p_vertex_binding_descriptions: *const vk::VertexInputBindingDescription2EXT, vertex_attribute_description_count: u32, p_vertex_attribute_descriptions: *const vk::VertexInputAttributeDescription2EXT);
                    CmdSubpassShadingHUAWEI: cmd_subpass_shading_huawei(command_buffer: vk::CommandBuffer);
                    CmdBindInvocationMaskHUAWEI: cmd_bind_invocation_mask_huawei(command_buffer: vk::CommandBuffer, image_view: vk::ImageView, image_layout: vk::ImageLayout);
                    CmdSetPatchControlPointsEXT: cmd_set_patch_control_points_ext(command_buffer: vk::CommandBuffer, patch_control_points: u32);
                    CmdSetLogicOpEXT: cmd_set_logic_op_ext(command_buffer: vk::CommandBuffer, logic_op: vk::LogicOp);
                    CmdSetColorWriteEnableEXT: cmd_set_color_write_enable_ext(command_buffer: vk::CommandBuffer, attachment_count: u32, p_color_write_enables: *const vk::Bool32);
                    CmdTraceRaysIndirect2KHR: cmd_trace_rays_indirect2_khr(command_buffer: vk::CommandBuffer, indirect_device_address: vk::DeviceAddress);
                    CmdDrawMultiEXT: cmd_draw_multi_ext(command_buffer: vk::CommandBuffer, draw_count: u32, p_vertex_info: *const vk::MultiDrawInfoEXT, instance_count: u32, first_instance: u32, stride: u32);
                    CmdDrawMultiIndexedEXT: cmd_draw_multi_indexed_ext(command_buffer: vk::CommandBuffer, draw_count: u32, p_index_info: *const vk::MultiDrawIndexedInfoEXT, instance_count: u32, first_instance: u32, stride: u32, p_vertex_offset: *const i32);
                    CmdBuildMicromapsEXT: cmd_build_micromaps_ext(command_buffer: vk::CommandBuffer, info_count: u32, p_infos: *const vk::MicromapBuildInfoEXT);
                    CmdCopyMicromapEXT: cmd_copy_micromap_ext(command_buffer: vk::CommandBuffer, p_info: *const vk::CopyMicromapInfoEXT);
                    CmdCopyMicromapToMemoryEXT: cmd_copy_micromap_to_memory_ext(command_buffer: vk::CommandBuffer, p_info: *const vk::CopyMicromapToMemoryInfoEXT);
                    CmdCopyMemoryToMicromapEXT: cmd_copy_memory_to_micromap_ext(command_buffer: vk::CommandBuffer, p_info: *const vk::CopyMemoryToMicromapInfoEXT);
                    CmdWriteMicromapsPropertiesEXT: cmd_write_micromaps_properties_ext(command_buffer: vk::CommandBuffer, micromap_count: u32, p_micromaps: *const vk::MicromapEXT, query_type: vk::QueryType, query_pool: vk::QueryPool, first_query: u32);
                    CmdDrawClusterHUAWEI: cmd_draw_cluster_huawei(command_buffer: vk::CommandBuffer, group_count_x: u32, group_count_y: u32, group_count_z: u32);
                    CmdDrawClusterIndirectHUAWEI: cmd_draw_cluster_indirect_huawei(command_buffer: vk::CommandBuffer, buffer: vk::Buffer, offset: vk::DeviceSize);
                    CmdCopyMemoryIndirectNV: cmd_copy_memory_indirect_nv(command_buffer: vk::CommandBuffer, copy_buffer_address: vk::DeviceAddress, copy_count: u32, stride: u32);
                    CmdCopyMemoryToImageIndirectNV: cmd_copy_memory_to_image_indirect_nv(command_buffer: vk::CommandBuffer, copy_buffer_address: vk::DeviceAddress, copy_count: u32, stride: u32, dst_image: vk::Image, dst_image_layout: vk::ImageLayout, p_image_subresources: *const vk::ImageSubresourceLayers);
                    CmdDecompressMemoryNV: cmd_decompress_memory_nv(command_buffer: vk::CommandBuffer, decompress_region_count: u32, p_decompress_memory_regions: *const vk::DecompressMemoryRegionNV);
                    CmdDecompressMemoryIndirectCountNV: cmd_decompress_memory_indirect_count_nv(command_buffer: vk::CommandBuffer, indirect_commands_address: vk::DeviceAddress, indirect_commands_count_address: vk::DeviceAddress, stride: u32);
                    CmdUpdatePipelineIndirectBufferNV: cmd_update_pipeline_indirect_buffer_nv(command_buffer: vk::CommandBuffer, pipeline_bind_point: vk::PipelineBindPoint, pipeline: vk::Pipeline);
                    CmdSetDepthClampEnableEXT: cmd_set_depth_clamp_enable_ext(command_buffer: vk::CommandBuffer, depth_clamp_enable: vk::Bool32);
                    CmdSetPolygonModeEXT: cmd_set_polygon_mode_ext(command_buffer: vk::CommandBuffer, polygon_mode: vk::PolygonMode);
                    CmdSetRasterizationSamplesEXT: cmd_set_rasterization_samples_ext(command_buffer: vk::CommandBuffer, rasterization_samples: vk::SampleCountFlags);
                    CmdSetSampleMaskEXT: cmd_set_sample_mask_ext(command_buffer: vk::CommandBuffer, samples: vk::SampleCountFlags, p_sample_mask: *const vk::SampleMask);
                    CmdSetAlphaToCoverageEnableEXT: cmd_set_alpha_to_coverage_enable_ext(command_buffer: vk::CommandBuffer, alpha_to_coverage_enable: vk::Bool32);
                    CmdSetAlphaToOneEnableEXT: cmd_set_alpha_to_one_enable_ext(command_buffer: vk::CommandBuffer, alpha_to_one_enable: vk::Bool32);
                    CmdSetLogicOpEnableEXT: cmd_set_logic_op_enable_ext(command_buffer: vk::CommandBuffer, logic_op_enable: vk::Bool32);
                    CmdSetColorBlendEnableEXT: cmd_set_color_blend_enable_ext(command_buffer: vk::CommandBuffer, first_attachment: u32, attachment_count: u32, p_color_blend_enables: *const vk::Bool32);
                    CmdSetColorBlendEquationEXT: cmd_set_color_blend_equation_ext(command_buffer: vk::CommandBuffer, first_attachment: u32, attachment_count: u32, p_color_blend_equations: *const vk::ColorBlendEquationEXT);
                    CmdSetColorWriteMaskEXT: cmd_set_color_write_mask_ext(command_buffer: vk::CommandBuffer, first_attachment: u32, attachment_count: u32, p_color_write_masks: *const vk::ColorComponentFlags);
                    CmdSetTessellationDomainOriginEXT: cmd_set_tessellation_domain_origin_ext(command_buffer: vk::CommandBuffer, domain_origin: vk::TessellationDomainOrigin);
                    CmdSetRasterizationStreamEXT: cmd_set_rasterization_stream_ext(command_buffer: vk::CommandBuffer, rasterization_stream: u32);
                    CmdSetConservativeRasterizationModeEXT: cmd_set_conservative_rasterization_mode_ext(command_buffer: vk::CommandBuffer, conservative_rasterization_mode: vk::ConservativeRasterizationModeEXT);
                    CmdSetExtraPrimitiveOverestimationSizeEXT: cmd_set_extra_primitive_overestimation_size_ext(command_buffer: vk::CommandBuffer, extra_primitive_overestimation_size: f32);
                    CmdSetDepthClipEnableEXT: cmd_set_depth_clip_enable_ext(command_buffer: vk::CommandBuffer, depth_clip_enable: vk::Bool32);
                    CmdSetSampleLocationsEnableEXT: cmd_set_sample_locations_enable_ext(command_buffer: vk::CommandBuffer, sample_locations_enable: vk::Bool32);
                    CmdSetColorBlendAdvancedEXT: cmd_set_color_blend_advanced_ext(command_buffer: vk::CommandBuffer, first_attachment: u32, attachment_count: u32, p_color_blend_advanced: *const vk::ColorBlendAdvancedEXT);
                    CmdSetProvokingVertexModeEXT: cmd_set_provoking_vertex_mode_ext(command_buffer: vk::CommandBuffer, provoking_vertex_mode: vk::ProvokingVertexModeEXT);
                    CmdSetLineRasterizationModeEXT: cmd_set_line_rasterization_mode_ext(command_buffer: vk::CommandBuffer, line_rasterization_mode: vk::LineRasterizationModeEXT);
                    CmdSetLineStippleEnableEXT: cmd_set_line_stipple_enable_ext(command_buffer: vk::CommandBuffer, stippled_line_enable: vk::Bool32);
                    CmdSetDepthClipNegativeOneToOneEXT: cmd_set_depth_clip_negative_one_to_one_ext(command_buffer: vk::CommandBuffer, negative_one_to_one: vk::Bool32);
                    CmdSetViewportWScalingEnableNV: cmd_set_viewport_wscaling_enable_nv(command_buffer: vk::CommandBuffer, viewport_w_scaling_enable: vk::Bool32);
                    CmdSetViewportSwizzleNV: cmd_set_viewport_swizzle_nv(command_buffer: vk::CommandBuffer, first_viewport: u32, viewport_count: u32, p_viewport_swizzles: *const vk::ViewportSwizzleNV);
                    CmdSetCoverageToColorEnableNV: cmd_set_coverage_to_color_enable_nv(command_buffer: vk::CommandBuffer, coverage_to_color_enable: vk::Bool32);
                    CmdSetCoverageToColorLocationNV: cmd_set_coverage_to_color_location_nv(command_buffer: vk::CommandBuffer, coverage_to_color_location: u32);
                    CmdSetCoverageModulationModeNV: cmd_set_coverage_modulation_mode_nv(command_buffer: vk::CommandBuffer, coverage_modulation_mode: vk::CoverageModulationModeNV);
                    CmdSetCoverageModulationTableEnableNV: cmd_set_coverage_modulation_table_enable_nv(command_buffer: vk::CommandBuffer, coverage_modulation_table_enable: vk::Bool32);
                    CmdSetCoverageModulationTableNV: cmd_set_coverage_modulation_table_nv(command_buffer: vk::CommandBuffer, coverage_modulation_table_count: u32, p_coverage_modulation_table: *const f32);
                    CmdSetShadingRateImageEnableNV: cmd_set_shading_rate_image_enable_nv(command_buffer: vk::CommandBuffer, shading_rate_image_enable: vk::Bool32);
                    CmdSetRepresentativeFragmentTestEnableNV: cmd_set_representative_fragment_test_enable_nv(command_buffer: vk::CommandBuffer, representative_fragment_test_enable: vk::Bool32);
                    CmdSetCoverageReductionModeNV: cmd_set_coverage_reduction_mode_nv(command_buffer: vk::CommandBuffer, coverage_reduction_mode: vk::CoverageReductionModeNV);
                    CmdOpticalFlowExecuteNV: cmd_optical_flow_execute_nv(command_buffer: vk::CommandBuffer, session: vk::OpticalFlowSessionNV, p_execute_info: *const vk::OpticalFlowExecuteInfoNV);
                    CmdBindIndexBuffer2KHR: cmd_bind_index_buffer2_khr(command_buffer: vk::CommandBuffer, buffer: vk::Buffer, offset: vk::DeviceSize, size: vk::DeviceSize, index_type: vk::IndexType);
                    CmdBindShadersEXT: cmd_bind_shaders_ext(command_buffer: vk::CommandBuffer, stage_count: u32, p_stages: *const vk::ShaderStageFlags, p_shaders: *const vk::ShaderEXT);
                    CmdSetAttachmentFeedbackLoopEnableEXT: cmd_set_attachment_feedback_loop_enable_ext(command_buffer: vk::CommandBuffer, aspect_mask: vk::ImageAspectFlags);
                    CmdBindDescriptorSets2KHR: cmd_bind_descriptor_sets2_khr(command_buffer: vk::CommandBuffer, p_bind_descriptor_sets_info: *const vk::BindDescriptorSetsInfoKHR);
                    CmdPushConstants2KHR: cmd_push_constants2_khr(command_buffer: vk::CommandBuffer, p_push_constants_info: *const vk::PushConstantsInfoKHR);
                    CmdPushDescriptorSet2KHR: cmd_push_descriptor_set2_khr(command_buffer: vk::CommandBuffer, p_push_descriptor_set_info: *const vk::PushDescriptorSetInfoKHR);
                    CmdPushDescriptorSetWithTemplate2KHR: cmd_push_descriptor_set_with_template2_khr(command_buffer: vk::CommandBuffer, p_push_descriptor_set_with_template_info: *const vk::PushDescriptorSetWithTemplateInfoKHR);
                    CmdSetDescriptorBufferOffsets2EXT: cmd_set_descriptor_buffer_offsets2_ext(command_buffer: vk::CommandBuffer, p_set_descriptor_buffer_offsets_info: *const vk::SetDescriptorBufferOffsetsInfoEXT);
                }
            }
        }
    };
}
pub(crate) use entry_points;

/// Canonical `&'static CStr` name of an entry point, `vk` prefixed.
macro_rules! entry_name {
    ($name:ident) => {
        const {
            match ::core::ffi::CStr::from_bytes_with_nul(
                concat!("vk", stringify!($name), "\0").as_bytes(),
            ) {
                Ok(name) => name,
                Err(_) => panic!("entry point name contains a nul byte"),
            }
        }
    };
}
pub(crate) use entry_name;
