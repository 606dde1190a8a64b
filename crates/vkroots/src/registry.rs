//! Handle to dispatch table maps shared by every trampoline.

use core::{fmt, marker::PhantomData, ptr::NonNull};

use ash::vk::Handle;
use dashmap::DashMap;
use nohash_hasher::BuildNoHashHasher;
use once_cell::sync::Lazy;
use tracing::warn;

use crate::{
    DeviceDispatch, InstanceDispatch, PhysicalDeviceDispatch,
    device::{command_buffer::CommandBufferData, queue::QueueData},
};

/// Fast integer keyed map without hashing overhead.
pub type IntDashMap<K, V> = DashMap<K, V, BuildNoHashHasher<K>>;

/// [`ash::vk::Instance`] to [`InstanceDispatch`].
pub static INSTANCES: Lazy<Registry<InstanceDispatch>> = Lazy::new(Registry::new);

/// [`ash::vk::PhysicalDevice`] to [`PhysicalDeviceDispatch`].
pub static PHYSICAL_DEVICES: Lazy<Registry<PhysicalDeviceDispatch>> = Lazy::new(Registry::new);

/// [`ash::vk::Device`] to [`DeviceDispatch`].
pub static DEVICES: Lazy<Registry<DeviceDispatch>> = Lazy::new(Registry::new);

/// [`ash::vk::Queue`] to the [`DeviceDispatch`] of its device.
pub static QUEUES: Lazy<Registry<QueueData>> = Lazy::new(Registry::new);

/// [`ash::vk::CommandBuffer`] to the [`DeviceDispatch`] of its device.
pub static COMMAND_BUFFERS: Lazy<Registry<CommandBufferData>> = Lazy::new(Registry::new);

/// Non-owning pointer to a value published in a [`Registry`].
///
/// Nothing is counted: the value lives as long as the handle it was registered for, and Vulkan
/// forbids destroying a handle while another call uses it.
pub struct TableRef<T> {
    ptr: NonNull<T>,
    _marker: PhantomData<*const T>,
}

impl<T> TableRef<T> {
    fn new(value: &T) -> Self {
        Self {
            ptr: NonNull::from(value),
            _marker: PhantomData,
        }
    }

    /// Borrow the referenced value.
    ///
    /// # Safety
    /// The handle the value was registered for must stay alive for `'a`.
    pub unsafe fn get<'a>(self) -> &'a T {
        unsafe { self.ptr.as_ref() }
    }

    /// Address of the referenced value.
    pub fn as_ptr(self) -> *const T {
        self.ptr.as_ptr()
    }
}

impl<T> Clone for TableRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TableRef<T> {}

impl<T> PartialEq for TableRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr == other.ptr
    }
}

impl<T> Eq for TableRef<T> {}

impl<T> fmt::Debug for TableRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TableRef").field(&self.ptr).finish()
    }
}

// Published values are never mutated, so sharing the pointer is as safe as sharing `&T`.
unsafe impl<T: Sync> Send for TableRef<T> {}
unsafe impl<T: Sync> Sync for TableRef<T> {}

/// Concurrent map from a dispatchable handle to a boxed value.
pub struct Registry<T> {
    map: IntDashMap<u64, Box<T>>,
}

impl<T> Registry<T> {
    /// Create an empty [`Registry`].
    pub fn new() -> Self {
        Self {
            map: IntDashMap::default(),
        }
    }

    /// Publish `value` for `handle`, replacing any previous entry.
    ///
    /// Returns `None` without inserting if `handle` is null.
    pub fn insert<H: Handle>(&self, handle: H, value: T) -> Option<TableRef<T>> {
        let key = handle.as_raw();
        debug_assert_ne!(key, 0, "inserting null handle");
        if key == 0 {
            return None;
        }

        let value = Box::new(value);
        let table = TableRef::new(&*value);
        if self.map.insert(key, value).is_some() {
            warn!("replaced existing registry entry for {key:#x}");
        }

        Some(table)
    }

    /// Remove the entry of `handle` and hand back its value.
    pub fn remove<H: Handle>(&self, handle: H) -> Option<T> {
        let key = handle.as_raw();
        debug_assert_ne!(key, 0, "removing null handle");
        if key == 0 {
            return None;
        }

        self.map.remove(&key).map(|(_, value)| *value)
    }

    /// Find the entry of `handle`. Null handles are never found.
    pub fn find<H: Handle>(&self, handle: H) -> Option<TableRef<T>> {
        let key = handle.as_raw();
        if key == 0 {
            return None;
        }

        self.map.get(&key).map(|value| TableRef::new(&**value))
    }

    /// Whether `handle` has an entry.
    pub fn contains<H: Handle>(&self, handle: H) -> bool {
        self.map.contains_key(&handle.as_raw())
    }

    /// Drop every entry for which `keep` returns `false`.
    pub fn retain(&self, mut keep: impl FnMut(u64, &T) -> bool) {
        self.map.retain(|key, value| keep(*key, value));
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("len", &self.map.len())
            .finish()
    }
}
