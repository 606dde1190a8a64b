use core::{fmt, slice};

use ash::vk;
use tracing::{debug, warn};

use crate::{DeviceDispatch, registry::TableRef};

/// Queue family request recorded from `VkDeviceCreateInfo`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct QueueInfo {
    pub family_index: u32,
    pub count: u32,
    pub flags: vk::DeviceQueueCreateFlags,
}

impl fmt::Debug for QueueInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueueInfo")
            .field("family_index", &self.family_index)
            .field("count", &self.count)
            .field("flags", &self.flags.as_raw())
            .finish()
    }
}

impl QueueInfo {
    /// Queue requests of a device create info.
    ///
    /// # Safety
    /// `p_create_info` must be null or point to a valid `VkDeviceCreateInfo`.
    pub unsafe fn from_create_info(p_create_info: *const vk::DeviceCreateInfo) -> Vec<Self> {
        let Some(info) = (unsafe { p_create_info.as_ref() }) else {
            return vec![];
        };
        if info.p_queue_create_infos.is_null() || info.queue_create_info_count == 0 {
            return vec![];
        }

        let queue_infos = unsafe {
            slice::from_raw_parts(
                info.p_queue_create_infos,
                info.queue_create_info_count as usize,
            )
        };
        queue_infos
            .iter()
            .map(|info| Self {
                family_index: info.queue_family_index,
                count: info.queue_count,
                flags: info.flags,
            })
            .collect()
    }
}

/// Registry entry of a queue.
#[derive(Debug)]
pub struct QueueData {
    /// Dispatch table of the owning device.
    pub device: TableRef<DeviceDispatch>,
    pub family_index: u32,
    pub index: u32,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct DeviceQueue {
    pub queue: vk::Queue,
    pub family_index: u32,
    pub index: u32,
}

/// Query every queue the device was created with from the next layer.
pub(crate) unsafe fn enumerate(table: &DeviceDispatch) -> Vec<DeviceQueue> {
    let mut queues = vec![];

    for info in &table.queue_infos {
        for index in 0..info.count {
            let mut queue = vk::Queue::null();

            if info.flags.is_empty() {
                if table.get_device_queue.is_none() {
                    warn!("next layer does not provide vkGetDeviceQueue");
                    continue;
                }
                unsafe { table.get_device_queue(table.device, info.family_index, index, &mut queue) };
            } else {
                if table.get_device_queue2.is_none() {
                    warn!("next layer does not provide vkGetDeviceQueue2");
                    continue;
                }
                let queue_info = vk::DeviceQueueInfo2::default()
                    .flags(info.flags)
                    .queue_family_index(info.family_index)
                    .queue_index(index);
                unsafe { table.get_device_queue2(table.device, &queue_info, &mut queue) };
            }

            if queue == vk::Queue::null() {
                continue;
            }

            debug!(
                "found queue: {:?} family_index: {} index: {}",
                queue, info.family_index, index
            );
            queues.push(DeviceQueue {
                queue,
                family_index: info.family_index,
                index,
            });
        }
    }

    queues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_infos_from_create_info() {
        let priorities = [1.0, 0.5];
        let queue_create_infos = [
            vk::DeviceQueueCreateInfo::default()
                .queue_family_index(0)
                .queue_priorities(&priorities),
            vk::DeviceQueueCreateInfo::default()
                .flags(vk::DeviceQueueCreateFlags::PROTECTED)
                .queue_family_index(2)
                .queue_priorities(&priorities[..1]),
        ];
        let create_info = vk::DeviceCreateInfo::default().queue_create_infos(&queue_create_infos);

        let infos = unsafe { QueueInfo::from_create_info(&create_info) };
        assert_eq!(
            infos,
            [
                QueueInfo {
                    family_index: 0,
                    count: 2,
                    flags: vk::DeviceQueueCreateFlags::empty(),
                },
                QueueInfo {
                    family_index: 2,
                    count: 1,
                    flags: vk::DeviceQueueCreateFlags::PROTECTED,
                },
            ]
        );
    }

    #[test]
    fn queue_info_debug_prints_raw_flags() {
        let info = QueueInfo {
            family_index: 3,
            count: 1,
            flags: vk::DeviceQueueCreateFlags::PROTECTED,
        };
        assert_eq!(
            format!("{info:?}"),
            "QueueInfo { family_index: 3, count: 1, flags: 1 }"
        );
    }

    #[test]
    fn no_queue_infos() {
        let create_info = vk::DeviceCreateInfo::default();
        assert!(unsafe { QueueInfo::from_create_info(&create_info) }.is_empty());
        assert!(unsafe { QueueInfo::from_create_info(core::ptr::null()) }.is_empty());
    }
}
