use core::ffi::CStr;

use ash::vk;
use thiserror::Error;

/// Failure inside the layer machinery itself.
///
/// Every variant is reported to the loader as [`vk::Result::ERROR_INITIALIZATION_FAILED`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LayerError {
    #[error("create info chain has no VK_LAYER_LINK_INFO record")]
    MissingLinkInfo,

    #[error("VK_LAYER_LINK_INFO record has no layer left")]
    LinkChainExhausted,

    #[error("next layer does not provide {}", .0.to_string_lossy())]
    MissingProc(&'static CStr),

    #[error("negotiation struct is null or has an unexpected sType")]
    InvalidNegotiateStruct,

    #[error("loader layer interface version {0} is not supported")]
    UnsupportedInterfaceVersion(u32),
}

impl From<LayerError> for vk::Result {
    fn from(_: LayerError) -> Self {
        vk::Result::ERROR_INITIALIZATION_FAILED
    }
}

#[cfg(test)]
mod tests {
    use ash::vk;

    use super::LayerError;

    #[test]
    fn every_error_is_initialization_failed() {
        for err in [
            LayerError::MissingLinkInfo,
            LayerError::LinkChainExhausted,
            LayerError::MissingProc(c"vkCreateInstance"),
            LayerError::InvalidNegotiateStruct,
            LayerError::UnsupportedInterfaceVersion(1),
        ] {
            assert_eq!(vk::Result::from(err), vk::Result::ERROR_INITIALIZATION_FAILED);
        }
    }

    #[test]
    fn missing_proc_names_entry_point() {
        assert_eq!(
            LayerError::MissingProc(c"vkGetDeviceProcAddr").to_string(),
            "next layer does not provide vkGetDeviceProcAddr"
        );
    }
}
