use candle_core::Device;
use tracing::debug;

#[cfg(any(feature = "metal", feature = "cuda"))]
use tracing::{info, warn};

/// Picks the inference device for the sentence encoder.
///
/// GPU backends are attempted only when their feature is compiled in; any
/// failure falls through to the CPU, which is always available.
pub fn select_device() -> Device {
    #[cfg(feature = "metal")]
    match Device::new_metal(0) {
        Ok(device) => {
            info!("Encoder running on Metal");
            return device;
        }
        Err(e) => warn!(error = %e, "Metal device unavailable"),
    }

    #[cfg(feature = "cuda")]
    match Device::new_cuda(0) {
        Ok(device) => {
            info!("Encoder running on CUDA");
            return device;
        }
        Err(e) => warn!(error = %e, "CUDA device unavailable"),
    }

    debug!("Encoder running on CPU");
    Device::Cpu
}
