use std::sync::Arc;
use wgpu::{Adapter, Device, DeviceDescriptor, Instance, Queue};

use crate::error::{CameraError, Result};

/// Shared GPU handles for transform uploads
///
/// Device and queue are reference counted so the context can be cloned
/// into every sink that needs to write buffers.
#[derive(Clone)]
pub struct GpuContext {
    device: Arc<Device>,
    queue: Arc<Queue>,
}

impl GpuContext {
    /// Create a headless GPU context (no surface)
    pub async fn new() -> Result<Self> {
        let instance = Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let adapter = Self::request_adapter(&instance).await?;
        let (device, queue) = Self::request_device(&adapter).await?;

        Ok(Self::from_parts(device, queue))
    }

    /// Wrap a device and queue owned by an existing renderer
    pub fn from_parts(device: Device, queue: Queue) -> Self {
        Self {
            device: Arc::new(device),
            queue: Arc::new(queue),
        }
    }

    /// Get reference to the device
    pub fn device(&self) -> &Device {
        &self.device
    }

    /// Get reference to the queue
    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    async fn request_adapter(instance: &Instance) -> Result<Adapter> {
        instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| CameraError::Gpu(format!("Failed to find appropriate adapter: {:?}", e)))
    }

    async fn request_device(adapter: &Adapter) -> Result<(Device, Queue)> {
        adapter
            .request_device(&DeviceDescriptor {
                label: Some("Camera Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_defaults(),
                memory_hints: Default::default(),
                experimental_features: Default::default(),
                trace: Default::default(),
            })
            .await
            .map_err(|e| CameraError::Gpu(format!("Failed to create device: {:?}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_semantics() {
        // Creation needs real GPU hardware; only check the handle is cheap to share
        fn assert_clone<T: Clone>() {}
        assert_clone::<GpuContext>();
    }
}
