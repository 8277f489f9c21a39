use glam::Mat4;
use log::debug;
use wgpu::util::DeviceExt;

use super::gpu_context::GpuContext;
use crate::traits::{TransformKind, TransformSink};
use crate::types::TransformUniform;

/// Transform sink backed by a wgpu uniform buffer
///
/// Each upload rewrites only the 64-byte slot of the matrix that changed.
pub struct GpuTransformSink {
    context: GpuContext,
    buffer: wgpu::Buffer,
    uniform: TransformUniform,
}

impl GpuTransformSink {
    pub fn new(context: GpuContext) -> Self {
        let uniform = TransformUniform::new();
        let buffer = context
            .device()
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Camera Transform Buffer"),
                contents: bytemuck::bytes_of(&uniform),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });
        debug!(
            "Created camera transform buffer ({} bytes)",
            std::mem::size_of::<TransformUniform>()
        );

        Self {
            context,
            buffer,
            uniform,
        }
    }

    /// Buffer to bind as the world/view/projection uniform
    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    /// CPU copy of what was last written
    pub fn uniform(&self) -> &TransformUniform {
        &self.uniform
    }
}

impl TransformSink for GpuTransformSink {
    fn set_transform(&mut self, kind: TransformKind, matrix: &Mat4) {
        self.uniform.set(kind, matrix);
        let cols = matrix.to_cols_array();
        self.context.queue().write_buffer(
            &self.buffer,
            TransformUniform::offset(kind),
            bytemuck::cast_slice(&cols),
        );
    }
}
