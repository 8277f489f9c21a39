use glam::Mat4;

use crate::traits::TransformKind;

/// World/view/projection block for a GPU uniform buffer (column-major)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TransformUniform {
    pub world: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
}

impl TransformUniform {
    /// Size of one matrix slot in bytes
    pub const SLOT_SIZE: u64 = std::mem::size_of::<[[f32; 4]; 4]>() as u64;

    pub fn new() -> Self {
        let identity = Mat4::IDENTITY.to_cols_array_2d();
        Self {
            world: identity,
            view: identity,
            projection: identity,
        }
    }

    pub fn set(&mut self, kind: TransformKind, matrix: &Mat4) {
        let cols = matrix.to_cols_array_2d();
        match kind {
            TransformKind::World => self.world = cols,
            TransformKind::View => self.view = cols,
            TransformKind::Projection => self.projection = cols,
        }
    }

    pub fn get(&self, kind: TransformKind) -> Mat4 {
        let cols = match kind {
            TransformKind::World => &self.world,
            TransformKind::View => &self.view,
            TransformKind::Projection => &self.projection,
        };
        Mat4::from_cols_array_2d(cols)
    }

    /// Byte offset of a slot within the uniform
    pub const fn offset(kind: TransformKind) -> u64 {
        kind.index() as u64 * Self::SLOT_SIZE
    }
}

impl Default for TransformUniform {
    fn default() -> Self {
        Self::new()
    }
}
