use glam::Mat4;

use crate::traits::{TransformKind, TransformSink};

/// In-memory transform sink - keeps the last upload per slot
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    slots: [Option<Mat4>; 3],
    uploads: usize,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last matrix uploaded to the slot, if any
    pub fn get(&self, kind: TransformKind) -> Option<Mat4> {
        self.slots[kind.index()]
    }

    /// Total number of uploads received
    pub fn upload_count(&self) -> usize {
        self.uploads
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl TransformSink for RecordingSink {
    fn set_transform(&mut self, kind: TransformKind, matrix: &Mat4) {
        self.slots[kind.index()] = Some(*matrix);
        self.uploads += 1;
    }
}
