use glam::Mat4;

/// Transform slot on the graphics device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformKind {
    World,
    View,
    Projection,
}

impl TransformKind {
    pub const ALL: [TransformKind; 3] = [
        TransformKind::World,
        TransformKind::View,
        TransformKind::Projection,
    ];

    /// Slot index within a packed world/view/projection block
    pub const fn index(self) -> usize {
        match self {
            TransformKind::World => 0,
            TransformKind::View => 1,
            TransformKind::Projection => 2,
        }
    }
}

/// Device sink that accepts matrix uploads
pub trait TransformSink {
    /// Upload a matrix into the given transform slot
    fn set_transform(&mut self, kind: TransformKind, matrix: &Mat4);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_are_dense() {
        for (i, kind) in TransformKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }
}
