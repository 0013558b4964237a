use glam::Vec3;
use zerocopy::{AsBytes, FromBytes, FromZeroes};

/// Interleaved vertex as laid out in the GPU buffer: position then color.
#[derive(Debug, Clone, Copy, PartialEq, AsBytes, FromBytes, FromZeroes)]
#[repr(C)]
pub struct Vertex {
    pub pos: [f32; 3],
    pub clr: [f32; 3],
}

impl Vertex {
    pub const STRIDE: usize = size_of::<Vertex>();
    pub const POS_OFFSET: usize = 0;
    pub const CLR_OFFSET: usize = size_of::<[f32; 3]>();

    pub fn new(pos: Vec3, clr: Vec3) -> Self {
        Self {
            pos: pos.to_array(),
            clr: clr.to_array(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_tightly_packed() {
        assert_eq!(Vertex::STRIDE, 24);
        assert_eq!(Vertex::CLR_OFFSET, 12);
        assert_eq!(std::mem::offset_of!(Vertex, clr), Vertex::CLR_OFFSET);
    }

    #[test]
    fn bytes_follow_field_order() {
        let vtx = Vertex::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.5, 0.25, 0.0));
        let bytes = vtx.as_bytes();
        assert_eq!(bytes.len(), 24);
        assert_eq!(&bytes[0..4], &1.0f32.to_ne_bytes());
        assert_eq!(&bytes[12..16], &0.5f32.to_ne_bytes());
    }
}
