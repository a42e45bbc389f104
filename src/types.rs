use crate::transform::FrameMatrices;

/// Cube vertex: position + color, tightly packed
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl Vertex {
    pub const ATTRIBS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x3  // color
    ];

    pub const fn new(position: [f32; 3], color: [f32; 3]) -> Self {
        Self { position, color }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Transform uniform buffer data for GPU (column-major matrices)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TransformUniform {
    pub model: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
}

impl From<&FrameMatrices> for TransformUniform {
    fn from(matrices: &FrameMatrices) -> Self {
        Self {
            model: matrices.model.to_cols_array_2d(),
            view: matrices.view.to_cols_array_2d(),
            projection: matrices.projection.to_cols_array_2d(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Mat4;

    #[test]
    fn vertex_layout_is_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        let layout = Vertex::desc();
        assert_eq!(layout.array_stride, 24);
        assert_eq!(layout.attributes[1].offset, 12);
        assert_eq!(layout.attributes[1].shader_location, 1);
    }

    #[test]
    fn uniform_size_matches_shader() {
        // Three mat4x4<f32>
        assert_eq!(std::mem::size_of::<TransformUniform>(), 192);
    }

    #[test]
    fn uniform_keeps_column_major_layout() {
        let matrices = FrameMatrices {
            model: Mat4::from_translation(glam::Vec3::new(1.0, 2.0, 3.0)),
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
        };
        let uniform = TransformUniform::from(&matrices);
        assert_eq!(uniform.model[3], [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(uniform.view, Mat4::IDENTITY.to_cols_array_2d());
    }
}
