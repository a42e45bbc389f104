use crate::types::Vertex;

pub const CUBE_VERTEX_COUNT: u32 = 36;

const RED: [f32; 3] = [1.0, 0.0, 0.0];
const GREEN: [f32; 3] = [0.0, 1.0, 0.0];
const BLUE: [f32; 3] = [0.0, 0.0, 1.0];
const YELLOW: [f32; 3] = [1.0, 1.0, 0.0];

const fn v(x: f32, y: f32, z: f32, color: [f32; 3]) -> Vertex {
    Vertex::new([x, y, z], color)
}

/// Unit cube centred on the origin, 6 faces x 2 triangles, no index buffer.
/// Every face uses the same red/green/blue/yellow corner pattern.
pub const CUBE_VERTICES: [Vertex; CUBE_VERTEX_COUNT as usize] = [
    // back
    v(-0.5, -0.5, -0.5, RED),
    v(0.5, -0.5, -0.5, GREEN),
    v(0.5, 0.5, -0.5, BLUE),
    v(0.5, 0.5, -0.5, BLUE),
    v(-0.5, 0.5, -0.5, YELLOW),
    v(-0.5, -0.5, -0.5, YELLOW),
    // front
    v(-0.5, -0.5, 0.5, RED),
    v(0.5, -0.5, 0.5, GREEN),
    v(0.5, 0.5, 0.5, BLUE),
    v(0.5, 0.5, 0.5, BLUE),
    v(-0.5, 0.5, 0.5, YELLOW),
    v(-0.5, -0.5, 0.5, YELLOW),
    // left
    v(-0.5, 0.5, 0.5, RED),
    v(-0.5, 0.5, -0.5, GREEN),
    v(-0.5, -0.5, -0.5, BLUE),
    v(-0.5, -0.5, -0.5, BLUE),
    v(-0.5, -0.5, 0.5, YELLOW),
    v(-0.5, 0.5, 0.5, YELLOW),
    // right
    v(0.5, 0.5, 0.5, RED),
    v(0.5, 0.5, -0.5, GREEN),
    v(0.5, -0.5, -0.5, BLUE),
    v(0.5, -0.5, -0.5, BLUE),
    v(0.5, -0.5, 0.5, YELLOW),
    v(0.5, 0.5, 0.5, YELLOW),
    // bottom
    v(-0.5, -0.5, -0.5, RED),
    v(0.5, -0.5, -0.5, GREEN),
    v(0.5, -0.5, 0.5, BLUE),
    v(0.5, -0.5, 0.5, BLUE),
    v(-0.5, -0.5, 0.5, YELLOW),
    v(-0.5, -0.5, -0.5, YELLOW),
    // top
    v(-0.5, 0.5, -0.5, RED),
    v(0.5, 0.5, -0.5, GREEN),
    v(0.5, 0.5, 0.5, BLUE),
    v(0.5, 0.5, 0.5, BLUE),
    v(-0.5, 0.5, 0.5, YELLOW),
    v(-0.5, 0.5, -0.5, YELLOW),
];
