use glam::{EulerRot, Mat4, Vec3};

use crate::palette::pick_color;
use crate::rng::Dice;

/// One-shot translation step range on X and Z.
const OFFSET_XZ: i32 = 10;
/// One-shot translation step range on Y.
const OFFSET_Y: i32 = 1;

/// Vertex data as uploaded to the GPU. Non-indexed: every face carries its
/// own vertices so per-face coloring needs no attribute sharing tricks.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        0 => Float32x3,
        1 => Float32x3,
        2 => Float32x3,
        3 => Float32x2,
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// The two generated primitive kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Cube,
    Tetrahedron,
}

impl ShapeKind {
    pub const fn face_count(self) -> usize {
        match self {
            ShapeKind::Cube => 6,
            ShapeKind::Tetrahedron => 4,
        }
    }

    /// Vertices per face after non-indexed expansion (quad = two triangles).
    pub const fn verts_per_face(self) -> usize {
        match self {
            ShapeKind::Cube => 6,
            ShapeKind::Tetrahedron => 3,
        }
    }
}

/// Surface binding for a shape: either the per-face vertex colors baked into
/// the geometry, or the shared scene texture. Exclusive — never blended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Material {
    VertexColored,
    Textured,
}

/// A generated mesh instance. Geometry and material are fixed at creation;
/// only the rotation angles change afterwards (once per render tick).
#[derive(Debug, Clone)]
pub struct Shape {
    pub kind: ShapeKind,
    pub size: f32,
    pub material: Material,
    pub offset: Vec3,
    pub rotation: Vec3,
    vertices: Vec<Vertex>,
}

impl Shape {
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.offset)
            * Mat4::from_euler(
                EulerRot::XYZ,
                self.rotation.x,
                self.rotation.y,
                self.rotation.z,
            )
    }
}

/// Builds a cube with random edge length, per-face palette colors, a coin-flip
/// material, and a one-shot random translation.
pub fn make_cube(dice: &mut dyn Dice) -> Shape {
    let size = dice.roll(1, 5) as f32 / 10.0;
    let vertices = cube_vertices(size, dice);
    finish_shape(ShapeKind::Cube, size, vertices, dice)
}

/// Builds a tetrahedron with random circumradius, per-face palette colors, a
/// coin-flip material, and a one-shot random translation.
pub fn make_tetrahedron(dice: &mut dyn Dice) -> Shape {
    let size = dice.roll(1, 5) as f32 / 10.0;
    let vertices = tetrahedron_vertices(size, dice);
    finish_shape(ShapeKind::Tetrahedron, size, vertices, dice)
}

/// Shared tail of both factories: material coin flip and translation rolls.
fn finish_shape(kind: ShapeKind, size: f32, vertices: Vec<Vertex>, dice: &mut dyn Dice) -> Shape {
    let material = if dice.roll(0, 1) == 0 {
        Material::VertexColored
    } else {
        Material::Textured
    };
    let offset = Vec3::new(
        dice.roll(-OFFSET_XZ, OFFSET_XZ) as f32,
        dice.roll(-OFFSET_Y, OFFSET_Y) as f32,
        dice.roll(-OFFSET_XZ, OFFSET_XZ) as f32,
    );

    Shape {
        kind,
        size,
        material,
        offset,
        rotation: Vec3::ZERO,
        vertices,
    }
}

fn cube_vertices(size: f32, dice: &mut dyn Dice) -> Vec<Vertex> {
    let h = size / 2.0;

    // Each face: outward normal + CCW quad corners seen from outside.
    #[rustfmt::skip]
    let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
        ([0.0, 0.0,  1.0], [[-h, -h,  h], [ h, -h,  h], [ h,  h,  h], [-h,  h,  h]]),
        ([0.0, 0.0, -1.0], [[ h, -h, -h], [-h, -h, -h], [-h,  h, -h], [ h,  h, -h]]),
        ([ 1.0, 0.0, 0.0], [[ h, -h,  h], [ h, -h, -h], [ h,  h, -h], [ h,  h,  h]]),
        ([-1.0, 0.0, 0.0], [[-h, -h, -h], [-h, -h,  h], [-h,  h,  h], [-h,  h, -h]]),
        ([0.0,  1.0, 0.0], [[-h,  h,  h], [ h,  h,  h], [ h,  h, -h], [-h,  h, -h]]),
        ([0.0, -1.0, 0.0], [[-h, -h, -h], [ h, -h, -h], [ h, -h,  h], [-h, -h,  h]]),
    ];

    const QUAD_UVS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

    let mut vertices = Vec::with_capacity(36);
    for (normal, corners) in faces {
        let color = pick_color(dice);
        // Two triangles: 0-1-2 and 0-2-3, all six vertices in the face color.
        for &i in &[0usize, 1, 2, 0, 2, 3] {
            vertices.push(Vertex {
                position: corners[i],
                normal,
                color,
                uv: QUAD_UVS[i],
            });
        }
    }
    vertices
}

fn tetrahedron_vertices(radius: f32, dice: &mut dyn Dice) -> Vec<Vertex> {
    // Regular tetrahedron inscribed in a sphere of the given radius.
    let s = radius / 3.0_f32.sqrt();
    let a = Vec3::new(s, s, s);
    let b = Vec3::new(-s, -s, s);
    let c = Vec3::new(-s, s, -s);
    let d = Vec3::new(s, -s, -s);

    let faces = [[a, b, c], [a, d, b], [a, c, d], [b, d, c]];
    const TRI_UVS: [[f32; 2]; 3] = [[0.0, 0.0], [1.0, 0.0], [0.5, 1.0]];

    let mut vertices = Vec::with_capacity(12);
    for corners in faces {
        let color = pick_color(dice);
        let mut tri = corners;
        // The centroid sits at the origin, so a normal pointing toward it
        // means the winding is inside out; swap two vertices to fix it.
        let mut normal = (tri[1] - tri[0]).cross(tri[2] - tri[0]).normalize();
        if normal.dot(tri[0]) < 0.0 {
            tri.swap(1, 2);
            normal = -normal;
        }
        for (point, uv) in tri.iter().zip(TRI_UVS) {
            vertices.push(Vertex {
                position: point.to_array(),
                normal: normal.to_array(),
                color,
                uv,
            });
        }
    }
    vertices
}
