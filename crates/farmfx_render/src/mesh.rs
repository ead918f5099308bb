//! Tessellation of recorded draw lists
//!
//! [`MeshBuilder`] turns the [`Primitive`]s of a [`DrawList`] into flat
//! triangle and line vertex lists ready for upload. Solids are split by
//! opacity: translucent triangles are drawn after the opaque ones without
//! writing depth, so clouds and glass never hide what is behind them.

use std::f32::consts::{PI, TAU};

use farmfx_core::{DrawList, Primitive, Shape, StrokeStyle, Surface, SurfaceKind};
use farmfx_math::{mat4, Mat4, Vec3};

use crate::pipeline::SceneVertex;

/// Latitude bands of a sphere
pub const SPHERE_RINGS: u32 = 12;
/// Longitude segments of a sphere
pub const SPHERE_SEGMENTS: u32 = 16;

/// Vertex lists for one frame
#[derive(Clone, Debug, Default)]
pub struct SceneMesh {
    /// Opaque triangles (triangle list)
    pub opaque: Vec<SceneVertex>,
    /// Translucent triangles (triangle list), in recording order
    pub translucent: Vec<SceneVertex>,
    /// Line segments (line list)
    pub lines: Vec<SceneVertex>,
}

impl SceneMesh {
    pub fn clear(&mut self) {
        self.opaque.clear();
        self.translucent.clear();
        self.lines.clear();
    }

    pub fn vertex_count(&self) -> usize {
        self.opaque.len() + self.translucent.len() + self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }
}

/// Builds a [`SceneMesh`] from draw lists, reusing its buffers between frames
#[derive(Default)]
pub struct MeshBuilder {
    mesh: SceneMesh,
}

impl MeshBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tessellate every primitive of `list`, replacing the previous mesh
    pub fn build(&mut self, list: &DrawList) -> &SceneMesh {
        self.mesh.clear();
        for primitive in list.primitives() {
            match primitive {
                Primitive::Solid { transform, shape, surface } => {
                    self.push_solid(*transform, shape, surface);
                }
                Primitive::Stroke { points, style } => self.push_stroke(points, style),
            }
        }
        &self.mesh
    }

    pub fn mesh(&self) -> &SceneMesh {
        &self.mesh
    }

    fn push_solid(&mut self, transform: Mat4, shape: &Shape, surface: &Surface) {
        let template = SceneVertex {
            color: surface.color.to_rgba_f32(),
            emissive: if surface.kind == SurfaceKind::Emissive { 1.0 } else { 0.0 },
            shininess: if surface.kind == SurfaceKind::Specular { surface.shininess } else { 0.0 },
            ..SceneVertex::default()
        };
        let out = if surface.color.is_opaque() {
            &mut self.mesh.opaque
        } else {
            &mut self.mesh.translucent
        };
        let mut emit = |p: Vec3, n: Vec3| {
            out.push(SceneVertex {
                position: mat4::transform_point(transform, p).to_array(),
                normal: mat4::transform_vector(transform, n).normalized().to_array(),
                ..template
            });
        };

        match *shape {
            Shape::Sphere { radius } => sphere(radius, &mut emit),
            Shape::Box { width, height, depth } => cuboid(Vec3::new(width, height, depth) * 0.5, &mut emit),
            Shape::Cylinder { radius, height, detail_x, detail_y } => {
                cylinder(radius, height, detail_x, detail_y, &mut emit)
            }
        }
    }

    fn push_stroke(&mut self, points: &[Vec3], style: &StrokeStyle) {
        let template = SceneVertex {
            normal: [0.0; 3],
            color: style.color.to_rgba_f32(),
            emissive: 1.0,
            ..SceneVertex::default()
        };
        for pair in points.windows(2) {
            for p in pair {
                self.mesh.lines.push(SceneVertex { position: p.to_array(), ..template });
            }
        }
    }
}

/// Emits two triangles for the quad `a b c d` (in order around the edge)
fn quad(a: (Vec3, Vec3), b: (Vec3, Vec3), c: (Vec3, Vec3), d: (Vec3, Vec3), emit: &mut impl FnMut(Vec3, Vec3)) {
    for (p, n) in [a, b, c, a, c, d] {
        emit(p, n);
    }
}

fn sphere(radius: f32, emit: &mut impl FnMut(Vec3, Vec3)) {
    let point = |ring: u32, seg: u32| {
        let theta = PI * ring as f32 / SPHERE_RINGS as f32;
        let phi = TAU * seg as f32 / SPHERE_SEGMENTS as f32;
        let n = Vec3::new(theta.sin() * phi.cos(), theta.cos(), theta.sin() * phi.sin());
        (n * radius, n)
    };
    for ring in 0..SPHERE_RINGS {
        for seg in 0..SPHERE_SEGMENTS {
            quad(
                point(ring, seg),
                point(ring + 1, seg),
                point(ring + 1, seg + 1),
                point(ring, seg + 1),
                emit,
            );
        }
    }
}

fn cuboid(half: Vec3, emit: &mut impl FnMut(Vec3, Vec3)) {
    // (normal, u axis, v axis) per face
    let faces = [
        (Vec3::X, Vec3::Z, Vec3::Y),
        (-Vec3::X, Vec3::Y, Vec3::Z),
        (Vec3::Y, Vec3::X, Vec3::Z),
        (-Vec3::Y, Vec3::Z, Vec3::X),
        (Vec3::Z, Vec3::Y, Vec3::X),
        (-Vec3::Z, Vec3::X, Vec3::Y),
    ];
    for (n, u, v) in faces {
        let center = n.component_mul(half);
        let du = u.component_mul(half);
        let dv = v.component_mul(half);
        quad(
            (center - du - dv, n),
            (center + du - dv, n),
            (center + du + dv, n),
            (center - du + dv, n),
            emit,
        );
    }
}

fn cylinder(radius: f32, height: f32, detail_x: u32, detail_y: u32, emit: &mut impl FnMut(Vec3, Vec3)) {
    let half = height / 2.0;
    let rim = |seg: u32| {
        let phi = TAU * seg as f32 / detail_x as f32;
        Vec3::new(phi.cos(), 0.0, phi.sin())
    };
    let y_at = |row: u32| -half + height * row as f32 / detail_y as f32;

    for seg in 0..detail_x {
        let (n0, n1) = (rim(seg), rim(seg + 1));
        for row in 0..detail_y {
            let (y0, y1) = (y_at(row), y_at(row + 1));
            quad(
                (n0 * radius + Vec3::new(0.0, y0, 0.0), n0),
                (n0 * radius + Vec3::new(0.0, y1, 0.0), n0),
                (n1 * radius + Vec3::new(0.0, y1, 0.0), n1),
                (n1 * radius + Vec3::new(0.0, y0, 0.0), n1),
                emit,
            );
        }

        // caps
        for (y, n) in [(-half, -Vec3::Y), (half, Vec3::Y)] {
            let c = Vec3::new(0.0, y, 0.0);
            emit(c, n);
            emit(n0 * radius + c, n);
            emit(n1 * radius + c, n);
        }
    }
}
