//! Immediate-mode drawing seam
//!
//! Effects describe themselves through the [`Canvas`] trait: a small
//! push/pop transform stack with fill, stroke and material state, plus a
//! handful of primitives. [`DrawList`] is the recording implementation; the
//! renderer tessellates its [`Primitive`]s into GPU buffers.

use std::f32::consts::TAU;

use farmfx_math::{mat4, Color, Mat4, Vec3};

/// Segments used to approximate an arc
pub const ARC_SEGMENTS: usize = 24;

/// Default cylinder tessellation (around, along)
pub const CYLINDER_DETAIL: (u32, u32) = (24, 1);

/// How a filled surface reacts to light
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceKind {
    /// Plain fill color, diffusely lit
    Basic,
    /// Ambient material, diffusely lit
    Ambient,
    /// Self-lit, ignores scene lighting
    Emissive,
    /// Lit with a specular highlight
    Specular,
}

/// Fill appearance of a solid
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    pub color: Color,
    pub kind: SurfaceKind,
    /// Specular exponent (only used by `SurfaceKind::Specular`)
    pub shininess: f32,
}

/// Outline appearance of a line
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub weight: f32,
}

/// Solid shape parameters, in local units
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Sphere { radius: f32 },
    Box { width: f32, height: f32, depth: f32 },
    /// Y-aligned, centered on the origin
    Cylinder { radius: f32, height: f32, detail_x: u32, detail_y: u32 },
}

/// A recorded draw call with its resolved transform and style
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// A filled solid placed by `transform`
    Solid { transform: Mat4, shape: Shape, surface: Surface },
    /// An open polyline in world space
    Stroke { points: Vec<Vec3>, style: StrokeStyle },
}

/// Drawing API used by the effects
pub trait Canvas {
    /// Save transform and style
    fn push(&mut self);
    /// Restore the last saved transform and style
    fn pop(&mut self);

    fn translate(&mut self, x: f32, y: f32, z: f32);
    fn rotate_z(&mut self, angle: f32);

    fn fill(&mut self, color: Color);
    fn no_fill(&mut self);
    fn stroke(&mut self, color: Color);
    fn no_stroke(&mut self);
    fn stroke_weight(&mut self, weight: f32);
    fn ambient_material(&mut self, color: Color);
    fn emissive_material(&mut self, color: Color);
    fn specular_material(&mut self, color: Color);
    fn shininess(&mut self, shininess: f32);

    fn sphere(&mut self, radius: f32);
    fn box_shape(&mut self, width: f32, height: f32, depth: f32);
    fn cylinder(&mut self, radius: f32, height: f32) {
        self.cylinder_with_detail(radius, height, CYLINDER_DETAIL.0, CYLINDER_DETAIL.1);
    }
    fn cylinder_with_detail(&mut self, radius: f32, height: f32, detail_x: u32, detail_y: u32);
    fn line(&mut self, from: Vec3, to: Vec3);
    /// Connected line through `points` (begin/end shape without closing)
    fn polyline(&mut self, points: &[Vec3]);
    /// Elliptical arc in the local XY plane, angles in radians
    fn arc(&mut self, x: f32, y: f32, width: f32, height: f32, start: f32, stop: f32);
}

#[derive(Clone, Copy, Debug)]
struct DrawState {
    transform: Mat4,
    fill: Option<Surface>,
    stroke: Option<Color>,
    stroke_weight: f32,
    shininess: f32,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            transform: mat4::IDENTITY,
            fill: Some(Surface {
                color: Color::WHITE,
                kind: SurfaceKind::Basic,
                shininess: 1.0,
            }),
            stroke: Some(Color::BLACK),
            stroke_weight: 1.0,
            shininess: 1.0,
        }
    }
}

/// Records canvas calls for later tessellation
#[derive(Default)]
pub struct DrawList {
    state: DrawState,
    stack: Vec<DrawState>,
    primitives: Vec<Primitive>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded primitives, in call order
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Current push depth
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Drop all primitives and reset transform and style for a new frame
    pub fn clear(&mut self) {
        if !self.stack.is_empty() {
            log::warn!("Draw list cleared with {} unmatched push()", self.stack.len());
        }
        self.state = DrawState::default();
        self.stack.clear();
        self.primitives.clear();
    }

    fn apply(&mut self, m: Mat4) {
        self.state.transform = mat4::mul(self.state.transform, m);
    }

    fn set_surface(&mut self, color: Color, kind: SurfaceKind) {
        self.state.fill = Some(Surface {
            color,
            kind,
            shininess: self.state.shininess,
        });
    }

    fn record_solid(&mut self, shape: Shape) {
        if let Some(surface) = self.state.fill {
            self.primitives.push(Primitive::Solid {
                transform: self.state.transform,
                shape,
                surface,
            });
        }
    }

    fn record_stroke(&mut self, local_points: impl IntoIterator<Item = Vec3>) {
        let Some(color) = self.state.stroke else {
            return;
        };
        let transform = self.state.transform;
        let points: Vec<Vec3> = local_points
            .into_iter()
            .map(|p| mat4::transform_point(transform, p))
            .collect();
        if points.len() < 2 {
            return;
        }
        self.primitives.push(Primitive::Stroke {
            points,
            style: StrokeStyle {
                color,
                weight: self.state.stroke_weight,
            },
        });
    }
}

impl Canvas for DrawList {
    fn push(&mut self) {
        self.stack.push(self.state);
    }

    fn pop(&mut self) {
        match self.stack.pop() {
            Some(state) => self.state = state,
            None => log::warn!("pop() without matching push() ignored"),
        }
    }

    fn translate(&mut self, x: f32, y: f32, z: f32) {
        self.apply(mat4::translation(Vec3::new(x, y, z)));
    }

    fn rotate_z(&mut self, angle: f32) {
        self.apply(mat4::rotation_z(angle));
    }

    fn fill(&mut self, color: Color) {
        self.set_surface(color, SurfaceKind::Basic);
    }

    fn no_fill(&mut self) {
        self.state.fill = None;
    }

    fn stroke(&mut self, color: Color) {
        self.state.stroke = Some(color);
    }

    fn no_stroke(&mut self) {
        self.state.stroke = None;
    }

    fn stroke_weight(&mut self, weight: f32) {
        self.state.stroke_weight = weight;
    }

    fn ambient_material(&mut self, color: Color) {
        self.set_surface(color, SurfaceKind::Ambient);
    }

    fn emissive_material(&mut self, color: Color) {
        self.set_surface(color, SurfaceKind::Emissive);
    }

    fn specular_material(&mut self, color: Color) {
        self.set_surface(color, SurfaceKind::Specular);
    }

    fn shininess(&mut self, shininess: f32) {
        self.state.shininess = shininess.max(1.0);
        if let Some(surface) = self.state.fill.as_mut() {
            surface.shininess = self.state.shininess;
        }
    }

    fn sphere(&mut self, radius: f32) {
        self.record_solid(Shape::Sphere { radius });
    }

    fn box_shape(&mut self, width: f32, height: f32, depth: f32) {
        self.record_solid(Shape::Box { width, height, depth });
    }

    fn cylinder_with_detail(&mut self, radius: f32, height: f32, detail_x: u32, detail_y: u32) {
        self.record_solid(Shape::Cylinder {
            radius,
            height,
            detail_x: detail_x.max(3),
            detail_y: detail_y.max(1),
        });
    }

    fn line(&mut self, from: Vec3, to: Vec3) {
        self.record_stroke([from, to]);
    }

    fn polyline(&mut self, points: &[Vec3]) {
        self.record_stroke(points.iter().copied());
    }

    fn arc(&mut self, x: f32, y: f32, width: f32, height: f32, start: f32, stop: f32) {
        let mut stop = stop;
        while stop < start {
            stop += TAU;
        }
        let (rx, ry) = (width / 2.0, height / 2.0);
        let sweep = stop - start;
        let points = (0..=ARC_SEGMENTS).map(|i| {
            let angle = start + sweep * i as f32 / ARC_SEGMENTS as f32;
            Vec3::new(x + angle.cos() * rx, y + angle.sin() * ry, 0.0)
        });
        self.record_stroke(points);
    }
}
