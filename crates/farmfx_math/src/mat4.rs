//! 4x4 matrix utilities for 3D scene transforms
//!
//! Matrices are column-major (`m[column][row]`), matching WGSL's `mat4x4<f32>`
//! layout so they can be uploaded to uniform buffers unchanged.

use crate::Vec3;

/// 4x4 matrix type (column-major)
pub type Mat4 = [[f32; 4]; 4];

/// Identity matrix
pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Translation by `t`
pub fn translation(t: Vec3) -> Mat4 {
    let mut m = IDENTITY;
    m[3] = [t.x, t.y, t.z, 1.0];
    m
}

/// Rotation about the X axis (radians)
pub fn rotation_x(angle: f32) -> Mat4 {
    let (sn, cs) = angle.sin_cos();
    [
        [1.0, 0.0, 0.0, 0.0],
        [0.0, cs, sn, 0.0],
        [0.0, -sn, cs, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

/// Rotation about the Y axis (radians)
pub fn rotation_y(angle: f32) -> Mat4 {
    let (sn, cs) = angle.sin_cos();
    [
        [cs, 0.0, -sn, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [sn, 0.0, cs, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

/// Rotation about the Z axis (radians)
pub fn rotation_z(angle: f32) -> Mat4 {
    let (sn, cs) = angle.sin_cos();
    [
        [cs, sn, 0.0, 0.0],
        [-sn, cs, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

/// Non-uniform scale
pub fn scale(s: Vec3) -> Mat4 {
    [
        [s.x, 0.0, 0.0, 0.0],
        [0.0, s.y, 0.0, 0.0],
        [0.0, 0.0, s.z, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

/// Multiply two 4x4 matrices: result = a * b
///
/// In column-major convention, this applies b first, then a.
#[allow(clippy::needless_range_loop)]
pub fn mul(a: Mat4, b: Mat4) -> Mat4 {
    let mut result = [[0.0f32; 4]; 4];

    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                result[i][j] += a[k][j] * b[i][k];
            }
        }
    }

    result
}

/// Transform a point (w = 1) by a matrix
pub fn transform_point(m: Mat4, p: Vec3) -> Vec3 {
    Vec3::new(
        m[0][0] * p.x + m[1][0] * p.y + m[2][0] * p.z + m[3][0],
        m[0][1] * p.x + m[1][1] * p.y + m[2][1] * p.z + m[3][1],
        m[0][2] * p.x + m[1][2] * p.y + m[2][2] * p.z + m[3][2],
    )
}

/// Transform a direction (w = 0) by a matrix
pub fn transform_vector(m: Mat4, v: Vec3) -> Vec3 {
    Vec3::new(
        m[0][0] * v.x + m[1][0] * v.y + m[2][0] * v.z,
        m[0][1] * v.x + m[1][1] * v.y + m[2][1] * v.z,
        m[0][2] * v.x + m[1][2] * v.y + m[2][2] * v.z,
    )
}

/// Right-handed perspective projection with a 0..1 depth range (wgpu clip space)
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fov_y / 2.0).tan();
    let nf = 1.0 / (near - far);

    [
        [f / aspect, 0.0, 0.0, 0.0],
        [0.0, f, 0.0, 0.0],
        [0.0, 0.0, far * nf, -1.0],
        [0.0, 0.0, far * near * nf, 0.0],
    ]
}

/// Right-handed look-at view matrix
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    let f = (target - eye).normalized();
    let s = f.cross(up).normalized();
    let u = s.cross(f);

    [
        [s.x, u.x, -f.x, 0.0],
        [s.y, u.y, -f.y, 0.0],
        [s.z, u.z, -f.z, 0.0],
        [-s.dot(eye), -u.dot(eye), f.dot(eye), 1.0],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn test_identity_mul() {
        let t = translation(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(mul(IDENTITY, t), t);
        assert_eq!(mul(t, IDENTITY), t);
    }

    #[test]
    fn test_translation_moves_points_not_vectors() {
        let t = translation(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(transform_point(t, Vec3::ZERO), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(transform_vector(t, Vec3::X), Vec3::X);
    }

    #[test]
    fn test_rotations_quarter_turn() {
        assert!(approx(transform_vector(rotation_x(FRAC_PI_2), Vec3::Y), Vec3::Z));
        assert!(approx(transform_vector(rotation_y(FRAC_PI_2), Vec3::Z), Vec3::X));
        assert!(approx(transform_vector(rotation_z(FRAC_PI_2), Vec3::X), Vec3::Y));
    }

    #[test]
    fn test_mul_applies_right_first() {
        // Rotate then translate
        let m = mul(translation(Vec3::new(10.0, 0.0, 0.0)), rotation_z(FRAC_PI_2));
        assert!(approx(transform_point(m, Vec3::X), Vec3::new(10.0, 1.0, 0.0)));
    }

    #[test]
    fn test_perspective_depth_range() {
        let p = perspective(std::f32::consts::FRAC_PI_4, 1.0, 1.0, 100.0);
        let clip = |z: f32| {
            let zc = p[2][2] * z + p[3][2];
            let wc = p[2][3] * z;
            zc / wc
        };
        assert!(clip(-1.0).abs() < 1e-5);
        assert!((clip(-100.0) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_look_at_puts_target_on_negative_z() {
        let view = look_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y);
        let p = transform_point(view, Vec3::ZERO);
        assert!(approx(p, Vec3::new(0.0, 0.0, -10.0)));
    }
}
