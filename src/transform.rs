use glam::{Mat4, Vec3};

use crate::toggles::{ToggleSet, TransformKind};

pub const TRANSLATION_OFFSET: Vec3 = Vec3::new(1.0, 0.0, 0.0);
pub const ROTATION_AXIS: Vec3 = Vec3::new(0.5, 1.0, 0.0);
pub const SHEAR_AMPLITUDE: f32 = 0.5;
pub const REFLECTION_SCALE: Vec3 = Vec3::new(-1.0, 1.0, 1.0);

/// Matrices consumed by the vertex shader for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameMatrices {
    pub model: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
}

/// Uniform scale factor at `time`; hits zero once per period
pub fn scale_factor(time: f32) -> f32 {
    time.sin() + 1.0
}

/// Shear x by y: identity except column 1, row 0
pub fn shear_matrix(time: f32) -> Mat4 {
    let mut shear = Mat4::IDENTITY;
    shear.y_axis.x = SHEAR_AMPLITUDE * time.sin();
    shear
}

/// Matrix for a single transform kind at `time` seconds
pub fn transform_matrix(kind: TransformKind, time: f32) -> Mat4 {
    match kind {
        TransformKind::Translation => Mat4::from_translation(TRANSLATION_OFFSET),
        TransformKind::Rotation => Mat4::from_axis_angle(ROTATION_AXIS.normalize(), time),
        TransformKind::Scaling => Mat4::from_scale(Vec3::splat(scale_factor(time))),
        TransformKind::Shearing => shear_matrix(time),
        TransformKind::Reflection => Mat4::from_scale(REFLECTION_SCALE),
    }
}

/// Compose the model matrix from the enabled toggles.
///
/// Each enabled transform post-multiplies the accumulated matrix in
/// translation, rotation, scaling, shearing, reflection order, so the
/// reflection is the first thing applied to a vertex.
pub fn compose_model(toggles: &ToggleSet, time: f32) -> Mat4 {
    toggles
        .enabled()
        .fold(Mat4::IDENTITY, |model, kind| model * transform_matrix(kind, time))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 1e-5;

    fn only(kind: TransformKind) -> ToggleSet {
        let mut set = ToggleSet::new();
        set.set_enabled(kind, true);
        set
    }

    #[test]
    fn nothing_enabled_is_identity() {
        assert_eq!(compose_model(&ToggleSet::new(), 12.3), Mat4::IDENTITY);
    }

    #[test]
    fn scale_factor_range() {
        assert!((scale_factor(FRAC_PI_2) - 2.0).abs() < EPSILON);
        assert!(scale_factor(-FRAC_PI_2).abs() < EPSILON);
        assert!((scale_factor(0.0) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn shear_moves_x_by_y() {
        let shear = shear_matrix(FRAC_PI_2);
        let p = shear * Vec4::new(0.0, 1.0, 0.0, 1.0);
        assert!((p.x - 0.5).abs() < EPSILON);
        assert!((p.y - 1.0).abs() < EPSILON);

        let q = shear * Vec4::new(1.0, 0.0, 0.0, 1.0);
        assert!((q - Vec4::new(1.0, 0.0, 0.0, 1.0)).length() < EPSILON);
    }

    #[test]
    fn reflection_mirrors_x() {
        let model = compose_model(&only(TransformKind::Reflection), 0.0);
        let p = model.transform_point3(Vec3::new(0.5, 0.25, -0.5));
        assert!((p - Vec3::new(-0.5, 0.25, -0.5)).length() < EPSILON);
    }

    #[test]
    fn rotation_keeps_axis_fixed() {
        let model = compose_model(&only(TransformKind::Rotation), 1.7);
        let axis = ROTATION_AXIS.normalize();
        let rotated = model.transform_vector3(axis);
        assert!((rotated - axis).length() < EPSILON);
    }

    #[test]
    fn translation_then_reflection_order() {
        let mut set = ToggleSet::new();
        set.set_enabled(TransformKind::Translation, true);
        set.set_enabled(TransformKind::Reflection, true);

        // Reflect first, then translate: x = -0.5 -> 0.5
        let p = compose_model(&set, 0.0).transform_point3(Vec3::new(0.5, 0.0, 0.0));
        assert!((p - Vec3::new(0.5, 0.0, 0.0)).length() < EPSILON);
    }
}
