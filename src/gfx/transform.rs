//! Per-frame matrix composition.
//!
//! Every rotation is right-multiplied onto an accumulator
//! (`acc = acc * rotation`), so rotations act about the object's local axes.
//! The final product is `projection * view`; the model rotation either travels
//! as its own uniform or is folded into that product.

use glam::{Mat4, Vec3};

use super::camera::{CameraState, ModelState, OrbitCenterState};

/// How the orthographic box reacts to zoom.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ProjectionPolicy {
    /// Zoom widens the x/y bounds symmetrically, depth fixed at `100 / -100`.
    #[default]
    Widening,
    /// Fixed x/y bounds, zoom slides the depth range to `2+zoom / -2+zoom`.
    DepthShift,
}

/// Where the model rotation ends up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ModelBinding {
    /// Uploaded separately as `rotation_mat`; `mvp` is `projection * view`.
    #[default]
    Separate,
    /// Folded into `mvp`; `rotation_mat` is identity.
    Folded,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthoBounds {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    pub near: f32,
    pub far: f32,
}

impl OrthoBounds {
    /// Bounds are not validated; a zoom that inverts them is passed on as-is.
    pub fn new(policy: ProjectionPolicy, ratio: f32, zoom: f32) -> Self {
        match policy {
            ProjectionPolicy::Widening => Self {
                left: -ratio - zoom,
                right: ratio + zoom,
                bottom: -1.0 - zoom,
                top: 1.0 + zoom,
                near: 100.0,
                far: -100.0,
            },
            ProjectionPolicy::DepthShift => Self {
                left: -ratio,
                right: ratio,
                bottom: -1.0,
                top: 1.0,
                near: 2.0 + zoom,
                far: -2.0 + zoom,
            },
        }
    }

    /// Same convention as `glOrtho`.
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::orthographic_rh_gl(
            self.left,
            self.right,
            self.bottom,
            self.top,
            self.near,
            self.far,
        )
    }
}

/// Applies pitch (X), yaw (Y) and roll (Z) onto `acc`, in that order.
pub fn rotate_xyz(acc: Mat4, pitch: f32, yaw: f32, roll: f32) -> Mat4 {
    acc * Mat4::from_rotation_x(pitch) * Mat4::from_rotation_y(yaw) * Mat4::from_rotation_z(roll)
}

/// Width over height of the paint area. A collapsed area yields `1.0`.
pub fn aspect_ratio(width: f32, height: f32) -> f32 {
    if height > 0.0 {
        width / height
    } else {
        1.0
    }
}

/// Matrices for one frame.
///
/// `mvp` and `rotation` are what the shader receives as `mvp` and
/// `rotation_mat`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTransforms {
    pub projection: Mat4,
    pub view: Mat4,
    pub model: Mat4,
    pub mvp: Mat4,
    pub rotation: Mat4,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformComposer {
    pub projection: ProjectionPolicy,
    pub model_binding: ModelBinding,
}

impl TransformComposer {
    pub fn new(projection: ProjectionPolicy, model_binding: ModelBinding) -> Self {
        Self {
            projection,
            model_binding,
        }
    }

    pub fn projection_matrix(&self, camera: &CameraState, ratio: f32) -> Mat4 {
        OrthoBounds::new(self.projection, ratio, camera.zoom).to_mat4()
    }

    /// Camera yaw, then the orbit-center rotation pivoting on the eye, all
    /// applied in front of the fixed look-at matrix.
    pub fn view_matrix(camera: &CameraState, orbit: &OrbitCenterState) -> Mat4 {
        let eye: Vec3 = camera.get_eye();

        let mut acc = Mat4::IDENTITY * Mat4::from_rotation_y(camera.yaw);
        acc *= Mat4::from_translation(-eye);
        acc = rotate_xyz(acc, orbit.pitch, orbit.yaw, orbit.roll);
        acc *= Mat4::from_translation(eye);

        acc * camera.look_at()
    }

    pub fn model_matrix(model: &ModelState) -> Mat4 {
        rotate_xyz(Mat4::IDENTITY, model.pitch, model.yaw, model.roll)
    }

    pub fn compose(
        &self,
        camera: &CameraState,
        model: &ModelState,
        orbit: &OrbitCenterState,
        ratio: f32,
    ) -> FrameTransforms {
        let projection = self.projection_matrix(camera, ratio);
        let view = Self::view_matrix(camera, orbit);
        let model = Self::model_matrix(model);

        let (mvp, rotation) = match self.model_binding {
            ModelBinding::Separate => (projection * view, model),
            ModelBinding::Folded => (projection * view * model, Mat4::IDENTITY),
        };

        FrameTransforms {
            projection,
            view,
            model,
            mvp,
            rotation,
        }
    }
}
