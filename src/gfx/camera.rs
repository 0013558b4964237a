use glam::{Mat4, Vec3};

/// Fixed increment applied by every directional action.
pub const STEP: f32 = 0.05;

/// Sign of a single directional action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Positive,
    Negative,
}

impl Direction {
    pub fn step(self) -> f32 {
        match self {
            Direction::Positive => STEP,
            Direction::Negative => -STEP,
        }
    }
}

/// Orbiting orthographic camera.
///
/// Angles are raw accumulators and are never wrapped into `[0, 2π)`.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraState {
    pub yaw: f32,
    pub zoom: f32,

    eye: Vec3,
    center: Vec3,
    up: Vec3,
}

/// Rotation of the look-at point around the eye.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OrbitCenterState {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

/// Orientation of the rendered object, independent of the camera.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ModelState {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

///////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
//                                               Creation Functions                                                  //
///////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl Default for CameraState {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CameraState {
    pub const EYE: Vec3 = Vec3::Z;
    pub const CENTER: Vec3 = Vec3::ZERO;
    pub const UP: Vec3 = Vec3::Y;

    pub fn new() -> Self {
        Self {
            yaw: 0.0f32,
            zoom: 0.0f32,

            eye: Self::EYE,
            center: Self::CENTER,
            up: Self::UP,
        }
    }

    pub fn with_yaw(mut self, yaw: f32) -> Self {
        self.yaw = yaw;
        self
    }

    pub fn with_zoom(mut self, zoom: f32) -> Self {
        self.zoom = zoom;
        self
    }
}

#[allow(dead_code)]
impl OrbitCenterState {
    pub fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }
}

#[allow(dead_code)]
impl ModelState {
    pub fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
//                                              Usability Functions                                                  //
///////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl CameraState {
    pub fn move_yaw(&mut self, direction: Direction) {
        self.yaw += direction.step();
    }

    pub fn move_zoom(&mut self, direction: Direction) {
        self.zoom += direction.step();
    }
}

impl OrbitCenterState {
    pub fn move_pitch(&mut self, direction: Direction) {
        self.pitch += direction.step();
    }

    pub fn move_yaw(&mut self, direction: Direction) {
        self.yaw += direction.step();
    }

    pub fn move_roll(&mut self, direction: Direction) {
        self.roll += direction.step();
    }
}

impl ModelState {
    pub fn move_pitch(&mut self, direction: Direction) {
        self.pitch += direction.step();
    }

    pub fn move_yaw(&mut self, direction: Direction) {
        self.yaw += direction.step();
    }

    pub fn move_roll(&mut self, direction: Direction) {
        self.roll += direction.step();
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
//                                              Get / Set Functions                                                  //
///////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[allow(dead_code)]
impl CameraState {
    pub fn get_eye(&self) -> Vec3 {
        self.eye
    }

    pub fn get_center(&self) -> Vec3 {
        self.center
    }

    pub fn get_up(&self) -> Vec3 {
        self.up
    }

    pub fn look_at(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.center, self.up)
    }
}
