use crate::gfx::{
    camera::{CameraState, Direction, ModelState, OrbitCenterState},
    shader::ActiveProgram,
};

/// Whether draws go through the compiled program or through program 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderToggle {
    pub shader_enabled: bool,
}

impl Default for RenderToggle {
    fn default() -> Self {
        Self {
            shader_enabled: true,
        }
    }
}

impl RenderToggle {
    pub fn toggle(&mut self) {
        self.shader_enabled = !self.shader_enabled;
    }

    pub fn active_program(&self) -> ActiveProgram {
        if self.shader_enabled {
            ActiveProgram::Compiled
        } else {
            ActiveProgram::None
        }
    }
}

/// A logical input action, independent of the key that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    PitchModel(Direction),
    YawModel(Direction),
    RollModel(Direction),
    Zoom(Direction),
    YawCamera(Direction),
    PitchOrbitCenter(Direction),
    YawOrbitCenter(Direction),
    RollOrbitCenter(Direction),
    Reset,
    ToggleShader,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Everything the keyboard can change.
///
/// The four parts never read each other; only [`ViewState::reset`] touches
/// all of them at once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub camera: CameraState,
    pub model: ModelState,
    pub orbit_center: OrbitCenterState,
    pub render: RenderToggle,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pitch_model(&mut self, direction: Direction) {
        self.model.move_pitch(direction);
    }

    pub fn yaw_model(&mut self, direction: Direction) {
        self.model.move_yaw(direction);
    }

    pub fn roll_model(&mut self, direction: Direction) {
        self.model.move_roll(direction);
    }

    pub fn zoom(&mut self, direction: Direction) {
        self.camera.move_zoom(direction);
    }

    pub fn yaw_camera(&mut self, direction: Direction) {
        self.camera.move_yaw(direction);
    }

    pub fn pitch_orbit_center(&mut self, direction: Direction) {
        self.orbit_center.move_pitch(direction);
    }

    pub fn yaw_orbit_center(&mut self, direction: Direction) {
        self.orbit_center.move_yaw(direction);
    }

    pub fn roll_orbit_center(&mut self, direction: Direction) {
        self.orbit_center.move_roll(direction);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn toggle_shader(&mut self) {
        self.render.toggle();
    }

    pub fn active_program(&self) -> ActiveProgram {
        self.render.active_program()
    }

    pub fn apply(&mut self, action: Action) -> Flow {
        match action {
            Action::PitchModel(dir) => self.pitch_model(dir),
            Action::YawModel(dir) => self.yaw_model(dir),
            Action::RollModel(dir) => self.roll_model(dir),
            Action::Zoom(dir) => self.zoom(dir),
            Action::YawCamera(dir) => self.yaw_camera(dir),
            Action::PitchOrbitCenter(dir) => self.pitch_orbit_center(dir),
            Action::YawOrbitCenter(dir) => self.yaw_orbit_center(dir),
            Action::RollOrbitCenter(dir) => self.roll_orbit_center(dir),
            Action::Reset => {
                self.reset();
                log::debug!("view reset");
            }
            Action::ToggleShader => {
                self.toggle_shader();
                log::debug!("active program: {:?}", self.active_program());
            }
            Action::Exit => return Flow::Exit,
        }
        Flow::Continue
    }
}
