use eframe::glow;

use crate::gfx::{
    mesh::MeshError,
    shader::ShaderUniformTypes,
    transform::{FrameTransforms, TransformComposer},
    Model, Shader, Vertex, VertexMesh,
};

use super::state::{Action, Flow, ViewState};

/// The one model on screen plus the state that orients it.
#[derive(Debug, Clone)]
pub struct Scene {
    pub state: ViewState,
    composer: TransformComposer,
    mesh: VertexMesh,
}

impl Scene {
    pub fn new(verts: Vec<Vertex>, composer: TransformComposer) -> Self {
        Self {
            state: ViewState::new(),
            composer,
            mesh: VertexMesh::new(verts),
        }
    }

    pub fn apply(&mut self, action: Action) -> Flow {
        self.state.apply(action)
    }

    pub fn transforms(&self, ratio: f32) -> FrameTransforms {
        self.composer.compose(
            &self.state.camera,
            &self.state.model,
            &self.state.orbit_center,
            ratio,
        )
    }

    pub fn composer(&self) -> TransformComposer {
        self.composer
    }

    pub fn vertex_count(&self) -> usize {
        self.mesh.len()
    }

    /// Binds the active program, uploads `mvp` and `rotation_mat` and draws.
    ///
    /// With no program bound the uniforms are skipped and the draw call is
    /// still issued.
    pub fn paint(&mut self, gl: &glow::Context, shader: &Shader, ratio: f32) {
        let frame = self.transforms(ratio);

        if let Some(shader) = shader.bind_active(gl, self.state.active_program()) {
            shader.set_uniform(gl, "mvp", ShaderUniformTypes::Mat4(&frame.mvp));
            shader.set_uniform(gl, "rotation_mat", ShaderUniformTypes::Mat4(&frame.rotation));
        }

        self.draw(gl);
    }
}

impl Model for Scene {
    type Error = MeshError;

    fn setup_gl(&mut self, gl: &glow::Context, shader: &Shader) -> Result<(), MeshError> {
        self.mesh.setup_gl(gl, shader)
    }

    fn destroy_gl(&mut self, gl: &glow::Context) {
        self.mesh.destroy_gl(gl);
    }

    fn draw(&mut self, gl: &glow::Context) {
        self.mesh.draw(gl);
    }
}
