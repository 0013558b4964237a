pub mod camera;
pub mod mesh;
pub mod shader;
pub mod transform;
pub mod vertex;

pub use mesh::VertexMesh;
pub use shader::Shader;
pub use vertex::Vertex;

use eframe::glow;

pub trait Model {
    type Error;

    fn setup_gl(&mut self, gl: &glow::Context, shader: &Shader) -> Result<(), Self::Error>;
    fn destroy_gl(&mut self, gl: &glow::Context);

    fn draw(&mut self, gl: &glow::Context);
}
