use eframe::glow;
use thiserror::Error;
use zerocopy::AsBytes;

use super::{shader::ShaderError, Model, Shader, Vertex};

#[derive(Debug, Error)]
pub enum MeshError {
    #[error("unable to create GL object: {0}")]
    Create(String),

    #[error("mesh is already uploaded")]
    AlreadyUploaded,

    #[error(transparent)]
    Shader(#[from] ShaderError),
}

/// A flat triangle list uploaded as a single interleaved buffer.
#[derive(Debug, Clone)]
pub struct VertexMesh {
    pub render: bool,
    verts: Vec<Vertex>,
    vao: Option<glow::VertexArray>,
    vbo: Option<glow::Buffer>,
}

impl VertexMesh {
    pub fn new(verts: Vec<Vertex>) -> Self {
        Self {
            render: true,
            verts,
            vao: None,
            vbo: None,
        }
    }

    pub fn len(&self) -> usize {
        self.verts.len()
    }

    pub fn is_uploaded(&self) -> bool {
        self.vao.is_some() && self.vbo.is_some()
    }
}

impl Model for VertexMesh {
    type Error = MeshError;

    fn setup_gl(&mut self, gl: &glow::Context, shader: &Shader) -> Result<(), MeshError> {
        if self.vao.is_some() || self.vbo.is_some() {
            return Err(MeshError::AlreadyUploaded);
        }

        let position = shader.attrib_location(gl, "position")?;
        let color = shader.attrib_location(gl, "color_in")?;
        log::debug!("attribute locations: position={position} color_in={color}");

        unsafe {
            use glow::HasContext as _;

            let vao = gl.create_vertex_array().map_err(MeshError::Create)?;
            let vbo = match gl.create_buffer() {
                Ok(vbo) => vbo,
                Err(e) => {
                    gl.delete_vertex_array(vao);
                    return Err(MeshError::Create(e));
                }
            };
            self.vao = Some(vao);
            self.vbo = Some(vbo);

            gl.bind_vertex_array(self.vao);
            gl.bind_buffer(glow::ARRAY_BUFFER, self.vbo);
            gl.buffer_data_u8_slice(glow::ARRAY_BUFFER, self.verts.as_bytes(), glow::STATIC_DRAW);

            gl.vertex_attrib_pointer_f32(
                position,
                3,
                glow::FLOAT,
                false,
                Vertex::STRIDE as _,
                Vertex::POS_OFFSET as _,
            );
            gl.enable_vertex_attrib_array(position);

            gl.vertex_attrib_pointer_f32(
                color,
                3,
                glow::FLOAT,
                false,
                Vertex::STRIDE as _,
                Vertex::CLR_OFFSET as _,
            );
            gl.enable_vertex_attrib_array(color);

            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            gl.bind_vertex_array(None);
        }

        log::info!("uploaded {} vertices", self.verts.len());
        Ok(())
    }

    fn destroy_gl(&mut self, gl: &glow::Context) {
        unsafe {
            use glow::HasContext as _;

            if let Some(vao) = self.vao.take() {
                gl.delete_vertex_array(vao);
            }
            if let Some(vbo) = self.vbo.take() {
                gl.delete_buffer(vbo);
            }
        }
    }

    fn draw(&mut self, gl: &glow::Context) {
        if !self.render || !self.is_uploaded() {
            return;
        }

        unsafe {
            use glow::HasContext as _;

            gl.bind_vertex_array(self.vao);
            gl.draw_arrays(glow::TRIANGLES, 0, self.verts.len() as _);
            gl.bind_vertex_array(None);
        }
    }
}
