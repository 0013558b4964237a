use eframe::glow;
use glam::Mat4;
use thiserror::Error;

pub const VERTEX_SRC: &str = include_str!("../../Shaders/default.vs");
pub const FRAGMENT_SRC: &str = include_str!("../../Shaders/default.fs");

#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("unable to create GL object: {0}")]
    Create(String),

    #[error("failed to compile {stage} shader:\n{log}")]
    Compile { stage: &'static str, log: String },

    #[error("failed to link shader program:\n{0}")]
    Link(String),

    #[error("shader program has no active attribute `{0}`")]
    MissingAttribute(&'static str),
}

pub enum ShaderUniformTypes<'a> {
    Mat4(&'a Mat4),
}

/// Which program a draw call should run with.
///
/// `None` binds program 0, leaving the pipeline without a shader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveProgram {
    Compiled,
    None,
}

#[derive(Debug, Clone)]
#[repr(C)]
pub struct Shader(glow::Program);

fn stage_name(shader_type: u32) -> &'static str {
    match shader_type {
        glow::VERTEX_SHADER => "vertex",
        glow::FRAGMENT_SHADER => "fragment",
        _ => "unknown",
    }
}

impl Shader {
    pub fn from_src(gl: &glow::Context, vtx: &str, frag: &str) -> Result<Self, ShaderError> {
        use glow::HasContext as _;

        unsafe {
            let program = gl.create_program().map_err(ShaderError::Create)?;

            let shader_sources = [(glow::VERTEX_SHADER, vtx), (glow::FRAGMENT_SHADER, frag)];

            let mut shaders = Vec::with_capacity(shader_sources.len());
            for (shader_type, shader_source) in shader_sources {
                let shader = match gl.create_shader(shader_type) {
                    Ok(shader) => shader,
                    Err(e) => {
                        Self::discard(gl, program, &shaders);
                        return Err(ShaderError::Create(e));
                    }
                };
                gl.shader_source(shader, shader_source);
                gl.compile_shader(shader);
                shaders.push(shader);

                if !gl.get_shader_compile_status(shader) {
                    let log = gl.get_shader_info_log(shader);
                    log::error!("{} shader compilation failed", stage_name(shader_type));
                    Self::discard(gl, program, &shaders);
                    return Err(ShaderError::Compile {
                        stage: stage_name(shader_type),
                        log,
                    });
                }
                gl.attach_shader(program, shader);
            }

            gl.link_program(program);
            let linked = gl.get_program_link_status(program);
            let log = if linked {
                String::new()
            } else {
                gl.get_program_info_log(program)
            };

            for shader in shaders {
                gl.detach_shader(program, shader);
                gl.delete_shader(shader);
            }

            if !linked {
                log::error!("shader program link failed");
                gl.delete_program(program);
                return Err(ShaderError::Link(log));
            }

            Ok(Self(program))
        }
    }

    /// Compiles the viewer's built-in shader pair.
    pub fn default_program(gl: &glow::Context) -> Result<Self, ShaderError> {
        Self::from_src(gl, VERTEX_SRC, FRAGMENT_SRC)
    }

    unsafe fn discard(gl: &glow::Context, program: glow::Program, shaders: &[glow::Shader]) {
        use glow::HasContext as _;

        for &shader in shaders {
            gl.delete_shader(shader);
        }
        gl.delete_program(program);
    }

    pub fn attrib_location(
        &self,
        gl: &glow::Context,
        name: &'static str,
    ) -> Result<u32, ShaderError> {
        use glow::HasContext as _;

        unsafe { gl.get_attrib_location(self.0, name) }.ok_or(ShaderError::MissingAttribute(name))
    }

    pub fn set_uniform(&self, gl: &glow::Context, name: &str, uniform: ShaderUniformTypes) {
        unsafe {
            use glow::HasContext as _;
            match uniform {
                ShaderUniformTypes::Mat4(uniform) => {
                    gl.uniform_matrix_4_f32_slice(
                        gl.get_uniform_location(self.0, name).as_ref(),
                        false,
                        &uniform.to_cols_array(),
                    );
                }
            }
        }
    }

    pub fn use_program(&self, gl: &glow::Context) {
        unsafe {
            use glow::HasContext as _;

            gl.use_program(Some(self.0));
        }
    }

    /// Binds this program or program 0 depending on `active`.
    ///
    /// Returns the shader that uniforms should be written to, if any.
    pub fn bind_active(&self, gl: &glow::Context, active: ActiveProgram) -> Option<&Self> {
        match active {
            ActiveProgram::Compiled => {
                self.use_program(gl);
                Some(self)
            }
            ActiveProgram::None => {
                unsafe {
                    use glow::HasContext as _;

                    gl.use_program(None);
                }
                None
            }
        }
    }

    pub fn destroy(&self, gl: &glow::Context) {
        unsafe {
            use glow::HasContext as _;

            gl.delete_program(self.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_sources_expose_the_gpu_contract() {
        for name in ["position", "color_in", "mvp", "rotation_mat"] {
            assert!(VERTEX_SRC.contains(name), "vertex shader lacks `{name}`");
        }
        assert!(VERTEX_SRC.contains("mvp * rotation_mat"));
        assert!(FRAGMENT_SRC.contains("in vec3 color;"));
    }

    #[test]
    fn compile_error_carries_diagnostic_text() {
        let err = ShaderError::Compile {
            stage: "vertex",
            log: "0:3: syntax error".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("vertex"));
        assert!(msg.contains("0:3: syntax error"));
    }
}
