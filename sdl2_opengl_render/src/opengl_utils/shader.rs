use std::string::FromUtf8Error;

use gl::types::{GLchar, GLint, GLuint};

#[derive(Debug, Clone, Copy)]
pub enum ShaderType {
    Vertex,
    Geometry,
    Fragment,
}

impl ShaderType {
    pub fn to_gl_shader_type(&self) -> u32 {
        match self {
            ShaderType::Vertex => gl::VERTEX_SHADER,
            ShaderType::Geometry => gl::GEOMETRY_SHADER,
            ShaderType::Fragment => gl::FRAGMENT_SHADER,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ShaderCreationError {
    #[error("could not convert the compilation log to a string, msg = {0}")]
    CompilationErrorToString(FromUtf8Error),
    #[error("could not compile {shader_type:?} shader, msg = {error_msg}")]
    CompilationError {
        shader_type: ShaderType,
        error_msg: String,
    },
}

pub struct Shader {
    pub(super) shader_id: GLuint,
}

impl Shader {
    pub fn new(shader_type: ShaderType, source_code: &str) -> Result<Self, ShaderCreationError> {
        let shader = unsafe {
            let shader_id = gl::CreateShader(shader_type.to_gl_shader_type());
            let lengths = [source_code.len() as GLint];
            gl::ShaderSource(
                shader_id,
                1,
                &(source_code.as_ptr() as *const GLchar),
                lengths.as_ptr(),
            );

            gl::CompileShader(shader_id);

            // from here on the shader is deleted on every return path
            Self { shader_id }
        };

        let mut compile_status = 0;
        unsafe {
            gl::GetShaderiv(shader.shader_id, gl::COMPILE_STATUS, &mut compile_status);
        }

        let info_log = shader.info_log()?;

        if compile_status == 0 {
            Err(ShaderCreationError::CompilationError {
                shader_type,
                error_msg: info_log,
            })
        } else {
            if !info_log.is_empty() {
                log::warn!("Compiled {shader_type:?} shader with messages: {info_log}");
            }

            Ok(shader)
        }
    }

    fn info_log(&self) -> Result<String, ShaderCreationError> {
        let mut info_log_length = 0;
        let mut actual_info_log_length: i32 = 0;

        unsafe {
            gl::GetShaderiv(self.shader_id, gl::INFO_LOG_LENGTH, &mut info_log_length);
        }

        if info_log_length > 0 {
            let mut error_log = vec![0u8; info_log_length as usize + 1];
            unsafe {
                gl::GetShaderInfoLog(
                    self.shader_id,
                    info_log_length,
                    &mut actual_info_log_length,
                    error_log.as_mut_ptr() as *mut GLchar,
                );
            }
            error_log.truncate(actual_info_log_length as usize);

            String::from_utf8(error_log).map_err(ShaderCreationError::CompilationErrorToString)
        } else {
            Ok(String::new())
        }
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteShader(self.shader_id);
        }
    }
}
