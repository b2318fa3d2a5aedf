use std::{string::FromUtf8Error, sync::Arc};

use gl::types::{GLchar, GLenum, GLint, GLsizei, GLuint};
use render_core::render::{
    AbstractContext, ShaderInputType, ShaderProgramInputs, ShaderProgramInputsError,
};

use super::{shader::Shader, shader_input_type::input_type_from_gl};

#[derive(Debug, thiserror::Error)]
pub enum ShaderProgramError {
    #[error("could not convert the program log to a string, msg = {0}")]
    LinkErrorToString(FromUtf8Error),
    #[error("could not link program, msg = {error_msg}")]
    LinkError { error_msg: String },
    #[error("program validation failed, msg = {error_msg}")]
    ValidateError { error_msg: String },
    #[error("could not convert an input name to a string, msg = {0}")]
    InputNameToString(FromUtf8Error),
    #[error(transparent)]
    Inputs(#[from] ShaderProgramInputsError),
}

pub struct ShaderProgram {
    attached_shaders: Vec<Shader>,
    program_id: GLuint,
}

#[derive(Clone, Copy)]
enum InputKind {
    Attribute,
    Uniform,
}

impl Default for ShaderProgram {
    fn default() -> Self {
        Self::new()
    }
}

impl ShaderProgram {
    pub fn new() -> Self {
        let program_id = unsafe { gl::CreateProgram() };

        Self {
            program_id,
            attached_shaders: Vec::new(),
        }
    }

    pub fn use_program(&self) {
        unsafe { gl::UseProgram(self.program_id) }
    }

    pub fn attach_shader(&mut self, shader: Shader) {
        unsafe { gl::AttachShader(self.program_id, shader.shader_id) }
        self.attached_shaders.push(shader);
    }

    unsafe fn get_program_info_log(&self) -> Result<String, ShaderProgramError> {
        let mut info_log_length = 0;
        let mut actual_info_log_length: i32 = 0;

        gl::GetProgramiv(self.program_id, gl::INFO_LOG_LENGTH, &mut info_log_length);

        if info_log_length > 0 {
            let mut error_log = vec![0u8; info_log_length as usize + 1];
            gl::GetProgramInfoLog(
                self.program_id,
                info_log_length,
                &mut actual_info_log_length,
                error_log.as_mut_ptr() as *mut GLchar,
            );
            error_log.truncate(actual_info_log_length as usize);

            String::from_utf8(error_log).map_err(ShaderProgramError::LinkErrorToString)
        } else {
            Ok(String::new())
        }
    }

    pub fn link_program(&mut self) -> Result<(), ShaderProgramError> {
        unsafe {
            gl::LinkProgram(self.program_id);

            let mut link_status = 0;
            gl::GetProgramiv(self.program_id, gl::LINK_STATUS, &mut link_status);

            let info_log = self.get_program_info_log()?;

            if link_status == 0 {
                Err(ShaderProgramError::LinkError {
                    error_msg: info_log,
                })
            } else {
                if !info_log.is_empty() {
                    log::warn!(
                        "Linked program {} with messages: {info_log}",
                        self.program_id
                    );
                }

                Ok(())
            }
        }
    }

    /// Checks whether the program can run in the current GL state, so it has
    /// to be called with everything the draw call needs already bound.
    pub fn validate_program(&self) -> Result<(), ShaderProgramError> {
        let mut validate_status = 0;
        unsafe {
            gl::ValidateProgram(self.program_id);
            gl::GetProgramiv(self.program_id, gl::VALIDATE_STATUS, &mut validate_status);
        }

        if validate_status != 0 {
            return Ok(());
        }

        let info_log = unsafe { self.get_program_info_log() }?;
        let error_msg = if info_log.is_empty() {
            format!("program {} is not valid in the current state", self.program_id)
        } else {
            info_log
        };

        Err(ShaderProgramError::ValidateError { error_msg })
    }

    /// Lists the active attributes and uniforms of the linked program.
    /// Built-in inputs without a location (e.g. `gl_VertexID`) are skipped.
    pub fn reflect_inputs(
        &self,
        context: Arc<dyn AbstractContext>,
    ) -> Result<ShaderProgramInputs, ShaderProgramError> {
        let mut names = Vec::new();
        let mut types = Vec::new();
        let mut locations = Vec::new();

        for kind in [InputKind::Attribute, InputKind::Uniform] {
            let (count_param, max_length_param) = match kind {
                InputKind::Attribute => (gl::ACTIVE_ATTRIBUTES, gl::ACTIVE_ATTRIBUTE_MAX_LENGTH),
                InputKind::Uniform => (gl::ACTIVE_UNIFORMS, gl::ACTIVE_UNIFORM_MAX_LENGTH),
            };

            let mut count: GLint = 0;
            let mut max_length: GLint = 0;
            unsafe {
                gl::GetProgramiv(self.program_id, count_param, &mut count);
                gl::GetProgramiv(self.program_id, max_length_param, &mut max_length);
            }

            for index in 0..count.max(0) as GLuint {
                let (name, gl_type, location) = unsafe { self.active_input(kind, index, max_length) }?;

                if location < 0 {
                    log::trace!(
                        "Skipping built-in input '{name}' of program {}",
                        self.program_id
                    );
                    continue;
                }

                let input_type = match kind {
                    InputKind::Attribute => ShaderInputType::Attribute,
                    InputKind::Uniform => input_type_from_gl(gl_type),
                };

                names.push(name);
                types.push(input_type);
                locations.push(location as u32);
            }
        }

        Ok(ShaderProgramInputs::new(
            context,
            self.program_id,
            names,
            types,
            locations,
        )?)
    }

    unsafe fn active_input(
        &self,
        kind: InputKind,
        index: GLuint,
        max_length: GLint,
    ) -> Result<(String, GLenum, GLint), ShaderProgramError> {
        let mut name_buffer = vec![0u8; max_length.max(1) as usize];
        let mut name_length: GLsizei = 0;
        let mut size: GLint = 0;
        let mut gl_type: GLenum = 0;

        let name_ptr = name_buffer.as_mut_ptr() as *mut GLchar;

        // the name is written nul-terminated, so the buffer doubles as a C string
        let location = match kind {
            InputKind::Attribute => {
                gl::GetActiveAttrib(
                    self.program_id,
                    index,
                    max_length,
                    &mut name_length,
                    &mut size,
                    &mut gl_type,
                    name_ptr,
                );
                gl::GetAttribLocation(self.program_id, name_ptr)
            }
            InputKind::Uniform => {
                gl::GetActiveUniform(
                    self.program_id,
                    index,
                    max_length,
                    &mut name_length,
                    &mut size,
                    &mut gl_type,
                    name_ptr,
                );
                gl::GetUniformLocation(self.program_id, name_ptr)
            }
        };

        name_buffer.truncate(name_length.max(0) as usize);
        let name = String::from_utf8(name_buffer).map_err(ShaderProgramError::InputNameToString)?;

        Ok((name, gl_type, location))
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteProgram(self.program_id);
        }
    }
}
