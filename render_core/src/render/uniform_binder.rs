use crate::math::Matrix4x4;

use super::shader_program_inputs::{ShaderInputType, ShaderProgramInputs};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UniformError {
    #[error("program {program} has no input named '{name}'")]
    NotFound { program: u32, name: String },
    #[error("input '{name}' is declared as {declared:?}, got a {given:?} value")]
    TypeMismatch {
        name: String,
        declared: ShaderInputType,
        given: ShaderInputType,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Int(i32),
    Int2([i32; 2]),
    Int3([i32; 3]),
    Int4([i32; 4]),
    Float(f32),
    Float2([f32; 2]),
    Float3([f32; 3]),
    Float4([f32; 4]),
    Float9([f32; 9]),
    Float16(Matrix4x4),
    /// Texture unit the sampler reads from.
    Sampler2d(i32),
}

impl UniformValue {
    pub fn input_type(&self) -> ShaderInputType {
        match self {
            UniformValue::Int(_) => ShaderInputType::Int1,
            UniformValue::Int2(_) => ShaderInputType::Int2,
            UniformValue::Int3(_) => ShaderInputType::Int3,
            UniformValue::Int4(_) => ShaderInputType::Int4,
            UniformValue::Float(_) => ShaderInputType::Float1,
            UniformValue::Float2(_) => ShaderInputType::Float2,
            UniformValue::Float3(_) => ShaderInputType::Float3,
            UniformValue::Float4(_) => ShaderInputType::Float4,
            UniformValue::Float9(_) => ShaderInputType::Float9,
            UniformValue::Float16(_) => ShaderInputType::Float16,
            UniformValue::Sampler2d(_) => ShaderInputType::Sampler2d,
        }
    }
}

impl From<Matrix4x4> for UniformValue {
    fn from(matrix: Matrix4x4) -> Self {
        UniformValue::Float16(matrix)
    }
}

/// Uploads values to the inputs of one program, through the context the
/// program belongs to. The program has to be in use on that context.
pub struct UniformBinder<'a> {
    inputs: &'a ShaderProgramInputs,
}

impl<'a> UniformBinder<'a> {
    pub fn new(inputs: &'a ShaderProgramInputs) -> Self {
        Self { inputs }
    }

    pub fn set(&self, name: &str, value: UniformValue) -> Result<(), UniformError> {
        let input = self
            .inputs
            .get(name)
            .ok_or_else(|| UniformError::NotFound {
                program: self.inputs.program(),
                name: name.to_string(),
            })?;

        let given = value.input_type();
        if input.input_type != given {
            return Err(UniformError::TypeMismatch {
                name: name.to_string(),
                declared: input.input_type,
                given,
            });
        }

        let context = self.inputs.context();
        let location = input.location;

        match value {
            UniformValue::Int(value) | UniformValue::Sampler2d(value) => {
                context.set_uniform_int(location, 1, &[value])
            }
            UniformValue::Int2(values) => context.set_uniform_int(location, 2, &values),
            UniformValue::Int3(values) => context.set_uniform_int(location, 3, &values),
            UniformValue::Int4(values) => context.set_uniform_int(location, 4, &values),
            UniformValue::Float(value) => context.set_uniform_float(location, 1, &[value]),
            UniformValue::Float2(values) => context.set_uniform_float(location, 2, &values),
            UniformValue::Float3(values) => context.set_uniform_float(location, 3, &values),
            UniformValue::Float4(values) => context.set_uniform_float(location, 4, &values),
            UniformValue::Float9(values) => context.set_uniform_matrix3x3(location, &values),
            UniformValue::Float16(matrix) => {
                context.set_uniform_matrix4x4(location, matrix.values())
            }
        }

        Ok(())
    }

    pub fn set_matrix(&self, name: &str, matrix: &Matrix4x4) -> Result<(), UniformError> {
        self.set(name, UniformValue::Float16(*matrix))
    }
}
