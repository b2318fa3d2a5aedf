pub mod context;
pub mod shader_program_inputs;
pub mod uniform_binder;

pub use context::AbstractContext;
pub use shader_program_inputs::{
    ShaderInput, ShaderInputType, ShaderProgramInputs, ShaderProgramInputsError,
};
pub use uniform_binder::{UniformBinder, UniformError, UniformValue};
