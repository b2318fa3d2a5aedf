use gl::types::GLenum;
use render_core::render::ShaderInputType;

/// Maps the type reported by `glGetActiveUniform` to the engine's input type.
pub fn input_type_from_gl(gl_type: GLenum) -> ShaderInputType {
    match gl_type {
        gl::INT | gl::BOOL => ShaderInputType::Int1,
        gl::INT_VEC2 | gl::BOOL_VEC2 => ShaderInputType::Int2,
        gl::INT_VEC3 | gl::BOOL_VEC3 => ShaderInputType::Int3,
        gl::INT_VEC4 | gl::BOOL_VEC4 => ShaderInputType::Int4,
        gl::FLOAT => ShaderInputType::Float1,
        gl::FLOAT_VEC2 => ShaderInputType::Float2,
        gl::FLOAT_VEC3 => ShaderInputType::Float3,
        gl::FLOAT_VEC4 => ShaderInputType::Float4,
        gl::FLOAT_MAT3 => ShaderInputType::Float9,
        gl::FLOAT_MAT4 => ShaderInputType::Float16,
        gl::SAMPLER_2D => ShaderInputType::Sampler2d,
        _ => ShaderInputType::Unknown,
    }
}
