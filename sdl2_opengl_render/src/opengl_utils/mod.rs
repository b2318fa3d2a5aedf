pub mod shader;
pub mod shader_input_type;
pub mod shader_program;
pub mod vertex_array_object;
