/// The graphics context a shader program was linked in.
///
/// `ShaderProgramInputs` only keeps a reference to it; uploads go through
/// [`crate::render::UniformBinder`] which validates names and types first.
pub trait AbstractContext {
    /// `size` is the component count (1..=4), `values` holds `size` ints.
    fn set_uniform_int(&self, location: u32, size: usize, values: &[i32]);

    /// `size` is the component count (1..=4), `values` holds `size` floats.
    fn set_uniform_float(&self, location: u32, size: usize, values: &[f32]);

    /// Row-major 3x3 matrix.
    fn set_uniform_matrix3x3(&self, location: u32, values: &[f32; 9]);

    /// Row-major 4x4 matrix.
    fn set_uniform_matrix4x4(&self, location: u32, values: &[f32; 16]);
}
