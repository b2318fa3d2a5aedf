use gl::types::{GLint, GLsizei, GLuint};

/// A vertex array without buffers, for shaders that derive their vertices from
/// `gl_VertexID`. Core profiles refuse to draw with no array bound.
pub struct VertexArrayObject {
    vao_id: GLuint,
}

impl Default for VertexArrayObject {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexArrayObject {
    pub fn new() -> Self {
        let mut vao_id = 0;
        unsafe {
            gl::GenVertexArrays(1, &mut vao_id);
        }

        Self { vao_id }
    }

    pub fn use_vao(&self, use_fn: impl FnOnce()) {
        unsafe {
            gl::BindVertexArray(self.vao_id);
        }

        use_fn();

        unsafe {
            gl::BindVertexArray(0);
        }
    }

    pub fn draw_triangles(&self, first: usize, vertex_count: usize) {
        self.use_vao(|| unsafe {
            gl::DrawArrays(gl::TRIANGLES, first as GLint, vertex_count as GLsizei);
        });
    }
}

impl Drop for VertexArrayObject {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteVertexArrays(1, &self.vao_id);
        }
    }
}
