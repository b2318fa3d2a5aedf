use std::marker::PhantomData;

use render_core::render::AbstractContext;

/// Uniform uploads on the current OpenGL context. Created by
/// [`crate::sdl2_gl_context::Sdl2GlContext`] once the function pointers are
/// loaded, and bound to the thread that owns the context.
pub struct GlContext {
    _not_send: PhantomData<*const ()>,
}

impl GlContext {
    pub(crate) fn new() -> Self {
        Self {
            _not_send: PhantomData,
        }
    }
}

impl AbstractContext for GlContext {
    fn set_uniform_int(&self, location: u32, size: usize, values: &[i32]) {
        let location = location as i32;
        unsafe {
            match size {
                1 => gl::Uniform1iv(location, 1, values.as_ptr()),
                2 => gl::Uniform2iv(location, 1, values.as_ptr()),
                3 => gl::Uniform3iv(location, 1, values.as_ptr()),
                4 => gl::Uniform4iv(location, 1, values.as_ptr()),
                _ => log::error!("Invalid int uniform size, location = {location}, size = {size}"),
            }
        }
    }

    fn set_uniform_float(&self, location: u32, size: usize, values: &[f32]) {
        let location = location as i32;
        unsafe {
            match size {
                1 => gl::Uniform1fv(location, 1, values.as_ptr()),
                2 => gl::Uniform2fv(location, 1, values.as_ptr()),
                3 => gl::Uniform3fv(location, 1, values.as_ptr()),
                4 => gl::Uniform4fv(location, 1, values.as_ptr()),
                _ => {
                    log::error!("Invalid float uniform size, location = {location}, size = {size}")
                }
            }
        }
    }

    fn set_uniform_matrix3x3(&self, location: u32, values: &[f32; 9]) {
        unsafe {
            gl::UniformMatrix3fv(location as i32, 1, gl::TRUE, values.as_ptr());
        }
    }

    // row-major storage, GL transposes on upload
    fn set_uniform_matrix4x4(&self, location: u32, values: &[f32; 16]) {
        unsafe {
            gl::UniformMatrix4fv(location as i32, 1, gl::TRUE, values.as_ptr());
        }
    }
}
