#![allow(
    clippy::comparison_chain,
    clippy::let_and_return,
    clippy::identity_op,
    clippy::needless_bool,
    clippy::collapsible_if
)]

pub mod gl_context;
pub mod opengl_utils;
pub mod sdl2_gl_context;
