use std::f32::consts::FRAC_PI_3;

use sdl2_opengl_render::sdl2_gl_context::GlProfile;

#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub window_name: String,
    pub window_width: u32,
    pub window_height: u32,
    pub gl_profile: GlProfile,
    pub gl_major_version: u8,
    pub gl_minor_version: u8,
    pub desired_fps: f32,

    /// vertical, in radians
    pub fov: f32,
    pub z_near: f32,
    pub z_far: f32,

    pub orbit_radius: f32,
    pub orbit_height: f32,
    /// radians per second
    pub orbit_speed: f32,
    /// fraction of the remaining distance covered per second
    pub smoothing: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            window_name: "orbit_viewer".to_string(),
            window_width: 800,
            window_height: 600,
            gl_profile: GlProfile::Core,
            gl_major_version: 4,
            gl_minor_version: 0,
            desired_fps: 30.0,

            fov: FRAC_PI_3,
            z_near: 0.1,
            z_far: 100.0,

            orbit_radius: 4.0,
            orbit_height: 1.5,
            orbit_speed: 0.5,
            smoothing: 4.0,
        }
    }
}
