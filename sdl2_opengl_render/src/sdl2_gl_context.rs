use std::sync::Arc;

use sdl2::event as sdl2_event;
use sdl2::video::{GLContext, Window, WindowBuildError};
use sdl2::{video, EventPump, Sdl, VideoSubsystem};
use vek::Vec2;

use crate::gl_context::GlContext;

pub struct Sdl2GlContext {
    _sdl_context: Sdl,
    _sdl_video: VideoSubsystem,
    _sdl_gl_context: GLContext,
    sdl_window: Window,
    event_pump: EventPump,
    gl_context: Arc<GlContext>,
}

#[derive(Debug, thiserror::Error)]
pub enum ContextCreationError {
    #[error("could not create sdl context, msg = {0}")]
    CouldNotCreateSdlContext(String),
    #[error("could not create video subsystem, msg = {0}")]
    CouldNotCreateVideoSystem(String),
    #[error("could not create gl context, msg = {0}")]
    CouldNotCreateGLContext(String),
    #[error("could not create event pump, msg = {0}")]
    CouldNotCreateEventPump(String),
    #[error("could not build window, msg = {0}")]
    CouldNotBuildWindow(WindowBuildError),
    #[error("could not create a {gl_profile:?} {gl_major_version}.{gl_minor_version} context")]
    CouldNotCreateContextWithGLVersion {
        gl_profile: GlProfile,
        gl_major_version: u8,
        gl_minor_version: u8,
    },
}

#[derive(Debug, Clone, Copy)]
pub enum GlProfile {
    Core,
    Compatibility,
    GLES,
}

impl From<GlProfile> for video::GLProfile {
    fn from(gl_profile: GlProfile) -> video::GLProfile {
        match gl_profile {
            GlProfile::Compatibility => video::GLProfile::Compatibility,
            GlProfile::Core => video::GLProfile::Core,
            GlProfile::GLES => video::GLProfile::GLES,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    Resized { width: u32, height: u32 },
    Closed,
}

impl Sdl2GlContext {
    pub fn new(
        window_name: &str,
        window_width: u32,
        window_height: u32,
        gl_profile: GlProfile,
        gl_major_version: u8,
        gl_minor_version: u8,
    ) -> Result<Self, ContextCreationError> {
        let sdl2_gl_profile = gl_profile.into();
        let sdl_context = sdl2::init().map_err(ContextCreationError::CouldNotCreateSdlContext)?;
        let sdl_video = sdl_context
            .video()
            .map_err(ContextCreationError::CouldNotCreateVideoSystem)?;

        let gl_attr = sdl_video.gl_attr();
        gl_attr.set_context_profile(sdl2_gl_profile);
        gl_attr.set_context_version(gl_major_version, gl_minor_version);

        let sdl_window = sdl_video
            .window(window_name, window_width, window_height)
            .opengl()
            .resizable()
            .build()
            .map_err(ContextCreationError::CouldNotBuildWindow)?;

        let sdl_gl_context = sdl_window
            .gl_create_context()
            .map_err(ContextCreationError::CouldNotCreateGLContext)?;
        gl::load_with(|name| sdl_video.gl_get_proc_address(name) as *const _);

        if gl_attr.context_profile() != sdl2_gl_profile {
            return Err(ContextCreationError::CouldNotCreateContextWithGLVersion {
                gl_profile,
                gl_major_version,
                gl_minor_version,
            });
        }

        let event_pump = sdl_context
            .event_pump()
            .map_err(ContextCreationError::CouldNotCreateEventPump)?;

        log::info!(
            "Created {gl_profile:?} {gl_major_version}.{gl_minor_version} context for '{window_name}'"
        );

        Ok(Self {
            _sdl_context: sdl_context,
            _sdl_video: sdl_video,
            _sdl_gl_context: sdl_gl_context,
            sdl_window,
            event_pump,
            gl_context: Arc::new(GlContext::new()),
        })
    }

    pub fn gl_context(&self) -> &Arc<GlContext> {
        &self.gl_context
    }

    pub fn window_size(&self) -> Vec2<u32> {
        let (width, height) = self.sdl_window.size();
        Vec2::new(width, height)
    }

    pub fn swap_window(&self) {
        self.sdl_window.gl_swap_window();
    }

    pub fn flush_events(&mut self) -> Vec<WindowEvent> {
        self.event_pump
            .poll_iter()
            .filter_map(|sdl2_event| match sdl2_event {
                sdl2_event::Event::Quit { .. } => Some(WindowEvent::Closed),
                sdl2_event::Event::Window { win_event, .. } => match win_event {
                    sdl2_event::WindowEvent::Resized(width, height) => {
                        Some(WindowEvent::Resized {
                            width: width.max(0) as u32,
                            height: height.max(0) as u32,
                        })
                    }
                    sdl2_event::WindowEvent::Close => Some(WindowEvent::Closed),
                    _ => None,
                },
                _ => None,
            })
            .collect()
    }
}
