mod main_loop;
mod orbit_camera;
mod viewer_config;

use std::{error::Error, sync::Arc};

use render_core::{
    math::Matrix4x4,
    render::{AbstractContext, ShaderProgramInputs, UniformBinder, UniformValue},
};
use sdl2_opengl_render::{
    opengl_utils::{
        shader::{Shader, ShaderType},
        shader_program::ShaderProgram,
        vertex_array_object::VertexArrayObject,
    },
    sdl2_gl_context::{Sdl2GlContext, WindowEvent},
};
use vek::Vec3;

use crate::{main_loop::MainLoop, orbit_camera::OrbitCamera, viewer_config::ViewerConfig};

const VERTEX_SHADER: &str = r#"#version 400 core

uniform mat4 objectMatrix;
uniform mat4 viewMatrix;
uniform mat4 projectionMatrix;

out vec3 vertexColor;

const vec3 positions[3] = vec3[3](
    vec3(-1.0, -1.0, 0.0),
    vec3(1.0, -1.0, 0.0),
    vec3(0.0, 1.0, 0.0)
);

const vec3 colors[3] = vec3[3](
    vec3(1.0, 0.2, 0.2),
    vec3(0.2, 1.0, 0.2),
    vec3(0.2, 0.2, 1.0)
);

void main() {
    vertexColor = colors[gl_VertexID];
    gl_Position = projectionMatrix * viewMatrix * objectMatrix * vec4(positions[gl_VertexID], 1.0);
}
"#;

const FRAGMENT_SHADER: &str = r#"#version 400 core

uniform vec4 tint;

in vec3 vertexColor;
out vec4 fragColor;

void main() {
    fragColor = vec4(vertexColor, 1.0) * tint;
}
"#;

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(e) = run(ViewerConfig::default()) {
        log::error!("orbit_viewer stopped, msg = {e}");
        std::process::exit(1);
    }
}

fn run(config: ViewerConfig) -> Result<(), Box<dyn Error>> {
    let mut sdl2_gl_context = Sdl2GlContext::new(
        &config.window_name,
        config.window_width,
        config.window_height,
        config.gl_profile,
        config.gl_major_version,
        config.gl_minor_version,
    )?;
    let gl_context: Arc<dyn AbstractContext> = sdl2_gl_context.gl_context().clone();

    let shader_program = build_shader_program()?;
    let inputs = shader_program.reflect_inputs(gl_context)?;
    log_inputs(&inputs);

    let vertex_array_object = VertexArrayObject::new();
    vertex_array_object.use_vao(|| {
        let _ = shader_program
            .validate_program()
            .inspect_err(|e| log::warn!("Validating shader program, msg = {e}"));
    });

    let window_size = sdl2_gl_context.window_size();
    unsafe {
        gl::Viewport(0, 0, window_size.x as i32, window_size.y as i32);
    }

    let mut camera = OrbitCamera::new(&config, Vec3::zero())?;
    camera.resize(window_size.x, window_size.y);
    let mut object_matrix = Matrix4x4::new();
    let mut object_angle = 0.0f32;

    let main_loop = MainLoop::new(config.desired_fps);
    'running: for delta_time_in_secs in main_loop.iter() {
        for event in sdl2_gl_context.flush_events() {
            match event {
                WindowEvent::Closed => break 'running,
                WindowEvent::Resized { width, height } => {
                    unsafe {
                        gl::Viewport(0, 0, width as i32, height as i32);
                    }
                    camera.resize(width, height);
                }
            }
        }

        object_angle += delta_time_in_secs;
        object_matrix
            .rotation_y(object_angle)
            .append_rotation(0.3 * object_angle, Vec3::unit_x());

        let Ok(view_matrix) = camera
            .tick(delta_time_in_secs)
            .and_then(|_| camera.view_matrix())
            .inspect_err(|e| log::error!("Updating camera, skipping frame, msg = {e}"))
        else {
            continue;
        };

        unsafe {
            gl::ClearColor(0.2, 0.2, 0.2, 1.0);
            gl::Enable(gl::DEPTH_TEST);

            gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT);
        }

        shader_program.use_program();

        let binder = UniformBinder::new(&inputs);
        let uniforms = [
            ("objectMatrix", UniformValue::from(object_matrix)),
            ("viewMatrix", UniformValue::from(view_matrix)),
            ("projectionMatrix", UniformValue::from(*camera.projection_matrix())),
            ("tint", UniformValue::Float4([1.0, 1.0, 1.0, 1.0])),
        ];
        for (name, value) in uniforms {
            let _ = binder
                .set(name, value)
                .inspect_err(|e| log::debug!("Setting uniform, msg = {e}"));
        }

        vertex_array_object.draw_triangles(0, 3);

        sdl2_gl_context.swap_window();
    }

    Ok(())
}

fn build_shader_program() -> Result<ShaderProgram, Box<dyn Error>> {
    let vertex_shader = Shader::new(ShaderType::Vertex, VERTEX_SHADER)?;
    let fragment_shader = Shader::new(ShaderType::Fragment, FRAGMENT_SHADER)?;

    let mut shader_program = ShaderProgram::new();
    shader_program.attach_shader(vertex_shader);
    shader_program.attach_shader(fragment_shader);
    shader_program.link_program()?;

    Ok(shader_program)
}

fn log_inputs(inputs: &ShaderProgramInputs) {
    for input in inputs.iter() {
        match input.input_type.type_to_string() {
            Ok(type_name) => log::info!(
                "Program {} input '{}', type = {type_name}, location = {}",
                inputs.program(),
                input.name,
                input.location
            ),
            Err(e) => log::info!(
                "Program {} input '{}', location = {}, {e}",
                inputs.program(),
                input.name,
                input.location
            ),
        }
    }
}
