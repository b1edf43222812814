use glow::HasContext;

use super::{ShaderError, ShaderStage};

/// A linked GL program.
///
/// The handle is plain data; deletion goes through
/// [`Resources`](crate::render::Resources), which owns every program it compiled.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ShaderProgram {
    raw: glow::Program,
}

impl ShaderProgram {
    #[inline]
    pub fn raw(self) -> glow::Program {
        self.raw
    }
}

/// Compiles both stages, links them and returns the program.
///
/// Compile and link status are checked; on failure every object created so far
/// is deleted and the driver's info log is returned.
pub fn compile_program(
    gl: &glow::Context,
    vertex_src: &str,
    fragment_src: &str,
) -> Result<ShaderProgram, ShaderError> {
    let vs = compile_stage(gl, ShaderStage::Vertex, vertex_src)?;
    let fs = match compile_stage(gl, ShaderStage::Fragment, fragment_src) {
        Ok(fs) => fs,
        Err(e) => {
            unsafe { gl.delete_shader(vs) };
            return Err(e);
        }
    };

    let linked = link(gl, vs, fs);

    // Stage objects are no longer needed once linking has been attempted.
    unsafe {
        gl.delete_shader(vs);
        gl.delete_shader(fs);
    }

    linked.map(|raw| ShaderProgram { raw })
}

fn compile_stage(
    gl: &glow::Context,
    stage: ShaderStage,
    source: &str,
) -> Result<glow::Shader, ShaderError> {
    unsafe {
        let shader = gl
            .create_shader(stage.gl_kind())
            .map_err(|message| ShaderError::Create { what: "shader", message })?;

        gl.shader_source(shader, source);
        gl.compile_shader(shader);

        if !gl.get_shader_compile_status(shader) {
            let log = gl.get_shader_info_log(shader);
            gl.delete_shader(shader);
            return Err(ShaderError::Compile { stage, log });
        }

        Ok(shader)
    }
}

fn link(gl: &glow::Context, vs: glow::Shader, fs: glow::Shader) -> Result<glow::Program, ShaderError> {
    unsafe {
        let program = gl
            .create_program()
            .map_err(|message| ShaderError::Create { what: "program", message })?;

        gl.attach_shader(program, vs);
        gl.attach_shader(program, fs);
        gl.link_program(program);

        gl.detach_shader(program, vs);
        gl.detach_shader(program, fs);

        if !gl.get_program_link_status(program) {
            let log = gl.get_program_info_log(program);
            gl.delete_program(program);
            return Err(ShaderError::Link { log });
        }

        log::debug!("linked shader program {program:?}");
        Ok(program)
    }
}
