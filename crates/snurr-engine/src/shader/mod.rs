//! Shader compilation.
//!
//! - `program`: compiles a vertex/fragment pair into a linked GL program and
//!   checks compile and link status
//! - `desc`: flat-color program descriptions and the GLSL they generate

mod desc;
mod error;
mod program;

pub use desc::{GLSL_VERSION, ShaderDesc};
pub use error::{ShaderError, ShaderStage};
pub use program::{ShaderProgram, compile_program};
