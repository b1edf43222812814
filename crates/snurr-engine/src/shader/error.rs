use std::fmt;

/// Pipeline stage a shader object belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// GL enum passed to `glCreateShader`.
    #[inline]
    pub fn gl_kind(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        })
    }
}

/// Failure while building a shader program.
#[derive(Debug, Clone, PartialEq)]
pub enum ShaderError {
    /// The driver refused to allocate a shader or program object.
    Create { what: &'static str, message: String },
    /// A stage failed to compile; `log` is the driver's info log.
    Compile { stage: ShaderStage, log: String },
    /// The program failed to link; `log` is the driver's info log.
    Link { log: String },
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderError::Create { what, message } => write!(f, "failed to create {what}: {message}"),
            ShaderError::Compile { stage, log } => {
                write!(f, "{stage} shader failed to compile: {}", log.trim_end())
            }
            ShaderError::Link { log } => write!(f, "program failed to link: {}", log.trim_end()),
        }
    }
}

impl std::error::Error for ShaderError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_error_names_stage_and_trims_log() {
        let err = ShaderError::Compile {
            stage: ShaderStage::Vertex,
            log: "0:3(1): error: syntax error\n\n".into(),
        };

        assert_eq!(
            err.to_string(),
            "vertex shader failed to compile: 0:3(1): error: syntax error"
        );
    }

    #[test]
    fn stages_map_to_gl_enums() {
        assert_eq!(ShaderStage::Vertex.gl_kind(), glow::VERTEX_SHADER);
        assert_eq!(ShaderStage::Fragment.gl_kind(), glow::FRAGMENT_SHADER);
    }
}
