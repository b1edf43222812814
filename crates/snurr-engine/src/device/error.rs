use std::fmt;

use crate::shader::ShaderError;

/// A fatal failure while bringing up the window, the GL context or the
/// resources the first frame depends on.
///
/// Each variant carries the platform's own error text. None of them is
/// recoverable in-process.
#[derive(Debug)]
pub enum SetupError {
    /// The windowing subsystem (event loop) could not start.
    Subsystem(String),
    /// No window (or no framebuffer config for it) could be created.
    Window(String),
    /// The GL context or its window surface could not be created or made current.
    Context(String),
    /// A shader stage failed to compile or the program failed to link.
    Shader(ShaderError),
    /// Vertex buffer or vertex array creation failed.
    Geometry(String),
}

impl SetupError {
    /// Short name of the setup step that failed.
    pub fn step(&self) -> &'static str {
        match self {
            SetupError::Subsystem(_) => "subsystem",
            SetupError::Window(_) => "window",
            SetupError::Context(_) => "context",
            SetupError::Shader(_) => "shader",
            SetupError::Geometry(_) => "geometry",
        }
    }
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::Subsystem(e) => write!(f, "Could not initialize windowing subsystem: {e}"),
            SetupError::Window(e) => write!(f, "Could not create window: {e}"),
            SetupError::Context(e) => write!(f, "Could not create GL context: {e}"),
            SetupError::Shader(e) => write!(f, "Could not build shader program: {e}"),
            SetupError::Geometry(e) => write!(f, "Could not upload vertex data: {e}"),
        }
    }
}

// No `source`: `Display` already includes the shader log.
impl std::error::Error for SetupError {}

impl From<ShaderError> for SetupError {
    fn from(e: ShaderError) -> Self {
        SetupError::Shader(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shader::ShaderStage;

    #[test]
    fn messages_name_the_failing_step() {
        let cases = [
            (
                SetupError::Subsystem("no display".into()),
                "Could not initialize windowing subsystem: no display",
            ),
            (
                SetupError::Window("BadMatch".into()),
                "Could not create window: BadMatch",
            ),
            (
                SetupError::Context("GLXBadFBConfig".into()),
                "Could not create GL context: GLXBadFBConfig",
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.to_string(), expected);
        }
    }

    #[test]
    fn shader_error_keeps_driver_log() {
        let err = SetupError::from(ShaderError::Compile {
            stage: ShaderStage::Fragment,
            log: "0:1: syntax error".into(),
        });

        assert_eq!(err.step(), "shader");
        assert_eq!(
            err.to_string(),
            "Could not build shader program: fragment shader failed to compile: 0:1: syntax error"
        );
    }
}
