//! GL objects owned by the runtime, addressed by small copyable ids.

use bytemuck::{Pod, Zeroable};
use glow::HasContext;

use crate::device::SetupError;
use crate::shader::{ShaderDesc, ShaderProgram, compile_program};

// ── vertex ────────────────────────────────────────────────────────────────

/// Position-only vertex, read by shaders at attribute location 0.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

impl Vertex {
    /// Attribute location of `position`.
    pub const POSITION_LOCATION: u32 = 0;

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { position: [x, y, z] }
    }
}

// ── ids ───────────────────────────────────────────────────────────────────

/// Index of a linked program inside [`Resources`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ProgramId(pub u32);

/// Index of an uploaded vertex array inside [`Resources`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GeometryId(pub u32);

/// Vertex buffer plus the vertex array describing it.
#[derive(Debug, Copy, Clone)]
pub struct Geometry {
    vbo: glow::Buffer,
    vao: glow::VertexArray,
    vertex_count: u32,
}

impl Geometry {
    #[inline]
    pub fn vertex_array(&self) -> glow::VertexArray {
        self.vao
    }

    #[inline]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }
}

// ── registry ──────────────────────────────────────────────────────────────

/// Every program and vertex array the app created.
///
/// Objects are immutable once registered and released together by
/// [`destroy`](Self::destroy) while the context is still current.
#[derive(Debug, Default)]
pub struct Resources {
    programs: Vec<ShaderProgram>,
    geometry: Vec<Geometry>,
}

impl Resources {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiles `desc` and registers the linked program.
    pub fn compile(&mut self, gl: &glow::Context, desc: &ShaderDesc) -> Result<ProgramId, SetupError> {
        let program = compile_program(gl, &desc.vertex_source(), &desc.fragment_source())?;
        let id = ProgramId(next_index(self.programs.len()));
        self.programs.push(program);

        log::debug!("registered program {id:?} (x offset {}, color {:?})", desc.x_offset, desc.color);
        Ok(id)
    }

    /// Uploads `vertices` into a static buffer and describes them as tightly
    /// packed `vec3` positions at location 0.
    pub fn upload(&mut self, gl: &glow::Context, vertices: &[Vertex]) -> Result<GeometryId, SetupError> {
        let vertex_count = u32::try_from(vertices.len())
            .map_err(|_| SetupError::Geometry(format!("{} vertices do not fit a draw call", vertices.len())))?;

        let geometry = unsafe {
            let vbo = gl.create_buffer().map_err(SetupError::Geometry)?;
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(glow::ARRAY_BUFFER, bytemuck::cast_slice(vertices), glow::STATIC_DRAW);

            let vao = match gl.create_vertex_array() {
                Ok(vao) => vao,
                Err(e) => {
                    gl.delete_buffer(vbo);
                    return Err(SetupError::Geometry(e));
                }
            };
            gl.bind_vertex_array(Some(vao));
            gl.enable_vertex_attrib_array(Vertex::POSITION_LOCATION);
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.vertex_attrib_pointer_f32(Vertex::POSITION_LOCATION, 3, glow::FLOAT, false, 0, 0);

            Geometry { vbo, vao, vertex_count }
        };

        let id = GeometryId(next_index(self.geometry.len()));
        self.geometry.push(geometry);

        log::debug!("uploaded geometry {id:?} with {vertex_count} vertices");
        Ok(id)
    }

    #[inline]
    pub fn program(&self, id: ProgramId) -> Option<ShaderProgram> {
        self.programs.get(id.0 as usize).copied()
    }

    #[inline]
    pub fn geometry(&self, id: GeometryId) -> Option<&Geometry> {
        self.geometry.get(id.0 as usize)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.programs.is_empty() && self.geometry.is_empty()
    }

    /// Deletes every registered object. Calling it again is a no-op.
    pub fn destroy(&mut self, gl: &glow::Context) {
        if self.is_empty() {
            return;
        }

        log::debug!(
            "deleting {} programs and {} vertex arrays",
            self.programs.len(),
            self.geometry.len()
        );

        unsafe {
            gl.use_program(None);
            gl.bind_vertex_array(None);

            for program in self.programs.drain(..) {
                gl.delete_program(program.raw());
            }
            for geometry in self.geometry.drain(..) {
                gl.delete_vertex_array(geometry.vao);
                gl.delete_buffer(geometry.vbo);
            }
        }
    }
}

fn next_index(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}
