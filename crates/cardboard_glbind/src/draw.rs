use crate::error::Result;
use crate::impl_prelude::*;
use prelude_plus::*;

gl_enum!({
  pub enum DrawPrimitive {
    Points = POINTS,
    LineStrip = LINE_STRIP,
    LineLoop = LINE_LOOP,
    Lines = LINES,
    LineStripAdjacency = LINE_STRIP_ADJACENCY,
    LinesAdjacency = LINES_ADJACENCY,
    TriangleStrip = TRIANGLE_STRIP,
    TriangleFan = TRIANGLE_FAN,
    Triangles = TRIANGLES,
    TriangleStripAdjacency = TRIANGLE_STRIP_ADJACENCY,
    TrianglesAdjacency = TRIANGLES_ADJACENCY,
    Patches = PATCHES,
  }
});

gl_enum!({
  pub enum IndexType {
    UnsignedByte = UNSIGNED_BYTE,
    UnsignedShort = UNSIGNED_SHORT,
    UnsignedInt = UNSIGNED_INT,
  }
});

impl IndexType {
  pub const fn size(self) -> usize {
    match self {
      Self::UnsignedByte => mem::size_of::<u8>(),
      Self::UnsignedShort => mem::size_of::<u16>(),
      Self::UnsignedInt => mem::size_of::<u32>(),
    }
  }
}

gl_enum!({
  pub enum DrawBuffer {
    None = NONE,
    FrontLeft = FRONT_LEFT,
    FrontRight = FRONT_RIGHT,
    BackLeft = BACK_LEFT,
    BackRight = BACK_RIGHT,
    ColorAttachment0 = COLOR_ATTACHMENT0,
    ColorAttachment1 = COLOR_ATTACHMENT1,
    ColorAttachment2 = COLOR_ATTACHMENT2,
    ColorAttachment3 = COLOR_ATTACHMENT3,
    ColorAttachment4 = COLOR_ATTACHMENT4,
    ColorAttachment5 = COLOR_ATTACHMENT5,
    ColorAttachment6 = COLOR_ATTACHMENT6,
    ColorAttachment7 = COLOR_ATTACHMENT7,
  }
});

// All of the indexed draw calls take `offset` as a byte offset into the
// buffer bound to `ELEMENT_ARRAY_BUFFER`.
impl Context {
  pub fn draw_arrays(&self, mode: DrawPrimitive, first: GLint, count: GLsizei) {
    unsafe { self.raw_gl().DrawArrays(mode.as_raw(), first, count) };
  }

  pub fn draw_elements<O: BufferOffset>(
    &self,
    mode: DrawPrimitive,
    count: GLsizei,
    index_type: IndexType,
    offset: O,
  ) -> Result<()> {
    let offset = offset.to_native_ptr("offset")?;
    unsafe { self.raw_gl().DrawElements(mode.as_raw(), count, index_type.as_raw(), offset) };
    Ok(())
  }

  pub fn draw_elements_base_vertex<O: BufferOffset>(
    &self,
    mode: DrawPrimitive,
    count: GLsizei,
    index_type: IndexType,
    offset: O,
    base_vertex: GLint,
  ) -> Result<()> {
    let offset = offset.to_native_ptr("offset")?;
    unsafe {
      self.raw_gl().DrawElementsBaseVertex(
        mode.as_raw(),
        count,
        index_type.as_raw(),
        offset,
        base_vertex,
      )
    };
    Ok(())
  }

  pub fn draw_range_elements<O: BufferOffset>(
    &self,
    mode: DrawPrimitive,
    start: GLuint,
    end: GLuint,
    count: GLsizei,
    index_type: IndexType,
    offset: O,
  ) -> Result<()> {
    let offset = offset.to_native_ptr("offset")?;
    unsafe {
      self.raw_gl().DrawRangeElements(mode.as_raw(), start, end, count, index_type.as_raw(), offset)
    };
    Ok(())
  }

  pub fn draw_elements_instanced<O: BufferOffset>(
    &self,
    mode: DrawPrimitive,
    count: GLsizei,
    index_type: IndexType,
    offset: O,
    instance_count: GLsizei,
  ) -> Result<()> {
    let offset = offset.to_native_ptr("offset")?;
    unsafe {
      self.raw_gl().DrawElementsInstanced(
        mode.as_raw(),
        count,
        index_type.as_raw(),
        offset,
        instance_count,
      )
    };
    Ok(())
  }

  pub fn draw_buffers(&self, buffers: &[DrawBuffer]) -> Result<()> {
    let raw_buffers: Vec<GLenum> = buffers.iter().map(DrawBuffer::as_raw).collect();
    self.pins().with_pinned("buffers", &raw_buffers, |ptr, n| unsafe {
      self.raw_gl().DrawBuffers(n, ptr)
    })
  }
}
