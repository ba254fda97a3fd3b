use crate::error::Result;
use crate::impl_prelude::*;
use prelude_plus::*;

gl_enum!({
  pub enum BufferTarget {
    Array = ARRAY_BUFFER,
    ElementArray = ELEMENT_ARRAY_BUFFER,
    CopyRead = COPY_READ_BUFFER,
    CopyWrite = COPY_WRITE_BUFFER,
    PixelPack = PIXEL_PACK_BUFFER,
    PixelUnpack = PIXEL_UNPACK_BUFFER,
    Texture = TEXTURE_BUFFER,
    TransformFeedback = TRANSFORM_FEEDBACK_BUFFER,
    Uniform = UNIFORM_BUFFER,
    DrawIndirect = DRAW_INDIRECT_BUFFER,
    AtomicCounter = ATOMIC_COUNTER_BUFFER,
  }
});

gl_enum!({
  /// Targets with indexed binding points, see [`Context::bind_buffer_range`].
  pub enum IndexedBufferTarget {
    TransformFeedback = TRANSFORM_FEEDBACK_BUFFER,
    Uniform = UNIFORM_BUFFER,
    AtomicCounter = ATOMIC_COUNTER_BUFFER,
  }
});

gl_enum!({
  pub enum BufferUsageHint {
    StreamDraw = STREAM_DRAW,
    StreamRead = STREAM_READ,
    StreamCopy = STREAM_COPY,
    StaticDraw = STATIC_DRAW,
    StaticRead = STATIC_READ,
    StaticCopy = STATIC_COPY,
    DynamicDraw = DYNAMIC_DRAW,
    DynamicRead = DYNAMIC_READ,
    DynamicCopy = DYNAMIC_COPY,
  }
});

gl_enum!({
  pub enum AttribType {
    Byte = BYTE,
    UnsignedByte = UNSIGNED_BYTE,
    Short = SHORT,
    UnsignedShort = UNSIGNED_SHORT,
    Int = INT,
    UnsignedInt = UNSIGNED_INT,
    HalfFloat = HALF_FLOAT,
    Float = FLOAT,
    Double = DOUBLE,
    Fixed = FIXED,
    Int2101010Rev = INT_2_10_10_10_REV,
    UnsignedInt2101010Rev = UNSIGNED_INT_2_10_10_10_REV,
  }
});

gl_enum!({
  pub enum IntegerAttribType {
    Byte = BYTE,
    UnsignedByte = UNSIGNED_BYTE,
    Short = SHORT,
    UnsignedShort = UNSIGNED_SHORT,
    Int = INT,
    UnsignedInt = UNSIGNED_INT,
  }
});

bitflags! {
  pub struct MapAccessFlags: u32 {
    const READ = gl::MAP_READ_BIT;
    const WRITE = gl::MAP_WRITE_BIT;
    const INVALIDATE_RANGE = gl::MAP_INVALIDATE_RANGE_BIT;
    const INVALIDATE_BUFFER = gl::MAP_INVALIDATE_BUFFER_BIT;
    const FLUSH_EXPLICIT = gl::MAP_FLUSH_EXPLICIT_BIT;
    const UNSYNCHRONIZED = gl::MAP_UNSYNCHRONIZED_BIT;
  }
}

impl Context {
  pub fn gen_buffers(&self, buffers: &mut [GLuint]) -> Result<()> {
    self.pins().with_pinned_mut("buffers", buffers, |ptr, n| unsafe {
      self.raw_gl().GenBuffers(n, ptr)
    })
  }

  pub fn gen_buffer(&self) -> GLuint {
    let mut buffer = 0;
    unsafe { self.raw_gl().GenBuffers(1, &mut buffer) };
    buffer
  }

  pub fn delete_buffers(&self, buffers: &[GLuint]) -> Result<()> {
    self.pins().with_pinned("buffers", buffers, |ptr, n| unsafe {
      self.raw_gl().DeleteBuffers(n, ptr)
    })
  }

  pub fn bind_buffer(&self, target: BufferTarget, buffer: GLuint) {
    unsafe { self.raw_gl().BindBuffer(target.as_raw(), buffer) };
  }

  /// (Re)allocates the buffer bound to `target` and fills it with `data`.
  pub fn buffer_data<T: Copy>(
    &self,
    target: BufferTarget,
    data: &[T],
    usage: BufferUsageHint,
  ) -> Result<()> {
    self.pins().with_pinned_bytes("data", data, |ptr, size| unsafe {
      self.raw_gl().BufferData(target.as_raw(), size, ptr, usage.as_raw())
    })
  }

  /// Allocates `size` bytes of uninitialized storage.
  pub fn buffer_data_uninit<S: BufferOffset>(
    &self,
    target: BufferTarget,
    size: S,
    usage: BufferUsageHint,
  ) -> Result<()> {
    let size = size.to_native_sizeiptr("size")?;
    unsafe { self.raw_gl().BufferData(target.as_raw(), size, ptr::null(), usage.as_raw()) };
    Ok(())
  }

  pub fn buffer_sub_data<O: BufferOffset, T: Copy>(
    &self,
    target: BufferTarget,
    offset: O,
    data: &[T],
  ) -> Result<()> {
    let offset = offset.to_native_intptr("offset")?;
    self.pins().with_pinned_bytes("data", data, |ptr, size| unsafe {
      self.raw_gl().BufferSubData(target.as_raw(), offset, size, ptr)
    })
  }

  /// Reads `data.len()` elements back starting at the byte `offset`.
  pub fn get_buffer_sub_data<O: BufferOffset, T: Copy>(
    &self,
    target: BufferTarget,
    offset: O,
    data: &mut [T],
  ) -> Result<()> {
    let offset = offset.to_native_intptr("offset")?;
    self.pins().with_pinned_bytes_mut("data", data, |ptr, size| unsafe {
      self.raw_gl().GetBufferSubData(target.as_raw(), offset, size, ptr)
    })
  }

  pub fn copy_buffer_sub_data<R: BufferOffset, W: BufferOffset, S: BufferOffset>(
    &self,
    read_target: BufferTarget,
    write_target: BufferTarget,
    read_offset: R,
    write_offset: W,
    size: S,
  ) -> Result<()> {
    let read_offset = read_offset.to_native_intptr("read_offset")?;
    let write_offset = write_offset.to_native_intptr("write_offset")?;
    let size = size.to_native_sizeiptr("size")?;
    unsafe {
      self.raw_gl().CopyBufferSubData(
        read_target.as_raw(),
        write_target.as_raw(),
        read_offset,
        write_offset,
        size,
      )
    };
    Ok(())
  }

  pub fn bind_buffer_base(&self, target: IndexedBufferTarget, index: GLuint, buffer: GLuint) {
    unsafe { self.raw_gl().BindBufferBase(target.as_raw(), index, buffer) };
  }

  pub fn bind_buffer_range<O: BufferOffset, S: BufferOffset>(
    &self,
    target: IndexedBufferTarget,
    index: GLuint,
    buffer: GLuint,
    offset: O,
    size: S,
  ) -> Result<()> {
    let offset = offset.to_native_intptr("offset")?;
    let size = size.to_native_sizeiptr("size")?;
    unsafe { self.raw_gl().BindBufferRange(target.as_raw(), index, buffer, offset, size) };
    Ok(())
  }

  /// Returns the driver's pointer as is, null on failure. Reading or writing
  /// through it is only valid until [`Context::unmap_buffer`].
  pub fn map_buffer_range<O: BufferOffset, S: BufferOffset>(
    &self,
    target: BufferTarget,
    offset: O,
    length: S,
    access: MapAccessFlags,
  ) -> Result<*mut c_void> {
    let offset = offset.to_native_intptr("offset")?;
    let length = length.to_native_sizeiptr("length")?;
    Ok(unsafe { self.raw_gl().MapBufferRange(target.as_raw(), offset, length, access.bits()) })
  }

  /// `false` means the buffer contents got corrupted while mapped.
  pub fn unmap_buffer(&self, target: BufferTarget) -> bool {
    unsafe { self.raw_gl().UnmapBuffer(target.as_raw()) != gl::FALSE }
  }

  pub fn gen_vertex_arrays(&self, arrays: &mut [GLuint]) -> Result<()> {
    self.pins().with_pinned_mut("arrays", arrays, |ptr, n| unsafe {
      self.raw_gl().GenVertexArrays(n, ptr)
    })
  }

  pub fn delete_vertex_arrays(&self, arrays: &[GLuint]) -> Result<()> {
    self.pins().with_pinned("arrays", arrays, |ptr, n| unsafe {
      self.raw_gl().DeleteVertexArrays(n, ptr)
    })
  }

  pub fn bind_vertex_array(&self, array: GLuint) {
    unsafe { self.raw_gl().BindVertexArray(array) };
  }

  pub fn enable_vertex_attrib_array(&self, index: GLuint) {
    unsafe { self.raw_gl().EnableVertexAttribArray(index) };
  }

  pub fn disable_vertex_attrib_array(&self, index: GLuint) {
    unsafe { self.raw_gl().DisableVertexAttribArray(index) };
  }

  /// `offset` is a byte offset into the buffer bound to
  /// [`BufferTarget::Array`].
  pub fn vertex_attrib_pointer<O: BufferOffset>(
    &self,
    index: GLuint,
    size: GLint,
    type_: AttribType,
    normalized: bool,
    stride: GLsizei,
    offset: O,
  ) -> Result<()> {
    let offset = offset.to_native_ptr("offset")?;
    unsafe {
      self.raw_gl().VertexAttribPointer(
        index,
        size,
        type_.as_raw(),
        normalized as GLboolean,
        stride,
        offset,
      )
    };
    Ok(())
  }

  pub fn vertex_attrib_i_pointer<O: BufferOffset>(
    &self,
    index: GLuint,
    size: GLint,
    type_: IntegerAttribType,
    stride: GLsizei,
    offset: O,
  ) -> Result<()> {
    let offset = offset.to_native_ptr("offset")?;
    unsafe { self.raw_gl().VertexAttribIPointer(index, size, type_.as_raw(), stride, offset) };
    Ok(())
  }
}
