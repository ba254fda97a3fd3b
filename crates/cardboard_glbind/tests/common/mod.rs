//! A fake GL driver made of plain Rust functions. Every entry point the tests
//! call records its arguments into a thread-local log, everything else
//! resolves to a function that must never be called.

#![allow(dead_code)]

use cardboard_glbind::*;
use std::cell::RefCell;
use std::collections::HashSet;
use std::os::raw::{c_char, c_void};
use std::{ptr, slice};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
  Enable(GLenum),
  Disable(GLenum),
  IsEnabled(GLenum),
  BlendFunc(GLenum, GLenum),
  DebugMessageCallback { installed: bool },
  GetError,
  GetIntegerv(GLenum),
  GetString(GLenum),
  GetStringi(GLenum, GLuint),
  DrawElements { mode: GLenum, count: GLsizei, index_type: GLenum, offset: usize },
  DrawElementsBaseVertex {
    mode: GLenum,
    count: GLsizei,
    index_type: GLenum,
    offset: usize,
    base_vertex: GLint,
  },
  DrawRangeElements {
    mode: GLenum,
    start: GLuint,
    end: GLuint,
    count: GLsizei,
    index_type: GLenum,
    offset: usize,
  },
  DrawElementsInstanced {
    mode: GLenum,
    count: GLsizei,
    index_type: GLenum,
    offset: usize,
    instance_count: GLsizei,
  },
  DrawBuffers(Vec<GLenum>),
  VertexAttribPointer {
    index: GLuint,
    size: GLint,
    type_: GLenum,
    normalized: bool,
    stride: GLsizei,
    offset: usize,
  },
  VertexAttribIPointer {
    index: GLuint,
    size: GLint,
    type_: GLenum,
    stride: GLsizei,
    offset: usize,
  },
  BufferData { target: GLenum, size: GLsizeiptr, data: Option<Vec<u8>>, usage: GLenum },
  BufferSubData { target: GLenum, offset: GLintptr, data: Vec<u8> },
  GetBufferSubData { target: GLenum, offset: GLintptr, size: GLsizeiptr },
  CopyBufferSubData {
    read_target: GLenum,
    write_target: GLenum,
    read_offset: GLintptr,
    write_offset: GLintptr,
    size: GLsizeiptr,
  },
  BindBufferRange {
    target: GLenum,
    index: GLuint,
    buffer: GLuint,
    offset: GLintptr,
    size: GLsizeiptr,
  },
  MapBufferRange { target: GLenum, offset: GLintptr, length: GLsizeiptr, access: GLbitfield },
  GenBuffers(GLsizei),
  DeleteBuffers(Vec<GLuint>),
  GenVertexArrays(GLsizei),
  DeleteVertexArrays(Vec<GLuint>),
  GenTextures(GLsizei),
  DeleteTextures(Vec<GLuint>),
  ActiveTexture(GLenum),
  ShaderSource { shader: GLuint, strings: Vec<String> },
  GetShaderiv(GLuint, GLenum),
  GetShaderInfoLog { shader: GLuint, buf_size: GLsizei },
  GetProgramiv(GLuint, GLenum),
  GetProgramInfoLog { program: GLuint, buf_size: GLsizei },
  Uniform1fv { location: GLint, values: Vec<f32> },
  Uniform1iv { location: GLint, values: Vec<i32> },
  Uniform4fv { location: GLint, values: Vec<f32> },
  UniformMatrix4fv { location: GLint, transpose: bool, values: Vec<f32> },
}

thread_local! {
  static CALLS: RefCell<Vec<Call>> = RefCell::new(Vec::new());
  static MISSING: RefCell<HashSet<String>> = RefCell::new(HashSet::new());
  static SENTINELS: RefCell<HashSet<String>> = RefCell::new(HashSet::new());
}

fn record(call: Call) { CALLS.with(|calls| calls.borrow_mut().push(call)); }

pub fn take_calls() -> Vec<Call> { CALLS.with(|calls| calls.borrow_mut().drain(..).collect()) }

/// Symbols listed here resolve to NULL until the next call.
pub fn set_missing(names: &[&str]) {
  MISSING.with(|missing| *missing.borrow_mut() = names.iter().map(|&s| s.to_owned()).collect());
}

/// Symbols listed here resolve to the WGL "not found" value `1`.
pub fn set_sentinels(names: &[&str]) {
  SENTINELS.with(|sentinels| {
    *sentinels.borrow_mut() = names.iter().map(|&s| s.to_owned()).collect()
  });
}

pub const VENDOR: &[u8] = b"Cardboard Mock Vendor\0";
pub const RENDERER: &[u8] = b"Cardboard Mock Renderer\0";
pub const VERSION: &[u8] = b"4.2.0 Mock 1.0\0";
pub const GLSL_VERSION: &[u8] = b"4.20 Mock\0";
pub const EXTENSIONS: &[u8] = b"GL_ARB_vertex_array_object GL_KHR_debug GL_MOCK_string_list\0";
pub const INDEXED_EXTENSIONS: &[&[u8]] =
  &[b"GL_ARB_sync\0", b"GL_ARB_texture_storage\0", b"GL_MOCK_indexed_list\0"];

pub const SHADER_INFO_LOG: &str = "0:3(12): error: `colour' undeclared";
pub const PROGRAM_INFO_LOG: &str = "error: vertex shader lacks `main'";

/// Address of a mock entry point for `name`.
pub fn mock_resolver(name: &str) -> *const c_void {
  if MISSING.with(|missing| missing.borrow().contains(name)) {
    return ptr::null();
  }
  if SENTINELS.with(|sentinels| sentinels.borrow().contains(name)) {
    return 1 as *const c_void;
  }

  match name {
    "glEnable" => gl_enable as *const c_void,
    "glDisable" => gl_disable as *const c_void,
    "glIsEnabled" => gl_is_enabled as *const c_void,
    "glBlendFunc" => gl_blend_func as *const c_void,
    "glDebugMessageCallback" => gl_debug_message_callback as *const c_void,
    "glGetError" => gl_get_error as *const c_void,
    "glGetIntegerv" => gl_get_integerv as *const c_void,
    "glGetString" => gl_get_string as *const c_void,
    "glGetStringi" => gl_get_stringi as *const c_void,
    "glDrawElements" => gl_draw_elements as *const c_void,
    "glDrawElementsBaseVertex" => gl_draw_elements_base_vertex as *const c_void,
    "glDrawRangeElements" => gl_draw_range_elements as *const c_void,
    "glDrawElementsInstanced" => gl_draw_elements_instanced as *const c_void,
    "glDrawBuffers" => gl_draw_buffers as *const c_void,
    "glVertexAttribPointer" => gl_vertex_attrib_pointer as *const c_void,
    "glVertexAttribIPointer" => gl_vertex_attrib_i_pointer as *const c_void,
    "glBufferData" => gl_buffer_data as *const c_void,
    "glBufferSubData" => gl_buffer_sub_data as *const c_void,
    "glGetBufferSubData" => gl_get_buffer_sub_data as *const c_void,
    "glCopyBufferSubData" => gl_copy_buffer_sub_data as *const c_void,
    "glBindBufferRange" => gl_bind_buffer_range as *const c_void,
    "glMapBufferRange" => gl_map_buffer_range as *const c_void,
    "glGenBuffers" => gl_gen_buffers as *const c_void,
    "glDeleteBuffers" => gl_delete_buffers as *const c_void,
    "glGenVertexArrays" => gl_gen_vertex_arrays as *const c_void,
    "glDeleteVertexArrays" => gl_delete_vertex_arrays as *const c_void,
    "glGenTextures" => gl_gen_textures as *const c_void,
    "glDeleteTextures" => gl_delete_textures as *const c_void,
    "glActiveTexture" => gl_active_texture as *const c_void,
    "glShaderSource" => gl_shader_source as *const c_void,
    "glGetShaderiv" => gl_get_shaderiv as *const c_void,
    "glGetShaderInfoLog" => gl_get_shader_info_log as *const c_void,
    "glGetProgramiv" => gl_get_programiv as *const c_void,
    "glGetProgramInfoLog" => gl_get_program_info_log as *const c_void,
    "glUniform1fv" => gl_uniform_1fv as *const c_void,
    "glUniform1iv" => gl_uniform_1iv as *const c_void,
    "glUniform4fv" => gl_uniform_4fv as *const c_void,
    "glUniformMatrix4fv" => gl_uniform_matrix_4fv as *const c_void,
    _ => gl_not_mocked as *const c_void,
  }
}

/// Loads a context against the mock driver and forgets the calls made while
/// loading.
pub fn load_context(config: ContextConfig) -> Context {
  let ctx = Context::load_with(mock_resolver, config);
  take_calls();
  ctx
}

/// A complete driver with default settings.
pub fn load_default_context() -> Context {
  reset_driver();
  load_context(ContextConfig::default())
}

pub fn reset_driver() {
  set_missing(&[]);
  set_sentinels(&[]);
  take_calls();
}

unsafe fn bytes<T>(data: *const T, len: usize) -> Vec<u8> {
  slice::from_raw_parts(data as *const u8, len).to_vec()
}

extern "system" fn gl_not_mocked() {
  // aborts the test binary, unwinding can't cross this frame
  panic!("called a GL entry point that has no mock");
}

extern "system" fn gl_enable(cap: GLenum) { record(Call::Enable(cap)) }
extern "system" fn gl_disable(cap: GLenum) { record(Call::Disable(cap)) }

extern "system" fn gl_is_enabled(cap: GLenum) -> GLboolean {
  record(Call::IsEnabled(cap));
  if cap == gl::BLEND {
    gl::TRUE
  } else {
    gl::FALSE
  }
}

extern "system" fn gl_blend_func(src: GLenum, dest: GLenum) { record(Call::BlendFunc(src, dest)) }

extern "system" fn gl_debug_message_callback(callback: GLDEBUGPROC, _user_param: *const c_void) {
  record(Call::DebugMessageCallback { installed: callback.is_some() })
}

extern "system" fn gl_get_error() -> GLenum {
  record(Call::GetError);
  gl::INVALID_OPERATION
}

extern "system" fn gl_get_integerv(pname: GLenum, data: *mut GLint) {
  record(Call::GetIntegerv(pname));
  let value = match pname {
    gl::NUM_EXTENSIONS => INDEXED_EXTENSIONS.len() as GLint,
    gl::MAX_TEXTURE_SIZE => 16384,
    gl::MAX_COMBINED_TEXTURE_IMAGE_UNITS => 32,
    gl::MAX_VERTEX_ATTRIBS => 16,
    _ => 0,
  };
  unsafe { *data = value };
}

extern "system" fn gl_get_string(name: GLenum) -> *const GLubyte {
  record(Call::GetString(name));
  match name {
    gl::VENDOR => VENDOR.as_ptr(),
    gl::RENDERER => RENDERER.as_ptr(),
    gl::VERSION => VERSION.as_ptr(),
    gl::SHADING_LANGUAGE_VERSION => GLSL_VERSION.as_ptr(),
    gl::EXTENSIONS => EXTENSIONS.as_ptr(),
    _ => ptr::null(),
  }
}

extern "system" fn gl_get_stringi(name: GLenum, index: GLuint) -> *const GLubyte {
  record(Call::GetStringi(name, index));
  match (name, INDEXED_EXTENSIONS.get(index as usize)) {
    (gl::EXTENSIONS, Some(extension)) => extension.as_ptr(),
    _ => ptr::null(),
  }
}

extern "system" fn gl_draw_elements(
  mode: GLenum,
  count: GLsizei,
  index_type: GLenum,
  indices: *const c_void,
) {
  record(Call::DrawElements { mode, count, index_type, offset: indices as usize })
}

extern "system" fn gl_draw_elements_base_vertex(
  mode: GLenum,
  count: GLsizei,
  index_type: GLenum,
  indices: *const c_void,
  base_vertex: GLint,
) {
  record(Call::DrawElementsBaseVertex {
    mode,
    count,
    index_type,
    offset: indices as usize,
    base_vertex,
  })
}

extern "system" fn gl_draw_range_elements(
  mode: GLenum,
  start: GLuint,
  end: GLuint,
  count: GLsizei,
  index_type: GLenum,
  indices: *const c_void,
) {
  record(Call::DrawRangeElements { mode, start, end, count, index_type, offset: indices as usize })
}

extern "system" fn gl_draw_elements_instanced(
  mode: GLenum,
  count: GLsizei,
  index_type: GLenum,
  indices: *const c_void,
  instance_count: GLsizei,
) {
  record(Call::DrawElementsInstanced {
    mode,
    count,
    index_type,
    offset: indices as usize,
    instance_count,
  })
}

extern "system" fn gl_draw_buffers(n: GLsizei, bufs: *const GLenum) {
  let bufs = unsafe { slice::from_raw_parts(bufs, n as usize) };
  record(Call::DrawBuffers(bufs.to_vec()))
}

extern "system" fn gl_vertex_attrib_pointer(
  index: GLuint,
  size: GLint,
  type_: GLenum,
  normalized: GLboolean,
  stride: GLsizei,
  pointer: *const c_void,
) {
  record(Call::VertexAttribPointer {
    index,
    size,
    type_,
    normalized: normalized != gl::FALSE,
    stride,
    offset: pointer as usize,
  })
}

extern "system" fn gl_vertex_attrib_i_pointer(
  index: GLuint,
  size: GLint,
  type_: GLenum,
  stride: GLsizei,
  pointer: *const c_void,
) {
  record(Call::VertexAttribIPointer { index, size, type_, stride, offset: pointer as usize })
}

extern "system" fn gl_buffer_data(
  target: GLenum,
  size: GLsizeiptr,
  data: *const c_void,
  usage: GLenum,
) {
  let data = if data.is_null() { None } else { Some(unsafe { bytes(data, size as usize) }) };
  record(Call::BufferData { target, size, data, usage })
}

extern "system" fn gl_buffer_sub_data(
  target: GLenum,
  offset: GLintptr,
  size: GLsizeiptr,
  data: *const c_void,
) {
  record(Call::BufferSubData { target, offset, data: unsafe { bytes(data, size as usize) } })
}

extern "system" fn gl_get_buffer_sub_data(
  target: GLenum,
  offset: GLintptr,
  size: GLsizeiptr,
  data: *mut c_void,
) {
  record(Call::GetBufferSubData { target, offset, size });
  let out = unsafe { slice::from_raw_parts_mut(data as *mut u8, size as usize) };
  for (i, byte) in out.iter_mut().enumerate() {
    *byte = (offset as usize + i) as u8;
  }
}

extern "system" fn gl_copy_buffer_sub_data(
  read_target: GLenum,
  write_target: GLenum,
  read_offset: GLintptr,
  write_offset: GLintptr,
  size: GLsizeiptr,
) {
  record(Call::CopyBufferSubData { read_target, write_target, read_offset, write_offset, size })
}

extern "system" fn gl_bind_buffer_range(
  target: GLenum,
  index: GLuint,
  buffer: GLuint,
  offset: GLintptr,
  size: GLsizeiptr,
) {
  record(Call::BindBufferRange { target, index, buffer, offset, size })
}

extern "system" fn gl_map_buffer_range(
  target: GLenum,
  offset: GLintptr,
  length: GLsizeiptr,
  access: GLbitfield,
) -> *mut c_void {
  record(Call::MapBufferRange { target, offset, length, access });
  0xB0F0 as *mut c_void
}

extern "system" fn gl_gen_buffers(n: GLsizei, buffers: *mut GLuint) {
  record(Call::GenBuffers(n));
  fill_names(buffers, n, 1);
}

extern "system" fn gl_delete_buffers(n: GLsizei, buffers: *const GLuint) {
  record(Call::DeleteBuffers(names_of(buffers, n)))
}

/// Hands out `first`, `first + 1`, ... like a fresh driver would.
fn fill_names(names: *mut GLuint, n: GLsizei, first: GLuint) {
  let out = unsafe { slice::from_raw_parts_mut(names, n as usize) };
  for (i, name) in out.iter_mut().enumerate() {
    *name = first + i as GLuint;
  }
}

fn names_of(names: *const GLuint, n: GLsizei) -> Vec<GLuint> {
  unsafe { slice::from_raw_parts(names, n as usize) }.to_vec()
}

extern "system" fn gl_gen_vertex_arrays(n: GLsizei, arrays: *mut GLuint) {
  record(Call::GenVertexArrays(n));
  fill_names(arrays, n, 100);
}

extern "system" fn gl_delete_vertex_arrays(n: GLsizei, arrays: *const GLuint) {
  record(Call::DeleteVertexArrays(names_of(arrays, n)))
}

extern "system" fn gl_gen_textures(n: GLsizei, textures: *mut GLuint) {
  record(Call::GenTextures(n));
  fill_names(textures, n, 200);
}

extern "system" fn gl_delete_textures(n: GLsizei, textures: *const GLuint) {
  record(Call::DeleteTextures(names_of(textures, n)))
}

extern "system" fn gl_active_texture(texture: GLenum) { record(Call::ActiveTexture(texture)) }

extern "system" fn gl_shader_source(
  shader: GLuint,
  count: GLsizei,
  strings: *const *const GLchar,
  lengths: *const GLint,
) {
  let strings = unsafe { slice::from_raw_parts(strings, count as usize) };
  let lengths = unsafe { slice::from_raw_parts(lengths, count as usize) };
  let strings = strings
    .iter()
    .zip(lengths)
    .map(|(&s, &len)| {
      let text = unsafe { bytes(s as *const c_char, len as usize) };
      String::from_utf8(text).unwrap()
    })
    .collect();
  record(Call::ShaderSource { shader, strings })
}

extern "system" fn gl_get_shaderiv(shader: GLuint, pname: GLenum, params: *mut GLint) {
  record(Call::GetShaderiv(shader, pname));
  let value = match pname {
    gl::INFO_LOG_LENGTH => SHADER_INFO_LOG.len() as GLint + 1,
    gl::COMPILE_STATUS => gl::FALSE as GLint,
    _ => 0,
  };
  unsafe { *params = value };
}

extern "system" fn gl_get_shader_info_log(
  shader: GLuint,
  buf_size: GLsizei,
  length: *mut GLsizei,
  info_log: *mut GLchar,
) {
  record(Call::GetShaderInfoLog { shader, buf_size });
  write_info_log(SHADER_INFO_LOG, buf_size, length, info_log);
}

/// Writes `text` the way `glGet*InfoLog` does: truncated to `buf_size`
/// including the terminator, length without it.
fn write_info_log(text: &str, buf_size: GLsizei, length: *mut GLsizei, info_log: *mut GLchar) {
  let text = text.as_bytes();
  let written = text.len().min(buf_size as usize - 1);
  unsafe {
    ptr::copy_nonoverlapping(text.as_ptr() as *const GLchar, info_log, written);
    *info_log.add(written) = 0;
    *length = written as GLsizei;
  }
}

extern "system" fn gl_get_programiv(program: GLuint, pname: GLenum, params: *mut GLint) {
  record(Call::GetProgramiv(program, pname));
  let value = match pname {
    gl::INFO_LOG_LENGTH => PROGRAM_INFO_LOG.len() as GLint + 1,
    gl::LINK_STATUS => gl::FALSE as GLint,
    _ => 0,
  };
  unsafe { *params = value };
}

extern "system" fn gl_get_program_info_log(
  program: GLuint,
  buf_size: GLsizei,
  length: *mut GLsizei,
  info_log: *mut GLchar,
) {
  record(Call::GetProgramInfoLog { program, buf_size });
  write_info_log(PROGRAM_INFO_LOG, buf_size, length, info_log);
}

extern "system" fn gl_uniform_1fv(location: GLint, count: GLsizei, value: *const GLfloat) {
  let values = unsafe { slice::from_raw_parts(value, count as usize) };
  record(Call::Uniform1fv { location, values: values.to_vec() })
}

extern "system" fn gl_uniform_1iv(location: GLint, count: GLsizei, value: *const GLint) {
  let values = unsafe { slice::from_raw_parts(value, count as usize) };
  record(Call::Uniform1iv { location, values: values.to_vec() })
}

extern "system" fn gl_uniform_4fv(location: GLint, count: GLsizei, value: *const GLfloat) {
  let values = unsafe { slice::from_raw_parts(value, count as usize * 4) };
  record(Call::Uniform4fv { location, values: values.to_vec() })
}

extern "system" fn gl_uniform_matrix_4fv(
  location: GLint,
  count: GLsizei,
  transpose: GLboolean,
  value: *const GLfloat,
) {
  let values = unsafe { slice::from_raw_parts(value, count as usize * 16) };
  record(Call::UniformMatrix4fv {
    location,
    transpose: transpose != gl::FALSE,
    values: values.to_vec(),
  })
}
