use crate::error::Result;
use crate::impl_prelude::*;
use crate::marshal::{read_gl_string, CStringArray};
use prelude_plus::*;

gl_enum!({
  pub enum ShaderType {
    Vertex = VERTEX_SHADER,
    Fragment = FRAGMENT_SHADER,
    Geometry = GEOMETRY_SHADER,
    TessControl = TESS_CONTROL_SHADER,
    TessEvaluation = TESS_EVALUATION_SHADER,
  }
});

gl_enum!({
  pub enum ShaderParameter {
    ShaderType = SHADER_TYPE,
    DeleteStatus = DELETE_STATUS,
    CompileStatus = COMPILE_STATUS,
    InfoLogLength = INFO_LOG_LENGTH,
    ShaderSourceLength = SHADER_SOURCE_LENGTH,
  }
});

gl_enum!({
  pub enum ProgramParameter {
    DeleteStatus = DELETE_STATUS,
    LinkStatus = LINK_STATUS,
    ValidateStatus = VALIDATE_STATUS,
    InfoLogLength = INFO_LOG_LENGTH,
    AttachedShaders = ATTACHED_SHADERS,
    ActiveAttributes = ACTIVE_ATTRIBUTES,
    ActiveAttributeMaxLength = ACTIVE_ATTRIBUTE_MAX_LENGTH,
    ActiveUniforms = ACTIVE_UNIFORMS,
    ActiveUniformMaxLength = ACTIVE_UNIFORM_MAX_LENGTH,
    ActiveUniformBlocks = ACTIVE_UNIFORM_BLOCKS,
    ProgramBinaryLength = PROGRAM_BINARY_LENGTH,
  }
});

pub const INACTIVE_UNIFORM_LOCATION: GLint = -1;
pub const INACTIVE_ATTRIBUTE_LOCATION: GLint = -1;

impl Context {
  pub fn create_shader(&self, type_: ShaderType) -> GLuint {
    unsafe { self.raw_gl().CreateShader(type_.as_raw()) }
  }

  pub fn delete_shader(&self, shader: GLuint) { unsafe { self.raw_gl().DeleteShader(shader) }; }

  /// Replaces the source of `shader` with the concatenation of `strings`.
  pub fn shader_source<S: AsRef<[u8]>>(&self, shader: GLuint, strings: &[S]) -> Result<()> {
    let strings = CStringArray::new("string", strings)?;
    unsafe {
      self.raw_gl().ShaderSource(shader, strings.count(), strings.pointers(), strings.lengths())
    };
    Ok(())
  }

  /// Compiles `shader` and returns its `COMPILE_STATUS`.
  pub fn compile_shader(&self, shader: GLuint) -> bool {
    unsafe { self.raw_gl().CompileShader(shader) };
    self.get_shader_parameter(shader, ShaderParameter::CompileStatus) == gl::TRUE as GLint
  }

  pub fn get_shader_parameter(&self, shader: GLuint, pname: ShaderParameter) -> GLint {
    let mut value = 0;
    unsafe { self.raw_gl().GetShaderiv(shader, pname.as_raw(), &mut value) };
    value
  }

  pub fn get_shader_info_log(&self, shader: GLuint) -> String {
    let buf_size = self.get_shader_parameter(shader, ShaderParameter::InfoLogLength);
    read_gl_string(buf_size, |buf_size, text_len, buf| unsafe {
      self.raw_gl().GetShaderInfoLog(shader, buf_size, text_len, buf)
    })
  }

  pub fn create_program(&self) -> GLuint { unsafe { self.raw_gl().CreateProgram() } }

  pub fn delete_program(&self, program: GLuint) {
    unsafe { self.raw_gl().DeleteProgram(program) };
  }

  pub fn attach_shader(&self, program: GLuint, shader: GLuint) {
    unsafe { self.raw_gl().AttachShader(program, shader) };
  }

  pub fn detach_shader(&self, program: GLuint, shader: GLuint) {
    unsafe { self.raw_gl().DetachShader(program, shader) };
  }

  /// Links `program` and returns its `LINK_STATUS`.
  pub fn link_program(&self, program: GLuint) -> bool {
    unsafe { self.raw_gl().LinkProgram(program) };
    self.get_program_parameter(program, ProgramParameter::LinkStatus) == gl::TRUE as GLint
  }

  pub fn use_program(&self, program: GLuint) { unsafe { self.raw_gl().UseProgram(program) }; }

  pub fn get_program_parameter(&self, program: GLuint, pname: ProgramParameter) -> GLint {
    let mut value = 0;
    unsafe { self.raw_gl().GetProgramiv(program, pname.as_raw(), &mut value) };
    value
  }

  pub fn get_program_info_log(&self, program: GLuint) -> String {
    let buf_size = self.get_program_parameter(program, ProgramParameter::InfoLogLength);
    read_gl_string(buf_size, |buf_size, text_len, buf| unsafe {
      self.raw_gl().GetProgramInfoLog(program, buf_size, text_len, buf)
    })
  }

  /// `None` for inactive uniforms and names with NUL bytes in them.
  pub fn get_uniform_location(&self, program: GLuint, name: &str) -> Option<GLint> {
    let c_name = CString::new(name).ok()?;
    let location = unsafe { self.raw_gl().GetUniformLocation(program, c_name.as_ptr()) };
    if location == INACTIVE_UNIFORM_LOCATION {
      None
    } else {
      Some(location)
    }
  }

  pub fn get_attrib_location(&self, program: GLuint, name: &str) -> Option<GLuint> {
    let c_name = CString::new(name).ok()?;
    let location = unsafe { self.raw_gl().GetAttribLocation(program, c_name.as_ptr()) };
    if location == INACTIVE_ATTRIBUTE_LOCATION {
      None
    } else {
      Some(location as GLuint)
    }
  }

  pub fn uniform_1fv(&self, location: GLint, values: &[f32]) -> Result<()> {
    self.pins().with_pinned("value", values, |ptr, count| unsafe {
      self.raw_gl().Uniform1fv(location, count, ptr)
    })
  }

  pub fn uniform_4fv(&self, location: GLint, values: &[[f32; 4]]) -> Result<()> {
    self.pins().with_pinned("value", values, |ptr, count| unsafe {
      self.raw_gl().Uniform4fv(location, count, ptr as *const f32)
    })
  }

  pub fn uniform_1iv(&self, location: GLint, values: &[i32]) -> Result<()> {
    self.pins().with_pinned("value", values, |ptr, count| unsafe {
      self.raw_gl().Uniform1iv(location, count, ptr)
    })
  }

  /// Each matrix is 16 floats in column-major order unless `transpose` is
  /// set.
  pub fn uniform_matrix_4fv(
    &self,
    location: GLint,
    transpose: bool,
    values: &[[f32; 16]],
  ) -> Result<()> {
    self.pins().with_pinned("value", values, |ptr, count| unsafe {
      self.raw_gl().UniformMatrix4fv(location, count, transpose as GLboolean, ptr as *const f32)
    })
  }
}
