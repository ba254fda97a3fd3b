use crate::impl_prelude::*;
use crate::marshal::copy_gl_string;
use prelude_plus::*;

gl_enum!({
  pub enum Capability {
    Blend = BLEND,
    CullFace = CULL_FACE,
    DepthClamp = DEPTH_CLAMP,
    DepthTest = DEPTH_TEST,
    Dither = DITHER,
    FramebufferSrgb = FRAMEBUFFER_SRGB,
    LineSmooth = LINE_SMOOTH,
    Multisample = MULTISAMPLE,
    PolygonOffsetFill = POLYGON_OFFSET_FILL,
    PolygonSmooth = POLYGON_SMOOTH,
    PrimitiveRestart = PRIMITIVE_RESTART,
    ProgramPointSize = PROGRAM_POINT_SIZE,
    RasterizerDiscard = RASTERIZER_DISCARD,
    SampleAlphaToCoverage = SAMPLE_ALPHA_TO_COVERAGE,
    SampleCoverage = SAMPLE_COVERAGE,
    ScissorTest = SCISSOR_TEST,
    StencilTest = STENCIL_TEST,
    TextureCubeMapSeamless = TEXTURE_CUBE_MAP_SEAMLESS,
    DebugOutput = DEBUG_OUTPUT,
    DebugOutputSynchronous = DEBUG_OUTPUT_SYNCHRONOUS,
  }
});

gl_enum!({
  pub enum BlendingFactor {
    Zero = ZERO,
    One = ONE,

    SrcColor = SRC_COLOR,
    SrcAlpha = SRC_ALPHA,
    OneMinusSrcColor = ONE_MINUS_SRC_COLOR,
    OneMinusSrcAlpha = ONE_MINUS_SRC_ALPHA,

    DestColor = DST_COLOR,
    DestAlpha = DST_ALPHA,
    OneMinusDestColor = ONE_MINUS_DST_COLOR,
    OneMinusDestAlpha = ONE_MINUS_DST_ALPHA,

    ConstColor = CONSTANT_COLOR,
    ConstAlpha = CONSTANT_ALPHA,
    OneMinusConstColor = ONE_MINUS_CONSTANT_COLOR,
    OneMinusConstAlpha = ONE_MINUS_CONSTANT_ALPHA,

    SrcAlphaSaturate = SRC_ALPHA_SATURATE,
  }
});

gl_enum!({
  pub enum BlendingEquation {
    Add = FUNC_ADD,
    Sub = FUNC_SUBTRACT,
    SubRev = FUNC_REVERSE_SUBTRACT,
    Min = MIN,
    Max = MAX,
  }
});

gl_enum!({
  pub enum StringName {
    Vendor = VENDOR,
    Renderer = RENDERER,
    Version = VERSION,
    ShadingLanguageVersion = SHADING_LANGUAGE_VERSION,
    Extensions = EXTENSIONS,
  }
});

gl_enum!({
  pub enum ErrorCode {
    InvalidEnum = INVALID_ENUM,
    InvalidValue = INVALID_VALUE,
    InvalidOperation = INVALID_OPERATION,
    InvalidFramebufferOperation = INVALID_FRAMEBUFFER_OPERATION,
    OutOfMemory = OUT_OF_MEMORY,
    StackUnderflow = STACK_UNDERFLOW,
    StackOverflow = STACK_OVERFLOW,
  }
});

bitflags! {
  pub struct ClearFlags: u32 {
    const COLOR = gl::COLOR_BUFFER_BIT;
    const DEPTH = gl::DEPTH_BUFFER_BIT;
    const STENCIL = gl::STENCIL_BUFFER_BIT;
  }
}

impl Context {
  pub fn enable(&self, capability: Capability) {
    unsafe { self.raw_gl().Enable(capability.as_raw()) };
  }

  pub fn disable(&self, capability: Capability) {
    unsafe { self.raw_gl().Disable(capability.as_raw()) };
  }

  #[inline]
  pub fn set_enabled(&self, capability: Capability, enabled: bool) {
    if enabled {
      self.enable(capability);
    } else {
      self.disable(capability);
    }
  }

  pub fn is_enabled(&self, capability: Capability) -> bool {
    unsafe { self.raw_gl().IsEnabled(capability.as_raw()) != gl::FALSE }
  }

  pub fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
    unsafe { self.raw_gl().ClearColor(r, g, b, a) };
  }

  pub fn clear(&self, flags: ClearFlags) { unsafe { self.raw_gl().Clear(flags.bits()) }; }

  pub fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
    unsafe { self.raw_gl().Viewport(x, y, width, height) };
  }

  pub fn blend_func(&self, src: BlendingFactor, dest: BlendingFactor) {
    unsafe { self.raw_gl().BlendFunc(src.as_raw(), dest.as_raw()) };
  }

  pub fn blend_equation(&self, equation: BlendingEquation) {
    unsafe { self.raw_gl().BlendEquation(equation.as_raw()) };
  }

  pub fn get_integer(&self, pname: GLenum) -> GLint {
    let mut value = 0;
    unsafe { self.raw_gl().GetIntegerv(pname, &mut value) };
    value
  }

  /// `None` if `glGetString` is missing or the driver returned NULL (which
  /// it does for unsupported names).
  pub fn get_string(&self, name: StringName) -> Option<String> {
    let gl = self.raw_gl();
    if !gl.GetString.is_loaded() {
      return None;
    }
    unsafe { copy_gl_string(gl.GetString(name.as_raw())) }
  }

  pub fn get_string_i(&self, name: StringName, index: GLuint) -> Option<String> {
    let gl = self.raw_gl();
    if !gl.GetStringi.is_loaded() {
      return None;
    }
    unsafe { copy_gl_string(gl.GetStringi(name.as_raw(), index)) }
  }

  pub fn get_error_raw(&self) -> GLenum { unsafe { self.raw_gl().GetError() } }

  /// Pops one error flag. Error codes outside [`ErrorCode`] are logged and
  /// dropped.
  pub fn get_error(&self) -> Option<ErrorCode> {
    match self.get_error_raw() {
      gl::NO_ERROR => None,
      raw => {
        let code = ErrorCode::from_raw(raw);
        if code.is_none() {
          warn!("unknown GL error code 0x{:04x}", raw);
        }
        code
      }
    }
  }
}
