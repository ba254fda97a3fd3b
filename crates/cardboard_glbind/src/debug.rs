use crate::impl_prelude::*;
use prelude_plus::*;

/// Enables `GL_DEBUG_OUTPUT` and installs the logging callback if the context
/// has `glDebugMessageCallback`. Returns whether the callback was installed.
pub(crate) fn init(gl: &RawGL) -> bool {
  if !gl.DebugMessageCallback.is_loaded() {
    debug!("glDebugMessageCallback is not available, driver debug output stays off");
    return false;
  }
  unsafe {
    gl.Enable(gl::DEBUG_OUTPUT);
    gl.DebugMessageCallback(Some(internal_debug_message_callback), ptr::null());
  }
  true
}

gl_enum!({
  pub enum DebugMessageSeverity {
    High = DEBUG_SEVERITY_HIGH,
    Medium = DEBUG_SEVERITY_MEDIUM,
    Low = DEBUG_SEVERITY_LOW,
    Notification = DEBUG_SEVERITY_NOTIFICATION,
  }
});

impl DebugMessageSeverity {
  pub const fn log_level(self) -> LogLevel {
    match self {
      Self::High => LogLevel::Error,
      Self::Medium => LogLevel::Warn,
      Self::Low => LogLevel::Info,
      Self::Notification => LogLevel::Debug,
    }
  }
}

gl_enum!({
  pub enum DebugMessageSource {
    API = DEBUG_SOURCE_API,
    WindowSystem = DEBUG_SOURCE_WINDOW_SYSTEM,
    ShaderCompiler = DEBUG_SOURCE_SHADER_COMPILER,
    ThirdParty = DEBUG_SOURCE_THIRD_PARTY,
    Application = DEBUG_SOURCE_APPLICATION,
    Other = DEBUG_SOURCE_OTHER,
  }
});

gl_enum!({
  pub enum DebugMessageType {
    Error = DEBUG_TYPE_ERROR,
    DeprecatedBehavior = DEBUG_TYPE_DEPRECATED_BEHAVIOR,
    UndefinedBehavior = DEBUG_TYPE_UNDEFINED_BEHAVIOR,
    Portability = DEBUG_TYPE_PORTABILITY,
    Performance = DEBUG_TYPE_PERFORMANCE,
    Marker = DEBUG_TYPE_MARKER,
    PushGroup = DEBUG_TYPE_PUSH_GROUP,
    PopGroup = DEBUG_TYPE_POP_GROUP,
    Other = DEBUG_TYPE_OTHER,
  }
});

/// Unknown severities are logged as warnings.
pub fn severity_log_level(raw_severity: GLenum) -> LogLevel {
  DebugMessageSeverity::from_raw(raw_severity)
    .map_or(LogLevel::Warn, DebugMessageSeverity::log_level)
}

/// A negative `length` means the message is NUL-terminated.
///
/// # Safety
///
/// `message` must point to at least `length` bytes, or to a NUL-terminated
/// string when `length` is negative.
pub unsafe fn decode_debug_message(message: *const GLchar, length: GLsizei) -> String {
  if message.is_null() {
    return String::new();
  }
  let bytes = if length < 0 {
    CStr::from_ptr(message).to_bytes()
  } else {
    slice::from_raw_parts(message as *const u8, length as usize)
  };
  String::from_utf8_lossy(bytes).into_owned()
}

extern "system" fn internal_debug_message_callback(
  source: GLenum,
  type_: GLenum,
  id: GLuint,
  severity: GLenum,
  length: GLsizei,
  message: *const GLchar,
  _user_param: *mut c_void,
) {
  fn enum_to_string<T: fmt::Debug>(opt: Option<T>) -> String {
    match opt {
      Some(value) => format!("{:?}", value),
      None => "Unknown".to_owned(),
    }
  }

  let source_str = enum_to_string(DebugMessageSource::from_raw(source));
  let type_str = enum_to_string(DebugMessageType::from_raw(type_));
  let severity_str = enum_to_string(DebugMessageSeverity::from_raw(severity));
  let message_str = unsafe { decode_debug_message(message, length) };

  log!(
    severity_log_level(severity),
    "0x{:08x} [source: {}, type: {}, severity: {}] {}",
    id,
    source_str,
    type_str,
    severity_str,
    message_str,
  );
}
