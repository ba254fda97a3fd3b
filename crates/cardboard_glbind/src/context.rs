use crate::extensions::ContextExtensions;
use crate::impl_prelude::*;
use crate::marshal::{copy_gl_string, PinTracker};
use crate::resolver::{SymbolResolver, SymbolTable};
use crate::state::StringName;
use crate::version::{block_version, gl_version, GlVersion, VersionFlags};
use prelude_plus::*;

pub type RawGL = Gl;

pub type SharedContext = Rc<Context>;

#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct ContextConfig {
  /// Versions above this one are not loaded even if the driver has them.
  pub max_version: Option<GlVersion>,
  /// Route `GL_KHR_debug` messages into the log when the driver supports it.
  pub debug_output: bool,
}

impl Default for ContextConfig {
  fn default() -> Self { Self { max_version: None, debug_output: true } }
}

/// Everything the binding layer knows about one GL context: the raw entry
/// points, which of them resolved and which versions are complete. All of it
/// is filled in by [`Context::load_with`] and doesn't change afterwards.
pub struct Context {
  raw_gl: RawGL,
  symbols: SymbolTable,
  versions: VersionFlags,
  pins: PinTracker,
  config: ContextConfig,
  debug_output_enabled: bool,
  // the context is bound to the thread it is current on
  phantom: PhantomData<*mut ()>,
}

impl Context {
  #[inline(always)]
  pub fn raw_gl(&self) -> &RawGL { &self.raw_gl }
  #[inline(always)]
  pub fn symbols(&self) -> &SymbolTable { &self.symbols }
  #[inline(always)]
  pub fn versions(&self) -> &VersionFlags { &self.versions }
  #[inline(always)]
  pub fn pins(&self) -> &PinTracker { &self.pins }
  #[inline(always)]
  pub fn config(&self) -> &ContextConfig { &self.config }
  #[inline(always)]
  pub fn debug_output_enabled(&self) -> bool { self.debug_output_enabled }

  /// Resolves every entry point through `resolver`. The context the resolver
  /// talks to must be current on this thread.
  pub fn load_with<R: SymbolResolver>(mut resolver: R, config: ContextConfig) -> Self {
    let mut symbols = SymbolTable::new();
    let versions =
      VersionFlags::load(VERSION_BLOCKS, &mut symbols, &mut resolver, config.max_version);

    let capped_commands: HashSet<&'static str> = VERSION_BLOCKS
      .iter()
      .filter(|block| config.max_version.map_or(false, |max| block_version(block) > max))
      .flat_map(|block| block.commands.iter().copied())
      .collect();

    let raw_gl = Gl::load_with(|name| {
      if capped_commands.contains(name) {
        ptr::null()
      } else {
        symbols.get_or_resolve(name, &mut resolver)
      }
    });

    info!(
      "loaded GL entry points: {} of {} resolved, highest complete version: {}",
      symbols.resolved_count(),
      symbols.len(),
      versions.highest_available().map_or_else(|| "none".to_owned(), |v| v.to_string()),
    );

    // This has to be done before anything else talks to the driver.
    let debug_output_enabled = config.debug_output && crate::debug::init(&raw_gl);

    Self {
      raw_gl,
      symbols,
      versions,
      pins: PinTracker::new(),
      config,
      debug_output_enabled,
      phantom: PhantomData,
    }
  }

  #[inline]
  pub fn is_version_available(&self, version: GlVersion) -> bool {
    self.versions.is_available(version)
  }

  #[inline]
  pub fn highest_version(&self) -> Option<GlVersion> { self.versions.highest_available() }

  pub fn query_capabilities(&self) -> ContextCapabilities {
    let capabilities = ContextCapabilities::load(&self.raw_gl);
    if let Some(reported) = capabilities.reported_version {
      let loaded = self.highest_version();
      if loaded.map_or(true, |loaded| loaded < reported) && self.config.max_version.is_none() {
        warn!(
          "the driver reports GL {} but entry points are only complete up to {}",
          reported,
          loaded.map_or_else(|| "none".to_owned(), |v| v.to_string()),
        );
      }
    }
    capabilities
  }

  /// Uses the indexed query on 3.0+ contexts and the space-separated string
  /// otherwise. Contexts without either get an empty set.
  pub fn query_extensions(&self) -> ContextExtensions {
    let gl = &self.raw_gl;

    let extensions = if self.is_version_available(gl_version(3, 0)) && gl.GetStringi.is_loaded() {
      let count = self.get_integer(gl::NUM_EXTENSIONS).max(0) as GLuint;
      let names: Vec<String> =
        (0..count).filter_map(|i| self.get_string_i(StringName::Extensions, i)).collect();
      ContextExtensions::new(names.iter().map(|s| s.as_str()))
    } else if gl.GetString.is_loaded() {
      let names = self.get_string(StringName::Extensions).unwrap_or_default();
      ContextExtensions::new(names.split(' '))
    } else {
      ContextExtensions::default()
    };

    debug!("GL extensions: {} listed, {} known", extensions.len(), extensions.supported().count());
    extensions
  }
}

impl fmt::Debug for Context {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Context")
      .field("highest_version", &self.highest_version())
      .field("resolved_symbols", &self.symbols.resolved_count())
      .field("config", &self.config)
      .field("debug_output_enabled", &self.debug_output_enabled)
      .finish()
  }
}

#[derive(Debug, Eq, PartialEq, Clone, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ContextCapabilities {
  pub renderer: String,
  pub vendor: String,
  pub gl_version: String,
  pub glsl_version: String,
  /// The `major.minor` prefix of `gl_version`.
  pub reported_version: Option<GlVersion>,

  pub max_texture_units: u32,
  pub max_texture_size: u32,
  pub max_vertex_attribs: u32,
}

impl ContextCapabilities {
  pub fn load(gl: &RawGL) -> Self {
    fn get_u32_1(gl: &RawGL, name: GLenum) -> u32 {
      if !gl.GetIntegerv.is_loaded() {
        return 0;
      }
      let mut value = 0;
      unsafe { gl.GetIntegerv(name, &mut value) }
      value.max(0) as u32
    }

    fn get_string(gl: &RawGL, name: GLenum) -> String {
      if !gl.GetString.is_loaded() {
        return String::new();
      }
      unsafe { copy_gl_string(gl.GetString(name)) }.unwrap_or_default()
    }

    let renderer = get_string(gl, gl::RENDERER);
    info!("GL renderer:    {}", renderer);
    let vendor = get_string(gl, gl::VENDOR);
    info!("GL vendor:      {}", vendor);
    let gl_version = get_string(gl, gl::VERSION);
    info!("GL version:     {}", gl_version);
    let glsl_version = get_string(gl, gl::SHADING_LANGUAGE_VERSION);
    info!("GLSL version:   {}", glsl_version);

    Self {
      reported_version: GlVersion::parse_prefix(&gl_version),
      renderer,
      vendor,
      gl_version,
      glsl_version,

      max_texture_units: get_u32_1(gl, gl::MAX_COMBINED_TEXTURE_IMAGE_UNITS),
      max_texture_size: get_u32_1(gl, gl::MAX_TEXTURE_SIZE),
      max_vertex_attribs: get_u32_1(gl, gl::MAX_VERTEX_ATTRIBS),
    }
  }
}
