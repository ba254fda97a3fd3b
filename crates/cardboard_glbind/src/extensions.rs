use prelude_plus::*;

macro_rules! extension_table {
  // a wrapper for autoformatting purposes
  ({$($tt:tt)+}) => { extension_table! { $($tt)+ } };

  (
    $(#[$enum_meta:meta])* $visibility:vis enum $enum_name:ident {
      $($(#[$variant_meta:meta])* $rust_variant:ident = $gl_name:literal),+ $(,)?
    }
  ) => {
    #[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
    $(#[$enum_meta])*
    $visibility enum $enum_name {
      $($(#[$variant_meta])* $rust_variant,)+
    }

    impl $enum_name {
      $visibility const VARIANTS: &'static [Self] = &[$(Self::$rust_variant),+];

      /// The string the driver reports for this extension.
      $visibility const fn name(self) -> &'static str {
        match self {
          $(Self::$rust_variant => $gl_name,)+
        }
      }

      $visibility fn from_name(name: &str) -> Option<Self> {
        Some(match name {
          $($gl_name => Self::$rust_variant,)+
          _ => return None,
        })
      }
    }
  };
}

extension_table!({
  pub enum Extension {
    ArbBaseInstance = "GL_ARB_base_instance",
    ArbBufferStorage = "GL_ARB_buffer_storage",
    ArbComputeShader = "GL_ARB_compute_shader",
    ArbCopyBuffer = "GL_ARB_copy_buffer",
    ArbDebugOutput = "GL_ARB_debug_output",
    ArbDepthBufferFloat = "GL_ARB_depth_buffer_float",
    ArbDirectStateAccess = "GL_ARB_direct_state_access",
    ArbDrawBuffers = "GL_ARB_draw_buffers",
    ArbDrawElementsBaseVertex = "GL_ARB_draw_elements_base_vertex",
    ArbDrawInstanced = "GL_ARB_draw_instanced",
    ArbEs2Compatibility = "GL_ARB_ES2_compatibility",
    ArbExplicitAttribLocation = "GL_ARB_explicit_attrib_location",
    ArbFramebufferObject = "GL_ARB_framebuffer_object",
    ArbFramebufferSrgb = "GL_ARB_framebuffer_sRGB",
    ArbGeometryShader4 = "GL_ARB_geometry_shader4",
    ArbGetProgramBinary = "GL_ARB_get_program_binary",
    ArbGpuShader5 = "GL_ARB_gpu_shader5",
    ArbHalfFloatVertex = "GL_ARB_half_float_vertex",
    ArbInstancedArrays = "GL_ARB_instanced_arrays",
    ArbMapBufferRange = "GL_ARB_map_buffer_range",
    ArbMultisample = "GL_ARB_multisample",
    ArbOcclusionQuery = "GL_ARB_occlusion_query",
    ArbPixelBufferObject = "GL_ARB_pixel_buffer_object",
    ArbRobustness = "GL_ARB_robustness",
    ArbSamplerObjects = "GL_ARB_sampler_objects",
    ArbSeparateShaderObjects = "GL_ARB_separate_shader_objects",
    ArbShaderImageLoadStore = "GL_ARB_shader_image_load_store",
    ArbShadingLanguage420pack = "GL_ARB_shading_language_420pack",
    ArbSync = "GL_ARB_sync",
    ArbTessellationShader = "GL_ARB_tessellation_shader",
    ArbTextureCompressionBptc = "GL_ARB_texture_compression_bptc",
    ArbTextureFloat = "GL_ARB_texture_float",
    ArbTextureMultisample = "GL_ARB_texture_multisample",
    ArbTextureNonPowerOfTwo = "GL_ARB_texture_non_power_of_two",
    ArbTextureStorage = "GL_ARB_texture_storage",
    ArbTimerQuery = "GL_ARB_timer_query",
    ArbTransformFeedback2 = "GL_ARB_transform_feedback2",
    ArbUniformBufferObject = "GL_ARB_uniform_buffer_object",
    ArbVertexArrayObject = "GL_ARB_vertex_array_object",
    ArbVertexAttrib64bit = "GL_ARB_vertex_attrib_64bit",
    ArbVertexBufferObject = "GL_ARB_vertex_buffer_object",
    ExtBlendFuncSeparate = "GL_EXT_blend_func_separate",
    ExtDirectStateAccess = "GL_EXT_direct_state_access",
    ExtFramebufferObject = "GL_EXT_framebuffer_object",
    ExtTextureCompressionS3tc = "GL_EXT_texture_compression_s3tc",
    ExtTextureFilterAnisotropic = "GL_EXT_texture_filter_anisotropic",
    ExtTextureSrgb = "GL_EXT_texture_sRGB",
    KhrDebug = "GL_KHR_debug",
    NvPrimitiveRestart = "GL_NV_primitive_restart",
  }
});

impl fmt::Display for Extension {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Extension {
  fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(self.name())
  }
}

/// Extensions a context advertises, split into the ones from the table above
/// and everything else the driver listed.
#[derive(Debug, Eq, PartialEq, Clone, Default)]
pub struct ContextExtensions {
  supported: BTreeSet<Extension>,
  unknown: BTreeSet<String>,
}

impl ContextExtensions {
  pub fn new<'a, T: IntoIterator<Item = &'a str>>(loaded_extension_names_iter: T) -> Self {
    let mut extensions = Self::default();

    for name in loaded_extension_names_iter {
      let name = name.trim();
      if name.is_empty() {
        continue;
      }
      match Extension::from_name(name) {
        Some(extension) => {
          extensions.supported.insert(extension);
        }
        None => {
          extensions.unknown.insert(name.to_owned());
        }
      }
    }

    extensions
  }

  #[inline]
  pub fn is_supported(&self, extension: Extension) -> bool { self.supported.contains(&extension) }

  /// Extensions that the driver listed but that have no entry in the table.
  pub fn is_listed(&self, name: &str) -> bool {
    Extension::from_name(name).map_or(false, |extension| self.is_supported(extension))
      || self.unknown.contains(name)
  }

  pub fn supported(&self) -> impl Iterator<Item = Extension> + '_ { self.supported.iter().copied() }
  pub fn unknown(&self) -> impl Iterator<Item = &str> + '_ { self.unknown.iter().map(|s| &**s) }

  #[inline]
  pub fn len(&self) -> usize { self.supported.len() + self.unknown.len() }
  #[inline]
  pub fn is_empty(&self) -> bool { self.len() == 0 }
}
