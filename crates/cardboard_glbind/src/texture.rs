use crate::error::Result;
use crate::impl_prelude::*;

gl_enum!({
  pub enum TextureTarget {
    Texture1D = TEXTURE_1D,
    Texture2D = TEXTURE_2D,
    Texture3D = TEXTURE_3D,
    Texture1DArray = TEXTURE_1D_ARRAY,
    Texture2DArray = TEXTURE_2D_ARRAY,
    TextureRectangle = TEXTURE_RECTANGLE,
    TextureCubeMap = TEXTURE_CUBE_MAP,
    TextureCubeMapArray = TEXTURE_CUBE_MAP_ARRAY,
    TextureBuffer = TEXTURE_BUFFER,
    Texture2DMultisample = TEXTURE_2D_MULTISAMPLE,
    Texture2DMultisampleArray = TEXTURE_2D_MULTISAMPLE_ARRAY,
  }
});

impl Context {
  pub fn gen_textures(&self, textures: &mut [GLuint]) -> Result<()> {
    self.pins().with_pinned_mut("textures", textures, |ptr, n| unsafe {
      self.raw_gl().GenTextures(n, ptr)
    })
  }

  pub fn delete_textures(&self, textures: &[GLuint]) -> Result<()> {
    self.pins().with_pinned("textures", textures, |ptr, n| unsafe {
      self.raw_gl().DeleteTextures(n, ptr)
    })
  }

  pub fn bind_texture(&self, target: TextureTarget, texture: GLuint) {
    unsafe { self.raw_gl().BindTexture(target.as_raw(), texture) };
  }

  /// Selects the texture unit `unit`, counting from zero. Units past the
  /// driver's limit are reported as `GL_INVALID_ENUM`.
  pub fn active_texture(&self, unit: u32) {
    unsafe { self.raw_gl().ActiveTexture(gl::TEXTURE0.wrapping_add(unit)) };
  }
}
