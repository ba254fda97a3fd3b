macro_rules! gl_enum {
  // a wrapper for autoformatting purposes
  ({$($tt:tt)+}) => { gl_enum! { $($tt)+ } };

  (
    $(#[$enum_meta:meta])* $visibility:vis enum $enum_name:ident {
      $($(#[$variant_meta:meta])* $rust_variant:ident = $gl_variant:ident),+ $(,)?
    }
  ) => {
    #[repr(u32)]
    #[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
    $(#[$enum_meta])*
    $visibility enum $enum_name {
      $($(#[$variant_meta])* $rust_variant = ::gl::$gl_variant,)+
    }

    impl $enum_name {
      $visibility const VARIANTS: &'static [Self] = &[$(Self::$rust_variant),+];

      $visibility const fn from_raw(raw: ::gl::types::GLenum) -> Option<Self> {
        Some(match raw {
          $(::gl::$gl_variant => Self::$rust_variant,)+
            _ => return None,
        })
      }

      #[inline(always)]
      $visibility const fn as_raw(&self) -> ::gl::types::GLenum {
        *self as ::gl::types::GLenum
      }
    }

    impl From<$enum_name> for ::gl::types::GLenum {
      #[inline(always)]
      fn from(value: $enum_name) -> Self { value.as_raw() }
    }
  };
}

mod impl_prelude;

pub mod buffer;
pub mod context;
pub mod debug;
pub mod draw;
pub mod error;
pub mod extensions;
pub mod marshal;
pub mod offset;
pub mod resolver;
pub mod shader;
pub mod state;
pub mod texture;
pub mod version;

pub use buffer::*;
pub use context::*;
pub use draw::*;
pub use error::*;
pub use extensions::*;
pub use marshal::*;
pub use offset::*;
pub use resolver::*;
pub use shader::*;
pub use state::*;
pub use texture::*;
pub use version::*;

pub use gl;
pub use gl::types::*;
pub use gl::Gl;
