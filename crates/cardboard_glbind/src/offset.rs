use crate::error::{Error, Result};
use ::gl::types::{GLintptr, GLsizeiptr};
use prelude_plus::*;

cfg_if::cfg_if! {
  if #[cfg(target_pointer_width = "32")] {
    const NATIVE_POINTER_BITS: u32 = 32;
  } else if #[cfg(target_pointer_width = "64")] {
    const NATIVE_POINTER_BITS: u32 = 64;
  }
}

/// Width of the pointers the driver expects for offset-in-pointer arguments
/// (`glVertexAttribPointer`, `glDrawElements` and friends) and for the
/// `GLintptr`/`GLsizeiptr` arguments.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct PointerWidth {
  bits: u32,
}

impl PointerWidth {
  pub const BITS_32: Self = Self { bits: 32 };
  pub const BITS_64: Self = Self { bits: 64 };
  pub const NATIVE: Self = Self { bits: NATIVE_POINTER_BITS };

  #[inline(always)]
  pub const fn bits(self) -> u32 { self.bits }

  /// Narrows `value` to a native pointer-sized integer. On platforms with
  /// pointers narrower than 64 bits every bit above the pointer width must be
  /// zero, so negative values are rejected there as well. On 64-bit platforms
  /// anything representable as `i64` or `u64` passes through.
  pub fn check_offset(self, param: &'static str, value: i128) -> Result<usize> {
    let fits = if self.bits >= 64 {
      i64::MIN as i128 <= value && value <= u64::MAX as i128
    } else {
      value >> self.bits == 0
    };

    if fits {
      Ok(value as usize)
    } else {
      Err(Error::OffsetOutOfRange { param, value, pointer_bits: self.bits })
    }
  }
}

/// Integer types accepted wherever GL wants a byte offset or a byte size.
///
/// 32-bit and pointer-sized integers always fit and are passed through as they
/// are (sign-extended), 64-bit integers are checked against
/// [`PointerWidth::NATIVE`] first.
pub trait BufferOffset: Copy + fmt::Debug {
  fn to_native_offset(self, param: &'static str) -> Result<usize>;

  #[inline]
  fn to_native_ptr(self, param: &'static str) -> Result<*const c_void> {
    Ok(self.to_native_offset(param)? as *const c_void)
  }

  #[inline]
  fn to_native_intptr(self, param: &'static str) -> Result<GLintptr> {
    Ok(self.to_native_offset(param)? as GLintptr)
  }

  #[inline]
  fn to_native_sizeiptr(self, param: &'static str) -> Result<GLsizeiptr> {
    Ok(self.to_native_offset(param)? as GLsizeiptr)
  }
}

macro_rules! impl_buffer_offset_passthrough {
  ($($ty:ty),+) => {
    $(impl BufferOffset for $ty {
      #[inline(always)]
      fn to_native_offset(self, _param: &'static str) -> Result<usize> {
        Ok(self as isize as usize)
      }
    })+
  };
}

macro_rules! impl_buffer_offset_checked {
  ($($ty:ty),+) => {
    $(impl BufferOffset for $ty {
      #[inline]
      fn to_native_offset(self, param: &'static str) -> Result<usize> {
        PointerWidth::NATIVE.check_offset(param, self as i128)
      }
    })+
  };
}

impl_buffer_offset_passthrough!(i32, isize, usize);
impl_buffer_offset_checked!(i64, u64);

// u32 can't go through `as isize` on 32-bit targets without flipping the sign
// of the upper half, and it always fits into a pointer anyway.
impl BufferOffset for u32 {
  #[inline(always)]
  fn to_native_offset(self, _param: &'static str) -> Result<usize> { Ok(self as usize) }
}
