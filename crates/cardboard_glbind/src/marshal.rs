use crate::error::{Error, Result};
use crate::offset::BufferOffset;
use ::gl::types::{GLchar, GLint, GLsizei, GLsizeiptr};
use prelude_plus::*;

pub fn to_glsizei(param: &'static str, len: usize) -> Result<GLsizei> {
  GLsizei::try_from(len).map_err(|_| Error::CountOutOfRange { param, len })
}

/// Bookkeeping for slices currently handed over to the driver. Every pin
/// taken through it is released exactly once when its guard is dropped,
/// unwinding included.
#[derive(Debug, Default)]
pub struct PinTracker {
  active: Cell<usize>,
  acquired: Cell<u64>,
  released: Cell<u64>,
}

impl PinTracker {
  pub fn new() -> Self { Self::default() }

  #[inline(always)]
  pub fn active(&self) -> usize { self.active.get() }
  #[inline(always)]
  pub fn acquired(&self) -> u64 { self.acquired.get() }
  #[inline(always)]
  pub fn released(&self) -> u64 { self.released.get() }

  fn acquire(&self) {
    self.active.set(self.active.get() + 1);
    self.acquired.set(self.acquired.get() + 1);
  }

  fn release(&self) {
    let active = self.active.get();
    assert!(active > 0, "released a pin that was never acquired");
    self.active.set(active - 1);
    self.released.set(self.released.get() + 1);
  }

  pub fn pin<'a, T>(&'a self, param: &'static str, data: &'a [T]) -> Result<PinnedSlice<'a, T>> {
    let len = to_glsizei(param, data.len())?;
    self.acquire();
    Ok(PinnedSlice { tracker: self, data, len })
  }

  pub fn pin_mut<'a, T>(
    &'a self,
    param: &'static str,
    data: &'a mut [T],
  ) -> Result<PinnedSliceMut<'a, T>> {
    let len = to_glsizei(param, data.len())?;
    self.acquire();
    Ok(PinnedSliceMut { tracker: self, data, len })
  }

  /// Pins `data` for the duration of `call`, which receives the address and
  /// the element count.
  pub fn with_pinned<T, R>(
    &self,
    param: &'static str,
    data: &[T],
    call: impl FnOnce(*const T, GLsizei) -> R,
  ) -> Result<R> {
    let pinned = self.pin(param, data)?;
    Ok(call(pinned.as_ptr(), pinned.len()))
  }

  pub fn with_pinned_mut<T, R>(
    &self,
    param: &'static str,
    data: &mut [T],
    call: impl FnOnce(*mut T, GLsizei) -> R,
  ) -> Result<R> {
    let mut pinned = self.pin_mut(param, data)?;
    let len = pinned.len();
    Ok(call(pinned.as_mut_ptr(), len))
  }

  /// Pins `data` for entry points that take a `GLsizeiptr` byte size instead
  /// of an element count, so only the byte size has to fit.
  pub fn with_pinned_bytes<T, R>(
    &self,
    param: &'static str,
    data: &[T],
    call: impl FnOnce(*const c_void, GLsizeiptr) -> R,
  ) -> Result<R> {
    let size = mem::size_of_val(data).to_native_sizeiptr(param)?;
    let _guard = PinGuard::new(self);
    Ok(call(data.as_ptr() as *const c_void, size))
  }

  pub fn with_pinned_bytes_mut<T, R>(
    &self,
    param: &'static str,
    data: &mut [T],
    call: impl FnOnce(*mut c_void, GLsizeiptr) -> R,
  ) -> Result<R> {
    let size = mem::size_of_val(data).to_native_sizeiptr(param)?;
    let _guard = PinGuard::new(self);
    Ok(call(data.as_mut_ptr() as *mut c_void, size))
  }
}

struct PinGuard<'a> {
  tracker: &'a PinTracker,
}

impl<'a> PinGuard<'a> {
  fn new(tracker: &'a PinTracker) -> Self {
    tracker.acquire();
    Self { tracker }
  }
}

impl<'a> Drop for PinGuard<'a> {
  fn drop(&mut self) { self.tracker.release(); }
}

#[derive(Debug)]
pub struct PinnedSlice<'a, T> {
  tracker: &'a PinTracker,
  data: &'a [T],
  len: GLsizei,
}

impl<'a, T> PinnedSlice<'a, T> {
  #[inline(always)]
  pub fn as_ptr(&self) -> *const T { self.data.as_ptr() }
  #[inline(always)]
  pub fn as_void_ptr(&self) -> *const c_void { self.data.as_ptr() as *const c_void }
  #[inline(always)]
  pub fn len(&self) -> GLsizei { self.len }
  #[inline(always)]
  pub fn is_empty(&self) -> bool { self.len == 0 }
  #[inline(always)]
  pub fn byte_len(&self) -> usize { mem::size_of_val(self.data) }
}

impl<'a, T> Drop for PinnedSlice<'a, T> {
  fn drop(&mut self) { self.tracker.release(); }
}

#[derive(Debug)]
pub struct PinnedSliceMut<'a, T> {
  tracker: &'a PinTracker,
  data: &'a mut [T],
  len: GLsizei,
}

impl<'a, T> PinnedSliceMut<'a, T> {
  #[inline(always)]
  pub fn as_mut_ptr(&mut self) -> *mut T { self.data.as_mut_ptr() }
  #[inline(always)]
  pub fn as_mut_void_ptr(&mut self) -> *mut c_void { self.data.as_mut_ptr() as *mut c_void }
  #[inline(always)]
  pub fn len(&self) -> GLsizei { self.len }
  #[inline(always)]
  pub fn is_empty(&self) -> bool { self.len == 0 }
  #[inline(always)]
  pub fn byte_len(&self) -> usize { mem::size_of_val(&*self.data) }
}

impl<'a, T> Drop for PinnedSliceMut<'a, T> {
  fn drop(&mut self) { self.tracker.release(); }
}

/// Strings laid out the way `glShaderSource` and friends want them: an array
/// of pointers to NUL-terminated strings plus an array of their lengths.
#[derive(Debug)]
pub struct CStringArray {
  strings: Vec<CString>,
  pointers: Vec<*const GLchar>,
  lengths: Vec<GLint>,
}

impl CStringArray {
  /// Strings containing NUL bytes are cut off at the first one, the driver
  /// would stop reading there anyway.
  pub fn new<S: AsRef<[u8]>>(param: &'static str, strings: &[S]) -> Result<Self> {
    to_glsizei(param, strings.len())?;

    let mut owned = Vec::with_capacity(strings.len());
    let mut lengths = Vec::with_capacity(strings.len());
    for s in strings {
      let bytes = s.as_ref();
      let bytes = match bytes.iter().position(|&b| b == 0) {
        Some(nul_index) => &bytes[..nul_index],
        None => bytes,
      };
      lengths.push(to_glsizei(param, bytes.len())?);
      // the NUL bytes were cut off above
      owned.push(CString::new(bytes).unwrap_or_default());
    }

    let pointers = owned.iter().map(|s| s.as_ptr() as *const GLchar).collect();
    Ok(Self { strings: owned, pointers, lengths })
  }

  #[inline(always)]
  pub fn count(&self) -> GLsizei { self.strings.len() as GLsizei }
  #[inline(always)]
  pub fn pointers(&self) -> *const *const GLchar { self.pointers.as_ptr() }
  #[inline(always)]
  pub fn lengths(&self) -> *const GLint { self.lengths.as_ptr() }
}

/// Fills a byte buffer of `buf_size` through `read` (which gets the buffer
/// size, a place for the written length and the buffer) and decodes the
/// result, the way every `glGet*InfoLog`-style query works.
pub fn read_gl_string(
  buf_size: GLint,
  read: impl FnOnce(GLsizei, &mut GLsizei, *mut GLchar),
) -> String {
  if buf_size <= 0 {
    return String::new();
  }

  let mut buf: Vec<u8> = vec![0; buf_size as usize];
  let mut text_len: GLsizei = 0;
  read(buf_size, &mut text_len, buf.as_mut_ptr() as *mut GLchar);
  buf.truncate((text_len.max(0) as usize).min(buf_size as usize));
  // some drivers count the terminator in
  while buf.last() == Some(&0) {
    buf.pop();
  }

  String::from_utf8_lossy(&buf).into_owned()
}

/// Copies a NUL-terminated string owned by the driver. Null pointers give
/// `None`.
///
/// # Safety
///
/// `ptr` must be null or point to a NUL-terminated string that stays alive
/// for the duration of the call.
pub unsafe fn copy_gl_string(ptr: *const u8) -> Option<String> {
  if ptr.is_null() {
    return None;
  }
  let c_str = CStr::from_ptr(ptr as *const c_char);
  Some(String::from_utf8_lossy(c_str.to_bytes()).into_owned())
}
