use prelude_plus::*;
use std::ptr::NonNull;

/// Looks up the address of a native GL entry point in the active context.
///
/// A null return means the context doesn't expose the symbol (old driver,
/// wrong profile, extension not installed). That is a normal outcome, not an
/// error, so implementations must not panic on it.
pub trait SymbolResolver {
  fn resolve(&mut self, symbol: &str) -> *const c_void;
}

impl<F> SymbolResolver for F
where
  F: FnMut(&str) -> *const c_void,
{
  #[inline(always)]
  fn resolve(&mut self, symbol: &str) -> *const c_void { self(symbol) }
}

/// Resolves symbols through `SDL_GL_GetProcAddress`. The GL context must be
/// current on the calling thread.
#[cfg(feature = "sdl2")]
#[derive(Debug)]
pub struct SdlResolver<'a>(pub &'a sdl2::VideoSubsystem);

#[cfg(feature = "sdl2")]
impl<'a> SymbolResolver for SdlResolver<'a> {
  fn resolve(&mut self, symbol: &str) -> *const c_void {
    self.0.gl_get_proc_address(symbol) as *const c_void
  }
}

/// Some WGL implementations hand out these small integers instead of NULL
/// for functions they don't have.
const SENTINEL_ADDRESSES: [isize; 4] = [1, 2, 3, -1];

pub fn normalize_address(address: *const c_void) -> Option<NonNull<c_void>> {
  if SENTINEL_ADDRESSES.contains(&(address as isize)) {
    return None;
  }
  NonNull::new(address as *mut c_void)
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct FunctionSlot {
  name: &'static str,
  address: Option<NonNull<c_void>>,
}

impl FunctionSlot {
  #[inline(always)]
  pub fn name(&self) -> &'static str { self.name }
  #[inline(always)]
  pub fn is_resolved(&self) -> bool { self.address.is_some() }

  #[inline]
  pub fn address(&self) -> *const c_void {
    self.address.map_or(ptr::null(), |address| address.as_ptr() as *const c_void)
  }
}

/// Capability table of a single context: symbol name to (maybe) resolved
/// address. Written while the context is being loaded, read-only afterwards.
#[derive(Debug, Default)]
pub struct SymbolTable {
  slots: HashMap<&'static str, FunctionSlot>,
}

impl SymbolTable {
  pub fn new() -> Self { Self::default() }

  #[inline(always)]
  pub fn len(&self) -> usize { self.slots.len() }
  #[inline(always)]
  pub fn is_empty(&self) -> bool { self.slots.is_empty() }

  pub fn resolved_count(&self) -> usize {
    self.slots.values().filter(|slot| slot.is_resolved()).count()
  }

  /// Queries the resolver for `name` even if the table already has an entry
  /// for it, and overwrites that entry. Returns whether the symbol resolved.
  pub fn resolve(&mut self, name: &'static str, resolver: &mut dyn SymbolResolver) -> bool {
    let address = normalize_address(resolver.resolve(name));
    if address.is_none() {
      trace!("GL symbol {} is not available", name);
    }
    self.slots.insert(name, FunctionSlot { name, address });
    address.is_some()
  }

  /// Like [`SymbolTable::resolve`], but symbols that already have an entry are
  /// answered from the table without asking the resolver again.
  pub fn get_or_resolve(
    &mut self,
    name: &'static str,
    resolver: &mut dyn SymbolResolver,
  ) -> *const c_void {
    if let Some(slot) = self.slots.get(name) {
      return slot.address();
    }
    self.resolve(name, resolver);
    self.address_of(name)
  }

  #[inline]
  pub fn get(&self, name: &str) -> Option<&FunctionSlot> { self.slots.get(name) }

  #[inline]
  pub fn is_resolved(&self, name: &str) -> bool {
    self.get(name).map_or(false, FunctionSlot::is_resolved)
  }

  #[inline]
  pub fn address_of(&self, name: &str) -> *const c_void {
    self.get(name).map_or(ptr::null(), FunctionSlot::address)
  }

  pub fn iter(&self) -> impl Iterator<Item = &FunctionSlot> + '_ { self.slots.values() }
}
