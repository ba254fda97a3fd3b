use crate::resolver::{SymbolResolver, SymbolTable};
use ::gl::VersionBlock;
use prelude_plus::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(
  feature = "serde",
  derive(serde::Serialize, serde::Deserialize),
  serde(try_from = "String", into = "String")
)]
pub struct GlVersion {
  pub major: u8,
  pub minor: u8,
}

#[inline(always)]
pub const fn gl_version(major: u8, minor: u8) -> GlVersion { GlVersion { major, minor } }

impl GlVersion {
  /// The oldest version this crate has a block for. Its block also covers 1.0.
  pub const BASE: Self = gl_version(1, 1);
  pub const LATEST: Self = gl_version(4, 2);

  #[inline(always)]
  pub const fn new(major: u8, minor: u8) -> Self { gl_version(major, minor) }

  /// Parses the leading `major.minor` out of strings like the ones returned
  /// by `glGetString(GL_VERSION)`, e.g. `"4.2.0 NVIDIA 470.82"` or
  /// `"3.3 (Core Profile) Mesa 21.0.3"`.
  pub fn parse_prefix(s: &str) -> Option<Self> {
    let s = s.trim_start();
    let end = s.find(|c: char| !(c.is_ascii_digit() || c == '.')).unwrap_or(s.len());
    let mut parts = s[..end].split('.');
    let major = parts.next()?.parse().ok()?;
    let minor = parts.next()?.parse().ok()?;
    Some(Self { major, minor })
  }
}

impl fmt::Display for GlVersion {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}.{}", self.major, self.minor)
  }
}

#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
#[error("invalid GL version {0:?}, expected `major.minor`")]
pub struct ParseGlVersionError(String);

impl str::FromStr for GlVersion {
  type Err = ParseGlVersionError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let parse = || -> Option<Self> {
      let (major, minor) = s.trim().split_once('.')?;
      Some(Self { major: major.parse().ok()?, minor: minor.parse().ok()? })
    };
    parse().ok_or_else(|| ParseGlVersionError(s.to_owned()))
  }
}

impl TryFrom<String> for GlVersion {
  type Error = ParseGlVersionError;
  fn try_from(s: String) -> Result<Self, Self::Error> { s.parse() }
}

impl From<GlVersion> for String {
  fn from(version: GlVersion) -> Self { version.to_string() }
}

#[inline(always)]
pub fn block_version(block: &VersionBlock) -> GlVersion { gl_version(block.major, block.minor) }

/// Resolves the entry points one GL version introduces.
#[derive(Debug, Clone, Copy)]
pub struct VersionLoader<'a> {
  block: &'a VersionBlock,
}

impl<'a> VersionLoader<'a> {
  #[inline(always)]
  pub fn new(block: &'a VersionBlock) -> Self { Self { block } }
  #[inline(always)]
  pub fn version(&self) -> GlVersion { block_version(self.block) }
  #[inline(always)]
  pub fn commands(&self) -> &'static [&'static str] { self.block.commands }

  /// Resolves every command of the block into `table`, asking the resolver
  /// again even for symbols the table already knows, and returns the flag of
  /// this version: all commands resolved and the previous version available.
  pub fn load(
    &self,
    table: &mut SymbolTable,
    resolver: &mut dyn SymbolResolver,
    previous_available: bool,
  ) -> bool {
    let mut missing = Vec::new();
    for &name in self.block.commands {
      if !table.resolve(name, resolver) {
        missing.push(name);
      }
    }

    if !missing.is_empty() {
      debug!("GL {}: {} entry point(s) missing: {:?}", self.version(), missing.len(), missing);
    }

    missing.is_empty() && previous_available
  }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VersionFlag {
  pub version: GlVersion,
  pub available: bool,
}

/// One flag per GL version, each one true only if all entry points up to and
/// including that version resolved.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct VersionFlags {
  flags: Vec<VersionFlag>,
}

impl VersionFlags {
  /// Runs the loaders of `blocks` in order. Blocks newer than `max_version`
  /// aren't resolved at all and get an unset flag.
  ///
  /// Panics if the blocks aren't sorted by strictly increasing version, a
  /// flag can only be computed once the previous one is known.
  pub fn load(
    blocks: &[VersionBlock],
    table: &mut SymbolTable,
    resolver: &mut dyn SymbolResolver,
    max_version: Option<GlVersion>,
  ) -> Self {
    let mut flags: Vec<VersionFlag> = Vec::with_capacity(blocks.len());
    let mut previous_available = true;

    for block in blocks {
      let loader = VersionLoader::new(block);
      let version = loader.version();
      if let Some(previous) = flags.last() {
        assert!(
          previous.version < version,
          "GL version blocks are out of order: {} comes after {}",
          version,
          previous.version,
        );
      }

      let available = if max_version.map_or(true, |max| version <= max) {
        loader.load(table, resolver, previous_available)
      } else {
        false
      };
      debug!("GL {} available: {}", version, available);

      flags.push(VersionFlag { version, available });
      previous_available = available;
    }

    Self { flags }
  }

  #[inline]
  pub fn iter(&self) -> impl Iterator<Item = VersionFlag> + '_ { self.flags.iter().copied() }

  /// 1.0 shares the flag of [`GlVersion::BASE`], whose block carries its
  /// commands. Other versions without a block are reported as unavailable.
  pub fn is_available(&self, version: GlVersion) -> bool {
    let version = if version == gl_version(1, 0) { GlVersion::BASE } else { version };
    self.flags.iter().any(|flag| flag.version == version && flag.available)
  }

  pub fn highest_available(&self) -> Option<GlVersion> {
    self.flags.iter().take_while(|flag| flag.available).last().map(|flag| flag.version)
  }
}
