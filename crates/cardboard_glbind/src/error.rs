pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failures of the typed wrappers. A symbol the driver doesn't export is not
/// one of them, that only ever shows up as an unset version flag.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
  #[error(
    "argument `{param}` ({value:#x}) does not fit into a native pointer on this \
     {pointer_bits}-bit platform"
  )]
  OffsetOutOfRange { param: &'static str, value: i128, pointer_bits: u32 },

  #[error("argument `{param}` has {len} elements, more than a GLsizei can hold")]
  CountOutOfRange { param: &'static str, len: usize },
}

impl Error {
  /// Name of the argument that was rejected.
  pub fn param(&self) -> &'static str {
    match self {
      Self::OffsetOutOfRange { param, .. } | Self::CountOutOfRange { param, .. } => *param,
    }
  }
}
