pub use self::all::*;

pub mod all {
  #![allow(clippy::all)]
  include!(concat!(env!("OUT_DIR"), "/bindings.rs"));
}

/// The commands a single GL version introduces on top of the previous one.
#[derive(Debug)]
pub struct VersionBlock {
  pub major: u8,
  pub minor: u8,
  pub commands: &'static [&'static str],
}

pub mod versions {
  use super::VersionBlock;

  include!(concat!(env!("OUT_DIR"), "/version_blocks.rs"));
}

pub mod prelude {
  pub use super::all as gl;
  pub use super::all::types::*;
  pub use super::all::Gl;
  pub use super::versions::VERSION_BLOCKS;
  pub use super::VersionBlock;
}
