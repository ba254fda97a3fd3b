pub use crate::context::{Context, RawGL, SharedContext};
pub use crate::offset::BufferOffset;
pub use ::gl::prelude::*;
