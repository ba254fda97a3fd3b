use crate::config::{ContextProfile, ProbeConfig};
use crate::report::ProbeReport;
use cardboard_glbind::{Context, SdlResolver};
use prelude_plus::*;
use sdl2::video::GLProfile;

pub fn run(config: &ProbeConfig) -> AnyResult<ProbeReport> {
  let sdl_context = sdl2::init().map_err(|e| format_err!("Failed to initialize SDL2: {}", e))?;
  let video_subsystem = sdl_context
    .video()
    .map_err(|e| format_err!("Failed to initialize the SDL2 video subsystem: {}", e))?;

  let gl_attr = video_subsystem.gl_attr();
  gl_attr.set_context_profile(match config.context_profile {
    ContextProfile::Core => GLProfile::Core,
    ContextProfile::Compatibility => GLProfile::Compatibility,
  });
  let version = config.context_version;
  gl_attr.set_context_version(version.major, version.minor);
  if config.debug_context {
    gl_attr.set_context_flags().debug().set();
  }

  let window = video_subsystem
    .window(concat!(env!("CARGO_PKG_NAME"), " probe"), 64, 64)
    .opengl()
    .hidden()
    .build()
    .context("Failed to create a hidden window")?;

  // has to outlive the loaded context
  let _gl_context = window.gl_create_context().map_err(|e| {
    format_err!("Failed to create a GL {} {:?} context: {}", version, config.context_profile, e)
  })?;
  info!("created a GL {} {:?} context", version, config.context_profile);

  let ctx = Context::load_with(SdlResolver(&video_subsystem), config.context.clone());
  Ok(ProbeReport::collect(&ctx))
}
