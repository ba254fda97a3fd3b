use cardboard_glbind::{gl_version, ContextConfig, GlVersion};
use prelude_plus::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextProfile {
  Core,
  Compatibility,
}

/// What `glbind probe` asks SDL2 for and how it loads the resulting context.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
  pub context_version: GlVersion,
  pub context_profile: ContextProfile,
  /// Request a debug context, which makes most drivers actually send
  /// `GL_KHR_debug` messages.
  pub debug_context: bool,
  pub context: ContextConfig,
}

impl Default for ProbeConfig {
  fn default() -> Self {
    Self {
      context_version: gl_version(2, 1),
      context_profile: ContextProfile::Compatibility,
      debug_context: true,
      context: ContextConfig::default(),
    }
  }
}

impl ProbeConfig {
  pub fn load(path: Option<&Path>) -> AnyResult<Self> {
    let path = match path {
      Some(path) => path,
      None => return Ok(Self::default()),
    };

    let text = fs::read_to_string(path)
      .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
    let config = Self::parse(&text)
      .with_context(|| format!("Failed to parse config file '{}'", path.display()))?;
    debug!("loaded probe config from '{}': {:?}", path.display(), config);
    Ok(config)
  }

  pub fn parse(text: &str) -> AnyResult<Self> {
    let config: Self = serde_json::from_str(text)?;
    if let Some(max_version) = config.context.max_version {
      ensure!(
        max_version >= GlVersion::BASE,
        "max_version {} is below the oldest supported version {}",
        max_version,
        GlVersion::BASE,
      );
    }
    Ok(config)
  }
}
