use cardboard_glbind::gl::versions::VERSION_BLOCKS;
use cardboard_glbind::{
  block_version, Context, ContextCapabilities, Extension, GlVersion, VersionFlag,
};
use prelude_plus::*;
use serde::Serialize;

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct VersionSummary {
  pub version: GlVersion,
  pub commands: usize,
}

pub fn version_summaries() -> Vec<VersionSummary> {
  VERSION_BLOCKS
    .iter()
    .map(|block| VersionSummary { version: block_version(block), commands: block.commands.len() })
    .collect()
}

pub fn commands_of(version: GlVersion) -> Option<&'static [&'static str]> {
  VERSION_BLOCKS.iter().find(|block| block_version(block) == version).map(|block| block.commands)
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct ExtensionEntry {
  pub name: &'static str,
  pub variant: String,
}

pub fn extension_table() -> Vec<ExtensionEntry> {
  Extension::VARIANTS
    .iter()
    .map(|&extension| ExtensionEntry {
      name: extension.name(),
      variant: format!("{:?}", extension),
    })
    .collect()
}

/// Everything `glbind probe` found out about a live context.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeReport {
  pub highest_version: Option<GlVersion>,
  pub versions: Vec<VersionFlag>,
  pub resolved_symbols: usize,
  pub known_symbols: usize,
  pub debug_output: bool,
  pub capabilities: ContextCapabilities,
  pub extensions: Vec<Extension>,
  pub unknown_extensions: Vec<String>,
}

impl ProbeReport {
  #[cfg_attr(not(any(test, feature = "probe")), allow(dead_code))]
  pub fn collect(ctx: &Context) -> Self {
    let extensions = ctx.query_extensions();
    Self {
      highest_version: ctx.highest_version(),
      versions: ctx.versions().iter().collect(),
      resolved_symbols: ctx.symbols().resolved_count(),
      known_symbols: ctx.symbols().len(),
      debug_output: ctx.debug_output_enabled(),
      capabilities: ctx.query_capabilities(),
      extensions: extensions.supported().collect(),
      unknown_extensions: extensions.unknown().map(|name| name.to_owned()).collect(),
    }
  }

  pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
    let caps = &self.capabilities;
    writeln!(out, "Vendor:       {}", caps.vendor)?;
    writeln!(out, "Renderer:     {}", caps.renderer)?;
    writeln!(out, "GL version:   {}", caps.gl_version)?;
    writeln!(out, "GLSL version: {}", caps.glsl_version)?;
    match self.highest_version {
      Some(version) => writeln!(out, "Loaded up to: GL {}", version)?,
      None => writeln!(out, "Loaded up to: nothing, not even GL {}", GlVersion::BASE)?,
    }
    writeln!(out, "Entry points: {}/{} resolved", self.resolved_symbols, self.known_symbols)?;
    writeln!(out, "Debug output: {}", if self.debug_output { "routed to the log" } else { "off" })?;
    writeln!(out, "Max texture size: {}", caps.max_texture_size)?;
    writeln!(out, "Max texture units: {}", caps.max_texture_units)?;
    writeln!(out, "Max vertex attribs: {}", caps.max_vertex_attribs)?;

    writeln!(out)?;
    for flag in &self.versions {
      let available = if flag.available { "yes" } else { "no" };
      writeln!(out, "  GL {:<4} {}", flag.version.to_string(), available)?;
    }

    writeln!(out)?;
    writeln!(
      out,
      "Extensions ({} known, {} other):",
      self.extensions.len(),
      self.unknown_extensions.len(),
    )?;
    for extension in &self.extensions {
      writeln!(out, "  {}", extension)?;
    }
    for name in &self.unknown_extensions {
      writeln!(out, "  {} (unknown)", name)?;
    }
    Ok(())
  }
}

pub fn print_json<T: Serialize>(value: &T) -> AnyResult<()> {
  let stdout = io::stdout();
  let mut out = stdout.lock();
  serde_json::to_writer_pretty(&mut out, value).context("Failed to write JSON to stdout")?;
  writeln!(out)?;
  Ok(())
}
