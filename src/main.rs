mod config;
#[cfg(feature = "probe")]
mod probe;
mod report;

use cardboard_glbind::GlVersion;
use clap::{Parser, Subcommand};
use config::ProbeConfig;
use prelude_plus::*;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Print JSON instead of plain text
  #[arg(long, global = true)]
  json: bool,

  #[command(subcommand)]
  command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
  /// List the supported GL versions and how many entry points each one adds
  Versions,
  /// List the entry points a GL version adds on top of the previous one
  Commands {
    /// In the `MAJOR.MINOR` form, e.g. `3.3`
    version: GlVersion,
  },
  /// List the extension names the bindings know about
  Extensions,
  /// Create a GL context through SDL2 and report what its driver provides
  Probe {
    /// JSON file with the context to request and how to load it
    #[arg(long)]
    config: Option<PathBuf>,
  },
}

fn main() -> AnyResult<()> {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

  let cli = Cli::parse();
  let stdout = io::stdout();
  let mut out = stdout.lock();

  match cli.command {
    Command::Versions => {
      let summaries = report::version_summaries();
      if cli.json {
        return report::print_json(&summaries);
      }
      for summary in &summaries {
        writeln!(out, "GL {:<4} {:>4} commands", summary.version.to_string(), summary.commands)?;
      }
    }

    Command::Commands { version } => {
      let commands = match report::commands_of(version) {
        Some(commands) => commands,
        None => bail!(
          "GL {} is not one of the supported versions ({} through {})",
          version,
          GlVersion::BASE,
          GlVersion::LATEST,
        ),
      };
      if cli.json {
        return report::print_json(&commands);
      }
      for name in commands {
        writeln!(out, "{}", name)?;
      }
    }

    Command::Extensions => {
      let table = report::extension_table();
      if cli.json {
        return report::print_json(&table);
      }
      for entry in &table {
        writeln!(out, "{}", entry.name)?;
      }
    }

    Command::Probe { config } => {
      let config = ProbeConfig::load(config.as_deref())?;
      let probe_report = run_probe(&config)?;
      if cli.json {
        return report::print_json(&probe_report);
      }
      probe_report.write_text(&mut out)?;
    }
  }

  Ok(())
}

#[cfg(feature = "probe")]
fn run_probe(config: &ProbeConfig) -> AnyResult<report::ProbeReport> { probe::run(config) }

#[cfg(not(feature = "probe"))]
fn run_probe(_config: &ProbeConfig) -> AnyResult<report::ProbeReport> {
  bail!("{} was built without the `probe` feature, SDL2 is not available", env!("CARGO_PKG_NAME"))
}
