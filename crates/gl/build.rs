use gl_generator::{Api, DebugStructGenerator, Fallbacks, Profile, Registry, StructGenerator};
use std::collections::BTreeSet;
use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Every version that gets its own block in the generated tables. 1.1 is the
/// base block and also carries the 1.0 commands.
const VERSIONS: &[(u8, u8)] = &[
  (1, 1),
  (1, 2),
  (1, 3),
  (1, 4),
  (1, 5),
  (2, 0),
  (2, 1),
  (3, 0),
  (3, 1),
  (3, 2),
  (3, 3),
  (4, 0),
  (4, 1),
  (4, 2),
];

const EXTENSIONS: &[&str] = &["GL_KHR_debug"];

fn main() {
  println!("cargo:rerun-if-changed=build.rs");
  println!("cargo:rerun-if-env-changed=CARGO_FEATURE_DEBUG_ALL_COMMANDS");

  let dest = env::var("OUT_DIR").unwrap();
  let dest = Path::new(&dest);

  let mut file = BufWriter::new(File::create(dest.join("bindings.rs")).unwrap());
  let latest = *VERSIONS.last().unwrap();
  let registry =
    Registry::new(Api::Gl, latest, Profile::Compatibility, Fallbacks::None, EXTENSIONS);

  // cfg!(feature = ...) doesn't see the features of the crate being built
  // from inside its build script, cargo passes them through env vars instead.
  if env::var_os("CARGO_FEATURE_DEBUG_ALL_COMMANDS").is_some() {
    registry.write_bindings(DebugStructGenerator, &mut file)
  } else {
    registry.write_bindings(StructGenerator, &mut file)
  }
  .unwrap();

  let mut file = BufWriter::new(File::create(dest.join("version_blocks.rs")).unwrap());
  write_version_blocks(&mut file).unwrap();
}

fn write_version_blocks<W: Write>(out: &mut W) -> io::Result<()> {
  let no_extensions: [&str; 0] = [];
  let mut seen: BTreeSet<String> = BTreeSet::new();

  writeln!(out, "pub static VERSION_BLOCKS: &[VersionBlock] = &[")?;
  for &(major, minor) in VERSIONS {
    let registry = Registry::new(
      Api::Gl,
      (major, minor),
      Profile::Compatibility,
      Fallbacks::None,
      no_extensions,
    );

    let introduced: Vec<String> = registry
      .cmds
      .iter()
      .map(|cmd| format!("gl{}", cmd.proto.ident))
      .filter(|name| !seen.contains(name))
      .collect();

    writeln!(out, "  VersionBlock {{")?;
    writeln!(out, "    major: {},", major)?;
    writeln!(out, "    minor: {},", minor)?;
    writeln!(out, "    commands: &[")?;
    for name in &introduced {
      writeln!(out, "      {:?},", name)?;
    }
    writeln!(out, "    ],")?;
    writeln!(out, "  }},")?;

    seen.extend(introduced);
  }
  writeln!(out, "];")?;

  Ok(())
}
