//! jackc-drv - Compiler Driver
//!
//! The driver is the entry point around the core pipeline. It resolves the
//! single path argument into a list of `.jack` files (a file compiles
//! itself; a directory compiles each `.jack` child), and runs one closed
//! compilation per file: read the source, build the token stream, emit the
//! VM text, write it next to the input with a `.vm` extension.
//!
//! Files are compiled one at a time; nothing is shared between
//! compilations. Both streams of a compilation are scoped to that call and
//! released whether it succeeds or fails.
//!
//! Exit codes: 0 on success, 1 on any error (usage included).

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use jackc_lex::TokenStream;
use jackc_par::CompilationEngine;

/// Parses the command line and compiles everything it names.
pub fn run() -> Result<()> {
    let args: Vec<OsString> = std::env::args_os().skip(1).collect();
    if args.len() != 1 {
        bail!("invalid usage, please use: jackc <input path>");
    }
    compile_path(Path::new(&args[0]))
}

/// Compiles a `.jack` file, or every `.jack` file directly under a
/// directory, each to a sibling `.vm` file.
pub fn compile_path(path: &Path) -> Result<()> {
    for input in source_files(path)? {
        let output = input.with_extension("vm");
        compile_file(&input, &output)?;
    }
    Ok(())
}

/// Compiles one source file to `output`.
pub fn compile_file(input: &Path, output: &Path) -> Result<()> {
    let source = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    let mut engine = CompilationEngine::new(TokenStream::new(&source), Vec::new());
    engine
        .compile_class()
        .with_context(|| format!("failed to compile {}", input.display()))?;

    fs::write(output, engine.into_output())
        .with_context(|| format!("failed to write {}", output.display()))?;
    Ok(())
}

/// Expands the path argument into the `.jack` files to compile.
///
/// Anything without the extension is skipped silently, including a single
/// non-`.jack` file given directly.
fn source_files(path: &Path) -> Result<Vec<PathBuf>> {
    let mut candidates = Vec::new();
    if path.is_dir() {
        let entries = fs::read_dir(path)
            .with_context(|| format!("failed to list {}", path.display()))?;
        for entry in entries {
            candidates.push(entry?.path());
        }
        candidates.sort();
    } else {
        candidates.push(path.to_path_buf());
    }
    candidates.retain(|p| has_jack_extension(p));
    Ok(candidates)
}

fn has_jack_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("jack"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jack_extension_is_case_insensitive() {
        assert!(has_jack_extension(Path::new("Main.jack")));
        assert!(has_jack_extension(Path::new("Main.JACK")));
        assert!(!has_jack_extension(Path::new("Main.vm")));
        assert!(!has_jack_extension(Path::new("Main")));
    }
}
