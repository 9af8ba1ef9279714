//! Command-line interface implementation
//!
//! Argument parsing and path validation live here; everything the core
//! modules see is pre-validated. Traversal can still hit unreadable
//! directories, which surface as errors from the index build.

mod generate;

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// colorstxt - Generate a colors.txt color table from node definitions and textures
///
/// Reads a nodes.txt file (as produced by a /dumpnodes export), resolves each
/// node's texture in the given texture directories, and writes one average
/// color per node in the colors.txt format consumed by map renderers.
#[derive(Parser)]
#[command(name = "colorstxt")]
#[command(about = "Generate a colors.txt color table from node definitions and texture packs")]
#[command(version)]
pub struct Cli {
    /// Path to the game installation (its mods/ directory supplies textures)
    #[arg(short, long, value_name = "DIR")]
    pub game: PathBuf,

    /// Additional search path for mod textures (repeatable)
    #[arg(short = 'm', long = "mods", value_name = "DIR")]
    pub mods: Vec<PathBuf>,

    /// Load rewrite rules from a file instead of the built-in set
    #[arg(long, value_name = "FILE")]
    pub replace: Option<PathBuf>,

    /// Input node list
    #[arg(default_value = "./nodes.txt")]
    pub input: PathBuf,

    /// Output color table
    #[arg(default_value = "./colors.txt")]
    pub output: PathBuf,
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let game_mods = cli.game.join("mods");
    if !game_mods.is_dir() {
        eprintln!("Error: '{}' doesn't exist or does not contain a game.", cli.game.display());
        return ExitCode::from(EXIT_INVALID_ARGS);
    }
    let mut roots = vec![game_mods];
    for path in &cli.mods {
        if !path.is_dir() {
            eprintln!("Error: Given path '{}' does not exist.", path.display());
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
        roots.push(path.clone());
    }

    if !cli.input.is_file() {
        eprintln!("Error: Input file '{}' does not exist.", cli.input.display());
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    generate::run_generate(&roots, cli.replace.as_deref(), &cli.input, &cli.output)
}
