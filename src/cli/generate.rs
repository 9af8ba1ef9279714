//! Generation run: index textures, stream records, write the color table

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use super::{EXIT_ERROR, EXIT_SUCCESS};
use crate::process;
use crate::report::Report;
use crate::rewrite;
use crate::textures::TextureIndex;

/// Execute a full generation run.
///
/// Rule compilation and the texture index both happen before the output file
/// is created, so a bad rule set or unreadable texture tree never leaves a
/// partial colors.txt behind. A failure mid-processing does: the output is
/// then in an unspecified partial state.
pub fn run_generate(
    roots: &[PathBuf],
    rule_file: Option<&Path>,
    input: &Path,
    output: &Path,
) -> ExitCode {
    let rule_texts = match rule_file {
        Some(path) => match rewrite::load_rules(path) {
            Ok(texts) => texts,
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::from(EXIT_ERROR);
            }
        },
        None => rewrite::DEFAULT_RULES.iter().map(|s| s.to_string()).collect(),
    };
    let rules = match rewrite::compile(&rule_texts) {
        Ok(rules) => rules,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(EXIT_ERROR);
        }
    };

    print!("Collecting textures from {} path(s)... ", roots.len());
    let _ = std::io::stdout().flush();
    let index = match TextureIndex::build(roots) {
        Ok(index) => index,
        Err(e) => {
            println!();
            eprintln!("Error: {e}");
            return ExitCode::from(EXIT_ERROR);
        }
    };
    println!("done");

    println!("Processing nodes...");
    let reader = match File::open(input) {
        Ok(file) => BufReader::new(file),
        Err(e) => {
            eprintln!("Error: Failed to open '{}': {e}", input.display());
            return ExitCode::from(EXIT_ERROR);
        }
    };
    let mut writer = match File::create(output) {
        Ok(file) => BufWriter::new(file),
        Err(e) => {
            eprintln!("Error: Failed to create '{}': {e}", output.display());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let mut report = Report::new();
    if let Err(e) = process::process(reader, &mut writer, &index, &rules, &mut report) {
        eprintln!("Error: {e}");
        return ExitCode::from(EXIT_ERROR);
    }

    println!("{}", report.summary());
    ExitCode::from(EXIT_SUCCESS)
}
