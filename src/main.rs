//! colorstxt - Command-line tool for generating colors.txt files from texture packs

use std::process::ExitCode;

use colorstxt::cli;

fn main() -> ExitCode {
    cli::run()
}
