//! Node record processing pipeline
//!
//! Streams `nodes.txt` records through texture lookup, color sampling and the
//! rewrite rules, writing `colors.txt` lines in input order. Comment and
//! blank lines pass through untouched.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::report::Report;
use crate::rewrite::{self, RewriteRule};
use crate::sampler::{self, Color, SampleError};
use crate::textures::TextureIndex;

/// Texture name whose records are dropped without comment.
const BLANK_TEXTURE: &str = "blank.png";

/// Error type for processing failures
#[derive(Debug, Error)]
pub enum ProcessError {
    /// IO error reading input or writing output
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// A texture image could not be decoded
    #[error(transparent)]
    Sample(#[from] SampleError),
    /// Input line is neither comment, blank, nor a two-field record
    #[error("line {line_no}: malformed record '{line}'")]
    MalformedRecord { line_no: usize, line: String },
}

/// Process all records from `reader`, writing result lines to `writer`.
///
/// Per record (`<node> <texture>`): resolve the texture through `index`,
/// sample its average color, format `<node> <r> <g> <b>` and pass the line
/// through `rules` before writing it. Records with an empty texture name or
/// the literal `blank.png` are dropped silently; records whose texture is
/// not indexed are dropped with a diagnostic. A rule-elided line is dropped
/// without one, since the operator asked for the deletion.
///
/// # Errors
///
/// Fails on the first malformed record, undecodable image, or IO error;
/// output already written stays written.
pub fn process<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    index: &TextureIndex,
    rules: &[RewriteRule],
    report: &mut Report,
) -> Result<(), ProcessError> {
    for (idx, line) in reader.lines().enumerate() {
        let mut line = line?;
        if line.ends_with('\r') {
            line.pop();
        }
        if line.is_empty() || line.starts_with('#') {
            writeln!(writer, "{line}")?;
            continue;
        }

        let fields: Vec<&str> = line.split(' ').collect();
        let [node, texture] = fields[..] else {
            return Err(ProcessError::MalformedRecord { line_no: idx + 1, line });
        };
        if texture.is_empty() || texture == BLANK_TEXTURE {
            continue;
        }
        let Some(path) = index.get(texture) else {
            report.skip(node);
            continue;
        };

        let color = match sampler::average_color(path)? {
            Some(color) => color,
            None => {
                report.missing_color(texture);
                Color { r: 0, g: 0, b: 0 }
            }
        };
        if let Some(out) = rewrite::apply(rules, &format!("{node} {color}")) {
            writeln!(writer, "{out}")?;
            report.line_written();
        }
    }
    writer.flush()?;
    Ok(())
}
