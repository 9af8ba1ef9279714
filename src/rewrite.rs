//! Sed-style rewrite rules applied to generated color lines
//!
//! Supports a minimal, fixed subset of stream-editor syntax:
//! - `/<pattern>/d` deletes the line if the pattern matches anywhere
//! - `s<delim><pattern><delim><replacement><delim>` replaces all matches;
//!   the delimiter is whatever character follows `s`, and replacements may
//!   reference capture groups as `$1`, `$2`, ...
//!
//! Rules are compiled once, up front, so a bad rule set fails before any
//! output is produced, and are then applied in order to every line.

use std::io;
use std::path::Path;

use regex::Regex;
use thiserror::Error;

/// Rules applied when no `--replace` file is given.
pub const DEFAULT_RULES: &[&str] = &[
    // Delete some nodes that are usually hidden
    r"/^fireflies:firefly /d",
    r"/^butterflies:butterfly_/d",
    // Nicer colors for water and lava
    r"s/^(default:(river_)?water_(flowing|source)) [0-9 ]+$/$1 39 66 106 128 224/",
    r"s/^(default:lava_(flowing|source)) [0-9 ]+$/$1 255 100 0/",
    // Transparency for glass nodes and panes
    r"s/^(default:.*glass) ([0-9 ]+)$/$1 $2 64 16/",
    r"s/^(doors:.*glass[^ ]*) ([0-9 ]+)$/$1 $2 64 16/",
    r"s/^(xpanes:.*(pane|bar)[^ ]*) ([0-9 ]+)$/$1 $3 64 16/",
];

/// Error type for rule compilation failures
#[derive(Debug, Error)]
pub enum RuleError {
    /// Rule text does not match either recognized rule shape
    #[error("malformed rule '{0}'")]
    Malformed(String),
    /// Rule shape was fine but the pattern is not a valid regex
    #[error("bad pattern in rule '{rule}': {source}")]
    BadPattern {
        rule: String,
        #[source]
        source: regex::Error,
    },
    /// Rule file could not be read
    #[error("cannot read rule file: {0}")]
    Io(#[from] io::Error),
}

/// A compiled rewrite rule.
#[derive(Debug)]
pub enum RewriteRule {
    /// Elide the line if the pattern matches anywhere in it
    Delete(Regex),
    /// Replace all matches of the pattern with the replacement text
    Substitute(Regex, String),
}

/// Compile rule texts into an ordered rule list.
///
/// # Errors
///
/// Returns `RuleError` for any rule that does not parse; no rules are
/// applied in that case.
pub fn compile<S: AsRef<str>>(rule_texts: &[S]) -> Result<Vec<RewriteRule>, RuleError> {
    rule_texts.iter().map(|text| compile_rule(text.as_ref())).collect()
}

fn compile_rule(text: &str) -> Result<RewriteRule, RuleError> {
    let pattern = |pat: &str| {
        Regex::new(pat)
            .map_err(|source| RuleError::BadPattern { rule: text.to_string(), source })
    };
    match text.chars().next() {
        Some('/') => {
            let rest = text
                .strip_suffix("/d")
                .ok_or_else(|| RuleError::Malformed(text.to_string()))?;
            // A bare "/d" leaves an empty pattern, which matches every line
            Ok(RewriteRule::Delete(pattern(rest.get(1..).unwrap_or(""))?))
        }
        Some('s') => {
            let delim = text[1..]
                .chars()
                .next()
                .ok_or_else(|| RuleError::Malformed(text.to_string()))?;
            // Splitting the whole rule text yields ["s", pattern, replacement, ""]
            let parts: Vec<&str> = text.split(delim).collect();
            if parts.len() != 4 || !parts[3].is_empty() {
                return Err(RuleError::Malformed(text.to_string()));
            }
            Ok(RewriteRule::Substitute(pattern(parts[1])?, parts[2].to_string()))
        }
        _ => Err(RuleError::Malformed(text.to_string())),
    }
}

/// Load rule texts from a file, one rule per line.
///
/// Blank lines and lines starting with `#` are ignored.
pub fn load_rules(path: &Path) -> Result<Vec<String>, RuleError> {
    let content = std::fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect())
}

/// Apply the rules to one line, in order.
///
/// Returns `None` if a delete rule matched (processing stops there), or the
/// possibly rewritten line otherwise. An empty rule list is the identity.
pub fn apply(rules: &[RewriteRule], line: &str) -> Option<String> {
    let mut line = line.to_string();
    for rule in rules {
        match rule {
            RewriteRule::Delete(pattern) => {
                if pattern.is_match(&line) {
                    return None;
                }
            }
            RewriteRule::Substitute(pattern, replacement) => {
                line = pattern.replace_all(&line, replacement.as_str()).into_owned();
            }
        }
    }
    Some(line)
}
