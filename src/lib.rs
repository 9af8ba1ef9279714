//! colorstxt - Library for deriving node color tables from texture packs
//!
//! This library provides functionality to:
//! - Index texture files across one or more texture pack directory trees
//! - Compute the representative average color of a texture (alpha-aware RMS)
//! - Rewrite generated color lines through a minimal sed-style rule language

pub mod cli;
pub mod process;
pub mod report;
pub mod rewrite;
pub mod sampler;
pub mod textures;
