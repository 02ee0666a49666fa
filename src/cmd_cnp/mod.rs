//! Subcommand modules for the `cnp` binary.

pub mod dist;
pub mod matrix;
pub mod simulate;
