//! launcher-patch: quote path variables in generated shell launchers
//!
//! Launcher scripts refer to themselves through `$0` and to their install
//! directory through `$DIR`. Unquoted, both break as soon as the path
//! contains a space. This library rewrites those tokens as `"$0"` and
//! `"$DIR"` with plain literal substitution.

/// Command-line definitions
pub mod cli;

/// Reading, patching and writing back a file
pub mod file;

/// Log subscriber setup
pub mod logging;

/// The literal text transform
pub mod patch;

pub use file::{patch_file, read_patched, write_back};
pub use patch::{patch, patch_with, PatchReport, RuleCount, Substitution, LAUNCHER_QUOTES};
