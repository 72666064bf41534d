mod report;
mod rule;

pub use report::{PatchReport, RuleCount};
pub use rule::{patch, patch_with, Substitution, LAUNCHER_QUOTES};
