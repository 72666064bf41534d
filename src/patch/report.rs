use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How many times one rule fired
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RuleCount {
    pub from: String,
    pub to: String,
    pub count: usize,
}

/// Summary of patching a single file
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PatchReport {
    pub path: PathBuf,
    /// Whether the patched text differs from what was read
    pub changed: bool,
    pub replacements: Vec<RuleCount>,
}

impl PatchReport {
    pub fn total(&self) -> usize {
        self.replacements.iter().map(|r| r.count).sum()
    }
}
