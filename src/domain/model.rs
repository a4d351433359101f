use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::PathBuf;

pub const DEFAULT_SUFFIX: &str = ".conf";
pub const DEFAULT_LINES: [&str; 2] = ["rpcuser=user", "rpcallowip=0.0.0.0/0"];

/// Lines appended to every configuration file, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppendPayload {
    lines: Vec<String>,
}

impl AppendPayload {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Bytes written to each file: every line with a newline, then one blank line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');
        out
    }
}

impl Default for AppendPayload {
    fn default() -> Self {
        Self::new(DEFAULT_LINES.iter().map(|l| l.to_string()).collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub subdirectory: OsString,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub subdirectories: usize,
    pub candidates: usize,
    pub appended: usize,
    pub dry_run: bool,
}
