//! Validated configuration for slicing a recording.

use crate::output::DEFAULT_CREATOR;
use crate::types::TimeWindow;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while building a configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("input and output files are the same: {}", .0.display())]
    SamePath(PathBuf),
}

/// Immutable configuration for one slice operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceConfig {
    input: PathBuf,
    output: PathBuf,
    window: TimeWindow,
    creator: String,
}

impl SliceConfig {
    /// Validates and builds a configuration.
    ///
    /// Fails if `input` and `output` name the same file.
    pub fn new(
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        window: TimeWindow,
    ) -> Result<Self, ConfigError> {
        let input = input.into();
        let output = output.into();

        if same_file(&input, &output) {
            return Err(ConfigError::SamePath(output));
        }

        Ok(Self {
            input,
            output,
            window,
            creator: DEFAULT_CREATOR.to_string(),
        })
    }

    /// Sets the tool name recorded in the output file header.
    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = creator.into();
        self
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn window(&self) -> TimeWindow {
        self.window
    }

    pub fn creator(&self) -> &str {
        &self.creator
    }
}

fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    // Only resolvable when both files exist
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
