//! Options for file finding
//!
//! This module provides options for configuring the directory walk.

use crate::cli::Cli;

/// Options for configuring the file finding process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindOptions {
    /// Maximum depth to search, 0 visits only the roots
    pub max_depth: Option<usize>,

    /// Whether to follow symbolic links
    pub follow_links: bool,
}

impl FindOptions {
    /// Create a new FindOptions with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum depth to search
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set whether to follow symbolic links
    pub fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    /// Create FindOptions from CLI arguments
    pub fn from_cli(cli: &Cli) -> Self {
        Self::new()
            .with_max_depth(cli.max_depth)
            .with_follow_links(cli.follow_links)
    }
}
