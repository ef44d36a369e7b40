//! File filtering functionality
//!
//! This module provides the predicates a search applies to every visited
//! entry. Filters see entries through [`FsEntry`], so they can be checked
//! against anything that knows its name and kind.

use std::borrow::Cow;

use clap::ValueEnum;
use walkdir::DirEntry;

use crate::cli::FindArguments;

/// A node of the file tree as seen by filters
pub trait FsEntry {
    /// Final component of the entry's path
    fn name(&self) -> Cow<'_, str>;

    fn is_dir(&self) -> bool;

    /// Whether the entry is a regular file
    fn is_file(&self) -> bool;
}

impl FsEntry for DirEntry {
    fn name(&self) -> Cow<'_, str> {
        self.file_name().to_string_lossy()
    }

    // Symlinks are judged by what they point at.
    fn is_dir(&self) -> bool {
        if self.path_is_symlink() {
            self.path().is_dir()
        } else {
            self.file_type().is_dir()
        }
    }

    fn is_file(&self) -> bool {
        if self.path_is_symlink() {
            self.path().is_file()
        } else {
            self.file_type().is_file()
        }
    }
}

/// Trait for file filters
pub trait FileFilter {
    /// Check if the entry matches the filter
    fn matches(&self, entry: &dyn FsEntry) -> bool;

    /// Get the filter description
    fn description(&self) -> String;
}

/// Filter for matching file names exactly
#[derive(Debug, Clone)]
pub struct NameFilter {
    name: String,
    ignore_case: bool,
}

impl NameFilter {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ignore_case: false,
        }
    }

    /// Create a new case-insensitive NameFilter
    pub fn new_ignore_case(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ignore_case: true,
        }
    }
}

impl FileFilter for NameFilter {
    fn matches(&self, entry: &dyn FsEntry) -> bool {
        let name = entry.name();
        if self.ignore_case {
            eq_ignore_case(&name, &self.name)
        } else {
            name == self.name.as_str()
        }
    }

    fn description(&self) -> String {
        if self.ignore_case {
            format!("name (ignore case) is '{}'", self.name)
        } else {
            format!("name is '{}'", self.name)
        }
    }
}

// Char by char, so context rules such as a final sigma do not apply.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Entry kinds accepted by `--type`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FindType {
    Directory,
    File,
}

impl FindType {
    /// Case-insensitive lookup by variant name
    pub fn parse(raw: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(raw, true).ok()
    }
}

/// Filter for matching entry types
#[derive(Debug, Clone, Copy)]
pub struct TypeFilter {
    find_type: FindType,
}

impl TypeFilter {
    pub fn new(find_type: FindType) -> Self {
        Self { find_type }
    }
}

impl FileFilter for TypeFilter {
    fn matches(&self, entry: &dyn FsEntry) -> bool {
        match self.find_type {
            FindType::Directory => entry.is_dir(),
            FindType::File => entry.is_file(),
        }
    }

    fn description(&self) -> String {
        match self.find_type {
            FindType::Directory => "is a directory".to_string(),
            FindType::File => "is a regular file".to_string(),
        }
    }
}

/// Matches when every inner filter matches; empty matches everything
#[derive(Default)]
pub struct AllFilter {
    filters: Vec<Box<dyn FileFilter>>,
}

impl AllFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter<F>(mut self, filter: F) -> Self
    where
        F: FileFilter + 'static,
    {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Build the combined predicate for a search
    pub fn from_arguments(args: &FindArguments) -> Self {
        let mut filter = Self::new();
        // TODO: decide whether --name and --iname should be mutually exclusive
        if let Some(iname) = &args.iname {
            filter = filter.with_filter(NameFilter::new_ignore_case(iname));
        }
        if let Some(name) = &args.name {
            filter = filter.with_filter(NameFilter::new(name));
        }
        if let Some(find_type) = args.find_type {
            filter = filter.with_filter(TypeFilter::new(find_type));
        }
        filter
    }
}

impl FileFilter for AllFilter {
    fn matches(&self, entry: &dyn FsEntry) -> bool {
        self.filters.iter().all(|filter| filter.matches(entry))
    }

    fn description(&self) -> String {
        if self.filters.is_empty() {
            return "matches everything".to_string();
        }
        self.filters
            .iter()
            .map(|filter| filter.description())
            .collect::<Vec<_>>()
            .join(" and ")
    }
}
