use std::{collections::HashSet, sync::LazyLock};

/// Dependency, build and VCS folders never worth counting.
pub const SKIPPED_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    "__pycache__",
    ".venv",
    "venv",
    "env",
    ".env",
    "dist",
    "build",
    ".idea",
    ".vscode",
    "target",
    "bin",
    "obj",
    ".next",
    ".nuxt",
];

static BUILTIN: LazyLock<SkipSet> = LazyLock::new(|| SkipSet::from_names(SKIPPED_DIRS.iter().copied()));

/// Directory basenames pruned at every depth of a traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkipSet {
    names: HashSet<String>,
}

impl SkipSet {
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { names: names.into_iter().map(Into::into).collect() }
    }

    /// Sorted names, for building port plans and for display.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.names.iter().cloned().collect();
        names.sort();
        names
    }
}
