//! Regex-based exclusion rules matched against relative paths

use regex::Regex;

use crate::error::{ConvertError, Result};

/// Patterns that are always excluded: build artifacts, caches and VCS metadata.
pub const DEFAULT_EXCLUDE_PATTERNS: &[&str] = &[
    r"\.git/.*",
    r"\.gitignore",
    r"__pycache__/.*",
    r"\.pyc$",
    r"\.pyo$",
    r"node_modules/.*",
    r"\.vscode/.*",
    r"\.idea/.*",
    r"\.DS_Store",
    r"\.env",
    r"\.log$",
    r"\.tmp$",
    r"\.cache/.*",
    r"dist/.*",
    r"build/.*",
    r"\.egg-info/.*",
    r"venv/.*",
    r"env/.*",
    r"\.venv/.*",
    r"\.pytest_cache/.*",
    r"\.coverage",
    r"coverage\.xml",
    r"\.nyc_output/.*",
    r"\.next/.*",
    r"\.nuxt/.*",
];

/// Split pipe-delimited pattern arguments into independent patterns.
///
/// `"test_.*\.py|.*\.pyc"` becomes two patterns. Empty fragments are dropped.
pub fn split_patterns<S: AsRef<str>>(values: &[S]) -> Vec<String> {
    values
        .iter()
        .flat_map(|value| value.as_ref().split('|'))
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Ordered, immutable set of exclusion patterns.
///
/// A path is excluded when any pattern matches anywhere in it. There is no
/// negation, so adding patterns can only exclude more.
#[derive(Debug, Clone)]
pub struct ExclusionRules {
    patterns: Vec<Regex>,
}

impl ExclusionRules {
    /// Build the rule set from the defaults followed by `extra` patterns.
    pub fn new<S: AsRef<str>>(extra: &[S]) -> Result<Self> {
        let patterns = DEFAULT_EXCLUDE_PATTERNS
            .iter()
            .copied()
            .chain(extra.iter().map(|s| AsRef::<str>::as_ref(s)))
            .map(|pattern| {
                Regex::new(pattern).map_err(|source| ConvertError::InvalidPattern {
                    pattern: pattern.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    pub fn is_excluded(&self, relative_path: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(relative_path))
    }

    /// The first pattern matching `relative_path`, if any.
    pub fn matching_pattern(&self, relative_path: &str) -> Option<&str> {
        self.patterns.iter().find(|re| re.is_match(relative_path)).map(Regex::as_str)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
