//! File discovery: exclusion rules, extension labels and directory traversal

pub mod exclude;
pub mod languages;
pub mod scanner;

pub use exclude::{split_patterns, ExclusionRules, DEFAULT_EXCLUDE_PATTERNS};
pub use languages::{is_code_file, label_for, FALLBACK_LABEL};
pub use scanner::FileScanner;
