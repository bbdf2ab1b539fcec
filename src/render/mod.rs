//! Markdown document assembly
//!
//! The document is an append-only buffer: header, index, then one block per
//! file in the same order as the index. Paths and content are inserted
//! verbatim, without Markdown escaping.

use crate::domain::FileRecord;

/// Anchor for a relative path: '/', '.' and '_' become '-', then lower-cased.
pub fn anchor_for(relative_path: &str) -> String {
    relative_path.replace(['/', '.', '_'], "-").to_lowercase()
}

/// Builder for the output document.
#[derive(Debug, Default)]
pub struct MarkdownDocument {
    buf: String,
}

impl MarkdownDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Title, description and file count.
    pub fn push_header(&mut self, repo_name: &str, file_count: usize) {
        self.buf.push_str(&format!("# Source Code - {repo_name}\n\n"));
        self.buf.push_str(&format!(
            "This document contains all the source code of the repository `{repo_name}`.\n\n"
        ));
        self.buf.push_str(&format!("**Total files:** {file_count}\n\n"));
    }

    /// One link per file, followed by a separator.
    pub fn push_index(&mut self, records: &[FileRecord]) {
        self.buf.push_str("## Index\n\n");
        for record in records {
            self.buf.push_str(&format!(
                "- [{}](#{})\n",
                record.relative_path,
                anchor_for(&record.relative_path)
            ));
        }
        self.buf.push_str("\n---\n\n");
    }

    /// Heading, metadata lines and fenced content for one file.
    pub fn push_file(&mut self, record: &FileRecord, content: &str) {
        let path = &record.relative_path;
        let label = record.label;
        self.buf.push_str(&format!("## {path}\n\n"));
        self.buf.push_str(&format!("**Path:** `{path}`\n"));
        self.buf.push_str(&format!("**Language:** {label}\n\n"));
        self.buf.push_str(&format!("```{label}\n"));
        self.buf.push_str(content);
        if !content.ends_with('\n') {
            self.buf.push('\n');
        }
        self.buf.push_str("```\n\n");
        self.buf.push_str("---\n\n");
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn record(rel: &str, label: &'static str) -> FileRecord {
        FileRecord { path: PathBuf::from("/repo").join(rel), relative_path: rel.to_string(), label }
    }

    #[test]
    fn anchor_replaces_separators_and_lowercases() {
        assert_eq!(anchor_for("src/My_Module.py"), "src-my-module-py");
        assert_eq!(anchor_for("a.b/c_d.RS"), "a-b-c-d-rs");
    }

    #[test]
    fn file_block_appends_missing_newline() {
        let mut doc = MarkdownDocument::new();
        doc.push_file(&record("a.py", "python"), "print(1)");
        assert_eq!(
            doc.as_str(),
            "## a.py\n\n**Path:** `a.py`\n**Language:** python\n\n```python\nprint(1)\n```\n\n---\n\n"
        );
    }

    #[test]
    fn file_block_keeps_existing_newline() {
        let mut doc = MarkdownDocument::new();
        doc.push_file(&record("a.rs", "rust"), "fn main() {}\n");
        assert!(doc.as_str().contains("```rust\nfn main() {}\n```\n"));
    }

    #[test]
    fn index_and_body_list_files_in_the_same_order() {
        let records = vec![record("a.py", "python"), record("src/b.rs", "rust")];
        let mut doc = MarkdownDocument::new();
        doc.push_header("demo", records.len());
        doc.push_index(&records);
        doc.push_file(&records[0], "x");
        doc.push_file(&records[1], "y\n");
        let out = doc.into_string();

        assert!(out.starts_with("# Source Code - demo\n\n"));
        assert!(out.contains("**Total files:** 2\n\n## Index\n\n"));
        assert!(out.contains("- [a.py](#a-py)\n- [src/b.rs](#src-b-rs)\n\n---\n\n## a.py"));

        let headings: Vec<&str> =
            out.lines().filter_map(|l| l.strip_prefix("## ")).filter(|h| *h != "Index").collect();
        assert_eq!(headings, vec!["a.py", "src/b.rs"]);
    }

    #[test]
    fn content_is_not_escaped() {
        let mut doc = MarkdownDocument::new();
        doc.push_file(&record("doc.md", "markdown"), "# heading\n```\ninner\n```\n");
        assert!(doc.as_str().contains("```markdown\n# heading\n```\ninner\n```\n```\n"));
    }
}
