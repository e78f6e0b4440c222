use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One entry of the reconstructed table of contents.
///
/// Entries are immutable once built and ordered by first appearance in the
/// document, which is also non-decreasing in `page`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    pub doc_title: String,
    /// Dotted numeric identifier, e.g. "2.1.3".
    pub section_id: String,
    pub title: String,
    pub page: usize,
    /// Depth in the hierarchy: number of dot-separated components.
    pub level: usize,
    /// `section_id` with its last component removed; None for top-level
    /// entries (or when the parent never appeared in the document).
    pub parent_id: Option<String>,
    /// "`section_id` `title`".
    pub full_path: String,
    /// Lowercased title keywords, stop-words removed. None when empty.
    pub tags: Option<Vec<String>>,
}

impl TocEntry {
    /// Parent identifier derived from a dotted section id, if it has one.
    pub fn parent_of(section_id: &str) -> Option<String> {
        section_id.rsplit_once('.').map(|(head, _)| head.to_string())
    }
}

/// Body text of one section, bounded by its own heading and the next one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub doc_title: String,
    pub section_id: String,
    pub title: String,
    pub page: usize,
    /// Extracted body text; empty when the heading could not be located.
    pub content: String,
    /// Table captions found in the section body. None = none found.
    pub tables: Option<Vec<String>>,
    /// Figure captions found in the section body. None = none found.
    pub figures: Option<Vec<String>>,
}

/// A non-fatal problem recorded during extraction.
///
/// Warnings are accumulated and returned alongside results, never thrown:
/// a heading that cannot be re-located or a discarded noise candidate does
/// not fail the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionWarning {
    pub section_id: Option<String>,
    pub reason: String,
}

impl ExtractionWarning {
    pub fn new(section_id: Option<&str>, reason: impl Into<String>) -> Self {
        ExtractionWarning {
            section_id: section_id.map(|s| s.to_string()),
            reason: reason.into(),
        }
    }
}

/// Complete result of parsing one document.
///
/// Owned by a single in-flight parse; concurrent documents each get their
/// own value, so there is no shared mutable state between extractions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentExtract {
    pub doc_title: String,
    pub page_count: usize,
    pub toc: Vec<TocEntry>,
    pub sections: Vec<Section>,
    pub warnings: Vec<ExtractionWarning>,
}

/// Counts and level distribution for one parsed document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractStats {
    pub toc_entries: usize,
    pub sections: usize,
    /// Entry count per hierarchy level, keyed by level (sorted).
    pub level_distribution: BTreeMap<usize, usize>,
}

/// One ranked result from a section search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub section_id: String,
    pub title: String,
    pub page: usize,
    /// Leading slice of the section content (at most 200 chars).
    pub snippet: String,
    pub score: u32,
}
