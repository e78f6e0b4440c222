use crate::extraction::PageContent;
use crate::model::{ExtractionWarning, TocEntry};
use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum heading depth recognized by the numeric-dotted scheme.
const MAX_DEPTH: usize = 4;

/// Title words that carry no signal and are excluded from tags.
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "of", "to", "in", "for", "on", "with", "by", "at", "from",
    "as", "is", "are", "be", "this", "that",
];

/// Numeric-dotted heading pattern: dot-separated positive integers,
/// optional trailing dot, whitespace, title. A trailing standalone integer
/// is a ToC-style page reference ("1.2 Overview 23"). Depth is not limited
/// here; MAX_DEPTH is the single gate, applied by the matcher.
static NUMERIC_DOTTED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+(?:\.\d+)*)\.?\s+(.+?)(?:\s+(\d+))?\s*$")
        .expect("invalid numeric-dotted heading pattern")
});

/// A line structurally recognized as a possible heading, before hierarchy
/// checks decide whether it enters the TOC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingCandidate {
    pub section_id: String,
    pub title: String,
    pub level: usize,
    /// Page the entry refers to: the trailing ToC page number when the
    /// line carries one, otherwise the page the line appears on.
    pub page: usize,
}

/// Strategy for recognizing heading candidates in a raw text line.
///
/// Only dotted numeric identifiers ship today; lettered and roman-numeral
/// schemes can be added as further implementations. Lines with any other
/// identifier style are simply not recognized.
pub trait HeadingMatcher: Send + Sync {
    fn match_line(&self, line: &str, page_number: usize) -> Option<HeadingCandidate>;
    fn name(&self) -> &str;
}

/// Heading numbering scheme, selecting the matcher used for a parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NumberingScheme {
    #[default]
    NumericDotted,
}

impl NumberingScheme {
    pub fn matcher(&self) -> Box<dyn HeadingMatcher> {
        match self {
            NumberingScheme::NumericDotted => Box::new(NumericDottedMatcher),
        }
    }
}

/// Matcher for "1", "1.2", "2.1.3.4" style headings.
pub struct NumericDottedMatcher;

impl HeadingMatcher for NumericDottedMatcher {
    fn match_line(&self, line: &str, page_number: usize) -> Option<HeadingCandidate> {
        let trimmed = line.trim();
        let caps = NUMERIC_DOTTED_RE.captures(trimmed)?;

        let section_id = caps.get(1)?.as_str();
        let title = caps.get(2)?.as_str().trim();
        let level = section_id.split('.').count();
        if level > MAX_DEPTH {
            return None;
        }
        // A title with no letters ("1.2 3") is numeric noise, not a heading.
        if title.is_empty() || !title.chars().any(|c| c.is_alphabetic()) {
            return None;
        }

        let page = caps
            .get(3)
            .and_then(|m| m.as_str().parse::<usize>().ok())
            .filter(|p| *p > 0)
            .unwrap_or(page_number);

        Some(HeadingCandidate {
            section_id: section_id.to_string(),
            title: title.to_string(),
            level,
            page,
        })
    }

    fn name(&self) -> &str {
        "numeric-dotted"
    }
}

/// Builds an ordered, hierarchical table of contents from per-page lines.
pub struct TocExtractor {
    doc_title: String,
    matcher: Box<dyn HeadingMatcher>,
}

impl TocExtractor {
    pub fn new(doc_title: impl Into<String>, scheme: NumberingScheme) -> Self {
        TocExtractor {
            doc_title: doc_title.into(),
            matcher: scheme.matcher(),
        }
    }

    /// Scan all lines in document order and return accepted TOC entries
    /// plus warnings for candidates discarded as noise.
    ///
    /// Zero recognized headings yields an empty TOC, not an error.
    pub fn extract(
        &self,
        pages: &[PageContent],
    ) -> (Vec<TocEntry>, Vec<ExtractionWarning>) {
        let mut entries: Vec<TocEntry> = Vec::new();
        let mut seen_ids: Vec<String> = Vec::new();
        let mut warnings: Vec<ExtractionWarning> = Vec::new();

        for page in pages {
            for line in &page.lines {
                let candidate = match self.matcher.match_line(line, page.page_number) {
                    Some(c) => c,
                    None => continue,
                };

                // Running header/footer reprints: first occurrence wins.
                if seen_ids.iter().any(|id| *id == candidate.section_id) {
                    continue;
                }

                // Hierarchy check: a deep heading whose parent never
                // appeared is more likely body-text noise than a real
                // section. The sole exception is the document's first
                // candidate, which may open mid-hierarchy (e.g. an
                // excerpt starting at "1.1").
                let parent_id = TocEntry::parent_of(&candidate.section_id);
                let parent_id = match parent_id {
                    Some(parent) if seen_ids.iter().any(|id| *id == parent) => Some(parent),
                    Some(parent) if entries.is_empty() => {
                        tracing::debug!(
                            section_id = %candidate.section_id,
                            missing_parent = %parent,
                            "accepting first entry without its parent"
                        );
                        None
                    }
                    Some(parent) => {
                        warnings.push(ExtractionWarning::new(
                            Some(candidate.section_id.as_str()),
                            format!(
                                "discarded orphan heading '{} {}' on page {}: parent {} not seen",
                                candidate.section_id, candidate.title, page.page_number, parent
                            ),
                        ));
                        continue;
                    }
                    None => None,
                };

                // TOC order must be non-decreasing in page.
                if let Some(last) = entries.last() {
                    if candidate.page < last.page {
                        warnings.push(ExtractionWarning::new(
                            Some(candidate.section_id.as_str()),
                            format!(
                                "discarded heading '{} {}': page {} precedes page {} of {}",
                                candidate.section_id,
                                candidate.title,
                                candidate.page,
                                last.page,
                                last.section_id
                            ),
                        ));
                        continue;
                    }
                }

                seen_ids.push(candidate.section_id.clone());
                entries.push(TocEntry {
                    doc_title: self.doc_title.clone(),
                    full_path: format!("{} {}", candidate.section_id, candidate.title),
                    tags: derive_tags(&candidate.title),
                    section_id: candidate.section_id,
                    title: candidate.title,
                    page: candidate.page,
                    level: candidate.level,
                    parent_id,
                });
            }
        }

        tracing::info!(
            entries = entries.len(),
            discarded = warnings.len(),
            matcher = self.matcher.name(),
            "table of contents extracted"
        );

        (entries, warnings)
    }
}

/// Lowercased title keywords with stop-words removed, in first-occurrence
/// order. None when nothing survives.
fn derive_tags(title: &str) -> Option<Vec<String>> {
    let mut tags: Vec<String> = Vec::new();
    for token in title.split(|c: char| !c.is_alphanumeric()) {
        if token.is_empty() || !token.chars().any(|c| c.is_alphabetic()) {
            continue;
        }
        let word = token.to_lowercase();
        if STOP_WORDS.contains(&word.as_str()) {
            continue;
        }
        if !tags.contains(&word) {
            tags.push(word);
        }
    }
    if tags.is_empty() {
        None
    } else {
        Some(tags)
    }
}
