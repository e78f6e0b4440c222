pub mod error;
pub mod extraction;
pub mod model;
pub mod records;
pub mod search;
pub mod section;
pub mod toc;
pub mod validate;

use error::PdsectError;
use extraction::PageTextReader;
use model::{DocumentExtract, ExtractStats, Section, TocEntry};
use section::SectionExtractor;
use std::collections::BTreeMap;
use std::path::Path;
use toc::{NumberingScheme, TocExtractor};

pub use search::search;

const DEFAULT_DOC_TITLE: &str = "USB Power Delivery Specification";

/// Configuration for one parse session.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Document title for all emitted records; when unset, guessed from
    /// the first page and falling back to the USB PD default.
    pub doc_title: Option<String>,
    /// Heading numbering scheme to recognize.
    pub scheme: NumberingScheme,
}

/// Main API entry point: extract TOC and sections from a PDF.
///
/// Sequences reader -> TOC extraction -> section extraction for one
/// document. The returned value is owned by the caller; concurrent parses
/// each build their own, so nothing is shared between documents.
/// Deterministic for identical input bytes.
pub fn parse_document(
    pdf_bytes: &[u8],
    reader: &dyn PageTextReader,
    options: &ParseOptions,
) -> Result<DocumentExtract, PdsectError> {
    tracing::info!(backend = reader.backend_name(), "starting parse pipeline");
    let pages = reader.read_pages(pdf_bytes)?;

    let has_text = pages
        .iter()
        .any(|p| p.lines.iter().any(|l| !l.trim().is_empty()));
    if !has_text {
        return Err(PdsectError::EmptyDocument);
    }

    let doc_title = options
        .doc_title
        .clone()
        .or_else(|| extraction::guess_title(&pages))
        .unwrap_or_else(|| DEFAULT_DOC_TITLE.to_string());
    let page_count = pages.len();

    let (toc, mut warnings) = TocExtractor::new(doc_title.as_str(), options.scheme).extract(&pages);
    let (sections, section_warnings) = SectionExtractor::new(doc_title.as_str()).extract(&toc, &pages);
    warnings.extend(section_warnings);

    tracing::info!(
        toc = toc.len(),
        sections = sections.len(),
        warnings = warnings.len(),
        "parse pipeline finished"
    );

    Ok(DocumentExtract {
        doc_title,
        page_count,
        toc,
        sections,
        warnings,
    })
}

/// Convenience wrapper: read a PDF from disk and parse it.
pub fn parse_path(
    path: &Path,
    reader: &dyn PageTextReader,
    options: &ParseOptions,
) -> Result<DocumentExtract, PdsectError> {
    let pdf_bytes = std::fs::read(path)?;
    parse_document(&pdf_bytes, reader, options)
}

/// Counts and per-level distribution for a parsed document.
pub fn stats(toc: &[TocEntry], sections: &[Section]) -> ExtractStats {
    let mut level_distribution: BTreeMap<usize, usize> = BTreeMap::new();
    for entry in toc {
        *level_distribution.entry(entry.level).or_insert(0) += 1;
    }
    ExtractStats {
        toc_entries: toc.len(),
        sections: sections.len(),
        level_distribution,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_counts_levels() {
        let toc = vec![
            TocEntry {
                doc_title: "Doc".into(),
                section_id: "1".into(),
                title: "Intro".into(),
                page: 1,
                level: 1,
                parent_id: None,
                full_path: "1 Intro".into(),
                tags: None,
            },
            TocEntry {
                doc_title: "Doc".into(),
                section_id: "1.1".into(),
                title: "Scope".into(),
                page: 1,
                level: 2,
                parent_id: Some("1".into()),
                full_path: "1.1 Scope".into(),
                tags: None,
            },
        ];
        let s = stats(&toc, &[]);
        assert_eq!(s.toc_entries, 2);
        assert_eq!(s.sections, 0);
        assert_eq!(s.level_distribution.get(&1), Some(&1));
        assert_eq!(s.level_distribution.get(&2), Some(&1));
    }
}
