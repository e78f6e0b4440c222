use crate::extraction::PageContent;
use crate::model::{ExtractionWarning, Section, TocEntry};
use once_cell::sync::Lazy;
use regex::Regex;

static TABLE_CAPTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Table\s+\S+\s+\S").expect("invalid table caption pattern"));

static FIGURE_CAPTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Figure\s+\S+\s+\S").expect("invalid figure caption pattern"));

/// One line of the flattened document text stream.
struct Line<'a> {
    page: usize,
    text: &'a str,
}

/// Slices the document body into per-section content bounded by TOC entries.
pub struct SectionExtractor {
    doc_title: String,
}

impl SectionExtractor {
    pub fn new(doc_title: impl Into<String>) -> Self {
        SectionExtractor {
            doc_title: doc_title.into(),
        }
    }

    /// Produce one Section per TOC entry, in TOC order.
    ///
    /// Heading occurrences are located with a cursor that only moves
    /// forward: the search for entry i+1 never looks before the offset
    /// found for entry i. This keeps the whole pass O(n) and stops a
    /// repeated heading later in the document from matching out of order.
    /// An unlocatable heading yields empty content plus a warning, never
    /// a failure.
    pub fn extract(
        &self,
        toc: &[TocEntry],
        pages: &[PageContent],
    ) -> (Vec<Section>, Vec<ExtractionWarning>) {
        let lines: Vec<Line> = pages
            .iter()
            .flat_map(|p| {
                p.lines.iter().map(|l| Line {
                    page: p.page_number,
                    text: l.as_str(),
                })
            })
            .collect();

        let mut warnings: Vec<ExtractionWarning> = Vec::new();

        // Pass 1: locate each entry's heading line, monotonically.
        let mut offsets: Vec<Option<usize>> = Vec::with_capacity(toc.len());
        let mut cursor = 0usize;
        for entry in toc {
            let found = locate_heading(&lines, entry, cursor);
            if let Some(idx) = found {
                cursor = idx + 1;
            } else {
                warnings.push(ExtractionWarning::new(
                    Some(entry.section_id.as_str()),
                    format!(
                        "heading '{}' not located in body text at or after page {}",
                        entry.full_path, entry.page
                    ),
                ));
            }
            offsets.push(found);
        }

        // Pass 2: slice content between consecutive located headings.
        let mut sections: Vec<Section> = Vec::with_capacity(toc.len());
        for (i, entry) in toc.iter().enumerate() {
            let content = match offsets[i] {
                Some(start) => {
                    let end = offsets[i + 1..]
                        .iter()
                        .find_map(|o| *o)
                        .unwrap_or(lines.len());
                    join_content(&lines[start + 1..end])
                }
                None => String::new(),
            };

            let tables = collect_captions(&content, &TABLE_CAPTION_RE);
            let figures = collect_captions(&content, &FIGURE_CAPTION_RE);

            sections.push(Section {
                doc_title: self.doc_title.clone(),
                section_id: entry.section_id.clone(),
                title: entry.title.clone(),
                page: entry.page,
                content,
                tables,
                figures,
            });
        }

        tracing::info!(
            sections = sections.len(),
            unlocated = warnings.len(),
            "sections extracted"
        );

        (sections, warnings)
    }
}

/// Find the first line at or after `cursor` that reads as this entry's
/// heading, preferring lines on or after the entry's recorded page.
fn locate_heading(lines: &[Line], entry: &TocEntry, cursor: usize) -> Option<usize> {
    let page_start = lines[cursor..]
        .iter()
        .position(|l| l.page >= entry.page)
        .map(|p| cursor + p);

    // First try from the recorded page; if the page mapping is off (ToC
    // page labels vs physical pages), retry from the cursor alone.
    if let Some(start) = page_start {
        if let Some(idx) = scan_for_heading(lines, entry, start) {
            return Some(idx);
        }
    }
    scan_for_heading(lines, entry, cursor)
}

fn scan_for_heading(lines: &[Line], entry: &TocEntry, start: usize) -> Option<usize> {
    lines[start..]
        .iter()
        .position(|l| is_heading_line(l.text, entry))
        .map(|p| start + p)
}

/// A body line counts as this entry's heading when it starts with the
/// section id (as a full dotted token, so "1.2" does not match "1.2.1"
/// or "1.22") and mentions the first word of the title.
fn is_heading_line(line: &str, entry: &TocEntry) -> bool {
    let trimmed = line.trim();
    let rest = match trimmed.strip_prefix(entry.section_id.as_str()) {
        Some(rest) => rest,
        None => return false,
    };
    let rest = rest.strip_prefix('.').unwrap_or(rest);
    if !rest.starts_with(char::is_whitespace) {
        return false;
    }
    let first_word = match entry.title.split_whitespace().next() {
        Some(w) => w.to_lowercase(),
        None => return false,
    };
    rest.to_lowercase().contains(&first_word)
}

fn join_content(lines: &[Line]) -> String {
    let joined: Vec<&str> = lines.iter().map(|l| l.text.trim_end()).collect();
    joined.join("\n").trim().to_string()
}

/// Best-effort caption pickup; None means none found, not an error.
fn collect_captions(content: &str, pattern: &Regex) -> Option<Vec<String>> {
    let captions: Vec<String> = content
        .lines()
        .map(|l| l.trim())
        .filter(|l| pattern.is_match(l))
        .map(|l| l.to_string())
        .collect();
    if captions.is_empty() {
        None
    } else {
        Some(captions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toc::{NumberingScheme, TocExtractor};

    fn page(number: usize, lines: &[&str]) -> PageContent {
        PageContent {
            page_number: number,
            lines: lines.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn toc_for(pages: &[PageContent]) -> Vec<TocEntry> {
        TocExtractor::new("Doc", NumberingScheme::NumericDotted)
            .extract(pages)
            .0
    }

    #[test]
    fn content_spans_between_headings() {
        let pages = vec![
            page(1, &["1 Introduction", "Intro body line.", "More intro."]),
            page(2, &["2 Power Rules", "Rules body."]),
        ];
        let toc = toc_for(&pages);
        let (sections, warnings) = SectionExtractor::new("Doc").extract(&toc, &pages);

        assert!(warnings.is_empty());
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].content, "Intro body line.\nMore intro.");
        assert_eq!(sections[1].content, "Rules body.");
    }

    #[test]
    fn last_section_runs_to_document_end() {
        let pages = vec![page(1, &["1 Introduction", "Only body.", "Last line."])];
        let toc = toc_for(&pages);
        let (sections, _) = SectionExtractor::new("Doc").extract(&toc, &pages);
        assert_eq!(sections[0].content, "Only body.\nLast line.");
    }

    #[test]
    fn unlocatable_heading_yields_empty_content() {
        let pages = vec![
            page(1, &["1 Introduction", "Intro body."]),
            page(3, &["2 Power Rules", "Rules body."]),
        ];
        let mut toc = toc_for(&pages);
        // Simulate a heading the extractor saw structurally but whose text
        // was re-wrapped by PDF extraction.
        toc.insert(
            1,
            TocEntry {
                doc_title: "Doc".into(),
                section_id: "1.1".into(),
                title: "Vanished".into(),
                page: 2,
                level: 2,
                parent_id: Some("1".into()),
                full_path: "1.1 Vanished".into(),
                tags: None,
            },
        );

        let (sections, warnings) = SectionExtractor::new("Doc").extract(&toc, &pages);
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[1].content, "");
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].section_id.as_deref(), Some("1.1"));
        // Neighbors still bound each other correctly.
        assert_eq!(sections[0].content, "Intro body.");
        assert_eq!(sections[2].content, "Rules body.");
    }

    #[test]
    fn repeated_heading_text_matches_in_order() {
        // "1 Introduction" reappears verbatim later (a quotation); the
        // monotonic cursor must not rewind to it when locating entry 2.
        let pages = vec![page(
            1,
            &[
                "1 Introduction",
                "Intro body.",
                "2 Power Rules",
                "See 1 Introduction above.",
                "Rules body.",
            ],
        )];
        let toc = toc_for(&pages);
        let (sections, _) = SectionExtractor::new("Doc").extract(&toc, &pages);
        assert_eq!(sections[0].content, "Intro body.");
        assert_eq!(
            sections[1].content,
            "See 1 Introduction above.\nRules body."
        );
    }

    #[test]
    fn section_id_must_match_as_full_token() {
        let entry = TocEntry {
            doc_title: "Doc".into(),
            section_id: "1.2".into(),
            title: "Overview".into(),
            page: 1,
            level: 2,
            parent_id: Some("1".into()),
            full_path: "1.2 Overview".into(),
            tags: None,
        };
        assert!(is_heading_line("1.2 Overview", &entry));
        assert!(is_heading_line("  1.2. Overview of Things", &entry));
        assert!(!is_heading_line("1.2.1 Overview Details", &entry));
        assert!(!is_heading_line("1.22 Overview", &entry));
        assert!(!is_heading_line("1.2 Something else", &entry));
    }

    #[test]
    fn captions_collected_from_section_body() {
        let pages = vec![page(
            1,
            &[
                "1 Introduction",
                "Body text.",
                "Table 1-1 Message Fields",
                "Figure 1-2 State Machine",
            ],
        )];
        let toc = toc_for(&pages);
        let (sections, _) = SectionExtractor::new("Doc").extract(&toc, &pages);
        assert_eq!(
            sections[0].tables.as_deref(),
            Some(&["Table 1-1 Message Fields".to_string()][..])
        );
        assert_eq!(
            sections[0].figures.as_deref(),
            Some(&["Figure 1-2 State Machine".to_string()][..])
        );
    }

    #[test]
    fn empty_toc_gives_no_sections() {
        let pages = vec![page(1, &["No headings here."])];
        let (sections, warnings) = SectionExtractor::new("Doc").extract(&[], &pages);
        assert!(sections.is_empty());
        assert!(warnings.is_empty());
    }
}
