use pdsect_core::model::{DocumentExtract, ExtractStats, SearchHit};
use std::fmt::Write;

/// Render the parse result as an indented TOC tree with a summary line.
pub fn format_document(result: &DocumentExtract) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== {} ===", result.doc_title);
    let _ = writeln!(
        out,
        "{} pages, {} TOC entries, {} sections\n",
        result.page_count,
        result.toc.len(),
        result.sections.len()
    );

    for entry in &result.toc {
        let indent = "  ".repeat(entry.level.saturating_sub(1));
        let _ = writeln!(
            out,
            "{}{} {}  (p. {})",
            indent, entry.section_id, entry.title, entry.page
        );
    }

    if !result.warnings.is_empty() {
        let _ = writeln!(out, "\n{} warning(s):", result.warnings.len());
        for w in &result.warnings {
            let _ = writeln!(out, "  {}", w.reason);
        }
    }

    out.trim_end().to_string()
}

pub fn format_hits(query: &str, hits: &[SearchHit]) -> String {
    if hits.is_empty() {
        return format!("No sections match '{query}'");
    }

    let mut out = String::new();
    let _ = writeln!(out, "{} result(s) for '{}':\n", hits.len(), query);
    for hit in hits {
        let _ = writeln!(out, "{} {}  (p. {})", hit.section_id, hit.title, hit.page);
        if !hit.snippet.is_empty() {
            let _ = writeln!(out, "    {}", hit.snippet.replace('\n', " "));
        }
    }
    out.trim_end().to_string()
}

pub fn format_stats(doc_title: &str, stats: &ExtractStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== {doc_title} ===");
    let _ = writeln!(out, "TOC entries: {}", stats.toc_entries);
    let _ = writeln!(out, "Sections:    {}", stats.sections);
    let _ = writeln!(out, "Levels:");
    for (level, count) in &stats.level_distribution {
        let _ = writeln!(out, "  level {level}: {count}");
    }
    out.trim_end().to_string()
}
