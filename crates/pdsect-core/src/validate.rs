use crate::model::{Section, TocEntry};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Presence of one section id on the TOC side vs the sections side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRow {
    pub section_id: String,
    pub in_toc: bool,
    pub in_sections: bool,
    pub status: ValidationStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ValidationStatus {
    Match,
    Mismatch,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSummary {
    pub total_ids: usize,
    pub matches: usize,
    pub mismatches: usize,
}

/// Compare TOC entries against extracted sections, one row per section id
/// seen on either side, sorted by numeric id components.
pub fn compare(toc: &[TocEntry], sections: &[Section]) -> Vec<ValidationRow> {
    let toc_ids: BTreeSet<&str> = toc.iter().map(|e| e.section_id.as_str()).collect();
    let section_ids: BTreeSet<&str> = sections.iter().map(|s| s.section_id.as_str()).collect();

    let mut all_ids: Vec<&str> = toc_ids.union(&section_ids).copied().collect();
    all_ids.sort_by_key(|id| numeric_key(id));

    all_ids
        .into_iter()
        .map(|id| {
            let in_toc = toc_ids.contains(id);
            let in_sections = section_ids.contains(id);
            ValidationRow {
                section_id: id.to_string(),
                in_toc,
                in_sections,
                status: if in_toc && in_sections {
                    ValidationStatus::Match
                } else {
                    ValidationStatus::Mismatch
                },
            }
        })
        .collect()
}

pub fn summarize(rows: &[ValidationRow]) -> ValidationSummary {
    let matches = rows
        .iter()
        .filter(|r| r.status == ValidationStatus::Match)
        .count();
    ValidationSummary {
        total_ids: rows.len(),
        matches,
        mismatches: rows.len() - matches,
    }
}

/// Sort key for dotted ids: "1.10" comes after "1.2".
fn numeric_key(id: &str) -> Vec<u64> {
    id.split('.')
        .map(|part| part.parse::<u64>().unwrap_or(0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str) -> TocEntry {
        TocEntry {
            doc_title: "Doc".into(),
            section_id: id.into(),
            title: "T".into(),
            page: 1,
            level: id.split('.').count(),
            parent_id: None,
            full_path: format!("{} T", id),
            tags: None,
        }
    }

    fn section(id: &str) -> Section {
        Section {
            doc_title: "Doc".into(),
            section_id: id.into(),
            title: "T".into(),
            page: 1,
            content: String::new(),
            tables: None,
            figures: None,
        }
    }

    #[test]
    fn one_sided_ids_are_mismatches() {
        let rows = compare(&[entry("1"), entry("2")], &[section("1"), section("2.1")]);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].status, ValidationStatus::Match);
        assert_eq!(rows[1].status, ValidationStatus::Mismatch); // "2" toc only
        assert_eq!(rows[2].status, ValidationStatus::Mismatch); // "2.1" sections only

        let summary = summarize(&rows);
        assert_eq!(summary.total_ids, 3);
        assert_eq!(summary.matches, 1);
        assert_eq!(summary.mismatches, 2);
    }

    #[test]
    fn ids_sort_numerically_not_lexically() {
        let rows = compare(
            &[entry("1.10"), entry("1.2"), entry("1.9")],
            &[],
        );
        let ids: Vec<&str> = rows.iter().map(|r| r.section_id.as_str()).collect();
        assert_eq!(ids, vec!["1.2", "1.9", "1.10"]);
    }
}
