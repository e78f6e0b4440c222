use crate::error::PdsectError;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Write records as JSON Lines: one compact UTF-8 JSON object per line.
pub fn write_jsonl<T: Serialize>(records: &[T], path: &Path) -> Result<(), PdsectError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = std::fs::File::create(path)?;
    let mut writer = std::io::BufWriter::new(file);
    write_jsonl_to(records, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Serialize records line-by-line into any writer.
pub fn write_jsonl_to<T: Serialize, W: Write>(
    records: &[T],
    writer: &mut W,
) -> Result<(), PdsectError> {
    for record in records {
        let line = serde_json::to_string(record)?;
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TocEntry;

    fn entry(id: &str, level: usize) -> TocEntry {
        TocEntry {
            doc_title: "Doc".into(),
            section_id: id.into(),
            title: "Intro".into(),
            page: 1,
            level,
            parent_id: None,
            full_path: format!("{} Intro", id),
            tags: None,
        }
    }

    #[test]
    fn one_newline_terminated_record_per_item() {
        let records = vec![entry("1", 1), entry("2", 1)];
        let mut buf = Vec::new();
        write_jsonl_to(&records, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.matches('\n').count(), 2);
        assert!(text.ends_with('\n'));
        for line in text.lines() {
            let parsed: TocEntry = serde_json::from_str(line).unwrap();
            assert_eq!(parsed.title, "Intro");
        }
    }

    #[test]
    fn writes_file_and_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/toc.jsonl");
        write_jsonl(&[entry("1", 1)], &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 1);
    }
}
