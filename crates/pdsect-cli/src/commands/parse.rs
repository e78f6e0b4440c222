use pdsect_core::error::PdsectError;
use pdsect_core::{records, validate};
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    title: Option<String>,
    output_format: &str,
    out_dir: Option<PathBuf>,
) -> Result<(), PdsectError> {
    let result = super::parse_file(&input_file, title)?;

    match out_dir {
        Some(dir) => {
            let toc_path = dir.join("toc.jsonl");
            let sections_path = dir.join("sections.jsonl");
            let meta_path = dir.join("metadata.jsonl");

            records::write_jsonl(&result.toc, &toc_path)?;
            records::write_jsonl(&result.sections, &sections_path)?;

            let rows = validate::compare(&result.toc, &result.sections);
            let summary = validate::summarize(&rows);
            let metadata = serde_json::json!({
                "doc_title": result.doc_title,
                "source": input_file.display().to_string(),
                "page_count": result.page_count,
                "toc_entries": result.toc.len(),
                "sections": result.sections.len(),
                "validation": summary,
            });
            records::write_jsonl(&[metadata], &meta_path)?;

            eprintln!(
                "Parsed '{}': {} TOC entries, {} sections -> {}",
                result.doc_title,
                result.toc.len(),
                result.sections.len(),
                dir.display()
            );
            for w in &result.warnings {
                eprintln!("  warning: {}", w.reason);
            }
        }
        None => match output_format {
            "json" => output::json::print(&result)?,
            _ => println!("{}", output::table::format_document(&result)),
        },
    }

    Ok(())
}
