pub mod parse;
pub mod search;
pub mod stats;

use pdsect_core::error::PdsectError;
use pdsect_core::extraction::pdftotext::PdftotextReader;
use pdsect_core::model::DocumentExtract;
use pdsect_core::ParseOptions;
use std::path::Path;

/// Run the extraction pipeline on a PDF file with the pdftotext backend.
pub fn parse_file(
    input_file: &Path,
    title: Option<String>,
) -> Result<DocumentExtract, PdsectError> {
    let reader = PdftotextReader::new();
    let options = ParseOptions {
        doc_title: title,
        ..Default::default()
    };
    pdsect_core::parse_path(input_file, &reader, &options)
}
