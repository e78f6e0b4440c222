use crate::error::PdsectError;
use crate::extraction::{PageContent, PageTextReader};
use std::io::Write;
use std::process::Command;

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// Uses `pdftotext -layout` so that headings and table rows keep their
/// whitespace alignment.
pub struct PdftotextReader;

impl PdftotextReader {
    pub fn new() -> Self {
        PdftotextReader
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextReader {
    fn default() -> Self {
        Self::new()
    }
}

impl PageTextReader for PdftotextReader {
    fn read_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, PdsectError> {
        // Write PDF bytes to a temp file; removed on every exit path when
        // the handle drops.
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| PdsectError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| PdsectError::Extraction(e.to_string()))?;

        let output = Command::new("pdftotext")
            .arg("-layout")
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    PdsectError::PdftotextNotFound
                } else {
                    PdsectError::Extraction(format!("pdftotext failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(PdsectError::PdftotextFailed { code, stderr });
        }

        let text = String::from_utf8_lossy(&output.stdout);

        // pdftotext separates pages with a form feed.
        let pages: Vec<PageContent> = text
            .split('\x0c')
            .enumerate()
            .map(|(i, page_text)| PageContent {
                page_number: i + 1,
                lines: page_text.lines().map(|l| l.to_string()).collect(),
            })
            .filter(|p| !p.lines.is_empty() || p.page_number == 1)
            .collect();

        tracing::debug!(
            pages = pages.len(),
            backend = self.backend_name(),
            "extracted page text"
        );

        Ok(pages)
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}
