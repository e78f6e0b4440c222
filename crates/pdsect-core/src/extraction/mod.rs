pub mod pdftotext;

use crate::error::PdsectError;

/// Text content of a single PDF page, split into raw lines.
#[derive(Debug, Clone)]
pub struct PageContent {
    /// 1-based page number.
    pub page_number: usize,
    pub lines: Vec<String>,
}

/// Trait for PDF text extraction backends.
///
/// The only blocking step of the pipeline: everything downstream operates
/// on the materialized page list this returns.
pub trait PageTextReader: Send + Sync {
    /// Extract text from PDF bytes, one PageContent per page.
    fn read_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, PdsectError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Guess a document title from the first non-empty line of the first page.
pub fn guess_title(pages: &[PageContent]) -> Option<String> {
    pages
        .first()?
        .lines
        .iter()
        .map(|l| l.trim())
        .find(|l| !l.is_empty())
        .map(|l| l.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_title_skips_blank_lines() {
        let pages = vec![PageContent {
            page_number: 1,
            lines: vec![
                "".into(),
                "   ".into(),
                "  USB Power Delivery Specification  ".into(),
                "Revision 3.1".into(),
            ],
        }];
        assert_eq!(
            guess_title(&pages).as_deref(),
            Some("USB Power Delivery Specification")
        );
    }

    #[test]
    fn guess_title_empty_document() {
        assert_eq!(guess_title(&[]), None);
    }
}
