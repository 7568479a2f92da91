//! Per-page text retrieval from PDF files via `pdf-extract`.

use std::path::Path;

use tracing::info;

use crate::error::ExtractError;

/// Extract per-page text fragments in page order.
///
/// `pdf-extract` returns the whole document as one string with form feeds
/// between pages; pages with no retrievable text contribute empty fragments.
pub fn extract_pages(path: &Path) -> Result<Vec<String>, ExtractError> {
    let whole = pdf_extract::extract_text(path).map_err(|source| ExtractError::Pdf {
        path: path.to_path_buf(),
        message: source.to_string(),
    })?;
    let pages: Vec<String> = whole.split('\x0C').map(str::to_string).collect();
    info!(path = %path.display(), pages = pages.len(), "extracted pdf text");
    Ok(pages)
}
