use std::path::Path;

use super::ReadError;

/// Extract the text layer of a digital PDF using the pdf-extract crate.
///
/// Pages are concatenated in document order; a page without a text layer
/// contributes nothing rather than failing the read.
pub fn read_pdf_text(path: &Path) -> Result<String, ReadError> {
    let bytes = std::fs::read(path).map_err(|source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes).map_err(|e| {
        ReadError::PdfParsing {
            path: path.to_path_buf(),
            message: e.to_string(),
        }
    })?;

    tracing::debug!(
        path = %path.display(),
        pages = pages.len(),
        "extracted PDF text layer"
    );

    Ok(pages.concat())
}
