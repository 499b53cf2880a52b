pub mod pdf;
pub mod text;
pub mod types;

pub use pdf::*;
pub use text::*;
pub use types::*;

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadError {
    #[error("input document does not exist: {0}")]
    NotFound(PathBuf),

    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("PDF text extraction failed for {path}: {message}")]
    PdfParsing { path: PathBuf, message: String },

    #[error("document is not valid UTF-8: {0}")]
    Encoding(PathBuf),
}

/// Read the full text of an input document.
pub fn read_document(path: &Path, kind: DocumentKind) -> Result<String, ReadError> {
    if !path.is_file() {
        return Err(ReadError::NotFound(path.to_path_buf()));
    }

    tracing::info!(
        path = %path.display(),
        kind = kind.as_str(),
        "reading input document"
    );

    match kind {
        DocumentKind::Pdf => read_pdf_text(path),
        DocumentKind::Text => read_plain_text(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");
        let err = read_document(&path, DocumentKind::Text).unwrap_err();
        assert!(matches!(err, ReadError::NotFound(_)));
    }

    #[test]
    fn missing_pdf_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.pdf");
        let err = read_document(&path, DocumentKind::Pdf).unwrap_err();
        assert!(matches!(err, ReadError::NotFound(_)));
    }
}
