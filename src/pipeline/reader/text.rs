use std::io::ErrorKind;
use std::path::Path;

use super::ReadError;

/// Read a UTF-8 plain-text document.
pub fn read_plain_text(path: &Path) -> Result<String, ReadError> {
    std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::InvalidData {
            ReadError::Encoding(path.to_path_buf())
        } else {
            ReadError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}
