use std::fs;
use std::path::Path;

use crate::errors::errors::{Error, ErrorImpl};

// Reads the file to completion, then decodes. The handle is released
// before the caller sees the bytes, on every exit path.
pub fn read_source(path: &Path) -> Result<String, Error> {
    let bytes = fs::read(path).map_err(|_| {
        Error::new(
            ErrorImpl::ResourceNotFound {
                path: path.to_path_buf(),
            },
            path.to_path_buf(),
        )
    })?;

    String::from_utf8(bytes).map_err(|_| {
        Error::new(
            ErrorImpl::InvalidEncoding {
                path: path.to_path_buf(),
            },
            path.to_path_buf(),
        )
    })
}
