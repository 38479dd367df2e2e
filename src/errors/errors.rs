use std::fmt::Display;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    path: PathBuf,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, path: PathBuf) -> Self {
        Error {
            internal_error: error_impl,
            path,
        }
    }

    pub fn get_path(&self) -> &PathBuf {
        &self.path
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::ResourceNotFound { .. } => "ResourceNotFound",
            ErrorImpl::InvalidEncoding { .. } => "InvalidEncoding",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::ResourceNotFound { path } => ErrorTip::Suggestion(format!(
                "`{}` does not resolve to a readable file, is the path correct?",
                path.to_string_lossy()
            )),
            ErrorImpl::InvalidEncoding { path } => ErrorTip::Suggestion(format!(
                "`{}` is not valid UTF-8 text, is it a binary file?",
                path.to_string_lossy()
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("resource not found: {path:?}")]
    ResourceNotFound { path: PathBuf },
    #[error("invalid encoding: {path:?}")]
    InvalidEncoding { path: PathBuf },
}
