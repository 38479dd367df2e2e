//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use std::path::PathBuf;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::ResourceNotFound {
            path: PathBuf::from("missing.kt"),
        },
        PathBuf::from("missing.kt"),
    );

    assert_eq!(error.get_error_name(), "ResourceNotFound");
}

#[test]
fn test_error_path() {
    let error = Error::new(
        ErrorImpl::InvalidEncoding {
            path: PathBuf::from("blob.bin"),
        },
        PathBuf::from("blob.bin"),
    );

    assert_eq!(error.get_path(), &PathBuf::from("blob.bin"));
}

#[test]
fn test_resource_not_found_error() {
    let error = Error::new(
        ErrorImpl::ResourceNotFound {
            path: PathBuf::from("nope/nothing.kt"),
        },
        PathBuf::from("nope/nothing.kt"),
    );

    assert_eq!(error.get_error_name(), "ResourceNotFound");
    assert!(error.to_string().contains("resource not found"));
}

#[test]
fn test_invalid_encoding_error() {
    let error = Error::new(
        ErrorImpl::InvalidEncoding {
            path: PathBuf::from("image.png"),
        },
        PathBuf::from("image.png"),
    );

    assert_eq!(error.get_error_name(), "InvalidEncoding");
    assert!(error.to_string().contains("invalid encoding"));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::ResourceNotFound {
            path: PathBuf::from("missing.kt"),
        },
        PathBuf::from("missing.kt"),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(suggestion) => assert!(suggestion.contains("missing.kt")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
