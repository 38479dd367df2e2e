//! Error types and error handling for the counter.
//!
//! This module defines the error types used by the scan pipeline. It
//! includes:
//!
//! - Error structures carrying the offending file path
//! - Specific error variants for the two failure modes (missing
//!   resource, undecodable bytes)
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
