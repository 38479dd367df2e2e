//! Source text acquisition.
//!
//! This module reads the input file into memory before any scanning
//! happens. It handles:
//!
//! - Reading the raw bytes of the named file
//! - Decoding them as UTF-8 text
//! - Mapping failures onto the two error kinds

pub mod source;
