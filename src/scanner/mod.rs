//! Scanning module for the counter.
//!
//! This module contains the scanner that walks the source text and
//! collects declaration-name matches. It handles:
//!
//! - Building the scan pattern from a declaration keyword
//! - Picking a keyword from a file extension
//! - Single-pass, non-overlapping matching over the full text
//! - Match position tracking

pub mod pattern;
pub mod scanner;
