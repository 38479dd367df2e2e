//! Frequency accumulation for scanned matches.
//!
//! This module turns the scanner's match stream into a frequency table.
//! It handles:
//!
//! - Per-token occurrence counting
//! - Reproducible display ordering (descending count, ties in
//!   first-encounter order)
//! - The read → scan → count composition used by the binary

pub mod counter;
