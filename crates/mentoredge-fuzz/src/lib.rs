//! Fuzzing library for mentoredge.
//!
//! Fuzz targets cover parsing of untrusted input: search responses from the
//! Semantic Scholar API, and researcher profiles or tool arguments supplied
//! by users.
//!
//! # Usage
//!
//! ```bash
//! cd crates/mentoredge-fuzz
//! cargo +nightly fuzz run fuzz_search_response -- -max_total_time=60
//! ```

pub use mentoredge::models;
