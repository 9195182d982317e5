//! Integration tests for chroma-rs crates.
//!
//! End-to-end tests that exercise the interaction between the conversion
//! crates, the projection layer, and the batch path.
