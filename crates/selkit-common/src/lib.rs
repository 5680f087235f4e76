//! Common utilities for selkit.
//!
//! This crate provides shared infrastructure used by the selector builder
//! and the command-line front end:
//! - **Warning System** - colored, deduplicated terminal warnings
//! - **JSON** - encoding and field-by-field decoding onto a prototype value
//! - **Rect** - a plain width/height value type used by the JSON helpers

pub mod json;
pub mod rect;
pub mod warning;
