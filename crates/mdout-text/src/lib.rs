//! Markdown text composition for markdown-out
//!
//! Pure, allocation-only transformations: wrap text in inline style markers,
//! prefix it with block format markers, indent list items and normalize
//! line endings. Nothing here performs I/O.

pub mod catalog;
pub mod compose;
pub mod error;
pub mod options;

pub use compose::{
    format, indent, normalize, numbered_list_item, ordered_list_marker, style, style_and_format,
};
pub use error::{Error, Result};
pub use options::{FormatOption, StyleOption};
