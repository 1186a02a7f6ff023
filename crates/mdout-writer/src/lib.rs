//! Markdown document writer for markdown-out
//!
//! A [`DocumentWriter`] owns one text sink and emits styled, formatted and
//! normalized Markdown lines, paragraphs and list items into it.

pub mod error;
pub mod logging;
pub mod writer;

pub use error::{Error, Result};
pub use writer::DocumentWriter;

pub use mdout_fs::{FileSink, MemorySink, SinkOptions, TextSink, WriteMode};
pub use mdout_text::{FormatOption, StyleOption};
