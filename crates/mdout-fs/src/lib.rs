//! Output sinks for markdown-out
//!
//! Provides the append-only text sink capability, a locked file-backed sink,
//! an in-memory sink, and format-agnostic config loading.

pub mod config;
pub mod error;
pub mod io;
pub mod sink;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use io::{FileSink, SinkOptions, WriteMode};
pub use sink::{MemorySink, TextSink};
