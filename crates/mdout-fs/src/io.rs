//! File-backed sink with exclusive locking

use crate::{Error, Result, TextSink};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// How an existing output file is treated when a sink opens it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WriteMode {
    /// Discard existing contents.
    #[default]
    Truncate,
    /// Keep existing contents and write after them.
    Append,
}

/// Options controlling how a [`FileSink`] acquires its file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SinkOptions {
    pub mode: WriteMode,
    /// Create missing parent directories before opening.
    pub create_parent_dirs: bool,
    /// Hold an exclusive advisory lock for the lifetime of the sink.
    pub lock: bool,
}

impl Default for SinkOptions {
    fn default() -> Self {
        Self {
            mode: WriteMode::Truncate,
            create_parent_dirs: true,
            lock: true,
        }
    }
}

impl SinkOptions {
    /// Default options with the given write mode.
    pub fn with_mode(mode: WriteMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }
}

/// Text sink writing to a file on disk.
///
/// The file is opened once and owned until [`TextSink::close`]. Writes are
/// buffered; closing flushes, syncs and unlocks the file.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
    locked: bool,
}

impl FileSink {
    /// Open `path` for writing according to `options`.
    pub fn open(path: impl AsRef<Path>, options: &SinkOptions) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if options.create_parent_dirs
            && let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty())
        {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }

        // Truncation is deferred until the lock is held so a failed
        // acquisition never clobbers another session's output.
        let mut open_options = OpenOptions::new();
        open_options.create(true);
        match options.mode {
            WriteMode::Truncate => open_options.write(true),
            WriteMode::Append => open_options.append(true),
        };

        let file = open_options
            .open(&path)
            .map_err(|e| Error::io(&path, e))?;

        if options.lock {
            file.try_lock_exclusive()
                .map_err(|_| Error::LockFailed { path: path.clone() })?;
        }

        if options.mode == WriteMode::Truncate {
            file.set_len(0).map_err(|e| Error::io(&path, e))?;
        }

        debug!(path = %path.display(), mode = ?options.mode, lock = options.lock, "Opened file sink");

        Ok(Self {
            path,
            writer: Some(BufWriter::new(file)),
            locked: options.lock,
        })
    }

    /// Path of the underlying file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TextSink for FileSink {
    fn append(&mut self, text: &str) -> Result<()> {
        let writer = self.writer.as_mut().ok_or(Error::Closed)?;
        writer
            .write_all(text.as_bytes())
            .map_err(|e| Error::io(&self.path, e))?;
        trace!(bytes = text.len(), "Appended to file sink");
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        let Some(writer) = self.writer.take() else {
            return Ok(());
        };

        // into_inner flushes the buffer and reports a failed flush
        let file = writer
            .into_inner()
            .map_err(|e| Error::io(&self.path, e.into_error()))?;
        file.sync_all().map_err(|e| Error::io(&self.path, e))?;

        if self.locked {
            FileExt::unlock(&file).map_err(|_| Error::LockFailed {
                path: self.path.clone(),
            })?;
        }

        debug!(path = %self.path.display(), "Closed file sink");
        Ok(())
    }

    fn is_closed(&self) -> bool {
        self.writer.is_none()
    }
}
