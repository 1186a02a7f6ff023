//! The append-only text sink capability

use crate::{Error, Result};
use std::sync::{Arc, Mutex, MutexGuard};

/// An append-only text destination.
///
/// A sink accepts arbitrary text and is released with [`TextSink::close`].
/// Closing is idempotent; appending to a closed sink fails with
/// [`Error::Closed`].
pub trait TextSink {
    /// Append text at the current end of the output.
    fn append(&mut self, text: &str) -> Result<()>;

    /// Release the underlying resource. Calling it again is a no-op.
    fn close(&mut self) -> Result<()>;

    /// Whether [`TextSink::close`] has already run.
    fn is_closed(&self) -> bool;
}

impl<S: TextSink + ?Sized> TextSink for Box<S> {
    fn append(&mut self, text: &str) -> Result<()> {
        (**self).append(text)
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }

    fn is_closed(&self) -> bool {
        (**self).is_closed()
    }
}

/// In-memory sink backed by a shared buffer.
///
/// Clones share the same buffer, so one handle can be given to a writer
/// while another reads the output back. The closed flag belongs to each
/// handle.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<String>>,
    closed: bool,
}

impl MemorySink {
    /// Create an empty in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an in-memory sink seeded with existing output.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            buffer: Arc::new(Mutex::new(contents.into())),
            closed: false,
        }
    }

    /// Snapshot of everything appended so far.
    pub fn contents(&self) -> String {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, String> {
        // A panic while holding the lock cannot leave a String half-written.
        self.buffer.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl TextSink for MemorySink {
    fn append(&mut self, text: &str) -> Result<()> {
        if self.closed {
            return Err(Error::Closed);
        }
        self.lock().push_str(text);
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.closed = true;
        Ok(())
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}
