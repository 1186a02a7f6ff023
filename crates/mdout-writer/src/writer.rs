//! Document writer session bound to a single sink

use crate::{Error, Result};
use mdout_fs::{FileSink, SinkOptions, TextSink, WriteMode};
use mdout_text::{FormatOption, StyleOption, catalog, compose};
use std::fmt::Display;
use std::path::Path;
use tracing::{debug, warn};

/// Writes Markdown text into a sink it exclusively owns.
///
/// Every emit operation styles, then formats, then normalizes its value
/// before appending it (plus its terminator) to the sink. Once the session
/// is released, every emit operation fails with [`Error::ResourceReleased`].
/// Dropping a live session releases it.
///
/// # Examples
///
/// ```
/// use mdout_writer::{DocumentWriter, FormatOption, MemorySink, StyleOption};
///
/// let sink = MemorySink::new();
/// let mut doc = DocumentWriter::new(sink.clone());
/// doc.write_line("Title", StyleOption::None, FormatOption::Heading1)?;
/// doc.write_unordered_list_item("item", 1, StyleOption::None)?;
/// doc.release()?;
///
/// assert_eq!(sink.contents(), "# Title\r\n\r\n     - item\r\n\r\n");
/// # Ok::<(), mdout_writer::Error>(())
/// ```
#[derive(Debug)]
pub struct DocumentWriter<S: TextSink = FileSink> {
    sink: Option<S>,
}

impl DocumentWriter<FileSink> {
    /// Open `path` for writing, discarding any existing contents.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        Self::open(path, WriteMode::Truncate)
    }

    /// Open `path` for writing after its existing contents.
    pub fn append(path: impl AsRef<Path>) -> Result<Self> {
        Self::open(path, WriteMode::Append)
    }

    pub fn open(path: impl AsRef<Path>, mode: WriteMode) -> Result<Self> {
        Self::open_with(path, &SinkOptions::with_mode(mode))
    }

    pub fn open_with(path: impl AsRef<Path>, options: &SinkOptions) -> Result<Self> {
        Ok(Self::new(FileSink::open(path, options)?))
    }
}

impl<S: TextSink> DocumentWriter<S> {
    /// Start a session over an already acquired sink.
    pub fn new(sink: S) -> Self {
        Self { sink: Some(sink) }
    }

    /// Write `value` with no terminator.
    pub fn write(
        &mut self,
        value: impl Display,
        style: StyleOption,
        format: FormatOption,
    ) -> Result<()> {
        self.emit(&compose::style_and_format(value, style, format), "")
    }

    /// Write `value` followed by a paragraph break.
    pub fn write_line(
        &mut self,
        value: impl Display,
        style: StyleOption,
        format: FormatOption,
    ) -> Result<()> {
        self.emit(
            &compose::style_and_format(value, style, format),
            catalog::PARAGRAPH_BREAK,
        )
    }

    /// Write `value` followed by a hard line break, staying in the same
    /// paragraph.
    pub fn write_line_single(
        &mut self,
        value: impl Display,
        style: StyleOption,
        format: FormatOption,
    ) -> Result<()> {
        self.emit(
            &compose::style_and_format(value, style, format),
            catalog::LINE_BREAK,
        )
    }

    /// Write `value` as a heading of `level` (1 through 6) followed by a
    /// paragraph break.
    pub fn write_heading(&mut self, value: impl Display, level: u8, style: StyleOption) -> Result<()> {
        let format = FormatOption::heading(level)?;
        self.write_line(value, style, format)
    }

    /// Write `value` as an unordered list item.
    ///
    /// `indent_level` 0 adds no indent, 1 nests the item once, and so on.
    /// Negative levels are ignored.
    pub fn write_unordered_list_item(
        &mut self,
        value: impl Display,
        indent_level: i32,
        style: StyleOption,
    ) -> Result<()> {
        let text = compose::style_and_format(value, style, FormatOption::UnorderedListItem);
        self.emit(&compose::indent(&text, indent_level), catalog::PARAGRAPH_BREAK)
    }

    /// Write `value` as an ordered list item numbered `item_number`.
    ///
    /// The number only changes the raw text; renderers number the list
    /// themselves. Numbers are unsigned since Markdown has no negative
    /// ordinals. Indentation follows
    /// [`DocumentWriter::write_unordered_list_item`].
    pub fn write_ordered_list_item(
        &mut self,
        value: impl Display,
        item_number: u32,
        indent_level: i32,
        style: StyleOption,
    ) -> Result<()> {
        let text = compose::numbered_list_item(value, item_number, style);
        self.emit(&compose::indent(&text, indent_level), catalog::PARAGRAPH_BREAK)
    }

    /// Release the sink. Releasing an already released session is a no-op.
    ///
    /// The session counts as released even when closing the sink fails.
    pub fn release(&mut self) -> Result<()> {
        let Some(mut sink) = self.sink.take() else {
            return Ok(());
        };
        sink.close()?;
        debug!("Released document writer");
        Ok(())
    }

    /// Alias for [`DocumentWriter::release`].
    pub fn close(&mut self) -> Result<()> {
        self.release()
    }

    pub fn is_released(&self) -> bool {
        self.sink.is_none()
    }

    fn emit(&mut self, text: &str, terminator: &str) -> Result<()> {
        let sink = self.sink.as_mut().ok_or(Error::ResourceReleased)?;

        let mut out = compose::normalize(text);
        out.push_str(terminator);
        sink.append(&out)?;
        Ok(())
    }
}

impl<S: TextSink> Drop for DocumentWriter<S> {
    fn drop(&mut self) {
        if let Some(mut sink) = self.sink.take()
            && let Err(e) = sink.close()
        {
            warn!(error = %e, "Failed to release document writer on drop");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdout_fs::MemorySink;
    use pretty_assertions::assert_eq;

    /// Sink whose operations always fail, standing in for a full disk.
    #[derive(Debug, Default)]
    struct FailingSink {
        close_calls: usize,
    }

    impl TextSink for FailingSink {
        fn append(&mut self, _text: &str) -> mdout_fs::Result<()> {
            Err(mdout_fs::Error::io(
                "full.md",
                std::io::Error::other("no space left on device"),
            ))
        }

        fn close(&mut self) -> mdout_fs::Result<()> {
            self.close_calls += 1;
            Err(mdout_fs::Error::io(
                "full.md",
                std::io::Error::other("flush failed"),
            ))
        }

        fn is_closed(&self) -> bool {
            self.close_calls > 0
        }
    }

    /// In-memory sink that accepts `remaining` appends, then fails.
    #[derive(Debug)]
    struct ExhaustedSink {
        inner: MemorySink,
        remaining: usize,
    }

    impl TextSink for ExhaustedSink {
        fn append(&mut self, text: &str) -> mdout_fs::Result<()> {
            if self.remaining == 0 {
                return Err(mdout_fs::Error::io(
                    "full.md",
                    std::io::Error::other("no space left on device"),
                ));
            }
            self.remaining -= 1;
            self.inner.append(text)
        }

        fn close(&mut self) -> mdout_fs::Result<()> {
            self.inner.close()
        }

        fn is_closed(&self) -> bool {
            self.inner.is_closed()
        }
    }

    #[test]
    fn test_sink_failure_keeps_prior_output() {
        let sink = MemorySink::new();
        let mut writer = DocumentWriter::new(ExhaustedSink {
            inner: sink.clone(),
            remaining: 1,
        });

        writer
            .write_line("ok", StyleOption::None, FormatOption::None)
            .unwrap();
        let result = writer.write_line("bad", StyleOption::Bold, FormatOption::Heading1);

        assert!(matches!(
            result,
            Err(Error::Sink(mdout_fs::Error::Io { .. }))
        ));
        assert_eq!(sink.contents(), "ok\r\n\r\n");

        // The session stays usable for release after a failed write
        assert!(!writer.is_released());
        writer.release().unwrap();
        assert_eq!(sink.contents(), "ok\r\n\r\n");
    }

    #[test]
    fn test_sink_failure_propagates() {
        let mut writer = DocumentWriter::new(FailingSink::default());

        let result = writer.write("a", StyleOption::None, FormatOption::None);

        assert!(matches!(
            result,
            Err(Error::Sink(mdout_fs::Error::Io { .. }))
        ));
        assert!(!writer.is_released());
    }

    #[test]
    fn test_failed_release_still_releases() {
        let mut writer = DocumentWriter::new(FailingSink::default());

        assert!(writer.release().is_err());
        assert!(writer.is_released());
        // Nothing left to close, so a second release succeeds
        writer.release().unwrap();
    }

    #[test]
    fn test_drop_releases_sink() {
        let sink = MemorySink::new();
        {
            let mut writer = DocumentWriter::new(sink.clone());
            writer
                .write("dropped", StyleOption::None, FormatOption::None)
                .unwrap();
        }
        assert_eq!(sink.contents(), "dropped");
    }

    #[test]
    fn test_close_alias() {
        let mut writer = DocumentWriter::new(MemorySink::new());
        writer.close().unwrap();
        assert!(writer.is_released());
        assert!(matches!(
            writer.write("x", StyleOption::None, FormatOption::None),
            Err(Error::ResourceReleased)
        ));
    }

    #[test]
    fn test_closed_sink_reports_sink_error() {
        let mut sink = MemorySink::new();
        sink.close().unwrap();
        let mut writer = DocumentWriter::new(sink);

        let result = writer.write("x", StyleOption::None, FormatOption::None);
        assert!(matches!(result, Err(Error::Sink(mdout_fs::Error::Closed))));
    }

    #[test]
    fn test_invalid_heading_level() {
        let sink = MemorySink::new();
        let mut writer = DocumentWriter::new(sink.clone());

        let result = writer.write_heading("too deep", 7, StyleOption::None);

        assert!(matches!(
            result,
            Err(Error::Text(mdout_text::Error::InvalidOption { .. }))
        ));
        assert_eq!(sink.contents(), "");
    }
}
