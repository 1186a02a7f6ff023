//! Error types for mdout-writer

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Document writer has already been released")]
    ResourceReleased,

    #[error("Sink error: {0}")]
    Sink(#[from] mdout_fs::Error),

    #[error("Text error: {0}")]
    Text(#[from] mdout_text::Error),
}
