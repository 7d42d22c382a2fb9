use thiserror::Error;

/// Failures fetching pages from a [`crate::PageSource`].
///
/// The core policy has no retry or skip-page semantics, so these surface from
/// [`crate::Driver::tick`] as fatal conditions for the surrounding viewer.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("page {0} is out of range")]
    PageOutOfRange(usize),
    #[error("archive entry {0} is missing")]
    MissingEntry(usize),
    #[error("archive is corrupt: {0}")]
    Corrupt(String),
    #[error("failed to read archive entry {index}")]
    Read {
        index: usize,
        #[source]
        source: std::io::Error,
    },
}

/// A drive-loop tick failure: either the page source or the render sink.
#[derive(Debug, Error)]
pub enum DriveError<E> {
    #[error("page source error")]
    Source(#[from] SourceError),
    #[error("render sink error: {0}")]
    Sink(E),
}
