use pagewindow::Page;

use crate::SourceError;

/// Random access to an ordered collection of pages extracted from an archive.
///
/// Pages are numbered contiguously from 1 in display order; `source_index` is
/// whatever key the backing store needs for a slice fetch. Implementations are
/// expected to be fully loaded before a drive loop starts (fetches are
/// synchronous and in-memory).
pub trait PageSource {
    /// Ordered page descriptors.
    fn pages(&self) -> &[Page];

    /// Fetches the raw bytes backing `source_index`.
    fn slice(&mut self, source_index: usize) -> Result<Vec<u8>, SourceError>;

    fn len(&self) -> usize {
        self.pages().len()
    }

    fn is_empty(&self) -> bool {
        self.pages().is_empty()
    }

    /// Looks a page up by its 1-based number.
    fn page(&self, page_number: usize) -> Option<&Page> {
        page_number
            .checked_sub(1)
            .and_then(|i| self.pages().get(i))
    }
}

/// An already-extracted page list held in memory.
///
/// Entries are sorted by name and numbered from 1, the same ordering an
/// archive-backed source produces.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    pages: Vec<Page>,
    data: Vec<Vec<u8>>,
}

impl MemorySource {
    pub fn new(entries: impl IntoIterator<Item = (String, Vec<u8>)>) -> Self {
        let mut entries: Vec<_> = entries.into_iter().collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        let mut pages = Vec::with_capacity(entries.len());
        let mut data = Vec::with_capacity(entries.len());
        for (i, (name, bytes)) in entries.into_iter().enumerate() {
            pages.push(Page::new(i + 1, name, i));
            data.push(bytes);
        }
        Self { pages, data }
    }
}

impl PageSource for MemorySource {
    fn pages(&self) -> &[Page] {
        &self.pages
    }

    fn slice(&mut self, source_index: usize) -> Result<Vec<u8>, SourceError> {
        self.data
            .get(source_index)
            .cloned()
            .ok_or(SourceError::MissingEntry(source_index))
    }
}
