use core::ops::RangeInclusive;

/// The contiguous range of pages currently mounted into the viewport.
///
/// `tail` counts pages ever mounted from the top of the document; `head`
/// counts pages since evicted from the bottom of that range. The mounted set
/// is exactly the pages with `page_number` in `(head, tail]`, so the struct
/// maintains `head <= tail` at all times (both are clamped by the policy's
/// boundary guards, never by arithmetic here).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    pub head: usize,
    pub tail: usize,
}

impl Window {
    /// An empty window, as created when an archive finishes loading.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pages currently mounted.
    pub fn mounted_count(&self) -> usize {
        self.tail - self.head
    }

    /// The mounted page numbers, low to high. Empty when `head == tail`.
    pub fn mounted_pages(&self) -> RangeInclusive<usize> {
        self.head + 1..=self.tail
    }

    pub fn is_mounted(&self, page_number: usize) -> bool {
        page_number > self.head && page_number <= self.tail
    }
}
