use pagewindow::{Edge, Page};

/// Materializes and destroys the visual elements backing mounted pages.
///
/// `mount` receives the page's bytes (already fetched from the page source)
/// and returns a handle owning the element's backing resource. `evict`
/// consumes the handle by value, so the resource can be released in the
/// handle's `Drop` even when the sink's own removal fails mid-way; long
/// scroll sessions must not accumulate handles.
///
/// The drive loop's head/tail bookkeeping is the sole source of truth for
/// what is mounted: a sink never sees the same page mounted twice without an
/// intervening eviction, and never sees an eviction for a page it did not
/// mount.
pub trait RenderSink {
    /// The mounted element: page identity plus its resource handle.
    type Handle;
    type Error;

    /// Creates an element for `page` at the given edge of the visual list
    /// (`Bottom` appends, `Top` prepends).
    fn mount(
        &mut self,
        page: &Page,
        data: &[u8],
        edge: Edge,
    ) -> Result<Self::Handle, Self::Error>;

    /// Removes the element and releases its backing resource.
    fn evict(&mut self, handle: Self::Handle) -> Result<(), Self::Error>;
}
