use pagewindow::{Pager, StepOutcome};

use crate::{DriveError, PageSource, RenderSink, SourceError};

/// Default drive-loop period, in milliseconds.
pub const DEFAULT_INTERVAL_MS: u64 = 150;

/// A framework-neutral drive loop around a [`pagewindow::Pager`].
///
/// This type does not own a timer. The embedding UI drives it by calling:
/// - [`Driver::on_scroll`] when viewport scroll events occur
/// - [`Driver::tick`] on its own schedule (frame callback, timer, ...)
///
/// Ticks arriving before the configured interval has elapsed since the last
/// applied step are ignored, so the mutation cadence stays bounded no matter
/// how often the host calls in. Scroll events only update direction and
/// position; they never mount or evict directly.
///
/// The driver keeps the page-number → handle map for everything it mounted,
/// and [`Driver::stop`] makes all further ticks inert for deterministic
/// teardown.
#[derive(Clone, Debug)]
pub struct Driver<H> {
    pager: Pager,
    interval_ms: u64,
    next_due_ms: u64,
    stopped: bool,
    mounted: Vec<(usize, H)>,
}

impl<H> Driver<H> {
    pub fn new(pager: Pager) -> Self {
        Self::with_interval(pager, DEFAULT_INTERVAL_MS)
    }

    pub fn with_interval(pager: Pager, interval_ms: u64) -> Self {
        Self {
            pager,
            interval_ms: interval_ms.max(1),
            next_due_ms: 0,
            stopped: false,
            mounted: Vec::new(),
        }
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Number of handles currently held for mounted pages.
    pub fn mounted_len(&self) -> usize {
        self.mounted.len()
    }

    /// Forwards one viewport scroll notification to the pager.
    pub fn on_scroll(&mut self, offset: u64, max_offset: u64) {
        self.pager.observe_scroll(offset, max_offset);
    }

    /// Stops the loop: every later [`Driver::tick`] is a no-op.
    pub fn stop(&mut self) {
        pwdebug!(mounted = self.mounted.len(), "Driver::stop");
        self.stopped = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Tears the driver down, returning the handles of everything still
    /// mounted so the caller can release them.
    pub fn into_mounted(self) -> Vec<(usize, H)> {
        self.mounted
    }

    /// Runs one drive-loop tick.
    ///
    /// Returns `Ok(None)` when the tick was ignored (stopped, or before the
    /// interval elapsed), otherwise the step's outcome after applying it:
    /// an evicted page's handle is removed and passed to the sink first, then
    /// a mounted page's bytes are fetched from the source and handed to the
    /// sink, and the returned handle book-kept.
    ///
    /// Source and sink failures are fatal; the policy has no retry or
    /// skip-page semantics.
    pub fn tick<S, R>(
        &mut self,
        now_ms: u64,
        source: &mut S,
        sink: &mut R,
    ) -> Result<Option<StepOutcome>, DriveError<R::Error>>
    where
        S: PageSource,
        R: RenderSink<Handle = H>,
    {
        if self.stopped || now_ms < self.next_due_ms {
            return Ok(None);
        }
        self.next_due_ms = now_ms.saturating_add(self.interval_ms);

        let out = self.pager.step();
        pwtrace!(
            now_ms,
            mounted = out.mount.is_some(),
            evicted = out.evict.is_some(),
            "tick"
        );

        // Release the evicted page's resource before acquiring the new one.
        if let Some(ev) = out.evict {
            let pos = self.mounted.iter().position(|(n, _)| *n == ev.page_number);
            debug_assert!(pos.is_some(), "evicting page {} with no handle", ev.page_number);
            if let Some(pos) = pos {
                let (_, handle) = self.mounted.remove(pos);
                sink.evict(handle).map_err(DriveError::Sink)?;
            }
        }

        if let Some(m) = out.mount {
            let page = source
                .page(m.page_number)
                .ok_or(SourceError::PageOutOfRange(m.page_number))?
                .clone();
            let data = source.slice(page.source_index)?;
            let handle = sink.mount(&page, &data, m.edge).map_err(DriveError::Sink)?;
            self.mounted.push((m.page_number, handle));
        }

        Ok(Some(out))
    }
}
