use alloc::sync::Arc;

use crate::pager::Pager;
use crate::StepOutcome;

/// A callback fired after a step that changed the window.
///
/// The outcome describes the mount/evict the step produced.
pub type OnChangeCallback = Arc<dyn Fn(&Pager, &StepOutcome) + Send + Sync>;

/// Target number of simultaneously mounted pages.
pub const DEFAULT_MAX_LEN: usize = 4;

/// Scroll-percent threshold gating evictions.
///
/// Scrolling down, only content above this much of the document is evicted;
/// scrolling up, only content below it. Keeps near-visible pages mounted.
pub const DEFAULT_EVICT_PERCENT: f32 = 50.0;

/// Configuration for [`crate::Pager`].
///
/// Cheap to clone: the only heavy field is the optional callback, stored in an
/// `Arc`.
pub struct PagerOptions {
    /// Total page count, fixed once the archive is loaded.
    pub count: usize,

    /// Target steady-state window size. This is a soft bound: mount and evict
    /// are independent per-step checks, so the mounted count may transiently
    /// overshoot by one.
    pub max_len: usize,

    /// Eviction threshold as a scroll percentage in `[0, 100]`.
    pub evict_percent: f32,

    /// Optional callback fired after each window-changing step.
    pub on_change: Option<OnChangeCallback>,
}

impl PagerOptions {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_len: DEFAULT_MAX_LEN,
            evict_percent: DEFAULT_EVICT_PERCENT,
            on_change: None,
        }
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    pub fn with_evict_percent(mut self, evict_percent: f32) -> Self {
        self.evict_percent = evict_percent;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Pager, &StepOutcome) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl Clone for PagerOptions {
    fn clone(&self) -> Self {
        Self {
            count: self.count,
            max_len: self.max_len,
            evict_percent: self.evict_percent,
            on_change: self.on_change.clone(),
        }
    }
}

impl core::fmt::Debug for PagerOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PagerOptions")
            .field("count", &self.count)
            .field("max_len", &self.max_len)
            .field("evict_percent", &self.evict_percent)
            .finish_non_exhaustive()
    }
}
