use crate::direction::DirectionTracker;
use crate::window::Window;
use crate::{Direction, Edge, EvictRequest, MountRequest, PagerOptions, StepOutcome};

/// A headless sliding-window page engine.
///
/// The pager decides which pages of a long image sequence are materialized
/// into the viewport and which are evicted, bounded by a soft target window
/// size and driven by scroll direction and position. It is UI-agnostic:
/// - It does not hold page bytes or visual elements.
/// - Your adapter feeds it scroll notifications via [`Pager::observe_scroll`].
/// - A fixed-interval drive loop calls [`Pager::step`] and applies the
///   returned mount/evict requests to its render sink.
///
/// Scroll events never mutate the window directly; they only update the
/// direction and scroll percent the next step reads. That decouples input
/// frequency (high, bursty) from mutation frequency (bounded, steady).
#[derive(Clone, Debug)]
pub struct Pager {
    options: PagerOptions,
    window: Window,
    tracker: DirectionTracker,
    scroll_offset: u64,
    max_scroll_offset: u64,
}

impl Pager {
    /// Creates a pager for a freshly loaded archive: empty window, direction
    /// defaulting to `Down`.
    pub fn new(options: PagerOptions) -> Self {
        pwdebug!(
            count = options.count,
            max_len = options.max_len,
            "Pager::new"
        );
        Self {
            options,
            window: Window::new(),
            tracker: DirectionTracker::new(),
            scroll_offset: 0,
            max_scroll_offset: 0,
        }
    }

    pub fn options(&self) -> &PagerOptions {
        &self.options
    }

    /// Total page count, fixed once the archive is loaded.
    pub fn count(&self) -> usize {
        self.options.count
    }

    pub fn window(&self) -> Window {
        self.window
    }

    pub fn direction(&self) -> Direction {
        self.tracker.direction()
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    pub fn max_scroll_offset(&self) -> u64 {
        self.max_scroll_offset
    }

    /// Current scroll position normalized to `[0, 100]`.
    ///
    /// A document with no scrollable distance reads as 0.
    pub fn scroll_percent(&self) -> f32 {
        if self.max_scroll_offset == 0 {
            return 0.0;
        }
        let pct = (self.scroll_offset as f32 / self.max_scroll_offset as f32) * 100.0;
        pct.clamp(0.0, 100.0)
    }

    pub fn mounted_count(&self) -> usize {
        self.window.mounted_count()
    }

    pub fn is_mounted(&self, page_number: usize) -> bool {
        self.window.is_mounted(page_number)
    }

    /// The mounted page numbers, low to high.
    pub fn mounted_pages(&self) -> core::ops::RangeInclusive<usize> {
        self.window.mounted_pages()
    }

    /// Feeds one viewport scroll notification.
    ///
    /// `max_offset` is the maximum scrollable distance at the time of the
    /// event. A step between two notifications reads one-event-stale values;
    /// the design tolerates that.
    pub fn observe_scroll(&mut self, offset: u64, max_offset: u64) {
        pwtrace!(offset, max_offset, "observe_scroll");
        self.scroll_offset = offset;
        self.max_scroll_offset = max_offset;
        self.tracker.observe(offset);
    }

    /// Performs one policy step: at most one mount and at most one evict.
    ///
    /// Both checks read the window as it was when the step began, so a full
    /// window can extend one edge and trim the other in the same step. The
    /// target size is a soft bound: under sustained scroll the mounted count
    /// stabilizes at `max_len`, overshooting by at most one page.
    ///
    /// An upward step forces the direction to `Stop` until the next scroll
    /// observation re-asserts it, so fast reverse-scrolling cannot run away
    /// loading pages between events.
    pub fn step(&mut self) -> StepOutcome {
        let out = match self.tracker.direction() {
            Direction::Down => self.step_down(),
            Direction::Up => {
                let out = self.step_up();
                self.tracker.force_stop();
                out
            }
            Direction::Stop => StepOutcome::default(),
        };

        debug_assert!(self.window.head <= self.window.tail);
        debug_assert!(self.window.tail <= self.options.count);

        if !out.is_noop() {
            pwdebug!(
                head = self.window.head,
                tail = self.window.tail,
                mounted = out.mount.is_some(),
                evicted = out.evict.is_some(),
                "step"
            );
            if let Some(cb) = &self.options.on_change {
                cb(self, &out);
            }
        }
        out
    }

    fn step_down(&mut self) -> StepOutcome {
        let mut out = StepOutcome::default();
        let Window { head, tail } = self.window;

        // Bottom of the document: pure no-op, no trailing evict either.
        if tail == self.options.count {
            return out;
        }

        if tail <= head + self.options.max_len {
            self.window.tail += 1;
            out.mount = Some(MountRequest {
                page_number: tail + 1,
                edge: Edge::Bottom,
            });
        }

        // Only evict content the user has scrolled well past.
        if tail >= head + self.options.max_len
            && self.scroll_percent() > self.options.evict_percent
        {
            self.window.head += 1;
            out.evict = Some(EvictRequest {
                page_number: head + 1,
                edge: Edge::Top,
            });
        }

        out
    }

    fn step_up(&mut self) -> StepOutcome {
        let mut out = StepOutcome::default();
        let Window { head, tail } = self.window;

        // Top of the document.
        if head == 0 {
            return out;
        }

        if tail <= head + self.options.max_len {
            self.window.head -= 1;
            out.mount = Some(MountRequest {
                page_number: head,
                edge: Edge::Top,
            });
        }

        if tail >= head + self.options.max_len
            && self.scroll_percent() < self.options.evict_percent
        {
            self.window.tail -= 1;
            out.evict = Some(EvictRequest {
                page_number: tail,
                edge: Edge::Bottom,
            });
        }

        out
    }
}
