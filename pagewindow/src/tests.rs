use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::collections::HashMap;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        let span = end_exclusive - start;
        start + (self.next_u64() % span)
    }

    fn gen_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

fn pager(count: usize) -> Pager {
    Pager::new(PagerOptions::new(count))
}

#[test]
fn direction_tracker_follows_offset_trend() {
    let mut t = DirectionTracker::new();
    assert_eq!(t.direction(), Direction::Down); // no scroll yet defaults down

    t.observe(10);
    assert_eq!(t.direction(), Direction::Down);
    t.observe(5);
    assert_eq!(t.direction(), Direction::Up);
    t.observe(5);
    assert_eq!(t.direction(), Direction::Up); // equal offset: unchanged
    t.observe(20);
    assert_eq!(t.direction(), Direction::Down);
}

#[test]
fn direction_tracker_rearms_at_top() {
    let mut t = DirectionTracker::new();
    t.observe(100);
    t.observe(0);
    assert_eq!(t.direction(), Direction::Up);
    assert_eq!(t.last_offset(), 0);

    // From the top, the first movement reads as down again.
    t.observe(1);
    assert_eq!(t.direction(), Direction::Down);
}

#[test]
fn scroll_percent_is_normalized_and_clamped() {
    let mut p = pager(10);
    assert_eq!(p.scroll_percent(), 0.0); // nothing scrollable yet

    p.observe_scroll(25, 100);
    assert_eq!(p.scroll_percent(), 25.0);

    // Offsets past the max (e.g. rubber-banding) clamp to 100.
    p.observe_scroll(300, 100);
    assert_eq!(p.scroll_percent(), 100.0);
}

#[test]
fn scenario_a_initial_fill_mounts_target_window() {
    let mut p = pager(10);

    for i in 1..=4usize {
        let out = p.step();
        assert_eq!(
            out.mount,
            Some(MountRequest {
                page_number: i,
                edge: Edge::Bottom
            })
        );
        assert_eq!(out.evict, None);
    }

    let w = p.window();
    assert_eq!((w.head, w.tail), (0, 4));
    assert_eq!(p.mounted_pages().collect::<Vec<_>>(), [1, 2, 3, 4]);
}

#[test]
fn scenario_b_past_threshold_evicts_while_mounting() {
    let mut p = pager(10);
    for _ in 0..4 {
        p.step();
    }

    p.observe_scroll(60, 100);
    let out = p.step();
    assert_eq!(
        out.mount,
        Some(MountRequest {
            page_number: 5,
            edge: Edge::Bottom
        })
    );
    assert_eq!(
        out.evict,
        Some(EvictRequest {
            page_number: 1,
            edge: Edge::Top
        })
    );

    let w = p.window();
    assert_eq!((w.head, w.tail), (1, 5));
}

#[test]
fn scenario_c_reversal_mounts_at_top_and_enters_cooldown() {
    // Slide the window down to (head=5, tail=9).
    let mut p = pager(10);
    p.observe_scroll(60, 100);
    for _ in 0..9 {
        p.step();
    }
    let w = p.window();
    assert_eq!((w.head, w.tail), (5, 9));

    p.observe_scroll(10, 100);
    assert_eq!(p.direction(), Direction::Up);

    let out = p.step();
    assert_eq!(
        out.mount,
        Some(MountRequest {
            page_number: 5,
            edge: Edge::Top
        })
    );
    assert_eq!(
        out.evict,
        Some(EvictRequest {
            page_number: 9,
            edge: Edge::Bottom
        })
    );
    assert_eq!(p.window().head, 4);
    assert_eq!(p.direction(), Direction::Stop);

    // Cooldown: no repeat upward step without a fresh scroll event.
    assert!(p.step().is_noop());
    p.observe_scroll(10, 100); // equal offset does not clear it either
    assert!(p.step().is_noop());

    p.observe_scroll(5, 100);
    assert_eq!(p.direction(), Direction::Up);
    assert_eq!(p.step().mount.map(|m| m.page_number), Some(4));
}

#[test]
fn scenario_d_bottom_of_document_is_a_pure_noop() {
    let mut p = pager(10);
    p.observe_scroll(90, 100);
    for _ in 0..20 {
        p.step();
    }
    let w = p.window();
    assert_eq!(w.tail, 10);

    // Even past the eviction threshold, nothing moves at the bottom.
    let out = p.step();
    assert!(out.is_noop());
    assert_eq!(p.window(), w);
}

#[test]
fn upward_step_at_top_is_a_noop() {
    let mut p = pager(10);
    p.step(); // mount page 1
    p.observe_scroll(10, 100);
    p.observe_scroll(0, 100);
    assert_eq!(p.direction(), Direction::Up);

    let out = p.step();
    assert!(out.is_noop());
    assert_eq!(p.window().head, 0);
}

#[test]
fn window_helpers_track_mounted_set() {
    let mut p = pager(10);
    p.observe_scroll(60, 100);
    for _ in 0..6 {
        p.step();
    }
    let w = p.window();
    assert_eq!((w.head, w.tail), (2, 6));
    assert_eq!(p.mounted_count(), 4);
    assert!(!p.is_mounted(2));
    assert!(p.is_mounted(3));
    assert!(p.is_mounted(6));
    assert!(!p.is_mounted(7));
}

#[test]
fn sustained_down_scroll_is_monotonic_and_window_stays_soft_bounded() {
    let mut p = pager(200);
    let mut lcg = Lcg::new(7);

    let mut offset = 0u64;
    let mut last_head = 0usize;
    let mut last_tail = 0usize;

    for _ in 0..600 {
        // Keep scrolling down with the percent oscillating around 50.
        offset += lcg.gen_range_u64(1, 4);
        let max = offset + lcg.gen_range_u64(1, offset + 2);
        p.observe_scroll(offset, max);
        p.step();

        let w = p.window();
        assert!(w.head >= last_head);
        assert!(w.tail >= last_tail);
        assert!(w.mounted_count() <= DEFAULT_MAX_LEN + 1);
        last_head = w.head;
        last_tail = w.tail;
    }

    assert!(p.window().tail > 4);
}

#[test]
fn random_soak_preserves_invariants_and_resource_parity() {
    const COUNT: usize = 30;
    let mut p = pager(COUNT);
    let mut lcg = Lcg::new(42);

    let mut mounts = HashMap::<usize, usize>::new();
    let mut evicts = HashMap::<usize, usize>::new();

    for _ in 0..5_000 {
        if lcg.gen_bool() {
            let offset = lcg.gen_range_u64(0, 101);
            p.observe_scroll(offset, 100);
        }
        let out = p.step();

        if let Some(m) = &out.mount {
            // No double-mount without an intervening eviction.
            let live = mounts.get(&m.page_number).copied().unwrap_or(0)
                - evicts.get(&m.page_number).copied().unwrap_or(0);
            assert_eq!(live, 0, "page {} mounted twice", m.page_number);
            *mounts.entry(m.page_number).or_default() += 1;
        }
        if let Some(e) = &out.evict {
            // Every eviction releases exactly one prior mount.
            let live = mounts.get(&e.page_number).copied().unwrap_or(0)
                - evicts.get(&e.page_number).copied().unwrap_or(0);
            assert_eq!(live, 1, "page {} evicted while unmounted", e.page_number);
            *evicts.entry(e.page_number).or_default() += 1;
        }

        let w = p.window();
        assert!(w.head <= w.tail);
        assert!(w.tail <= COUNT);

        // The policy bookkeeping and the mount/evict ledger must agree.
        for page in 1..=COUNT {
            let live = mounts.get(&page).copied().unwrap_or(0)
                - evicts.get(&page).copied().unwrap_or(0);
            assert_eq!(live == 1, w.is_mounted(page));
        }
    }
}

#[test]
fn on_change_fires_only_for_window_changes() {
    let fired = Arc::new(AtomicUsize::new(0));
    let fired2 = Arc::clone(&fired);

    let opts = PagerOptions::new(2).with_on_change(Some(move |p: &Pager, out: &StepOutcome| {
        assert!(!out.is_noop());
        assert!(p.window().tail <= 2);
        fired2.fetch_add(1, Ordering::SeqCst);
    }));
    let mut p = Pager::new(opts);

    p.step();
    p.step();
    assert_eq!(fired.load(Ordering::SeqCst), 2);

    // tail == count: no-op steps stay silent.
    p.step();
    p.step();
    assert_eq!(fired.load(Ordering::SeqCst), 2);
}

#[test]
fn smaller_target_window_is_respected() {
    let mut p = Pager::new(PagerOptions::new(10).with_max_len(2));
    p.observe_scroll(60, 100);
    for _ in 0..5 {
        p.step();
    }
    let w = p.window();
    assert_eq!((w.head, w.tail), (3, 5));
    assert_eq!(p.mounted_count(), 2);
}
