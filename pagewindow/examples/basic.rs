// Example: drive the window policy over a simulated scroll session.
use pagewindow::{Pager, PagerOptions};

fn main() {
    let mut p = Pager::new(PagerOptions::new(12));

    // Initial fill: no scroll yet, direction defaults to down.
    for _ in 0..4 {
        println!("fill: {:?}", p.step());
    }

    // The user scrolls well past the middle; the window starts sliding.
    for offset in [20u64, 40, 60, 80] {
        p.observe_scroll(offset, 100);
        let out = p.step();
        println!("down @{offset}%: mount={:?} evict={:?}", out.mount, out.evict);
    }

    // Reverse: one upward step, then the cooldown holds until a new event.
    p.observe_scroll(30, 100);
    println!("up: {:?}", p.step());
    println!("cooldown: {:?} (direction {:?})", p.step(), p.direction());

    let w = p.window();
    println!(
        "window: head={} tail={} mounted={:?}",
        w.head,
        w.tail,
        p.mounted_pages()
    );
}
