// Example: a println render sink driven over an in-memory page source.
use pagewindow::{Edge, Page, Pager, PagerOptions};
use pagewindow_adapter::{Driver, MemorySource, PageSource, RenderSink};

struct ConsoleSink;

struct Element {
    page_number: usize,
}

impl RenderSink for ConsoleSink {
    type Handle = Element;
    type Error = std::convert::Infallible;

    fn mount(&mut self, page: &Page, data: &[u8], edge: Edge) -> Result<Element, Self::Error> {
        println!("mount {} ({} bytes) at {edge:?}", page.name, data.len());
        Ok(Element {
            page_number: page.page_number,
        })
    }

    fn evict(&mut self, element: Element) -> Result<(), Self::Error> {
        println!("evict page {}", element.page_number);
        Ok(())
    }
}

fn main() {
    let mut source =
        MemorySource::new((1..=10usize).map(|i| (format!("{i:03}.png"), vec![0u8; 64 * i])));
    let mut driver = Driver::new(Pager::new(PagerOptions::new(source.len())));
    let mut sink = ConsoleSink;

    let mut now = 0u64;
    for offset in (0..=100u64).step_by(10) {
        driver.on_scroll(offset, 100);
        if let Some(out) = driver.tick(now, &mut source, &mut sink).unwrap() {
            if out.is_noop() {
                println!("tick @{now}ms: idle");
            }
        }
        now += 150;
    }

    driver.stop();
    let leftovers = driver.into_mounted();
    println!("teardown: releasing {} mounted pages", leftovers.len());
}
