use anyhow::Result;

use folio_core::{AppConfig, Portfolio};
use folio_tui::app::STATUS_BAR_HEIGHT;
use folio_tui::page::PageLayout;

pub fn run(config: &AppConfig, width: u16, height: u16) -> Result<()> {
    let portfolio = Portfolio::for_config(config)?;
    let layout = PageLayout::compute(&portfolio, width, height.saturating_sub(STATUS_BAR_HEIGHT));
    let max = layout.max_offset();

    println!("Page {}x{}: {} rows, max offset {}", width, height, layout.total_height, max);
    println!();
    println!("{:<12} {:>6} {:>6} {:>8}", "SECTION", "TOP", "HEIGHT", "SCROLLS");
    for span in &layout.sections {
        // Anchors past the last full screen land on the max offset
        println!(
            "{:<12} {:>6} {:>6} {:>8}",
            span.id,
            span.top,
            span.height,
            span.top.min(max)
        );
    }

    Ok(())
}
