mod chart;
mod summary;

pub use chart::{price_domain, render_chart, visible_window, VISIBLE_WINDOW};
pub use summary::{summarize, PriceDirection, SessionSummary};
