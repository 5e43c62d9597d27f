use serde::{Deserialize, Serialize};

/// One observation of the displayed time series. `time` is the point's index
/// in the series at append time, not a wall-clock timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub time: u64,
    pub price: f64,
}

impl SeriesPoint {
    pub fn new(time: u64, price: f64) -> Self {
        Self { time, price }
    }
}
