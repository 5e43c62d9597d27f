use series::SessionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub initial_price: f64,
    pub final_price: f64,
    pub change: f64,
    pub direction: PriceDirection,
    pub sample_count: usize,
}

pub fn summarize(state: &SessionState) -> SessionSummary {
    let change = state.final_price - state.initial_price;
    SessionSummary {
        initial_price: state.initial_price,
        final_price: state.final_price,
        change,
        direction: if change >= 0.0 {
            PriceDirection::Up
        } else {
            PriceDirection::Down
        },
        sample_count: state.history.len(),
    }
}
