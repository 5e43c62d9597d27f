use crate::point::SeriesPoint;

/// Everything the display layer reads. Replaced wholesale by a completed
/// simulation, extended one point at a time by the live feed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub name: String,
    pub initial_price: f64,
    pub final_price: f64,
    pub history: Vec<SeriesPoint>,
    pub busy: bool,
}

/// The only way session state changes. The feed task and the submitter are
/// independent producers; whoever owns the state applies events one at a time,
/// so the two sources can never race.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    FeedSample(f64),
    FeedLost(String),
    SubmitStarted,
    SimulationLoaded {
        name: String,
        initial_price: f64,
        history: Vec<SeriesPoint>,
    },
    SubmitFinished,
}

pub fn apply_event(state: &mut SessionState, event: SessionEvent) {
    match event {
        SessionEvent::FeedSample(price) => {
            let time = state.history.len() as u64;
            state.history.push(SeriesPoint::new(time, price));
        }
        SessionEvent::FeedLost(_) => {}
        SessionEvent::SubmitStarted => {
            state.busy = true;
        }
        SessionEvent::SimulationLoaded {
            name,
            initial_price,
            history,
        } => {
            state.final_price = history.last().map(|point| point.price).unwrap_or(0.0);
            state.name = name;
            state.initial_price = initial_price;
            state.history = history;
        }
        SessionEvent::SubmitFinished => {
            state.busy = false;
        }
    }
}
