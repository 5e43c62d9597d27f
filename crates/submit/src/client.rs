use std::fmt;

use serde::Deserialize;
use series::{SeriesPoint, SessionEvent};

use crate::form::SimulationForm;

/// The endpoint reports completion through this exact message string.
pub const COMPLETION_MESSAGE: &str = "Stock Simulation Completed";

#[derive(Debug, Deserialize)]
struct SimulationResponse {
    message: String,
    #[serde(default, rename = "priceHistory")]
    price_history: Vec<SeriesPoint>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Completed(Vec<SeriesPoint>),
    NotCompleted { message: String },
}

#[derive(Debug)]
pub enum SubmitError {
    Transport(reqwest::Error),
    Status(u16),
    Decode(reqwest::Error),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "simulation request failed: {err}"),
            Self::Status(code) => {
                write!(f, "simulation endpoint answered with status {code}")
            }
            Self::Decode(err) => {
                write!(f, "simulation response body is not valid JSON: {err}")
            }
        }
    }
}

impl std::error::Error for SubmitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport(err) | Self::Decode(err) => Some(err),
            Self::Status(_) => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SimulationClient {
    http: reqwest::Client,
    base_url: String,
}

impl SimulationClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// One request per user trigger, no retry. The endpoint expects these
    /// exact query names: `mobNo` carries the initial price and `distance`
    /// the duration.
    pub async fn submit(&self, form: &SimulationForm) -> Result<SubmitOutcome, SubmitError> {
        let url = format!("{}/location/update", self.base_url);
        let response = self
            .http
            .post(&url)
            .query(&[
                ("name", form.name.clone()),
                ("mobNo", form.initial_price.to_string()),
                ("type", form.subscribers.to_string()),
                ("distance", form.duration_secs.to_string()),
            ])
            .send()
            .await
            .map_err(SubmitError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Status(status.as_u16()));
        }

        let body: SimulationResponse = response.json().await.map_err(SubmitError::Decode)?;
        if body.message == COMPLETION_MESSAGE {
            Ok(SubmitOutcome::Completed(body.price_history))
        } else {
            Ok(SubmitOutcome::NotCompleted {
                message: body.message,
            })
        }
    }
}

/// Folds a submission result into the session event stream. Anything short of
/// the completion message clears the displayed series.
pub fn outcome_event(form: &SimulationForm, outcome: SubmitOutcome) -> SessionEvent {
    let history = match outcome {
        SubmitOutcome::Completed(history) => history,
        SubmitOutcome::NotCompleted { message } => {
            tracing::warn!(%message, "simulation did not complete");
            Vec::new()
        }
    };

    SessionEvent::SimulationLoaded {
        name: form.name.clone(),
        initial_price: form.initial_price,
        history,
    }
}
