mod client;
mod form;

pub use client::{
    outcome_event, SimulationClient, SubmitError, SubmitOutcome, COMPLETION_MESSAGE,
};
pub use form::{FormError, FormInput, SimulationForm};
