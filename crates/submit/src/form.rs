use std::fmt;

/// Raw form fields exactly as the user typed them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormInput {
    pub name: String,
    pub initial_price: String,
    pub subscribers: String,
    pub duration: String,
}

/// A validated simulation request.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationForm {
    pub name: String,
    pub initial_price: f64,
    pub subscribers: u32,
    pub duration_secs: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    EmptyName,
    InvalidInitialPrice(String),
    InvalidSubscribers(String),
    InvalidDuration(String),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "stock name must not be empty"),
            Self::InvalidInitialPrice(value) => {
                write!(f, "initial price must be a non-negative number, got {value:?}")
            }
            Self::InvalidSubscribers(value) => {
                write!(f, "subscriber count must be a whole number, got {value:?}")
            }
            Self::InvalidDuration(value) => {
                write!(f, "duration must be a whole number of seconds, got {value:?}")
            }
        }
    }
}

impl std::error::Error for FormError {}

impl SimulationForm {
    pub fn parse(input: &FormInput) -> Result<Self, FormError> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(FormError::EmptyName);
        }

        let initial_price = input
            .initial_price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|price| price.is_finite() && *price >= 0.0)
            .ok_or_else(|| FormError::InvalidInitialPrice(input.initial_price.clone()))?;

        let subscribers = input
            .subscribers
            .trim()
            .parse::<u32>()
            .map_err(|_| FormError::InvalidSubscribers(input.subscribers.clone()))?;

        let duration_secs = input
            .duration
            .trim()
            .parse::<u32>()
            .map_err(|_| FormError::InvalidDuration(input.duration.clone()))?;

        Ok(Self {
            name: name.to_string(),
            initial_price,
            subscribers,
            duration_secs,
        })
    }
}
