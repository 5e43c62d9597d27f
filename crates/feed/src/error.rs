use std::fmt;

#[derive(Debug)]
pub enum FeedError {
    Connect(tokio_tungstenite::tungstenite::Error),
    MalformedSample(String),
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connect(err) => {
                write!(f, "feed endpoint connection failed: {err}")
            }
            Self::MalformedSample(payload) => {
                write!(f, "feed sample is not a finite number: {payload:?}")
            }
        }
    }
}

impl std::error::Error for FeedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Connect(err) => Some(err),
            Self::MalformedSample(_) => None,
        }
    }
}
