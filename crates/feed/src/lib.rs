mod error;
mod sample;
mod subscriber;

pub use error::FeedError;
pub use sample::parse_sample;
pub use subscriber::{FeedSubscription, DEFAULT_FEED_URL};
