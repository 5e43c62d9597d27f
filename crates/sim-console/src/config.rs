use std::{env, fmt};

const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";
const DEFAULT_CHART_WIDTH: usize = 60;
const DEFAULT_CHART_HEIGHT: usize = 12;
const CHART_WIDTH_RANGE: (usize, usize) = (8, 240);
const CHART_HEIGHT_RANGE: (usize, usize) = (2, 60);

#[derive(Debug, Clone)]
pub struct Config {
    pub feed_url: String,
    pub api_url: String,
    pub chart_width: usize,
    pub chart_height: usize,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidFeedUrl,
    InvalidApiUrl,
    InvalidChartWidth,
    InvalidChartHeight,
    NonUnicodeFeedUrl,
    NonUnicodeApiUrl,
    NonUnicodeChartWidth,
    NonUnicodeChartHeight,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFeedUrl => {
                write!(f, "SIM_FEED_URL must start with ws:// or wss://")
            }
            Self::InvalidApiUrl => {
                write!(f, "SIM_API_URL must start with http:// or https://")
            }
            Self::InvalidChartWidth => {
                write!(
                    f,
                    "SIM_CHART_WIDTH must be an integer between {} and {}",
                    CHART_WIDTH_RANGE.0, CHART_WIDTH_RANGE.1
                )
            }
            Self::InvalidChartHeight => {
                write!(
                    f,
                    "SIM_CHART_HEIGHT must be an integer between {} and {}",
                    CHART_HEIGHT_RANGE.0, CHART_HEIGHT_RANGE.1
                )
            }
            Self::NonUnicodeFeedUrl => write!(f, "SIM_FEED_URL contains non-unicode data"),
            Self::NonUnicodeApiUrl => write!(f, "SIM_API_URL contains non-unicode data"),
            Self::NonUnicodeChartWidth => {
                write!(f, "SIM_CHART_WIDTH contains non-unicode data")
            }
            Self::NonUnicodeChartHeight => {
                write!(f, "SIM_CHART_HEIGHT contains non-unicode data")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let feed_url = match env::var("SIM_FEED_URL") {
            Ok(value) => {
                if !value.starts_with("ws://") && !value.starts_with("wss://") {
                    return Err(ConfigError::InvalidFeedUrl);
                }
                value
            }
            Err(env::VarError::NotPresent) => feed::DEFAULT_FEED_URL.to_owned(),
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::NonUnicodeFeedUrl);
            }
        };

        let api_url = match env::var("SIM_API_URL") {
            Ok(value) => {
                if !value.starts_with("http://") && !value.starts_with("https://") {
                    return Err(ConfigError::InvalidApiUrl);
                }
                value
            }
            Err(env::VarError::NotPresent) => DEFAULT_API_URL.to_owned(),
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::NonUnicodeApiUrl);
            }
        };

        let chart_width = parse_bounded_env(
            "SIM_CHART_WIDTH",
            DEFAULT_CHART_WIDTH,
            CHART_WIDTH_RANGE,
            ConfigError::InvalidChartWidth,
            ConfigError::NonUnicodeChartWidth,
        )?;

        let chart_height = parse_bounded_env(
            "SIM_CHART_HEIGHT",
            DEFAULT_CHART_HEIGHT,
            CHART_HEIGHT_RANGE,
            ConfigError::InvalidChartHeight,
            ConfigError::NonUnicodeChartHeight,
        )?;

        Ok(Self {
            feed_url,
            api_url,
            chart_width,
            chart_height,
        })
    }
}

fn parse_bounded_env(
    key: &str,
    default_value: usize,
    range: (usize, usize),
    invalid_error: ConfigError,
    non_unicode_error: ConfigError,
) -> Result<usize, ConfigError> {
    match env::var(key) {
        Ok(value) => {
            let parsed = match value.parse::<usize>() {
                Ok(parsed) => parsed,
                Err(_) => return Err(invalid_error),
            };
            if parsed < range.0 || parsed > range.1 {
                return Err(invalid_error);
            }
            Ok(parsed)
        }
        Err(env::VarError::NotPresent) => Ok(default_value),
        Err(env::VarError::NotUnicode(_)) => Err(non_unicode_error),
    }
}
