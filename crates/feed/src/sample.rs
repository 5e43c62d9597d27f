use crate::error::FeedError;

/// Parses one inbound feed message. The wire carries plain numeric text, one
/// value per message; surrounding whitespace is tolerated, non-finite values
/// are not.
pub fn parse_sample(payload: &str) -> Result<f64, FeedError> {
    payload
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite())
        .ok_or_else(|| FeedError::MalformedSample(payload.to_string()))
}

#[cfg(test)]
mod tests {
    use super::parse_sample;
    use crate::error::FeedError;

    #[test]
    fn parses_plain_numeric_payloads() {
        assert_eq!(parse_sample("10.5").unwrap(), 10.5);
        assert_eq!(parse_sample("-3").unwrap(), -3.0);
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        assert_eq!(parse_sample(" 11.25\n").unwrap(), 11.25);
    }

    #[test]
    fn rejects_non_numeric_payloads() {
        let err = parse_sample("not-a-price").unwrap_err();

        assert!(matches!(err, FeedError::MalformedSample(payload) if payload == "not-a-price"));
    }

    #[test]
    fn rejects_non_finite_values() {
        assert!(parse_sample("NaN").is_err());
        assert!(parse_sample("inf").is_err());
    }
}
