mod point;
mod session;

pub use point::SeriesPoint;
pub use session::{apply_event, SessionEvent, SessionState};

#[cfg(test)]
mod tests {
    use super::{SessionState, SeriesPoint};

    #[test]
    fn session_state_starts_empty_and_idle() {
        let state = SessionState::default();
        assert!(state.name.is_empty());
        assert_eq!(state.initial_price, 0.0);
        assert_eq!(state.final_price, 0.0);
        assert!(state.history.is_empty());
        assert!(!state.busy);
    }

    #[test]
    fn series_point_uses_wire_field_names() {
        let point = SeriesPoint::new(3, 12.5);
        let json = serde_json::to_string(&point).unwrap();

        assert_eq!(json, r#"{"time":3,"price":12.5}"#);
    }
}
