use strum_macros::{AsRefStr, Display, EnumDiscriminants};
use uuid::Uuid;

/// Lifecycle of one form submission.
///
/// The payload lives on the variant it belongs to, so result URLs and an
/// error message can never be held at the same time, and neither can exist
/// while a request is in flight.
#[derive(Debug, Clone, Default, PartialEq, EnumDiscriminants)]
#[strum_discriminants(name(Phase), derive(Display, AsRefStr, Hash))]
pub enum RequestState {
    #[default]
    Idle,
    Validating,
    InFlight { attempt: Uuid },
    Succeeded { urls: Vec<String> },
    Failed { message: String },
}

impl RequestState {
    pub fn phase(&self) -> Phase {
        Phase::from(self)
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, RequestState::InFlight { .. })
    }

    /// Id of the outstanding attempt, if any.
    pub fn attempt(&self) -> Option<Uuid> {
        match self {
            RequestState::InFlight { attempt } => Some(*attempt),
            _ => None,
        }
    }

    pub fn result_urls(&self) -> &[String] {
        match self {
            RequestState::Succeeded { urls } => urls,
            _ => &[],
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            RequestState::Failed { message } => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle() {
        let state = RequestState::default();
        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.result_urls().is_empty());
        assert_eq!(state.error_message(), None);
    }

    #[test]
    fn in_flight_exposes_attempt_only() {
        let attempt = Uuid::new_v4();
        let state = RequestState::InFlight { attempt };
        assert!(state.is_in_flight());
        assert_eq!(state.attempt(), Some(attempt));
        assert!(state.result_urls().is_empty());
        assert_eq!(state.error_message(), None);
    }

    #[test]
    fn settled_states_carry_their_payload() {
        let ok = RequestState::Succeeded { urls: vec!["http://x/a".into()] };
        assert_eq!(ok.result_urls(), ["http://x/a".to_string()]);
        assert_eq!(ok.error_message(), None);

        let failed = RequestState::Failed { message: "boom".into() };
        assert!(failed.result_urls().is_empty());
        assert_eq!(failed.error_message(), Some("boom"));
    }

    #[test]
    fn phase_names_render_for_logs() {
        assert_eq!(Phase::InFlight.to_string(), "InFlight");
        assert_eq!(Phase::Succeeded.as_ref(), "Succeeded");
    }
}
