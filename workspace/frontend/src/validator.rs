//! Location validation state machine: minimum-length gating, debounce
//! scheduling and the inline validation copy shown next to the input field.

use common::LocationMatch;
use gloo_timers::callback::Timeout;

/// What a keystroke should do, decided before any timer or network work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryAction {
    /// Too short to look up; any previous validation message is cleared.
    Clear,
    /// Long enough; (re)arm the debounce timer.
    Schedule,
}

/// Minimum-length precondition for a lookup. Enforced by the caller, not by
/// the lookup itself.
pub fn classify_query(query: &str, min_len: usize) -> QueryAction {
    if query.chars().count() >= min_len {
        QueryAction::Schedule
    } else {
        QueryAction::Clear
    }
}

/// Validation state of the location input.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ValidationState {
    /// No message shown (empty or too-short input).
    #[default]
    Idle,
    /// A lookup is in flight.
    Pending,
    /// The last lookup accepted this match.
    Valid(LocationMatch),
    /// The last lookup failed. Any previously accepted match is gone: a
    /// failed lookup invalidates trust in the current location.
    Invalid,
}

impl ValidationState {
    /// Inline message for the field, `None` when nothing should be shown.
    pub fn message(&self) -> Option<String> {
        match self {
            ValidationState::Idle => None,
            ValidationState::Pending => Some("Validating location...".to_string()),
            ValidationState::Valid(matched) => Some(format!(
                "✓ Valid location: {} ({})",
                matched.name, matched.region
            )),
            ValidationState::Invalid => Some(
                "✗ Location not found. Please enter a valid country or region name.".to_string(),
            ),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ValidationState::Idle | ValidationState::Pending => "text-sm text-base-content/60",
            ValidationState::Valid(_) => "text-sm text-success",
            ValidationState::Invalid => "text-sm text-error",
        }
    }

    /// The currently accepted match, if any.
    pub fn accepted(&self) -> Option<&LocationMatch> {
        match self {
            ValidationState::Valid(matched) => Some(matched),
            _ => None,
        }
    }
}

/// Guard run on form submission, before any network call to the prediction
/// endpoint.
pub fn ensure_submittable(accepted: Option<&LocationMatch>) -> Result<LocationMatch, String> {
    accepted.cloned().ok_or_else(|| {
        "Please enter a valid location before generating predictions.".to_string()
    })
}

/// Single-shot debounce timer for location lookups.
///
/// Scheduling cancels any pending timer, so only the last keystroke of a
/// burst fires a lookup. An already in-flight lookup is not cancelled; if
/// two lookups overlap, the later resolution wins.
#[derive(Default)]
pub struct Debouncer {
    pending: Option<Timeout>,
}

impl Debouncer {
    pub fn schedule<F>(&mut self, delay_ms: u32, callback: F)
    where
        F: FnOnce() + 'static,
    {
        self.cancel();
        self.pending = Some(Timeout::new(delay_ms, callback));
    }

    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_match() -> LocationMatch {
        LocationMatch {
            name: "France".to_string(),
            official_name: "French Republic".to_string(),
            population: 67391582,
            region: "Europe".to_string(),
            subregion: "Western Europe".to_string(),
        }
    }

    #[test]
    fn short_queries_clear_instead_of_scheduling() {
        assert_eq!(classify_query("", 3), QueryAction::Clear);
        assert_eq!(classify_query("fr", 3), QueryAction::Clear);
        assert_eq!(classify_query("fra", 3), QueryAction::Schedule);
        assert_eq!(classify_query("france", 3), QueryAction::Schedule);
    }

    #[test]
    fn valid_state_renders_confirmation_copy() {
        let state = ValidationState::Valid(sample_match());
        assert_eq!(
            state.message().unwrap(),
            "✓ Valid location: France (Europe)"
        );
        assert!(state.accepted().is_some());
    }

    #[test]
    fn invalid_state_renders_error_copy_and_drops_match() {
        let state = ValidationState::Invalid;
        assert_eq!(
            state.message().unwrap(),
            "✗ Location not found. Please enter a valid country or region name."
        );
        assert!(state.accepted().is_none());
    }

    #[test]
    fn idle_state_has_no_message() {
        assert_eq!(ValidationState::Idle.message(), None);
    }

    #[test]
    fn submission_is_rejected_without_an_accepted_match() {
        assert!(ensure_submittable(None).is_err());
        let matched = sample_match();
        assert_eq!(ensure_submittable(Some(&matched)).unwrap(), matched);
    }
}
