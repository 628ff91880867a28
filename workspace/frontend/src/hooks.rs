use yew::prelude::*;

use common::CustomInputSet;

use crate::common::toast::ToastContext;
use crate::orchestrator::{self, DashboardData};

const DEFAULT_LOAD_FAILED: &str =
    "Failed to load dashboard data. Please ensure the API server is running.";
const CUSTOM_LOAD_FAILED: &str =
    "Failed to generate prediction. Please try again or check your inputs.";

/// API fetch state enum
#[derive(Clone, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&String> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }
}

/// Pre-fetch transition for a default-mode load. Only the first load shows
/// the spinner; a refresh keeps the rendered data on screen.
fn begin_default_load(had_data: bool) -> Option<FetchState<DashboardData>> {
    (!had_data).then_some(FetchState::Loading)
}

/// Post-failure transition for a default-mode load. A failed refresh keeps
/// the rendered data; a failed first load surfaces the error page.
fn failed_default_load(had_data: bool, error: String) -> Option<FetchState<DashboardData>> {
    (!had_data).then(|| FetchState::Error(error))
}

/// Recovery after a failed custom load: exactly one alert, then the
/// fallback result decides the final state. The page only shows the error
/// panel when the fallback fails too.
struct CustomLoadRecovery {
    alert: &'static str,
    state: FetchState<DashboardData>,
}

fn plan_custom_recovery(fallback: Result<DashboardData, String>) -> CustomLoadRecovery {
    CustomLoadRecovery {
        alert: CUSTOM_LOAD_FAILED,
        state: match fallback {
            Ok(data) => FetchState::Success(data),
            Err(error) => FetchState::Error(error),
        },
    }
}

/// Handle returned by [`use_dashboard_loader`].
#[derive(Clone)]
pub struct DashboardHandle {
    pub state: UseStateHandle<FetchState<DashboardData>>,
    /// True while a background refresh runs over already-rendered data.
    pub refreshing: UseStateHandle<bool>,
    pub load_default: Callback<()>,
    pub load_custom: Callback<CustomInputSet>,
}

/// Binds the orchestrator to component state.
///
/// `load_default` keeps existing data on screen during a refresh (only the
/// first load shows the spinner). `load_custom` always enters the loading
/// state; on failure it shows one error toast and falls back to the default
/// data so the dashboard never stays blank.
#[hook]
pub fn use_dashboard_loader() -> DashboardHandle {
    let state = use_state(FetchState::<DashboardData>::default);
    let refreshing = use_state(|| false);
    // The ()-memoized callbacks below would only ever see the first-render
    // snapshot through the state handle, so "is data on screen" lives in
    // this cell and is read at call time.
    let has_data = use_mut_ref(|| false);
    let toast_ctx = use_context::<ToastContext>().unwrap();

    let load_default = {
        let state = state.clone();
        let refreshing = refreshing.clone();
        let has_data = has_data.clone();
        let toast_ctx = toast_ctx.clone();

        use_callback((), move |_, _| {
            let state = state.clone();
            let refreshing = refreshing.clone();
            let has_data = has_data.clone();
            let toast_ctx = toast_ctx.clone();

            let had_data = *has_data.borrow();
            match begin_default_load(had_data) {
                Some(next) => state.set(next),
                None => refreshing.set(true),
            }

            wasm_bindgen_futures::spawn_local(async move {
                match orchestrator::load_default().await {
                    Ok(data) => {
                        *has_data.borrow_mut() = true;
                        state.set(FetchState::Success(data));
                    }
                    Err(err) => {
                        log::error!("Error loading dashboard data: {}", err);
                        toast_ctx.show_error(DEFAULT_LOAD_FAILED.to_string());
                        if let Some(next) = failed_default_load(had_data, err) {
                            state.set(next);
                        }
                    }
                }
                refreshing.set(false);
            });
        })
    };

    let load_custom = {
        let state = state.clone();
        let has_data = has_data.clone();
        let toast_ctx = toast_ctx.clone();

        use_callback((), move |input: CustomInputSet, _| {
            let state = state.clone();
            let has_data = has_data.clone();
            let toast_ctx = toast_ctx.clone();

            state.set(FetchState::Loading);

            wasm_bindgen_futures::spawn_local(async move {
                match orchestrator::load_custom(input).await {
                    Ok(data) => {
                        *has_data.borrow_mut() = true;
                        state.set(FetchState::Success(data));
                    }
                    Err(err) => {
                        log::error!("Error generating custom prediction: {}", err);
                        let recovery = plan_custom_recovery(orchestrator::load_default().await);
                        toast_ctx.show_error(recovery.alert.to_string());
                        *has_data.borrow_mut() = recovery.state.is_success();
                        state.set(recovery.state);
                    }
                }
            });
        })
    };

    DashboardHandle {
        state,
        refreshing,
        load_default,
        load_custom,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{PredictionResponse, RiskAssessment, SeriesPoint};

    fn sample_data() -> DashboardData {
        DashboardData::Default {
            stats: None,
            prediction: PredictionResponse {
                historical: vec![SeriesPoint {
                    date: "2025-08-10".to_string(),
                    value: 1000.0,
                }],
                predictions: vec![SeriesPoint {
                    date: "2025-08-17".to_string(),
                    value: 1100.0,
                }],
                risk_assessment: RiskAssessment {
                    level: "Low".to_string(),
                    color: None,
                    score: None,
                },
                trend: "Stable".to_string(),
                current_cases: None,
                predicted_cases: None,
            },
        }
    }

    #[test]
    fn first_load_shows_the_spinner() {
        assert!(matches!(begin_default_load(false), Some(FetchState::Loading)));
    }

    #[test]
    fn refresh_keeps_rendered_data_on_screen() {
        assert!(begin_default_load(true).is_none());
    }

    #[test]
    fn failed_refresh_keeps_rendered_data() {
        assert!(failed_default_load(true, "connection reset".to_string()).is_none());
    }

    #[test]
    fn failed_first_load_surfaces_the_error_page() {
        let next = failed_default_load(false, "connection reset".to_string());
        assert!(matches!(next, Some(FetchState::Error(e)) if e == "connection reset"));
    }

    #[test]
    fn failed_custom_load_recovers_to_default_with_one_alert() {
        let recovery = plan_custom_recovery(Ok(sample_data()));
        assert_eq!(
            recovery.alert,
            "Failed to generate prediction. Please try again or check your inputs."
        );
        assert!(matches!(
            recovery.state,
            FetchState::Success(DashboardData::Default { .. })
        ));
    }

    #[test]
    fn double_failure_surfaces_the_error_page() {
        let recovery = plan_custom_recovery(Err("API server unreachable".to_string()));
        assert!(matches!(recovery.state, FetchState::Error(e) if e == "API server unreachable"));
    }
}
