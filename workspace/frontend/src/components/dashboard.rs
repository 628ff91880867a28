pub mod chart;
pub mod drivers;
pub mod stats;
pub mod summary;

use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

use crate::common::error::ErrorDisplay;
use crate::common::loading::Loading;
use crate::components::input_modal::InputModal;
use crate::components::layout::Layout;
use crate::hooks::{use_dashboard_loader, FetchState};
use crate::orchestrator::DashboardData;
use crate::viewmodel::{risk_badge, trend_badge};
use crate::{session, settings};

use chart::TrajectoryChart;
use drivers::DriversGrid;
use stats::StatsRow;
use summary::SummaryCard;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let loader = use_dashboard_loader();
    let show_modal = use_state(|| false);
    let first_visit = use_state(|| !session::has_ever_submitted());

    // First load: returning users get default data immediately; first-time
    // users get the input modal after a short delay instead.
    {
        let load_default = loader.load_default.clone();
        let show_modal = show_modal.clone();
        use_effect_with((), move |_| {
            if session::has_ever_submitted() {
                load_default.emit(());
            } else {
                log::info!("First visit detected, opening the input modal");
                Timeout::new(500, move || show_modal.set(true)).forget();
            }
            || ()
        });
    }

    // Auto-refresh reloads the default view unconditionally; no user action
    // cancels or resets it.
    {
        let load_default = loader.load_default.clone();
        use_effect_with((), move |_| {
            let interval =
                Interval::new(settings::get_settings().refresh_interval_ms, move || {
                    log::info!("Auto-refreshing data...");
                    load_default.emit(());
                });
            move || drop(interval)
        });
    }

    let on_open_input = {
        let show_modal = show_modal.clone();
        Callback::from(move |_| show_modal.set(true))
    };
    let on_close_input = {
        let show_modal = show_modal.clone();
        Callback::from(move |_| show_modal.set(false))
    };
    let on_submit_input = {
        let show_modal = show_modal.clone();
        let first_visit = first_visit.clone();
        let load_custom = loader.load_custom.clone();
        Callback::from(move |input: common::CustomInputSet| {
            log::info!("Custom input submitted for: {}", input.location);
            session::save(&input);
            first_visit.set(false);
            show_modal.set(false);
            load_custom.emit(input);
        })
    };

    let subtitle = match loader.state.data().and_then(DashboardData::custom_input) {
        Some(input) => format!("Real-time Analysis for {}", input.location),
        None => "Real-time Analysis for Japan".to_string(),
    };

    let body = match &*loader.state {
        FetchState::Idle => html! {
            <div class="text-center py-16 text-gray-500">
                <i class="fas fa-virus text-4xl mb-4 opacity-50"></i>
                <p>{"Enter your location to generate your first forecast."}</p>
            </div>
        },
        FetchState::Loading => html! {
            <Loading text={"Analyzing current trajectory...".to_string()} />
        },
        FetchState::Error(error) => html! {
            <ErrorDisplay message={error.clone()} on_retry={Some(loader.load_default.clone())} />
        },
        FetchState::Success(data) => html! { <DashboardView data={data.clone()} /> },
    };

    html! {
        <Layout
            subtitle={subtitle}
            analyzing={*loader.refreshing}
            on_analyze={loader.load_default.clone()}
            on_open_input={on_open_input}
        >
            {body}
            <InputModal
                show={*show_modal}
                first_visit={*first_visit}
                on_close={on_close_input}
                on_submit={on_submit_input}
            />
        </Layout>
    }
}

#[derive(Properties, PartialEq)]
struct DashboardViewProps {
    data: DashboardData,
}

#[function_component(DashboardView)]
fn dashboard_view(props: &DashboardViewProps) -> Html {
    let prediction = props.data.prediction();
    let risk = risk_badge(&prediction.risk_assessment);
    let trend = trend_badge(&prediction.trend);

    html! {
        <>
            <StatsRow data={props.data.clone()} />

            <div class="card bg-base-100 shadow mb-6">
                <div class="card-body flex-row items-center justify-between">
                    <div class="flex items-center gap-3">
                        <span class="text-3xl">{risk.icon}</span>
                        <div>
                            <div class="text-sm text-gray-500">{"Outbreak Risk"}</div>
                            <div class={classes!("text-xl", "font-bold", risk.css_class)}>
                                {&risk.text}
                            </div>
                        </div>
                    </div>
                    <span
                        class="badge badge-lg text-white border-0 px-4"
                        style={format!("background: {}", trend.gradient)}
                    >
                        {&trend.text}
                    </span>
                </div>
            </div>

            <TrajectoryChart
                historical={prediction.historical.clone()}
                predictions={prediction.predictions.clone()}
            />

            <SummaryCard data={props.data.clone()} />

            {if let Some(input) = props.data.custom_input() {
                html! { <DriversGrid input={input.clone()} /> }
            } else {
                html! {}
            }}
        </>
    }
}
