use yew::prelude::*;

use crate::orchestrator::DashboardData;
use crate::viewmodel::{custom_outlook, custom_summary, default_summary};

#[derive(Properties, PartialEq)]
pub struct SummaryCardProps {
    pub data: DashboardData,
}

/// Executive summary card; custom mode adds the quoted model outlook.
#[function_component(SummaryCard)]
pub fn summary_card(props: &SummaryCardProps) -> Html {
    let (summary, outlook) = match &props.data {
        DashboardData::Default { prediction, .. } => (default_summary(prediction), None),
        DashboardData::Custom { input, prediction } => (
            custom_summary(prediction, input),
            Some(custom_outlook(prediction, input)),
        ),
    };

    let summary_html = match summary {
        Ok(text) => html! { <p>{text}</p> },
        Err(e) => {
            log::warn!("Executive summary unavailable: {}", e);
            html! { <p class="text-gray-500 italic">{format!("Summary unavailable: {e}.")}</p> }
        }
    };

    html! {
        <div class="card bg-base-100 shadow mb-6">
            <div class="card-body">
                <h3 class="card-title text-lg">{"Executive Summary"}</h3>
                {summary_html}
                {match outlook {
                    Some(Ok(text)) => html! {
                        <p class="text-sm text-gray-500 mt-2"><em>{text}</em></p>
                    },
                    Some(Err(_)) | None => html! {},
                }}
            </div>
        </div>
    }
}
