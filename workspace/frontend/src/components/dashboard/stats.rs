use yew::prelude::*;

use crate::orchestrator::DashboardData;
use crate::viewmodel::{custom_stat_panels, default_stat_panels, StatPanel};

#[derive(Properties, PartialEq)]
pub struct StatsRowProps {
    pub data: DashboardData,
}

/// The three stat cards at the top of the page.
#[function_component(StatsRow)]
pub fn stats_row(props: &StatsRowProps) -> Html {
    let panels = match &props.data {
        DashboardData::Default { stats, .. } => default_stat_panels(stats.as_ref()),
        DashboardData::Custom { input, prediction } => custom_stat_panels(input, prediction),
    };

    html! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-4 mb-6">
            {for panels.iter().map(stat_card)}
        </div>
    }
}

fn stat_card(panel: &StatPanel) -> Html {
    html! {
        <div class="stats shadow bg-base-100">
            <div class="stat">
                <div class="stat-title">{&panel.label}</div>
                <div class={classes!("stat-value", "text-2xl", (!panel.value_class.is_empty()).then_some(panel.value_class))}>
                    {&panel.value}
                </div>
                <div class="stat-desc">{&panel.sublabel}</div>
            </div>
        </div>
    }
}
