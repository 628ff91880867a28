use common::{format_number, CurrentStats, CustomInputSet, PredictionResponse};

use super::summary::predicted_change;

/// One stat card: label, big value, sub-label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatPanel {
    pub label: String,
    pub value: String,
    pub sublabel: String,
    /// Tailwind color class for the value, empty for the default color.
    pub value_class: &'static str,
}

impl StatPanel {
    fn plain(label: impl Into<String>, value: impl Into<String>, sublabel: impl Into<String>) -> Self {
        StatPanel {
            label: label.into(),
            value: value.into(),
            sublabel: sublabel.into(),
            value_class: "",
        }
    }
}

/// Stat cards for the default (national data) view. A failed stats fetch
/// degrades the panels to N/A instead of hiding them.
pub fn default_stat_panels(stats: Option<&CurrentStats>) -> [StatPanel; 3] {
    match stats {
        Some(stats) => {
            let week = format!("week ending {}", stats.date);
            [
                StatPanel::plain(
                    "Weekly Airborne Disease Cases",
                    format_number(stats.weekly_cases),
                    week.clone(),
                ),
                StatPanel::plain(
                    "Disease-Related Hospitalizations",
                    format_number(stats.hospitalizations),
                    week.clone(),
                ),
                StatPanel::plain("Dominant Variant", stats.variant.clone(), week),
            ]
        }
        None => [
            StatPanel::plain("Weekly Airborne Disease Cases", "N/A", "unavailable"),
            StatPanel::plain("Disease-Related Hospitalizations", "N/A", "unavailable"),
            StatPanel::plain("Dominant Variant", "N/A", "unavailable"),
        ],
    }
}

/// Stat cards for a custom prediction: the user's own numbers plus the
/// predicted change indicator.
pub fn custom_stat_panels(
    input: &CustomInputSet,
    prediction: &PredictionResponse,
) -> [StatPanel; 3] {
    let cases = StatPanel::plain(
        format!("Weekly Airborne Disease Cases ({})", input.location),
        format_number(input.previous_week_cases as f64),
        "user input",
    );

    let hospitalizations = match input.hospitalizations {
        Some(count) => StatPanel::plain(
            format!("Disease-Related Hospitalizations ({})", input.location),
            format_number(count as f64),
            "user input",
        ),
        None => StatPanel::plain(
            format!("Disease-Related Hospitalizations ({})", input.location),
            "N/A",
            "not provided",
        ),
    };

    let change = match predicted_change(prediction, input) {
        Ok(indicator) => StatPanel {
            label: "Predicted Cases Change".to_string(),
            value: indicator.display,
            sublabel: "next week forecast".to_string(),
            value_class: indicator.color_class,
        },
        Err(e) => StatPanel::plain("Predicted Cases Change", "N/A", e.to_string()),
    };

    [cases, hospitalizations, change]
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{LocationMatch, RiskAssessment, SeriesPoint};

    fn stats() -> CurrentStats {
        CurrentStats {
            weekly_cases: 41230.4,
            hospitalizations: 1200.0,
            positive_rate: 0.18,
            variant: "PQ.2".to_string(),
            date: "Aug 17, 2025".to_string(),
        }
    }

    fn input(hospitalizations: Option<u64>) -> CustomInputSet {
        CustomInputSet {
            location: "France".to_string(),
            location_data: LocationMatch {
                name: "France".to_string(),
                official_name: "French Republic".to_string(),
                population: 67391582,
                region: "Europe".to_string(),
                subregion: "Western Europe".to_string(),
            },
            previous_week_cases: 12500,
            hospitalizations,
            stringency_index: 55,
            mobility: -10,
            vaccination_rate: 78,
            population_density: None,
        }
    }

    fn prediction(first_value: f64) -> PredictionResponse {
        PredictionResponse {
            historical: vec![],
            predictions: vec![SeriesPoint {
                date: "2025-08-24".to_string(),
                value: first_value,
            }],
            risk_assessment: RiskAssessment {
                level: "Low".to_string(),
                color: None,
                score: None,
            },
            trend: "Stable".to_string(),
            current_cases: None,
            predicted_cases: None,
        }
    }

    #[test]
    fn default_panels_show_formatted_stats() {
        let panels = default_stat_panels(Some(&stats()));
        assert_eq!(panels[0].value, "41,230");
        assert_eq!(panels[0].sublabel, "week ending Aug 17, 2025");
        assert_eq!(panels[1].value, "1,200");
        assert_eq!(panels[2].value, "PQ.2");
    }

    #[test]
    fn missing_stats_degrade_to_na() {
        let panels = default_stat_panels(None);
        for panel in &panels {
            assert_eq!(panel.value, "N/A");
            assert_eq!(panel.sublabel, "unavailable");
        }
    }

    #[test]
    fn custom_panels_carry_location_and_user_input_labels() {
        let panels = custom_stat_panels(&input(Some(430)), &prediction(12800.0));
        assert_eq!(panels[0].label, "Weekly Airborne Disease Cases (France)");
        assert_eq!(panels[0].value, "12,500");
        assert_eq!(panels[0].sublabel, "user input");
        assert_eq!(panels[1].value, "430");
    }

    #[test]
    fn omitted_hospitalizations_render_not_provided() {
        let panels = custom_stat_panels(&input(None), &prediction(12800.0));
        assert_eq!(panels[1].value, "N/A");
        assert_eq!(panels[1].sublabel, "not provided");
    }

    #[test]
    fn change_panel_uses_indicator() {
        let panels = custom_stat_panels(&input(None), &prediction(12800.0));
        assert_eq!(panels[2].value, "→ 2.4%");
        assert_eq!(panels[2].value_class, "text-warning");
        assert_eq!(panels[2].sublabel, "next week forecast");
    }

    #[test]
    fn change_panel_degrades_without_forecast() {
        let mut missing = prediction(0.0);
        missing.predictions.clear();
        let panels = custom_stat_panels(&input(None), &missing);
        assert_eq!(panels[2].value, "N/A");
        assert_eq!(panels[2].sublabel, "baseline case count is missing or zero");
    }
}
