use common::{format_number, CustomInputSet, PredictionResponse};

use super::ViewError;

/// Executive summary for the default (national data) view.
///
/// Trend wording uses the ±10 % threshold on the change from the last
/// historical value to the average of the forecast. The custom view uses a
/// different ±5 % threshold; the asymmetry is deliberate product behavior.
pub fn default_summary(prediction: &PredictionResponse) -> Result<String, ViewError> {
    let current = prediction
        .historical
        .last()
        .ok_or(ViewError::MissingBaseline)?
        .value;
    if current == 0.0 || prediction.predictions.is_empty() {
        return Err(ViewError::MissingBaseline);
    }

    let avg_prediction = prediction.predictions.iter().map(|p| p.value).sum::<f64>()
        / prediction.predictions.len() as f64;
    let change_percent = (avg_prediction - current) / current * 100.0;

    let trend_text = if change_percent > 10.0 {
        "increasing"
    } else if change_percent < -10.0 {
        "decreasing"
    } else {
        "stable"
    };
    let projection_phrase = if change_percent > 0.0 {
        "a slight increase"
    } else if change_percent < 0.0 {
        "a slight decrease"
    } else {
        "stability"
    };

    Ok(format!(
        "The COVID-19 situation in Japan is currently assessed at a {} risk level with a {} \
         trend. National data shows {} weekly cases, with projections suggesting {} over the \
         next week. The healthcare system is anticipated to manage the current burden \
         effectively.",
        prediction.risk_assessment.level.to_lowercase(),
        trend_text,
        format_number(current),
        projection_phrase
    ))
}

fn custom_change_percent(
    prediction: &PredictionResponse,
    input: &CustomInputSet,
) -> Result<f64, ViewError> {
    let predicted = prediction
        .predictions
        .first()
        .ok_or(ViewError::MissingBaseline)?
        .value;
    if input.previous_week_cases == 0 {
        return Err(ViewError::MissingBaseline);
    }
    let previous = input.previous_week_cases as f64;
    Ok((predicted - previous) / previous * 100.0)
}

/// Executive summary for a custom prediction. Threshold is ±5 %, computed
/// from the first forecast point against the user's previous-week cases.
pub fn custom_summary(
    prediction: &PredictionResponse,
    input: &CustomInputSet,
) -> Result<String, ViewError> {
    let change_percent = custom_change_percent(prediction, input)?;

    let (trend_text, trend_description) = if change_percent > 5.0 {
        (
            "increasing",
            format!("a {:.1}% increase", change_percent.abs()),
        )
    } else if change_percent < -5.0 {
        (
            "decreasing",
            format!("a {:.1}% decrease", change_percent.abs()),
        )
    } else {
        ("stable", "relative stability".to_string())
    };

    Ok(format!(
        "The airborne disease situation in {} is currently assessed at a {} risk level with a \
         {} trend. Based on {} weekly cases, stringency index of {}, mobility at {}%, and {}% \
         vaccination rate, projections suggest {} over the next week.",
        input.location,
        prediction.risk_assessment.level.to_lowercase(),
        trend_text,
        format_number(input.previous_week_cases as f64),
        input.stringency_index,
        input.mobility,
        input.vaccination_rate,
        trend_description
    ))
}

/// Quoted model-outlook paragraph for a custom prediction.
pub fn custom_outlook(
    prediction: &PredictionResponse,
    input: &CustomInputSet,
) -> Result<String, ViewError> {
    let change_percent = custom_change_percent(prediction, input)?;
    let predicted = prediction
        .predictions
        .first()
        .ok_or(ViewError::MissingBaseline)?
        .value;

    let change_direction = if change_percent > 0.0 {
        "increase"
    } else if change_percent < 0.0 {
        "decrease"
    } else {
        "remain stable"
    };
    let mobility_sign = if input.mobility > 0 { "+" } else { "" };

    Ok(format!(
        "\"Based on the current parameters for {}, the model predicts approximately {} cases \
         for the upcoming week. This represents a {:.1}% {} from the previous week. The \
         stringency index of {}, mobility level of {}{}%, and vaccination rate of {}% are key \
         factors influencing this prediction.\"",
        input.location,
        format_number(predicted.round()),
        change_percent.abs(),
        change_direction,
        input.stringency_index,
        mobility_sign,
        input.mobility,
        input.vaccination_rate
    ))
}

/// Direction arrow + color for the "Predicted Cases Change" stat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeIndicator {
    pub display: String,
    /// Tailwind color class for the stat value.
    pub color_class: &'static str,
}

pub fn predicted_change(
    prediction: &PredictionResponse,
    input: &CustomInputSet,
) -> Result<ChangeIndicator, ViewError> {
    let change_percent = custom_change_percent(prediction, input)?;
    let abs = change_percent.abs();

    let (arrow, color_class) = if change_percent > 5.0 {
        ("↑", "text-error")
    } else if change_percent < -5.0 {
        ("↓", "text-success")
    } else {
        ("→", "text-warning")
    };

    Ok(ChangeIndicator {
        display: format!("{arrow} {abs:.1}%"),
        color_class,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{LocationMatch, RiskAssessment, SeriesPoint};

    fn prediction(historical: &[f64], predictions: &[f64], level: &str) -> PredictionResponse {
        PredictionResponse {
            historical: historical
                .iter()
                .map(|v| SeriesPoint {
                    date: "2025-08-03".to_string(),
                    value: *v,
                })
                .collect(),
            predictions: predictions
                .iter()
                .map(|v| SeriesPoint {
                    date: "2025-08-17".to_string(),
                    value: *v,
                })
                .collect(),
            risk_assessment: RiskAssessment {
                level: level.to_string(),
                color: None,
                score: None,
            },
            trend: "Stable".to_string(),
            current_cases: None,
            predicted_cases: None,
        }
    }

    fn input(previous_week_cases: u64) -> CustomInputSet {
        CustomInputSet {
            location: "France".to_string(),
            location_data: LocationMatch {
                name: "France".to_string(),
                official_name: "French Republic".to_string(),
                population: 67391582,
                region: "Europe".to_string(),
                subregion: "Western Europe".to_string(),
            },
            previous_week_cases,
            hospitalizations: None,
            stringency_index: 55,
            mobility: -10,
            vaccination_rate: 78,
            population_density: None,
        }
    }

    #[test]
    fn default_summary_reports_increasing_above_ten_percent() {
        // 1000 -> 1200 is +20%, past the default-mode ±10 threshold.
        let summary = default_summary(&prediction(&[1000.0], &[1200.0], "Moderate")).unwrap();
        assert!(summary.contains("a moderate risk level"));
        assert!(summary.contains("increasing trend"));
        assert!(summary.contains("1,000 weekly cases"));
        assert!(summary.contains("a slight increase"));
    }

    #[test]
    fn default_summary_is_stable_within_ten_percent() {
        let summary = default_summary(&prediction(&[1000.0], &[1080.0], "Low")).unwrap();
        assert!(summary.contains("stable trend"));
        assert!(summary.contains("a slight increase"));
    }

    #[test]
    fn default_summary_requires_a_baseline() {
        assert_eq!(
            default_summary(&prediction(&[], &[1200.0], "Low")),
            Err(ViewError::MissingBaseline)
        );
        assert_eq!(
            default_summary(&prediction(&[0.0], &[1200.0], "Low")),
            Err(ViewError::MissingBaseline)
        );
        assert_eq!(
            default_summary(&prediction(&[1000.0], &[], "Low")),
            Err(ViewError::MissingBaseline)
        );
    }

    #[test]
    fn custom_summary_is_stable_within_five_percent() {
        // 1000 -> 1030 is +3%, inside the custom-mode ±5 band.
        let summary = custom_summary(&prediction(&[], &[1030.0], "Low"), &input(1000)).unwrap();
        assert!(summary.contains("stable trend"));
        assert!(summary.contains("relative stability"));
        assert!(!summary.contains("increasing"));
    }

    #[test]
    fn custom_summary_reports_increase_above_five_percent() {
        let summary = custom_summary(&prediction(&[], &[1100.0], "Low"), &input(1000)).unwrap();
        assert!(summary.contains("increasing trend"));
        assert!(summary.contains("a 10.0% increase"));
        assert!(summary.contains("stringency index of 55"));
        assert!(summary.contains("mobility at -10%"));
        assert!(summary.contains("78% vaccination rate"));
    }

    #[test]
    fn custom_summary_rejects_zero_baseline() {
        assert_eq!(
            custom_summary(&prediction(&[], &[1100.0], "Low"), &input(0)),
            Err(ViewError::MissingBaseline)
        );
    }

    #[test]
    fn custom_outlook_quotes_prediction_and_direction() {
        let outlook = custom_outlook(&prediction(&[], &[1030.0], "Low"), &input(1000)).unwrap();
        assert!(outlook.starts_with('"') && outlook.ends_with('"'));
        assert!(outlook.contains("approximately 1,030 cases"));
        assert!(outlook.contains("3.0% increase"));
        assert!(outlook.contains("mobility level of -10%"));
    }

    #[test]
    fn predicted_change_partitions_at_five_percent() {
        let up = predicted_change(&prediction(&[], &[1100.0], "Low"), &input(1000)).unwrap();
        assert_eq!(up.display, "↑ 10.0%");
        assert_eq!(up.color_class, "text-error");

        let down = predicted_change(&prediction(&[], &[900.0], "Low"), &input(1000)).unwrap();
        assert_eq!(down.display, "↓ 10.0%");
        assert_eq!(down.color_class, "text-success");

        let flat = predicted_change(&prediction(&[], &[1030.0], "Low"), &input(1000)).unwrap();
        assert_eq!(flat.display, "→ 3.0%");
        assert_eq!(flat.color_class, "text-warning");
    }
}
