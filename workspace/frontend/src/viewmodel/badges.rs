use common::RiskAssessment;

/// Risk badge shown in the assessment card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskBadge {
    pub text: String,
    pub icon: &'static str,
    pub css_class: String,
}

/// Low and Moderate have dedicated icons; every other level renders as high
/// risk. Unknown levels fall through to 🔴, never to an error state.
pub fn risk_badge(assessment: &RiskAssessment) -> RiskBadge {
    let icon = match assessment.level.as_str() {
        "Low" => "✅",
        "Moderate" => "⚠️",
        _ => "🔴",
    };

    RiskBadge {
        text: assessment.level.clone(),
        icon,
        css_class: format!("risk-level {}", assessment.level.to_lowercase()),
    }
}

/// Trend badge with its background gradient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendBadge {
    pub text: String,
    pub gradient: &'static str,
}

pub fn trend_badge(trend: &str) -> TrendBadge {
    let gradient = match trend {
        "Increasing" => "linear-gradient(135deg, #ef4444 0%, #dc2626 100%)",
        "Decreasing" => "linear-gradient(135deg, #10b981 0%, #059669 100%)",
        _ => "linear-gradient(135deg, #4a90e2 0%, #06b6d4 100%)",
    };

    TrendBadge {
        text: trend.to_string(),
        gradient,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assessment(level: &str) -> RiskAssessment {
        RiskAssessment {
            level: level.to_string(),
            color: None,
            score: None,
        }
    }

    #[test]
    fn known_levels_have_dedicated_icons() {
        assert_eq!(risk_badge(&assessment("Low")).icon, "✅");
        assert_eq!(risk_badge(&assessment("Moderate")).icon, "⚠️");
        assert_eq!(risk_badge(&assessment("High")).icon, "🔴");
    }

    #[test]
    fn unknown_levels_fall_back_to_high_risk_icon() {
        for level in ["Severe", "critical", "", "low"] {
            assert_eq!(risk_badge(&assessment(level)).icon, "🔴", "level={level}");
        }
    }

    #[test]
    fn badge_carries_lowercased_css_class() {
        let badge = risk_badge(&assessment("Moderate"));
        assert_eq!(badge.text, "Moderate");
        assert_eq!(badge.css_class, "risk-level moderate");
    }

    #[test]
    fn trend_gradients() {
        assert!(trend_badge("Increasing").gradient.contains("#ef4444"));
        assert!(trend_badge("Decreasing").gradient.contains("#10b981"));
        assert!(trend_badge("Stable").gradient.contains("#06b6d4"));
        assert!(trend_badge("anything else").gradient.contains("#06b6d4"));
    }
}
