use common::CustomInputSet;

/// One narrative card in the Key Drivers grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverCard {
    pub title: &'static str,
    pub description: String,
    pub icon: &'static str,
}

/// The three classifiers, one per input dimension. Each partition is
/// exhaustive: every value lands in exactly one band.
pub fn key_drivers(input: &CustomInputSet) -> [DriverCard; 3] {
    [
        vaccination_driver(input),
        stringency_driver(input),
        mobility_driver(input),
    ]
}

fn vaccination_driver(input: &CustomInputSet) -> DriverCard {
    let rate = input.vaccination_rate;
    let location = &input.location;

    if rate >= 70 {
        DriverCard {
            title: "HIGH VACCINATION COVERAGE",
            description: format!(
                "With {rate}% vaccination rate in {location}, the population has strong \
                 immunity protection, significantly reducing severe outcomes and transmission."
            ),
            icon: "💉",
        }
    } else if rate >= 40 {
        DriverCard {
            title: "MODERATE VACCINATION COVERAGE",
            description: format!(
                "{location} has achieved {rate}% vaccination coverage, providing partial \
                 population immunity but leaving room for improvement."
            ),
            icon: "💉",
        }
    } else {
        DriverCard {
            title: "LOW VACCINATION COVERAGE",
            description: format!(
                "With only {rate}% vaccination rate, {location} faces higher risk of severe \
                 outcomes and continued transmission."
            ),
            icon: "⚠️",
        }
    }
}

fn stringency_driver(input: &CustomInputSet) -> DriverCard {
    let stringency = input.stringency_index;
    let location = &input.location;

    if stringency >= 70 {
        DriverCard {
            title: "STRICT GOVERNMENT MEASURES",
            description: format!(
                "{location} has implemented strict restrictions (stringency: \
                 {stringency}/100), significantly limiting social interactions and \
                 transmission opportunities."
            ),
            icon: "🔒",
        }
    } else if stringency >= 30 {
        DriverCard {
            title: "MODERATE RESTRICTIONS",
            description: format!(
                "Government response in {location} maintains moderate measures (stringency: \
                 {stringency}/100), balancing public health with economic activity."
            ),
            icon: "⚖️",
        }
    } else {
        DriverCard {
            title: "MINIMAL RESTRICTIONS",
            description: format!(
                "{location} has relaxed most public health measures (stringency: \
                 {stringency}/100), prioritizing personal responsibility and economic \
                 recovery."
            ),
            icon: "🔓",
        }
    }
}

fn mobility_driver(input: &CustomInputSet) -> DriverCard {
    let mobility = input.mobility;
    let location = &input.location;

    if mobility >= 20 {
        DriverCard {
            title: "ELEVATED MOBILITY",
            description: format!(
                "Population movement in {location} is {mobility}% above baseline, increasing \
                 transmission opportunities through higher social interactions."
            ),
            icon: "🚶‍♂️",
        }
    } else if mobility >= -20 {
        let sign = if mobility > 0 { "+" } else { "" };
        DriverCard {
            title: "NORMAL MOBILITY PATTERNS",
            description: format!(
                "{location} shows near-baseline mobility ({sign}{mobility}%), with typical \
                 levels of social interaction and movement."
            ),
            icon: "🚶",
        }
    } else {
        DriverCard {
            title: "REDUCED MOBILITY",
            description: format!(
                "Movement in {location} is {}% below baseline, significantly reducing \
                 transmission opportunities through limited social contact.",
                mobility.abs()
            ),
            icon: "🏠",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::LocationMatch;

    fn input(vaccination_rate: u8, stringency_index: u8, mobility: i32) -> CustomInputSet {
        CustomInputSet {
            location: "France".to_string(),
            location_data: LocationMatch {
                name: "France".to_string(),
                official_name: "French Republic".to_string(),
                population: 67391582,
                region: "Europe".to_string(),
                subregion: "Western Europe".to_string(),
            },
            previous_week_cases: 1000,
            hospitalizations: None,
            stringency_index,
            mobility,
            vaccination_rate,
            population_density: None,
        }
    }

    #[test]
    fn vaccination_partition_is_exhaustive_without_overlap() {
        for rate in 0..=100u8 {
            let card = vaccination_driver(&input(rate, 50, 0));
            let expected = if rate >= 70 {
                "HIGH VACCINATION COVERAGE"
            } else if rate >= 40 {
                "MODERATE VACCINATION COVERAGE"
            } else {
                "LOW VACCINATION COVERAGE"
            };
            assert_eq!(card.title, expected, "rate={rate}");
        }
    }

    #[test]
    fn vaccination_band_edges() {
        assert_eq!(
            vaccination_driver(&input(70, 50, 0)).title,
            "HIGH VACCINATION COVERAGE"
        );
        assert_eq!(
            vaccination_driver(&input(69, 50, 0)).title,
            "MODERATE VACCINATION COVERAGE"
        );
        assert_eq!(
            vaccination_driver(&input(40, 50, 0)).title,
            "MODERATE VACCINATION COVERAGE"
        );
        assert_eq!(
            vaccination_driver(&input(39, 50, 0)).title,
            "LOW VACCINATION COVERAGE"
        );
        assert_eq!(vaccination_driver(&input(39, 50, 0)).icon, "⚠️");
    }

    #[test]
    fn stringency_band_edges() {
        assert_eq!(
            stringency_driver(&input(50, 70, 0)).title,
            "STRICT GOVERNMENT MEASURES"
        );
        assert_eq!(
            stringency_driver(&input(50, 30, 0)).title,
            "MODERATE RESTRICTIONS"
        );
        assert_eq!(
            stringency_driver(&input(50, 29, 0)).title,
            "MINIMAL RESTRICTIONS"
        );
        assert!(stringency_driver(&input(50, 45, 0))
            .description
            .contains("stringency: 45/100"));
    }

    #[test]
    fn mobility_band_edges() {
        assert_eq!(mobility_driver(&input(50, 50, 20)).title, "ELEVATED MOBILITY");
        assert_eq!(
            mobility_driver(&input(50, 50, 19)).title,
            "NORMAL MOBILITY PATTERNS"
        );
        assert_eq!(
            mobility_driver(&input(50, 50, -20)).title,
            "NORMAL MOBILITY PATTERNS"
        );
        assert_eq!(mobility_driver(&input(50, 50, -21)).title, "REDUCED MOBILITY");
    }

    #[test]
    fn reduced_mobility_reports_absolute_deviation() {
        let card = mobility_driver(&input(50, 50, -25));
        assert_eq!(card.title, "REDUCED MOBILITY");
        assert_eq!(card.icon, "🏠");
        assert!(card.description.contains("25% below baseline"));
    }

    #[test]
    fn normal_mobility_signs_positive_values() {
        assert!(mobility_driver(&input(50, 50, 10))
            .description
            .contains("(+10%)"));
        assert!(mobility_driver(&input(50, 50, -10))
            .description
            .contains("(-10%)"));
        assert!(mobility_driver(&input(50, 50, 0))
            .description
            .contains("(0%)"));
    }

    #[test]
    fn key_drivers_returns_all_three_dimensions() {
        let cards = key_drivers(&input(78, 55, -10));
        assert_eq!(cards[0].title, "HIGH VACCINATION COVERAGE");
        assert_eq!(cards[1].title, "MODERATE RESTRICTIONS");
        assert_eq!(cards[2].title, "NORMAL MOBILITY PATTERNS");
        for card in &cards {
            assert!(card.description.contains("France"));
        }
    }
}
