use serde::{Deserialize, Serialize};

/// Accepted result of a location lookup.
///
/// At most one match is current at a time; a new lookup replaces it whether
/// or not the previous request has resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationMatch {
    pub name: String,
    pub official_name: String,
    pub population: u64,
    pub region: String,
    #[serde(default)]
    pub subregion: String,
}

/// User-supplied parameter set sent to `POST /predict-custom`.
///
/// Field names follow the endpoint's camelCase contract. `location_data`
/// must hold the accepted [`LocationMatch`] for `location`; the input modal
/// refuses to build this struct otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomInputSet {
    pub location: String,
    pub location_data: LocationMatch,
    pub previous_week_cases: u64,
    pub hospitalizations: Option<u64>,
    /// 0..=100, strictness of public-health restrictions.
    pub stringency_index: u8,
    /// Signed percent deviation from baseline movement.
    pub mobility: i32,
    /// 0..=100.
    pub vaccination_rate: u8,
    pub population_density: Option<u32>,
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
    fn custom_input_serializes_with_camel_case_keys() {
        let input = CustomInputSet {
            location: "France".to_string(),
            location_data: sample_match(),
            previous_week_cases: 12500,
            hospitalizations: Some(430),
            stringency_index: 55,
            mobility: -10,
            vaccination_rate: 78,
            population_density: None,
        };

        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["previousWeekCases"], 12500);
        assert_eq!(json["stringencyIndex"], 55);
        assert_eq!(json["vaccinationRate"], 78);
        assert_eq!(json["locationData"]["officialName"], "French Republic");
        assert!(json["hospitalizations"].is_number());
        assert!(json["populationDensity"].is_null());
    }

    #[test]
    fn location_match_tolerates_missing_subregion() {
        let json = r#"{
            "name": "Antarctica",
            "officialName": "Antarctica",
            "population": 1000,
            "region": "Antarctic"
        }"#;
        let parsed: LocationMatch = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.subregion, "");
    }

    #[test]
    fn custom_input_round_trips() {
        let input = CustomInputSet {
            location: "France".to_string(),
            location_data: sample_match(),
            previous_week_cases: 1000,
            hospitalizations: None,
            stringency_index: 50,
            mobility: 0,
            vaccination_rate: 50,
            population_density: Some(120),
        };
        let json = serde_json::to_string(&input).unwrap();
        let back: CustomInputSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, input);
    }
}
