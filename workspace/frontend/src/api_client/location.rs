use common::LocationMatch;
use serde::Deserialize;

use crate::{api_client, settings};

/// Raw REST Countries `v3.1/name/{query}` candidate; only the fields the
/// dashboard consumes.
#[derive(Debug, Deserialize)]
struct Candidate {
    name: CandidateName,
    #[serde(default)]
    population: u64,
    #[serde(default)]
    region: String,
    #[serde(default)]
    subregion: String,
}

#[derive(Debug, Deserialize)]
struct CandidateName {
    common: String,
    official: String,
}

impl From<Candidate> for LocationMatch {
    fn from(candidate: Candidate) -> Self {
        LocationMatch {
            name: candidate.name.common,
            official_name: candidate.name.official,
            population: candidate.population,
            region: candidate.region,
            subregion: candidate.subregion,
        }
    }
}

/// Look up a free-text location against the external directory.
///
/// The first candidate wins; there is no ranking or disambiguation. An empty
/// candidate list is treated the same as a failed lookup.
pub async fn lookup_location(query: &str) -> Result<LocationMatch, String> {
    let base = settings::get_settings().lookup_base_url;
    let encoded = js_sys::encode_uri_component(query);
    let url = format!("{}/name/{}", base, String::from(encoded));

    log::debug!("Looking up location: {}", query);
    let candidates: Vec<Candidate> = api_client::get_absolute(&url).await?;

    match candidates.into_iter().next() {
        Some(first) => {
            let matched = LocationMatch::from(first);
            log::info!("Location accepted: {} ({})", matched.name, matched.region);
            Ok(matched)
        }
        None => {
            log::warn!("Location lookup returned no candidates for: {}", query);
            Err("Location not found".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_maps_to_location_match() {
        let json = r#"{
            "name": {"common": "Japan", "official": "Japan"},
            "population": 125836021,
            "region": "Asia",
            "subregion": "Eastern Asia"
        }"#;
        let candidate: Candidate = serde_json::from_str(json).unwrap();
        let matched = LocationMatch::from(candidate);
        assert_eq!(matched.name, "Japan");
        assert_eq!(matched.region, "Asia");
        assert_eq!(matched.population, 125836021);
    }

    #[test]
    fn candidate_tolerates_sparse_payload() {
        let json = r#"{"name": {"common": "Atlantis", "official": "Kingdom of Atlantis"}}"#;
        let candidate: Candidate = serde_json::from_str(json).unwrap();
        assert_eq!(candidate.population, 0);
        assert_eq!(candidate.region, "");
    }
}
