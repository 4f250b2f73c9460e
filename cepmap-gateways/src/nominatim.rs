use serde::Deserialize;

use cepmap_core::gateways::{geocode::Geocoder, GatewayError};
use cepmap_entities::geo::MapPoint;

const DEFAULT_RESULT_LIMIT: u8 = 1;

/// Client for a Nominatim-compatible forward geocoder.
///
/// The usage policy requires an identifying `User-Agent`; anonymous
/// traffic is rate-limited or blocked. The header is therefore a
/// constructor argument, not an option.
#[derive(Debug, Clone)]
pub struct Nominatim {
    client: reqwest::blocking::Client,
    base_url: String,
    limit: u8,
}

impl Nominatim {
    pub fn new(base_url: impl Into<String>, user_agent: &str) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            limit: DEFAULT_RESULT_LIMIT,
        })
    }

    pub fn with_result_limit(mut self, limit: u8) -> Self {
        self.limit = limit;
        self
    }
}

/// `lat`/`lon` arrive as numeric strings from Nominatim itself, but
/// compatible services deliver plain numbers.
#[derive(Debug, Deserialize)]
struct SearchResult {
    lat: CoordValue,
    lon: CoordValue,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CoordValue {
    Number(f64),
    Text(String),
}

impl CoordValue {
    fn to_deg(&self) -> Option<f64> {
        match self {
            Self::Number(deg) => Some(*deg),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl SearchResult {
    fn to_map_point(&self) -> Option<MapPoint> {
        Some(MapPoint::new(self.lat.to_deg()?, self.lon.to_deg()?))
    }
}

fn to_candidates(results: &[SearchResult], query: &str) -> Vec<MapPoint> {
    results
        .iter()
        .filter_map(|result| {
            let pos = result.to_map_point();
            if pos.is_none() {
                log::warn!("Discarding candidate with unparseable coordinates for '{query}'");
            }
            pos
        })
        .collect()
}

impl Geocoder for Nominatim {
    fn find(&self, query: &str) -> Result<Vec<MapPoint>, GatewayError> {
        let url = format!("{}/search", self.base_url);
        let limit = self.limit.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[("q", query), ("format", "json"), ("limit", limit.as_str())])
            .send()
            .map_err(|err| GatewayError::Transport(err.into()))?;
        if !response.status().is_success() {
            return Err(GatewayError::Status(response.status().as_u16()));
        }
        let results: Vec<SearchResult> = response
            .json()
            .map_err(|err| GatewayError::Response(err.into()))?;
        Ok(to_candidates(&results, query))
    }
}
