use crate::{
    entities::{AddressRecord, MapPoint, PostalCode},
    gateways::{directory::PostalDirectory, geocode::Geocoder},
    resolve::{query, DeclineReason, ResolutionStrategy, StrategyResult, StrategySource},
};

/// Resolves the postal code through a directory service.
///
/// The directory resolves locality text, not necessarily a coordinate:
/// when it returns one directly the strategy matches on the spot,
/// otherwise the enriched locality is handed off to the geocoder as a
/// single synthesized query.
pub struct PostalDirectoryLookup<'a> {
    directory: &'a dyn PostalDirectory,
    geocoder: &'a dyn Geocoder,
}

impl<'a> PostalDirectoryLookup<'a> {
    pub fn new(directory: &'a dyn PostalDirectory, geocoder: &'a dyn Geocoder) -> Self {
        Self {
            directory,
            geocoder,
        }
    }
}

impl ResolutionStrategy for PostalDirectoryLookup<'_> {
    fn source(&self) -> StrategySource {
        StrategySource::PostalDirectory
    }

    fn attempt(&self, record: &AddressRecord, _device_pos: Option<MapPoint>) -> StrategyResult {
        let Ok(postal_code) = record.postal_code.parse::<PostalCode>() else {
            return StrategyResult::Declined(DeclineReason::InvalidPostalCode);
        };
        let locality = match self.directory.lookup(&postal_code) {
            Ok(Some(locality)) => locality,
            Ok(None) => return StrategyResult::Declined(DeclineReason::NotFound),
            Err(err) => {
                log::warn!("Postal directory lookup for {postal_code} failed: {err}");
                return StrategyResult::Declined(DeclineReason::TransportError);
            }
        };
        if let Some(pos) = locality.pos {
            return StrategyResult::Matched(pos);
        }
        let query = query::enriched_query(record, &locality, &postal_code);
        match self.geocoder.find(&query) {
            Ok(candidates) => match candidates.first() {
                Some(pos) => StrategyResult::Matched(*pos),
                None => StrategyResult::Declined(DeclineReason::NoMatch),
            },
            Err(err) => {
                log::warn!("Failed to geocode '{query}': {err}");
                StrategyResult::Declined(DeclineReason::TransportError)
            }
        }
    }
}
