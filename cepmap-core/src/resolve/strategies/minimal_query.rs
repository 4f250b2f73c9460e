use crate::{
    entities::{AddressRecord, MapPoint},
    gateways::geocode::Geocoder,
    resolve::{query, DeclineReason, ResolutionStrategy, StrategyResult, StrategySource},
};

/// A deliberately narrow query of postal code and house number only.
///
/// Over-specific free text sometimes fails to match while the minimal
/// query succeeds, so this runs after the richer query has declined.
pub struct MinimalQueryGeocoding<'a> {
    geocoder: &'a dyn Geocoder,
}

impl<'a> MinimalQueryGeocoding<'a> {
    pub fn new(geocoder: &'a dyn Geocoder) -> Self {
        Self { geocoder }
    }
}

impl ResolutionStrategy for MinimalQueryGeocoding<'_> {
    fn source(&self) -> StrategySource {
        StrategySource::MinimalQueryGeocoder
    }

    fn attempt(&self, record: &AddressRecord, _device_pos: Option<MapPoint>) -> StrategyResult {
        let Some(query) = query::minimal_query(record) else {
            return StrategyResult::Declined(DeclineReason::InsufficientAddressData);
        };
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
