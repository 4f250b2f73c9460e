use crate::{
    entities::{AddressRecord, MapPoint},
    gateways::geocode::Geocoder,
    resolve::{query, DeclineReason, ResolutionStrategy, StrategyResult, StrategySource},
};

/// One forward-geocoding request over whatever address fields are present,
/// taking the highest-ranked candidate.
pub struct FreeTextGeocoding<'a> {
    geocoder: &'a dyn Geocoder,
}

impl<'a> FreeTextGeocoding<'a> {
    pub fn new(geocoder: &'a dyn Geocoder) -> Self {
        Self { geocoder }
    }
}

impl ResolutionStrategy for FreeTextGeocoding<'_> {
    fn source(&self) -> StrategySource {
        StrategySource::FreeTextGeocoder
    }

    fn attempt(&self, record: &AddressRecord, _device_pos: Option<MapPoint>) -> StrategyResult {
        let query = query::free_text_query(record);
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
