use crate::{
    entities::{AddressRecord, MapPoint, PostalCode},
    resolve::{DeclineReason, ResolutionNote, ResolutionStrategy, StrategyResult, StrategySource},
};

/// Anchor of the approximation box: the Brazilian national centroid.
const CENTROID: MapPoint = MapPoint::new(-14.235, -51.9253);
const LAT_HALF_EXTENT_DEG: f64 = 3.0;
const LNG_HALF_EXTENT_DEG: f64 = 5.0;

/// FNV-1a, 64 bit. Hand-rolled because the coordinate must be stable
/// across platforms and releases, which the std hasher does not guarantee.
fn fnv1a(bytes: &[u8]) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    bytes
        .iter()
        .fold(OFFSET_BASIS, |hash, b| (hash ^ u64::from(*b)).wrapping_mul(PRIME))
}

/// Maps a postal code onto a pseudo-coordinate inside the bounded box
/// around the national centroid. Pure: equal codes always yield the
/// bit-identical point, distinct codes disperse over the box.
pub fn approximate_position(postal_code: &PostalCode) -> MapPoint {
    let hash = fnv1a(postal_code.as_digits().as_bytes());
    let lat_unit = (hash >> 32) as f64 / f64::from(u32::MAX);
    let lng_unit = (hash & u64::from(u32::MAX)) as f64 / f64::from(u32::MAX);
    MapPoint::new(
        CENTROID.lat + (lat_unit * 2.0 - 1.0) * LAT_HALF_EXTENT_DEG,
        CENTROID.lng + (lng_unit * 2.0 - 1.0) * LNG_HALF_EXTENT_DEG,
    )
}

/// Last resort: a deterministic pseudo-coordinate derived from the postal
/// code, so that the chain always terminates with *some* point when every
/// network strategy has failed. Never declines given a parseable postal
/// code, and always tagged as a partial resolution.
pub struct PostalCodeApproximation;

impl ResolutionStrategy for PostalCodeApproximation {
    fn source(&self) -> StrategySource {
        StrategySource::PostalCodeApproximation
    }

    fn attempt(&self, record: &AddressRecord, _device_pos: Option<MapPoint>) -> StrategyResult {
        if record.postal_code.trim().is_empty() {
            return StrategyResult::Declined(DeclineReason::MissingPostalCode);
        }
        let Ok(postal_code) = record.postal_code.parse::<PostalCode>() else {
            return StrategyResult::Declined(DeclineReason::InvalidPostalCode);
        };
        StrategyResult::MatchedApproximately(
            approximate_position(&postal_code),
            ResolutionNote::ApproximateFromPostalCode,
        )
    }
}
