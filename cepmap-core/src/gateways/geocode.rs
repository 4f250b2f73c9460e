use cepmap_entities::geo::MapPoint;

use super::GatewayError;

pub trait Geocoder {
    /// Forward-geocodes a free-text query.
    ///
    /// Returns the candidates ordered best first; an empty list means the
    /// service found no match.
    fn find(&self, query: &str) -> Result<Vec<MapPoint>, GatewayError>;
}
