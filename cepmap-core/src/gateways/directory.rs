use cepmap_entities::{geo::MapPoint, postal_code::PostalCode};

use super::GatewayError;

/// Locality fields registered for a postal code.
///
/// Some directories also hand back a coordinate; most only return locality
/// text that is fed into a geocoder query afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Locality {
    pub street: Option<String>,
    pub neighborhood: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pos: Option<MapPoint>,
}

pub trait PostalDirectory {
    /// Looks up the locality registered for a postal code.
    ///
    /// `Ok(None)` is the directory's explicit "not found" answer, distinct
    /// from a transport failure.
    fn lookup(&self, postal_code: &PostalCode) -> Result<Option<Locality>, GatewayError>;
}
