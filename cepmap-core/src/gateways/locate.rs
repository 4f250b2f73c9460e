use cepmap_entities::geo::MapPoint;

pub trait DeviceLocator {
    /// One-shot read of the current device position.
    ///
    /// A device without location permission or without a fix yields
    /// `None`, never an error.
    fn current_position(&self) -> Option<MapPoint>;
}
