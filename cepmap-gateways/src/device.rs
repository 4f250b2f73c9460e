use cepmap_core::gateways::locate::DeviceLocator;
use cepmap_entities::geo::MapPoint;

/// Stands in for a device without location permission: there is never a
/// fix, which the resolution chain treats as "absent", not as an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDeviceLocator;

impl DeviceLocator for NoDeviceLocator {
    fn current_position(&self) -> Option<MapPoint> {
        None
    }
}

/// A locator pinned to a configured position, for hosts without any
/// location hardware.
#[derive(Debug, Clone, Copy)]
pub struct FixedDeviceLocator {
    pos: MapPoint,
}

impl FixedDeviceLocator {
    pub const fn new(pos: MapPoint) -> Self {
        Self { pos }
    }
}

impl DeviceLocator for FixedDeviceLocator {
    fn current_position(&self) -> Option<MapPoint> {
        Some(self.pos)
    }
}
