use crate::{
    entities::{AddressRecord, MapPoint},
    resolve::{DeclineReason, ResolutionNote, ResolutionStrategy, StrategyResult, StrategySource},
};

/// The device's own position stands in for the address.
///
/// Always tagged as a partial resolution: the coordinate is where the
/// device is, not where the registered address is.
pub struct DeviceFallback;

impl ResolutionStrategy for DeviceFallback {
    fn source(&self) -> StrategySource {
        StrategySource::DeviceLocation
    }

    fn attempt(&self, _record: &AddressRecord, device_pos: Option<MapPoint>) -> StrategyResult {
        match device_pos {
            Some(pos) => {
                StrategyResult::MatchedApproximately(pos, ResolutionNote::UsedDeviceLocation)
            }
            None => StrategyResult::Declined(DeclineReason::NoDeviceLocation),
        }
    }
}
