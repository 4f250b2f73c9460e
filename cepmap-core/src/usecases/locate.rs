use super::{Error, Result};
use crate::{
    entities::{AddressRecord, RegisteredUser},
    gateways::locate::DeviceLocator,
    repositories::UserRecordRepo,
    resolve::{CancelToken, ResolutionChain, ResolutionOutcome},
};

/// The registered address together with the chain's outcome for it.
#[derive(Debug, Clone)]
pub struct LocatedUser {
    pub address: AddressRecord,
    pub outcome: ResolutionOutcome,
}

/// The map-screen flow: load the stored record and resolve it.
///
/// The device position is read once up front and handed to the chain; the
/// chain itself never reaches into a store or a locator.
///
/// Returns `Ok(None)` when the token was cancelled while the chain was
/// running; the caller must discard the attempt.
pub fn locate_registered_user<R: UserRecordRepo>(
    repo: &R,
    chain: &ResolutionChain<'_>,
    locator: &dyn DeviceLocator,
    cancel: &CancelToken,
) -> Result<Option<LocatedUser>> {
    let Some(RegisteredUser { address, .. }) = repo.get()? else {
        return Err(Error::NoUserRegistered);
    };
    let device_pos = locator.current_position();
    Ok(chain
        .resolve(&address, device_pos, cancel)
        .map(|outcome| LocatedUser { address, outcome }))
}
