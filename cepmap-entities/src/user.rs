use serde::{Deserialize, Serialize};

use crate::address::AddressRecord;

/// The single persisted user: the login password plus the registered
/// address, stored as one flat JSON blob under a fixed key.
///
/// The password is kept in plain text on purpose; there is exactly one
/// local user and no account system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub password: String,
    #[serde(flatten)]
    pub address: AddressRecord,
}
