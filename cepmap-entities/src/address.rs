use serde::{Deserialize, Serialize};

/// The structured address captured by the registration form.
///
/// `postal_code` and `number` are the minimum fields required for any
/// geocoding attempt; all other fields are enrichment only. The record is
/// overwritten wholesale on re-registration and never mutated by the
/// resolution subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressRecord {
    pub name: String,
    pub postal_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,
    pub number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Two-letter state code when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl AddressRecord {
    /// `true` if at least one of the two lookup-relevant fields is filled
    /// in. A record without both is not worth a single network call.
    pub fn has_lookup_fields(&self) -> bool {
        !(self.postal_code.trim().is_empty() && self.number.trim().is_empty())
    }
}
