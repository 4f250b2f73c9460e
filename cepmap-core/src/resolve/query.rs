use itertools::Itertools;

use crate::{
    entities::{AddressRecord, PostalCode},
    gateways::directory::Locality,
};

/// Fixed country qualifier appended to every geocoder query.
pub(crate) const COUNTRY_QUALIFIER: &str = "Brasil";

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn non_empty_str(field: &str) -> Option<&str> {
    Some(field.trim()).filter(|s| !s.is_empty())
}

/// Joins whatever address fields are present, in the fixed priority order
/// street, number, neighborhood, city, state, postal code, and appends the
/// country qualifier.
pub(crate) fn free_text_query(record: &AddressRecord) -> String {
    let parts = [
        non_empty(&record.street),
        non_empty_str(&record.number),
        non_empty(&record.neighborhood),
        non_empty(&record.city),
        non_empty(&record.state),
        non_empty_str(&record.postal_code),
    ];
    parts
        .into_iter()
        .flatten()
        .chain(std::iter::once(COUNTRY_QUALIFIER))
        .join(", ")
}

/// Query for the directory hand-off: locality fields take precedence over
/// the record's own, the house number always comes from the record.
pub(crate) fn enriched_query(
    record: &AddressRecord,
    locality: &Locality,
    postal_code: &PostalCode,
) -> String {
    let code_text = postal_code.to_string();
    let parts = [
        non_empty(&locality.street).or_else(|| non_empty(&record.street)),
        non_empty_str(&record.number),
        non_empty(&locality.neighborhood).or_else(|| non_empty(&record.neighborhood)),
        non_empty(&locality.city).or_else(|| non_empty(&record.city)),
        non_empty(&locality.state).or_else(|| non_empty(&record.state)),
        Some(code_text.as_str()),
    ];
    let query = parts
        .into_iter()
        .flatten()
        .chain(std::iter::once(COUNTRY_QUALIFIER))
        .join(", ");
    query
}

/// The deliberately narrow query: postal code and house number only.
/// `None` when either field is blank.
pub(crate) fn minimal_query(record: &AddressRecord) -> Option<String> {
    let postal_code = non_empty_str(&record.postal_code)?;
    let number = non_empty_str(&record.number)?;
    Some([postal_code, number, COUNTRY_QUALIFIER].iter().join(", "))
}
