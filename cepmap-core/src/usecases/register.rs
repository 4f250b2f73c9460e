use super::{Error, Result};
use crate::{
    entities::{AddressRecord, PostalCode, RegisteredUser},
    repositories::UserRecordRepo,
};

/// All form fields of the registration screen.
#[derive(Debug, Clone, Default)]
pub struct Registration {
    pub name: String,
    pub password: String,
    pub postal_code: String,
    pub street: String,
    pub neighborhood: String,
    pub number: String,
    pub city: String,
    /// Two-letter state code; the only optional form field.
    pub state: Option<String>,
}

/// Stores the submitted form as the single user record, overwriting any
/// previous registration wholesale.
pub fn register<R: UserRecordRepo>(repo: &R, registration: Registration) -> Result<RegisteredUser> {
    let Registration {
        name,
        password,
        postal_code,
        street,
        neighborhood,
        number,
        city,
        state,
    } = registration;
    let required = [
        ("name", &name),
        ("password", &password),
        ("postal code", &postal_code),
        ("street", &street),
        ("neighborhood", &neighborhood),
        ("number", &number),
        ("city", &city),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(Error::MissingField(field));
        }
    }
    let postal_code = postal_code.parse::<PostalCode>()?;
    let user = RegisteredUser {
        password,
        address: AddressRecord {
            name,
            postal_code: postal_code.to_string(),
            street: Some(street),
            neighborhood: Some(neighborhood),
            number,
            city: Some(city),
            state: state.filter(|s| !s.trim().is_empty()),
        },
    };
    repo.set(&user)?;
    Ok(user)
}
