use cepmap_entities::postal_code::PostalCodeParseError;
use thiserror::Error;

use crate::repositories;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The {0} field is missing")]
    MissingField(&'static str),
    #[error("Invalid postal code")]
    PostalCode,
    #[error("No user is registered")]
    NoUserRegistered,
    #[error("Invalid credentials")]
    Credentials,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<PostalCodeParseError> for Error {
    fn from(_: PostalCodeParseError) -> Self {
        Self::PostalCode
    }
}
