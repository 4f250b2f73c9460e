// Low-level persistence access for the single user record.
// The record is written wholesale and read back as-is; there is no
// partial update and no versioning.

use cepmap_entities::user::RegisteredUser;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

/// Key-value style storage for the one registered user.
pub trait UserRecordRepo {
    fn get(&self) -> Result<Option<RegisteredUser>>;
    fn set(&self, user: &RegisteredUser) -> Result<()>;
    fn clear(&self) -> Result<()>;
}
