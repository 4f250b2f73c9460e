use super::{Error, Result};
use crate::{entities::RegisteredUser, repositories::UserRecordRepo};

pub struct Credentials<'a> {
    pub name: &'a str,
    pub password: &'a str,
}

/// Plaintext equality against the stored record. There is a single local
/// user and no account system, so this is all the login screen checks.
pub fn login<R: UserRecordRepo>(repo: &R, credentials: &Credentials<'_>) -> Result<RegisteredUser> {
    let Some(user) = repo.get()? else {
        return Err(Error::NoUserRegistered);
    };
    if user.address.name == credentials.name && user.password == credentials.password {
        Ok(user)
    } else {
        Err(Error::Credentials)
    }
}
