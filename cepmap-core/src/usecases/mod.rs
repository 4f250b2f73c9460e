mod error;
mod locate;
mod login;
mod register;

#[cfg(test)]
mod tests;

type Result<T> = std::result::Result<T, Error>;

pub use self::{error::Error, locate::*, login::*, register::*};
