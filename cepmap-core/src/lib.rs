//! # cepmap-core
//!
//! Gateway abstractions for the external collaborators, the persisted
//! record repository, the address-to-coordinate resolution chain and the
//! application usecases.

pub mod gateways;
pub mod repositories;
pub mod resolve;
pub mod usecases;

pub mod entities {
    pub use cepmap_entities::{address::*, geo::*, postal_code::*, user::*};
}
