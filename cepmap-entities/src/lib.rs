#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # cepmap-entities
//!
//! Reusable, agnostic domain entities for cepmap.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod address;
pub mod geo;
pub mod postal_code;
pub mod user;
