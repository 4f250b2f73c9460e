//! # cepmap-gateways
//!
//! Concrete clients for the external collaborators: the ViaCEP postal
//! directory, a Nominatim-compatible forward geocoder, the JSON-file
//! record store and the device-locator stand-ins.

mod device;
mod nominatim;
mod record_store;
mod viacep;

pub use self::{
    device::{FixedDeviceLocator, NoDeviceLocator},
    nominatim::Nominatim,
    record_store::JsonFileRecordStore,
    viacep::ViaCep,
};
