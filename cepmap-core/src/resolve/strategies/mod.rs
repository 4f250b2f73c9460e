mod approximate;
mod device_fallback;
mod free_text;
mod minimal_query;
mod postal_directory;

pub use self::{
    approximate::{approximate_position, PostalCodeApproximation},
    device_fallback::DeviceFallback,
    free_text::FreeTextGeocoding,
    minimal_query::MinimalQueryGeocoding,
    postal_directory::PostalDirectoryLookup,
};
