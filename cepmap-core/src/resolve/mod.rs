//! The address-to-coordinate resolution chain.
//!
//! A fixed, ordered list of strategies is tried strictly sequentially and
//! the first one that matches wins. Declining is not an error: it signals
//! "try the next strategy". Later strategies intentionally depend on
//! definitively knowing that earlier ones declined, which is why the chain
//! never fans out concurrently: that would waste calls to rate-limited
//! services for results that are usually discarded.

use std::{
    fmt,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use crate::{
    entities::{AddressRecord, MapPoint},
    gateways::{directory::PostalDirectory, geocode::Geocoder},
};

mod query;
pub mod strategies;


/// Identifies the strategy that produced a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategySource {
    PostalDirectory,
    FreeTextGeocoder,
    MinimalQueryGeocoder,
    DeviceLocation,
    PostalCodeApproximation,
}

impl fmt::Display for StrategySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PostalDirectory => "postal-directory",
            Self::FreeTextGeocoder => "free-text-geocoder",
            Self::MinimalQueryGeocoder => "minimal-query-geocoder",
            Self::DeviceLocation => "device-location",
            Self::PostalCodeApproximation => "postal-code-approximation",
        })
    }
}

/// Why a strategy, or the whole chain, produced no coordinate.
///
/// Only used for diagnostics; a decline is never surfaced as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclineReason {
    InsufficientAddressData,
    InvalidPostalCode,
    MissingPostalCode,
    NotFound,
    NoMatch,
    TransportError,
    NoDeviceLocation,
}

impl fmt::Display for DeclineReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InsufficientAddressData => "insufficient-address-data",
            Self::InvalidPostalCode => "invalid-postal-code",
            Self::MissingPostalCode => "missing-postal-code",
            Self::NotFound => "not-found",
            Self::NoMatch => "no-match",
            Self::TransportError => "transport-error",
            Self::NoDeviceLocation => "no-device-location",
        })
    }
}

/// Qualifies a coordinate that stands in for a true address match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionNote {
    UsedDeviceLocation,
    ApproximateFromPostalCode,
}

impl fmt::Display for ResolutionNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::UsedDeviceLocation => "used-device-location",
            Self::ApproximateFromPostalCode => "approximate-from-postal-code",
        })
    }
}

/// A single strategy's answer.
#[derive(Debug, Clone, PartialEq)]
pub enum StrategyResult {
    /// A true match for the registered address.
    Matched(MapPoint),
    /// A stand-in coordinate (device fix or synthetic approximation).
    MatchedApproximately(MapPoint, ResolutionNote),
    /// No answer; the chain moves on to the next strategy.
    Declined(DeclineReason),
}

/// The chain's final, typed outcome.
///
/// Nothing in the chain is fatal: every failure path terminates here and
/// the presentation layer decides the user-facing messaging per variant.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolutionOutcome {
    Resolved {
        pos: MapPoint,
        source: StrategySource,
    },
    PartiallyResolved {
        pos: MapPoint,
        source: StrategySource,
        note: ResolutionNote,
    },
    Unresolved {
        reason: DeclineReason,
    },
}

impl ResolutionOutcome {
    pub fn pos(&self) -> Option<MapPoint> {
        match self {
            Self::Resolved { pos, .. } | Self::PartiallyResolved { pos, .. } => Some(*pos),
            Self::Unresolved { .. } => None,
        }
    }
}

/// One attempt to turn an address record into a coordinate.
///
/// An implementation must be a pure function of its inputs plus network
/// I/O: it must not mutate the record or any shared state.
pub trait ResolutionStrategy {
    fn source(&self) -> StrategySource;

    fn attempt(&self, record: &AddressRecord, device_pos: Option<MapPoint>) -> StrategyResult;
}

/// Cooperative cancellation for an in-flight resolution.
///
/// The chain checks the token between strategy attempts. Strategies never
/// mutate state, so cancelling reduces to discarding the outcome.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

pub struct ResolutionChain<'a> {
    strategies: Vec<Box<dyn ResolutionStrategy + 'a>>,
}

impl<'a> ResolutionChain<'a> {
    /// The canonical chain, in priority order: postal-directory lookup,
    /// free-text geocoding, minimal-query geocoding, device fallback,
    /// postal-code approximation.
    pub fn new(directory: &'a dyn PostalDirectory, geocoder: &'a dyn Geocoder) -> Self {
        Self::with_strategies(vec![
            Box::new(strategies::PostalDirectoryLookup::new(directory, geocoder)),
            Box::new(strategies::FreeTextGeocoding::new(geocoder)),
            Box::new(strategies::MinimalQueryGeocoding::new(geocoder)),
            Box::new(strategies::DeviceFallback),
            Box::new(strategies::PostalCodeApproximation),
        ])
    }

    pub fn with_strategies(strategies: Vec<Box<dyn ResolutionStrategy + 'a>>) -> Self {
        Self { strategies }
    }

    /// Runs the strategies strictly sequentially until one matches.
    ///
    /// A record with neither postal code nor number short-circuits to
    /// `Unresolved` before any strategy runs; degenerate queries must not
    /// reach third-party services.
    ///
    /// Returns `None` once the token has been cancelled. The partial work
    /// is simply discarded; no strategy has mutated anything.
    pub fn resolve(
        &self,
        record: &AddressRecord,
        device_pos: Option<MapPoint>,
        cancel: &CancelToken,
    ) -> Option<ResolutionOutcome> {
        if !record.has_lookup_fields() {
            return Some(ResolutionOutcome::Unresolved {
                reason: DeclineReason::InsufficientAddressData,
            });
        }
        let mut last_decline = DeclineReason::InsufficientAddressData;
        for strategy in &self.strategies {
            if cancel.is_cancelled() {
                log::debug!("Resolution cancelled before {}", strategy.source());
                return None;
            }
            match strategy.attempt(record, device_pos) {
                StrategyResult::Matched(pos) => {
                    return Some(ResolutionOutcome::Resolved {
                        pos,
                        source: strategy.source(),
                    });
                }
                StrategyResult::MatchedApproximately(pos, note) => {
                    return Some(ResolutionOutcome::PartiallyResolved {
                        pos,
                        source: strategy.source(),
                        note,
                    });
                }
                StrategyResult::Declined(reason) => {
                    log::debug!("{} declined: {}", strategy.source(), reason);
                    last_decline = reason;
                }
            }
        }
        Some(ResolutionOutcome::Unresolved {
            reason: last_decline,
        })
    }
}
