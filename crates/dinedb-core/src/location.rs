// crates/dinedb-core/src/location.rs

//! # Device Location
//!
//! The device position comes from outside the engine (a browser API, a GPS
//! daemon, a fixed value in tests). It is modelled as an injectable
//! [`LocationProvider`] with a one-shot request that either yields a
//! coordinate or a typed [`GeolocationError`]. Nothing here retries, and two
//! overlapping requests are not merged.

use crate::geo::Coordinates;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why the device position could not be obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeolocationError {
    #[error("location permission denied")]
    PermissionDenied,
    #[error("position unavailable")]
    PositionUnavailable,
    #[error("location request timed out")]
    Timeout,
    #[error("geolocation is not supported on this device")]
    Unsupported,
}

/// Source of the current device coordinate.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Ask once for the current position.
    async fn current_position(&self) -> Result<Coordinates, GeolocationError>;
}

/// Always reports the same coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedLocationProvider(pub Coordinates);

#[async_trait]
impl LocationProvider for FixedLocationProvider {
    async fn current_position(&self) -> Result<Coordinates, GeolocationError> {
        Ok(self.0)
    }
}

/// Always fails with the same reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnavailableLocationProvider(pub GeolocationError);

#[async_trait]
impl LocationProvider for UnavailableLocationProvider {
    async fn current_position(&self) -> Result<Coordinates, GeolocationError> {
        Err(self.0)
    }
}

/// Request the position, giving up after `timeout`.
///
/// An elapsed timer is reported as [`GeolocationError::Timeout`]; the
/// provider's own errors pass through unchanged.
#[cfg(feature = "locate")]
pub async fn locate<P>(
    provider: &P,
    timeout: std::time::Duration,
) -> Result<Coordinates, GeolocationError>
where
    P: LocationProvider + ?Sized,
{
    match tokio::time::timeout(timeout, provider.current_position()).await {
        Ok(result) => result,
        Err(_) => Err(GeolocationError::Timeout),
    }
}
