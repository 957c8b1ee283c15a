// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Coordinate handling and great-circle distance.
//!
//! Distance is computed with the haversine formula over the mean Earth
//! radius. Straight-line distance is sufficient for proximity ranking at
//! municipal scale; no road network is consulted.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A validated latitude/longitude pair.
///
/// Construction rejects out-of-range values, so a `Coordinate` held
/// anywhere in the system is always usable for distance computation.
/// Entities with an unknown location carry `Option<Coordinate>` and
/// callers must branch before computing distances.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate.
    ///
    /// # Arguments
    ///
    /// * `latitude` - Degrees, must be within [-90, 90]
    /// * `longitude` - Degrees, must be within [-180, 180]
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidLatitude` or
    /// `DomainError::InvalidLongitude` when a value is out of range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        if !(-90.0..=90.0).contains(&latitude) || latitude.is_nan() {
            return Err(DomainError::InvalidLatitude(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) || longitude.is_nan() {
            return Err(DomainError::InvalidLongitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Returns the latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Computes the great-circle distance between two coordinates in kilometers.
///
/// Pure and deterministic. Symmetric in its arguments, and zero for
/// identical points.
#[must_use]
pub fn distance_km(from: Coordinate, to: Coordinate) -> f64 {
    let lat1_rad: f64 = from.latitude.to_radians();
    let lat2_rad: f64 = to.latitude.to_radians();
    let delta_lat: f64 = (to.latitude - from.latitude).to_radians();
    let delta_lon: f64 = (to.longitude - from.longitude).to_radians();

    let a: f64 = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c: f64 = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Computes the arithmetic centroid of a set of coordinates.
///
/// Returns `None` for an empty input. The arithmetic mean is adequate at
/// the scale of a single municipality's sub-areas.
#[must_use]
pub fn centroid<I>(points: I) -> Option<Coordinate>
where
    I: IntoIterator<Item = Coordinate>,
{
    let mut count: u32 = 0;
    let mut lat_sum: f64 = 0.0;
    let mut lon_sum: f64 = 0.0;

    for point in points {
        count += 1;
        lat_sum += point.latitude;
        lon_sum += point.longitude;
    }

    if count == 0 {
        return None;
    }

    // The mean of in-range values is itself in range.
    Some(Coordinate {
        latitude: lat_sum / f64::from(count),
        longitude: lon_sum / f64::from(count),
    })
}
