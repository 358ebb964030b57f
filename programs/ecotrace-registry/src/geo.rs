//! Fixed-point geographic coordinates.
//!
//! Coordinates cross the instruction boundary and live in accounts as i64
//! values equal to decimal degrees × 1,000,000 (40.0° -> 40_000_000).
//! Ranges are not validated: whatever the caller sends is stored as-is.

use anchor_lang::prelude::*;

/// Scale factor between decimal degrees and stored integers
pub const COORDINATE_SCALE: i64 = 1_000_000;

/// Mean Earth radius used for great-circle distances (metres)
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A single scaled coordinate (latitude or longitude)
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScaledCoordinate(pub i64);

impl ScaledCoordinate {
    /// Encode decimal degrees, rounding half away from zero
    pub fn from_degrees(degrees: f64) -> Self {
        Self((degrees * COORDINATE_SCALE as f64).round() as i64)
    }

    /// Decode to decimal degrees
    pub fn to_degrees(self) -> f64 {
        self.0 as f64 / COORDINATE_SCALE as f64
    }

    pub fn raw(self) -> i64 {
        self.0
    }
}

impl From<i64> for ScaledCoordinate {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

/// Latitude/longitude pair
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GeoPoint {
    pub latitude: ScaledCoordinate,
    pub longitude: ScaledCoordinate,
}

impl GeoPoint {
    pub fn new(latitude: i64, longitude: i64) -> Self {
        Self {
            latitude: ScaledCoordinate(latitude),
            longitude: ScaledCoordinate(longitude),
        }
    }

    /// Haversine distance to `other`, truncated to whole metres
    pub fn distance_m(&self, other: &GeoPoint) -> u64 {
        let lat_a = self.latitude.to_degrees().to_radians();
        let lat_b = other.latitude.to_degrees().to_radians();
        let d_lat = (other.latitude.to_degrees() - self.latitude.to_degrees()).to_radians();
        let d_lon = (other.longitude.to_degrees() - self.longitude.to_degrees()).to_radians();

        let sin_lat = (d_lat / 2.0).sin();
        let sin_lon = (d_lon / 2.0).sin();
        let h = sin_lat * sin_lat + lat_a.cos() * lat_b.cos() * sin_lon * sin_lon;

        // Rounding can push h a hair past 1.0 for antipodal points
        let central_angle = 2.0 * h.min(1.0).sqrt().asin();

        (EARTH_RADIUS_M * central_angle) as u64
    }
}
