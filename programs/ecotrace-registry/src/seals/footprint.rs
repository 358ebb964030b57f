// ============================================================================
// Carbon Footprint Policy
// ============================================================================
//
// footprint_g = floor(distance_m * quantity_kg * EMISSION_MG_PER_KM_KG / 1_000_000)
//
// distance_m is the haversine distance between farm and consumer truncated to
// whole metres (see geo.rs). Intermediate math runs in u128.

use anchor_lang::prelude::*;

use crate::error::RegistryError;
use crate::geo::GeoPoint;

/// Transport emission factor: 0.0006 kg CO2 per km per kg of product
pub const EMISSION_MG_PER_KM_KG: u128 = 600;

/// metres -> km (1_000) times mg -> g (1_000)
const FOOTPRINT_DIVISOR: u128 = 1_000_000;

/// Footprint in grams of CO2 for moving `quantity_kg` over `distance_m`
pub fn footprint_grams(distance_m: u64, quantity_kg: u64) -> Result<u64> {
    let mg_km = (distance_m as u128)
        .checked_mul(quantity_kg as u128)
        .and_then(|v| v.checked_mul(EMISSION_MG_PER_KM_KG))
        .ok_or(RegistryError::Overflow)?;

    u64::try_from(mg_km / FOOTPRINT_DIVISOR).map_err(|_| error!(RegistryError::Overflow))
}

/// Footprint of shipping a product from its farm to a consumer
pub fn carbon_footprint(farm: &GeoPoint, consumer: &GeoPoint, quantity_kg: u64) -> Result<u64> {
    footprint_grams(farm.distance_m(consumer), quantity_kg)
}
