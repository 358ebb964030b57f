use anchor_lang::prelude::*;

use crate::error::RegistryError;

/// Attestation kind carried by a seal
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub enum SealType {
    /// Consumer-issued transport footprint compensation
    #[default]
    CarbonFootprint,
    /// Farm-owner-issued deforestation-free certification
    DeforestationFree,
}

impl SealType {
    /// Wire discriminant used in events (0 = carbon, 1 = deforestation-free)
    pub fn as_u8(self) -> u8 {
        match self {
            SealType::CarbonFootprint => 0,
            SealType::DeforestationFree => 1,
        }
    }

    /// Display name of the minted asset
    pub fn asset_name(self, seal_id: u64) -> String {
        match self {
            SealType::CarbonFootprint => format!("Carbon Footprint Seal #{}", seal_id),
            SealType::DeforestationFree => format!("Deforestation-Free Seal #{}", seal_id),
        }
    }
}

/// Seal record, one per minted Core asset
/// Seeds: [b"seal", seal_id.to_le_bytes()]
#[account]
#[derive(InitSpace, Default)]
pub struct SealAccount {
    /// Sequential seal ID, equal to the token ID (0 = does not exist)
    pub seal_id: u64,

    /// Attested product
    pub product_id: u64,

    pub seal_type: SealType,

    /// Transport footprint in grams of CO2 (0 for deforestation-free seals)
    pub carbon_footprint: u64,

    /// Always true, seals are never revoked
    pub is_valid: bool,

    /// Issuance timestamp
    pub issued_at: i64,

    /// Certifier evidence (deforestation-free seals only, max 200 bytes)
    #[max_len(200)]
    pub verification_data: String,

    /// Token metadata URI supplied by the issuer (max 200 bytes)
    #[max_len(200)]
    pub token_uri: String,

    /// Metaplex Core asset address
    pub asset: Pubkey,

    /// Token owner (cached from Core asset)
    pub owner: Pubkey,

    /// PDA bump seed
    pub bump: u8,
}

impl SealAccount {
    /// Maximum token URI length in bytes
    pub const MAX_URI_LENGTH: usize = 200;

    /// Maximum verification data length in bytes
    pub const MAX_VERIFICATION_LENGTH: usize = 200;

    pub fn exists(&self) -> bool {
        self.seal_id != 0
    }
}

/// Number of seals held by one account
/// Seeds: [b"holder", owner.key()]
#[account]
#[derive(InitSpace, Default)]
pub struct HolderAccount {
    pub owner: Pubkey,

    pub balance: u64,

    /// PDA bump seed
    pub bump: u8,
}

impl HolderAccount {
    /// Balance after receiving one seal
    pub fn credited(&self) -> Result<u64> {
        self.balance
            .checked_add(1)
            .ok_or_else(|| error!(RegistryError::Overflow))
    }

    /// Balance after giving up one seal
    pub fn debited(&self) -> Result<u64> {
        self.balance
            .checked_sub(1)
            .ok_or_else(|| error!(RegistryError::Overflow))
    }
}
