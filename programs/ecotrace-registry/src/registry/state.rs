use anchor_lang::prelude::*;

use crate::error::RegistryError;
use crate::geo::GeoPoint;

/// Global registry configuration and record counters
#[account]
#[derive(InitSpace, Default)]
pub struct RegistryConfig {
    /// Registry authority (upgrade authority at initialization)
    pub authority: Pubkey,

    /// Metaplex Core collection that seals are minted into
    pub collection: Pubkey,

    /// Number of farms registered (last assigned farm id)
    pub farm_counter: u64,

    /// Number of products registered (last assigned product id)
    pub product_counter: u64,

    /// Number of seals issued (last assigned seal id, token total supply)
    pub seal_counter: u64,

    /// PDA bump seed
    pub bump: u8,
}

impl RegistryConfig {
    /// Id the next registered farm will receive (PDA derivation)
    pub fn next_farm_id(&self) -> u64 {
        self.farm_counter.wrapping_add(1)
    }

    pub fn next_product_id(&self) -> u64 {
        self.product_counter.wrapping_add(1)
    }

    pub fn next_seal_id(&self) -> u64 {
        self.seal_counter.wrapping_add(1)
    }

    /// Consume and return the next farm id
    pub fn allocate_farm_id(&mut self) -> Result<u64> {
        self.farm_counter = self
            .farm_counter
            .checked_add(1)
            .ok_or(RegistryError::Overflow)?;
        Ok(self.farm_counter)
    }

    /// Consume and return the next product id
    pub fn allocate_product_id(&mut self) -> Result<u64> {
        self.product_counter = self
            .product_counter
            .checked_add(1)
            .ok_or(RegistryError::Overflow)?;
        Ok(self.product_counter)
    }

    /// Consume and return the next seal (token) id
    pub fn allocate_seal_id(&mut self) -> Result<u64> {
        self.seal_counter = self
            .seal_counter
            .checked_add(1)
            .ok_or(RegistryError::Overflow)?;
        Ok(self.seal_counter)
    }
}

/// Farm record
/// Seeds: [b"farm", farm_id.to_le_bytes()]
#[account]
#[derive(InitSpace, Default)]
pub struct FarmAccount {
    /// Sequential farm ID (0 = does not exist)
    pub farm_id: u64,

    /// Registering account, holds authority over products and deforestation seals
    pub owner: Pubkey,

    /// Display name (max 64 bytes)
    #[max_len(64)]
    pub name: String,

    /// Latitude in degrees * 1_000_000
    pub latitude: i64,

    /// Longitude in degrees * 1_000_000
    pub longitude: i64,

    /// Deforestation-free certification flag
    pub is_deforestation_free: bool,

    /// Registration timestamp
    pub registration_date: i64,

    /// Active flag (set at registration, never cleared)
    pub is_active: bool,

    /// Products registered under this farm, in creation order
    #[max_len(64)]
    pub product_ids: Vec<u64>,

    /// PDA bump seed
    pub bump: u8,
}

impl FarmAccount {
    /// Maximum name length in bytes
    pub const MAX_NAME_LENGTH: usize = 64;

    /// Maximum number of products tracked per farm
    pub const MAX_PRODUCTS: usize = 64;

    pub fn exists(&self) -> bool {
        self.farm_id != 0
    }

    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }

    /// Fails with NotAuthorized unless `caller` registered this farm
    pub fn ensure_owner(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(self.owner, *caller, RegistryError::NotAuthorized);
        Ok(())
    }

    /// Fails with NotCertified unless the farm is deforestation-free
    pub fn ensure_deforestation_free(&self) -> Result<()> {
        require!(self.is_deforestation_free, RegistryError::NotCertified);
        Ok(())
    }

    pub fn has_product_capacity(&self) -> bool {
        self.product_ids.len() < Self::MAX_PRODUCTS
    }
}

/// Product record
/// Seeds: [b"product", product_id.to_le_bytes()]
#[account]
#[derive(InitSpace, Default)]
pub struct ProductAccount {
    /// Sequential product ID (0 = does not exist)
    pub product_id: u64,

    /// Owning farm
    pub farm_id: u64,

    /// Product name (max 64 bytes)
    #[max_len(64)]
    pub product_name: String,

    /// Quantity in kilograms
    pub quantity: u64,

    /// Batch / lot identifier (max 32 bytes)
    #[max_len(32)]
    pub batch_id: String,

    /// PDA bump seed
    pub bump: u8,
}

impl ProductAccount {
    /// Maximum batch id length in bytes
    pub const MAX_BATCH_ID_LENGTH: usize = 32;

    pub fn exists(&self) -> bool {
        self.product_id != 0
    }
}

/// Farms registered by one owner, in creation order
/// Seeds: [b"farmer", owner.key()]
#[account]
#[derive(InitSpace, Default)]
pub struct FarmerIndex {
    /// Farm owner
    pub owner: Pubkey,

    #[max_len(32)]
    pub farm_ids: Vec<u64>,

    /// PDA bump seed
    pub bump: u8,
}

impl FarmerIndex {
    /// Maximum number of farms tracked per owner
    pub const MAX_FARMS: usize = 32;

    pub fn has_capacity(&self) -> bool {
        self.farm_ids.len() < Self::MAX_FARMS
    }
}

/// Farm names must be non-empty and fit the account
pub fn validate_farm_name(name: &str) -> Result<()> {
    require!(!name.is_empty(), RegistryError::NameEmpty);
    validate_product_name(name)
}

/// Product names only need to fit the account; empty is allowed
pub fn validate_product_name(name: &str) -> Result<()> {
    require!(
        name.len() <= FarmAccount::MAX_NAME_LENGTH,
        RegistryError::NameTooLong
    );
    Ok(())
}
