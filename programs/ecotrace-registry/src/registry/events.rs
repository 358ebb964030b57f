use anchor_lang::prelude::*;

/// Event emitted when the registry config and seal collection are created
#[event]
pub struct RegistryInitialized {
    pub authority: Pubkey,
    pub collection: Pubkey,
}

/// Event emitted when a farm is registered
#[event]
pub struct FarmRegistered {
    pub farm_id: u64,
    pub owner: Pubkey,
    pub name: String,
}

/// Event emitted when a product is registered under a farm
#[event]
pub struct ProductRegistered {
    pub product_id: u64,
    pub farm_id: u64,
    pub name: String,
}
