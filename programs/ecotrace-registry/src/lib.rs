use anchor_lang::prelude::*;

declare_id!("9jQX75L2U8SBMnCzF8St6e9gQH9BJn2C7NhZUNJh9tu8");

pub mod constants;
pub mod error;
pub mod geo;
pub mod lookup;
pub mod registry;
pub mod seals;


// Re-export all contexts at crate root for Anchor macro
pub use registry::contexts::*;
pub use registry::events::*;
pub use registry::state::*;

pub use seals::contexts::*;
pub use seals::events::*;
pub use seals::state::*;

pub use error::RegistryError;

#[program]
pub mod ecotrace_registry {
    use super::*;

    // ============================================================================
    // Registry Instructions
    // ============================================================================

    /// Initialize the registry and create the seal collection
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        registry::instructions::initialize(ctx)
    }

    /// Register a farm owned by the signer
    pub fn register_farm(
        ctx: Context<RegisterFarm>,
        name: String,
        latitude: i64,
        longitude: i64,
        is_deforestation_free: bool,
    ) -> Result<u64> {
        registry::instructions::register_farm(ctx, name, latitude, longitude, is_deforestation_free)
    }

    /// Register a product under a farm (farm owner only)
    pub fn register_product(
        ctx: Context<RegisterProduct>,
        farm_id: u64,
        name: String,
        quantity: u64,
        batch_id: String,
    ) -> Result<u64> {
        registry::instructions::register_product(ctx, farm_id, name, quantity, batch_id)
    }

    /// Get farm record
    pub fn get_farm(ctx: Context<GetFarm>, _farm_id: u64) -> Result<FarmAccount> {
        registry::instructions::get_farm(ctx)
    }

    /// Get product ids of a farm
    pub fn get_farm_products(ctx: Context<GetFarm>, _farm_id: u64) -> Result<Vec<u64>> {
        registry::instructions::get_farm_products(ctx)
    }

    /// Get product record
    pub fn get_product(ctx: Context<GetProduct>, _product_id: u64) -> Result<ProductAccount> {
        registry::instructions::get_product(ctx)
    }

    /// Get farm ids registered by an owner
    pub fn get_farmer_farms(ctx: Context<GetFarmerFarms>, _owner: Pubkey) -> Result<Vec<u64>> {
        registry::instructions::get_farmer_farms(ctx)
    }

    /// Number of registered farms
    pub fn farm_counter(ctx: Context<ReadConfig>) -> Result<u64> {
        registry::instructions::farm_counter(ctx)
    }

    /// Number of registered products
    pub fn product_counter(ctx: Context<ReadConfig>) -> Result<u64> {
        registry::instructions::product_counter(ctx)
    }

    // ============================================================================
    // Seal Instructions (Metaplex Core)
    // ============================================================================

    /// Issue a carbon-footprint seal (any signer)
    pub fn issue_carbon_footprint_seal(
        ctx: Context<IssueSeal>,
        product_id: u64,
        consumer_latitude: i64,
        consumer_longitude: i64,
        token_uri: String,
    ) -> Result<u64> {
        seals::instructions::issue_carbon_footprint_seal(
            ctx,
            product_id,
            consumer_latitude,
            consumer_longitude,
            token_uri,
        )
    }

    /// Issue a deforestation-free seal (certified farm owner only)
    pub fn issue_deforestation_free_seal(
        ctx: Context<IssueSeal>,
        product_id: u64,
        verification_data: String,
        token_uri: String,
    ) -> Result<u64> {
        seals::instructions::issue_deforestation_free_seal(
            ctx,
            product_id,
            verification_data,
            token_uri,
        )
    }

    /// Transfer a seal with automatic owner sync
    pub fn transfer_seal(ctx: Context<TransferSeal>) -> Result<()> {
        seals::instructions::transfer_seal(ctx)
    }

    /// Sync seal owner from Core asset
    pub fn sync_seal_owner(ctx: Context<SyncSealOwner>) -> Result<()> {
        seals::instructions::sync_seal_owner(ctx)
    }

    /// Get seal record
    pub fn get_seal(ctx: Context<GetSeal>, _seal_id: u64) -> Result<SealAccount> {
        seals::instructions::get_seal(ctx)
    }

    /// Get seal owner (read from the Core asset)
    pub fn owner_of(ctx: Context<OwnerOf>, _seal_id: u64) -> Result<Pubkey> {
        seals::instructions::owner_of(ctx)
    }

    /// Get seal metadata URI
    pub fn token_uri(ctx: Context<GetSeal>, _seal_id: u64) -> Result<String> {
        seals::instructions::token_uri(ctx)
    }

    /// Number of seals held by an owner
    pub fn balance_of(ctx: Context<BalanceOf>, _owner: Pubkey) -> Result<u64> {
        seals::instructions::balance_of(ctx)
    }

    /// Number of seals minted
    pub fn total_supply(ctx: Context<ReadConfig>) -> Result<u64> {
        seals::instructions::total_supply(ctx)
    }
}
