use anchor_lang::prelude::*;
use mpl_core::instructions::CreateCollectionV2CpiBuilder;

use super::contexts::*;
use super::events::*;
use super::state::*;
use crate::constants::*;
use crate::error::RegistryError;
use crate::lookup::{load_record, read_or_default, store_record};

/// Farm registration input
pub struct NewFarm {
    pub name: String,
    pub latitude: i64,
    pub longitude: i64,
    pub is_deforestation_free: bool,
}

/// Product registration input
pub struct NewProduct {
    pub name: String,
    pub quantity: u64,
    pub batch_id: String,
}

// ============================================================================
// State transitions
// ============================================================================

/// Store a new farm owned by `owner` and append it to the owner's index.
///
/// All checks run before the first write.
pub fn record_farm(
    config: &mut RegistryConfig,
    farm: &mut FarmAccount,
    farmer_index: &mut FarmerIndex,
    owner: Pubkey,
    new_farm: NewFarm,
    registered_at: i64,
) -> Result<FarmRegistered> {
    validate_farm_name(&new_farm.name)?;
    require!(farmer_index.has_capacity(), RegistryError::FarmLimitReached);

    let farm_id = config.allocate_farm_id()?;

    farm.farm_id = farm_id;
    farm.owner = owner;
    farm.name = new_farm.name.clone();
    farm.latitude = new_farm.latitude;
    farm.longitude = new_farm.longitude;
    farm.is_deforestation_free = new_farm.is_deforestation_free;
    farm.registration_date = registered_at;
    farm.is_active = true;

    if farmer_index.owner == Pubkey::default() {
        farmer_index.owner = owner;
    }
    farmer_index.farm_ids.push(farm_id);

    Ok(FarmRegistered {
        farm_id,
        owner,
        name: new_farm.name,
    })
}

/// Store a new product under `farm`. Only the farm owner may do this.
pub fn record_product(
    config: &mut RegistryConfig,
    farm: &mut FarmAccount,
    product: &mut ProductAccount,
    caller: &Pubkey,
    new_product: NewProduct,
) -> Result<ProductRegistered> {
    require!(farm.exists(), RegistryError::FarmNotFound);
    farm.ensure_owner(caller)?;

    validate_product_name(&new_product.name)?;
    require!(
        new_product.batch_id.len() <= ProductAccount::MAX_BATCH_ID_LENGTH,
        RegistryError::BatchIdTooLong
    );
    require!(farm.has_product_capacity(), RegistryError::ProductLimitReached);

    let product_id = config.allocate_product_id()?;

    farm.product_ids.push(product_id);

    product.product_id = product_id;
    product.farm_id = farm.farm_id;
    product.product_name = new_product.name.clone();
    product.quantity = new_product.quantity;
    product.batch_id = new_product.batch_id;

    Ok(ProductRegistered {
        product_id,
        farm_id: farm.farm_id,
        name: new_product.name,
    })
}

// ============================================================================
// Instruction handlers
// ============================================================================

/// Initialize the registry config and create the seal collection
pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let config = &mut ctx.accounts.config;
    config.authority = ctx.accounts.authority.key();
    config.collection = ctx.accounts.collection.key();
    config.farm_counter = 0;
    config.product_counter = 0;
    config.seal_counter = 0;
    config.bump = ctx.bumps.config;

    // Config PDA is the collection update authority so it can sign seal mints
    CreateCollectionV2CpiBuilder::new(&ctx.accounts.mpl_core_program.to_account_info())
        .collection(&ctx.accounts.collection.to_account_info())
        .payer(&ctx.accounts.authority.to_account_info())
        .update_authority(Some(&config.to_account_info()))
        .system_program(&ctx.accounts.system_program.to_account_info())
        .name(COLLECTION_NAME.to_string())
        .uri(String::new())
        .invoke_signed(&[&[SEED_CONFIG, &[ctx.bumps.config]]])?;

    emit!(RegistryInitialized {
        authority: ctx.accounts.authority.key(),
        collection: ctx.accounts.collection.key(),
    });

    msg!(
        "Registry initialized with seal collection {}",
        ctx.accounts.collection.key()
    );

    Ok(())
}

/// Register a farm owned by the signer
pub fn register_farm(
    ctx: Context<RegisterFarm>,
    name: String,
    latitude: i64,
    longitude: i64,
    is_deforestation_free: bool,
) -> Result<u64> {
    let owner = ctx.accounts.owner.key();
    let registered_at = Clock::get()?.unix_timestamp;

    ctx.accounts.farm.bump = ctx.bumps.farm;
    ctx.accounts.farmer_index.bump = ctx.bumps.farmer_index;

    let event = record_farm(
        &mut ctx.accounts.config,
        &mut ctx.accounts.farm,
        &mut ctx.accounts.farmer_index,
        owner,
        NewFarm {
            name,
            latitude,
            longitude,
            is_deforestation_free,
        },
        registered_at,
    )?;
    let farm_id = event.farm_id;

    emit!(event);

    msg!(
        "Farm #{} registered by {} (deforestation-free: {})",
        farm_id,
        owner,
        is_deforestation_free
    );

    Ok(farm_id)
}

/// Register a product under an existing farm (farm owner only)
pub fn register_product(
    ctx: Context<RegisterProduct>,
    farm_id: u64,
    name: String,
    quantity: u64,
    batch_id: String,
) -> Result<u64> {
    let farm_info = ctx.accounts.farm.to_account_info();
    let mut farm: FarmAccount = load_record(&farm_info, RegistryError::FarmNotFound)?;

    ctx.accounts.product.bump = ctx.bumps.product;

    let event = record_product(
        &mut ctx.accounts.config,
        &mut farm,
        &mut ctx.accounts.product,
        &ctx.accounts.owner.key(),
        NewProduct {
            name,
            quantity,
            batch_id,
        },
    )?;

    // Farm was loaded by hand, persist the appended product id
    store_record(&farm_info, &farm)?;

    let product_id = event.product_id;
    emit!(event);

    msg!("Product #{} registered under farm #{}", product_id, farm_id);

    Ok(product_id)
}

/// Get a farm record (zero-valued if absent)
pub fn get_farm(ctx: Context<GetFarm>) -> Result<FarmAccount> {
    read_or_default(&ctx.accounts.farm.to_account_info())
}

/// Get the product ids of a farm, in creation order
pub fn get_farm_products(ctx: Context<GetFarm>) -> Result<Vec<u64>> {
    let farm: FarmAccount = read_or_default(&ctx.accounts.farm.to_account_info())?;
    Ok(farm.product_ids)
}

/// Get a product record (zero-valued if absent)
pub fn get_product(ctx: Context<GetProduct>) -> Result<ProductAccount> {
    read_or_default(&ctx.accounts.product.to_account_info())
}

/// Get the farm ids registered by an owner, in creation order
pub fn get_farmer_farms(ctx: Context<GetFarmerFarms>) -> Result<Vec<u64>> {
    let index: FarmerIndex = read_or_default(&ctx.accounts.farmer_index.to_account_info())?;
    Ok(index.farm_ids)
}

pub fn farm_counter(ctx: Context<ReadConfig>) -> Result<u64> {
    Ok(ctx.accounts.config.farm_counter)
}

pub fn product_counter(ctx: Context<ReadConfig>) -> Result<u64> {
    Ok(ctx.accounts.config.product_counter)
}
