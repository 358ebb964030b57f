use anchor_lang::prelude::*;
use mpl_core::accounts::BaseAssetV1;
use mpl_core::instructions::{CreateV2CpiBuilder, TransferV1CpiBuilder};

use super::contexts::*;
use super::events::*;
use super::footprint::carbon_footprint;
use super::state::*;
use crate::constants::*;
use crate::error::RegistryError;
use crate::geo::GeoPoint;
use crate::lookup::{load_record, read_or_default};
use crate::registry::contexts::ReadConfig;
use crate::registry::state::{FarmAccount, ProductAccount, RegistryConfig};

/// Issuer-side data for a new seal
pub struct SealMint {
    pub issuer: Pubkey,
    pub asset: Pubkey,
    pub token_uri: String,
    pub issued_at: i64,
}

// ============================================================================
// State transitions
// ============================================================================

/// Issue a carbon-footprint seal. Anyone may compensate a product's transport
/// footprint, so there is no ownership check.
pub fn record_carbon_seal(
    config: &mut RegistryConfig,
    farm: &FarmAccount,
    product: &ProductAccount,
    seal: &mut SealAccount,
    holder: &mut HolderAccount,
    mint: SealMint,
    consumer: GeoPoint,
) -> Result<SealIssued> {
    require_product_farm(farm, product)?;
    validate_token_uri(&mint.token_uri)?;

    let footprint = carbon_footprint(&farm.location(), &consumer, product.quantity)?;

    issue_seal(
        config,
        seal,
        holder,
        product.product_id,
        SealType::CarbonFootprint,
        footprint,
        String::new(),
        mint,
    )
}

/// Issue a deforestation-free seal. Certification is checked before
/// ownership, so an uncertified farm reports NotCertified to every caller.
pub fn record_deforestation_seal(
    config: &mut RegistryConfig,
    farm: &FarmAccount,
    product: &ProductAccount,
    seal: &mut SealAccount,
    holder: &mut HolderAccount,
    mint: SealMint,
    verification_data: String,
) -> Result<SealIssued> {
    require_product_farm(farm, product)?;
    farm.ensure_deforestation_free()?;
    farm.ensure_owner(&mint.issuer)?;

    require!(
        verification_data.len() <= SealAccount::MAX_VERIFICATION_LENGTH,
        RegistryError::VerificationTooLong
    );
    validate_token_uri(&mint.token_uri)?;

    issue_seal(
        config,
        seal,
        holder,
        product.product_id,
        SealType::DeforestationFree,
        0,
        verification_data,
        mint,
    )
}

/// Move a seal to `new_owner`, keeping holder balances in step
pub fn record_transfer(
    seal: &mut SealAccount,
    from_holder: &mut HolderAccount,
    to_holder: &mut HolderAccount,
    new_owner: Pubkey,
) -> Result<SealTransferred> {
    require!(seal.exists(), RegistryError::SealNotFound);
    require_keys_neq!(seal.owner, new_owner, RegistryError::TransferToSelf);
    require_keys_eq!(from_holder.owner, seal.owner, RegistryError::NotAuthorized);

    let from_balance = from_holder.debited()?;
    let to_balance = to_holder.credited()?;

    let old_owner = seal.owner;
    from_holder.balance = from_balance;
    to_holder.owner = new_owner;
    to_holder.balance = to_balance;
    seal.owner = new_owner;

    Ok(SealTransferred {
        seal_id: seal.seal_id,
        asset: seal.asset,
        from: old_owner,
        to: new_owner,
    })
}

/// Apply an owner change observed on the Core asset.
/// Returns None when the cached owner is already current.
pub fn record_owner_sync(
    seal: &mut SealAccount,
    previous_holder: &mut HolderAccount,
    current_holder: &mut HolderAccount,
    asset_owner: Pubkey,
) -> Result<Option<SealOwnerSynced>> {
    if seal.owner == asset_owner {
        return Ok(None);
    }

    let transferred = record_transfer(seal, previous_holder, current_holder, asset_owner)?;

    Ok(Some(SealOwnerSynced {
        seal_id: transferred.seal_id,
        asset: transferred.asset,
        old_owner: transferred.from,
        new_owner: transferred.to,
    }))
}

/// Current owner of a seal. The Core asset is authoritative, so transfers made
/// directly on Core show up without a sync. Absent seals resolve to the default key.
pub fn resolve_owner<F>(seal: &SealAccount, asset: &Pubkey, core_owner: F) -> Result<Pubkey>
where
    F: FnOnce() -> Result<Pubkey>,
{
    if !seal.exists() {
        return Ok(Pubkey::default());
    }
    require_keys_eq!(*asset, seal.asset, RegistryError::InvalidAsset);
    core_owner()
}

fn require_product_farm(farm: &FarmAccount, product: &ProductAccount) -> Result<()> {
    require!(product.exists(), RegistryError::ProductNotFound);
    require!(
        farm.exists() && farm.farm_id == product.farm_id,
        RegistryError::FarmNotFound
    );
    Ok(())
}

fn validate_token_uri(token_uri: &str) -> Result<()> {
    require!(
        token_uri.len() <= SealAccount::MAX_URI_LENGTH,
        RegistryError::UriTooLong
    );
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn issue_seal(
    config: &mut RegistryConfig,
    seal: &mut SealAccount,
    holder: &mut HolderAccount,
    product_id: u64,
    seal_type: SealType,
    carbon_footprint: u64,
    verification_data: String,
    mint: SealMint,
) -> Result<SealIssued> {
    let balance = holder.credited()?;
    let seal_id = config.allocate_seal_id()?;

    holder.owner = mint.issuer;
    holder.balance = balance;

    seal.seal_id = seal_id;
    seal.product_id = product_id;
    seal.seal_type = seal_type;
    seal.carbon_footprint = carbon_footprint;
    seal.is_valid = true;
    seal.issued_at = mint.issued_at;
    seal.verification_data = verification_data;
    seal.token_uri = mint.token_uri;
    seal.asset = mint.asset;
    seal.owner = mint.issuer;

    Ok(SealIssued {
        seal_id,
        product_id,
        seal_type: seal_type.as_u8(),
    })
}

// ============================================================================
// Instruction handlers
// ============================================================================

/// Issue a carbon-footprint seal for a product (any signer)
pub fn issue_carbon_footprint_seal(
    ctx: Context<IssueSeal>,
    _product_id: u64,
    consumer_latitude: i64,
    consumer_longitude: i64,
    token_uri: String,
) -> Result<u64> {
    let product: ProductAccount = load_record(
        &ctx.accounts.product.to_account_info(),
        RegistryError::ProductNotFound,
    )?;
    let farm: FarmAccount =
        load_record(&ctx.accounts.farm.to_account_info(), RegistryError::FarmNotFound)?;

    let mint = SealMint {
        issuer: ctx.accounts.issuer.key(),
        asset: ctx.accounts.asset.key(),
        token_uri: token_uri.clone(),
        issued_at: Clock::get()?.unix_timestamp,
    };

    ctx.accounts.seal.bump = ctx.bumps.seal;
    ctx.accounts.holder.bump = ctx.bumps.holder;

    let event = record_carbon_seal(
        &mut ctx.accounts.config,
        &farm,
        &product,
        &mut ctx.accounts.seal,
        &mut ctx.accounts.holder,
        mint,
        GeoPoint::new(consumer_latitude, consumer_longitude),
    )?;
    let seal_id = event.seal_id;

    mint_seal_asset(
        ctx.accounts,
        SealType::CarbonFootprint.asset_name(seal_id),
        token_uri,
    )?;

    emit!(event);

    msg!(
        "Carbon seal #{} issued for product #{}: {} g CO2",
        seal_id,
        product.product_id,
        ctx.accounts.seal.carbon_footprint
    );

    Ok(seal_id)
}

/// Issue a deforestation-free seal (certified farm owner only)
pub fn issue_deforestation_free_seal(
    ctx: Context<IssueSeal>,
    _product_id: u64,
    verification_data: String,
    token_uri: String,
) -> Result<u64> {
    let product: ProductAccount = load_record(
        &ctx.accounts.product.to_account_info(),
        RegistryError::ProductNotFound,
    )?;
    let farm: FarmAccount =
        load_record(&ctx.accounts.farm.to_account_info(), RegistryError::FarmNotFound)?;

    let mint = SealMint {
        issuer: ctx.accounts.issuer.key(),
        asset: ctx.accounts.asset.key(),
        token_uri: token_uri.clone(),
        issued_at: Clock::get()?.unix_timestamp,
    };

    ctx.accounts.seal.bump = ctx.bumps.seal;
    ctx.accounts.holder.bump = ctx.bumps.holder;

    let event = record_deforestation_seal(
        &mut ctx.accounts.config,
        &farm,
        &product,
        &mut ctx.accounts.seal,
        &mut ctx.accounts.holder,
        mint,
        verification_data,
    )?;
    let seal_id = event.seal_id;

    mint_seal_asset(
        ctx.accounts,
        SealType::DeforestationFree.asset_name(seal_id),
        token_uri,
    )?;

    emit!(event);

    msg!(
        "Deforestation-free seal #{} issued for product #{} (farm #{})",
        seal_id,
        product.product_id,
        farm.farm_id
    );

    Ok(seal_id)
}

/// Transfer a seal with automatic owner sync
pub fn transfer_seal(ctx: Context<TransferSeal>) -> Result<()> {
    // Verify current ownership
    verify_core_owner(&ctx.accounts.asset, &ctx.accounts.owner.key())?;

    let new_owner = ctx.accounts.new_owner.key();
    ctx.accounts.to_holder.bump = ctx.bumps.to_holder;

    let event = record_transfer(
        &mut ctx.accounts.seal,
        &mut ctx.accounts.from_holder,
        &mut ctx.accounts.to_holder,
        new_owner,
    )?;

    TransferV1CpiBuilder::new(&ctx.accounts.mpl_core_program.to_account_info())
        .asset(&ctx.accounts.asset.to_account_info())
        .collection(Some(&ctx.accounts.collection.to_account_info()))
        .payer(&ctx.accounts.owner.to_account_info())
        .authority(Some(&ctx.accounts.owner.to_account_info()))
        .new_owner(&ctx.accounts.new_owner.to_account_info())
        .invoke()?;

    msg!("Seal #{} transferred: {} -> {}", event.seal_id, event.from, event.to);

    emit!(event);

    Ok(())
}

/// Sync the cached seal owner from the Core asset
pub fn sync_seal_owner(ctx: Context<SyncSealOwner>) -> Result<()> {
    let asset_owner = get_core_owner(&ctx.accounts.asset)?;
    require_keys_eq!(
        asset_owner,
        ctx.accounts.new_owner.key(),
        RegistryError::NotAuthorized
    );

    ctx.accounts.current_holder.bump = ctx.bumps.current_holder;

    match record_owner_sync(
        &mut ctx.accounts.seal,
        &mut ctx.accounts.previous_holder,
        &mut ctx.accounts.current_holder,
        asset_owner,
    )? {
        Some(event) => {
            msg!(
                "Seal #{} owner synced: {} -> {}",
                event.seal_id,
                event.old_owner,
                event.new_owner
            );
            emit!(event);
        }
        None => msg!("Seal #{} owner already in sync", ctx.accounts.seal.seal_id),
    }

    Ok(())
}

/// Get a seal record (zero-valued if absent)
pub fn get_seal(ctx: Context<GetSeal>) -> Result<SealAccount> {
    read_or_default(&ctx.accounts.seal.to_account_info())
}

/// Get the owner of a seal from its Core asset (default pubkey if absent)
pub fn owner_of(ctx: Context<OwnerOf>) -> Result<Pubkey> {
    let seal: SealAccount = read_or_default(&ctx.accounts.seal.to_account_info())?;
    let asset = &ctx.accounts.asset;
    resolve_owner(&seal, &asset.key(), || get_core_owner(asset))
}

/// Get the metadata URI of a seal (empty if absent)
pub fn token_uri(ctx: Context<GetSeal>) -> Result<String> {
    let seal: SealAccount = read_or_default(&ctx.accounts.seal.to_account_info())?;
    Ok(seal.token_uri)
}

/// Get the number of seals held by an owner. Counts registry transfers and
/// synced Core transfers; `sync_seal_owner` brings it up to date.
pub fn balance_of(ctx: Context<BalanceOf>) -> Result<u64> {
    let holder: HolderAccount = read_or_default(&ctx.accounts.holder.to_account_info())?;
    Ok(holder.balance)
}

/// Total number of seals minted
pub fn total_supply(ctx: Context<ReadConfig>) -> Result<u64> {
    Ok(ctx.accounts.config.seal_counter)
}

// ============================================================================
// Helper functions
// ============================================================================

/// Mint the seal's Core asset to the issuer, signed by the config PDA
#[inline(never)]
fn mint_seal_asset(accounts: &IssueSeal, name: String, uri: String) -> Result<()> {
    let config_bump = accounts.config.bump;

    CreateV2CpiBuilder::new(&accounts.mpl_core_program.to_account_info())
        .asset(&accounts.asset.to_account_info())
        .collection(Some(&accounts.collection.to_account_info()))
        .payer(&accounts.issuer.to_account_info())
        .owner(Some(&accounts.issuer.to_account_info()))
        .authority(Some(&accounts.config.to_account_info()))
        .system_program(&accounts.system_program.to_account_info())
        .name(name)
        .uri(uri)
        .invoke_signed(&[&[SEED_CONFIG, &[config_bump]]])?;
    Ok(())
}

/// Verify that the signer owns the Core asset
fn verify_core_owner(asset_info: &AccountInfo, expected_owner: &Pubkey) -> Result<()> {
    let actual_owner = get_core_owner(asset_info)?;
    require_keys_eq!(actual_owner, *expected_owner, RegistryError::NotAuthorized);
    Ok(())
}

/// Get owner from Core asset account data
fn get_core_owner(asset_info: &AccountInfo) -> Result<Pubkey> {
    require_keys_eq!(*asset_info.owner, mpl_core::ID, RegistryError::InvalidAsset);

    let data = asset_info.try_borrow_data()?;
    let asset = BaseAssetV1::from_bytes(&data).map_err(|_| RegistryError::InvalidAsset)?;

    Ok(asset.owner)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seal_with_asset(asset: Pubkey, cached_owner: Pubkey) -> SealAccount {
        SealAccount {
            seal_id: 1,
            asset,
            owner: cached_owner,
            ..Default::default()
        }
    }

    #[test]
    fn test_resolve_owner_reads_core_asset() {
        let asset = Pubkey::new_unique();
        let cached = Pubkey::new_unique();
        let current = Pubkey::new_unique();
        let seal = seal_with_asset(asset, cached);

        // Asset moved on Core, cache not yet synced
        assert_eq!(resolve_owner(&seal, &asset, || Ok(current)).unwrap(), current);
    }

    #[test]
    fn test_resolve_owner_absent_seal() {
        let owner = resolve_owner(&SealAccount::default(), &Pubkey::new_unique(), || {
            panic!("asset must not be read for an absent seal")
        })
        .unwrap();
        assert_eq!(owner, Pubkey::default());
    }

    #[test]
    fn test_resolve_owner_wrong_asset() {
        let seal = seal_with_asset(Pubkey::new_unique(), Pubkey::new_unique());
        let result = resolve_owner(&seal, &Pubkey::new_unique(), || Ok(Pubkey::new_unique()));
        assert_eq!(result.unwrap_err(), RegistryError::InvalidAsset.into());
    }

    #[test]
    fn test_core_owner_requires_core_account() {
        let key = Pubkey::new_unique();
        let mut lamports = 1_000_000;
        let mut data = vec![0u8; 64];
        let info = AccountInfo::new(
            &key,
            false,
            false,
            &mut lamports,
            &mut data,
            &crate::ID,
            false,
            0,
        );

        assert_eq!(
            get_core_owner(&info).unwrap_err(),
            RegistryError::InvalidAsset.into()
        );
    }
}
