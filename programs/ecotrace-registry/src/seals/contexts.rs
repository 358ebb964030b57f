use anchor_lang::prelude::*;

use super::state::*;
use crate::constants::*;
use crate::error::RegistryError;
use crate::registry::state::RegistryConfig;

/// Issue a seal for a product and mint its Core asset to the issuer.
/// Shared by carbon-footprint and deforestation-free issuance.
#[derive(Accounts)]
#[instruction(product_id: u64)]
pub struct IssueSeal<'info> {
    #[account(
        mut,
        seeds = [SEED_CONFIG],
        bump = config.bump
    )]
    pub config: Account<'info, RegistryConfig>,

    /// Product PDA, may be uninitialized (reported as ProductNotFound)
    /// CHECK: Address verified by seeds, data loaded in instruction
    #[account(
        seeds = [SEED_PRODUCT, product_id.to_le_bytes().as_ref()],
        bump
    )]
    pub product: UncheckedAccount<'info>,

    /// Farm owning the product
    /// CHECK: Program ownership and farm_id == product.farm_id verified in instruction
    pub farm: UncheckedAccount<'info>,

    #[account(
        init,
        payer = issuer,
        space = SealAccount::DISCRIMINATOR.len() + SealAccount::INIT_SPACE,
        seeds = [SEED_SEAL, config.next_seal_id().to_le_bytes().as_ref()],
        bump
    )]
    pub seal: Account<'info, SealAccount>,

    #[account(
        init_if_needed,
        payer = issuer,
        space = HolderAccount::DISCRIMINATOR.len() + HolderAccount::INIT_SPACE,
        seeds = [SEED_HOLDER, issuer.key().as_ref()],
        bump
    )]
    pub holder: Account<'info, HolderAccount>,

    /// Metaplex Core asset (created by CPI)
    /// CHECK: Created by Metaplex Core CPI
    #[account(mut)]
    pub asset: Signer<'info>,

    /// Collection account (must match config)
    /// CHECK: Verified via constraint and Core CPI
    #[account(
        mut,
        constraint = collection.key() == config.collection @ RegistryError::InvalidCollection
    )]
    pub collection: UncheckedAccount<'info>,

    #[account(mut)]
    pub issuer: Signer<'info>,

    pub system_program: Program<'info, System>,

    /// Metaplex Core program
    /// CHECK: Verified by address constraint
    #[account(address = mpl_core::ID)]
    pub mpl_core_program: UncheckedAccount<'info>,
}

/// Transfer a seal asset with automatic owner and balance sync
#[derive(Accounts)]
pub struct TransferSeal<'info> {
    #[account(
        seeds = [SEED_CONFIG],
        bump = config.bump
    )]
    pub config: Account<'info, RegistryConfig>,

    #[account(
        mut,
        seeds = [SEED_SEAL, seal.seal_id.to_le_bytes().as_ref()],
        bump = seal.bump
    )]
    pub seal: Account<'info, SealAccount>,

    /// Core asset to transfer
    /// CHECK: Verified via seal constraint
    #[account(
        mut,
        constraint = asset.key() == seal.asset @ RegistryError::InvalidAsset
    )]
    pub asset: UncheckedAccount<'info>,

    /// Collection (required by Core transfer)
    /// CHECK: Verified via config constraint
    #[account(
        mut,
        constraint = collection.key() == config.collection @ RegistryError::InvalidCollection
    )]
    pub collection: UncheckedAccount<'info>,

    /// Current owner (must sign)
    #[account(mut)]
    pub owner: Signer<'info>,

    /// New owner receiving the asset
    /// CHECK: Can be any account
    pub new_owner: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [SEED_HOLDER, owner.key().as_ref()],
        bump = from_holder.bump
    )]
    pub from_holder: Account<'info, HolderAccount>,

    #[account(
        init_if_needed,
        payer = owner,
        space = HolderAccount::DISCRIMINATOR.len() + HolderAccount::INIT_SPACE,
        seeds = [SEED_HOLDER, new_owner.key().as_ref()],
        bump
    )]
    pub to_holder: Account<'info, HolderAccount>,

    pub system_program: Program<'info, System>,

    /// Metaplex Core program
    /// CHECK: Verified by address constraint
    #[account(address = mpl_core::ID)]
    pub mpl_core_program: UncheckedAccount<'info>,
}

/// Sync the cached seal owner after a transfer made directly on Core
#[derive(Accounts)]
pub struct SyncSealOwner<'info> {
    #[account(
        mut,
        seeds = [SEED_SEAL, seal.seal_id.to_le_bytes().as_ref()],
        bump = seal.bump
    )]
    pub seal: Account<'info, SealAccount>,

    /// Core asset - ownership is read from asset data
    /// CHECK: Verified in instruction
    #[account(
        constraint = asset.key() == seal.asset @ RegistryError::InvalidAsset
    )]
    pub asset: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [SEED_HOLDER, seal.owner.as_ref()],
        bump = previous_holder.bump
    )]
    pub previous_holder: Account<'info, HolderAccount>,

    /// Owner recorded on the Core asset
    /// CHECK: Compared against asset data in instruction
    pub new_owner: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = payer,
        space = HolderAccount::DISCRIMINATOR.len() + HolderAccount::INIT_SPACE,
        seeds = [SEED_HOLDER, new_owner.key().as_ref()],
        bump
    )]
    pub current_holder: Account<'info, HolderAccount>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Read a seal record (zero-valued if absent)
#[derive(Accounts)]
#[instruction(seal_id: u64)]
pub struct GetSeal<'info> {
    /// CHECK: Address verified by seeds, may be uninitialized
    #[account(
        seeds = [SEED_SEAL, seal_id.to_le_bytes().as_ref()],
        bump
    )]
    pub seal: UncheckedAccount<'info>,
}

/// Read the current owner of a seal from its Core asset
#[derive(Accounts)]
#[instruction(seal_id: u64)]
pub struct OwnerOf<'info> {
    /// CHECK: Address verified by seeds, may be uninitialized
    #[account(
        seeds = [SEED_SEAL, seal_id.to_le_bytes().as_ref()],
        bump
    )]
    pub seal: UncheckedAccount<'info>,

    /// Core asset of the seal (ignored when the seal is absent)
    /// CHECK: Compared against seal.asset in instruction
    pub asset: UncheckedAccount<'info>,
}

/// Read the seal balance of an owner
#[derive(Accounts)]
#[instruction(owner: Pubkey)]
pub struct BalanceOf<'info> {
    /// CHECK: Address verified by seeds, may be uninitialized
    #[account(
        seeds = [SEED_HOLDER, owner.as_ref()],
        bump
    )]
    pub holder: UncheckedAccount<'info>,
}
