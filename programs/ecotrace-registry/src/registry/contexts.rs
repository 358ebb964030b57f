use anchor_lang::prelude::*;
use anchor_lang::solana_program::bpf_loader_upgradeable;

use super::state::*;
use crate::constants::*;
use crate::error::RegistryError;

/// Initialize the registry and create the seal collection
/// Only the program upgrade authority can initialize (prevents front-running)
#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = authority,
        space = RegistryConfig::DISCRIMINATOR.len() + RegistryConfig::INIT_SPACE,
        seeds = [SEED_CONFIG],
        bump
    )]
    pub config: Account<'info, RegistryConfig>,

    /// Metaplex Core collection (created by CPI)
    /// CHECK: Created by Metaplex Core CPI
    #[account(mut)]
    pub collection: Signer<'info>,

    #[account(mut)]
    pub authority: Signer<'info>,

    /// Program data account for upgrade authority verification
    #[account(
        seeds = [crate::ID.as_ref()],
        bump,
        seeds::program = bpf_loader_upgradeable::ID,
        constraint = program_data.upgrade_authority_address == Some(authority.key())
            @ RegistryError::NotAuthorized
    )]
    pub program_data: Account<'info, ProgramData>,

    pub system_program: Program<'info, System>,

    /// Metaplex Core program
    /// CHECK: Verified by address constraint
    #[account(address = mpl_core::ID)]
    pub mpl_core_program: UncheckedAccount<'info>,
}

/// Register a new farm owned by the signer
#[derive(Accounts)]
pub struct RegisterFarm<'info> {
    #[account(
        mut,
        seeds = [SEED_CONFIG],
        bump = config.bump
    )]
    pub config: Account<'info, RegistryConfig>,

    #[account(
        init,
        payer = owner,
        space = FarmAccount::DISCRIMINATOR.len() + FarmAccount::INIT_SPACE,
        seeds = [SEED_FARM, config.next_farm_id().to_le_bytes().as_ref()],
        bump
    )]
    pub farm: Account<'info, FarmAccount>,

    /// Created on the owner's first farm
    #[account(
        init_if_needed,
        payer = owner,
        space = FarmerIndex::DISCRIMINATOR.len() + FarmerIndex::INIT_SPACE,
        seeds = [SEED_FARMER, owner.key().as_ref()],
        bump
    )]
    pub farmer_index: Account<'info, FarmerIndex>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Register a product under an existing farm (farm owner only)
#[derive(Accounts)]
#[instruction(farm_id: u64)]
pub struct RegisterProduct<'info> {
    #[account(
        mut,
        seeds = [SEED_CONFIG],
        bump = config.bump
    )]
    pub config: Account<'info, RegistryConfig>,

    /// Farm PDA, may be uninitialized (reported as FarmNotFound)
    /// CHECK: Address verified by seeds, data loaded in instruction
    #[account(
        mut,
        seeds = [SEED_FARM, farm_id.to_le_bytes().as_ref()],
        bump
    )]
    pub farm: UncheckedAccount<'info>,

    #[account(
        init,
        payer = owner,
        space = ProductAccount::DISCRIMINATOR.len() + ProductAccount::INIT_SPACE,
        seeds = [SEED_PRODUCT, config.next_product_id().to_le_bytes().as_ref()],
        bump
    )]
    pub product: Account<'info, ProductAccount>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Read a farm record (zero-valued if absent)
#[derive(Accounts)]
#[instruction(farm_id: u64)]
pub struct GetFarm<'info> {
    /// CHECK: Address verified by seeds, may be uninitialized
    #[account(
        seeds = [SEED_FARM, farm_id.to_le_bytes().as_ref()],
        bump
    )]
    pub farm: UncheckedAccount<'info>,
}

/// Read a product record (zero-valued if absent)
#[derive(Accounts)]
#[instruction(product_id: u64)]
pub struct GetProduct<'info> {
    /// CHECK: Address verified by seeds, may be uninitialized
    #[account(
        seeds = [SEED_PRODUCT, product_id.to_le_bytes().as_ref()],
        bump
    )]
    pub product: UncheckedAccount<'info>,
}

/// Read the farms registered by an owner
#[derive(Accounts)]
#[instruction(owner: Pubkey)]
pub struct GetFarmerFarms<'info> {
    /// CHECK: Address verified by seeds, may be uninitialized
    #[account(
        seeds = [SEED_FARMER, owner.as_ref()],
        bump
    )]
    pub farmer_index: UncheckedAccount<'info>,
}

/// Read registry counters
#[derive(Accounts)]
pub struct ReadConfig<'info> {
    #[account(
        seeds = [SEED_CONFIG],
        bump = config.bump
    )]
    pub config: Account<'info, RegistryConfig>,
}
