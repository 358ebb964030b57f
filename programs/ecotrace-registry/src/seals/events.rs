use anchor_lang::prelude::*;

/// Event emitted when a seal is issued and its asset minted
/// seal_type: 0 = carbon footprint, 1 = deforestation-free
#[event]
pub struct SealIssued {
    pub seal_id: u64,
    pub product_id: u64,
    pub seal_type: u8,
}

/// Event emitted when a seal is transferred through the registry
#[event]
pub struct SealTransferred {
    pub seal_id: u64,
    pub asset: Pubkey,
    pub from: Pubkey,
    pub to: Pubkey,
}

/// Event emitted when the cached seal owner is synced after an external transfer
#[event]
pub struct SealOwnerSynced {
    pub seal_id: u64,
    pub asset: Pubkey,
    pub old_owner: Pubkey,
    pub new_owner: Pubkey,
}
