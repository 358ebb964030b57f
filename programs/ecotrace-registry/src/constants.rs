//! Centralized PDA seed constants for the EcoTrace registry.
//!
//! All PDA seeds are defined here to ensure consistency between
//! Anchor context definitions and manual seed construction in CPIs.

/// Registry configuration PDA seed
/// PDA: ["config"]
pub const SEED_CONFIG: &[u8] = b"config";

/// Farm account PDA seed
/// PDA: ["farm", farm_id.to_le_bytes()]
pub const SEED_FARM: &[u8] = b"farm";

/// Product account PDA seed
/// PDA: ["product", product_id.to_le_bytes()]
pub const SEED_PRODUCT: &[u8] = b"product";

/// Seal account PDA seed
/// PDA: ["seal", seal_id.to_le_bytes()]
pub const SEED_SEAL: &[u8] = b"seal";

/// Farmer index PDA seed (farms registered by an owner)
/// PDA: ["farmer", owner.key()]
pub const SEED_FARMER: &[u8] = b"farmer";

/// Seal holder PDA seed (seal balance per owner)
/// PDA: ["holder", owner.key()]
pub const SEED_HOLDER: &[u8] = b"holder";

/// Name of the Metaplex Core collection seals are minted into
pub const COLLECTION_NAME: &str = "EcoTrace Seals";
