use anchor_lang::prelude::*;

// Discriminants are offsets: Anchor adds 6000, so FarmNotFound is code 6000
// and NameEmpty is code 6100.
#[error_code]
pub enum RegistryError {
    // ========== Lookup Errors (6000-6049) ==========
    #[msg("Farm doesn't exist")]
    FarmNotFound = 0,
    #[msg("Product doesn't exist")]
    ProductNotFound = 1,
    #[msg("Seal doesn't exist")]
    SealNotFound = 2,

    // ========== Authorization Errors (6050-6099) ==========
    #[msg("Not authorized")]
    NotAuthorized = 50,
    #[msg("Farm not certified deforestation-free")]
    NotCertified = 51,
    #[msg("Transfer to self not allowed")]
    TransferToSelf = 52,

    // ========== Input Errors (6100-6149) ==========
    #[msg("Name must not be empty")]
    NameEmpty = 100,
    #[msg("Name exceeds 64 bytes")]
    NameTooLong = 101,
    #[msg("Batch id exceeds 32 bytes")]
    BatchIdTooLong = 102,
    #[msg("Token URI exceeds 200 bytes")]
    UriTooLong = 103,
    #[msg("Verification data exceeds 200 bytes")]
    VerificationTooLong = 104,

    // ========== Capacity Errors (6150-6199) ==========
    #[msg("Farm limit reached for this owner")]
    FarmLimitReached = 150,
    #[msg("Product limit reached for this farm")]
    ProductLimitReached = 151,
    #[msg("Arithmetic overflow")]
    Overflow = 152,

    // ========== Token Errors (6200-6249) ==========
    #[msg("Invalid collection")]
    InvalidCollection = 200,
    #[msg("Invalid asset")]
    InvalidAsset = 201,
}
