use anchor_lang::prelude::*;

/// Custom error codes for the locked-treasury token program.
#[error_code]
pub enum LockedTokenError {
    #[msg("Unauthorized: owner signature required")]
    Unauthorized,

    #[msg("Unauthorized: signer does not control the source account")]
    UnauthorizedSender,

    #[msg("Insufficient balance in source account")]
    InsufficientBalance,

    #[msg("Amount exceeds the treasury's unlocked pool")]
    InsufficientUnlocked,

    #[msg("Invalid genesis parameters")]
    InvalidConstruction,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Token name too long")]
    NameTooLong,

    #[msg("Token symbol too long")]
    SymbolTooLong,

    #[msg("Invalid token mint")]
    InvalidTokenMint,
}
