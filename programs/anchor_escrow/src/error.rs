use anchor_lang::prelude::*;

#[error_code]
pub enum EscrowError {
    // Access control errors
    #[msg("Signer is not the staker of this escrow claim")]
    StakerMismatch,
    #[msg("Receiver cannot be the vault")]
    InvalidReceiver,

    // Derivation errors
    #[msg("Vault bump does not match the canonical vault PDA bump")]
    InvalidVaultBump,

    // Amount validation errors
    #[msg("Stake amount must be greater than zero")]
    InvalidAmount,
    #[msg("Staker does not have enough lamports for this stake")]
    InsufficientFunds,
    #[msg("Vault does not hold enough escrowed lamports for this claim")]
    InsufficientVaultBalance,
    #[msg("Receiver would not be rent exempt after release")]
    ReceiverNotRentExempt,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
