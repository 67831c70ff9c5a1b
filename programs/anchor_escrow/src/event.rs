use anchor_lang::prelude::*;

/// Event emitted when the escrow and its vault are created
#[event]
pub struct EscrowInitialized {
    /// The escrow account public key
    pub escrow: Pubkey,
    /// The vault account public key
    pub vault: Pubkey,
    /// Bump of the vault PDA
    pub vault_bump: u8,
    /// Account that paid for both accounts
    pub payer: Pubkey,
}

/// Event emitted when lamports are staked into the vault
#[event]
pub struct Staked {
    /// The claim account created for this stake
    pub user_escrow: Pubkey,
    /// Address of the staker
    pub staker: Pubkey,
    /// Lamports moved into the vault
    pub amount: u64,
    /// Index assigned to the claim
    pub index: u64,
}

/// Event emitted when a stake is cancelled and refunded
#[event]
pub struct StakeCancelled {
    /// The closed claim account
    pub user_escrow: Pubkey,
    /// Address of the staker who was refunded
    pub staker: Pubkey,
    /// Lamports returned to the staker
    pub amount: u64,
    /// Index of the retired claim
    pub index: u64,
}

/// Event emitted when a stake is released to a receiver
#[event]
pub struct StakeReleased {
    /// The closed claim account
    pub user_escrow: Pubkey,
    /// Address of the staker who authorized the release
    pub staker: Pubkey,
    /// Address that received the lamports
    pub receiver: Pubkey,
    /// Lamports moved to the receiver
    pub amount: u64,
    /// Index of the retired claim
    pub index: u64,
}
