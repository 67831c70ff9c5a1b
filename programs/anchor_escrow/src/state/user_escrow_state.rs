use anchor_lang::prelude::*;
use crate::utils::pda::index_seed;

/**
 * Per-stake claim account
 *
 * One record per pending stake. Its existence is the claim: cancel and
 * release both close it, so a retired index has no residual record.
 *
 * Derivation: [staker_key, index.to_string()]
 *
 * Lifecycle:
 * 1. Created by stake with index = escrow.next_index
 * 2. Closed by cancel (refund) or release (pay receiver), rent to staker
 */
#[account]
#[derive(Default, Debug)]
pub struct UserEscrowAccount {
    /// Staker who created the claim, checked on cancel and release
    pub staker: Pubkey,

    /// Lamports held in the vault for this claim
    pub amount: u64,

    /// Claim index, also the second PDA seed
    pub index: u64,

    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl UserEscrowAccount {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<UserEscrowAccount>();

    /// Records a new claim for `staker` at `index`
    pub fn open(&mut self, staker: Pubkey, amount: u64, index: u64, bump: u8) {
        self.staker = staker;
        self.amount = amount;
        self.index = index;
        self.bump = bump;
    }

    /// Decimal index seed, matching what clients feed to `findProgramAddress`.
    pub fn index_seed(&self) -> String {
        index_seed(self.index)
    }
}
