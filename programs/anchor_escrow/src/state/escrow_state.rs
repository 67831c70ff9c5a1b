use anchor_lang::prelude::*;
use crate::error::EscrowError;

/**
 * Escrow pool state account
 *
 * Singleton record for the whole program. It hands out claim indices and
 * remembers the vault bump so any client can rebuild the vault address.
 *
 * Derivation: ["escrow"]
 *
 * Lifecycle:
 * 1. Created once by initialize (a second initialize fails on `init`)
 * 2. next_index incremented by every stake
 * 3. Never closed
 */
#[account]
#[derive(Default, Debug)]
pub struct EscrowAccount {
    /// Index that the next stake will receive
    /// - Starts at 0 and only ever grows
    /// - Indices of cancelled or released claims are never reused
    pub next_index: u64,

    /// Bump seed of the vault PDA ["vault"]
    pub vault_bump: u8,
}

impl EscrowAccount {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<EscrowAccount>();

    /// Takes the current index for a new claim and advances the counter.
    pub fn assign_index(&mut self) -> Result<u64> {
        let index = self.next_index;
        self.next_index = index
            .checked_add(1)
            .ok_or(EscrowError::ArithmeticOverflow)?;
        Ok(index)
    }
}
