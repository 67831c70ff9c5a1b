use anchor_lang::prelude::*;

declare_id!("FBqs6w6dNmKCvL2J55K8VKP1CNV7vKfUYyLskhZfaWas");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Anchor Escrow Program
 *
 * Lets independent stakers park lamports in a shared, program-owned vault.
 * Every stake becomes its own claim account, addressed from the staker key
 * and a global index, so no on-chain directory is needed to find it.
 *
 * Architecture:
 * - Escrow PDA ["escrow"]: next claim index and the vault bump
 * - Vault PDA ["vault"]: custodies all staked lamports
 * - Claim PDAs [staker, index]: one per pending stake
 *
 * Workflow:
 * 1. Anyone initializes the escrow once
 * 2. Stakers stake lamports, each stake takes the next index
 * 3. A staker either cancels (refund to self) or releases (pay a receiver)
 * 4. Either path closes the claim and returns its rent to the staker
 */
#[program]
pub mod anchor_escrow {
    use super::*;

    /**
     * Creates the escrow state and the vault
     *
     * @param ctx - Account context containing escrow, vault and payer accounts
     * @param vault_bump - Canonical bump of the ["vault"] PDA
     *
     * Access Control: Anyone, succeeds only once
     */
    pub fn initialize(ctx: Context<Initialize>, vault_bump: u8) -> Result<()> {
        handle_initialize(ctx, vault_bump)
    }

    /**
     * Stakes lamports and opens a claim at the current index
     *
     * @param ctx - Account context containing escrow, vault, claim and staker accounts
     * @param amount - Lamports to stake
     *
     * Access Control: Staker signs
     */
    pub fn stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
        handle_stake(ctx, amount)
    }

    /**
     * Cancels a pending claim and refunds the staker
     *
     * @param ctx - Account context containing vault, claim and staker accounts
     * @param index - Index of the claim
     *
     * Access Control: Claim's staker only
     */
    pub fn cancel(ctx: Context<Cancel>, index: u64) -> Result<()> {
        handle_cancel(ctx, index)
    }

    /**
     * Releases a pending claim to a receiver
     *
     * @param ctx - Account context containing escrow, vault, claim, staker and receiver accounts
     *
     * Access Control: Claim's staker only
     */
    pub fn release(ctx: Context<Release>) -> Result<()> {
        handle_release(ctx)
    }
}
