use anchor_lang::prelude::*;
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::event::*;
use crate::utils::{check_vault_covers, escrowed_balance, index_seed, withdraw_lamports};

/**
 * Account context for cancelling a stake
 *
 * Refunds the claim amount from the vault to the staker and closes the
 * claim account. The index is retired for good.
 *
 * Access Control: Only the staker stored in the claim can cancel it
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(index: u64)]
pub struct Cancel<'info> {
    /// The staker being refunded
    /// - Must match the staker stored in the claim
    /// - Receives the refund and the claim account's rent
    #[account(mut)]
    pub staker: Signer<'info>,

    /// Vault holding the staked lamports
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes()],
        // Canonical bump: Cancel has no escrow account, so the stored vault_bump is unavailable
        bump
    )]
    pub vault_account: Account<'info, VaultAccount>,

    /// Claim account to cancel, closed with rent to the staker
    /// - Derived from: [stored staker, index as decimal string]
    /// - Seeds use the stored staker so a foreign signer fails the ownership check
    #[account(
        mut,
        close = staker,
        seeds = [user_escrow_account.staker.as_ref(), index_seed(index).as_bytes()],
        bump = user_escrow_account.bump,
        has_one = staker @ EscrowError::StakerMismatch
    )]
    pub user_escrow_account: Account<'info, UserEscrowAccount>,

    pub system_program: Program<'info, System>,
}

/**
 * Cancels a pending stake and refunds the staker
 *
 * @param ctx - The account context
 * @param index - Index of the claim being cancelled
 */
pub fn handle_cancel(ctx: Context<Cancel>, index: u64) -> Result<()> {
    let amount = ctx.accounts.user_escrow_account.amount;

    // ===== VALIDATION PHASE =====

    let vault_info = ctx.accounts.vault_account.to_account_info();
    let rent_reserve = Rent::get()?.minimum_balance(vault_info.data_len());
    check_vault_covers(escrowed_balance(vault_info.lamports(), rent_reserve), amount)?;

    // ===== INTERACTIONS PHASE =====

    withdraw_lamports(&vault_info, &ctx.accounts.staker.to_account_info(), amount)?;

    msg!("Cancelled stake {} ({} lamports)", index, amount);

    emit_cpi!(StakeCancelled {
        user_escrow: ctx.accounts.user_escrow_account.key(),
        staker: ctx.accounts.staker.key(),
        amount,
        index,
    });

    // The claim account is closed by the `close = staker` constraint on exit
    Ok(())
}
