use anchor_lang::prelude::*;
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::event::*;
use crate::utils::{check_receiver_rent, check_vault_covers, escrowed_balance, withdraw_lamports};

/**
 * Account context for releasing a stake to a receiver
 *
 * Pays the claim amount from the vault to a receiver chosen by the staker
 * and closes the claim account. The receiver does not need to exist yet.
 *
 * Access Control: Only the staker stored in the claim can release it
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Release<'info> {
    /// The staker authorizing the release
    /// - Must match the staker stored in the claim
    /// - Receives the claim account's rent
    #[account(mut)]
    pub staker: Signer<'info>,

    /// Destination of the released lamports
    /// CHECK: Any address except the vault; only credited
    #[account(
        mut,
        constraint = receiver.key() != vault_account.key() @ EscrowError::InvalidReceiver
    )]
    pub receiver: UncheckedAccount<'info>,

    /// Escrow pool state, supplies the stored vault bump
    #[account(
        seeds = [ESCROW_SEED.as_bytes()],
        bump
    )]
    pub escrow_account: Account<'info, EscrowAccount>,

    /// Vault holding the staked lamports
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes()],
        bump = escrow_account.vault_bump
    )]
    pub vault_account: Account<'info, VaultAccount>,

    /// Claim account to release, closed with rent to the staker
    /// - Derived from: [stored staker, stored index as decimal string]
    #[account(
        mut,
        close = staker,
        seeds = [user_escrow_account.staker.as_ref(), user_escrow_account.index_seed().as_bytes()],
        bump = user_escrow_account.bump,
        has_one = staker @ EscrowError::StakerMismatch
    )]
    pub user_escrow_account: Account<'info, UserEscrowAccount>,

    pub system_program: Program<'info, System>,
}

/**
 * Releases a pending stake to the receiver
 *
 * @param ctx - The account context
 */
pub fn handle_release(ctx: Context<Release>) -> Result<()> {
    let amount = ctx.accounts.user_escrow_account.amount;
    let index = ctx.accounts.user_escrow_account.index;

    // ===== VALIDATION PHASE =====

    let rent = Rent::get()?;
    let vault_info = ctx.accounts.vault_account.to_account_info();
    let rent_reserve = rent.minimum_balance(vault_info.data_len());
    check_vault_covers(escrowed_balance(vault_info.lamports(), rent_reserve), amount)?;

    let receiver_info = ctx.accounts.receiver.to_account_info();
    check_receiver_rent(&rent, receiver_info.lamports(), receiver_info.data_len(), amount)?;

    // ===== INTERACTIONS PHASE =====

    withdraw_lamports(&vault_info, &receiver_info, amount)?;

    msg!("Released stake {} ({} lamports) to {}", index, amount, receiver_info.key);

    emit_cpi!(StakeReleased {
        user_escrow: ctx.accounts.user_escrow_account.key(),
        staker: ctx.accounts.staker.key(),
        receiver: ctx.accounts.receiver.key(),
        amount,
        index,
    });

    Ok(())
}
