use anchor_lang::prelude::*;
use crate::state::*;
use crate::constants::*;
use crate::event::*;
use crate::utils::{check_stake_amount, deposit_lamports, index_seed};

/**
 * Account context for staking lamports
 *
 * Creates a claim account for the staker at the current escrow index,
 * advances the index and moves the staked lamports into the vault.
 *
 * Access Control: The staker signs and pays for the claim account
 *
 * Business Logic:
 * - The claim PDA must be derived from (staker, escrow.next_index)
 * - A stake larger than the staker's balance fails, nothing is partially moved
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Stake<'info> {
    /// Escrow pool state
    /// - Provides the index for the new claim and is incremented
    #[account(
        mut,
        seeds = [ESCROW_SEED.as_bytes()],
        bump
    )]
    pub escrow_account: Account<'info, EscrowAccount>,

    /// Vault receiving the staked lamports
    /// - Derived from: ["vault"] with the stored bump
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes()],
        bump = escrow_account.vault_bump
    )]
    pub vault_account: Account<'info, VaultAccount>,

    /// Claim account for this stake
    /// - Derived from: [staker, next_index as decimal string]
    #[account(
        init,
        payer = staker,
        space = UserEscrowAccount::LEN,
        seeds = [staker.key().as_ref(), index_seed(escrow_account.next_index).as_bytes()],
        bump
    )]
    pub user_escrow_account: Account<'info, UserEscrowAccount>,

    /// The staker funding the claim
    #[account(mut)]
    pub staker: Signer<'info>,

    /// System program for account creation and the lamport transfer
    pub system_program: Program<'info, System>,
}

/**
 * Stakes lamports into the escrow
 *
 * @param ctx - The account context
 * @param amount - Lamports to move into the vault
 */
pub fn handle_stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
    // ===== VALIDATION PHASE =====

    check_stake_amount(ctx.accounts.staker.lamports(), amount)?;

    // ===== EFFECTS PHASE =====

    let escrow_account = &mut ctx.accounts.escrow_account;
    let index = escrow_account.assign_index()?;

    let staker_key = ctx.accounts.staker.key();
    let user_escrow_account = &mut ctx.accounts.user_escrow_account;
    user_escrow_account.open(staker_key, amount, index, ctx.bumps.user_escrow_account);

    // ===== INTERACTIONS PHASE =====

    deposit_lamports(
        ctx.accounts.staker.to_account_info(),
        ctx.accounts.vault_account.to_account_info(),
        ctx.accounts.system_program.to_account_info(),
        amount,
    )?;

    msg!("Staked {} lamports at index {}", amount, index);

    emit_cpi!(Staked {
        user_escrow: ctx.accounts.user_escrow_account.key(),
        staker: staker_key,
        amount,
        index,
    });

    Ok(())
}
