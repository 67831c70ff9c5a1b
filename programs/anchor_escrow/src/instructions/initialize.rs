use anchor_lang::prelude::*;
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::event::*;

/**
 * Account context for initializing the escrow
 *
 * Creates the singleton escrow state PDA and the program-owned vault PDA.
 * Both use `init`, so a second call fails because the addresses are
 * already in use.
 *
 * Access Control: Anyone can pay for initialization, once
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Escrow pool state (PDA)
    /// - Derived from: ["escrow"]
    /// - Holds next_index and the vault bump
    #[account(
        init,
        payer = payer,
        space = EscrowAccount::LEN,
        seeds = [ESCROW_SEED.as_bytes()],
        bump
    )]
    pub escrow_account: Account<'info, EscrowAccount>,

    /// Vault (PDA) that custodies staked lamports
    /// - Derived from: ["vault"]
    /// - Funded only with its rent-exempt reserve
    #[account(
        init,
        payer = payer,
        space = VaultAccount::LEN,
        seeds = [VAULT_SEED.as_bytes()],
        bump
    )]
    pub vault_account: Account<'info, VaultAccount>,

    /// Pays rent for both accounts
    #[account(mut)]
    pub payer: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/**
 * Initializes the escrow pool
 *
 * @param ctx - The account context containing escrow, vault and payer accounts
 * @param vault_bump - Bump the client derived for ["vault"]
 */
pub fn handle_initialize(ctx: Context<Initialize>, vault_bump: u8) -> Result<()> {
    // The stored bump is what clients and later instructions use to rebuild the vault address
    require!(
        vault_bump == ctx.bumps.vault_account,
        EscrowError::InvalidVaultBump
    );

    let escrow_account = &mut ctx.accounts.escrow_account;
    escrow_account.next_index = 0;
    escrow_account.vault_bump = vault_bump;

    msg!("Escrow initialized, vault bump {}", vault_bump);

    emit_cpi!(EscrowInitialized {
        escrow: escrow_account.key(),
        vault: ctx.accounts.vault_account.key(),
        vault_bump,
        payer: ctx.accounts.payer.key(),
    });

    Ok(())
}
