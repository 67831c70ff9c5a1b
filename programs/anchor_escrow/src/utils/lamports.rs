use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};
use crate::error::EscrowError;

/// Moves lamports out of a signer's system account through the System Program
pub fn deposit_lamports<'a>(
    from: AccountInfo<'a>,
    to: AccountInfo<'a>,
    system_program: AccountInfo<'a>,
    amount: u64,
) -> Result<()> {
    let cpi_accounts = Transfer { from, to };
    transfer(CpiContext::new(system_program, cpi_accounts), amount)
}

/// Moves lamports out of a program-owned account by direct debit/credit
/// - No CPI: the runtime lets the owning program debit, anyone can be credited
pub fn withdraw_lamports<'a>(
    from: &AccountInfo<'a>,
    to: &AccountInfo<'a>,
    amount: u64,
) -> Result<()> {
    from.sub_lamports(amount)?;
    to.add_lamports(amount)?;
    Ok(())
}

/// Lamports held above the rent-exempt reserve
pub fn escrowed_balance(lamports: u64, rent_reserve: u64) -> u64 {
    lamports.saturating_sub(rent_reserve)
}

/// A stake must be non-zero and fully covered by the staker's balance
pub fn check_stake_amount(available: u64, amount: u64) -> Result<()> {
    require!(amount > 0, EscrowError::InvalidAmount);
    require!(amount <= available, EscrowError::InsufficientFunds);
    Ok(())
}

/// The vault's escrowed lamports must cover the claim being paid out
pub fn check_vault_covers(escrowed: u64, amount: u64) -> Result<()> {
    require!(escrowed >= amount, EscrowError::InsufficientVaultBalance);
    Ok(())
}

/// The receiver must end up rent exempt for its current data size
pub fn check_receiver_rent(
    rent: &Rent,
    receiver_lamports: u64,
    data_len: usize,
    amount: u64,
) -> Result<()> {
    let lamports_after = receiver_lamports
        .checked_add(amount)
        .ok_or(EscrowError::ArithmeticOverflow)?;
    require!(
        rent.is_exempt(lamports_after, data_len),
        EscrowError::ReceiverNotRentExempt
    );
    Ok(())
}
