use anchor_lang::prelude::*;
use crate::constants::*;

/// Decimal string form of a claim index used as the second claim seed.
/// Clients derive it the same way (`new BN(index).toString()`).
pub fn index_seed(index: u64) -> String {
    index.to_string()
}

/// Escrow pool state address: ["escrow"]
pub fn find_escrow_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[ESCROW_SEED.as_bytes()], program_id)
}

/// Vault address: ["vault"]
pub fn find_vault_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_SEED.as_bytes()], program_id)
}

/// Claim address for a staker's stake at `index`: [staker, index_seed(index)]
pub fn find_user_escrow_address(
    program_id: &Pubkey,
    staker: &Pubkey,
    index: u64,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[staker.as_ref(), index_seed(index).as_bytes()],
        program_id,
    )
}
