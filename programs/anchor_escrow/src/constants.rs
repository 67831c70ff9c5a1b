use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * PDA seeds shared by the on-chain constraints and the off-chain
 * address helpers in `utils::pda`.
 */

/// ===== PDA SEED CONSTANTS =====

/// Seed for the escrow (pool) state PDA
/// - Used in: ["escrow"]
/// - One escrow account per program, holds the next claim index
#[constant]
pub const ESCROW_SEED: &str = "escrow";

/// Seed for the vault PDA
/// - Used in: ["vault"]
/// - Program-owned account that custodies all staked lamports
#[constant]
pub const VAULT_SEED: &str = "vault";

// Per-stake claim accounts have no fixed seed prefix:
// ["<staker pubkey bytes>", "<index as decimal string>"]
