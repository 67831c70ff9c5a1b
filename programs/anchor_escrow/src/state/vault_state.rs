use anchor_lang::prelude::*;

/**
 * Custodial vault account
 *
 * Program-owned PDA with no data besides the discriminator. Lamports above
 * its rent-exempt reserve are the escrowed balance; only the program can
 * debit it.
 *
 * Derivation: ["vault"]
 */
#[account]
#[derive(Default, Debug)]
pub struct VaultAccount {}

impl VaultAccount {
    /// Discriminator only
    pub const LEN: usize = 8 + std::mem::size_of::<VaultAccount>();
}
