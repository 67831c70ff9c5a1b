//! Runs the compiled program inside LiteSVM.
//!
//! Build the program before running the tests:
//!
//! ```sh
//! anchor build        # or: cargo build-sbf
//! ```
//!
//! The shared object is read from `target/deploy/anchor_escrow.so`, or from
//! `$SBF_OUT_DIR/anchor_escrow.so` when that variable is set.

use std::path::PathBuf;

use anchor_lang::event::EVENT_IX_TAG_LE;
use anchor_lang::prelude::Pubkey;
use anchor_lang::{
    system_program, AccountDeserialize, AnchorDeserialize, Discriminator, InstructionData,
    ToAccountMetas,
};
use litesvm::types::{FailedTransactionMetadata, TransactionMetadata};
use litesvm::LiteSVM;
use solana_sdk::instruction::{Instruction, InstructionError};
use solana_sdk::signature::{Keypair, Signer};
use solana_sdk::transaction::{Transaction, TransactionError};

use crate::state::*;
use crate::utils::*;

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

pub type TxResult = Result<TransactionMetadata, FailedTransactionMetadata>;

fn program_path() -> PathBuf {
    let out_dir = std::env::var("SBF_OUT_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../target/deploy")
        });
    out_dir.join("anchor_escrow.so")
}

pub fn escrow_address() -> Pubkey {
    find_escrow_address(&crate::ID).0
}

pub fn vault_address() -> Pubkey {
    find_vault_address(&crate::ID).0
}

pub fn user_escrow_address(staker: &Pubkey, index: u64) -> Pubkey {
    find_user_escrow_address(&crate::ID, staker, index).0
}

fn event_authority() -> Pubkey {
    Pubkey::find_program_address(&[b"__event_authority"], &crate::ID).0
}

pub fn initialize_ix(payer: Pubkey, vault_bump: u8) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: crate::accounts::Initialize {
            escrow_account: escrow_address(),
            vault_account: vault_address(),
            payer,
            system_program: system_program::ID,
            event_authority: event_authority(),
            program: crate::ID,
        }
        .to_account_metas(None),
        data: crate::instruction::Initialize { vault_bump }.data(),
    }
}

pub fn stake_ix(staker: Pubkey, user_escrow: Pubkey, amount: u64) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: crate::accounts::Stake {
            escrow_account: escrow_address(),
            vault_account: vault_address(),
            user_escrow_account: user_escrow,
            staker,
            system_program: system_program::ID,
            event_authority: event_authority(),
            program: crate::ID,
        }
        .to_account_metas(None),
        data: crate::instruction::Stake { amount }.data(),
    }
}

pub fn cancel_ix(staker: Pubkey, user_escrow: Pubkey, index: u64) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: crate::accounts::Cancel {
            staker,
            vault_account: vault_address(),
            user_escrow_account: user_escrow,
            system_program: system_program::ID,
            event_authority: event_authority(),
            program: crate::ID,
        }
        .to_account_metas(None),
        data: crate::instruction::Cancel { index }.data(),
    }
}

pub fn release_ix(staker: Pubkey, receiver: Pubkey, user_escrow: Pubkey) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: crate::accounts::Release {
            staker,
            receiver,
            escrow_account: escrow_address(),
            vault_account: vault_address(),
            user_escrow_account: user_escrow,
            system_program: system_program::ID,
            event_authority: event_authority(),
            program: crate::ID,
        }
        .to_account_metas(None),
        data: crate::instruction::Release {}.data(),
    }
}

/// LiteSVM with the escrow program loaded and a fee payer that covers every
/// transaction fee, so staker balances move only by what the program moves.
pub struct EscrowSvm {
    pub svm: LiteSVM,
    pub payer: Keypair,
}

impl EscrowSvm {
    pub fn new() -> Self {
        let mut svm = LiteSVM::new();
        let path = program_path();
        svm.add_program_from_file(crate::ID, &path).unwrap_or_else(|err| {
            panic!("cannot load {}: {:?} (run `anchor build` first)", path.display(), err)
        });

        let payer = Keypair::new();
        svm.airdrop(&payer.pubkey(), 100 * LAMPORTS_PER_SOL)
            .expect("airdrop to fee payer");
        Self { svm, payer }
    }

    /// Fresh program with the escrow already initialized.
    pub fn initialized() -> Self {
        let mut env = Self::new();
        let (_, vault_bump) = find_vault_address(&crate::ID);
        let payer = env.payer.pubkey();
        env.send(initialize_ix(payer, vault_bump), &[])
            .expect("initialize");
        env
    }

    pub fn funded_keypair(&mut self, lamports: u64) -> Keypair {
        let keypair = Keypair::new();
        self.svm
            .airdrop(&keypair.pubkey(), lamports)
            .expect("airdrop");
        keypair
    }

    /// Sends one instruction paid by `payer` and signed by `signers`.
    pub fn send(&mut self, ix: Instruction, signers: &[&Keypair]) -> TxResult {
        let mut all_signers: Vec<&Keypair> = vec![&self.payer];
        all_signers.extend_from_slice(signers);
        let tx = Transaction::new_signed_with_payer(
            &[ix],
            Some(&self.payer.pubkey()),
            &all_signers,
            self.svm.latest_blockhash(),
        );
        let result = self.svm.send_transaction(tx);
        // Identical retries must not be deduplicated as already processed
        self.svm.expire_blockhash();
        result
    }

    /// Stakes at the current index, deriving the claim address like a client.
    pub fn stake(
        &mut self,
        staker: &Keypair,
        amount: u64,
    ) -> Result<(u64, Pubkey), FailedTransactionMetadata> {
        let index = self.escrow_account().map(|e| e.next_index).unwrap_or_default();
        let user_escrow = user_escrow_address(&staker.pubkey(), index);
        self.send(stake_ix(staker.pubkey(), user_escrow, amount), &[staker])?;
        Ok((index, user_escrow))
    }

    pub fn cancel(&mut self, staker: &Keypair, user_escrow: Pubkey, index: u64) -> TxResult {
        self.send(cancel_ix(staker.pubkey(), user_escrow, index), &[staker])
    }

    pub fn release(&mut self, staker: &Keypair, receiver: Pubkey, user_escrow: Pubkey) -> TxResult {
        self.send(release_ix(staker.pubkey(), receiver, user_escrow), &[staker])
    }

    pub fn balance(&self, key: &Pubkey) -> u64 {
        self.svm.get_balance(key).unwrap_or_default()
    }

    pub fn rent_exempt_minimum(&self, data_len: usize) -> u64 {
        self.svm.minimum_balance_for_rent_exemption(data_len)
    }

    /// Vault lamports above its rent-exempt reserve.
    pub fn vault_escrowed(&self) -> u64 {
        escrowed_balance(
            self.balance(&vault_address()),
            self.rent_exempt_minimum(VaultAccount::LEN),
        )
    }

    pub fn escrow_account(&self) -> Option<EscrowAccount> {
        self.fetch(&escrow_address())
    }

    pub fn next_index(&self) -> u64 {
        self.escrow_account().expect("escrow initialized").next_index
    }

    pub fn user_escrow_account(&self, key: &Pubkey) -> Option<UserEscrowAccount> {
        self.fetch(key)
    }

    fn fetch<T: AccountDeserialize>(&self, key: &Pubkey) -> Option<T> {
        let account = self.svm.get_account(key)?;
        if account.lamports == 0 {
            return None;
        }
        T::try_deserialize(&mut account.data.as_slice()).ok()
    }
}

/// Events of type `E` the program emitted through `emit_cpi!`.
pub fn emitted<E: Discriminator + AnchorDeserialize>(meta: &TransactionMetadata) -> Vec<E> {
    meta.inner_instructions
        .iter()
        .flatten()
        .filter_map(|inner| {
            let mut payload = inner
                .instruction
                .data
                .strip_prefix(EVENT_IX_TAG_LE)?
                .strip_prefix(E::DISCRIMINATOR)?;
            E::deserialize(&mut payload).ok()
        })
        .collect()
}

/// Asserts the transaction failed in its only instruction with `expected`.
pub fn assert_instruction_error<T>(
    result: Result<T, FailedTransactionMetadata>,
    expected: InstructionError,
) {
    match result {
        Err(failed) => assert_eq!(
            failed.err,
            TransactionError::InstructionError(0, expected),
            "logs: {:#?}",
            failed.meta.logs
        ),
        Ok(_) => panic!("transaction succeeded, expected {:?}", expected),
    }
}

/// Asserts an Anchor framework or `EscrowError` code.
pub fn assert_error_code<T>(result: Result<T, FailedTransactionMetadata>, code: u32) {
    assert_instruction_error(result, InstructionError::Custom(code));
}
