//! Token Client
//!
//! A thin wrapper over the banks client that owns the harness's signing
//! identity (the payer) and performs every round trip the driver needs:
//! sign and submit one transaction, then fetch and unpack token state.
//!
//! Every submission fetches a fresh blockhash, so callers never juggle
//! blockhash plumbing between steps.

use solana_program::{instruction::Instruction, program_pack::Pack, pubkey::Pubkey, rent::Rent};
use solana_program_test::BanksClient;
use solana_sdk::{
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use spl_token::state::{Account as TokenAccount, Mint};

use crate::error::StepError;

// =============================================================================
// CLIENT
// =============================================================================

/// Handle for all traffic between the driver and the bank.
pub struct TokenClient {
    banks: BanksClient,
    payer: Keypair,
}

impl TokenClient {
    pub fn new(banks: BanksClient, payer: Keypair) -> Self {
        Self { banks, payer }
    }

    /// The local signing identity. It pays fees and, in the fixed
    /// scenario, owns both token accounts and starts as mint authority.
    pub fn payer(&self) -> &Keypair {
        &self.payer
    }

    pub fn payer_pubkey(&self) -> Pubkey {
        self.payer.pubkey()
    }

    /// Current rent schedule, used to size fixture accounts rent-exempt.
    pub async fn rent(&mut self) -> Result<Rent, StepError> {
        Ok(self.banks.get_rent().await?)
    }

    // =========================================================================
    // SUBMISSION
    // =========================================================================

    /// Sign the instructions with the payer plus `extra_signers` and
    /// process the transaction to completion. One call, one round trip;
    /// a rejected transaction surfaces here as `StepError::Client`.
    pub async fn send(
        &mut self,
        instructions: &[Instruction],
        extra_signers: &[&Keypair],
    ) -> Result<(), StepError> {
        let blockhash = self.banks.get_latest_blockhash().await?;

        let mut signers: Vec<&Keypair> = vec![&self.payer];
        signers.extend_from_slice(extra_signers);

        let tx = Transaction::new_signed_with_payer(
            instructions,
            Some(&self.payer.pubkey()),
            &signers,
            blockhash,
        );

        self.banks.process_transaction(tx).await?;
        Ok(())
    }

    // =========================================================================
    // STATE READS
    // =========================================================================

    /// Fetch a token account and unpack its state.
    pub async fn token_account(&mut self, address: &Pubkey) -> Result<TokenAccount, StepError> {
        let account = self
            .banks
            .get_account(*address)
            .await?
            .ok_or(StepError::AccountMissing(*address))?;

        TokenAccount::unpack(&account.data).map_err(|source| StepError::BadAccountState {
            address: *address,
            source,
        })
    }

    /// Fetch a mint and unpack its state (supply, decimals, authorities).
    pub async fn mint(&mut self, address: &Pubkey) -> Result<Mint, StepError> {
        let account = self
            .banks
            .get_account(*address)
            .await?
            .ok_or(StepError::AccountMissing(*address))?;

        Mint::unpack(&account.data).map_err(|source| StepError::BadAccountState {
            address: *address,
            source,
        })
    }
}
