//! Error Types
//!
//! The harness has exactly one failure category: an unrecoverable step
//! failure. A rejected transaction, a malformed instruction, missing
//! account state, and a failed post-condition check all end the run the
//! same way. Nothing is caught below the binary's entry point; errors
//! propagate with `?` until the process exits nonzero.

use solana_program::{program_error::ProgramError, pubkey::Pubkey};
use solana_program_test::BanksClientError;
use thiserror::Error;

use crate::driver::Step;

// =============================================================================
// STEP ERROR
// =============================================================================

/// Any failure inside a single round trip to the token program.
#[derive(Error, Debug)]
pub enum StepError {
    /// The bank rejected or failed to confirm the transaction.
    #[error("transaction failed: {0}")]
    Client(#[from] BanksClientError),

    /// An instruction builder refused its inputs before anything was sent.
    #[error("could not build instruction: {0}")]
    Instruction(#[from] ProgramError),

    /// The account we read back does not exist on the bank.
    #[error("account {0} not found")]
    AccountMissing(Pubkey),

    /// The account exists but its data does not unpack as token state.
    #[error("account {address} holds malformed state: {source}")]
    BadAccountState {
        address: Pubkey,
        source: ProgramError,
    },

    /// A post-condition on freshly fetched state did not hold.
    #[error("check failed: {0}")]
    Check(String),
}

// =============================================================================
// HARNESS ERROR
// =============================================================================

/// A step failure tagged with the driver step it occurred in, so the exit
/// report names where the run stopped.
#[derive(Error, Debug)]
#[error("{step} step failed: {source}")]
pub struct HarnessError {
    pub step: Step,
    #[source]
    pub source: StepError,
}

impl HarnessError {
    /// Adapter for `map_err` at step boundaries in the driver.
    pub fn at(step: Step) -> impl FnOnce(StepError) -> HarnessError {
        move |source| HarnessError { step, source }
    }
}
