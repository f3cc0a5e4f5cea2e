//! # Token Proxy Harness
//!
//! A client-side integration harness for the four proxied token
//! operations: mint, transfer, burn, and set-authority. The harness
//! builds instructions, signs and submits them through a banks client,
//! reads back the resulting account state, and checks the observable
//! post-conditions.
//!
//! The token program itself is an external collaborator. This crate
//! contains none of its logic: no instruction handlers, no account
//! validation, no supply bookkeeping. Invariants such as supply
//! conservation are enforced on-chain and merely observed here.
//!
//! ## Scenario
//!
//! | Step | Operation | Checked afterwards |
//! |------|-----------|--------------------|
//! | setup | create mint + `from` + `to` | fixtures exist |
//! | mint | issue 1000 into `from` | `from == 1000`, supply 1000 |
//! | transfer | move 400 `from -> to` | `from == 600`, `to == 400` |
//! | burn | destroy 350 out of `to` | `to == 50`, supply 650 |
//! | set-authority | reassign mint authority | mint records the new key |

// =============================================================================
// MODULE DECLARATIONS
// =============================================================================

/// Banks-client wrapper: submit transactions, fetch token state
pub mod client;

/// Sequential test driver and its fixed scenario
pub mod driver;

/// Error taxonomy: the single unrecoverable-step-failure kind
pub mod error;

/// Mint and token-account setup helpers
pub mod fixtures;

/// Instruction builders for the four proxied operations
pub mod ops;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use client::TokenClient;
pub use driver::{Fixtures, Outcome, Step, BURN_AMOUNT, MINT_AMOUNT, TRANSFER_AMOUNT};
pub use error::{HarnessError, StepError};
