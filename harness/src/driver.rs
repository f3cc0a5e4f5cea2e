//! Test Driver
//!
//! The fixed scenario: create a mint and two token accounts, then issue
//! four state-changing operations in order (mint, transfer, burn,
//! set-authority), reading back and checking the affected state after
//! each one.
//!
//! Control flow is strictly linear:
//!
//! ```text
//! Init -> Minted -> Transferred -> Burned -> AuthorityChanged -> Done
//! ```
//!
//! Every step is one blocking round trip: submit, await confirmation,
//! fetch fresh state, compare. There are no retries and no partial
//! recovery; the first failing step ends the run, tagged with the step
//! it died in.

use std::fmt;

use log::info;
use solana_program::{program_option::COption, pubkey::Pubkey};
use solana_sdk::signature::{Keypair, Signer};

use crate::{
    client::TokenClient,
    error::{HarnessError, StepError},
    fixtures, ops,
};

// =============================================================================
// SCENARIO CONSTANTS
// =============================================================================

/// Units minted into `from` during the mint step.
pub const MINT_AMOUNT: u64 = 1_000;

/// Units moved `from -> to` during the transfer step.
pub const TRANSFER_AMOUNT: u64 = 400;

/// Units destroyed out of `to` during the burn step.
pub const BURN_AMOUNT: u64 = 350;

// =============================================================================
// STEPS
// =============================================================================

/// The five steps of the scenario, in execution order. Used to tag
/// failures for the exit report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Setup,
    Mint,
    Transfer,
    Burn,
    SetAuthority,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::Setup => "setup",
            Step::Mint => "mint",
            Step::Transfer => "transfer",
            Step::Burn => "burn",
            Step::SetAuthority => "set-authority",
        };
        f.write_str(name)
    }
}

// =============================================================================
// FIXTURES AND OUTCOME
// =============================================================================

/// Addresses created during setup. All three are owned by the token
/// program on-chain; the client only ever holds their addresses.
pub struct Fixtures {
    pub mint: Pubkey,
    pub from: Pubkey,
    pub to: Pubkey,
}

/// Final observed state after a complete run.
pub struct Outcome {
    pub from_balance: u64,
    pub to_balance: u64,
    pub supply: u64,
    pub mint_authority: Pubkey,
}

// =============================================================================
// DRIVER
// =============================================================================

/// Create the scenario's mint and both token accounts, all under the
/// client's payer identity.
pub async fn setup(client: &mut TokenClient) -> Result<Fixtures, HarnessError> {
    let owner = client.payer_pubkey();

    let run = async {
        let mint = fixtures::create_mint(client, &owner).await?;
        let from = fixtures::create_token_account(client, &mint, &owner).await?;
        let to = fixtures::create_token_account(client, &mint, &owner).await?;
        Ok(Fixtures { mint, from, to })
    };

    let fx = run.await.map_err(HarnessError::at(Step::Setup))?;
    info!("setup: mint {} from {} to {}", fx.mint, fx.from, fx.to);
    Ok(fx)
}

/// Run the whole scenario against a fresh set of fixtures and return the
/// final observed state. Errors carry the step they occurred in.
pub async fn run(client: &mut TokenClient) -> Result<Outcome, HarnessError> {
    let fx = setup(client).await?;

    mint_step(client, &fx)
        .await
        .map_err(HarnessError::at(Step::Mint))?;
    info!("minted {} into from", MINT_AMOUNT);

    transfer_step(client, &fx)
        .await
        .map_err(HarnessError::at(Step::Transfer))?;
    info!("transferred {} from -> to", TRANSFER_AMOUNT);

    burn_step(client, &fx)
        .await
        .map_err(HarnessError::at(Step::Burn))?;
    info!("burned {} out of to", BURN_AMOUNT);

    let new_authority = authority_step(client, &fx)
        .await
        .map_err(HarnessError::at(Step::SetAuthority))?;
    info!("mint authority reassigned to {}", new_authority);

    let observe = async {
        let from = client.token_account(&fx.from).await?;
        let to = client.token_account(&fx.to).await?;
        let mint = client.mint(&fx.mint).await?;
        Ok(Outcome {
            from_balance: from.amount,
            to_balance: to.amount,
            supply: mint.supply,
            mint_authority: new_authority,
        })
    };
    observe.await.map_err(HarnessError::at(Step::SetAuthority))
}

/// Mint `MINT_AMOUNT` into `from`; the payer signs as mint authority.
async fn mint_step(client: &mut TokenClient, fx: &Fixtures) -> Result<(), StepError> {
    let authority = client.payer_pubkey();
    let ix = ops::mint_to(&fx.mint, &fx.from, &authority, MINT_AMOUNT)?;
    client.send(&[ix], &[]).await?;

    let from = client.token_account(&fx.from).await?;
    ensure_eq("from balance after mint", from.amount, MINT_AMOUNT)?;

    let mint = client.mint(&fx.mint).await?;
    ensure_eq("supply after mint", mint.supply, MINT_AMOUNT)
}

/// Move `TRANSFER_AMOUNT` from `from` to `to`; the payer signs as owner.
async fn transfer_step(client: &mut TokenClient, fx: &Fixtures) -> Result<(), StepError> {
    let owner = client.payer_pubkey();
    let ix = ops::transfer(&fx.from, &fx.to, &owner, TRANSFER_AMOUNT)?;
    client.send(&[ix], &[]).await?;

    let from = client.token_account(&fx.from).await?;
    ensure_eq(
        "from balance after transfer",
        from.amount,
        MINT_AMOUNT - TRANSFER_AMOUNT,
    )?;

    let to = client.token_account(&fx.to).await?;
    ensure_eq("to balance after transfer", to.amount, TRANSFER_AMOUNT)
}

/// Destroy `BURN_AMOUNT` out of `to`; the payer signs as owner.
async fn burn_step(client: &mut TokenClient, fx: &Fixtures) -> Result<(), StepError> {
    let owner = client.payer_pubkey();
    let ix = ops::burn(&fx.to, &fx.mint, &owner, BURN_AMOUNT)?;
    client.send(&[ix], &[]).await?;

    let to = client.token_account(&fx.to).await?;
    ensure_eq(
        "to balance after burn",
        to.amount,
        TRANSFER_AMOUNT - BURN_AMOUNT,
    )?;

    let mint = client.mint(&fx.mint).await?;
    ensure_eq("supply after burn", mint.supply, MINT_AMOUNT - BURN_AMOUNT)
}

/// Generate a fresh keypair and hand it the mint authority; check the
/// mint records exactly the new key. Returns the new authority.
async fn authority_step(client: &mut TokenClient, fx: &Fixtures) -> Result<Pubkey, StepError> {
    let current = client.payer_pubkey();
    let new_authority = Keypair::new().pubkey();

    let ix = ops::set_mint_authority(&fx.mint, &current, &new_authority)?;
    client.send(&[ix], &[]).await?;

    let mint = client.mint(&fx.mint).await?;
    if mint.mint_authority != COption::Some(new_authority) {
        return Err(StepError::Check(format!(
            "mint authority after reassignment: expected {}, found {:?}",
            new_authority, mint.mint_authority
        )));
    }

    Ok(new_authority)
}

/// Post-condition comparison on freshly fetched state.
fn ensure_eq(what: &str, actual: u64, expected: u64) -> Result<(), StepError> {
    if actual == expected {
        Ok(())
    } else {
        Err(StepError::Check(format!(
            "{what}: expected {expected}, found {actual}"
        )))
    }
}
