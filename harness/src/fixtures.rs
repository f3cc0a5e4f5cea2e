//! Account Fixtures
//!
//! Setup helpers that create the on-chain records the scenario runs
//! against: one mint and two token accounts. Each helper allocates the
//! account with the system program and initializes it with the token
//! program in a single transaction, then returns the new address.
//!
//! The harness never touches the byte layout itself; sizes come from the
//! token program's published state types and data comes from its
//! instruction builders.

use solana_program::{program_pack::Pack, pubkey::Pubkey, system_instruction};
use solana_sdk::signature::{Keypair, Signer};
use spl_token::state::{Account as TokenAccount, Mint};

use crate::{client::TokenClient, error::StepError};

/// Scenario mints carry whole units only.
pub const MINT_DECIMALS: u8 = 0;

/// Create and initialize a mint with `authority` as mint authority and
/// no freeze authority. Returns the mint's address.
pub async fn create_mint(
    client: &mut TokenClient,
    authority: &Pubkey,
) -> Result<Pubkey, StepError> {
    let mint = Keypair::new();
    let rent = client.rent().await?;

    let create_ix = system_instruction::create_account(
        &client.payer_pubkey(),
        &mint.pubkey(),
        rent.minimum_balance(Mint::LEN),
        Mint::LEN as u64,
        &spl_token::id(),
    );

    let init_ix = spl_token::instruction::initialize_mint(
        &spl_token::id(),
        &mint.pubkey(),
        authority,
        None,
        MINT_DECIMALS,
    )?;

    client.send(&[create_ix, init_ix], &[&mint]).await?;

    Ok(mint.pubkey())
}

/// Create and initialize a token account for `mint`, owned by `owner`.
/// Returns the account's address; its balance starts at zero.
pub async fn create_token_account(
    client: &mut TokenClient,
    mint: &Pubkey,
    owner: &Pubkey,
) -> Result<Pubkey, StepError> {
    let account = Keypair::new();
    let rent = client.rent().await?;

    let create_ix = system_instruction::create_account(
        &client.payer_pubkey(),
        &account.pubkey(),
        rent.minimum_balance(TokenAccount::LEN),
        TokenAccount::LEN as u64,
        &spl_token::id(),
    );

    let init_ix = spl_token::instruction::initialize_account(
        &spl_token::id(),
        &account.pubkey(),
        mint,
        owner,
    )?;

    client.send(&[create_ix, init_ix], &[&account]).await?;

    Ok(account.pubkey())
}

// =============================================================================
// UNIT TESTS
// =============================================================================
