//! Proxied Operations
//!
//! Instruction builders for the four operations the scenario forwards to
//! the token program. Each builder takes the spec's account-role map
//! spelled out as parameters (authority, mint, source, destination),
//! and the token-program reference rides along as the instruction's
//! `program_id`.
//!
//! | Operation | Writable accounts | Signer |
//! |-----------|-------------------|--------|
//! | mint_to | mint, destination | mint authority |
//! | transfer | source, destination | source owner |
//! | burn | source, mint | source owner |
//! | set_mint_authority | mint | current authority |

use solana_program::{instruction::Instruction, program_error::ProgramError, pubkey::Pubkey};
use spl_token::instruction::AuthorityType;

/// Issue `amount` new units of `mint` into `destination`. Must be signed
/// by the mint's current mint authority.
pub fn mint_to(
    mint: &Pubkey,
    destination: &Pubkey,
    authority: &Pubkey,
    amount: u64,
) -> Result<Instruction, ProgramError> {
    spl_token::instruction::mint_to(&spl_token::id(), mint, destination, authority, &[], amount)
}

/// Move `amount` units from `source` to `destination`. Must be signed by
/// the source account's owner.
pub fn transfer(
    source: &Pubkey,
    destination: &Pubkey,
    authority: &Pubkey,
    amount: u64,
) -> Result<Instruction, ProgramError> {
    spl_token::instruction::transfer(
        &spl_token::id(),
        source,
        destination,
        authority,
        &[],
        amount,
    )
}

/// Destroy `amount` units held in `source`, shrinking `mint`'s supply.
/// Must be signed by the source account's owner.
pub fn burn(
    source: &Pubkey,
    mint: &Pubkey,
    authority: &Pubkey,
    amount: u64,
) -> Result<Instruction, ProgramError> {
    spl_token::instruction::burn(&spl_token::id(), source, mint, authority, &[], amount)
}

/// Hand `mint`'s mint-tokens authority over to `new_authority`. Must be
/// signed by the current authority; after confirmation only the new key
/// may issue tokens.
pub fn set_mint_authority(
    mint: &Pubkey,
    current_authority: &Pubkey,
    new_authority: &Pubkey,
) -> Result<Instruction, ProgramError> {
    spl_token::instruction::set_authority(
        &spl_token::id(),
        mint,
        Some(new_authority),
        AuthorityType::MintTokens,
        current_authority,
        &[],
    )
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::signature::{Keypair, Signer};

    #[test]
    fn mint_to_targets_token_program_with_signing_authority() {
        let mint = Keypair::new().pubkey();
        let destination = Keypair::new().pubkey();
        let authority = Keypair::new().pubkey();

        let ix = mint_to(&mint, &destination, &authority, 1_000).unwrap();

        assert_eq!(ix.program_id, spl_token::id());
        assert_eq!(ix.accounts.len(), 3);
        assert_eq!(ix.accounts[0].pubkey, mint);
        assert!(ix.accounts[0].is_writable);
        assert_eq!(ix.accounts[1].pubkey, destination);
        assert!(ix.accounts[1].is_writable);
        assert_eq!(ix.accounts[2].pubkey, authority);
        assert!(ix.accounts[2].is_signer);
    }

    #[test]
    fn transfer_marks_both_accounts_writable() {
        let source = Keypair::new().pubkey();
        let destination = Keypair::new().pubkey();
        let owner = Keypair::new().pubkey();

        let ix = transfer(&source, &destination, &owner, 400).unwrap();

        assert_eq!(ix.program_id, spl_token::id());
        assert_eq!(ix.accounts[0].pubkey, source);
        assert!(ix.accounts[0].is_writable);
        assert_eq!(ix.accounts[1].pubkey, destination);
        assert!(ix.accounts[1].is_writable);
        assert_eq!(ix.accounts[2].pubkey, owner);
        assert!(ix.accounts[2].is_signer);
    }

    #[test]
    fn burn_orders_source_before_mint() {
        let source = Keypair::new().pubkey();
        let mint = Keypair::new().pubkey();
        let owner = Keypair::new().pubkey();

        let ix = burn(&source, &mint, &owner, 350).unwrap();

        assert_eq!(ix.accounts[0].pubkey, source);
        assert_eq!(ix.accounts[1].pubkey, mint);
        assert!(ix.accounts[2].is_signer);
    }

    #[test]
    fn set_mint_authority_signs_with_current_key_only() {
        let mint = Keypair::new().pubkey();
        let current = Keypair::new().pubkey();
        let fresh = Keypair::new().pubkey();

        let ix = set_mint_authority(&mint, &current, &fresh).unwrap();

        assert_eq!(ix.program_id, spl_token::id());
        assert_eq!(ix.accounts[0].pubkey, mint);
        assert!(ix.accounts[0].is_writable);
        assert_eq!(ix.accounts[1].pubkey, current);
        assert!(ix.accounts[1].is_signer);
        // The new authority is carried in the instruction data, not as an
        // account.
        assert!(ix.accounts.iter().all(|meta| meta.pubkey != fresh));
    }
}
