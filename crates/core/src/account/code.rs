//! Unique account code generation.

use rand::Rng;

use super::error::AccountError;
use crate::store::FinAccountStore;

/// Pool of characters available for account codes: digits plus uppercase
/// letters.
pub const CODE_CHAR_POOL: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Ceiling on candidate codes tried before generation gives up.
///
/// A near-saturated code space must surface as
/// [`AccountError::CodeSpaceExhausted`] instead of spinning forever.
pub const MAX_GENERATION_ATTEMPTS: u64 = 1_000_000;

/// Generates a random account code of exactly `code_length` characters that
/// no existing account carries.
///
/// Candidates are drawn from [`CODE_CHAR_POOL`] using the thread-local
/// CSPRNG: predictable codes would be a security hole, since codes double
/// as PINs and as redeemable gift-certificate identifiers. Each candidate
/// is checked against the store and accepted once no account holds it.
///
/// This function does not reserve the returned code. Between the uniqueness
/// check here and the caller's insert, a concurrent generator may hand out
/// the same code. Closing that gap is a contract with the caller: the store
/// must enforce a uniqueness constraint on the code column, and the caller
/// must call this function again whenever that constraint rejects the
/// insert.
///
/// # Errors
///
/// Returns [`AccountError::CodeSpaceExhausted`] when
/// [`MAX_GENERATION_ATTEMPTS`] candidates all collided, and propagates
/// store failures unchanged.
pub fn generate_unique_code<S: FinAccountStore>(
    code_length: usize,
    store: &S,
) -> Result<String, AccountError> {
    let mut rng = rand::rng();

    for _ in 0..MAX_GENERATION_ATTEMPTS {
        let candidate: String = (0..code_length)
            .map(|_| char::from(CODE_CHAR_POOL[rng.random_range(0..CODE_CHAR_POOL.len())]))
            .collect();

        if !store.code_in_use(&candidate)? {
            return Ok(candidate);
        }
    }

    Err(AccountError::CodeSpaceExhausted {
        code_length,
        attempts: MAX_GENERATION_ATTEMPTS,
    })
}
