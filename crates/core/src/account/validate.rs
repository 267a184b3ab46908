//! Credential validation: PINs and Luhn account-number checks.

use tessera_shared::types::FinAccountId;
use tracing::warn;

use super::types::FinAccount;
use crate::store::FinAccountStore;

/// Returns true iff `account` is present and its stored code exactly equals
/// `presented`.
///
/// The comparison is case-sensitive with no normalization; raw user input
/// is normalized during lookup, before this layer is reached.
#[must_use]
pub fn code_matches(account: Option<&FinAccount>, presented: &str) -> bool {
    account.is_some_and(|account| account.code == presented)
}

/// Validates a PIN against the stored code of the account with `account_id`.
///
/// Every failure on the way to the comparison - missing account, store
/// failure - degrades to `false`, never an error. Neither the presented nor
/// the stored PIN is ever written to a log.
#[must_use]
pub fn validate_pin<S: FinAccountStore>(store: &S, account_id: FinAccountId, pin: &str) -> bool {
    let account = match store.find_by_id(account_id) {
        Ok(account) => account,
        Err(err) => {
            warn!(%account_id, error = %err, "store failure during pin validation");
            return false;
        }
    };

    if account.is_none() {
        warn!(%account_id, "financial account record not found");
    }

    code_matches(account.as_ref(), pin)
}

/// Luhn sum of a number string: every second digit from the right is
/// doubled, and doubled values of ten or more are folded back by digit sum
/// before adding.
///
/// Non-digit characters contribute nothing, so formatted input behaves
/// identically to the bare digit string.
#[must_use]
pub fn luhn_sum(number: &str) -> u32 {
    number
        .chars()
        .rev()
        .filter_map(|c| c.to_digit(10))
        .enumerate()
        .map(|(position, digit)| {
            if position % 2 == 1 {
                let doubled = digit * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                digit
            }
        })
        .sum()
}

/// Checks a numeric account number against its Luhn-style check digit.
///
/// This is a pure integrity check independent of any store: it catches
/// single-digit entry errors, not forgery. An input containing no digits at
/// all sums to zero and therefore passes vacuously.
#[must_use]
pub fn check_account_number(number: &str) -> bool {
    luhn_sum(number) % 10 == 0
}
