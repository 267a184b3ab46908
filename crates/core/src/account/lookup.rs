//! Account resolution from raw, user-entered codes.

use chrono::{DateTime, Utc};
use tracing::{error, info};

use super::error::AccountError;
use super::types::FinAccount;
use crate::store::FinAccountStore;

/// Normalizes a raw code string: uppercases it, then strips every character
/// outside `[0-9A-Z]`.
///
/// Hyphens, spaces, and any other separators users type into a code field
/// disappear, so `"gc-1234 ab"` queries as `"GC1234AB"`.
#[must_use]
pub fn normalize_code(raw: &str) -> String {
    raw.to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
        .collect()
}

/// Resolves a raw code string to at most one account valid as of `now`.
///
/// Zero matches is an expected steady state, not an error: codes are
/// frequently mistyped or simply foreign, so it resolves to `Ok(None)` with
/// a low-severity log. More than one match means the store lost its
/// uniqueness guarantee and surfaces as [`AccountError::AmbiguousCode`];
/// neither the error nor the log carries the code on that path, since codes
/// double as PINs.
///
/// # Errors
///
/// Returns [`AccountError::AmbiguousCode`] on multiple matches and
/// propagates store failures unchanged.
pub fn find_by_code<S: FinAccountStore>(
    store: &S,
    raw_code: &str,
    now: DateTime<Utc>,
) -> Result<Option<FinAccount>, AccountError> {
    let code = normalize_code(raw_code);

    let mut accounts = store.find_valid_by_code(&code, now)?;
    match accounts.len() {
        0 => {
            // Fine to show the code here: it matched nothing, so it is not
            // anyone's secret.
            info!(code, "no financial account found for code");
            Ok(None)
        }
        1 => Ok(accounts.pop()),
        _ => {
            error!("multiple financial accounts share one account code");
            Err(AccountError::AmbiguousCode)
        }
    }
}
