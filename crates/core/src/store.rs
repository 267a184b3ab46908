//! Contracts the persistence collaborator must fulfil.
//!
//! The engine never talks to a database directly. It issues read queries
//! through these traits and leaves storage layout, validity and expiry
//! filtering, and transactional guarantees to the implementing layer.
//! Implementations must support concurrent callers; the engine holds no
//! lock of its own.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tessera_shared::types::FinAccountId;
use thiserror::Error;

use crate::account::{FinAccount, TransactionType};

/// Persistence failures, propagated to callers unchanged.
///
/// The engine adds no retry logic of its own; retries, if any, belong to
/// the store implementation or the caller.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A query failed inside the store.
    #[error("query failed: {0}")]
    Query(String),
}

/// Read access to financial account records.
pub trait FinAccountStore {
    /// Finds every account whose code matches `code` exactly and whose
    /// validity window contains `as_of`.
    fn find_valid_by_code(
        &self,
        code: &str,
        as_of: DateTime<Utc>,
    ) -> Result<Vec<FinAccount>, StoreError>;

    /// Returns true if any account already carries `code`, regardless of
    /// validity window. Used only for collision detection during code
    /// generation.
    fn code_in_use(&self, code: &str) -> Result<bool, StoreError>;

    /// Finds an account by its identifier.
    fn find_by_id(&self, id: FinAccountId) -> Result<Option<FinAccount>, StoreError>;
}

/// Read access to transaction and authorization-hold aggregates.
///
/// Both queries return summary rows, not raw transactions: the store sums
/// `amount` on its side and hands back at most one row, or no rows when
/// nothing matches. The balance calculator tolerates zero or multiple rows
/// by treating them as no contribution.
pub trait LedgerSumStore {
    /// Sum of transaction amounts for `account_id` where the transaction
    /// type is in `types` and `transaction_date <= as_of`.
    fn sum_transactions(
        &self,
        account_id: FinAccountId,
        types: &[TransactionType],
        as_of: DateTime<Utc>,
    ) -> Result<Vec<Decimal>, StoreError>;

    /// Sum of non-expired authorization-hold amounts for `account_id` with
    /// `authorization_date <= as_of`. Expiry filtering happens in the store.
    fn sum_open_authorizations(
        &self,
        account_id: FinAccountId,
        as_of: DateTime<Utc>,
    ) -> Result<Vec<Decimal>, StoreError>;
}
