//! Net and available balance aggregation.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tessera_shared::types::FinAccountId;
use tessera_shared::DecimalPolicy;

use crate::account::TransactionType;
use crate::store::{LedgerSumStore, StoreError};

/// Transaction types that increase the balance.
const INCREMENT_TYPES: [TransactionType; 2] =
    [TransactionType::Deposit, TransactionType::Adjustment];

/// Transaction types that decrease the balance.
const DECREMENT_TYPES: [TransactionType; 1] = [TransactionType::Withdrawal];

/// Computes net and available balances from ledger aggregates.
///
/// The calculator reads aggregate sums, never raw transaction rows; the
/// store is assumed to offer a summable view. Running totals are folded at
/// one extra digit of precision ([`DecimalPolicy::interim_scale`]) and
/// narrowed to the configured scale exactly once, when a result becomes
/// final. Summing first and rounding once keeps rounding error from
/// compounding across many small transactions.
///
/// Balance reads may run concurrently with ledger writes. They are
/// read-committed, not serializable: a balance "as of" time T reflects
/// whatever the store had committed at query time with a date at or before
/// T, not a transactionally consistent snapshot.
#[derive(Debug, Clone, Copy)]
pub struct BalanceCalculator {
    policy: DecimalPolicy,
}

impl BalanceCalculator {
    /// Creates a calculator bound to the given decimal policy.
    #[must_use]
    pub const fn new(policy: DecimalPolicy) -> Self {
        Self { policy }
    }

    /// The policy governing this calculator's scale and rounding.
    #[must_use]
    pub const fn policy(&self) -> DecimalPolicy {
        self.policy
    }

    /// Sum of all DEPOSIT and ADJUSTMENT transactions minus all WITHDRAWAL
    /// transactions whose date is at or before `as_of`.
    ///
    /// `as_of` defaults to now. An account with no transactions yet has a
    /// balance of zero; that is an expected steady state, not an error.
    ///
    /// # Errors
    ///
    /// Propagates store failures unchanged.
    pub fn net_balance<S: LedgerSumStore>(
        &self,
        store: &S,
        account_id: FinAccountId,
        as_of: Option<DateTime<Utc>>,
    ) -> Result<Decimal, StoreError> {
        let as_of = as_of.unwrap_or_else(Utc::now);

        let increments = store.sum_transactions(account_id, &INCREMENT_TYPES, as_of)?;
        let increment_total = self.add_single_summary(self.policy.zero(), &increments);

        let decrements = store.sum_transactions(account_id, &DECREMENT_TYPES, as_of)?;
        let decrement_total = self.add_single_summary(self.policy.zero(), &decrements);

        Ok(self.policy.round_final(increment_total - decrement_total))
    }

    /// Net balance minus the sum of all non-expired authorization holds
    /// authorized at or before `as_of`.
    ///
    /// `as_of` defaults to now. Holds that have expired, or were authorized
    /// after `as_of`, contribute nothing; filtering both is the store's job.
    ///
    /// # Errors
    ///
    /// Propagates store failures unchanged.
    pub fn available_balance<S: LedgerSumStore>(
        &self,
        store: &S,
        account_id: FinAccountId,
        as_of: Option<DateTime<Utc>>,
    ) -> Result<Decimal, StoreError> {
        let as_of = as_of.unwrap_or_else(Utc::now);

        let net_balance = self.net_balance(store, account_id, Some(as_of))?;

        let holds = store.sum_open_authorizations(account_id, as_of)?;
        let holds_total = self.add_single_summary(self.policy.zero(), &holds);

        Ok(self.policy.round_final(net_balance - holds_total))
    }

    /// Folds a list of summary rows into a running total at interim
    /// precision.
    ///
    /// Exactly one row is the expected shape. Zero rows means no matching
    /// records and contributes nothing; multiple rows is an anomalous shape
    /// that also contributes nothing. Both are tolerated rather than
    /// escalated, so callers must never read a row count other than one as
    /// a corruption signal.
    #[must_use]
    pub fn add_single_summary(&self, initial: Decimal, rows: &[Decimal]) -> Decimal {
        match rows {
            [amount] => self.policy.round_interim(initial + amount),
            _ => initial,
        }
    }
}
