//! Property-based tests for balance aggregation, plus the in-memory ledger
//! the unit tests share.

use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use tessera_shared::types::FinAccountId;
use tessera_shared::DecimalPolicy;

use super::BalanceCalculator;
use crate::account::TransactionType;
use crate::store::{LedgerSumStore, StoreError};

/// In-memory stand-in for the persistence collaborator. It aggregates on
/// the query side exactly like the real store contract: one summary row
/// when anything matches, no rows otherwise.
#[derive(Default)]
pub(crate) struct InMemoryLedger {
    transactions: Vec<(FinAccountId, TransactionType, DateTime<Utc>, Decimal)>,
    authorizations: Vec<(FinAccountId, DateTime<Utc>, Option<DateTime<Utc>>, Decimal)>,
}

impl InMemoryLedger {
    pub(crate) fn record(
        &mut self,
        account_id: FinAccountId,
        transaction_type: TransactionType,
        date: DateTime<Utc>,
        amount: Decimal,
    ) {
        self.transactions
            .push((account_id, transaction_type, date, amount));
    }

    pub(crate) fn hold(
        &mut self,
        account_id: FinAccountId,
        authorized_at: DateTime<Utc>,
        expires_at: Option<DateTime<Utc>>,
        amount: Decimal,
    ) {
        self.authorizations
            .push((account_id, authorized_at, expires_at, amount));
    }
}

impl LedgerSumStore for InMemoryLedger {
    fn sum_transactions(
        &self,
        account_id: FinAccountId,
        types: &[TransactionType],
        as_of: DateTime<Utc>,
    ) -> Result<Vec<Decimal>, StoreError> {
        let matching: Vec<Decimal> = self
            .transactions
            .iter()
            .filter(|(id, ty, date, _)| *id == account_id && types.contains(ty) && *date <= as_of)
            .map(|(_, _, _, amount)| *amount)
            .collect();

        if matching.is_empty() {
            Ok(vec![])
        } else {
            Ok(vec![matching.iter().sum()])
        }
    }

    fn sum_open_authorizations(
        &self,
        account_id: FinAccountId,
        as_of: DateTime<Utc>,
    ) -> Result<Vec<Decimal>, StoreError> {
        let matching: Vec<Decimal> = self
            .authorizations
            .iter()
            .filter(|(id, authorized_at, expires_at, _)| {
                *id == account_id
                    && *authorized_at <= as_of
                    && expires_at.is_none_or(|expiry| as_of < expiry)
            })
            .map(|(_, _, _, amount)| *amount)
            .collect();

        if matching.is_empty() {
            Ok(vec![])
        } else {
            Ok(vec![matching.iter().sum()])
        }
    }
}

fn as_of() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 15, 0, 0, 0).unwrap()
}

fn earlier() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 1, 0, 0, 0).unwrap()
}

/// Strategy for amounts at the final scale (2 digits): every interim fold
/// is lossless, so identities hold exactly.
fn amount_2dp() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000).prop_map(|n| Decimal::new(n, 2))
}

/// Strategy for amounts wider than the interim scale, to exercise the
/// rounding containment policy.
fn amount_4dp() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000).prop_map(|n| Decimal::new(n, 4))
}

fn amounts(max_len: usize) -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec(amount_2dp(), 0..=max_len)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Net balance equals the rounded sum of deposits and adjustments
    /// minus withdrawals.
    #[test]
    fn prop_balance_identity(
        deposits in amounts(10),
        adjustments in amounts(10),
        withdrawals in amounts(10),
    ) {
        let account_id = FinAccountId::new();
        let mut ledger = InMemoryLedger::default();
        for &amount in &deposits {
            ledger.record(account_id, TransactionType::Deposit, earlier(), amount);
        }
        for &amount in &adjustments {
            ledger.record(account_id, TransactionType::Adjustment, earlier(), amount);
        }
        for &amount in &withdrawals {
            ledger.record(account_id, TransactionType::Withdrawal, earlier(), amount);
        }

        let policy = DecimalPolicy::default();
        let calc = BalanceCalculator::new(policy);
        let net = calc.net_balance(&ledger, account_id, Some(as_of())).unwrap();

        let expected: Decimal = deposits.iter().sum::<Decimal>()
            + adjustments.iter().sum::<Decimal>()
            - withdrawals.iter().sum::<Decimal>();
        prop_assert_eq!(net, policy.round_final(expected));
    }

    /// Available balance equals net balance minus the open holds; holds
    /// authorized after as_of contribute nothing.
    #[test]
    fn prop_available_is_net_minus_open_holds(
        deposits in amounts(10),
        open_holds in amounts(5),
        future_holds in amounts(5),
    ) {
        let account_id = FinAccountId::new();
        let mut ledger = InMemoryLedger::default();
        for &amount in &deposits {
            ledger.record(account_id, TransactionType::Deposit, earlier(), amount);
        }
        for &amount in &open_holds {
            ledger.hold(account_id, earlier(), None, amount);
        }
        let after_as_of = Utc.with_ymd_and_hms(2026, 9, 1, 0, 0, 0).unwrap();
        for &amount in &future_holds {
            ledger.hold(account_id, after_as_of, None, amount);
        }

        let calc = BalanceCalculator::new(DecimalPolicy::default());
        let net = calc.net_balance(&ledger, account_id, Some(as_of())).unwrap();
        let available = calc
            .available_balance(&ledger, account_id, Some(as_of()))
            .unwrap();

        let holds_total: Decimal = open_holds.iter().sum();
        prop_assert_eq!(available, net - holds_total);
    }

    /// Two-stage precision is stable under batching: folding one aggregate
    /// covering everything, or two aggregates covering a split of the same
    /// transactions, lands within one final-scale ULP after rounding.
    #[test]
    fn prop_split_batch_folding_is_stable(
        amounts in prop::collection::vec(amount_4dp(), 1..20),
        split in any::<prop::sample::Index>(),
    ) {
        let policy = DecimalPolicy::default();
        let calc = BalanceCalculator::new(policy);
        let split = split.index(amounts.len() + 1);

        let total: Decimal = amounts.iter().sum();
        let one_batch = policy.round_final(calc.add_single_summary(policy.zero(), &[total]));

        let first: Decimal = amounts[..split].iter().sum();
        let second: Decimal = amounts[split..].iter().sum();
        let folded = calc.add_single_summary(policy.zero(), &[first]);
        let folded = calc.add_single_summary(folded, &[second]);
        let two_batches = policy.round_final(folded);

        let ulp = Decimal::new(1, policy.scale());
        prop_assert!(
            (one_batch - two_batches).abs() <= ulp,
            "one batch {} vs two batches {}",
            one_batch,
            two_batches
        );
    }

    /// Folding an empty summary anywhere in the sequence never changes the
    /// running total.
    #[test]
    fn prop_empty_summary_is_identity(amounts in amounts(10)) {
        let policy = DecimalPolicy::default();
        let calc = BalanceCalculator::new(policy);

        let total: Decimal = amounts.iter().sum();
        let folded = calc.add_single_summary(policy.zero(), &[total]);
        let with_empty = calc.add_single_summary(folded, &[]);
        prop_assert_eq!(folded, with_empty);
    }
}
