//! Domain types for financial sub-accounts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tessera_shared::types::FinAccountId;

/// A prepaid or gift-certificate style sub-account.
///
/// Account records are created and mutated by business workflows outside
/// this engine; the engine only reads them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinAccount {
    /// The account ID.
    pub id: FinAccountId,
    /// Uppercase alphanumeric account code; doubles as the account PIN.
    pub code: String,
    /// The account category.
    pub account_type: FinAccountType,
    /// Start of the validity window.
    pub from_date: DateTime<Utc>,
    /// End of the validity window, if bounded.
    pub thru_date: Option<DateTime<Utc>>,
}

impl FinAccount {
    /// Returns true if the validity window contains `at`.
    #[must_use]
    pub fn is_valid_at(&self, at: DateTime<Utc>) -> bool {
        self.from_date <= at && self.thru_date.is_none_or(|thru| at < thru)
    }
}

/// Financial account categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FinAccountType {
    /// Conventional bank account.
    #[serde(rename = "BANK_ACCOUNT")]
    Bank,
    /// Credit card account.
    #[serde(rename = "CREDIT_CARD_ACCOUNT")]
    CreditCard,
    /// Prepaid deposit account.
    #[serde(rename = "DEPOSIT_ACCOUNT")]
    Deposit,
    /// Redeemable gift certificate.
    #[serde(rename = "GIFTCERT_ACCOUNT")]
    GiftCertificate,
    /// Automatically replenished account.
    #[serde(rename = "REPLENISH_ACCOUNT")]
    Replenish,
    /// Store credit.
    #[serde(rename = "SVCCRED_ACCOUNT")]
    ServiceCredit,
}

impl std::fmt::Display for FinAccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bank => write!(f, "BANK_ACCOUNT"),
            Self::CreditCard => write!(f, "CREDIT_CARD_ACCOUNT"),
            Self::Deposit => write!(f, "DEPOSIT_ACCOUNT"),
            Self::GiftCertificate => write!(f, "GIFTCERT_ACCOUNT"),
            Self::Replenish => write!(f, "REPLENISH_ACCOUNT"),
            Self::ServiceCredit => write!(f, "SVCCRED_ACCOUNT"),
        }
    }
}

impl std::str::FromStr for FinAccountType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BANK_ACCOUNT" => Ok(Self::Bank),
            "CREDIT_CARD_ACCOUNT" => Ok(Self::CreditCard),
            "DEPOSIT_ACCOUNT" => Ok(Self::Deposit),
            "GIFTCERT_ACCOUNT" => Ok(Self::GiftCertificate),
            "REPLENISH_ACCOUNT" => Ok(Self::Replenish),
            "SVCCRED_ACCOUNT" => Ok(Self::ServiceCredit),
            _ => Err(format!("Unknown financial account type: {s}")),
        }
    }
}

/// Ledger transaction categories that contribute to a balance.
///
/// Transactions are immutable once created; the ledger is append-only and
/// owned by the store. The engine only reads aggregates over them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    /// Funds added to the account.
    Deposit,
    /// Funds removed from the account.
    Withdrawal,
    /// Manual correction; contributes like a deposit.
    Adjustment,
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Deposit => write!(f, "DEPOSIT"),
            Self::Withdrawal => write!(f, "WITHDRAWAL"),
            Self::Adjustment => write!(f, "ADJUSTMENT"),
        }
    }
}

impl std::str::FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DEPOSIT" => Ok(Self::Deposit),
            "WITHDRAWAL" => Ok(Self::Withdrawal),
            "ADJUSTMENT" => Ok(Self::Adjustment),
            _ => Err(format!("Unknown transaction type: {s}")),
        }
    }
}
