//! Core ledger engine for Tessera financial sub-accounts.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. It computes authoritative point-in-time balances from an
//! append-only transaction log, reserves issuance of unique human-readable
//! account codes, and validates account credentials.
//!
//! # Modules
//!
//! - `account` - Account codes: generation, lookup, credential validation
//! - `balance` - Point-in-time net and available balance calculation
//! - `store` - Contracts the persistence collaborator must fulfil

pub mod account;
pub mod balance;
pub mod store;

pub use account::{AccountError, FinAccount, FinAccountType, TransactionType};
pub use balance::BalanceCalculator;
pub use store::{FinAccountStore, LedgerSumStore, StoreError};
