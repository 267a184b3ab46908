//! Financial account codes and credentials.
//!
//! This module covers everything about the human-facing side of a
//! sub-account:
//! - Code generation with store-backed uniqueness checks
//! - Code normalization and account lookup
//! - PIN and account-number (Luhn) validation
//! - Domain types and error types

pub mod code;
pub mod error;
pub mod lookup;
pub mod types;
pub mod validate;

pub use code::{generate_unique_code, CODE_CHAR_POOL, MAX_GENERATION_ATTEMPTS};
pub use error::AccountError;
pub use lookup::{find_by_code, normalize_code};
pub use types::{FinAccount, FinAccountType, TransactionType};
pub use validate::{check_account_number, code_matches, luhn_sum, validate_pin};
