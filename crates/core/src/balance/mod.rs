//! Point-in-time balance calculation.
//!
//! Balances are always computed fresh from the transaction and
//! authorization-hold aggregates at query time. There is no stored balance
//! field whose staleness would have to be managed; the query cost buys
//! correctness by construction.

pub mod calculator;

#[cfg(test)]
mod calculator_props;

pub use calculator::BalanceCalculator;
