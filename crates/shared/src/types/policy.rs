//! Decimal policy governing every monetary computation.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Every rounding decision routes through a single [`DecimalPolicy`] value
//! so that balance arithmetic is reproducible bit-for-bit across runs.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Rounding rules supported for monetary amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Round away from zero.
    Up,
    /// Round toward zero (truncate).
    Down,
    /// Round toward positive infinity.
    Ceiling,
    /// Round toward negative infinity.
    Floor,
    /// Round to nearest; ties away from zero.
    HalfUp,
    /// Round to nearest; ties toward zero.
    HalfDown,
    /// Round to nearest; ties to the even digit (banker's rounding).
    HalfEven,
}

impl RoundingMode {
    /// Maps this mode onto the `rust_decimal` rounding strategy.
    #[must_use]
    pub const fn strategy(self) -> RoundingStrategy {
        match self {
            Self::Up => RoundingStrategy::AwayFromZero,
            Self::Down => RoundingStrategy::ToZero,
            Self::Ceiling => RoundingStrategy::ToPositiveInfinity,
            Self::Floor => RoundingStrategy::ToNegativeInfinity,
            Self::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            Self::HalfDown => RoundingStrategy::MidpointTowardZero,
            Self::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }
}

impl std::fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
            Self::Ceiling => write!(f, "ceiling"),
            Self::Floor => write!(f, "floor"),
            Self::HalfUp => write!(f, "half_up"),
            Self::HalfDown => write!(f, "half_down"),
            Self::HalfEven => write!(f, "half_even"),
        }
    }
}

impl std::str::FromStr for RoundingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "ceiling" => Ok(Self::Ceiling),
            "floor" => Ok(Self::Floor),
            "half_up" => Ok(Self::HalfUp),
            "half_down" => Ok(Self::HalfDown),
            "half_even" => Ok(Self::HalfEven),
            _ => Err(format!("Unknown rounding mode: {s}")),
        }
    }
}

/// Fixed-point scale and rounding rule for monetary amounts.
///
/// Constructed once at startup from [`crate::config::LedgerConfig`] and
/// passed explicitly to every computation; there is no mutable global
/// numeric state.
///
/// Since balance arithmetic only adds and subtracts, interim running totals
/// carry one extra digit of precision ([`Self::interim_scale`]) so that
/// rounding error does not compound across many small transactions. Results
/// are narrowed to [`Self::scale`] exactly once, when they become final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecimalPolicy {
    decimals: u32,
    rounding: RoundingMode,
}

impl Default for DecimalPolicy {
    fn default() -> Self {
        Self::new(2, RoundingMode::HalfUp)
    }
}

impl DecimalPolicy {
    /// Creates a policy with the given fractional-digit count and rounding rule.
    #[must_use]
    pub const fn new(decimals: u32, rounding: RoundingMode) -> Self {
        Self { decimals, rounding }
    }

    /// Configured fractional-digit count for final results.
    #[must_use]
    pub const fn scale(&self) -> u32 {
        self.decimals
    }

    /// Fractional-digit count used while folding aggregate sums together.
    #[must_use]
    pub const fn interim_scale(&self) -> u32 {
        self.decimals + 1
    }

    /// Configured rounding rule.
    #[must_use]
    pub const fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    /// The additive identity, normalized to [`Self::scale`].
    #[must_use]
    pub fn zero(&self) -> Decimal {
        Decimal::new(0, self.decimals)
    }

    /// Rounds a final result to exactly [`Self::scale`] fractional digits.
    #[must_use]
    pub fn round_final(&self, amount: Decimal) -> Decimal {
        let mut rounded = amount.round_dp_with_strategy(self.decimals, self.rounding.strategy());
        // Widening back to the configured scale is lossless; it pins the
        // number of fractional digits every exposed result carries.
        rounded.rescale(self.decimals);
        rounded
    }

    /// Rounds an interim running total to [`Self::interim_scale`] digits.
    #[must_use]
    pub fn round_interim(&self, amount: Decimal) -> Decimal {
        amount.round_dp_with_strategy(self.interim_scale(), self.rounding.strategy())
    }
}
