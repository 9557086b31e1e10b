//! Rounding policy for computed prices.

use core::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult};

const MONEY_DECIMAL_PLACES: u32 = 2;

/// How prices with VAT are rounded before they are shown to customers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingType {
    /// Two decimal places (`12.34`).
    #[default]
    Hundredths,
    /// Nearest half unit (`12.50`).
    FiftyHundredths,
    /// Whole units (`12`).
    Integer,
}

impl FromStr for RoundingType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hundredths" => Ok(Self::Hundredths),
            "fifty_hundredths" => Ok(Self::FiftyHundredths),
            "integer" => Ok(Self::Integer),
            other => Err(DomainError::validation(format!(
                "unknown rounding type '{other}'"
            ))),
        }
    }
}

/// Applies the configured [`RoundingType`].
///
/// Midpoints always round away from zero. Prices without VAT and VAT amounts
/// are kept at cent precision regardless of the rounding type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rounding {
    rounding_type: RoundingType,
}

impl Rounding {
    pub fn new(rounding_type: RoundingType) -> Self {
        Self { rounding_type }
    }

    pub fn rounding_type(&self) -> RoundingType {
        self.rounding_type
    }

    pub fn round_price_with_vat(&self, price: Decimal) -> DomainResult<Decimal> {
        match self.rounding_type {
            RoundingType::Hundredths => Ok(round_dp(price, MONEY_DECIMAL_PLACES)),
            RoundingType::FiftyHundredths => {
                let doubled = price
                    .checked_mul(Decimal::TWO)
                    .ok_or_else(|| DomainError::overflow(format!("rounding {price} to halves")))?;
                Ok(round_dp(round_dp(doubled, 0) / Decimal::TWO, MONEY_DECIMAL_PLACES))
            }
            RoundingType::Integer => Ok(round_dp(price, 0)),
        }
    }

    pub fn round_price_without_vat(&self, price: Decimal) -> Decimal {
        round_dp(price, MONEY_DECIMAL_PLACES)
    }

    pub fn round_vat_amount(&self, vat_amount: Decimal) -> Decimal {
        round_dp(vat_amount, MONEY_DECIMAL_PLACES)
    }
}

fn round_dp(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}
