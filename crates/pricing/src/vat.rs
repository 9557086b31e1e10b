use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, ValueObject};

/// VAT rate expressed as a percentage (`21` means 21 %).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Vat {
    percent: Decimal,
}

impl Vat {
    pub fn new(percent: Decimal) -> DomainResult<Self> {
        if percent.is_sign_negative() && !percent.is_zero() {
            return Err(DomainError::validation(format!(
                "VAT percent cannot be negative (got {percent})"
            )));
        }
        Ok(Self { percent })
    }

    pub fn zero() -> Self {
        Self {
            percent: Decimal::ZERO,
        }
    }

    pub fn percent(&self) -> Decimal {
        self.percent
    }

    fn percent_over_hundred(&self) -> DomainResult<Decimal> {
        Decimal::ONE_HUNDRED
            .checked_add(self.percent)
            .ok_or_else(|| DomainError::overflow(format!("100 + VAT {}", self.percent)))
    }

    /// Factor turning a price without VAT into a price with VAT.
    pub fn with_vat_multiplier(&self) -> DomainResult<Decimal> {
        Ok(self.percent_over_hundred()? / Decimal::ONE_HUNDRED)
    }

    /// Unrounded VAT contained in a price that already includes VAT.
    pub fn share_of_price_with_vat(&self, price_with_vat: Decimal) -> DomainResult<Decimal> {
        let divisor = self.percent_over_hundred()?;
        price_with_vat
            .checked_mul(self.percent)
            .and_then(|scaled| scaled.checked_div(divisor))
            .ok_or_else(|| {
                DomainError::overflow(format!("VAT share of {price_with_vat} at {} %", self.percent))
            })
    }
}

impl ValueObject for Vat {}

impl TryFrom<Decimal> for Vat {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Vat> for Decimal {
    fn from(value: Vat) -> Self {
        value.percent
    }
}
