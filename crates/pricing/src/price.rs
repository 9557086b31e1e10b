use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use storefront_core::ValueObject;

/// A price split into its VAT-exclusive and VAT-inclusive parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    price_without_vat: Decimal,
    price_with_vat: Decimal,
}

impl Price {
    pub fn new(price_without_vat: Decimal, price_with_vat: Decimal) -> Self {
        Self {
            price_without_vat,
            price_with_vat,
        }
    }

    pub fn zero() -> Self {
        Self::new(Decimal::ZERO, Decimal::ZERO)
    }

    pub fn price_without_vat(&self) -> Decimal {
        self.price_without_vat
    }

    pub fn price_with_vat(&self) -> Decimal {
        self.price_with_vat
    }

    pub fn vat_amount(&self) -> Decimal {
        self.price_with_vat - self.price_without_vat
    }
}

impl ValueObject for Price {}
