//! VAT-aware base price arithmetic.

use rust_decimal::Decimal;

use storefront_core::{DomainError, DomainResult};

use crate::price::Price;
use crate::rounding::Rounding;
use crate::setting::InputPriceType;
use crate::vat::Vat;

/// Turns operator-entered prices into [`Price`]s and applies multiplicative
/// coefficients (pricing group markup, currency conversion).
///
/// The price with VAT is the anchor: it is computed and rounded first, then
/// the VAT amount is derived from it and the price without VAT is the
/// remainder. This keeps `without + vat == with` exact after rounding.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasePriceCalculation {
    rounding: Rounding,
}

impl BasePriceCalculation {
    pub fn new(rounding: Rounding) -> Self {
        Self { rounding }
    }

    pub fn rounding(&self) -> &Rounding {
        &self.rounding
    }

    /// Fails with [`DomainError::Overflow`] when the amounts leave the
    /// representable decimal range.
    pub fn calculate_base_price(
        &self,
        input_price: Decimal,
        input_price_type: InputPriceType,
        vat: &Vat,
    ) -> DomainResult<Price> {
        let unrounded_price_with_vat = match input_price_type {
            InputPriceType::WithVat => input_price,
            InputPriceType::WithoutVat => input_price
                .checked_mul(vat.with_vat_multiplier()?)
                .ok_or_else(|| {
                    DomainError::overflow(format!("adding {} % VAT to {input_price}", vat.percent()))
                })?,
        };
        let base_price_with_vat = self.rounding.round_price_with_vat(unrounded_price_with_vat)?;

        self.price_from_price_with_vat(base_price_with_vat, vat)
    }

    /// Multiplies `price` by every coefficient.
    ///
    /// The coefficients are folded into one factor before anything is rounded,
    /// so their order never changes the result.
    pub fn apply_coefficients(
        &self,
        price: &Price,
        vat: &Vat,
        coefficients: &[Decimal],
    ) -> DomainResult<Price> {
        let overflow = || {
            DomainError::overflow(format!(
                "applying coefficients {coefficients:?} to {}",
                price.price_with_vat()
            ))
        };
        let coefficient = coefficients
            .iter()
            .try_fold(Decimal::ONE, |acc, coefficient| acc.checked_mul(*coefficient))
            .ok_or_else(overflow)?;
        let unrounded_price_with_vat = price
            .price_with_vat()
            .checked_mul(coefficient)
            .ok_or_else(overflow)?;
        let price_with_vat = self.rounding.round_price_with_vat(unrounded_price_with_vat)?;

        self.price_from_price_with_vat(price_with_vat, vat)
    }

    fn price_from_price_with_vat(&self, price_with_vat: Decimal, vat: &Vat) -> DomainResult<Price> {
        let vat_amount = self
            .rounding
            .round_vat_amount(vat.share_of_price_with_vat(price_with_vat)?);
        let price_without_vat = self
            .rounding
            .round_price_without_vat(price_with_vat - vat_amount);

        Ok(Price::new(price_without_vat, price_with_vat))
    }
}
