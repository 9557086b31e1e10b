use storefront_core::{DomainError, DomainResult};

use crate::price::Price;

/// Aggregate helpers over a set of already computed prices.
#[derive(Debug, Clone, Copy, Default)]
pub struct PricingService;

impl PricingService {
    pub fn new() -> Self {
        Self
    }

    /// Cheapest price, compared on the price with VAT.
    ///
    /// When several prices tie, the first one wins.
    pub fn minimum_price(&self, prices: &[Price]) -> DomainResult<Price> {
        let mut iter = prices.iter();
        let first = iter
            .next()
            .ok_or_else(|| DomainError::validation("cannot pick a minimum from no prices"))?;

        Ok(*iter.fold(first, |min, price| {
            if price.price_with_vat() < min.price_with_vat() {
                price
            } else {
                min
            }
        }))
    }

    /// `true` when at least two of the prices differ.
    pub fn are_different(&self, prices: &[Price]) -> bool {
        match prices.split_first() {
            Some((first, rest)) => rest.iter().any(|price| price != first),
            None => false,
        }
    }
}
