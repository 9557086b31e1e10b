use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;

use storefront_core::{CurrencyId, DomainError, DomainResult, Entity};

/// A currency and its rate against the shop's internal price basis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Currency {
    id: CurrencyId,
    code: String,
    exchange_rate: Decimal,
}

impl Currency {
    pub fn new(id: CurrencyId, code: impl Into<String>, exchange_rate: Decimal) -> DomainResult<Self> {
        let code = code.into();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(DomainError::validation(format!(
                "currency code must be a 3-letter ISO code (got '{code}')"
            )));
        }
        if exchange_rate <= Decimal::ZERO {
            return Err(DomainError::validation(format!(
                "exchange rate must be positive (got {exchange_rate})"
            )));
        }

        Ok(Self {
            id,
            code,
            exchange_rate,
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn exchange_rate(&self) -> Decimal {
        self.exchange_rate
    }

    /// Multiplicative factor converting internal prices into this currency.
    pub fn reversed_exchange_rate(&self) -> Decimal {
        Decimal::ONE / self.exchange_rate
    }
}

impl Entity for Currency {
    type Id = CurrencyId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Read access to configured currencies.
pub trait CurrencyRepository: Send + Sync {
    /// Fails with [`DomainError::NotFound`] when no currency has this id.
    fn get_by_id(&self, id: &CurrencyId) -> DomainResult<Currency>;
}

impl<S> CurrencyRepository for Arc<S>
where
    S: CurrencyRepository + ?Sized,
{
    fn get_by_id(&self, id: &CurrencyId) -> DomainResult<Currency> {
        (**self).get_by_id(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn reversed_rate_is_the_inverse() {
        let czk = Currency::new(CurrencyId::new(), "CZK", dec!(0.04)).unwrap();
        assert_eq!(czk.code(), "CZK");
        assert_eq!(czk.reversed_exchange_rate(), dec!(25));

        let eur = Currency::new(CurrencyId::new(), "EUR", dec!(1)).unwrap();
        assert_eq!(eur.reversed_exchange_rate(), Decimal::ONE);
    }

    #[test]
    fn rejects_non_positive_rates_and_bad_codes() {
        assert!(Currency::new(CurrencyId::new(), "EUR", dec!(0)).is_err());
        assert!(Currency::new(CurrencyId::new(), "eur", dec!(1)).is_err());
        assert!(Currency::new(CurrencyId::new(), "EURO", dec!(1)).is_err());
    }
}
