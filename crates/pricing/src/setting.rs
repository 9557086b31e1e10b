//! System-wide pricing configuration.

use core::str::FromStr;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use storefront_core::{CurrencyId, DomainError, DomainId, DomainResult};

use crate::rounding::RoundingType;

/// Whether operators enter prices with or without VAT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputPriceType {
    #[serde(alias = "includes_vat")]
    WithVat,
    #[default]
    #[serde(alias = "excludes_vat")]
    WithoutVat,
}

impl FromStr for InputPriceType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "with_vat" | "includes_vat" => Ok(Self::WithVat),
            "without_vat" | "excludes_vat" => Ok(Self::WithoutVat),
            other => Err(DomainError::validation(format!(
                "unknown input price type '{other}'"
            ))),
        }
    }
}

/// Read-only pricing configuration shared by every calculation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingSetting {
    input_price_type: InputPriceType,
    rounding_type: RoundingType,
    domain_default_currencies: BTreeMap<DomainId, CurrencyId>,
}

impl PricingSetting {
    pub fn new(input_price_type: InputPriceType, rounding_type: RoundingType) -> Self {
        Self {
            input_price_type,
            rounding_type,
            domain_default_currencies: BTreeMap::new(),
        }
    }

    pub fn with_input_price_type(mut self, input_price_type: InputPriceType) -> Self {
        self.input_price_type = input_price_type;
        self
    }

    pub fn with_rounding_type(mut self, rounding_type: RoundingType) -> Self {
        self.rounding_type = rounding_type;
        self
    }

    pub fn with_domain_default_currency(mut self, domain_id: DomainId, currency_id: CurrencyId) -> Self {
        self.domain_default_currencies.insert(domain_id, currency_id);
        self
    }

    pub fn input_price_type(&self) -> InputPriceType {
        self.input_price_type
    }

    pub fn rounding_type(&self) -> RoundingType {
        self.rounding_type
    }

    pub fn domain_default_currency_id(&self, domain_id: DomainId) -> DomainResult<CurrencyId> {
        self.domain_default_currencies
            .get(&domain_id)
            .copied()
            .ok_or_else(|| DomainError::not_found("default currency of domain", domain_id))
    }
}
