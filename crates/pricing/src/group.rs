use rust_decimal::Decimal;
use serde::Serialize;

use storefront_core::{DomainError, DomainId, DomainResult, Entity, PricingGroupId};

/// A customer segment within one domain, with its own price markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricingGroup {
    id: PricingGroupId,
    name: String,
    domain_id: DomainId,
    coefficient: Decimal,
}

impl PricingGroup {
    pub fn new(
        id: PricingGroupId,
        name: impl Into<String>,
        domain_id: DomainId,
        coefficient: Decimal,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("pricing group name cannot be empty"));
        }
        if coefficient <= Decimal::ZERO {
            return Err(DomainError::validation(format!(
                "pricing group coefficient must be positive (got {coefficient})"
            )));
        }

        Ok(Self {
            id,
            name,
            domain_id,
            coefficient,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn domain_id(&self) -> DomainId {
        self.domain_id
    }

    pub fn coefficient(&self) -> Decimal {
        self.coefficient
    }
}

impl Entity for PricingGroup {
    type Id = PricingGroupId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
