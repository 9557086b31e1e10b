use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use storefront_core::{DomainResult, PricingGroupId, ProductId};

/// Operator-entered price of a manually priced product for one pricing group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualInputPrice {
    pub product_id: ProductId,
    pub pricing_group_id: PricingGroupId,
    pub input_price: Decimal,
}

impl ManualInputPrice {
    pub fn new(product_id: ProductId, pricing_group_id: PricingGroupId, input_price: Decimal) -> Self {
        Self {
            product_id,
            pricing_group_id,
            input_price,
        }
    }
}

/// Lookup of manual input prices; at most one record exists per pair.
pub trait ManualInputPriceRepository: Send + Sync {
    fn find_by_product_and_pricing_group(
        &self,
        product_id: &ProductId,
        pricing_group_id: &PricingGroupId,
    ) -> DomainResult<Option<ManualInputPrice>>;
}

impl<S> ManualInputPriceRepository for Arc<S>
where
    S: ManualInputPriceRepository + ?Sized,
{
    fn find_by_product_and_pricing_group(
        &self,
        product_id: &ProductId,
        pricing_group_id: &PricingGroupId,
    ) -> DomainResult<Option<ManualInputPrice>> {
        (**self).find_by_product_and_pricing_group(product_id, pricing_group_id)
    }
}
