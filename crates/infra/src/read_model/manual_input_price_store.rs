use std::collections::HashMap;
use std::sync::RwLock;

use storefront_core::{DomainResult, PricingGroupId, ProductId};
use storefront_products::{ManualInputPrice, ManualInputPriceRepository};

use super::poisoned;

/// One record per (product, pricing group); storing again overwrites.
#[derive(Debug, Default)]
pub struct InMemoryManualInputPriceStore {
    inner: RwLock<HashMap<(ProductId, PricingGroupId), ManualInputPrice>>,
}

impl InMemoryManualInputPriceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save(&self, manual_input_price: ManualInputPrice) -> DomainResult<()> {
        let mut map = self.inner.write().map_err(|_| poisoned("manual input price store"))?;
        map.insert(
            (manual_input_price.product_id, manual_input_price.pricing_group_id),
            manual_input_price,
        );
        Ok(())
    }

    pub fn remove(&self, product_id: &ProductId, pricing_group_id: &PricingGroupId) -> DomainResult<()> {
        let mut map = self.inner.write().map_err(|_| poisoned("manual input price store"))?;
        map.remove(&(*product_id, *pricing_group_id));
        Ok(())
    }
}

impl ManualInputPriceRepository for InMemoryManualInputPriceStore {
    fn find_by_product_and_pricing_group(
        &self,
        product_id: &ProductId,
        pricing_group_id: &PricingGroupId,
    ) -> DomainResult<Option<ManualInputPrice>> {
        let map = self.inner.read().map_err(|_| poisoned("manual input price store"))?;
        Ok(map.get(&(*product_id, *pricing_group_id)).cloned())
    }
}
