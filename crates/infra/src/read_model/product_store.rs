use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use storefront_core::{DomainError, DomainId, DomainResult, Entity, PricingGroupId, ProductId};
use storefront_pricing::PricingGroup;
use storefront_products::{Product, ProductRepository};

use super::poisoned;

#[derive(Debug, Default)]
struct Catalog {
    products: HashMap<ProductId, Product>,
    selling_denied: HashSet<ProductId>,
    hidden_on_domain: HashSet<(ProductId, DomainId)>,
    hidden_for_pricing_group: HashSet<(ProductId, PricingGroupId)>,
}

impl Catalog {
    fn is_sellable(&self, product_id: ProductId, domain_id: DomainId, pricing_group_id: PricingGroupId) -> bool {
        !self.selling_denied.contains(&product_id)
            && !self.hidden_on_domain.contains(&(product_id, domain_id))
            && !self.hidden_for_pricing_group.contains(&(product_id, pricing_group_id))
    }
}

/// Catalog with simple sellability rules: a product is sellable unless
/// selling is denied, or it is hidden on the domain or for the pricing group.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    inner: RwLock<Catalog>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert(&self, product: Product) -> DomainResult<()> {
        let mut catalog = self.inner.write().map_err(|_| poisoned("product store"))?;
        catalog.products.insert(*product.id(), product);
        Ok(())
    }

    pub fn get(&self, product_id: &ProductId) -> DomainResult<Product> {
        let catalog = self.inner.read().map_err(|_| poisoned("product store"))?;
        catalog
            .products
            .get(product_id)
            .cloned()
            .ok_or_else(|| DomainError::not_found("product", product_id))
    }

    pub fn set_selling_denied(&self, product_id: ProductId, denied: bool) -> DomainResult<()> {
        let mut catalog = self.inner.write().map_err(|_| poisoned("product store"))?;
        if denied {
            catalog.selling_denied.insert(product_id);
        } else {
            catalog.selling_denied.remove(&product_id);
        }
        Ok(())
    }

    pub fn hide_on_domain(&self, product_id: ProductId, domain_id: DomainId) -> DomainResult<()> {
        let mut catalog = self.inner.write().map_err(|_| poisoned("product store"))?;
        catalog.hidden_on_domain.insert((product_id, domain_id));
        Ok(())
    }

    pub fn hide_for_pricing_group(&self, product_id: ProductId, pricing_group_id: PricingGroupId) -> DomainResult<()> {
        let mut catalog = self.inner.write().map_err(|_| poisoned("product store"))?;
        catalog.hidden_for_pricing_group.insert((product_id, pricing_group_id));
        Ok(())
    }
}

impl ProductRepository for InMemoryProductStore {
    fn get_all_sellable_variants_by_main_variant(
        &self,
        main_variant: &Product,
        domain_id: DomainId,
        pricing_group: &PricingGroup,
    ) -> DomainResult<Vec<Product>> {
        let catalog = self.inner.read().map_err(|_| poisoned("product store"))?;

        // Id order keeps results stable across calls (UUIDv7 ids sort by creation).
        let mut variants: Vec<Product> = catalog
            .products
            .values()
            .filter(|product| product.main_variant_id() == Some(*main_variant.id()))
            .filter(|product| catalog.is_sellable(*product.id(), domain_id, *pricing_group.id()))
            .cloned()
            .collect();
        variants.sort_by_key(|product| *product.id());

        tracing::debug!(
            main_variant_id = %main_variant.id(),
            %domain_id,
            count = variants.len(),
            "loaded sellable variants"
        );

        Ok(variants)
    }
}
