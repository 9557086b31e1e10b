use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use storefront_core::{DomainId, DomainResult, Entity, ProductId};
use storefront_pricing::{PricingGroup, Vat};

use crate::error::ProductPriceError;

pub const PRICE_CALCULATION_TYPE_AUTO: &str = "auto";
pub const PRICE_CALCULATION_TYPE_MANUAL: &str = "manual";

/// How a concrete (non main variant) product gets its price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceCalculationType {
    /// Product price adjusted by pricing group coefficient and currency rate.
    Auto,
    /// Operator enters a price per pricing group.
    Manual,
}

impl PriceCalculationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceCalculationType::Auto => PRICE_CALCULATION_TYPE_AUTO,
            PriceCalculationType::Manual => PRICE_CALCULATION_TYPE_MANUAL,
        }
    }
}

/// Position of a product in a variant family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VariantType {
    /// Standalone product.
    #[default]
    None,
    /// Groups sellable variants and has no price of its own.
    Main,
    /// Sellable member of a family.
    Variant { main_variant_id: ProductId },
}

/// Pricing branch a product falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingMode {
    MainVariant,
    Auto,
    Manual,
}

/// Catalog product as read from storage.
///
/// The calculation type is kept as the stored code rather than a
/// [`PriceCalculationType`] so that records carrying an unknown code can still
/// be loaded and reported; see [`Product::pricing_mode`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Decimal,
    vat: Vat,
    price_calculation_type: String,
    #[serde(default)]
    variant_type: VariantType,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Decimal,
        vat: Vat,
        price_calculation_type: PriceCalculationType,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            vat,
            price_calculation_type: price_calculation_type.as_str().to_string(),
            variant_type: VariantType::None,
        }
    }

    /// Turn this product into the main variant of a family.
    pub fn into_main_variant(mut self) -> Self {
        self.variant_type = VariantType::Main;
        self
    }

    /// Attach this product to a family as one of its variants.
    pub fn into_variant_of(mut self, main_variant_id: ProductId) -> Self {
        self.variant_type = VariantType::Variant { main_variant_id };
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw price as entered by the operator (VAT included or not, per
    /// [`storefront_pricing::InputPriceType`]).
    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn vat(&self) -> &Vat {
        &self.vat
    }

    pub fn price_calculation_type_code(&self) -> &str {
        &self.price_calculation_type
    }

    pub fn variant_type(&self) -> VariantType {
        self.variant_type
    }

    pub fn is_main_variant(&self) -> bool {
        self.variant_type == VariantType::Main
    }

    pub fn main_variant_id(&self) -> Option<ProductId> {
        match self.variant_type {
            VariantType::Variant { main_variant_id } => Some(main_variant_id),
            _ => None,
        }
    }

    /// Decide which pricing branch applies.
    ///
    /// Main variants ignore their own calculation type.
    pub fn pricing_mode(&self) -> Result<PricingMode, ProductPriceError> {
        if self.is_main_variant() {
            return Ok(PricingMode::MainVariant);
        }

        match self.price_calculation_type.as_str() {
            PRICE_CALCULATION_TYPE_AUTO => Ok(PricingMode::Auto),
            PRICE_CALCULATION_TYPE_MANUAL => Ok(PricingMode::Manual),
            other => Err(ProductPriceError::UnsupportedCalculationType {
                product_id: self.id,
                value: other.to_string(),
            }),
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Catalog queries needed by pricing.
pub trait ProductRepository: Send + Sync {
    /// Variants of `main_variant` that can be sold on `domain_id` to customers
    /// of `pricing_group`. The returned list is fully materialized.
    fn get_all_sellable_variants_by_main_variant(
        &self,
        main_variant: &Product,
        domain_id: DomainId,
        pricing_group: &PricingGroup,
    ) -> DomainResult<Vec<Product>>;
}

impl<S> ProductRepository for Arc<S>
where
    S: ProductRepository + ?Sized,
{
    fn get_all_sellable_variants_by_main_variant(
        &self,
        main_variant: &Product,
        domain_id: DomainId,
        pricing_group: &PricingGroup,
    ) -> DomainResult<Vec<Product>> {
        (**self).get_all_sellable_variants_by_main_variant(main_variant, domain_id, pricing_group)
    }
}
