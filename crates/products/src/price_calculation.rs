//! Product price calculation.
//!
//! A product is priced for one pricing group at a time:
//!
//! - **main variant**: cheapest of its sellable variants, flagged as "from" when
//!   the variants are not all priced the same;
//! - **auto**: base price scaled by the group coefficient and the reversed
//!   exchange rate of the domain's default currency;
//! - **manual**: the price entered for the group (zero when none was entered).
//!
//! Calculation only reads; nothing is cached between calls.

use rust_decimal::Decimal;
use serde::Serialize;

use storefront_core::{DomainError, Entity, ValueObject};
use storefront_pricing::{
    BasePriceCalculation, CurrencyRepository, Price, PricingGroup, PricingService, PricingSetting,
    Rounding,
};

use crate::error::ProductPriceError;
use crate::manual_input_price::ManualInputPriceRepository;
use crate::product::{PricingMode, Product, ProductRepository};

/// Result of a product price calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProductPrice {
    price: Price,
    price_from: bool,
}

impl ProductPrice {
    pub fn new(price: Price, price_from: bool) -> Self {
        Self { price, price_from }
    }

    pub fn price(&self) -> &Price {
        &self.price
    }

    /// `true` when the product is sold at several prices and [`Self::price`]
    /// is the lowest one ("from 150").
    pub fn is_price_from(&self) -> bool {
        self.price_from
    }

    pub fn price_with_vat(&self) -> Decimal {
        self.price.price_with_vat()
    }

    pub fn price_without_vat(&self) -> Decimal {
        self.price.price_without_vat()
    }
}

impl ValueObject for ProductPrice {}

/// Calculates product prices for pricing groups.
#[derive(Debug)]
pub struct ProductPriceCalculation<M, C, P> {
    base_price_calculation: BasePriceCalculation,
    pricing_setting: PricingSetting,
    pricing_service: PricingService,
    manual_input_prices: M,
    currencies: C,
    products: P,
}

impl<M, C, P> ProductPriceCalculation<M, C, P>
where
    M: ManualInputPriceRepository,
    C: CurrencyRepository,
    P: ProductRepository,
{
    pub fn new(pricing_setting: PricingSetting, manual_input_prices: M, currencies: C, products: P) -> Self {
        let rounding = Rounding::new(pricing_setting.rounding_type());

        Self {
            base_price_calculation: BasePriceCalculation::new(rounding),
            pricing_setting,
            pricing_service: PricingService::new(),
            manual_input_prices,
            currencies,
            products,
        }
    }

    pub fn pricing_setting(&self) -> &PricingSetting {
        &self.pricing_setting
    }

    pub fn calculate_price(
        &self,
        product: &Product,
        pricing_group: &PricingGroup,
    ) -> Result<ProductPrice, ProductPriceError> {
        let mode = product.pricing_mode().inspect_err(|err| {
            tracing::warn!(product_id = %product.id(), error = %err, "cannot price product");
        })?;

        tracing::debug!(
            product_id = %product.id(),
            pricing_group_id = %pricing_group.id(),
            ?mode,
            "calculating product price"
        );

        match mode {
            PricingMode::MainVariant => self.calculate_main_variant_price(product, pricing_group),
            PricingMode::Auto => self.calculate_base_price_for_pricing_group_auto(product, pricing_group),
            PricingMode::Manual => self.calculate_base_price_for_pricing_group_manual(product, pricing_group),
        }
    }

    /// Product's own price, normalized by the configured input price type.
    pub fn calculate_base_price(&self, product: &Product) -> Result<Price, ProductPriceError> {
        self.base_price_calculation
            .calculate_base_price(
                product.price(),
                self.pricing_setting.input_price_type(),
                product.vat(),
            )
            .map_err(|err| price_error(product, err))
    }

    fn calculate_main_variant_price(
        &self,
        main_variant: &Product,
        pricing_group: &PricingGroup,
    ) -> Result<ProductPrice, ProductPriceError> {
        let variants = self.products.get_all_sellable_variants_by_main_variant(
            main_variant,
            pricing_group.domain_id(),
            pricing_group,
        )?;

        if variants.is_empty() {
            tracing::debug!(main_variant_id = %main_variant.id(), "main variant has no sellable variants");
            return Err(ProductPriceError::NoSellableVariants {
                main_variant_id: *main_variant.id(),
            });
        }

        let variant_prices = variants
            .iter()
            .map(|variant| {
                if variant.is_main_variant() {
                    tracing::warn!(
                        main_variant_id = %main_variant.id(),
                        variant_id = %variant.id(),
                        "main variant listed as a variant"
                    );
                    return Err(ProductPriceError::NestedMainVariant {
                        main_variant_id: *main_variant.id(),
                        variant_id: *variant.id(),
                    });
                }
                self.calculate_price(variant, pricing_group).map(|price| *price.price())
            })
            .collect::<Result<Vec<_>, _>>()?;

        let min_variant_price = self.pricing_service.minimum_price(&variant_prices)?;
        let from = self.pricing_service.are_different(&variant_prices);

        Ok(ProductPrice::new(min_variant_price, from))
    }

    fn calculate_base_price_for_pricing_group_manual(
        &self,
        product: &Product,
        pricing_group: &PricingGroup,
    ) -> Result<ProductPrice, ProductPriceError> {
        let input_price = self
            .manual_input_prices
            .find_by_product_and_pricing_group(product.id(), pricing_group.id())?
            .map(|manual_input_price| manual_input_price.input_price)
            .unwrap_or(Decimal::ZERO);

        let price = self
            .base_price_calculation
            .calculate_base_price(input_price, self.pricing_setting.input_price_type(), product.vat())
            .map_err(|err| price_error(product, err))?;

        Ok(ProductPrice::new(price, false))
    }

    fn calculate_base_price_for_pricing_group_auto(
        &self,
        product: &Product,
        pricing_group: &PricingGroup,
    ) -> Result<ProductPrice, ProductPriceError> {
        let base_price = self.calculate_base_price(product)?;
        let reversed_exchange_rate = self.domain_default_currency_reversed_exchange_rate(pricing_group)?;

        let price = self
            .base_price_calculation
            .apply_coefficients(
                &base_price,
                product.vat(),
                &[pricing_group.coefficient(), reversed_exchange_rate],
            )
            .map_err(|err| price_error(product, err))?;

        Ok(ProductPrice::new(price, false))
    }

    fn domain_default_currency_reversed_exchange_rate(
        &self,
        pricing_group: &PricingGroup,
    ) -> Result<Decimal, ProductPriceError> {
        let currency_id = self
            .pricing_setting
            .domain_default_currency_id(pricing_group.domain_id())?;
        let currency = self.currencies.get_by_id(&currency_id)?;

        Ok(currency.reversed_exchange_rate())
    }
}

/// Arithmetic overflow is specific to the product being priced; anything else
/// keeps its lookup meaning.
fn price_error(product: &Product, err: DomainError) -> ProductPriceError {
    match err {
        DomainError::Overflow(reason) => {
            tracing::warn!(product_id = %product.id(), %reason, "product price out of range");
            ProductPriceError::PriceOverflow {
                product_id: *product.id(),
                reason,
            }
        }
        other => ProductPriceError::Lookup(other),
    }
}
