//! Integration tests for the full pricing pipeline.
//!
//! Tests: configuration → in-memory stores → ProductPriceCalculation
//!
//! Verifies:
//! - Automatic, manual and main-variant pricing end to end
//! - Sellability rules shape main-variant prices
//! - Referential-integrity failures surface as errors

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use storefront_core::{CurrencyId, DomainError, DomainId, Entity, PricingGroupId, ProductId};
    use storefront_pricing::{Currency, Price, PricingGroup, PricingSetting, Vat};
    use storefront_products::{
        ManualInputPrice, PriceCalculationType, Product, ProductPriceCalculation, ProductPriceError,
    };

    use crate::config::parse_pricing_setting;
    use crate::read_model::{InMemoryCurrencyStore, InMemoryManualInputPriceStore, InMemoryProductStore};

    const DOMAIN: DomainId = DomainId::new(1);

    type Calculation = ProductPriceCalculation<
        Arc<InMemoryManualInputPriceStore>,
        Arc<InMemoryCurrencyStore>,
        Arc<InMemoryProductStore>,
    >;

    struct Storefront {
        calculation: Calculation,
        manual_prices: Arc<InMemoryManualInputPriceStore>,
        currencies: Arc<InMemoryCurrencyStore>,
        products: Arc<InMemoryProductStore>,
        currency_id: CurrencyId,
    }

    fn setup(input_price_type: &str, exchange_rate: Decimal) -> Storefront {
        storefront_observability::init_for_tests();

        let currency_id = CurrencyId::new();
        let setting: PricingSetting = parse_pricing_setting(&format!(
            r#"{{"input_price_type":"{input_price_type}","domain_default_currencies":{{"{DOMAIN}":"{currency_id}"}}}}"#
        ))
        .unwrap();

        let manual_prices = Arc::new(InMemoryManualInputPriceStore::new());
        let currencies = Arc::new(InMemoryCurrencyStore::new());
        let products = Arc::new(InMemoryProductStore::new());
        currencies
            .upsert(Currency::new(currency_id, "EUR", exchange_rate).unwrap())
            .unwrap();

        let calculation =
            ProductPriceCalculation::new(setting, manual_prices.clone(), currencies.clone(), products.clone());

        Storefront {
            calculation,
            manual_prices,
            currencies,
            products,
            currency_id,
        }
    }

    fn group(coefficient: Decimal) -> PricingGroup {
        PricingGroup::new(PricingGroupId::new(), "Ordinary customer", DOMAIN, coefficient).unwrap()
    }

    fn product(price: Decimal, calculation_type: PriceCalculationType) -> Product {
        Product::new(
            ProductId::new(),
            "Espresso machine",
            price,
            Vat::new(dec!(21)).unwrap(),
            calculation_type,
        )
    }

    #[test]
    fn auto_product_priced_from_stored_configuration() {
        let shop = setup("excludes_vat", dec!(1));
        let product = product(dec!(100), PriceCalculationType::Auto);
        shop.products.upsert(product.clone()).unwrap();

        let price = shop.calculation.calculate_price(&product, &group(dec!(1.1))).unwrap();

        assert_eq!(price.price_without_vat(), dec!(110));
        assert!(!price.is_price_from());
    }

    #[test]
    fn currency_rate_change_is_picked_up_without_rebuilding() {
        let shop = setup("excludes_vat", dec!(1));
        let product = product(dec!(100), PriceCalculationType::Auto);
        let group = group(dec!(1));

        let before = shop.calculation.calculate_price(&product, &group).unwrap();
        shop.currencies
            .upsert(Currency::new(shop.currency_id, "EUR", dec!(0.5)).unwrap())
            .unwrap();
        let after = shop.calculation.calculate_price(&product, &group).unwrap();

        assert_eq!(*before.price(), Price::new(dec!(100), dec!(121)));
        assert_eq!(*after.price(), Price::new(dec!(200), dec!(242)));
    }

    #[test]
    fn manual_product_follows_stored_manual_prices() {
        let shop = setup("includes_vat", dec!(1));
        let product = product(dec!(999), PriceCalculationType::Manual);
        let group = group(dec!(1.2));

        let unpriced = shop.calculation.calculate_price(&product, &group).unwrap();
        assert_eq!(*unpriced.price(), Price::zero());

        shop.manual_prices
            .save(ManualInputPrice::new(*product.id(), *group.id(), dec!(121)))
            .unwrap();
        let priced = shop.calculation.calculate_price(&product, &group).unwrap();
        assert_eq!(*priced.price(), Price::new(dec!(100), dec!(121)));
        assert!(!priced.is_price_from());
    }

    #[test]
    fn main_variant_price_tracks_sellable_variants() {
        let shop = setup("includes_vat", dec!(1));
        let group = group(dec!(1));
        let main = product(dec!(0), PriceCalculationType::Auto).into_main_variant();
        let cheap = product(dec!(150), PriceCalculationType::Auto).into_variant_of(*main.id());
        let same = product(dec!(150), PriceCalculationType::Auto).into_variant_of(*main.id());
        let pricey = product(dec!(200), PriceCalculationType::Auto).into_variant_of(*main.id());
        for p in [&main, &cheap, &same, &pricey] {
            shop.products.upsert(p.clone()).unwrap();
        }

        let price = shop.calculation.calculate_price(&main, &group).unwrap();
        assert_eq!(price.price_with_vat(), dec!(150));
        assert!(price.is_price_from());

        shop.products.set_selling_denied(*pricey.id(), true).unwrap();
        let price = shop.calculation.calculate_price(&main, &group).unwrap();
        assert_eq!(price.price_with_vat(), dec!(150));
        assert!(!price.is_price_from());

        shop.products.hide_for_pricing_group(*cheap.id(), *group.id()).unwrap();
        shop.products.hide_on_domain(*same.id(), DOMAIN).unwrap();
        let err = shop.calculation.calculate_price(&main, &group).unwrap_err();
        assert_eq!(
            err,
            ProductPriceError::NoSellableVariants {
                main_variant_id: *main.id()
            }
        );
        assert!(!err.is_integrity_violation());
    }

    #[test]
    fn corrupt_catalog_record_is_an_integrity_violation() {
        let shop = setup("excludes_vat", dec!(1));
        let stored = serde_json::json!({
            "id": ProductId::new(),
            "name": "Imported",
            "price": "10",
            "vat": "21",
            "price_calculation_type": "tiered",
        });
        let product: Product = serde_json::from_value(stored).unwrap();

        let err = shop.calculation.calculate_price(&product, &group(dec!(1))).unwrap_err();

        assert!(err.is_integrity_violation());
        assert!(matches!(err, ProductPriceError::UnsupportedCalculationType { .. }));
    }

    #[test]
    fn pricing_group_on_unconfigured_domain_fails() {
        let shop = setup("excludes_vat", dec!(1));
        let foreign_group =
            PricingGroup::new(PricingGroupId::new(), "Foreign", DomainId::new(9), dec!(1)).unwrap();

        let err = shop
            .calculation
            .calculate_price(&product(dec!(10), PriceCalculationType::Auto), &foreign_group)
            .unwrap_err();

        assert!(matches!(err, ProductPriceError::Lookup(DomainError::NotFound { .. })));
    }

    #[test]
    fn calculator_is_shareable_across_threads() {
        let shop = Arc::new(setup("excludes_vat", dec!(1)));
        let product = product(dec!(100), PriceCalculationType::Auto);
        let group = group(dec!(1.1));
        let expected = shop.calculation.calculate_price(&product, &group).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shop = shop.clone();
                let product = product.clone();
                let group = group.clone();
                std::thread::spawn(move || shop.calculation.calculate_price(&product, &group).unwrap())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
