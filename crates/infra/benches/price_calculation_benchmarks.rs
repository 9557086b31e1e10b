use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use storefront_core::{CurrencyId, DomainId, Entity, PricingGroupId, ProductId};
use storefront_infra::read_model::{InMemoryCurrencyStore, InMemoryManualInputPriceStore, InMemoryProductStore};
use storefront_pricing::{Currency, InputPriceType, PricingGroup, PricingSetting, RoundingType, Vat};
use storefront_products::{PriceCalculationType, Product, ProductPriceCalculation};

const DOMAIN: DomainId = DomainId::new(1);

fn setup(
    variant_count: usize,
) -> (
    ProductPriceCalculation<InMemoryManualInputPriceStore, InMemoryCurrencyStore, InMemoryProductStore>,
    Product,
    PricingGroup,
) {
    let currency_id = CurrencyId::new();
    let setting = PricingSetting::new(InputPriceType::WithoutVat, RoundingType::Hundredths)
        .with_domain_default_currency(DOMAIN, currency_id);
    let currencies = InMemoryCurrencyStore::new();
    currencies
        .upsert(Currency::new(currency_id, "EUR", dec!(1)).unwrap())
        .unwrap();

    let vat = Vat::new(dec!(21)).unwrap();
    let products = InMemoryProductStore::new();
    let main = Product::new(ProductId::new(), "Main", Decimal::ZERO, vat, PriceCalculationType::Auto)
        .into_main_variant();
    products.upsert(main.clone()).unwrap();
    for i in 0..variant_count {
        let variant = Product::new(
            ProductId::new(),
            format!("Variant {i}"),
            Decimal::from(100 + i as i64),
            vat,
            PriceCalculationType::Auto,
        )
        .into_variant_of(*main.id());
        products.upsert(variant).unwrap();
    }

    let group = PricingGroup::new(PricingGroupId::new(), "Ordinary", DOMAIN, dec!(1.1)).unwrap();
    let calculation =
        ProductPriceCalculation::new(setting, InMemoryManualInputPriceStore::new(), currencies, products);

    (calculation, main, group)
}

fn bench_main_variant_price(c: &mut Criterion) {
    let mut group = c.benchmark_group("main_variant_price");

    for variant_count in [1usize, 10, 100] {
        let (calculation, main, pricing_group) = setup(variant_count);
        group.bench_with_input(
            BenchmarkId::from_parameter(variant_count),
            &variant_count,
            |b, _| {
                b.iter(|| {
                    calculation
                        .calculate_price(black_box(&main), black_box(&pricing_group))
                        .unwrap()
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_main_variant_price);
criterion_main!(benches);
