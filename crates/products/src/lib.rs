//! Products domain module: catalog records and product price calculation.
//!
//! Everything here is deterministic domain logic. Persistence is reached only
//! through the read-only repository traits, which infrastructure implements.

pub mod error;
pub mod manual_input_price;
pub mod price_calculation;
pub mod product;

pub use error::ProductPriceError;
pub use manual_input_price::{ManualInputPrice, ManualInputPriceRepository};
pub use price_calculation::{ProductPrice, ProductPriceCalculation};
pub use product::{
    PriceCalculationType, PricingMode, Product, ProductRepository, VariantType,
    PRICE_CALCULATION_TYPE_AUTO, PRICE_CALCULATION_TYPE_MANUAL,
};
