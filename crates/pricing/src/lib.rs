//! Pricing primitives (pure, deterministic).
//!
//! Money is represented with [`rust_decimal::Decimal`]; every rounding decision
//! lives in [`Rounding`] and is applied by [`BasePriceCalculation`]. Callers must
//! treat its results as final and never re-round them.

pub mod base_price;
pub mod currency;
pub mod group;
pub mod price;
pub mod pricing_service;
pub mod rounding;
pub mod setting;
pub mod vat;

pub use base_price::BasePriceCalculation;
pub use currency::{Currency, CurrencyRepository};
pub use group::PricingGroup;
pub use price::Price;
pub use pricing_service::PricingService;
pub use rounding::{Rounding, RoundingType};
pub use setting::{InputPriceType, PricingSetting};
pub use vat::Vat;
