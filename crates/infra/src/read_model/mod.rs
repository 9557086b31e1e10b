//! In-memory implementations of the catalog and pricing repositories.
//!
//! Intended for tests, demos and single-process setups.

pub mod currency_store;
pub mod manual_input_price_store;
pub mod product_store;

pub use currency_store::InMemoryCurrencyStore;
pub use manual_input_price_store::InMemoryManualInputPriceStore;
pub use product_store::InMemoryProductStore;

use storefront_core::DomainError;

fn poisoned(store: &str) -> DomainError {
    DomainError::invariant(format!("{store} lock poisoned"))
}
