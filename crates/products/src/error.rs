use thiserror::Error;

use storefront_core::{DomainError, ProductId};

/// Why a product price could not be calculated.
///
/// None of these are transient; retrying with the same data fails the same way.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProductPriceError {
    #[error("product {product_id}: price calculation type '{value}' is not supported")]
    UnsupportedCalculationType { product_id: ProductId, value: String },

    #[error("main variant {main_variant_id} has no sellable variants")]
    NoSellableVariants { main_variant_id: ProductId },

    /// Variants must be concrete products; a main variant below a main variant
    /// would make pricing recurse through corrupt data.
    #[error("main variant {main_variant_id} lists main variant {variant_id} as one of its variants")]
    NestedMainVariant {
        main_variant_id: ProductId,
        variant_id: ProductId,
    },

    /// Stored amounts are too large to price; treated like corrupt data.
    #[error("product {product_id}: price out of range ({reason})")]
    PriceOverflow { product_id: ProductId, reason: String },

    /// A referenced record (currency, domain default currency, ...) is missing.
    #[error(transparent)]
    Lookup(#[from] DomainError),
}

impl ProductPriceError {
    /// `true` for corrupt catalog data that callers should log and skip
    /// (hide the product) rather than fail the whole request on.
    pub fn is_integrity_violation(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedCalculationType { .. }
                | Self::NestedMainVariant { .. }
                | Self::PriceOverflow { .. }
        )
    }
}
