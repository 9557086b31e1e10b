//! Pricing configuration loading.
//!
//! Sources, later ones win:
//! 1. JSON file named by `STOREFRONT_PRICING_CONFIG` (defaults when unset);
//! 2. `STOREFRONT_INPUT_PRICE_TYPE` / `STOREFRONT_ROUNDING_TYPE` overrides.

use anyhow::Context;

use storefront_pricing::{InputPriceType, PricingSetting, RoundingType};

pub const PRICING_CONFIG_PATH_ENV: &str = "STOREFRONT_PRICING_CONFIG";
pub const INPUT_PRICE_TYPE_ENV: &str = "STOREFRONT_INPUT_PRICE_TYPE";
pub const ROUNDING_TYPE_ENV: &str = "STOREFRONT_ROUNDING_TYPE";

/// Load the pricing setting from the process environment.
pub fn load_pricing_setting() -> anyhow::Result<PricingSetting> {
    load_pricing_setting_from(|key| std::env::var(key).ok())
}

/// Same as [`load_pricing_setting`], reading variables through `lookup`.
pub fn load_pricing_setting_from<F>(lookup: F) -> anyhow::Result<PricingSetting>
where
    F: Fn(&str) -> Option<String>,
{
    let mut setting = match lookup(PRICING_CONFIG_PATH_ENV) {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read pricing config file {path}"))?;
            parse_pricing_setting(&raw).with_context(|| format!("in pricing config file {path}"))?
        }
        None => {
            tracing::warn!("{PRICING_CONFIG_PATH_ENV} not set; using default pricing setting");
            PricingSetting::default()
        }
    };

    if let Some(raw) = lookup(INPUT_PRICE_TYPE_ENV) {
        let input_price_type: InputPriceType = raw
            .parse()
            .with_context(|| format!("invalid {INPUT_PRICE_TYPE_ENV}"))?;
        setting = setting.with_input_price_type(input_price_type);
    }

    if let Some(raw) = lookup(ROUNDING_TYPE_ENV) {
        let rounding_type: RoundingType = raw
            .parse()
            .with_context(|| format!("invalid {ROUNDING_TYPE_ENV}"))?;
        setting = setting.with_rounding_type(rounding_type);
    }

    tracing::info!(
        input_price_type = ?setting.input_price_type(),
        rounding_type = ?setting.rounding_type(),
        "pricing setting loaded"
    );

    Ok(setting)
}

/// Parse a JSON pricing setting document.
pub fn parse_pricing_setting(json: &str) -> anyhow::Result<PricingSetting> {
    serde_json::from_str(json).context("invalid pricing config JSON")
}
