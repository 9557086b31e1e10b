use std::collections::HashMap;
use std::sync::RwLock;

use storefront_core::{CurrencyId, DomainError, DomainResult, Entity};
use storefront_pricing::{Currency, CurrencyRepository};

use super::poisoned;

#[derive(Debug, Default)]
pub struct InMemoryCurrencyStore {
    inner: RwLock<HashMap<CurrencyId, Currency>>,
}

impl InMemoryCurrencyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert(&self, currency: Currency) -> DomainResult<()> {
        let mut map = self.inner.write().map_err(|_| poisoned("currency store"))?;
        map.insert(*currency.id(), currency);
        Ok(())
    }
}

impl CurrencyRepository for InMemoryCurrencyStore {
    fn get_by_id(&self, id: &CurrencyId) -> DomainResult<Currency> {
        let map = self.inner.read().map_err(|_| poisoned("currency store"))?;
        map.get(id)
            .cloned()
            .ok_or_else(|| DomainError::not_found("currency", id))
    }
}
