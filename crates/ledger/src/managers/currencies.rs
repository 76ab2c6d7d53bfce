use api_types::currency::{CurrencyListResponse, CurrencyNew};

use crate::{ResultLedger, repositories::CurrencyRepository};

#[derive(Clone, Debug)]
pub struct CurrencyManager {
    repository: CurrencyRepository,
}

impl CurrencyManager {
    pub(crate) fn new(repository: CurrencyRepository) -> Self {
        Self { repository }
    }

    pub async fn get_currencies(&self) -> ResultLedger<CurrencyListResponse> {
        let currencies = self.repository.get_currencies().await?;
        Ok(CurrencyListResponse { currencies })
    }

    /// Returns `Ok` also when the currency code already exists.
    pub async fn create_currency(&self, currency: CurrencyNew) -> ResultLedger<()> {
        self.repository.create_currency(currency).await?;
        Ok(())
    }
}
