use api_types::currency::{Currency, CurrencyNew};

use crate::{
    ConnectionProvider, ResultLedger,
    procedures::currencies::{CreateCurrency, GetCurrencies},
};

use super::{execute, query};

#[derive(Clone, Debug)]
pub struct CurrencyRepository {
    provider: ConnectionProvider,
}

impl CurrencyRepository {
    pub fn new(provider: ConnectionProvider) -> Self {
        Self { provider }
    }

    pub async fn get_currencies(&self) -> ResultLedger<Vec<Currency>> {
        query(&self.provider, &GetCurrencies).await
    }

    pub async fn create_currency(&self, currency: CurrencyNew) -> ResultLedger<u64> {
        let procedure = CreateCurrency {
            country_currency_code: currency.country_currency_code,
            name: currency.name,
            country: currency.country,
            rand_exchange_rate: currency.rand_exchange_rate,
        };
        execute(&self.provider, &procedure).await
    }
}
