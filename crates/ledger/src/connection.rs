//! Connection provider and the narrow connection handle used by repositories.
//!
//! [`ConnectionProvider`] owns a sea-orm [`DatabaseConnection`], which is an
//! sqlx pool. [`Connection`] borrows it and exposes only what a repository
//! needs: starting a transaction, running a [`NonQuery`] inside it and running
//! a [`Query`]. A pooled connection is acquired per call and handed back when
//! the call returns; a transaction keeps its connection until it is committed
//! or dropped, and dropping it without commit rolls it back.

use sea_orm::{DatabaseConnection, DatabaseTransaction, IsolationLevel, TransactionTrait};

use crate::{
    LedgerError, ResultLedger,
    procedures::{NonQuery, Query},
};

/// Hands out [`Connection`] handles over a shared pool.
#[derive(Clone, Debug)]
pub struct ConnectionProvider {
    database: DatabaseConnection,
}

impl ConnectionProvider {
    pub fn new(database: DatabaseConnection) -> Self {
        Self { database }
    }

    pub fn open(&self) -> Connection<'_> {
        Connection {
            database: &self.database,
        }
    }

    pub(crate) fn database(&self) -> &DatabaseConnection {
        &self.database
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Connection<'a> {
    database: &'a DatabaseConnection,
}

impl Connection<'_> {
    /// Begin a transaction with `READ COMMITTED` isolation.
    pub async fn begin_transaction(&self) -> ResultLedger<DatabaseTransaction> {
        self.begin_transaction_with(IsolationLevel::ReadCommitted)
            .await
    }

    /// Begin a transaction with the given isolation level.
    ///
    /// SQLite has no per-transaction isolation levels, there the level is
    /// ignored.
    pub async fn begin_transaction_with(
        &self,
        isolation_level: IsolationLevel,
    ) -> ResultLedger<DatabaseTransaction> {
        tracing::debug!(?isolation_level, "begin transaction");
        let transaction = self
            .database
            .begin_with_config(Some(isolation_level), None)
            .await?;
        Ok(transaction)
    }

    /// Run a mutating procedure inside `transaction` and return the number of
    /// affected rows. Committing is left to the caller.
    pub async fn execute_non_query<P: NonQuery>(
        &self,
        transaction: &DatabaseTransaction,
        procedure: &P,
    ) -> ResultLedger<u64> {
        tracing::debug!(procedure = P::NAME, "execute non-query");
        let rows = procedure.execute(transaction).await.map_err(|err| {
            tracing::error!(procedure = P::NAME, "procedure failed: {err}");
            LedgerError::from(err)
        })?;
        tracing::debug!(procedure = P::NAME, rows, "non-query done");
        Ok(rows)
    }

    /// Run a read-only procedure outside of any transaction.
    pub async fn query<P: Query>(&self, procedure: &P) -> ResultLedger<Vec<P::Row>> {
        tracing::debug!(procedure = P::NAME, "query");
        let rows = procedure.query(self.database).await.map_err(|err| {
            tracing::error!(procedure = P::NAME, "procedure failed: {err}");
            LedgerError::from(err)
        })?;
        tracing::debug!(procedure = P::NAME, rows = rows.len(), "query done");
        Ok(rows)
    }

    /// First row of `procedure`, failing with [`LedgerError::NoRows`] when
    /// the result set is empty.
    pub async fn query_first<P: Query>(&self, procedure: &P) -> ResultLedger<P::Row> {
        self.query_first_or_default(procedure)
            .await?
            .ok_or(LedgerError::NoRows(P::NAME))
    }

    /// First row of `procedure`, if any.
    pub async fn query_first_or_default<P: Query>(
        &self,
        procedure: &P,
    ) -> ResultLedger<Option<P::Row>> {
        Ok(self.query(procedure).await?.into_iter().next())
    }
}
