//! Typed database procedures.
//!
//! Every repository operation maps to exactly one procedure. A procedure is a
//! plain struct carrying its parameters; its body is a sea-orm query against
//! the schema in the `migration` crate. Mutating procedures implement
//! [`NonQuery`] and run inside the caller's transaction, reads implement
//! [`Query`].

use std::future::Future;

use sea_orm::{ConnectionTrait, DbErr};

pub mod budgets;
pub mod currencies;
pub mod debt_accounts;
pub mod expense_categories;
pub mod savings_accounts;

/// Identity of a procedure, used in logs and errors.
pub trait Procedure {
    const NAME: &'static str;
}

/// A procedure that writes and reports how many rows it touched.
pub trait NonQuery: Procedure + Sync {
    fn execute<C>(&self, conn: &C) -> impl Future<Output = Result<u64, DbErr>> + Send
    where
        C: ConnectionTrait;
}

/// A procedure that reads a result set.
pub trait Query: Procedure + Sync {
    type Row: Send;

    fn query<C>(&self, conn: &C) -> impl Future<Output = Result<Vec<Self::Row>, DbErr>> + Send
    where
        C: ConnectionTrait;
}
