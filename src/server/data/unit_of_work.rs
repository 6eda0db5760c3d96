//! Transaction shared by several repositories.

use sea_orm::{
    DatabaseConnection, DatabaseTransaction, DbErr, IntoActiveModel, TransactionTrait,
};
use std::sync::atomic::{AtomicU64, Ordering};

use super::repository::Repository;
use crate::server::specification::Specified;

/// One database transaction coordinating writes across entity repositories.
///
/// Every repository obtained through [`UnitOfWork::repository`] runs on the same
/// transaction, so their changes are committed or discarded together by
/// [`UnitOfWork::complete`]. Dropping a unit of work without completing it rolls the
/// transaction back.
///
/// While a unit of work is open, read through its repositories rather than the pool:
/// a SQLite pool may only hold the one connection the transaction already uses.
pub struct UnitOfWork {
    txn: DatabaseTransaction,
    changes: AtomicU64,
}

impl UnitOfWork {
    pub async fn begin(db: &DatabaseConnection) -> Result<Self, DbErr> {
        Ok(Self {
            txn: db.begin().await?,
            changes: AtomicU64::new(0),
        })
    }

    /// Repository for entity `E` bound to this unit of work.
    pub fn repository<E>(&self) -> Repository<'_, DatabaseTransaction, E>
    where
        E: Specified,
        E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
        E::ActiveModel: Send + 'static,
    {
        Repository::tracked(&self.txn, &self.changes)
    }

    /// Transaction the repositories of this unit of work run on.
    pub fn connection(&self) -> &DatabaseTransaction {
        &self.txn
    }

    /// Rows written so far.
    pub fn pending_changes(&self) -> u64 {
        self.changes.load(Ordering::SeqCst)
    }

    /// Commits every pending change and returns the number of affected rows.
    ///
    /// When nothing was written the transaction is rolled back instead and `0` is
    /// returned; callers treat that as a failed save.
    pub async fn complete(self) -> Result<u64, DbErr> {
        let changes = self.pending_changes();

        if changes > 0 {
            self.txn.commit().await?;
        } else {
            self.txn.rollback().await?;
        }

        Ok(changes)
    }
}
