//! Generic entity repository driven by specifications.

use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel, PaginatorTrait,
    PrimaryKeyTrait,
};
use std::{
    marker::PhantomData,
    sync::atomic::{AtomicU64, Ordering},
};

use crate::server::specification::{
    evaluator::{evaluate, evaluate_count},
    CountSpecification, Specification, Specified,
};

/// Primary key value type of entity `E`.
pub type PrimaryKeyValue<E> = <<E as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType;

/// Reads and writes rows of entity `E` over connection `C`.
///
/// A repository handed out by a [`UnitOfWork`](super::unit_of_work::UnitOfWork) shares
/// its transaction and reports every affected row to it, so the unit of work knows
/// whether anything is worth committing. A repository created with [`Repository::new`]
/// writes straight through.
pub struct Repository<'a, C: ConnectionTrait, E: Specified> {
    db: &'a C,
    changes: Option<&'a AtomicU64>,
    _entity: PhantomData<E>,
}

impl<'a, C, E> Repository<'a, C, E>
where
    C: ConnectionTrait,
    E: Specified,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: Send + 'static,
{
    pub fn new(db: &'a C) -> Self {
        Self {
            db,
            changes: None,
            _entity: PhantomData,
        }
    }

    pub(super) fn tracked(db: &'a C, changes: &'a AtomicU64) -> Self {
        Self {
            db,
            changes: Some(changes),
            _entity: PhantomData,
        }
    }

    fn record(&self, rows: u64) {
        if let Some(changes) = self.changes {
            changes.fetch_add(rows, Ordering::SeqCst);
        }
    }

    pub async fn get_by_id(&self, id: PrimaryKeyValue<E>) -> Result<Option<E::Model>, DbErr> {
        E::find_by_id(id).one(self.db).await
    }

    /// Every row, in storage order.
    pub async fn list(&self) -> Result<Vec<E::Model>, DbErr> {
        E::find().all(self.db).await
    }

    /// Rows selected by `spec`. Includes are not loaded here; see the typed
    /// repositories for entities that declare any.
    pub async fn list_with_spec(&self, spec: &Specification<E>) -> Result<Vec<E::Model>, DbErr> {
        evaluate(E::find(), spec).all(self.db).await
    }

    /// First row selected by `spec`.
    pub async fn get_entity_with_spec(
        &self,
        spec: &Specification<E>,
    ) -> Result<Option<E::Model>, DbErr> {
        evaluate(E::find(), spec).one(self.db).await
    }

    /// Number of rows matching the criteria of `spec`.
    pub async fn count(&self, spec: &CountSpecification<E>) -> Result<u64, DbErr> {
        evaluate_count(E::find(), spec).count(self.db).await
    }

    /// Inserts a new row and returns it as stored.
    pub async fn add(&self, model: E::ActiveModel) -> Result<E::Model, DbErr> {
        let created = model.insert(self.db).await?;
        self.record(1);
        Ok(created)
    }

    /// Writes the changed columns of an existing row.
    pub async fn update(&self, model: E::ActiveModel) -> Result<E::Model, DbErr> {
        let updated = model.update(self.db).await?;
        self.record(1);
        Ok(updated)
    }

    /// Removes a row, returning the number of rows deleted.
    ///
    /// Rows removed by `ON DELETE CASCADE` are not included in the result.
    pub async fn delete(&self, model: E::Model) -> Result<u64, DbErr> {
        let result = model.into_active_model().delete(self.db).await?;
        self.record(result.rows_affected);
        Ok(result.rows_affected)
    }
}
