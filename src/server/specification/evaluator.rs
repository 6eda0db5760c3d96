//! Turns specifications into SeaORM queries.

use sea_orm::{Iterable, PrimaryKeyToColumn, QueryFilter, QueryOrder, QuerySelect, Select};

use super::{CountSpecification, Specification, Specified};

/// Applies `spec` to `query`.
///
/// Steps run in a fixed order:
/// 1. filter by the criteria, when present;
/// 2. sort by the declared keys in sequence, then by primary key so rows with
///    equal keys come back in a stable order;
/// 3. includes are left to the repository, which loads them once the rows are fetched;
/// 4. apply the paging window, when enabled.
///
/// The primary key tiebreak is only added when the query is ordered or paged, so
/// unordered match-all queries stay untouched.
pub fn evaluate<E: Specified>(query: Select<E>, spec: &Specification<E>) -> Select<E> {
    let mut query = query;

    if let Some(criteria) = spec.criteria() {
        query = query.filter(criteria.clone());
    }

    if !spec.order_keys().is_empty() || spec.is_paging_enabled() {
        for (column, order) in spec.order_keys() {
            query = query.order_by(*column, order.clone());
        }
        for key in E::PrimaryKey::iter() {
            query = query.order_by_asc(key.into_column());
        }
    }

    if let Some(paging) = spec.paging() {
        query = query.offset(paging.skip).limit(paging.take);
    }

    query
}

/// Applies only the criteria of a count specification.
pub fn evaluate_count<E: Specified>(query: Select<E>, spec: &CountSpecification<E>) -> Select<E> {
    match spec.criteria() {
        Some(criteria) => query.filter(criteria.clone()),
        None => query,
    }
}
