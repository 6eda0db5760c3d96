//! Declarative query descriptions.
//!
//! A [`Specification`] states which rows to select (criteria), in what order, which
//! relations to load alongside them and which page to return. It performs no I/O:
//! [`evaluator::evaluate`] turns it into a SeaORM `Select` and the repositories execute
//! that query. Counting uses a [`CountSpecification`] derived from the listing
//! specification, so a page and its total always share the same filter.
//!
//! ```rust,ignore
//! let spec = Specification::<entity::task::Entity>::new()
//!     .with_criteria(Some(Condition::all().add(task::Column::AppointmentId.eq(3))))
//!     .order_by(task::Column::Status)
//!     .order_by(task::Column::Deadline)
//!     .paginate(10, 10);
//!
//! let page = repository.list_with_spec(&spec).await?;
//! let total = repository.count(&spec.for_count()).await?;
//! ```

pub mod appointment;
pub mod evaluator;
pub mod task;
pub mod vessel;

use sea_orm::{Condition, EntityTrait, Order};
use std::{convert::Infallible, fmt::Debug};

/// Entity that can be queried through a [`Specification`].
pub trait Specified: EntityTrait {
    /// Relations of the entity that a specification may ask to load eagerly.
    type Include: Copy + PartialEq + Debug + Send + Sync + 'static;
}

impl Specified for entity::appointment::Entity {
    type Include = appointment::AppointmentInclude;
}

impl Specified for entity::task::Entity {
    type Include = Infallible;
}

impl Specified for entity::vessel::Entity {
    type Include = Infallible;
}

impl Specified for entity::app_user::Entity {
    type Include = Infallible;
}

/// Offset/limit window of a paged query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    pub skip: u64,
    pub take: u64,
}

/// Filter, ordering, eager-load and paging description for entity `E`.
#[derive(Debug, Clone)]
pub struct Specification<E: Specified> {
    criteria: Option<Condition>,
    includes: Vec<E::Include>,
    order_by: Vec<(E::Column, Order)>,
    paging: Option<Paging>,
}

impl<E: Specified> Specification<E> {
    /// Match-all specification with no ordering, includes or paging.
    pub fn new() -> Self {
        Self {
            criteria: None,
            includes: Vec::new(),
            order_by: Vec::new(),
            paging: None,
        }
    }

    /// Sets the filter. `None` matches every row.
    pub fn with_criteria(mut self, criteria: Option<Condition>) -> Self {
        self.criteria = criteria;
        self
    }

    /// Appends an ascending sort key after any existing keys.
    pub fn order_by(mut self, column: E::Column) -> Self {
        self.order_by.push((column, Order::Asc));
        self
    }

    /// Appends a descending sort key after any existing keys.
    pub fn order_by_desc(mut self, column: E::Column) -> Self {
        self.order_by.push((column, Order::Desc));
        self
    }

    /// Asks for a relation to be loaded with each row. Duplicates are ignored.
    pub fn include(mut self, include: E::Include) -> Self {
        if !self.includes.contains(&include) {
            self.includes.push(include);
        }
        self
    }

    /// Enables paging: skip `skip` rows, then return at most `take`.
    pub fn paginate(mut self, skip: u64, take: u64) -> Self {
        self.paging = Some(Paging { skip, take });
        self
    }

    pub fn criteria(&self) -> Option<&Condition> {
        self.criteria.as_ref()
    }

    pub fn includes(&self) -> &[E::Include] {
        &self.includes
    }

    pub fn order_keys(&self) -> &[(E::Column, Order)] {
        &self.order_by
    }

    pub fn paging(&self) -> Option<Paging> {
        self.paging
    }

    pub fn is_paging_enabled(&self) -> bool {
        self.paging.is_some()
    }

    /// Count-only view sharing this specification's criteria.
    pub fn for_count(&self) -> CountSpecification<E> {
        CountSpecification {
            criteria: self.criteria.clone(),
            _entity: std::marker::PhantomData,
        }
    }
}

impl<E: Specified> Default for Specification<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Criteria of a [`Specification`] with ordering, includes and paging stripped.
///
/// Used to compute the total number of rows a listing would match.
#[derive(Debug, Clone)]
pub struct CountSpecification<E: Specified> {
    criteria: Option<Condition>,
    _entity: std::marker::PhantomData<E>,
}

impl<E: Specified> CountSpecification<E> {
    pub fn criteria(&self) -> Option<&Condition> {
        self.criteria.as_ref()
    }
}

impl<E: Specified> From<&Specification<E>> for CountSpecification<E> {
    fn from(spec: &Specification<E>) -> Self {
        spec.for_count()
    }
}
