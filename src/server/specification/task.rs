//! Paged task listing.

use entity::task;
use sea_orm::{ColumnTrait, Condition};

use crate::server::model::params::TasksSpecificationParams;

use super::Specification;

/// Tasks of one appointment (or all tasks), ordered by status then deadline, one page at a time.
pub fn tasks_with_pagination_specification(
    params: &TasksSpecificationParams,
) -> Specification<task::Entity> {
    let pagination = params.pagination();
    let criteria = params
        .appointment_id
        .map(|id| Condition::all().add(task::Column::AppointmentId.eq(id)));

    Specification::new()
        .with_criteria(criteria)
        .order_by(task::Column::Status)
        .order_by(task::Column::Deadline)
        .paginate(pagination.skip(), pagination.take())
}
