//! Appointment listing and lookup recipes.

use entity::appointment;
use sea_orm::{ColumnTrait, Condition};

use crate::server::model::{
    enums::{AppointmentStatus, EnumCode},
    params::AppointmentsSpecificationParams,
};

use super::Specification;

/// Relations an appointment query may load eagerly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentInclude {
    Vessel,
    Tasks,
}

/// Conjunction of every filter set in `params`, or `None` when none is set.
///
/// Unknown `type` or `port` codes are compared as-is and match no rows.
fn appointments_criteria(params: &AppointmentsSpecificationParams) -> Option<Condition> {
    if !params.has_filter() {
        return None;
    }

    let mut condition = Condition::all();

    if let Some(vessel_id) = params.vessel_id {
        condition = condition.add(appointment::Column::VesselId.eq(vessel_id));
    }
    if let Some(appointment_type) = params.appointment_type {
        condition = condition.add(appointment::Column::AppointmentType.eq(appointment_type));
    }
    if let Some(port) = params.port {
        condition = condition.add(appointment::Column::Port.eq(port));
    }
    if params.done {
        condition = condition.add(appointment::Column::Status.eq(AppointmentStatus::Done.code()));
    }
    if params.cancelled {
        condition =
            condition.add(appointment::Column::Status.eq(AppointmentStatus::Cancelled.code()));
    }

    Some(condition)
}

/// Filtered appointment list ordered by ETA, ETB then status, with vessel and tasks loaded.
pub fn appointments_specification(
    params: &AppointmentsSpecificationParams,
) -> Specification<appointment::Entity> {
    Specification::new()
        .with_criteria(appointments_criteria(params))
        .order_by(appointment::Column::EstimatedTimeOfArrival)
        .order_by(appointment::Column::EstimatedTimeOfBerthing)
        .order_by(appointment::Column::Status)
        .include(AppointmentInclude::Vessel)
        .include(AppointmentInclude::Tasks)
}

/// Single appointment by id with vessel and tasks loaded.
pub fn appointment_with_vessel_specification(id: i32) -> Specification<appointment::Entity> {
    Specification::new()
        .with_criteria(Some(Condition::all().add(appointment::Column::Id.eq(id))))
        .include(AppointmentInclude::Vessel)
        .include(AppointmentInclude::Tasks)
}
