use crate::server::{
    data::appointment::{AppointmentRepository, RELATION_BATCH_SIZE},
    model::params::AppointmentsSpecificationParams,
    specification::appointment::{
        appointment_with_vessel_specification, appointments_specification,
    },
};
use chrono::Duration;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, appointment::AppointmentFactory, task::TaskFactory},
    fixture,
};

mod count;
mod get_with_spec;
mod list_with_spec;
