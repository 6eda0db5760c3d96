use crate::{
    model::{appointment::CreateOrUpdateAppointmentDto, task::CreateOrUpdateTaskDto},
    server::error::AppError,
};
use test_utils::fixture;

mod auth;
mod task;

/// Valid appointment request body for `vessel_id`, built from the fixture defaults.
fn appointment_dto(vessel_id: i32) -> CreateOrUpdateAppointmentDto {
    let model = fixture::appointment::entity(vessel_id);

    CreateOrUpdateAppointmentDto {
        appointment_type: model.appointment_type,
        vessel_id,
        duv_number: model.duv_number,
        schedule_number: model.schedule_number,
        voyage_number: model.voyage_number,
        next_ports: model.next_ports,
        operation_type: model.operation_type,
        cargo: model.cargo,
        port: model.port,
        has_crew_change: model.has_crew_change,
        on_signers: model.on_signers,
        off_signers: model.off_signers,
        estimated_time_of_arrival_on_first_brazilian_port: model
            .estimated_time_of_arrival_on_first_brazilian_port,
        estimated_time_of_arrival: model.estimated_time_of_arrival,
        estimated_time_of_berthing: model.estimated_time_of_berthing,
        estimated_time_of_sailing: model.estimated_time_of_sailing,
        arrival: model.arrival,
        berthing: model.berthing,
        sailing: model.sailing,
        status: model.status,
    }
}

/// Valid task request body for `appointment_id`.
fn task_dto(appointment_id: i32) -> CreateOrUpdateTaskDto {
    let model = fixture::task::entity(appointment_id);

    CreateOrUpdateTaskDto {
        name: model.name,
        description: model.description,
        deadline: model.deadline,
        status: model.status,
        when_to_complete: model.when_to_complete,
        appointment_id,
    }
}

fn is_not_found(result: &Result<impl std::fmt::Debug, AppError>) -> bool {
    matches!(result, Err(AppError::NotFound(_)))
}
