//! Appointment domain models and write parameters.

use chrono::{DateTime, Utc};
use sea_orm::ActiveValue;

use crate::{
    model::appointment::{AppointmentDto, CreateOrUpdateAppointmentDto},
    server::{
        error::{internal::InternalError, validation::ValidationError},
        model::{
            enums::{AppointmentStatus, AppointmentType, EnumCode, OperationType, Port},
            task::Task,
        },
    },
};

/// Appointment row together with the relations its specification asked for.
///
/// `vessel` is `None` and `tasks` empty when the relation was not included.
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentWithRelations {
    pub appointment: entity::appointment::Model,
    pub vessel: Option<entity::vessel::Model>,
    pub tasks: Vec<entity::task::Model>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Appointment {
    pub id: i32,
    pub appointment_type: AppointmentType,
    pub vessel_id: i32,
    pub vessel_name: Option<String>,
    pub duv_number: String,
    pub schedule_number: String,
    pub voyage_number: String,
    pub next_ports: String,
    pub operation_type: OperationType,
    pub cargo: String,
    pub port: Port,
    pub has_crew_change: bool,
    pub on_signers: i32,
    pub off_signers: i32,
    pub estimated_time_of_arrival_on_first_brazilian_port: DateTime<Utc>,
    pub estimated_time_of_arrival: DateTime<Utc>,
    pub estimated_time_of_berthing: DateTime<Utc>,
    pub estimated_time_of_sailing: DateTime<Utc>,
    pub arrival: DateTime<Utc>,
    pub berthing: DateTime<Utc>,
    pub sailing: DateTime<Utc>,
    pub status: AppointmentStatus,
    /// Ordered by status, lowest code first.
    pub tasks: Vec<Task>,
}

impl Appointment {
    /// Converts a hydrated row into the domain model.
    ///
    /// Tasks are re-sorted by status with a stable sort, so tasks sharing a status
    /// keep the order they were loaded in.
    pub fn from_relations(relations: AppointmentWithRelations) -> Result<Self, InternalError> {
        let AppointmentWithRelations {
            appointment: entity,
            vessel,
            tasks,
        } = relations;

        let mut tasks = tasks
            .into_iter()
            .map(Task::from_entity)
            .collect::<Result<Vec<_>, _>>()?;
        tasks.sort_by_key(|task| task.status);

        Ok(Self {
            id: entity.id,
            appointment_type: AppointmentType::from_stored(entity.appointment_type)?,
            vessel_id: entity.vessel_id,
            vessel_name: vessel.map(|vessel| vessel.name),
            duv_number: entity.duv_number,
            schedule_number: entity.schedule_number,
            voyage_number: entity.voyage_number,
            next_ports: entity.next_ports,
            operation_type: OperationType::from_stored(entity.operation_type)?,
            cargo: entity.cargo,
            port: Port::from_stored(entity.port)?,
            has_crew_change: entity.has_crew_change,
            on_signers: entity.on_signers,
            off_signers: entity.off_signers,
            estimated_time_of_arrival_on_first_brazilian_port: entity
                .estimated_time_of_arrival_on_first_brazilian_port,
            estimated_time_of_arrival: entity.estimated_time_of_arrival,
            estimated_time_of_berthing: entity.estimated_time_of_berthing,
            estimated_time_of_sailing: entity.estimated_time_of_sailing,
            arrival: entity.arrival,
            berthing: entity.berthing,
            sailing: entity.sailing,
            status: AppointmentStatus::from_stored(entity.status)?,
            tasks,
        })
    }

    pub fn into_dto(self) -> AppointmentDto {
        AppointmentDto {
            id: self.id,
            appointment_type: self.appointment_type.code(),
            vessel_id: self.vessel_id,
            vessel_name: self.vessel_name,
            duv_number: self.duv_number,
            schedule_number: self.schedule_number,
            voyage_number: self.voyage_number,
            next_ports: self.next_ports,
            operation_type: self.operation_type.code(),
            cargo: self.cargo,
            port: self.port.code(),
            has_crew_change: self.has_crew_change,
            on_signers: self.on_signers,
            off_signers: self.off_signers,
            estimated_time_of_arrival_on_first_brazilian_port: self
                .estimated_time_of_arrival_on_first_brazilian_port,
            estimated_time_of_arrival: self.estimated_time_of_arrival,
            estimated_time_of_berthing: self.estimated_time_of_berthing,
            estimated_time_of_sailing: self.estimated_time_of_sailing,
            arrival: self.arrival,
            berthing: self.berthing,
            sailing: self.sailing,
            status: self.status.code(),
            tasks: self.tasks.into_iter().map(Task::into_dto).collect(),
        }
    }
}

/// Validated fields written when creating or updating an appointment.
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentParams {
    pub appointment_type: AppointmentType,
    pub vessel_id: i32,
    pub duv_number: String,
    pub schedule_number: String,
    pub voyage_number: String,
    pub next_ports: String,
    pub operation_type: OperationType,
    pub cargo: String,
    pub port: Port,
    pub has_crew_change: bool,
    pub on_signers: i32,
    pub off_signers: i32,
    pub estimated_time_of_arrival_on_first_brazilian_port: DateTime<Utc>,
    pub estimated_time_of_arrival: DateTime<Utc>,
    pub estimated_time_of_berthing: DateTime<Utc>,
    pub estimated_time_of_sailing: DateTime<Utc>,
    pub arrival: DateTime<Utc>,
    pub berthing: DateTime<Utc>,
    pub sailing: DateTime<Utc>,
    pub status: AppointmentStatus,
}

impl AppointmentParams {
    /// Validates the request body, rejecting unknown type, operation, port or status codes.
    pub fn from_dto(dto: CreateOrUpdateAppointmentDto) -> Result<Self, ValidationError> {
        Ok(Self {
            appointment_type: AppointmentType::parse(dto.appointment_type)?,
            operation_type: OperationType::parse(dto.operation_type)?,
            port: Port::parse(dto.port)?,
            status: AppointmentStatus::parse(dto.status)?,
            vessel_id: dto.vessel_id,
            duv_number: dto.duv_number,
            schedule_number: dto.schedule_number,
            voyage_number: dto.voyage_number,
            next_ports: dto.next_ports,
            cargo: dto.cargo,
            has_crew_change: dto.has_crew_change,
            on_signers: dto.on_signers,
            off_signers: dto.off_signers,
            estimated_time_of_arrival_on_first_brazilian_port: dto
                .estimated_time_of_arrival_on_first_brazilian_port,
            estimated_time_of_arrival: dto.estimated_time_of_arrival,
            estimated_time_of_berthing: dto.estimated_time_of_berthing,
            estimated_time_of_sailing: dto.estimated_time_of_sailing,
            arrival: dto.arrival,
            berthing: dto.berthing,
            sailing: dto.sailing,
        })
    }

    /// Overwrites every mapped column of `model`.
    pub fn apply(self, model: &mut entity::appointment::ActiveModel) {
        model.appointment_type = ActiveValue::Set(self.appointment_type.code());
        model.vessel_id = ActiveValue::Set(self.vessel_id);
        model.duv_number = ActiveValue::Set(self.duv_number);
        model.schedule_number = ActiveValue::Set(self.schedule_number);
        model.voyage_number = ActiveValue::Set(self.voyage_number);
        model.next_ports = ActiveValue::Set(self.next_ports);
        model.operation_type = ActiveValue::Set(self.operation_type.code());
        model.cargo = ActiveValue::Set(self.cargo);
        model.port = ActiveValue::Set(self.port.code());
        model.has_crew_change = ActiveValue::Set(self.has_crew_change);
        model.on_signers = ActiveValue::Set(self.on_signers);
        model.off_signers = ActiveValue::Set(self.off_signers);
        model.estimated_time_of_arrival_on_first_brazilian_port =
            ActiveValue::Set(self.estimated_time_of_arrival_on_first_brazilian_port);
        model.estimated_time_of_arrival = ActiveValue::Set(self.estimated_time_of_arrival);
        model.estimated_time_of_berthing = ActiveValue::Set(self.estimated_time_of_berthing);
        model.estimated_time_of_sailing = ActiveValue::Set(self.estimated_time_of_sailing);
        model.arrival = ActiveValue::Set(self.arrival);
        model.berthing = ActiveValue::Set(self.berthing);
        model.sailing = ActiveValue::Set(self.sailing);
        model.status = ActiveValue::Set(self.status.code());
    }
}
