use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::task::TaskDto;

/// Fully hydrated appointment: vessel name plus tasks ordered by status.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDto {
    pub id: i32,
    #[serde(rename = "type")]
    pub appointment_type: i32,
    pub vessel_id: i32,
    pub vessel_name: Option<String>,
    pub duv_number: String,
    pub schedule_number: String,
    pub voyage_number: String,
    pub next_ports: String,
    pub operation_type: i32,
    pub cargo: String,
    pub port: i32,
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
    pub status: i32,
    pub tasks: Vec<TaskDto>,
}

/// Request body for creating or updating an appointment.
///
/// `type`, `operationType`, `port` and `status` are integer codes validated
/// against their enums. `status` defaults to pending when omitted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrUpdateAppointmentDto {
    #[serde(rename = "type")]
    pub appointment_type: i32,
    pub vessel_id: i32,
    pub duv_number: String,
    pub schedule_number: String,
    pub voyage_number: String,
    pub next_ports: String,
    pub operation_type: i32,
    pub cargo: String,
    pub port: i32,
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
    #[serde(default)]
    pub status: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct AppointmentsDto {
    pub appointments: Vec<AppointmentDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct AppointmentToReturnDto {
    pub appointment: AppointmentDto,
}
