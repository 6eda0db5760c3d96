use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_vessel_table::Vessel;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Appointment::Table)
                    .if_not_exists()
                    .col(pk_auto(Appointment::Id))
                    .col(integer(Appointment::AppointmentType))
                    .col(integer(Appointment::VesselId))
                    .col(string(Appointment::DuvNumber))
                    .col(string(Appointment::ScheduleNumber))
                    .col(string(Appointment::VoyageNumber))
                    .col(string(Appointment::NextPorts))
                    .col(integer(Appointment::OperationType))
                    .col(string(Appointment::Cargo))
                    .col(integer(Appointment::Port))
                    .col(boolean(Appointment::HasCrewChange))
                    .col(integer(Appointment::OnSigners))
                    .col(integer(Appointment::OffSigners))
                    .col(timestamp(
                        Appointment::EstimatedTimeOfArrivalOnFirstBrazilianPort,
                    ))
                    .col(timestamp(Appointment::EstimatedTimeOfArrival))
                    .col(timestamp(Appointment::EstimatedTimeOfBerthing))
                    .col(timestamp(Appointment::EstimatedTimeOfSailing))
                    .col(timestamp(Appointment::Arrival))
                    .col(timestamp(Appointment::Berthing))
                    .col(timestamp(Appointment::Sailing))
                    .col(integer(Appointment::Status).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_vessel_id")
                            .from(Appointment::Table, Appointment::VesselId)
                            .to(Vessel::Table, Vessel::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_appointment_vessel_id")
                    .table(Appointment::Table)
                    .col(Appointment::VesselId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Appointment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Appointment {
    Table,
    Id,
    AppointmentType,
    VesselId,
    DuvNumber,
    ScheduleNumber,
    VoyageNumber,
    NextPorts,
    OperationType,
    Cargo,
    Port,
    HasCrewChange,
    OnSigners,
    OffSigners,
    EstimatedTimeOfArrivalOnFirstBrazilianPort,
    EstimatedTimeOfArrival,
    EstimatedTimeOfBerthing,
    EstimatedTimeOfSailing,
    Arrival,
    Berthing,
    Sailing,
    Status,
}
