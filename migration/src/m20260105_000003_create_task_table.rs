use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000002_create_appointment_table::Appointment;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Task::Table)
                    .if_not_exists()
                    .col(pk_auto(Task::Id))
                    .col(string(Task::Name))
                    .col(text(Task::Description))
                    .col(timestamp(Task::Deadline))
                    .col(integer(Task::Status))
                    .col(integer(Task::WhenToComplete))
                    .col(integer(Task::AppointmentId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_task_appointment_id")
                            .from(Task::Table, Task::AppointmentId)
                            .to(Appointment::Table, Appointment::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_task_appointment_id")
                    .table(Task::Table)
                    .col(Task::AppointmentId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Task::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Task {
    Table,
    Id,
    Name,
    Description,
    Deadline,
    Status,
    WhenToComplete,
    AppointmentId,
}
