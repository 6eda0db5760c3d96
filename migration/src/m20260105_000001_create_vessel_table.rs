use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vessel::Table)
                    .if_not_exists()
                    .col(pk_auto(Vessel::Id))
                    .col(string(Vessel::Name))
                    .col(string(Vessel::NameSearch))
                    .col(string(Vessel::Imo))
                    .col(string(Vessel::Flag))
                    .col(double(Vessel::Deadweight))
                    .col(double(Vessel::LengthOverall))
                    .col(double(Vessel::Beam))
                    .col(double(Vessel::Depth))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vessel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Vessel {
    Table,
    Id,
    Name,
    NameSearch,
    Imo,
    Flag,
    Deadweight,
    LengthOverall,
    Beam,
    Depth,
}
