use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "appointment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
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
    pub estimated_time_of_arrival_on_first_brazilian_port: DateTimeUtc,
    pub estimated_time_of_arrival: DateTimeUtc,
    pub estimated_time_of_berthing: DateTimeUtc,
    pub estimated_time_of_sailing: DateTimeUtc,
    pub arrival: DateTimeUtc,
    pub berthing: DateTimeUtc,
    pub sailing: DateTimeUtc,
    #[sea_orm(default_value = 0)]
    pub status: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::vessel::Entity",
        from = "Column::VesselId",
        to = "super::vessel::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Vessel,
    #[sea_orm(has_many = "super::task::Entity")]
    Task,
}

impl Related<super::vessel::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vessel.def()
    }
}

impl Related<super::task::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Task.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
