use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "vessel")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// `name` folded with full Unicode lower-casing, the column vessel searches match on.
    pub name_search: String,
    pub imo: String,
    pub flag: String,
    pub deadweight: f64,
    pub length_overall: f64,
    pub beam: f64,
    pub depth: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::appointment::Entity")]
    Appointment,
}

impl Related<super::appointment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Appointment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Search key stored in `name_search` for a vessel called `name`.
pub fn name_search_key(name: &str) -> String {
    name.to_lowercase()
}
