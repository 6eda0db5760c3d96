//! Vessel factory for creating test vessel entities.

use crate::{factory::helpers::next_id, fixture};
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

/// Factory for creating test vessels with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let vessel = VesselFactory::new(db).name("Titanic").build().await?;
/// ```
pub struct VesselFactory<'a, C: ConnectionTrait> {
    db: &'a C,
    name: String,
    imo: String,
    flag: String,
    deadweight: f64,
}

impl<'a, C: ConnectionTrait> VesselFactory<'a, C> {
    /// Creates a new factory with defaults: name `"Vessel {n}"`, a unique IMO number
    /// and the fixture's flag and dimensions.
    pub fn new(db: &'a C) -> Self {
        let id = next_id();
        let defaults = fixture::vessel::entity();
        Self {
            db,
            name: format!("Vessel {}", id),
            imo: format!("{:07}", 9_000_000 + id),
            flag: defaults.flag,
            deadweight: defaults.deadweight,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn imo(mut self, imo: impl Into<String>) -> Self {
        self.imo = imo.into();
        self
    }

    pub fn flag(mut self, flag: impl Into<String>) -> Self {
        self.flag = flag.into();
        self
    }

    pub fn deadweight(mut self, deadweight: f64) -> Self {
        self.deadweight = deadweight;
        self
    }

    /// Builds and inserts the vessel entity into the database.
    pub async fn build(self) -> Result<entity::vessel::Model, DbErr> {
        let defaults = fixture::vessel::entity();
        entity::vessel::ActiveModel {
            name_search: ActiveValue::Set(entity::vessel::name_search_key(&self.name)),
            name: ActiveValue::Set(self.name),
            imo: ActiveValue::Set(self.imo),
            flag: ActiveValue::Set(self.flag),
            deadweight: ActiveValue::Set(self.deadweight),
            length_overall: ActiveValue::Set(defaults.length_overall),
            beam: ActiveValue::Set(defaults.beam),
            depth: ActiveValue::Set(defaults.depth),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a vessel with default values.
pub async fn create_vessel<C: ConnectionTrait>(db: &C) -> Result<entity::vessel::Model, DbErr> {
    VesselFactory::new(db).build().await
}

/// Creates a vessel with a specific name.
pub async fn create_vessel_named<C: ConnectionTrait>(
    db: &C,
    name: impl Into<String>,
) -> Result<entity::vessel::Model, DbErr> {
    VesselFactory::new(db).name(name).build().await
}
