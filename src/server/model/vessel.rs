//! Vessel domain model and write parameters.

use sea_orm::ActiveValue;

use crate::{
    model::vessel::{RegisterOrUpdateVesselDto, VesselDto},
    server::error::validation::ValidationError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Vessel {
    pub id: i32,
    pub name: String,
    pub imo: String,
    pub flag: String,
    pub deadweight: f64,
    pub length_overall: f64,
    pub beam: f64,
    pub depth: f64,
}

impl Vessel {
    pub fn from_entity(entity: entity::vessel::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            imo: entity.imo,
            flag: entity.flag,
            deadweight: entity.deadweight,
            length_overall: entity.length_overall,
            beam: entity.beam,
            depth: entity.depth,
        }
    }

    pub fn into_dto(self) -> VesselDto {
        VesselDto {
            id: self.id,
            name: self.name,
            imo: self.imo,
            flag: self.flag,
            deadweight: self.deadweight,
            length_overall: self.length_overall,
            beam: self.beam,
            depth: self.depth,
        }
    }
}

/// Fields written when registering or updating a vessel.
#[derive(Debug, Clone, PartialEq)]
pub struct VesselParams {
    pub name: String,
    pub imo: String,
    pub flag: String,
    pub deadweight: f64,
    pub length_overall: f64,
    pub beam: f64,
    pub depth: f64,
}

impl VesselParams {
    /// Validates the request body. The vessel name is required.
    pub fn from_dto(dto: RegisterOrUpdateVesselDto) -> Result<Self, ValidationError> {
        if dto.name.trim().is_empty() {
            return Err(ValidationError::EmptyField("name"));
        }

        Ok(Self {
            name: dto.name,
            imo: dto.imo,
            flag: dto.flag,
            deadweight: dto.deadweight,
            length_overall: dto.length_overall,
            beam: dto.beam,
            depth: dto.depth,
        })
    }

    /// Overwrites every mapped column of `model`.
    pub fn apply(self, model: &mut entity::vessel::ActiveModel) {
        model.name_search = ActiveValue::Set(entity::vessel::name_search_key(&self.name));
        model.name = ActiveValue::Set(self.name);
        model.imo = ActiveValue::Set(self.imo);
        model.flag = ActiveValue::Set(self.flag);
        model.deadweight = ActiveValue::Set(self.deadweight);
        model.length_overall = ActiveValue::Set(self.length_overall);
        model.beam = ActiveValue::Set(self.beam);
        model.depth = ActiveValue::Set(self.depth);
    }
}
