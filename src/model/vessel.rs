use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VesselDto {
    pub id: i32,
    pub name: String,
    pub imo: String,
    pub flag: String,
    pub deadweight: f64,
    pub length_overall: f64,
    pub beam: f64,
    pub depth: f64,
}

/// Request body for registering or updating a vessel.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterOrUpdateVesselDto {
    pub name: String,
    pub imo: String,
    pub flag: String,
    pub deadweight: f64,
    pub length_overall: f64,
    pub beam: f64,
    pub depth: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct VesselsDto {
    pub vessels: Vec<VesselDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct VesselToReturnDto {
    pub vessel: VesselDto,
}
