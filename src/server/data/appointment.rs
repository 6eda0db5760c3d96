//! Appointment reads with eager-loaded relations.

use entity::{appointment, task, vessel};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::collections::HashMap;

use super::repository::Repository;
use crate::server::{
    model::appointment::AppointmentWithRelations,
    specification::{appointment::AppointmentInclude, CountSpecification, Specification},
};

/// Most ids bound into a single `IN (...)` list, kept well below SQLite's variable limit.
pub(crate) const RELATION_BATCH_SIZE: usize = 500;

/// Executes appointment specifications and resolves their includes.
///
/// Relations are fetched with `IN` queries of at most `RELATION_BATCH_SIZE` ids per
/// include rather than one query per row, then stitched onto the appointments in memory.
pub struct AppointmentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
    rows: Repository<'a, C, appointment::Entity>,
}

impl<'a, C: ConnectionTrait> AppointmentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self {
            db,
            rows: Repository::new(db),
        }
    }

    pub async fn list_with_spec(
        &self,
        spec: &Specification<appointment::Entity>,
    ) -> Result<Vec<AppointmentWithRelations>, DbErr> {
        let appointments = self.rows.list_with_spec(spec).await?;

        self.hydrate(appointments, spec.includes()).await
    }

    pub async fn get_with_spec(
        &self,
        spec: &Specification<appointment::Entity>,
    ) -> Result<Option<AppointmentWithRelations>, DbErr> {
        let Some(appointment) = self.rows.get_entity_with_spec(spec).await? else {
            return Ok(None);
        };

        Ok(self
            .hydrate(vec![appointment], spec.includes())
            .await?
            .into_iter()
            .next())
    }

    pub async fn count(&self, spec: &CountSpecification<appointment::Entity>) -> Result<u64, DbErr> {
        self.rows.count(spec).await
    }

    async fn hydrate(
        &self,
        appointments: Vec<appointment::Model>,
        includes: &[AppointmentInclude],
    ) -> Result<Vec<AppointmentWithRelations>, DbErr> {
        if appointments.is_empty() {
            return Ok(Vec::new());
        }

        let mut vessels: HashMap<i32, vessel::Model> = HashMap::new();
        if includes.contains(&AppointmentInclude::Vessel) {
            let mut vessel_ids: Vec<i32> = appointments.iter().map(|a| a.vessel_id).collect();
            vessel_ids.sort_unstable();
            vessel_ids.dedup();

            for chunk in vessel_ids.chunks(RELATION_BATCH_SIZE) {
                let rows = vessel::Entity::find()
                    .filter(vessel::Column::Id.is_in(chunk.iter().copied()))
                    .all(self.db)
                    .await?;
                vessels.extend(rows.into_iter().map(|v| (v.id, v)));
            }
        }

        let mut tasks: HashMap<i32, Vec<task::Model>> = HashMap::new();
        if includes.contains(&AppointmentInclude::Tasks) {
            let appointment_ids: Vec<i32> = appointments.iter().map(|a| a.id).collect();

            // Status first so each appointment's tasks arrive already in display order.
            // An appointment's tasks never span two chunks.
            for chunk in appointment_ids.chunks(RELATION_BATCH_SIZE) {
                let rows = task::Entity::find()
                    .filter(task::Column::AppointmentId.is_in(chunk.iter().copied()))
                    .order_by_asc(task::Column::Status)
                    .order_by_asc(task::Column::Id)
                    .all(self.db)
                    .await?;

                for row in rows {
                    tasks.entry(row.appointment_id).or_default().push(row);
                }
            }
        }

        Ok(appointments
            .into_iter()
            .map(|appointment| AppointmentWithRelations {
                vessel: vessels.get(&appointment.vessel_id).cloned(),
                tasks: tasks.remove(&appointment.id).unwrap_or_default(),
                appointment,
            })
            .collect())
    }
}
