//! Task fixtures.

use chrono::Duration;
use entity::task;

use crate::fixture::appointment::base_time;

pub const DEFAULT_NAME: &str = "Send pre-arrival documents";
pub const DEFAULT_STATUS: i32 = 0;
pub const DEFAULT_WHEN_TO_COMPLETE: i32 = 0;

/// Creates a task model with default values, id `1`, owned by `appointment_id`.
pub fn entity(appointment_id: i32) -> task::Model {
    task::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        description: "Submit crew list and cargo manifest to the agency".to_string(),
        deadline: base_time() - Duration::hours(12),
        status: DEFAULT_STATUS,
        when_to_complete: DEFAULT_WHEN_TO_COMPLETE,
        appointment_id,
    }
}
