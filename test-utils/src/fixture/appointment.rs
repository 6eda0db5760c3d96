//! Appointment fixtures.
//!
//! Enum columns hold integer codes; the defaults below are all valid members
//! (import, loading, Santos, pending).

use chrono::{DateTime, Duration, TimeZone, Utc};
use entity::appointment;

pub const DEFAULT_TYPE: i32 = 0;
pub const DEFAULT_OPERATION_TYPE: i32 = 0;
pub const DEFAULT_PORT: i32 = 0;
pub const DEFAULT_STATUS: i32 = 0;

/// Base instant every fixture timestamp is derived from.
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// Creates an appointment model with default values, id `1`, for vessel `vessel_id`.
///
/// Milestones are spaced one day apart starting at `base_time()`:
/// first Brazilian port, arrival, berthing, sailing.
pub fn entity(vessel_id: i32) -> appointment::Model {
    let eta = base_time();

    appointment::Model {
        id: 1,
        appointment_type: DEFAULT_TYPE,
        vessel_id,
        duv_number: "DUV-0001".to_string(),
        schedule_number: "SCH-0001".to_string(),
        voyage_number: "V001".to_string(),
        next_ports: "Rio de Janeiro".to_string(),
        operation_type: DEFAULT_OPERATION_TYPE,
        cargo: "Containers".to_string(),
        port: DEFAULT_PORT,
        has_crew_change: false,
        on_signers: 0,
        off_signers: 0,
        estimated_time_of_arrival_on_first_brazilian_port: eta - Duration::days(1),
        estimated_time_of_arrival: eta,
        estimated_time_of_berthing: eta + Duration::days(1),
        estimated_time_of_sailing: eta + Duration::days(2),
        arrival: eta,
        berthing: eta + Duration::days(1),
        sailing: eta + Duration::days(2),
        status: DEFAULT_STATUS,
    }
}
