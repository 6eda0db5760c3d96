//! Vessel fixtures.

use entity::vessel;

pub const DEFAULT_NAME: &str = "Test Vessel";
pub const DEFAULT_IMO: &str = "9321483";
pub const DEFAULT_FLAG: &str = "Panama";

/// Creates a vessel model with default values and id `1`.
pub fn entity() -> vessel::Model {
    vessel::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        name_search: vessel::name_search_key(DEFAULT_NAME),
        imo: DEFAULT_IMO.to_string(),
        flag: DEFAULT_FLAG.to_string(),
        deadweight: 75_000.0,
        length_overall: 225.0,
        beam: 32.2,
        depth: 19.6,
    }
}
