//! Query-string parameter objects for the listing endpoints.
//!
//! Values are normalized while binding: page sizes are clamped, page indexes start at 1
//! and vessel search terms are lower-cased, so every specification built from these
//! types only ever sees valid input. Parameter names are camelCase and also accept the
//! PascalCase spelling (`PageSize`, `VesselId`, ...).

use serde::{Deserialize, Deserializer};

pub const MIN_PAGE_SIZE: u64 = 2;
pub const MAX_PAGE_SIZE: u64 = 50;
pub const DEFAULT_PAGE_SIZE: u64 = 30;
pub const DEFAULT_PAGE_INDEX: u64 = 1;

/// SQL offsets are bound as signed 64-bit integers.
const MAX_OFFSET: u64 = i64::MAX as u64;

/// Number of items per page, always within `MIN_PAGE_SIZE..=MAX_PAGE_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(u64);

impl PageSize {
    /// Clamps `value` into the allowed range.
    pub fn new(value: i64) -> Self {
        Self(value.clamp(MIN_PAGE_SIZE as i64, MAX_PAGE_SIZE as i64) as u64)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(DEFAULT_PAGE_SIZE)
    }
}

impl<'de> Deserialize<'de> for PageSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Self::new(i64::deserialize(deserializer)?))
    }
}

/// 1-based page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationParams {
    pub page_index: u64,
    pub page_size: PageSize,
}

impl PaginationParams {
    /// Creates a page window; indexes below 1 are treated as the first page.
    pub fn new(page_index: u64, page_size: PageSize) -> Self {
        Self {
            page_index: page_index.max(DEFAULT_PAGE_INDEX),
            page_size,
        }
    }

    /// Number of rows preceding this page, saturating at the largest offset the
    /// database accepts so far-away pages simply come back empty.
    pub fn skip(&self) -> u64 {
        self.page_size
            .get()
            .saturating_mul(self.page_index - 1)
            .min(MAX_OFFSET)
    }

    pub fn take(&self) -> u64 {
        self.page_size.get()
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_INDEX, PageSize::default())
    }
}

fn default_page_index() -> u64 {
    DEFAULT_PAGE_INDEX
}

fn deserialize_page_index<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = i64::deserialize(deserializer)?;
    Ok(value.max(DEFAULT_PAGE_INDEX as i64) as u64)
}

fn deserialize_lowercase<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.map(|term| term.to_lowercase()))
}

/// Filters for the appointment listing.
///
/// `port` and `appointment_type` are kept as raw codes: an unknown code still
/// filters, it simply matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentsSpecificationParams {
    #[serde(default, alias = "VesselId")]
    pub vessel_id: Option<i32>,
    #[serde(default, rename = "type", alias = "Type")]
    pub appointment_type: Option<i32>,
    #[serde(default, alias = "Port")]
    pub port: Option<i32>,
    #[serde(default, alias = "Done")]
    pub done: bool,
    #[serde(default, alias = "Cancelled")]
    pub cancelled: bool,
}

impl AppointmentsSpecificationParams {
    /// Whether any filter field is set.
    pub fn has_filter(&self) -> bool {
        self.vessel_id.is_some()
            || self.appointment_type.is_some()
            || self.port.is_some()
            || self.done
            || self.cancelled
    }
}

/// Filter and page window for the task listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TasksSpecificationParams {
    #[serde(default, alias = "AppointmentId")]
    pub appointment_id: Option<i32>,
    #[serde(
        default = "default_page_index",
        alias = "PageIndex",
        deserialize_with = "deserialize_page_index"
    )]
    pub page_index: u64,
    #[serde(default, alias = "PageSize")]
    pub page_size: PageSize,
}

impl TasksSpecificationParams {
    pub fn pagination(&self) -> PaginationParams {
        PaginationParams::new(self.page_index, self.page_size)
    }
}

impl Default for TasksSpecificationParams {
    fn default() -> Self {
        Self {
            appointment_id: None,
            page_index: DEFAULT_PAGE_INDEX,
            page_size: PageSize::default(),
        }
    }
}

/// Search term for the vessel listing, lower-cased on binding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VesselsSpecificationParams {
    #[serde(default, alias = "NameSearch", deserialize_with = "deserialize_lowercase")]
    name_search: Option<String>,
}

impl VesselsSpecificationParams {
    pub fn new(name_search: impl Into<String>) -> Self {
        Self {
            name_search: Some(name_search.into().to_lowercase()),
        }
    }

    /// Lower-cased search term, `None` when absent or empty.
    pub fn name_search(&self) -> Option<&str> {
        self.name_search.as_deref().filter(|term| !term.is_empty())
    }
}
