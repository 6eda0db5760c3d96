//! Closed enumerations stored as integer codes.
//!
//! Every enum converts from its code through an explicit `match`, so unknown codes are
//! rejected instead of being carried around as undefined members. Request payloads are
//! checked with [`EnumCode::parse`]; rows read back from the database go through
//! [`EnumCode::from_stored`].

use crate::server::error::{internal::InternalError, validation::ValidationError};

/// Conversion between an enum and its persisted integer code.
pub trait EnumCode: Sized + Copy {
    /// Field name used in validation messages.
    const FIELD: &'static str;

    fn from_code(code: i32) -> Option<Self>;

    fn code(self) -> i32;

    /// Parses a code received from a client.
    fn parse(code: i32) -> Result<Self, ValidationError> {
        Self::from_code(code).ok_or(ValidationError::InvalidEnumValue {
            field: Self::FIELD,
            value: code,
        })
    }

    /// Parses a code read from the database.
    fn from_stored(code: i32) -> Result<Self, InternalError> {
        Self::from_code(code).ok_or(InternalError::UnknownStoredCode {
            column: Self::FIELD,
            value: code,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AppointmentType {
    Import = 0,
    Export = 1,
    Cabotage = 2,
    Transshipment = 3,
}

impl EnumCode for AppointmentType {
    const FIELD: &'static str = "type";

    fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Import),
            1 => Some(Self::Export),
            2 => Some(Self::Cabotage),
            3 => Some(Self::Transshipment),
            _ => None,
        }
    }

    fn code(self) -> i32 {
        self as i32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OperationType {
    Loading = 0,
    Discharging = 1,
    LoadingAndDischarging = 2,
    Bunkering = 3,
}

impl EnumCode for OperationType {
    const FIELD: &'static str = "operationType";

    fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Loading),
            1 => Some(Self::Discharging),
            2 => Some(Self::LoadingAndDischarging),
            3 => Some(Self::Bunkering),
            _ => None,
        }
    }

    fn code(self) -> i32 {
        self as i32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Port {
    Santos = 0,
    RioDeJaneiro = 1,
    Paranagua = 2,
    RioGrande = 3,
    Itajai = 4,
    Suape = 5,
    Salvador = 6,
}

impl EnumCode for Port {
    const FIELD: &'static str = "port";

    fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Santos),
            1 => Some(Self::RioDeJaneiro),
            2 => Some(Self::Paranagua),
            3 => Some(Self::RioGrande),
            4 => Some(Self::Itajai),
            5 => Some(Self::Suape),
            6 => Some(Self::Salvador),
            _ => None,
        }
    }

    fn code(self) -> i32 {
        self as i32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum AppointmentStatus {
    #[default]
    Pending = 0,
    InProgress = 1,
    Done = 2,
    Cancelled = 3,
}

impl EnumCode for AppointmentStatus {
    const FIELD: &'static str = "status";

    fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Pending),
            1 => Some(Self::InProgress),
            2 => Some(Self::Done),
            3 => Some(Self::Cancelled),
            _ => None,
        }
    }

    fn code(self) -> i32 {
        self as i32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TaskStatus {
    Pending = 0,
    InProgress = 1,
    Done = 2,
}

impl EnumCode for TaskStatus {
    const FIELD: &'static str = "status";

    fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Pending),
            1 => Some(Self::InProgress),
            2 => Some(Self::Done),
            _ => None,
        }
    }

    fn code(self) -> i32 {
        self as i32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WhenToComplete {
    BeforeArrival = 0,
    BeforeBerthing = 1,
    BeforeSailing = 2,
    AfterSailing = 3,
}

impl EnumCode for WhenToComplete {
    const FIELD: &'static str = "whenToComplete";

    fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::BeforeArrival),
            1 => Some(Self::BeforeBerthing),
            2 => Some(Self::BeforeSailing),
            3 => Some(Self::AfterSailing),
            _ => None,
        }
    }

    fn code(self) -> i32 {
        self as i32
    }
}
