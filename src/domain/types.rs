//! Strongly-typed value objects used by domain entities.
//!
//! Domain structs should carry these wrappers instead of raw primitives so that
//! identifiers, text values, fleet positions and the closed vocabularies of the
//! monitoring room are enforced at the boundary.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Number of network video recorders in the fleet.
pub const RECORDER_COUNT: i32 = 9;
/// Number of camera slots served by every recorder.
pub const CAMERAS_PER_RECORDER: i32 = 32;
/// Total number of cameras once the registry is initialized.
pub const FLEET_SIZE: usize = (RECORDER_COUNT * CAMERAS_PER_RECORDER) as usize;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// A string was empty or whitespace-only after trimming.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// A bounded integer fell outside its inclusive range.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: i32,
        max: i32,
        value: i32,
    },
    /// A camera identifier did not follow the `NVR{n}-CAM{nn}` layout.
    #[error("invalid camera id: {0}")]
    InvalidCameraId(String),
    /// A value is not part of a closed vocabulary.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

fn trim_and_require_non_empty<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else {
        Ok(trimmed)
    }
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                trim_and_require_non_empty(value, $field).map(Self)
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                self.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }

        impl PartialEq<$name> for &str {
            fn eq(&self, other: &$name) -> bool {
                *self == other.as_str()
            }
        }
    };
}

macro_rules! bounded_i32_newtype {
    ($name:ident, $doc:expr, $field:expr, $min:expr, $max:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        #[serde(try_from = "i32", into = "i32")]
        pub struct $name(i32);

        impl $name {
            /// Smallest accepted value.
            pub const MIN: i32 = $min;
            /// Largest accepted value.
            pub const MAX: i32 = $max;

            /// Constructs a value inside the inclusive range.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if (Self::MIN..=Self::MAX).contains(&value) {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::OutOfRange {
                        field: $field,
                        min: Self::MIN,
                        max: Self::MAX,
                        value,
                    })
                }
            }

            /// Returns the raw `i32` value.
            pub const fn get(self) -> i32 {
                self.0
            }

            /// Iterates over every valid value in ascending order.
            pub fn all() -> impl Iterator<Item = Self> {
                (Self::MIN..=Self::MAX).map(Self)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<i32> for $name {
            fn eq(&self, other: &i32) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<$name> for i32 {
            fn eq(&self, other: &$name) -> bool {
                *self == other.0
            }
        }
    };
}

/// Closed vocabulary persisted by variant name and shown to operators by label.
///
/// Parsing is case-insensitive and accepts either form so that records typed
/// in the room's own language round-trip.
macro_rules! labelled_enum {
    ($name:ident, $doc:expr, $field:expr, { $($variant:ident => $label:expr),+ $(,)? }) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every variant in declaration order.
            pub const ALL: &'static [$name] = &[$(Self::$variant),+];

            /// String representation used in persistence and the JSON API.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),+
                }
            }

            /// Display label used in the monitoring room.
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                let needle = value.trim().to_lowercase();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| {
                        v.as_str().to_lowercase() == needle || v.label().to_lowercase() == needle
                    })
                    .ok_or_else(|| {
                        TypeConstraintError::InvalidValue(format!("{}: {}", $field, value.trim()))
                    })
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::try_from(value.as_str())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }
    };
}

bounded_i32_newtype!(
    RecorderNumber,
    "Network video recorder number (1..=9).",
    "recorder",
    1,
    RECORDER_COUNT
);
bounded_i32_newtype!(
    CameraSlot,
    "Camera slot on a recorder (1..=32).",
    "slot",
    1,
    CAMERAS_PER_RECORDER
);

/// Deterministic camera identity, rendered as `NVR{recorder}-CAM{slot:02}`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
pub struct CameraId {
    recorder: RecorderNumber,
    slot: CameraSlot,
}

impl CameraId {
    /// Derives the identifier of the camera sitting at `(recorder, slot)`.
    pub const fn from_position(recorder: RecorderNumber, slot: CameraSlot) -> Self {
        Self { recorder, slot }
    }

    /// Parses an identifier such as `NVR3-CAM07`.
    pub fn new(value: &str) -> Result<Self, TypeConstraintError> {
        let raw = value.trim();
        let invalid = || TypeConstraintError::InvalidCameraId(raw.to_string());

        let (recorder, slot) = raw
            .strip_prefix("NVR")
            .and_then(|rest| rest.split_once("-CAM"))
            .ok_or_else(invalid)?;

        if slot.len() != 2 || !slot.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        // The recorder number carries no padding, so `NVR03` is not an alias.
        if recorder.is_empty()
            || recorder.starts_with('0')
            || !recorder.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let recorder = recorder.parse::<i32>().map_err(|_| invalid())?;
        let slot = slot.parse::<i32>().map_err(|_| invalid())?;

        Ok(Self {
            recorder: RecorderNumber::new(recorder)?,
            slot: CameraSlot::new(slot)?,
        })
    }

    pub const fn recorder(self) -> RecorderNumber {
        self.recorder
    }

    pub const fn slot(self) -> CameraSlot {
        self.slot
    }
}

impl Display for CameraId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "NVR{}-CAM{:02}", self.recorder.get(), self.slot.get())
    }
}

impl TryFrom<String> for CameraId {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl TryFrom<&str> for CameraId {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CameraId> for String {
    fn from(value: CameraId) -> Self {
        value.to_string()
    }
}

non_empty_string_newtype!(
    OccurrenceId,
    "Opaque occurrence identifier, time-ordered when generated here.",
    "occurrence id"
);

impl OccurrenceId {
    /// Generates a fresh UUIDv7 token.
    pub fn generate() -> Self {
        Self(uuid::Uuid::now_v7().to_string())
    }
}

non_empty_string_newtype!(
    Location,
    "Place where an occurrence happened.",
    "location"
);
non_empty_string_newtype!(
    CameraReference,
    "Free-text camera reference typed by the operator.",
    "camera"
);
non_empty_string_newtype!(
    TechnicalDescription,
    "Technical narrative of an occurrence.",
    "technical description"
);
non_empty_string_newtype!(
    ActionTaken,
    "Action taken by the operator.",
    "action taken"
);
non_empty_string_newtype!(
    AgenciesContacted,
    "External agencies contacted about an occurrence.",
    "agencies contacted"
);
non_empty_string_newtype!(
    CameraObservation,
    "Operator note attached to a camera.",
    "observation"
);

labelled_enum!(CameraStatus, "Health status of a camera.", "camera status", {
    Online => "Online",
    Offline => "Offline",
    Defective => "Defeito",
});

labelled_enum!(
    Classification,
    "Lifecycle status of an occurrence.",
    "classification",
    {
        InProgress => "Em andamento",
        Closed => "Encerrada",
    }
);

labelled_enum!(Shift, "Operator shift.", "shift", {
    Day => "Diurno",
    Night => "Noturno",
});

labelled_enum!(Operator, "Operators on the monitoring roster.", "operator", {
    Wagner => "Wagner",
    Ernesto => "Ernesto",
    Glaucia => "Glaucia",
    Arnaldo => "Arnaldo",
});

labelled_enum!(
    OccurrenceType,
    "Incident category of an occurrence.",
    "occurrence type",
    {
        SuspiciousMovement => "Movimento suspeito",
        UnauthorizedAccess => "Acesso não autorizado",
        AttemptedTheft => "Tentativa de furto",
        Theft => "Furto consumado",
        Vandalism => "Vandalismo",
        PerimeterBreach => "Violação de perímetro",
        AlarmTriggered => "Alarme disparado",
        EquipmentFailure => "Falha de equipamento",
        OperationalSupport => "Apoio operacional",
        Accident => "Acidente",
        Disturbance => "Confusão",
        Other => "Outros",
    }
);
