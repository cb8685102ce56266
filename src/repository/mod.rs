use chrono::NaiveDateTime;

use crate::db::{DbConnection, DbPool};
use crate::domain::camera::{Camera, CameraUpdate, NewCamera};
use crate::domain::occurrence::{NewOccurrence, Occurrence, OccurrenceUpdate};
use crate::domain::types::{
    CameraId, CameraStatus, Classification, OccurrenceId, OccurrenceType, RecorderNumber,
    TypeConstraintError,
};

pub mod camera;
pub mod errors;
pub mod occurrence;
#[cfg(test)]
pub mod test;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Query parameters used when listing cameras.
#[derive(Debug, Clone, Copy, Default)]
pub struct CameraListQuery {
    /// Restrict to one recorder group.
    pub recorder: Option<RecorderNumber>,
    /// Restrict to one health status.
    pub status: Option<CameraStatus>,
}

impl CameraListQuery {
    pub fn recorder(mut self, recorder: RecorderNumber) -> Self {
        self.recorder = Some(recorder);
        self
    }
    pub fn status(mut self, status: CameraStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn matches(&self, camera: &Camera) -> bool {
        self.recorder.is_none_or(|r| camera.recorder == r)
            && self.status.is_none_or(|s| camera.status == s)
    }
}

/// Text field of an occurrence that free-text search looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    Location,
    Camera,
    TechnicalDescription,
}

impl SearchField {
    fn value(self, occurrence: &Occurrence) -> &str {
        match self {
            Self::Location => occurrence.location.as_str(),
            Self::Camera => occurrence.camera.as_str(),
            Self::TechnicalDescription => occurrence.technical_description.as_str(),
        }
    }
}

impl TryFrom<&str> for SearchField {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "location" => Ok(Self::Location),
            "camera" => Ok(Self::Camera),
            "technical_description" | "technicaldescription" => Ok(Self::TechnicalDescription),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "search field: {other}"
            ))),
        }
    }
}

/// Query parameters used when listing occurrences.
///
/// All provided filters combine with AND; absent or empty ones impose no
/// constraint. Results are ordered newest first by `created_at`.
#[derive(Debug, Clone)]
pub struct OccurrenceListQuery {
    /// Case-insensitive substring searched in `search_fields`.
    pub search: Option<String>,
    /// Fields the search looks at; a match in any of them counts.
    pub search_fields: Vec<SearchField>,
    /// Exact incident category.
    pub occurrence_type: Option<OccurrenceType>,
    /// Exact classification.
    pub classification: Option<Classification>,
    /// Set when a filter value can never match a stored occurrence.
    pub match_nothing: bool,
}

impl Default for OccurrenceListQuery {
    fn default() -> Self {
        Self {
            search: None,
            search_fields: vec![SearchField::Location],
            occurrence_type: None,
            classification: None,
            match_nothing: false,
        }
    }
}

impl OccurrenceListQuery {
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
    pub fn search_in(mut self, fields: Vec<SearchField>) -> Self {
        if !fields.is_empty() {
            self.search_fields = fields;
        }
        self
    }
    pub fn occurrence_type(mut self, occurrence_type: OccurrenceType) -> Self {
        self.occurrence_type = Some(occurrence_type);
        self
    }
    pub fn classification(mut self, classification: Classification) -> Self {
        self.classification = Some(classification);
        self
    }
    /// Makes the query yield an empty result, e.g. for an unknown type.
    pub fn match_nothing(mut self) -> Self {
        self.match_nothing = true;
        self
    }

    /// Lowercased search needle, or `None` when the search is blank.
    ///
    /// Only blankness is decided on the trimmed text; the needle itself keeps
    /// its surrounding spaces.
    fn needle(&self) -> Option<String> {
        self.search
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(str::to_lowercase)
    }

    /// Whether `occurrence` satisfies every provided filter.
    pub fn matches(&self, occurrence: &Occurrence) -> bool {
        !self.match_nothing
            && self
                .occurrence_type
                .is_none_or(|t| occurrence.occurrence_type == t)
            && self
                .classification
                .is_none_or(|c| occurrence.classification == c)
            && self.needle().is_none_or(|needle| {
                self.search_fields
                    .iter()
                    .any(|field| field.value(occurrence).to_lowercase().contains(&needle))
            })
    }

    /// Keeps the matching occurrences, preserving input order.
    pub fn apply(&self, occurrences: Vec<Occurrence>) -> Vec<Occurrence> {
        occurrences.into_iter().filter(|o| self.matches(o)).collect()
    }
}

/// Read-only operations over the camera registry.
pub trait CameraReader {
    /// List cameras matching the query, ordered by recorder then slot.
    fn list_cameras(&self, query: CameraListQuery) -> RepositoryResult<Vec<Camera>>;
    /// Retrieve a camera by its identifier.
    fn get_camera_by_id(&self, id: CameraId) -> RepositoryResult<Option<Camera>>;
}

/// Write operations over the camera registry.
pub trait CameraWriter {
    /// Insert the fleet unless the registry already holds any camera.
    ///
    /// Returns the number of cameras created, `0` when nothing was done.
    fn initialize_cameras(&self, cameras: &[NewCamera]) -> RepositoryResult<usize>;
    /// Apply a partial update and return the stored camera.
    ///
    /// Fails with [`RepositoryError::NotFound`] when `id` is absent.
    fn update_camera(
        &self,
        id: CameraId,
        update: &CameraUpdate,
        now: NaiveDateTime,
    ) -> RepositoryResult<Camera>;
}

/// Read-only operations over the occurrence log.
pub trait OccurrenceReader {
    /// List occurrences matching the query, newest first.
    fn list_occurrences(&self, query: &OccurrenceListQuery) -> RepositoryResult<Vec<Occurrence>>;
    /// Retrieve an occurrence by its identifier.
    fn get_occurrence_by_id(&self, id: &OccurrenceId) -> RepositoryResult<Option<Occurrence>>;
}

/// Write operations over the occurrence log.
pub trait OccurrenceWriter {
    /// Persist a new occurrence and return it.
    fn create_occurrence(&self, occurrence: &NewOccurrence) -> RepositoryResult<Occurrence>;
    /// Merge a partial update and return the stored occurrence.
    ///
    /// Fails with [`RepositoryError::NotFound`] when `id` is absent.
    fn update_occurrence(
        &self,
        id: &OccurrenceId,
        update: &OccurrenceUpdate,
        now: NaiveDateTime,
    ) -> RepositoryResult<Occurrence>;
    /// Remove an occurrence.
    ///
    /// Fails with [`RepositoryError::NotFound`] when `id` is absent, including
    /// when it was already deleted.
    fn delete_occurrence(&self, id: &OccurrenceId) -> RepositoryResult<()>;
}
