use std::sync::Mutex;

use chrono::NaiveDateTime;

use crate::domain::camera::{Camera, CameraUpdate, NewCamera};
use crate::domain::occurrence::{NewOccurrence, Occurrence, OccurrenceUpdate};
use crate::domain::types::{CameraId, OccurrenceId};
use crate::repository::{
    CameraListQuery, CameraReader, CameraWriter, OccurrenceListQuery, OccurrenceReader,
    OccurrenceWriter, RepositoryError, RepositoryResult,
};

/// Simple in-memory repository used for unit tests.
#[derive(Default)]
pub struct TestRepository {
    cameras: Mutex<Vec<Camera>>,
    occurrences: Mutex<Vec<Occurrence>>,
    unavailable: bool,
}

impl TestRepository {
    pub fn new(cameras: Vec<Camera>, occurrences: Vec<Occurrence>) -> Self {
        Self {
            cameras: Mutex::new(cameras),
            occurrences: Mutex::new(occurrences),
            unavailable: false,
        }
    }

    /// A repository whose every call fails as if the store were unreachable.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    fn check(&self) -> RepositoryResult<()> {
        if self.unavailable {
            Err(RepositoryError::Unavailable("test store offline".to_string()))
        } else {
            Ok(())
        }
    }

    pub fn camera_count(&self) -> usize {
        self.cameras.lock().unwrap().len()
    }
}

impl CameraReader for TestRepository {
    fn list_cameras(&self, query: CameraListQuery) -> RepositoryResult<Vec<Camera>> {
        self.check()?;
        let mut items: Vec<Camera> = self
            .cameras
            .lock()
            .unwrap()
            .iter()
            .filter(|c| query.matches(c))
            .cloned()
            .collect();
        items.sort_by_key(|c| (c.recorder, c.slot));
        Ok(items)
    }

    fn get_camera_by_id(&self, id: CameraId) -> RepositoryResult<Option<Camera>> {
        self.check()?;
        Ok(self
            .cameras
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }
}

impl CameraWriter for TestRepository {
    fn initialize_cameras(&self, cameras: &[NewCamera]) -> RepositoryResult<usize> {
        self.check()?;
        let mut stored = self.cameras.lock().unwrap();
        if !stored.is_empty() {
            return Ok(0);
        }
        stored.extend(cameras.iter().cloned().map(Camera::from));
        Ok(cameras.len())
    }

    fn update_camera(
        &self,
        id: CameraId,
        update: &CameraUpdate,
        now: NaiveDateTime,
    ) -> RepositoryResult<Camera> {
        self.check()?;
        let mut stored = self.cameras.lock().unwrap();
        let camera = stored
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(RepositoryError::NotFound)?;
        update.apply_to(camera, now);
        Ok(camera.clone())
    }
}

impl OccurrenceReader for TestRepository {
    fn list_occurrences(&self, query: &OccurrenceListQuery) -> RepositoryResult<Vec<Occurrence>> {
        self.check()?;
        let mut items = self.occurrences.lock().unwrap().clone();
        items.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(query.apply(items))
    }

    fn get_occurrence_by_id(&self, id: &OccurrenceId) -> RepositoryResult<Option<Occurrence>> {
        self.check()?;
        Ok(self
            .occurrences
            .lock()
            .unwrap()
            .iter()
            .find(|o| &o.id == id)
            .cloned())
    }
}

impl OccurrenceWriter for TestRepository {
    fn create_occurrence(&self, occurrence: &NewOccurrence) -> RepositoryResult<Occurrence> {
        self.check()?;
        let stored: Occurrence = occurrence.clone().into();
        self.occurrences.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    fn update_occurrence(
        &self,
        id: &OccurrenceId,
        update: &OccurrenceUpdate,
        now: NaiveDateTime,
    ) -> RepositoryResult<Occurrence> {
        self.check()?;
        let mut stored = self.occurrences.lock().unwrap();
        let occurrence = stored
            .iter_mut()
            .find(|o| &o.id == id)
            .ok_or(RepositoryError::NotFound)?;
        update.apply_to(occurrence, now);
        Ok(occurrence.clone())
    }

    fn delete_occurrence(&self, id: &OccurrenceId) -> RepositoryResult<()> {
        self.check()?;
        let mut stored = self.occurrences.lock().unwrap();
        let before = stored.len();
        stored.retain(|o| &o.id != id);
        if stored.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
