use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::camera::{Camera, CameraUpdate, NewCamera};
use crate::domain::types::CameraId;
use crate::models::camera::{Camera as DbCamera, CameraChangeset, NewCamera as DbNewCamera};
use crate::repository::{
    CameraListQuery, CameraReader, CameraWriter, DieselRepository, RepositoryError,
    RepositoryResult,
};

impl CameraReader for DieselRepository {
    fn list_cameras(&self, query: CameraListQuery) -> RepositoryResult<Vec<Camera>> {
        use crate::schema::cameras;

        let mut conn = self.conn()?;

        let mut items = cameras::table.into_boxed::<diesel::sqlite::Sqlite>();
        if let Some(recorder) = query.recorder {
            items = items.filter(cameras::recorder.eq(recorder.get()));
        }
        if let Some(status) = query.status {
            items = items.filter(cameras::status.eq(status.as_str()));
        }

        let items = items
            .order((cameras::recorder.asc(), cameras::slot.asc()))
            .load::<DbCamera>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Camera>, _>>()?;

        Ok(items)
    }

    fn get_camera_by_id(&self, id: CameraId) -> RepositoryResult<Option<Camera>> {
        use crate::schema::cameras;

        let mut conn = self.conn()?;

        let camera = cameras::table
            .filter(cameras::id.eq(id.to_string()))
            .first::<DbCamera>(&mut conn)
            .optional()?;

        let camera = camera.map(TryInto::try_into).transpose()?;
        Ok(camera)
    }
}

impl CameraWriter for DieselRepository {
    fn initialize_cameras(&self, cameras: &[NewCamera]) -> RepositoryResult<usize> {
        use crate::schema::cameras as cameras_table;

        let mut conn = self.conn()?;
        let rows: Vec<DbNewCamera> = cameras.iter().map(Into::into).collect();

        let created = conn.transaction::<_, RepositoryError, _>(|conn| {
            let existing = cameras_table::table.count().get_result::<i64>(conn)?;
            if existing > 0 {
                return Ok(0);
            }

            let created = diesel::insert_or_ignore_into(cameras_table::table)
                .values(&rows)
                .execute(conn)?;
            Ok(created)
        })?;

        Ok(created)
    }

    fn update_camera(
        &self,
        id: CameraId,
        update: &CameraUpdate,
        now: NaiveDateTime,
    ) -> RepositoryResult<Camera> {
        use crate::schema::cameras;

        let mut conn = self.conn()?;
        let changes = CameraChangeset {
            status: update.status.map(|s| s.as_str()),
            observation: update
                .observation
                .clone()
                .map(|o| o.map(|o| o.into_inner())),
            updated_at: now,
        };

        let camera = diesel::update(cameras::table.filter(cameras::id.eq(id.to_string())))
            .set(&changes)
            .get_result::<DbCamera>(&mut conn)?;

        Ok(camera.try_into()?)
    }
}
