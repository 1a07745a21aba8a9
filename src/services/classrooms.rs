//! Classroom service.

use super::Resource;
use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{Classroom, CreateClassroom, EntityKind, UpdateClassroom};

impl Resource for Classroom {
    const PATH: &'static str = "classrooms";
    const KIND: EntityKind = EntityKind::Classroom;

    type Create = CreateClassroom;
    type Update = UpdateClassroom;

    fn id(&self) -> i32 {
        self.id
    }

    fn label(&self) -> String {
        self.room_number.clone()
    }
}

/// List classrooms in a building.
pub async fn list_by_building(client: &ApiClient, building_id: i32) -> Result<Vec<Classroom>> {
    super::list_where(client, "building_id", building_id).await
}
