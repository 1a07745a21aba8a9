//! Building service.

use super::Resource;
use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{Building, CreateBuilding, EntityKind, UpdateBuilding};

impl Resource for Building {
    const PATH: &'static str = "buildings";
    const KIND: EntityKind = EntityKind::Building;

    type Create = CreateBuilding;
    type Update = UpdateBuilding;

    fn id(&self) -> i32 {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

/// List all buildings.
pub async fn list(client: &ApiClient) -> Result<Vec<Building>> {
    super::list(client).await
}
