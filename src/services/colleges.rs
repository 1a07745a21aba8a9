//! College service.

use super::Resource;
use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{College, CreateCollege, EntityKind, UpdateCollege};

impl Resource for College {
    const PATH: &'static str = "colleges";
    const KIND: EntityKind = EntityKind::College;

    type Create = CreateCollege;
    type Update = UpdateCollege;

    fn id(&self) -> i32 {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

/// List all colleges.
pub async fn list(client: &ApiClient) -> Result<Vec<College>> {
    super::list(client).await
}
