//! Per-entity service modules over a shared CRUD core.
//!
//! Every entity implements [`Resource`] in its own module, binding it to a
//! collection path and its create/update DTOs. The generic functions here do
//! the request plumbing; the entity modules add their filtered queries.

pub mod buildings;
pub mod classrooms;
pub mod colleges;
pub mod departments;
pub mod program_courses;
pub mod program_levels;
pub mod program_terms;
pub mod programs;
pub mod staff;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::info;

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::EntityKind;

/// A REST collection the dashboard manages.
pub trait Resource: DeserializeOwned + Clone + Send + 'static {
    /// Collection path segment, e.g. `"colleges"`.
    const PATH: &'static str;
    const KIND: EntityKind;

    type Create: Serialize + Send + Sync + 'static;
    type Update: Serialize + Send + Sync + 'static;

    fn id(&self) -> i32;

    /// Short text identifying the record in dialogs and logs.
    fn label(&self) -> String;
}

/// `/<path>/`
pub fn collection_path<R: Resource>() -> String {
    format!("/{}/", R::PATH)
}

/// `/<path>/<id>/`
pub fn item_path<R: Resource>(id: i32) -> String {
    format!("/{}/{}/", R::PATH, id)
}

/// List every record of a collection.
pub async fn list<R: Resource>(client: &ApiClient) -> Result<Vec<R>> {
    client.get_list(&collection_path::<R>(), &[]).await
}

/// List records whose foreign key `field` equals `value`.
pub async fn list_where<R: Resource>(client: &ApiClient, field: &str, value: i32) -> Result<Vec<R>> {
    client
        .get_list(&collection_path::<R>(), &[(field, value.to_string())])
        .await
}

/// Fetch one record by id.
pub async fn get<R: Resource>(client: &ApiClient, id: i32) -> Result<R> {
    client.get(&item_path::<R>(id)).await
}

/// Create a record and return it as stored by the API.
pub async fn create<R: Resource>(client: &ApiClient, data: &R::Create) -> Result<R> {
    let created: R = client.post(&collection_path::<R>(), data).await?;
    info!("Created {} '{}' (id {})", R::KIND.name(), created.label(), created.id());
    Ok(created)
}

/// Update the set fields of a record.
pub async fn update<R: Resource>(client: &ApiClient, id: i32, data: &R::Update) -> Result<R> {
    let updated: R = client.put(&item_path::<R>(id), data).await?;
    info!("Updated {} '{}' (id {})", R::KIND.name(), updated.label(), id);
    Ok(updated)
}

/// Delete a record by id.
pub async fn delete<R: Resource>(client: &ApiClient, id: i32) -> Result<()> {
    client.delete(&item_path::<R>(id)).await?;
    info!("Deleted {} {}", R::KIND.name(), id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Classroom, ProgramTerm};

    #[test]
    fn test_paths() {
        assert_eq!(collection_path::<Classroom>(), "/classrooms/");
        assert_eq!(item_path::<Classroom>(12), "/classrooms/12/");
        assert_eq!(item_path::<ProgramTerm>(3), "/program-terms/3/");
    }
}
