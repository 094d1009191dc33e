use mongodb::{Database, IndexModel};
use tracing::info;

use crate::models::{Organization, Project};

/// Creates both collections if missing and ensures their indexes.
/// Safe to call on every startup.
pub async fn ensure_schema(db: &Database) -> Result<(), mongodb::error::Error> {
    let existing = db.list_collection_names().await?;
    for name in [Organization::COLLECTION, Project::COLLECTION] {
        if !existing.iter().any(|c| c == name) {
            match db.create_collection(name).await {
                Ok(()) => info!(collection = name, "Collection created"),
                Err(e) if is_namespace_exists(&e) => {}
                Err(e) => return Err(e),
            }
        }
    }

    // Organizations
    create_indexes(
        db,
        Organization::COLLECTION,
        vec![index(bson::doc! { "name": 1 })],
    )
    .await?;

    // Projects
    create_indexes(
        db,
        Project::COLLECTION,
        vec![index(bson::doc! { "organization_id": 1, "inserted_at": -1 })],
    )
    .await?;

    info!("Store initialized");
    Ok(())
}

// Another instance created the collection between listing and creating.
fn is_namespace_exists(err: &mongodb::error::Error) -> bool {
    matches!(*err.kind, mongodb::error::ErrorKind::Command(ref cmd) if cmd.code == 48)
}

fn index(keys: bson::Document) -> IndexModel {
    IndexModel::builder().keys(keys).build()
}

async fn create_indexes(
    db: &Database,
    collection: &str,
    indexes: Vec<IndexModel>,
) -> Result<(), mongodb::error::Error> {
    db.collection::<bson::Document>(collection)
        .create_indexes(indexes)
        .await?;
    info!(collection, "Indexes created");
    Ok(())
}
