use bson::{DateTime, doc};
use kanvas_db::models::{ActivityItem, Organization, Project, ProjectDraft, ProjectStatus};
use mongodb::Database;
use tracing::debug;

use super::base::{BaseDao, DaoError, DaoResult};
use crate::ids::{PROJECT_PREFIX, generate_id};

pub struct ProjectDao {
    pub base: BaseDao<Project>,
    pub organizations: BaseDao<Organization>,
}

impl ProjectDao {
    pub fn new(db: &Database) -> Self {
        Self {
            base: BaseDao::new(db, Project::COLLECTION),
            organizations: BaseDao::new(db, Organization::COLLECTION),
        }
    }

    /// Inserts a project with empty team and activity. The returned value is
    /// the one that was written, not a re-read.
    pub async fn create(&self, organization_id: &str, draft: ProjectDraft) -> DaoResult<Project> {
        // The store has no foreign keys; the owner must exist.
        if self.organizations.count(doc! { "_id": organization_id }).await? == 0 {
            return Err(DaoError::Validation(format!(
                "organization {organization_id} does not exist"
            )));
        }

        let project = draft.into_project(
            generate_id(PROJECT_PREFIX),
            organization_id.to_string(),
            DateTime::now(),
        );

        self.base.insert_one(&project).await?;
        Ok(project)
    }

    /// Projects of one organization, newest first.
    pub async fn find_by_organization(&self, organization_id: &str) -> DaoResult<Vec<Project>> {
        self.base
            .find_many(
                doc! { "organization_id": organization_id },
                Some(doc! { "inserted_at": -1, "_id": -1 }),
            )
            .await
    }

    /// Returns false when no project has this id.
    pub async fn update_status(&self, id: &str, status: ProjectStatus) -> DaoResult<bool> {
        let matched = self
            .base
            .update_by_id(id, doc! { "$set": { "status": status.as_str() } })
            .await?;
        debug!(project_id = id, status = status.as_str(), matched, "Updated project status");
        Ok(matched > 0)
    }

    /// Sets the status and prepends the matching feed entry in one update.
    /// Returns false when no project has this id; nothing is written then.
    pub async fn change_status(
        &self,
        id: &str,
        status: ProjectStatus,
        item: &ActivityItem,
    ) -> DaoResult<bool> {
        let item = bson::to_bson(item)?;
        let matched = self
            .base
            .update_by_id(
                id,
                doc! {
                    "$set": { "status": status.as_str() },
                    "$push": {
                        "activity": { "$each": [item], "$position": 0 }
                    }
                },
            )
            .await?;
        debug!(project_id = id, status = status.as_str(), matched, "Changed project status");
        Ok(matched > 0)
    }

    /// Prepends `item` to the activity feed in a single atomic update, so
    /// concurrent appends to the same project cannot overwrite each other.
    pub async fn prepend_activity(&self, id: &str, item: &ActivityItem) -> DaoResult<()> {
        let item = bson::to_bson(item)?;
        let matched = self
            .base
            .update_by_id(
                id,
                doc! {
                    "$push": {
                        "activity": { "$each": [item], "$position": 0 }
                    }
                },
            )
            .await?;

        if matched == 0 {
            return Err(DaoError::NotFound);
        }
        Ok(())
    }
}
