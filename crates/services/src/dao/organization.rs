use bson::doc;
use kanvas_db::models::{Organization, Plan};
use mongodb::Database;

use super::base::{BaseDao, DaoResult};
use crate::ids::{ORGANIZATION_PREFIX, generate_id};

pub struct OrganizationDao {
    pub base: BaseDao<Organization>,
}

impl OrganizationDao {
    pub fn new(db: &Database) -> Self {
        Self {
            base: BaseDao::new(db, Organization::COLLECTION),
        }
    }

    pub async fn create(&self, name: String, logo: String, plan: Plan) -> DaoResult<Organization> {
        let organization = Organization {
            id: generate_id(ORGANIZATION_PREFIX),
            name,
            logo,
            plan,
        };

        self.base.insert_one(&organization).await?;
        Ok(organization)
    }

    pub async fn find_all_by_name(&self) -> DaoResult<Vec<Organization>> {
        self.base
            .find_many(doc! {}, Some(doc! { "name": 1, "_id": 1 }))
            .await
    }
}
