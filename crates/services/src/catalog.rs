//! Data access facade over organizations and projects.
//!
//! Reads never fail because the store is down: they fall back to the sample
//! dataset and say so through [`DataSource::Mock`]. Writes against a live
//! store propagate their errors; without a store they only build the value
//! in memory.

use bson::DateTime;
use kanvas_db::{
    StoreHandle, UnavailableReason,
    fixtures::sample_organizations,
    models::{
        ActivityItem, Organization, OrganizationWithProjects, Plan, Project, ProjectDraft,
        ProjectStatus,
    },
};
use serde::Serialize;
use tracing::{info, warn};

use crate::dao::{DaoError, DaoResult, OrganizationDao, ProjectDao};
use crate::ids::{ORGANIZATION_PREFIX, PROJECT_PREFIX, generate_id};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    /// Authoritative data from the store.
    Live,
    /// Sample data, or a write that was not persisted.
    Mock,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sourced<T> {
    pub data: T,
    pub source: DataSource,
}

impl<T> Sourced<T> {
    fn live(data: T) -> Self {
        Self {
            data,
            source: DataSource::Live,
        }
    }

    fn mock(data: T) -> Self {
        Self {
            data,
            source: DataSource::Mock,
        }
    }
}

enum Backend {
    Live {
        organizations: OrganizationDao,
        projects: ProjectDao,
    },
    Degraded(UnavailableReason),
}

pub struct Catalog {
    backend: Backend,
}

impl Catalog {
    pub fn new(store: StoreHandle) -> Self {
        let backend = match store {
            StoreHandle::Connected(db) => Backend::Live {
                organizations: OrganizationDao::new(&db),
                projects: ProjectDao::new(&db),
            },
            StoreHandle::Unavailable(reason) => {
                info!(?reason, "Catalog running in degraded mode");
                Backend::Degraded(reason)
            }
        };
        Self { backend }
    }

    pub fn is_live(&self) -> bool {
        matches!(self.backend, Backend::Live { .. })
    }

    pub fn unavailable_reason(&self) -> Option<&UnavailableReason> {
        match &self.backend {
            Backend::Live { .. } => None,
            Backend::Degraded(reason) => Some(reason),
        }
    }

    /// All organizations by name, each with its projects newest first.
    pub async fn list_organizations(&self) -> Sourced<Vec<OrganizationWithProjects>> {
        let Backend::Live { organizations, projects } = &self.backend else {
            return Sourced::mock(sample_organizations());
        };

        match load_all(organizations, projects).await {
            Ok(orgs) => Sourced::live(orgs),
            Err(e) => {
                warn!(error = %e, "Listing organizations failed, serving sample data");
                Sourced::mock(sample_organizations())
            }
        }
    }

    /// Live lookups that fail fall back to the sample dataset when it has
    /// this id; otherwise the store error is returned.
    pub async fn find_organization(
        &self,
        id: &str,
    ) -> DaoResult<Sourced<OrganizationWithProjects>> {
        let Backend::Live { organizations, projects } = &self.backend else {
            return sample_organization(id).map(Sourced::mock);
        };

        let loaded = async {
            let organization = organizations.base.find_by_id(id).await?;
            let projects = projects.find_by_organization(id).await?;
            Ok::<_, DaoError>(OrganizationWithProjects { organization, projects })
        };

        match loaded.await {
            Ok(org) => Ok(Sourced::live(org)),
            Err(DaoError::NotFound) => Err(DaoError::NotFound),
            Err(e) => {
                warn!(
                    error = %e,
                    organization_id = id,
                    "Loading organization failed, serving sample data"
                );
                sample_organization(id).map(Sourced::mock).map_err(|_| e)
            }
        }
    }

    /// Same fallback rule as [`Catalog::find_organization`].
    pub async fn find_project(&self, id: &str) -> DaoResult<Sourced<Project>> {
        let Backend::Live { projects, .. } = &self.backend else {
            return sample_project(id).map(Sourced::mock);
        };

        match projects.base.find_by_id(id).await {
            Ok(project) => Ok(Sourced::live(project)),
            Err(DaoError::NotFound) => Err(DaoError::NotFound),
            Err(e) => {
                warn!(error = %e, project_id = id, "Loading project failed, serving sample data");
                sample_project(id).map(Sourced::mock).map_err(|_| e)
            }
        }
    }

    pub async fn create_organization(
        &self,
        name: String,
        logo: String,
        plan: Plan,
    ) -> DaoResult<Sourced<OrganizationWithProjects>> {
        match &self.backend {
            Backend::Live { organizations, .. } => {
                let organization = organizations.create(name, logo, plan).await?;
                info!(organization_id = %organization.id, "Organization created");
                Ok(Sourced::live(OrganizationWithProjects::empty(organization)))
            }
            Backend::Degraded(_) => {
                let organization = Organization {
                    id: generate_id(ORGANIZATION_PREFIX),
                    name,
                    logo,
                    plan,
                };
                Ok(Sourced::mock(OrganizationWithProjects::empty(organization)))
            }
        }
    }

    pub async fn create_project(
        &self,
        organization_id: &str,
        draft: ProjectDraft,
    ) -> DaoResult<Sourced<Project>> {
        match &self.backend {
            Backend::Live { projects, .. } => {
                let project = projects.create(organization_id, draft).await?;
                info!(project_id = %project.id, organization_id, "Project created");
                Ok(Sourced::live(project))
            }
            Backend::Degraded(_) => Ok(Sourced::mock(draft.into_project(
                generate_id(PROJECT_PREFIX),
                organization_id.to_string(),
                DateTime::now(),
            ))),
        }
    }

    /// Sets the status only. Does not record an activity item; `false`
    /// means nothing was updated.
    pub async fn update_project_status(
        &self,
        id: &str,
        status: ProjectStatus,
    ) -> DaoResult<Sourced<bool>> {
        match &self.backend {
            Backend::Live { projects, .. } => {
                Ok(Sourced::live(projects.update_status(id, status).await?))
            }
            Backend::Degraded(_) => Ok(Sourced::mock(false)),
        }
    }

    /// Sets the status and records `item` in the feed as one write, so a
    /// stored status change always has its feed entry.
    pub async fn change_project_status(
        &self,
        id: &str,
        status: ProjectStatus,
        item: &ActivityItem,
    ) -> DaoResult<Sourced<bool>> {
        match &self.backend {
            Backend::Live { projects, .. } => {
                Ok(Sourced::live(projects.change_status(id, status, item).await?))
            }
            Backend::Degraded(_) => Ok(Sourced::mock(false)),
        }
    }

    pub async fn add_project_activity(
        &self,
        id: &str,
        item: &ActivityItem,
    ) -> DaoResult<Sourced<()>> {
        match &self.backend {
            Backend::Live { projects, .. } => {
                projects.prepend_activity(id, item).await?;
                Ok(Sourced::live(()))
            }
            Backend::Degraded(_) => Ok(Sourced::mock(())),
        }
    }
}

async fn load_all(
    organizations: &OrganizationDao,
    projects: &ProjectDao,
) -> DaoResult<Vec<OrganizationWithProjects>> {
    let mut result = Vec::new();
    for organization in organizations.find_all_by_name().await? {
        let projects = projects.find_by_organization(&organization.id).await?;
        result.push(OrganizationWithProjects { organization, projects });
    }
    Ok(result)
}

fn sample_organization(id: &str) -> DaoResult<OrganizationWithProjects> {
    sample_organizations()
        .into_iter()
        .find(|o| o.organization.id == id)
        .ok_or(DaoError::NotFound)
}

fn sample_project(id: &str) -> DaoResult<Project> {
    sample_organizations()
        .into_iter()
        .flat_map(|o| o.projects)
        .find(|p| p.id == id)
        .ok_or(DaoError::NotFound)
}
