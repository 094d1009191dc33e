use serde::{Deserialize, Serialize};

use super::project::Project;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub logo: String,
    #[serde(default)]
    pub plan: Plan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    #[default]
    Standard,
    Pro,
}

impl Plan {
    pub fn as_str(&self) -> &'static str {
        match self {
            Plan::Standard => "standard",
            Plan::Pro => "pro",
        }
    }
}

impl Organization {
    pub const COLLECTION: &'static str = "organizations";
}

/// An organization together with its projects, newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct OrganizationWithProjects {
    pub organization: Organization,
    pub projects: Vec<Project>,
}

impl OrganizationWithProjects {
    pub fn empty(organization: Organization) -> Self {
        Self {
            organization,
            projects: Vec::new(),
        }
    }
}
