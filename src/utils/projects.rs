use std::collections::HashSet;

use tracing::info;

use crate::models::{error::ProjectsError, project::CodeProject};

const BUNDLED_PROJECTS: &str = include_str!("../../data/projects.json");

/// Ordered list of code projects shown on the work page.
#[derive(Debug, Clone, Default)]
pub struct ProjectCatalog {
    projects: Vec<CodeProject>,
}

impl ProjectCatalog {
    pub fn from_json(raw: &str) -> Result<Self, ProjectsError> {
        let projects: Vec<CodeProject> = serde_json::from_str(raw)?;
        let mut seen = HashSet::new();
        for project in &projects {
            if !seen.insert(project.slug.as_str()) {
                return Err(ProjectsError::DuplicateSlug(project.slug.clone()));
            }
        }
        Ok(Self { projects })
    }

    pub fn bundled() -> Result<Self, ProjectsError> {
        Self::from_json(BUNDLED_PROJECTS)
    }

    pub async fn load(path: Option<&str>) -> Result<Self, ProjectsError> {
        let catalog = match path {
            Some(path) => {
                let raw = tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| ProjectsError::Read {
                        path: path.to_string(),
                        source,
                    })?;
                Self::from_json(&raw)?
            }
            None => Self::bundled()?,
        };
        info!(projects = catalog.projects.len(), "project catalog loaded");
        Ok(catalog)
    }

    pub fn all(&self) -> &[CodeProject] {
        &self.projects
    }

    pub fn get(&self, slug: &str) -> Result<&CodeProject, ProjectsError> {
        self.projects
            .iter()
            .find(|p| p.slug == slug)
            .ok_or_else(|| ProjectsError::NotFound(slug.to_string()))
    }
}
