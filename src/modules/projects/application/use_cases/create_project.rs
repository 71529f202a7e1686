use async_trait::async_trait;
use uuid::Uuid;

use crate::projects::application::ports::outgoing::{
    CreateProjectData, ProjectRepository, ProjectRepositoryError, ProjectView,
};

/// Input before id assignment; the id is caller-supplied or generated here.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub featured: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateProjectError {
    #[error("Project id already exists")]
    IdAlreadyExists,

    #[error("Create failed: {0}")]
    RepositoryError(String),
}

impl From<ProjectRepositoryError> for CreateProjectError {
    fn from(err: ProjectRepositoryError) -> Self {
        match err {
            ProjectRepositoryError::AppIdAlreadyExists => CreateProjectError::IdAlreadyExists,
            other => CreateProjectError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait ICreateProjectUseCase: Send + Sync {
    async fn execute(&self, project: NewProject) -> Result<ProjectView, CreateProjectError>;
}

pub struct CreateProjectUseCase<R>
where
    R: ProjectRepository,
{
    repo: R,
}

impl<R> CreateProjectUseCase<R>
where
    R: ProjectRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> ICreateProjectUseCase for CreateProjectUseCase<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, project: NewProject) -> Result<ProjectView, CreateProjectError> {
        let app_id = project
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        self.repo
            .create(CreateProjectData {
                app_id,
                title: project.title,
                description: project.description,
                technologies: project.technologies,
                live_url: project.live_url,
                github_url: project.github_url,
                featured: project.featured,
            })
            .await
            .map_err(CreateProjectError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projects::application::ports::outgoing::{ResolvedProject, UpdateProjectData};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct RecordingRepo {
        created: Arc<Mutex<Vec<CreateProjectData>>>,
    }

    #[async_trait]
    impl ProjectRepository for RecordingRepo {
        async fn list(&self) -> Result<Vec<ProjectView>, ProjectRepositoryError> {
            unimplemented!()
        }

        async fn create(
            &self,
            data: CreateProjectData,
        ) -> Result<ProjectView, ProjectRepositoryError> {
            self.created.lock().unwrap().push(data.clone());
            Ok(ProjectView {
                id: data.app_id,
                title: data.title,
                description: data.description,
                technologies: data.technologies,
                live_url: data.live_url,
                github_url: data.github_url,
                featured: data.featured,
                image_url: None,
            })
        }

        async fn update(
            &self,
            _app_id: &str,
            _data: UpdateProjectData,
        ) -> Result<ProjectView, ProjectRepositoryError> {
            unimplemented!()
        }

        async fn delete(&self, _app_id: &str) -> Result<(), ProjectRepositoryError> {
            unimplemented!()
        }

        async fn resolve(&self, _id: &str) -> Result<ResolvedProject, ProjectRepositoryError> {
            unimplemented!()
        }

        async fn set_image_url(
            &self,
            _internal_id: uuid::Uuid,
            _url: Option<String>,
        ) -> Result<ProjectView, ProjectRepositoryError> {
            unimplemented!()
        }
    }

    fn new_project(id: Option<&str>) -> NewProject {
        NewProject {
            id: id.map(String::from),
            title: "Site".to_string(),
            description: "desc".to_string(),
            technologies: vec!["Rust".to_string()],
            live_url: None,
            github_url: None,
            featured: true,
        }
    }

    #[tokio::test]
    async fn test_create_keeps_caller_supplied_id() {
        let repo = RecordingRepo::default();
        let use_case = CreateProjectUseCase::new(repo.clone());

        let project = use_case.execute(new_project(Some("my-site"))).await.unwrap();

        assert_eq!(project.id, "my-site");
    }

    #[tokio::test]
    async fn test_create_generates_id_when_missing() {
        let repo = RecordingRepo::default();
        let use_case = CreateProjectUseCase::new(repo.clone());

        let project = use_case.execute(new_project(None)).await.unwrap();

        assert!(
            Uuid::parse_str(&project.id).is_ok(),
            "Generated id should be a UUID, got {}",
            project.id
        );
    }

    #[tokio::test]
    async fn test_create_generates_id_for_blank_input() {
        let repo = RecordingRepo::default();
        let use_case = CreateProjectUseCase::new(repo.clone());

        let project = use_case.execute(new_project(Some("  "))).await.unwrap();

        assert!(Uuid::parse_str(&project.id).is_ok());
    }
}
