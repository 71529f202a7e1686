pub mod project_repository;

pub use project_repository::{
    CreateProjectData, ProjectRepository, ProjectRepositoryError, ProjectView, ResolvedProject,
    UpdateProjectData,
};
