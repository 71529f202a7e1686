mod create_project;
mod delete_project;
mod delete_project_image;
mod get_projects;
mod update_project;
mod upload_project_image;

pub use create_project::*;
pub use delete_project::*;
pub use delete_project_image::*;
pub use get_projects::*;
pub use update_project::*;
pub use upload_project_image::*;
