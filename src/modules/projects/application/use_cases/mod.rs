pub mod attach_project_image;
pub mod create_project;
pub mod delete_project;
pub mod get_projects;
pub mod remove_project_image;
pub mod update_project;
