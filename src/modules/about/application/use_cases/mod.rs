pub mod get_about;
pub mod update_about;
