pub mod attach_home_file;
pub mod get_home;
pub mod remove_home_file;
pub mod update_home;
