mod get_about;
mod update_about;

pub use get_about::*;
pub use update_about::*;
