mod delete_photo;
mod delete_resume;
mod get_home;
mod update_home;
mod upload_photo;
mod upload_resume;

pub use delete_photo::*;
pub use delete_resume::*;
pub use get_home::*;
pub use update_home::*;
pub use upload_photo::*;
pub use upload_resume::*;
