mod get_contact;
mod send_message;
mod update_contact;

pub use get_contact::*;
pub use send_message::*;
pub use update_contact::*;
