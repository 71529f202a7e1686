pub mod get_contact;
pub mod send_message;
pub mod update_contact;
