pub mod contact_repository;

pub use contact_repository::{
    ContactDetails, ContactRepository, ContactRepositoryError, ContactUpdate, SocialLinks,
};
