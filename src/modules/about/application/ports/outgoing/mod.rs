pub mod about_repository;

pub use about_repository::{
    AboutPage, AboutRepository, AboutRepositoryError, AboutUpdate, EducationEntry,
};
