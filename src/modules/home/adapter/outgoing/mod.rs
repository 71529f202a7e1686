pub mod home_repository_postgres;
pub mod sea_orm_entity;

pub use home_repository_postgres::HomeRepositoryPostgres;
