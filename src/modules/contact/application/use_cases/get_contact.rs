use async_trait::async_trait;

use crate::contact::application::ports::outgoing::{
    ContactDetails, ContactRepository, ContactRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetContactError {
    #[error("Query failed: {0}")]
    RepositoryError(String),
}

impl From<ContactRepositoryError> for GetContactError {
    fn from(err: ContactRepositoryError) -> Self {
        GetContactError::RepositoryError(err.to_string())
    }
}

#[async_trait]
pub trait IGetContactUseCase: Send + Sync {
    async fn execute(&self) -> Result<ContactDetails, GetContactError>;
}

pub struct GetContactUseCase<R>
where
    R: ContactRepository,
{
    repo: R,
}

impl<R> GetContactUseCase<R>
where
    R: ContactRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> IGetContactUseCase for GetContactUseCase<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(&self) -> Result<ContactDetails, GetContactError> {
        self.repo
            .get_or_initialize()
            .await
            .map_err(GetContactError::from)
    }
}
