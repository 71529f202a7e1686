use async_trait::async_trait;

use crate::contact::application::ports::outgoing::{
    ContactDetails, ContactRepository, ContactRepositoryError, ContactUpdate,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateContactError {
    #[error("Update failed: {0}")]
    RepositoryError(String),
}

impl From<ContactRepositoryError> for UpdateContactError {
    fn from(err: ContactRepositoryError) -> Self {
        UpdateContactError::RepositoryError(err.to_string())
    }
}

#[async_trait]
pub trait IUpdateContactUseCase: Send + Sync {
    async fn execute(&self, update: ContactUpdate) -> Result<ContactDetails, UpdateContactError>;
}

pub struct UpdateContactUseCase<R>
where
    R: ContactRepository,
{
    repo: R,
}

impl<R> UpdateContactUseCase<R>
where
    R: ContactRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> IUpdateContactUseCase for UpdateContactUseCase<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(&self, update: ContactUpdate) -> Result<ContactDetails, UpdateContactError> {
        self.repo
            .upsert(update)
            .await
            .map_err(UpdateContactError::from)
    }
}
