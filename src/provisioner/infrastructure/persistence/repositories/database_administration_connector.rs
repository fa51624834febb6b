use async_trait::async_trait;

use crate::provisioner::{
    domain::model::enums::provisioner_domain_error::ProvisionerDomainError,
    infrastructure::persistence::repositories::database_administration_repository::DatabaseAdministrationRepository,
};

/// Opens a fresh administrative session; the caller must `close` it.
#[async_trait]
pub trait DatabaseAdministrationConnector: Send + Sync {
    async fn open(&self) -> Result<Box<dyn DatabaseAdministrationRepository>, ProvisionerDomainError>;
}
