use async_trait::async_trait;

use crate::provisioner::domain::model::{
    enums::administration_error::AdministrationError,
    value_objects::{
        database_password::DatabasePassword, database_username::DatabaseUsername,
        provisioned_database_name::ProvisionedDatabaseName, statement_effect::StatementEffect,
    },
};

/// `Ok(None)` means the statement ran but the driver reported nothing back.
pub type AdministrationResult = Result<Option<StatementEffect>, AdministrationError>;

/// Privileged statements issued against the cluster's administrative session.
#[async_trait]
pub trait DatabaseAdministrationRepository: Send + Sync {
    async fn create_database(
        &self,
        database_name: &ProvisionedDatabaseName,
    ) -> AdministrationResult;

    async fn create_database_user(&self, username: &DatabaseUsername) -> AdministrationResult;

    async fn assign_password(
        &self,
        username: &DatabaseUsername,
        password: &DatabasePassword,
    ) -> AdministrationResult;

    async fn grant_privileges(
        &self,
        database_name: &ProvisionedDatabaseName,
        username: &DatabaseUsername,
    ) -> AdministrationResult;

    async fn terminate_open_connections(
        &self,
        database_name: &ProvisionedDatabaseName,
    ) -> AdministrationResult;

    async fn drop_database(&self, database_name: &ProvisionedDatabaseName) -> AdministrationResult;

    async fn drop_database_user(&self, username: &DatabaseUsername) -> AdministrationResult;

    async fn close(&self);
}
