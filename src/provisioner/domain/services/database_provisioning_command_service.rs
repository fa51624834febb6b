use async_trait::async_trait;

use crate::provisioner::domain::model::{
    commands::{
        provision_database_command::ProvisionDatabaseCommand,
        teardown_database_command::TeardownDatabaseCommand,
    },
    entities::provisioning_report::ProvisioningReport,
    enums::provisioner_domain_error::ProvisionerDomainError,
};

#[async_trait]
pub trait DatabaseProvisioningCommandService: Send + Sync {
    async fn handle_provision(
        &self,
        command: ProvisionDatabaseCommand,
    ) -> Result<ProvisioningReport, ProvisionerDomainError>;

    async fn handle_teardown(
        &self,
        command: TeardownDatabaseCommand,
    ) -> Result<(), ProvisionerDomainError>;
}
