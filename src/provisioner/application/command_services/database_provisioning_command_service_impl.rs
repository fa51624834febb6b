use std::sync::Arc;

use async_trait::async_trait;

use crate::provisioner::{
    application::workflows::{
        database_provisioning_workflow::provision, database_teardown_workflow::teardown,
    },
    domain::{
        model::{
            commands::{
                provision_database_command::ProvisionDatabaseCommand,
                teardown_database_command::TeardownDatabaseCommand,
            },
            entities::provisioning_report::ProvisioningReport,
            enums::{
                provisioner_domain_error::ProvisionerDomainError, workflow_result::WorkflowResult,
            },
        },
        services::database_provisioning_command_service::DatabaseProvisioningCommandService,
    },
    infrastructure::persistence::repositories::database_administration_connector::DatabaseAdministrationConnector,
};

pub struct DatabaseProvisioningCommandServiceImpl {
    connector: Arc<dyn DatabaseAdministrationConnector>,
}

impl DatabaseProvisioningCommandServiceImpl {
    pub fn new(connector: Arc<dyn DatabaseAdministrationConnector>) -> Self {
        Self { connector }
    }
}

#[async_trait]
impl DatabaseProvisioningCommandService for DatabaseProvisioningCommandServiceImpl {
    async fn handle_provision(
        &self,
        command: ProvisionDatabaseCommand,
    ) -> Result<ProvisioningReport, ProvisionerDomainError> {
        let executor = self.connector.open().await?;

        let outcome = provision(executor.as_ref(), &command).await;
        executor.close().await;

        match outcome {
            WorkflowResult::Ok(report) => {
                tracing::info!(
                    run_id = %report.run_id(),
                    database = report.database_name().value(),
                    user_created = report.user_created(),
                    "database provisioned"
                );
                Ok(report)
            }
            WorkflowResult::Failed { error, step } => {
                tracing::error!(
                    database = command.database_name().value(),
                    step = step.as_str(),
                    error = %error,
                    "database provisioning aborted"
                );
                Err(ProvisionerDomainError::ProvisioningStepFailed {
                    step,
                    source: error,
                })
            }
        }
    }

    async fn handle_teardown(
        &self,
        command: TeardownDatabaseCommand,
    ) -> Result<(), ProvisionerDomainError> {
        let executor = self.connector.open().await?;

        let outcome = teardown(executor.as_ref(), &command).await;
        executor.close().await;

        outcome
    }
}
