use crate::provisioner::{
    domain::model::{
        commands::teardown_database_command::TeardownDatabaseCommand,
        enums::{
            administration_error::AdministrationError,
            provisioner_domain_error::ProvisionerDomainError, teardown_step::TeardownStep,
        },
    },
    infrastructure::persistence::repositories::database_administration_repository::DatabaseAdministrationRepository,
};

/// Terminates sessions on the database, drops it, then drops its user. Stops at the first
/// failure.
pub async fn teardown(
    executor: &dyn DatabaseAdministrationRepository,
    command: &TeardownDatabaseCommand,
) -> Result<(), ProvisionerDomainError> {
    let terminated = executor
        .terminate_open_connections(command.database_name())
        .await
        .map_err(|source| step_failed(TeardownStep::TerminateConnections, source))?;
    tracing::info!(
        database = command.database_name().value(),
        sessions = terminated.map(|effect| effect.rows_affected()).unwrap_or(0),
        "terminated open connections"
    );

    executor
        .drop_database(command.database_name())
        .await
        .map_err(|source| step_failed(TeardownStep::DropDatabase, source))?;
    tracing::info!(database = command.database_name().value(), "dropped database");

    executor
        .drop_database_user(command.username())
        .await
        .map_err(|source| step_failed(TeardownStep::DropUser, source))?;
    tracing::info!(user = command.username().value(), "dropped database user");

    Ok(())
}

fn step_failed(step: TeardownStep, source: AdministrationError) -> ProvisionerDomainError {
    tracing::warn!(step = step.as_str(), error = %source, "teardown step failed");
    ProvisionerDomainError::TeardownStepFailed { step, source }
}
