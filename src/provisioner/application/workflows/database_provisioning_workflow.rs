use chrono::Utc;
use tracing::Instrument;

use crate::provisioner::{
    domain::model::{
        commands::provision_database_command::ProvisionDatabaseCommand,
        entities::provisioning_report::ProvisioningReport,
        enums::{
            administration_error::AdministrationError, provisioning_step::ProvisioningStep,
            step_disposition::StepDisposition, step_outcome::StepOutcome,
            workflow_result::WorkflowResult,
        },
        value_objects::provisioning_run_id::ProvisioningRunId,
    },
    infrastructure::persistence::repositories::database_administration_repository::DatabaseAdministrationRepository,
};

/// Creates the database, creates the same-named user, assigns its password when the user is
/// new in this run, and grants it all privileges on the database.
///
/// An existing database or user is accepted so a half-provisioned target can be re-run. An
/// existing user keeps its password. Grant has no such carve-out. The executor is borrowed;
/// opening and closing it is the caller's job.
pub async fn provision(
    executor: &dyn DatabaseAdministrationRepository,
    command: &ProvisionDatabaseCommand,
) -> WorkflowResult {
    let run_id = ProvisioningRunId::new_random();
    let span = tracing::info_span!(
        "provision_database",
        %run_id,
        database = command.database_name().value()
    );

    run_steps(executor, command, run_id).instrument(span).await
}

async fn run_steps(
    executor: &dyn DatabaseAdministrationRepository,
    command: &ProvisionDatabaseCommand,
    run_id: ProvisioningRunId,
) -> WorkflowResult {
    let mut report =
        ProvisioningReport::start(run_id, command.database_name().clone(), Utc::now());

    match StepOutcome::classify(executor.create_database(command.database_name()).await) {
        StepOutcome::AlreadyExists => {
            tracing::info!("database already exists");
            report.record(ProvisioningStep::CreateDatabase, StepDisposition::AlreadyExisted);
        }
        StepOutcome::Success { has_effect } => {
            tracing::info!("created database");
            report.record(ProvisioningStep::CreateDatabase, applied(has_effect));
        }
        StepOutcome::Failure(error) => return failed(ProvisioningStep::CreateDatabase, error),
    }

    let user_created =
        match StepOutcome::classify(executor.create_database_user(command.username()).await) {
            StepOutcome::AlreadyExists => {
                tracing::info!(user = command.username().value(), "database user already present");
                report.record(ProvisioningStep::CreateUser, StepDisposition::AlreadyExisted);
                false
            }
            StepOutcome::Success { has_effect } => {
                tracing::info!(user = command.username().value(), "created database user");
                report.record(ProvisioningStep::CreateUser, applied(has_effect));
                true
            }
            StepOutcome::Failure(error) => return failed(ProvisioningStep::CreateUser, error),
        };
    report.set_user_created(user_created);

    if user_created {
        match executor
            .assign_password(command.username(), command.password())
            .await
        {
            Ok(effect) => {
                tracing::info!("assigned database user password");
                report.record(ProvisioningStep::AssignPassword, applied(effect.is_some()));
            }
            Err(error) => return failed(ProvisioningStep::AssignPassword, error),
        }
    } else {
        tracing::debug!("user was not created in this run; keeping its password");
        report.record(ProvisioningStep::AssignPassword, StepDisposition::Skipped);
    }

    match executor
        .grant_privileges(command.database_name(), command.username())
        .await
    {
        Ok(effect) => {
            tracing::info!("granted privileges on database");
            report.record(ProvisioningStep::GrantPrivileges, applied(effect.is_some()));
        }
        Err(error) => return failed(ProvisioningStep::GrantPrivileges, error),
    }

    WorkflowResult::Ok(report.finish(Utc::now()))
}

fn applied(has_effect: bool) -> StepDisposition {
    if has_effect {
        StepDisposition::Applied
    } else {
        StepDisposition::AppliedWithoutEffect
    }
}

fn failed(step: ProvisioningStep, error: AdministrationError) -> WorkflowResult {
    tracing::warn!(step = step.as_str(), error = %error, "provisioning step failed");
    WorkflowResult::Failed { error, step }
}
