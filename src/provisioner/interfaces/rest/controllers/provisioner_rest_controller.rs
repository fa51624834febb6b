use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, post},
};
use validator::Validate;

use crate::provisioner::{
    domain::{
        model::{
            commands::{
                provision_database_command::ProvisionDatabaseCommand,
                teardown_database_command::TeardownDatabaseCommand,
            },
            enums::provisioner_domain_error::ProvisionerDomainError,
        },
        services::database_provisioning_command_service::DatabaseProvisioningCommandService,
    },
    interfaces::rest::resources::{
        error_response_resource::ErrorResponseResource,
        provision_database_request_resource::ProvisionDatabaseRequestResource,
        provisioning_report_resource::ProvisioningReportResource,
    },
};

#[derive(Clone)]
pub struct ProvisionerRestControllerState {
    pub command_service: Arc<dyn DatabaseProvisioningCommandService>,
}

pub fn router(state: ProvisionerRestControllerState) -> Router {
    Router::new()
        .route("/provisioner/databases", post(provision_database))
        .route(
            "/provisioner/databases/:database_name",
            delete(teardown_database),
        )
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/provisioner/databases",
    tag = "provisioner",
    request_body = ProvisionDatabaseRequestResource,
    responses(
        (status = 201, description = "Database and user provisioned", body = ProvisioningReportResource),
        (status = 400, description = "Invalid payload", body = ErrorResponseResource),
        (status = 502, description = "A provisioning step failed", body = ErrorResponseResource),
        (status = 503, description = "Administrative connection unavailable", body = ErrorResponseResource)
    )
)]
pub async fn provision_database(
    State(state): State<ProvisionerRestControllerState>,
    Json(request): Json<ProvisionDatabaseRequestResource>,
) -> Result<
    (StatusCode, Json<ProvisioningReportResource>),
    (StatusCode, Json<ErrorResponseResource>),
> {
    if let Err(validation_error) = request.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponseResource {
                message: validation_error.to_string(),
            }),
        ));
    }

    let command =
        ProvisionDatabaseCommand::new(request.name, request.password).map_err(map_domain_error)?;

    let report = state
        .command_service
        .handle_provision(command)
        .await
        .map_err(map_domain_error)?;

    Ok((
        StatusCode::CREATED,
        Json(ProvisioningReportResource::from(&report)),
    ))
}

#[utoipa::path(
    delete,
    path = "/provisioner/databases/{database_name}",
    tag = "provisioner",
    params(("database_name" = String, Path, description = "Database and user identifier")),
    responses(
        (status = 204, description = "Database and user dropped"),
        (status = 400, description = "Invalid database name", body = ErrorResponseResource),
        (status = 502, description = "A teardown step failed", body = ErrorResponseResource),
        (status = 503, description = "Administrative connection unavailable", body = ErrorResponseResource)
    )
)]
pub async fn teardown_database(
    State(state): State<ProvisionerRestControllerState>,
    Path(database_name): Path<String>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponseResource>)> {
    let command = TeardownDatabaseCommand::new(database_name).map_err(map_domain_error)?;

    state
        .command_service
        .handle_teardown(command)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

fn map_domain_error(error: ProvisionerDomainError) -> (StatusCode, Json<ErrorResponseResource>) {
    let status = match error {
        ProvisionerDomainError::InvalidDatabaseName
        | ProvisionerDomainError::InvalidDatabasePassword => StatusCode::BAD_REQUEST,
        ProvisionerDomainError::AdministrationConnectionFailed(_) => {
            StatusCode::SERVICE_UNAVAILABLE
        }
        ProvisionerDomainError::ProvisioningStepFailed { .. }
        | ProvisionerDomainError::TeardownStepFailed { .. } => StatusCode::BAD_GATEWAY,
    };

    (
        status,
        Json(ErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
