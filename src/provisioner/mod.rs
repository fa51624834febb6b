use std::sync::Arc;

use axum::Router;

use crate::{
    config::app_config::AppConfig,
    provisioner::{
        application::command_services::database_provisioning_command_service_impl::DatabaseProvisioningCommandServiceImpl,
        infrastructure::persistence::repositories::postgres::sqlx_database_administration_connector_impl::SqlxDatabaseAdministrationConnectorImpl,
        interfaces::rest::controllers::provisioner_rest_controller::{
            ProvisionerRestControllerState, router,
        },
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

/// Administrative sessions are opened per request, so building the router never touches the
/// cluster.
pub fn build_provisioner_router(config: &AppConfig) -> Router {
    let connector = Arc::new(SqlxDatabaseAdministrationConnectorImpl::new(config));
    let command_service = Arc::new(DatabaseProvisioningCommandServiceImpl::new(connector));

    router(ProvisionerRestControllerState { command_service })
}
